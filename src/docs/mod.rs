//! 使用说明文本。命令行长帮助和 `doc` 子命令共用同一份文本。

pub const USAGE: &str = include_str!("usage.md");

pub const DEFAULT_TITLE: &str = "git-needle";

/// GitHub 风格的标题锚点
pub fn anchor(heading: &str) -> String {
    heading
        .trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            c if c.is_alphanumeric() || c == '-' || c == '_' => Some(c),
            _ => None,
        })
        .collect()
}

/// 由 `## ` 二级标题生成目录
pub fn table_of_contents(text: &str) -> String {
    text.lines()
        .filter_map(|line| line.strip_prefix("## "))
        .map(|heading| format!("- [{}](#{})", heading.trim(), anchor(heading)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 生成 Markdown 文档
pub fn render(title: &str, toc: bool) -> String {
    let mut doc = format!("# {}\n\n", title);
    if toc {
        doc.push_str(&table_of_contents(USAGE));
        doc.push_str("\n\n");
    }
    doc.push_str(USAGE);
    doc
}
