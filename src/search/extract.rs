use colored::Colorize;
use once_cell::sync::Lazy;
use regex::Regex;

/// 提交元数据行（作者、签名等），diff 窗口模式下不参与匹配
static METADATA_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(author|signed-off-by|co-authored-by|reviewed-by|acked-by):").unwrap()
});

/// 一次匹配得到的摘录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchWindow {
    pub excerpt: String,
    pub highlighted: String,
}

impl MatchWindow {
    fn new(excerpt: String, needle: &str) -> Self {
        let highlighted = highlight(&excerpt, needle);
        Self {
            excerpt,
            highlighted,
        }
    }
}

/// 搜索字符串的强调形式
pub fn emphasis(needle: &str) -> String {
    needle.red().bold().to_string()
}

/// 把文本中每一处 needle 替换为强调形式
pub fn highlight(text: &str, needle: &str) -> String {
    if needle.is_empty() {
        return text.to_string();
    }
    text.replace(needle, &emphasis(needle))
}

pub fn is_metadata_line(line: &str) -> bool {
    METADATA_LINE.is_match(line)
}

/// 从 `from` 向前数 `n` 个字符后的字节位置
fn chars_before(text: &str, from: usize, n: usize) -> usize {
    if n == 0 {
        return from;
    }
    text[..from]
        .char_indices()
        .rev()
        .take(n)
        .last()
        .map_or(from, |(i, _)| i)
}

/// 从 `from` 向后数 `n` 个字符后的字节位置
fn chars_after(text: &str, from: usize, n: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(n)
        .map_or(text.len(), |(i, _)| from + i)
}

/// 整段模式：只要出现 needle 就返回全文
pub fn full_match(text: &str, needle: &str) -> Option<MatchWindow> {
    if needle.is_empty() || !text.contains(needle) {
        return None;
    }
    Some(MatchWindow::new(text.to_string(), needle))
}

/// 窗口模式：围绕第一处匹配截取。
///
/// 匹配开始前 `limit / 2` 个字符到匹配结束后 `limit / 2` 个字符，截断在文本边界内。
/// `limit` 为 0 时从匹配开始一直取到文本末尾。
pub fn window(text: &str, needle: &str, limit: usize) -> Option<MatchWindow> {
    if needle.is_empty() {
        return None;
    }
    let match_start = text.find(needle)?;
    let match_end = match_start + needle.len();

    let (start, end) = if limit == 0 {
        (match_start, text.len())
    } else {
        let half = limit / 2;
        (
            chars_before(text, match_start, half),
            chars_after(text, match_end, half),
        )
    };

    Some(MatchWindow::new(text[start..end].to_string(), needle))
}

/// diff 的窗口模式：逐行截取包含 needle 的行，跳过元数据行，用换行拼接
pub fn diff_windows(diff: &str, needle: &str, limit: usize) -> Option<MatchWindow> {
    let windows: Vec<MatchWindow> = diff
        .lines()
        .filter(|line| !is_metadata_line(line))
        .filter_map(|line| window(line, needle, limit))
        .collect();

    if windows.is_empty() {
        return None;
    }

    let excerpt = windows
        .iter()
        .map(|w| w.excerpt.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let highlighted = windows
        .iter()
        .map(|w| w.highlighted.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    Some(MatchWindow {
        excerpt,
        highlighted,
    })
}

/// 根据搜索选项选择摘录方式
#[derive(Debug, Clone)]
pub struct Extractor {
    pub needle: String,
    pub limit: usize,
    pub show_all: bool,
}

impl Extractor {
    pub fn new(needle: impl Into<String>, limit: usize, show_all: bool) -> Self {
        Self {
            needle: needle.into(),
            limit,
            show_all,
        }
    }

    pub fn extract_diff(&self, diff: &str) -> Option<MatchWindow> {
        if self.show_all {
            full_match(diff, &self.needle)
        } else {
            diff_windows(diff, &self.needle, self.limit)
        }
    }

    pub fn extract_file(&self, content: &str) -> Option<MatchWindow> {
        if self.show_all {
            full_match(content, &self.needle)
        } else {
            window(content, &self.needle, self.limit)
        }
    }
}
