use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// `"<hash> <timestamp>"` 形式的头部行；带引号的文件名不会匹配
static HEADER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^"([0-9a-fA-F]{4,64}) (-?\d+)"$"#).unwrap());

/// pickaxe 搜索结果中的一个提交
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickaxeGroup {
    pub hash: String,
    pub timestamp: i64,
    pub files: Vec<String>,
}

impl PickaxeGroup {
    pub fn label(&self) -> String {
        format!("{}  {}", format_timestamp(self.timestamp), self.hash)
    }
}

/// Unix 时间戳转为本地时间；超出范围时原样输出
pub fn format_timestamp(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => timestamp.to_string(),
    }
}

fn parse_header(line: &str) -> Option<(String, i64)> {
    let caps = HEADER_LINE.captures(line)?;
    let timestamp = caps[2].parse().ok()?;
    Some((caps[1].to_string(), timestamp))
}

/// 解析 `git log -S... --pretty=format:"%H %ct" --name-only` 的输出。
///
/// 头部行之后的非引号行都是该提交修改的文件，直到下一个头部行。
/// 相同 (时间戳, hash) 的分组会合并，保持首次出现的顺序。
pub fn parse_pickaxe(output: &str) -> Vec<PickaxeGroup> {
    let mut groups: Vec<PickaxeGroup> = Vec::new();
    let mut current: Option<usize> = None;

    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((hash, timestamp)) = parse_header(line) {
            let existing = groups
                .iter()
                .position(|g| g.hash == hash && g.timestamp == timestamp);
            current = Some(existing.unwrap_or_else(|| {
                groups.push(PickaxeGroup {
                    hash,
                    timestamp,
                    files: Vec::new(),
                });
                groups.len() - 1
            }));
            continue;
        }

        match current {
            Some(index) => groups[index].files.push(line.to_string()),
            None => debug!(line, "ignoring file name before any commit header"),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_commits() {
        let output = "\"aaaa1111 1700000200\"\nsrc/lib.rs\nREADME.md\n\n\"bbbb2222 1700000100\"\nsrc/lib.rs\n";
        let groups = parse_pickaxe(output);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].hash, "aaaa1111");
        assert_eq!(groups[0].timestamp, 1700000200);
        assert_eq!(groups[0].files, vec!["src/lib.rs", "README.md"]);
        assert_eq!(groups[1].hash, "bbbb2222");
        assert_eq!(groups[1].files, vec!["src/lib.rs"]);
    }

    #[test]
    fn test_quoted_file_name_is_not_a_header() {
        let output = "\"abcd1234 1700000000\"\n\"caf\\303\\251.txt\"\nplain.txt";
        let groups = parse_pickaxe(output);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].files, vec!["\"caf\\303\\251.txt\"", "plain.txt"]);
    }

    #[test]
    fn test_repeated_header_merges() {
        let output = "\"abcd 1\"\na.txt\n\"ef01 2\"\nb.txt\n\"abcd 1\"\nc.txt";
        let groups = parse_pickaxe(output);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].files, vec!["a.txt", "c.txt"]);
    }

    #[test]
    fn test_empty_and_orphan_lines() {
        assert!(parse_pickaxe("").is_empty());
        assert!(parse_pickaxe("orphan.txt\n").is_empty());
    }

    #[test]
    fn test_header_without_files() {
        let groups = parse_pickaxe("\"abcd 5\"\n");
        assert_eq!(groups.len(), 1);
        assert!(groups[0].files.is_empty());
    }

    #[test]
    fn test_format_timestamp_out_of_range() {
        assert_eq!(format_timestamp(i64::MAX), i64::MAX.to_string());
        assert_eq!(format_timestamp(0).len(), "1970-01-01 00:00:00".len());
    }
}
