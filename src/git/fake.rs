//! 内存中的 [`GitBackend`] 实现，仅用于测试。

use super::backend::GitBackend;
use crate::infrastructure::{NeedleError, NeedleResult};
use async_trait::async_trait;
use std::collections::HashSet;
use std::io;
use std::sync::Mutex;

#[derive(Debug, Clone, Default)]
pub struct FakeCommit {
    pub hash: String,
    pub date: String,
    pub parent: Option<String>,
    /// 相对父提交的 diff，根提交则是 show 的输出
    pub introduced: String,
    pub files: Vec<(String, Vec<u8>)>,
}

impl FakeCommit {
    pub fn new(hash: &str, parent: Option<&str>, introduced: &str) -> Self {
        Self {
            hash: hash.to_string(),
            date: format!("2024-01-01 00:00:00 +0000 ({})", hash),
            parent: parent.map(str::to_string),
            introduced: introduced.to_string(),
            files: Vec::new(),
        }
    }

    pub fn with_file(mut self, path: &str, content: &[u8]) -> Self {
        self.files.push((path.to_string(), content.to_vec()));
        self
    }
}

/// 提交按新到旧排列
#[derive(Debug, Default)]
pub struct FakeGit {
    pub commits: Vec<FakeCommit>,
    pub broken_parents: HashSet<String>,
    pub pickaxe_output: String,
    calls: Mutex<Vec<String>>,
}

fn not_found(what: impl Into<String>) -> NeedleError {
    NeedleError::Io(io::Error::new(io::ErrorKind::NotFound, what.into()))
}

impl FakeGit {
    pub fn new(commits: Vec<FakeCommit>) -> Self {
        Self {
            commits,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn position(&self, hash: &str) -> Option<usize> {
        self.commits.iter().position(|c| c.hash == hash)
    }

    fn find(&self, hash: &str) -> NeedleResult<&FakeCommit> {
        self.commits
            .iter()
            .find(|c| c.hash == hash)
            .ok_or_else(|| not_found(format!("unknown revision {}", hash)))
    }
}

#[async_trait]
impl GitBackend for FakeGit {
    async fn all_commits(&self) -> NeedleResult<Vec<String>> {
        self.record("all_commits".to_string());
        Ok(self.commits.iter().map(|c| c.hash.clone()).collect())
    }

    async fn commits_in_range(&self, newer: &str, older: &str) -> NeedleResult<Vec<String>> {
        self.record(format!("range {}..{}", older, newer));
        let (Some(from), Some(to)) = (self.position(newer), self.position(older)) else {
            return Err(not_found("bad revision range"));
        };
        Ok(self
            .commits
            .iter()
            .skip(from)
            .take(to.saturating_sub(from))
            .map(|c| c.hash.clone())
            .collect())
    }

    async fn commit_date(&self, hash: &str) -> NeedleResult<String> {
        self.record(format!("date {}", hash));
        Ok(self.find(hash)?.date.clone())
    }

    async fn parent(&self, hash: &str) -> NeedleResult<Option<String>> {
        self.record(format!("parent {}", hash));
        if self.broken_parents.contains(hash) {
            return Err(NeedleError::parent_resolution(hash, "corrupt object"));
        }
        Ok(self.find(hash)?.parent.clone())
    }

    async fn diff(&self, older: &str, newer: &str) -> NeedleResult<String> {
        self.record(format!("diff {} {}", older, newer));
        let (Some(from), Some(to)) = (self.position(newer), self.position(older)) else {
            return Err(not_found("bad diff endpoints"));
        };
        Ok(self
            .commits
            .iter()
            .skip(from)
            .take(to.saturating_sub(from))
            .map(|c| c.introduced.as_str())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    async fn show(&self, hash: &str) -> NeedleResult<String> {
        self.record(format!("show {}", hash));
        Ok(self.find(hash)?.introduced.clone())
    }

    async fn changed_files(&self, hash: &str) -> NeedleResult<Vec<String>> {
        self.record(format!("files {}", hash));
        Ok(self
            .find(hash)?
            .files
            .iter()
            .map(|(path, _)| path.clone())
            .collect())
    }

    async fn file_content(&self, hash: &str, path: &str) -> NeedleResult<Vec<u8>> {
        self.record(format!("content {}:{}", hash, path));
        self.find(hash)?
            .files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, content)| content.clone())
            .ok_or_else(|| not_found(format!("{}:{}", hash, path)))
    }

    async fn pickaxe(&self, needle: &str) -> NeedleResult<String> {
        self.record(format!("pickaxe {}", needle));
        Ok(self.pickaxe_output.clone())
    }
}
