use super::backend::GitBackend;
use crate::infrastructure::{NeedleError, NeedleResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::trace;

/// pickaxe 输出中每个提交的头部行：`"<hash> <unix 时间戳>"`
pub const PICKAXE_FORMAT: &str = "--pretty=format:\"%H %ct\"";

/// 通过 `git` 子进程实现 [`GitBackend`]
#[derive(Debug, Clone)]
pub struct GitCli {
    repo: PathBuf,
}

impl GitCli {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self { repo: repo.into() }
    }

    pub fn repo(&self) -> &Path {
        &self.repo
    }

    /// 运行 git 并返回完整的 stdout；非零退出码视为错误
    async fn run(&self, args: &[&str]) -> NeedleResult<Vec<u8>> {
        let command = format!("git {}", args.join(" "));
        trace!(%command, "running git");

        // 非 ASCII 路径按原样输出，不做 C 风格转义
        let output = Command::new("git")
            .args(["-c", "core.quotePath=false"])
            .args(args)
            .current_dir(&self.repo)
            .output()
            .await
            .map_err(|source| NeedleError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(NeedleError::git(command, output.status, &output.stderr));
        }

        Ok(output.stdout)
    }

    async fn run_text(&self, args: &[&str]) -> NeedleResult<String> {
        let stdout = self.run(args).await?;
        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }

    async fn run_lines(&self, args: &[&str]) -> NeedleResult<Vec<String>> {
        let text = self.run_text(args).await?;
        Ok(non_empty_lines(&text))
    }
}

fn non_empty_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// 拆分 `-z` 输出：路径以 NUL 分隔，原样保留首尾空白
fn nul_separated(bytes: &[u8]) -> Vec<String> {
    bytes
        .split(|&b| b == 0)
        .filter(|path| !path.is_empty())
        .map(|path| String::from_utf8_lossy(path).into_owned())
        .collect()
}

/// 解析 `git rev-list --parents -n 1` 的输出，返回第一个父提交
pub fn parse_parent_line(line: &str) -> Option<String> {
    line.split_whitespace().nth(1).map(str::to_string)
}

#[async_trait]
impl GitBackend for GitCli {
    async fn all_commits(&self) -> NeedleResult<Vec<String>> {
        self.run_lines(&["rev-list", "--all"]).await
    }

    async fn commits_in_range(&self, newer: &str, older: &str) -> NeedleResult<Vec<String>> {
        let range = format!("{}..{}", older, newer);
        self.run_lines(&["rev-list", &range]).await
    }

    async fn commit_date(&self, hash: &str) -> NeedleResult<String> {
        let text = self.run_text(&["show", "-s", "--format=%ci", hash]).await?;
        Ok(text.trim().to_string())
    }

    async fn parent(&self, hash: &str) -> NeedleResult<Option<String>> {
        let text = self
            .run_text(&["rev-list", "--parents", "-n", "1", hash])
            .await
            .map_err(|e| NeedleError::parent_resolution(hash, e.to_string()))?;
        let line = text.lines().next().unwrap_or_default();
        if line.trim().is_empty() {
            return Err(NeedleError::parent_resolution(hash, "unknown commit"));
        }
        Ok(parse_parent_line(line))
    }

    async fn diff(&self, older: &str, newer: &str) -> NeedleResult<String> {
        self.run_text(&["diff", older, newer]).await
    }

    async fn show(&self, hash: &str) -> NeedleResult<String> {
        self.run_text(&["show", hash]).await
    }

    async fn changed_files(&self, hash: &str) -> NeedleResult<Vec<String>> {
        let stdout = self
            .run(&["diff-tree", "-z", "--no-commit-id", "--name-only", "-r", "--root", hash])
            .await?;
        Ok(nul_separated(&stdout))
    }

    async fn file_content(&self, hash: &str, path: &str) -> NeedleResult<Vec<u8>> {
        let object = format!("{}:{}", hash, path);
        self.run(&["show", &object]).await
    }

    async fn pickaxe(&self, needle: &str) -> NeedleResult<String> {
        let pickaxe = format!("-S{}", needle);
        self.run_text(&["log", &pickaxe, "--all", PICKAXE_FORMAT, "--name-only"])
            .await
    }
}
