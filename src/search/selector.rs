use crate::git::GitBackend;
use crate::infrastructure::{NeedleError, NeedleResult};
use tracing::{debug, warn};

/// 用户通过 `--hash` 给出的提交选择
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashSelection {
    /// 没有给出 hash：扫描所有引用可达的提交
    All,
    /// 单个提交
    Single(String),
    /// `older..newer`，不含 older
    Range { newer: String, older: String },
}

impl HashSelection {
    /// 从 0 到 2 个 hash 构造选择；超过两个是用法错误。
    ///
    /// 空值或以 `-` 开头的值会被 git 当作选项，直接拒绝。
    pub fn from_hashes(hashes: &[String]) -> NeedleResult<Self> {
        if hashes.len() <= 2 {
            if let Some(bad) = hashes.iter().find(|h| h.is_empty() || h.starts_with('-')) {
                return Err(NeedleError::InvalidHash(bad.clone()));
            }
        }
        match hashes {
            [] => Ok(HashSelection::All),
            [hash] => Ok(HashSelection::Single(hash.clone())),
            [newer, older] => Ok(HashSelection::Range {
                newer: newer.clone(),
                older: older.clone(),
            }),
            more => Err(NeedleError::TooManyHashes(more.len())),
        }
    }

    /// 解析出要检查的提交列表。
    ///
    /// git 对格式错误的 hash 报错时返回空列表，而不是中止。
    pub async fn select_commits(&self, git: &dyn GitBackend) -> Vec<String> {
        let selected = match self {
            HashSelection::All => git.all_commits().await,
            HashSelection::Single(hash) => Ok(vec![hash.clone()]),
            HashSelection::Range { newer, older } => git.commits_in_range(newer, older).await,
        };

        match selected {
            Ok(commits) => {
                debug!(count = commits.len(), selection = ?self, "selected commits");
                commits
            }
            Err(e) => {
                warn!("could not list commits: {}", e);
                Vec::new()
            }
        }
    }
}
