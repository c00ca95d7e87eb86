use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// 搜索过程中可能出现的错误
#[derive(Error, Debug)]
pub enum NeedleError {
    #[error("at most two --hash values are accepted, got {0}")]
    TooManyHashes(usize),

    #[error("invalid commit hash: {0:?}")]
    InvalidHash(String),

    #[error("search string must not be empty")]
    EmptyNeedle,

    #[error("repository directory does not exist: {}", .0.display())]
    RepoNotFound(PathBuf),

    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}: {stderr}")]
    Git {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("could not resolve parent of {hash}: {message}")]
    ParentResolution { hash: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl NeedleError {
    /// 是否属于用法错误（参数组合不合法）
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            NeedleError::TooManyHashes(_)
                | NeedleError::InvalidHash(_)
                | NeedleError::EmptyNeedle
                | NeedleError::RepoNotFound(_)
        )
    }

    /// 创建 git 命令失败错误
    pub fn git(command: impl Into<String>, status: ExitStatus, stderr: &[u8]) -> Self {
        NeedleError::Git {
            command: command.into(),
            status,
            stderr: String::from_utf8_lossy(stderr).trim().to_string(),
        }
    }

    pub fn parent_resolution(hash: impl Into<String>, message: impl Into<String>) -> Self {
        NeedleError::ParentResolution {
            hash: hash.into(),
            message: message.into(),
        }
    }
}

pub type NeedleResult<T> = Result<T, NeedleError>;
