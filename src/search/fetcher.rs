use super::selector::HashSelection;
use crate::git::GitBackend;
use crate::infrastructure::NeedleResult;
use tracing::debug;

/// 一个提交的 diff 文本以及用来比较的另一端
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffText {
    pub text: String,
    /// 根提交为 `None`
    pub parent: Option<String>,
}

/// 提交时某个文件的文本内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileText {
    pub path: String,
    pub text: String,
}

/// 按提交获取 diff 或文件内容
pub struct ContentFetcher<'a> {
    git: &'a dyn GitBackend,
    selection: &'a HashSelection,
}

impl<'a> ContentFetcher<'a> {
    pub fn new(git: &'a dyn GitBackend, selection: &'a HashSelection) -> Self {
        Self { git, selection }
    }

    /// 计算提交的 diff。
    ///
    /// 范围模式下每个提交拿到的都是同一个 `older..newer` 端点 diff。
    /// 其他模式下与父提交比较，根提交退回到 `git show`。
    pub async fn diff(&self, commit: &str) -> NeedleResult<DiffText> {
        if let HashSelection::Range { newer, older } = self.selection {
            let text = self.git.diff(older, newer).await?;
            return Ok(DiffText {
                text,
                parent: Some(older.clone()),
            });
        }

        match self.git.parent(commit).await? {
            Some(parent) => {
                let text = self.git.diff(&parent, commit).await?;
                Ok(DiffText {
                    text,
                    parent: Some(parent),
                })
            }
            None => {
                debug!(commit, "root commit, falling back to show");
                let text = self.git.show(commit).await?;
                Ok(DiffText { text, parent: None })
            }
        }
    }

    /// 获取提交中修改过的每个文件的内容。
    ///
    /// 取不到内容（已删除）或不是 UTF-8（二进制）的文件会被跳过。
    pub async fn files(&self, commit: &str) -> NeedleResult<Vec<FileText>> {
        let paths = self.git.changed_files(commit).await?;
        let mut files = Vec::with_capacity(paths.len());

        for path in paths {
            let bytes = match self.git.file_content(commit, &path).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    debug!(commit, path = %path, "skipping unreadable file: {}", e);
                    continue;
                }
            };
            match String::from_utf8(bytes) {
                Ok(text) => files.push(FileText { path, text }),
                Err(_) => debug!(commit, path = %path, "skipping non-text file"),
            }
        }

        Ok(files)
    }
}
