use crate::infrastructure::NeedleResult;
use async_trait::async_trait;

/// 对外部版本控制工具的最小查询接口。
///
/// 搜索核心只通过这个 trait 访问仓库，测试时可以用内存实现替换真实的 git。
/// 所有操作都是只读的。
#[async_trait]
pub trait GitBackend: Send + Sync {
    /// 所有引用可达的提交（`git rev-list --all`），新的在前
    async fn all_commits(&self) -> NeedleResult<Vec<String>>;

    /// `older..newer` 范围内的提交，不含 older，新的在前
    async fn commits_in_range(&self, newer: &str, older: &str) -> NeedleResult<Vec<String>>;

    /// 提交日期
    async fn commit_date(&self, hash: &str) -> NeedleResult<String>;

    /// 第一个父提交；根提交返回 `None`
    async fn parent(&self, hash: &str) -> NeedleResult<Option<String>>;

    /// `git diff older newer`
    async fn diff(&self, older: &str, newer: &str) -> NeedleResult<String>;

    /// `git show hash`，用于根提交
    async fn show(&self, hash: &str) -> NeedleResult<String>;

    /// 提交中修改过的文件
    async fn changed_files(&self, hash: &str) -> NeedleResult<Vec<String>>;

    /// 文件在指定提交时的原始内容
    async fn file_content(&self, hash: &str, path: &str) -> NeedleResult<Vec<u8>>;

    /// pickaxe 搜索的原始输出，格式见 [`crate::search::pickaxe`]
    async fn pickaxe(&self, needle: &str) -> NeedleResult<String>;
}
