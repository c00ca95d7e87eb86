use crate::git::GitBackend;
use crate::infrastructure::{NeedleError, NeedleResult};
use crate::output::Presenter;
use crate::search::parse_pickaxe;
use std::io::Write;
use tracing::info;

/// pickaxe 历史搜索：列出增删过 needle 的提交以及它们修改的文件。
///
/// 不获取内容，不截取摘录，也不做强调。
pub async fn run_log<W: Write>(
    git: &dyn GitBackend,
    needle: &str,
    presenter: &mut Presenter<W>,
) -> NeedleResult<usize> {
    if needle.is_empty() {
        return Err(NeedleError::EmptyNeedle);
    }

    let output = git.pickaxe(needle).await?;
    let groups = parse_pickaxe(&output);
    for group in &groups {
        presenter.emit_pickaxe(group)?;
    }

    info!(commits = groups.len(), "log finished");
    Ok(groups.len())
}
