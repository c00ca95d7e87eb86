use crate::cli::args::SearchArgs;
use crate::git::GitBackend;
use crate::infrastructure::{NeedleError, NeedleResult};
use crate::output::{GroupLabel, Presenter, ResultGroup};
use crate::search::{ContentFetcher, Extractor, HashSelection};
use std::io::Write;
use tracing::{debug, info, warn};

/// 一次搜索的全部参数
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub needle: String,
    pub limit: usize,
    pub show_all: bool,
    pub diff: bool,
    pub selection: HashSelection,
}

impl SearchOptions {
    /// 校验参数；hash 数量超过两个或搜索字符串为空时返回用法错误
    pub fn from_args(args: &SearchArgs) -> NeedleResult<Self> {
        let selection = HashSelection::from_hashes(&args.hashes)?;
        let needle = args.needle();
        if needle.is_empty() {
            return Err(NeedleError::EmptyNeedle);
        }
        Ok(Self {
            needle,
            limit: args.limit,
            show_all: args.all,
            diff: args.diff,
            selection,
        })
    }

    fn extractor(&self) -> Extractor {
        Extractor::new(self.needle.clone(), self.limit, self.show_all)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub commits_scanned: usize,
    pub groups: usize,
}

async fn commit_date(git: &dyn GitBackend, commit: &str) -> String {
    match git.commit_date(commit).await {
        Ok(date) => date,
        Err(e) => {
            warn!(commit, "could not read commit date: {}", e);
            "?".to_string()
        }
    }
}

/// 按顺序扫描选中的提交，每找到一个匹配就输出一张表。
///
/// 单个提交模式下获取失败直接返回错误；全量扫描时记录警告并跳过该提交。
pub async fn run_search<W: Write>(
    git: &dyn GitBackend,
    options: &SearchOptions,
    presenter: &mut Presenter<W>,
) -> NeedleResult<SearchSummary> {
    let commits = options.selection.select_commits(git).await;
    let fetcher = ContentFetcher::new(git, &options.selection);
    let extractor = options.extractor();
    let mut summary = SearchSummary::default();

    if options.diff && matches!(options.selection, HashSelection::Range { .. }) {
        debug!("range mode: every commit is shown with the same endpoint diff");
    }

    for commit in &commits {
        summary.commits_scanned += 1;

        if options.diff {
            let diff = match fetcher.diff(commit).await {
                Ok(diff) => diff,
                Err(e) if matches!(options.selection, HashSelection::Single(_)) => return Err(e),
                Err(e) => {
                    warn!(commit = %commit, "skipping commit: {}", e);
                    continue;
                }
            };
            let Some(window) = extractor.extract_diff(&diff.text) else {
                continue;
            };
            let group = ResultGroup {
                label: GroupLabel {
                    hash: commit.clone(),
                    date: commit_date(git, commit).await,
                    file: None,
                    parent: diff.parent,
                },
                excerpt: window.highlighted,
            };
            presenter.emit_group(&group)?;
            summary.groups += 1;
        } else {
            let files = match fetcher.files(commit).await {
                Ok(files) => files,
                Err(e) => {
                    warn!(commit = %commit, "skipping commit: {}", e);
                    continue;
                }
            };
            let mut date: Option<String> = None;
            for file in files {
                let Some(window) = extractor.extract_file(&file.text) else {
                    continue;
                };
                if date.is_none() {
                    date = Some(commit_date(git, commit).await);
                }
                let group = ResultGroup {
                    label: GroupLabel {
                        hash: commit.clone(),
                        date: date.clone().unwrap_or_default(),
                        file: Some(file.path),
                        parent: None,
                    },
                    excerpt: window.highlighted,
                };
                presenter.emit_group(&group)?;
                summary.groups += 1;
            }
        }
    }

    info!(
        commits = summary.commits_scanned,
        matches = summary.groups,
        "search finished"
    );
    Ok(summary)
}
