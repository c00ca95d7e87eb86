pub mod doc;
pub mod log;
pub mod search;

pub use doc::*;
pub use log::*;
pub use search::*;

use crate::cli::args::{Args, Command};
use crate::config::Config;
use crate::git::GitCli;
use crate::output::{Presenter, TableStyle};
use tracing::debug;

/// 命令路由器，根据子命令执行对应操作
pub async fn route_command(args: &Args, config: &Config) -> anyhow::Result<()> {
    match &args.command {
        Command::Search(search) => {
            // 用法检查在任何 git 调用之前完成
            let options = SearchOptions::from_args(search)?;
            config.validate()?;
            let git = GitCli::new(&config.repo);
            debug!(repo = %git.repo().display(), ?options, "starting search");

            let mut presenter = Presenter::stdout(TableStyle::from_raw_flag(search.raw));
            run_search(&git, &options, &mut presenter).await?;
        }
        Command::Log(log) => {
            config.validate()?;
            let git = GitCli::new(&config.repo);
            let mut presenter = Presenter::stdout(TableStyle::Bordered);
            run_log(&git, &log.string, &mut presenter).await?;
        }
        Command::Doc(doc) => run_doc(doc)?,
    }

    Ok(())
}
