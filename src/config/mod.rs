use crate::infrastructure::{LoggingConfig, NeedleError, NeedleResult};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub repo: PathBuf,
    pub color: bool,
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // 默认配置：当前目录、彩色强调、只输出警告
        Config {
            repo: PathBuf::from("."),
            color: true,
            verbosity: 0,
        }
    }

    pub fn update_from_args(&mut self, args: &crate::cli::args::Args) {
        // 命令行参数优先级最高
        if let Some(repo) = &args.repo {
            self.repo = repo.clone();
        }
        if args.no_color {
            self.color = false;
        }
        self.verbosity = args.verbose;
    }

    pub fn validate(&self) -> NeedleResult<()> {
        if !self.repo.is_dir() {
            return Err(NeedleError::RepoNotFound(self.repo.clone()));
        }
        Ok(())
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig::from_verbosity(self.verbosity)
    }

    /// 把颜色设置应用到 `colored` 的全局开关
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
