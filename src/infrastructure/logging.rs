use std::io;
use tracing::Level;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// 日志配置
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: Level,
    pub format: LogFormat,
    pub include_file_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            format: LogFormat::Compact,
            include_file_location: false,
        }
    }
}

/// 日志格式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    /// 人类可读的多行格式
    Pretty,
    /// 紧凑格式
    Compact,
}

impl LoggingConfig {
    /// 根据 `-v` 出现次数推导日志级别
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            format: if verbosity >= 3 {
                LogFormat::Pretty
            } else {
                LogFormat::Compact
            },
            include_file_location: verbosity >= 3,
        }
    }
}

/// 设置日志系统，所有日志输出到 stderr，stdout 只留给表格
pub fn setup_logging(config: LoggingConfig) -> anyhow::Result<()> {
    // RUST_LOG 可覆盖 -v 推导出的默认级别
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.level).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(create_fmt_layer(&config))
        .with(env_filter)
        .try_init()?;

    Ok(())
}

fn create_fmt_layer(config: &LoggingConfig) -> Box<dyn Layer<Registry> + Send + Sync> {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .with_file(config.include_file_location)
        .with_line_number(config.include_file_location);

    match config.format {
        LogFormat::Pretty => layer.pretty().boxed(),
        LogFormat::Compact => layer.compact().boxed(),
    }
}
