//! 日志基础设施

use anyhow::Result;
use std::io;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 初始化日志系统
    ///
    /// `RUST_LOG` 优先于配置中的级别。配置了 `log_dir` 时额外写入按日期分割的日志文件，
    /// 返回的 guard 需要在进程存活期间持有，否则缓冲中的日志会丢失。
    pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.level))?;

        let console_layer = config
            .console_output
            .then(|| fmt::layer().with_writer(io::stdout).with_ansi(true).boxed());

        let (file_layer, guard) = match &config.log_dir {
            Some(log_dir) => {
                std::fs::create_dir_all(log_dir)?;
                let file_appender = rolling::daily(log_dir, &config.file_prefix);
                let (writer, guard) = non_blocking(file_appender);
                let layer = fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(false)
                    .with_thread_names(true)
                    .boxed();
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()?;

        Ok(guard)
    }
}
