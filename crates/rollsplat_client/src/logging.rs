//! Логи симуляции → bevy `tracing` (LogPlugin из DefaultPlugins)

use bevy::log::{debug, error, info, warn};
use rollsplat_simulation::{set_logger, LogLevel, LogPrinter};

struct BevyLogPrinter;

impl LogPrinter for BevyLogPrinter {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => debug!("{}", message),
            LogLevel::Info => info!("{}", message),
            LogLevel::Warning => warn!("{}", message),
            LogLevel::Error => error!("{}", message),
        }
    }
}

/// Заменяет ConsoleLogger (если был) на bevy printer
pub fn install() {
    set_logger(Box::new(BevyLogPrinter));
}
