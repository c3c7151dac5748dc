use log::{Level, LevelFilter, Log, Metadata, Record};

/// Forwards `log` records (including the backend's) to the browser console
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl ConsoleLogger {
    /// Install the logger; later calls are ignored
    pub fn init(level: LevelFilter) {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            Level::Error => gloo::console::error!(message),
            Level::Warn => gloo::console::warn!(message),
            Level::Info => gloo::console::info!(message),
            Level::Debug | Level::Trace => gloo::console::debug!(message),
        }
    }

    fn flush(&self) {}
}
