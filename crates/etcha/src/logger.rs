use std::sync::OnceLock;

use env_logger::Env;
use log::{set_logger, Log};
use tokio::sync::mpsc::UnboundedSender;

static LOGGER: OnceLock<SessionLogger> = OnceLock::new();

/// Forwards filtered records to the event loop, which surfaces them in the
/// status bar. Filtering follows `RUST_LOG`, default `info`.
pub struct SessionLogger {
    tx: UnboundedSender<String>,
    filter: env_logger::Logger,
}

impl Log for SessionLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.filter.enabled(metadata)
    }

    fn log(&self, record: &log::Record) {
        if self.filter.matches(record) {
            let line = format!("{} - {}", record.level(), record.args());
            self.tx.send(line).ok();
        }
    }

    fn flush(&self) {}
}

pub fn enable(tx: UnboundedSender<String>) {
    let logger = LOGGER.get_or_init(|| SessionLogger {
        tx,
        filter: env_logger::Builder::from_env(Env::default().default_filter_or("info")).build(),
    });

    set_logger(logger)
        .map(|()| log::set_max_level(logger.filter.filter()))
        .ok();
}
