use std::fmt::Display;
use std::io::Write;

use env_logger::{Builder, Target};
use log::{Level, LevelFilter};

/// Whether a log channel writes anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emitter {
    Active,
    Noop,
}

impl Emitter {
    fn when(active: bool) -> Self {
        if active { Emitter::Active } else { Emitter::Noop }
    }

    pub fn is_active(self) -> bool {
        self == Emitter::Active
    }
}

/// Log channels handed to generators and plugins.
///
/// `quiet` silences both channels; `verbose` only turns on info.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogFunc {
    info: Emitter,
    warn: Emitter,
}

impl LogFunc {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            info: Emitter::when(verbose && !quiet),
            warn: Emitter::when(!quiet),
        }
    }

    pub fn info_emitter(&self) -> Emitter {
        self.info
    }

    pub fn warn_emitter(&self) -> Emitter {
        self.warn
    }

    /// The most verbose level any channel lets through.
    pub fn level_filter(&self) -> LevelFilter {
        match (self.info, self.warn) {
            (Emitter::Active, _) => LevelFilter::Info,
            (Emitter::Noop, Emitter::Active) => LevelFilter::Warn,
            (Emitter::Noop, Emitter::Noop) => LevelFilter::Off,
        }
    }

    pub fn info(&self, message: impl Display) {
        if self.info.is_active() {
            log::info!("{}", message);
        }
    }

    pub fn warn(&self, message: impl Display) {
        if self.warn.is_active() {
            log::warn!("{}", message);
        }
    }

    /// Emits each warning on its own line, in order.
    ///
    /// The sequence is not consumed at all when warnings are suppressed.
    pub fn multi_warn<I>(&self, warnings: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        if !self.warn.is_active() {
            return;
        }
        for warning in warnings {
            log::warn!("{}", warning);
        }
    }
}

/// Line prefix written before each message.
pub fn tag(level: Level) -> &'static str {
    match level {
        Level::Error => "[ERROR] ",
        Level::Warn => "[WARN] ",
        Level::Info => "[INFO] ",
        Level::Debug => "[DEBUG] ",
        Level::Trace => "[TRACE] ",
    }
}

pub fn init_logging(logs: &LogFunc) {
    Builder::new()
        .filter_level(logs.level_filter())
        .format(|buf, record| writeln!(buf, "{}{}", tag(record.level()), record.args()))
        .target(Target::Stderr)
        .init();
}
