// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::Error;
use crate::Level;
use crate::Logger;
use crate::default_logger;

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info => Self::Info,
            log::Level::Debug | log::Level::Trace => Self::Debug,
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        self.options().print() || self.options().write_file()
    }

    fn log(&self, record: &log::Record) {
        Logger::log(self, record.level().into(), *record.args());
    }

    fn flush(&self) {
        Logger::flush(self);
    }
}

struct LogCrateLogger(());

impl log::Log for LogCrateLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        log::Log::enabled(default_logger(), metadata)
    }

    fn log(&self, record: &log::Record) {
        log::Log::log(default_logger(), record);
    }

    fn flush(&self) {
        log::Log::flush(default_logger());
    }
}

/// Set up the log crate global logger.
///
/// This function calls [`log::set_logger`] to forward all logs from the log crate to the
/// [default logger](crate::default_logger). `Trace` records are tagged `[DEBUG]`.
///
/// This function will set the global maximum log level to `Trace`. To override this, call
/// [`log::set_max_level`] after this function.
///
/// # Errors
///
/// Return an error if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// if let Err(err) = flushlog::bridge::try_setup_log_crate() {
///     eprintln!("failed to set up log crate: {err}");
/// }
/// ```
pub fn try_setup_log_crate() -> Result<(), Error> {
    static LOGGER: LogCrateLogger = LogCrateLogger(());
    log::set_logger(&LOGGER).map_err(|err| {
        Error::new("log crate global logger has been already set up").with_source(err)
    })?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Set up the log crate global logger.
///
/// See [`try_setup_log_crate`].
///
/// # Panics
///
/// Panic if the log crate global logger has already been set.
pub fn setup_log_crate() {
    try_setup_log_crate().expect(
        "flushlog::bridge::setup_log_crate must be called before the log crate global logger initialized",
    )
}
