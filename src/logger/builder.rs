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

use std::sync::Arc;
use std::time::Duration;

use crate::Error;
use crate::Logger;
use crate::Trap;
use crate::clock::Clock;
use crate::options;
use crate::options::LoggerOption;
use crate::options::Options;
use crate::sink::Accumulator;
use crate::sink::Console;
use crate::sink::FileSink;
use crate::sink::FileWriterBuilder;
use crate::trap::DefaultTrap;

/// A builder for configuring a [`Logger`].
///
/// Every method records one [`LoggerOption`]; options are applied in call order when the logger
/// is built, so a later call overrides an earlier one for the same field.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// let dir = tempfile::tempdir().unwrap();
/// let logger = flushlog::Logger::builder()
///     .open_write_file()
///     .directory(dir.path().join("logs/").to_string_lossy())
///     .filename("app.log")
///     .flush_interval(Duration::from_secs(5))
///     .build()
///     .unwrap();
///
/// logger.infof(format_args!("started with {} workers", 4));
/// logger.close();
/// ```
#[must_use = "call `build` to create the logger"]
#[derive(Debug)]
pub struct LoggerBuilder {
    options: Vec<LoggerOption>,
    trap: Box<dyn Trap>,
    threshold: usize,
    clock: Clock,
    console: Console,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Create a new builder with every sink disabled.
    pub fn new() -> Self {
        Self {
            options: vec![],
            trap: Box::new(DefaultTrap::default()),
            threshold: crate::sink::DEFAULT_THRESHOLD,
            clock: Clock::default(),
            console: Console::default(),
        }
    }

    /// Add an option.
    pub fn option(mut self, option: LoggerOption) -> Self {
        self.options.push(option);
        self
    }

    /// Add options, in order.
    pub fn options(mut self, options: impl IntoIterator<Item = LoggerOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Enable printing to standard output.
    pub fn open_print(self) -> Self {
        self.option(options::open_print())
    }

    /// Enable the buffered file sink.
    pub fn open_write_file(self) -> Self {
        self.option(options::open_write_file())
    }

    /// Set the directory of the log file.
    ///
    /// Default to `./log/`.
    pub fn directory(self, path: impl Into<String>) -> Self {
        self.option(options::directory(path))
    }

    /// Set the name of the log file.
    ///
    /// Default to `{YYMMDDHHMMSS}_{local IPv4}.log`.
    pub fn filename(self, name: impl Into<String>) -> Self {
        self.option(options::filename(name))
    }

    /// Set the period of the background flush.
    ///
    /// Default to 30 seconds.
    pub fn flush_interval(self, interval: Duration) -> Self {
        self.option(options::flush_interval(interval))
    }

    /// Set the trap that receives errors raised while logging.
    ///
    /// Default to [`DefaultTrap`].
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    #[cfg(test)]
    pub(crate) fn threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    #[cfg(test)]
    pub(crate) fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[cfg(test)]
    pub(crate) fn console(mut self, console: Console) -> Self {
        self.console = console;
        self
    }

    /// Build the [`Logger`].
    ///
    /// With the file sink enabled, this creates the log directory if absent, opens the log file
    /// for append and starts the background flusher.
    ///
    /// # Errors
    ///
    /// Return an error if either:
    ///
    /// * The log directory cannot be created.
    /// * The log file cannot be opened.
    /// * The flusher thread cannot be spawned.
    pub fn build(self) -> Result<Logger, Error> {
        let LoggerBuilder {
            options,
            trap,
            threshold,
            clock,
            console,
        } = self;

        let options = Options::from_options(options).resolve(&clock.now());
        let trap: Arc<dyn Trap> = Arc::from(trap);

        let file = if options.write_file() {
            let writer = FileWriterBuilder::new(options.file_path()).build()?;
            let sink = FileSink::new(
                writer,
                Accumulator::new(threshold),
                options.flush_interval(),
                trap,
            )?;
            Some(sink)
        } else {
            None
        };
        let console = options.print().then_some(console);

        Ok(Logger::from_parts(options, clock, console, file))
    }
}
