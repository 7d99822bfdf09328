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

use std::fmt;

use crate::Error;
use crate::Level;
use crate::LoggerBuilder;
use crate::clock::Clock;
use crate::format::ensure_newline;
use crate::format::format_line;
use crate::options::LoggerOption;
use crate::options::Options;
use crate::sink::Console;
use crate::sink::FileSink;

/// A logger printing to standard output and buffering into a single file, as configured.
///
/// Log operations never fail from the caller's point of view: errors raised while buffering or
/// writing go to the configured [`Trap`](crate::Trap).
///
/// A logger with the file sink enabled must be [closed](Logger::close) to get the last buffered
/// lines into the file. Dropping it stops the background flusher without flushing.
#[derive(Debug)]
pub struct Logger {
    options: Options,
    clock: Clock,
    console: Option<Console>,
    file: Option<FileSink>,
}

impl Logger {
    pub(super) fn from_parts(
        options: Options,
        clock: Clock,
        console: Option<Console>,
        file: Option<FileSink>,
    ) -> Self {
        Self {
            options,
            clock,
            console,
            file,
        }
    }

    /// Create a logger from options, applied left to right.
    ///
    /// # Errors
    ///
    /// See [`LoggerBuilder::build`].
    ///
    /// # Examples
    ///
    /// ```
    /// use flushlog::Logger;
    /// use flushlog::options;
    ///
    /// let logger = Logger::new([options::open_print()]).unwrap();
    /// logger.printf(format_args!("hi {}", "x"));
    /// ```
    pub fn new(options: impl IntoIterator<Item = LoggerOption>) -> Result<Logger, Error> {
        LoggerBuilder::new().options(options).build()
    }

    /// Create a new [`LoggerBuilder`].
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// The configuration of this logger, with defaults filled in.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Log a message with no level tag and no timestamp.
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Plain, args);
    }

    /// Log a message tagged `[INFO]`.
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    /// Log a message tagged `[DEBUG]`.
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    /// Log a message tagged `[WARN]`.
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    /// Log a message tagged `[ERROR]`.
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    /// Format a message at the given level, print it and buffer it, as configured.
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.console.is_none() && self.file.is_none() {
            return;
        }

        let line = format_line(level, &self.clock.now(), args);

        if let Some(console) = &self.console {
            console.print(&line);
        }

        if let Some(file) = &self.file {
            file.append(&ensure_newline(line));
        }
    }

    /// Write every buffered line to the log file now.
    pub fn flush(&self) {
        if let Some(file) = &self.file {
            file.flush();
        }
    }

    /// Stop the background flusher, write every buffered line and release the log file.
    ///
    /// Errors are sent to the trap. Calling it again does nothing; lines logged afterwards are
    /// still printed but no longer written to the file.
    pub fn close(&self) {
        if let Some(file) = &self.file {
            file.close();
        }
    }

    #[cfg(test)]
    pub(crate) fn buffered_len(&self) -> usize {
        self.file.as_ref().map_or(0, |file| file.buffered_len())
    }

    #[cfg(test)]
    pub(crate) fn has_file_sink(&self) -> bool {
        self.file.is_some()
    }
}
