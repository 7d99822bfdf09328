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
use std::sync::OnceLock;

use crate::Logger;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Return the process-wide default logger, building it on first use.
///
/// The default logger prints to standard output and buffers into `./log/` under the generated
/// filename, flushing every 30 seconds. It is never closed implicitly: call
/// `default_logger().close()` before the process exits to write the last buffered lines.
///
/// # Panics
///
/// Panic if the default logger has to be built and its log directory or file cannot be created.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| {
        Logger::builder()
            .open_print()
            .open_write_file()
            .build()
            .unwrap_or_else(|err| panic!("failed to build the default logger: {err}"))
    })
}

/// Install `logger` as the process-wide default logger.
///
/// This must happen before the first call to [`default_logger`] or to any free logging function.
///
/// # Errors
///
/// Return the given logger back if a default logger has already been set or built.
///
/// # Examples
///
/// ```
/// use flushlog::Logger;
///
/// let logger = Logger::builder().open_print().build().unwrap();
/// if flushlog::set_default_logger(logger).is_err() {
///     eprintln!("default logger has been already set up");
/// }
/// flushlog::printf(format_args!("hi {}", "x"));
/// ```
pub fn set_default_logger(logger: Logger) -> Result<(), Logger> {
    DEFAULT_LOGGER.set(logger)
}

/// Log a message with no level tag to the default logger.
pub fn printf(args: fmt::Arguments<'_>) {
    default_logger().printf(args);
}

/// Log a message tagged `[INFO]` to the default logger.
pub fn infof(args: fmt::Arguments<'_>) {
    default_logger().infof(args);
}

/// Log a message tagged `[DEBUG]` to the default logger.
pub fn debugf(args: fmt::Arguments<'_>) {
    default_logger().debugf(args);
}

/// Log a message tagged `[WARN]` to the default logger.
pub fn warnf(args: fmt::Arguments<'_>) {
    default_logger().warnf(args);
}

/// Log a message tagged `[ERROR]` to the default logger.
pub fn errorf(args: fmt::Arguments<'_>) {
    default_logger().errorf(args);
}

/// Log a message with no level tag to the default logger.
///
/// ```
/// # flushlog::set_default_logger(flushlog::Logger::builder().build().unwrap()).unwrap();
/// flushlog::printf!("this is printf, {}", 1);
/// ```
#[macro_export]
macro_rules! printf {
    ($($arg:tt)+) => {
        $crate::printf(::std::format_args!($($arg)+))
    };
}

/// Log a message tagged `[INFO]` to the default logger.
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::infof(::std::format_args!($($arg)+))
    };
}

/// Log a message tagged `[DEBUG]` to the default logger.
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::debugf(::std::format_args!($($arg)+))
    };
}

/// Log a message tagged `[WARN]` to the default logger.
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::warnf(::std::format_args!($($arg)+))
    };
}

/// Log a message tagged `[ERROR]` to the default logger.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::errorf(::std::format_args!($($arg)+))
    };
}
