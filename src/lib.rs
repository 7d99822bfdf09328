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

//! Flushlog is a small leveled logger with an optional console sink and an optional buffered file
//! sink.
//!
//! # Overview
//!
//! Lines are formatted as `[LEVEL] YYYY-MM-DD HH:MM:SS: message`, or as the bare message for
//! [`printf`]. With the file sink enabled, lines accumulate in memory and are written to a single
//! file once 2048 bytes are buffered, on every flush interval, and on [`Logger::close`].
//!
//! Logging never fails from the caller's point of view: errors raised while buffering or writing
//! are handed to a [`Trap`], which prints them to standard error by default.
//!
//! # Examples
//!
//! Log through the process-wide default logger, which prints to standard output and writes to
//! `./log/`:
//!
//! ```no_run
//! flushlog::infof!("listening on port {}", 8080);
//! flushlog::printf!("plain line");
//!
//! flushlog::default_logger().close();
//! ```
//!
//! Build a dedicated logger from options:
//!
//! ```
//! use std::time::Duration;
//!
//! use flushlog::Logger;
//! use flushlog::options;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let logger = Logger::new([
//!     options::open_write_file(),
//!     options::directory(dir.path().to_string_lossy()),
//!     options::filename("app.log"),
//!     options::flush_interval(Duration::from_secs(1)),
//! ])
//! .unwrap();
//!
//! logger.warnf(format_args!("disk usage at {}%", 91));
//! logger.close();
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod bridge;
pub mod format;
pub mod options;
pub mod sink;
pub mod trap;

mod clock;
mod error;
mod logger;

pub use self::error::Error;
pub use self::format::Level;
pub use self::logger::*;
pub use self::options::LoggerOption;
pub use self::options::Options;
pub use self::trap::Trap;
