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

//! Logger configuration built from composable option functions.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use flushlog::options;
//! use flushlog::options::Options;
//!
//! let opts = Options::from_options([
//!     options::open_write_file(),
//!     options::directory("./var/log/"),
//!     options::flush_interval(Duration::from_secs(5)),
//!     options::directory("./log/app/"),
//! ]);
//!
//! assert!(opts.write_file());
//! assert!(!opts.print());
//! assert_eq!(opts.directory(), "./log/app/");
//! ```

use std::fmt;
use std::net::IpAddr;
use std::net::Ipv4Addr;
use std::net::SocketAddrV4;
use std::net::UdpSocket;
use std::path::PathBuf;
use std::time::Duration;

use jiff::Zoned;

/// The directory used when none is configured.
pub const DEFAULT_DIRECTORY: &str = "./log/";

/// The flush interval used when none is configured.
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_secs(30);

/// Literal used in the default filename when no local IPv4 address is found.
pub const FALLBACK_HOST: &str = "localhost";

const FILENAME_TIMESTAMP_FORMAT: &str = "%y%m%d%H%M%S";

/// The configuration of a [`Logger`](crate::Logger).
///
/// The default value has every sink disabled and every other field zeroed. Zeroed fields resolve
/// to their defaults when the logger is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    print: bool,
    write_file: bool,
    flush_interval: Duration,
    directory: String,
    filename: String,
}

impl Options {
    /// Apply the given options, left to right, to the default value.
    pub fn from_options(options: impl IntoIterator<Item = LoggerOption>) -> Options {
        options
            .into_iter()
            .fold(Options::default(), |opts, option| option.apply(opts))
    }

    /// Whether lines are printed to standard output.
    pub fn print(&self) -> bool {
        self.print
    }

    /// Whether lines are buffered and written to the log file.
    pub fn write_file(&self) -> bool {
        self.write_file
    }

    /// The period of the background flush.
    pub fn flush_interval(&self) -> Duration {
        self.flush_interval
    }

    /// The directory of the log file.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// The name of the log file.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The full path of the log file, that is, the directory followed by the filename.
    pub fn file_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{}", self.directory, self.filename))
    }

    /// Fill zeroed fields with defaults. Does nothing unless file writing is enabled.
    pub(crate) fn resolve(mut self, now: &Zoned) -> Options {
        if !self.write_file {
            return self;
        }

        if self.directory.is_empty() {
            self.directory = DEFAULT_DIRECTORY.to_string();
        }
        if self.filename.is_empty() {
            self.filename = default_filename(now);
        }
        if self.flush_interval.is_zero() {
            self.flush_interval = DEFAULT_FLUSH_INTERVAL;
        }
        if !self.directory.ends_with(std::path::is_separator) {
            self.directory.push(std::path::MAIN_SEPARATOR);
        }
        self
    }
}

/// A configuration mutator, applied in order when a logger is built.
///
/// Later options override earlier ones for the same field.
pub struct LoggerOption(Box<dyn FnOnce(Options) -> Options + Send>);

impl fmt::Debug for LoggerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LoggerOption").finish_non_exhaustive()
    }
}

impl LoggerOption {
    /// Create an option from a function.
    pub fn new(f: impl FnOnce(Options) -> Options + Send + 'static) -> Self {
        LoggerOption(Box::new(f))
    }

    /// Apply this option to a configuration.
    pub fn apply(self, options: Options) -> Options {
        (self.0)(options)
    }
}

/// Enable printing to standard output.
pub fn open_print() -> LoggerOption {
    LoggerOption::new(|mut o| {
        o.print = true;
        o
    })
}

/// Enable the buffered file sink.
pub fn open_write_file() -> LoggerOption {
    LoggerOption::new(|mut o| {
        o.write_file = true;
        o
    })
}

/// Set the directory of the log file. An empty path selects [`DEFAULT_DIRECTORY`].
pub fn directory(path: impl Into<String>) -> LoggerOption {
    let path = path.into();
    LoggerOption::new(move |mut o| {
        o.directory = if path.is_empty() {
            DEFAULT_DIRECTORY.to_string()
        } else {
            path
        };
        o
    })
}

/// Set the name of the log file. An empty name selects the generated default.
pub fn filename(name: impl Into<String>) -> LoggerOption {
    let name = name.into();
    LoggerOption::new(move |mut o| {
        o.filename = name;
        o
    })
}

/// Set the period of the background flush. Zero selects [`DEFAULT_FLUSH_INTERVAL`].
pub fn flush_interval(interval: Duration) -> LoggerOption {
    LoggerOption::new(move |mut o| {
        o.flush_interval = if interval.is_zero() {
            DEFAULT_FLUSH_INTERVAL
        } else {
            interval
        };
        o
    })
}

/// The generated filename: `{YYMMDDHHMMSS}_{local IPv4 or "localhost"}.log`.
pub fn default_filename(now: &Zoned) -> String {
    let timestamp = now.strftime(FILENAME_TIMESTAMP_FORMAT);
    format!("{timestamp}_{}.log", local_ipv4())
}

/// Best-effort non-loopback IPv4 address of this host, or [`FALLBACK_HOST`].
///
/// The address is that of the interface routing to a public address, so a host without a
/// default route gets [`FALLBACK_HOST`] even when it has other non-loopback addresses. Which
/// address is returned on a host with several routes is unspecified.
pub fn local_ipv4() -> String {
    outbound_ipv4(PUBLIC_PROBE_ADDR)
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| FALLBACK_HOST.to_string())
}

const PUBLIC_PROBE_ADDR: SocketAddrV4 = SocketAddrV4::new(Ipv4Addr::new(8, 8, 8, 8), 80);

// Connecting a UDP socket sends nothing; it only binds the socket to the outbound interface.
fn outbound_ipv4(target: SocketAddrV4) -> Option<Ipv4Addr> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).ok()?;
    socket.connect(target).ok()?;
    match socket.local_addr().ok()?.ip() {
        IpAddr::V4(ip) if !ip.is_loopback() && !ip.is_unspecified() => Some(ip),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn now() -> Zoned {
        Zoned::from_str("2024-08-10T17:12:52+08[+08]").unwrap()
    }

    #[test]
    fn test_no_options_is_all_off() {
        let opts = Options::from_options(Vec::<LoggerOption>::new());
        assert_eq!(opts, Options::default());
        assert!(!opts.print());
        assert!(!opts.write_file());
    }

    #[test]
    fn test_later_options_override_earlier() {
        let opts = Options::from_options([
            directory("./a/"),
            filename("first.log"),
            flush_interval(Duration::from_secs(3)),
            directory("./b/"),
            filename("second.log"),
            flush_interval(Duration::from_secs(7)),
        ]);
        assert_eq!(opts.directory(), "./b/");
        assert_eq!(opts.filename(), "second.log");
        assert_eq!(opts.flush_interval(), Duration::from_secs(7));
    }

    #[test]
    fn test_zero_values_select_defaults() {
        let opts = Options::from_options([
            directory("./custom/"),
            directory(""),
            flush_interval(Duration::from_secs(9)),
            flush_interval(Duration::ZERO),
        ]);
        assert_eq!(opts.directory(), DEFAULT_DIRECTORY);
        assert_eq!(opts.flush_interval(), DEFAULT_FLUSH_INTERVAL);
    }

    #[test]
    fn test_resolve_fills_defaults() {
        let opts = Options::from_options([open_write_file()]).resolve(&now());
        assert_eq!(opts.directory(), DEFAULT_DIRECTORY);
        assert_eq!(opts.flush_interval(), DEFAULT_FLUSH_INTERVAL);
        assert!(opts.filename().starts_with("240810171252_"));
        assert!(opts.filename().ends_with(".log"));
    }

    #[test]
    fn test_resolve_appends_separator() {
        let opts = Options::from_options([
            open_write_file(),
            directory("logs"),
            filename("t.log"),
        ])
        .resolve(&now());
        let expected = format!("logs{}", std::path::MAIN_SEPARATOR);
        assert_eq!(opts.directory(), expected);
        assert_eq!(
            opts.file_path(),
            PathBuf::from(format!("{expected}t.log"))
        );
    }

    #[test]
    fn test_resolve_skipped_without_file_sink() {
        let opts = Options::from_options([open_print()]).resolve(&now());
        assert!(opts.print());
        assert_eq!(opts.directory(), "");
        assert_eq!(opts.filename(), "");
        assert_eq!(opts.flush_interval(), Duration::ZERO);
    }

    #[test]
    fn test_loopback_route_yields_no_address() {
        let target = SocketAddrV4::new(Ipv4Addr::LOCALHOST, 9);
        assert_eq!(outbound_ipv4(target), None);
    }

    #[test]
    fn test_local_ipv4_is_never_loopback() {
        let ip = local_ipv4();
        if ip != FALLBACK_HOST {
            let ip = Ipv4Addr::from_str(&ip).unwrap();
            assert!(!ip.is_loopback());
        }
    }
}
