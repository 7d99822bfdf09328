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

//! Rendering of log lines.
//!
//! Output format:
//!
//! ```text
//! [INFO] 2024-08-10 17:12:52: server started on port 8080
//! [WARN] 2024-08-10 17:12:53: slow response from upstream
//! plain message without tag or timestamp
//! ```

use std::fmt;

use jiff::Zoned;

/// The pattern of the timestamp following the level tag.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The level of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// No tag and no timestamp; the message is printed as is.
    Plain,
    /// `[INFO]`
    Info,
    /// `[DEBUG]`
    Debug,
    /// `[WARN]`
    Warn,
    /// `[ERROR]`
    Error,
}

impl Level {
    /// The tag that prefixes lines of this level. Empty for [`Level::Plain`].
    pub fn tag(self) -> &'static str {
        match self {
            Level::Plain => "",
            Level::Info => "[INFO]",
            Level::Debug => "[DEBUG]",
            Level::Warn => "[WARN]",
            Level::Error => "[ERROR]",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Render a log line, without trailing newline handling.
///
/// A tagged level renders as `"{tag} {timestamp}: {message}"`; [`Level::Plain`] renders the
/// message alone.
pub fn format_line(level: Level, timestamp: &Zoned, args: fmt::Arguments<'_>) -> String {
    let tag = level.tag();
    if tag.is_empty() {
        return args.to_string();
    }

    let timestamp = timestamp.strftime(TIMESTAMP_FORMAT);
    format!("{tag} {timestamp}: {args}")
}

/// Make sure the line ends with exactly the newline it already has, or one appended.
pub fn ensure_newline(mut line: String) -> String {
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn timestamp() -> Zoned {
        Zoned::from_str("2024-08-10T17:12:52+08[+08]").unwrap()
    }

    #[test]
    fn test_tagged_levels() {
        let ts = timestamp();
        assert_eq!(
            format_line(Level::Info, &ts, format_args!("n={}", 7)),
            "[INFO] 2024-08-10 17:12:52: n=7"
        );
        assert_eq!(
            format_line(Level::Debug, &ts, format_args!("d")),
            "[DEBUG] 2024-08-10 17:12:52: d"
        );
        assert_eq!(
            format_line(Level::Warn, &ts, format_args!("w")),
            "[WARN] 2024-08-10 17:12:52: w"
        );
        assert_eq!(
            format_line(Level::Error, &ts, format_args!("{:?}", "e")),
            "[ERROR] 2024-08-10 17:12:52: \"e\""
        );
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Info.to_string(), "[INFO]");
        assert_eq!(Level::Debug.to_string(), "[DEBUG]");
        assert_eq!(Level::Warn.to_string(), "[WARN]");
        assert_eq!(Level::Error.to_string(), "[ERROR]");
        assert_eq!(Level::Plain.to_string(), "");
    }

    #[test]
    fn test_plain_has_no_prefix() {
        let ts = timestamp();
        assert_eq!(
            format_line(Level::Plain, &ts, format_args!("hi {}", "x")),
            "hi x"
        );
    }

    #[test]
    fn test_ensure_newline() {
        assert_eq!(ensure_newline("a".to_string()), "a\n");
        assert_eq!(ensure_newline("a\n".to_string()), "a\n");
        assert_eq!(ensure_newline("a\n\n".to_string()), "a\n\n");
        assert_eq!(ensure_newline(String::new()), "\n");
    }
}
