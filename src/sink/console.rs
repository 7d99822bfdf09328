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

use std::io;
use std::io::Write;
#[cfg(test)]
use std::sync::Arc;
#[cfg(test)]
use std::sync::Mutex;

/// Where printed lines go.
#[derive(Debug, Default)]
pub(crate) enum Console {
    #[default]
    Stdout,
    #[cfg(test)]
    Capture(Arc<Mutex<Vec<String>>>),
}

impl Console {
    /// Print one line, followed by a newline. Failures are ignored.
    pub(crate) fn print(&self, line: &str) {
        match self {
            Console::Stdout => {
                let _ = writeln!(io::stdout().lock(), "{line}");
            }
            #[cfg(test)]
            Console::Capture(lines) => {
                lines
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .push(line.to_string());
            }
        }
    }
}
