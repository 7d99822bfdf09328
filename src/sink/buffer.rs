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

/// Number of buffered bytes at which a synchronous flush is triggered.
pub const DEFAULT_THRESHOLD: usize = 2048;

/// In-memory bytes not yet handed to the file writer.
#[derive(Debug)]
pub(crate) struct Accumulator {
    buf: Vec<u8>,
    threshold: usize,
}

impl Default for Accumulator {
    fn default() -> Self {
        Accumulator::new(DEFAULT_THRESHOLD)
    }
}

impl Accumulator {
    pub(crate) fn new(threshold: usize) -> Self {
        Self {
            buf: Vec::with_capacity(threshold),
            threshold,
        }
    }

    /// Append a line at the tail. Nothing is appended if the buffer cannot grow.
    pub(crate) fn append(&mut self, line: &str) -> Result<(), Error> {
        self.buf.try_reserve(line.len()).map_err(|err| {
            Error::new("failed to grow log buffer")
                .with_context("buffered", self.buf.len())
                .with_context("requested", line.len())
                .with_source(err)
        })?;
        self.buf.extend_from_slice(line.as_bytes());
        Ok(())
    }

    /// Whether the buffered bytes reached the threshold.
    pub(crate) fn exceeds(&self) -> bool {
        self.buf.len() >= self.threshold
    }

    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub(crate) fn clear(&mut self) {
        self.buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive() {
        let mut acc = Accumulator::new(8);
        acc.append("1234567").unwrap();
        assert!(!acc.exceeds());
        acc.append("8").unwrap();
        assert!(acc.exceeds());
        assert_eq!(acc.len(), 8);
    }

    #[test]
    fn test_append_keeps_order_and_clear_empties() {
        let mut acc = Accumulator::default();
        acc.append("a\n").unwrap();
        acc.append("b\n").unwrap();
        assert_eq!(acc.as_bytes(), b"a\nb\n");
        assert!(!acc.exceeds());

        acc.clear();
        assert!(acc.is_empty());
        assert_eq!(acc.len(), 0);
    }

    #[test]
    fn test_default_threshold() {
        let mut acc = Accumulator::default();
        acc.append(&"x".repeat(DEFAULT_THRESHOLD - 1)).unwrap();
        assert!(!acc.exceeds());
        acc.append("x").unwrap();
        assert!(acc.exceeds());
    }
}
