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
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::time::Duration;

use crate::Error;
use crate::Trap;
use crate::sink::buffer::Accumulator;
use crate::sink::flusher::FlusherGuard;

/// The accumulator and the writer it drains into, always accessed under one lock.
pub(crate) struct State {
    accumulator: Accumulator,
    writer: Option<Box<dyn Write + Send>>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("accumulator", &self.accumulator)
            .field("closed", &self.writer.is_none())
            .finish()
    }
}

impl State {
    /// Hand the accumulated bytes to the writer and clear the accumulator.
    ///
    /// The accumulator is cleared even if the write fails, so those bytes are lost.
    pub(crate) fn flush_accumulator(&mut self, trap: &dyn Trap) {
        if self.accumulator.is_empty() {
            return;
        }

        match self.writer.as_mut() {
            Some(writer) => {
                if let Err(err) = writer.write_all(self.accumulator.as_bytes()) {
                    let err = Error::new("failed to write log buffer")
                        .with_context("bytes", self.accumulator.len())
                        .with_source(err);
                    trap.trap(&err);
                }
            }
            None => {
                let err = Error::new("failed to write log buffer: log file is closed")
                    .with_context("bytes", self.accumulator.len());
                trap.trap(&err);
            }
        }

        self.accumulator.clear();
    }

    /// Push whatever the writer buffered through to the file.
    pub(crate) fn flush_writer(&mut self, trap: &dyn Trap) {
        if let Some(writer) = self.writer.as_mut() {
            if let Err(err) = writer.flush() {
                let err = Error::new("failed to flush log file").with_source(err);
                trap.trap(&err);
            }
        }
    }
}

/// The buffered file sink: accumulator, writer and background flusher.
#[derive(Debug)]
pub(crate) struct FileSink {
    state: Arc<Mutex<State>>,
    flusher: Mutex<Option<FlusherGuard>>,
    trap: Arc<dyn Trap>,
}

impl FileSink {
    pub(crate) fn new(
        writer: impl Write + Send + 'static,
        accumulator: Accumulator,
        flush_interval: Duration,
        trap: Arc<dyn Trap>,
    ) -> Result<FileSink, Error> {
        let state = Arc::new(Mutex::new(State {
            accumulator,
            writer: Some(Box::new(writer)),
        }));

        let flusher = FlusherGuard::spawn(
            "flushlog-flusher".to_string(),
            flush_interval,
            state.clone(),
            trap.clone(),
        )
        .map_err(|err| Error::new("failed to spawn log flusher thread").with_source(err))?;

        Ok(FileSink {
            state,
            flusher: Mutex::new(Some(flusher)),
            trap,
        })
    }

    fn state(&self) -> MutexGuard<'_, State> {
        lock_state(&self.state)
    }

    /// Buffer one line, flushing synchronously once the threshold is reached.
    pub(crate) fn append(&self, line: &str) {
        let mut state = self.state();

        if state.writer.is_none() {
            let err = Error::new("failed to append log line: log file is closed")
                .with_context("bytes", line.len());
            self.trap.trap(&err);
            return;
        }

        if let Err(err) = state.accumulator.append(line) {
            self.trap.trap(&err);
            return;
        }

        if state.accumulator.exceeds() {
            state.flush_accumulator(self.trap.as_ref());
        }
    }

    /// Drain the accumulator and push the writer's buffer to the file.
    pub(crate) fn flush(&self) {
        let mut state = self.state();
        state.flush_accumulator(self.trap.as_ref());
        state.flush_writer(self.trap.as_ref());
    }

    /// Stop the flusher, flush everything and release the file handle.
    pub(crate) fn close(&self) {
        // the flusher takes the state lock on every tick, so it must be joined before locking
        let flusher = self
            .flusher
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        drop(flusher);

        let mut state = self.state();
        if state.writer.is_none() {
            return;
        }
        state.flush_accumulator(self.trap.as_ref());
        state.flush_writer(self.trap.as_ref());
        state.writer = None;
    }

    #[cfg(test)]
    pub(crate) fn buffered_len(&self) -> usize {
        self.state().accumulator.len()
    }

    #[cfg(test)]
    pub(crate) fn is_closed(&self) -> bool {
        self.state().writer.is_none()
    }
}

pub(crate) fn lock_state(state: &Mutex<State>) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}
