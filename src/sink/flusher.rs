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
use std::sync::Arc;
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::Receiver;
use crossbeam_channel::RecvTimeoutError;
use crossbeam_channel::Sender;
use crossbeam_channel::bounded;

use crate::Trap;
use crate::sink::file::State;
use crate::sink::file::lock_state;

/// A guard that stops the background flusher on drop.
///
/// The flusher drains the accumulator every interval. A slow flush delays the next tick; ticks
/// are never queued. Dropping the guard wakes the flusher, which exits without a final flush,
/// and then waits for its thread to finish.
#[derive(Debug)]
pub(crate) struct FlusherGuard(Option<Inner>);

#[derive(Debug)]
struct Inner {
    shutdown: Sender<()>,
    handle: JoinHandle<()>,
}

impl FlusherGuard {
    pub(crate) fn spawn(
        thread_name: String,
        interval: Duration,
        state: Arc<Mutex<State>>,
        trap: Arc<dyn Trap>,
    ) -> io::Result<FlusherGuard> {
        let (shutdown, receiver) = bounded(1);
        let worker = Worker {
            interval,
            state,
            trap,
            shutdown: receiver,
        };

        let handle = std::thread::Builder::new()
            .name(thread_name)
            .spawn(move || worker.run())?;

        Ok(FlusherGuard(Some(Inner { shutdown, handle })))
    }
}

impl Drop for FlusherGuard {
    fn drop(&mut self) {
        if let Some(Inner { shutdown, handle }) = self.0.take() {
            // dropping the sender disconnects the channel and wakes the worker
            drop(shutdown);
            if handle.join().is_err() {
                eprintln!("log flusher thread panicked");
            }
        }
    }
}

struct Worker {
    interval: Duration,
    state: Arc<Mutex<State>>,
    trap: Arc<dyn Trap>,
    shutdown: Receiver<()>,
}

impl Worker {
    fn run(self) {
        loop {
            match self.shutdown.recv_timeout(self.interval) {
                Err(RecvTimeoutError::Timeout) => self.tick(),
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    }

    fn tick(&self) {
        let mut state = lock_state(&self.state);
        state.flush_accumulator(self.trap.as_ref());
        state.flush_writer(self.trap.as_ref());
    }
}
