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

//! The console sink and the buffered file sink.

pub use self::buffer::DEFAULT_THRESHOLD;
pub use self::writer::FileWriter;
pub use self::writer::FileWriterBuilder;

pub(crate) use self::buffer::Accumulator;
pub(crate) use self::console::Console;
pub(crate) use self::file::FileSink;

mod buffer;
mod console;
mod file;
mod flusher;
mod writer;
