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

use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::Error;

/// A buffered writer appending to a single log file.
#[derive(Debug)]
pub struct FileWriter {
    filepath: PathBuf,
    writer: BufWriter<File>,
}

impl FileWriter {
    /// The path of the underlying file.
    pub fn filepath(&self) -> &Path {
        &self.filepath
    }
}

impl Write for FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// A builder for configuring [`FileWriter`].
#[derive(Debug)]
pub struct FileWriterBuilder {
    // required
    filepath: PathBuf,
}

impl FileWriterBuilder {
    /// Creates a new [`FileWriterBuilder`].
    #[must_use]
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            filepath: filepath.into(),
        }
    }

    /// Builds the [`FileWriter`].
    ///
    /// # Errors
    ///
    /// Return an error if either:
    ///
    /// * The log directory cannot be created.
    /// * The log file cannot be opened for append.
    pub fn build(self) -> Result<FileWriter, Error> {
        let FileWriterBuilder { filepath } = self;

        let dir = filepath.parent().ok_or_else(|| {
            Error::new("failed to get log directory").with_context("path", filepath.display())
        })?;
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|err| {
                Error::new("failed to create log directory")
                    .with_context("path", dir.display())
                    .with_source(err)
            })?;
        }

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&filepath)
            .map_err(|err| {
                Error::new("failed to open log file")
                    .with_context("path", filepath.display())
                    .with_source(err)
            })?;

        Ok(FileWriter {
            filepath,
            writer: BufWriter::new(file),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rand::Rng;
    use rand::distr::Alphanumeric;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let filepath = temp_dir.path().join("nested").join("app.log");

        let mut writer = FileWriterBuilder::new(&filepath).build().unwrap();
        assert_eq!(writer.filepath(), filepath.as_path());

        let rand_str = generate_random_string();
        writer.write_all(rand_str.as_bytes()).unwrap();
        writer.flush().unwrap();

        assert_eq!(fs::read_to_string(&filepath).unwrap(), rand_str);
    }

    #[test]
    fn test_appends_to_existing_file() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let filepath = temp_dir.path().join("app.log");
        fs::write(&filepath, "existing\n").unwrap();

        let mut writer = FileWriterBuilder::new(&filepath).build().unwrap();
        writer.write_all(b"appended\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(
            fs::read_to_string(&filepath).unwrap(),
            "existing\nappended\n"
        );
    }

    #[test]
    fn test_directory_blocked_by_file() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = FileWriterBuilder::new(blocker.join("app.log"))
            .build()
            .unwrap_err();
        assert_eq!(err.message(), "failed to create log directory");
    }

    fn generate_random_string() -> String {
        let mut rng = rand::rng();
        let len = rng.random_range(50..=100);
        std::iter::repeat(())
            .map(|()| rng.sample(Alphanumeric))
            .map(char::from)
            .take(len)
            .collect()
    }
}
