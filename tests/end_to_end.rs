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
use std::time::Duration;
use std::time::Instant;

use flushlog::Logger;
use flushlog::options;
use rand::Rng;
use rand::distr::Alphanumeric;
use tempfile::TempDir;

fn is_timestamp(s: &str) -> bool {
    // YYYY-MM-DD HH:MM:SS
    let bytes = s.as_bytes();
    bytes.len() == 19
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            10 => *b == b' ',
            13 | 16 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}

#[test]
fn test_info_line_written_on_close() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let log_dir = format!("{}/tmp-log/", temp_dir.path().display());

    let logger = Logger::new([
        options::open_write_file(),
        options::directory(log_dir.clone()),
        options::filename("t.log"),
        options::flush_interval(Duration::from_secs(1)),
    ])
    .unwrap();
    logger.infof(format_args!("n={}", 7));
    logger.close();

    let content = fs::read_to_string(format!("{log_dir}t.log")).unwrap();
    let line = content.strip_suffix('\n').unwrap();
    assert!(!line.contains('\n'), "expected exactly one line: {content:?}");

    let rest = line.strip_prefix("[INFO] ").unwrap();
    let (timestamp, message) = rest.split_once(": ").unwrap();
    assert!(is_timestamp(timestamp), "unexpected timestamp: {timestamp:?}");
    assert_eq!(message, "n=7");
}

#[test]
fn test_file_sink_disabled_creates_nothing() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let log_dir = temp_dir.path().join("never");

    let logger = Logger::new([
        options::directory(log_dir.to_string_lossy()),
        options::filename("t.log"),
    ])
    .unwrap();
    logger.infof(format_args!("dropped"));
    logger.close();

    assert!(!log_dir.exists());
    assert!(!logger.options().write_file());
}

#[test]
fn test_periodic_flush_reaches_file() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");

    let logger = Logger::builder()
        .open_write_file()
        .directory(temp_dir.path().to_string_lossy())
        .filename("tick.log")
        .flush_interval(Duration::from_secs(1))
        .build()
        .unwrap();
    logger.warnf(format_args!("waiting for the flusher"));

    let filepath = temp_dir.path().join("tick.log");
    let deadline = Instant::now() + Duration::from_secs(10);
    let mut content = String::new();
    while Instant::now() < deadline {
        content = fs::read_to_string(&filepath).unwrap();
        if !content.is_empty() {
            break;
        }
        std::thread::sleep(Duration::from_millis(50));
    }
    assert!(content.starts_with("[WARN] "));
    assert!(content.ends_with(": waiting for the flusher\n"));

    logger.close();
    assert_eq!(fs::read_to_string(&filepath).unwrap(), content);
}

#[test]
fn test_close_keeps_every_line_in_order() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");

    let logger = Logger::builder()
        .open_write_file()
        .directory(temp_dir.path().to_string_lossy())
        .filename("many.log")
        .build()
        .unwrap();

    let lines = (0..200).map(|_| generate_random_string()).collect::<Vec<_>>();
    for line in &lines {
        logger.printf(format_args!("{line}"));
    }
    logger.close();

    let content = fs::read_to_string(temp_dir.path().join("many.log")).unwrap();
    assert_eq!(content.lines().collect::<Vec<_>>(), lines);
}

#[test]
fn test_reopen_appends() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let build = || {
        Logger::builder()
            .open_write_file()
            .directory(temp_dir.path().to_string_lossy())
            .filename("append.log")
            .build()
            .unwrap()
    };

    let logger = build();
    logger.printf(format_args!("first"));
    logger.close();

    let logger = build();
    logger.printf(format_args!("second"));
    logger.close();

    let content = fs::read_to_string(temp_dir.path().join("append.log")).unwrap();
    assert_eq!(content, "first\nsecond\n");
}

#[test]
fn test_unwritable_directory_fails_construction() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let err = Logger::builder()
        .open_write_file()
        .directory(blocker.join("logs").to_string_lossy())
        .filename("t.log")
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("failed to create log directory"));
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
