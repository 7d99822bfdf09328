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

use std::time::Duration;

use flushlog::Logger;

fn main() {
    let logger = Logger::builder()
        .open_print()
        .open_write_file()
        .directory("./log/")
        .filename("buffered_file.log")
        .flush_interval(Duration::from_secs(1))
        .build()
        .unwrap();

    logger.printf(format_args!("this is printf, {}", 1));
    logger.infof(format_args!("this is info, {}", 2));
    logger.debugf(format_args!("this is debug, {}", 3));
    logger.errorf(format_args!("this is error, {}", 4));
    logger.warnf(format_args!("this is warn, {}", 5));

    // the background flusher writes these without an explicit flush
    std::thread::sleep(Duration::from_millis(1500));

    logger.close();
}
