#![feature(test)]

extern crate test;

use dlog::{Logger, Severity};
use test::Bencher;

fn file_logger(dir: &temp_dir::TempDir) -> Logger {
    let logger = Logger::new();
    logger.init("bench", Severity::Error, "");
    logger.set_log_file(dir.child("bench.log"));
    logger
}

#[bench]
fn b10_not_initialized(b: &mut Bencher) {
    let logger = Logger::new();
    b.iter(|| use_error(&logger));
}

#[bench]
fn b20_relevant_logs(b: &mut Bencher) {
    let dir = temp_dir::TempDir::new().unwrap();
    let logger = file_logger(&dir);
    b.iter(|| use_error(&logger));
}

#[bench]
fn b30_suppressed_logs(b: &mut Bencher) {
    let dir = temp_dir::TempDir::new().unwrap();
    let logger = file_logger(&dir);
    b.iter(|| use_debug(&logger));
}

fn use_error(logger: &Logger) {
    for i in 1..100 {
        dlog::errorf!(logger: logger, "This is error message no {}", i);
    }
}
fn use_debug(logger: &Logger) {
    for i in 1..100 {
        dlog::debugf!(logger: logger, "This is debug message no {}", i);
    }
}
