
use cond_sync::{CondSync, Other};
use dlog::{Logger, Severity};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    sync::Arc,
    thread::JoinHandle,
};
use temp_dir::TempDir;

const NO_OF_THREADS: usize = 8;
const NO_OF_LOGLINES_PER_THREAD: usize = 100;

// All threads start logging at the same moment; every line must arrive exactly once,
// and each thread's lines must arrive in the order it wrote them.
#[test]
fn test_multi_threaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("mt.log");

    let (logger, _buffer, exits, _syslog) = test_utils::recording_logger();
    logger.init("mt", Severity::Info, "");
    logger.set_log_file(&path);
    let logger = Arc::new(logger);

    let cond_sync = CondSync::new(0_usize);
    let worker_handles = start_worker_threads(&logger, &cond_sync);
    for handle in worker_handles {
        handle.join().unwrap();
    }
    assert!(exits.aborts.lock().unwrap().is_empty());

    verify_logs(&File::open(&path).unwrap());
}

fn start_worker_threads(logger: &Arc<Logger>, cond_sync: &CondSync<usize>) -> Vec<JoinHandle<()>> {
    (0..NO_OF_THREADS)
        .map(|thread_number| {
            let logger = Arc::clone(logger);
            let cond_sync = cond_sync.clone();
            std::thread::Builder::new()
                .name(thread_number.to_string())
                .spawn(move || {
                    cond_sync
                        .modify_and_notify(|value| *value += 1, Other::All)
                        .unwrap();
                    cond_sync
                        .wait_until(|value| *value == NO_OF_THREADS)
                        .unwrap();
                    for line_number in 0..NO_OF_LOGLINES_PER_THREAD {
                        dlog::infof!(logger: logger, "XXXXX {thread_number} {line_number}");
                        dlog::debugf!(logger: logger, "ERROR_IF_PRINTED");
                    }
                })
                .unwrap()
        })
        .collect()
}

fn verify_logs(file: &File) {
    let mut next_expected = [0_usize; NO_OF_THREADS];
    let mut line_count = 0;
    for line in BufReader::new(file).lines() {
        let line = line.unwrap();
        assert!(!line.contains("ERROR_IF_PRINTED"));
        let (_, payload) = line
            .split_once("] [mt] [INFO] XXXXX ")
            .unwrap_or_else(|| panic!("unexpected line: {line}"));
        let (thread_number, line_number) = payload.split_once(' ').unwrap();
        let thread_number: usize = thread_number.parse().unwrap();
        let line_number: usize = line_number.parse().unwrap();
        assert_eq!(line_number, next_expected[thread_number]);
        next_expected[thread_number] += 1;
        line_count += 1;
    }
    assert_eq!(line_count, NO_OF_THREADS * NO_OF_LOGLINES_PER_THREAD);
}
