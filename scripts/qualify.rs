#!/usr/bin/env rust-script
//! ```cargo
//! [dependencies]
//! yansi = "0.5"
//! ```
extern crate yansi;
use std::process::Command;

// Feature sets that change what gets compiled: the clap flags, and the POSIX syslog call.
const FEATURE_SETS: [&str; 4] = [
    "--no-default-features",
    "--no-default-features --features syslog_call",
    "",
    "--all-features",
];

fn run(cmd: &str) {
    println!("\n> {}", yansi::Paint::yellow(cmd));
    let mut chips = cmd.split_whitespace();
    let Some(program) = chips.next() else { return };
    let status = Command::new(program).args(chips).status();
    if !status.is_ok_and(|s| s.success()) {
        println!("> {}", yansi::Paint::red("qualify terminates due to error"));
        std::process::exit(-1);
    }
}

fn main() {
    println!("Qualify dlog");

    run("cargo fmt --check");

    // minimal supported rust version
    std::fs::remove_file("Cargo.lock").ok();
    run("cargo +1.85.0 build --all-features");

    for features in FEATURE_SETS {
        run(&format!("cargo clippy --all-targets {features} -- -D warnings"));
        run(&format!("cargo test {features}"));
    }

    // the fatal-exit tests spawn the test binary again, also in release mode
    run("cargo test --release --all-features --test test_process_exit");

    run("cargo +nightly bench");
    run("cargo +nightly doc --all-features --no-deps");

    let output = Command::new("git").args(["status", "-s"]).output();
    if !output.is_ok_and(|o| o.stdout.is_empty()) {
        println!("> {}", yansi::Paint::red("there are uncommitted files"));
        std::process::exit(-1);
    }

    println!("\n> all done, ready for \"git push\" and \"cargo publish\"");
}
