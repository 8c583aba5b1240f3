//! Shared harness for the CLI integration tests.
//!
//! `run_cli` drives the library entry point with scripted stdin and returns
//! exit code plus captured streams. `clean_env` removes every `DRAWPOKER_*`
//! variable so configuration falls back to defaults; callers that touch the
//! environment run under `#[serial]`.

#![allow(dead_code)]

use std::io::Cursor;

pub const ENV_VARS: &[&str] = &[
    "DRAWPOKER_CONFIG",
    "DRAWPOKER_SEED",
    "DRAWPOKER_CREDITS",
    "DRAWPOKER_BET",
    "DRAWPOKER_POLICY",
];

pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str], stdin: &str) -> CliResult {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut input = Cursor::new(stdin.as_bytes().to_vec());
    let argv = std::iter::once("drawpoker").chain(args.iter().copied());
    let exit_code = drawpoker_cli::run_with_input(argv, &mut out, &mut err, &mut input);
    CliResult {
        exit_code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}

pub fn clean_env() {
    for key in ENV_VARS {
        unsafe {
            std::env::remove_var(key);
        }
    }
}
