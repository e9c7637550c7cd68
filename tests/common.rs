#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rdailylog::store::Store;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Fixed "today" used by the CLI tests: a Friday.
pub const TODAY: &str = "2026-10-16";

pub fn rdl() -> Command {
    cargo_bin_cmd!("rdailylog")
}

/// `rdailylog --data <data> --today <TODAY> <args…>`
pub fn rdl_at(data: &str, args: &[&str]) -> Command {
    let mut cmd = rdl();
    cmd.args(["--data", data, "--today", TODAY]).args(args);
    cmd
}

/// Create a unique data file path inside the system temp dir and remove any
/// existing file (and its operation log)
pub fn setup_data(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdailylog.json", name));
    let data_path = path.to_string_lossy().to_string();
    fs::remove_file(&data_path).ok();
    fs::remove_file(path.with_extension("log")).ok();
    data_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the data file and add a small day of work for `TODAY`
pub fn init_with_data(data: &str) {
    rdl_at(data, &["--test", "init"]).assert().success();

    rdl_at(data, &["add", "09:00", "12:00", "code", "review"])
        .assert()
        .success();
    rdl_at(data, &["add", "13:00", "17:00", "feature", "work"])
        .assert()
        .success();
}

/// Store on a fresh file inside `dir`, pinned to `today`
pub fn store_in(dir: &tempfile::TempDir, today: &str) -> Store {
    let date = chrono::NaiveDate::parse_from_str(today, "%Y-%m-%d").expect("valid date");
    Store::new(dir.path().join("data.json")).with_today(date)
}
