//! tungshing - Chinese almanac (通胜/黄历) and Four Pillars toolkit

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = tungshing::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
