//! Terminal entry point for mohul.
//!
//! All argument handling and interaction lives in [`cli`]; this file only maps
//! a fatal error to a message and a non-zero exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
