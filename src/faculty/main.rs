//! `faculty` binary: a thin shell around the library.
//!
//! See [`cli`] for argument handling and the interactive menu.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
