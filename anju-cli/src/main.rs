//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = anju_cli::run() {
        eprintln!("anju: {err}");
        std::process::exit(1);
    }
}
