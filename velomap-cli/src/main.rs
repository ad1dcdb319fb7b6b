//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use velomap_cli::{CliError, run};

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on standard error"
)]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("velomap: {err}");
            std::process::exit(1);
        }
    }
}
