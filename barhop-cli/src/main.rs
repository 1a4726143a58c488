//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use barhop_cli::CliError;

#[expect(clippy::print_stderr, reason = "the binary reports failures on stderr")]
fn main() {
    match barhop_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("barhop: {err}");
            std::process::exit(1);
        }
    }
}
