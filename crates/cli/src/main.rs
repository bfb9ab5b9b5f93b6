use std::process::ExitCode;

fn main() -> ExitCode {
    pricecraft_cli::run()
}
