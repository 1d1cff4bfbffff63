use std::process::ExitCode;

use rest_smoke_cli::cli::Variant;

fn main() -> ExitCode {
    rest_smoke_cli::run(Variant::Authenticated)
}
