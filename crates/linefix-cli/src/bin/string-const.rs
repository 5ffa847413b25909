// Usage: string-const -c|-d < in > out
//
// Exactly one positional flag. Anything else prints the usage line and
// exits 1 before touching stdin.

use std::process::ExitCode;

use linefix_cli::cmd::strconst::filter_stdio;
use linefix_cli::logging;
use linefix_core::Mode;

fn main() -> ExitCode {
    logging::init();

    let args: Vec<_> = std::env::args_os().skip(1).collect();
    let mode = match args.as_slice() {
        [flag] => flag.to_str().and_then(|f| Mode::from_flag(f).ok()),
        _ => None,
    };
    let Some(mode) = mode else {
        eprintln!("{}", linefix_core::strconst::USAGE);
        return ExitCode::from(1);
    };

    match filter_stdio(mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("string-const: {e:#}");
            ExitCode::FAILURE
        }
    }
}
