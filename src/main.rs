use std::io;
use std::process::ExitCode;

use chess_board::cli::{self, Options};

fn main() -> ExitCode {
    let options = match Options::from_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: chess_board [--legacy-pawns] [--no-targets]");
            return ExitCode::from(2);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = cli::run(stdin.lock(), stdout.lock(), options) {
        eprintln!("io error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
