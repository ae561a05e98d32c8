use std::{fs, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use lineval::{Options, Session, run_interactive, run_lines};
use tracing::Level;

/// lineval interprets a tiny arithmetic language one line at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to run line by line. Starts an interactive prompt when omitted.
    file: Option<PathBuf>,

    /// Do not echo the tokens of each line.
    #[arg(long)]
    no_tokens: bool,

    /// Reject a `-` at the start of an operand instead of negating it.
    #[arg(long)]
    strict: bool,

    /// Most verbose diagnostics written to standard error.
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt().with_max_level(args.log_level)
                             .with_writer(io::stderr)
                             .init();

    let mut session = Session::with_options(Options { echo_tokens: !args.no_tokens,
                                                      unary_minus: !args.strict, });

    let result = match &args.file {
        Some(path) => {
            let bytes = match fs::read(path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    eprintln!("Failed to open file: {}: {e}", path.display());
                    return ExitCode::FAILURE;
                },
            };
            let script = String::from_utf8_lossy(&bytes);
            run_lines(&script, &mut session, &mut io::stdout().lock(), &mut io::stderr().lock())
                .map(|_| ())
        },
        None => run_interactive(io::stdin().lock(),
                                &mut session,
                                &mut io::stdout().lock(),
                                &mut io::stderr().lock()),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
