use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use ysh::{Environment, shell};

/// ysh evaluates the expressions of shell scripts: arithmetic, lists,
/// tuples, functions and error values.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to run. Reads standard input when absent or `-`.
    input: Option<PathBuf>,

    /// Evaluates this line instead of reading a script.
    #[arg(short, long, conflicts_with = "input")]
    expr: Option<String>,

    /// Keeps going after a line fails instead of stopping.
    #[arg(short = 'k', long)]
    keep_going: bool,

    /// Does not print the values of expressions.
    #[arg(short, long)]
    quiet: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("YSH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr))
                                  .with(filter)
                                  .init();
}

fn read_script(args: &Args) -> io::Result<String> {
    if let Some(line) = &args.expr {
        return Ok(line.clone());
    }

    match &args.input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path),
        _ => {
            let mut script = String::new();
            io::stdin().read_to_string(&mut script)?;
            Ok(script)
        },
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let script = match read_script(&args) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("Failed to read the input: {e}");
            return ExitCode::FAILURE;
        },
    };

    let mut env = Environment::new();
    let mut failed = false;

    for line in shell::logical_lines(&script) {
        match shell::run_line(&line.text, &mut env) {
            Ok(values) => {
                if !args.quiet {
                    for value in values {
                        println!("{value}");
                    }
                }
            },
            Err(e) => {
                eprintln!("line {}: {e}", line.number);
                failed = true;
                if !args.keep_going {
                    break;
                }
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Args;

    #[test]
    fn keep_going_has_a_long_and_a_short_form() {
        let long = Args::try_parse_from(["ysh", "--keep-going", "-e", "1"]).unwrap();
        let short = Args::try_parse_from(["ysh", "-k", "script.ysh"]).unwrap();

        assert!(long.keep_going);
        assert!(short.keep_going);
        assert_eq!(long.expr.as_deref(), Some("1"));
    }

    #[test]
    fn continue_is_not_a_flag() {
        assert!(Args::try_parse_from(["ysh", "--continue"]).is_err());
        assert!(Args::try_parse_from(["ysh", "-c"]).is_err());
    }

    #[test]
    fn expr_conflicts_with_input() {
        assert!(Args::try_parse_from(["ysh", "-e", "1", "script.ysh"]).is_err());
    }
}
