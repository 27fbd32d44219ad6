use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use arbcalc::{
    init_tracing,
    repl::{BANNER, Outcome, PROMPT, Session},
};
use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::error;

/// arbcalc evaluates arithmetic expressions with 256-bit precision.
///
/// Without arguments an interactive session starts. Set `ARBCALC_LOG` (for
/// example `ARBCALC_LOG=debug`) to see diagnostics on stderr.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates this expression, prints the result and exits.
    expression: Option<String>,

    /// Evaluates every line of a script file, commands included.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Skips the greeting of the interactive session.
    #[arg(long)]
    no_banner: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let mut session = match Session::new() {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Failed to start: {e}");
            return ExitCode::FAILURE;
        },
    };

    let result = if let Some(expression) = args.expression {
        run_once(&mut session, &expression)
    } else if let Some(path) = args.file {
        run_script(&mut session, &path)
    } else {
        run_repl(&mut session, !args.no_banner)
    };

    result.unwrap_or_else(|e| {
        eprintln!("{e}");
        ExitCode::FAILURE
    })
}

fn run_once(session: &mut Session, expression: &str) -> io::Result<ExitCode> {
    let outcome = session.process_line(expression, &mut io::stdout())?;
    Ok(if matches!(outcome, Outcome::Rejected(_)) { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn run_script(session: &mut Session, path: &Path) -> io::Result<ExitCode> {
    let script = fs::read_to_string(path).map_err(|e| {
        let message = format!("Failed to read the script file '{}': {e}", path.display());
        io::Error::new(e.kind(), message)
    })?;

    let mut stdout = io::stdout();
    let mut failed = false;
    for line in script.lines() {
        match session.process_line(line, &mut stdout)? {
            Outcome::Exit => break,
            Outcome::Rejected(_) => failed = true,
            Outcome::Skipped | Outcome::Command | Outcome::Evaluated(_) => {},
        }
    }
    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn run_repl(session: &mut Session, banner: bool) -> io::Result<ExitCode> {
    let mut editor = DefaultEditor::new().map_err(io::Error::other)?;
    let mut stdout = io::stdout();
    if banner {
        writeln!(stdout, "{BANNER}")?;
    }

    while session.is_running() {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if let Err(e) = editor.add_history_entry(line.as_str()) {
                    error!(error = %e, "failed to record history");
                }
                session.process_line(&line, &mut stdout)?;
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(io::Error::other(e)),
        }
    }
    Ok(ExitCode::SUCCESS)
}
