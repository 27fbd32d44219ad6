use std::io::{self, Write};

use tracing::{debug, error, warn};

use crate::{
    error::Error,
    interpreter::{evaluator::core::Context, value::core::Number},
    repl::commands::CommandTable,
};

/// The `-` commands and their lookup table.
///
/// Maps the literal command word to a zero-argument action on the session,
/// using the same FNV-1a hash as the symbol table.
pub mod commands;

/// Longest accepted input line, in bytes.
pub const INPUT_BUFFER: usize = 512;

/// Variable that receives the value of every successful line.
pub const LAST_RESULT: &str = "last";

/// Prompt printed before each interactive line.
pub const PROMPT: &str = ">> ";

/// Greeting printed when an interactive session starts.
pub const BANNER: &str = "This is a simple interpreter of math expressions. Here you can:\n1- Get \
                          the result of an expression.\n2- Create variables with numeric \
                          values.\nType -help to see the commands.\n";

/// What [`Session::process_line`] did with a line.
#[derive(Debug)]
pub enum Outcome {
    /// The line was empty.
    Skipped,
    /// The line was a command and the session keeps running.
    Command,
    /// The line was evaluated; the value is also stored under
    /// [`LAST_RESULT`].
    Evaluated(Number),
    /// The line failed; the error has been reported.
    Rejected(Error),
    /// The line was `-exit`.
    Exit,
}

/// One interactive session: the evaluation context plus the command table.
///
/// The session is agnostic of where lines come from. The binary feeds it from
/// a line editor, a script file or the command line; tests feed it strings.
///
/// # Example
/// ```
/// use arbcalc::repl::{Outcome, Session};
///
/// let mut session = Session::new().unwrap();
/// let mut out = Vec::new();
///
/// session.process_line("2 * 21", &mut out).unwrap();
/// let outcome = session.process_line("last + 0", &mut out).unwrap();
///
/// assert!(matches!(outcome, Outcome::Evaluated(_)));
/// assert_eq!(String::from_utf8(out).unwrap(),
///            "Result: 42.00000000\nResult: 42.00000000\n");
/// ```
pub struct Session {
    context:  Context,
    commands: CommandTable,
    running:  bool,
}

impl Session {
    /// Creates a session with no variables.
    ///
    /// # Errors
    /// Fails if the evaluation context cannot be built.
    pub fn new() -> Result<Self, Error> {
        Ok(Self { context:  Context::new()?,
                  commands: CommandTable::new(),
                  running:  true, })
    }

    /// Handles one line of input.
    ///
    /// The trailing newline, if any, is stripped and empty lines are skipped.
    /// A line starting with `-` is first looked up in the command table; if
    /// its first word is not a command, the line is evaluated like any other
    /// (so `-3 + 1` is arithmetic). Results and error messages are written to
    /// `out`.
    ///
    /// # Parameters
    /// - `line`: The raw line.
    /// - `out`: Destination of results, command output and error messages.
    ///
    /// # Errors
    /// Only I/O errors from `out`. Evaluation failures are reported through
    /// [`Outcome::Rejected`].
    pub fn process_line(&mut self, line: &str, out: &mut dyn Write) -> io::Result<Outcome> {
        let line = line.trim_end_matches(['\n', '\r']);
        if line.is_empty() {
            debug!("empty input, skipping");
            return Ok(Outcome::Skipped);
        }

        if line.len() > INPUT_BUFFER {
            return Self::reject(Error::InputTooLong { length: line.len(),
                                                     limit:  INPUT_BUFFER, },
                               out);
        }

        if line.starts_with('-')
           && let Some(command) = self.commands.lookup(line)
        {
            debug!(command = line, "executing command");
            command(self, out)?;
            return Ok(if self.running { Outcome::Command } else { Outcome::Exit });
        }

        match self.context.eval_line(line) {
            Ok(value) => {
                writeln!(out, "Result: {value}")?;
                self.context
                    .symbols_mut()
                    .insert_or_update(LAST_RESULT, &value);
                Ok(Outcome::Evaluated(value))
            },
            Err(e) => Self::reject(e, out),
        }
    }

    fn reject(e: Error, out: &mut dyn Write) -> io::Result<Outcome> {
        if e.is_structural() {
            error!(error = %e, "evaluation failed");
        } else {
            warn!(error = %e, "input rejected");
        }
        writeln!(out, "Error: {e}")?;
        Ok(Outcome::Rejected(e))
    }

    /// Returns `false` once `-exit` has run.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Ends the session.
    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// The evaluation context.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Mutable access to the evaluation context.
    pub const fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    /// The command table.
    #[must_use]
    pub const fn commands(&self) -> &CommandTable {
        &self.commands
    }
}
