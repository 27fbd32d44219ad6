use std::{
    collections::HashMap,
    io::{self, Write},
};

use tracing::debug;

use crate::{interpreter::value::core::PRECISION, repl::Session, util::hash::FnvBuildHasher};

/// An action bound to a command word.
pub type Command = fn(&mut Session, &mut dyn Write) -> io::Result<()>;

/// Every command with its one-line description, in help order.
pub const COMMANDS: [(&str, &str, Command); 6] =
    [("-exit", "to leave the interpreter", exit),
     ("-clear", "to clean the terminal", clear_screen),
     ("-clear-vars", "to delete all variables", clear_vars),
     ("-help", "to see the commands", help),
     ("-show", "to see the current variables", show),
     ("-info", "information about the interpreter", info)];

/// Lookup table from command word to [`Command`].
///
/// # Example
/// ```
/// use arbcalc::repl::commands::CommandTable;
///
/// let table = CommandTable::new();
/// assert!(table.lookup("-help").is_some());
/// assert!(table.lookup("-show everything").is_some());
/// assert!(table.lookup("-3 + 1").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct CommandTable {
    commands: HashMap<&'static str, Command, FnvBuildHasher>,
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandTable {
    /// Creates the table holding every entry of [`COMMANDS`].
    #[must_use]
    pub fn new() -> Self {
        Self { commands: COMMANDS.iter()
                                 .map(|&(name, _, command)| (name, command))
                                 .collect(), }
    }

    /// Finds the command named by the first whitespace-separated word of
    /// `line`.
    #[must_use]
    pub fn lookup(&self, line: &str) -> Option<Command> {
        let word = line.split_whitespace().next()?;
        let command = self.commands.get(word).copied();
        debug!(word, found = command.is_some(), "command lookup");
        command
    }

    /// Number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if the table has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn exit(session: &mut Session, _: &mut dyn Write) -> io::Result<()> {
    session.stop();
    Ok(())
}

fn clear_screen(_: &mut Session, out: &mut dyn Write) -> io::Result<()> {
    write!(out, "\x1b[2J\x1b[H")?;
    out.flush()
}

fn clear_vars(session: &mut Session, _: &mut dyn Write) -> io::Result<()> {
    session.context_mut().symbols_mut().clear();
    Ok(())
}

fn help(_: &mut Session, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    for (name, description, _) in COMMANDS {
        writeln!(out, "  {name:<12} {description}")?;
    }
    Ok(())
}

fn show(session: &mut Session, out: &mut dyn Write) -> io::Result<()> {
    let symbols = session.context().symbols();
    writeln!(out, "=== Variables ({}) ===", symbols.len())?;
    for (name, value) in symbols {
        writeln!(out, "-- {name} : {value}")?;
    }
    Ok(())
}

fn info(_: &mut Session, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "=== arbcalc ===")?;
    writeln!(out, "Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "Precision: {PRECISION} bits")?;
    writeln!(out, "Features: Variables, Arithmetic, Square root")
}
