use crate::builtin::BuiltinRegistry;
use anyhow::Result;
use std::io::Write;

/// Outcome of every dispatched command, telling the interactive loop whether
/// to prompt again.
///
/// External programs always yield [`Continuation::Continue`]; only the `exit`
/// builtin yields [`Continuation::Terminate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// Keep reading commands.
    Continue,
    /// Stop the interactive loop.
    Terminate,
}

impl Continuation {
    /// Whether the loop should keep running.
    pub fn should_continue(self) -> bool {
        self == Continuation::Continue
    }
}

/// Streams handed to a builtin while it runs.
///
/// External programs never see these: they inherit the shell's own standard
/// streams directly.
pub struct Streams<'a> {
    /// Destination for regular output, e.g. the `help` banner.
    pub stdout: &'a mut dyn Write,
    /// Destination for diagnostics.
    pub stderr: &'a mut dyn Write,
}

/// A command executed inside the shell's own process.
///
/// Errors returned from [`BuiltinCommand::execute`] are reported on the error
/// stream by the dispatcher and never end the shell.
pub trait BuiltinCommand {
    /// Name the command is invoked by, e.g. "cd".
    fn name(&self) -> &'static str;

    /// Runs the command. `argv[0]` is the command name itself.
    fn execute(
        &self,
        argv: &[String],
        streams: &mut Streams<'_>,
        registry: &BuiltinRegistry,
    ) -> Result<Continuation>;
}
