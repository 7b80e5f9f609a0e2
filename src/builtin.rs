use crate::command::{BuiltinCommand, Continuation, Streams};
use anyhow::{Context, Result, bail};
use std::env;

/// Ordered table of the commands that run inside the shell process.
///
/// Names are unique; the order only matters for the `help` listing. Lookup is
/// by exact name, first match wins.
pub struct BuiltinRegistry {
    commands: Vec<Box<dyn BuiltinCommand>>,
}

impl BuiltinRegistry {
    /// A registry without any builtins.
    pub fn empty() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Appends a builtin, refusing one whose name is already taken.
    pub fn register(&mut self, command: Box<dyn BuiltinCommand>) -> Result<()> {
        let name = command.name();
        if self.lookup(name).is_some() {
            bail!("builtin \"{}\" is already registered", name);
        }
        self.commands.push(command);
        Ok(())
    }

    /// Finds the builtin invoked as `name`.
    pub fn lookup(&self, name: &str) -> Option<&dyn BuiltinCommand> {
        self.commands
            .iter()
            .find(|command| command.name() == name)
            .map(|command| command.as_ref())
    }

    /// Builtin names in registration order.
    pub fn list(&self) -> Vec<&'static str> {
        self.commands.iter().map(|command| command.name()).collect()
    }
}

impl Default for BuiltinRegistry {
    /// `cd`, `help` and `exit`, in that order.
    fn default() -> Self {
        Self {
            commands: vec![Box::new(Cd), Box::new(Help), Box::new(Exit)],
        }
    }
}

/// Change the working directory of the shell process.
///
/// Takes exactly one meaningful argument; anything after it is ignored.
pub struct Cd;

impl BuiltinCommand for Cd {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(
        &self,
        argv: &[String],
        _streams: &mut Streams<'_>,
        _registry: &BuiltinRegistry,
    ) -> Result<Continuation> {
        let Some(target) = argv.get(1) else {
            bail!("expected argument to \"cd\"");
        };

        env::set_current_dir(target).with_context(|| format!("cd: {}", target))?;
        log::debug!("working directory changed to {}", target);
        Ok(Continuation::Continue)
    }
}

/// Print a short banner and the list of builtins.
pub struct Help;

const BANNER: &str = "LSH - a minimal command interpreter\n\
                      Type program names and arguments, and hit enter.\n\
                      The following are built in:\n";

const FOOTER: &str = "Use the man command for information on other programs.\n";

impl BuiltinCommand for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(
        &self,
        _argv: &[String],
        streams: &mut Streams<'_>,
        registry: &BuiltinRegistry,
    ) -> Result<Continuation> {
        streams.stdout.write_all(BANNER.as_bytes())?;
        for name in registry.list() {
            writeln!(streams.stdout, "  {}", name)?;
        }
        streams.stdout.write_all(FOOTER.as_bytes())?;
        streams.stdout.flush()?;
        Ok(Continuation::Continue)
    }
}

/// Leave the shell. Arguments are ignored.
pub struct Exit;

impl BuiltinCommand for Exit {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(
        &self,
        _argv: &[String],
        _streams: &mut Streams<'_>,
        _registry: &BuiltinRegistry,
    ) -> Result<Continuation> {
        Ok(Continuation::Terminate)
    }
}
