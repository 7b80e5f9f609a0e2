use crate::builtin::BuiltinRegistry;
use crate::command::{Continuation, Streams};
use crate::external;
use crate::io_adapters::{LineSource, ReadOutcome};
use crate::lexer;
use crate::prompt;
use std::io::Write;

/// A minimal interactive command interpreter.
///
/// Each line is split into an argument vector and either handled by a builtin
/// from the [`BuiltinRegistry`] or run as an external program. Commands run
/// one at a time: the next prompt appears only after the previous command
/// finished.
///
/// Example
/// ```
/// use lsh::{Continuation, Interpreter};
/// let sh = Interpreter::default();
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// assert_eq!(sh.execute_line("exit", &mut out, &mut err), Continuation::Terminate);
/// ```
pub struct Interpreter {
    builtins: BuiltinRegistry,
    prompt: String,
}

impl Interpreter {
    /// Creates an interpreter with a custom set of builtins, prompting with the
    /// invoking user's name.
    pub fn new(builtins: BuiltinRegistry) -> Self {
        Self {
            builtins,
            prompt: prompt::format_prompt(&prompt::display_name()),
        }
    }

    /// Replaces the name shown in the prompt.
    pub fn with_prompt_name(mut self, name: &str) -> Self {
        self.prompt = prompt::format_prompt(name);
        self
    }

    pub fn builtins(&self) -> &BuiltinRegistry {
        &self.builtins
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Runs one parsed command.
    ///
    /// An empty `argv` does nothing. A builtin's failure is reported on
    /// `stderr` and the shell continues; external programs write straight to
    /// the inherited streams.
    pub fn dispatch(
        &self,
        argv: &[String],
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Continuation {
        let Some(name) = argv.first() else {
            return Continuation::Continue;
        };

        match self.builtins.lookup(name) {
            Some(builtin) => {
                log::debug!("dispatching builtin {}", name);
                let mut streams = Streams { stdout, stderr };
                match builtin.execute(argv, &mut streams, &self.builtins) {
                    Ok(signal) => signal,
                    Err(e) => {
                        let _ = writeln!(streams.stderr, "lsh: {:#}", e);
                        let _ = streams.stderr.flush();
                        Continuation::Continue
                    }
                }
            }
            None => {
                log::debug!("launching external program {}", name);
                external::launch(argv, stderr)
            }
        }
    }

    /// Tokenizes and dispatches a single input line.
    pub fn execute_line(
        &self,
        line: &str,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Continuation {
        let argv = lexer::split_into_tokens(line);
        self.dispatch(&argv, stdout, stderr)
    }

    /// Read-eval loop: prompts, reads and runs lines until `exit` or the end
    /// of input.
    ///
    /// Returns an error only when `source` itself fails.
    pub fn repl(
        &self,
        source: &mut dyn LineSource,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> anyhow::Result<()> {
        loop {
            let line = match source.read_line(&self.prompt)? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::Interrupted => continue,
                ReadOutcome::Eof => {
                    log::debug!("end of input");
                    return Ok(());
                }
            };

            if !self.execute_line(&line, stdout, stderr).should_continue() {
                log::debug!("exit requested");
                return Ok(());
            }
        }
    }
}

impl Default for Interpreter {
    /// Interpreter with the `cd`, `help` and `exit` builtins.
    fn default() -> Self {
        Self::new(BuiltinRegistry::default())
    }
}
