use argh::FromArgs;
use lsh::{EditorSource, Interpreter, LineSource, ReaderSource};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

/// A minimal interactive command interpreter. Builtins: cd, help, exit.
/// Set LSH_LOG (e.g. LSH_LOG=debug) to enable diagnostic logging on stderr.
#[derive(FromArgs)]
struct Args {}

fn main() -> ExitCode {
    let _args: Args = argh::from_env();

    env_logger::Builder::from_env(env_logger::Env::new().filter_or("LSH_LOG", "warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("shell stopped: {:#}", e);
            eprintln!("lsh: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let sh = Interpreter::default();

    let mut source: Box<dyn LineSource> = if io::stdin().is_terminal() {
        Box::new(EditorSource::new()?)
    } else {
        Box::new(ReaderSource::new(io::stdin().lock(), io::stdout()))
    };

    sh.repl(source.as_mut(), &mut io::stdout(), &mut io::stderr())
}
