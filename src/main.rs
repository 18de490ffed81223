use std::process::ExitCode;

use clap::Parser;
use rootcalc::{
    config::{Config, DEFAULT_PROMPT, ErrorPolicy},
    session::{Reply, Session},
};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// rootcalc is an interactive calculator with variables and a square root
/// function. Type an expression per line, or `exit` to finish.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What to do when a line fails: end the process, or report the error and
    /// read the next line.
    #[arg(long, value_enum, default_value_t = ErrorPolicy::Terminate)]
    on_error: ErrorPolicy,

    /// Log every step of lexing and evaluation to standard error.
    #[arg(short, long)]
    trace: bool,

    /// Text shown before each line is read.
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self { on_error: args.on_error,
               trace:    args.trace,
               prompt:   args.prompt, }
    }
}

fn init_tracing(trace: bool) {
    let default_filter = if trace { "rootcalc=trace" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .with_target(false)
                             .init();
}

fn main() -> ExitCode {
    let config = Config::from(Args::parse());
    init_tracing(config.trace);

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to open the terminal for reading: {e}");
            return ExitCode::FAILURE;
        },
    };
    let mut session = Session::new(config.on_error);

    loop {
        let line = match editor.readline(&config.prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            },
        };
        if let Err(e) = editor.add_history_entry(line.as_str()) {
            warn!("could not record history entry: {e}");
        }

        let reply = session.process(&line);
        match &reply {
            Reply::Exit => return ExitCode::SUCCESS,
            Reply::Error(_) => eprintln!("{reply}"),
            Reply::InvalidInput | Reply::Value(_) => println!("{reply}"),
        }
        if reply.ends_session(session.policy()) {
            return ExitCode::FAILURE;
        }
    }
}
