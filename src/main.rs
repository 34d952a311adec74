use std::{fs, io, process::ExitCode};

use bracalc::{
    LineSource, LinesInput, Outcome, Scope, evaluate_with,
    report::{describe_scope, format_evaluation, help_text},
};
use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// bracalc is a calculator whose brackets compute operators: `3[1]4` is
/// `3+4`. Incomplete expressions ask for another line instead of failing.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells bracalc to read expressions from a file, one per line, instead of
    /// evaluating `contents` itself.
    #[arg(short, long)]
    file: bool,

    /// Logs bracket rewrites and continuation requests to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// An expression, or a path with `--file`. Without it, an interactive
    /// session starts.
    contents: Option<String>,
}

const PROMPT: &str = "> ";

/// The interactive terminal. Continuation prompts repeat the expression
/// consumed so far after the usual prompt.
struct Console {
    editor: DefaultEditor,
}

impl LineSource for Console {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        match self.editor.readline(&format!("{PROMPT}{prompt}")) {
            Ok(line) => {
                if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                    warn!(error = %e, "could not record history");
                }
                Some(line)
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => None,
            Err(e) => {
                warn!(error = %e, "failed to read input");
                None
            },
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut scope = Scope::new();
    match args.contents {
        None => run_interactive(&mut scope),
        Some(path) if args.file => run_file(&path, &mut scope),
        Some(expression) => {
            let mut stdin = LinesInput::new(io::stdin().lines().map_while(Result::ok));
            exit_code(handle_line(&expression, &mut scope, &mut stdin))
        },
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .without_time()
                             .init();
}

fn run_interactive(scope: &mut Scope) -> ExitCode {
    let editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start the interactive session: {e}");
            return ExitCode::FAILURE;
        },
    };

    let mut console = Console { editor };
    while let Some(line) = console.read_line("") {
        handle_line(&line, scope, &mut console);
    }
    ExitCode::SUCCESS
}

/// Evaluates every line of a file in one scope. An incomplete line continues
/// onto the lines after it.
fn run_file(path: &str, scope: &mut Scope) -> ExitCode {
    let Ok(script) = fs::read_to_string(path) else {
        eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
        return ExitCode::FAILURE;
    };

    let mut lines = LinesInput::new(script.lines());
    let mut succeeded = true;
    while let Some(line) = lines.read_line("") {
        succeeded &= handle_line(&line, scope, &mut lines);
    }
    exit_code(succeeded)
}

/// Runs one line of input: a diagnostic command, or an expression whose result
/// or error is printed. Returns `false` if the line failed.
fn handle_line(line: &str, scope: &mut Scope, source: &mut dyn LineSource) -> bool {
    match line.trim() {
        "" => true,
        "check" => {
            print!("{}", describe_scope(scope));
            true
        },
        "help" => {
            print!("{}", help_text());
            true
        },
        _ => match evaluate_with(line, scope, source) {
            Ok(Outcome::Complete(evaluation)) => {
                println!("{}", format_evaluation(&evaluation));
                true
            },
            Ok(Outcome::NeedMoreInput { consumed }) => {
                eprintln!("Error: incomplete expression '{consumed}'.");
                false
            },
            Err(e) => {
                eprintln!("Error: {e}");
                false
            },
        },
    }
}

const fn exit_code(succeeded: bool) -> ExitCode {
    if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
