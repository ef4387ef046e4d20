use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use basic_ast::diagnostics::LexError;
use basic_lexer::{ByteSource, ReaderSource, Tokenizer};
use clap::Parser;
use rustyline::{error::ReadlineError, Editor};
use tracing::{info, warn};

mod logging;

const PROMPT: &str = "> ";

#[derive(Debug, Parser)]
#[command(name = "basic", version, about = "Tokenize BASIC source interactively or from a file")]
struct Cli {
    /// Source file to tokenize. Starts the REPL when omitted.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// File used to persist REPL history
    #[arg(long, value_name = "PATH", default_value = "history.txt")]
    history: PathBuf,

    /// Log filter, e.g. `debug` or `basic_lexer=trace`
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log.as_deref());

    match cli.file {
        Some(path) => tokenize_file(path),
        None => repl(&cli.history),
    }
}

fn tokenize_file(path: PathBuf) -> Result<()> {
    let file = File::open(&path).with_context(|| format!("cannot open {}", path.display()))?;
    info!(path = %path.display(), "tokenizing file");

    let mut tokenizer = Tokenizer::new(ReaderSource::new(file));
    if let Err(err) = print_tokens(&mut tokenizer) {
        if let LexError::ReadFailed { .. } = err {
            return Err(err).with_context(|| format!("cannot read {}", path.display()));
        }
        std::process::exit(1);
    }
    Ok(())
}

fn repl(history: &Path) -> Result<()> {
    let mut rl = Editor::<()>::new()?;
    if rl.load_history(history).is_err() {
        println!("No previous REPL history");
    }

    println!("BASIC - interactive tokenizer");

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str());
                let mut tokenizer = Tokenizer::new(line.as_bytes());
                // a lexical error abandons the rest of the line
                let _ = print_tokens(&mut tokenizer);
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    if let Err(err) = rl.save_history(history) {
        warn!(%err, path = %history.display(), "could not save history");
    }
    Ok(())
}

/// Prints every token, or the first lexical error, and closes the input.
fn print_tokens<S: ByteSource>(tokenizer: &mut Tokenizer<S>) -> Result<(), LexError> {
    let mut outcome = Ok(());
    for token in tokenizer.tokens() {
        match token {
            Ok(token) => println!("Parsed token: {token}"),
            Err(err) => {
                println!("error: {err}");
                outcome = Err(err);
            }
        }
    }
    tokenizer.close();
    outcome
}
