use super::args::Options;
use crate::app::Calculator;
use crate::calculator::{evaluate, format_number};
use crate::editor::Input;
use crate::history::History;
use crate::session::Mode;
use log::info;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

#[derive(Debug, PartialEq, Eq)]
/// The response to one line of terminal input
pub enum Reply {
    Text(String),
    Quit,
}

/// Runs the tool with the given options: either a one-shot evaluation or
/// an interactive session reading key names from standard input. A failed
/// one-shot evaluation returns a failure status.
pub fn run(options: &Options) -> std::result::Result<ExitCode, Box<dyn std::error::Error>> {
    if let Some(expression) = &options.eval {
        return match evaluate(expression) {
            Ok(value) => {
                println!("{}", format_number(value));
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                eprintln!("ERROR: {}", e);
                Ok(ExitCode::FAILURE)
            }
        };
    }

    let history = match &options.history_file {
        Some(path) => load_history(path, options.history_size)?,
        None => History::with_capacity(options.history_size),
    };
    let mut calculator = Calculator::new(options.mode, history, String::new());

    println!("Enter keys separated by spaces, such as '2 ( 3 + 4 ) =' or 'sqrt 2 ) ='.");
    println!("Type ':help' for commands, ':quit' to exit.");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("[{}] {} => ", calculator.mode(), calculator.display());
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };

        match handle_line(&mut calculator, &line?) {
            Reply::Text(text) => {
                if !text.is_empty() {
                    println!("{}", text);
                }
            }
            Reply::Quit => break,
        }
    }

    if let Some(path) = &options.history_file {
        save_history(path, calculator.history())?;
    }

    println!("So long, and thanks for all the fish!");

    Ok(ExitCode::SUCCESS)
}

/// Reads a history saved by save_history, keeping at most capacity of the
/// newest records. A missing file gives an empty history.
pub fn load_history(
    path: &Path,
    capacity: usize,
) -> std::result::Result<History, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Ok(History::with_capacity(capacity));
    }

    let lines: Vec<String> = serde_json::from_str(&fs::read_to_string(path)?)?;
    info!("loaded {} history records from {}", lines.len(), path.display());

    Ok(History::from_lines(lines, capacity))
}

/// Writes the history to a file as a JSON array of lines, oldest first
pub fn save_history(
    path: &Path,
    history: &History,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    fs::write(path, serde_json::to_string_pretty(history)?)?;
    info!("saved {} history records to {}", history.len(), path.display());

    Ok(())
}

/// Handles one line of terminal input: a command starting with ':' or a
/// sequence of key names
pub fn handle_line(calculator: &mut Calculator<String>, line: &str) -> Reply {
    let line = line.trim();

    let Some(command) = line.strip_prefix(':') else {
        if line.eq_ignore_ascii_case("quit") {
            return Reply::Quit;
        }
        return match Input::parse_line(line) {
            Ok(inputs) => {
                calculator.press_all(inputs);
                Reply::Text(calculator.display().clone())
            }
            Err(e) => Reply::Text(format!("ERROR: {}", e)),
        };
    };

    let mut words = command.split_whitespace();
    let reply = match (words.next(), words.next()) {
        (Some("quit") | Some("q"), None) => return Reply::Quit,
        (Some("mode"), Some(name)) => match name.parse::<Mode>() {
            Ok(mode) => {
                calculator.select(mode);
                format!("{} mode", mode)
            }
            Err(e) => format!("ERROR: {}", e),
        },
        (Some("history"), None) => format_history(calculator.history()),
        (Some("delete"), Some(index)) => match index.parse::<usize>() {
            Ok(i) => match calculator.history_mut().delete(i) {
                Some(line) => format!("deleted '{}'", line),
                None => format!("ERROR: no history entry {}", i),
            },
            Err(_) => format!("ERROR: invalid history index '{}'", index),
        },
        (Some("clear-history"), None) => {
            calculator.history_mut().clear();
            String::from("history cleared")
        }
        (Some("help"), None) => String::from(HELP),
        _ => format!("ERROR: unrecognized command ':{}'", command),
    };

    Reply::Text(reply)
}

const HELP: &str = "\
:mode basic|scientific   switch calculator
:history                 show history, newest first
:delete N                delete history entry N
:clear-history           delete all history
:quit                    exit";

/// Lists the history newest first, numbered by position so entries can be
/// deleted
fn format_history(history: &History) -> String {
    if history.is_empty() {
        return String::from("No history yet.");
    }

    history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, line)| format!("{:>3}  {}", i, line))
        .collect::<Vec<_>>()
        .join("\n")
}
