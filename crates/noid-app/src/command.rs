//! Parsing of input lines into chat commands.

use std::path::PathBuf;

pub const HELP: &str = "Commands:
  /attach <path>  attach an image to the next message
  /detach         drop the pending attachment
  /reset          start a new conversation
  /help           show this help
  /quit           exit
Anything else is sent as a message.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(String),
    Attach(PathBuf),
    Detach,
    Reset,
    Help,
    Quit,
    /// Unusable command line; carries the message to show.
    Invalid(String),
}

/// Parse one input line. Lines not starting with `/` are messages.
pub fn parse(line: &str) -> Command {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Send(trimmed.to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name {
        "attach" if arg.is_empty() => Command::Invalid("Usage: /attach <path>".into()),
        "attach" => Command::Attach(PathBuf::from(arg)),
        "detach" => Command::Detach,
        "reset" | "new" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Invalid(format!("Unknown command /{name}. Type /help.")),
    }
}
