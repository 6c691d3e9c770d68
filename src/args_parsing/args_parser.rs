use crate::config_parsing::config_parser::{config_to_string, LoggerConfig};
use crate::output::sink::Sink;
use crate::util::constants::*;
use crate::{debug_trace, print_error_line, print_line};
use std::fmt::{Display, Formatter};

#[derive(Debug, Eq, PartialOrd, PartialEq, Ord, Hash, Clone)]
pub enum CommandLineArgumentErrorCode {
    MissingTextArgument(String, usize),
    InvalidCommand(String, usize),
    NoArgs,
}

use CommandLineArgumentErrorCode::*;

impl Display for CommandLineArgumentErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", command_line_error_to_string(self))
    }
}

fn command_line_error_to_string(err: &CommandLineArgumentErrorCode) -> String {
    match err {
        MissingTextArgument(name, v) => format!("You did not supply a text argument for command {name}. Error occurred at argument number {v}"),
        InvalidCommand(name, v) => format!("Command with name {name} does not exist. Error occurred at argument number {v}"),
        NoArgs => format!("You did not pass any args to {PROGRAM_NAME}. Run {PROGRAM_NAME} help for usage."),
    }
}

/// What every command gets to work with.
pub struct Session<'a> {
    pub cfg: &'a LoggerConfig,
    pub sink: &'a dyn Sink,
}

pub type CommandLineArgParser = &'static dyn Fn(
    &'static str,
    &mut Vec<String>,
    &mut usize,
    &Session<'_>,
) -> Result<(), CommandLineArgumentErrorCode>;

fn get_next_arg(args: &mut Vec<String>, current_arg: &mut usize) -> Option<String> {
    let res = args.pop()?;
    *current_arg += 1;
    Some(res)
}

/// Runs every command in `args` in order. `args` excludes the program path.
pub fn parse_command_line_args(
    mut args: Vec<String>,
    session: &Session<'_>,
) -> Result<(), CommandLineArgumentErrorCode> {
    if args.is_empty() {
        return Err(NoArgs);
    }
    args.reverse();
    let mut current_arg: usize = 0;
    while let Some(arg) = args.pop() {
        current_arg += 1;
        let Some((name, parser)) = parse_arg(arg.as_str()) else {
            return Err(InvalidCommand(arg, current_arg));
        };
        debug_trace!(sink: session.sink, "Running command {name} from argument {current_arg}");
        parser(name, &mut args, &mut current_arg, session)?;
    }
    Ok(())
}

fn parse_arg(arg: &str) -> Option<(&'static str, CommandLineArgParser)> {
    let res: (&'static str, CommandLineArgParser) = match arg {
        "v" | "version" | "-v" | "--version" => ("version", &display_version),
        "h" | "help" | "-h" | "--help" => ("help", &display_help_message),
        "o" | "out" => ("out", &print_text),
        "e" | "err" => ("err", &print_error_text),
        "t" | "trace" => ("trace", &trace_text),
        "c" | "config" => ("config", &display_config),
        _ => {
            return None;
        }
    };
    Some(res)
}

fn next_text_arg(
    name: &'static str,
    args: &mut Vec<String>,
    current_arg: &mut usize,
) -> Result<String, CommandLineArgumentErrorCode> {
    get_next_arg(args, current_arg).ok_or_else(|| MissingTextArgument(name.to_string(), *current_arg))
}

fn display_version(
    _name: &'static str,
    _args: &mut Vec<String>,
    _current_arg: &mut usize,
    session: &Session<'_>,
) -> Result<(), CommandLineArgumentErrorCode> {
    print_line!(sink: session.sink, "{PROGRAM_NAME} version {PROGRAM_VERSION}");
    Ok(())
}

fn print_text(
    name: &'static str,
    args: &mut Vec<String>,
    current_arg: &mut usize,
    session: &Session<'_>,
) -> Result<(), CommandLineArgumentErrorCode> {
    let text = next_text_arg(name, args, current_arg)?;
    print_line!(sink: session.sink, "{text}");
    Ok(())
}

fn print_error_text(
    name: &'static str,
    args: &mut Vec<String>,
    current_arg: &mut usize,
    session: &Session<'_>,
) -> Result<(), CommandLineArgumentErrorCode> {
    let text = next_text_arg(name, args, current_arg)?;
    print_error_line!(sink: session.sink, "{text}");
    Ok(())
}

fn trace_text(
    name: &'static str,
    args: &mut Vec<String>,
    current_arg: &mut usize,
    session: &Session<'_>,
) -> Result<(), CommandLineArgumentErrorCode> {
    let text = next_text_arg(name, args, current_arg)?;
    debug_trace!(sink: session.sink, "{text}");
    Ok(())
}

fn display_config(
    _name: &'static str,
    _args: &mut Vec<String>,
    _current_arg: &mut usize,
    session: &Session<'_>,
) -> Result<(), CommandLineArgumentErrorCode> {
    print_line!(sink: session.sink, "{}", config_to_string(session.cfg));
    Ok(())
}

fn display_help_message(
    _name: &'static str,
    _args: &mut Vec<String>,
    _current_arg: &mut usize,
    session: &Session<'_>,
) -> Result<(), CommandLineArgumentErrorCode> {
    let sink = session.sink;
    print_line!(sink: sink, "Available commands are:");
    print_line!(sink: sink, "v version ---- Displays the version of {PROGRAM_NAME}");
    print_line!(sink: sink, "h help ---- Displays this message");
    print_line!(sink: sink, "o out ---- Prints its argument to standard output");
    print_line!(sink: sink, "Example usage: {PROGRAM_NAME} out \"Listening on port 8080\"");
    print_line!(sink: sink, "e err ---- Prints its argument to standard error");
    print_line!(sink: sink, "Example usage: {PROGRAM_NAME} err \"Failed: timeout\"");
    print_line!(sink: sink, "t trace ---- Traces its argument to the diagnostic log. Debug builds only");
    print_line!(sink: sink, "Example usage: {PROGRAM_NAME} trace \"value=42\"");
    print_line!(sink: sink, "c config ---- Displays the effective configuration read from {PATH_TO_CONFIG}");
    Ok(())
}
