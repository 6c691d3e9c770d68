use dlog::args_parsing::args_parser::{parse_command_line_args, Session};
use dlog::config_parsing::config_parser::read_from_config_file;
use dlog::util::constants::PATH_TO_CONFIG;
use dlog::{debug_trace, init_logger, print_error_line, Console, LoggerConfig};
use std::env::args;
use std::process::exit;

macro_rules! exit_failure {
  () => {
    exit(1)
  };
}

fn main() {
  let cfg = match read_from_config_file(PATH_TO_CONFIG) {
    Ok(cfg) => cfg,
    Err(error) => {
      print_error_line!("Error parsing config {PATH_TO_CONFIG}!");
      print_error_line!("{error}");
      print_error_line!("Falling back to the default configuration.");
      LoggerConfig::default()
    }
  };

  if let Err(err) = init_logger(&cfg) {
    print_error_line!("Error initializing logger");
    print_error_line!("{err}");
  }
  debug_trace!("Successfully initialized logger");
  debug_trace!("Config: {cfg:?}");

  let session = Session { cfg: &cfg, sink: &Console };
  if let Err(e) = parse_command_line_args(args().skip(1).collect(), &session) {
    print_error_line!("Error parsing your arguments.");
    print_error_line!("{e}");
    exit_failure!();
  }
}
