/// Whether debug tracing is compiled in. Every tracing macro reads this one
/// constant, so all code linked against this crate agrees on it.
pub const DEBUG: bool = cfg!(debug_assertions);

pub const PROGRAM_NAME: &'static str = "dlog";

pub const PROGRAM_VERSION: &'static str = "0.1";

pub const PATH_TO_CONFIG: &'static str = "./cfg.dlog";

pub const LINE_TERMINATOR: &'static str = "\n";
