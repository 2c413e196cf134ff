use std::fmt::{Display, Formatter};
use std::io::{stdout, Write};
use std::process::ExitCode;
use std::time::Duration;
use log::{debug, info, LevelFilter};
use simplelog::{Config, SimpleLogger};
use clap::{ArgGroup, Parser};
use dexplain_core::opcode_index::{OpcodeIndex, Query};
use dexplain_core::opcode_source::{DEFAULT_FETCH_TIMEOUT, DEFAULT_OPCODE_TABLE_URL};
use dexplain_core::opcode_table::{OpcodeTable, OpcodeTableError};
use crate::opcode_display::write_lookup_result;

mod opcode_display;
#[cfg(test)]
pub mod tests;

const EXAMPLES: &str = "\
EXAMPLES:
  dexplain --name \"const/16\"        # Search by exact opcode name
  dexplain -n \"move-object\"         # Search with short option
  dexplain --hex \"0A\"               # Search by hex value
  dexplain --name \"const\" --verbose # Show additional info

NOTE: Use exact opcode names as they appear in the table:
  \"const/4\", \"const/16\", \"move-object\", \"new-array\"
  not \"const/4 vx,lit4\" or \"move-object vx,vy\"";

#[derive(Parser, Debug)]
#[command(author, version, about = "Dalvik opcode explorer - look up Dalvik opcode information", long_about = None, after_help = EXAMPLES)]
#[command(group(ArgGroup::new("search").required(true).args(["name", "hex"])))]
pub struct Args {
    #[arg(
        short = 'n',
        long = "name",
        help = "search by exact opcode name (e.g. \"const/16\")"
    )]
    name: Option<String>,

    #[arg(
        long = "hex",
        help = "search by opcode hex value (e.g. \"0A\", \"1F\")"
    )]
    hex: Option<String>,

    #[arg(
        short = 'v',
        long = "verbose",
        help = "show additional information"
    )]
    verbose: bool,

    #[arg(
        short = 'd',
        long = "debug",
        help = "debug mode",
        default_value_t = 0
    )]
    debug: u8,

    #[arg(
        short = 'u',
        long = "url",
        help = "opcode table document to fetch",
        default_value = DEFAULT_OPCODE_TABLE_URL
    )]
    url: String,

    #[arg(
        short = 't',
        long = "timeout",
        help = "fetch timeout in seconds",
        default_value_t = DEFAULT_FETCH_TIMEOUT.as_secs()
    )]
    timeout: u64,
}

impl Args {
    /// The `search` group guarantees exactly one of `--name` / `--hex` is set.
    pub fn query(&self) -> Query {
        match &self.name {
            Some(name) => Query::ByName(name.clone()),
            None => Query::ByHex(self.hex.clone().unwrap_or_default()),
        }
    }
}

#[derive(Debug)]
pub enum DexplainError {
    TableError(OpcodeTableError),
    IOError(String),
    LoggerError(String),
}

impl Display for DexplainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DexplainError::TableError(e) => write!(f, "{}", e),
            DexplainError::IOError(s) => write!(f, "I/O error: {}", s),
            DexplainError::LoggerError(s) => write!(f, "logger error: {}", s),
        }
    }
}

impl From<OpcodeTableError> for DexplainError {
    fn from(error: OpcodeTableError) -> Self {
        DexplainError::TableError(error)
    }
}

impl From<std::io::Error> for DexplainError {
    fn from(error: std::io::Error) -> Self {
        DexplainError::IOError(error.to_string())
    }
}

fn logger_init(debug: u8) -> Result<(), DexplainError> {

    let log_level = match debug {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    SimpleLogger::init(log_level, Config::default()).map_err(|e| DexplainError::LoggerError(e.to_string()))
}

fn load_index(url: &str, timeout: Duration) -> Result<OpcodeIndex, DexplainError> {
    let rows = OpcodeTable::fetch_url(url, timeout)?;

    let index = OpcodeIndex::build(&rows);
    info!("{} opcodes indexed", index.len());

    Ok(index)
}

fn run(args: &Args, out: &mut impl Write) -> Result<(), DexplainError> {
    let query = args.query();
    debug!("query: {}", query);

    let index = load_index(&args.url, Duration::from_secs(args.timeout))?;
    let result = index.lookup(&query);

    write_lookup_result(out, &query, &result, args.verbose, &args.url)?;
    out.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    let args: Args = Args::parse();

    if let Err(e) = logger_init(args.debug) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let mut out = stdout().lock();

    match run(&args, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
