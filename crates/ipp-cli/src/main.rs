//! IPPcode23 Parser - CLI
//!
//! Reads IPPcode23 source from stdin (or `--source`) and writes its XML form to stdout.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ipp_core::{translate, ParseError, ParseResult, ParserConfig, Source};

const USAGE: &str = "Parses IPPcode23 code from STDIN (or a source file) and writes its XML representation to STDOUT
Usage: ipp-parse [--source=file]
  --source=file  source file to parse
  --help         print this help";

#[derive(Parser, Debug)]
#[command(name = "ipp-parse", disable_help_flag = true)]
struct Cli {
    /// Print usage and exit; must be the only argument
    #[arg(long = "help", action = ArgAction::SetTrue)]
    help: bool,

    /// Read the program from FILE instead of stdin
    #[arg(long = "source", value_name = "FILE")]
    source: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Translate(Source),
}

fn parse_args<I, T>(args: I) -> ParseResult<Command>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args).map_err(|err| {
        let rendered = err.to_string();
        let first = rendered.lines().next().unwrap_or_default();
        ParseError::Options(first.trim_start_matches("error: ").to_string())
    })?;

    match (cli.help, cli.source) {
        (true, None) => Ok(Command::Help),
        (true, Some(_)) => Err(ParseError::Options(
            "Parameter --help must be used alone".to_string(),
        )),
        (false, Some(path)) => Ok(Command::Translate(Source::File(path))),
        (false, None) => Ok(Command::Translate(Source::Stdin)),
    }
}

fn write_output(xml: &str) -> ParseResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(xml.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| ParseError::Output(e.to_string()))
}

fn run() -> ParseResult<()> {
    match parse_args(std::env::args_os())? {
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        Command::Translate(source) => {
            debug!(?source, "translating");
            let xml = translate(&source, &ParserConfig::default())?;
            write_output(&xml)
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_reads_stdin() {
        assert_eq!(
            parse_args(["ipp-parse"]).expect("parse failed"),
            Command::Translate(Source::Stdin)
        );
    }

    #[test]
    fn source_accepts_equals_form() {
        assert_eq!(
            parse_args(["ipp-parse", "--source=prog.ippc"]).expect("parse failed"),
            Command::Translate(Source::File(PathBuf::from("prog.ippc")))
        );
    }

    #[test]
    fn help_alone_prints_usage() {
        assert_eq!(parse_args(["ipp-parse", "--help"]).expect("parse failed"), Command::Help);
    }

    #[test]
    fn help_with_other_arguments_is_rejected() {
        for args in [
            vec!["ipp-parse", "--help", "--source=x"],
            vec!["ipp-parse", "--source=x", "--help"],
            vec!["ipp-parse", "--help", "--bogus"],
        ] {
            let err = parse_args(args.clone()).unwrap_err();
            assert_eq!(err.exit_code(), 10, "accepted {args:?}");
        }
    }

    #[test]
    fn unknown_arguments_are_option_errors() {
        let err = parse_args(["ipp-parse", "--stats"]).unwrap_err();
        assert_eq!(err.exit_code(), 10);
        assert!(!err.to_string().contains('\n'));
        let err = parse_args(["ipp-parse", "file.ippc"]).unwrap_err();
        assert_eq!(err.exit_code(), 10);
    }
}
