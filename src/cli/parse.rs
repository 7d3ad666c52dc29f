use thiserror::Error;

use super::CliFlags;
use crate::pass::CharClass;

pub const DEFAULT_OUTPUT: &str = "pwforge.txt";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "-i" | "--interactive" => flags.interactive = true,
            "--lower" => flags.enable(CharClass::Lower),
            "--upper" => flags.enable(CharClass::Upper),
            "--digits" => flags.enable(CharClass::Number),
            "--symbols" => flags.enable(CharClass::Symbol),
            flag @ ("-l" | "--length") => {
                flags.length = Some(number_arg(args, &mut i, flag)?);
            }
            flag @ ("-n" | "--number") => {
                flags.number = Some(number_arg(args, &mut i, flag)?);
            }
            "-o" | "--output" => {
                // Check if next arg exists and isn't another flag
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    flags.output = Some(DEFAULT_OUTPUT.to_string());
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn number_arg(args: &[String], i: &mut usize, flag: &str) -> Result<usize, ParseError> {
    *i += 1;
    let raw = args
        .get(*i)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))?;
    raw.parse()
        .map_err(|_| ParseError::InvalidNumber(raw.clone()))
}
