use std::path::PathBuf;

use super::CliFlags;

#[derive(Debug, PartialEq)]
pub enum ParseError {
    InvalidNumber(String),
    InvalidPreset(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::InvalidPreset(s) => {
                write!(f, "Invalid preset: {} (expected basic, strong or max)", s)
            }
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

/// Parse `args` (program name first) into flags.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--save" => flags.save = true,
            "-H" | "--show-history" => flags.show_history = true,
            "--no-history" => flags.no_history = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "-a" | "--avoid-ambiguous" => flags.avoid_ambiguous = true,
            "-l" | "--length" => {
                let value = value_for(args, &mut i)?;
                flags.length = Some(parse_number(value)?);
            }
            "-n" | "--number" => {
                let value = value_for(args, &mut i)?;
                flags.number = Some(parse_number(value)?);
            }
            "-p" | "--preset" => {
                let value = value_for(args, &mut i)?;
                flags.preset = Some(
                    value
                        .parse()
                        .map_err(|_| ParseError::InvalidPreset(value.to_string()))?,
                );
            }
            "--history" => {
                let value = value_for(args, &mut i)?;
                flags.history = Some(PathBuf::from(value));
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

/// Advance past a flag and return its value.
fn value_for<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn parse_number(value: &str) -> Result<usize, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.to_string()))
}
