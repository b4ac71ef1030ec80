use std::ffi::OsString;

use clap::{ArgAction, Parser};

/// Long option names that may also be spelled with a single dash.
const LONG_NAMES: [&str; 9] = [
    "version", "help", "recurse", "verbose", "quiet", "out", "include", "gen", "plugin",
];

/// Options that take a value.
const VALUE_LONGS: [&str; 4] = ["out", "include", "gen", "plugin"];
const VALUE_SHORTS: [char; 4] = ['o', 'i', 'g', 'p'];

/// Thrift IDL compiler
///
/// Every option has one canonical field; clap maps the short and long
/// spellings onto it. Help and version are handled by the caller instead of
/// clap so that their output and exit codes follow the compiler's own
/// conventions. Flag parsing stops at the first positional argument: every
/// token from there on is a positional, whatever it looks like.
#[derive(Parser, Debug)]
#[command(name = "thriftgen")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Print the compiler version and exit
    #[arg(
        long = "version",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = parse_bool
    )]
    pub version: bool,

    /// Print help message and exit
    #[arg(
        short = 'h',
        long = "help",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = parse_bool
    )]
    pub help: bool,

    /// Generate code for includes recursively
    #[arg(
        short = 'r',
        long = "recurse",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = parse_bool
    )]
    pub recursive: bool,

    /// Output detail logs
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = parse_bool
    )]
    pub verbose: bool,

    /// Suppress all warnings and informational logs
    #[arg(
        short = 'q',
        long = "quiet",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = parse_bool
    )]
    pub quiet: bool,

    /// Output location for generated files (default: ./gen-*)
    #[arg(short = 'o', long = "out", value_name = "DIR")]
    pub output_path: Option<String>,

    /// Add a search path for includes
    #[arg(short = 'i', long = "include", value_name = "DIR")]
    pub includes: Vec<String>,

    /// Target language: language[:key1=val1[,key2[,key3=val3]]]
    #[arg(short = 'g', long = "gen", value_name = "STR")]
    pub langs: Vec<String>,

    /// External plugin: plugin[=path][:key1=val1[,key2[,key3=val3]]]
    #[arg(short = 'p', long = "plugin", value_name = "STR")]
    pub plugins: Vec<String>,

    /// The IDL file to compile
    #[arg(value_name = "FILE", trailing_var_arg = true)]
    pub files: Vec<String>,
}

/// Accepts the boolean spellings `1 t T TRUE true True 0 f F FALSE false False`.
fn parse_bool(value: &str) -> Result<bool, String> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(format!("invalid boolean value {:?}", other)),
    }
}

/// Rewrites single-dash long options (`-recurse`, `-out=dir`) to their
/// double-dash form.
///
/// Rewriting stops at the first positional argument or at `--`, and the
/// value following an option that takes one is never touched.
pub fn normalize_args<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut argv = argv.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = argv.next().into_iter().collect();

    while let Some(token) = argv.next() {
        let Some(text) = token.to_str().map(str::to_string) else {
            normalized.push(token);
            continue;
        };

        if text == "--" || text == "-" || !text.starts_with('-') {
            normalized.push(token);
            break;
        }

        let text = if is_single_dash_long(&text) {
            format!("-{}", text)
        } else {
            text
        };

        let needs_value = consumes_next(&text);
        normalized.push(OsString::from(text));
        if needs_value {
            match argv.next() {
                Some(value) => normalized.push(value),
                None => break,
            }
        }
    }

    normalized.extend(argv);
    normalized
}

fn is_single_dash_long(token: &str) -> bool {
    token
        .strip_prefix('-')
        .filter(|rest| !rest.starts_with('-'))
        .is_some_and(|rest| {
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            LONG_NAMES.contains(&name)
        })
}

/// Whether `token` is an option whose value is the next token.
fn consumes_next(token: &str) -> bool {
    if let Some(long) = token.strip_prefix("--") {
        return VALUE_LONGS.contains(&long);
    }

    let Some(shorts) = token.strip_prefix('-') else {
        return false;
    };
    for (i, c) in shorts.char_indices() {
        if VALUE_SHORTS.contains(&c) {
            return i + c.len_utf8() == shorts.len();
        }
    }
    false
}
