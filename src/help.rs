//! Usage text.
//!
//! The fixed part documents the flags; the catalogue after it is generated
//! from the registered backends.

use crate::backend::{Backend, OptionDoc};

const USAGE: &str = "\
Usage: thriftgen [options] file
Options:
  --version           Print the compiler version and exit.
  -h, --help          Print help message and exit.
  -i, --include dir   Add a search path for includes.
  -o, --out dir       Set the output location for generated files. (default: ./gen-*)
  -r, --recurse       Generate code for includes recursively.
  -v, --verbose       Output detail logs.
  -q, --quiet         Suppress all warnings and informational logs.
  -g, --gen STR       Specify the target language.
                      STR has the form language[:key1=val1[,key2[,key3=val3]]].
                      Keys and values are options passed to the backend.
                      Many options will not require values. Boolean options accept
                      \"false\", \"true\" and \"\" (empty is treated as \"true\").
  -p, --plugin STR    Specify an external plugin to invoke.
                      STR has the form plugin[=path][:key1=val1[,key2[,key3=val3]]].

Available generators (and options):
";

/// `thriftgen <version>`, as printed by `--version`.
pub fn version_line() -> String {
    format!("thriftgen {}", env!("CARGO_PKG_VERSION"))
}

/// Renders the complete help text.
pub fn render_help(backends: &[Box<dyn Backend>]) -> String {
    let mut out = format!("Version: {}\n", env!("CARGO_PKG_VERSION"));
    out.push_str(USAGE);

    for backend in backends {
        out.push_str(&format!("  {} ({}):\n", backend.name(), backend.lang()));
        for row in align(backend.options()) {
            out.push_str(&row);
            out.push('\n');
        }
    }
    out.push('\n');
    out
}

/// Lays out one row per option.
///
/// The description column starts `4 + longest name + 2` characters into
/// the line for every row of the list.
pub fn align(options: &[OptionDoc]) -> Vec<String> {
    let width = options
        .iter()
        .map(|opt| opt.name.chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    options
        .iter()
        .map(|opt| format!("    {:<width$}{}", format!("{}:", opt.name), opt.desc))
        .collect()
}
