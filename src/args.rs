use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::cli::{Cli, normalize_args};
use crate::compact::{LangSpec, PluginDesc, SpecError, parse_compact};
use crate::error::{Result, UsageError};
use crate::logging::LogFunc;
use crate::string_list::StringList;

/// What the command line asks for.
#[derive(Debug)]
pub enum Invocation {
    Run(Arguments),
    Version,
    Help,
}

/// Resolved command-line arguments.
///
/// Built once by [`Arguments::parse_from`] and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    ask_version: bool,
    recursive: bool,
    verbose: bool,
    quiet: bool,
    output_path: Option<PathBuf>,
    includes: StringList,
    plugins: StringList,
    langs: StringList,
    idl: String,
}

impl Arguments {
    /// Parses a full argument vector, program name first.
    ///
    /// Flags end at the first positional argument; long options may be
    /// spelled with one dash or two. An explicit help request wins over
    /// `--version`, and both are answered before the positional argument
    /// count is checked.
    pub fn parse_from<I, T>(argv: I) -> Result<Invocation>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let cli = Cli::try_parse_from(normalize_args(argv))?;

        if cli.help {
            return Ok(Invocation::Help);
        }
        if cli.version {
            return Ok(Invocation::Version);
        }

        Self::from_cli(cli).map(Invocation::Run)
    }

    pub fn from_cli(cli: Cli) -> Result<Self> {
        if cli.files.len() != 1 {
            return Err(UsageError::ArgumentCount(cli.files.len()));
        }
        let idl = cli.files.into_iter().next().unwrap_or_default();
        if idl.is_empty() {
            return Err(UsageError::EmptyIdl);
        }

        Ok(Self {
            ask_version: cli.version,
            recursive: cli.recursive,
            verbose: cli.verbose,
            quiet: cli.quiet,
            output_path: cli.output_path.filter(|p| !p.is_empty()).map(PathBuf::from),
            includes: cli.includes.into_iter().collect(),
            plugins: cli.plugins.into_iter().collect(),
            langs: cli.langs.into_iter().collect(),
            idl,
        })
    }

    pub fn ask_version(&self) -> bool {
        self.ask_version
    }

    pub fn recursive(&self) -> bool {
        self.recursive
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    pub fn output_path(&self) -> Option<&PathBuf> {
        self.output_path.as_ref()
    }

    pub fn includes(&self) -> &StringList {
        &self.includes
    }

    pub fn plugins(&self) -> &StringList {
        &self.plugins
    }

    pub fn langs(&self) -> &StringList {
        &self.langs
    }

    pub fn idl(&self) -> &str {
        &self.idl
    }

    /// Output directory for code generated in `lang`.
    ///
    /// An explicit `-o` is shared by every target; otherwise each language
    /// gets `./gen-<lang>`.
    pub fn output(&self, lang: &str) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => PathBuf::from(format!("./gen-{}", lang)),
        }
    }

    /// Target languages from `-g`, in command-line order.
    pub fn targets(&self) -> std::result::Result<Vec<LangSpec>, SpecError> {
        resolve_all(&self.langs, |spec| parse_compact(spec).map(LangSpec::from))
    }

    /// Plugins from `-p`, in command-line order.
    pub fn used_plugins(&self) -> std::result::Result<Vec<PluginDesc>, SpecError> {
        resolve_all(&self.plugins, |spec| {
            parse_compact(spec).and_then(PluginDesc::try_from)
        })
    }

    pub fn make_log_func(&self) -> LogFunc {
        LogFunc::new(self.verbose, self.quiet)
    }
}

/// Resolves every entry in order, stopping at the first failure.
fn resolve_all<T, E, F>(entries: &StringList, resolve: F) -> std::result::Result<Vec<T>, E>
where
    F: FnMut(&str) -> std::result::Result<T, E>,
{
    entries.iter().map(String::as_str).map(resolve).collect()
}
