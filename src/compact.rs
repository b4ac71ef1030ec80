//! Compact specification strings for `--gen` and `--plugin`.
//!
//! A compact specification packs a name and its options into one token:
//!
//! ```text
//! name[:key1=val1,key2[,key3=val3]]
//! ```
//!
//! The name is mandatory. Options are separated by commas; each is either a
//! bare key or `key=value`. There is no escaping: keys cannot contain `,`,
//! `:` or `=`, and only the first `=` of an option splits key from value.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced while parsing a compact specification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("invalid compact specification {0:?}: missing name")]
    MissingName(String),

    #[error("invalid compact specification {0:?}: empty option key")]
    EmptyKey(String),

    #[error("invalid compact specification {spec:?}: option {key:?} given more than once")]
    DuplicateKey { spec: String, key: String },

    #[error("invalid value {value:?} for boolean option {key:?}: expected true, false or empty")]
    NotBoolean { key: String, value: String },
}

/// A single `key[=value]` item of a compact specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecOption {
    pub key: String,
    pub value: Option<String>,
}

impl fmt::Display for SpecOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.key, value),
            None => f.write_str(&self.key),
        }
    }
}

/// A parsed compact specification: a name plus its options in the order
/// they were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactSpec {
    pub name: String,
    pub options: Vec<SpecOption>,
}

impl CompactSpec {
    /// Returns the value of option `key`.
    ///
    /// The outer `Option` tells whether the key was given at all, the inner
    /// one whether it carried a value.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        option_value(&self.options, key)
    }

    /// Reads option `key` as a boolean.
    ///
    /// An absent key is `false`. A bare key or an empty value is `true`.
    pub fn flag(&self, key: &str) -> Result<bool, SpecError> {
        option_flag(&self.options, key)
    }
}

fn option_value<'a>(options: &'a [SpecOption], key: &str) -> Option<Option<&'a str>> {
    options
        .iter()
        .find(|opt| opt.key == key)
        .map(|opt| opt.value.as_deref())
}

fn option_flag(options: &[SpecOption], key: &str) -> Result<bool, SpecError> {
    match option_value(options, key) {
        None => Ok(false),
        Some(None) | Some(Some("")) | Some(Some("true")) => Ok(true),
        Some(Some("false")) => Ok(false),
        Some(Some(other)) => Err(SpecError::NotBoolean {
            key: key.to_string(),
            value: other.to_string(),
        }),
    }
}

impl FromStr for CompactSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_compact(s)
    }
}

impl fmt::Display for CompactSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for (i, opt) in self.options.iter().enumerate() {
            f.write_str(if i == 0 { ":" } else { "," })?;
            write!(f, "{}", opt)?;
        }
        Ok(())
    }
}

/// Parses `name[:key1=val1,key2[,key3=val3]]`.
pub fn parse_compact(spec: &str) -> Result<CompactSpec, SpecError> {
    let (name, rest) = match spec.split_once(':') {
        Some((name, rest)) => (name, rest),
        None => (spec, ""),
    };

    if name.is_empty() {
        return Err(SpecError::MissingName(spec.to_string()));
    }

    let mut options: Vec<SpecOption> = Vec::new();
    if !rest.is_empty() {
        for item in rest.split(',') {
            let option = match item.split_once('=') {
                Some((key, value)) => SpecOption {
                    key: key.to_string(),
                    value: Some(value.to_string()),
                },
                None => SpecOption {
                    key: item.to_string(),
                    value: None,
                },
            };

            if option.key.is_empty() {
                return Err(SpecError::EmptyKey(spec.to_string()));
            }
            if options.iter().any(|existing| existing.key == option.key) {
                return Err(SpecError::DuplicateKey {
                    spec: spec.to_string(),
                    key: option.key,
                });
            }
            options.push(option);
        }
    }

    Ok(CompactSpec {
        name: name.to_string(),
        options,
    })
}

/// A code generation target requested with `-g`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangSpec {
    pub language: String,
    pub options: Vec<SpecOption>,
}

impl LangSpec {
    /// See [`CompactSpec::get`].
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        option_value(&self.options, key)
    }

    /// See [`CompactSpec::flag`].
    pub fn flag(&self, key: &str) -> Result<bool, SpecError> {
        option_flag(&self.options, key)
    }
}

impl From<CompactSpec> for LangSpec {
    fn from(spec: CompactSpec) -> Self {
        Self {
            language: spec.name,
            options: spec.options,
        }
    }
}

/// An external plugin requested with `-p`.
///
/// The name part of a plugin specification may carry an explicit executable
/// path: `name=path[:options]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginDesc {
    pub name: String,
    pub path: Option<String>,
    pub options: Vec<SpecOption>,
}

impl TryFrom<CompactSpec> for PluginDesc {
    type Error = SpecError;

    fn try_from(spec: CompactSpec) -> Result<Self, Self::Error> {
        let (name, path) = match spec.name.split_once('=') {
            Some((name, path)) => (name.to_string(), Some(path.to_string())),
            None => (spec.name.clone(), None),
        };

        if name.is_empty() {
            return Err(SpecError::MissingName(spec.to_string()));
        }

        Ok(Self {
            name,
            path: path.filter(|p| !p.is_empty()),
            options: spec.options,
        })
    }
}
