//! Ordered accumulator for flags that may be given more than once.

use std::fmt;
use std::ops::Deref;

/// Records every occurrence of a repeatable flag, in command-line order.
///
/// Duplicates are kept: the order of `-i` directories is their search
/// priority, and the order of `-g`/`-p` specifications is the order the
/// generators and plugins run in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringList(Vec<String>);

impl StringList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` to the end of the list.
    pub fn set(&mut self, value: impl Into<String>) {
        self.0.push(value.into());
    }
}

impl Deref for StringList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for StringList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.set(value);
        }
        list
    }
}

impl<'a> IntoIterator for &'a StringList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Diagnostic rendering only, e.g. `[a b a]`.
impl fmt::Display for StringList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(" "))
    }
}
