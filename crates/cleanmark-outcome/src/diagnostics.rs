//! Frozen, ordered diagnostic messages.

use std::ops::Deref;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// Diagnostic messages recorded during a scan, frozen at construction.
///
/// Messages are copied into storage owned by this value, so a producer that
/// keeps appending to its own list after handing it over cannot change what
/// callers see. There is no mutating API; clones share the same storage.
///
/// An empty `Diagnostics` carries no safety meaning. It does NOT mean the
/// input was safe; only the clean markup is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostics {
    messages: Arc<[String]>,
}

impl Diagnostics {
    pub fn empty() -> Self {
        Self {
            messages: Arc::from(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.messages.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.messages
    }

    /// An owned copy. Changes to it never reach this view.
    pub fn to_vec(&self) -> Vec<String> {
        self.messages.to_vec()
    }
}

impl<S: Into<String>> FromIterator<S> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let messages: Vec<String> = iter.into_iter().map(Into::into).collect();
        Self {
            messages: Arc::from(messages),
        }
    }
}

impl From<Vec<String>> for Diagnostics {
    fn from(messages: Vec<String>) -> Self {
        Self {
            messages: Arc::from(messages),
        }
    }
}

impl Deref for Diagnostics {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.messages
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl Serialize for Diagnostics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.messages.iter())
    }
}
