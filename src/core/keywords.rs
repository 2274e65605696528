// src/core/keywords.rs
use serde::Serialize;

/// Keywords as sent to the parser: the raw input split on `,`, each part
/// trimmed. Order is kept; nothing is dropped or deduplicated, so `""`
/// parses to `[""]` and `"a,,b"` to `["a", "", "b"]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordQuery(Vec<String>);

impl KeywordQuery {
    pub fn parse(raw: &str) -> Self {
        Self(raw.split(',').map(|kw| s!(kw.trim())).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every keyword is empty (e.g. input was `""` or `" , "`).
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|kw| kw.is_empty())
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordQuery {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
