//! Multi-language strings

use serde::{Deserialize, Serialize};

/// Text in a single language
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LangString {
    pub language: String,
    pub text: String,
}

impl LangString {
    pub fn new(language: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            text: text.into(),
        }
    }
}

/// Set of texts, at most one per language
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LangStringSet(Vec<LangString>);

impl LangStringSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Text for `language` (case-insensitive)
    pub fn get(&self, language: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|s| s.language.eq_ignore_ascii_case(language))
            .map(|s| s.text.as_str())
    }

    /// Insert a text, replacing an existing one in the same language
    pub fn insert(&mut self, language: impl Into<String>, text: impl Into<String>) {
        let language = language.into();
        let text = text.into();
        match self
            .0
            .iter_mut()
            .find(|s| s.language.eq_ignore_ascii_case(&language))
        {
            Some(existing) => existing.text = text,
            None => self.0.push(LangString::new(language, text)),
        }
    }

    pub fn with(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(language, text);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &LangString> {
        self.0.iter()
    }

    pub fn first(&self) -> Option<&LangString> {
        self.0.first()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<LangString> for LangStringSet {
    fn from_iter<I: IntoIterator<Item = LangString>>(iter: I) -> Self {
        let mut set = LangStringSet::new();
        for s in iter {
            set.insert(s.language, s.text);
        }
        set
    }
}

impl<'a> IntoIterator for &'a LangStringSet {
    type Item = &'a LangString;
    type IntoIter = std::slice::Iter<'a, LangString>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
