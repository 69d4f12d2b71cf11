//! Flat `key=value` properties reader.
//!
//! One entry per line. The key ends at the first `=`, `:` or whitespace;
//! one `=` or `:` separator is then skipped and the value is trimmed. Lines
//! starting with `#` or `!` are comments. There are no escapes and no
//! continuation lines. The first occurrence of a key wins.

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: HashMap<String, String>,
    duplicates: Vec<String>,
}

impl Properties {
    pub fn parse(text: &str) -> Self {
        let mut props = Self::default();
        for line in text.lines() {
            let line = line.trim_start();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let key_end = line
                .find(|c: char| c == '=' || c == ':' || c.is_whitespace())
                .unwrap_or(line.len());
            let (key, rest) = line.split_at(key_end);
            let rest = rest.trim_start();
            let value = rest
                .strip_prefix('=')
                .or_else(|| rest.strip_prefix(':'))
                .unwrap_or(rest)
                .trim();

            if props.entries.contains_key(key) {
                props.duplicates.push(key.to_string());
            } else {
                props.entries.insert(key.to_string(), value.to_string());
            }
        }
        props
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys that appeared more than once; their later values were ignored.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
