use core::fmt;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

static SECTION_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"S0*([0-9]+)").expect("section pattern is valid"));

/// Canonical section identifier, `S<n>` for anything carrying a section
/// number, or the cleaned raw string when no number could be found.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Clone, Hash)]
#[serde(transparent)]
pub struct SectionKey(String);

impl SectionKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur when reading a section key from a string.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum SectionKeyError {
    #[error("str provided is empty")]
    EmptyString,
}

impl FromStr for SectionKey {
    type Err = SectionKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_section(Some(s)).ok_or(SectionKeyError::EmptyString)
    }
}

/// Canonicalizes a raw section cell.
///
/// Case and whitespace are ignored, and leading zeros of the section number
/// are dropped, so `s01`, ` S 1 ` and `S1` all become `S1`. Input without a
/// section number comes back cleaned but otherwise unchanged. Empty input has
/// no key at all.
pub fn normalize_section(raw: Option<&str>) -> Option<SectionKey> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }

    let clean: String = raw
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let key = match SECTION_NUMBER.captures(&clean) {
        Some(captures) => {
            let digits = captures[1].trim_start_matches('0');
            if digits.is_empty() {
                "S0".to_string()
            } else {
                format!("S{}", digits)
            }
        }
        None => clean,
    };

    Some(SectionKey(key))
}
