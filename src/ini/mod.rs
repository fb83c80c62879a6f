//! INI document model, parser, and `%(name)s` interpolation.
//!
//! The dialect is the widespread one:
//! `[section]` headers, `key = value` / `key: value` options, `#`/`;`
//! comment lines, indented continuation lines, and a default section whose
//! options are inherited by every other section.

mod interpolate;
mod parser;

use indexmap::IndexMap;
use thiserror::Error;

use crate::constants::DEFAULT_SECTION;

pub use interpolate::interpolate;

/// Options of one section, in declaration order.
pub type Section = IndexMap<String, String>;

/// Errors produced while parsing or interpolating INI text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IniError {
    #[error("line {line}: option found before any section header")]
    MissingSectionHeader { line: usize },

    #[error("line {line}: {reason}")]
    Syntax { line: usize, reason: String },

    #[error("line {line}: section [{section}] is declared more than once")]
    DuplicateSection { line: usize, section: String },

    #[error("line {line}: option {option:?} is declared more than once in section [{section}]")]
    DuplicateOption {
        line: usize,
        section: String,
        option: String,
    },

    #[error("option {option:?} references undefined option {reference:?}")]
    MissingReference { option: String, reference: String },

    #[error("option {option:?}: {reason}")]
    BadInterpolation { option: String, reason: String },

    #[error("option {option:?}: interpolation nested deeper than {max} levels")]
    DepthExceeded { option: String, max: usize },
}

/// Parsed INI content, possibly merged from several sources.
///
/// Option names are lower-cased; section names keep their case. Reading more
/// text into an existing document overrides options that were already set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniDocument {
    default_section: String,
    defaults: Section,
    sections: IndexMap<String, Section>,
}

impl IniDocument {
    /// Empty document whose inherited section is named `default_section`.
    pub fn new(default_section: impl Into<String>) -> Self {
        Self {
            default_section: default_section.into(),
            defaults: Section::new(),
            sections: IndexMap::new(),
        }
    }

    /// Parse `source` and merge it into this document.
    ///
    /// Duplicate sections or options are rejected within a single call but
    /// allowed across calls, where the later value wins. On error the
    /// document may hold a partial merge of `source`.
    pub fn read_str(&mut self, source: &str) -> Result<(), IniError> {
        parser::read_into(self, source)
    }

    pub fn default_section(&self) -> &str {
        &self.default_section
    }

    /// Options declared directly in the default section.
    pub fn defaults(&self) -> &Section {
        &self.defaults
    }

    /// Names of the non-default sections, in first-seen order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Whether a non-default section named `name` exists.
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Raw options visible from `section`: the defaults overlaid with the
    /// section's own options.
    ///
    /// Asking for the default section, or for a section that does not exist,
    /// yields the defaults alone.
    pub fn raw_items(&self, section: &str) -> Section {
        let mut merged = self.defaults.clone();
        if section != self.default_section {
            if let Some(own) = self.sections.get(section) {
                for (key, value) in own {
                    merged.insert(key.clone(), value.clone());
                }
            }
        }
        merged
    }

    /// Options visible from `section` with `%(name)s` references expanded.
    pub fn items(&self, section: &str) -> Result<Section, IniError> {
        let raw = self.raw_items(section);
        raw.iter()
            .map(|(key, value)| interpolate(key, value, &raw).map(|v| (key.clone(), v)))
            .collect()
    }

    pub(crate) fn section_mut(&mut self, name: &str) -> &mut Section {
        if name == self.default_section {
            &mut self.defaults
        } else {
            self.sections.entry(name.to_string()).or_default()
        }
    }
}

impl Default for IniDocument {
    fn default() -> Self {
        Self::new(DEFAULT_SECTION)
    }
}

/// Parse a single INI text using the standard default section name.
pub fn parse(source: &str) -> Result<IniDocument, IniError> {
    let mut doc = IniDocument::default();
    doc.read_str(source)?;
    Ok(doc)
}
