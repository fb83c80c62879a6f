//! Line-oriented INI reader.

use std::collections::HashSet;

use super::{IniDocument, IniError};
use crate::constants::{COMMENT_PREFIXES, KEY_VALUE_DELIMITERS};

/// Option whose value may still grow through continuation lines.
struct Pending {
    section: String,
    key: String,
    lines: Vec<String>,
    indent: usize,
}

impl Pending {
    fn finish(self, doc: &mut IniDocument) {
        let value = self.lines.join("\n");
        doc.section_mut(&self.section)
            .insert(self.key, value.trim_end().to_string());
    }
}

/// Parse `source` into `doc`, overriding options it already holds.
pub(super) fn read_into(doc: &mut IniDocument, source: &str) -> Result<(), IniError> {
    let mut section: Option<String> = None;
    let mut pending: Option<Pending> = None;
    // Duplicate detection is per source, not per document.
    let mut seen_sections: HashSet<String> = HashSet::new();
    let mut seen_options: HashSet<(String, String)> = HashSet::new();

    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;
        let stripped = line.trim();

        if stripped.starts_with(COMMENT_PREFIXES) {
            continue;
        }
        if stripped.is_empty() {
            // Blank lines belong to a multi-line value until trimmed at the end.
            if let Some(p) = pending.as_mut() {
                p.lines.push(String::new());
            }
            continue;
        }

        let indent = line.len() - line.trim_start().len();
        if let Some(p) = pending.as_mut() {
            if indent > p.indent {
                p.lines.push(stripped.to_string());
                continue;
            }
        }
        if let Some(p) = pending.take() {
            p.finish(doc);
        }

        if let Some(name) = section_header(stripped) {
            if name.is_empty() {
                return Err(IniError::Syntax {
                    line: line_no,
                    reason: "empty section header".to_string(),
                });
            }
            if name != doc.default_section() && !seen_sections.insert(name.to_string()) {
                return Err(IniError::DuplicateSection {
                    line: line_no,
                    section: name.to_string(),
                });
            }
            doc.section_mut(name);
            section = Some(name.to_string());
            continue;
        }

        let Some(current) = section.as_ref() else {
            return Err(IniError::MissingSectionHeader { line: line_no });
        };

        let Some(pos) = stripped.find(KEY_VALUE_DELIMITERS) else {
            return Err(IniError::Syntax {
                line: line_no,
                reason: format!("expected `key = value`, found {stripped:?}"),
            });
        };
        let key = stripped[..pos].trim_end().to_lowercase();
        if key.is_empty() {
            return Err(IniError::Syntax {
                line: line_no,
                reason: "option name is empty".to_string(),
            });
        }
        if !seen_options.insert((current.clone(), key.clone())) {
            return Err(IniError::DuplicateOption {
                line: line_no,
                section: current.clone(),
                option: key,
            });
        }

        // Delimiters are single-byte ASCII.
        let value = stripped[pos + 1..].trim_start();
        pending = Some(Pending {
            section: current.clone(),
            key,
            lines: vec![value.to_string()],
            indent,
        });
    }

    if let Some(p) = pending.take() {
        p.finish(doc);
    }
    Ok(())
}

fn section_header(stripped: &str) -> Option<&str> {
    stripped
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
}
