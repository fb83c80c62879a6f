//! `%(name)s` expansion.

use super::{IniError, Section};
use crate::constants::MAX_INTERPOLATION_DEPTH;

/// Expand `%(name)s` references in `value` against `vars`.
///
/// `option` names the option being expanded and is only used in errors.
/// Reference names are matched case-insensitively, `%%` yields a literal `%`,
/// and referenced values are expanded recursively up to
/// [`MAX_INTERPOLATION_DEPTH`] levels.
pub fn interpolate(option: &str, value: &str, vars: &Section) -> Result<String, IniError> {
    let mut out = String::with_capacity(value.len());
    expand(option, value, vars, 1, &mut out)?;
    Ok(out)
}

fn expand(
    option: &str,
    mut rest: &str,
    vars: &Section,
    depth: usize,
    out: &mut String,
) -> Result<(), IniError> {
    if depth > MAX_INTERPOLATION_DEPTH {
        return Err(IniError::DepthExceeded {
            option: option.to_string(),
            max: MAX_INTERPOLATION_DEPTH,
        });
    }

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if let Some(after) = rest.strip_prefix("%%") {
            out.push('%');
            rest = after;
        } else if let Some(after) = rest.strip_prefix("%(") {
            let Some((name, tail)) = after.split_once(')') else {
                return Err(bad_reference(option, rest));
            };
            let Some(tail) = tail.strip_prefix('s') else {
                return Err(bad_reference(option, rest));
            };
            if name.is_empty() {
                return Err(bad_reference(option, rest));
            }

            let reference = name.to_lowercase();
            let Some(resolved) = vars.get(&reference) else {
                return Err(IniError::MissingReference {
                    option: option.to_string(),
                    reference,
                });
            };
            if resolved.contains('%') {
                expand(option, resolved, vars, depth + 1, out)?;
            } else {
                out.push_str(resolved);
            }
            rest = tail;
        } else {
            return Err(IniError::BadInterpolation {
                option: option.to_string(),
                reason: format!("'%' must be followed by '%' or '(', found {rest:?}"),
            });
        }
    }

    out.push_str(rest);
    Ok(())
}

fn bad_reference(option: &str, rest: &str) -> IniError {
    IniError::BadInterpolation {
        option: option.to_string(),
        reason: format!("bad interpolation variable reference {rest:?}"),
    }
}
