//! Crate-wide constants.
//!
//! Centralises the INI dialect, boolean spellings, and the names the
//! accessor reserves for itself so behaviour can be audited in one place.

/// Name of the INI section whose values every other section inherits.
///
/// Also the section read when a loader is not given one explicitly.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Prefixes that mark a whole INI line as a comment.
pub const COMMENT_PREFIXES: &[char] = &['#', ';'];

/// Characters that separate an INI key from its value. The first one wins.
pub const KEY_VALUE_DELIMITERS: &[char] = &['=', ':'];

/// Maximum nesting of `%(name)s` references before expansion gives up.
pub const MAX_INTERPOLATION_DEPTH: usize = 10;

// ── Boolean spellings ───────────────────────────────────────────────

/// Lower-cased spellings accepted as `true` by `get_bool`.
pub const TRUE_STATES: &[&str] = &["1", "yes", "true", "on"];

/// Lower-cased spellings accepted as `false` by `get_bool`.
pub const FALSE_STATES: &[&str] = &["0", "no", "false", "off"];

// ── Reserved names ──────────────────────────────────────────────────

/// Names that `Configuration::attr` refuses to treat as configuration keys.
///
/// These collide with the accessor's own API. A key with one of these names
/// is shadowed for name-style access and must be read with `get`.
pub const RESERVED_NAMES: &[&str] = &[
    "attr",
    "contains_key",
    "default_policy",
    "from_environ",
    "from_environ_in",
    "from_file",
    "from_files",
    "get",
    "get_bool",
    "get_or",
    "get_parsed",
    "is_empty",
    "items",
    "iter",
    "len",
    "new",
    "with_default",
];
