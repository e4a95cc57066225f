//! # nadir-dump
//!
//! Renders a data tree as an indented, human-readable listing for
//! debugging:
//!
//! ```
//! use nadir_dump::dump;
//! use serde_json::json;
//!
//! let out = dump(&json!({"name": "Al", "tags": ["a"]}), nadir_dump::DEFAULT_DEPTH);
//! assert_eq!(
//!     out,
//!     "array\n(\n    'name' => 'Al'\n    'tags' => array\n    (\n        0 => 'a'\n    )\n)"
//! );
//! ```
//!
//! Containers deeper than the depth limit collapse to `(...)`. Mapping keys
//! that are canonical integers print bare, like sequence positions.

use std::fmt::{self, Write};

use nadir_validator::validators::is_integer_key;
use serde_json::Value;

/// Depth used when none is given.
pub const DEFAULT_DEPTH: usize = 10;

/// Spaces per indentation level.
pub const SPACES_PER_TAB: usize = 4;

/// Dumps `value`, expanding containers down to `depth` levels.
#[must_use]
pub fn dump(value: &Value, depth: usize) -> String {
    Dump::new(value).depth(depth).to_string()
}

/// A `Display` wrapper that dumps the value it borrows.
///
/// ```
/// use nadir_dump::Dump;
/// use serde_json::json;
///
/// assert_eq!(format!("{}", Dump::new(&json!([]))), "array()");
/// assert_eq!(Dump::new(&json!([[1]])).depth(1).to_string(), "array\n(\n    0 => array\n    (...)\n)");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Dump<'a> {
    value: &'a Value,
    depth: usize,
}

impl<'a> Dump<'a> {
    /// Wraps `value` with [`DEFAULT_DEPTH`].
    #[must_use]
    pub const fn new(value: &'a Value) -> Self {
        Self {
            value,
            depth: DEFAULT_DEPTH,
        }
    }

    /// Sets the depth limit.
    #[must_use]
    pub const fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self.value, self.depth, 0)
    }
}

fn write_value<W: Write>(out: &mut W, value: &Value, depth: usize, level: usize) -> fmt::Result {
    match value {
        Value::Null => out.write_str("NULL"),
        Value::Bool(true) => out.write_str("TRUE"),
        Value::Bool(false) => out.write_str("FALSE"),
        Value::Number(n) => write!(out, "{n}"),
        Value::String(s) => write_quoted(out, s),
        Value::Array(items) => write_container(
            out,
            items.iter().enumerate().map(|(i, v)| (Key::Position(i), v)),
            items.is_empty(),
            depth,
            level,
        ),
        Value::Object(map) => write_container(
            out,
            map.iter().map(|(k, v)| (Key::Name(k), v)),
            map.is_empty(),
            depth,
            level,
        ),
    }
}

enum Key<'a> {
    Position(usize),
    Name(&'a str),
}

fn write_container<'a, W, I>(
    out: &mut W,
    entries: I,
    is_empty: bool,
    depth: usize,
    level: usize,
) -> fmt::Result
where
    W: Write,
    I: Iterator<Item = (Key<'a>, &'a Value)>,
{
    let outer = indent(level);

    if depth <= level {
        tracing::trace!(depth, "dump depth limit reached");
        return write!(out, "array\n{outer}(...)");
    }
    if is_empty {
        return out.write_str("array()");
    }

    let inner = indent(level + 1);
    write!(out, "array\n{outer}(")?;
    for (key, value) in entries {
        write!(out, "\n{inner}")?;
        match key {
            Key::Position(i) => write!(out, "{i}")?,
            Key::Name(name) if is_integer_key(name) => out.write_str(name)?,
            Key::Name(name) => write_quoted(out, name)?,
        }
        out.write_str(" => ")?;
        write_value(out, value, depth, level + 1)?;
    }
    write!(out, "\n{outer})")
}

/// Single-quotes `s`, backslash-escaping `\`, `'`, `"` and NUL.
fn write_quoted<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('\'')?;
    for c in s.chars() {
        match c {
            '\\' | '\'' | '"' => {
                out.write_char('\\')?;
                out.write_char(c)?;
            }
            '\0' => out.write_str("\\0")?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('\'')
}

fn indent(level: usize) -> String {
    " ".repeat(SPACES_PER_TAB * level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), "NULL")]
    #[case(json!(true), "TRUE")]
    #[case(json!(false), "FALSE")]
    #[case(json!(42), "42")]
    #[case(json!(-1.5), "-1.5")]
    #[case(json!("plain"), "'plain'")]
    #[case(json!("it's \"q\" \\"), r#"'it\'s \"q\" \\'"#)]
    #[case(json!([]), "array()")]
    #[case(json!({}), "array()")]
    fn scalars_and_empty_containers(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(dump(&value, DEFAULT_DEPTH), expected);
    }

    #[test]
    fn nested_indentation() {
        let value = json!({"a": {"b": [true, null]}});
        let expected = "\
array
(
    'a' => array
    (
        'b' => array
        (
            0 => TRUE
            1 => NULL
        )
    )
)";
        assert_eq!(dump(&value, DEFAULT_DEPTH), expected);
    }

    #[test]
    fn depth_zero_collapses_root() {
        assert_eq!(dump(&json!([1]), 0), "array\n(...)");
    }

    #[test]
    fn depth_limit_collapses_even_empty_containers() {
        assert_eq!(dump(&json!({"a": {}}), 1), "array\n(\n    'a' => array\n    (...)\n)");
    }

    #[test]
    fn keys_keep_insertion_order() {
        let value = json!({"z": 1, "a": 2});
        assert_eq!(dump(&value, 1), "array\n(\n    'z' => 1\n    'a' => 2\n)");
    }

    #[test]
    fn integer_keys_print_bare() {
        let value = json!({"0": "a", "-3": "b", "07": "c", "x": "d"});
        assert_eq!(
            dump(&value, 1),
            "array\n(\n    0 => 'a'\n    -3 => 'b'\n    '07' => 'c'\n    'x' => 'd'\n)"
        );
    }

    #[test]
    fn nul_is_escaped() {
        assert_eq!(dump(&json!("a\u{0}b"), 1), "'a\\0b'");
    }
}
