//! Identifier sanitizing for generated Swift symbols

/// Used when nothing legal is left of the raw name.
pub const FALLBACK_NAME: &str = "unnamed";

/// Reserved words that must be escaped with backticks.
const SWIFT_KEYWORDS: &[&str] = &[
    // Declarations
    "associatedtype", "class", "deinit", "enum", "extension", "func", "import", "init",
    "inout", "internal", "let", "operator", "private", "protocol", "public", "static",
    "struct", "subscript", "typealias", "var",
    // Statements
    "break", "case", "continue", "default", "defer", "do", "else", "fallthrough", "for",
    "guard", "if", "in", "repeat", "return", "switch", "where", "while",
    // Expressions and types
    "as", "catch", "dynamicType", "false", "is", "nil", "rethrows", "super", "self",
    "Self", "throw", "throws", "true", "try",
    "__COLUMN__", "__FILE__", "__FUNCTION__", "__LINE__",
];

/// Map a raw name to a legal Swift identifier.
///
/// `my-cell view` → `myCellView`, `2up` → `up`, `class` → `` `class` ``.
/// With `lowercase_first` the first character is lower-cased, which is
/// what value-level names (vars, functions) use; type names pass `false`.
pub fn sanitized_swift_name(raw: &str, lowercase_first: bool) -> String {
    escape_keyword(swift_identifier(raw, lowercase_first))
}

/// Same as [`sanitized_swift_name`] without keyword escaping. Use this when
/// the result is embedded in a longer name, e.g. behind a `_` prefix.
pub fn swift_identifier(raw: &str, lowercase_first: bool) -> String {
    let mut components = raw.split(|c: char| !is_identifier_char(c));
    let mut name = components.next().unwrap_or_default().to_string();
    for component in components {
        name.push_str(&uppercase_first(component));
    }

    let name = name.trim_start_matches(char::is_numeric);
    // A lone `_` is the wildcard pattern, not a name.
    let name = if name.is_empty() || name == "_" {
        FALLBACK_NAME
    } else {
        name
    };

    if lowercase_first {
        lowercase_first_char(name)
    } else {
        name.to_string()
    }
}

/// Wrap `name` in backticks if it is a reserved word.
pub fn escape_keyword(name: String) -> String {
    if SWIFT_KEYWORDS.contains(&name.as_str()) {
        format!("`{}`", name)
    } else {
        name
    }
}

/// Quote `value` as a Swift string literal.
pub fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => literal.push_str("\\\\"),
            '"' => literal.push_str("\\\""),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            other => literal.push(other),
        }
    }
    literal.push('"');
    literal
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn uppercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lowercase_first_char(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
