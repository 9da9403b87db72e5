//! TypeScript property naming.
//!
//! Reserved words are legal property names in object types, so only the
//! lexical shape of a name matters here.

/// Whether `name` can be written as a bare TypeScript property name.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// The property name as it must appear in a type literal: bare when it is
/// an identifier, a double-quoted string literal otherwise.
pub fn property_name(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        string_literal(name)
    }
}

/// Double-quoted TypeScript string literal.
pub(crate) fn string_literal(value: &str) -> String {
    // JSON string syntax is a subset of JavaScript string syntax.
    serde_json::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("name"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("$ref"));
        assert!(is_identifier("class"));
        assert!(is_identifier("apiVersion2"));
    }

    #[test]
    fn test_non_identifiers() {
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("x-kubernetes-group"));
        assert!(!is_identifier("app.kubernetes.io/name"));
    }

    #[test]
    fn test_property_name_quotes_when_needed() {
        assert_eq!(property_name("spec"), "spec");
        assert_eq!(property_name("x-kubernetes-group"), "\"x-kubernetes-group\"");
    }

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal("red"), "\"red\"");
        assert_eq!(string_literal("a\"b\\c"), r#""a\"b\\c""#);
        assert_eq!(string_literal("line\nbreak"), r#""line\nbreak""#);
    }
}
