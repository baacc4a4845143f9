//! Identifier conversion from schema names to Python names.

use regex::Regex;
use std::sync::LazyLock;

/// Word starting with a capital and followed by lowercase letters.
static CAPITALIZED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(.)([A-Z][a-z]+)").expect("valid regex"));

/// Lowercase letter or digit directly followed by a capital.
static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([a-z0-9])([A-Z])").expect("valid regex"));

/// Converts a camelCase or PascalCase name to snake_case.
///
/// Acronym runs stay together: `HTTPServerError` becomes `http_server_error`.
/// Applying the conversion to its own output is a no-op.
#[must_use]
pub fn camel_to_snake(name: &str) -> String {
    let name = CAPITALIZED_WORD.replace_all(name, "${1}_${2}");
    LOWER_UPPER.replace_all(&name, "${1}_${2}").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("simpleField", "simple_field")]
    #[case("HTTPServerError", "http_server_error")]
    #[case("Person", "person")]
    #[case("Query", "query")]
    #[case("getHTTPResponseCode", "get_http_response_code")]
    #[case("version2Name", "version2_name")]
    #[case("already_snake", "already_snake")]
    #[case("ID", "id")]
    fn test_camel_to_snake(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(camel_to_snake(input), expected);
    }

    #[rstest]
    #[case("HTTPServerError")]
    #[case("simpleField")]
    #[case("PersonConnectionEdge")]
    #[case("a")]
    fn test_camel_to_snake_is_idempotent(#[case] input: &str) {
        let once = camel_to_snake(input);
        assert_eq!(camel_to_snake(&once), once);
        assert!(!once.starts_with('_'));
        assert!(!once.ends_with('_'));
    }
}
