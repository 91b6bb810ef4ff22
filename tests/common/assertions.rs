//! Domain-specific assertion macros for hconv harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! name the field or raw line that was expected.

/// Assert that a `ConversionResult` has a field with an expected value.
///
/// ```rust
/// assert_field!(result, "contentType", "text/html");
/// ```
#[macro_export]
macro_rules! assert_field {
    ($result:expr, $key:expr, $value:expr) => {{
        let result: &hconv::ConversionResult = &$result;
        let key: &str = $key;
        let expected: &str = $value;
        match result.fields.get(key) {
            Some(actual) => pretty_assertions::assert_eq!(
                actual.as_str(),
                expected,
                "field {:?} has the wrong value",
                key
            ),
            None => panic!(
                "assert_field! failed: field {:?} not found.\n  Available fields: {:?}",
                key,
                result.fields.keys().collect::<Vec<_>>()
            ),
        }
    }};
}

/// Assert that a `ConversionResult` has no field with the given key.
#[macro_export]
macro_rules! assert_no_field {
    ($result:expr, $key:expr) => {{
        let result: &hconv::ConversionResult = &$result;
        let key: &str = $key;
        if let Some(value) = result.fields.get(key) {
            panic!(
                "assert_no_field! failed: field {:?} unexpectedly present with value {:?}",
                key, value
            );
        }
    }};
}

/// Assert the exact raw-line sequence of a `ConversionResult`.
#[macro_export]
macro_rules! assert_raw {
    ($result:expr, [$($line:expr),* $(,)?]) => {{
        let result: &hconv::ConversionResult = &$result;
        let expected: Vec<&str> = vec![$($line),*];
        let actual: Vec<&str> = result.raw.iter().map(String::as_str).collect();
        pretty_assertions::assert_eq!(actual, expected, "raw lines differ");
    }};
}
