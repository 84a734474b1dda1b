//! Shared template helpers registered on every environment.
//!
//! These are available to all templates rendered by this module, in both
//! tag syntaxes: the `upper` filter and the `index_of` function.

use minijinja::{Environment, ErrorKind, Value};

pub(crate) fn register_helpers(env: &mut Environment<'static>) {
    env.add_filter("upper", upper);
    env.add_function("index_of", index_of);
}

fn upper(value: String) -> String {
    value.to_uppercase()
}

/// `index_of(haystack, needle)` — first index of `needle`, or -1.
///
/// Works on strings (byte index of a substring) and on sequences (position
/// of the first equal element).
fn index_of(haystack: Value, needle: Value) -> Result<i64, minijinja::Error> {
    if let Some(text) = haystack.as_str() {
        let needle = needle.as_str().ok_or_else(|| {
            minijinja::Error::new(
                ErrorKind::InvalidOperation,
                "index_of needle must be a string when searching a string",
            )
        })?;
        return Ok(text.find(needle).map(|i| i as i64).unwrap_or(-1));
    }

    if let Ok(iter) = haystack.try_iter() {
        for (index, item) in iter.enumerate() {
            if item == needle {
                return Ok(index as i64);
            }
        }
        return Ok(-1);
    }

    Err(minijinja::Error::new(
        ErrorKind::InvalidOperation,
        "index_of expects a string or a sequence",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    fn env() -> Environment<'static> {
        let mut env = Environment::new();
        register_helpers(&mut env);
        env
    }

    #[test]
    fn test_upper_filter() {
        let out = env()
            .render_str("{{ name | upper }}", context! { name => "widget" })
            .unwrap();
        assert_eq!(out, "WIDGET");
    }

    #[test]
    fn test_index_of_string() {
        let out = env()
            .render_str("{{ index_of('hello world', 'world') }}", context! {})
            .unwrap();
        assert_eq!(out, "6");
    }

    #[test]
    fn test_index_of_string_missing() {
        let out = env()
            .render_str("{{ index_of('hello', 'xyz') }}", context! {})
            .unwrap();
        assert_eq!(out, "-1");
    }

    #[test]
    fn test_index_of_sequence() {
        let out = env()
            .render_str(
                "{{ index_of(items, 'b') }}",
                context! { items => vec!["a", "b", "c"] },
            )
            .unwrap();
        assert_eq!(out, "1");
    }

    #[test]
    fn test_index_of_sequence_missing() {
        let out = env()
            .render_str(
                "{{ index_of(items, 'z') }}",
                context! { items => vec!["a", "b"] },
            )
            .unwrap();
        assert_eq!(out, "-1");
    }

    #[test]
    fn test_index_of_rejects_numbers() {
        let result = env().render_str("{{ index_of(42, 'x') }}", context! {});
        assert!(result.is_err());
    }
}
