//! URL utility functions for reading query parameters

use web_sys::window;

/// Value of `key` in a `?a=1&b=2` search string, URL-decoded.
///
/// A key without `=` yields an empty string.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    let query_string = search.strip_prefix('?').unwrap_or(search);

    query_string
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| match pair.split_once('=') {
            Some((param_key, param_value)) if param_key == key => Some(
                urlencoding::decode(param_value)
                    .map(|value| value.into_owned())
                    .unwrap_or_else(|_| param_value.to_string()),
            ),
            None if pair == key => Some(String::new()),
            _ => None,
        })
}

/// Get a query parameter from the current URL
/// Reads directly from window.location.search, so it works before the router is mounted
pub fn get_query_param(key: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    query_param(&search, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param_lookup() {
        assert_eq!(query_param("?lang=ar&x=1", "lang"), Some("ar".to_string()));
        assert_eq!(query_param("x=1&lang=en", "lang"), Some("en".to_string()));
        assert_eq!(query_param("?lang", "lang"), Some(String::new()));
        assert_eq!(query_param("?language=ar", "lang"), None);
        assert_eq!(query_param("", "lang"), None);
    }

    #[test]
    fn test_query_param_is_decoded() {
        assert_eq!(
            query_param("?q=oil%20%26%20gas", "q"),
            Some("oil & gas".to_string())
        );
    }
}
