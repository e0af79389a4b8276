//! JSON Value Extension
//!
//! Accessors with default fallbacks for the loosely-typed payloads returned by
//! public content APIs.

use reel_domain::value_objects::Record;
use serde_json::Value;

/// Extension trait for JSON objects with default-returning accessors
///
/// ```rust
/// use serde_json::json;
/// use reel_providers::utils::JsonExt;
///
/// let post = json!({"title": "Hello", "ups": 420});
/// assert_eq!(post.str_or("title", "untitled"), "Hello");
/// assert_eq!(post.i64_or("num_comments", 0), 0);
/// ```
pub trait JsonExt {
    /// Get string value or default
    fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str;

    /// Get owned string value or default
    fn string_or(&self, key: &str, default: &str) -> String;

    /// Get i64 value or default
    fn i64_or(&self, key: &str, default: i64) -> i64;

    /// Get f64 value or default
    fn f64_or(&self, key: &str, default: f64) -> f64;

    /// Get bool value or default
    fn bool_or(&self, key: &str, default: bool) -> bool;

    /// Get optional non-blank string
    fn opt_str(&self, key: &str) -> Option<&str>;

    /// Get array elements, empty when absent
    fn items(&self, key: &str) -> &[Value];
}

/// Types that can be used as JSON-like containers
trait JsonContainer {
    fn get_value(&self, key: &str) -> Option<&Value>;
}

impl JsonContainer for Value {
    #[inline]
    fn get_value(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl JsonContainer for Record {
    #[inline]
    fn get_value(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

macro_rules! impl_json_ext {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl JsonExt for $ty {
                #[inline]
                fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
                    self.get_value(key).and_then(Value::as_str).unwrap_or(default)
                }

                #[inline]
                fn string_or(&self, key: &str, default: &str) -> String {
                    self.str_or(key, default).to_string()
                }

                #[inline]
                fn i64_or(&self, key: &str, default: i64) -> i64 {
                    self.get_value(key).and_then(Value::as_i64).unwrap_or(default)
                }

                #[inline]
                fn f64_or(&self, key: &str, default: f64) -> f64 {
                    self.get_value(key).and_then(Value::as_f64).unwrap_or(default)
                }

                #[inline]
                fn bool_or(&self, key: &str, default: bool) -> bool {
                    self.get_value(key).and_then(Value::as_bool).unwrap_or(default)
                }

                #[inline]
                fn opt_str(&self, key: &str) -> Option<&str> {
                    self.get_value(key)
                        .and_then(Value::as_str)
                        .filter(|s| !s.trim().is_empty())
                }

                #[inline]
                fn items(&self, key: &str) -> &[Value] {
                    self.get_value(key)
                        .and_then(Value::as_array)
                        .map_or(&[], Vec::as_slice)
                }
            }
        )+
    };
}

impl_json_ext!(Value, Record);
