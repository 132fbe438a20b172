//! Reading `.properties` resources.
//!
//! Uses the `java.util.Properties` format: `#`/`!` comments, `=`/`:`/space
//! separators, backslash line continuations and `\uXXXX` escapes. Later
//! duplicates replace earlier ones.

use std::collections::HashMap;
use std::io::Read;

pub use java_properties::PropertiesError;

/// Parses a properties document.
///
/// ## Errors
///
/// Returns [`PropertiesError`] if the input cannot be read or contains a
/// malformed escape.
pub fn parse(input: impl Read) -> Result<HashMap<String, String>, PropertiesError> {
    java_properties::read(input)
}
