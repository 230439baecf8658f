//! A boundary-scanning JSON decoder with dotted-path access and caret diagnostics.
//!
//! [parse] locates the raw span of each value before interpreting it, then
//! descends recursively to build a [Value] tree wrapped in a [Document],
//! which resolves paths like `"users.[0].name"`. On failure it returns a
//! [ParseError] rendering a one-line source excerpt with a caret under the
//! offending code point.
//!
//! The accepted grammar is the literal/object/array/string/bool/null subset
//! of JSON: no exponents or signs in numbers, and escape sequences inside
//! strings are preserved verbatim rather than decoded. Recursion depth is
//! bounded only by input nesting, so adversarially deep documents can
//! exhaust the call stack.
mod data;
mod errors;
mod parser;
mod path;
mod scanner;

pub use data::{Document, Value};
pub use errors::{ErrorKind, ParseError};

/// Parses a JSON document into a [Document], or returns a [ParseError]
/// carrying a rendered diagnostic.
pub fn parse(text: impl AsRef<str>) -> Result<Document, ParseError> {
    // Decode once so every offset means a code point, not a byte.
    let input: Vec<char> = text.as_ref().chars().collect();
    parser::parse_document(&input).map_err(|err| err.render(&input))
}
