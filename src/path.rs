use crate::data::{Document, Value};

impl Document {
    /// Resolves a dotted path against the tree, e.g. `"users.[0].name"`.
    ///
    /// The empty path returns the root. Segments are split on `.`; a
    /// segment of the form `[<digits>]` indexes an array, any other
    /// segment looks up an object key. Traversal returns `None` as soon
    /// as a segment does not match the current node: a missing key, an
    /// out-of-range index, or a lookup on the wrong kind of value. An
    /// explicit `null` in the document resolves to `Some(&Value::Null)`,
    /// which is distinct from `None`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        if path.is_empty() {
            return Some(self.root());
        }

        let mut current = self.root();
        for segment in path.split('.') {
            current = match array_index(segment) {
                Some(index) => current.index(index)?,
                None => current.key(segment)?,
            };
        }

        Some(current)
    }
}

/* A segment only counts as an index when the brackets wrap nothing but
 * digits; anything else falls through to a key lookup. */
fn array_index(segment: &str) -> Option<usize> {
    let digits = segment.strip_prefix('[')?.strip_suffix(']')?;
    if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
