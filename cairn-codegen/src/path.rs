//! Locations inside a type, used to point errors at the offending shape.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Property(String),
    Member(usize),
    Items,
}

/// Path from a named root to a nested type, e.g. `Body.pets[1].name`.
///
/// `[n]` addresses the n-th union member and `[]` the elements of an array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypePath {
    root: String,
    segments: Vec<Segment>,
}

impl TypePath {
    /// Start a path at a named root (a type name, `Body`, a parameter...).
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            root: name.into(),
            segments: Vec::new(),
        }
    }

    /// Descend into an object property.
    pub fn property(&self, name: &str) -> Self {
        self.with(Segment::Property(name.to_string()))
    }

    /// Descend into the n-th union member.
    pub fn member(&self, index: usize) -> Self {
        self.with(Segment::Member(index))
    }

    /// Descend into array elements.
    pub fn items(&self) -> Self {
        self.with(Segment::Items)
    }

    fn with(&self, segment: Segment) -> Self {
        let mut path = self.clone();
        path.segments.push(segment);
        path
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root)?;
        for segment in &self.segments {
            match segment {
                Segment::Property(name) => write!(f, ".{}", name)?,
                Segment::Member(index) => write!(f, "[{}]", index)?,
                Segment::Items => f.write_str("[]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let path = TypePath::root("Body").property("field").member(1);
        assert_eq!(path.to_string(), "Body.field[1]");

        let nested = TypePath::root("Pet").property("tags").items().property("label");
        assert_eq!(nested.to_string(), "Pet.tags[].label");
    }

    #[test]
    fn test_descending_leaves_parent_untouched() {
        let root = TypePath::root("Body");
        let _child = root.property("id");
        assert_eq!(root.to_string(), "Body");
    }
}
