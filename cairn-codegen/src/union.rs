//! Classification of union shapes.
//!
//! Targets differ in which unions they can express, but they all special-case
//! the same handful of shapes.

use cairn_ir::DataType;

/// The shape of a union's member list.
#[derive(Debug, Clone, PartialEq)]
pub enum UnionShape<'a> {
    /// No members at all.
    Empty,
    /// Exactly one member, or only `null` members.
    Single(&'a DataType),
    /// Every member is a string literal.
    StringLiterals(Vec<&'a str>),
    /// `X | null`.
    Nullable(&'a DataType),
    /// `null` alongside two or more other members, which are listed.
    NullableMany(Vec<&'a DataType>),
    /// Two or more members, none of them `null`.
    Plain(&'a [DataType]),
}

impl<'a> UnionShape<'a> {
    /// Classify a union's members.
    ///
    /// Members are inspected as written; references are not resolved, so a
    /// reference to a string literal alias doesn't count as a literal.
    pub fn of(types: &'a [DataType]) -> Self {
        match types {
            [] => return UnionShape::Empty,
            [single] => return UnionShape::Single(single),
            _ => {}
        }

        let literals: Vec<&str> = types
            .iter()
            .filter_map(|ty| match ty {
                DataType::StringLiteral { value } => Some(value.as_str()),
                _ => None,
            })
            .collect();
        if literals.len() == types.len() {
            return UnionShape::StringLiterals(literals);
        }

        let others: Vec<&DataType> = types.iter().filter(|ty| !ty.is_null()).collect();
        match others.len() {
            0 => UnionShape::Single(&types[0]),
            len if len == types.len() => UnionShape::Plain(types),
            1 => UnionShape::Nullable(others[0]),
            _ => UnionShape::NullableMany(others),
        }
    }
}

#[cfg(test)]
mod tests {
    use cairn_ir::TypeKind;

    use super::*;

    #[test]
    fn test_empty_and_single() {
        assert_eq!(UnionShape::of(&[]), UnionShape::Empty);
        let types = [DataType::String];
        assert_eq!(UnionShape::of(&types), UnionShape::Single(&DataType::String));
        let nulls = [DataType::Null, DataType::Null];
        assert_eq!(UnionShape::of(&nulls), UnionShape::Single(&DataType::Null));
    }

    #[test]
    fn test_string_literals() {
        let types = [DataType::string_literal("a"), DataType::string_literal("b")];
        assert_eq!(
            UnionShape::of(&types),
            UnionShape::StringLiterals(vec!["a", "b"])
        );
    }

    #[test]
    fn test_nullable() {
        let types = [DataType::Null, DataType::reference("Pet", TypeKind::Object)];
        assert_eq!(UnionShape::of(&types), UnionShape::Nullable(&types[1]));
    }

    #[test]
    fn test_nullable_many() {
        let types = [DataType::String, DataType::Float, DataType::Null];
        assert_eq!(
            UnionShape::of(&types),
            UnionShape::NullableMany(vec![&DataType::String, &DataType::Float])
        );

        // literals alongside null are not collapsed
        let literals = [
            DataType::string_literal("a"),
            DataType::string_literal("b"),
            DataType::Null,
        ];
        assert!(matches!(
            UnionShape::of(&literals),
            UnionShape::NullableMany(_)
        ));
    }

    #[test]
    fn test_plain() {
        let types = [DataType::String, DataType::Boolean];
        assert_eq!(UnionShape::of(&types), UnionShape::Plain(&types));
    }
}
