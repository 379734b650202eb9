//! Traversal of every type written in a contract.

use cairn_ir::{ContractDefinition, DataType};

use crate::TypePath;

/// Visit every type written in the contract: each type definition, then
/// each endpoint body, recursing into properties, array elements and union
/// members.
///
/// References are not followed; the definitions they point at are visited
/// once on their own.
pub fn visit_types<'a, F>(contract: &'a ContractDefinition, mut visitor: F)
where
    F: FnMut(&TypePath, &'a DataType),
{
    for definition in &contract.types {
        visit(&definition.ty, &TypePath::root(&definition.name), &mut visitor);
    }
    for endpoint in &contract.endpoints {
        for (label, body) in endpoint.bodies() {
            let root = TypePath::root(format!("{}.{}", endpoint.name, label));
            visit(&body.ty, &root, &mut visitor);
        }
    }
}

fn visit<'a, F>(ty: &'a DataType, path: &TypePath, visitor: &mut F)
where
    F: FnMut(&TypePath, &'a DataType),
{
    visitor(path, ty);
    match ty {
        DataType::Object { properties } => {
            for property in properties {
                visit(&property.ty, &path.property(&property.name), visitor);
            }
        }
        DataType::Array { elements } => visit(elements, &path.items(), visitor),
        DataType::Union { types } => {
            for (index, member) in types.iter().enumerate() {
                visit(member, &path.member(index), visitor);
            }
        }
        DataType::Null
        | DataType::Boolean
        | DataType::String
        | DataType::Float
        | DataType::Double
        | DataType::Int32
        | DataType::Int64
        | DataType::Date
        | DataType::DateTime
        | DataType::BooleanLiteral { .. }
        | DataType::StringLiteral { .. }
        | DataType::NumberLiteral { .. }
        | DataType::Reference(_) => {}
    }
}
