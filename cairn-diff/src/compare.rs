//! Structural comparison of two contract versions.

use std::collections::HashSet;

use cairn_ir::{
    Body, ContractDefinition, DataType, EndpointDefinition, Property, ResolveError, TypeTable,
    resolve_type,
};
use tracing::{debug, trace};

use crate::{
    BodyDiff, ContractDiff, DiffError, EndpointDiff, MemberDiff, ObjectDiff, OptionalityChange,
    PropertyDiff, ResponseDiff, ResponseKey, Result, TypeDiff, UnionDiff,
};

/// Compare two versions of a contract.
///
/// Endpoints are matched by name, which is their stable identity; moving an
/// endpoint to another path or method doesn't make it a new endpoint.
///
/// # Errors
///
/// Fails if a body of an endpoint present in both versions references a
/// type missing from its contract.
pub fn compare(before: &ContractDefinition, after: &ContractDefinition) -> Result<ContractDiff> {
    debug!(
        before = before.endpoints.len(),
        after = after.endpoints.len(),
        "comparing contracts"
    );

    let mut diff = ContractDiff::default();

    for endpoint in &before.endpoints {
        let Some(other) = after.endpoint(&endpoint.name) else {
            diff.removed_endpoints.push(endpoint.name.clone());
            continue;
        };

        trace!(endpoint = %endpoint.name, "comparing endpoint");
        let mut differ = Differ::new(&before.types, &after.types);
        let changes = differ
            .endpoint(endpoint, other)
            .map_err(|source| DiffError::Resolve {
                endpoint: endpoint.name.clone(),
                source,
            })?;
        if !changes.is_empty() {
            diff.changed_endpoints.push(changes);
        }
    }

    diff.added_endpoints = after
        .endpoints
        .iter()
        .filter(|endpoint| before.endpoint(&endpoint.name).is_none())
        .map(|endpoint| endpoint.name.clone())
        .collect();

    debug!(
        added = diff.added_endpoints.len(),
        removed = diff.removed_endpoints.len(),
        changed = diff.changed_endpoints.len(),
        "compared contracts"
    );
    Ok(diff)
}

struct Differ<'a> {
    before: &'a TypeTable,
    after: &'a TypeTable,
    /// Reference pairs being compared further up the stack.
    in_progress: HashSet<(String, String)>,
}

impl<'a> Differ<'a> {
    fn new(before: &'a TypeTable, after: &'a TypeTable) -> Self {
        Self {
            before,
            after,
            in_progress: HashSet::new(),
        }
    }

    fn endpoint(
        &mut self,
        before: &EndpointDefinition,
        after: &EndpointDefinition,
    ) -> Result<EndpointDiff, ResolveError> {
        let request = self.body(before.request_body(), after.request_body())?;

        let mut responses = Vec::new();
        for response in &before.responses {
            let key = ResponseKey::Status(response.status);
            match after.response(response.status) {
                Some(other) => {
                    if let Some(body) = self.body(response.body.as_ref(), other.body.as_ref())? {
                        responses.push(ResponseDiff::Changed { key, body });
                    }
                }
                None => responses.push(ResponseDiff::Removed { key }),
            }
        }
        for response in &after.responses {
            if before.response(response.status).is_none() {
                responses.push(ResponseDiff::Added {
                    key: ResponseKey::Status(response.status),
                });
            }
        }

        let key = ResponseKey::Default;
        match (&before.default_response, &after.default_response) {
            (Some(before), Some(after)) => {
                if let Some(body) = self.body(before.body.as_ref(), after.body.as_ref())? {
                    responses.push(ResponseDiff::Changed { key, body });
                }
            }
            (Some(_), None) => responses.push(ResponseDiff::Removed { key }),
            (None, Some(_)) => responses.push(ResponseDiff::Added { key }),
            (None, None) => {}
        }

        Ok(EndpointDiff {
            name: before.name.clone(),
            request,
            responses,
        })
    }

    fn body(
        &mut self,
        before: Option<&Body>,
        after: Option<&Body>,
    ) -> Result<Option<BodyDiff>, ResolveError> {
        Ok(match (before, after) {
            (Some(before), Some(after)) => self.ty(&before.ty, &after.ty)?.map(BodyDiff::Changed),
            (Some(_), None) => Some(BodyDiff::Removed),
            (None, Some(_)) => Some(BodyDiff::Added),
            (None, None) => None,
        })
    }

    fn ty(&mut self, before: &DataType, after: &DataType) -> Result<Option<TypeDiff>, ResolveError> {
        // a pair already being compared is assumed equal, which ends recursion
        // through self-referential types
        let pair = match (before, after) {
            (DataType::Reference(before), DataType::Reference(after)) => {
                let pair = (before.name.clone(), after.name.clone());
                if !self.in_progress.insert(pair.clone()) {
                    return Ok(None);
                }
                Some(pair)
            }
            _ => None,
        };

        let diff = self.resolved(
            resolve_type(before, self.before)?,
            resolve_type(after, self.after)?,
        );

        if let Some(pair) = pair {
            self.in_progress.remove(&pair);
        }
        diff
    }

    fn resolved(
        &mut self,
        before: &DataType,
        after: &DataType,
    ) -> Result<Option<TypeDiff>, ResolveError> {
        if before.kind() != after.kind() {
            return Ok(Some(TypeDiff::Kind {
                before: before.kind(),
                after: after.kind(),
            }));
        }

        Ok(match (before, after) {
            (DataType::Object { properties: before }, DataType::Object { properties: after }) => {
                let diff = self.object(before, after)?;
                (!diff.is_empty()).then_some(TypeDiff::Object(diff))
            }
            (DataType::Array { elements: before }, DataType::Array { elements: after }) => self
                .ty(before, after)?
                .map(|elements| TypeDiff::Array {
                    elements: Box::new(elements),
                }),
            (DataType::Union { types: before }, DataType::Union { types: after }) => {
                let diff = self.union(before, after)?;
                (!diff.is_empty()).then_some(TypeDiff::Union(diff))
            }
            _ => match (before.literal_value(), after.literal_value()) {
                (Some(before), Some(after)) if before != after => {
                    Some(TypeDiff::Literal { before, after })
                }
                _ => None,
            },
        })
    }

    fn object(
        &mut self,
        before: &[Property],
        after: &[Property],
    ) -> Result<ObjectDiff, ResolveError> {
        let find = |properties: &[Property], name: &str| {
            properties.iter().position(|property| property.name == name)
        };
        let mut diff = ObjectDiff::default();

        for property in before {
            let Some(index) = find(after, &property.name) else {
                diff.removed_properties.push(property.name.clone());
                continue;
            };
            let other = &after[index];

            let optionality = match (property.optional, other.optional) {
                (false, true) => Some(OptionalityChange::BecameOptional),
                (true, false) => Some(OptionalityChange::BecameRequired),
                _ => None,
            };
            let type_diff = self.ty(&property.ty, &other.ty)?;
            if optionality.is_some() || type_diff.is_some() {
                diff.changed_properties.push(PropertyDiff {
                    name: property.name.clone(),
                    optionality,
                    type_diff,
                });
            }
        }

        diff.added_properties = after
            .iter()
            .filter(|property| find(before, &property.name).is_none())
            .map(|property| property.name.clone())
            .collect();

        Ok(diff)
    }

    /// Compare union members by their rendered type.
    ///
    /// `A | B` becoming `A | C` reports `B` removed and `C` added even if `B`
    /// and `C` have the same shape. Members present on both sides are compared
    /// structurally, so a change behind a reference is still reported.
    fn union(
        &mut self,
        before: &[DataType],
        after: &[DataType],
    ) -> Result<UnionDiff, ResolveError> {
        let render = |types: &[DataType]| -> Vec<String> {
            types.iter().map(ToString::to_string).collect()
        };
        let before_names = render(before);
        let after_names = render(after);
        let mut diff = UnionDiff::default();

        for (member, name) in before.iter().zip(&before_names) {
            let Some(index) = after_names.iter().position(|other| other == name) else {
                diff.removed_members.push(name.clone());
                continue;
            };
            if let Some(type_diff) = self.ty(member, &after[index])? {
                trace!(member = %name, "union member changed");
                diff.changed_members.push(MemberDiff {
                    member: name.clone(),
                    type_diff,
                });
            }
        }

        diff.added_members = after_names
            .into_iter()
            .filter(|name| !before_names.contains(name))
            .collect();

        Ok(diff)
    }
}
