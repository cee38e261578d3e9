//! Overload Planning
//!
//! The target language does not allow an optional parameter before a required
//! one. API descriptions do contain such lists:
//!
//! ```text
//! attachPress(oData?, fnFunction, oListener?)
//! ```
//!
//! They are split into overloads that can be called with or without the
//! leading optionals:
//!
//! ```typescript
//! attachPress(fnFunction: Function, oListener?: any): this;
//! attachPress(oData: any, fnFunction: Function, oListener?: any): this;
//! ```
//!
//! Only the leftmost conflict is fixed per step; each branch is planned again,
//! so later conflicts are handled by the recursion.

use crate::parameter::ParameterNode;

/// Plan the overload parameter lists for one method. Never empty.
pub fn plan_overloads(parameters: &[ParameterNode]) -> Vec<Vec<ParameterNode>> {
    let mut overloads = Vec::new();
    plan_into(parameters.to_vec(), &mut overloads);
    overloads
}

fn plan_into(mut parameters: Vec<ParameterNode>, overloads: &mut Vec<Vec<ParameterNode>>) {
    if parameters.len() > 1 {
        if let Some(cut) = first_required_after_optional(&parameters) {
            // Without the optionals in front of the cut.
            let without: Vec<ParameterNode> = parameters
                .iter()
                .enumerate()
                .filter(|(idx, p)| *idx >= cut || p.is_required())
                .map(|(_, p)| p.clone())
                .collect();
            plan_into(without, overloads);

            // With every parameter in front of the cut made required.
            let promoted: Vec<ParameterNode> = parameters
                .iter()
                .enumerate()
                .map(|(idx, p)| {
                    if idx >= cut || p.is_required() {
                        p.clone()
                    } else {
                        p.as_required()
                    }
                })
                .collect();
            plan_into(promoted, overloads);
            return;
        }

        if let Some(idx) = first_conflicting_optional_pair(&parameters) {
            tracing::trace!(
                parameter = %parameters[idx].name,
                "widening optional parameter that conflicts with its successor"
            );
            parameters[idx].widen_to_any();
        }
    }

    overloads.push(parameters);
}

/// Index of the first required parameter directly preceded by an optional one.
fn first_required_after_optional(parameters: &[ParameterNode]) -> Option<usize> {
    (1..parameters.len())
        .find(|&idx| parameters[idx - 1].is_optional() && parameters[idx].is_required())
}

/// Index of the earlier parameter of the first optional pair whose types conflict.
fn first_conflicting_optional_pair(parameters: &[ParameterNode]) -> Option<usize> {
    parameters.windows(2).position(|pair| {
        pair[0].is_optional() && pair[1].is_optional() && !pair[1].is_interchangeable_with(&pair[0])
    })
}

#[cfg(test)]
#[path = "tests/overloads_tests.rs"]
mod tests;
