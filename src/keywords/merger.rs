//! Overload merging.
//!
//! A keyword may be backed by several overloads that disagree on arity,
//! parameter types, defaults and positions. The host calling the keyword
//! only sees one parameter list, so the merge produces a superset:
//!
//! - parameters are matched across overloads by name, never by position
//! - every declared type of a parameter is kept, in first-seen order
//! - the first declared default wins
//! - a parameter is optional when any overload declares it optional,
//!   nullable or defaulted
//! - after the first overload, a parameter that moves to another position
//!   or appears for the first time is optional, since a named call cannot
//!   rely on it being present or positionally stable
//! - finally everything after the first optional parameter is optional,
//!   so the list reads as required parameters followed by optional ones

use indexmap::IndexMap;
use tracing::{debug, trace};

use super::argument::ArgumentInfo;
use crate::core::MethodSignature;

/// Merge the parameters of every overload into one ordered argument list
pub fn merge_arguments(methods: &[MethodSignature]) -> Vec<ArgumentInfo> {
    let mut arguments: IndexMap<String, ArgumentInfo> = IndexMap::new();

    for (overload, method) in methods.iter().enumerate() {
        trace!(
            keyword = %method.name,
            overload,
            parameters = method.parameters.len(),
            "merging overload"
        );

        for (position, parameter) in method.parameters.iter().enumerate() {
            let freshly_created = !arguments.contains_key(&parameter.name);
            let argument = arguments
                .entry(parameter.name.clone())
                .or_insert_with(|| ArgumentInfo::new(&parameter.name, position));

            argument.absorb(parameter);

            if overload > 0 && (freshly_created || argument.index() != position) {
                argument.mark_optional();
            }
        }
    }

    let mut merged: Vec<ArgumentInfo> = arguments.into_values().collect();
    normalize_optional_tail(&mut merged);

    if let Some(first) = methods.first() {
        debug!(
            keyword = %first.name,
            overloads = methods.len(),
            arguments = merged.len(),
            required = merged.iter().filter(|a| !a.is_optional()).count(),
            "merged keyword arguments"
        );
    }

    merged
}

// Required arguments cannot follow an optional one
fn normalize_optional_tail(arguments: &mut [ArgumentInfo]) {
    let mut seen_optional = false;
    for argument in arguments {
        seen_optional |= argument.is_optional();
        if seen_optional {
            argument.mark_optional();
        }
    }
}
