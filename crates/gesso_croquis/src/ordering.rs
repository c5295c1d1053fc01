//! Declaration-order validation for metadata groups.

use std::borrow::Cow;

use gesso_carton::CompactString;
use oxc_span::Span;
use serde::{Deserialize, Serialize};

use crate::metadata::MetadataGroup;

/// Ordering options, as accepted by `react/jsx-sort-default-props`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderingOptions {
    /// Compare keys case-insensitively
    pub ignore_case: bool,
}

/// A key declared after a key that should follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderViolation {
    pub key: CompactString,
    /// The key it should have been declared before
    pub previous: CompactString,
    /// Span of the offending entry
    pub span: Span,
}

/// Check that the defaults group is declared in alphabetical order.
///
/// Each spread-free run is checked on its own. The reference key only moves
/// forward on an in-order key, so `{ c, b, a }` reports both `b` and `a`.
/// The properties group does not take part in the comparison.
pub fn check_ordering(
    _properties: Option<&MetadataGroup<'_>>,
    defaults: Option<&MetadataGroup<'_>>,
    options: OrderingOptions,
) -> Vec<OrderViolation> {
    let Some(defaults) = defaults else {
        return Vec::new();
    };

    let mut violations = Vec::new();
    for run in defaults.runs() {
        let mut iter = run.into_iter();
        let Some(mut previous) = iter.next() else {
            continue;
        };
        for current in iter {
            if collate(&current.name, options) < collate(&previous.name, options) {
                violations.push(OrderViolation {
                    key: current.name.clone(),
                    previous: previous.name.clone(),
                    span: current.span,
                });
            } else {
                previous = current;
            }
        }
    }
    violations
}

#[inline]
fn collate(name: &str, options: OrderingOptions) -> Cow<'_, str> {
    if options.ignore_case {
        Cow::Owned(name.to_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}
