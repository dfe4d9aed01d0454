//! Edit operation costs with an explicit forbidden outcome.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

// =#========================================================================#=
// COST
// =#========================================================================#=
/// Cost of an edit operation.
///
/// [`Cost::Forbidden`] marks an operation the edit script must never use.
/// It compares greater than every finite cost and absorbs addition, so a
/// script containing it is never cheaper than one made of deletions and
/// insertions, however costs are scaled.
///
/// # Example
/// ```
/// use bracktree::cost::Cost;
///
/// assert!(Cost::Forbidden > Cost::Finite(1e300));
/// assert_eq!(Cost::ONE + Cost::ONE, Cost::Finite(2.0));
/// assert_eq!(Cost::ONE + Cost::Forbidden, Cost::Forbidden);
/// assert_eq!(Cost::Forbidden.value(), None);
/// ```
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Cost {
    /// Non-negative finite cost
    Finite(f64),
    /// Operation not allowed
    Forbidden,
}

impl Cost {
    /// Finite cost of zero.
    pub const ZERO: Cost = Cost::Finite(0.0);

    /// Finite cost of one.
    pub const ONE: Cost = Cost::Finite(1.0);

    /// Returns the finite value, or `None` if forbidden.
    pub fn value(self) -> Option<f64> {
        match self {
            Cost::Finite(value) => Some(value),
            Cost::Forbidden => None,
        }
    }

    /// Returns whether the operation is forbidden.
    pub fn is_forbidden(self) -> bool {
        matches!(self, Cost::Forbidden)
    }
}

impl From<f64> for Cost {
    fn from(value: f64) -> Self {
        Cost::Finite(value)
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, other: Cost) -> Cost {
        match (self, other) {
            (Cost::Finite(a), Cost::Finite(b)) => Cost::Finite(a + b),
            _ => Cost::Forbidden,
        }
    }
}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Cost::Finite(a), Cost::Finite(b)) => a.partial_cmp(b),
            (Cost::Finite(_), Cost::Forbidden) => Some(Ordering::Less),
            (Cost::Forbidden, Cost::Finite(_)) => Some(Ordering::Greater),
            (Cost::Forbidden, Cost::Forbidden) => Some(Ordering::Equal),
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(value) => write!(f, "{value}"),
            Cost::Forbidden => write!(f, "forbidden"),
        }
    }
}
