//! Standard operator names.
//!
//! A [`FilterDeclaration`](crate::FilterDeclaration) carries its operator as
//! a free-form string so collections can declare bespoke ones, but every
//! factory in this crate draws from [`Op`].

use std::cmp::Ordering;
use std::fmt;

/// Operators produced by the filter factories.
///
/// - **Ordering/equality**: `Eq`, `Ne`, `Lt`, `Gt`, `Lte`, `Gte`
/// - **Membership**: `In` (field value occurs in a query list)
/// - **Text**: `Like`, `Ilike` (substring containment)
/// - **Array**: `Has` (field sequence contains the query value)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Eq,
    Ne,
    Lt,
    Gt,
    Lte,
    Gte,
    In,
    Like,
    Ilike,
    Has,
}

impl Op {
    /// The six ordering/equality operators, in declaration order.
    pub const ORDERING: [Op; 6] = [Op::Eq, Op::Ne, Op::Lt, Op::Gt, Op::Lte, Op::Gte];

    /// Returns `true` for operators decided by an [`Ordering`].
    pub fn is_ordering_op(self) -> bool {
        matches!(self, Op::Eq | Op::Ne | Op::Lt | Op::Gt | Op::Lte | Op::Gte)
    }

    /// Evaluates an ordering-based operator.
    ///
    /// Equality is not decided here for `Eq`/`Ne` on lists; see
    /// [`equality`](crate::value::equality).
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
            _ => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::Lt => "lt",
            Op::Gt => "gt",
            Op::Lte => "lte",
            Op::Gte => "gte",
            Op::In => "in",
            Op::Like => "like",
            Op::Ilike => "ilike",
            Op::Has => "has",
        }
    }

    /// Looks up a standard operator by name.
    pub fn from_name(name: &str) -> Option<Op> {
        Some(match name {
            "eq" => Op::Eq,
            "ne" => Op::Ne,
            "lt" => Op::Lt,
            "gt" => Op::Gt,
            "lte" => Op::Lte,
            "gte" => Op::Gte,
            "in" => Op::In,
            "like" => Op::Like,
            "ilike" => Op::Ilike,
            "has" => Op::Has,
            _ => return None,
        })
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_eval_ordering() {
        assert!(Op::Eq.eval_ordering(Ordering::Equal));
        assert!(!Op::Eq.eval_ordering(Ordering::Less));

        assert!(Op::Ne.eval_ordering(Ordering::Less));
        assert!(!Op::Ne.eval_ordering(Ordering::Equal));

        assert!(Op::Gt.eval_ordering(Ordering::Greater));
        assert!(!Op::Gt.eval_ordering(Ordering::Equal));

        assert!(Op::Gte.eval_ordering(Ordering::Equal));
        assert!(Op::Gte.eval_ordering(Ordering::Greater));
        assert!(!Op::Gte.eval_ordering(Ordering::Less));

        assert!(Op::Lt.eval_ordering(Ordering::Less));
        assert!(!Op::Lt.eval_ordering(Ordering::Equal));

        assert!(Op::Lte.eval_ordering(Ordering::Equal));
        assert!(Op::Lte.eval_ordering(Ordering::Less));
        assert!(!Op::Lte.eval_ordering(Ordering::Greater));

        // Not ordering-based
        assert!(!Op::Like.eval_ordering(Ordering::Equal));
        assert!(!Op::In.eval_ordering(Ordering::Equal));
    }

    #[test]
    fn ordering_set_is_closed() {
        assert!(Op::ORDERING.iter().all(|op| op.is_ordering_op()));
        assert!(!Op::In.is_ordering_op());
        assert!(!Op::Has.is_ordering_op());
    }

    #[test]
    fn names_round_trip() {
        for op in [Op::Eq, Op::Ne, Op::Lt, Op::Gt, Op::Lte, Op::Gte, Op::In, Op::Like, Op::Ilike, Op::Has] {
            assert_eq!(Op::from_name(op.as_str()), Some(op));
        }
        assert_eq!(Op::from_name("regex"), None);
    }

    #[test]
    fn op_display() {
        assert_eq!(Op::Ilike.to_string(), "ilike");
        assert_eq!(Op::Gte.to_string(), "gte");
    }
}
