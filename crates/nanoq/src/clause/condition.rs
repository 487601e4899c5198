use super::group::GroupExpression;
use crate::arg::{Arg, Fragment, IntoArg, Sealed, impl_tree_arg};
use crate::builder::QueryBuilder;
use crate::query::{Query, ToQuery};

/// Boolean connective placed before a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    fn as_sql(self) -> &'static str {
        match self {
            Connective::And => " AND ",
            Connective::Or => " OR ",
        }
    }
}

/// Predicates joined with `AND` / `OR`, left to right.
///
/// The connective of the first condition is ignored. No precedence is added
/// between mixed connectives: `a.and(x).or(y).and(z)` renders `x OR y AND z`.
/// Group explicitly by nesting another `ConditionClause`; a nested clause with
/// more than one condition is parenthesized when embedded. Conditions that
/// render nothing (an empty clause or tree) are dropped when added.
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct ConditionClause {
    conditions: Vec<(Connective, Fragment)>,
}

impl ConditionClause {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition joined with `AND`.
    pub fn and(self, condition: impl Into<Fragment>) -> Self {
        self.push(Connective::And, condition.into())
    }

    /// Add a condition joined with `OR`.
    pub fn or(self, condition: impl Into<Fragment>) -> Self {
        self.push(Connective::Or, condition.into())
    }

    fn push(mut self, connective: Connective, condition: Fragment) -> Self {
        if !condition.is_blank() {
            self.conditions.push((connective, condition));
        }
        self
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// The tree used when this clause is embedded somewhere else.
    fn embedded(&self) -> Query {
        if self.conditions.len() > 1 {
            GroupExpression::new(self.to_query()).to_query()
        } else {
            self.to_query()
        }
    }
}

impl ToQuery for ConditionClause {
    fn to_query(&self) -> Query {
        let mut q = QueryBuilder::new();
        for (i, (connective, condition)) in self.conditions.iter().enumerate() {
            if i > 0 {
                q.raw(connective.as_sql());
            }
            q.raw(condition.clone());
        }
        q.into_query()
    }
}

impl From<ConditionClause> for Fragment {
    fn from(clause: ConditionClause) -> Self {
        Fragment::Query(clause.embedded())
    }
}

impl From<&ConditionClause> for Fragment {
    fn from(clause: &ConditionClause) -> Self {
        Fragment::Query(clause.embedded())
    }
}

impl Sealed for ConditionClause {}

impl IntoArg for ConditionClause {
    fn into_arg(self) -> Arg {
        Arg::Query(self.embedded())
    }
}

impl Sealed for &ConditionClause {}

impl IntoArg for &ConditionClause {
    fn into_arg(self) -> Arg {
        Arg::Query(self.embedded())
    }
}

/// `WHERE <conditions>`, or nothing at all when there are no conditions.
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct WhereClause {
    conditions: ConditionClause,
}

impl WhereClause {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition joined with `AND`.
    pub fn and(mut self, condition: impl Into<Fragment>) -> Self {
        self.conditions = self.conditions.and(condition);
        self
    }

    /// Add a condition joined with `OR`.
    pub fn or(mut self, condition: impl Into<Fragment>) -> Self {
        self.conditions = self.conditions.or(condition);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl ToQuery for WhereClause {
    fn to_query(&self) -> Query {
        if self.conditions.is_empty() {
            return Query::empty();
        }
        QueryBuilder::new()
            .with_raw("WHERE ")
            .with_raw(self.conditions.to_query())
            .into_query()
    }
}

impl_tree_arg!(WhereClause);
