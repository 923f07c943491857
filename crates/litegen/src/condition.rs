//! WHERE-clause conditionals and filter composition.
//!
//! A [`Conditional`] is a pure function rendering one comparison fragment
//! from the tokens of a field spec. Field specs are colon-separated, so
//! `"date:DATE"` splits into `["date", "DATE"]` before rendering.
//! [`FilterSet`] keeps an ordered list of (spec, conditional) pairs that
//! [`Query::where_set`](crate::Query::where_set) joins with `AND`, and
//! [`Registry`] resolves conditionals by name for callers that configure
//! filters dynamically.

use crate::error::{GenError, GenResult};
use std::collections::HashMap;

/// A pure function rendering one WHERE fragment from field-spec tokens.
pub type Conditional = fn(&[&str]) -> GenResult<String>;

/// Render an equality comparison.
///
/// Two or more tokens compare two fields (`a=b`); a single token compares
/// the field against a placeholder (`a=?`).
pub fn eq(tokens: &[&str]) -> GenResult<String> {
    match tokens {
        [] => Err(GenError::conditional("eq requires at least one token")),
        [field] => Ok(format!("{field}=?")),
        [a, b, ..] => Ok(format!("{a}={b}")),
    }
}

/// Render a LIKE comparison against a placeholder (`a LIKE ?`).
pub fn like(tokens: &[&str]) -> GenResult<String> {
    match tokens {
        [] => Err(GenError::conditional("like requires at least one token")),
        [field, ..] => Ok(format!("{field} LIKE ?")),
    }
}

/// Render a BETWEEN comparison with two placeholders.
///
/// One token renders `a BETWEEN ? AND ?`. With a second token naming a SQL
/// function, both the field and the placeholders are wrapped, so the field
/// spec `"date:DATE"` renders `DATE(date) BETWEEN DATE(?) AND DATE(?)`. Any
/// other arity is an error.
pub fn between(tokens: &[&str]) -> GenResult<String> {
    match tokens {
        [field] => Ok(format!("{field} BETWEEN ? AND ?")),
        [field, func] => Ok(format!("{func}({field}) BETWEEN {func}(?) AND {func}(?)")),
        _ => Err(GenError::conditional(format!(
            "between requires one or two tokens, got {}",
            tokens.len()
        ))),
    }
}

/// One (field spec, conditional) pair inside a [`FilterSet`].
#[derive(Debug, Clone)]
pub struct Filter {
    spec: String,
    cond: Conditional,
}

impl Filter {
    /// Create a filter from a field spec and a conditional.
    pub fn new(spec: impl Into<String>, cond: Conditional) -> Self {
        Self {
            spec: spec.into(),
            cond,
        }
    }

    /// Split the field spec on `:` and render through the conditional.
    pub fn render(&self) -> GenResult<String> {
        let tokens: Vec<&str> = self.spec.split(':').collect();
        (self.cond)(&tokens)
    }

    /// The raw field spec.
    pub fn spec(&self) -> &str {
        &self.spec
    }
}

/// Ordered collection of filters composing a WHERE clause via `AND`.
///
/// Insertion order is significant: the first filter renders after `WHERE`,
/// every subsequent one after `AND`.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    /// Create an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter.
    pub fn add(&mut self, spec: impl Into<String>, cond: Conditional) -> &mut Self {
        self.filters.push(Filter::new(spec, cond));
        self
    }

    /// Number of filters in the set.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Iterate the filters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter()
    }
}

/// Name → conditional lookup table.
///
/// [`Registry::default`] pre-registers the built-ins `"eq"`, `"like"` and
/// `"between"`; callers add their own with [`register`](Registry::register).
#[derive(Debug, Clone)]
pub struct Registry {
    conditionals: HashMap<String, Conditional>,
}

impl Registry {
    /// Create a registry with nothing registered.
    pub fn empty() -> Self {
        Self {
            conditionals: HashMap::new(),
        }
    }

    /// Register a conditional under `name`, replacing any existing entry.
    pub fn register(&mut self, name: impl Into<String>, cond: Conditional) -> &mut Self {
        self.conditionals.insert(name.into(), cond);
        self
    }

    /// Look up a conditional by name.
    pub fn get(&self, name: &str) -> GenResult<Conditional> {
        self.conditionals
            .get(name)
            .copied()
            .ok_or_else(|| GenError::UnknownConditional(name.to_string()))
    }

    /// Build a [`FilterSet`] from `(name, spec)` entries resolved through
    /// this registry, preserving slice order.
    pub fn filter_set(&self, entries: &[(&str, &str)]) -> GenResult<FilterSet> {
        let mut set = FilterSet::new();
        for (name, spec) in entries {
            set.add(*spec, self.get(name)?);
        }
        Ok(set)
    }
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register("eq", eq)
            .register("like", like)
            .register("between", between);
        registry
    }
}
