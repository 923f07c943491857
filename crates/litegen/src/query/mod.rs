//! Statement accumulator.
//!
//! [`Query`] renders one SQL statement incrementally: each clause method
//! appends (or, for statement heads, replaces) rendered text and returns
//! `&mut Self` for chaining. Bound arguments accumulate in call order in a
//! parallel list. Nothing is executed; [`Query::build`] hands over a
//! [`Statement`] for whatever `?`-placeholder execution API sits downstream.
//!
//! Clause order is entirely caller-controlled. The builder never reorders or
//! validates SQL shape; calling a clause method twice appends two fragments.

use crate::condition::{FilterSet, Registry};
use crate::error::{GenError, GenResult};
use crate::value::Value;

/// Render `n` comma-separated `?` placeholders (`?,?,?`).
///
/// ```
/// assert_eq!(litegen::placeholders(3), "?,?,?");
/// assert_eq!(litegen::placeholders(0), "");
/// ```
pub fn placeholders(n: usize) -> String {
    let mut s = String::with_capacity(n * 2);
    for i in 0..n {
        if i > 0 {
            s.push(',');
        }
        s.push('?');
    }
    s
}

/// Fluent SQL statement builder.
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// Rendered SQL text so far
    sql: String,
    /// Bound arguments, in call order
    args: Vec<Value>,
    /// Build error (validated at finish)
    build_error: Option<String>,
}

impl Query {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a deferred build error. The first error wins; later clause
    /// calls still chain but the statement will fail `validate()`.
    fn fail(&mut self, message: impl Into<String>) {
        if self.build_error.is_none() {
            self.build_error = Some(message.into());
        }
    }

    // ==================== Statement heads ====================

    /// Render `INSERT INTO <table> (<fields>) VALUES (?,...)`, one
    /// placeholder per field, and append `args`.
    ///
    /// Replaces any previously rendered text; arguments accumulate. No check
    /// that `args` matches the field count is made here — that is
    /// [`validate`](Query::validate)'s job.
    pub fn insert(
        &mut self,
        table: &str,
        fields: &[&str],
        args: impl IntoIterator<Item = Value>,
    ) -> &mut Self {
        if fields.is_empty() {
            self.fail(format!("insert into {table}: field list cannot be empty"));
            return self;
        }
        self.sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            fields.join(","),
            placeholders(fields.len())
        );
        self.args.extend(args);
        self
    }

    /// Render `UPDATE <table> SET f=?, g=?` and append `args`.
    ///
    /// A subsequent WHERE clause is needed to avoid an unbounded update.
    pub fn update(
        &mut self,
        table: &str,
        fields: &[&str],
        args: impl IntoIterator<Item = Value>,
    ) -> &mut Self {
        if fields.is_empty() {
            self.fail(format!("update {table}: field list cannot be empty"));
            return self;
        }
        self.sql = format!("UPDATE {} SET {}=?", table, fields.join("=?, "));
        self.args.extend(args);
        self
    }

    /// Render `SELECT f, g FROM <table>`.
    pub fn select(&mut self, table: &str, fields: &[&str]) -> &mut Self {
        if fields.is_empty() {
            self.fail(format!("select from {table}: field list cannot be empty"));
            return self;
        }
        self.sql = format!("SELECT {} FROM {}", fields.join(", "), table);
        self
    }

    /// Render `DELETE FROM <table>`.
    ///
    /// A subsequent WHERE clause is needed to avoid deleting every row.
    pub fn delete(&mut self, table: &str) -> &mut Self {
        self.sql = format!("DELETE FROM {table}");
        self
    }

    // ==================== Clauses ====================

    /// Append ` WHERE <clause>` verbatim and append `args`.
    ///
    /// # Safety
    ///
    /// The clause is concatenated as-is. The caller must ensure safety.
    pub fn where_clause(
        &mut self,
        clause: &str,
        args: impl IntoIterator<Item = Value>,
    ) -> &mut Self {
        self.sql.push_str(" WHERE ");
        self.sql.push_str(clause);
        self.args.extend(args);
        self
    }

    /// Append a WHERE clause composed from a [`FilterSet`].
    ///
    /// Each filter's field spec is split on `:` and rendered through its
    /// conditional; the first fragment follows ` WHERE `, the rest ` AND `.
    /// An empty set is a no-op. A conditional error leaves the text
    /// untouched and records a deferred build error.
    ///
    /// Arguments for the placeholders these fragments emit are not bound
    /// here; supply them with [`bind`](Query::bind) in filter order.
    pub fn where_set(&mut self, filters: &FilterSet) -> &mut Self {
        let mut fragments = Vec::with_capacity(filters.len());
        for filter in filters.iter() {
            match filter.render() {
                Ok(fragment) => fragments.push(fragment),
                Err(e) => {
                    self.fail(format!("where filter '{}': {e}", filter.spec()));
                    return self;
                }
            }
        }
        for (i, fragment) in fragments.iter().enumerate() {
            self.sql.push_str(if i == 0 { " WHERE " } else { " AND " });
            self.sql.push_str(fragment);
        }
        self
    }

    /// Append a WHERE clause from `(conditional name, field spec)` entries
    /// resolved through a [`Registry`], in slice order.
    pub fn where_named(&mut self, registry: &Registry, entries: &[(&str, &str)]) -> &mut Self {
        match registry.filter_set(entries) {
            Ok(set) => self.where_set(&set),
            Err(e) => {
                self.fail(e.to_string());
                self
            }
        }
    }

    /// Append ` JOIN <table> ON a=b,...` from field pairs.
    ///
    /// SQLite only recognises inner joins, so no join kind is taken.
    pub fn join(&mut self, table: &str, pairs: &[(&str, &str)]) -> &mut Self {
        if pairs.is_empty() {
            self.fail(format!("join {table}: pair list cannot be empty"));
            return self;
        }
        let on: Vec<String> = pairs.iter().map(|(a, b)| format!("{a}={b}")).collect();
        self.sql.push_str(" JOIN ");
        self.sql.push_str(table);
        self.sql.push_str(" ON ");
        self.sql.push_str(&on.join(","));
        self
    }

    /// Append ` ORDER BY f,g`.
    pub fn order_by(&mut self, fields: &[&str]) -> &mut Self {
        if fields.is_empty() {
            self.fail("order by: field list cannot be empty");
            return self;
        }
        self.sql.push_str(" ORDER BY ");
        self.sql.push_str(&fields.join(","));
        self
    }

    /// Append ` GROUP BY f,g`.
    pub fn group_by(&mut self, fields: &[&str]) -> &mut Self {
        if fields.is_empty() {
            self.fail("group by: field list cannot be empty");
            return self;
        }
        self.sql.push_str(" GROUP BY ");
        self.sql.push_str(&fields.join(","));
        self
    }

    /// Append a raw space-separated fragment verbatim — the escape hatch for
    /// anything the other methods don't cover.
    ///
    /// # Safety
    ///
    /// This directly concatenates SQL. The caller must ensure safety.
    pub fn append(&mut self, fragment: &str) -> &mut Self {
        self.sql.push(' ');
        self.sql.push_str(fragment);
        self
    }

    /// Push one bound argument without touching the SQL text.
    ///
    /// This is how arguments reach the placeholders a
    /// [`where_set`](Query::where_set) clause emits.
    pub fn bind(&mut self, value: impl Into<Value>) -> &mut Self {
        self.args.push(value.into());
        self
    }

    // ==================== Finish ====================

    /// The SQL text rendered so far.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The bound arguments in call order.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Validate builder state: any deferred build error, then the invariant
    /// that the `?` placeholder count equals the bound argument count.
    pub fn validate(&self) -> GenResult<()> {
        if let Some(err) = &self.build_error {
            return Err(GenError::Validation(err.clone()));
        }
        let placeholder_count = self.sql.matches('?').count();
        if placeholder_count != self.args.len() {
            return Err(GenError::Validation(format!(
                "Query: placeholders({placeholder_count}) != args({})",
                self.args.len()
            )));
        }
        Ok(())
    }

    /// Validate and hand over the finished statement.
    pub fn build(&self) -> GenResult<Statement> {
        self.validate()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %self.sql, args = self.args.len(), "statement built");
        Ok(Statement {
            sql: self.sql.clone(),
            args: self.args.clone(),
        })
    }

    /// Hand over the raw pieces without validation, for callers that prefer
    /// a trust-the-caller contract.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }
}

/// A finished statement: SQL text plus bound arguments, ready for a
/// `?`-placeholder execution API.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    args: Vec<Value>,
}

impl Statement {
    /// The statement text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The bound arguments in placeholder order.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Decompose into `(sql, args)`.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }
}
