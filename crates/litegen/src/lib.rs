//! # litegen
//!
//! A lightweight SQLite statement generator for Rust.
//!
//! ## Features
//!
//! - **SQL explicit**: statements are rendered text plus a parallel argument
//!   list; nothing is hidden behind a dialect layer
//! - **Fluent chaining**: every clause method returns `&mut Self`
//! - **Composable filters**: WHERE predicates built from
//!   [`Conditional`] functions chained with `AND` via [`FilterSet`]
//! - **Deferred validation**: malformed input never panics mid-chain;
//!   [`Query::validate`] and [`Query::build`] surface it as an error
//! - **No execution**: the output is a `(sql, args)` pair for whatever
//!   `?`-placeholder client runs it
//!
//! ## Usage
//!
//! ```
//! use litegen::{args, FilterSet, Query, eq, like};
//!
//! // INSERT
//! let mut q = Query::new();
//! q.insert("users", &["name", "age"], args!["alice", 32]);
//! let stmt = q.build()?;
//! assert_eq!(stmt.sql(), "INSERT INTO users (name,age) VALUES (?,?)");
//!
//! // SELECT with composed filters
//! let mut filters = FilterSet::new();
//! filters.add("name", like).add("status", eq);
//!
//! let mut q = Query::new();
//! q.select("users", &["id", "name"])
//!     .where_set(&filters)
//!     .bind("%ali%")
//!     .bind("active")
//!     .order_by(&["id"]);
//! assert_eq!(
//!     q.sql(),
//!     "SELECT id, name FROM users WHERE name LIKE ? AND status=? ORDER BY id"
//! );
//! # Ok::<(), litegen::GenError>(())
//! ```
//!
//! Builder methods never reorder clauses: the caller controls statement
//! shape, and incorrect ordering produces invalid SQL silently, exactly as
//! with hand-written strings. Identifier quoting and escaping are also the
//! caller's responsibility.

pub mod condition;
pub mod error;
pub mod query;
pub mod value;

pub use condition::{Conditional, Filter, FilterSet, Registry, between, eq, like};
pub use error::{GenError, GenResult};
pub use query::{Query, Statement, placeholders};
pub use value::Value;
