//! Example demonstrating WHERE composition with filters and the registry.
//!
//! Run with:
//!   cargo run --example filters -p litegen

use litegen::{FilterSet, GenResult, Query, Registry, between, eq, like};

/// Optional search criteria, as an HTTP handler might collect them.
#[derive(Debug, Default)]
struct Search {
    name: Option<String>,
    status: Option<String>,
    date_from: Option<String>,
    date_to: Option<String>,
}

fn build_search(search: &Search) -> GenResult<litegen::Statement> {
    let mut filters = FilterSet::new();
    if search.name.is_some() {
        filters.add("name", like);
    }
    if search.status.is_some() {
        filters.add("status", eq);
    }
    if search.date_from.is_some() && search.date_to.is_some() {
        filters.add("created:DATE", between);
    }

    let mut q = Query::new();
    q.select("users", &["id", "name", "status", "created"])
        .where_set(&filters);

    // Bind in filter order.
    if let Some(name) = &search.name {
        q.bind(format!("%{name}%"));
    }
    if let Some(status) = &search.status {
        q.bind(status.clone());
    }
    if let (Some(from), Some(to)) = (&search.date_from, &search.date_to) {
        q.bind(from.clone()).bind(to.clone());
    }

    q.order_by(&["created"]).build()
}

fn main() -> GenResult<()> {
    let search = Search {
        name: Some("ali".to_string()),
        status: Some("active".to_string()),
        date_from: Some("2024-01-01".to_string()),
        date_to: Some("2024-12-31".to_string()),
    };

    let stmt = build_search(&search)?;
    println!("{}", stmt.sql());
    println!("  args: {:?}", stmt.args());

    // The registry resolves conditionals by name, e.g. from configuration.
    let registry = Registry::default();
    let mut q = Query::new();
    q.select("events", &["id", "kind"])
        .where_named(&registry, &[("eq", "kind"), ("between", "at:DATE")])
        .bind("login")
        .bind("2024-06-01")
        .bind("2024-06-30");
    let stmt = q.build()?;
    println!("{}", stmt.sql());
    println!("  args: {:?}", stmt.args());

    Ok(())
}
