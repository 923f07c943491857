//! Example demonstrating litegen's statement builder.
//!
//! Run with:
//!   cargo run --example basic -p litegen

use litegen::{GenResult, Query, args};

fn main() -> GenResult<()> {
    // INSERT
    let mut q = Query::new();
    q.insert("users", &["name", "email", "age"], args![
        "alice",
        "alice@example.com",
        32
    ]);
    let stmt = q.build()?;
    println!("{}", stmt.sql());
    println!("  args: {:?}", stmt.args());

    // UPDATE + WHERE
    let mut q = Query::new();
    q.update("users", &["email"], args!["new@example.com"])
        .where_clause("id = ?", args![7]);
    let stmt = q.build()?;
    println!("{}", stmt.sql());
    println!("  args: {:?}", stmt.args());

    // SELECT with JOIN, GROUP BY, ORDER BY
    let mut q = Query::new();
    q.select("orders", &["users.name", "COUNT(orders.id)"])
        .join("users", &[("orders.user_id", "users.id")])
        .where_clause("orders.total > ?", args![100])
        .group_by(&["users.name"])
        .order_by(&["COUNT(orders.id)"])
        .append("LIMIT 10");
    let stmt = q.build()?;
    println!("{}", stmt.sql());
    println!("  args: {:?}", stmt.args());

    // DELETE
    let mut q = Query::new();
    q.delete("sessions")
        .where_clause("expires_at < ?", args!["2026-01-01"]);
    let stmt = q.build()?;
    println!("{}", stmt.sql());
    println!("  args: {:?}", stmt.args());

    Ok(())
}
