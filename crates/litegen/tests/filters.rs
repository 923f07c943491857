//! Conditional rendering and filter composition through the public API.

use litegen::{FilterSet, GenError, Query, Registry, args, between, eq, like};

#[test]
fn eq_two_tokens_compares_fields() {
    assert_eq!(eq(&["x", "y"]).unwrap(), "x=y");
}

#[test]
fn eq_one_token_uses_placeholder() {
    assert_eq!(eq(&["x"]).unwrap(), "x=?");
}

#[test]
fn eq_no_tokens_is_error() {
    assert!(matches!(eq(&[]), Err(GenError::Conditional(_))));
}

#[test]
fn like_renders_placeholder() {
    assert_eq!(like(&["x"]).unwrap(), "x LIKE ?");
}

#[test]
fn like_ignores_extra_tokens() {
    assert_eq!(like(&["x", "junk"]).unwrap(), "x LIKE ?");
}

#[test]
fn between_one_token() {
    assert_eq!(between(&["age"]).unwrap(), "age BETWEEN ? AND ?");
}

#[test]
fn between_two_tokens_wraps_function() {
    assert_eq!(
        between(&["date", "DATE"]).unwrap(),
        "DATE(date) BETWEEN DATE(?) AND DATE(?)"
    );
}

#[test]
fn between_bad_arity_is_error() {
    assert!(between(&[]).is_err());
    assert!(between(&["a", "b", "c"]).is_err());
}

#[test]
fn filter_set_preserves_insertion_order() {
    let mut filters = FilterSet::new();
    filters
        .add("a", eq)
        .add("b", like)
        .add("c:DATE", between);
    assert_eq!(filters.len(), 3);

    let rendered: Vec<String> = filters.iter().map(|f| f.render().unwrap()).collect();
    assert_eq!(
        rendered,
        vec![
            "a=?".to_string(),
            "b LIKE ?".to_string(),
            "DATE(c) BETWEEN DATE(?) AND DATE(?)".to_string(),
        ]
    );
}

#[test]
fn field_spec_splits_on_colon() {
    // Two sub-tokens drive eq into field-to-field comparison.
    let mut filters = FilterSet::new();
    filters.add("a.id:b.id", eq);

    let mut q = Query::new();
    q.select("a", &["*"]).where_set(&filters);
    assert_eq!(q.sql(), "SELECT * FROM a WHERE a.id=b.id");
    assert!(q.validate().is_ok());
}

#[test]
fn registry_default_has_builtins() {
    let registry = Registry::default();
    assert_eq!(registry.get("eq").unwrap()(&["x"]).unwrap(), "x=?");
    assert_eq!(registry.get("like").unwrap()(&["x"]).unwrap(), "x LIKE ?");
    assert!(registry.get("between").is_ok());
}

#[test]
fn registry_unknown_name() {
    let registry = Registry::default();
    assert!(matches!(
        registry.get("ilike"),
        Err(GenError::UnknownConditional(_))
    ));
}

#[test]
fn registry_custom_conditional() {
    fn not_null(tokens: &[&str]) -> litegen::GenResult<String> {
        match tokens {
            [] => Err(GenError::conditional("not_null requires one token")),
            [field, ..] => Ok(format!("{field} IS NOT NULL")),
        }
    }

    let mut registry = Registry::default();
    registry.register("not_null", not_null);

    let mut q = Query::new();
    q.select("t", &["a"])
        .where_named(&registry, &[("not_null", "deleted_at"), ("eq", "status")])
        .bind("active");
    assert_eq!(
        q.sql(),
        "SELECT a FROM t WHERE deleted_at IS NOT NULL AND status=?"
    );
    assert!(q.validate().is_ok());
}

#[test]
fn empty_registry_resolves_nothing() {
    let registry = Registry::empty();
    assert!(registry.get("eq").is_err());
}

#[test]
fn where_set_binds_args_separately() {
    let mut filters = FilterSet::new();
    filters.add("price:ROUND", between).add("name", like);

    let mut q = Query::new();
    q.select("products", &["id"]).where_set(&filters);
    assert_eq!(
        q.sql(),
        "SELECT id FROM products \
         WHERE ROUND(price) BETWEEN ROUND(?) AND ROUND(?) AND name LIKE ?"
    );

    // Three placeholders, zero args so far: the FilterSet form leaves
    // binding to the caller.
    assert!(q.validate().is_err());

    q.bind(10).bind(20).bind("%chair%");
    let stmt = q.build().expect("valid after binding");
    assert_eq!(stmt.args().len(), 3);
    assert_eq!(stmt.args(), &args![10, 20, "%chair%"][..]);
}
