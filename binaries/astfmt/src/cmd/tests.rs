use super::*;

const TWO_TABLES: &str = r#"[
    {"table_expression": {"source": {"table": {"table": "t1"}}}},
    {
        "table_join": {"kind": "inner", "constraint": {"using": [{"column": {"column": "x"}}]}},
        "table_expression": {"source": {"table": {"table": "t2"}}}
    }
]"#;

#[test]
fn formats_from_clause() -> Result<()> {
    let sql = format_source(TWO_TABLES, &FormatOptions::default())?;
    assert_eq!(sql, "t1\nINNER JOIN t2 USING (x)");

    let options = FormatOptions {
        settings: FormatSettings::one_line(),
        ..Default::default()
    };
    assert_eq!(format_source(TWO_TABLES, &options)?, "t1 INNER JOIN t2 USING (x)");
    Ok(())
}

#[test]
fn indent_applies_to_continuation_lines() -> Result<()> {
    let options = FormatOptions {
        indent: 1,
        ..Default::default()
    };
    assert_eq!(format_source(TWO_TABLES, &options)?, "t1\n    INNER JOIN t2 USING (x)");
    Ok(())
}

#[test]
fn formats_select() -> Result<()> {
    let json = r#"{
        "targets": ["wildcard"],
        "tables": [{"table_expression": {"source": {"function": {"name": "numbers", "arguments": [{"literal": {"uint": 3}}]}}}}]
    }"#;
    let options = FormatOptions {
        node: NodeKind::Select,
        ..Default::default()
    };
    assert_eq!(format_source(json, &options)?, "SELECT *\nFROM numbers(3)");
    Ok(())
}

#[test]
fn lists_children() -> Result<()> {
    let tree = tree_source(TWO_TABLES, NodeKind::From)?;
    assert_eq!(
        tree,
        "TablesInSelectQuery\n\
         \x20\x20TablesInSelectQueryElement\n\
         \x20\x20\x20\x20TableExpression\n\
         \x20\x20\x20\x20\x20\x20TableIdentifier\n\
         \x20\x20TablesInSelectQueryElement\n\
         \x20\x20\x20\x20TableJoin\n\
         \x20\x20\x20\x20\x20\x20ExpressionList\n\
         \x20\x20\x20\x20\x20\x20\x20\x20Expression\n\
         \x20\x20\x20\x20TableExpression\n\
         \x20\x20\x20\x20\x20\x20TableIdentifier\n"
    );
    Ok(())
}

#[test]
fn bad_json_is_a_decode_error() {
    let err = format_source("{", &FormatOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn node_names() {
    assert_eq!(NodeKind::from_name("from"), Some(NodeKind::From));
    assert_eq!(NodeKind::from_name("select"), Some(NodeKind::Select));
    assert_eq!(NodeKind::from_name("where"), None);
}
