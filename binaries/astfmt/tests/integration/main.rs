use {
    ast::FormatSettings,
    astfmt::cmd::{self, Error, FormatOptions, NodeKind},
    std::fs,
    tempfile::tempdir,
};

const QUERY: &str = r#"{
    "targets": [{"expr": {"expr": {"column": {"table": "l", "column": "id"}}}}],
    "tables": [
        {"table_expression": {"source": {"table": {"table": "events", "alias": "l"}}, "final": true}},
        {
            "table_join": {
                "locality": "global",
                "strictness": "any",
                "kind": "left",
                "constraint": {"on": {"binary": {
                    "op": "equal",
                    "lhs": {"column": {"table": "l", "column": "id"}},
                    "rhs": {"column": {"table": "r", "column": "id"}}
                }}}
            },
            "table_expression": {"source": {"subquery": {
                "query": {"targets": ["wildcard"], "tables": [{"table_expression": {"source": {"table": {"table": "users"}}}}]},
                "alias": "r"
            }}}
        }
    ]
}"#;

#[test]
fn format_file() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("query.json");
    fs::write(&path, QUERY).unwrap();

    let input = cmd::read_input(Some(path.as_path())).unwrap();
    let options = FormatOptions {
        node: NodeKind::Select,
        ..Default::default()
    };
    let sql = cmd::format_source(&input, &options).unwrap();

    assert_eq!(
        sql,
        "SELECT l.id\n\
         FROM events AS l\n\
         FINAL\n\
         GLOBAL ANY LEFT JOIN (\n\
         \x20   SELECT *\n\
         \x20   FROM users\n\
         ) AS r ON l.id = r.id"
    );

    let options = FormatOptions {
        settings: FormatSettings::one_line(),
        node: NodeKind::Select,
        ..Default::default()
    };
    assert_eq!(
        cmd::format_source(&input, &options).unwrap(),
        "SELECT l.id FROM events AS l FINAL GLOBAL ANY LEFT JOIN (SELECT * FROM users) AS r ON l.id = r.id"
    );

    temp_dir.close().unwrap()
}

#[test]
fn missing_file() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("absent.json");

    let err = cmd::read_input(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, Error::ReadFile { .. }));
    assert!(err.to_string().contains("absent.json"));

    temp_dir.close().unwrap()
}
