use json_tools_path::{create, find, join, resolve, split, PathError, PathStep};
use serde_json::json;

#[test]
fn pointer_and_dot_notation_agree() {
    let cases = [
        ("/a/0/b", "$.a[0].b"),
        ("/foo", "$.foo"),
        ("/foo/bar/baz", "$.foo.bar.baz"),
        ("/a/1/2", "$.a[1][2]"),
        ("", "$"),
    ];

    for (pointer, dot) in cases {
        // The empty pointer is not a valid pointer path; only `$` names
        // the root.
        if pointer.is_empty() {
            assert_eq!(split(dot).unwrap(), vec![]);
            continue;
        }
        assert_eq!(
            split(pointer).unwrap(),
            split(dot).unwrap(),
            "notations disagree for {pointer} / {dot}"
        );
    }
}

#[test]
fn dot_parse_join_roundtrip_matrix() {
    let cases = ["$", "$.a", "$.a[0]", "$.a[0][3].b", "$.x.y.z", "$.a.[5]"];

    for case in cases {
        let path = split(case).unwrap();
        let rendered = join(&path);
        assert_eq!(
            split(&rendered).unwrap(),
            path,
            "roundtrip failed for {case}"
        );
    }
}

#[test]
fn resolve_matrix() {
    let doc = json!({"users": [{"name": "ada"}, {"name": "lin"}], "count": 2});

    assert_eq!(
        resolve(&doc, &split("$.users[1].name").unwrap()).unwrap(),
        &json!("lin")
    );
    assert_eq!(
        resolve(&doc, &split("/users/0/name").unwrap()).unwrap(),
        &json!("ada")
    );
    assert_eq!(resolve(&doc, &split("/count").unwrap()).unwrap(), &json!(2));

    assert!(matches!(
        resolve(&doc, &split("/users/5").unwrap()),
        Err(PathError::NotFound(_))
    ));
    assert!(matches!(
        resolve(&doc, &split("/count/0").unwrap()),
        Err(PathError::TypeMismatch { .. })
    ));
}

#[test]
fn create_resolves_across_notations() {
    for path_str in ["/a/2/b", "$.a[2].b"] {
        let path = split(path_str).unwrap();
        let doc = create(&path, json!(5));
        assert_eq!(doc, json!({"a": [null, null, {"b": 5}]}));
        assert_eq!(resolve(&doc, &path).unwrap(), &json!(5));
    }
}

#[test]
fn find_partial_matrix() {
    let doc = json!({"a": [null, {"b": 3}]});

    let path = split("$.b").unwrap();
    let result = find(&doc, &path);
    assert_eq!(result.matched, &[] as &[PathStep]);
    assert_eq!(result.remainder, &path[..]);
    assert_eq!(result.node, &doc);

    let path = split("$.a.b").unwrap();
    let result = find(&doc, &path);
    assert_eq!(result.matched, &path[..1]);
    assert_eq!(result.node, &json!([null, {"b": 3}]));

    let path = split("$.a[1].b.c").unwrap();
    let result = find(&doc, &path);
    assert_eq!(result.matched, &path[..3]);
    assert_eq!(result.node, &json!(3));
}
