use json_tools::json_patch::{
    apply_add, apply_patch, apply_remove, from_json_patch, to_json_patch,
};
use json_tools::json_patch_diff::diff;
use json_tools_path::{split, PathError};
use serde_json::{json, Value};

fn patched(mut doc: Value, ops: &[json_tools::Op]) -> Value {
    apply_patch(&mut doc, ops).expect("patch applies");
    doc
}

#[test]
fn simple_diff_and_patch() {
    let local = json!({"foo": 1, "bar": 2});
    let other = json!({"foo": 2, "baz": 3});

    let delta = diff(&local, &other);
    assert_eq!(
        to_json_patch(&delta),
        json!([
            {"replace": "/foo", "value": 2, "prev": 1},
            {"remove": "/bar", "prev": 2},
            {"add": "/baz", "value": 3}
        ])
    );
    assert_eq!(patched(local, &delta), other);
}

#[test]
fn nested_diff_and_patch() {
    let local = json!({"foo": {"bar": 1, "baz": 2}});
    let other = json!({"foo": {"bar": 2, "qux": 3}});

    let delta = diff(&local, &other);
    assert_eq!(patched(local, &delta), other);
}

#[test]
fn nested_array_diff_and_patch() {
    let local = json!({"foo": [{"bar": 1, "baz": 2}, {"qux": 3, "quux": 4}]});
    let other = json!({"foo": [{"bar": 2, "qux": 3}, {"quux": 4, "corge": 5}]});

    let delta = diff(&local, &other);
    // Paths emitted while recursing into array elements are qualified from
    // the document root.
    assert_eq!(
        to_json_patch(&delta),
        json!([
            {"replace": "/foo/0/bar", "value": 2, "prev": 1},
            {"remove": "/foo/0/baz", "prev": 2},
            {"add": "/foo/0/qux", "value": 3},
            {"remove": "/foo/1/qux", "prev": 3},
            {"add": "/foo/1/corge", "value": 5}
        ])
    );
    assert_eq!(patched(local, &delta), other);
}

#[test]
fn both_notations_split_to_the_same_path() {
    assert_eq!(split("/a/0/b").unwrap(), split("$.a[0].b").unwrap());
}

#[test]
fn remove_shifts_array_elements() {
    let mut doc = json!({"a": [1, 2, 3]});
    apply_remove(&mut doc, &split("/a/1").unwrap()).unwrap();
    assert_eq!(doc, json!({"a": [1, 3]}));
}

#[test]
fn remove_twice_equals_remove_once() {
    let mut once = json!({"a": {"b": 1}});
    apply_remove(&mut once, &split("/a/b").unwrap()).unwrap();

    let mut twice = json!({"a": {"b": 1}});
    apply_remove(&mut twice, &split("/a/b").unwrap()).unwrap();
    apply_remove(&mut twice, &split("/a/b").unwrap()).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn add_auto_extends_arrays_and_creates_containers() {
    let mut doc = json!({});
    apply_add(&mut doc, &split("/a/2/b").unwrap(), json!(5)).unwrap();
    assert_eq!(doc, json!({"a": [null, null, {"b": 5}]}));
}

#[test]
fn patch_walking_wrong_container_kind_fails() {
    let mut doc = json!({"a": {"x": 1}});
    let ops = vec![json_tools::Op::Add {
        path: split("/a/0").unwrap(),
        value: json!(2),
    }];
    let err = apply_patch(&mut doc, &ops).unwrap_err();
    assert!(matches!(
        err,
        json_tools::PatchError::Path(PathError::TypeMismatch { .. })
    ));
}

#[test]
fn edit_list_survives_the_wire() {
    let local = json!({"foo": [1, {"bar": 2}], "baz": "x"});
    let other = json!({"foo": [1, {"bar": 3}, 4], "qux": null});

    let delta = diff(&local, &other);
    let wire = to_json_patch(&delta);
    let decoded = from_json_patch(&wire).unwrap();
    assert_eq!(decoded, delta);
    assert_eq!(patched(local, &decoded), other);
}

#[test]
fn cross_shape_diff_roundtrips() {
    let cases = [
        (json!({"a": 1}), json!([1, 2, 3])),
        (json!([1, 2, 3]), json!("scalar")),
        (json!(null), json!({"a": {"b": [1]}})),
        (json!(1), json!(2)),
    ];
    for (local, other) in cases {
        let delta = diff(&local, &other);
        assert_eq!(patched(local.clone(), &delta), other, "failed for {local}");
    }
}
