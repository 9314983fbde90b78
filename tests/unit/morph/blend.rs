use super::*;
use crate::compile::set::compile;
use crate::path::parser::parse_path;

#[test]
fn one_hot_weights_reproduce_each_input() {
    let set = compile(&["M0,0 L1,1 L3,3", "M0,0 L1,1 L2,2"]).unwrap();
    assert_eq!(morph(&set, &[1.0, 0.0]).unwrap(), "M0 0 L1 1 L3 3");
    assert_eq!(morph(&set, &[0.0, 1.0]).unwrap(), "M0 0 L1 1 L2 2");
}

#[test]
fn uniform_weights_return_the_average() {
    let set = compile(&["M0,0 L1,1 L3,3", "M0,0 L1,1 L2,2"]).unwrap();
    assert_eq!(morph(&set, &[0.5, 0.5]).unwrap(), "M0 0 L1 1 L2.5 2.5");
}

#[test]
fn intermediate_weights_interpolate() {
    let set = compile(&["M0,0", "M8,4"]).unwrap();
    assert_eq!(morph(&set, &[0.75, 0.25]).unwrap(), "M2 1");
}

#[test]
fn weights_may_extrapolate() {
    let set = compile(&["M0,0", "M10,10"]).unwrap();
    assert_eq!(morph(&set, &[1.5, -0.5]).unwrap(), "M-5 -5");
}

#[test]
fn rejects_the_wrong_weight_count() {
    let set = compile(&["M0,0", "M1,1"]).unwrap();
    let err = morph(&set, &[1.0]).unwrap_err();
    assert!(matches!(err, MorphError::WeightCountMismatch(_)));
    assert!(err.to_string().contains("expected 2 weight(s), got 1"));
}

#[test]
fn relative_letters_survive_morphing() {
    let set = compile(&["m1,1 l2,2", "m3,3 l4,4"]).unwrap();
    assert_eq!(morph(&set, &[0.5, 0.5]).unwrap(), "m2 2 l3 3");
}

#[test]
fn close_contributes_a_bare_letter() {
    let set = compile(&["M0,0 Z m5,5", "M1,1 Z m7,7"]).unwrap();
    assert_eq!(morph(&set, &[0.5, 0.5]).unwrap(), "M0.5 0.5 Zm6 6");
}

#[test]
fn output_with_a_mid_path_close_reparses() {
    let set = compile(&["M0 0 ZM4 4 L8 8", "M2 2 ZM6 6 L10 10"]).unwrap();
    let out = morph(&set, &[0.5, 0.5]).unwrap();
    assert_eq!(out, "M1 1 ZM5 5 L9 9");

    let reparsed = parse_path(&out).unwrap();
    assert_eq!(reparsed.len(), set.command_count());
    for (command, &tag) in reparsed.iter().zip(set.tags()) {
        assert_eq!(command.tag(), tag);
    }
}

#[test]
fn output_reparses_to_the_compiled_structure() {
    let set = compile(&["M0,0 Q1,1 2,2 Z", "M1,0 Q2,1 3,2 Z"]).unwrap();
    let out = morph(&set, &[0.25, 0.75]).unwrap();
    let reparsed = parse_path(&out).unwrap();
    assert_eq!(reparsed.len(), set.command_count());
    for (command, &tag) in reparsed.iter().zip(set.tags()) {
        assert_eq!(command.tag(), tag);
    }
}

#[test]
fn morphing_leaves_the_set_untouched() {
    let set = compile(&["M0,0 L4,4", "M2,2 L6,6"]).unwrap();
    let before = set.clone();
    morph(&set, &[0.25, 0.75]).unwrap();
    morph(&set, &[1.0, 0.0]).unwrap();
    assert_eq!(set, before);
}

#[test]
fn empty_paths_morph_to_an_empty_string() {
    let set = compile(&["", " "]).unwrap();
    assert_eq!(set.command_count(), 0);
    assert_eq!(morph(&set, &[0.5, 0.5]).unwrap(), "");
}

#[test]
fn morphing_ignores_surplus_deviation_rows() {
    // More deviation rows than averaged values, as a hand-edited file
    // could carry. validate() rejects the shape; morph must not panic.
    let set: CompiledSet = serde_json::from_str(
        r#"{
            "tags": [{ "kind": "Move", "absolute": true }],
            "average": [[1.0, 2.0]],
            "diffs": [[[0.5], [-0.5], [9.9]]],
            "path_count": 1
        }"#,
    )
    .unwrap();

    assert!(set.validate().is_err());
    assert_eq!(morph(&set, &[1.0]).unwrap(), "M1.5 1.5");
}
