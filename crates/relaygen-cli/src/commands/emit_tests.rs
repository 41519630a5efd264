use std::fs;
use std::path::{Path, PathBuf};

use indoc::indoc;

use super::emit::{EmitArgs, emit_to};

const API: &str = indoc! {r#"
    {
      "name": "IApi",
      "namespace": ["Contoso"],
      "members": [{ "kind": "dispose" }]
    }
"#};

fn args(inputs: Vec<PathBuf>, out_dir: Option<PathBuf>) -> EmitArgs {
    EmitArgs {
        inputs,
        out_dir,
        namespace_suffix: "RestEaseGeneratedTypes".to_string(),
        type_prefix: "Implementation".to_string(),
        indent: 4,
        nullable_disable: true,
    }
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn emits_to_writer_without_out_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write(dir.path(), "api.json", API);

    let mut out = Vec::new();
    emit_to(&args(vec![input], None), &mut out).expect("emit succeeds");

    let text = String::from_utf8(out).expect("utf-8");
    assert!(text.starts_with("#nullable disable\n"));
    assert!(text.contains("internal class Implementation_0_IApi : global::Contoso.IApi"));
    assert!(text.contains("this.requester.Dispose();"));
}

#[test]
fn writes_one_file_per_contract() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write(
        dir.path(),
        "contracts.json",
        r#"[{ "name": "IUsers" }, { "name": "@event" }]"#,
    );
    let out_dir = dir.path().join("generated");

    let mut out = Vec::new();
    emit_to(&args(vec![input], Some(out_dir.clone())), &mut out).expect("emit succeeds");

    assert!(out.is_empty());
    let users = fs::read_to_string(out_dir.join("Implementation_0_IUsers.g.cs")).expect("file 0");
    let event = fs::read_to_string(out_dir.join("Implementation_1_event.g.cs")).expect("file 1");
    assert!(users.contains("class Implementation_0_IUsers "));
    assert!(event.contains("class Implementation_1_event "));
}

#[test]
fn directory_inputs_are_indexed_in_path_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "b.json", r#"{ "name": "IB" }"#);
    write(dir.path(), "a.json", r#"{ "name": "IA" }"#);
    write(dir.path(), "notes.txt", "ignored");
    let out_dir = dir.path().join("out");

    emit_to(
        &args(vec![dir.path().to_path_buf()], Some(out_dir.clone())),
        &mut Vec::new(),
    )
    .expect("emit succeeds");

    assert!(out_dir.join("Implementation_0_IA.g.cs").is_file());
    assert!(out_dir.join("Implementation_1_IB.g.cs").is_file());
}

#[test]
fn naming_flags_reach_the_emitter() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write(dir.path(), "api.json", API);
    let mut args = args(vec![input], None);
    args.namespace_suffix = "Generated".to_string();
    args.type_prefix = "Impl".to_string();
    args.indent = 2;
    args.nullable_disable = false;

    let mut out = Vec::new();
    emit_to(&args, &mut out).expect("emit succeeds");

    let text = String::from_utf8(out).expect("utf-8");
    assert!(!text.contains("#nullable"));
    assert!(text.contains("namespace Contoso.Generated\n{\n  ["));
    assert!(text.contains("internal class Impl_0_IApi"));
}

#[test]
fn failed_contract_is_reported_and_others_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write(
        dir.path(),
        "contracts.json",
        r#"[{ "name": "IGood" }, { "name": "Not Valid" }]"#,
    );
    let out_dir = dir.path().join("out");

    let err = emit_to(&args(vec![input], Some(out_dir.clone())), &mut Vec::new())
        .expect_err("second contract is invalid");

    assert_eq!(err, "1 of 2 contracts could not be generated");
    assert!(out_dir.join("Implementation_0_IGood.g.cs").is_file());
    assert!(!out_dir.join("Implementation_1_Not Valid.g.cs").exists());
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("missing.json");

    let err = emit_to(&args(vec![missing], None), &mut Vec::new()).expect_err("no such file");
    assert!(err.starts_with("failed to read '"), "{err}");
}

#[test]
fn stdout_takes_a_single_contract() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write(
        dir.path(),
        "contracts.json",
        r#"[{ "name": "IOne" }, { "name": "ITwo" }]"#,
    );

    let mut out = Vec::new();
    let err = emit_to(&args(vec![input], None), &mut out).expect_err("two contracts, no out dir");

    assert_eq!(err, "2 contracts loaded; stdout holds one, use -o/--out-dir for more");
    assert!(out.is_empty());
}

#[test]
fn invalid_naming_flags_fail_before_loading() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut args = args(vec![dir.path().join("missing.json")], None);
    args.namespace_suffix = "class.".to_string();

    let err = emit_to(&args, &mut Vec::new()).expect_err("trailing dot");
    assert_eq!(err, "invalid namespace suffix `class.`");
}
