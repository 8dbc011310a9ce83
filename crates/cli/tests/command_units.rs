use tempfile::tempdir;
use varpair::commands::summarize;
use varpair::{read_collected_functions, resolve_policy, write_collected_functions};
use varpair_core::AdmissionPolicy;

mod helpers;
use helpers::sample_function;

#[test]
fn summarize_counts_both_views() {
    let summary = summarize(&sample_function("walk", 0x4010, true));
    assert_eq!(summary.name, "walk");
    assert_eq!(summary.debug.arguments, 1);
    assert_eq!(summary.debug.locals, 1);
    assert_eq!(summary.debug.locations, 2);
    assert!(summary.debug.has_user_names);
    assert_eq!(summary.decompiler.name, "sub_4010");
    assert_eq!(summary.decompiler.address, Some(0x4010));
    assert!(!summary.decompiler.has_user_names);
    assert_eq!(summary.raw_code_bytes, "undefined4 sub_4010(void)".len());
}

#[test]
fn collected_functions_round_trip_through_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    let functions = vec![sample_function("a", 1, true), sample_function("b", 2, false)];

    write_collected_functions(&path, &functions).expect("write");
    let back = read_collected_functions(&path).expect("read");
    assert_eq!(back, functions);
}

#[test]
fn resolve_policy_defaults_without_path() {
    assert_eq!(resolve_policy(None).expect("policy"), AdmissionPolicy::default());
}
