use super::args::CliArgs;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn parses_defaults() {
    let args = CliArgs::try_parse_from(["dtsgen"]).expect("default args should parse");

    assert_eq!(args.config, PathBuf::from("dtsgen.json"));
    assert!(!args.local);
    assert!(!args.remote);
    assert!(args.out_dir.is_none());
    assert!(args.exports_dir.is_none());
    assert!(args.versions.is_empty());
    assert!(args.namespaces.is_empty());
    assert!(!args.no_color);
}

#[test]
fn parses_common_flags() {
    let args = CliArgs::try_parse_from([
        "dtsgen",
        "--config",
        "ui5.json5",
        "--local",
        "--outDir",
        "out/d",
        "--exportsDir",
        "out/e",
        "--libVersion",
        "1.60.0",
        "--libVersion",
        "1.71.0",
        "-n",
        "sap.m",
        "--noColor",
    ])
    .expect("flags should parse");

    assert_eq!(args.config, PathBuf::from("ui5.json5"));
    assert!(args.local);
    assert_eq!(args.out_dir, Some(PathBuf::from("out/d")));
    assert_eq!(args.exports_dir, Some(PathBuf::from("out/e")));
    assert_eq!(args.versions, vec!["1.60.0", "1.71.0"]);
    assert_eq!(args.namespaces, vec!["sap.m"]);
    assert!(args.no_color);
}

#[test]
fn accepts_kebab_case_aliases() {
    let args = CliArgs::try_parse_from(["dtsgen", "--out-dir", "d", "--lib-version", "1.0"])
        .expect("aliases should parse");
    assert_eq!(args.out_dir, Some(PathBuf::from("d")));
    assert_eq!(args.versions, vec!["1.0"]);
}

#[test]
fn rejects_local_with_remote() {
    assert!(CliArgs::try_parse_from(["dtsgen", "--local", "--remote"]).is_err());
}
