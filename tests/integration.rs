use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_tcmodhelp")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

// -- mode selection --

#[test]
fn mode_is_required() {
    cmd()
        .arg(fixture_path("import_alsa.c"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "either source or binary analysis mode must be selected",
        ));
}

#[test]
fn binary_mode_is_unsupported() {
    cmd()
        .args(["-s", "-b"])
        .arg(fixture_path("import_alsa.c"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("binary analysis mode is not supported"));
}

#[test]
fn unknown_format_is_rejected() {
    cmd()
        .args(["-s", "-f", "markdown"])
        .arg(fixture_path("import_alsa.c"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format: markdown"));
}

// -- docbook output --

#[test]
fn docbook_module_list() {
    let assert = cmd()
        .arg("-s")
        .arg(fixture_path("import_alsa.c"))
        .assert()
        .success();
    let output = stdout_of(&assert);

    assert!(output.starts_with("<!-- begin module list -->\n<!-- import_alsa.c -->\n"));
    assert!(output.ends_with("</varlistentry>\n<!-- end module list -->\n"));
    assert!(output.contains("<option>alsa</option>"));
    assert!(output.contains("<emphasis>[audio]</emphasis>"));
    assert!(output.contains(
        "<para>This module reads audio samples from an ALSA device using libalsa.</para>"
    ));
    assert!(output.contains("<para>At compile time, this module requires: alsa-lib &gt;= 1.0.0</para>"));
    assert!(!output.contains("At run time"));
    assert!(output.contains("<literal>device (string)</literal>"));
    assert!(output.contains("<para>selects ALSA device to use for capturing audio.</para>"));
}

#[test]
fn docbook_multiple_options() {
    let assert = cmd()
        .arg("-s")
        .arg(fixture_path("import_v4l2.c"))
        .assert()
        .success();
    let output = stdout_of(&assert);

    assert!(output.contains("<option>v4l2</option>"));
    assert!(output.contains("<emphasis>[video,audio]</emphasis>"));
    assert_eq!(output.matches("<variablelist>").count(), 4);
    assert!(output.contains("<literal>format (integer)</literal>"));
    assert!(output.contains("<literal>format (string)</literal>"));
    assert!(output.contains("use &quot;list&quot; to get a list of supported formats."));
    assert!(output.contains("<literal>late_option (integer)</literal>"));
    assert!(!output.contains("never_seen"));
}

// -- text output --

#[test]
fn text_dump_matches_expected() {
    let expected = std::fs::read_to_string(fixture_path("import_alsa.expected.txt")).unwrap();

    let assert = cmd()
        .args(["-s", "-f", "text"])
        .arg(fixture_path("import_alsa.c"))
        .assert()
        .success();
    assert_eq!(stdout_of(&assert), expected);
}

// -- json output --

#[test]
fn json_output_is_an_array() {
    let assert = cmd()
        .args(["--source", "--format", "json"])
        .arg(fixture_path("import_alsa.c"))
        .arg(fixture_path("import_v4l2.c"))
        .assert()
        .success();
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&assert)).unwrap();

    let modules = value.as_array().unwrap();
    assert_eq!(modules.len(), 2);
    assert_eq!(modules[0]["name"], "alsa");
    assert_eq!(modules[1]["name"], "v4l2");
    assert_eq!(modules[1]["sections"]["OUTPUT"].as_array().unwrap().len(), 4);
}

// -- batch behaviour --

#[test]
fn unreadable_sources_are_skipped_silently() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("import_missing.c");

    let assert = cmd()
        .args(["-s", "-f", "text"])
        .arg(fixture_path("import_alsa.c"))
        .arg(missing.to_str().unwrap())
        .arg(fixture_path("import_v4l2.c"))
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
    let output = stdout_of(&assert);

    assert_eq!(output.matches("PROCESSING: import/demuxer").count(), 2);
    assert!(output.contains("MEDIA: [audio]"));
    assert!(output.contains("MEDIA: [video, audio]"));
}

#[test]
fn glob_patterns_are_expanded() {
    let assert = cmd()
        .args(["-s", "-f", "json"])
        .arg(fixture_path("import_*.c"))
        .assert()
        .success();
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&assert)).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
}

#[test]
fn malformed_option_fails_after_rendering_the_rest() {
    cmd()
        .args(["-s", "-f", "text"])
        .arg(fixture_path("filter_broken.c"))
        .arg(fixture_path("import_alsa.c"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("MEDIA: [audio]"))
        .stderr(predicate::str::contains("filter_broken.c: malformed option header"));
}

#[test]
fn no_files_yields_empty_list() {
    cmd()
        .arg("-s")
        .assert()
        .success()
        .stdout("<!-- begin module list -->\n<!-- end module list -->\n");
}
