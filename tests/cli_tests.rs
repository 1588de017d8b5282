use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

const DEMO: &str = "tests/data/demo_library.json";

fn keywordmap() -> Command {
    let mut cmd = Command::cargo_bin("keywordmap").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("KEYWORDMAP_CONFIG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_keywords_lists_names() {
    let stdout = stdout_of(keywordmap().args(["keywords", DEMO, "-t", "DemoKeywords"]));
    let names: Vec<&str> = stdout.lines().collect();

    assert_eq!(
        names,
        vec![
            "get_AProperty",
            "set_AProperty",
            "DoSomething",
            "DoSomethingWithAnString",
            "Paint",
            "Log",
        ]
    );
}

#[test]
fn test_describe_json() {
    let stdout = stdout_of(keywordmap().args([
        "describe",
        DEMO,
        "--type",
        "DemoLibrary.DemoKeywords, DemoLibrary",
        "--format",
        "json",
    ]));
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(report["scope"], "GLOBAL");
    assert_eq!(report["version"], "1.0");
    assert_eq!(report["keywords"].as_array().map(Vec::len), Some(6));
}

#[test]
fn test_describe_to_output_file_as_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("report.yaml");

    keywordmap()
        .args(["describe", DEMO, "-t", "DemoKeywords", "-f", "yaml", "-o"])
        .arg(&output)
        .assert()
        .success();

    let report: serde_yaml::Value =
        serde_yaml::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(report["type_name"].as_str(), Some("DemoLibrary.DemoKeywords"));
}

#[test]
fn test_describe_uses_configured_format() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("custom.toml");
    fs::write(&config, "[output]\ndefault_format = \"json\"\n").unwrap();

    let stdout = stdout_of(
        keywordmap()
            .args(["describe", DEMO, "-t", "DemoKeywords", "--config"])
            .arg(&config),
    );
    assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());
}

#[test]
fn test_arguments_json() {
    let stdout = stdout_of(keywordmap().args([
        "arguments",
        DEMO,
        "DoSomethingWithAnString",
        "-t",
        "DemoKeywords",
    ]));
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(
        value["arguments"],
        serde_json::json!([["value", null], ["value2", null]])
    );
    assert_eq!(value["types"]["value"][1]["kind"], "int");
}

#[test]
fn test_unknown_keyword_fails() {
    let output = keywordmap()
        .args(["arguments", DEMO, "Nope", "-t", "DemoKeywords"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();

    assert!(String::from_utf8_lossy(&output).contains("Keyword 'Nope' not found"));
}

#[test]
fn test_ambiguous_type_selection_fails() {
    keywordmap().args(["keywords", DEMO]).assert().failure();
}

#[test]
fn test_explicit_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("broken.toml");
    fs::write(&config, "[output\n").unwrap();

    keywordmap()
        .args(["describe", DEMO, "-t", "DemoKeywords", "-c"])
        .arg(&config)
        .assert()
        .failure();
}

#[test]
fn test_init_creates_config_once() {
    let temp_dir = TempDir::new().unwrap();

    keywordmap()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();
    assert!(temp_dir.path().join(".keywordmap.toml").exists());

    keywordmap()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure();

    keywordmap()
        .current_dir(temp_dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}
