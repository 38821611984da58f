use std::{
    env,
    fs,
    path::PathBuf,
    process::Command,
};

const BUNDLE: &str = r#"{
  "profile": { "username": "ace", "created_at": "2024-03-05T12:00:00Z", "bio": "Support main" },
  "counters": { "current_streak": 1, "hours_played": 12.0 },
  "matches": [
    { "game_name": "Valorant", "result": "win" },
    { "game_name": "Valorant", "result": "loss" },
    { "game_name": "CS2", "result": "win" }
  ],
  "achievements": [
    { "achievements": { "title": "First Blood", "description": "Win a match" } }
  ]
}"#;

fn norm_newlines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "")
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("coachgg_cli_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_bundle(dir: &PathBuf) -> PathBuf {
    let input = dir.join("bundle.json");
    fs::write(&input, BUNDLE).unwrap();
    input
}

#[test]
fn stats_prints_aggregated_json() {
    let exe = env!("CARGO_BIN_EXE_coachgg");
    let dir = scratch_dir("stats");
    let input = write_bundle(&dir);

    let output = Command::new(exe)
        .args(["stats", input.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["total_matches"], 3);
    assert_eq!(v["wins"], 2);
    assert_eq!(v["win_rate_pct"], 66.7);
    assert_eq!(v["per_game"][0]["game_name"], "Valorant");
    assert_eq!(v["per_game"][1]["game_name"], "CS2");
}

#[test]
fn export_writes_text_report_named_after_user() {
    let exe = env!("CARGO_BIN_EXE_coachgg");
    let dir = scratch_dir("export");
    let input = write_bundle(&dir);
    let out_dir = dir.join("out");
    fs::create_dir_all(&out_dir).unwrap();

    let output = Command::new(exe)
        .args([
            "export",
            input.to_str().unwrap(),
            "-o",
            out_dir.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let expected = out_dir.join("ace_esports_profile.txt");
    assert!(expected.exists());

    let text = norm_newlines(&fs::read_to_string(&expected).unwrap());
    assert!(text.starts_with("--- Page 1 ---\nace\nEsports Player Profile\n"));
    assert!(text.contains("Bio: Support main"));
    assert!(text.contains("Game Breakdown"));
    assert!(!text.contains("Recent Performance"));
    assert!(text.contains("• First Blood"));
    assert!(text.contains("Generated by CoachGG"));
}

#[test]
fn export_json_format() {
    let exe = env!("CARGO_BIN_EXE_coachgg");
    let dir = scratch_dir("export_json");
    let input = write_bundle(&dir);

    let output = Command::new(exe)
        .args(["export", input.to_str().unwrap(), "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let path = dir.join("ace_esports_profile.json");
    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(v["username"], "ace");
    assert_eq!(v["blocks"][1]["text"], "Esports Player Profile");
}

#[test]
fn missing_bundle_is_reported() {
    let exe = env!("CARGO_BIN_EXE_coachgg");

    let missing = env::temp_dir().join(format!("coachgg_cli_missing_{}.json", std::process::id()));
    let _ = fs::remove_file(&missing);

    let output = Command::new(exe)
        .args(["stats", missing.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = norm_newlines(&String::from_utf8_lossy(&output.stderr));
    assert!(stderr.contains("Error: failed to read bundle: "));
    assert!(stderr.contains("Caused by:"));
}

#[test]
fn invalid_config_is_reported_with_code() {
    let exe = env!("CARGO_BIN_EXE_coachgg");
    let dir = scratch_dir("bad_config");
    let input = write_bundle(&dir);
    let config = dir.join("coachgg.toml");
    fs::write(&config, "trend_window = 0\n").unwrap();

    let output = Command::new(exe)
        .args([
            "preview",
            input.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = norm_newlines(&String::from_utf8_lossy(&output.stderr));
    assert!(stderr.contains("Error: config load failed: "));
    assert!(stderr.contains("E1003: trend_window must be at least 1"));
}

#[test]
fn export_write_failure_is_reported() {
    let exe = env!("CARGO_BIN_EXE_coachgg");
    let dir = scratch_dir("write_failure");
    let input = write_bundle(&dir);
    let missing_parent = dir.join("missing_dir");

    let output = Command::new(exe)
        .args([
            "export",
            input.to_str().unwrap(),
            "-o",
            missing_parent.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = norm_newlines(&String::from_utf8_lossy(&output.stderr));
    assert!(stderr.contains("Error: export failed: "));
    assert!(stderr.contains("E2001: failed to write report:"));
}

#[test]
fn help_mentions_subcommands() {
    let exe = env!("CARGO_BIN_EXE_coachgg");

    let output = Command::new(exe).arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = norm_newlines(&String::from_utf8_lossy(&output.stdout));
    assert!(stdout.contains("export"));
    assert!(stdout.contains("stats"));
    assert!(stdout.contains("preview"));
}
