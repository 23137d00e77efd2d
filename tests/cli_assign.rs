use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

#[test]
fn command_assign() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("parsel")?;
    let output = cmd
        .arg("assign")
        .arg("tests/phylip/small.part")
        .arg("tests/phylip/models.txt")
        .arg("-o")
        .arg("stdout")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(
        stdout,
        "LG, gene1 = 1-4\nJTT, gene2 = 5-8\nWAG, gene3 = 9-12\n"
    );

    Ok(())
}

#[test]
fn command_assign_default_output() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let models = temp_dir.path().join("RAxML_model.txt");
    std::fs::copy("tests/phylip/models.txt", &models)?;

    let mut cmd = Command::cargo_bin("parsel")?;
    cmd.arg("assign").arg("tests/phylip/small.part").arg(&models);
    cmd.assert().success().stdout(predicate::str::is_empty());

    let part = std::fs::read_to_string(temp_dir.path().join("RAxML_model.txt.part"))?;
    assert_eq!(part.lines().count(), 3);
    assert!(part.starts_with("LG, gene1 = 1-4\n"));

    Ok(())
}

#[test]
fn command_assign_count_mismatch() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("parsel")?;
    cmd.arg("assign")
        .arg("tests/phylip/small.part")
        .arg("tests/phylip/models_short.txt")
        .arg("-o")
        .arg("stdout");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("lists 2 models"));

    Ok(())
}
