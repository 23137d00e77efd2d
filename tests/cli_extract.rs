use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

#[test]
fn command_invalid() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("parsel")?;
    cmd.arg("foobar");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("recognized"));

    Ok(())
}

#[test]
fn command_extract_passthrough() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("parsel")?;
    let output = cmd
        .arg("extract")
        .arg("tests/phylip/small.part")
        .arg("tests/phylip/small.phy")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout.lines().count(), 8);
    assert!(stdout.starts_with(" 4 12\n"));
    assert!(stdout.contains("rat ACGA----XXXX\n"));
    assert!(stdout.contains("LG, gene2.5-8 = 5-8\n"));

    Ok(())
}

#[test]
fn command_extract_fill() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("parsel")?;
    let output = cmd
        .arg("extract")
        .arg("tests/phylip/small.part")
        .arg("tests/phylip/small.phy")
        .arg("-f")
        .arg("50")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(
        stdout,
        " 4 8\nhuman ACGTACGT\nmouse ----CCCC\nrat ACGAXXXX\ndog TTTTGGGG\n\
         WAG, gene1.1-4 = 1-4\nJTT, gene3.9-12 = 5-8\n"
    );

    // 75% is not more than 75%
    let mut cmd = Command::cargo_bin("parsel")?;
    let output = cmd
        .arg("extract")
        .arg("tests/phylip/small.part")
        .arg("tests/phylip/small.phy")
        .arg("-f")
        .arg("75")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout, " 4 0\nhuman \nmouse \nrat \ndog \n");

    Ok(())
}

#[test]
fn command_extract_remove_and_taxa() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("parsel")?;
    let output = cmd
        .arg("extract")
        .arg("tests/phylip/small.part")
        .arg("tests/phylip/small.phy")
        .arg("-r")
        .arg("1")
        .arg("-t")
        .arg("3,0")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    // masked taxa keep the input order
    assert_eq!(
        stdout,
        " 2 8\nhuman ACGTACGT\ndog TTTTGGGG\n\
         WAG, gene1.1-4 = 1-4\nJTT, gene3.9-12 = 5-8\n"
    );

    Ok(())
}

#[test]
fn command_extract_names() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("parsel")?;
    let output = cmd
        .arg("extract")
        .arg("tests/phylip/small.part")
        .arg("tests/phylip/small.phy")
        .arg("-u")
        .arg("rat,mouse")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.starts_with(" 2 12\n"));
    assert!(stdout.contains("mouse "));
    assert!(stdout.contains("rat "));
    assert!(!stdout.contains("human"));

    Ok(())
}

#[test]
fn command_extract_partitions_in_order() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("parsel")?;
    let output = cmd
        .arg("extract")
        .arg("tests/phylip/small.part")
        .arg("tests/phylip/small.phy")
        .arg("-p")
        .arg("2,0")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("human ACGTACGT\n"));
    assert!(stdout.contains("dog GGGGTTTT\n"));
    assert!(stdout.contains("JTT, gene3.9-12 = 1-4\nWAG, gene1.1-4 = 5-8\n"));

    let mut cmd = Command::cargo_bin("parsel")?;
    cmd.arg("extract")
        .arg("tests/phylip/small.part")
        .arg("tests/phylip/small.phy")
        .arg("-p")
        .arg("0,3");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    Ok(())
}

#[test]
fn command_extract_random() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("parsel")?;
    let output = cmd
        .arg("extract")
        .arg("tests/phylip/small.part")
        .arg("tests/phylip/small.phy")
        .arg("-m")
        .arg("2")
        .arg("-d")
        .arg("--seed")
        .arg("42")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    // header, 4 taxa, 2 partitions
    assert_eq!(stdout.lines().count(), 7);
    assert!(stdout.starts_with(" 4 8\n"));

    // same seed, same result
    let mut cmd = Command::cargo_bin("parsel")?;
    let again = cmd
        .arg("extract")
        .arg("tests/phylip/small.part")
        .arg("tests/phylip/small.phy")
        .arg("-m")
        .arg("2")
        .arg("-d")
        .arg("--seed")
        .arg("42")
        .output()?;
    assert_eq!(stdout, String::from_utf8(again.stdout)?);

    Ok(())
}

#[test]
fn command_extract_random_too_many() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("parsel")?;
    cmd.arg("extract")
        .arg("tests/phylip/small.part")
        .arg("tests/phylip/small.phy")
        .arg("-m")
        .arg("4")
        .arg("-d");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("only 3 available"));

    Ok(())
}

#[test]
fn command_extract_species() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("parsel")?;
    let output = cmd
        .arg("extract")
        .arg("tests/phylip/small.part")
        .arg("tests/phylip/small.phy")
        .arg("-s")
        .arg("3")
        .arg("--seed")
        .arg("7")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.starts_with(" 3 12\n"));
    assert_eq!(stdout.lines().count(), 7);

    Ok(())
}

#[test]
fn command_extract_outfile() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let prefix = temp_dir.path().join("out");

    let mut cmd = Command::cargo_bin("parsel")?;
    cmd.arg("extract")
        .arg("tests/phylip/small.part")
        .arg("tests/phylip/small.phy")
        .arg("-r")
        .arg("0,2")
        .arg("-o")
        .arg(&prefix);
    cmd.assert().success().stdout(predicate::str::is_empty());

    let phy = std::fs::read_to_string(temp_dir.path().join("out.phy"))?;
    let part = std::fs::read_to_string(temp_dir.path().join("out.part"))?;
    assert_eq!(
        phy,
        " 4 4\nhuman ACGT\nmouse AAAA\nrat ----\ndog XX--\n"
    );
    assert_eq!(part, "LG, gene2.5-8 = 1-4\n");

    Ok(())
}
