use std::fs;
use std::process::Command;

fn moa_notation() -> Command {
    Command::new(env!("CARGO_BIN_EXE_moa-notation"))
}

#[test]
fn test_check_rejects_stray_closing_brace() -> anyhow::Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let config = temp_dir.path().join("macros.json");
    // `op` as first published, with one closing brace too many
    fs::write(
        &config,
        r#"{"Macros": {"vc": ["<#1>", 1], "op": ["\\,\\mathrm{#1}\\,}", 1]}}"#,
    )?;

    let output = moa_notation().arg("check").arg(&config).output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!output.status.success(), "check passed:\n{}", stdout);
    assert!(stdout.contains(r"error: \op"), "{}", stdout);
    assert!(stdout.contains("Unmatched '}'"), "{}", stdout);
    Ok(())
}

#[test]
fn test_check_accepts_exported_builtin_table() -> anyhow::Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let config = temp_dir.path().join("moa.json");

    let output = moa_notation()
        .args(["export", "--format", "json", "--output"])
        .arg(&config)
        .output()?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let output = moa_notation().arg("check").arg(&config).output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "check failed:\n{}", stdout);
    assert!(stdout.contains("macros OK"), "{}", stdout);
    assert!(!stdout.contains("error:"), "{}", stdout);
    Ok(())
}

#[test]
fn test_check_reports_missing_file() -> anyhow::Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let missing = temp_dir.path().join("absent.json");

    let output = moa_notation().arg("check").arg(&missing).output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load macro configuration"));
    Ok(())
}
