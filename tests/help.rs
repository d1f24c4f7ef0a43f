mod common;
use common::pmtoken_cmd;

#[test]
fn test_help_lists_arguments_and_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let output = pmtoken_cmd().arg("--help").output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    if !output.status.success() {
        return Err(format!("--help failed. stderr: {stderr}, stdout: {stdout}").into());
    }

    for expected in [
        "Usage: pmtoken",
        "<ENVIRONMENT_FILE>",
        "--resource-uri-variable-key",
        "--globals",
        "--authority",
        "--debug",
        "workspace.postman_globals.json",
        "https://login.microsoftonline.com",
    ] {
        if !stdout.contains(expected) {
            return Err(format!("Expected '{expected}' in help output, got:\n{stdout}").into());
        }
    }

    Ok(())
}

#[test]
fn test_version_prints_package_version() -> Result<(), Box<dyn std::error::Error>> {
    let output = pmtoken_cmd().arg("--version").output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    if !output.status.success() {
        return Err("--version failed".into());
    }

    let expected = format!("pmtoken {}", env!("CARGO_PKG_VERSION"));
    if stdout.trim() != expected {
        return Err(format!("Expected '{expected}', got: {stdout}").into());
    }

    Ok(())
}

#[test]
fn test_missing_required_arguments_is_a_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let output = pmtoken_cmd().output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    if output.status.code() != Some(2) {
        return Err(format!(
            "Expected exit code 2, got {:?}. stderr: {stderr}",
            output.status.code()
        )
        .into());
    }
    if !stderr.contains("required") {
        return Err(format!("Expected usage error in stderr, got: {stderr}").into());
    }
    if !stderr.contains("--resource-uri-variable-key") {
        return Err(format!("Expected missing option name in stderr, got: {stderr}").into());
    }

    Ok(())
}
