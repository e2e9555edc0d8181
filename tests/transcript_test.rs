use anyhow::Result;
use employee_management::{ConsoleSink, ScriptRunner, Transcript};
use std::process::{Command, Stdio};

const EXPECTED: [&str; 8] = [
    "Retrieving employee data from the external HR system.",
    "Displaying full-time employee details.",
    "Displaying basic employee details.",
    "Displaying full-time employee details.",
    "Displaying advanced employee details.",
    "Displaying part-time employee details.",
    "Processing command 1 in ConcreteEmployeeProcessor1.",
    "Processing command 2 in ConcreteEmployeeProcessor2.",
];

#[test]
fn test_default_script_transcript() -> Result<()> {
    let mut transcript = Transcript::new();
    ScriptRunner::default().run(&mut transcript)?;

    assert_eq!(transcript.lines, EXPECTED);
    Ok(())
}

#[test]
fn test_default_script_through_console_sink() -> Result<()> {
    let mut sink = ConsoleSink::new(Vec::new());
    ScriptRunner::default().run(&mut sink)?;

    let output = String::from_utf8(sink.into_inner())?;
    assert_eq!(output, format!("{}\n", EXPECTED.join("\n")));
    Ok(())
}

#[test]
fn test_binary_without_arguments() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_employee-management"))
        .env_remove("RUST_LOG")
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.lines().collect::<Vec<_>>(), EXPECTED);
    Ok(())
}

#[test]
fn test_binary_json_format() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_employee-management"))
        .args(["--format", "json"])
        .env_remove("RUST_LOG")
        .output()?;

    assert!(output.status.success());
    let parsed: Transcript = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed.lines, EXPECTED);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_binary_with_closed_stdout_fails_cleanly() -> Result<()> {
    for format in ["text", "json"] {
        let (reader, writer) = std::io::pipe()?;
        drop(reader);

        let output = Command::new(env!("CARGO_BIN_EXE_employee-management"))
            .args(["--format", format])
            .stdout(Stdio::from(writer))
            .env_remove("RUST_LOG")
            .output()?;

        assert_eq!(output.status.code(), Some(1), "format {}", format);
        let stderr = String::from_utf8(output.stderr)?;
        assert!(stderr.contains("Failed to write output"), "format {}: {}", format, stderr);
        assert!(!stderr.contains("panicked"), "format {}: {}", format, stderr);
    }
    Ok(())
}
