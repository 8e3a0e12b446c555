//! End-to-end tests for `texpad export`.
//!
//! These run the real pipeline: MathJax typesetting, SVG rasterization,
//! and PNG encoding, through the compiled binary.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

/// Path to the texpad binary
fn texpad_bin() -> &'static str {
    env!("CARGO_BIN_EXE_texpad")
}

#[test]
fn test_export_basic_succeeds() {
    let dir = TempDir::new().unwrap();
    let out_path = dir.path().join("alpha.png");

    let output = Command::new(texpad_bin())
        .args([
            "export",
            "\\alpha + \\beta",
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Export should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(
        out_path.exists(),
        "Export file should exist at: {}",
        out_path.display()
    );

    let bytes = fs::read(&out_path).expect("Failed to read export file");
    assert_eq!(
        &bytes[..8],
        &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A],
        "Export should be a PNG file"
    );
}

#[test]
fn test_export_reads_source_from_file() {
    let dir = TempDir::new().unwrap();
    let tex_path = dir.path().join("eq.tex");
    fs::write(&tex_path, "x^2 + y^2 = r^2\n").unwrap();
    let out_path = dir.path().join("eq.png");

    let output = Command::new(texpad_bin())
        .args([
            "export",
            "--file",
            tex_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(out_path.exists());
}

#[test]
fn test_export_with_color_and_background() {
    let dir = TempDir::new().unwrap();
    let out_path = dir.path().join("colored.png");

    let output = Command::new(texpad_bin())
        .args([
            "export",
            "E = mc^2",
            "--color",
            "#1E90FF",
            "--background",
            "transparent",
            "--zoom",
            "2",
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(out_path.exists());
}

#[test]
fn test_export_rejects_bad_color() {
    let output = Command::new(texpad_bin())
        .args(["export", "x", "--color", "not-a-color"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1), "Bad color is a data error");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr: {stderr}");
}

#[test]
fn test_export_missing_source_file_is_io_error() {
    let output = Command::new(texpad_bin())
        .args(["export", "--file", "/nonexistent/equation.tex"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_export_requires_source_or_file() {
    let output = Command::new(texpad_bin())
        .args(["export"])
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));
}
