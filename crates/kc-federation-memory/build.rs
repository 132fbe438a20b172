// Generates the `info.properties` resource shown on the server info page.
// - Package metadata comes from Cargo
// - Git commit hash falls back to "unknown" outside a checkout
// - Reruns when the checkout's HEAD or branch refs move

use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap_or_else(|_| ".".to_string()));

    let commit_hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout).ok()
            } else {
                None
            }
        })
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    let build_date = chrono::Utc::now().to_rfc3339();

    let entries = [
        ("name", env("CARGO_PKG_NAME")),
        ("version", env("CARGO_PKG_VERSION")),
        ("description", env("CARGO_PKG_DESCRIPTION")),
        ("repository", env("CARGO_PKG_REPOSITORY")),
        ("git.commit", commit_hash),
        ("build.timestamp", build_date),
    ];

    let mut content = String::from("# Generated by build.rs, do not edit\n");
    for (key, value) in entries {
        content.push_str(key);
        content.push('=');
        content.push_str(&escape_value(&value));
        content.push('\n');
    }

    if let Err(e) = fs::write(out_dir.join("info.properties"), content) {
        println!("cargo:warning=failed to write info.properties: {e}");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=Cargo.toml");

    // New commits and branch switches refresh git.commit and build.timestamp
    let manifest_dir = PathBuf::from(env("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir.join("..").join("..");
    let git_head = repo_root.join(".git").join("HEAD");
    let git_heads_dir = repo_root.join(".git").join("refs").join("heads");
    if git_head.exists() {
        println!("cargo:rerun-if-changed={}", git_head.display());
    }
    if git_heads_dir.exists() {
        println!("cargo:rerun-if-changed={}", git_heads_dir.display());
    }
}

fn env(key: &str) -> String {
    std::env::var(key).unwrap_or_default()
}

fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for (i, c) in value.chars().enumerate() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            ' ' if i == 0 => escaped.push_str("\\ "),
            c => escaped.push(c),
        }
    }
    escaped
}
