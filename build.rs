use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    let sha = git_head_sha().unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=DOCTOPROCHE_WEB_GIT_SHA={sha}");
}

fn git_head_sha() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8(output.stdout).ok()?;
    let sha = stdout.trim();

    if sha.is_empty() {
        None
    } else {
        Some(sha.to_string())
    }
}
