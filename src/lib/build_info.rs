/// Commit SHA baked in by the build script; "unknown" outside a git checkout.
pub fn git_commit_hash() -> &'static str {
    option_env!("DOCTOPROCHE_WEB_GIT_SHA")
        .filter(|sha| !sha.is_empty())
        .unwrap_or("unknown")
}
