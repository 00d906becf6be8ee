//! 로컬 git 작업 트리 조작(변경 파일 조회, 체크아웃).

use std::process::Stdio;

use anyhow::{Context, Result, bail};
use tokio::process::Command;
use tracing::debug;

async fn run_git(args: &[&str]) -> Result<String> {
    debug!(?args, "git: running");
    let output = Command::new("git")
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .context("git: failed to spawn git")?;

    if !output.status.success() {
        bail!(
            "git: `git {}` failed ({}): {}",
            args.join(" "),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// base...head 사이 추가/수정/이름변경 파일 중 확장자가 맞는 것만 돌려준다.
pub async fn changed_files(
    base_ref: &str,
    head_ref: &str,
    extensions: &[String],
) -> Result<Vec<String>> {
    let range = format!("{base_ref}...{head_ref}");
    let stdout = run_git(&["diff", "--name-only", "--diff-filter=ACMR", &range]).await?;
    Ok(filter_by_extension(&stdout, extensions))
}

pub async fn current_revision() -> Result<String> {
    let stdout = run_git(&["rev-parse", "HEAD"]).await?;
    Ok(stdout.trim().to_string())
}

pub async fn checkout(rev: &str) -> Result<()> {
    run_git(&["checkout", "--quiet", rev]).await.map(|_| ())
}

fn filter_by_extension(name_only: &str, extensions: &[String]) -> Vec<String> {
    name_only
        .lines()
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .filter(|path| extensions.iter().any(|ext| path.ends_with(ext.as_str())))
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_matching_extensions() {
        let stdout = "src/a.py\nREADME.md\n\nsrc/b.pyi\nsetup.cfg\npkg/c.py\n";
        let files = filter_by_extension(stdout, &[".py".to_string()]);
        assert_eq!(files, ["src/a.py", "pkg/c.py"]);

        let files = filter_by_extension(stdout, &[".py".to_string(), ".pyi".to_string()]);
        assert_eq!(files, ["src/a.py", "src/b.pyi", "pkg/c.py"]);
    }
}
