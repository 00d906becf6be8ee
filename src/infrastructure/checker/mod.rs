//! 타입 체커(pyright) CLI 실행기.

use std::process::Stdio;

use anyhow::{Context, Result, bail};
use tokio::process::Command;
use tracing::{debug, info};

use crate::application::config::CheckerCommandSpec;
use crate::domain::diagnostic::Report;

/// 진단이 있어도 정상 종료로 보는 종료 코드(0: 깨끗함, 1: 오류 보고).
const REPORTING_EXIT_CODES: [i32; 2] = [0, 1];

/// 체커를 실행하고 JSON 출력(`--outputjson`)을 리포트로 해석한다.
pub async fn run_checker(spec: &CheckerCommandSpec, paths: Option<&[String]>) -> Result<Report> {
    let mut args = spec.args.clone();
    if let Some(paths) = paths {
        args.extend(paths.iter().cloned());
    }

    info!(command = %spec.command, files = paths.map_or(0, |p| p.len()), "checker: running");
    debug!(?args, "checker: arguments");

    let output = Command::new(&spec.command)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .with_context(|| format!("checker: failed to spawn '{}'", spec.command))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

    let code = output.status.code();
    if !code.is_some_and(|c| REPORTING_EXIT_CODES.contains(&c)) {
        bail!(
            "checker: '{}' failed ({}): {}",
            spec.command,
            output.status,
            if stderr.is_empty() {
                stdout.trim()
            } else {
                stderr.as_str()
            }
        );
    }

    parse_report(&stdout)
}

/// 체커 JSON 출력을 리포트로 변환한다. 알 수 없는 필드는 무시한다.
pub fn parse_report(raw: &str) -> Result<Report> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("checker: empty output (expected JSON report)");
    }
    serde_json::from_str(trimmed).context("checker: unparseable JSON report")
}
