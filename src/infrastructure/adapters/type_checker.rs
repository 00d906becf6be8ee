//! 타입 체커 실행 포트 구현 어댑터.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::CheckerCommandSpec;
use crate::application::ports::TypeChecker;
use crate::domain::diagnostic::Report;
use crate::infrastructure::checker;

/// 로컬 CLI(pyright)를 실행하는 어댑터.
pub struct PyrightChecker;

#[async_trait]
impl TypeChecker for PyrightChecker {
    async fn run(&self, spec: &CheckerCommandSpec, paths: Option<&[String]>) -> Result<Report> {
        checker::run_checker(spec, paths).await
    }
}
