//! git 작업 트리 포트 구현 어댑터.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::ports::Workspace;
use crate::infrastructure::git;

/// 현재 디렉터리의 git 저장소를 다루는 어댑터.
pub struct GitWorkspace;

#[async_trait]
impl Workspace for GitWorkspace {
    async fn changed_files(
        &self,
        base_ref: &str,
        head_ref: &str,
        extensions: &[String],
    ) -> Result<Vec<String>> {
        git::changed_files(base_ref, head_ref, extensions).await
    }

    async fn current_revision(&self) -> Result<String> {
        git::current_revision().await
    }

    async fn checkout(&self, rev: &str) -> Result<()> {
        git::checkout(rev).await
    }
}
