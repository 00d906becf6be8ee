//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::{CheckerCommandSpec, Config, RunConfig, TokenResolution};
use crate::domain::aggregate::FileGroup;
use crate::domain::comment::RemoteComment;
use crate::domain::diagnostic::Report;
use crate::domain::run::PullRefs;
use crate::domain::target::PullRequestTarget;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 설정(token/env)을 실제 토큰 값으로 해석하는 포트.
pub trait TokenResolver: Send + Sync {
    fn resolve(&self, config: &Config) -> Result<TokenResolution>;
}

/// PR URL 또는 CI 이벤트 정보를 대상 PR로 변환하는 포트.
pub trait TargetResolver: Send + Sync {
    fn resolve(&self, pr_url: Option<&str>) -> Result<PullRequestTarget>;
}

/// PR 코멘트 저장소 포트. 모든 호출은 원격/실패 가능이며 재시도하지 않는다.
#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn list_issue_comments(&self) -> Result<Vec<RemoteComment>>;
    async fn create_issue_comment(&self, body: &str) -> Result<RemoteComment>;
    async fn update_issue_comment(&self, comment_id: &str, body: &str) -> Result<RemoteComment>;
    async fn delete_issue_comment(&self, comment_id: &str) -> Result<()>;
    async fn list_review_comments(&self) -> Result<Vec<RemoteComment>>;
    async fn create_review_comment(
        &self,
        path: &str,
        commit_sha: &str,
        body: &str,
    ) -> Result<RemoteComment>;
    async fn update_review_comment(&self, comment_id: &str, body: &str) -> Result<RemoteComment>;
    async fn delete_review_comment(&self, comment_id: &str) -> Result<()>;
}

/// VCS(GitHub) 연동 추상화 포트.
#[async_trait]
pub trait VcsGateway: CommentStore {
    async fn fetch_pull_refs(&self) -> Result<PullRefs>;
}

/// 대상/설정에 맞는 VCS 게이트웨이를 생성하는 팩토리 포트.
pub trait VcsFactory: Send + Sync {
    fn build(&self, target: &PullRequestTarget, config: &RunConfig) -> Box<dyn VcsGateway>;
}

/// 외부 타입 체커 실행 포트. `paths`가 None이면 프로젝트 전체를 검사한다.
#[async_trait]
pub trait TypeChecker: Send + Sync {
    async fn run(&self, spec: &CheckerCommandSpec, paths: Option<&[String]>) -> Result<Report>;
}

/// 로컬 작업 트리(git) 접근 포트.
#[async_trait]
pub trait Workspace: Send + Sync {
    /// base..head 사이 변경 파일 중 확장자가 맞는 것(순서 보장 없음)
    async fn changed_files(
        &self,
        base_ref: &str,
        head_ref: &str,
        extensions: &[String],
    ) -> Result<Vec<String>>;
    /// 현재 체크아웃된 커밋 SHA
    async fn current_revision(&self) -> Result<String>;
    async fn checkout(&self, rev: &str) -> Result<()>;
}

/// 절대 경로를 저장소 기준 상대 경로로 바꾸는 포트.
pub trait PathResolver: Send + Sync {
    fn relative_path(&self, absolute_path: &str, repo_name: &str) -> String;
}

/// 코멘트 본문 렌더링 포트(마커 footer 제외).
pub trait CommentRenderer: Send + Sync {
    fn render_file_group(&self, group: &FileGroup) -> String;
    fn render_summary(&self, report: &Report) -> String;
    fn render_comparison(&self, base: &Report, head: &Report, refs: &PullRefs) -> String;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    fn raw(&self, line: &str);
}
