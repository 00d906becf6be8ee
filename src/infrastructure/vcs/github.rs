//! GitHub API 연동 구현.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::application::ports::{CommentStore, VcsGateway};
use crate::domain::comment::RemoteComment;
use crate::domain::run::PullRefs;

const PER_PAGE: usize = 100;

pub struct GitHubClient {
    client: Client,
    host: String,
    owner: String,
    repo: String,
    number: u64,
    token: Option<String>,
    api_base: Option<String>,
}

impl GitHubClient {
    /// GitHub 대상 클라이언트를 생성한다.
    pub fn new(
        host: String,
        owner: String,
        repo: String,
        number: u64,
        token: Option<String>,
        api_base: Option<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            host,
            owner,
            repo,
            number,
            token,
            api_base,
        }
    }

    fn api_base(&self) -> String {
        // github.com은 공개 API, 그 외는 Enterprise 기본 경로를 사용한다.
        if let Some(base) = &self.api_base {
            return base.trim_end_matches('/').to_string();
        }
        if self.host == "github.com" {
            "https://api.github.com".to_string()
        } else {
            format!("https://{}/api/v3", self.host)
        }
    }

    fn repo_endpoint(&self) -> String {
        format!("{}/repos/{}/{}", self.api_base(), self.owner, self.repo)
    }

    fn pull_endpoint(&self) -> String {
        format!("{}/pulls/{}", self.repo_endpoint(), self.number)
    }

    fn issue_comments_endpoint(&self) -> String {
        format!("{}/issues/{}/comments", self.repo_endpoint(), self.number)
    }

    fn issue_comment_endpoint(&self, comment_id: &str) -> String {
        format!("{}/issues/comments/{}", self.repo_endpoint(), comment_id)
    }

    fn review_comments_endpoint(&self) -> String {
        format!("{}/comments", self.pull_endpoint())
    }

    fn review_comment_endpoint(&self, comment_id: &str) -> String {
        format!("{}/pulls/comments/{}", self.repo_endpoint(), comment_id)
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        // 공통 헤더/인증 적용.
        let req = self
            .client
            .request(method, url)
            .header("User-Agent", "pr-typecheck")
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28");

        if let Some(token) = &self.token {
            req.bearer_auth(token)
        } else {
            req
        }
    }

    /// 응답 상태를 검사하고 JSON 본문을 해석한다.
    async fn read_json<T: DeserializeOwned>(resp: Response, what: &str) -> Result<T> {
        let status = resp.status();
        let body = resp
            .text()
            .await
            .with_context(|| format!("github: failed to read {what} body"))?;

        if !status.is_success() {
            anyhow::bail!("github: failed to {what} ({status}): {body}");
        }

        serde_json::from_str(&body).with_context(|| format!("github: invalid {what} JSON"))
    }

    async fn expect_no_content(resp: Response, what: &str) -> Result<()> {
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("github: failed to {what} ({status}): {body}")
    }

    /// 짧은 페이지가 나올 때까지 목록 API를 순회한다.
    async fn list_all(&self, endpoint: String, what: &str) -> Result<Vec<CommentResponse>> {
        let mut all = Vec::new();
        let mut page = 1usize;

        loop {
            let resp = self
                .request(Method::GET, endpoint.clone())
                .query(&[("per_page", PER_PAGE), ("page", page)])
                .send()
                .await
                .with_context(|| format!("github: failed to {what}"))?;

            let rows: Vec<CommentResponse> = Self::read_json(resp, what).await?;
            let count = rows.len();
            all.extend(rows);
            debug!(what, page, count, "github: fetched page");

            if count < PER_PAGE {
                break;
            }
            page += 1;
        }

        Ok(all)
    }

    async fn send_body(
        &self,
        method: Method,
        url: String,
        payload: serde_json::Value,
        what: &str,
    ) -> Result<RemoteComment> {
        let resp = self
            .request(method, url)
            .json(&payload)
            .send()
            .await
            .with_context(|| format!("github: failed to {what}"))?;

        let comment: CommentResponse = Self::read_json(resp, what).await?;
        Ok(comment.into())
    }

    async fn delete(&self, url: String, what: &str) -> Result<()> {
        let resp = self
            .request(Method::DELETE, url)
            .send()
            .await
            .with_context(|| format!("github: failed to {what}"))?;
        Self::expect_no_content(resp, what).await
    }
}

#[derive(Debug, Deserialize)]
struct PullResponse {
    head: PullRef,
    base: PullRef,
}

#[derive(Debug, Deserialize)]
struct PullRef {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct CommentUser {
    login: String,
}

#[derive(Debug, Deserialize)]
struct CommentResponse {
    id: u64,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    user: Option<CommentUser>,
    #[serde(default)]
    path: Option<String>,
}

impl From<CommentResponse> for RemoteComment {
    fn from(c: CommentResponse) -> Self {
        RemoteComment {
            id: c.id.to_string(),
            // 탈퇴한 사용자(ghost)는 user가 null로 온다.
            author: c.user.map(|u| u.login).unwrap_or_default(),
            body: c.body.unwrap_or_default(),
            path: c.path,
        }
    }
}

#[async_trait]
impl CommentStore for GitHubClient {
    async fn list_issue_comments(&self) -> Result<Vec<RemoteComment>> {
        let rows = self
            .list_all(self.issue_comments_endpoint(), "list issue comments")
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create_issue_comment(&self, body: &str) -> Result<RemoteComment> {
        self.send_body(
            Method::POST,
            self.issue_comments_endpoint(),
            json!({ "body": body }),
            "create issue comment",
        )
        .await
    }

    async fn update_issue_comment(&self, comment_id: &str, body: &str) -> Result<RemoteComment> {
        self.send_body(
            Method::PATCH,
            self.issue_comment_endpoint(comment_id),
            json!({ "body": body }),
            "update issue comment",
        )
        .await
    }

    async fn delete_issue_comment(&self, comment_id: &str) -> Result<()> {
        self.delete(self.issue_comment_endpoint(comment_id), "delete issue comment")
            .await
    }

    async fn list_review_comments(&self) -> Result<Vec<RemoteComment>> {
        let rows = self
            .list_all(self.review_comments_endpoint(), "list review comments")
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create_review_comment(
        &self,
        path: &str,
        commit_sha: &str,
        body: &str,
    ) -> Result<RemoteComment> {
        // 특정 줄이 아닌 파일 전체에 고정되는 리뷰 코멘트.
        self.send_body(
            Method::POST,
            self.review_comments_endpoint(),
            json!({
                "body": body,
                "commit_id": commit_sha,
                "path": path,
                "subject_type": "file",
            }),
            "create review comment",
        )
        .await
    }

    async fn update_review_comment(&self, comment_id: &str, body: &str) -> Result<RemoteComment> {
        self.send_body(
            Method::PATCH,
            self.review_comment_endpoint(comment_id),
            json!({ "body": body }),
            "update review comment",
        )
        .await
    }

    async fn delete_review_comment(&self, comment_id: &str) -> Result<()> {
        self.delete(self.review_comment_endpoint(comment_id), "delete review comment")
            .await
    }
}

#[async_trait]
impl VcsGateway for GitHubClient {
    async fn fetch_pull_refs(&self) -> Result<PullRefs> {
        let resp = self
            .request(Method::GET, self.pull_endpoint())
            .send()
            .await
            .context("github: failed to fetch PR")?;

        let pr: PullResponse = Self::read_json(resp, "fetch PR metadata").await?;
        Ok(PullRefs {
            head_sha: pr.head.sha,
            base_sha: pr.base.sha,
        })
    }
}
