//! 계획된 생성/수정/삭제를 코멘트 저장소에 순차 적용하는 단계.
//!
//! 개별 호출 실패는 전파하지 않고 결과로 기록한 뒤 다음 작업으로 넘어간다.

use tracing::{info, warn};

use crate::application::ports::{CommentStore, Reporter};
use crate::domain::comment::{CommentChannel, CommentTarget, LogicalComment};
use crate::domain::reconcile::{PlannedDelete, PlannedUpdate, ReconcilePlan};

/// 작업 하나의 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Created { subject: String, comment_id: String },
    Updated { subject: String, comment_id: String },
    Unchanged { subject: String, comment_id: String },
    Deleted { subject: String, comment_id: String },
    Failed { subject: String, reason: String },
}

impl ActionOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// 적용 결과 모음. 실패 여부 판단은 호출자가 한다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub outcomes: Vec<ActionOutcome>,
}

impl ReconcileReport {
    pub fn failures(&self) -> Vec<&ActionOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure()).collect()
    }

    pub fn count(&self, pred: impl Fn(&ActionOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

/// 한 번의 스냅샷으로 만든 계획을 순서대로 적용한다(재조회 없음).
/// 순서: 수정 → 생성 → 삭제.
pub async fn apply_plan<S>(
    store: &S,
    plan: &ReconcilePlan,
    commit_sha: &str,
    reporter: &dyn Reporter,
) -> ReconcileReport
where
    S: CommentStore + ?Sized,
{
    let mut report = ReconcileReport::default();

    for update in &plan.updates {
        let outcome = apply_update(store, update).await;
        record(reporter, &outcome);
        report.outcomes.push(outcome);
    }

    for create in &plan.creates {
        let outcome = apply_create(store, create, commit_sha).await;
        record(reporter, &outcome);
        report.outcomes.push(outcome);
    }

    for delete in &plan.deletes {
        let outcome = apply_delete(store, delete).await;
        record(reporter, &outcome);
        report.outcomes.push(outcome);
    }

    report
}

async fn apply_update<S>(store: &S, update: &PlannedUpdate) -> ActionOutcome
where
    S: CommentStore + ?Sized,
{
    let subject = update.desired.subject.clone();
    let comment_id = update.comment_id.clone();
    if update.unchanged {
        return ActionOutcome::Unchanged {
            subject,
            comment_id,
        };
    }

    let result = match update.desired.target.channel() {
        CommentChannel::Issue => {
            store
                .update_issue_comment(&comment_id, &update.desired.body)
                .await
        }
        CommentChannel::Review => {
            store
                .update_review_comment(&comment_id, &update.desired.body)
                .await
        }
    };

    match result {
        Ok(_) => ActionOutcome::Updated {
            subject,
            comment_id,
        },
        Err(err) => ActionOutcome::Failed {
            subject,
            reason: format!("update of comment {comment_id} failed: {err:#}"),
        },
    }
}

async fn apply_create<S>(store: &S, desired: &LogicalComment, commit_sha: &str) -> ActionOutcome
where
    S: CommentStore + ?Sized,
{
    let result = match &desired.target {
        CommentTarget::Issue => store.create_issue_comment(&desired.body).await,
        CommentTarget::File { path } => {
            store
                .create_review_comment(path, commit_sha, &desired.body)
                .await
        }
    };

    match result {
        Ok(created) => ActionOutcome::Created {
            subject: desired.subject.clone(),
            comment_id: created.id,
        },
        Err(err) => ActionOutcome::Failed {
            subject: desired.subject.clone(),
            reason: format!("create failed: {err:#}"),
        },
    }
}

async fn apply_delete<S>(store: &S, delete: &PlannedDelete) -> ActionOutcome
where
    S: CommentStore + ?Sized,
{
    let subject = delete_subject(delete);
    let result = match delete.channel {
        CommentChannel::Issue => store.delete_issue_comment(&delete.comment_id).await,
        CommentChannel::Review => store.delete_review_comment(&delete.comment_id).await,
    };

    match result {
        Ok(()) => ActionOutcome::Deleted {
            subject,
            comment_id: delete.comment_id.clone(),
        },
        Err(err) => ActionOutcome::Failed {
            subject,
            reason: format!("delete of comment {} failed: {err:#}", delete.comment_id),
        },
    }
}

/// 삭제 대상은 원하는 주제가 없으므로 채널/사유로 이름을 붙인다.
pub(super) fn delete_subject(delete: &PlannedDelete) -> String {
    format!(
        "{} comment {} ({})",
        delete.channel.label(),
        delete.comment_id,
        delete.reason.label()
    )
}

fn record(reporter: &dyn Reporter, outcome: &ActionOutcome) {
    match outcome {
        ActionOutcome::Created {
            subject,
            comment_id,
        } => {
            info!(%subject, %comment_id, "reconcile: created");
            reporter.status("Create", &format!("{subject} -> #{comment_id}"));
        }
        ActionOutcome::Updated {
            subject,
            comment_id,
        } => {
            info!(%subject, %comment_id, "reconcile: updated");
            reporter.status("Update", &format!("{subject} (#{comment_id})"));
        }
        ActionOutcome::Unchanged {
            subject,
            comment_id,
        } => {
            reporter.status("Keep", &format!("{subject} (#{comment_id})"));
        }
        ActionOutcome::Deleted { subject, .. } => {
            info!(%subject, "reconcile: deleted");
            reporter.status("Delete", subject);
        }
        ActionOutcome::Failed { subject, reason } => {
            warn!(%subject, %reason, "reconcile: action failed");
            reporter.status("Failed", &format!("{subject}: {reason}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use anyhow::{Result, bail};
    use async_trait::async_trait;

    use super::*;
    use crate::domain::comment::{RemoteComment, SubjectKey};
    use crate::domain::keyer::derive_key;
    use crate::domain::marker;
    use crate::domain::reconcile::DeleteReason;

    const BOT: &str = "github-actions[bot]";

    #[derive(Default)]
    struct FakeStore {
        calls: Mutex<Vec<String>>,
        fail_ids: HashSet<String>,
        fail_paths: HashSet<String>,
    }

    impl FakeStore {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn log(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn comment(id: &str, body: &str, path: Option<&str>) -> RemoteComment {
            RemoteComment {
                id: id.to_string(),
                author: BOT.to_string(),
                body: body.to_string(),
                path: path.map(ToString::to_string),
            }
        }
    }

    #[async_trait]
    impl CommentStore for FakeStore {
        async fn list_issue_comments(&self) -> Result<Vec<RemoteComment>> {
            Ok(Vec::new())
        }

        async fn create_issue_comment(&self, body: &str) -> Result<RemoteComment> {
            self.log("create-issue".to_string());
            Ok(Self::comment("100", body, None))
        }

        async fn update_issue_comment(&self, id: &str, body: &str) -> Result<RemoteComment> {
            self.log(format!("update-issue {id}"));
            if self.fail_ids.contains(id) {
                bail!("github: 502 Bad Gateway");
            }
            Ok(Self::comment(id, body, None))
        }

        async fn delete_issue_comment(&self, id: &str) -> Result<()> {
            self.log(format!("delete-issue {id}"));
            Ok(())
        }

        async fn list_review_comments(&self) -> Result<Vec<RemoteComment>> {
            Ok(Vec::new())
        }

        async fn create_review_comment(
            &self,
            path: &str,
            commit_sha: &str,
            body: &str,
        ) -> Result<RemoteComment> {
            self.log(format!("create-review {path}@{commit_sha}"));
            if self.fail_paths.contains(path) {
                bail!("github: 422 path is not part of the diff");
            }
            Ok(Self::comment("200", body, Some(path)))
        }

        async fn update_review_comment(&self, id: &str, body: &str) -> Result<RemoteComment> {
            self.log(format!("update-review {id}"));
            Ok(Self::comment(id, body, None))
        }

        async fn delete_review_comment(&self, id: &str) -> Result<()> {
            self.log(format!("delete-review {id}"));
            if self.fail_ids.contains(id) {
                bail!("github: 404 Not Found");
            }
            Ok(())
        }
    }

    struct SilentReporter;

    impl Reporter for SilentReporter {
        fn section(&self, _name: &str) {}
        fn kv(&self, _key: &str, _value: &str) {}
        fn status(&self, _scope: &str, _message: &str) {}
        fn raw(&self, _line: &str) {}
    }

    fn file_comment(path: &str) -> LogicalComment {
        let key = derive_key("pr-typecheck", path);
        LogicalComment {
            body: marker::embed("body", "pr-typecheck", &key),
            subject_key: key,
            subject: format!("file {path}"),
            target: CommentTarget::File {
                path: path.to_string(),
            },
        }
    }

    fn summary_comment() -> LogicalComment {
        let key = derive_key("pr-typecheck", "summary");
        LogicalComment {
            body: marker::embed("summary", "pr-typecheck", &key),
            subject_key: key,
            subject: "summary".to_string(),
            target: CommentTarget::Issue,
        }
    }

    fn orphan(id: &str) -> PlannedDelete {
        PlannedDelete {
            comment_id: id.to_string(),
            channel: CommentChannel::Review,
            key: SubjectKey::parse("0123456789abcdef"),
            reason: DeleteReason::Orphaned,
        }
    }

    #[tokio::test]
    async fn routes_each_action_to_its_channel() {
        let store = FakeStore::default();
        let plan = ReconcilePlan {
            creates: vec![file_comment("a.py")],
            updates: vec![PlannedUpdate {
                comment_id: "7".to_string(),
                desired: summary_comment(),
                unchanged: false,
            }],
            deletes: vec![orphan("9")],
        };

        let report = apply_plan(&store, &plan, "abc123", &SilentReporter).await;
        assert!(report.failures().is_empty());
        assert_eq!(
            store.calls(),
            ["update-issue 7", "create-review a.py@abc123", "delete-review 9"]
        );
        assert!(matches!(
            report.outcomes[1],
            ActionOutcome::Created { ref comment_id, .. } if comment_id == "200"
        ));
    }

    #[tokio::test]
    async fn unchanged_updates_make_no_calls() {
        let store = FakeStore::default();
        let plan = ReconcilePlan {
            updates: vec![PlannedUpdate {
                comment_id: "7".to_string(),
                desired: summary_comment(),
                unchanged: true,
            }],
            ..ReconcilePlan::default()
        };

        let report = apply_plan(&store, &plan, "abc123", &SilentReporter).await;
        assert!(store.calls().is_empty());
        assert_eq!(report.count(|o| matches!(o, ActionOutcome::Unchanged { .. })), 1);
    }

    #[tokio::test]
    async fn failures_do_not_stop_remaining_actions() {
        let store = FakeStore {
            fail_ids: ["7".to_string(), "9".to_string()].into_iter().collect(),
            fail_paths: ["bad.py".to_string()].into_iter().collect(),
            ..FakeStore::default()
        };
        let plan = ReconcilePlan {
            creates: vec![file_comment("bad.py"), file_comment("good.py")],
            updates: vec![PlannedUpdate {
                comment_id: "7".to_string(),
                desired: summary_comment(),
                unchanged: false,
            }],
            deletes: vec![orphan("9"), orphan("10")],
        };

        let report = apply_plan(&store, &plan, "abc123", &SilentReporter).await;
        assert_eq!(store.calls().len(), 5);
        assert_eq!(report.failures().len(), 3);
        assert_eq!(report.count(|o| matches!(o, ActionOutcome::Created { .. })), 1);
        assert_eq!(report.count(|o| matches!(o, ActionOutcome::Deleted { .. })), 1);

        let reasons: Vec<String> = report
            .failures()
            .iter()
            .map(|o| match o {
                ActionOutcome::Failed { reason, .. } => reason.clone(),
                _ => String::new(),
            })
            .collect();
        assert!(reasons[0].contains("502"));
        assert!(reasons[1].contains("422"));
        assert!(reasons[2].contains("404"));
    }
}
