//! 원하는 코멘트 집합과 기존 코멘트 스냅샷의 차집합 계산(생성/수정/삭제 계획).
//!
//! 작성자가 봇 계정이 아닌 코멘트는 마커가 있어도 계획에 절대 포함하지 않는다.

use std::collections::{HashMap, HashSet};

use crate::domain::comment::{CommentChannel, LogicalComment, RemoteComment, SubjectKey};
use crate::domain::marker;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedUpdate {
    pub comment_id: String,
    pub desired: LogicalComment,
    /// 본문이 같으면 API 호출 없이 유지한다.
    pub unchanged: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteReason {
    /// 이번 실행에서 더 이상 원하지 않는 주제
    Orphaned,
    /// 같은 키를 가진 두 번째 이후 코멘트
    Duplicate,
    /// 이전 형식 마커(한 번만 지우고 새 형식으로 다시 생성)
    LegacyFormat,
}

impl DeleteReason {
    pub fn label(self) -> &'static str {
        match self {
            Self::Orphaned => "orphaned",
            Self::Duplicate => "duplicate",
            Self::LegacyFormat => "legacy-format",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedDelete {
    pub comment_id: String,
    pub channel: CommentChannel,
    pub key: Option<SubjectKey>,
    pub reason: DeleteReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcilePlan {
    pub creates: Vec<LogicalComment>,
    pub updates: Vec<PlannedUpdate>,
    pub deletes: Vec<PlannedDelete>,
}

impl ReconcilePlan {
    pub fn is_noop(&self) -> bool {
        self.creates.is_empty()
            && self.deletes.is_empty()
            && self.updates.iter().all(|u| u.unchanged)
    }
}

/// 계획 수립에 필요한 봇 식별 정보.
#[derive(Debug, Clone)]
pub struct PlanRules<'a> {
    pub marker_prefix: &'a str,
    pub bot_login: &'a str,
    pub migrate_legacy_markers: bool,
}

/// 한 번의 스냅샷(issue/review 코멘트 목록)을 기준으로 단일 패스 차집합을 계산한다.
pub fn plan_reconciliation(
    rules: &PlanRules<'_>,
    desired: &[LogicalComment],
    issue_comments: &[RemoteComment],
    review_comments: &[RemoteComment],
) -> ReconcilePlan {
    let mut plan = ReconcilePlan::default();

    for (channel, existing) in [
        (CommentChannel::Issue, issue_comments),
        (CommentChannel::Review, review_comments),
    ] {
        let wanted: Vec<&LogicalComment> = desired
            .iter()
            .filter(|c| c.target.channel() == channel)
            .collect();
        plan_channel(rules, channel, &wanted, existing, &mut plan);
    }

    plan
}

fn plan_channel(
    rules: &PlanRules<'_>,
    channel: CommentChannel,
    desired: &[&LogicalComment],
    existing: &[RemoteComment],
    plan: &mut ReconcilePlan,
) {
    // 스냅샷 순서를 유지한 채 키별 첫 코멘트만 남긴다.
    let mut kept: Vec<(SubjectKey, &RemoteComment)> = Vec::new();
    let mut by_key: HashMap<SubjectKey, usize> = HashMap::new();

    for comment in existing {
        if !comment.author.eq_ignore_ascii_case(rules.bot_login) {
            continue;
        }

        match marker::decode(rules.marker_prefix, &comment.body) {
            Some(key) if by_key.contains_key(&key) => {
                plan.deletes.push(PlannedDelete {
                    comment_id: comment.id.clone(),
                    channel,
                    key: Some(key),
                    reason: DeleteReason::Duplicate,
                });
            }
            Some(key) => {
                by_key.insert(key.clone(), kept.len());
                kept.push((key, comment));
            }
            None if rules.migrate_legacy_markers && marker::has_legacy_footer(&comment.body) => {
                plan.deletes.push(PlannedDelete {
                    comment_id: comment.id.clone(),
                    channel,
                    key: None,
                    reason: DeleteReason::LegacyFormat,
                });
            }
            None => {}
        }
    }

    let mut seen: HashSet<&SubjectKey> = HashSet::new();
    for wanted in desired {
        if !seen.insert(&wanted.subject_key) {
            continue;
        }
        match by_key.get(&wanted.subject_key) {
            Some(&idx) => {
                let current = kept[idx].1;
                plan.updates.push(PlannedUpdate {
                    comment_id: current.id.clone(),
                    desired: (*wanted).clone(),
                    unchanged: current.body.trim_end() == wanted.body.trim_end(),
                });
            }
            None => plan.creates.push((*wanted).clone()),
        }
    }

    for (key, comment) in &kept {
        if !seen.contains(key) {
            plan.deletes.push(PlannedDelete {
                comment_id: comment.id.clone(),
                channel,
                key: Some(key.clone()),
                reason: DeleteReason::Orphaned,
            });
        }
    }
}
