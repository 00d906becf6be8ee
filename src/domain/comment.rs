//! PR 코멘트 도메인 엔티티(원하는 상태 / 원격 상태).

use std::fmt;

/// 논리적 코멘트 주제의 고정 폭 식별자(소문자 hex).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubjectKey(String);

impl SubjectKey {
    pub const LEN: usize = 16;

    /// 고정 폭 소문자 hex 문자열만 키로 인정한다.
    pub fn parse(raw: &str) -> Option<Self> {
        let valid = raw.len() == Self::LEN
            && raw
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        valid.then(|| Self(raw.to_string()))
    }

    /// 해시 digest(항상 소문자 hex)에서 잘라낸 값 전용.
    pub(crate) fn from_digest_prefix(hex: &str) -> Self {
        Self(hex.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 코멘트 게시 위치.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentTarget {
    /// PR 대화 탭의 일반 코멘트
    Issue,
    /// 파일에 고정되는 리뷰 코멘트
    File { path: String },
}

impl CommentTarget {
    pub fn channel(&self) -> CommentChannel {
        match self {
            Self::Issue => CommentChannel::Issue,
            Self::File { .. } => CommentChannel::Review,
        }
    }
}

/// 원격 저장소의 코멘트 종류. 생성/수정/삭제 API가 종류별로 다르다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentChannel {
    Issue,
    Review,
}

impl CommentChannel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Issue => "issue",
            Self::Review => "review",
        }
    }
}

/// 이번 실행에서 계산한 게시 대상 코멘트.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalComment {
    pub subject_key: SubjectKey,
    /// 사람이 읽는 이름(로그/실패 보고용)
    pub subject: String,
    /// 마커 footer가 포함된 최종 본문
    pub body: String,
    pub target: CommentTarget,
}

/// 원격에서 조회한 기존 코멘트.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteComment {
    pub id: String,
    pub author: String,
    pub body: String,
    pub path: Option<String>,
}
