//! 논리적 코멘트 주제의 안정적인 식별 키 생성.

use sha2::{Digest, Sha256};

use crate::domain::comment::SubjectKey;

/// prefix와 판별자(discriminant)로부터 결정적인 키를 만든다.
/// SHA-256 digest 앞부분을 고정 폭 hex로 자른다.
pub fn derive_key(prefix: &str, discriminant: &str) -> SubjectKey {
    let mut hasher = Sha256::new();
    hasher.update(prefix.as_bytes());
    // 구분자가 없으면 ("ab", "c")와 ("a", "bc")가 같은 입력이 된다.
    hasher.update([0u8]);
    hasher.update(discriminant.as_bytes());
    let digest = format!("{:x}", hasher.finalize());

    SubjectKey::from_digest_prefix(&digest[..SubjectKey::LEN])
}

pub fn file_discriminant(pr_number: u64, relative_path: &str) -> String {
    format!("pr={pr_number};file={relative_path}")
}

pub fn summary_discriminant(pr_number: u64) -> String {
    format!("pr={pr_number};summary")
}

pub fn comparison_discriminant(pr_number: u64) -> String {
    format!("pr={pr_number};base-comparison")
}
