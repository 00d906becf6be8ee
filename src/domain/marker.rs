//! 코멘트 본문 footer 마커 인코딩/디코딩.
//!
//! 본문 형식: `<내용>\n\n###### [<prefix>:<key>]`
//! 마지막 줄 하나만 검사하며, 형식이 맞지 않으면 마커가 없는 것으로 취급한다.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::comment::SubjectKey;

const FOOTER_HEADING: &str = "######";

/// 이전 버전 footer: hash 단독(16자리 또는 sha256 전체 64자리), 대괄호는 선택.
static LEGACY_FOOTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^###### (?:[0-9a-f]{16}|[0-9a-f]{64}|\[[0-9a-f]{16}\]|\[[0-9a-f]{64}\])$")
        .expect("legacy footer pattern is a valid constant regex")
});

static FOOTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^###### \[([a-z0-9][a-z0-9_-]*):([0-9a-f]{16})\]$")
        .expect("footer pattern is a valid constant regex")
});

/// prefix는 소문자/숫자/`-`/`_`만 허용한다(구분자 `:`/`]` 충돌 방지).
pub fn is_valid_prefix(prefix: &str) -> bool {
    let mut bytes = prefix.bytes();
    matches!(bytes.next(), Some(b) if b.is_ascii_lowercase() || b.is_ascii_digit())
        && bytes.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}

/// footer 한 줄을 만든다.
pub fn encode(prefix: &str, key: &SubjectKey) -> String {
    format!("{FOOTER_HEADING} [{prefix}:{key}]")
}

/// 사람이 읽는 본문 뒤에 빈 줄과 footer를 붙인다.
pub fn embed(content: &str, prefix: &str, key: &SubjectKey) -> String {
    format!("{}\n\n{}", content.trim_end(), encode(prefix, key))
}

/// 본문 마지막 줄에서 해당 prefix의 키를 꺼낸다.
pub fn decode(prefix: &str, body: &str) -> Option<SubjectKey> {
    let caps = FOOTER_RE.captures(last_line(body)?)?;
    if &caps[1] != prefix {
        return None;
    }
    SubjectKey::parse(&caps[2])
}

/// 이전 버전 마커 footer 여부.
/// 마지막 줄 전체가 과거 형식 그대로인 경우만 해당한다(다른 텍스트가 섞이면 아님).
pub fn has_legacy_footer(body: &str) -> bool {
    last_line(body).is_some_and(|line| LEGACY_FOOTER_RE.is_match(line))
}

fn last_line(body: &str) -> Option<&str> {
    body.trim_end()
        .lines()
        .next_back()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keyer::derive_key;

    fn key() -> SubjectKey {
        derive_key("pr-typecheck", "pr=1;summary")
    }

    #[test]
    fn round_trips_for_several_prefixes() {
        for prefix in ["pr-typecheck", "a", "bot_2", "x-y-z"] {
            let key = derive_key(prefix, "pr=3;file=a.py");
            assert_eq!(decode(prefix, &encode(prefix, &key)), Some(key.clone()));
            assert_eq!(decode(prefix, &embed("hello\n", prefix, &key)), Some(key));
        }
    }

    #[test]
    fn ignores_markers_sharing_a_prefix_stem() {
        let body = embed("content", "pr-typecheck-beta", &key());
        assert_eq!(decode("pr-typecheck", &body), None);

        let body = embed("content", "pr", &key());
        assert_eq!(decode("pr-typecheck", &body), None);
    }

    #[test]
    fn only_the_last_line_counts() {
        let body = format!("{}\n\nsomething after", encode("pr-typecheck", &key()));
        assert_eq!(decode("pr-typecheck", &body), None);

        let quoted = format!("> {}", encode("pr-typecheck", &key()));
        assert_eq!(decode("pr-typecheck", &quoted), None);
    }

    #[test]
    fn malformed_footers_are_absent() {
        for body in [
            "",
            "plain comment",
            "###### [pr-typecheck:XYZ]",
            "###### [pr-typecheck:0123456789abcdef0]",
            "###### [pr-typecheck:0123456789abcde]",
            "###### pr-typecheck:0123456789abcdef",
            "###### [pr-typecheck:0123456789ABCDEF]",
        ] {
            assert_eq!(decode("pr-typecheck", body), None, "body: {body}");
        }
    }

    #[test]
    fn tolerates_trailing_whitespace_and_crlf() {
        let body = format!("content\r\n\r\n{}\r\n  \n", encode("pr-typecheck", &key()));
        assert_eq!(decode("pr-typecheck", &body), Some(key()));
    }

    #[test]
    fn detects_legacy_footers() {
        assert!(has_legacy_footer("content\n\n###### 9f86d081884c7d65"));
        assert!(has_legacy_footer("content\n\n###### [9f86d081884c7d65]"));
        assert!(!has_legacy_footer(&embed("content", "pr-typecheck", &key())));
        assert!(!has_legacy_footer(&embed("content", "other-bot", &key())));
        assert!(!has_legacy_footer("just text"));
        assert!(!has_legacy_footer("content\n\n###### Generated by another workflow"));
    }

    #[test]
    fn other_workflow_footers_with_hashes_are_not_legacy() {
        let sha = "3f2a9c1e7b4d8a0f5c6e2b1a9d8c7f6e5a4b4a39";
        assert!(!has_legacy_footer(&format!("Preview deployed.\n\n###### Built from {sha}")));
        assert!(!has_legacy_footer(&format!("content\n\n###### {sha}")));
        assert!(!has_legacy_footer("content\n\n###### run 12345678901234567890"));
        assert!(!has_legacy_footer("content\n\n###### [9f86d081884c7d65"));
        assert!(has_legacy_footer(
            "content\n\n###### 9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        ));
    }

    #[test]
    fn validates_prefixes() {
        assert!(is_valid_prefix("pr-typecheck"));
        assert!(is_valid_prefix("bot_2"));
        assert!(!is_valid_prefix(""));
        assert!(!is_valid_prefix("-lead"));
        assert!(!is_valid_prefix("has:colon"));
        assert!(!is_valid_prefix("Upper"));
    }
}
