//! GitHub Action 입력값(`INPUT_*` 환경변수)을 설정 레이어로 변환한다.

use anyhow::{Result, bail};

use crate::application::config::Config;

/// 입력 이름 → 환경변수 후보. Actions는 하이픈을 유지한 채 대문자로 바꾼다.
fn input_env_names(name: &str) -> [String; 2] {
    let upper = name.to_ascii_uppercase();
    [
        format!("INPUT_{upper}"),
        format!("INPUT_{}", upper.replace('-', "_")),
    ]
}

fn read_input<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    input_env_names(name)
        .iter()
        .filter_map(|key| lookup(key.as_str()))
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

fn read_bool_input<F>(lookup: &F, name: &str) -> Result<Option<bool>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = read_input(lookup, name) else {
        return Ok(None);
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" => Ok(Some(true)),
        "false" => Ok(Some(false)),
        _ => bail!("input '{name}' must be 'true' or 'false', got '{raw}'"),
    }
}

/// 설정 파일보다 우선하는 Action 입력 레이어를 구성한다.
pub(crate) fn action_inputs_layer<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut layer = Config::default();
    layer.github.token = read_input(&lookup, "token");
    layer.defaults.include_file_comments = read_bool_input(&lookup, "include-file-comments")?;
    layer.defaults.include_base_comparison = read_bool_input(&lookup, "include-base-comparison")?;
    layer.defaults.fail_on_issue_increase = read_bool_input(&lookup, "fail-on-issue-increase")?;
    layer.defaults.migrate_legacy_markers = read_bool_input(&lookup, "migrate-legacy-markers")?;
    layer.checker.version = read_input(&lookup, "pyright-version");
    Ok(layer)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn reads_hyphenated_and_underscored_inputs() {
        let layer = action_inputs_layer(lookup(&[
            ("INPUT_TOKEN", "ghs_x"),
            ("INPUT_INCLUDE-FILE-COMMENTS", "False"),
            ("INPUT_INCLUDE_BASE_COMPARISON", "true"),
            ("INPUT_PYRIGHT-VERSION", "1.1.380"),
        ]))
        .unwrap();

        assert_eq!(layer.github.token.as_deref(), Some("ghs_x"));
        assert_eq!(layer.defaults.include_file_comments, Some(false));
        assert_eq!(layer.defaults.include_base_comparison, Some(true));
        assert_eq!(layer.defaults.fail_on_issue_increase, None);
        assert_eq!(layer.checker.version.as_deref(), Some("1.1.380"));
        assert_eq!(layer.defaults.migrate_legacy_markers, None);
    }

    #[test]
    fn legacy_migration_is_an_explicit_input() {
        let layer =
            action_inputs_layer(lookup(&[("INPUT_MIGRATE-LEGACY-MARKERS", "true")])).unwrap();
        assert_eq!(layer.defaults.migrate_legacy_markers, Some(true));
    }

    #[test]
    fn empty_inputs_are_unset() {
        let layer = action_inputs_layer(lookup(&[("INPUT_FAIL-ON-ISSUE-INCREASE", "  ")])).unwrap();
        assert_eq!(layer.defaults.fail_on_issue_increase, None);
    }

    #[test]
    fn invalid_boolean_is_a_config_error() {
        let err = action_inputs_layer(lookup(&[("INPUT_FAIL-ON-ISSUE-INCREASE", "yes")])).unwrap_err();
        assert!(err.to_string().contains("fail-on-issue-increase"));
    }
}
