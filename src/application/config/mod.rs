//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수/프로세스 접근은 `infrastructure`에서만 수행한다.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::domain::marker;
use crate::domain::run::RunOptions;

pub const DEFAULT_MARKER_PREFIX: &str = "pr-typecheck";
pub const DEFAULT_BOT_LOGIN: &str = "github-actions[bot]";
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const DEFAULT_CHECKER_COMMAND: &str = "npx";
pub const DEFAULT_CHECKER_VERSION: &str = "latest";
pub const DEFAULT_FILE_EXTENSION: &str = ".py";

pub fn default_checker_args() -> Vec<String> {
    vec![
        "--yes".to_string(),
        "pyright@{version}".to_string(),
        "--outputjson".to_string(),
    ]
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 코멘트/판정 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// GitHub 인증/엔드포인트 설정
    #[serde(default)]
    pub github: GitHubConfig,
    /// 타입 체커 실행 설정
    #[serde(default)]
    pub checker: CheckerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DefaultsConfig {
    /// 파일별 리뷰 코멘트 게시 여부(기본 true)
    pub include_file_comments: Option<bool>,
    /// base 브랜치 비교 코멘트 게시 여부(기본 false)
    pub include_base_comparison: Option<bool>,
    /// 이슈가 늘어나면 실행을 실패 처리할지 여부(기본 false)
    pub fail_on_issue_increase: Option<bool>,
    /// 이전 형식 마커 코멘트를 지우고 새로 만들지 여부(기본 false, 명시적으로 켤 때만)
    pub migrate_legacy_markers: Option<bool>,
    /// 코멘트 footer 마커 prefix
    pub marker_prefix: Option<String>,
    /// 상대 경로 계산에 쓰는 저장소 이름(기본: 대상 저장소 이름)
    pub repo_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct GitHubConfig {
    /// 고정 토큰(민감정보: 권장하지 않음)
    pub token: Option<String>,
    /// 토큰을 읽을 환경변수 이름(기본 GITHUB_TOKEN)
    pub token_env: Option<String>,
    /// API base URL override(선택)
    pub api_base: Option<String>,
    /// 이 도구가 코멘트를 작성하는 계정 login
    pub bot_login: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CheckerConfig {
    /// 실행할 로컬 명령
    pub command: Option<String>,
    /// 명령 인자(`{version}` 치환 지원). 검사 대상 경로는 뒤에 붙는다.
    pub args: Option<Vec<String>>,
    /// 체커 버전 고정값
    pub version: Option<String>,
    /// 변경 파일 중 검사 대상 확장자
    pub file_extensions: Option<Vec<String>>,
}

/// 체커 실행 사양(버전 치환 완료).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerCommandSpec {
    pub command: String,
    pub args: Vec<String>,
}

/// 토큰 해석 결과.
#[derive(Debug, Clone, Default)]
pub struct TokenResolution {
    pub token: Option<String>,
    pub source: Option<String>,
}

/// 한 번의 실행 동안 모든 구성요소에 인자로 전달되는 확정 설정.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub token: Option<String>,
    pub api_base: Option<String>,
    pub bot_login: String,
    pub marker_prefix: String,
    pub include_file_comments: bool,
    pub include_base_comparison: bool,
    pub fail_on_issue_increase: bool,
    pub migrate_legacy_markers: bool,
    pub repo_name: Option<String>,
    pub checker: CheckerCommandSpec,
    pub file_extensions: Vec<String>,
    pub dry_run: bool,
}

impl Config {
    /// 후순위(나중 레이어) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.defaults.merge_from(other.defaults);
        self.github.merge_from(other.github);
        self.checker.merge_from(other.checker);
    }

    pub fn marker_prefix(&self) -> String {
        self.defaults
            .marker_prefix
            .clone()
            .unwrap_or_else(|| DEFAULT_MARKER_PREFIX.to_string())
    }

    pub fn bot_login(&self) -> String {
        self.github
            .bot_login
            .clone()
            .unwrap_or_else(|| DEFAULT_BOT_LOGIN.to_string())
    }

    pub fn token_env(&self) -> String {
        self.github
            .token_env
            .clone()
            .unwrap_or_else(|| DEFAULT_TOKEN_ENV.to_string())
    }

    pub fn file_extensions(&self) -> Vec<String> {
        self.checker
            .file_extensions
            .clone()
            .unwrap_or_else(|| vec![DEFAULT_FILE_EXTENSION.to_string()])
    }

    /// `{version}` 자리표시자를 치환한 체커 실행 사양.
    pub fn checker_spec(&self) -> CheckerCommandSpec {
        let version = self
            .checker
            .version
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_CHECKER_VERSION);

        CheckerCommandSpec {
            command: self
                .checker
                .command
                .clone()
                .unwrap_or_else(|| DEFAULT_CHECKER_COMMAND.to_string()),
            args: self
                .checker
                .args
                .clone()
                .unwrap_or_else(default_checker_args)
                .into_iter()
                .map(|arg| arg.replace("{version}", version))
                .collect(),
        }
    }

    /// CLI 옵션과 토큰을 반영해 실행 설정을 확정한다.
    /// 네트워크 호출 전에 설정 오류를 모두 여기서 걸러낸다.
    pub fn resolve(&self, options: &RunOptions, token: TokenResolution) -> Result<RunConfig> {
        let marker_prefix = self.marker_prefix();
        if !marker::is_valid_prefix(&marker_prefix) {
            bail!(
                "invalid marker_prefix '{marker_prefix}': use lowercase letters, digits, '-' or '_'"
            );
        }

        if !options.dry_run && token.token.is_none() {
            bail!(
                "missing GitHub token. Set the `token` action input, github.token/github.token_env in config, or ${}; or use --dry-run",
                self.token_env()
            );
        }

        let bot_login = self.bot_login();
        if bot_login.trim().is_empty() {
            bail!("github.bot_login must not be empty");
        }

        Ok(RunConfig {
            token: token.token,
            api_base: self.github.api_base.clone(),
            bot_login,
            marker_prefix,
            include_file_comments: options
                .include_file_comments
                .or(self.defaults.include_file_comments)
                .unwrap_or(true),
            include_base_comparison: options
                .include_base_comparison
                .or(self.defaults.include_base_comparison)
                .unwrap_or(false),
            fail_on_issue_increase: options
                .fail_on_issue_increase
                .or(self.defaults.fail_on_issue_increase)
                .unwrap_or(false),
            migrate_legacy_markers: self.defaults.migrate_legacy_markers.unwrap_or(false),
            repo_name: self.defaults.repo_name.clone(),
            checker: self.checker_spec(),
            file_extensions: self.file_extensions(),
            dry_run: options.dry_run,
        })
    }
}

impl DefaultsConfig {
    pub(crate) fn merge_from(&mut self, other: DefaultsConfig) {
        if other.include_file_comments.is_some() {
            self.include_file_comments = other.include_file_comments;
        }
        if other.include_base_comparison.is_some() {
            self.include_base_comparison = other.include_base_comparison;
        }
        if other.fail_on_issue_increase.is_some() {
            self.fail_on_issue_increase = other.fail_on_issue_increase;
        }
        if other.migrate_legacy_markers.is_some() {
            self.migrate_legacy_markers = other.migrate_legacy_markers;
        }
        if other.marker_prefix.is_some() {
            self.marker_prefix = other.marker_prefix;
        }
        if other.repo_name.is_some() {
            self.repo_name = other.repo_name;
        }
    }
}

impl GitHubConfig {
    pub(crate) fn merge_from(&mut self, other: GitHubConfig) {
        if other.token.is_some() {
            self.token = other.token;
        }
        if other.token_env.is_some() {
            self.token_env = other.token_env;
        }
        if other.api_base.is_some() {
            self.api_base = other.api_base;
        }
        if other.bot_login.is_some() {
            self.bot_login = other.bot_login;
        }
    }
}

impl CheckerConfig {
    pub(crate) fn merge_from(&mut self, other: CheckerConfig) {
        if other.command.is_some() {
            self.command = other.command;
        }
        if other.args.is_some() {
            self.args = other.args;
        }
        if other.version.is_some() {
            self.version = other.version;
        }
        if other.file_extensions.is_some() {
            self.file_extensions = other.file_extensions;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> TokenResolution {
        TokenResolution {
            token: Some("t".to_string()),
            source: Some("inline".to_string()),
        }
    }

    #[test]
    fn later_layers_win_field_by_field() {
        let mut base: Config = serde_json::from_str(
            r#"{"defaults": {"include_file_comments": false, "marker_prefix": "a"},
                "checker": {"version": "1.1.300"}}"#,
        )
        .unwrap();
        let overlay: Config =
            serde_json::from_str(r#"{"defaults": {"marker_prefix": "b"}}"#).unwrap();
        base.merge_from(overlay);

        assert_eq!(base.defaults.include_file_comments, Some(false));
        assert_eq!(base.marker_prefix(), "b");
        assert_eq!(base.checker.version.as_deref(), Some("1.1.300"));
    }

    #[test]
    fn checker_spec_substitutes_version() {
        let mut config = Config::default();
        config.checker.version = Some("1.1.380".to_string());
        let spec = config.checker_spec();
        assert_eq!(spec.command, "npx");
        assert_eq!(spec.args, ["--yes", "pyright@1.1.380", "--outputjson"]);
    }

    #[test]
    fn cli_options_override_config_defaults() {
        let mut config = Config::default();
        config.defaults.include_base_comparison = Some(true);
        let options = RunOptions {
            include_base_comparison: Some(false),
            fail_on_issue_increase: Some(true),
            ..RunOptions::default()
        };

        let run = config.resolve(&options, token()).unwrap();
        assert!(run.include_file_comments);
        assert!(!run.include_base_comparison);
        assert!(run.fail_on_issue_increase);
        assert_eq!(run.bot_login, DEFAULT_BOT_LOGIN);
        assert_eq!(run.marker_prefix, DEFAULT_MARKER_PREFIX);
        assert!(!run.migrate_legacy_markers);
    }

    #[test]
    fn missing_token_fails_unless_dry_run() {
        let config = Config::default();
        let err = config
            .resolve(&RunOptions::default(), TokenResolution::default())
            .unwrap_err();
        assert!(err.to_string().contains("missing GitHub token"));

        let dry = RunOptions {
            dry_run: true,
            ..RunOptions::default()
        };
        assert!(config.resolve(&dry, TokenResolution::default()).is_ok());
    }

    #[test]
    fn invalid_marker_prefix_is_a_config_error() {
        let mut config = Config::default();
        config.defaults.marker_prefix = Some("Bad:Prefix".to_string());
        assert!(config.resolve(&RunOptions::default(), token()).is_err());
    }
}
