//! 적용 설정 진단(inspection) 뷰 모델. 토큰 값은 절대 포함하지 않는다.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::resolve::resolve_github_token;
use super::utils::command_exists;
use crate::application::config::{Config, DefaultsConfig};

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub defaults: DefaultsConfig,
    pub effective_defaults: EffectiveDefaults,
    pub github: GitHubInspection,
    pub checker: CheckerInspection,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveDefaults {
    pub include_file_comments: bool,
    pub include_base_comparison: bool,
    pub fail_on_issue_increase: bool,
    pub migrate_legacy_markers: bool,
    pub marker_prefix: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GitHubInspection {
    pub token_source: Option<String>,
    pub token_resolved: bool,
    pub token_env: String,
    pub api_base: Option<String>,
    pub bot_login: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckerInspection {
    pub command: String,
    pub args: Vec<String>,
    pub command_available: bool,
    pub file_extensions: Vec<String>,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let config = &loaded.config;
        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            defaults: config.defaults.clone(),
            effective_defaults: effective_defaults(config),
            github: github_inspection(config),
            checker: checker_inspection(config),
        }
    }
}

fn effective_defaults(config: &Config) -> EffectiveDefaults {
    let defaults = &config.defaults;
    EffectiveDefaults {
        include_file_comments: defaults.include_file_comments.unwrap_or(true),
        include_base_comparison: defaults.include_base_comparison.unwrap_or(false),
        fail_on_issue_increase: defaults.fail_on_issue_increase.unwrap_or(false),
        migrate_legacy_markers: defaults.migrate_legacy_markers.unwrap_or(false),
        marker_prefix: config.marker_prefix(),
    }
}

fn github_inspection(config: &Config) -> GitHubInspection {
    let resolution = resolve_github_token(config);
    GitHubInspection {
        token_source: resolution.source,
        token_resolved: resolution.token.is_some(),
        token_env: config.token_env(),
        api_base: config.github.api_base.clone(),
        bot_login: config.bot_login(),
    }
}

fn checker_inspection(config: &Config) -> CheckerInspection {
    let spec = config.checker_spec();
    CheckerInspection {
        command_available: command_exists(&spec.command),
        command: spec.command,
        args: spec.args,
        file_extensions: config.file_extensions(),
    }
}
