//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::config::Config;

use super::action_inputs::action_inputs_layer;

pub const CONFIG_ENV: &str = "PR_TYPECHECK_CONFIG";

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 설정 파일을 우선순위대로 병합하고 마지막에 Action 입력을 덮어쓴다.
pub(crate) fn load_merged_config() -> Result<LoadedConfig> {
    let mut loaded = load_files(config_paths())?;
    let inputs = action_inputs_layer(|key| env::var(key).ok())?;
    loaded.config.merge_from(inputs);
    Ok(loaded)
}

/// 주어진 경로 순서(낮은 우선순위 → 높은 우선순위)로 JSON 설정을 병합한다.
pub(crate) fn load_files(paths: Vec<PathBuf>) -> Result<LoadedConfig> {
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();

    for path in &paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: Config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        merged.merge_from(parsed);
        loaded_paths.push(path.to_path_buf());
    }

    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 시스템 + 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn config_paths() -> Vec<PathBuf> {
    // 낮은 우선순위 -> 높은 우선순위 순서로 병합됨.
    let mut paths = vec![PathBuf::from("/etc/pr-typecheck/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("pr-typecheck").join("config.json"));
    }

    paths.push(PathBuf::from(".pr-typecheck/config.json"));

    if let Ok(path) = env::var(CONFIG_ENV) {
        paths.push(Path::new(&path).to_path_buf());
    }

    dedup_paths(paths)
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = Vec::new();
    for path in paths {
        if !out.contains(&path) {
            out.push(path);
        }
    }
    out
}
