//! 설정 모듈 공용 유틸리티.

use std::env;
use std::path::Path;

/// 로컬 명령이 실행 가능한지 탐지한다(경로가 주어지면 파일 존재만 본다).
pub fn command_exists(command: &str) -> bool {
    let command = command.trim();
    if command.is_empty() {
        return false;
    }

    let command_path = Path::new(command);
    if command_path.components().count() > 1 {
        return command_path.is_file();
    }

    let Some(path_var) = env::var_os("PATH") else {
        return false;
    };

    env::split_paths(&path_var).any(|dir| {
        dir.join(command).is_file()
            || (cfg!(windows) && ["exe", "cmd", "bat"]
                .iter()
                .any(|ext| dir.join(format!("{command}.{ext}")).is_file()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_command_is_never_available() {
        assert!(!command_exists("   "));
    }

    #[test]
    fn explicit_path_checks_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("checker");
        std::fs::write(&tool, "").unwrap();

        assert!(command_exists(&tool.display().to_string()));
        assert!(!command_exists(&dir.path().join("absent").display().to_string()));
    }
}
