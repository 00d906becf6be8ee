//! Infrastructure layer
//! 외부 시스템(GitHub API/체커 CLI/git/파일시스템)과 직접 통신하는 구현체 집합.

pub mod adapters;
pub mod checker;
pub mod config;
pub mod git;
pub mod render;
pub mod vcs;
