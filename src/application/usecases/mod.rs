//! 유스케이스 모음.

pub mod check_pr;
pub mod inspect_config;
