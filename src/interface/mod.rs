//! Interface layer
//! CLI 입력 파싱과 의존성 조립(composition root).

pub mod cli;
pub mod composition;
