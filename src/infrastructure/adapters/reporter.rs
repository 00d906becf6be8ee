//! 콘솔 리포터 포트 구현 어댑터.

use crate::application::ports::Reporter;

/// 콘솔 전용 리포터 어댑터. CI 로그에 그대로 남도록 줄 단위로만 출력한다.
#[derive(Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn section(&self, name: &str) {
        println!();
        println!("==================== {} ====================", name);
    }

    fn kv(&self, key: &str, value: &str) {
        println!("{:<14}: {}", key, value);
    }

    fn status(&self, scope: &str, message: &str) {
        println!("[{:<10}] {}", scope, message);
    }

    fn raw(&self, line: &str) {
        println!("{}", line);
    }
}
