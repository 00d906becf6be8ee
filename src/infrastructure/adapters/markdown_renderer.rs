//! 코멘트 렌더링 포트 구현 어댑터.

use crate::application::ports::CommentRenderer;
use crate::domain::aggregate::FileGroup;
use crate::domain::diagnostic::Report;
use crate::domain::run::PullRefs;
use crate::infrastructure::render;

/// 마크다운 렌더링 어댑터.
pub struct MarkdownRendererAdapter;

impl CommentRenderer for MarkdownRendererAdapter {
    fn render_file_group(&self, group: &FileGroup) -> String {
        render::render_file_group_markdown(group)
    }

    fn render_summary(&self, report: &Report) -> String {
        render::render_summary_markdown(report)
    }

    fn render_comparison(&self, base: &Report, head: &Report, refs: &PullRefs) -> String {
        render::render_comparison_markdown(base, head, refs)
    }
}
