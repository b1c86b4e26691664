//! 当前选中课程的状态
//!
//! 原型实现里存在一个竞态：连续切换选课时，先发出的请求可能后返回，
//! 把新选课的数据覆盖掉。这里用选课票据关闭该竞态——每次选课领取
//! 一张带序号的票据，响应回来时序号对不上就整体丢弃。

use crate::models::{Lesson, QuizItem};
use crate::state::OpPhase;
use std::fmt::Display;
use tracing::debug;

/// 选课票据
///
/// 记录"这次详情请求是为第几次选课发出的"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectTicket {
    /// 目标课程 ID
    pub lesson_id: i64,
    /// 选课序号
    seq: u64,
}

impl Display for SelectTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[选课 #{} 课程 ID#{}]", self.seq, self.lesson_id)
    }
}

/// 当前选中课程的状态
///
/// 每个门户实例同一时刻至多选中一个课程
#[derive(Debug, Default)]
pub struct LessonDetailState {
    lesson: Option<Lesson>,
    quiz: Vec<QuizItem>,
    phase: OpPhase,
    seq: u64,
}

impl LessonDetailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前选中的课程
    pub fn selected(&self) -> Option<&Lesson> {
        self.lesson.as_ref()
    }

    /// 当前课程的测验（学生端恒为空）
    pub fn quiz(&self) -> &[QuizItem] {
        &self.quiz
    }

    pub fn phase(&self) -> OpPhase {
        self.phase
    }

    /// 发起一次选课，领取本次请求的票据
    pub fn begin_select(&mut self, lesson_id: i64) -> SelectTicket {
        self.seq += 1;
        self.phase = OpPhase::Pending;
        SelectTicket {
            lesson_id,
            seq: self.seq,
        }
    }

    /// 应用选课结果
    ///
    /// 票据已过期（期间又发起了新的选课）时丢弃响应，返回是否生效
    pub fn complete(&mut self, ticket: SelectTicket, lesson: Lesson, quiz: Vec<QuizItem>) -> bool {
        if ticket.seq != self.seq {
            debug!("{} 成功响应已过期，丢弃", ticket);
            return false;
        }
        self.lesson = Some(lesson);
        self.quiz = quiz;
        self.phase = OpPhase::Ready;
        true
    }

    /// 选课失败：之前选中的课程保持不动
    ///
    /// 同样受票据保护，过期的失败不会打扰仍在途的新请求，返回是否生效
    pub fn fail(&mut self, ticket: SelectTicket) -> bool {
        if ticket.seq != self.seq {
            debug!("{} 失败响应已过期，丢弃", ticket);
            return false;
        }
        self.phase = OpPhase::Error;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileType;

    fn lesson(id: i64, title: &str) -> Lesson {
        Lesson {
            id,
            title: title.to_string(),
            filename: format!("{}.pdf", id),
            file_type: FileType::Pdf,
            explanation: Some("一段讲解".to_string()),
            created_at: None,
            content: None,
        }
    }

    #[test]
    fn test_complete_applies_current_ticket() {
        let mut state = LessonDetailState::new();
        let ticket = state.begin_select(1);
        assert!(state.complete(ticket, lesson(1, "A"), Vec::new()));
        assert_eq!(state.selected().map(|l| l.id), Some(1));
        assert_eq!(state.phase(), OpPhase::Ready);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = LessonDetailState::new();
        let first = state.begin_select(1);
        let second = state.begin_select(2);

        // 先发出的请求后返回：不得覆盖新选课
        assert!(!state.complete(first, lesson(1, "A"), Vec::new()));
        assert!(state.selected().is_none());
        assert_eq!(state.phase(), OpPhase::Pending);

        assert!(state.complete(second, lesson(2, "B"), Vec::new()));
        assert_eq!(state.selected().map(|l| l.title.as_str()), Some("B"));
    }

    #[test]
    fn test_failure_keeps_previous_selection() {
        let mut state = LessonDetailState::new();
        let first = state.begin_select(1);
        state.complete(first, lesson(1, "A"), Vec::new());

        let second = state.begin_select(99);
        assert!(state.fail(second));
        assert_eq!(state.phase(), OpPhase::Error);
        // 失败不改变已选中的课程
        assert_eq!(state.selected().map(|l| l.id), Some(1));
    }

    #[test]
    fn test_stale_failure_does_not_clobber_pending() {
        let mut state = LessonDetailState::new();
        let first = state.begin_select(1);
        let second = state.begin_select(2);

        // 旧请求失败返回时新请求还在途，阶段必须维持 Pending
        assert!(!state.fail(first));
        assert_eq!(state.phase(), OpPhase::Pending);

        assert!(state.complete(second, lesson(2, "B"), Vec::new()));
        assert_eq!(state.phase(), OpPhase::Ready);
    }
}
