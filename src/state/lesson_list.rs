use crate::models::Lesson;
use crate::state::OpPhase;

/// 课程列表状态
///
/// 持有有序的课程摘要集合。加载和检索成功时整体替换本地副本，
/// 失败时集合保持原样，只记录错误阶段
#[derive(Debug, Default)]
pub struct LessonListState {
    lessons: Vec<Lesson>,
    phase: OpPhase,
}

impl LessonListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前集合（服务端顺序，客户端不排序）
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn phase(&self) -> OpPhase {
        self.phase
    }

    /// 按 ID 查找课程
    pub fn find(&self, lesson_id: i64) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id == lesson_id)
    }

    /// 标记一次加载/检索开始
    pub fn begin(&mut self) {
        self.phase = OpPhase::Pending;
    }

    /// 用服务端返回的列表整体替换本地集合
    pub fn replace(&mut self, lessons: Vec<Lesson>) {
        self.lessons = lessons;
        self.phase = OpPhase::Ready;
    }

    /// 加载失败：原有集合保持不动
    pub fn fail(&mut self) {
        self.phase = OpPhase::Error;
    }
}
