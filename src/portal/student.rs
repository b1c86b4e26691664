//! 学生端门户控制器
//!
//! 流程顺序：
//! 1. 进入时加载课程列表（或按查询词检索）
//! 2. 选课 → 拉取详情 → 清空已有问答
//! 3. 针对选中课程提问 → 展示回答

use crate::clients::BackendClient;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{Lesson, Role};
use crate::state::{ExchangeState, LessonDetailState, LessonListState, SelectTicket};
use tracing::{debug, info};

/// 学生端门户
pub struct StudentPortal {
    client: BackendClient,
    pub lessons: LessonListState,
    pub detail: LessonDetailState,
    pub exchange: ExchangeState,
}

impl StudentPortal {
    /// 创建新的学生端门户
    pub fn new(config: &Config) -> Self {
        Self {
            client: BackendClient::new(config),
            lessons: LessonListState::new(),
            detail: LessonDetailState::new(),
            exchange: ExchangeState::new(),
        }
    }

    /// 加载全部课程列表
    pub async fn load_lessons(&mut self) -> AppResult<()> {
        self.lessons.begin();
        match self.client.list_lessons(Role::Student).await {
            Ok(lessons) => {
                info!("✓ 已加载 {} 个课程", lessons.len());
                self.lessons.replace(lessons);
                Ok(())
            }
            Err(e) => {
                self.lessons.fail();
                Err(e)
            }
        }
    }

    /// 检索课程
    ///
    /// 空白查询等价于全量加载
    pub async fn search(&mut self, query: &str) -> AppResult<()> {
        let Some(query) = effective_query(query) else {
            return self.load_lessons().await;
        };

        self.lessons.begin();
        match self.client.search_lessons(query).await {
            Ok(lessons) => {
                info!("🔍 检索「{}」命中 {} 个课程", query, lessons.len());
                self.lessons.replace(lessons);
                Ok(())
            }
            Err(e) => {
                self.lessons.fail();
                Err(e)
            }
        }
    }

    /// 选中一个课程并拉取详情
    ///
    /// # 返回
    /// 返回结果是否生效（过期响应被丢弃时为 false）
    pub async fn select(&mut self, lesson_id: i64) -> AppResult<bool> {
        let ticket = self.detail.begin_select(lesson_id);
        let result = self.client.lesson_detail(lesson_id).await;
        self.finish_select(ticket, result)
    }

    /// 应用选课结果（同步转移部分）
    ///
    /// 成功且票据有效时清空已有问答，保证回答永远对应当前选中课程
    fn finish_select(&mut self, ticket: SelectTicket, result: AppResult<Lesson>) -> AppResult<bool> {
        match result {
            Ok(lesson) => {
                let applied = self.detail.complete(ticket, lesson, Vec::new());
                if applied {
                    self.exchange.reset();
                }
                Ok(applied)
            }
            Err(e) => {
                if self.detail.fail(ticket) {
                    Err(e)
                } else {
                    debug!("{} 的失败响应已过期: {}", ticket, e);
                    Ok(false)
                }
            }
        }
    }

    /// 针对当前选中课程提问
    ///
    /// 校验不通过时直接返回错误，不发出请求；成功后回答存入交换状态
    pub async fn ask(&mut self, text: &str) -> AppResult<()> {
        let request = self
            .exchange
            .prepare(self.detail.selected(), text)
            .map_err(AppError::Validation)?;

        info!("💬 正在提问（课程 ID#{}）...", request.lesson_id);
        match self.client.ask_question(&request).await {
            Ok(exchange) => {
                self.exchange.complete(exchange);
                Ok(())
            }
            Err(e) => {
                self.exchange.fail();
                Err(e)
            }
        }
    }
}

/// 空白查询视为"全部"
fn effective_query(query: &str) -> Option<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::models::{Exchange, FileType};

    fn portal() -> StudentPortal {
        StudentPortal::new(&Config::default())
    }

    fn lesson(id: i64, title: &str) -> Lesson {
        Lesson {
            id,
            title: title.to_string(),
            filename: format!("{}.txt", id),
            file_type: FileType::Txt,
            explanation: None,
            created_at: None,
            content: None,
        }
    }

    fn answered(portal: &mut StudentPortal, question: &str, answer: &str, title: &str) {
        let selected = portal.detail.selected().cloned().expect("测试前需要已选课");
        portal
            .exchange
            .prepare(Some(&selected), question)
            .expect("提问应当通过校验");
        portal.exchange.complete(Exchange {
            question: question.to_string(),
            answer: answer.to_string(),
            lesson_title: title.to_string(),
            relevant_sections: Vec::new(),
        });
    }

    #[test]
    fn test_blank_query_means_load_all() {
        assert_eq!(effective_query(""), None);
        assert_eq!(effective_query("   \t"), None);
        assert_eq!(effective_query(" 光合作用 "), Some("光合作用"));
    }

    #[test]
    fn test_select_clears_previous_answer() {
        let mut portal = portal();

        let first = portal.detail.begin_select(1);
        portal
            .finish_select(first, Ok(lesson(1, "A")))
            .expect("首次选课应当成功");
        answered(&mut portal, "什么是 X？", "X 的解释", "A");
        assert!(portal.exchange.answer().is_some());

        // 切换选课后，上一个课程的问答必须消失
        let second = portal.detail.begin_select(2);
        portal
            .finish_select(second, Ok(lesson(2, "B")))
            .expect("第二次选课应当成功");
        assert!(portal.exchange.answer().is_none());
        assert_eq!(portal.detail.selected().map(|l| l.title.as_str()), Some("B"));
    }

    #[test]
    fn test_failed_select_keeps_selection_and_surfaces_detail() {
        let mut portal = portal();

        let first = portal.detail.begin_select(1);
        portal
            .finish_select(first, Ok(lesson(1, "A")))
            .expect("首次选课应当成功");

        let second = portal.detail.begin_select(99);
        let err = portal
            .finish_select(
                second,
                Err(AppError::bad_response(
                    "api/students/lessons/99",
                    404,
                    Some("Lesson not found".to_string()),
                )),
            )
            .expect_err("失败应当向上传递");

        assert_eq!(err.user_message(), "Lesson not found");
        // 之前的选中课程保持不动
        assert_eq!(portal.detail.selected().map(|l| l.id), Some(1));
    }

    #[test]
    fn test_stale_select_response_is_dropped() {
        let mut portal = portal();

        let first = portal.detail.begin_select(1);
        let second = portal.detail.begin_select(2);

        // 慢的旧响应后到：整体丢弃，不报错也不覆盖
        let applied = portal
            .finish_select(first, Ok(lesson(1, "A")))
            .expect("过期响应不算失败");
        assert!(!applied);
        assert!(portal.detail.selected().is_none());

        let applied = portal
            .finish_select(second, Ok(lesson(2, "B")))
            .expect("当前响应应当生效");
        assert!(applied);
        assert_eq!(portal.detail.selected().map(|l| l.id), Some(2));
    }

    #[tokio::test]
    async fn test_ask_without_selection_is_rejected_locally() {
        let mut portal = portal();
        let err = portal.ask("什么是 X？").await.expect_err("应当被本地拦截");
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::NoLessonSelected)
        ));
    }
}
