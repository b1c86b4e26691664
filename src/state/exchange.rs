use crate::error::ValidationError;
use crate::models::{AskRequest, Exchange, Lesson};
use crate::state::OpPhase;

/// 问答交换状态
///
/// 持有进行中标志和最近一次的问答。校验不通过的提问在本地就被
/// 拦截，不会发出任何网络请求；同一时刻至多一次交换在途
#[derive(Debug, Default)]
pub struct ExchangeState {
    exchange: Option<Exchange>,
    phase: OpPhase,
}

impl ExchangeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 最近一次的问答
    pub fn answer(&self) -> Option<&Exchange> {
        self.exchange.as_ref()
    }

    pub fn phase(&self) -> OpPhase {
        self.phase
    }

    /// 本地校验并生成提问请求
    ///
    /// 未选课、问题为空白、或上一次提问还在途时直接拒绝；
    /// 通过后标记在途并返回可发送的请求体
    pub fn prepare(
        &mut self,
        selected: Option<&Lesson>,
        text: &str,
    ) -> Result<AskRequest, ValidationError> {
        if self.phase.is_pending() {
            return Err(ValidationError::ExchangeInFlight);
        }

        let lesson = selected.ok_or(ValidationError::NoLessonSelected)?;

        let question = text.trim();
        if question.is_empty() {
            return Err(ValidationError::EmptyQuestion);
        }

        self.phase = OpPhase::Pending;
        Ok(AskRequest {
            lesson_id: lesson.id,
            question: question.to_string(),
        })
    }

    /// 收到回答
    pub fn complete(&mut self, exchange: Exchange) {
        self.exchange = Some(exchange);
        self.phase = OpPhase::Ready;
    }

    /// 提问失败：上一次的回答保持可见
    pub fn fail(&mut self) {
        self.phase = OpPhase::Error;
    }

    /// 切换课程时清空问答
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
