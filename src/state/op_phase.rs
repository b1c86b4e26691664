/// 单个异步操作的阶段
///
/// 每个网络操作都用显式状态描述，而不是一组布尔量：
/// `Idle → Pending → (Ready | Error)`，之后可以再次进入 `Pending`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpPhase {
    /// 空闲，尚未发起过操作
    #[default]
    Idle,
    /// 请求已发出，等待响应
    Pending,
    /// 上一次操作失败
    Error,
    /// 上一次操作成功
    Ready,
}

impl OpPhase {
    /// 是否有请求在途
    pub fn is_pending(self) -> bool {
        matches!(self, OpPhase::Pending)
    }
}
