//! 状态层（State Layer）
//!
//! ## 职责
//!
//! 持有每个界面组件的本地状态，并以显式状态机描述每个异步操作的进展。
//! 本层不做任何 I/O：网络请求由门户层发起，结果通过同步的
//! `begin / complete / fail` 转移方法写回，因此全部转移逻辑都可以
//! 离线测试。
//!
//! ## 模块划分
//!
//! - `op_phase` - 单个异步操作的显式阶段
//! - `lesson_list` - 课程列表集合（整体替换，失败保持原样）
//! - `lesson_detail` - 当前选中课程与测验（带选课票据，过期响应丢弃）
//! - `exchange` - 问答交换（本地校验闸门，单飞限制）
//! - `upload` - 上传流程（文件选择过滤，失败保留已选文件）

pub mod exchange;
pub mod lesson_detail;
pub mod lesson_list;
pub mod op_phase;
pub mod upload;

pub use exchange::ExchangeState;
pub use lesson_detail::{LessonDetailState, SelectTicket};
pub use lesson_list::LessonListState;
pub use op_phase::OpPhase;
pub use upload::UploadState;
