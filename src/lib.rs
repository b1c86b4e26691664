//! # Learning Portal
//!
//! AI 学习助手的终端客户端，提供教师端与学生端两个门户
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Clients）
//! - `clients/` - 唯一持有 HTTP 资源，只暴露后端能力
//! - `BackendClient` - 每个后端接口对应一个方法
//!
//! ### ② 状态层（State）
//! - `state/` - 描述"界面此刻记着什么"，每个组件一份本地状态
//! - `LessonListState` - 课程列表集合
//! - `LessonDetailState` - 当前选中课程与测验
//! - `ExchangeState` - 问答交换
//! - `UploadState` - 上传流程
//!
//! ### ③ 门户层（Portal）
//! - `portal/` - 定义"一次用户操作"的完整流程（校验 → 请求 → 应用）
//! - `StudentPortal` - 学生端：浏览、检索、提问
//! - `TeacherPortal` - 教师端：上传、查看讲解与测验
//!
//! ### ④ 应用层（App）
//! - `app` - 终端交互循环、命令分发与渲染
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod portal;
pub mod state;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use clients::BackendClient;
pub use config::Config;
pub use error::{AppError, AppResult, ValidationError};
pub use models::{AskRequest, Exchange, FileType, Lesson, QuizItem, Role};
pub use portal::{StudentPortal, TeacherPortal};
pub use state::{ExchangeState, LessonDetailState, LessonListState, OpPhase, UploadState};
