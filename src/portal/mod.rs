//! 门户层（Portal Layer）
//!
//! 定义"一次用户操作"的完整流程：本地校验 → 发出请求 → 把结果
//! 写回状态层。每个角色一个控制器，互不共享状态。

pub mod student;
pub mod teacher;

pub use student::StudentPortal;
pub use teacher::TeacherPortal;
