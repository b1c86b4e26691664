use serde::{Deserialize, Serialize};

/// 提问请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskRequest {
    /// 问题所针对的课程 ID
    pub lesson_id: i64,
    /// 去除首尾空白后的问题文本
    pub question: String,
}

/// 一次问答交换
///
/// 只在一次交换的生命周期内存在：下一次提问整体替换，切换课程时清空
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
    /// 后端回显的问题
    pub question: String,
    /// 生成的回答
    pub answer: String,
    /// 问题所属课程的标题
    pub lesson_title: String,
    /// 回答引用的相关段落
    #[serde(default)]
    pub relevant_sections: Vec<String>,
}
