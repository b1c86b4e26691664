use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 课程文件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// PDF 文档
    Pdf,
    /// 纯文本
    Txt,
}

impl FileType {
    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            FileType::Pdf => "PDF",
            FileType::Txt => "TXT",
        }
    }

    /// 上传时使用的 MIME 类型
    pub fn mime_type(self) -> &'static str {
        match self {
            FileType::Pdf => "application/pdf",
            FileType::Txt => "text/plain",
        }
    }

    /// 从文件扩展名解析（大小写不敏感）
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(FileType::Pdf),
            "txt" => Some(FileType::Txt),
            _ => None,
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 课程记录
///
/// 后端生成并持有全部字段，客户端只做整体替换，从不就地修改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    /// 后端分配的唯一 ID
    pub id: i64,
    /// AI 生成的课程标题
    pub title: String,
    /// 原始上传文件名
    pub filename: String,
    pub file_type: FileType,
    /// AI 生成的讲解，可能为空
    #[serde(default)]
    pub explanation: Option<String>,
    /// 创建时间（后端输出无时区的 ISO 格式）
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    /// 文档全文，仅详情接口返回
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Lesson {
    /// 列表视图用的短日期
    pub fn created_date(&self) -> Option<String> {
        self.created_at.map(|t| t.format("%Y-%m-%d").to_string())
    }
}

/// 测验题目
///
/// 由后端基于课程内容生成，固定四个选项
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizItem {
    pub question: String,
    pub options: Vec<String>,
    /// 正确选项的下标
    pub correct_answer: usize,
}

impl QuizItem {
    /// 判断某个选项是否为正确答案
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_answer
    }
}
