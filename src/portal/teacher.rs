//! 教师端门户控制器
//!
//! 流程顺序：
//! 1. 进入时加载课程列表
//! 2. 选课 → 拉取详情与生成的测验
//! 3. 选择文档 → 上传 → 成功后刷新课程列表

use crate::clients::BackendClient;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{FileType, Lesson, QuizItem, Role};
use crate::state::{LessonDetailState, LessonListState, SelectTicket, UploadState};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// 教师端门户
pub struct TeacherPortal {
    client: BackendClient,
    pub lessons: LessonListState,
    pub detail: LessonDetailState,
    pub upload: UploadState,
}

impl TeacherPortal {
    /// 创建新的教师端门户
    pub fn new(config: &Config) -> Self {
        Self {
            client: BackendClient::new(config),
            lessons: LessonListState::new(),
            detail: LessonDetailState::new(),
            upload: UploadState::new(),
        }
    }

    /// 加载全部课程列表
    pub async fn load_lessons(&mut self) -> AppResult<()> {
        self.lessons.begin();
        match self.client.list_lessons(Role::Teacher).await {
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

    /// 选中一个课程并拉取详情与测验
    ///
    /// # 返回
    /// 返回结果是否生效（过期响应被丢弃时为 false）
    pub async fn select(&mut self, lesson_id: i64) -> AppResult<bool> {
        let ticket = self.detail.begin_select(lesson_id);
        let result = self.client.lesson_with_quiz(lesson_id).await;
        self.finish_select(ticket, result)
    }

    /// 应用选课结果（同步转移部分）
    fn finish_select(
        &mut self,
        ticket: SelectTicket,
        result: AppResult<(Lesson, Vec<QuizItem>)>,
    ) -> AppResult<bool> {
        match result {
            Ok((lesson, quiz)) => Ok(self.detail.complete(ticket, lesson, quiz)),
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

    /// 选择待上传的文档
    pub fn choose_file(&mut self, path: PathBuf) -> AppResult<FileType> {
        let file_type = self.upload.choose(path).map_err(AppError::Validation)?;
        info!("📄 已选择 {} 文档", file_type);
        Ok(file_type)
    }

    /// 上传当前选中的文档
    ///
    /// 成功后清空已选文件并刷新课程列表；失败保留已选文件以便重试
    ///
    /// # 返回
    /// 返回后端的成功提示语（如果有）
    pub async fn upload(&mut self) -> AppResult<Option<String>> {
        let (path, file_type) = self.upload.prepare().map_err(AppError::Validation)?;

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                self.upload.fail();
                return Err(AppError::file_read_failed(path.display().to_string(), e));
            }
        };

        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("lesson")
            .to_string();

        info!("📤 正在上传 {} ({} 字节)，等待后端生成讲解与测验...", filename, bytes.len());

        match self
            .client
            .upload_lesson(&filename, file_type.mime_type(), bytes)
            .await
        {
            Ok(message) => {
                self.upload.complete();
                // 上传成功后刷新课程列表；刷新失败不影响上传本身的结果
                if let Err(e) = self.load_lessons().await {
                    warn!("⚠️ 上传后刷新课程列表失败: {}", e);
                }
                Ok(message)
            }
            Err(e) => {
                self.upload.fail();
                Err(e)
            }
        }
    }
}
