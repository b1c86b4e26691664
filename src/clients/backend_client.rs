/// 学习平台 API 客户端
///
/// 封装所有与后端 API 相关的调用逻辑
use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult};
use crate::models::{AskRequest, Exchange, Lesson, QuizItem, Role};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

/// 学习平台 API 客户端
///
/// 整个程序中唯一接触 HTTP 的类型；每个后端接口对应一个方法，
/// 返回已经解析好的模型类型
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

// ========== 响应外壳 ==========

#[derive(Deserialize)]
struct LessonListResponse {
    lessons: Vec<Lesson>,
}

#[derive(Deserialize)]
struct LessonDetailResponse {
    lesson: Lesson,
}

#[derive(Deserialize)]
struct LessonWithQuizResponse {
    lesson: Lesson,
    #[serde(default)]
    quiz: Vec<QuizItem>,
}

#[derive(Deserialize)]
struct UploadResponse {
    #[serde(default)]
    message: Option<String>,
}

/// FastAPI 风格的错误载荷
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl BackendClient {
    /// 创建新的后端客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// 获取课程列表
    ///
    /// # 参数
    /// - `role`: 门户角色，决定走学生端还是教师端接口
    ///
    /// # 返回
    /// 按服务端顺序返回课程摘要列表
    pub async fn list_lessons(&self, role: Role) -> AppResult<Vec<Lesson>> {
        let endpoint = format!("api/{}/lessons", role.api_segment());
        let body: LessonListResponse = self.get_json(&endpoint, &[]).await?;
        Ok(body.lessons)
    }

    /// 按查询词检索课程（学生端的语义检索）
    pub async fn search_lessons(&self, query: &str) -> AppResult<Vec<Lesson>> {
        let endpoint = "api/students/search-lessons";
        let body: LessonListResponse = self.get_json(endpoint, &[("query", query)]).await?;
        Ok(body.lessons)
    }

    /// 获取课程详情（学生端）
    pub async fn lesson_detail(&self, lesson_id: i64) -> AppResult<Lesson> {
        let endpoint = format!("api/students/lessons/{}", lesson_id);
        let body: LessonDetailResponse = self.get_json(&endpoint, &[]).await?;
        Ok(body.lesson)
    }

    /// 获取课程详情及测验（教师端）
    pub async fn lesson_with_quiz(&self, lesson_id: i64) -> AppResult<(Lesson, Vec<QuizItem>)> {
        let endpoint = format!("api/teachers/lessons/{}", lesson_id);
        let body: LessonWithQuizResponse = self.get_json(&endpoint, &[]).await?;
        Ok((body.lesson, body.quiz))
    }

    /// 针对课程提问
    ///
    /// # 参数
    /// - `request`: 已通过本地校验的提问请求
    ///
    /// # 返回
    /// 返回完整的问答交换记录
    pub async fn ask_question(&self, request: &AskRequest) -> AppResult<Exchange> {
        let endpoint = "api/students/ask-question";

        debug!("提问 Payload: {}", serde_json::to_string(request)?);

        let response = self
            .http
            .post(self.url(endpoint))
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::request_failed(endpoint, e))?;

        Self::decode(endpoint, response).await
    }

    /// 上传课程文档（multipart）
    ///
    /// # 参数
    /// - `filename`: 原始文件名
    /// - `mime`: 文件的 MIME 类型
    /// - `bytes`: 文件内容
    ///
    /// # 返回
    /// 返回后端的成功提示语（如果有）
    pub async fn upload_lesson(
        &self,
        filename: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> AppResult<Option<String>> {
        let endpoint = "api/teachers/upload-lesson";

        debug!("上传文件: {} ({}, {} 字节)", filename, mime, bytes.len());

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime)
            .map_err(|e| AppError::request_failed(endpoint, e))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(self.url(endpoint))
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::request_failed(endpoint, e))?;

        let body: UploadResponse = Self::decode(endpoint, response).await?;
        Ok(body.message)
    }

    // ========== 辅助函数 ==========

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// 发送 GET 请求并解析 JSON 响应
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let mut request = self.http.get(self.url(endpoint));
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::request_failed(endpoint, e))?;

        Self::decode(endpoint, response).await
    }

    /// 统一解包响应
    ///
    /// 非 2xx 时尝试提取错误载荷中的 detail 字段
    async fn decode<T: DeserializeOwned>(
        endpoint: &str,
        response: reqwest::Response,
    ) -> AppResult<T> {
        let status = response.status();

        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            debug!("请求 {} 失败: HTTP {} detail={:?}", endpoint, status, detail);
            return Err(AppError::bad_response(endpoint, status.as_u16(), detail));
        }

        response.json::<T>().await.map_err(|e| {
            AppError::Api(ApiError::JsonParseFailed {
                source: Box::new(e),
            })
        })
    }
}
