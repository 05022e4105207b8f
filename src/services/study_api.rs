//! 生成服务接口 - 业务能力层
//!
//! 只负责"调用一个生成接口并把响应变成领域对象"，不关心流程
//!
//! ## 失败映射
//! - 429，或错误详情中包含 "429" → `ServiceAtCapacity`
//! - 其他非 2xx / 网络错误 → `GenerationFailed`（优先使用服务端 detail）
//! - 2xx 但缺少必需字段 → `MalformedResponse`

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::clients::{FilePart, RawResponse, Transport};
use crate::error::{StudyError, StudyResult};
use crate::models::loaders::input_loader::is_pdf;
use crate::models::{Difficulty, Glossary, PdfExtraction, QuizResult, Summary};

pub const QUIZ_ENDPOINT: &str = "/api/generate-quiz";
pub const SUMMARY_ENDPOINT: &str = "/api/generate-summary";
pub const GLOSSARY_ENDPOINT: &str = "/api/generate-glossary";
pub const UPLOAD_PDF_ENDPOINT: &str = "/api/upload-pdf";

/// 服务端接受的题目数量范围
pub const MIN_QUESTIONS: u32 = 1;
pub const MAX_QUESTIONS: u32 = 15;

#[derive(Debug, Serialize)]
struct QuizRequest<'a> {
    context_text: &'a str,
    topic: &'a str,
    difficulty: Difficulty,
    num_questions: u32,
}

#[derive(Debug, Serialize)]
struct ContextRequest<'a> {
    context_text: &'a str,
    topic: &'a str,
}

/// 一个生成接口的描述
struct ArtifactCall<'a> {
    endpoint: &'static str,
    required_key: &'static str,
    fallback_message: &'static str,
    topic: &'a str,
}

/// 生成服务接口
///
/// 职责：
/// - 组装请求体并发送
/// - 校验响应中的必需字段
/// - 把传输层失败映射为 `StudyError`
/// - 不做重试，由调用方决定是否重新发起
#[derive(Clone)]
pub struct StudyApi {
    transport: Arc<dyn Transport>,
}

impl StudyApi {
    /// 创建新的生成服务接口
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// 生成测验
    ///
    /// # 参数
    /// - `context_text`: 学习材料
    /// - `topic`: 主题
    /// - `difficulty`: 难度
    /// - `num_questions`: 题目数量，超出 1..=15 时会被截断
    pub async fn generate_quiz(
        &self,
        context_text: &str,
        topic: &str,
        difficulty: Difficulty,
        num_questions: u32,
    ) -> StudyResult<QuizResult> {
        let num_questions = clamp_question_count(num_questions);
        let body = serde_json::to_value(QuizRequest {
            context_text,
            topic,
            difficulty,
            num_questions,
        })
        .map_err(|e| StudyError::GenerationFailed(e.to_string()))?;

        let quiz: QuizResult = self
            .request_artifact(
                ArtifactCall {
                    endpoint: QUIZ_ENDPOINT,
                    required_key: "questions",
                    fallback_message: "Failed to generate quiz",
                    topic,
                },
                &body,
            )
            .await?;

        info!("✓ 测验生成完成，共 {} 道题", quiz.questions.len());
        Ok(quiz)
    }

    /// 生成摘要
    pub async fn generate_summary(&self, context_text: &str, topic: &str) -> StudyResult<Summary> {
        let body = context_body(context_text, topic)?;

        let summary: Summary = self
            .request_artifact(
                ArtifactCall {
                    endpoint: SUMMARY_ENDPOINT,
                    required_key: "summary",
                    fallback_message: "Failed to generate summary",
                    topic,
                },
                &body,
            )
            .await?;

        info!("✓ 摘要生成完成，{} 个字符", summary.summary.chars().count());
        Ok(summary)
    }

    /// 生成术语表
    pub async fn generate_glossary(&self, context_text: &str, topic: &str) -> StudyResult<Glossary> {
        let body = context_body(context_text, topic)?;

        let glossary: Glossary = self
            .request_artifact(
                ArtifactCall {
                    endpoint: GLOSSARY_ENDPOINT,
                    required_key: "terms",
                    fallback_message: "Failed to generate glossary",
                    topic,
                },
                &body,
            )
            .await?;

        info!("✓ 术语表生成完成，共 {} 个术语", glossary.terms.len());
        Ok(glossary)
    }

    /// 上传 PDF 并提取文本
    ///
    /// 非 `.pdf` 文件在本地直接拒绝，不会发起请求
    pub async fn upload_pdf(&self, path: &Path) -> StudyResult<PdfExtraction> {
        if !is_pdf(path) {
            return Err(StudyError::UploadFailed("File must be a PDF (.pdf)".to_string()));
        }

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            StudyError::UploadFailed(format!("Could not read {}: {}", path.display(), e))
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload.pdf".to_string());

        info!("📤 正在上传 PDF: {} ({} 字节)", file_name, bytes.len());

        let response = self
            .transport
            .post_file(UPLOAD_PDF_ENDPOINT, FilePart { file_name, bytes })
            .await
            .map_err(|e| StudyError::UploadFailed(e.to_string()))?;

        if !response.is_success() {
            let message = server_detail(&response).unwrap_or_else(|| "Failed to upload PDF".to_string());
            warn!("⚠️ PDF 上传失败 ({}): {}", response.status, message);
            return Err(StudyError::UploadFailed(message));
        }

        let value = parse_with_key(&response, UPLOAD_PDF_ENDPOINT, "extracted_text")?;
        let extraction: PdfExtraction =
            serde_json::from_value(value).map_err(|_| malformed(UPLOAD_PDF_ENDPOINT, "extracted_text"))?;

        info!("✓ PDF 解析完成，共 {} 页", extraction.page_count);
        Ok(extraction)
    }

    /// 发送请求并把响应解析为领域对象
    async fn request_artifact<T: DeserializeOwned>(
        &self,
        call: ArtifactCall<'_>,
        body: &Value,
    ) -> StudyResult<T> {
        debug!("请求 {}", call.endpoint);

        let response = self
            .transport
            .post_json(call.endpoint, body)
            .await
            .map_err(|e| {
                warn!("⚠️ {}", e);
                StudyError::GenerationFailed(e.to_string())
            })?;

        if !response.is_success() {
            let err = classify_failure(&response, call.fallback_message);
            warn!("⚠️ {} 返回 {}: {}", call.endpoint, response.status, err);
            return Err(err);
        }

        let mut value = parse_with_key(&response, call.endpoint, call.required_key)?;

        // 响应缺少 topic 时沿用请求中的主题
        if let Some(obj) = value.as_object_mut() {
            if obj.get("topic").map_or(true, Value::is_null) {
                obj.insert("topic".to_string(), json!(call.topic));
            }
        }

        serde_json::from_value(value).map_err(|e| {
            debug!("{} 响应无法解析: {}", call.endpoint, e);
            malformed(call.endpoint, call.required_key)
        })
    }
}

/// 把非 2xx 响应映射为 `StudyError`
///
/// # 参数
/// - `response`: 原始响应
/// - `fallback_message`: 服务端没有 detail 时使用的文案
pub fn classify_failure(response: &RawResponse, fallback_message: &str) -> StudyError {
    let detail = server_detail(response);

    let mentions_429 = detail.as_deref().is_some_and(|d| d.contains("429"));
    if response.status == 429 || mentions_429 {
        return StudyError::ServiceAtCapacity;
    }

    StudyError::GenerationFailed(detail.unwrap_or_else(|| fallback_message.to_string()))
}

fn context_body(context_text: &str, topic: &str) -> StudyResult<Value> {
    serde_json::to_value(ContextRequest {
        context_text,
        topic,
    })
    .map_err(|e| StudyError::GenerationFailed(e.to_string()))
}

/// 截断到服务端接受的题目数量范围
pub fn clamp_question_count(num_questions: u32) -> u32 {
    let clamped = num_questions.clamp(MIN_QUESTIONS, MAX_QUESTIONS);
    if clamped != num_questions {
        debug!("题目数量 {} 超出范围，已调整为 {}", num_questions, clamped);
    }
    clamped
}

/// 提取响应体中的 `detail` 字符串（非空时）
fn server_detail(response: &RawResponse) -> Option<String> {
    serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|v| v.get("detail").and_then(Value::as_str).map(str::to_string))
        .filter(|d| !d.trim().is_empty())
}

fn parse_with_key(response: &RawResponse, endpoint: &str, key: &str) -> StudyResult<Value> {
    let value: Value = serde_json::from_str(&response.body).map_err(|_| malformed(endpoint, key))?;

    match value.get(key) {
        Some(v) if !v.is_null() => Ok(value),
        _ => Err(malformed(endpoint, key)),
    }
}

fn malformed(endpoint: &str, key: &str) -> StudyError {
    StudyError::MalformedResponse {
        endpoint: endpoint.to_string(),
        key: key.to_string(),
    }
}
