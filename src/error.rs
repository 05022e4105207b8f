use std::fmt;
use thiserror::Error;

/// 生成失败且服务端没有给出原因时显示的文案
pub const GENERATION_FALLBACK_MESSAGE: &str =
    "The AI could not process this text. Try a shorter section.";

/// 学习集生成错误
///
/// 所有错误对当前这一次尝试都是终止性的，不会自动重试
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudyError {
    /// 文本或主题为空，本地校验失败，不会发起网络请求
    #[error("学习材料或主题为空")]
    MissingInput,

    /// 服务端返回 429（或错误详情中包含 "429"）
    #[error("生成服务已达容量上限 (429)")]
    ServiceAtCapacity,

    /// 2xx 响应缺少必需字段或结构不符
    #[error("响应格式错误 ({endpoint}): 缺少或无法解析 `{key}`")]
    MalformedResponse { endpoint: String, key: String },

    /// 其他非 2xx 响应或网络错误
    #[error("生成失败: {0}")]
    GenerationFailed(String),

    /// PDF 上传或解析失败
    #[error("上传失败: {0}")]
    UploadFailed(String),
}

/// 用于展示的错误信息（标题 + 说明）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub title: String,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

impl From<&StudyError> for ErrorInfo {
    fn from(err: &StudyError) -> Self {
        match err {
            StudyError::MissingInput => ErrorInfo::new(
                "Missing Information",
                "Please upload text and define a topic first.",
            ),
            StudyError::ServiceAtCapacity => ErrorInfo::new(
                "Service at Capacity 🚦",
                "We are using the free AI tier (20 req/day). Please wait a moment or try again tomorrow.",
            ),
            StudyError::MalformedResponse { .. } => {
                ErrorInfo::new("Generation Failed", "Invalid format received from AI")
            }
            StudyError::GenerationFailed(message) => {
                let message = if message.trim().is_empty() {
                    GENERATION_FALLBACK_MESSAGE
                } else {
                    message.as_str()
                };
                ErrorInfo::new("Generation Failed", message)
            }
            StudyError::UploadFailed(message) => ErrorInfo::new("Upload Failed", message.as_str()),
        }
    }
}

/// 学习集结果类型
pub type StudyResult<T> = Result<T, StudyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_is_shown_distinctly() {
        let info = ErrorInfo::from(&StudyError::ServiceAtCapacity);
        assert_eq!(info.title, "Service at Capacity 🚦");

        let generic = ErrorInfo::from(&StudyError::GenerationFailed("boom".to_string()));
        assert_eq!(generic.title, "Generation Failed");
        assert_eq!(generic.message, "boom");
    }

    #[test]
    fn test_empty_generation_message_uses_fallback() {
        let info = ErrorInfo::from(&StudyError::GenerationFailed(String::new()));
        assert_eq!(info.message, GENERATION_FALLBACK_MESSAGE);
    }

    #[test]
    fn test_malformed_response_message() {
        let info = ErrorInfo::from(&StudyError::MalformedResponse {
            endpoint: "/api/generate-quiz".to_string(),
            key: "questions".to_string(),
        });
        assert_eq!(info.message, "Invalid format received from AI");
    }

    #[test]
    fn test_error_info_display() {
        let info = ErrorInfo::from(&StudyError::MissingInput);
        assert_eq!(
            info.to_string(),
            "Missing Information: Please upload text and define a topic first."
        );
    }
}
