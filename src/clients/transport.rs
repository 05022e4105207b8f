//! 传输层抽象
//!
//! 业务层只依赖 `Transport`，测试时可替换为内存实现

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// 原始 HTTP 响应（状态码 + 响应体文本）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 是否为 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 待上传的文件
#[derive(Debug, Clone)]
pub struct FilePart {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// 网络层错误（请求未得到任何 HTTP 响应）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("请求 {endpoint} 失败: {message}")]
pub struct TransportError {
    pub endpoint: String,
    pub message: String,
}

/// 生成服务的传输接口
#[async_trait]
pub trait Transport: Send + Sync {
    /// 以 JSON 请求体发送 POST
    async fn post_json(&self, endpoint: &str, body: &Value) -> Result<RawResponse, TransportError>;

    /// 以 multipart 表单（字段名 `file`）上传文件
    async fn post_file(&self, endpoint: &str, file: FilePart) -> Result<RawResponse, TransportError>;
}
