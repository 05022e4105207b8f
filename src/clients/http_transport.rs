/// 基于 reqwest 的 HTTP 传输实现
use crate::clients::transport::{FilePart, RawResponse, Transport, TransportError};
use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// HTTP 传输
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// 创建新的 HTTP 传输
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("无法创建 HTTP 客户端")?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn into_raw(endpoint: &str, response: Response) -> Result<RawResponse, TransportError> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(endpoint, e))?;

        debug!("{} 返回 {}，响应体 {} 字节", endpoint, status, body.len());

        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, endpoint: &str, body: &Value) -> Result<RawResponse, TransportError> {
        debug!("POST {}", self.url(endpoint));

        let response = self
            .client
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(endpoint, e))?;

        Self::into_raw(endpoint, response).await
    }

    async fn post_file(&self, endpoint: &str, file: FilePart) -> Result<RawResponse, TransportError> {
        debug!("上传 {} ({} 字节) 到 {}", file.file_name, file.bytes.len(), endpoint);

        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str("application/pdf")
            .map_err(|e| transport_error(endpoint, e))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.url(endpoint))
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport_error(endpoint, e))?;

        Self::into_raw(endpoint, response).await
    }
}

fn transport_error(endpoint: &str, err: reqwest::Error) -> TransportError {
    TransportError {
        endpoint: endpoint.to_string(),
        message: err.to_string(),
    }
}
