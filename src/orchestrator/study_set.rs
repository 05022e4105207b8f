//! 学习集生成器 - 编排层
//!
//! ## 职责
//!
//! 1. **输入校验**：文本和主题去除空白后不能为空，否则不发起任何请求
//! 2. **并发请求**：测验必选，摘要/术语表可选，同时发出
//! 3. **全有或全无**：任一请求失败则整体失败，不返回部分结果
//! 4. **不做重试**：由调用方重新发起

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::clients::{HttpTransport, Transport};
use crate::config::Config;
use crate::error::{StudyError, StudyResult};
use crate::models::{ArtifactSelection, Difficulty, StudySet};
use crate::orchestrator::session::StudySession;
use crate::services::StudyApi;
use crate::utils::logging::truncate_text;

/// 学习集生成器
#[derive(Clone)]
pub struct StudySetOrchestrator {
    api: StudyApi,
    num_questions: u32,
}

impl StudySetOrchestrator {
    /// 使用指定传输创建
    pub fn new(transport: Arc<dyn Transport>, num_questions: u32) -> Self {
        Self {
            api: StudyApi::new(transport),
            num_questions,
        }
    }

    /// 根据配置创建（使用 HTTP 传输）
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(Arc::new(transport), config.num_questions))
    }

    /// 生成学习集
    ///
    /// # 参数
    /// - `text`: 学习材料
    /// - `topic`: 主题
    /// - `difficulty`: 难度
    /// - `artifacts`: 除测验外还需要生成的内容
    ///
    /// # 返回
    /// 所有请求都成功时返回完整的学习集，否则返回第一个失败
    pub async fn generate_study_set(
        &self,
        text: &str,
        topic: &str,
        difficulty: Difficulty,
        artifacts: ArtifactSelection,
    ) -> StudyResult<StudySet> {
        if text.trim().is_empty() || topic.trim().is_empty() {
            warn!("⚠️ 学习材料或主题为空，不发起请求");
            return Err(StudyError::MissingInput);
        }

        info!(
            "🚀 开始生成学习集: 主题 '{}', 难度 {}, 材料 '{}'",
            topic,
            difficulty,
            truncate_text(text, 40)
        );

        let quiz = self
            .api
            .generate_quiz(text, topic, difficulty, self.num_questions);

        let summary = async {
            if artifacts.summary {
                self.api.generate_summary(text, topic).await.map(Some)
            } else {
                Ok(None)
            }
        };

        let glossary = async {
            if artifacts.glossary {
                self.api.generate_glossary(text, topic).await.map(Some)
            } else {
                Ok(None)
            }
        };

        // 任一失败立即返回，其余请求随之丢弃
        let (quiz, summary, glossary) = futures::try_join!(quiz, summary, glossary)?;

        Ok(StudySet {
            quiz,
            summary,
            glossary,
        })
    }

    /// 在会话上跑一轮完整的生成周期
    ///
    /// # 返回
    /// 结果被会话采纳时返回 `true`；已被更新一轮生成取代时返回 `false`
    pub async fn run_generation(
        &self,
        session: &mut StudySession,
        difficulty: Difficulty,
        artifacts: ArtifactSelection,
    ) -> bool {
        let ticket = session.begin_generation();
        let text = session.text().to_string();
        let topic = session.topic().to_string();

        let outcome = self
            .generate_study_set(&text, &topic, difficulty, artifacts)
            .await;

        session.complete_generation(ticket, outcome)
    }

    /// 上传会话中选定的 PDF，成功后把提取的文本作为学习材料
    ///
    /// 无论成功与否，选定的文件都会被清除
    pub async fn upload_selected_pdf(&self, session: &mut StudySession) -> StudyResult<()> {
        let result = match session.take_pending_pdf() {
            Some(path) => self.api.upload_pdf(&path).await,
            None => Err(StudyError::UploadFailed("No file selected".to_string())),
        };
        session.apply_upload(result)
    }
}
