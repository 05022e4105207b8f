use serde::{Deserialize, Serialize};

use crate::models::question::QuizResult;

/// 学习摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub topic: String,
    pub summary: String,
}

/// 术语条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    pub term: String,
    pub definition: String,
}

/// 术语表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glossary {
    pub topic: String,
    pub terms: Vec<GlossaryTerm>,
}

/// PDF 文本提取结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfExtraction {
    #[serde(default)]
    pub success: bool,
    pub extracted_text: String,
    #[serde(default)]
    pub page_count: u32,
}

/// 除测验外还需要生成哪些内容
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArtifactSelection {
    pub summary: bool,
    pub glossary: bool,
}

impl ArtifactSelection {
    /// 只生成测验
    pub fn quiz_only() -> Self {
        Self::default()
    }

    /// 测验 + 摘要 + 术语表
    pub fn full_suite() -> Self {
        Self {
            summary: true,
            glossary: true,
        }
    }
}

/// 一次生成周期的完整结果
///
/// 所有请求都成功时才会产生，不存在部分结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudySet {
    pub quiz: QuizResult,
    pub summary: Option<Summary>,
    pub glossary: Option<Glossary>,
}
