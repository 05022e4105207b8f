//! 学习会话
//!
//! 持有一次使用过程中的全部界面状态：输入、当前学习集、作答记录、错误。
//! 状态只在单一逻辑线程中同步修改。
//!
//! 每轮生成都会领取一个递增的 `GenerationTicket`，只有最新一轮的结果
//! 会被采纳，较慢的旧请求返回后直接丢弃。

use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{ErrorInfo, StudyResult};
use crate::models::{PdfExtraction, QuestionId, StudySet};
use crate::presenter::{quiz_views, score, QuestionView, Score, SelectionState};

/// 生成轮次标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GenerationTicket(u64);

/// 学习会话
///
/// `StudySetOrchestrator::run_generation` 在等待期间独占会话，同一时刻只有一轮。
/// 需要让多轮生成重叠的调用方，自行分别调用 `begin_generation` 和 `complete_generation`。
#[derive(Debug, Default)]
pub struct StudySession {
    text: String,
    topic: String,
    pending_pdf: Option<PathBuf>,
    latest_ticket: u64,
    loading: bool,
    study_set: Option<StudySet>,
    selections: SelectionState,
    error: Option<ErrorInfo>,
}

impl StudySession {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== 输入 ==========

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// 选定待上传的 PDF
    pub fn select_pdf(&mut self, path: impl Into<PathBuf>) {
        self.pending_pdf = Some(path.into());
    }

    /// 取出待上传的 PDF，同时清除选定状态
    pub fn take_pending_pdf(&mut self) -> Option<PathBuf> {
        self.pending_pdf.take()
    }

    pub fn pending_pdf(&self) -> Option<&PathBuf> {
        self.pending_pdf.as_ref()
    }

    /// 记录上传结果：成功时用提取的文本替换学习材料，失败时记录错误
    pub fn apply_upload(&mut self, result: StudyResult<PdfExtraction>) -> StudyResult<()> {
        match result {
            Ok(extraction) => {
                info!("✓ 已载入 PDF 文本 ({} 页)", extraction.page_count);
                self.text = extraction.extracted_text;
                self.error = None;
                Ok(())
            }
            Err(err) => {
                self.error = Some(ErrorInfo::from(&err));
                Err(err)
            }
        }
    }

    // ========== 生成周期 ==========

    /// 开始新一轮生成：清空旧结果、作答记录和错误
    pub fn begin_generation(&mut self) -> GenerationTicket {
        self.latest_ticket += 1;
        self.loading = true;
        self.study_set = None;
        self.selections.clear();
        self.error = None;

        debug!("开始第 {} 轮生成", self.latest_ticket);
        GenerationTicket(self.latest_ticket)
    }

    /// 结束一轮生成
    ///
    /// # 返回
    /// 结果被采纳时返回 `true`；该轮已被更新的一轮取代时丢弃结果并返回 `false`
    pub fn complete_generation(
        &mut self,
        ticket: GenerationTicket,
        outcome: StudyResult<StudySet>,
    ) -> bool {
        if ticket.0 != self.latest_ticket {
            warn!(
                "⚠️ 丢弃过期的第 {} 轮结果（当前第 {} 轮）",
                ticket.0, self.latest_ticket
            );
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(study_set) => {
                self.study_set = Some(study_set);
                self.error = None;
            }
            Err(err) => {
                warn!("⚠️ 生成失败: {}", err);
                self.study_set = None;
                self.error = Some(ErrorInfo::from(&err));
            }
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn study_set(&self) -> Option<&StudySet> {
        self.study_set.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        self.error.as_ref()
    }

    // ========== 作答 ==========

    /// 记录作答
    ///
    /// 题目不存在、选项越界或该题已作答时不做任何修改，返回 `false`
    pub fn select_option(&mut self, question_id: QuestionId, index: usize) -> bool {
        let Some(question) = self
            .study_set
            .as_ref()
            .and_then(|set| set.quiz.question(question_id))
        else {
            return false;
        };

        if index >= question.options.len() {
            return false;
        }

        self.selections.select_option(question_id, index)
    }

    pub fn selections(&self) -> &SelectionState {
        &self.selections
    }

    /// 当前测验每道题的显示状态
    pub fn question_views(&self) -> Vec<QuestionView> {
        self.study_set
            .as_ref()
            .map(|set| quiz_views(&set.quiz, &self.selections))
            .unwrap_or_default()
    }

    pub fn score(&self) -> Score {
        self.study_set
            .as_ref()
            .map(|set| score(&set.quiz, &self.selections))
            .unwrap_or_default()
    }
}
