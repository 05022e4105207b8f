//! # Study Set Client
//!
//! AI 学习助手的客户端：提交学习材料和主题，获取 AI 生成的测验、摘要和术语表，
//! 并在终端中逐题作答、即时判定。
//!
//! ## 架构设计
//!
//! ### ① 传输层（Clients）
//! - `clients/` - 只负责把请求发出去、把状态码和响应体拿回来
//! - `Transport` - 传输接口，测试中可替换
//! - `HttpTransport` - 基于 reqwest 的实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能生成什么"，一次只调用一个接口
//! - `StudyApi` - 测验 / 摘要 / 术语表 / PDF 上传，负责响应校验和失败映射
//!
//! ### ③ 展示层（Presenter）
//! - `presenter/` - 纯函数和纯状态，不做任何 IO
//! - `resolve_correct_index` - 答案判定
//! - `SelectionState` - 作答记录
//! - `QuestionView` - 显示状态
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/study_set` - 输入校验 + 并发请求 + 全有或全无
//! - `orchestrator/session` - 会话状态 + 生成轮次标记
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod presenter;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use clients::{HttpTransport, RawResponse, Transport};
pub use config::Config;
pub use error::{ErrorInfo, StudyError, StudyResult};
pub use models::{ArtifactSelection, Difficulty, Question, QuizResult, StudySet};
pub use orchestrator::{GenerationTicket, StudySession, StudySetOrchestrator};
pub use presenter::{resolve_correct_index, SelectionState};
pub use services::StudyApi;
