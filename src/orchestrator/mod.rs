//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `study_set` - 学习集生成器
//! - 校验输入（文本、主题）
//! - 并发发出测验/摘要/术语表请求，任一失败即整体失败
//! - PDF 上传后把提取的文本写回会话
//!
//! ### `session` - 学习会话
//! - 持有输入、当前学习集、作答记录、错误信息
//! - 用递增的生成轮次标记丢弃过期结果
//!
//! ## 层次关系
//!
//! ```text
//! app (终端适配)
//!     ↓
//! orchestrator (生成周期 + 会话状态)
//!     ↓
//! services::StudyApi (单个接口调用 + 失败映射)      presenter (判定 / 作答 / 显示状态)
//!     ↓
//! clients::Transport (HTTP)
//! ```

pub mod session;
pub mod study_set;

pub use session::{GenerationTicket, StudySession};
pub use study_set::StudySetOrchestrator;
