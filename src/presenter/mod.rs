//! 展示层（Presenter）
//!
//! - `grading` - 答案判定，纯函数
//! - `selection` - 作答记录，首次作答即最终答案
//! - `view` - 由题目和作答记录推导出显示状态
//! - `command` - 终端命令解析

pub mod command;
pub mod grading;
pub mod selection;
pub mod view;

pub use command::{Command, CommandParser, HELP_TEXT};
pub use grading::{labeled_option, option_letter, resolve_correct_index};
pub use selection::SelectionState;
pub use view::{quiz_views, score, OptionState, OptionView, QuestionView, Score};
