//! 作答记录
//!
//! 每道题最多记录一次选择，第一次作答即为最终答案

use std::collections::HashMap;

use crate::models::QuestionId;

/// 题目 ID → 所选选项索引
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: HashMap<QuestionId, usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一次作答
    ///
    /// # 返回
    /// 该题已经作答过时不做任何修改并返回 `false`
    pub fn select_option(&mut self, question_id: QuestionId, index: usize) -> bool {
        if self.selected.contains_key(&question_id) {
            return false;
        }
        self.selected.insert(question_id, index);
        true
    }

    /// 已选择的选项索引
    pub fn selected(&self, question_id: QuestionId) -> Option<usize> {
        self.selected.get(&question_id).copied()
    }

    pub fn is_answered(&self, question_id: QuestionId) -> bool {
        self.selected.contains_key(&question_id)
    }

    pub fn answered_count(&self) -> usize {
        self.selected.len()
    }

    /// 新一轮生成开始时清空
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_selection_is_final() {
        let mut state = SelectionState::new();
        assert!(state.select_option(7, 2));
        assert!(!state.select_option(7, 0));
        assert_eq!(state.selected(7), Some(2));
    }

    #[test]
    fn test_questions_are_independent() {
        let mut state = SelectionState::new();
        state.select_option(1, 0);
        state.select_option(2, 3);
        assert_eq!(state.selected(1), Some(0));
        assert_eq!(state.selected(2), Some(3));
        assert!(!state.is_answered(3));
        assert_eq!(state.answered_count(), 2);
    }

    #[test]
    fn test_clear_allows_answering_again() {
        let mut state = SelectionState::new();
        state.select_option(1, 0);
        state.clear();
        assert!(!state.is_answered(1));
        assert!(state.select_option(1, 1));
        assert_eq!(state.selected(1), Some(1));
    }
}
