//! 题目展示状态
//!
//! 由题目 + 作答记录推导出每道题、每个选项的显示状态

use std::fmt;

use crate::models::{Question, QuestionId, QuizResult};
use crate::presenter::grading::{option_letter, resolve_correct_index};
use crate::presenter::selection::SelectionState;

/// 单个选项的显示状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    /// 尚未作答，可以选择
    Clickable,
    /// 已作答，这是正确选项
    Correct,
    /// 已作答，这是用户选错的选项
    Incorrect,
    /// 已作答，其他选项
    Disabled,
}

impl OptionState {
    fn marker(self) -> &'static str {
        match self {
            OptionState::Clickable => "  ",
            OptionState::Correct => "✅",
            OptionState::Incorrect => "❌",
            OptionState::Disabled => "· ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub letter: char,
    pub text: String,
    pub state: OptionState,
}

/// 单道题的显示状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// 题号（从 1 开始）
    pub number: usize,
    pub id: QuestionId,
    pub question: String,
    pub options: Vec<OptionView>,
    pub correct_index: Option<usize>,
    pub selected_index: Option<usize>,
    /// 只有作答后才有值
    pub is_correct: Option<bool>,
    pub answer: String,
    pub explanation: String,
}

impl QuestionView {
    /// 构建单道题的显示状态
    ///
    /// # 参数
    /// - `number`: 题号（从 1 开始）
    /// - `question`: 题目
    /// - `selections`: 当前作答记录
    pub fn build(number: usize, question: &Question, selections: &SelectionState) -> Self {
        let correct_index = resolve_correct_index(&question.options, &question.answer);
        let selected_index = selections.selected(question.id);
        let answered = selected_index.is_some();

        let options = question
            .options
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                let state = if !answered {
                    OptionState::Clickable
                } else if Some(idx) == correct_index {
                    OptionState::Correct
                } else if Some(idx) == selected_index {
                    OptionState::Incorrect
                } else {
                    OptionState::Disabled
                };
                OptionView {
                    letter: option_letter(idx),
                    text: text.clone(),
                    state,
                }
            })
            .collect();

        Self {
            number,
            id: question.id,
            question: question.question.clone(),
            options,
            correct_index,
            selected_index,
            is_correct: selected_index.map(|selected| Some(selected) == correct_index),
            answer: question.answer.clone(),
            explanation: question.explanation.clone(),
        }
    }

    pub fn is_answered(&self) -> bool {
        self.selected_index.is_some()
    }
}

impl fmt::Display for QuestionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Q{}  {}", self.number, self.question)?;
        for option in &self.options {
            writeln!(f, "  {} {}. {}", option.state.marker(), option.letter, option.text)?;
        }

        if let Some(is_correct) = self.is_correct {
            if is_correct {
                writeln!(f, "  ✅ Correct!")?;
            } else {
                writeln!(f, "  ❌ Incorrect.")?;
                writeln!(f, "  Correct answer: {}", self.answer)?;
            }
            writeln!(f, "  💡 {}", self.explanation)?;
        }

        Ok(())
    }
}

/// 当前测验的所有题目显示状态
pub fn quiz_views(quiz: &QuizResult, selections: &SelectionState) -> Vec<QuestionView> {
    quiz.questions
        .iter()
        .enumerate()
        .map(|(idx, question)| QuestionView::build(idx + 1, question, selections))
        .collect()
}

/// 得分统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub answered: usize,
    pub correct: usize,
    pub total: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} correct ({} of {} answered)",
            self.correct, self.total, self.answered, self.total
        )
    }
}

/// 统计当前测验得分
pub fn score(quiz: &QuizResult, selections: &SelectionState) -> Score {
    quiz_views(quiz, selections)
        .iter()
        .fold(
            Score {
                total: quiz.questions.len(),
                ..Default::default()
            },
            |mut score, view| {
                if view.is_answered() {
                    score.answered += 1;
                }
                if view.is_correct == Some(true) {
                    score.correct += 1;
                }
                score
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: QuestionId, answer: &str) -> Question {
        Question {
            id,
            question: "Which organelle produces ATP?".to_string(),
            options: vec![
                "Nucleus".to_string(),
                "Mitochondria".to_string(),
                "Ribosome".to_string(),
            ],
            answer: answer.to_string(),
            explanation: "Mitochondria run cellular respiration.".to_string(),
        }
    }

    #[test]
    fn test_unanswered_options_are_clickable() {
        let view = QuestionView::build(1, &question(1, "B. Mitochondria"), &SelectionState::new());
        assert!(view.options.iter().all(|o| o.state == OptionState::Clickable));
        assert_eq!(view.is_correct, None);
        assert_eq!(view.correct_index, Some(1));
    }

    #[test]
    fn test_wrong_selection_marks_states() {
        let mut selections = SelectionState::new();
        selections.select_option(1, 2);

        let view = QuestionView::build(1, &question(1, "B. Mitochondria"), &selections);
        let states: Vec<_> = view.options.iter().map(|o| o.state).collect();
        assert_eq!(
            states,
            vec![OptionState::Disabled, OptionState::Correct, OptionState::Incorrect]
        );
        assert_eq!(view.is_correct, Some(false));

        let rendered = view.to_string();
        assert!(rendered.contains("❌ Incorrect."));
        assert!(rendered.contains("Correct answer: B. Mitochondria"));
        assert!(rendered.contains("💡 Mitochondria run cellular respiration."));
    }

    #[test]
    fn test_right_selection() {
        let mut selections = SelectionState::new();
        selections.select_option(1, 1);

        let view = QuestionView::build(1, &question(1, "Mitochondria"), &selections);
        assert_eq!(view.is_correct, Some(true));
        assert!(view.to_string().contains("✅ Correct!"));
        assert!(!view.to_string().contains("Correct answer:"));
    }

    #[test]
    fn test_unresolvable_answer_highlights_nothing() {
        let mut selections = SelectionState::new();
        selections.select_option(1, 0);

        let view = QuestionView::build(1, &question(1, "Chloroplast"), &selections);
        assert_eq!(view.correct_index, None);
        assert_eq!(view.is_correct, Some(false));
        assert!(view.options.iter().all(|o| o.state != OptionState::Correct));
    }

    #[test]
    fn test_score() {
        let quiz = QuizResult {
            topic: "Cells".to_string(),
            questions: vec![question(1, "B. Mitochondria"), question(2, "Nucleus"), question(3, "C. Ribosome")],
        };
        let mut selections = SelectionState::new();
        selections.select_option(1, 1);
        selections.select_option(2, 2);

        let score = score(&quiz, &selections);
        assert_eq!(
            score,
            Score {
                answered: 2,
                correct: 1,
                total: 3
            }
        );
        assert_eq!(score.to_string(), "1/3 correct (2 of 3 answered)");
    }
}
