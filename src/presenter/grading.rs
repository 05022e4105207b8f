//! 答案判定
//!
//! 纯函数：正确选项只由 (options, answer) 决定，与渲染次数无关

/// 第 `index` 个选项的字母标签（0 → 'A'，1 → 'B' ...）
pub fn option_letter(index: usize) -> char {
    u32::try_from(index)
        .ok()
        .and_then(|i| char::from_u32(u32::from(b'A') + i))
        .unwrap_or('?')
}

/// 带字母标签的选项文本，例如 `"B. Mitochondria"`
pub fn labeled_option(index: usize, option: &str) -> String {
    format!("{}. {}", option_letter(index), option)
}

/// 根据答案文本找出正确选项的索引
///
/// 满足以下任一条件即视为正确：
/// - 带标签的选项与答案完全相同
/// - 选项原文与答案完全相同
/// - 带标签的选项与答案在去除首尾空白后相同
///
/// # 返回
/// 第一个匹配的索引；没有匹配时返回 `None`（不高亮任何选项）
pub fn resolve_correct_index<S: AsRef<str>>(options: &[S], answer: &str) -> Option<usize> {
    options.iter().enumerate().find_map(|(index, option)| {
        let option = option.as_ref();
        let labeled = labeled_option(index, option);
        let matched = labeled == answer || option == answer || labeled.trim() == answer.trim();
        matched.then_some(index)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> Vec<String> {
        vec![
            "Nucleus".to_string(),
            "Mitochondria".to_string(),
            "Ribosome".to_string(),
            "Golgi apparatus".to_string(),
        ]
    }

    #[test]
    fn test_option_letter() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(1), 'B');
        assert_eq!(option_letter(25), 'Z');
    }

    #[test]
    fn test_bare_answer_matches_each_position() {
        let options = opts();
        for (k, option) in options.iter().enumerate() {
            assert_eq!(resolve_correct_index(&options, option), Some(k));
        }
    }

    #[test]
    fn test_labeled_answer_matches_each_position() {
        let options = opts();
        for (k, option) in options.iter().enumerate() {
            let answer = format!("{}. {}", option_letter(k), option);
            assert_eq!(resolve_correct_index(&options, &answer), Some(k));
        }
    }

    #[test]
    fn test_labeled_answer_with_surrounding_whitespace() {
        let options = opts();
        assert_eq!(resolve_correct_index(&options, "  C. Ribosome \n"), Some(2));
    }

    #[test]
    fn test_wrong_letter_does_not_match() {
        let options = opts();
        assert_eq!(resolve_correct_index(&options, "A. Mitochondria"), None);
    }

    #[test]
    fn test_unmatched_answer_is_none() {
        let options = opts();
        assert_eq!(resolve_correct_index(&options, "Chloroplast"), None);
        assert_eq!(resolve_correct_index(&options, "B"), None);
        assert_eq!(resolve_correct_index::<String>(&[], "A. Nucleus"), None);
    }

    #[test]
    fn test_first_match_wins_on_duplicates() {
        let options = ["Yes", "No", "Yes"];
        assert_eq!(resolve_correct_index(&options, "Yes"), Some(0));
        assert_eq!(resolve_correct_index(&options, "C. Yes"), Some(2));
    }

    #[test]
    fn test_resolution_is_stable() {
        let options = opts();
        let first = resolve_correct_index(&options, "D. Golgi apparatus");
        for _ in 0..3 {
            assert_eq!(resolve_correct_index(&options, "D. Golgi apparatus"), first);
        }
    }
}
