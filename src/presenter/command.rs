//! 终端命令解析

use anyhow::Result;
use regex::Regex;

/// 终端输入的命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 回答第 `number` 题（从 1 开始），选择 `option_index`（从 0 开始）
    Answer { number: usize, option_index: usize },
    /// 显示得分
    Score,
    /// 重新生成
    Regenerate,
    /// 显示帮助
    Help,
    /// 退出
    Quit,
}

pub const HELP_TEXT: &str = "Commands: <n> <letter> answer question n (e.g. `2 B`), s score, r regenerate, h help, q quit";

/// 终端命令解析器
///
/// 作答格式的正则只在创建时编译一次
#[derive(Debug, Clone)]
pub struct CommandParser {
    answer_re: Regex,
}

impl CommandParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            answer_re: Regex::new(r"^(\d+)\s*[.:)]?\s*([A-Za-z])\.?$")?,
        })
    }

    /// 解析一行输入
    ///
    /// # 返回
    /// 无法识别时返回 `None`
    pub fn parse(&self, line: &str) -> Option<Command> {
        let line = line.trim();

        match line.to_ascii_lowercase().as_str() {
            "s" | "score" => Some(Command::Score),
            "r" | "regenerate" => Some(Command::Regenerate),
            "h" | "help" | "?" => Some(Command::Help),
            "q" | "quit" | "exit" => Some(Command::Quit),
            _ => self.answer_re.captures(line).and_then(|caps| {
                let number = caps[1].parse::<usize>().ok().filter(|n| *n > 0)?;
                let letter = caps[2].chars().next()?.to_ascii_uppercase();
                Some(Command::Answer {
                    number,
                    option_index: usize::from(letter as u8 - b'A'),
                })
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> CommandParser {
        CommandParser::new().unwrap()
    }

    #[test]
    fn test_parse_answer_forms() {
        let expected = Some(Command::Answer {
            number: 2,
            option_index: 1,
        });
        assert_eq!(parser().parse("2 B"), expected);
        assert_eq!(parser().parse("2b"), expected);
        assert_eq!(parser().parse("  2. b. "), expected);
        assert_eq!(parser().parse("2) B"), expected);
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parser().parse("s"), Some(Command::Score));
        assert_eq!(parser().parse("R"), Some(Command::Regenerate));
        assert_eq!(parser().parse("quit"), Some(Command::Quit));
        assert_eq!(parser().parse("?"), Some(Command::Help));
    }

    #[test]
    fn test_parser_is_reusable_across_lines() {
        let parser = parser();
        let lines = ["1 A", "2 c", "s", "3 B"];
        let parsed: Vec<_> = lines.iter().map(|line| parser.parse(line)).collect();
        assert_eq!(
            parsed,
            vec![
                Some(Command::Answer { number: 1, option_index: 0 }),
                Some(Command::Answer { number: 2, option_index: 2 }),
                Some(Command::Score),
                Some(Command::Answer { number: 3, option_index: 1 }),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parser().parse(""), None);
        assert_eq!(parser().parse("0 A"), None);
        assert_eq!(parser().parse("B 2"), None);
        assert_eq!(parser().parse("2 BB"), None);
    }
}
