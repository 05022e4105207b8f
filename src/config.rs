use crate::models::Difficulty;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 生成服务地址
    pub api_base_url: String,
    /// 单个请求超时（秒）
    pub request_timeout_secs: u64,
    /// 题目难度
    pub difficulty: Difficulty,
    /// 题目数量
    pub num_questions: u32,
    /// 是否同时生成摘要
    pub include_summary: bool,
    /// 是否同时生成术语表
    pub include_glossary: bool,
    /// 学习材料文件（.txt 或 .pdf）
    pub input_file: Option<PathBuf>,
    /// 学习主题
    pub topic: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_secs: 120,
            difficulty: Difficulty::Medium,
            num_questions: 5,
            include_summary: false,
            include_glossary: false,
            input_file: None,
            topic: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 优先读取 `STUDY_CONFIG` 指向的 TOML 文件，否则读取环境变量
    pub fn load() -> Result<Self> {
        match std::env::var("STUDY_CONFIG") {
            Ok(path) => Self::from_toml_file(Path::new(&path)),
            Err(_) => Ok(Self::from_env()),
        }
    }

    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("STUDY_API_BASE_URL").unwrap_or(default.api_base_url),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            difficulty: std::env::var("QUIZ_DIFFICULTY").ok().and_then(|v| v.parse().ok()).unwrap_or(default.difficulty),
            num_questions: std::env::var("QUIZ_NUM_QUESTIONS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.num_questions),
            include_summary: std::env::var("INCLUDE_SUMMARY").ok().and_then(|v| v.parse().ok()).unwrap_or(default.include_summary),
            include_glossary: std::env::var("INCLUDE_GLOSSARY").ok().and_then(|v| v.parse().ok()).unwrap_or(default.include_glossary),
            input_file: std::env::var("STUDY_INPUT_FILE").ok().map(PathBuf::from).or(default.input_file),
            topic: std::env::var("STUDY_TOPIC").ok().or(default.topic),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 从 TOML 文件加载配置，缺省字段使用默认值
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_points_at_local_backend() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "http://127.0.0.1:8000");
        assert_eq!(config.num_questions, 5);
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert!(!config.include_summary);
    }

    #[test]
    fn test_toml_file_fills_missing_fields_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "topic = \"French Revolution\"\ndifficulty = \"hard\"\ninclude_glossary = true"
        )
        .unwrap();

        let config = Config::from_toml_file(file.path()).unwrap();
        assert_eq!(config.topic.as_deref(), Some("French Revolution"));
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert!(config.include_glossary);
        assert_eq!(config.request_timeout_secs, 120);
    }

    #[test]
    fn test_toml_file_missing() {
        let result = Config::from_toml_file(Path::new("/nonexistent/study.toml"));
        assert!(result.is_err());
    }
}
