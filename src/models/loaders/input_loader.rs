use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 学习材料来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudyInput {
    /// 直接可用的文本
    Text(String),
    /// 需要先上传解析的 PDF
    Pdf(PathBuf),
}

/// 是否为 PDF 文件
///
/// 与服务端一致，只接受小写的 `.pdf` 扩展名
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext == "pdf")
}

/// 加载学习材料
///
/// # 参数
/// - `path`: 文本文件或 PDF 文件路径
///
/// # 返回
/// 文本文件直接读取内容；PDF 只返回路径，交给上传接口解析
pub async fn load_study_input(path: &Path) -> Result<StudyInput> {
    if !path.exists() {
        anyhow::bail!("文件不存在: {}", path.display());
    }

    if is_pdf(path) {
        tracing::info!(
            "检测到 PDF 文件: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );
        return Ok(StudyInput::Pdf(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取文本文件: {}", path.display()))?;

    tracing::info!("成功加载 {} 个字符的学习材料", content.chars().count());

    Ok(StudyInput::Text(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_text_file() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "Photosynthesis converts light into chemical energy.").unwrap();

        let input = load_study_input(file.path()).await.unwrap();
        assert_eq!(
            input,
            StudyInput::Text("Photosynthesis converts light into chemical energy.".to_string())
        );
    }

    #[tokio::test]
    async fn test_pdf_is_not_read_locally() {
        let file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();

        let input = load_study_input(file.path()).await.unwrap();
        assert_eq!(input, StudyInput::Pdf(file.path().to_path_buf()));
    }

    #[test]
    fn test_is_pdf_requires_lowercase_extension() {
        assert!(is_pdf(Path::new("notes/chapter.pdf")));
        assert!(!is_pdf(Path::new("notes/chapter.PDF")));
        assert!(!is_pdf(Path::new("notes/chapter.Pdf")));
        assert!(!is_pdf(Path::new("notes/chapter.txt")));
        assert!(!is_pdf(Path::new("notes/pdf")));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = load_study_input(Path::new("/nonexistent/notes.txt")).await;
        assert!(result.is_err());
    }
}
