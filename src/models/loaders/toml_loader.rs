use crate::models::phrase::PracticeSet;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载数据并转换为 PracticeSet 对象
pub async fn load_phrase_set(toml_file_path: &Path) -> Result<PracticeSet> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", toml_file_path.display()))?;

    let mut set: PracticeSet = toml::from_str(&content)
        .with_context(|| format!("无法解析TOML文件: {}", toml_file_path.display()))?;

    // 设置文件路径
    set.file_path = Some(toml_file_path.to_string_lossy().to_string());

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loads_phrase_set_from_toml() {
        let dir = std::env::temp_dir();
        let path = dir.join("tutorium_scorer_phrase_loader_test.toml");
        let content = r#"
title = "Greetings"

[[phrases]]
text = "Hello, how are you today?"

[[phrases]]
text = "¿Cómo estás?"
lang = "es"
"#;
        tokio::fs::write(&path, content).await.unwrap();

        let set = load_phrase_set(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(set.title, "Greetings");
        assert_eq!(set.phrases.len(), 2);
        assert_eq!(set.phrases[1].lang.as_deref(), Some("es"));
        assert!(set.file_path.is_some());
    }
}
