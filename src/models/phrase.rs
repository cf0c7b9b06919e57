use serde::Deserialize;

/// 单条练习短语
#[derive(Debug, Clone, Deserialize)]
pub struct PracticePhrase {
    /// 待分析的文本
    pub text: String,
    /// 语言标签（可选，缺省使用配置的默认语言）
    #[serde(default)]
    pub lang: Option<String>,
}

/// 一组练习短语（对应一个 TOML 文件）
#[derive(Debug, Clone, Deserialize)]
pub struct PracticeSet {
    /// 练习集标题
    pub title: String,
    /// 短语列表
    #[serde(default)]
    pub phrases: Vec<PracticePhrase>,
    /// 来源文件路径（加载后填充）
    #[serde(skip)]
    pub file_path: Option<String>,
}
