/// 学习语言枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Language {
    /// 英语
    English,
    /// 西班牙语
    Spanish,
}

impl Language {
    /// 获取语言标签（请求载荷中的 lang 字段）
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    /// 获取语音识别区域标签
    pub fn speech_locale(self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Spanish => "es-ES",
        }
    }

    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
        }
    }

    /// 获取母语名称
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
        }
    }

    /// 从标签解析语言（精确匹配）
    pub fn from_tag(s: &str) -> Option<Self> {
        match s {
            "en" | "en-US" => Some(Language::English),
            "es" | "es-ES" => Some(Language::Spanish),
            _ => None,
        }
    }

    /// 智能查找语言（支持模糊匹配）
    pub fn find(s: &str) -> Option<Self> {
        // 先尝试精确匹配
        if let Some(language) = Self::from_tag(s) {
            return Some(language);
        }

        // 模糊匹配
        let s_lower = s.to_lowercase();
        if s_lower.contains("english") || s_lower.starts_with("en") {
            return Some(Language::English);
        }
        if s_lower.contains("spanish") || s_lower.contains("español") || s_lower.starts_with("es") {
            return Some(Language::Spanish);
        }

        None
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
