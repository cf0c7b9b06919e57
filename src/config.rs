/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 评分后端基础 URL
    pub api_base_url: String,
    /// 默认分析语言（"en" / "es"）
    pub default_lang: String,
    /// 单次请求超时（秒），超时判定完全委托给传输层
    pub request_timeout_secs: u64,
    /// 指纹去重窗口（秒），窗口内同一文本不再受理
    pub duplicate_ttl_secs: u64,
    /// 历史表格展示条数
    pub history_display_limit: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 练习短语 TOML 文件路径
    pub phrases_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            default_lang: "en".to_string(),
            request_timeout_secs: 10,
            duplicate_ttl_secs: 30,
            history_display_limit: 10,
            verbose_logging: false,
            phrases_file: "phrases.toml".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("API_BASE_URL").unwrap_or(default.api_base_url),
            default_lang: std::env::var("DEFAULT_LANG").unwrap_or(default.default_lang),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            duplicate_ttl_secs: std::env::var("DUPLICATE_TTL_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.duplicate_ttl_secs),
            history_display_limit: std::env::var("HISTORY_DISPLAY_LIMIT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.history_display_limit),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            phrases_file: std::env::var("PHRASES_FILE").unwrap_or(default.phrases_file),
        }
    }
}
