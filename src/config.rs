/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 推理服务地址
    pub predict_api_base_url: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            predict_api_base_url: "http://127.0.0.1:8000".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            predict_api_base_url: std::env::var("PREDICT_API_BASE_URL").unwrap_or(default.predict_api_base_url),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
