//! 统一配置中心
//!
//! 提供客户端的全局配置管理，包括：
//! - 应用与品牌信息
//! - SDK 接入参数
//! - 语言、限流、通知和事件通道设置
//!
//! 加载顺序：默认值 -> 可选 YAML 文件（GLIP_CONFIG_FILE）-> 环境变量（GLIP_*，嵌套字段用 `__` 分隔）

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 配置文件路径环境变量
pub const CONFIG_FILE_ENV: &str = "GLIP_CONFIG_FILE";
/// 环境变量前缀
pub const ENV_PREFIX: &str = "GLIP_";

/// 全局应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// 应用信息
    #[validate(nested)]
    pub app: AppInfo,
    /// 品牌配置
    #[validate(nested)]
    pub brand: BrandConfig,
    /// SDK 接入配置
    #[validate(nested)]
    pub api: ApiConfig,
    /// 本地缓存键前缀
    #[validate(length(min = 1))]
    pub prefix: String,
    /// OAuth 回调地址
    #[validate(url)]
    pub redirect_uri: String,
    /// 登录页样式表地址
    #[serde(default)]
    pub styles_uri: Option<String>,
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default)]
    #[validate(nested)]
    pub rate_limiter: RateLimiterConfig,
    #[serde(default)]
    #[validate(nested)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    #[validate(nested)]
    pub events: EventConfig,
}

/// 应用名称和版本
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppInfo {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub version: String,
}

/// 品牌配置
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BrandConfig {
    #[validate(length(min = 1))]
    pub app_name: String,
    pub brand_id: String,
}

/// SDK 接入配置
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApiConfig {
    pub app_key: String,
    pub app_secret: String,
    #[validate(url)]
    pub server: String,
}

/// 语言配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub default_locale: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_locale: "en-US".to_string(),
        }
    }
}

/// 限流配置
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RateLimiterConfig {
    /// 触发限流后的冷却时间（秒），最长一天
    #[validate(range(min = 1, max = 86400))]
    pub throttle_duration_secs: u64,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            throttle_duration_secs: 61,
        }
    }
}

/// 桌面通知配置
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NotificationConfig {
    /// 保留点击回调的通知数量上限
    #[validate(range(min = 1))]
    pub max_pending: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { max_pending: 50 }
    }
}

/// 事件通道配置
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EventConfig {
    #[validate(range(min = 1))]
    pub channel_capacity: usize,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
        }
    }
}

/// 交给 SDK 客户端的参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkConfig {
    pub app_key: String,
    pub app_secret: String,
    pub server: String,
    pub cache_prefix: String,
    pub clear_cache_on_refresh_error: bool,
}

impl Default for AppConfig {
    /// 默认配置只适合本地开发
    fn default() -> Self {
        Self {
            app: AppInfo {
                name: "Glip".into(),
                version: "0.1.0".into(),
            },
            brand: BrandConfig {
                app_name: "Glip".into(),
                brand_id: "1210".into(),
            },
            api: ApiConfig {
                app_key: String::new(),
                app_secret: String::new(),
                server: "https://platform.devtest.ringcentral.com".into(),
            },
            prefix: "glip".into(),
            redirect_uri: "http://localhost:8080/redirect.html".into(),
            styles_uri: None,
            locale: LocaleConfig::default(),
            rate_limiter: RateLimiterConfig::default(),
            notifications: NotificationConfig::default(),
            events: EventConfig::default(),
        }
    }
}

impl AppConfig {
    /// 按优先级加载：默认值 -> 可选配置文件 -> 环境变量
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Self::defaults();
        if let Ok(path) = std::env::var(CONFIG_FILE_ENV) {
            figment = figment.merge(Yaml::file(path));
        }
        let config: AppConfig = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.validate_all()?;
        Ok(config)
    }

    /// 在默认值之上解析 YAML 字符串
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = Self::defaults().merge(Yaml::string(source)).extract()?;
        config.validate_all()?;
        Ok(config)
    }

    fn defaults() -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
    }

    /// 验证配置有效性
    pub fn validate_all(&self) -> Result<(), ConfigError> {
        self.validate()?;
        if self.api.app_secret.is_empty() != self.api.app_key.is_empty() {
            return Err(ConfigError::Invalid(
                "api.app_key and api.app_secret must be set together".to_string(),
            ));
        }
        Ok(())
    }

    /// 派生 SDK 客户端参数
    pub fn sdk_config(&self) -> SdkConfig {
        SdkConfig {
            app_key: self.api.app_key.clone(),
            app_secret: self.api.app_secret.clone(),
            server: self.api.server.clone(),
            cache_prefix: format!("sdk-{}", self.prefix),
            clear_cache_on_refresh_error: false,
        }
    }

    /// 脱敏后的字符串表示（用于日志）
    pub fn sanitize(&self) -> String {
        let mut redacted = self.clone();
        if !redacted.api.app_secret.is_empty() {
            redacted.api.app_secret = "[REDACTED]".to_string();
        }
        format!("{redacted:?}")
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Figment(#[from] figment::Error),
    #[error("invalid configuration: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
