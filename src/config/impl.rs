use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::{AppConfig, GradebookConfig};
use crate::models::gradebooks::entities::AssessmentKind;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

// 直接映射到配置键的常用环境变量
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("app.environment", "APP_ENV"),
    ("app.log_level", "RUST_LOG"),
    ("server.host", "SERVER_HOST"),
    ("server.port", "SERVER_PORT"),
    ("server.unix_socket_path", "UNIX_SOCKET"),
    ("server.workers", "CPU_COUNT"),
    ("jwt.secret", "JWT_SECRET"),
    ("database.url", "DATABASE_URL"),
];

impl AppConfig {
    /// 按 `config.toml` → `config.{APP_ENV}.toml` → 环境变量的顺序合并配置
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name(&format!("config.{environment}")).required(false))
            .add_source(
                Environment::with_prefix("SCHOOL")
                    .separator("__")
                    .try_parsing(true),
            );

        for (key, var) in ENV_OVERRIDES {
            builder = builder.set_override_option(*key, std::env::var(var).ok())?;
        }

        let mut app_config: AppConfig = builder.build()?.try_deserialize()?;

        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        app_config.validate()?;
        Ok(app_config)
    }

    /// 获取全局配置实例，加载失败时直接退出
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 启动时显式初始化，便于把错误交给调用方处理
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.is_empty() {
            return Err(ConfigError::Message(
                "jwt.secret must be set (config file or JWT_SECRET)".to_string(),
            ));
        }
        if self.jwt.access_token_expiry <= 0 {
            return Err(ConfigError::Message(
                "jwt.access_token_expiry must be positive".to_string(),
            ));
        }
        self.gradebook.validate().map_err(ConfigError::Message)
    }

    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        Some(self.server.unix_socket_path.as_str()).filter(|path| !path.is_empty())
    }
}

impl GradebookConfig {
    /// 成绩册初始化至少需要一个学期和一个评估阶段，默认评估体系的分数区间必须有效
    pub fn validate(&self) -> Result<(), String> {
        if self.term_names.iter().all(|name| name.trim().is_empty()) {
            return Err("gradebook.term_names must contain at least one term".to_string());
        }
        if self
            .assessment_periods
            .iter()
            .all(|name| name.trim().is_empty())
        {
            return Err(
                "gradebook.assessment_periods must contain at least one period".to_string(),
            );
        }

        let system = &self.default_assessment_system;
        if system.name.trim().is_empty() {
            return Err("gradebook.default_assessment_system.name is empty".to_string());
        }
        if let Err(e) = system.kind.parse::<AssessmentKind>() {
            return Err(format!("gradebook.default_assessment_system.kind: {e}"));
        }
        if system.min_score >= system.max_score {
            return Err(format!(
                "gradebook.default_assessment_system: min_score {} must be below max_score {}",
                system.min_score, system.max_score
            ));
        }
        if !(system.min_score..=system.max_score).contains(&system.passing_score) {
            return Err(format!(
                "gradebook.default_assessment_system: passing_score {} is outside [{}, {}]",
                system.passing_score, system.min_score, system.max_score
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gradebook_config_is_valid() {
        assert!(GradebookConfig::default().validate().is_ok());
    }

    #[test]
    fn test_gradebook_config_rejects_empty_terms() {
        let mut config = GradebookConfig::default();
        config.term_names = vec!["  ".to_string()];
        assert!(config.validate().unwrap_err().contains("term_names"));

        let mut config = GradebookConfig::default();
        config.assessment_periods.clear();
        assert!(config.validate().unwrap_err().contains("assessment_periods"));
    }

    #[test]
    fn test_gradebook_config_rejects_unknown_kind() {
        let mut config = GradebookConfig::default();
        config.default_assessment_system.kind = "stars".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("kind"));
        assert!(err.contains("stars"));

        config.default_assessment_system.kind = "letter".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_gradebook_config_rejects_bad_score_range() {
        let mut config = GradebookConfig::default();
        config.default_assessment_system.min_score = 100.0;
        assert!(config.validate().unwrap_err().contains("min_score"));

        let mut config = GradebookConfig::default();
        config.default_assessment_system.passing_score = 120.0;
        assert!(config.validate().unwrap_err().contains("passing_score"));
    }
}
