use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub argon2: Argon2Config,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub cors: CorsConfig,
    #[serde(default)]
    pub gradebook: GradebookConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub unix_socket_path: String,
    pub workers: usize,
    pub max_workers: usize,
    pub timeouts: TimeoutConfig,
    pub limits: LimitConfig,
}

/// 超时配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub client_request: u64,
    pub client_disconnect: u64,
    pub keep_alive: u64,
}

/// 限制配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    pub max_payload_size: usize,
}

/// JWT 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub secret: String,
    pub access_token_expiry: i64, // 分钟
}

/// Argon2 参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argon2Config {
    pub memory_cost: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,    // 数据库连接 URL（从 scheme 自动推断类型）
    pub pool_size: u32, // 连接池大小
    pub timeout: u64,   // 连接超时 (秒)
}

/// 会话缓存配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub default_ttl: u64,
    pub max_capacity: u64,
}

/// CORS 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub max_age: usize,
}

/// 成绩册初始化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradebookConfig {
    pub term_names: Vec<String>,
    pub assessment_periods: Vec<String>,
    pub default_assessment_system: DefaultAssessmentSystemConfig,
}

/// 默认评估体系（不存在时按此创建）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultAssessmentSystemConfig {
    pub name: String,
    pub kind: String,
    pub min_score: f64,
    pub max_score: f64,
    pub passing_score: f64,
}

/// 统计分析配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// 迟到是否计为出勤
    pub late_counts_as_present: bool,
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            term_names: vec![
                "Term 1".to_string(),
                "Term 2".to_string(),
                "Term 3".to_string(),
            ],
            assessment_periods: vec!["Mid-term".to_string(), "End of term".to_string()],
            default_assessment_system: DefaultAssessmentSystemConfig::default(),
        }
    }
}

impl Default for DefaultAssessmentSystemConfig {
    fn default() -> Self {
        Self {
            name: "Percentage".to_string(),
            kind: "percentage".to_string(),
            min_score: 0.0,
            max_score: 100.0,
            passing_score: 50.0,
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            late_counts_as_present: true,
        }
    }
}
