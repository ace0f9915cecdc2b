use std::path::PathBuf;

use crate::reports::{IntegrityPolicies, IntegrityPolicy};

/// 服务器配置 - HR 记录服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量 (或 `.env`) 覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./hr-data | 工作目录 (数据库、日志) |
/// | DATABASE_PATH | WORK_DIR/database/hr.db | SQLite 文件, `:memory:` 为内存库 |
/// | HTTP_PORT | 5000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | production 时为 true | JSON 日志 |
/// | LOG_RETENTION_DAYS | 14 | 日志保留天数 |
/// | RATE_LIMIT_REQUESTS | 200 | 每个窗口每个 IP 的请求数 |
/// | RATE_LIMIT_WINDOW_SECS | 60 | 限流窗口 (秒) |
/// | GENERATOR_RESET | true | 生成数据前是否清空 |
/// | RATING_POLICY | tolerant | 评分越界处理策略 |
/// | ORPHAN_POLICY | strict | 孤立薪资记录处理策略 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/hr HTTP_PORT=8080 cargo run -p hr-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日志等文件
    pub work_dir: String,
    /// Explicit database file; `None` means `database_dir()/hr.db`
    pub database_path: Option<String>,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_retention_days: u64,
    /// Requests allowed per client IP per window
    pub rate_limit_requests: u32,
    pub rate_limit_window_secs: u64,
    /// Default for `/generate-data` when no `reset` flag is given
    pub generator_reset: bool,
    pub policies: IntegrityPolicies,
}

/// In-memory database marker accepted by `DATABASE_PATH`
pub const IN_MEMORY_DATABASE: &str = ":memory:";

/// Boolean flag as accepted by env vars and query strings
///
/// `true/1/yes` and `false/0/no`, case-insensitive; anything else is `None`.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意键值来源加载配置 (环境变量、测试用 map)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse = |name: &str| lookup(name).map(|v| v.trim().to_string());
        let flag = |name: &str| lookup(name).as_deref().and_then(parse_flag);
        let policy = |name: &str, default: IntegrityPolicy| match lookup(name) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(variable = name, value = %raw, "Unknown policy, using {default}");
                default
            }),
            None => default,
        };

        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".into());
        let log_json = flag("LOG_JSON").unwrap_or(environment == "production");

        Self {
            work_dir: lookup("WORK_DIR").unwrap_or_else(|| "./hr-data".into()),
            database_path: lookup("DATABASE_PATH").filter(|s| !s.is_empty()),
            http_port: parse("HTTP_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            environment,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json,
            log_retention_days: parse("LOG_RETENTION_DAYS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(14),
            rate_limit_requests: parse("RATE_LIMIT_REQUESTS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(200),
            rate_limit_window_secs: parse("RATE_LIMIT_WINDOW_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            generator_reset: flag("GENERATOR_RESET").unwrap_or(true),
            policies: IntegrityPolicies {
                rating: policy("RATING_POLICY", IntegrityPolicy::Tolerant),
                orphan: policy("ORPHAN_POLICY", IntegrityPolicy::Strict),
            },
        }
    }

    /// 测试配置：内存数据库，宽松限流，不读取环境变量
    pub fn for_tests() -> Self {
        Self {
            work_dir: std::env::temp_dir()
                .join("hr-server-tests")
                .to_string_lossy()
                .into_owned(),
            database_path: Some(IN_MEMORY_DATABASE.into()),
            http_port: 0,
            environment: "test".into(),
            log_level: "debug".into(),
            log_json: false,
            log_retention_days: 14,
            rate_limit_requests: 10_000,
            rate_limit_window_secs: 60,
            generator_reset: true,
            policies: IntegrityPolicies::default(),
        }
    }

    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Resolved database location (`:memory:` or a file path)
    pub fn database_location(&self) -> String {
        match &self.database_path {
            Some(path) => path.clone(),
            None => self
                .database_dir()
                .join("hr.db")
                .to_string_lossy()
                .into_owned(),
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_location() == IN_MEMORY_DATABASE
    }

    /// 确保工作目录结构存在 (database/, logs/)
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        if !self.is_in_memory() {
            let db_path = PathBuf::from(self.database_location());
            if let Some(parent) = db_path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
