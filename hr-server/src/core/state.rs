use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;
use tera::Tera;
use tokio::sync::Mutex;

use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::middleware::RateLimiter;
use crate::reports::ReportService;
use crate::utils::logger::cleanup_old_logs;

/// Dashboard template name registered in [`ServerState::templates`]
pub const DASHBOARD_TEMPLATE: &str = "dashboard.html";

const RATE_LIMIT_CLEANUP_INTERVAL: Duration = Duration::from_secs(300);
const LOG_CLEANUP_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc / 连接池实现浅拷贝，每个请求 clone 成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | SqlitePool | SQLite 连接池 |
/// | reports | ReportService | 聚合查询服务 |
/// | rate_limiter | RateLimiter | 按 IP 限流 |
/// | generator_lock | Arc<Mutex<()>> | 串行化数据生成 |
/// | templates | Arc<Tera> | HTML 模板 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
    pub reports: ReportService,
    pub rate_limiter: RateLimiter,
    /// 同一时间只允许一个生成任务
    pub generator_lock: Arc<Mutex<()>>,
    pub templates: Arc<Tera>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构
    /// 2. 数据库 (文件或内存) 及迁移
    /// 3. 报表服务、限流器、模板
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let db = if config.is_in_memory() {
            DbService::in_memory().await
        } else {
            DbService::new(&config.database_location()).await
        }
        .map_err(|e| ServerError::Database(e.message))?;

        Self::with_pool(config, db.pool)
    }

    /// Build state around an existing pool
    pub fn with_pool(config: &Config, pool: SqlitePool) -> Result<Self> {
        if config.rate_limit_requests == 0 {
            return Err(ServerError::Config(
                "RATE_LIMIT_REQUESTS must be greater than 0".into(),
            ));
        }

        Ok(Self {
            config: config.clone(),
            reports: ReportService::new(pool.clone(), config.policies),
            pool,
            rate_limiter: RateLimiter::new(
                config.rate_limit_requests,
                config.rate_limit_window_secs,
            ),
            generator_lock: Arc::new(Mutex::new(())),
            templates: Arc::new(load_templates()?),
        })
    }

    /// 启动后台任务
    ///
    /// - 每 5 分钟清理过期的限流窗口
    /// - 每天清理过期日志
    pub fn start_background_tasks(&self) {
        let rate_limiter = self.rate_limiter.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(RATE_LIMIT_CLEANUP_INTERVAL);
            loop {
                interval.tick().await;
                let removed = rate_limiter.cleanup().await;
                if removed > 0 {
                    let remaining = rate_limiter.tracked_clients().await;
                    tracing::debug!(removed, remaining, "Expired rate limit windows cleaned up");
                }
            }
        });

        let log_dir = self.config.log_dir();
        let retention_days = self.config.log_retention_days;
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(LOG_CLEANUP_INTERVAL);
            loop {
                interval.tick().await;
                if let Err(e) = cleanup_old_logs(&log_dir, retention_days) {
                    tracing::warn!(error = %e, "Log cleanup failed");
                }
            }
        });
    }
}

fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_template(
        DASHBOARD_TEMPLATE,
        include_str!("../../templates/dashboard.html.tera"),
    )?;
    Ok(tera)
}
