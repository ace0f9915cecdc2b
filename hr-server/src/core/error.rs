use thiserror::Error;

/// Errors that stop the server from starting or running
///
/// Request-level failures use [`crate::utils::AppError`] instead.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("数据库初始化失败: {0}")]
    Database(String),

    #[error("模板加载失败: {0}")]
    Template(#[from] tera::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
