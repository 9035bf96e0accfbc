pub mod error_code;
pub mod pagination;
pub mod response;

/// 程序启动时间，用于运行状态上报
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
