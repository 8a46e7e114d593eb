//! 日誌系統初始化（tracing + tracing-subscriber）

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日誌系統
///
/// # 環境變數
/// - `RUST_LOG`：日誌級別過濾（預設 `info`），例如 `RUST_LOG=mrp_calc=debug`
///
/// # 範例
/// ```no_run
/// mrp::logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// 初始化測試用日誌（debug 級別，輸出到測試擷取）
///
/// 可重複呼叫，已初始化時直接略過。
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
