// ==========================================
// Инициализация логирования
// ==========================================
// Использует tracing и tracing-subscriber
// Уровень настраивается переменной окружения
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Инициализация логирования
///
/// # Переменные окружения
/// - RUST_LOG: фильтр уровня логов (по умолчанию: info)
///   Например: RUST_LOG=debug или RUST_LOG=diploma_press=trace
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Инициализация логирования в тестах
///
/// Более подробный уровень, вывод через test writer
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
