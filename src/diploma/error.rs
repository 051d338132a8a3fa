// ==========================================
// Генератор аттестатов - ошибки генерации
// ==========================================
// Инструмент: thiserror
// Все ошибки генерации всплывают к вызывающему,
// повторов и скрытых подстановок нет
// ==========================================

use thiserror::Error;

/// Ошибки слоя генерации документа
#[derive(Error, Debug)]
pub enum GenerateError {
    // ===== Шрифт =====
    #[error("не удалось загрузить шрифт {path}: {message}")]
    FontLoad { path: String, message: String },

    // ===== Документ =====
    #[error("ошибка формирования PDF: {0}")]
    Pdf(String),

    // ===== Изображения =====
    #[error("не удалось построить QR-код: {0}")]
    Qr(String),

    #[error("не удалось встроить изображение {path}: {message}")]
    Image { path: String, message: String },

    #[error("формат изображения не поддерживается: {0} (только .png/.jpg)")]
    UnsupportedImageFormat(String),

    // ===== Файловые операции =====
    #[error("ошибка файловой операции: {0}")]
    Io(#[from] std::io::Error),
}

/// Псевдоним Result для слоя генерации
pub type GenerateResult<T> = Result<T, GenerateError>;
