// ==========================================
// Генератор аттестатов - ошибки импорта
// ==========================================
// Инструмент: thiserror
// Политика: любая ошибка строки фатальна для
// всего импорта, построчного восстановления нет
// ==========================================

use thiserror::Error;

/// Ошибки слоя импорта ведомости
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== Ошибки файла =====
    #[error("файл не найден: {0}")]
    FileNotFound(String),

    #[error("формат файла не поддерживается: {0} (только .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("не удалось прочитать файл: {0}")]
    FileReadError(String),

    #[error("ошибка разбора Excel: {0}")]
    ExcelParseError(String),

    #[error("ошибка разбора CSV: {0}")]
    CsvParseError(String),

    // ===== Ошибки структуры таблицы =====
    #[error("в файле нет строки заголовков")]
    MissingHeader,

    #[error("строка {row}: мало колонок (ожидалось не меньше {expected}, найдено {actual})")]
    RowTooShort {
        row: usize,
        expected: usize,
        actual: usize,
    },

    // ===== Ошибки данных =====
    #[error("строка {row}, поле {field}: не удалось преобразовать значение: {message}")]
    TypeConversionError {
        row: usize,
        field: String,
        message: String,
    },

    #[error("строка {row}: некорректная дата рождения {day:02}.{month:02}.{year}")]
    InvalidDate {
        row: usize,
        day: i64,
        month: i64,
        year: i64,
    },
}

// Реализация From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// Реализация From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// Реализация From<calamine::XlsxError>
impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Псевдоним Result для слоя импорта
pub type ImportResult<T> = Result<T, ImportError>;
