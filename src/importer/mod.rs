// ==========================================
// Генератор аттестатов - слой импорта
// ==========================================
// Назначение: чтение ведомости выпускников,
// сборка доменных записей
// Поддержка: Excel, CSV
// ==========================================

pub mod error;
pub mod file_parser;
pub mod roster;

// Реэкспорт основных типов
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, RawTable, UniversalFileParser};
pub use roster::RosterImporter;
