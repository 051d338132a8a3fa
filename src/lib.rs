// ==========================================
// Генератор аттестатов - основная библиотека
// ==========================================
// Назначение: импорт ведомости выпускников,
// параметры печати, генерация титульных листов (PDF + QR)
// ==========================================

// ==========================================
// Объявление модулей
// ==========================================

// Доменный слой - записи и параметры
pub mod domain;

// Слой импорта - внешние данные (ведомость)
pub mod importer;

// Слой конфигурации - сохранение параметров
pub mod config;

// Слой документа - раскладка и генерация PDF
pub mod diploma;

// Логирование
pub mod logging;

// ==========================================
// Реэкспорт основных типов
// ==========================================

// Доменные типы
pub use domain::{
    DiplomaParams, Point, PupilFullRecord, PupilIdentity, PupilRecord, RatingAlignment,
    RatingTranscript, TitleLayoutParams, ZFieldMode,
};

// Импорт
pub use importer::{ImportError, ImportResult, RosterImporter};

// Конфигурация
pub use config::SettingsStore;

// Документ
pub use diploma::{DiplomaGenerator, GenerateError, GenerateResult};

// ==========================================
// Константы
// ==========================================

// Версия системы
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Название системы
pub const APP_NAME: &str = "Генератор аттестатов";
