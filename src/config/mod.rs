// ==========================================
// Генератор аттестатов - слой конфигурации
// ==========================================
// Назначение: долговременное хранение двух наборов
// параметров печати в одном текстовом файле
// ==========================================

pub mod store;

// Реэкспорт хранилища настроек
pub use store::{SettingsStore, DIPLOMA_SECTION, TITLE_SECTION};
