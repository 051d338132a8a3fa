// ==========================================
// Генератор аттестатов - слой документа
// ==========================================
// Назначение: раскладка титульного листа и
// генерация многостраничного PDF-документа
// ==========================================

pub mod error;
pub mod generator;
pub mod layout;
pub mod metrics;

// Реэкспорт основных типов
pub use error::{GenerateError, GenerateResult};
pub use generator::{
    DiplomaGenerator, DEFAULT_BACKGROUND_PATH, DEFAULT_FONT_PATH, OUTPUT_DIR, OUTPUT_FILE_NAME,
};
pub use layout::{
    compose_title_page, font_height_mm, MeasureText, PlacedImage, PlacedLine, TitleFrame,
    TitlePagePlan, MONTHS_RU, QR_SIZE_MM,
};
pub use metrics::FontMetrics;
