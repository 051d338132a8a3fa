// ==========================================
// Генератор аттестатов - доменный слой
// ==========================================
// Назначение: записи выпускников, параметры печати
// Не содержит логики файлов и генерации документа
// ==========================================

pub mod params;
pub mod pupil;
pub mod types;

// Реэкспорт основных типов
pub use params::{DiplomaParams, Point, TitleLayoutParams};
pub use pupil::{PupilFullRecord, PupilIdentity, PupilRecord};
pub use types::{RatingAlignment, RatingTranscript, ZFieldMode};
