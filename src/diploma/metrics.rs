// ==========================================
// Генератор аттестатов - метрики шрифта
// ==========================================
// Измерение ширины строки по TTF-файлу (rusttype).
// Тот же файл встраивается в PDF, поэтому байты
// шрифта хранятся и отдаются генератору.
// ==========================================

use crate::diploma::error::{GenerateError, GenerateResult};
use crate::diploma::layout::{pt_to_mm, MeasureText};
use rusttype::{point, Font, Scale};
use std::fs;
use std::path::Path;

// ==========================================
// FontMetrics
// ==========================================
pub struct FontMetrics {
    font: Font<'static>,
    bytes: Vec<u8>,
}

impl FontMetrics {
    /// Загрузка TTF-шрифта с диска
    pub fn from_file<P: AsRef<Path>>(path: P) -> GenerateResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| GenerateError::FontLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let font = Font::try_from_vec(bytes.clone()).ok_or_else(|| GenerateError::FontLoad {
            path: path.display().to_string(),
            message: "файл не является корректным TTF-шрифтом".to_string(),
        })?;

        tracing::debug!(file = %path.display(), "шрифт загружен");
        Ok(Self { font, bytes })
    }

    /// Байты исходного TTF-файла (для встраивания в PDF)
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl MeasureText for FontMetrics {
    fn text_width_mm(&self, text: &str, font_size_pt: f64) -> f64 {
        let scale = Scale::uniform(font_size_pt as f32);
        let width_pt: f32 = self
            .font
            .layout(text, scale, point(0.0, 0.0))
            .map(|glyph| glyph.unpositioned().h_metrics().advance_width)
            .sum();

        pt_to_mm(f64::from(width_pt))
    }
}
