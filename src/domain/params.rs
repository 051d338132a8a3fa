// ==========================================
// Генератор аттестатов - параметры печати
// ==========================================
// Два набора параметров, редактируемых оператором:
// - DiplomaParams: тексты, дата, шрифты, переключатели
// - TitleLayoutParams: координаты элементов титульного листа
// Все значения по умолчанию - литералы эталонного макета.
// ==========================================

use crate::domain::types::{RatingAlignment, RatingTranscript, ZFieldMode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Point - смещение в миллиметрах
// ==========================================
// Относительно верхнего левого угла титульной рамки
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ==========================================
// DiplomaParams - параметры текста аттестата
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiplomaParams {
    pub school_name: String,               // название школы (многострочное)
    pub date: NaiveDate,                   // дата выдачи
    pub head_of_edu: String,               // ФИО директора
    pub print_head_name: bool,             // печатать ли ФИО директора
    pub rating_alignment: RatingAlignment, // положение блока оценок
    pub rating_transcript: RatingTranscript, // форма записи оценки
    pub z_field: ZFieldMode,               // режим прочерков
    pub font_size: i64,                    // основной шрифт, пт
    pub adv_font_size: i64,                // шрифт приложения, пт
    pub name_font_size: i64,               // шрифт ФИО выпускника, пт
}

impl Default for DiplomaParams {
    fn default() -> Self {
        Self {
            school_name: String::new(),
            date: NaiveDate::from_ymd_opt(2023, 1, 1).expect("literal date"),
            head_of_edu: String::new(),
            print_head_name: true,
            rating_alignment: RatingAlignment::LeftCorner,
            rating_transcript: RatingTranscript::Short,
            z_field: ZFieldMode::One,
            font_size: 11,
            adv_font_size: 11,
            name_font_size: 18,
        }
    }
}

// ==========================================
// TitleLayoutParams - раскладка титульного листа
// ==========================================
// Координаты - смещения от угла титульной рамки (мм)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleLayoutParams {
    pub date: Point,            // дата выдачи
    pub year: Point,            // год (4 цифры)
    pub school_name: Point,     // блок названия школы
    pub head_of_edu: Point,     // подпись директора
    pub pupil_name: Point,      // блок ФИО выпускника
    pub qrcode: Point,          // QR-код
    pub draw_background: bool,  // печатать ли фоновое изображение
}

impl Default for TitleLayoutParams {
    fn default() -> Self {
        Self {
            date: Point::new(54.85, 112.8),
            year: Point::new(153.5, 47.5),
            school_name: Point::new(142.7, 68.0),
            head_of_edu: Point::new(190.0, 126.5),
            pupil_name: Point::new(142.7, 21.0),
            qrcode: Point::new(9.1, 117.0),
            draw_background: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diploma_defaults() {
        let params = DiplomaParams::default();
        assert_eq!(params.date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert!(params.print_head_name);
        assert_eq!(params.font_size, 11);
        assert_eq!(params.name_font_size, 18);
        assert_eq!(params.rating_transcript, RatingTranscript::Short);
        assert_eq!(params.z_field, ZFieldMode::One);
    }

    #[test]
    fn test_title_layout_defaults() {
        let layout = TitleLayoutParams::default();
        assert_eq!(layout.date, Point::new(54.85, 112.8));
        assert_eq!(layout.qrcode, Point::new(9.1, 117.0));
        assert!(!layout.draw_background);
    }
}
