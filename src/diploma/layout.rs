// ==========================================
// Генератор аттестатов - раскладка титульного листа
// ==========================================
// Чистая геометрия: по записи выпускника, параметрам
// и измерителю ширины строк строится план размещения
// (строки текста + изображения) в абсолютных
// координатах страницы. Отрисовки здесь нет.
// ==========================================
// Координаты - миллиметры, ось Y направлена вниз
// (как в эталонном макете); преобразование к осям PDF
// выполняет генератор при отрисовке.
// ==========================================

use crate::domain::{DiplomaParams, PupilIdentity, TitleLayoutParams};
use chrono::{Datelike, NaiveDate};

// ===== Страница и титульная рамка =====

/// A4 альбомной ориентации, мм
pub const PAGE_WIDTH_MM: f64 = 297.0;
pub const PAGE_HEIGHT_MM: f64 = 210.0;

/// Титульная рамка: прижата к правому краю страницы,
/// отцентрована по вертикали
pub const FRAME_WIDTH_MM: f64 = 220.0;
pub const FRAME_HEIGHT_MM: f64 = 155.0;

/// Ширина блока названия школы
pub const SCHOOL_NAME_BLOCK_WIDTH_MM: f64 = 50.0;

/// Сторона квадрата QR-кода
pub const QR_SIZE_MM: f64 = 20.0;

// Постоянное поле QR-строки (код региона эталонного макета)
const QR_REGION_FIELD: &str = "69";

/// Русские названия месяцев в родительном падеже.
/// Индекс 0 не используется: календарная дата месяца 0 не даёт.
pub const MONTHS_RU: [&str; 13] = [
    "",
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

// ==========================================
// Измеритель ширины строки
// ==========================================
/// Ширина строки в мм для заданного кегля.
/// Реализуется метриками шрифта; в тестах подменяется.
pub trait MeasureText {
    fn text_width_mm(&self, text: &str, font_size_pt: f64) -> f64;
}

// ==========================================
// TitleFrame
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleFrame {
    pub start_x: f64,
    pub start_y: f64,
}

impl TitleFrame {
    /// Рамка на листе A4 альбомной ориентации
    pub fn on_landscape_a4() -> Self {
        Self {
            start_x: PAGE_WIDTH_MM - FRAME_WIDTH_MM,
            start_y: PAGE_HEIGHT_MM / 2.0 - FRAME_HEIGHT_MM / 2.0,
        }
    }
}

// ==========================================
// План размещения
// ==========================================

/// Одна строка текста в абсолютных координатах страницы
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub font_size_pt: f64,
    pub left_mm: f64, // левый край строки
    pub top_mm: f64,  // верх строки (ось Y вниз)
}

/// Прямоугольник изображения в абсолютных координатах
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedImage {
    pub left_mm: f64,
    pub top_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

/// План титульного листа одного выпускника
#[derive(Debug, Clone, PartialEq)]
pub struct TitlePagePlan {
    pub background: Option<PlacedImage>, // рисуется первым
    pub lines: Vec<PlacedLine>,
    pub qr_payload: String,
    pub qr: PlacedImage,
}

// ===== Геометрические примитивы =====

/// Перевод пунктов в миллиметры
pub fn pt_to_mm(pt: f64) -> f64 {
    pt * 25.4 / 72.0
}

/// Высота шрифта в документных единицах (мм)
pub fn font_height_mm(font_size_pt: f64) -> f64 {
    pt_to_mm(font_size_pt)
}

/// Левый край строки ширины `width`, отцентрованной на `anchor_x`
pub fn centered_left_edge(anchor_x: f64, width: f64) -> f64 {
    anchor_x - width / 2.0
}

/// Дата выдачи: "{день} {месяц} {год} года"
pub fn format_issue_date(date: NaiveDate) -> String {
    format!(
        "{} {} {} года",
        date.day(),
        MONTHS_RU[date.month() as usize],
        date.year()
    )
}

/// Перенос текста по словам в блок заданной ширины.
/// Явные переводы строки сохраняются; слово шире блока
/// остаётся одно в своей строке.
pub fn wrap_to_width(
    text: &str,
    max_width_mm: f64,
    font_size_pt: f64,
    measure: &dyn MeasureText,
) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if current.is_empty()
                || measure.text_width_mm(&candidate, font_size_pt) <= max_width_mm
            {
                current = candidate;
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }

        lines.push(current);
    }

    lines
}

// ==========================================
// Сборка плана титульного листа
// ==========================================
/// Вычисляет размещение всех элементов титульного листа.
///
/// Смещения по вертикали всегда кратны одной высоте шрифта
/// (кроме трёхкратного сдвига блока школы и долей 3/4 и 1/8
/// у блока ФИО) - в точности по эталонному макету.
pub fn compose_title_page(
    pupil: &dyn PupilIdentity,
    diploma: &DiplomaParams,
    layout: &TitleLayoutParams,
    measure: &dyn MeasureText,
) -> TitlePagePlan {
    let frame = TitleFrame::on_landscape_a4();
    let base_size = diploma.font_size as f64;
    let font_h = font_height_mm(base_size);
    let mut lines = Vec::new();

    // Фоновое изображение - вся рамка
    let background = layout.draw_background.then_some(PlacedImage {
        left_mm: frame.start_x,
        top_mm: frame.start_y,
        width_mm: FRAME_WIDTH_MM,
        height_mm: FRAME_HEIGHT_MM,
    });

    // Дата выдачи: центр на точке date, на высоту шрифта ниже
    let date_text = format_issue_date(diploma.date);
    let date_width = measure.text_width_mm(&date_text, base_size);
    lines.push(PlacedLine {
        text: date_text,
        font_size_pt: base_size,
        left_mm: centered_left_edge(frame.start_x + layout.date.x, date_width),
        top_mm: frame.start_y + layout.date.y + font_h,
    });

    // Год: центр на точке year, на высоту шрифта выше
    let year_text = diploma.date.year().to_string();
    let year_width = measure.text_width_mm(&year_text, base_size);
    lines.push(PlacedLine {
        text: year_text,
        font_size_pt: base_size,
        left_mm: centered_left_edge(frame.start_x + layout.year.x, year_width),
        top_mm: frame.start_y + layout.year.y - font_h,
    });

    // Название школы: блок фиксированной ширины, строки
    // отцентрованы внутри блока, верх на три высоты шрифта выше
    let school_left = frame.start_x + layout.school_name.x;
    let school_top = frame.start_y + layout.school_name.y - 3.0 * font_h;
    for (i, line) in wrap_to_width(
        &diploma.school_name,
        SCHOOL_NAME_BLOCK_WIDTH_MM,
        base_size,
        measure,
    )
    .into_iter()
    .enumerate()
    {
        let line_width = measure.text_width_mm(&line, base_size);
        lines.push(PlacedLine {
            text: line,
            font_size_pt: base_size,
            left_mm: school_left + (SCHOOL_NAME_BLOCK_WIDTH_MM - line_width) / 2.0,
            top_mm: school_top + i as f64 * font_h,
        });
    }

    // ФИО директора: по левому краю, только при включённом флаге
    if diploma.print_head_name {
        lines.push(PlacedLine {
            text: diploma.head_of_edu.clone(),
            font_size_pt: base_size,
            left_mm: frame.start_x + layout.head_of_edu.x,
            top_mm: frame.start_y + layout.head_of_edu.y - font_h,
        });
    }

    // ФИО выпускника: свой кегль; блок шириной 3/4 от ширины
    // неразбитой строки, сдвиг влево на 1/8 этой ширины.
    // Вертикальный сдвиг - высота основного шрифта (по макету).
    let name_size = diploma.name_font_size as f64;
    let full_name = pupil.full_name();
    let name_width = measure.text_width_mm(&full_name, name_size);
    let block_width = name_width * 3.0 / 4.0;
    let block_left = frame.start_x + layout.pupil_name.x - name_width / 8.0;
    let block_top = frame.start_y + layout.pupil_name.y + font_h;
    let name_line_h = font_height_mm(name_size);
    for (i, line) in wrap_to_width(&full_name, block_width, name_size, measure)
        .into_iter()
        .enumerate()
    {
        let line_width = measure.text_width_mm(&line, name_size);
        lines.push(PlacedLine {
            text: line,
            font_size_pt: name_size,
            left_mm: block_left + (block_width - line_width) / 2.0,
            top_mm: block_top + i as f64 * name_line_h,
        });
    }

    // QR-код: квадрат 20x20 мм на точке qrcode
    let qr_payload = format!(
        "{}|{}|{}|{}|{}|{}",
        pupil.second_name(),
        pupil.first_name(),
        pupil.third_name(),
        QR_REGION_FIELD,
        pupil.diploma_id(),
        pupil.birthday().format("%d-%m-%Y"),
    );
    let qr = PlacedImage {
        left_mm: frame.start_x + layout.qrcode.x,
        top_mm: frame.start_y + layout.qrcode.y,
        width_mm: QR_SIZE_MM,
        height_mm: QR_SIZE_MM,
    };

    TitlePagePlan {
        background,
        lines,
        qr_payload,
        qr,
    }
}
