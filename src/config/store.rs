// ==========================================
// Генератор аттестатов - хранилище настроек
// ==========================================
// Формат: плоский текстовый файл из двух секций,
// строки "ключ = значение", редактируется вручную.
// Имена секций и ключей сохранены для совместимости
// с ранее отредактированными файлами settings.ini.
// ==========================================
// Политика восстановления: отсутствие любого ключа
// или ошибка приведения типа отменяет восстановление
// всей секции, вызывающий получает значения по
// умолчанию. Частичное слияние не выполняется.
// ==========================================

use crate::domain::types::{RatingAlignment, RatingTranscript, ZFieldMode};
use crate::domain::{DiplomaParams, Point, TitleLayoutParams};
use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Секция параметров текста аттестата
pub const DIPLOMA_SECTION: &str = "DiplomaParametrs";

/// Секция раскладки титульного листа
pub const TITLE_SECTION: &str = "TitleLayoutParametrs";

// Пары ключ-значение одной секции, с сохранением порядка записи
type Fields = Vec<(String, String)>;

// ==========================================
// SettingsStore
// ==========================================
/// Хранилище двух наборов параметров в одном файле.
///
/// При первом обращении (файла нет) записывает оба
/// набора значений по умолчанию.
pub struct SettingsStore {
    file_path: PathBuf,
    sections: Vec<(String, Fields)>,
}

impl SettingsStore {
    /// Открытие хранилища; при отсутствии файла создаёт его
    /// с настройками по умолчанию
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file_path = path.as_ref().to_path_buf();

        if file_path.is_file() {
            let text = fs::read_to_string(&file_path)?;
            let sections = parse_sections(&text);
            return Ok(Self {
                file_path,
                sections,
            });
        }

        tracing::info!(file = %file_path.display(), "файл настроек не найден, создаются значения по умолчанию");

        let mut store = Self {
            file_path,
            sections: Vec::new(),
        };
        store.replace_section(DIPLOMA_SECTION, serialize_diploma(&DiplomaParams::default()));
        store.replace_section(TITLE_SECTION, serialize_title(&TitleLayoutParams::default()));
        store.flush()?;
        Ok(store)
    }

    /// Путь файла настроек по умолчанию: каталог конфигурации
    /// пользователя, при его отсутствии - текущий каталог
    pub fn default_path() -> PathBuf {
        match dirs::config_dir() {
            Some(dir) => dir.join("diploma-press").join("settings.ini"),
            None => PathBuf::from("settings.ini"),
        }
    }

    // ===== Параметры аттестата =====

    /// Восстановление параметров аттестата; при любой
    /// неполноте секции - значения по умолчанию
    pub fn diploma_params(&self) -> DiplomaParams {
        match self.try_diploma_params() {
            Some(params) => params,
            None => {
                tracing::debug!("секция {DIPLOMA_SECTION} неполна, применяются значения по умолчанию");
                DiplomaParams::default()
            }
        }
    }

    /// Сохранение параметров аттестата с перезаписью файла
    pub fn save_diploma_params(&mut self, params: &DiplomaParams) -> io::Result<()> {
        self.replace_section(DIPLOMA_SECTION, serialize_diploma(params));
        self.flush()
    }

    // ===== Раскладка титульного листа =====

    pub fn title_params(&self) -> TitleLayoutParams {
        match self.try_title_params() {
            Some(params) => params,
            None => {
                tracing::debug!("секция {TITLE_SECTION} неполна, применяются значения по умолчанию");
                TitleLayoutParams::default()
            }
        }
    }

    pub fn save_title_params(&mut self, params: &TitleLayoutParams) -> io::Result<()> {
        self.replace_section(TITLE_SECTION, serialize_title(params));
        self.flush()
    }

    // ===== Внутреннее =====

    fn try_diploma_params(&self) -> Option<DiplomaParams> {
        Some(DiplomaParams {
            school_name: self.get_string(DIPLOMA_SECTION, "diploma_school_name")?,
            date: self.get_date(DIPLOMA_SECTION, "diploma_date")?,
            head_of_edu: self.get_string(DIPLOMA_SECTION, "diploma_fst_head_of_edu")?,
            print_head_name: self.get_bool(DIPLOMA_SECTION, "diploma_print_fst")?,
            rating_alignment: RatingAlignment::from_index(
                self.get_int(DIPLOMA_SECTION, "ali_rating")?,
            )?,
            rating_transcript: RatingTranscript::from_index(
                self.get_int(DIPLOMA_SECTION, "rating_transcript")?,
            )?,
            z_field: ZFieldMode::from_index(self.get_int(DIPLOMA_SECTION, "z_field")?)?,
            font_size: self.get_int(DIPLOMA_SECTION, "diploma_font_size")?,
            adv_font_size: self.get_int(DIPLOMA_SECTION, "diploma_adv_font_size")?,
            name_font_size: self.get_int(DIPLOMA_SECTION, "diploma_fst_font_size")?,
        })
    }

    fn try_title_params(&self) -> Option<TitleLayoutParams> {
        Some(TitleLayoutParams {
            date: self.get_point(TITLE_SECTION, "date")?,
            year: self.get_point(TITLE_SECTION, "year")?,
            school_name: self.get_point(TITLE_SECTION, "school_name")?,
            head_of_edu: self.get_point(TITLE_SECTION, "head_of_edu_fst")?,
            pupil_name: self.get_point(TITLE_SECTION, "pupil_fst")?,
            qrcode: self.get_point(TITLE_SECTION, "qrcode")?,
            draw_background: self.get_bool(TITLE_SECTION, "diploma_title_image")?,
        })
    }

    // Типизированные обращения к полям: закрытый набор видов
    // значений - строка, целое, логическое, дата, точка

    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.raw_value(section, key).map(str::to_string)
    }

    fn get_int(&self, section: &str, key: &str) -> Option<i64> {
        self.raw_value(section, key)?.parse().ok()
    }

    fn get_bool(&self, section: &str, key: &str) -> Option<bool> {
        // Литерал "False" - ложь, любая другая строка - истина
        Some(self.raw_value(section, key)? != "False")
    }

    fn get_date(&self, section: &str, key: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.raw_value(section, key)?, "%Y-%m-%d").ok()
    }

    fn get_point(&self, section: &str, key: &str) -> Option<Point> {
        parse_point(self.raw_value(section, key)?)
    }

    fn raw_value(&self, section: &str, key: &str) -> Option<&str> {
        let (_, fields) = self.sections.iter().find(|(name, _)| name == section)?;
        fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn replace_section(&mut self, section: &str, fields: Fields) {
        match self.sections.iter_mut().find(|(name, _)| name == section) {
            Some((_, existing)) => *existing = fields,
            None => self.sections.push((section.to_string(), fields)),
        }
    }

    // Полная перезапись файла настроек
    fn flush(&self) -> io::Result<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut out = String::new();
        for (name, fields) in &self.sections {
            out.push_str(&format!("[{name}]\n"));
            for (key, value) in fields {
                // Многострочные значения записываются с отступом
                // продолжения (совместимо с ручной правкой)
                let mut lines = value.split('\n');
                out.push_str(&format!("{key} = {}\n", lines.next().unwrap_or("")));
                for line in lines {
                    out.push_str(&format!("\t{line}\n"));
                }
            }
            out.push('\n');
        }

        fs::write(&self.file_path, out)
    }
}

// ==========================================
// Сериализация значений полей
// ==========================================

fn serialize_diploma(params: &DiplomaParams) -> Fields {
    vec![
        ("diploma_school_name".into(), params.school_name.clone()),
        ("diploma_date".into(), params.date.format("%Y-%m-%d").to_string()),
        ("diploma_fst_head_of_edu".into(), params.head_of_edu.clone()),
        ("diploma_print_fst".into(), bool_to_str(params.print_head_name)),
        ("ali_rating".into(), params.rating_alignment.index().to_string()),
        (
            "rating_transcript".into(),
            params.rating_transcript.index().to_string(),
        ),
        ("z_field".into(), params.z_field.index().to_string()),
        ("diploma_font_size".into(), params.font_size.to_string()),
        ("diploma_adv_font_size".into(), params.adv_font_size.to_string()),
        ("diploma_fst_font_size".into(), params.name_font_size.to_string()),
    ]
}

fn serialize_title(params: &TitleLayoutParams) -> Fields {
    vec![
        ("date".into(), point_to_str(params.date)),
        ("year".into(), point_to_str(params.year)),
        ("school_name".into(), point_to_str(params.school_name)),
        ("head_of_edu_fst".into(), point_to_str(params.head_of_edu)),
        ("pupil_fst".into(), point_to_str(params.pupil_name)),
        ("qrcode".into(), point_to_str(params.qrcode)),
        (
            "diploma_title_image".into(),
            bool_to_str(params.draw_background),
        ),
    ]
}

fn bool_to_str(value: bool) -> String {
    if value { "True" } else { "False" }.to_string()
}

// Точка сплющивается в пары "имя==значение" через "|"
fn point_to_str(point: Point) -> String {
    format!("x=={}|y=={}", point.x, point.y)
}

fn parse_point(value: &str) -> Option<Point> {
    let mut x = None;
    let mut y = None;

    for part in value.split('|') {
        let (name, raw) = part.split_once("==")?;
        let parsed: f64 = raw.trim().parse().ok()?;
        match name.trim() {
            "x" => x = Some(parsed),
            "y" => y = Some(parsed),
            _ => return None,
        }
    }

    Some(Point { x: x?, y: y? })
}

// ==========================================
// Разбор файла секций
// ==========================================
// Снисходительный разбор: непонятные строки
// пропускаются, ошибки всплывают позже как
// отсутствующие ключи (и дают значения по умолчанию)
fn parse_sections(text: &str) -> Vec<(String, Fields)> {
    let mut sections: Vec<(String, Fields)> = Vec::new();

    for raw_line in text.lines() {
        let trimmed = raw_line.trim();

        // Комментарии и пустые строки
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        // Заголовок секции
        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            let name = trimmed[1..trimmed.len() - 1].trim().to_string();
            sections.push((name, Vec::new()));
            continue;
        }

        let Some((_, fields)) = sections.last_mut() else {
            continue; // строки до первой секции игнорируются
        };

        // Продолжение многострочного значения
        if raw_line.starts_with([' ', '\t']) {
            if let Some((_, value)) = fields.last_mut() {
                value.push('\n');
                value.push_str(trimmed);
            }
            continue;
        }

        // Обычная пара "ключ = значение"
        if let Some((key, value)) = trimmed.split_once('=') {
            fields.push((key.trim().to_string(), value.trim().to_string()));
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_round_trip() {
        let point = Point::new(54.85, 112.8);
        assert_eq!(parse_point(&point_to_str(point)), Some(point));
    }

    #[test]
    fn test_point_rejects_malformed() {
        assert_eq!(parse_point("x==1.0"), None);
        assert_eq!(parse_point("x==a|y==2"), None);
        assert_eq!(parse_point("x==1|z==2"), None);
        assert_eq!(parse_point("1|2"), None);
    }

    #[test]
    fn test_parse_sections_multiline_value() {
        let text = "[DiplomaParametrs]\ndiploma_school_name = МБОУ СОШ №1\n\tг. Москва\n";
        let sections = parse_sections(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(
            sections[0].1[0],
            (
                "diploma_school_name".to_string(),
                "МБОУ СОШ №1\nг. Москва".to_string()
            )
        );
    }

    #[test]
    fn test_parse_sections_skips_comments() {
        let text = "# комментарий\n[TitleLayoutParametrs]\n; ещё\nqrcode = x==9.1|y==117\n";
        let sections = parse_sections(text);
        assert_eq!(sections[0].1.len(), 1);
    }

    #[test]
    fn test_bool_semantics() {
        // "False" -> ложь, любая другая строка -> истина
        let sections = parse_sections("[DiplomaParametrs]\ndiploma_print_fst = False\n");
        let store = SettingsStore {
            file_path: PathBuf::from("unused.ini"),
            sections,
        };
        assert_eq!(store.get_bool(DIPLOMA_SECTION, "diploma_print_fst"), Some(false));

        let sections = parse_sections("[DiplomaParametrs]\ndiploma_print_fst = нет\n");
        let store = SettingsStore {
            file_path: PathBuf::from("unused.ini"),
            sections,
        };
        assert_eq!(store.get_bool(DIPLOMA_SECTION, "diploma_print_fst"), Some(true));
    }
}
