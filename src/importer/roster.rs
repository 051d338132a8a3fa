// ==========================================
// Генератор аттестатов - импортёр ведомости
// ==========================================
// Раскладка колонок (с нуля):
//   0-2  фамилия / имя / отчество
//   3-5  день / месяц / год рождения (целые)
//   6    номер аттестата
//   7+   по колонке на предмет (заголовок - название,
//        ячейка - целая оценка)
// ==========================================

use crate::domain::{PupilFullRecord, PupilRecord};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{RawTable, UniversalFileParser};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::Path;

// Фиксированные колонки перед предметами
const COL_SECOND_NAME: usize = 0;
const COL_FIRST_NAME: usize = 1;
const COL_THIRD_NAME: usize = 2;
const COL_BIRTH_DAY: usize = 3;
const COL_BIRTH_MONTH: usize = 4;
const COL_BIRTH_YEAR: usize = 5;
const COL_DIPLOMA_ID: usize = 6;
const SUBJECT_COLUMNS_START: usize = 7;

// ==========================================
// RosterImporter
// ==========================================
/// Импортёр ведомости выпускников.
///
/// Файл разбирается один раз при создании; операции
/// `subjects` / `identities` / `full_records` работают
/// по уже разобранной таблице.
pub struct RosterImporter {
    table: RawTable,
}

impl RosterImporter {
    /// Открытие и разбор файла ведомости (.xlsx/.xls/.csv)
    pub fn open<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let table = UniversalFileParser.parse(path.as_ref())?;
        tracing::info!(
            rows = table.rows.len(),
            columns = table.headers.len(),
            file = %path.as_ref().display(),
            "ведомость разобрана"
        );
        Ok(Self { table })
    }

    /// Импортёр поверх уже разобранной таблицы (для тестов)
    pub fn from_table(table: RawTable) -> Self {
        Self { table }
    }

    /// Названия предметов: заголовки колонок 7+
    pub fn subjects(&self) -> Vec<String> {
        self.table
            .headers
            .iter()
            .skip(SUBJECT_COLUMNS_START)
            .cloned()
            .collect()
    }

    /// Личные записи всех выпускников в порядке файла
    pub fn identities(&self) -> ImportResult<Vec<PupilRecord>> {
        self.table
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| Self::identity_from_row(row, data_row_number(idx)))
            .collect()
    }

    /// Полные записи: личные данные + оценки по предметам
    pub fn full_records(&self) -> ImportResult<Vec<PupilFullRecord>> {
        let subjects = self.subjects();
        let identities = self.identities()?;

        identities
            .into_iter()
            .zip(self.table.rows.iter())
            .enumerate()
            .map(|(idx, (pupil, row))| {
                let row_number = data_row_number(idx);
                let mut ratings = BTreeMap::new();

                for (offset, subject) in subjects.iter().enumerate() {
                    let col = SUBJECT_COLUMNS_START + offset;
                    let cell = row.get(col).ok_or(ImportError::RowTooShort {
                        row: row_number,
                        expected: SUBJECT_COLUMNS_START + subjects.len(),
                        actual: row.len(),
                    })?;
                    ratings.insert(subject.clone(), parse_int(cell, row_number, subject)? as i32);
                }

                Ok(PupilFullRecord::from_identity(pupil, ratings))
            })
            .collect()
    }

    // Сборка личной записи из одной строки данных
    fn identity_from_row(row: &[String], row_number: usize) -> ImportResult<PupilRecord> {
        if row.len() < SUBJECT_COLUMNS_START {
            return Err(ImportError::RowTooShort {
                row: row_number,
                expected: SUBJECT_COLUMNS_START,
                actual: row.len(),
            });
        }

        let day = parse_int(&row[COL_BIRTH_DAY], row_number, "день рождения")?;
        let month = parse_int(&row[COL_BIRTH_MONTH], row_number, "месяц рождения")?;
        let year = parse_int(&row[COL_BIRTH_YEAR], row_number, "год рождения")?;

        let birthday = NaiveDate::from_ymd_opt(
            i32::try_from(year).unwrap_or(0),
            u32::try_from(month).unwrap_or(0),
            u32::try_from(day).unwrap_or(0),
        )
        .ok_or(ImportError::InvalidDate {
            row: row_number,
            day,
            month,
            year,
        })?;

        Ok(PupilRecord {
            second_name: row[COL_SECOND_NAME].clone(),
            first_name: row[COL_FIRST_NAME].clone(),
            third_name: row[COL_THIRD_NAME].clone(),
            birthday,
            diploma_id: row[COL_DIPLOMA_ID].clone(),
        })
    }
}

// Номер строки в файле (1 - заголовки, данные со 2-й)
fn data_row_number(index: usize) -> usize {
    index + 2
}

// Разбор целого значения ячейки.
// Excel отдаёт целые как вещественные ("15" может прийти как "15.0"),
// такие значения принимаются, если дробная часть нулевая.
fn parse_int(value: &str, row_number: usize, field: &str) -> ImportResult<i64> {
    if let Ok(v) = value.parse::<i64>() {
        return Ok(v);
    }

    if let Ok(v) = value.parse::<f64>() {
        if v.fract() == 0.0 {
            return Ok(v as i64);
        }
    }

    Err(ImportError::TypeConversionError {
        row: row_number,
        field: field.to_string(),
        message: format!("ожидалось целое число, найдено: {:?}", value),
    })
}
