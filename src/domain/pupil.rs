// ==========================================
// Генератор аттестатов - записи выпускников
// ==========================================
// Две неизменяемые записи: личные данные и
// личные данные + оценки по предметам.
// Общий доступ к личным полям - через трейт
// PupilIdentity (без наследования).
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// PupilRecord - личные данные выпускника
// ==========================================
// Источник: колонки 0-6 ведомости
// После разбора строки не изменяется
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PupilRecord {
    pub second_name: String,  // фамилия
    pub first_name: String,   // имя
    pub third_name: String,   // отчество
    pub birthday: NaiveDate,  // дата рождения (колонки день/месяц/год)
    pub diploma_id: String,   // номер аттестата (внешний идентификатор)
}

// ==========================================
// PupilFullRecord - данные с оценками
// ==========================================
// Источник: колонки 0-6 + колонки предметов (7+)
// BTreeMap - стабильный порядок предметов при выводе
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PupilFullRecord {
    pub second_name: String,
    pub first_name: String,
    pub third_name: String,
    pub birthday: NaiveDate,
    pub diploma_id: String,
    pub ratings: BTreeMap<String, i32>, // предмет -> оценка
}

// ==========================================
// PupilIdentity - общий читающий доступ
// ==========================================
/// Доступ к личным полям любой записи выпускника.
///
/// Генератору титульного листа оценки не нужны,
/// поэтому он принимает обе записи через этот трейт.
pub trait PupilIdentity {
    fn second_name(&self) -> &str;
    fn first_name(&self) -> &str;
    fn third_name(&self) -> &str;
    fn birthday(&self) -> NaiveDate;
    fn diploma_id(&self) -> &str;

    /// ФИО одной строкой: "Фамилия Имя Отчество"
    fn full_name(&self) -> String {
        format!(
            "{} {} {}",
            self.second_name(),
            self.first_name(),
            self.third_name()
        )
    }
}

impl PupilIdentity for PupilRecord {
    fn second_name(&self) -> &str {
        &self.second_name
    }

    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn third_name(&self) -> &str {
        &self.third_name
    }

    fn birthday(&self) -> NaiveDate {
        self.birthday
    }

    fn diploma_id(&self) -> &str {
        &self.diploma_id
    }
}

impl PupilIdentity for PupilFullRecord {
    fn second_name(&self) -> &str {
        &self.second_name
    }

    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn third_name(&self) -> &str {
        &self.third_name
    }

    fn birthday(&self) -> NaiveDate {
        self.birthday
    }

    fn diploma_id(&self) -> &str {
        &self.diploma_id
    }
}

impl PupilFullRecord {
    /// Сборка полной записи из личных данных и оценок
    pub fn from_identity(pupil: PupilRecord, ratings: BTreeMap<String, i32>) -> Self {
        Self {
            second_name: pupil.second_name,
            first_name: pupil.first_name,
            third_name: pupil.third_name,
            birthday: pupil.birthday,
            diploma_id: pupil.diploma_id,
            ratings,
        }
    }

    /// Личные данные без оценок
    pub fn identity(&self) -> PupilRecord {
        PupilRecord {
            second_name: self.second_name.clone(),
            first_name: self.first_name.clone(),
            third_name: self.third_name.clone(),
            birthday: self.birthday,
            diploma_id: self.diploma_id.clone(),
        }
    }
}
