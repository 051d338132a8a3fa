// ==========================================
// Генератор аттестатов - доменные типы
// ==========================================
// Переключатели режимов печати оценок.
// Хранятся в настройках как целый индекс (0..N-1),
// в памяти - закрытые перечисления.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Положение блока оценок (Rating Alignment)
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingAlignment {
    #[default]
    LeftCorner, // в левом углу
    Center,     // по центру
}

impl RatingAlignment {
    /// Индекс варианта в настройках
    pub fn index(self) -> i64 {
        match self {
            RatingAlignment::LeftCorner => 0,
            RatingAlignment::Center => 1,
        }
    }

    /// Восстановление из индекса настроек
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(RatingAlignment::LeftCorner),
            1 => Some(RatingAlignment::Center),
            _ => None,
        }
    }
}

impl fmt::Display for RatingAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingAlignment::LeftCorner => write!(f, "LEFT_CORNER"),
            RatingAlignment::Center => write!(f, "CENTER"),
        }
    }
}

// ==========================================
// Форма записи оценки (Rating Transcript)
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingTranscript {
    Full,   // полная запись ("отлично")
    Middle, // сокращённая ("отл.")
    #[default]
    Short,  // цифрой ("5")
}

impl RatingTranscript {
    pub fn index(self) -> i64 {
        match self {
            RatingTranscript::Full => 0,
            RatingTranscript::Middle => 1,
            RatingTranscript::Short => 2,
        }
    }

    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(RatingTranscript::Full),
            1 => Some(RatingTranscript::Middle),
            2 => Some(RatingTranscript::Short),
            _ => None,
        }
    }
}

impl fmt::Display for RatingTranscript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingTranscript::Full => write!(f, "FULL"),
            RatingTranscript::Middle => write!(f, "MIDDLE"),
            RatingTranscript::Short => write!(f, "SHORT"),
        }
    }
}

// ==========================================
// Режим поля "Z" (Z Field Mode)
// ==========================================
// Печать прочерка в незаполненных строках
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZFieldMode {
    PerLine, // в каждой строке
    #[default]
    One,     // один на блок
    NoPrint, // не печатать
}

impl ZFieldMode {
    pub fn index(self) -> i64 {
        match self {
            ZFieldMode::PerLine => 0,
            ZFieldMode::One => 1,
            ZFieldMode::NoPrint => 2,
        }
    }

    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(ZFieldMode::PerLine),
            1 => Some(ZFieldMode::One),
            2 => Some(ZFieldMode::NoPrint),
            _ => None,
        }
    }
}

impl fmt::Display for ZFieldMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZFieldMode::PerLine => write!(f, "PER_LINE"),
            ZFieldMode::One => write!(f, "ONE"),
            ZFieldMode::NoPrint => write!(f, "NO_PRINT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for v in [RatingAlignment::LeftCorner, RatingAlignment::Center] {
            assert_eq!(RatingAlignment::from_index(v.index()), Some(v));
        }
        for v in [
            RatingTranscript::Full,
            RatingTranscript::Middle,
            RatingTranscript::Short,
        ] {
            assert_eq!(RatingTranscript::from_index(v.index()), Some(v));
        }
        for v in [ZFieldMode::PerLine, ZFieldMode::One, ZFieldMode::NoPrint] {
            assert_eq!(ZFieldMode::from_index(v.index()), Some(v));
        }
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        assert_eq!(RatingAlignment::from_index(2), None);
        assert_eq!(RatingTranscript::from_index(3), None);
        assert_eq!(ZFieldMode::from_index(-1), None);
    }

    #[test]
    fn test_defaults_match_settings_indices() {
        // Индексы по умолчанию: 0 / 2 / 1
        assert_eq!(RatingAlignment::default().index(), 0);
        assert_eq!(RatingTranscript::default().index(), 2);
        assert_eq!(ZFieldMode::default().index(), 1);
    }
}
