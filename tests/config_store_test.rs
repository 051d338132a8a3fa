// ==========================================
// Интеграционные тесты хранилища настроек
// ==========================================
// Цель: создание файла при первом обращении,
// полный цикл сохранение/восстановление и
// подстановка умолчаний при неполной секции
// ==========================================


use diploma_press::domain::{DiplomaParams, TitleLayoutParams};
use diploma_press::SettingsStore;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use test_helpers::{custom_diploma_params, custom_title_params};

fn settings_path(dir: &TempDir) -> PathBuf {
    dir.path().join("settings.ini")
}

// Удаление одной строки "ключ = ..." из файла настроек
fn remove_key(path: &Path, key: &str) {
    let text = fs::read_to_string(path).expect("Failed to read settings");
    let filtered: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim_start().starts_with(&format!("{key} =")))
        .collect();
    fs::write(path, filtered.join("\n")).expect("Failed to write settings");
}

fn replace_value(path: &Path, key: &str, value: &str) {
    let text = fs::read_to_string(path).expect("Failed to read settings");
    let replaced: Vec<String> = text
        .lines()
        .map(|line| {
            if line.trim_start().starts_with(&format!("{key} =")) {
                format!("{key} = {value}")
            } else {
                line.to_string()
            }
        })
        .collect();
    fs::write(path, replaced.join("\n")).expect("Failed to write settings");
}

#[test]
fn test_first_use_writes_both_default_sections() {
    let dir = TempDir::new().unwrap();
    let path = settings_path(&dir);

    let store = SettingsStore::open(&path).expect("Failed to open store");
    assert!(path.is_file());

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("[DiplomaParametrs]"));
    assert!(text.contains("[TitleLayoutParametrs]"));
    assert!(text.contains("diploma_fst_font_size = 18"));
    assert!(text.contains("qrcode = x==9.1|y==117"));

    assert_eq!(store.diploma_params(), DiplomaParams::default());
    assert_eq!(store.title_params(), TitleLayoutParams::default());
}

#[test]
fn test_round_trip_both_bundles() {
    let dir = TempDir::new().unwrap();
    let path = settings_path(&dir);

    let diploma = custom_diploma_params();
    let title = custom_title_params();

    {
        let mut store = SettingsStore::open(&path).expect("Failed to open store");
        store.save_diploma_params(&diploma).expect("Failed to save");
        store.save_title_params(&title).expect("Failed to save");
    }

    // Повторное открытие читает то же содержимое
    let store = SettingsStore::open(&path).expect("Failed to reopen store");
    assert_eq!(store.diploma_params(), diploma);
    assert_eq!(store.title_params(), title);
}

#[test]
fn test_multiline_school_name_survives_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = settings_path(&dir);

    let diploma = custom_diploma_params();
    {
        let mut store = SettingsStore::open(&path).unwrap();
        store.save_diploma_params(&diploma).unwrap();
    }

    let store = SettingsStore::open(&path).unwrap();
    assert_eq!(store.diploma_params().school_name, "МБОУ СОШ №1\nг. Москва");
}

#[test]
fn test_missing_key_yields_whole_default_bundle() {
    let dir = TempDir::new().unwrap();
    let path = settings_path(&dir);

    {
        let mut store = SettingsStore::open(&path).unwrap();
        store.save_diploma_params(&custom_diploma_params()).unwrap();
    }

    // Удаление единственного ключа отменяет всю секцию:
    // частичное слияние не выполняется
    remove_key(&path, "z_field");

    let store = SettingsStore::open(&path).unwrap();
    assert_eq!(store.diploma_params(), DiplomaParams::default());
}

#[test]
fn test_malformed_value_yields_whole_default_bundle() {
    let dir = TempDir::new().unwrap();
    let path = settings_path(&dir);

    {
        let mut store = SettingsStore::open(&path).unwrap();
        store.save_diploma_params(&custom_diploma_params()).unwrap();
        store.save_title_params(&custom_title_params()).unwrap();
    }

    replace_value(&path, "diploma_font_size", "одиннадцать");
    replace_value(&path, "qrcode", "9.1;117");

    let store = SettingsStore::open(&path).unwrap();
    assert_eq!(store.diploma_params(), DiplomaParams::default());
    assert_eq!(store.title_params(), TitleLayoutParams::default());
}

#[test]
fn test_out_of_range_selector_index_yields_default_bundle() {
    let dir = TempDir::new().unwrap();
    let path = settings_path(&dir);

    {
        let mut store = SettingsStore::open(&path).unwrap();
        store.save_diploma_params(&custom_diploma_params()).unwrap();
    }

    replace_value(&path, "rating_transcript", "7");

    let store = SettingsStore::open(&path).unwrap();
    assert_eq!(store.diploma_params(), DiplomaParams::default());
}

#[test]
fn test_false_literal_and_other_strings_for_bools() {
    let dir = TempDir::new().unwrap();
    let path = settings_path(&dir);

    {
        SettingsStore::open(&path).unwrap();
    }

    // "False" - ложь
    replace_value(&path, "diploma_print_fst", "False");
    let store = SettingsStore::open(&path).unwrap();
    assert!(!store.diploma_params().print_head_name);

    // Любая другая строка - истина
    replace_value(&path, "diploma_print_fst", "false");
    let store = SettingsStore::open(&path).unwrap();
    assert!(store.diploma_params().print_head_name);
}

#[test]
fn test_one_broken_section_leaves_other_intact() {
    let dir = TempDir::new().unwrap();
    let path = settings_path(&dir);

    let title = custom_title_params();
    {
        let mut store = SettingsStore::open(&path).unwrap();
        store.save_diploma_params(&custom_diploma_params()).unwrap();
        store.save_title_params(&title).unwrap();
    }

    remove_key(&path, "ali_rating");

    // Ломается только секция аттестата, раскладка сохраняется
    let store = SettingsStore::open(&path).unwrap();
    assert_eq!(store.diploma_params(), DiplomaParams::default());
    assert_eq!(store.title_params(), title);
}

#[test]
fn test_save_creates_parent_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("dir").join("settings.ini");

    let store = SettingsStore::open(&path).expect("Failed to open store");
    assert!(path.is_file());
    assert_eq!(store.diploma_params(), DiplomaParams::default());
}
