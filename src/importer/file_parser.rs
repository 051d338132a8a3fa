// ==========================================
// Генератор аттестатов - разбор файла ведомости
// ==========================================
// Поддержка: Excel (.xlsx/.xls) / CSV (.csv)
// Результат: строка заголовков + строки данных,
// позиционно (раскладка колонок фиксирована)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

// ==========================================
// RawTable - разобранная таблица
// ==========================================
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

// ==========================================
// CsvParser
// ==========================================
pub struct CsvParser;

impl CsvParser {
    pub fn parse(&self, file_path: &Path) -> ImportResult<RawTable> {
        let path = file_path;

        // Проверка существования файла
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // строки разной длины допустимы
            .from_reader(file);

        // Строка заголовков
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        if headers.is_empty() {
            return Err(ImportError::MissingHeader);
        }

        // Строки данных
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row: Vec<String> = record.iter().map(|v| v.trim().to_string()).collect();

            // Полностью пустые строки пропускаются
            if row.iter().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row);
        }

        Ok(RawTable { headers, rows })
    }
}

// ==========================================
// ExcelParser
// ==========================================
pub struct ExcelParser;

impl ExcelParser {
    pub fn parse(&self, file_path: &Path) -> ImportResult<RawTable> {
        let path = file_path;

        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let mut workbook: Xlsx<_> = open_workbook(path)?;

        // Первый лист книги
        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::ExcelParseError(
                "в книге нет листов".to_string(),
            ));
        }

        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        // Заголовки - первая строка
        let mut row_iter = range.rows();
        let header_row = row_iter.next().ok_or(ImportError::MissingHeader)?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        // Строки данных
        let mut rows = Vec::new();
        for data_row in row_iter {
            let row: Vec<String> = data_row
                .iter()
                .map(|cell| cell.to_string().trim().to_string())
                .collect();

            if row.iter().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row);
        }

        Ok(RawTable { headers, rows })
    }
}

// ==========================================
// UniversalFileParser - выбор по расширению
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<RawTable> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse(path),
            "xlsx" | "xls" => ExcelParser.parse(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_csv_parser_valid_file() {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(temp_file, "Фамилия,Имя,Отчество").unwrap();
        writeln!(temp_file, "Иванов,Иван,Иванович").unwrap();
        writeln!(temp_file, "Петров,Пётр,Петрович").unwrap();
        temp_file.flush().unwrap();

        let table = CsvParser.parse(temp_file.path()).unwrap();
        assert_eq!(table.headers, vec!["Фамилия", "Имя", "Отчество"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][0], "Иванов");
    }

    #[test]
    fn test_csv_parser_skips_blank_rows() {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(temp_file, "Фамилия,Имя").unwrap();
        writeln!(temp_file, "Иванов,Иван").unwrap();
        writeln!(temp_file, ",").unwrap();
        temp_file.flush().unwrap();

        let table = CsvParser.parse(temp_file.path()).unwrap();
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let result = CsvParser.parse(Path::new("/nonexistent/roster.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = UniversalFileParser.parse("roster.pdf");
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }
}
