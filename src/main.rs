// ==========================================
// Генератор аттестатов - консольный вход
// ==========================================
// Тонкий потребитель библиотеки: настройки,
// импорт ведомости, генерация, сохранение.
// Интерактивная форма сюда не входит.
// ==========================================

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use diploma_press::diploma::{DEFAULT_BACKGROUND_PATH, DEFAULT_FONT_PATH};
use diploma_press::{logging, DiplomaGenerator, PupilRecord, RosterImporter, SettingsStore};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "diploma-press",
    version,
    about = "Генератор школьных аттестатов: импорт ведомости и печать титульных листов"
)]
struct Cli {
    /// Файл ведомости (.xlsx/.xls/.csv)
    roster: PathBuf,

    /// Номер выпускника в ведомости, с единицы;
    /// без флага печатаются все
    #[arg(long)]
    index: Option<usize>,

    /// Файл настроек (по умолчанию - каталог конфигурации)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// TTF-шрифт титульного листа
    #[arg(long, default_value = DEFAULT_FONT_PATH)]
    font: PathBuf,

    /// Фоновое изображение титульного листа
    #[arg(long, default_value = DEFAULT_BACKGROUND_PATH)]
    background: PathBuf,

    /// Вывести импортированные записи в JSON и выйти
    #[arg(long)]
    dump_json: bool,
}

fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", diploma_press::APP_NAME, diploma_press::VERSION);
    tracing::info!("==================================================");

    let cli = Cli::parse();

    // Настройки печати; неполные секции заменяются умолчаниями
    let settings_path = cli.settings.unwrap_or_else(SettingsStore::default_path);
    tracing::info!(file = %settings_path.display(), "файл настроек");
    let store = SettingsStore::open(&settings_path)
        .with_context(|| format!("не удалось открыть настройки {}", settings_path.display()))?;
    let diploma_params = store.diploma_params();
    let title_params = store.title_params();

    // Импорт ведомости
    let importer = RosterImporter::open(&cli.roster)
        .with_context(|| format!("не удалось импортировать {}", cli.roster.display()))?;

    if cli.dump_json {
        let records = importer.full_records()?;
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let pupils = importer.identities()?;
    if pupils.is_empty() {
        bail!("в ведомости нет выпускников, печатать нечего");
    }

    // Номера считаются с единицы; нулевого выпускника нет,
    // "все" выражается отсутствием флага
    let selected: Vec<&PupilRecord> = match cli.index {
        Some(0) => bail!("номер выпускника считается с единицы"),
        Some(i) => vec![pupils
            .get(i - 1)
            .ok_or_else(|| anyhow!("в ведомости только {} записей", pupils.len()))?],
        None => pupils.iter().collect(),
    };

    let mut generator = DiplomaGenerator::new(&cli.font, &cli.background)?;
    for pupil in &selected {
        generator.generate(*pupil, &diploma_params, &title_params)?;
    }

    let output = generator.save()?;
    tracing::info!(
        pupils = selected.len(),
        file = %output.display(),
        "генерация завершена"
    );
    Ok(())
}
