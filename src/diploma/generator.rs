// ==========================================
// Генератор аттестатов - генерация документа
// ==========================================
// Накапливает по странице на выпускника (printpdf),
// отдельная операция save сбрасывает документ в файл.
// План размещения считает модуль layout; здесь только
// отрисовка: текст, QR-код, изображения.
// ==========================================
// Ось Y: план хранит координаты сверху вниз,
// PDF считает снизу вверх - пересчёт при отрисовке.
// ==========================================

use crate::diploma::error::{GenerateError, GenerateResult};
use crate::diploma::layout::{
    self, font_height_mm, PlacedImage, TitlePagePlan, PAGE_HEIGHT_MM, PAGE_WIDTH_MM,
};
use crate::diploma::metrics::FontMetrics;
use crate::domain::{DiplomaParams, PupilIdentity, TitleLayoutParams};
use printpdf::image_crate::codecs::jpeg::JpegDecoder;
use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::image_crate::{self, ColorType, ImageFormat};
use printpdf::{
    Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};
use qrcode::{Color, QrCode};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Cursor};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

// ===== Фиксированные пути =====

/// Каталог результата (создаётся при сохранении)
pub const OUTPUT_DIR: &str = "output";

/// Имя файла результата
pub const OUTPUT_FILE_NAME: &str = "attestats.pdf";

/// Шрифт по умолчанию
pub const DEFAULT_FONT_PATH: &str = "assets/fonts/TimesNewRoman.ttf";

/// Фон титульного листа по умолчанию
pub const DEFAULT_BACKGROUND_PATH: &str = "assets/title_background.png";

// Плотность, с которой printpdf пересчитывает пиксели в мм
const IMAGE_DPI: f64 = 300.0;

// Пикселей на модуль QR-кода и ширина тихой зоны в модулях
const QR_MODULE_PX: usize = 8;
const QR_QUIET_MODULES: usize = 4;

// ==========================================
// DiplomaGenerator
// ==========================================
/// Накапливающий генератор титульных листов.
///
/// Скрытого состояния нет: все параметры печати
/// передаются в каждый вызов `generate`.
pub struct DiplomaGenerator {
    doc: PdfDocumentReference,
    font: IndirectFontRef,
    metrics: FontMetrics,
    background_path: PathBuf,
    pages: usize,
}

impl DiplomaGenerator {
    /// Создание пустого документа с внешним TTF-шрифтом
    pub fn new<F, B>(font_path: F, background_path: B) -> GenerateResult<Self>
    where
        F: AsRef<Path>,
        B: AsRef<Path>,
    {
        let metrics = FontMetrics::from_file(font_path)?;
        let doc = PdfDocument::empty("Аттестаты");
        let font = doc
            .add_external_font(Cursor::new(metrics.bytes().to_vec()))
            .map_err(|e| GenerateError::Pdf(e.to_string()))?;

        Ok(Self {
            doc,
            font,
            metrics,
            background_path: background_path.as_ref().to_path_buf(),
            pages: 0,
        })
    }

    /// Генератор с путями по умолчанию
    pub fn with_default_assets() -> GenerateResult<Self> {
        Self::new(DEFAULT_FONT_PATH, DEFAULT_BACKGROUND_PATH)
    }

    /// Число накопленных страниц
    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Добавление титульного листа одного выпускника
    pub fn generate(
        &mut self,
        pupil: &dyn PupilIdentity,
        diploma: &DiplomaParams,
        layout_params: &TitleLayoutParams,
    ) -> GenerateResult<()> {
        let plan = layout::compose_title_page(pupil, diploma, layout_params, &self.metrics);

        let (page_index, layer_index) =
            self.doc
                .add_page(Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "Титульный лист");
        let layer = self.doc.get_page(page_index).get_layer(layer_index);

        // Фон рисуется первым, поверх него текст
        if let Some(background) = &plan.background {
            self.draw_image_file(&layer, &self.background_path, background)?;
        }

        self.draw_text(&layer, &plan);
        self.draw_qr(&layer, &plan)?;

        self.pages += 1;
        tracing::debug!(
            pupil = %pupil.full_name(),
            page = self.pages,
            "титульный лист добавлен"
        );
        Ok(())
    }

    /// Сохранение накопленного документа в фиксированный путь,
    /// каталог результата создаётся при отсутствии
    pub fn save(self) -> GenerateResult<PathBuf> {
        let output_dir = Path::new(OUTPUT_DIR);
        if !output_dir.is_dir() {
            fs::create_dir_all(output_dir)?;
        }

        let path = output_dir.join(OUTPUT_FILE_NAME);
        let file = File::create(&path)?;
        self.doc
            .save(&mut BufWriter::new(file))
            .map_err(|e| GenerateError::Pdf(e.to_string()))?;

        tracing::info!(pages = self.pages, file = %path.display(), "документ сохранён");
        Ok(path)
    }

    // ===== Отрисовка =====

    fn draw_text(&self, layer: &PdfLayerReference, plan: &TitlePagePlan) {
        for line in &plan.lines {
            layer.use_text(
                line.text.clone(),
                line.font_size_pt as f32,
                Mm(line.left_mm as f32),
                Mm(pdf_baseline_y(line.top_mm, line.font_size_pt) as f32),
                &self.font,
            );
        }
    }

    // QR-код: PNG пишется во временный файл, встраивается
    // и удаляется в пределах одного вызова. NamedTempFile
    // удаляет файл при выходе из области видимости, в том
    // числе при ошибке встраивания.
    fn draw_qr(&self, layer: &PdfLayerReference, plan: &TitlePagePlan) -> GenerateResult<()> {
        let qr_file = write_qr_png(&plan.qr_payload)?;
        self.draw_image_file(layer, qr_file.path(), &plan.qr)
    }

    fn draw_image_file(
        &self,
        layer: &PdfLayerReference,
        path: &Path,
        placed: &PlacedImage,
    ) -> GenerateResult<()> {
        let image = decode_image(path)?;

        let natural_width_mm = f64::from(image.image.width.0 as u32) / IMAGE_DPI * 25.4;
        let natural_height_mm = f64::from(image.image.height.0 as u32) / IMAGE_DPI * 25.4;

        image.add_to_layer(
            layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(placed.left_mm as f32)),
                translate_y: Some(Mm((PAGE_HEIGHT_MM - placed.top_mm - placed.height_mm) as f32)),
                scale_x: Some((placed.width_mm / natural_width_mm) as f32),
                scale_y: Some((placed.height_mm / natural_height_mm) as f32),
                dpi: Some(IMAGE_DPI as f32),
                ..Default::default()
            },
        );

        Ok(())
    }
}

// Перевод верха строки (ось Y вниз) в базовую линию PDF (ось Y вверх)
fn pdf_baseline_y(top_mm: f64, font_size_pt: f64) -> f64 {
    PAGE_HEIGHT_MM - top_mm - font_height_mm(font_size_pt)
}

// Растровый QR-код с тихой зоной, оттенки серого
fn write_qr_png(payload: &str) -> GenerateResult<NamedTempFile> {
    let code = QrCode::new(payload.as_bytes()).map_err(|e| GenerateError::Qr(e.to_string()))?;
    let modules = code.width();
    let colors = code.to_colors();

    let side = (modules + 2 * QR_QUIET_MODULES) * QR_MODULE_PX;
    let mut pixels = vec![255u8; side * side];

    for row in 0..modules {
        for col in 0..modules {
            if colors[row * modules + col] != Color::Dark {
                continue;
            }
            let top = (row + QR_QUIET_MODULES) * QR_MODULE_PX;
            let left = (col + QR_QUIET_MODULES) * QR_MODULE_PX;
            for dy in 0..QR_MODULE_PX {
                let offset = (top + dy) * side + left;
                pixels[offset..offset + QR_MODULE_PX].fill(0);
            }
        }
    }

    let file = tempfile::Builder::new()
        .prefix("diploma-qr-")
        .suffix(".png")
        .tempfile()?;
    image_crate::save_buffer_with_format(
        file.path(),
        &pixels,
        side as u32,
        side as u32,
        ColorType::L8,
        ImageFormat::Png,
    )
    .map_err(|e| GenerateError::Qr(e.to_string()))?;

    Ok(file)
}

// Декодирование изображения по расширению файла
fn decode_image(path: &Path) -> GenerateResult<Image> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if !matches!(ext.as_str(), "png" | "jpg" | "jpeg") {
        return Err(GenerateError::UnsupportedImageFormat(ext));
    }

    let image_error = |e: &dyn std::fmt::Display| GenerateError::Image {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let file = File::open(path).map_err(|e| image_error(&e))?;
    let reader = BufReader::new(file);

    if ext == "png" {
        let decoder = PngDecoder::new(reader).map_err(|e| image_error(&e))?;
        Image::try_from(decoder).map_err(|e| image_error(&e))
    } else {
        let decoder = JpegDecoder::new(reader).map_err(|e| image_error(&e))?;
        Image::try_from(decoder).map_err(|e| image_error(&e))
    }
}
