//! Inventory report generation (spreadsheet and PDF)

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use rust_xlsxwriter::{Format, Workbook};

use crate::{
    error::{AppError, AppResult},
    models::equipment::{Equipment, EquipmentQuery},
    repository::Repository,
};

const EXCEL_HEADERS: [&str; 11] = [
    "ID",
    "Ubicación",
    "Resguardante",
    "Departamento",
    "Tipo",
    "Número de Serie",
    "Marca",
    "Modelo",
    "Fecha Adquisición",
    "Estado",
    "Observaciones",
];

const PDF_HEADERS: [&str; 8] = [
    "Tipo",
    "Marca",
    "Modelo",
    "Serie",
    "Estado",
    "Ubicación",
    "Resguardante",
    "Depto",
];

// Landscape letter
const PAGE_WIDTH_MM: f32 = 279.4;
const PAGE_HEIGHT_MM: f32 = 215.9;
const MARGIN_MM: f32 = 14.0;
const ROW_STEP_MM: f32 = 6.0;
const COLUMN_WIDTH_MM: f32 = (PAGE_WIDTH_MM - 2.0 * MARGIN_MM) / PDF_HEADERS.len() as f32;

/// Cell values for one spreadsheet row
fn excel_row(eq: &Equipment) -> [String; 11] {
    [
        eq.id.to_string(),
        eq.ubicacion.clone(),
        eq.resguardante.clone(),
        eq.departamento.clone(),
        eq.tipo_bien.as_str().to_string(),
        eq.numero_serie.clone(),
        eq.marca.clone(),
        eq.modelo.clone(),
        eq.fecha_adquisicion.to_string(),
        eq.estado_operativo.as_str().to_string(),
        eq.observaciones.clone(),
    ]
}

/// Cell values for one PDF row, clipped to the column width
fn pdf_row(eq: &Equipment) -> [String; 8] {
    [
        clip(eq.tipo_bien.as_str(), 15),
        clip(&eq.marca, 15),
        clip(&eq.modelo, 15),
        clip(&eq.numero_serie, 15),
        clip(eq.estado_operativo.as_str(), 15),
        clip(&eq.ubicacion, 15),
        clip(&eq.resguardante, 15),
        clip(&eq.departamento, 15),
    ]
}

fn clip(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Build the inventory workbook (xlsx)
pub fn inventory_workbook(equipment: &[Equipment]) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Inventario")
        .map_err(|e| AppError::Internal(format!("Failed to build workbook: {}", e)))?;

    for (col, header) in EXCEL_HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| AppError::Internal(format!("Failed to build workbook: {}", e)))?;
    }
    for (row, eq) in equipment.iter().enumerate() {
        for (col, value) in excel_row(eq).iter().enumerate() {
            worksheet
                .write_string((row + 1) as u32, col as u16, value.as_str())
                .map_err(|e| AppError::Internal(format!("Failed to build workbook: {}", e)))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| AppError::Internal(format!("Failed to build workbook: {}", e)))
}

/// Build the inventory PDF report (landscape letter, one row per record)
pub fn inventory_pdf(equipment: &[Equipment]) -> AppResult<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Inventario de Recursos Informáticos",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Capa 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::Internal(format!("Failed to build PDF: {}", e)))?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| AppError::Internal(format!("Failed to build PDF: {}", e)))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    layer.use_text(
        "Inventario de Recursos Informáticos",
        14.0,
        Mm(MARGIN_MM),
        Mm(y),
        &font_bold,
    );
    y -= 2.0 * ROW_STEP_MM;
    write_pdf_row(&layer, &font_bold, 9.0, y, &PDF_HEADERS.map(String::from));
    y -= ROW_STEP_MM;

    for eq in equipment {
        if y < MARGIN_MM {
            let (page, page_layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Capa 1");
            layer = doc.get_page(page).get_layer(page_layer);
            y = PAGE_HEIGHT_MM - MARGIN_MM;
            write_pdf_row(&layer, &font_bold, 9.0, y, &PDF_HEADERS.map(String::from));
            y -= ROW_STEP_MM;
        }
        write_pdf_row(&layer, &font, 8.0, y, &pdf_row(eq));
        y -= ROW_STEP_MM;
    }

    doc.save_to_bytes()
        .map_err(|e| AppError::Internal(format!("Failed to build PDF: {}", e)))
}

fn write_pdf_row(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    size: f32,
    y: f32,
    cells: &[String],
) {
    for (i, cell) in cells.iter().enumerate() {
        layer.use_text(
            cell.as_str(),
            size,
            Mm(MARGIN_MM + i as f32 * COLUMN_WIDTH_MM),
            Mm(y),
            font,
        );
    }
}

#[derive(Clone)]
pub struct ExportService {
    repository: Repository,
}

impl ExportService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Spreadsheet report over the same filtered list as the equipment listing
    pub async fn excel(&self, filter: &EquipmentQuery) -> AppResult<Vec<u8>> {
        let equipment = self.repository.equipment.list(filter).await?;
        inventory_workbook(&equipment)
    }

    /// PDF report over the same filtered list as the equipment listing
    pub async fn pdf(&self, filter: &EquipmentQuery) -> AppResult<Vec<u8>> {
        let equipment = self.repository.equipment.list(filter).await?;
        inventory_pdf(&equipment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{AssetType, OperationalStatus};
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn record() -> Equipment {
        let now = Utc::now();
        Equipment {
            id: Uuid::new_v4(),
            ubicacion: "Edificio A - 1 - 101".to_string(),
            resguardante: "Una Persona Con Nombre Muy Largo".to_string(),
            departamento: "Sistemas".to_string(),
            tipo_bien: AssetType::Computadora,
            numero_serie: "SN-0001".to_string(),
            numero_factura: "F-77".to_string(),
            numero_inventario: "INV-12".to_string(),
            marca: "Dell".to_string(),
            modelo: "Latitude 5420".to_string(),
            fecha_adquisicion: NaiveDate::from_ymd_opt(2023, 5, 10).unwrap(),
            estado_operativo: OperationalStatus::Disponible,
            observaciones: String::new(),
            created_at: now,
            updated_at: now,
            created_by: "admin@universidad.edu".to_string(),
        }
    }

    #[test]
    fn pdf_rows_are_clipped_to_column_width() {
        let row = pdf_row(&record());
        assert!(row.iter().all(|cell| cell.chars().count() <= 15));
        assert_eq!(row[6], "Una Persona Con");
    }

    #[test]
    fn excel_rows_carry_all_columns_verbatim() {
        let eq = record();
        let row = excel_row(&eq);
        assert_eq!(row.len(), EXCEL_HEADERS.len());
        assert_eq!(row[1], eq.ubicacion);
        assert_eq!(row[4], "computadora");
        assert_eq!(row[8], "2023-05-10");
    }

    #[test]
    fn workbook_bytes_look_like_an_xlsx_file() {
        let bytes = inventory_workbook(&[record()]).unwrap();
        // xlsx is a zip container
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn pdf_bytes_look_like_a_pdf_file() {
        let bytes = inventory_pdf(&[record(), record()]).unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");
    }
}
