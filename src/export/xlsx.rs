// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::excel_date::date_to_excel_serial;
use crate::export::model::{ExportReport, HEADERS, record_to_row};
use crate::utils::date::stamp_to_date;
use crate::utils::formatting::render_number;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Formula, Workbook,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const SHEET_NAME: &str = "Daily totals";
const CALORIES_COL: u16 = 2;

/// Styled XLSX export with a total row and auto-sized columns.
///
/// Row 0 is the header, one row per day follows, then a `Total` row whose
/// calories cell is a `SUM` over the day rows (cached with the computed total).
pub(crate) fn export_xlsx(report: &ExportReport, path: &Path) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = HEADERS.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Giorni
    // ---------------------------
    for (row_index, rec) in report.records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let bg = if row_index % 2 == 0 { band1 } else { band2 };

        let base = Format::new()
            .set_background_color(bg)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        // seriale Excel quando lo stamp è una data valida, altrimenti testo
        match stamp_to_date(rec.stamp).and_then(date_to_excel_serial) {
            Some(serial) => {
                let fmt = base.clone().set_num_format("yyyy-mm-dd");
                worksheet.write_with_format(row, 0, serial, &fmt)?;
            }
            None => {
                worksheet.write_with_format(row, 0, rec.date.as_str(), &base)?;
            }
        }

        let num = base.clone().set_align(FormatAlign::Right);
        worksheet.write_with_format(row, 1, rec.stamp, &num)?;
        worksheet.write_with_format(row, CALORIES_COL, rec.calories, &num)?;

        for (col, value) in record_to_row(rec).iter().enumerate() {
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    // ---------------------------
    // Totale
    // ---------------------------
    let total_row = (report.records.len() + 1) as u32;
    let total_format = Format::new()
        .set_bold()
        .set_border_top(FormatBorder::Double);

    worksheet.write_with_format(total_row, 0, "Total", &total_format)?;
    let sum = Formula::new(format!("=SUM(C2:C{})", total_row))
        .set_result(render_number(report.total_calories));
    worksheet.write_formula_with_format(total_row, CALORIES_COL, sum, &total_format)?;

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    workbook.save(path)?;
    Ok(())
}
