// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{DATE_FORMAT, TIME_FORMAT, date_serial, time_serial};
use crate::export::model::get_headers;
use crate::export::notify_export_success;
use crate::models::{SpeciesTotal, SurveyRecord};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// A typed cell, so dates and counts land in Excel as real dates/numbers.
enum Cell<'a> {
    Date(f64),
    Time(f64),
    Count(u32),
    Text(&'a str),
}

fn record_cells(r: &SurveyRecord) -> [Cell<'_>; 14] {
    [
        Cell::Date(date_serial(r.date)),
        Cell::Text(&r.location),
        Cell::Text(&r.recorder),
        Cell::Time(time_serial(r.start_time)),
        Cell::Time(time_serial(r.end_time)),
        Cell::Text(&r.wind),
        Cell::Text(&r.precipitation),
        Cell::Text(&r.tide),
        Cell::Text(&r.temperature),
        Cell::Text(&r.species),
        Cell::Count(r.count_le_50m),
        Cell::Count(r.count_gt_50m),
        Cell::Count(r.flythrough),
        Cell::Text(&r.notes),
    ]
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_header(worksheet: &mut Worksheet, headers: &[&str]) -> AppResult<Vec<usize>> {
    let fmt = header_format();
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &fmt)
            .map_err(to_io_app_error)?;
    }
    worksheet.set_freeze_panes(1, 0).ok();
    Ok(headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect())
}

fn set_widths(worksheet: &mut Worksheet, col_widths: &[usize]) -> AppResult<()> {
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }
    Ok(())
}

/// Export XLSX: records sheet + species totals sheet, styled header,
/// banded rows and auto-width columns.
pub(crate) fn export_xlsx(
    records: &[SurveyRecord],
    species: &[SpeciesTotal],
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    // ---------------------------
    // Records
    // ---------------------------
    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Records").map_err(to_io_app_error)?;

        let headers = get_headers();
        let mut col_widths = write_header(worksheet, &headers)?;

        let band1 = Color::RGB(0xEAF3FB);
        let band2 = Color::RGB(0xFFFFFF);

        for (row_index, rec) in records.iter().enumerate() {
            let row = (row_index + 1) as u32;
            let band_color = if row_index % 2 == 0 { band1 } else { band2 };

            for (col, cell) in record_cells(rec).iter().enumerate() {
                let width = write_xlsx_cell(worksheet, row, col as u16, cell, band_color)?;
                col_widths[col] = col_widths[col].max(width);
            }
        }

        set_widths(worksheet, &col_widths)?;
    }

    // ---------------------------
    // Counts by species
    // ---------------------------
    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Species").map_err(to_io_app_error)?;

        let mut col_widths = write_header(worksheet, &["Species", "Total"])?;

        for (row_index, s) in species.iter().enumerate() {
            let row = (row_index + 1) as u32;
            worksheet
                .write(row, 0, s.species.as_str())
                .map_err(to_io_app_error)?;
            worksheet
                .write(row, 1, s.total as f64)
                .map_err(to_io_app_error)?;
            col_widths[0] = col_widths[0].max(UnicodeWidthStr::width(s.species.as_str()));
            col_widths[1] = col_widths[1].max(s.total.to_string().len());
        }

        set_widths(worksheet, &col_widths)?;
    }

    workbook.save(path_str(path)?).map_err(to_io_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Scrive una singola cella; restituisce la larghezza visibile del contenuto.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell<'_>,
    bg: Color,
) -> AppResult<usize> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let width = match cell {
        Cell::Date(serial) => {
            let fmt = base.set_num_format(DATE_FORMAT);
            worksheet
                .write_with_format(row, col, *serial, &fmt)
                .map_err(to_io_app_error)?;
            DATE_FORMAT.len()
        }
        Cell::Time(serial) => {
            let fmt = base.set_num_format(TIME_FORMAT);
            worksheet
                .write_with_format(row, col, *serial, &fmt)
                .map_err(to_io_app_error)?;
            TIME_FORMAT.len()
        }
        Cell::Count(n) => {
            let fmt = base.set_align(FormatAlign::Right);
            worksheet
                .write_with_format(row, col, f64::from(*n), &fmt)
                .map_err(to_io_app_error)?;
            n.to_string().len()
        }
        Cell::Text(s) => {
            worksheet
                .write_with_format(row, col, *s, &base)
                .map_err(to_io_app_error)?;
            UnicodeWidthStr::width(*s)
        }
    };

    Ok(width)
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))
}
