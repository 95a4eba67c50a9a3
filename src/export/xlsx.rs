// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::models::{Action, AttendanceEvent};
use crate::utils::{clean_location, split_date_time};
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 5] = ["Дата", "Время", "ФИО", "Действие", "Локация"];

/// Row fills by action type: green for arrivals, red for departures.
const FILL_ARRIVED: Color = Color::RGB(0xD8F6CE);
const FILL_DEPARTED: Color = Color::RGB(0xFFD6D6);

fn event_to_row(e: &AttendanceEvent) -> Vec<String> {
    let (date, time) = split_date_time(&e.timestamp_str());
    vec![
        date,
        time,
        e.name.clone(),
        e.action.as_str().to_string(),
        clean_location(&e.location),
    ]
}

/// Write the accepted rows to an XLSX report with styled header and
/// per-action row fills, auto-sizing columns by content width.
pub fn write_report(events: &[AttendanceEvent], path: &Path) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Отчёт").map_err(to_io_app_error)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_io_app_error)?;
    }
    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = HEADERS.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    for (row_index, event) in events.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let fill = match event.action {
            Action::Arrived => FILL_ARRIVED,
            Action::Departed => FILL_DEPARTED,
        };
        let format = Format::new()
            .set_background_color(fill)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        for (col, value) in event_to_row(event).iter().enumerate() {
            worksheet
                .write_with_format(row, col as u16, value.as_str(), &format)
                .map_err(to_io_app_error)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (col, width) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(col as u16, *width as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_io_app_error)?;
    Ok(())
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))
}
