// src/export/xlsx.rs

use crate::core::calculator::{GRID_LEGEND, StatusGrid};
use crate::core::summary::{AttendanceRow, MonthlySummary, PayrollRow, SummaryLine};
use crate::errors::AppResult;
use crate::export::model::{
    DAILY_HEADERS, DAILY_WIDTHS, PAYROLL_HEADERS, SUMMARY_WIDTHS, attendance_to_row,
    payroll_to_row,
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use unicode_width::UnicodeWidthStr;

/// Attendance column in the daily and summary sheets.
const ATTENDANCE_COL: u16 = 3;

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

/// LWP → red fill with white bold text, Present → green fill with black
/// bold text, anything else unstyled.
fn status_format(value: &str) -> Option<Format> {
    let (fill, font) = match value {
        "LWP" => (0xFF0000, 0xFFFFFF),
        "Present" => (0x00FF00, 0x000000),
        _ => return None,
    };

    Some(
        Format::new()
            .set_bold()
            .set_font_color(Color::RGB(font))
            .set_background_color(Color::RGB(fill))
            .set_pattern(FormatPattern::Solid),
    )
}

fn write_header(worksheet: &mut Worksheet, row: u32, headers: &[&str]) -> AppResult<()> {
    let fmt = header_format();
    for (col, h) in headers.iter().enumerate() {
        worksheet.write_with_format(row, col as u16, *h, &fmt)?;
    }
    Ok(())
}

fn write_status_cell(worksheet: &mut Worksheet, row: u32, col: u16, value: &str) -> AppResult<()> {
    match status_format(value) {
        Some(fmt) => worksheet.write_with_format(row, col, value, &fmt)?,
        None => worksheet.write(row, col, value)?,
    };
    Ok(())
}

fn set_widths(worksheet: &mut Worksheet, widths: &[f64]) -> AppResult<()> {
    for (c, w) in widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w)?;
    }
    Ok(())
}

fn decimal_to_f64(d: &Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

/// Daily (or past) attendance workbook with a single sheet.
pub fn daily_workbook(rows: &[AttendanceRow], sheet_name: &str) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    write_header(worksheet, 0, &DAILY_HEADERS)?;
    worksheet.set_freeze_panes(1, 0)?;

    for (i, r) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        let values = attendance_to_row(r);

        // data come testo ISO
        worksheet.write(row, 0, values[0].as_str())?;
        worksheet.write(row, 1, values[1].as_str())?;
        worksheet.write(row, 2, values[2].as_str())?;
        write_status_cell(worksheet, row, ATTENDANCE_COL, &values[3])?;
    }

    set_widths(worksheet, &DAILY_WIDTHS)?;

    Ok(workbook.save_to_buffer()?)
}

/// Monthly workbook: "Attendance Summary", "Payroll Summary", "Monthly Grid".
pub fn summary_workbook(summary: &MonthlySummary) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Attendance Summary")?;
        write_attendance_summary(sheet, &summary.attendance)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Payroll Summary")?;
        write_payroll(sheet, &summary.payroll)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Monthly Grid")?;
        write_grid(sheet, &summary.grid)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Key row (Date, Name, Duty, Attendance), then the summary lines: the
/// first is its own header, `Date: ...` lines are bold.
fn write_attendance_summary(sheet: &mut Worksheet, lines: &[SummaryLine]) -> AppResult<()> {
    write_header(sheet, 0, &DAILY_HEADERS)?;
    let bold = Format::new().set_bold();

    for (i, line) in lines.iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, value) in line.cells().iter().enumerate() {
            let col = col as u16;
            if value.is_empty() {
                continue;
            }
            if i == 0 || col == 0 {
                sheet.write_with_format(row, col, *value, &bold)?;
            } else if col == ATTENDANCE_COL {
                write_status_cell(sheet, row, col, value)?;
            } else {
                sheet.write(row, col, *value)?;
            }
        }
    }

    set_widths(sheet, &SUMMARY_WIDTHS)
}

fn write_payroll(sheet: &mut Worksheet, rows: &[PayrollRow]) -> AppResult<()> {
    write_header(sheet, 0, &PAYROLL_HEADERS)?;
    sheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = PAYROLL_HEADERS.iter().map(|h| h.width()).collect();
    let num_fmt = Format::new().set_align(FormatAlign::Right);

    for (i, r) in rows.iter().enumerate() {
        let row = (i + 1) as u32;

        sheet.write(row, 0, r.name.as_str())?;
        sheet.write(row, 1, r.duty.as_str())?;
        sheet.write_with_format(row, 2, decimal_to_f64(&r.salary), &num_fmt)?;
        sheet.write_with_format(row, 3, r.total_days as f64, &num_fmt)?;
        sheet.write_with_format(row, 4, r.lwp as f64, &num_fmt)?;
        sheet.write_with_format(row, 5, r.paid_days as f64, &num_fmt)?;
        sheet.write_with_format(row, 6, decimal_to_f64(&r.net_pay), &num_fmt)?;

        for (c, v) in payroll_to_row(r).iter().enumerate() {
            col_widths[c] = col_widths[c].max(v.width());
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        sheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }
    Ok(())
}

fn grid_code_format(code: &str) -> Format {
    let base = Format::new()
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);

    let fill = match code {
        "N" => Some(0xFFC7CE),
        "S" => Some(0xD9D9D9),
        "V" => Some(0xDDEBF7),
        "H" => Some(0xFFF2CC),
        _ => None,
    };

    match fill {
        Some(rgb) => base
            .set_background_color(Color::RGB(rgb))
            .set_pattern(FormatPattern::Solid),
        None => base,
    }
}

/// Title, header row, one row per employee, then the legend.
fn write_grid(sheet: &mut Worksheet, grid: &StatusGrid) -> AppResult<()> {
    let title = Format::new().set_bold().set_font_size(14);
    sheet.write_with_format(0, 0, format!("Monthly Attendance: {}", grid.month.label()), &title)?;

    let header = grid.header();
    let header_refs: Vec<&str> = header.iter().map(String::as_str).collect();
    write_header(sheet, 1, &header_refs)?;
    sheet.set_freeze_panes(2, 4)?;

    let border = Format::new().set_border(FormatBorder::Thin);
    let first_day_col = 4;
    let total_col = first_day_col + 2 * grid.days as usize;

    for (i, r) in grid.rows.iter().enumerate() {
        let row = (i + 2) as u32;
        for (col, value) in r.cells.iter().enumerate() {
            let is_code = col >= first_day_col && col < total_col && (col - first_day_col) % 2 == 0;

            if is_code {
                sheet.write_with_format(row, col as u16, value.as_str(), &grid_code_format(value))?;
            } else if col == 0 || col == total_col {
                let n: f64 = value.parse().unwrap_or(0.0);
                sheet.write_with_format(row, col as u16, n, &border)?;
            } else {
                sheet.write_with_format(row, col as u16, value.as_str(), &border)?;
            }
        }
    }

    let legend_row = (grid.rows.len() + 3) as u32;
    sheet.write_with_format(legend_row, 0, "Legend:", &Format::new().set_bold())?;
    sheet.write(legend_row, 1, GRID_LEGEND)?;

    sheet.set_column_width(0, 5)?;
    sheet.set_column_width(1, 25)?;
    sheet.set_column_width(2, 12)?;
    sheet.set_column_width(3, 14)?;
    for day in 0..grid.days as u16 {
        let code_col = first_day_col as u16 + 2 * day;
        sheet.set_column_width(code_col, 3)?;
        sheet.set_column_width(code_col + 1, 2)?;
    }
    sheet.set_column_width(total_col as u16, 7)?;
    sheet.set_column_width(total_col as u16 + 1, 15)?;

    Ok(())
}
