use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::date_fmt::format_match_date;
use crate::schedule::DayGroup;

pub const DEFAULT_EXPORT_PATH: &str = "matchday_schedule.xlsx";

pub struct ExportReport {
    pub days: usize,
    pub matches: usize,
}

/// Write the grouped schedule to an xlsx workbook, one row per match in
/// board order with the formatted day label repeated per row. This is the
/// terminal stand-in for the original page's print button.
pub fn export_schedule(path: &Path, days: &[DayGroup]) -> Result<ExportReport> {
    let mut rows = vec![vec![
        "날짜".to_string(),
        "시간".to_string(),
        "홈".to_string(),
        "원정".to_string(),
        "구장".to_string(),
        "구분".to_string(),
        "리그".to_string(),
        "경기번호".to_string(),
    ]];

    for day in days {
        let label = format_match_date(&day.date);
        for record in &day.matches {
            rows.push(vec![
                label.clone(),
                record.time.clone(),
                record.home.clone(),
                record.away.clone(),
                record.stadium.clone(),
                record.category.clone(),
                record.league.clone(),
                record.match_no.clone(),
            ]);
        }
    }

    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Schedule")?;
        write_rows(sheet, &rows)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;

    Ok(ExportReport {
        days: days.len(),
        matches: rows.len().saturating_sub(1),
    })
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
