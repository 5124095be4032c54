use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::dataset::{CountryRecord, CountryWinCount, DatasetStore, TournamentRecord};

#[derive(Debug, Clone)]
pub struct ExportReport {
    pub path: PathBuf,
    pub results: usize,
    pub win_counts: usize,
    pub countries: usize,
}

pub fn default_export_path(dir: &Path) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("wc_results_{stamp}.xlsx"))
}

pub fn export_workbook(store: &DatasetStore, path: &Path) -> Result<ExportReport> {
    let mut results_rows = vec![vec![
        "Year".to_string(),
        "Winner".to_string(),
        "Runner-up".to_string(),
        "Host".to_string(),
    ]];
    results_rows.extend(store.records().iter().map(result_row));

    let mut win_rows = vec![vec![
        "Country".to_string(),
        "Wins".to_string(),
        "Region Code".to_string(),
    ]];
    win_rows.extend(store.win_counts().iter().map(win_count_row));

    let mut country_rows = vec![vec![
        "Country".to_string(),
        "Wins".to_string(),
        "Runner-ups".to_string(),
        "Hosted".to_string(),
    ]];
    country_rows.extend(store.country_records().iter().map(country_row));

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create export dir {}", parent.display()))?;
    }

    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Results")?;
        write_rows(sheet, &results_rows)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("WinCounts")?;
        write_rows(sheet, &win_rows)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Countries")?;
        write_rows(sheet, &country_rows)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;

    Ok(ExportReport {
        path: path.to_path_buf(),
        results: results_rows.len().saturating_sub(1),
        win_counts: win_rows.len().saturating_sub(1),
        countries: country_rows.len().saturating_sub(1),
    })
}

fn result_row(record: &TournamentRecord) -> Vec<String> {
    vec![
        record.year.to_string(),
        record.winner.clone(),
        record.runner_up.clone(),
        record.host.clone(),
    ]
}

fn win_count_row(count: &CountryWinCount) -> Vec<String> {
    vec![
        count.country.clone(),
        count.wins.to_string(),
        count.region_code.unwrap_or_default().to_string(),
    ]
}

fn country_row(record: &CountryRecord) -> Vec<String> {
    vec![
        record.country.clone(),
        record.wins.to_string(),
        record.runner_ups.to_string(),
        record.hosted.to_string(),
    ]
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
