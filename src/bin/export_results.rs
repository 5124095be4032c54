use std::path::PathBuf;

use wc_winners_terminal::config::AppConfig;
use wc_winners_terminal::dataset;
use wc_winners_terminal::export;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| export::default_export_path(&config.export_dir));

    let store = dataset::shared()?;
    let report = export::export_workbook(store, &path)?;

    println!("Wrote {}", report.path.display());
    println!("Results:    {}", report.results);
    println!("Win counts: {}", report.win_counts);
    println!("Countries:  {}", report.countries);
    Ok(())
}
