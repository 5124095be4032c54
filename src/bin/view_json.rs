use anyhow::{Context, anyhow};

use wc_winners_terminal::dataset;
use wc_winners_terminal::views::{self, DEFAULT_COUNTRY, DEFAULT_YEAR, Selection};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let kind = args.next().unwrap_or_else(|| "map".to_string());
    let arg = args.next();

    let selection = match kind.as_str() {
        "map" => Selection::Map,
        "country" => Selection::Country(arg.unwrap_or_else(|| DEFAULT_COUNTRY.to_string())),
        "year" => {
            let year = match arg {
                Some(raw) => raw
                    .trim()
                    .parse::<u16>()
                    .with_context(|| format!("invalid year: {raw}"))?,
                None => DEFAULT_YEAR,
            };
            Selection::Year(year)
        }
        other => {
            return Err(anyhow!(
                "unknown view '{other}' (expected map, country or year)"
            ));
        }
    };

    let store = dataset::shared()?;
    let view = views::select_view(store, &selection);
    let json = serde_json::to_string_pretty(&view).context("serialize view")?;
    println!("{json}");
    Ok(())
}
