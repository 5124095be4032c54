use serde::Serialize;

use crate::dataset::{DatasetError, DatasetStore};

pub const DEFAULT_COUNTRY: &str = "Brazil";
pub const DEFAULT_YEAR: u16 = 2022;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    WinnersMap,
    CountryPerformance,
    TournamentDetails,
}

impl Tab {
    pub const ALL: [Tab; 3] = [
        Tab::WinnersMap,
        Tab::CountryPerformance,
        Tab::TournamentDetails,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::WinnersMap => "World Cup Winners Map",
            Tab::CountryPerformance => "Country Performance",
            Tab::TournamentDetails => "Tournament Details",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::WinnersMap => 0,
            Tab::CountryPerformance => 1,
            Tab::TournamentDetails => 2,
        }
    }
}

/// What the user currently has selected, passed explicitly to [`select_view`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Map,
    Country(String),
    Year(u16),
}

impl Selection {
    pub fn tab(&self) -> Tab {
        match self {
            Selection::Map => Tab::WinnersMap,
            Selection::Country(_) => Tab::CountryPerformance,
            Selection::Year(_) => Tab::TournamentDetails,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoroplethEntry {
    pub country: String,
    pub region_code: Option<&'static str>,
    pub wins: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoroplethSpec {
    pub title: String,
    pub entries: Vec<ChoroplethEntry>,
    pub max_wins: u32,
}

impl ChoroplethSpec {
    /// Entries that can be placed on the map.
    pub fn mapped(&self) -> impl Iterator<Item = (&ChoroplethEntry, &'static str)> {
        self.entries
            .iter()
            .filter_map(|e| e.region_code.map(|code| (e, code)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarkerKind {
    Gold,
    Silver,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointSeries {
    pub label: &'static str,
    pub marker: MarkerKind,
    // Vertical lane on the shared year axis.
    pub row: u8,
    pub years: Vec<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryTimeline {
    pub country: String,
    pub title: String,
    pub wins_timeline: Vec<u16>,
    pub runner_up_timeline: Vec<u16>,
    pub win_count: usize,
    pub runner_up_count: usize,
    pub series: Vec<PointSeries>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TournamentCard {
    pub year: u16,
    pub winner: String,
    pub runner_up: String,
    pub host: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Map(ChoroplethSpec),
    Country(CountryTimeline),
    Year(TournamentCard),
    NoData { year: u16, reason: String },
}

pub fn select_view(store: &DatasetStore, selection: &Selection) -> View {
    match selection {
        Selection::Map => View::Map(map_view(store)),
        Selection::Country(country) => View::Country(country_view(store, country)),
        Selection::Year(year) => match year_view(store, *year) {
            Ok(card) => View::Year(card),
            Err(err) => View::NoData {
                year: *year,
                reason: err.to_string(),
            },
        },
    }
}

pub fn map_view(store: &DatasetStore) -> ChoroplethSpec {
    let entries: Vec<ChoroplethEntry> = store
        .win_counts()
        .iter()
        .map(|c| ChoroplethEntry {
            country: c.country.clone(),
            region_code: c.region_code,
            wins: c.wins,
        })
        .collect();
    let max_wins = entries.iter().map(|e| e.wins).max().unwrap_or(0);
    ChoroplethSpec {
        title: "Number of World Cup Wins by Country".to_string(),
        entries,
        max_wins,
    }
}

pub fn country_view(store: &DatasetStore, country: &str) -> CountryTimeline {
    // Store records are already in ascending year order.
    let wins_timeline: Vec<u16> = store
        .records()
        .iter()
        .filter(|r| r.winner == country)
        .map(|r| r.year)
        .collect();
    let runner_up_timeline: Vec<u16> = store
        .records()
        .iter()
        .filter(|r| r.runner_up == country)
        .map(|r| r.year)
        .collect();

    let mut series = Vec::with_capacity(2);
    if !wins_timeline.is_empty() {
        series.push(PointSeries {
            label: "Winner",
            marker: MarkerKind::Gold,
            row: 2,
            years: wins_timeline.clone(),
        });
    }
    if !runner_up_timeline.is_empty() {
        series.push(PointSeries {
            label: "Runner-up",
            marker: MarkerKind::Silver,
            row: 1,
            years: runner_up_timeline.clone(),
        });
    }

    CountryTimeline {
        country: country.to_string(),
        title: format!("{country}'s World Cup Performance"),
        win_count: wins_timeline.len(),
        runner_up_count: runner_up_timeline.len(),
        wins_timeline,
        runner_up_timeline,
        series,
    }
}

pub fn year_view(store: &DatasetStore, year: u16) -> Result<TournamentCard, DatasetError> {
    let record = store.get_by_year(year)?;
    Ok(TournamentCard {
        year: record.year,
        winner: record.winner.clone(),
        runner_up: record.runner_up.clone(),
        host: record.host.clone(),
    })
}
