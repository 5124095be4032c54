use std::collections::{BTreeMap, BTreeSet, HashSet};

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use serde::Serialize;
use thiserror::Error;

use crate::regions;

static STORE: OnceCell<DatasetStore> = OnceCell::new();

/// Former names that are folded into their modern equivalent before anything is counted.
const LEGACY_NAMES: &[(&str, &str)] = &[("West Germany", "Germany"), ("FR Germany", "Germany")];

// (year, winner, runner-up, host)
const RESULTS: [(u16, &str, &str, &str); 22] = [
    (1930, "Uruguay", "Argentina", "Uruguay"),
    (1934, "Italy", "Czechoslovakia", "Italy"),
    (1938, "Italy", "Hungary", "France"),
    (1950, "Uruguay", "Brazil", "Brazil"),
    (1954, "Germany", "Hungary", "Switzerland"),
    (1958, "Brazil", "Sweden", "Sweden"),
    (1962, "Brazil", "Czechoslovakia", "Chile"),
    (1966, "England", "Germany", "England"),
    (1970, "Brazil", "Italy", "Mexico"),
    (1974, "Germany", "Netherlands", "Germany"),
    (1978, "Argentina", "Netherlands", "Argentina"),
    (1982, "Italy", "Germany", "Spain"),
    (1986, "Argentina", "Germany", "Mexico"),
    (1990, "Germany", "Argentina", "Italy"),
    (1994, "Brazil", "Italy", "United States"),
    (1998, "France", "Brazil", "France"),
    (2002, "Brazil", "Germany", "South Korea/Japan"),
    (2006, "Italy", "France", "Germany"),
    (2010, "Spain", "Netherlands", "South Africa"),
    (2014, "Germany", "Argentina", "Brazil"),
    (2018, "France", "Croatia", "Russia"),
    (2022, "Argentina", "France", "Qatar"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("no tournament recorded for {year}")]
    NotFound { year: u16 },
    #[error("year {0} appears more than once")]
    DuplicateYear(u16),
    #[error("{year}: {country} listed as both winner and runner-up")]
    SameFinalists { year: u16, country: String },
    #[error("dataset has no records")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TournamentRecord {
    pub year: u16,
    pub winner: String,
    pub runner_up: String,
    pub host: String,
}

impl TournamentRecord {
    pub fn new(year: u16, winner: &str, runner_up: &str, host: &str) -> Self {
        Self {
            year,
            winner: winner.to_string(),
            runner_up: runner_up.to_string(),
            host: host.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryWinCount {
    pub country: String,
    pub wins: u32,
    pub region_code: Option<&'static str>,
}

/// Final appearances and hostings for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRecord {
    pub country: String,
    pub wins: u32,
    pub runner_ups: u32,
    pub hosted: u32,
}

#[derive(Debug, Clone)]
pub struct DatasetStore {
    records: Vec<TournamentRecord>,
    win_counts: Vec<CountryWinCount>,
}

impl DatasetStore {
    pub fn builtin() -> Result<Self, DatasetError> {
        let records = RESULTS
            .iter()
            .map(|(year, winner, runner_up, host)| {
                TournamentRecord::new(*year, winner, runner_up, host)
            })
            .collect();
        Self::from_records(records)
    }

    pub fn from_records(mut records: Vec<TournamentRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        for record in &mut records {
            normalize_record(record);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.year) {
                return Err(DatasetError::DuplicateYear(record.year));
            }
            if record.winner == record.runner_up {
                return Err(DatasetError::SameFinalists {
                    year: record.year,
                    country: record.winner.clone(),
                });
            }
        }

        records.sort_by_key(|r| r.year);
        let win_counts = compute_win_counts(&records);
        Ok(Self {
            records,
            win_counts,
        })
    }

    pub fn records(&self) -> &[TournamentRecord] {
        &self.records
    }

    pub fn win_counts(&self) -> &[CountryWinCount] {
        &self.win_counts
    }

    pub fn get_by_year(&self, year: u16) -> Result<&TournamentRecord, DatasetError> {
        // Records are sorted by year at load.
        self.records
            .binary_search_by_key(&year, |r| r.year)
            .map(|idx| &self.records[idx])
            .map_err(|_| DatasetError::NotFound { year })
    }

    pub fn winners(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.winner.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn years_desc(&self) -> Vec<u16> {
        self.records.iter().rev().map(|r| r.year).collect()
    }

    pub fn country_records(&self) -> Vec<CountryRecord> {
        let mut by_country: BTreeMap<&str, CountryRecord> = BTreeMap::new();
        for r in &self.records {
            country_entry(&mut by_country, &r.winner).wins += 1;
            country_entry(&mut by_country, &r.runner_up).runner_ups += 1;
            country_entry(&mut by_country, &r.host).hosted += 1;
        }
        by_country.into_values().collect()
    }
}

fn country_entry<'a, 'm>(
    map: &'m mut BTreeMap<&'a str, CountryRecord>,
    name: &'a str,
) -> &'m mut CountryRecord {
    map.entry(name).or_insert_with(|| CountryRecord {
        country: name.to_string(),
        wins: 0,
        runner_ups: 0,
        hosted: 0,
    })
}

/// The process-wide store, built from the literal table on first use.
pub fn shared() -> Result<&'static DatasetStore> {
    STORE.get_or_try_init(|| DatasetStore::builtin().context("failed to load tournament table"))
}

pub fn normalize_country(name: &str) -> &str {
    let trimmed = name.trim();
    LEGACY_NAMES
        .iter()
        .find(|(legacy, _)| *legacy == trimmed)
        .map(|(_, modern)| *modern)
        .unwrap_or(trimmed)
}

pub fn normalize_record(record: &mut TournamentRecord) {
    for field in [
        &mut record.winner,
        &mut record.runner_up,
        &mut record.host,
    ] {
        let normalized = normalize_country(field).to_string();
        if normalized != *field {
            *field = normalized;
        }
    }
}

fn compute_win_counts(records: &[TournamentRecord]) -> Vec<CountryWinCount> {
    let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
    for r in records {
        *counts.entry(r.winner.as_str()).or_insert(0) += 1;
    }

    let mut out: Vec<CountryWinCount> = counts
        .into_iter()
        .map(|(country, wins)| CountryWinCount {
            country: country.to_string(),
            wins,
            region_code: regions::region_code(country),
        })
        .collect();
    out.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.country.cmp(&b.country)));
    out
}
