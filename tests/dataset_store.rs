use std::collections::HashMap;

use wc_winners_terminal::dataset::{
    DatasetError, DatasetStore, TournamentRecord, normalize_record,
};

fn builtin() -> DatasetStore {
    DatasetStore::builtin().expect("builtin table should load")
}

#[test]
fn win_counts_match_record_counts() {
    let store = builtin();
    let mut expected: HashMap<&str, u32> = HashMap::new();
    for r in store.records() {
        *expected.entry(r.winner.as_str()).or_insert(0) += 1;
    }

    assert_eq!(store.win_counts().len(), expected.len());
    for entry in store.win_counts() {
        assert!(entry.wins > 0, "{} should not be listed with zero wins", entry.country);
        assert_eq!(Some(&entry.wins), expected.get(entry.country.as_str()));
    }
}

#[test]
fn win_counts_sum_to_record_count() {
    let store = builtin();
    let total: u32 = store.win_counts().iter().map(|c| c.wins).sum();
    assert_eq!(total as usize, store.records().len());
    assert_eq!(total, 22);
}

#[test]
fn countries_without_wins_are_absent() {
    let store = builtin();
    for never_won in ["Netherlands", "Hungary", "Croatia", "Czechoslovakia", "Sweden"] {
        assert!(
            store.win_counts().iter().all(|c| c.country != never_won),
            "{never_won} should not have an entry"
        );
    }
}

#[test]
fn win_counts_are_ordered_by_wins_then_name() {
    let store = builtin();
    let order: Vec<(&str, u32)> = store
        .win_counts()
        .iter()
        .map(|c| (c.country.as_str(), c.wins))
        .collect();
    assert_eq!(
        order,
        vec![
            ("Brazil", 5),
            ("Germany", 4),
            ("Italy", 4),
            ("Argentina", 3),
            ("France", 2),
            ("Uruguay", 2),
            ("England", 1),
            ("Spain", 1),
        ]
    );
}

#[test]
fn every_winner_has_a_region_code() {
    let store = builtin();
    for entry in store.win_counts() {
        assert!(entry.region_code.is_some(), "{} has no code", entry.country);
    }
    let england = store
        .win_counts()
        .iter()
        .find(|c| c.country == "England")
        .expect("England should be a winner");
    assert_eq!(england.region_code, Some("GBR"));
}

#[test]
fn get_by_year_finds_known_years() {
    let store = builtin();
    let record = store.get_by_year(2022).expect("2022 should exist");
    assert_eq!(record.winner, "Argentina");
    assert_eq!(record.runner_up, "France");
    assert_eq!(record.host, "Qatar");

    let first = store.get_by_year(1930).expect("1930 should exist");
    assert_eq!(first.winner, "Uruguay");
}

#[test]
fn get_by_year_reports_missing_years() {
    let store = builtin();
    for year in [0, 1929, 1942, 1946, 2026, u16::MAX] {
        assert_eq!(
            store.get_by_year(year),
            Err(DatasetError::NotFound { year })
        );
    }
}

#[test]
fn selector_options_are_sorted() {
    let store = builtin();
    assert_eq!(
        store.winners(),
        vec![
            "Argentina",
            "Brazil",
            "England",
            "France",
            "Germany",
            "Italy",
            "Spain",
            "Uruguay",
        ]
    );

    let years = store.years_desc();
    assert_eq!(years.len(), 22);
    assert_eq!(years.first(), Some(&2022));
    assert_eq!(years.last(), Some(&1930));
    assert!(years.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn legacy_names_merge_before_counting() {
    let records = vec![
        TournamentRecord::new(1954, "West Germany", "Hungary", "Switzerland"),
        TournamentRecord::new(1966, "England", "West Germany", "England"),
        TournamentRecord::new(1974, "West Germany", "Netherlands", "West Germany"),
        TournamentRecord::new(2014, "Germany", "Argentina", "Brazil"),
    ];
    let store = DatasetStore::from_records(records).expect("table should load");

    let germany = store
        .win_counts()
        .iter()
        .find(|c| c.country == "Germany")
        .expect("Germany should have wins");
    assert_eq!(germany.wins, 3);
    assert!(store.win_counts().iter().all(|c| c.country != "West Germany"));
    assert_eq!(store.get_by_year(1974).map(|r| r.host.as_str()), Ok("Germany"));
}

#[test]
fn normalization_is_idempotent() {
    let raw = vec![
        TournamentRecord::new(1954, "West Germany", "Hungary", "Switzerland"),
        TournamentRecord::new(1990, "FR Germany", "Argentina", "Italy"),
    ];
    let once = DatasetStore::from_records(raw.clone()).expect("table should load");

    let mut twice_records = raw;
    for record in &mut twice_records {
        normalize_record(record);
        normalize_record(record);
    }
    let twice = DatasetStore::from_records(twice_records).expect("table should load");

    assert_eq!(once.records(), twice.records());
    assert_eq!(once.win_counts(), twice.win_counts());
}

#[test]
fn records_are_sorted_regardless_of_input_order() {
    let records = vec![
        TournamentRecord::new(2022, "Argentina", "France", "Qatar"),
        TournamentRecord::new(1930, "Uruguay", "Argentina", "Uruguay"),
    ];
    let store = DatasetStore::from_records(records).expect("table should load");
    let years: Vec<u16> = store.records().iter().map(|r| r.year).collect();
    assert_eq!(years, vec![1930, 2022]);
}

#[test]
fn invalid_tables_are_rejected() {
    assert_eq!(
        DatasetStore::from_records(Vec::new()).err(),
        Some(DatasetError::Empty)
    );

    let duplicate = vec![
        TournamentRecord::new(1930, "Uruguay", "Argentina", "Uruguay"),
        TournamentRecord::new(1930, "Italy", "Hungary", "France"),
    ];
    assert_eq!(
        DatasetStore::from_records(duplicate).err(),
        Some(DatasetError::DuplicateYear(1930))
    );

    // Only equal after normalization.
    let same = vec![TournamentRecord::new(1954, "West Germany", "Germany", "Switzerland")];
    assert_eq!(
        DatasetStore::from_records(same).err(),
        Some(DatasetError::SameFinalists {
            year: 1954,
            country: "Germany".to_string(),
        })
    );
}

#[test]
fn country_records_cover_every_finalist_and_host() {
    let store = builtin();
    let records = store.country_records();

    let brazil = records
        .iter()
        .find(|r| r.country == "Brazil")
        .expect("Brazil should be listed");
    assert_eq!((brazil.wins, brazil.runner_ups, brazil.hosted), (5, 2, 2));

    let joint = records
        .iter()
        .find(|r| r.country == "South Korea/Japan")
        .expect("joint host should be listed");
    assert_eq!((joint.wins, joint.runner_ups, joint.hosted), (0, 0, 1));

    let hosted: u32 = records.iter().map(|r| r.hosted).sum();
    let runner_ups: u32 = records.iter().map(|r| r.runner_ups).sum();
    assert_eq!(hosted, 22);
    assert_eq!(runner_ups, 22);
    assert!(records.windows(2).all(|w| w[0].country < w[1].country));
}

#[test]
fn shared_store_is_initialized_once() {
    let a = wc_winners_terminal::dataset::shared().expect("shared store should load");
    let b = wc_winners_terminal::dataset::shared().expect("shared store should load");
    assert!(std::ptr::eq(a, b));
    assert_eq!(a.records().len(), 22);
}
