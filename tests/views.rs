use wc_winners_terminal::dataset::{DatasetStore, TournamentRecord};
use wc_winners_terminal::views::{
    MarkerKind, Selection, Tab, View, country_view, map_view, select_view, year_view,
};

fn builtin() -> DatasetStore {
    DatasetStore::builtin().expect("builtin table should load")
}

#[test]
fn brazil_timeline() {
    let store = builtin();
    let view = country_view(&store, "Brazil");
    assert_eq!(view.win_count, 5);
    assert_eq!(view.runner_up_count, 2);
    assert_eq!(view.wins_timeline, vec![1958, 1962, 1970, 1994, 2002]);
    assert_eq!(view.runner_up_timeline, vec![1950, 1998]);
    assert_eq!(view.title, "Brazil's World Cup Performance");
}

#[test]
fn germany_timeline() {
    let store = builtin();
    let view = country_view(&store, "Germany");
    assert_eq!(view.win_count, 4);
    assert_eq!(view.runner_up_count, 4);
    assert_eq!(view.wins_timeline, vec![1954, 1974, 1990, 2014]);
    assert_eq!(view.runner_up_timeline, vec![1966, 1982, 1986, 2002]);
}

#[test]
fn timelines_are_strictly_ascending() {
    let store = builtin();
    for country in store.winners() {
        let view = country_view(&store, &country);
        assert!(view.wins_timeline.windows(2).all(|w| w[0] < w[1]));
        assert!(view.runner_up_timeline.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn timeline_series_use_gold_and_silver() {
    let store = builtin();
    let view = country_view(&store, "Argentina");
    assert_eq!(view.series.len(), 2);
    assert_eq!(view.series[0].marker, MarkerKind::Gold);
    assert_eq!(view.series[0].years, view.wins_timeline);
    assert_eq!(view.series[1].marker, MarkerKind::Silver);
    assert_eq!(view.series[1].years, view.runner_up_timeline);
}

#[test]
fn winner_without_runner_up_finish_has_one_series() {
    let store = builtin();
    let view = country_view(&store, "Uruguay");
    assert_eq!(view.win_count, 2);
    assert_eq!(view.runner_up_count, 0);
    assert_eq!(view.series.len(), 1);
    assert_eq!(view.series[0].marker, MarkerKind::Gold);
}

#[test]
fn unknown_country_renders_empty_timeline() {
    let store = builtin();
    let view = country_view(&store, "Atlantis");
    assert_eq!(view.win_count, 0);
    assert_eq!(view.runner_up_count, 0);
    assert!(view.series.is_empty());
}

#[test]
fn year_view_2022() {
    let store = builtin();
    let card = year_view(&store, 2022).expect("2022 should exist");
    assert_eq!(card.winner, "Argentina");
    assert_eq!(card.runner_up, "France");
    assert_eq!(card.host, "Qatar");
}

#[test]
fn year_view_outside_table_is_no_data() {
    let store = builtin();
    assert!(year_view(&store, 1942).is_err());
    match select_view(&store, &Selection::Year(1942)) {
        View::NoData { year, reason } => {
            assert_eq!(year, 1942);
            assert!(reason.contains("1942"));
        }
        other => panic!("expected NoData, got {other:?}"),
    }
}

#[test]
fn map_view_lists_every_winner() {
    let store = builtin();
    let spec = map_view(&store);
    assert_eq!(spec.entries.len(), store.win_counts().len());
    assert_eq!(spec.max_wins, 5);
    assert_eq!(spec.mapped().count(), spec.entries.len());
    let brazil = spec
        .entries
        .iter()
        .find(|e| e.country == "Brazil")
        .expect("Brazil should be on the map");
    assert_eq!(brazil.region_code, Some("BRA"));
    assert_eq!(brazil.wins, 5);
}

#[test]
fn select_view_dispatches_by_selection() {
    let store = builtin();
    assert!(matches!(select_view(&store, &Selection::Map), View::Map(_)));
    assert!(matches!(
        select_view(&store, &Selection::Country("Brazil".to_string())),
        View::Country(_)
    ));
    assert!(matches!(
        select_view(&store, &Selection::Year(1966)),
        View::Year(_)
    ));
    assert_eq!(Selection::Year(1966).tab(), Tab::TournamentDetails);
}

#[test]
fn views_serialize_with_a_tag() {
    let store = builtin();
    let view = select_view(&store, &Selection::Year(2022));
    let json = serde_json::to_value(&view).expect("view should serialize");
    assert_eq!(json["view"], "year");
    assert_eq!(json["winner"], "Argentina");

    let map = select_view(&store, &Selection::Map);
    let json = serde_json::to_value(&map).expect("view should serialize");
    assert_eq!(json["view"], "map");
    assert!(json["entries"].as_array().is_some_and(|e| e.len() == 8));
}

#[test]
fn winner_without_region_code_is_listed_but_not_mapped() {
    let records = vec![
        TournamentRecord::new(1998, "South Korea/Japan", "Brazil", "France"),
        TournamentRecord::new(2002, "South Korea/Japan", "Germany", "Japan"),
        TournamentRecord::new(2006, "Italy", "France", "Germany"),
    ];
    let store = DatasetStore::from_records(records).expect("table should load");
    let spec = map_view(&store);

    assert_eq!(spec.entries.len(), 2);
    let joint = spec
        .entries
        .iter()
        .find(|e| e.country == "South Korea/Japan")
        .expect("uncoded winner should still be listed");
    assert_eq!(joint.region_code, None);
    assert_eq!(joint.wins, 2);
    assert_eq!(spec.max_wins, 2);

    let mapped: Vec<&str> = spec.mapped().map(|(e, _)| e.country.as_str()).collect();
    assert_eq!(mapped, vec!["Italy"]);
}
