use std::collections::VecDeque;

use chrono::Local;

use crate::dataset::DatasetStore;
use crate::views::{DEFAULT_COUNTRY, DEFAULT_YEAR, Selection, Tab};

const MAX_LOGS: usize = 200;
const NO_DATA_MESSAGE: &str = "No data for this year";

#[derive(Debug, Clone)]
pub struct AppState {
    pub tab: Tab,
    pub country_options: Vec<String>,
    pub country_selected: usize,
    pub year_options: Vec<u16>,
    pub year_selected: usize,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
    pub debug: bool,
}

impl AppState {
    pub fn new(store: &DatasetStore, debug: bool) -> Self {
        let country_options = store.winners();
        let year_options = store.years_desc();
        let country_selected = country_options
            .iter()
            .position(|c| c == DEFAULT_COUNTRY)
            .unwrap_or(0);
        let year_selected = year_options
            .iter()
            .position(|y| *y == DEFAULT_YEAR)
            .unwrap_or(0);
        Self {
            tab: Tab::WinnersMap,
            country_options,
            country_selected,
            year_options,
            year_selected,
            logs: VecDeque::with_capacity(MAX_LOGS),
            help_overlay: false,
            debug,
        }
    }

    pub fn set_tab(&mut self, tab: Tab) {
        if self.tab == tab {
            return;
        }
        self.tab = tab;
        if self.debug {
            self.push_log(format!("[INFO] Switched to {}", tab.title()));
        }
    }

    pub fn next_tab(&mut self) {
        let idx = (self.tab.index() + 1) % Tab::ALL.len();
        self.set_tab(Tab::ALL[idx]);
    }

    pub fn prev_tab(&mut self) {
        let idx = (self.tab.index() + Tab::ALL.len() - 1) % Tab::ALL.len();
        self.set_tab(Tab::ALL[idx]);
    }

    pub fn select_next(&mut self) {
        match self.tab {
            Tab::WinnersMap => {}
            Tab::CountryPerformance => {
                if self.country_selected + 1 < self.country_options.len() {
                    self.country_selected += 1;
                }
            }
            Tab::TournamentDetails => {
                if self.year_selected + 1 < self.year_options.len() {
                    self.year_selected += 1;
                }
            }
        }
    }

    pub fn select_prev(&mut self) {
        match self.tab {
            Tab::WinnersMap => {}
            Tab::CountryPerformance => {
                self.country_selected = self.country_selected.saturating_sub(1);
            }
            Tab::TournamentDetails => {
                self.year_selected = self.year_selected.saturating_sub(1);
            }
        }
    }

    pub fn selected_country(&self) -> &str {
        self.country_options
            .get(self.country_selected)
            .map(String::as_str)
            .unwrap_or(DEFAULT_COUNTRY)
    }

    pub fn selected_year(&self) -> u16 {
        self.year_options
            .get(self.year_selected)
            .copied()
            .unwrap_or(DEFAULT_YEAR)
    }

    pub fn selection(&self) -> Selection {
        match self.tab {
            Tab::WinnersMap => Selection::Map,
            Tab::CountryPerformance => Selection::Country(self.selected_country().to_string()),
            Tab::TournamentDetails => Selection::Year(self.selected_year()),
        }
    }

    /// Text for the year card when the lookup failed; the raw error only in debug mode.
    pub fn no_data_message<'a>(&self, reason: &'a str) -> &'a str {
        if self.debug { reason } else { NO_DATA_MESSAGE }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        if self.logs.len() >= MAX_LOGS {
            self.logs.pop_front();
        }
        let stamp = Local::now().format("%H:%M:%S");
        self.logs.push_back(format!("{stamp} {}", msg.into()));
    }
}
