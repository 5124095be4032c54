use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::widgets::canvas::{Canvas, Map, MapResolution, Points};
use ratatui::widgets::{
    Axis, Block, Borders, Chart, Clear, Dataset, GraphType, Paragraph, Row, Table, Tabs,
};

use wc_winners_terminal::config::AppConfig;
use wc_winners_terminal::dataset::{self, DatasetStore};
use wc_winners_terminal::export;
use wc_winners_terminal::regions;
use wc_winners_terminal::state::AppState;
use wc_winners_terminal::views::{
    self, ChoroplethSpec, CountryTimeline, MarkerKind, Tab, TournamentCard, View,
};

const FIRST_YEAR_AXIS: f64 = 1926.0;
const LAST_YEAR_AXIS: f64 = 2026.0;

struct App {
    state: AppState,
    store: &'static DatasetStore,
    config: AppConfig,
    should_quit: bool,
}

impl App {
    fn new(store: &'static DatasetStore, config: AppConfig) -> Self {
        let mut state = AppState::new(store, config.debug);
        state.push_log(format!(
            "[INFO] Loaded {} tournaments, {} winning nations",
            store.records().len(),
            store.win_counts().len()
        ));
        Self {
            state,
            store,
            config,
            should_quit: false,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.state.set_tab(Tab::WinnersMap),
            KeyCode::Char('2') => self.state.set_tab(Tab::CountryPerformance),
            KeyCode::Char('3') => self.state.set_tab(Tab::TournamentDetails),
            KeyCode::Tab => self.state.next_tab(),
            KeyCode::BackTab => self.state.prev_tab(),
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Char('e') | KeyCode::Char('E') => self.export(),
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            KeyCode::Esc => self.state.help_overlay = false,
            _ => {}
        }
    }

    fn export(&mut self) {
        let path = export::default_export_path(&self.config.export_dir);
        match export::export_workbook(self.store, &path) {
            Ok(report) => self.state.push_log(format!(
                "[INFO] Exported {} results, {} win counts to {}",
                report.results,
                report.win_counts,
                report.path.display()
            )),
            Err(err) if self.config.debug => {
                self.state.push_log(format!("[ERROR] Export failed: {err:#}"))
            }
            Err(_) => self.state.push_log("[ERROR] Export failed"),
        }
    }
}

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let store = dataset::shared()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut app = App::new(store, config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let tick_rate = app.config.tick_rate;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(frame.size());

    render_header(frame, chunks[0], &app.state);

    let view = views::select_view(app.store, &app.state.selection());
    let body = chunks[1];
    match &view {
        View::Map(spec) => render_map(frame, body, spec),
        View::Country(timeline) => render_country(frame, body, &app.state, timeline),
        View::Year(card) => render_year(frame, body, &app.state, Some(card), None),
        View::NoData { reason, .. } => {
            let shown = app.state.no_data_message(reason);
            render_year(frame, body, &app.state, None, Some(shown))
        }
    }

    let console = Paragraph::new(console_text(&app.state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[2]);

    let footer =
        Paragraph::new(footer_text(&app.state)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[3]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let mode = if state.debug { " | DEBUG" } else { "" };
    let title = Paragraph::new(format!("  FIFA World Cup Winners Dashboard{mode}"))
        .style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD));
    frame.render_widget(title, rows[0]);

    let titles: Vec<String> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("{} {}", i + 1, tab.title()))
        .collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(state.tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, rows[1]);
}

fn footer_text(state: &AppState) -> String {
    match state.tab {
        Tab::WinnersMap => "1/2/3 Tabs | Tab Next | e Export | ? Help | q Quit".to_string(),
        Tab::CountryPerformance => {
            "1/2/3 Tabs | j/k/↑/↓ Country | e Export | ? Help | q Quit".to_string()
        }
        Tab::TournamentDetails => {
            "1/2/3 Tabs | j/k/↑/↓ Year | e Export | ? Help | q Quit".to_string()
        }
    }
}

fn render_map(frame: &mut Frame, area: Rect, spec: &ChoroplethSpec) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(34)])
        .split(area);

    let markers: Vec<(Vec<(f64, f64)>, Color, (f64, f64), String)> = spec
        .mapped()
        .filter_map(|(entry, code)| {
            let (lon, lat) = regions::anchor(code)?;
            Some((
                marker_blob(lon, lat),
                wins_color(entry.wins, spec.max_wins),
                (lon, lat),
                format!("{} ({})", entry.country, entry.wins),
            ))
        })
        .collect();

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(spec.title.as_str())
                .borders(Borders::ALL),
        )
        .marker(symbols::Marker::Braille)
        .x_bounds([-180.0, 180.0])
        .y_bounds([-90.0, 90.0])
        .paint(|ctx| {
            ctx.draw(&Map {
                color: Color::DarkGray,
                resolution: MapResolution::High,
            });
            ctx.layer();
            for (blob, color, _, _) in &markers {
                ctx.draw(&Points {
                    coords: blob.as_slice(),
                    color: *color,
                });
            }
            for (_, color, (lon, lat), label) in &markers {
                ctx.print(
                    *lon + 3.0,
                    *lat,
                    Span::styled(label.clone(), Style::default().fg(*color)),
                );
            }
        });
    frame.render_widget(canvas, cols[0]);

    let header = Row::new(vec!["Country", "Wins", "Code"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = spec
        .entries
        .iter()
        .map(|entry| {
            let code = entry.region_code.unwrap_or("not on map");
            Row::new(vec![
                entry.country.clone(),
                entry.wins.to_string(),
                code.to_string(),
            ])
            .style(Style::default().fg(wins_color(entry.wins, spec.max_wins)))
        })
        .collect();
    let legend = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(5),
            Constraint::Min(4),
        ],
    )
    .header(header)
    .block(Block::default().title("Wins").borders(Borders::ALL));
    frame.render_widget(legend, cols[1]);
}

// A small cluster of points so a region reads as a filled patch rather than a single dot.
fn marker_blob(lon: f64, lat: f64) -> Vec<(f64, f64)> {
    const RADIUS: f64 = 3.0;
    const STEP: f64 = 0.75;
    let mut coords = Vec::new();
    let mut dx = -RADIUS;
    while dx <= RADIUS {
        let mut dy = -RADIUS;
        while dy <= RADIUS {
            if dx * dx + dy * dy <= RADIUS * RADIUS {
                coords.push((lon + dx, lat + dy));
            }
            dy += STEP;
        }
        dx += STEP;
    }
    coords
}

// Three-stop ramp from deep purple through magenta to yellow.
fn wins_color(wins: u32, max_wins: u32) -> Color {
    const LOW: (f64, f64, f64) = (13.0, 8.0, 135.0);
    const MID: (f64, f64, f64) = (204.0, 71.0, 120.0);
    const HIGH: (f64, f64, f64) = (240.0, 249.0, 33.0);

    if max_wins == 0 {
        return Color::Rgb(LOW.0 as u8, LOW.1 as u8, LOW.2 as u8);
    }
    let t = (wins as f64 / max_wins as f64).clamp(0.0, 1.0);
    let (from, to, local) = if t < 0.5 {
        (LOW, MID, t * 2.0)
    } else {
        (MID, HIGH, (t - 0.5) * 2.0)
    };
    let lerp = |a: f64, b: f64| (a + (b - a) * local).round() as u8;
    Color::Rgb(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

fn marker_color(marker: MarkerKind) -> Color {
    match marker {
        MarkerKind::Gold => Color::Rgb(255, 215, 0),
        MarkerKind::Silver => Color::Rgb(192, 192, 192),
    }
}

fn render_country(frame: &mut Frame, area: Rect, state: &AppState, timeline: &CountryTimeline) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(30)])
        .split(area);

    render_dropdown(
        frame,
        cols[0],
        "Select a country",
        &state.country_options,
        state.country_selected,
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(6)])
        .split(cols[1]);

    let summary_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(right[0]);

    let gold = marker_color(MarkerKind::Gold);
    let silver = marker_color(MarkerKind::Silver);
    let wins = Paragraph::new(format!(
        "{}\n{}",
        timeline.win_count,
        years_line(&timeline.wins_timeline)
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(Span::styled("Total Wins", Style::default().fg(gold)))
            .borders(Borders::ALL),
    );
    frame.render_widget(wins, summary_cols[0]);

    let runner_ups = Paragraph::new(format!(
        "{}\n{}",
        timeline.runner_up_count,
        years_line(&timeline.runner_up_timeline)
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(Span::styled("Runner-up Finishes", Style::default().fg(silver)))
            .borders(Borders::ALL),
    );
    frame.render_widget(runner_ups, summary_cols[1]);

    let points: Vec<Vec<(f64, f64)>> = timeline
        .series
        .iter()
        .map(|s| s.years.iter().map(|y| (*y as f64, s.row as f64)).collect())
        .collect();
    let datasets: Vec<Dataset> = timeline
        .series
        .iter()
        .zip(points.iter())
        .map(|(series, data)| {
            Dataset::default()
                .name(series.label)
                .marker(symbols::Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(marker_color(series.marker)))
                .data(data)
        })
        .collect();

    let x_labels: Vec<Span> = ["1930", "1950", "1970", "1990", "2010", "2022"]
        .into_iter()
        .map(Span::raw)
        .collect();
    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(timeline.title.as_str())
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title("Year")
                .bounds([FIRST_YEAR_AXIS, LAST_YEAR_AXIS])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, 3.0])
                .labels(vec![
                    Span::raw(""),
                    Span::styled("Runner-up", Style::default().fg(silver)),
                    Span::styled("Winner", Style::default().fg(gold)),
                    Span::raw(""),
                ]),
        );
    frame.render_widget(chart, right[1]);
}

fn years_line(years: &[u16]) -> String {
    if years.is_empty() {
        return "-".to_string();
    }
    years
        .iter()
        .map(|y| y.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_year(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    card: Option<&TournamentCard>,
    missing: Option<&str>,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(30)])
        .split(area);

    let options: Vec<String> = state.year_options.iter().map(|y| y.to_string()).collect();
    render_dropdown(frame, cols[0], "Select a year", &options, state.year_selected);

    let card_area = Rect {
        x: cols[1].x + 2,
        y: cols[1].y + 1,
        width: cols[1].width.saturating_sub(4).min(50),
        height: cols[1].height.saturating_sub(1).min(7),
    };

    let (title, text) = match (card, missing) {
        (Some(card), _) => (
            format!("{} World Cup Results", card.year),
            format!(
                "Winner:    {}\nRunner-up: {}\nHost:      {}",
                card.winner, card.runner_up, card.host
            ),
        ),
        (None, reason) => (
            format!("{} World Cup Results", state.selected_year()),
            reason.unwrap_or("No data").to_string(),
        ),
    };
    let detail = Paragraph::new(text)
        .style(Style::default().fg(Color::Black).bg(Color::White))
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(detail, card_area);
}

fn render_dropdown(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    options: &[String],
    selected: usize,
) {
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let (start, end) = visible_range(selected, options.len(), inner.height as usize);
    let lines: Vec<Line> = (start..end)
        .map(|idx| {
            let is_selected = idx == selected;
            let prefix = if is_selected { "> " } else { "  " };
            let style = if is_selected {
                Style::default().fg(Color::White).bg(Color::DarkGray)
            } else {
                Style::default()
            };
            Line::styled(format!("{prefix}{}", options[idx]), style)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No messages yet".to_string();
    }
    let start = state.logs.len().saturating_sub(3);
    state
        .logs
        .iter()
        .skip(start)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "World Cup Winners - Help",
        "",
        "Global:",
        "  1 / 2 / 3    Map / Country / Tournament",
        "  Tab          Next tab",
        "  Shift+Tab    Previous tab",
        "  e            Export workbook (.xlsx)",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Country / Tournament:",
        "  j/k or ↑/↓   Move selection",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
