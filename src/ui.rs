// 🖥️ Terminal view - person table, result box, command line
//
// Every keystroke edits the command line; Enter hands it to Logic. The table
// always shows Logic's displayed list, refreshed after each command.

use crate::config::Theme;
use crate::logic::commands::{
    add, basic, clear, delete, edit, filter, find, payment, sort, untag,
};
use crate::logic::Logic;
use crate::model::fields::{hex_to_rgb, is_light_color};
use crate::model::Person;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io;
use tracing::{debug, info};

const PAGE_SIZE: usize = 20;

// ============================================================================
// PALETTE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Palette {
        match theme {
            Theme::Dark => Palette {
                background: Color::Reset,
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::White,
                highlight: Color::DarkGray,
                error: Color::Red,
            },
            Theme::Light => Palette {
                background: Color::Rgb(0xF5, 0xF5, 0xF5),
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                border: Color::Black,
                highlight: Color::Rgb(0xD0, 0xD7, 0xE1),
                error: Color::Rgb(0xC6, 0x28, 0x28),
            },
        }
    }
}

fn hex_color(hex: &str) -> Color {
    hex_to_rgb(hex).map_or(Color::Reset, |(r, g, b)| Color::Rgb(r, g, b))
}

/// Black on light backgrounds, white on dark ones.
fn contrast_text(hex: &str) -> Color {
    if is_light_color(hex) {
        Color::Black
    } else {
        Color::White
    }
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    logic: Logic,
    pub persons: Vec<Person>,
    pub state: TableState,
    pub input: String,
    pub feedback: String,
    pub feedback_is_error: bool,
    pub show_help: bool,
    pub theme: Theme,
    pub should_quit: bool,
}

impl App {
    pub fn new(logic: Logic, theme: Theme) -> Self {
        let mut app = App {
            logic,
            persons: Vec::new(),
            state: TableState::default(),
            input: String::new(),
            feedback: String::new(),
            feedback_is_error: false,
            show_help: false,
            theme,
            should_quit: false,
        };
        app.refresh();
        app
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.theme)
    }

    /// Pulls the displayed list from Logic and keeps the selection in range.
    pub fn refresh(&mut self) {
        self.persons = self.logic.filtered_persons();
        let selected = match self.state.selected() {
            _ if self.persons.is_empty() => None,
            Some(i) => Some(i.min(self.persons.len() - 1)),
            None => Some(0),
        };
        self.state.select(selected);
    }

    /// Runs the command line. The input is kept on failure so it can be fixed.
    pub fn submit(&mut self) {
        let command_text = self.input.trim().to_string();
        if command_text.is_empty() {
            return;
        }

        match self.logic.execute(&command_text) {
            Ok(result) => {
                self.feedback = result.feedback;
                self.feedback_is_error = false;
                self.input.clear();
                if result.show_help {
                    self.show_help = true;
                }
                if result.toggle_theme {
                    self.theme = self.theme.toggled();
                    debug!(theme = ?self.theme, "theme toggled");
                }
                if result.exit {
                    self.should_quit = true;
                }
            }
            Err(e) => {
                self.feedback = e.to_string();
                self.feedback_is_error = true;
            }
        }
        self.refresh();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc if self.show_help => self.show_help = false,
            KeyCode::Esc => self.input.clear(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Down => self.next(),
            KeyCode::Up => self.previous(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::PageUp => self.page_up(),
            _ => {}
        }
    }

    pub fn next(&mut self) {
        let len = self.persons.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.persons.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn page_down(&mut self) {
        let len = self.persons.len();
        if len == 0 {
            return;
        }
        let i = self
            .state
            .selected()
            .map_or(0, |i| (i + PAGE_SIZE).min(len - 1));
        self.state.select(Some(i));
    }

    pub fn page_up(&mut self) {
        if self.persons.is_empty() {
            return;
        }
        let i = self
            .state
            .selected()
            .map_or(0, |i| i.saturating_sub(PAGE_SIZE));
        self.state.select(Some(i));
    }

    pub fn total_count(&self) -> usize {
        self.logic.address_book().len()
    }
}

// ============================================================================
// TERMINAL LOOP
// ============================================================================

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("terminal view started");
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("terminal view closed");
    res.map_err(Into::into)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}

// ============================================================================
// RENDERING
// ============================================================================

fn ui(f: &mut Frame, app: &mut App) {
    let palette = app.palette();
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        f.size(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Person table
            Constraint::Length(5), // Result box
            Constraint::Length(3), // Command line
        ])
        .split(f.size());

    render_header(f, chunks[0], app);
    render_table(f, chunks[1], app);
    render_result(f, chunks[2], app);
    render_input(f, chunks[3], app);

    if app.show_help {
        render_help(f, centered(f.size(), 80, 80), app);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let spans = vec![
        Span::styled(
            " TutorTrack ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Showing {} of {}", app.persons.len(), app.total_count()),
            Style::default().fg(palette.text),
        ),
        Span::raw("  |  "),
        Span::styled(
            app.logic.data_file_path().display().to_string(),
            Style::default().fg(palette.muted),
        ),
    ];

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent)),
    );
    f.render_widget(header, area);
}

fn grade_cell(grade: &str, hex: &str) -> Cell<'static> {
    if grade.is_empty() {
        return Cell::from("");
    }
    Cell::from(grade.to_string()).style(Style::default().fg(hex_color(hex)))
}

fn tag_spans(person: &Person) -> Line<'static> {
    let mut spans = Vec::new();
    for tag in person.tags().iter() {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        let style = match tag.color() {
            Some(hex) => Style::default().bg(hex_color(hex)).fg(contrast_text(hex)),
            None => Style::default().add_modifier(Modifier::REVERSED),
        };
        spans.push(Span::styled(format!(" {} ", tag.name()), style));
    }
    Line::from(spans)
}

fn payment_summary(person: &Person) -> String {
    let info = person.payment_info();
    if info.is_empty() {
        return String::new();
    }
    let mut parts = Vec::new();
    if info.fee() > 0 {
        parts.push(format!("${}", info.fee()));
    }
    if info.date().is_some() {
        parts.push(info.date_string());
    }
    if !info.status().as_str().is_empty() {
        parts.push(info.status().as_str().to_string());
    }
    parts.join(" ")
}

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    let palette = app.palette();
    let header_cells = ["#", "Name", "Phone", "Level", "Year", "Grade", "Target", "Tags", "Payment"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
        });
    let header = Row::new(header_cells).height(1);

    let rows = app.persons.iter().enumerate().map(|(i, person)| {
        Row::new(vec![
            Cell::from((i + 1).to_string()),
            Cell::from(truncate(person.name().as_str(), 24)),
            Cell::from(person.phone().to_string()),
            Cell::from(person.edu_level().to_string()),
            Cell::from(truncate(person.current_year().as_str(), 14)),
            grade_cell(person.current_grade().as_str(), person.current_grade().hex_color()),
            grade_cell(person.expected_grade().as_str(), person.expected_grade().hex_color()),
            Cell::from(tag_spans(person)),
            Cell::from(payment_summary(person)),
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(25),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(15),
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Min(20),
            Constraint::Length(26),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(" Students "),
    )
    .highlight_style(
        Style::default()
            .bg(palette.highlight)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_result(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let colour = if app.feedback_is_error {
        palette.error
    } else {
        palette.text
    };

    let result = Paragraph::new(app.feedback.as_str())
        .style(Style::default().fg(colour))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(" Result "),
        );
    f.render_widget(result, area);
}

fn render_input(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(palette.accent)),
        Span::raw(app.input.as_str()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .title(" Command (Enter run | Esc clear | ↑/↓ scroll | Ctrl+C quit) "),
    );
    f.render_widget(input, area);

    // Cursor after the "> " marker and the typed text
    let cursor_x = area.x + 3 + app.input.chars().count() as u16;
    f.set_cursor(cursor_x.min(area.right().saturating_sub(2)), area.y + 1);
}

pub const HELP_USAGES: [&str; 14] = [
    add::MESSAGE_USAGE,
    edit::MESSAGE_USAGE,
    delete::MESSAGE_USAGE,
    clear::MESSAGE_USAGE,
    filter::MESSAGE_USAGE,
    find::MESSAGE_USAGE,
    untag::MESSAGE_USAGE,
    payment::MESSAGE_USAGE,
    sort::MESSAGE_USAGE,
    "list: Shows all persons.",
    "purge: Deletes every person in the address book.",
    "toggletheme: Switches between the dark and light theme.",
    basic::HELP_MESSAGE_USAGE,
    "exit: Saves and quits.",
];

fn render_help(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let mut lines = Vec::new();
    for usage in HELP_USAGES {
        for (i, line) in usage.lines().enumerate() {
            let style = if i == 0 {
                Style::default().fg(palette.accent)
            } else {
                Style::default().fg(palette.text)
            };
            lines.push(Line::from(Span::styled(line.to_string(), style)));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Press Esc to close",
        Style::default()
            .fg(palette.muted)
            .add_modifier(Modifier::ITALIC),
    )));

    let help = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(palette.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Help "),
        );

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fields::CurrentGrade;
    use crate::model::testutil::typical_address_book;
    use crate::model::ModelManager;
    use crate::storage::JsonAddressBookStorage;
    use ratatui::backend::TestBackend;
    use tempfile::TempDir;

    fn app_in(temp: &TempDir) -> App {
        let logic = Logic::new(
            ModelManager::new(typical_address_book()),
            JsonAddressBookStorage::new(temp.path().join("book.json")),
        );
        App::new(logic, Theme::Dark)
    }

    fn type_command(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_starts_with_first_row_selected() {
        let temp = TempDir::new().expect("temp dir");
        let app = app_in(&temp);
        assert_eq!(app.persons.len(), 7);
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn test_successful_command_clears_input_and_refreshes() {
        let temp = TempDir::new().expect("temp dir");
        let mut app = app_in(&temp);

        type_command(&mut app, "find Meier");
        assert_eq!(app.feedback, "2 persons listed!");
        assert!(!app.feedback_is_error);
        assert!(app.input.is_empty());
        assert_eq!(app.persons.len(), 2);
    }

    #[test]
    fn test_failed_command_keeps_input() {
        let temp = TempDir::new().expect("temp dir");
        let mut app = app_in(&temp);

        type_command(&mut app, "delete 99");
        assert!(app.feedback_is_error);
        assert_eq!(app.feedback, "The person index provided is invalid");
        assert_eq!(app.input, "delete 99");

        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_flags_from_results() {
        let temp = TempDir::new().expect("temp dir");
        let mut app = app_in(&temp);

        type_command(&mut app, "toggletheme");
        assert_eq!(app.theme, Theme::Light);

        type_command(&mut app, "help");
        assert!(app.show_help);
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(!app.show_help);

        type_command(&mut app, "exit");
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_without_typing() {
        let temp = TempDir::new().expect("temp dir");
        let mut app = app_in(&temp);

        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.input, "a");
    }

    #[test]
    fn test_grade_cell_uses_grade_colour() {
        let cell = grade_cell("A", CurrentGrade::new("A").unwrap().hex_color());
        assert_eq!(cell, Cell::from("A").style(Style::default().fg(Color::Rgb(0x4C, 0xAF, 0x50))));
        assert_eq!(grade_cell("", "#FFFFFF"), Cell::from(""));
    }

    #[test]
    fn test_selection_follows_shrinking_list() {
        let temp = TempDir::new().expect("temp dir");
        let mut app = app_in(&temp);
        app.state.select(Some(6));

        type_command(&mut app, "clear i/1...5");
        assert_eq!(app.persons.len(), 2);
        assert_eq!(app.state.selected(), Some(1));

        type_command(&mut app, "purge");
        assert_eq!(app.state.selected(), None);
    }

    #[test]
    fn test_navigation_wraps() {
        let temp = TempDir::new().expect("temp dir");
        let mut app = app_in(&temp);

        app.previous();
        assert_eq!(app.state.selected(), Some(6));
        app.next();
        assert_eq!(app.state.selected(), Some(0));
        app.page_down();
        assert_eq!(app.state.selected(), Some(6));
        app.page_up();
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn test_render_shows_persons_and_feedback() {
        let temp = TempDir::new().expect("temp dir");
        let mut app = app_in(&temp);
        type_command(&mut app, "list");

        let text = screen_text(&mut app);
        assert!(text.contains("Alice Pauline"));
        assert!(text.contains("George Best"));
        assert!(text.contains("Listed all persons"));
        assert!(text.contains("Showing 7 of 7"));
    }

    #[test]
    fn test_render_help_panel() {
        let temp = TempDir::new().expect("temp dir");
        let mut app = app_in(&temp);
        app.show_help = true;

        let text = screen_text(&mut app);
        assert!(text.contains(" Help "));
        assert!(text.contains("add: Adds a person"));
    }

    #[test]
    fn test_payment_summary_and_truncate() {
        use crate::model::testutil::{alice, carl};
        assert_eq!(payment_summary(&alice()), "$200 01-01-2025 Paid");
        assert_eq!(payment_summary(&carl()), "");
        assert_eq!(truncate("Alexander", 6), "Ale...");
        assert_eq!(truncate("Amy", 6), "Amy");
    }

    #[test]
    fn test_tag_colour_contrast() {
        assert_eq!(contrast_text("FFFFFF"), Color::Black);
        assert_eq!(contrast_text("000000"), Color::White);
        assert_eq!(hex_color("#FF0000"), Color::Rgb(255, 0, 0));
        assert_eq!(hex_color("nonsense"), Color::Reset);
    }
}
