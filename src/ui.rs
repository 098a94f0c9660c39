use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use expense_tracker::{Category, ExpenseRecord, ExpenseTracker, RecordError};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::io;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(200);

// ============================================================================
// PAGES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    AddExpense,
    Reports,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::Home => Page::AddExpense,
            Page::AddExpense => Page::Reports,
            Page::Reports => Page::Home,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Home => Page::Reports,
            Page::AddExpense => Page::Home,
            Page::Reports => Page::AddExpense,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Home => "Home",
            Page::AddExpense => "Add Expense",
            Page::Reports => "Reports",
        }
    }
}

// ============================================================================
// FORM
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    Category,
    Amount,
    Description,
}

impl Field {
    fn next(&self) -> Self {
        match self {
            Field::Date => Field::Category,
            Field::Category => Field::Amount,
            Field::Amount => Field::Description,
            Field::Description => Field::Date,
        }
    }

    fn previous(&self) -> Self {
        match self {
            Field::Date => Field::Description,
            Field::Category => Field::Date,
            Field::Amount => Field::Category,
            Field::Description => Field::Amount,
        }
    }
}

/// Add Expense form. Text fields are kept raw and validated on submit.
#[derive(Debug, Clone)]
pub struct ExpenseForm {
    pub date: String,
    pub category: Category,
    pub amount: String,
    pub description: String,
    pub focus: Field,
}

impl ExpenseForm {
    pub fn new(today: &str) -> Self {
        Self {
            date: today.to_string(),
            category: Category::Food,
            amount: "0.00".to_string(),
            description: String::new(),
            focus: Field::Date,
        }
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Date => Some(&mut self.date),
            Field::Amount => Some(&mut self.amount),
            Field::Description => Some(&mut self.description),
            Field::Category => None,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(text) = self.focused_text() {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text() {
            text.pop();
        }
    }

    pub fn submit(&self) -> Result<ExpenseRecord, RecordError> {
        ExpenseRecord::parse(&self.date, self.category.as_str(), &self.amount, &self.description)
    }

    /// Keep date and category for quick repeated entry
    fn reset_after_submit(&mut self) {
        self.amount = "0.00".to_string();
        self.description.clear();
        self.focus = Field::Amount;
    }
}

// ============================================================================
// NOTICES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    /// None = stays until replaced
    pub expires_at: Option<Instant>,
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub tracker: ExpenseTracker,
    pub current_page: Page,
    pub form: ExpenseForm,
    pub state: TableState,
    pub notice: Option<Notice>,
    pub feedback: Duration,
}

impl App {
    pub fn new(tracker: ExpenseTracker, today: &str, feedback: Duration) -> Self {
        Self {
            tracker,
            current_page: Page::Home,
            form: ExpenseForm::new(today),
            state: TableState::default(),
            notice: None,
            feedback,
        }
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
    }

    pub fn next(&mut self) {
        let len = self.tracker.ledger().len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.tracker.ledger().len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    fn notify(&mut self, kind: NoticeKind, text: impl Into<String>, expires_at: Option<Instant>) {
        self.notice = Some(Notice {
            text: text.into(),
            kind,
            expires_at,
        });
    }

    /// Drop an expired notice. Called on every redraw tick.
    pub fn tick(&mut self, now: Instant) {
        let expired = matches!(&self.notice, Some(Notice { expires_at: Some(at), .. }) if *at <= now);
        if expired {
            self.notice = None;
        }
    }

    pub fn submit_form(&mut self) {
        match self.form.submit() {
            Ok(record) => {
                self.tracker.add_expense(record);
                self.form.reset_after_submit();
                let expires = Instant::now() + self.feedback;
                self.notify(NoticeKind::Success, "Expense added successfully!", Some(expires));
            }
            Err(err) => self.notify(NoticeKind::Error, format!("Cannot add expense: {}", err), None),
        }
    }

    pub fn save(&mut self) {
        match self.tracker.save() {
            Ok(path) => {
                let text = format!("Expenses saved to {}", path.display());
                self.notify(NoticeKind::Success, text, None);
            }
            Err(err) => self.notify(NoticeKind::Error, err.to_string(), None),
        }
    }

    pub fn load(&mut self) {
        let path = self.tracker.destination().to_path_buf();
        match self.tracker.load_from_path(&path) {
            Ok(report) if report.is_clean() => {
                let text = format!("Loaded {} expenses from {}", report.records.len(), path.display());
                self.notify(NoticeKind::Success, text, None);
            }
            Ok(report) => {
                let first = report
                    .rejected
                    .first()
                    .map(|row| format!(" (line {}: {})", row.line, row.reason))
                    .unwrap_or_default();
                let text = format!(
                    "Loaded {} expenses, skipped {} bad rows{}",
                    report.records.len(),
                    report.rejected.len(),
                    first
                );
                self.notify(NoticeKind::Warning, text, None);
            }
            Err(err) => self.notify(NoticeKind::Error, format!("Error loading the file: {}", err), None),
        }

        self.state.select(if self.tracker.ledger().is_empty() { None } else { Some(0) });
    }

    /// Apply one key press. Returns `true` when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return true,
                KeyCode::Char('s') => self.save(),
                KeyCode::Char('l') => self.load(),
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Tab => self.next_page(),
            KeyCode::BackTab => self.previous_page(),
            _ if self.current_page == Page::AddExpense => self.handle_form_key(key.code),
            KeyCode::Char('q') => return true,
            KeyCode::Char('s') => self.save(),
            KeyCode::Char('l') => self.load(),
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            _ => {}
        }
        false
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.submit_form(),
            KeyCode::Down => self.form.focus = self.form.focus.next(),
            KeyCode::Up => self.form.focus = self.form.focus.previous(),
            KeyCode::Right if self.form.focus == Field::Category => {
                self.form.category = self.form.category.next()
            }
            KeyCode::Left if self.form.focus == Field::Category => {
                self.form.category = self.form.category.previous()
            }
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) => self.form.push_char(c),
            _ => {}
        }
    }
}

pub fn run_ui(app: &mut App) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| ui(f, app))?;

        // Poll so that timed notices disappear without a key press
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key) {
                return Ok(());
            }
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.current_page {
        Page::Home => render_home(f, chunks[1], app),
        Page::AddExpense => render_form(f, chunks[1], app),
        Page::Reports => render_reports(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let pages = [Page::Home, Page::AddExpense, Page::Reports];

    let mut tab_spans = vec![Span::styled(
        " Expense Tracker  ",
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )];
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }
        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        tab_spans.push(Span::styled(page.title().to_string(), style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Expenses: {}", app.tracker.ledger().len()),
        Style::default().fg(Color::White),
    ));
    tab_spans.push(Span::raw("  "));
    tab_spans.push(Span::styled(
        format!("Total: {}", expense_tracker::record::format_amount(app.tracker.total())),
        Style::default().fg(Color::Red),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)])
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Green)));

    f.render_widget(header, area);
}

fn render_home(f: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome to the Expense Tracker! You can manage your expenses and visualize them.",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![Span::raw("  "), key("Tab"), Span::raw("        switch page")]),
        Line::from(vec![Span::raw("  "), key("Ctrl-S"), Span::raw("     save expenses")]),
        Line::from(vec![Span::raw("  "), key("Ctrl-L"), Span::raw("     load expenses")]),
        Line::from(vec![Span::raw("  "), key("Esc"), Span::raw("        quit")]),
        Line::from(""),
        Line::from(format!("  File: {}", app.tracker.destination().display())),
        Line::from(format!("  Load mode: {}", app.tracker.load_mode())),
    ];

    let home = Paragraph::new(content).block(Block::default().borders(Borders::ALL).title(" Home "));
    f.render_widget(home, area);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let row = |field: Field, label: &'static str, value: String| {
        let focused = form.focus == field;
        let marker = if focused {
            Span::styled("→ ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        } else {
            Span::raw("  ")
        };
        let value_style = if focused {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(vec![
            Span::raw(" "),
            marker,
            Span::styled(format!("{:<13}", label), Style::default().fg(Color::Cyan)),
            Span::styled(value, value_style),
        ])
    };

    let content = vec![
        Line::from(""),
        row(Field::Date, "Date", format!("{}_", form.date)),
        row(Field::Category, "Category", format!("◀ {} ▶", form.category)),
        row(Field::Amount, "Amount", format!("{}_", form.amount)),
        row(Field::Description, "Description", format!("{}_", form.description)),
        Line::from(""),
        Line::from(vec![
            Span::raw("   "),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" add expense  "),
            Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
            Span::raw(" field  "),
            Span::styled("←/→", Style::default().fg(Color::Yellow)),
            Span::raw(" category"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "   File Operations",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("   "),
            Span::styled("Ctrl-S", Style::default().fg(Color::Yellow)),
            Span::raw(" save expenses  "),
            Span::styled("Ctrl-L", Style::default().fg(Color::Yellow)),
            Span::raw(" load expenses"),
        ]),
    ];

    let widget = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title(" Add a New Expense "));
    f.render_widget(widget, area);
}

fn render_reports(f: &mut Frame, area: Rect, app: &mut App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_table(f, columns[0], app);
    render_chart(f, columns[1], app);
}

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(" Expense List ");

    if app.tracker.ledger().is_empty() {
        f.render_widget(Paragraph::new("No expenses available.").block(block), area);
        return;
    }

    let header_cells = ["Date", "Category", "Amount", "Description"].iter().map(|h| {
        Cell::from(*h).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    });
    let header = Row::new(header_cells).style(Style::default().bg(Color::DarkGray)).height(1);

    let rows = app.tracker.ledger().iter().map(|record| {
        let cells = vec![
            Cell::from(record.date().to_string()),
            Cell::from(record.category().as_str()).style(Style::default().fg(category_color(record.category()))),
            Cell::from(record.to_row()[2].clone()),
            Cell::from(truncate(record.description(), 24)),
        ];
        Row::new(cells).height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(13),
            Constraint::Length(9),
            Constraint::Min(8),
        ],
    )
    .header(header)
    .block(block)
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_chart(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(" Expense Visualization ");

    let summary = app.tracker.summary();
    if summary.is_empty() {
        let warning = Paragraph::new(Span::styled(
            "No expenses to visualize!",
            Style::default().fg(Color::Yellow),
        ))
        .block(block)
        .wrap(Wrap { trim: true });
        f.render_widget(warning, area);
        return;
    }

    let bars: Vec<Bar> = summary
        .iter()
        .map(|row| {
            Bar::default()
                .value(to_cents(row.total))
                .label(Line::from(row.category.as_str()))
                .text_value(expense_tracker::record::format_amount(row.total))
                .style(Style::default().fg(category_color(row.category)))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(13)
        .bar_gap(2)
        .value_style(Style::default().fg(Color::Black).bg(Color::White));

    f.render_widget(chart, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = Vec::new();

    if let Some(notice) = &app.notice {
        let color = match notice.kind {
            NoticeKind::Success => Color::Green,
            NoticeKind::Warning => Color::Yellow,
            NoticeKind::Error => Color::Red,
        };
        status_spans.push(Span::styled(format!(" {} ", notice.text), Style::default().fg(color)));
        status_spans.push(Span::raw(" | "));
    }

    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Page | "));
    if app.current_page == Page::Reports {
        status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" Nav | "));
    }
    status_spans.push(Span::styled("Esc", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Food => Color::Green,
        Category::Transport => Color::Cyan,
        Category::Entertainment => Color::Magenta,
        Category::Utilities => Color::Yellow,
        Category::Other => Color::Gray,
    }
}

/// Bar heights are integers, so chart in cents
fn to_cents(amount: Decimal) -> u64 {
    (amount * Decimal::ONE_HUNDRED).round().to_u64().unwrap_or(u64::MAX)
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expense_tracker::{Config, LoadMode};
    use ratatui::backend::TestBackend;
    use std::path::Path;

    fn app_at(path: &Path) -> App {
        let config = Config {
            destination: path.to_path_buf(),
            ..Config::default()
        };
        App::new(ExpenseTracker::new(&config), "2024-01-05", Duration::from_millis(1000))
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(app: &mut App, c: char) -> bool {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_page_cycle() {
        assert_eq!(Page::Home.next().next().next(), Page::Home);
        assert_eq!(Page::Home.previous(), Page::Reports);
    }

    #[test]
    fn test_add_expense_through_form() {
        let mut app = app_at(Path::new("unused.csv"));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.current_page, Page::AddExpense);

        // Date is prefilled; move to category and pick Transport
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Down);
        for _ in 0..4 {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "5.00");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "bus");
        press(&mut app, KeyCode::Enter);

        let records = app.tracker.ledger().snapshot();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category(), Category::Transport);
        assert_eq!(records[0].amount(), Decimal::new(500, 2));
        assert_eq!(records[0].description(), "bus");
        assert_eq!(app.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Success));
        assert_eq!(app.form.amount, "0.00");
    }

    #[test]
    fn test_q_is_text_on_form_page() {
        let mut app = app_at(Path::new("unused.csv"));
        app.current_page = Page::AddExpense;
        app.form.focus = Field::Description;
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.form.description, "q");

        app.current_page = Page::Home;
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_invalid_form_keeps_ledger_empty() {
        let mut app = app_at(Path::new("unused.csv"));
        app.current_page = Page::AddExpense;
        app.form.amount = "abc".into();
        press(&mut app, KeyCode::Enter);

        assert!(app.tracker.ledger().is_empty());
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.expires_at.is_none());
    }

    #[test]
    fn test_success_notice_expires() {
        let mut app = app_at(Path::new("unused.csv"));
        app.submit_form();
        assert!(app.notice.is_some());

        app.tick(Instant::now());
        assert!(app.notice.is_some());

        app.tick(Instant::now() + Duration::from_secs(2));
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_save_and_load_shortcuts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.csv");
        let mut app = app_at(&path);
        app.submit_form();
        assert!(!ctrl(&mut app, 's'));
        assert!(path.exists());

        let mut other = app_at(&path);
        ctrl(&mut other, 'l');
        assert_eq!(other.tracker.ledger(), app.tracker.ledger());
        assert_eq!(other.state.selected(), Some(0));
    }

    #[test]
    fn test_failed_load_shows_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.csv");
        std::fs::write(&path, "Date,Category,Amount,Description\n2024-01-05,Food,xyz,\n").unwrap();

        let mut app = app_at(&path);
        app.submit_form();
        app.load();

        assert_eq!(app.tracker.ledger().len(), 1);
        assert_eq!(app.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Error));
    }

    #[test]
    fn test_reports_render_empty_and_filled() {
        let mut app = app_at(Path::new("unused.csv"));
        app.current_page = Page::Reports;
        let screen = render(&mut app);
        assert!(screen.contains("No expenses available."));
        assert!(screen.contains("No expenses to visualize!"));

        app.tracker
            .add_expense(ExpenseRecord::parse("2024-01-05", "Food", "12.50", "lunch").unwrap());
        let screen = render(&mut app);
        assert!(screen.contains("lunch"));
        assert!(screen.contains("12.50"));
        assert!(!screen.contains("No expenses to visualize!"));
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("café au lait", 7), "café...");
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_to_cents() {
        assert_eq!(to_cents(Decimal::new(1250, 2)), 1250);
    }

    #[test]
    fn test_quarantine_load_mode_shown_on_home() {
        let config = Config {
            load_mode: LoadMode::Quarantine,
            ..Config::default()
        };
        let mut app = App::new(ExpenseTracker::new(&config), "2024-01-05", Duration::from_millis(10));
        let screen = render(&mut app);
        assert!(screen.contains("Load mode: quarantine"));
    }
}
