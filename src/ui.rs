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
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
    Frame, Terminal,
};
use std::collections::VecDeque;
use std::io;
use std::str::FromStr;

use student_registry::{
    course_fee, AppConfig, Bracket, GradeLevel, RegistryError, Student, StudentRegistry,
};

/// Notices kept in the output panel
const MAX_NOTICES: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    AddStudent,
    EnrollStudent,
    ViewBalance,
    PayFees,
    ShowStatus,
    RemoveStudent,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 7] = [
        MenuItem::AddStudent,
        MenuItem::EnrollStudent,
        MenuItem::ViewBalance,
        MenuItem::PayFees,
        MenuItem::ShowStatus,
        MenuItem::RemoveStudent,
        MenuItem::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::AddStudent => "Add Student",
            MenuItem::EnrollStudent => "Enroll Student",
            MenuItem::ViewBalance => "View Student Balance",
            MenuItem::PayFees => "Pay Student Fees",
            MenuItem::ShowStatus => "Show Student Status",
            MenuItem::RemoveStudent => "Remove Student",
            MenuItem::Exit => "Exit",
        }
    }

    fn prompts(&self) -> &'static [&'static str] {
        match self {
            MenuItem::AddStudent => &["Enter student name:", "Enter student age:"],
            MenuItem::EnrollStudent | MenuItem::ViewBalance | MenuItem::ShowStatus => {
                &["Enter student ID:"]
            }
            MenuItem::PayFees => &["Enter student ID:", "Enter amount to pay:"],
            MenuItem::RemoveStudent => &["Enter student ID to remove:"],
            MenuItem::Exit => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

/// Text prompts collected before an action runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub action: MenuItem,
    pub fields: Vec<Field>,
    pub focus: usize,
}

impl Form {
    fn new(action: MenuItem) -> Self {
        Self {
            action,
            fields: action
                .prompts()
                .iter()
                .map(|label| Field {
                    label: *label,
                    value: String::new(),
                })
                .collect(),
            focus: 0,
        }
    }

    fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(|f| f.value.trim()).unwrap_or("")
    }

    fn focused_mut(&mut self) -> Option<&mut Field> {
        self.fields.get_mut(self.focus)
    }
}

/// Second step of "Add Student": level choice within the age bracket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelPicker {
    pub name: String,
    pub age: i32,
    pub choices: &'static [GradeLevel],
    pub selected: usize,
}

/// Second step of "Enroll Student": checkbox list of the level's courses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoursePicker {
    pub student_id: u64,
    pub student_name: String,
    pub choices: &'static [&'static str],
    pub checked: Vec<bool>,
    pub cursor: usize,
    pub hint: Option<String>,
}

impl CoursePicker {
    fn selected_courses(&self) -> Vec<&'static str> {
        self.choices
            .iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(course, _)| *course)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Form(Form),
    PickLevel(LevelPicker),
    PickCourses(CoursePicker),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// One entry in the output panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub lines: Vec<String>,
}

pub struct App {
    pub registry: StudentRegistry,
    pub config: AppConfig,
    pub mode: Mode,
    pub menu_state: ListState,
    /// Newest last
    pub notices: VecDeque<Notice>,
    pub should_quit: bool,
}

impl App {
    pub fn new(registry: StudentRegistry, config: AppConfig) -> Self {
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));

        Self {
            registry,
            config,
            mode: Mode::Menu,
            menu_state,
            notices: VecDeque::with_capacity(MAX_NOTICES + 1),
            should_quit: false,
        }
    }

    pub fn selected_menu_item(&self) -> MenuItem {
        let index = self.menu_state.selected().unwrap_or(0);
        MenuItem::ALL[index.min(MenuItem::ALL.len() - 1)]
    }

    fn notify(&mut self, kind: NoticeKind, lines: Vec<String>) {
        self.notices.push_back(Notice { kind, lines });
        if self.notices.len() > MAX_NOTICES {
            self.notices.pop_front();
        }
    }

    fn error(&mut self, message: impl Into<String>) {
        self.notify(NoticeKind::Error, vec![message.into()]);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let mode = std::mem::replace(&mut self.mode, Mode::Menu);
        self.mode = match mode {
            Mode::Menu => self.on_menu_key(key),
            Mode::Form(form) => self.on_form_key(form, key),
            Mode::PickLevel(picker) => self.on_level_key(picker, key),
            Mode::PickCourses(picker) => self.on_course_key(picker, key),
        };
    }

    fn on_menu_key(&mut self, key: KeyEvent) -> Mode {
        let len = MenuItem::ALL.len();
        let current = self.menu_state.selected().unwrap_or(0);

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.menu_state.select(Some((current + 1) % len)),
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_state.select(Some((current + len - 1) % len))
            }
            KeyCode::Home => self.menu_state.select(Some(0)),
            KeyCode::End => self.menu_state.select(Some(len - 1)),
            KeyCode::Enter => return self.open(self.selected_menu_item()),
            _ => {}
        }
        Mode::Menu
    }

    fn open(&mut self, item: MenuItem) -> Mode {
        match item {
            MenuItem::Exit => {
                self.should_quit = true;
                Mode::Menu
            }
            _ => Mode::Form(Form::new(item)),
        }
    }

    fn on_form_key(&mut self, mut form: Form, key: KeyEvent) -> Mode {
        let last = form.fields.len().saturating_sub(1);

        match key.code {
            KeyCode::Esc => return Mode::Menu,
            KeyCode::Tab | KeyCode::Down => form.focus = if form.focus >= last { 0 } else { form.focus + 1 },
            KeyCode::BackTab | KeyCode::Up => form.focus = if form.focus == 0 { last } else { form.focus - 1 },
            KeyCode::Backspace => {
                if let Some(field) = form.focused_mut() {
                    field.value.pop();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = form.focused_mut() {
                    field.value.push(c);
                }
            }
            KeyCode::Enter if form.focus < last => form.focus += 1,
            KeyCode::Enter => return self.submit(form),
            _ => {}
        }
        Mode::Form(form)
    }

    fn submit(&mut self, form: Form) -> Mode {
        match form.action {
            MenuItem::AddStudent => {
                let name = form.value(0).to_string();
                if name.is_empty() {
                    self.error("Student name cannot be empty.");
                    return Mode::Form(form);
                }
                let Some(age) = parse_number::<i32>(form.value(1)) else {
                    self.error("Invalid age entered. Please try again.");
                    return Mode::Form(form);
                };
                Mode::PickLevel(LevelPicker {
                    name,
                    age,
                    choices: Bracket::for_age(age).levels(),
                    selected: 0,
                })
            }
            MenuItem::EnrollStudent => {
                let Some(id) = parse_number::<u64>(form.value(0)) else {
                    self.error("Invalid student ID entered. Please try again.");
                    return Mode::Form(form);
                };
                match self.registry.find(id) {
                    Ok(student) => {
                        let choices = student.level.courses();
                        Mode::PickCourses(CoursePicker {
                            student_id: id,
                            student_name: student.name.clone(),
                            choices,
                            checked: vec![false; choices.len()],
                            cursor: 0,
                            hint: None,
                        })
                    }
                    Err(err) => {
                        self.error(err.to_string());
                        Mode::Menu
                    }
                }
            }
            MenuItem::ViewBalance => {
                let Some(id) = parse_number::<u64>(form.value(0)) else {
                    self.error("Invalid student ID entered. Please try again.");
                    return Mode::Form(form);
                };
                match self.registry.find(id) {
                    Ok(student) => {
                        let line = format!(
                            "Balance for {}: {}",
                            student.name,
                            self.config.money(student.balance)
                        );
                        self.notify(NoticeKind::Info, vec![line]);
                    }
                    Err(err) => self.error(err.to_string()),
                }
                Mode::Menu
            }
            MenuItem::PayFees => {
                let (Some(id), Some(amount)) =
                    (parse_number::<u64>(form.value(0)), parse_number::<i64>(form.value(1)))
                else {
                    self.error("Invalid input entered. Please try again.");
                    return Mode::Form(form);
                };
                self.pay(id, amount);
                Mode::Menu
            }
            MenuItem::ShowStatus => {
                let Some(id) = parse_number::<u64>(form.value(0)) else {
                    self.error("Invalid student ID entered. Please try again.");
                    return Mode::Form(form);
                };
                match self.registry.find(id) {
                    Ok(student) => {
                        let lines = status_lines(student, &self.config);
                        self.notify(NoticeKind::Info, lines);
                    }
                    Err(err) => self.error(err.to_string()),
                }
                Mode::Menu
            }
            MenuItem::RemoveStudent => {
                let Some(id) = parse_number::<u64>(form.value(0)) else {
                    self.error("Invalid student ID entered. Please try again.");
                    return Mode::Form(form);
                };
                match self.registry.remove(id) {
                    Ok(removed) => self.notify(
                        NoticeKind::Success,
                        vec![format!("'{}' with ID {} has been removed.", removed.name, removed.id)],
                    ),
                    Err(err) => self.error(err.to_string()),
                }
                Mode::Menu
            }
            MenuItem::Exit => Mode::Menu,
        }
    }

    fn pay(&mut self, id: u64, amount: i64) {
        match self.registry.pay(id, amount) {
            Ok(payment) => {
                let name = self
                    .registry
                    .find(id)
                    .map(|s| s.name.clone())
                    .unwrap_or_default();
                let lines = vec![
                    format!("{} has been paid by {}.", self.config.money(payment.amount), name),
                    format!("Remaining balance: {}", self.config.money(payment.balance)),
                ];
                self.notify(NoticeKind::Success, lines);
            }
            Err(err @ RegistryError::Insufficient { requested, balance }) => {
                let lines = vec![
                    err.to_string(),
                    format!(
                        "Requested {}, outstanding {}",
                        self.config.money(requested),
                        self.config.money(balance)
                    ),
                ];
                self.notify(NoticeKind::Error, lines);
            }
            Err(err) => self.error(err.to_string()),
        }
    }

    fn on_level_key(&mut self, mut picker: LevelPicker, key: KeyEvent) -> Mode {
        let len = picker.choices.len();
        match key.code {
            KeyCode::Esc => return Mode::Menu,
            KeyCode::Down | KeyCode::Char('j') if len > 0 => picker.selected = (picker.selected + 1) % len,
            KeyCode::Up | KeyCode::Char('k') if len > 0 => {
                picker.selected = (picker.selected + len - 1) % len
            }
            KeyCode::Enter => {
                let Some(level) = picker.choices.get(picker.selected).copied() else {
                    return Mode::Menu;
                };
                match self.registry.add(&picker.name, picker.age, level) {
                    Ok(student) => {
                        let line = format!(
                            "'{}' added successfully. Student ID: {}",
                            student.name, student.id
                        );
                        self.notify(NoticeKind::Success, vec![line]);
                    }
                    Err(err) => self.error(err.to_string()),
                }
                return Mode::Menu;
            }
            _ => {}
        }
        Mode::PickLevel(picker)
    }

    fn on_course_key(&mut self, mut picker: CoursePicker, key: KeyEvent) -> Mode {
        let len = picker.choices.len();
        match key.code {
            KeyCode::Esc => return Mode::Menu,
            KeyCode::Down | KeyCode::Char('j') if len > 0 => picker.cursor = (picker.cursor + 1) % len,
            KeyCode::Up | KeyCode::Char('k') if len > 0 => picker.cursor = (picker.cursor + len - 1) % len,
            KeyCode::Char(' ') => {
                if let Some(checked) = picker.checked.get_mut(picker.cursor) {
                    *checked = !*checked;
                }
                picker.hint = None;
            }
            KeyCode::Enter => {
                let courses = picker.selected_courses();
                if courses.is_empty() {
                    picker.hint = Some("Please select at least one course.".to_string());
                    return Mode::PickCourses(picker);
                }
                match self.registry.enroll(picker.student_id, courses.as_slice()) {
                    Ok(enrollment) => {
                        let lines = vec![
                            format!(
                                "'{}' enrolled in courses: {}",
                                picker.student_name,
                                enrollment.courses.join(", ")
                            ),
                            format!(
                                "Total Fees for Selected Courses: {}",
                                self.config.money(enrollment.total_fee)
                            ),
                        ];
                        self.notify(NoticeKind::Success, lines);
                    }
                    Err(err) => self.error(err.to_string()),
                }
                return Mode::Menu;
            }
            _ => {}
        }
        Mode::PickCourses(picker)
    }
}

fn parse_number<T: FromStr>(input: &str) -> Option<T> {
    input.trim().parse().ok()
}

/// Lines of the "Student Status" view
pub fn status_lines(student: &Student, config: &AppConfig) -> Vec<String> {
    vec![
        "Student Status".to_string(),
        format!("  ID:  {}", student.id),
        format!("  Name:  {}", student.name),
        format!("  Age:  {} year", student.age),
        format!("  Grade Level:  {}", student.level),
        format!("  Balance:  {}", config.money(student.balance)),
        format!("  Enrolled courses:  [{}]", student.courses.join(", ")),
        format!("  Added:  {}", student.created_at.format("%Y-%m-%d %H:%M:%S UTC")),
    ]
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Ignore release/repeat events reported on some platforms
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(chunks[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(content[1]);

    match app.mode.clone() {
        Mode::Menu => render_menu(f, content[0], app),
        Mode::Form(form) => render_form(f, content[0], &form),
        Mode::PickLevel(picker) => render_level_picker(f, content[0], &picker),
        Mode::PickCourses(picker) => render_course_picker(f, content[0], &picker, &app.config),
    }

    render_notices(f, right[0], app);
    render_roster(f, right[1], app);
    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let spans = vec![
        Span::styled(
            "Student Management System",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Students: {}", app.registry.len()),
            Style::default().fg(Color::White),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Outstanding: {}", app.config.money(app.registry.total_outstanding())),
            Style::default().fg(Color::Green),
        ),
    ];

    let header = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn highlight() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

fn render_menu(f: &mut Frame, area: Rect, app: &mut App) {
    let items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .map(|item| {
            let style = if *item == MenuItem::Exit {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(item.label(), style)))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Choose an option "),
        )
        .highlight_style(highlight())
        .highlight_symbol("→ ");

    f.render_stateful_widget(list, area, &mut app.menu_state);
}

fn render_form(f: &mut Frame, area: Rect, form: &Form) {
    let mut lines = Vec::new();
    for (i, field) in form.fields.iter().enumerate() {
        let focused = i == form.focus;
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(field.label, label_style)));

        let mut value = vec![Span::raw("  "), Span::styled(field.value.clone(), Style::default().fg(Color::Cyan))];
        if focused {
            value.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }
        lines.push(Line::from(value));
        lines.push(Line::from(""));
    }

    let form_view = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" {} ", form.action.label())),
    );

    f.render_widget(form_view, area);
}

fn render_level_picker(f: &mut Frame, area: Rect, picker: &LevelPicker) {
    let items: Vec<ListItem> = picker
        .choices
        .iter()
        .map(|level| ListItem::new(level.as_str()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Select the student's grade level "),
        )
        .highlight_style(highlight())
        .highlight_symbol("→ ");

    let mut state = ListState::default();
    state.select(Some(picker.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_course_picker(f: &mut Frame, area: Rect, picker: &CoursePicker, config: &AppConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let items: Vec<ListItem> = picker
        .choices
        .iter()
        .zip(&picker.checked)
        .map(|(course, checked)| {
            let mark = if *checked { "[x]" } else { "[ ]" };
            let color = if *checked { Color::Green } else { Color::White };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} {}", mark, course), Style::default().fg(color)),
                Span::styled(
                    format!("  {}", config.money(course_fee(course))),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!(" Select preferred courses for {} ", truncate(&picker.student_name, 20))),
        )
        .highlight_style(highlight())
        .highlight_symbol("→ ");

    let mut state = ListState::default();
    state.select(Some(picker.cursor));
    f.render_stateful_widget(list, chunks[0], &mut state);

    if let Some(hint) = &picker.hint {
        let hint_line = Paragraph::new(Line::from(Span::styled(
            hint.clone(),
            Style::default().fg(Color::Red),
        )));
        f.render_widget(hint_line, chunks[1]);
    }
}

fn render_notices(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    for notice in app.notices.iter().rev() {
        let color = match notice.kind {
            NoticeKind::Info => Color::White,
            NoticeKind::Success => Color::Green,
            NoticeKind::Error => Color::Red,
        };
        for (i, text) in notice.lines.iter().enumerate() {
            let style = if i == 0 {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color)
            };
            lines.push(Line::from(Span::styled(text.clone(), style)));
        }
        lines.push(Line::from(Span::styled(
            "─".repeat(area.width.saturating_sub(2) as usize),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let output = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Output "),
    );

    f.render_widget(output, area);
}

fn render_roster(f: &mut Frame, area: Rect, app: &App) {
    let header_cells = ["ID", "Name", "Age", "Grade Level", "Courses", "Balance"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.registry.students().iter().map(|student| {
        let balance_color = if student.has_outstanding_balance() {
            Color::Red
        } else {
            Color::Green
        };

        Row::new(vec![
            Cell::from(student.id.to_string()),
            Cell::from(truncate(&student.name, 22)),
            Cell::from(student.age.to_string()),
            Cell::from(student.level.as_str()),
            Cell::from(student.courses.len().to_string()),
            Cell::from(app.config.money(student.balance)).style(Style::default().fg(balance_color)),
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(24),
            Constraint::Length(5),
            Constraint::Length(22),
            Constraint::Length(8),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Students "),
    );

    f.render_widget(table, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let hints: &[(&str, &str)] = match app.mode {
        Mode::Menu => &[("↑/↓", "Nav"), ("Enter", "Select"), ("q", "Quit")],
        Mode::Form(_) => &[("Tab", "Next field"), ("Enter", "Confirm"), ("Esc", "Cancel")],
        Mode::PickLevel(_) => &[("↑/↓", "Nav"), ("Enter", "Confirm"), ("Esc", "Cancel")],
        Mode::PickCourses(_) => &[
            ("↑/↓", "Nav"),
            ("Space", "Toggle"),
            ("Enter", "Enroll"),
            ("Esc", "Cancel"),
        ],
    };

    let mut status_spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            status_spans.push(Span::raw(" | "));
        }
        let key_color = if *key == "q" { Color::Red } else { Color::Yellow };
        status_spans.push(Span::styled(*key, Style::default().fg(key_color)));
        status_spans.push(Span::raw(format!(" {}", action)));
    }

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
