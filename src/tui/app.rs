use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::cli::Cli;
use crate::io::config_io;
use crate::model::{Config, TaskId, TaskList};
use crate::ops::edit_session::EditSession;
use crate::ops::view::{self, FilterMode, SortMode};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a new task into the prompt
    Insert,
    /// Editing the text of an existing task inline
    Edit,
    /// Waiting for y/n on a pending delete
    Confirm,
}

/// Outcome notice shown in the status row (the UI's toast)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// A delete waiting for affirmative confirmation
#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub task_id: TaskId,
    pub text: String,
}

/// Main application state
pub struct App {
    pub list: TaskList,
    pub session: EditSession,
    pub filter: FilterMode,
    pub sort: SortMode,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Cursor index into the projected (visible) list
    pub cursor: usize,
    /// First visible row of the list view
    pub scroll_offset: usize,
    /// Text buffer shared by Insert and Edit modes
    pub edit_buffer: String,
    /// Byte offset of the cursor within `edit_buffer`
    pub edit_cursor: usize,
    pub confirm: Option<ConfirmState>,
    pub show_help: bool,
    pub help_scroll: usize,
    pub notice: Option<Notice>,
    notice_at: Option<Instant>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let filter = config
            .defaults
            .filter
            .as_deref()
            .and_then(FilterMode::parse)
            .unwrap_or_default();
        let sort = config
            .defaults
            .sort
            .as_deref()
            .and_then(SortMode::parse)
            .unwrap_or_default();

        App {
            list: TaskList::new(),
            session: EditSession::new(),
            filter,
            sort,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            edit_buffer: String::new(),
            edit_cursor: 0,
            confirm: None,
            show_help: false,
            help_scroll: 0,
            notice: None,
            notice_at: None,
        }
    }

    /// Ids of the visible tasks, in display order.
    pub fn visible_ids(&self) -> Vec<TaskId> {
        view::project(self.list.tasks(), self.filter, self.sort)
            .iter()
            .map(|t| t.id)
            .collect()
    }

    pub fn visible_len(&self) -> usize {
        self.list
            .tasks()
            .iter()
            .filter(|t| self.filter.matches(t))
            .count()
    }

    /// Id of the task under the cursor, if any.
    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.visible_ids().get(self.cursor).copied()
    }

    /// Keep the cursor inside the visible list after mutations or
    /// filter changes.
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn set_filter(&mut self, filter: FilterMode) {
        self.filter = filter;
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    pub fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            text: text.into(),
        });
        self.notice_at = Some(Instant::now());
    }

    /// Drop the notice once it has been on screen long enough.
    pub fn expire_notice(&mut self) {
        if let Some(at) = self.notice_at
            && at.elapsed() >= Duration::from_secs(3)
        {
            self.notice = None;
            self.notice_at = None;
        }
    }
}

/// Load config, set up the terminal, and run the event loop until quit.
pub fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config(cli.config.as_deref())?;
    let mut app = App::new(&config);

    // CLI flags override config defaults, and fail fast on bad labels
    if let Some(ref label) = cli.filter {
        app.filter = FilterMode::parse(label)
            .ok_or_else(|| format!("unknown filter mode: {}", label))?;
    }
    if let Some(ref label) = cli.sort {
        app.sort =
            SortMode::parse(label).ok_or_else(|| format!("unknown sort mode: {}", label))?;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }
        app.expire_notice();

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
