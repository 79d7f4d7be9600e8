//! Main application state and event loop.
//!
//! This module implements The Elm Architecture (TEA) pattern: `App` is the
//! model, [`App::update`] and [`App::handle_api_message`] are the only places
//! state changes, and [`App::view`] renders the current state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tracing::{debug, info, trace};

use crate::config::Config;
use crate::events::{Event, KeyContext};
use crate::logging;
use crate::model::{parse_count, Completion, LoadState, PageRequest, Pagination, SelectionSet};
use crate::tasks::ApiMessage;
use crate::ui::{
    render_context_help, render_help, BulkSelectAction, BulkSelectDialog, LoadingIndicator,
    NotificationManager, SpinnerStyle, TableAction, TableView, Theme,
};

/// The main application struct that holds all state.
pub struct App {
    /// Whether the application should quit.
    should_quit: bool,
    /// Whether the help overlay is open.
    show_help: bool,
    /// Application configuration.
    config: Config,
    theme: Theme,
    /// Selected artwork ids across all pages.
    selection: SelectionSet,
    /// Current page, total pages and resident records.
    pagination: Pagination,
    table_view: TableView,
    bulk_select: BulkSelectDialog,
    /// Full-screen spinner shown while a page loads.
    loading: LoadingIndicator,
    notifications: NotificationManager,
    /// A fetch the event loop has not started yet.
    pending_request: Option<PageRequest>,
    /// Log directory shown in the help overlay.
    log_dir: Option<String>,
}

impl App {
    /// Create the application and request the first page.
    pub fn new(config: Config) -> Self {
        debug!("Creating new application instance");

        let theme = Theme::from_name(&config.settings.theme);
        let loading = LoadingIndicator::new(SpinnerStyle::from_name(&config.settings.spinner));

        let mut app = Self {
            should_quit: false,
            show_help: false,
            config,
            theme,
            selection: SelectionSet::new(),
            pagination: Pagination::new(),
            table_view: TableView::new(),
            bulk_select: BulkSelectDialog::new(),
            loading,
            notifications: NotificationManager::new(),
            pending_request: None,
            log_dir: logging::log_directory().map(|dir| dir.display().to_string()),
        };
        let request = app.pagination.go_to(1);
        app.begin_request(request);
        app
    }

    /// Get the application configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Take the fetch the event loop should start, if any.
    pub fn take_pending_request(&mut self) -> Option<PageRequest> {
        self.pending_request.take()
    }

    fn begin_request(&mut self, request: PageRequest) {
        debug!(page = request.page, request_id = request.id, "Queued page request");
        self.loading.set_message("Fetching data...");
        self.pending_request = Some(request);
    }

    /// The input context, which decides key routing and footer hints.
    fn key_context(&self) -> KeyContext {
        if self.pagination.is_loading() {
            KeyContext::Loading
        } else if self.bulk_select.is_visible() {
            KeyContext::BulkSelect
        } else if self.show_help {
            KeyContext::Help
        } else if self.pagination.error().is_some() {
            KeyContext::LoadError
        } else {
            KeyContext::Table
        }
    }

    /// Update the application state based on an event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => {
                trace!(key = ?key_event.code, modifiers = ?key_event.modifiers, "Key event");
                self.handle_key_event(key_event);
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
            }
            Event::Tick => self.handle_tick(),
        }
    }

    /// Apply a message from a background task.
    pub fn handle_api_message(&mut self, message: ApiMessage) {
        match message {
            ApiMessage::PageFetched { request, result } => {
                match self.pagination.complete(request.id, result) {
                    Completion::Applied => self.table_view.reset_cursor(),
                    Completion::Failed => {
                        self.notifications
                            .error(format!("Failed to load page {}", request.page));
                    }
                    Completion::Stale => {}
                }
            }
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            info!("Ctrl+C pressed, quitting");
            self.should_quit = true;
            return;
        }

        match self.key_context() {
            KeyContext::Loading => {
                if key.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            KeyContext::BulkSelect => {
                if let Some(BulkSelectAction::Submit(text)) = self.bulk_select.handle_input(key) {
                    self.submit_bulk_select(&text);
                }
            }
            KeyContext::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            KeyContext::LoadError => match key.code {
                KeyCode::Char('r') => {
                    if let Some(request) = self.pagination.retry() {
                        self.begin_request(request);
                    }
                }
                KeyCode::Esc => {
                    if !self.pagination.dismiss_error() {
                        self.notifications
                            .warning("No page loaded yet, press r to retry");
                    }
                }
                KeyCode::Char('?') => self.show_help = true,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            KeyContext::Table => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('?') => self.show_help = true,
                _ => {
                    let rows = self.pagination.records().len();
                    if let Some(action) = self.table_view.handle_input(key, rows) {
                        self.handle_table_action(action);
                    }
                }
            },
        }
    }

    fn handle_table_action(&mut self, action: TableAction) {
        match action {
            TableAction::ToggleRow(index) => {
                if let Some(id) = self.pagination.records().get(index).map(|a| a.id) {
                    self.selection.toggle(id);
                }
            }
            TableAction::TogglePage => {
                let ids = self.pagination.visible_ids();
                self.selection.select_all_visible(&ids);
            }
            TableAction::PreviousPage => {
                if let Some(request) = self.pagination.previous() {
                    self.begin_request(request);
                }
            }
            TableAction::NextPage => {
                if let Some(request) = self.pagination.next() {
                    self.begin_request(request);
                }
            }
            TableAction::OpenBulkSelect => self.bulk_select.show(),
        }
    }

    fn submit_bulk_select(&mut self, text: &str) {
        let requested = parse_count(text);
        let inserted = self
            .selection
            .select_first_n(self.pagination.records(), requested);
        info!(requested, inserted, "Bulk select applied");
        let noun = if inserted == 1 { "row" } else { "rows" };
        self.notifications
            .success(format!("{} {} selected", inserted, noun));
    }

    fn handle_tick(&mut self) {
        if self.pagination.is_loading() {
            self.loading.tick();
        }
        self.notifications.tick();
    }

    /// Render the application UI.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if self.pagination.is_loading() {
            self.loading.render_blocking(frame, area, &self.theme);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(1),    // Table or error panel
                Constraint::Length(1), // Key hints
            ])
            .split(area);

        self.render_header(frame, chunks[0]);

        match self.pagination.state() {
            LoadState::Failed { page, message } => {
                render_error_panel(frame, chunks[1], *page, message, &self.theme);
            }
            _ => self.table_view.render(
                frame,
                chunks[1],
                self.pagination.records(),
                &self.selection,
                &self.pagination,
                &self.theme,
            ),
        }

        render_context_help(frame, chunks[2], self.key_context(), &self.theme);

        if self.show_help {
            render_help(frame, area, &self.theme, self.log_dir.as_deref());
        }
        self.bulk_select.render(frame, area, &self.theme);
        self.notifications.render(frame, area);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(self.theme.muted));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let title = Paragraph::new(Span::styled(
            "Artworks",
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(title, inner);

        let count = Paragraph::new(Span::styled(
            format!("Selected: {}", self.selection.size()),
            Style::default().fg(self.theme.selected),
        ))
        .alignment(Alignment::Right);
        frame.render_widget(count, inner);
    }
}

fn render_error_panel(frame: &mut Frame, area: Rect, page: u32, message: &str, theme: &Theme) {
    let lines = vec![
        Line::styled(message.to_string(), Style::default().fg(theme.fg)),
        Line::raw(""),
        Line::styled(
            "Press r to retry, Esc to go back",
            Style::default().fg(theme.muted),
        ),
    ];
    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" Could not load page {} ", page))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.error)),
        );
    frame.render_widget(panel, area);
}
