// ABOUTME: Central application state and event handling
// ABOUTME: Single struct holds all state, mutations happen in handle_* methods

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use tui_textarea::TextArea;

use folio_core::board::{self, Task};
use folio_core::catalog::{self, AgentDescriptor, AgentStatus, CategoryCount};
use folio_core::request::{self, CustomAgentRequest, DataSource, LoggingIntake};
use folio_core::router::{reduce, Action, AppState, AppView};
use folio_core::session::{Delivery, LatencyRange, Session};
use folio_core::settings::AgentSettings;
use folio_core::types::User;
use folio_core::{Authenticator, ResponderRegistry, StubAuthenticator};

use crate::theme::Theme;

const NOTICE_TTL: Duration = Duration::from_secs(4);
const CTRL_C_WINDOW: Duration = Duration::from_millis(500);

/// Returned from handle_key when the event loop must act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Quit,
}

/// Which tab of the agent screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentTab {
    Chat,
    Settings,
}

/// Focused field on the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
}

/// The custom-agent dialog overlay. Focus walks the three text fields, then
/// the data-source checkboxes.
pub struct RequestDialog {
    pub form: CustomAgentRequest,
    pub focus: usize,
}

impl RequestDialog {
    pub const FIELDS: usize = 3 + DataSource::ALL.len();

    pub fn new() -> Self {
        Self {
            form: CustomAgentRequest::default(),
            focus: 0,
        }
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            0 => Some(&mut self.form.requestor_email),
            1 => Some(&mut self.form.short_description),
            2 => Some(&mut self.form.required_capabilities),
            _ => None,
        }
    }

    fn focused_source(&self) -> Option<DataSource> {
        self.focus.checked_sub(3).and_then(|i| DataSource::ALL.get(i).copied())
    }
}

/// Mock ops-board state (behind --ops-board).
pub struct BoardState {
    pub tasks: Vec<Task>,
    pub task_index: usize,
    pub agent_index: usize,
    pub logs_expanded: bool,
    pub errors_expanded: bool,
    pub metrics_open: bool,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            tasks: board::mock_tasks(),
            task_index: 0,
            agent_index: 0,
            logs_expanded: true,
            errors_expanded: false,
            metrics_open: false,
        }
    }

    pub fn current_task(&self) -> Option<&Task> {
        self.tasks.get(self.task_index)
    }
}

/// A transient status-bar notice.
pub struct Notice {
    pub text: String,
    shown_at: Instant,
}

impl Notice {
    fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown_at: Instant::now(),
        }
    }
}

/// Central application state
pub struct App {
    // Routing (pure reducer state)
    pub state: AppState,

    // Explicit app context, no globals
    pub theme: &'static Theme,
    latency: LatencyRange,
    registry: Arc<ResponderRegistry>,
    delivery_tx: mpsc::UnboundedSender<Delivery>,
    auth: StubAuthenticator,
    intake: LoggingIntake,

    // Login screen
    pub login: LoginForm,

    // Gallery screen
    pub search: String,
    pub category_index: usize,
    pub gallery_index: usize,
    pub request_dialog: Option<RequestDialog>,

    // Agent screen
    pub session: Option<Session>,
    pub tab: AgentTab,
    pub settings: AgentSettings,
    pub settings_row: usize,
    pub input: TextArea<'static>,
    pub scroll_offset: usize,

    // Ops board (exclusive mode)
    pub board: Option<BoardState>,

    // Status bar
    pub notice: Option<Notice>,
    pub throbber_frame: usize,
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    pub fn new(
        theme: &'static Theme,
        latency: LatencyRange,
        delivery_tx: mpsc::UnboundedSender<Delivery>,
        ops_board: bool,
    ) -> Self {
        Self {
            state: AppState::default(),
            theme,
            latency,
            registry: Arc::new(ResponderRegistry::builtin()),
            delivery_tx,
            auth: StubAuthenticator,
            intake: LoggingIntake,
            login: LoginForm::default(),
            search: String::new(),
            category_index: 0,
            gallery_index: 0,
            request_dialog: None,
            session: None,
            tab: AgentTab::Chat,
            settings: AgentSettings::default(),
            settings_row: 0,
            input: TextArea::default(),
            scroll_offset: 0,
            board: ops_board.then(BoardState::new),
            notice: None,
            throbber_frame: 0,
            last_ctrl_c: None,
        }
    }

    /// Advance throbber animation and expire stale notices.
    pub fn tick(&mut self) {
        self.throbber_frame = (self.throbber_frame + 1) % 8;
        if let Some(notice) = &self.notice {
            if notice.shown_at.elapsed() > NOTICE_TTL {
                self.notice = None;
            }
        }
    }

    /// Get current throbber character
    pub fn throbber_char(&self) -> char {
        const THROBBER: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];
        THROBBER[self.throbber_frame]
    }

    pub fn show_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice::new(text));
    }

    /// Check if the Ctrl+C hint should be shown.
    pub fn show_ctrl_c_hint(&self) -> bool {
        self.last_ctrl_c
            .map(|t| t.elapsed() < CTRL_C_WINDOW)
            .unwrap_or(false)
    }

    /// Sidebar categories with counts.
    pub fn categories(&self) -> Vec<CategoryCount> {
        catalog::categories()
    }

    pub fn selected_category(&self) -> Option<&'static str> {
        catalog::categories()
            .get(self.category_index)
            .and_then(|c| c.id)
    }

    /// Agents matching the current search and category.
    pub fn filtered_agents(&self) -> Vec<&'static AgentDescriptor> {
        catalog::filter(catalog::catalog(), &self.search, self.selected_category())
    }

    fn clamp_gallery_index(&mut self) {
        let max = self.filtered_agents().len().saturating_sub(1);
        self.gallery_index = self.gallery_index.min(max);
    }

    /// Handle a key event, returning a control action if needed.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Control> {
        // Global keys
        match key.code {
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(Control::Quit);
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(last) = self.last_ctrl_c {
                    if last.elapsed() < CTRL_C_WINDOW {
                        return Some(Control::Quit);
                    }
                }
                self.last_ctrl_c = Some(Instant::now());
                return None;
            }
            _ => {}
        }

        if self.board.is_some() {
            return self.handle_board_key(key);
        }

        match self.state.view {
            AppView::Login => self.handle_login_key(key),
            AppView::Gallery => {
                if self.request_dialog.is_some() {
                    self.handle_dialog_key(key)
                } else {
                    self.handle_gallery_key(key)
                }
            }
            AppView::Agent => self.handle_agent_key(key),
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) -> Option<Control> {
        match key.code {
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                self.login.focus = match self.login.focus {
                    LoginField::Email => LoginField::Password,
                    LoginField::Password => LoginField::Email,
                };
            }
            KeyCode::Enter => match self.auth.login(&self.login.email, &self.login.password) {
                Ok(user) => {
                    self.show_notice("Welcome back! Loading your document workspace...");
                    self.dispatch(Action::LogIn(user));
                }
                Err(e) => self.show_notice(e.to_string()),
            },
            KeyCode::Char(c) => match self.login.focus {
                LoginField::Email => self.login.email.push(c),
                LoginField::Password => self.login.password.push(c),
            },
            KeyCode::Backspace => {
                match self.login.focus {
                    LoginField::Email => self.login.email.pop(),
                    LoginField::Password => self.login.password.pop(),
                };
            }
            _ => {}
        }
        None
    }

    fn handle_gallery_key(&mut self, key: KeyEvent) -> Option<Control> {
        match key.code {
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logout();
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.request_dialog = Some(RequestDialog::new());
            }
            KeyCode::Up => {
                self.gallery_index = self.gallery_index.saturating_sub(1);
            }
            KeyCode::Down => {
                self.gallery_index += 1;
                self.clamp_gallery_index();
            }
            KeyCode::Left => {
                let count = catalog::categories().len();
                self.category_index = (self.category_index + count - 1) % count;
                self.gallery_index = 0;
            }
            KeyCode::Right | KeyCode::Tab => {
                let count = catalog::categories().len();
                self.category_index = (self.category_index + 1) % count;
                self.gallery_index = 0;
            }
            KeyCode::Enter => {
                if let Some(agent) = self.filtered_agents().get(self.gallery_index).copied() {
                    if agent.status == AgentStatus::Offline {
                        self.show_notice(format!("{} is offline", agent.name));
                    } else {
                        self.open_agent(*agent);
                    }
                }
            }
            KeyCode::Esc => {
                self.search.clear();
                self.clamp_gallery_index();
            }
            KeyCode::Char(c) => {
                self.search.push(c);
                self.gallery_index = 0;
            }
            KeyCode::Backspace => {
                self.search.pop();
                self.gallery_index = 0;
            }
            _ => {}
        }
        None
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) -> Option<Control> {
        let Some(dialog) = self.request_dialog.as_mut() else {
            return None;
        };
        match key.code {
            KeyCode::Esc => {
                self.request_dialog = None;
            }
            KeyCode::Tab => {
                dialog.focus = (dialog.focus + 1) % RequestDialog::FIELDS;
            }
            KeyCode::BackTab | KeyCode::Up => {
                dialog.focus = (dialog.focus + RequestDialog::FIELDS - 1) % RequestDialog::FIELDS;
            }
            KeyCode::Down => {
                dialog.focus = (dialog.focus + 1) % RequestDialog::FIELDS;
            }
            KeyCode::Enter => {
                match request::submit(&mut dialog.form, &mut self.intake) {
                    Ok(()) => {
                        self.request_dialog = None;
                        self.show_notice(request::SUBMIT_NOTICE);
                    }
                    Err(e) => self.show_notice(e.to_string()),
                }
            }
            KeyCode::Char(' ') => {
                if let Some(source) = dialog.focused_source() {
                    dialog.form.toggle_source(source);
                } else if let Some(field) = dialog.focused_text() {
                    field.push(' ');
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = dialog.focused_text() {
                    field.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = dialog.focused_text() {
                    field.pop();
                }
            }
            _ => {}
        }
        None
    }

    fn handle_agent_key(&mut self, key: KeyEvent) -> Option<Control> {
        match key.code {
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logout();
                return None;
            }
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.tab = match self.tab {
                    AgentTab::Chat => AgentTab::Settings,
                    AgentTab::Settings => AgentTab::Chat,
                };
                return None;
            }
            KeyCode::Esc => {
                self.leave_agent();
                return None;
            }
            _ => {}
        }

        match self.tab {
            AgentTab::Chat => self.handle_chat_key(key),
            AgentTab::Settings => self.handle_settings_key(key),
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) -> Option<Control> {
        // Input is disabled while an exchange is in flight; only scrolling
        // stays live.
        let pending = self
            .session
            .as_ref()
            .map(|s| s.is_pending())
            .unwrap_or(false);

        match key.code {
            // Scroll
            KeyCode::Up if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
            }
            KeyCode::Down if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
            }

            // Quick actions: drop a use case into the input
            KeyCode::Char(c @ ('1' | '2'))
                if key.modifiers.contains(KeyModifiers::ALT) && !pending =>
            {
                if let Some(session) = &self.session {
                    let idx = (c as usize) - ('1' as usize);
                    if let Some(use_case) = session.agent().use_cases.get(idx) {
                        self.input = TextArea::from([use_case.to_string()]);
                    }
                }
            }

            // Send message
            KeyCode::Enter if !key.modifiers.contains(KeyModifiers::SHIFT) && !pending => {
                let content = self.input.lines().join("\n");
                if let Some(session) = &mut self.session {
                    if session.submit(&content) {
                        self.input = TextArea::default();
                        self.scroll_offset = 0;
                    }
                }
            }

            // Pass to textarea
            _ if !pending => {
                self.input.input(key);
            }
            _ => {}
        }
        None
    }

    fn handle_settings_key(&mut self, key: KeyEvent) -> Option<Control> {
        const ROWS: usize = 6;
        match key.code {
            KeyCode::Up => {
                self.settings_row = self.settings_row.saturating_sub(1);
            }
            KeyCode::Down => {
                self.settings_row = (self.settings_row + 1).min(ROWS - 1);
            }
            KeyCode::Left => self.adjust_setting(false),
            KeyCode::Right => self.adjust_setting(true),
            KeyCode::Char(' ') | KeyCode::Enter if self.settings_row == 5 => {
                self.settings.auto_execute = !self.settings.auto_execute;
            }
            KeyCode::Char('r') => {
                self.settings = AgentSettings::default();
                self.show_notice("Settings reset to defaults");
            }
            KeyCode::Char('s') => {
                self.show_notice("Settings saved successfully!");
            }
            _ => {}
        }
        None
    }

    fn adjust_setting(&mut self, forward: bool) {
        use folio_core::settings::{DataSource as Ds, InputFormat, OutputFormat};

        fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
            let pos = all.iter().position(|v| *v == current).unwrap_or(0);
            let next = if forward {
                (pos + 1) % all.len()
            } else {
                (pos + all.len() - 1) % all.len()
            };
            all[next]
        }

        match self.settings_row {
            0 => self.settings.data_source = cycle(&Ds::ALL, self.settings.data_source, forward),
            1 => {
                self.settings.input_format =
                    cycle(&InputFormat::ALL, self.settings.input_format, forward)
            }
            2 => {
                self.settings.output_format =
                    cycle(&OutputFormat::ALL, self.settings.output_format, forward)
            }
            3 => self.settings.step_max_tokens(forward),
            4 => self.settings.step_temperature(forward),
            5 => self.settings.auto_execute = !self.settings.auto_execute,
            _ => {}
        }
    }

    fn handle_board_key(&mut self, key: KeyEvent) -> Option<Control> {
        let Some(board) = self.board.as_mut() else {
            return None;
        };
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Some(Control::Quit),
            KeyCode::Up => {
                board.task_index = board.task_index.saturating_sub(1);
                board.agent_index = 0;
            }
            KeyCode::Down => {
                board.task_index =
                    (board.task_index + 1).min(board.tasks.len().saturating_sub(1));
                board.agent_index = 0;
            }
            KeyCode::Tab => {
                if let Some(task) = board.tasks.get(board.task_index) {
                    if !task.agents.is_empty() {
                        board.agent_index = (board.agent_index + 1) % task.agents.len();
                    }
                }
            }
            KeyCode::Char('p') => {
                if let Some(run) = board
                    .tasks
                    .get_mut(board.task_index)
                    .and_then(|t| t.agents.get_mut(board.agent_index))
                {
                    run.toggle_paused();
                }
            }
            KeyCode::Char('l') => board.logs_expanded = !board.logs_expanded,
            KeyCode::Char('e') => board.errors_expanded = !board.errors_expanded,
            KeyCode::Char('m') => board.metrics_open = !board.metrics_open,
            _ => {}
        }
        None
    }

    /// Pasted text goes to the chat input; other screens ignore it, and the
    /// input stays disabled while an exchange is in flight.
    pub fn handle_paste(&mut self, text: &str) {
        let pending = self
            .session
            .as_ref()
            .map(|s| s.is_pending())
            .unwrap_or(false);
        if self.board.is_none()
            && self.state.view == AppView::Agent
            && self.tab == AgentTab::Chat
            && !pending
        {
            self.input.insert_str(text);
        }
    }

    /// Apply a dispatch-loop delivery from the channel.
    pub fn handle_delivery(&mut self, delivery: Delivery) {
        if let Some(session) = &mut self.session {
            if session.accept(delivery) {
                self.scroll_offset = 0;
            }
        }
    }

    fn dispatch(&mut self, action: Action) {
        self.state = reduce(self.state.clone(), action);
    }

    fn open_agent(&mut self, agent: AgentDescriptor) {
        let user_name = self
            .state
            .user
            .as_ref()
            .map(|u: &User| u.name.clone())
            .unwrap_or_else(|| "there".to_string());
        self.session = Some(Session::open(
            agent,
            &user_name,
            Arc::clone(&self.registry),
            self.latency,
            self.delivery_tx.clone(),
        ));
        self.settings = AgentSettings::default();
        self.settings_row = 0;
        self.tab = AgentTab::Chat;
        self.input = TextArea::default();
        self.scroll_offset = 0;
        self.dispatch(Action::SelectAgent(agent));
    }

    /// Back to the gallery, discarding the transcript and any pending
    /// exchange.
    fn leave_agent(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.close();
        }
        self.dispatch(Action::BackToGallery);
    }

    fn logout(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.close();
        }
        self.login = LoginForm::default();
        self.search.clear();
        self.category_index = 0;
        self.gallery_index = 0;
        self.request_dialog = None;
        self.dispatch(Action::LogOut);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::types::{Role, TaskResult};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn new_app() -> (App, mpsc::UnboundedReceiver<Delivery>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = App::new(
            &crate::theme::DEFAULT_THEME,
            LatencyRange::fixed(1),
            tx,
            false,
        );
        (app, rx)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn login(app: &mut App) {
        type_str(app, "a@b.com");
        app.handle_key(key(KeyCode::Tab));
        type_str(app, "x");
        app.handle_key(key(KeyCode::Enter));
    }

    #[test]
    fn test_starts_on_login_view() {
        let (app, _rx) = new_app();
        assert_eq!(app.state.view, AppView::Login);
    }

    #[test]
    fn test_login_derives_name_and_moves_to_gallery() {
        let (mut app, _rx) = new_app();
        login(&mut app);
        assert_eq!(app.state.view, AppView::Gallery);
        assert_eq!(app.state.user.as_ref().unwrap().name, "a");
    }

    #[test]
    fn test_login_with_empty_fields_shows_notice() {
        let (mut app, _rx) = new_app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state.view, AppView::Login);
        assert!(app.notice.is_some());
    }

    #[test]
    fn test_gallery_search_narrows_and_esc_clears() {
        let (mut app, _rx) = new_app();
        login(&mut app);
        type_str(&mut app, "market");
        assert_eq!(app.filtered_agents().len(), 1);
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.filtered_agents().len(), catalog::catalog().len());
    }

    #[test]
    fn test_category_cycling_resets_selection() {
        let (mut app, _rx) = new_app();
        login(&mut app);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.gallery_index, 1);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.gallery_index, 0);
        assert_eq!(app.selected_category(), Some("Analytics"));
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.selected_category(), None);
    }

    #[tokio::test]
    async fn test_selecting_data_analyst_seeds_greeting() {
        let (mut app, _rx) = new_app();
        login(&mut app);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state.view, AppView::Agent);
        let session = app.session.as_ref().unwrap();
        let first = &session.transcript()[0];
        assert_eq!(first.role, Role::Agent);
        assert!(first.content.contains("Data Analyst Pro"));
    }

    #[tokio::test]
    async fn test_chat_submit_round_trip() {
        let (mut app, mut rx) = new_app();
        login(&mut app);
        app.handle_key(key(KeyCode::Enter)); // open data-analyst
        type_str(&mut app, "hello");
        app.handle_key(key(KeyCode::Enter));
        assert!(app.session.as_ref().unwrap().is_pending());
        // While pending the input is disabled: keystrokes are dropped and
        // the transcript stays unchanged.
        let len_before = app.session.as_ref().unwrap().transcript().len();
        type_str(&mut app, "again");
        assert_eq!(app.input.lines(), [""]);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.session.as_ref().unwrap().transcript().len(), len_before);

        let delivery = rx.recv().await.unwrap();
        app.handle_delivery(delivery);
        let session = app.session.as_ref().unwrap();
        assert!(!session.is_pending());
        let last = session.transcript().last().unwrap();
        assert_eq!(last.role, Role::Agent);
        match last.result.as_ref().unwrap() {
            TaskResult::Analysis { insights, .. } => assert_eq!(insights.len(), 3),
            other => panic!("expected analysis, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_input_disabled_while_pending() {
        let (mut app, mut rx) = new_app();
        login(&mut app);
        app.handle_key(key(KeyCode::Enter)); // open data-analyst
        type_str(&mut app, "hello");
        app.handle_key(key(KeyCode::Enter));
        assert!(app.session.as_ref().unwrap().is_pending());

        // Keystrokes, quick actions, and pastes all bounce off
        type_str(&mut app, "ignored");
        app.handle_key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::ALT));
        app.handle_paste("pasted");
        assert_eq!(app.input.lines(), [""]);

        // Once the exchange resolves, typing works again
        let delivery = rx.recv().await.unwrap();
        app.handle_delivery(delivery);
        type_str(&mut app, "ok");
        assert_eq!(app.input.lines(), ["ok"]);
    }

    #[tokio::test]
    async fn test_leaving_agent_discards_transcript_and_pending() {
        let (mut app, _rx) = new_app();
        login(&mut app);
        app.handle_key(key(KeyCode::Enter));
        type_str(&mut app, "hello");
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.state.view, AppView::Gallery);
        assert!(app.session.is_none());
        assert!(app.state.selected_agent.is_none());
    }

    #[tokio::test]
    async fn test_late_delivery_after_leaving_is_dropped() {
        let (mut app, mut rx) = new_app();
        login(&mut app);
        app.handle_key(key(KeyCode::Enter));
        type_str(&mut app, "hello");
        app.handle_key(key(KeyCode::Enter));
        let delivery = rx.recv().await.unwrap();
        app.handle_key(key(KeyCode::Esc)); // leave before applying
        app.handle_delivery(delivery); // must not panic, nothing to write into
        assert!(app.session.is_none());
    }

    #[test]
    fn test_dialog_validation_then_success() {
        let (mut app, _rx) = new_app();
        login(&mut app);
        app.handle_key(ctrl('n'));
        assert!(app.request_dialog.is_some());

        // Empty form: first check fails, dialog stays open
        app.handle_key(key(KeyCode::Enter));
        assert!(app.request_dialog.is_some());
        assert_eq!(
            app.notice.as_ref().unwrap().text,
            "Please enter your email address"
        );

        type_str(&mut app, "me@example.com");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "An agent that summarizes contracts");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "Parsing, summarization");
        app.handle_key(key(KeyCode::Tab)); // first checkbox
        app.handle_key(key(KeyCode::Char(' ')));
        app.handle_key(key(KeyCode::Enter));
        assert!(app.request_dialog.is_none());
        assert_eq!(app.notice.as_ref().unwrap().text, request::SUBMIT_NOTICE);
    }

    #[test]
    fn test_dialog_esc_cancels() {
        let (mut app, _rx) = new_app();
        login(&mut app);
        app.handle_key(ctrl('n'));
        type_str(&mut app, "half-finished");
        app.handle_key(key(KeyCode::Esc));
        assert!(app.request_dialog.is_none());
        // Reopening starts clean
        app.handle_key(ctrl('n'));
        assert!(app
            .request_dialog
            .as_ref()
            .unwrap()
            .form
            .requestor_email
            .is_empty());
    }

    #[tokio::test]
    async fn test_settings_tab_cycles_and_clamps() {
        let (mut app, _rx) = new_app();
        login(&mut app);
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(ctrl('t'));
        assert_eq!(app.tab, AgentTab::Settings);

        // Row 3 is max_tokens
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.settings.max_tokens, 2304);
        for _ in 0..20 {
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.settings.max_tokens, 4096);

        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.settings, AgentSettings::default());
    }

    #[tokio::test]
    async fn test_logout_from_agent_clears_everything() {
        let (mut app, _rx) = new_app();
        login(&mut app);
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(ctrl('l'));
        assert_eq!(app.state.view, AppView::Login);
        assert!(app.state.user.is_none());
        assert!(app.session.is_none());
        assert!(app.login.email.is_empty());
    }

    #[test]
    fn test_board_mode_navigation_and_pause() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(&crate::theme::DEFAULT_THEME, LatencyRange::fixed(1), tx, true);
        assert!(app.board.is_some());

        app.handle_key(key(KeyCode::Tab)); // second agent of task-1
        app.handle_key(key(KeyCode::Char('p')));
        let board = app.board.as_ref().unwrap();
        assert_eq!(
            board.tasks[0].agents[1].status,
            folio_core::board::RunStatus::Paused
        );

        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Some(Control::Quit));
    }

    #[test]
    fn test_double_ctrl_c_quits() {
        let (mut app, _rx) = new_app();
        assert_eq!(app.handle_key(ctrl('c')), None);
        assert_eq!(app.handle_key(ctrl('c')), Some(Control::Quit));
    }
}
