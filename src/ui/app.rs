//! Main TUI application state and logic

use crate::layout::derive_layout;
use crate::structures::{StructureKind, StructureStore};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use tracing::{debug, info};

/// Width of the structure selector sidebar
const SIDEBAR_WIDTH: u16 = 24;

/// The main application state
pub struct App {
    /// Sequences, active kind and pending input
    pub store: StructureStore,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app around the given store
    pub fn new(store: StructureStore) -> Self {
        App {
            store,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!(kind = %self.store.active(), "visualizer started");
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Every action completes before the next frame is drawn
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        info!("visualizer stopped");
        Ok(())
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Header, panes, status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        // Selector sidebar | content
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(main_chunks[1]);

        // Content: description (top) | visualization | controls (bottom)
        let content_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(columns[1]);

        let kind = self.store.active();
        let layout = derive_layout(kind, self.store.active_sequence());

        super::panes::render_header(frame, main_chunks[0]);
        super::panes::render_selector_pane(frame, columns[0], kind);
        super::panes::render_description(frame, content_rows[0], kind);
        super::panes::render_visualization_pane(frame, content_rows[1], &layout);
        super::panes::render_controls_pane(frame, content_rows[2], kind, self.store.input());
        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.store.active_sequence().len(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.select_kind(self.store.active().next());
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.select_kind(self.store.active().prev());
            }
            // F1..F5 jump straight to a structure
            KeyCode::F(n @ 1..=5) => {
                self.select_kind(StructureKind::ALL[usize::from(n) - 1]);
            }
            KeyCode::Enter => {
                self.add();
            }
            KeyCode::Delete => {
                self.remove();
            }
            KeyCode::Backspace => {
                self.store.pop_input();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.store.push_input(c);
            }
            _ => {}
        }
    }

    fn select_kind(&mut self, kind: StructureKind) {
        self.store.select_kind(kind);
        self.status_message = format!("Viewing {}", kind);
    }

    /// Commit the staged value. Bad input is dropped without a message.
    fn add(&mut self) {
        let kind = self.store.active();
        match self.store.append() {
            Ok(value) => {
                self.status_message = match kind {
                    StructureKind::Stack => format!("Pushed {}", value),
                    StructureKind::Queue => format!("Enqueued {}", value),
                    _ => format!("Added {}", value),
                };
            }
            Err(err) => {
                debug!(error = %err, "add ignored");
            }
        }
    }

    /// Remove from the active structure. Empty structures are left alone.
    fn remove(&mut self) {
        let kind = self.store.active();
        if let Some(value) = self.store.remove() {
            self.status_message = match kind {
                StructureKind::Stack => format!("Popped {}", value),
                StructureKind::Queue => format!("Dequeued {}", value),
                _ => format!("Removed {}", value),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn screen_text(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for row in buffer.content.chunks(usize::from(width)) {
            for cell in row {
                text.push_str(cell.symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_typing_and_enter_appends() {
        let mut app = App::new(StructureStore::new());
        type_text(&mut app, "42");
        assert_eq!(app.store.input(), "42");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.active_sequence(), &[5, 3, 8, 1, 9, 42]);
        assert_eq!(app.store.input(), "");
        assert_eq!(app.status_message, "Added 42");
    }

    #[test]
    fn test_bad_input_is_silent() {
        let mut app = App::new(StructureStore::new());
        type_text(&mut app, "abc");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.active_sequence(), &[5, 3, 8, 1, 9]);
        assert_eq!(app.store.input(), "abc");
        assert_eq!(app.status_message, "Ready!");
    }

    #[test]
    fn test_backspace_edits_input() {
        let mut app = App::new(StructureStore::new());
        type_text(&mut app, "-12");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.store.input(), "-1");
    }

    #[test]
    fn test_modified_chars_are_not_typed() {
        let mut app = App::new(StructureStore::new());
        app.handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        app.handle_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(app.store.input(), "");
        app.handle_key_event(KeyEvent::new(KeyCode::Char('7'), KeyModifiers::SHIFT));
        assert_eq!(app.store.input(), "7");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_tab_and_function_keys_select() {
        let mut app = App::new(StructureStore::new());
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.store.active(), StructureKind::Stack);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.store.active(), StructureKind::BinaryTree);
        press(&mut app, KeyCode::F(3));
        assert_eq!(app.store.active(), StructureKind::Queue);
        press(&mut app, KeyCode::F(9));
        assert_eq!(app.store.active(), StructureKind::Queue);
    }

    #[test]
    fn test_delete_dequeues_and_pops() {
        let mut app = App::new(StructureStore::with_active(StructureKind::Queue));
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.store.active_sequence(), &[2, 3, 4]);
        assert_eq!(app.status_message, "Dequeued 1");

        press(&mut app, KeyCode::F(2));
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.store.active_sequence(), &[10, 20]);
        assert_eq!(app.status_message, "Popped 30");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(StructureStore::new());
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = App::new(StructureStore::new());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_shows_stack_with_top_and_labels() {
        let app = App::new(StructureStore::with_active(StructureKind::Stack));
        let text = screen_text(&app, 120, 30);
        assert!(text.contains("Data Structures Visualizer"));
        assert!(text.contains("TOP"));
        assert!(text.contains("Add (Push)"));
        assert!(text.contains("Remove (Pop)"));
        assert!(text.contains("LIFO"));
        let top = text.find("30").unwrap();
        let bottom = text.find("10").unwrap();
        assert!(top < bottom);
    }

    #[test]
    fn test_render_queue_markers_and_empty_structure() {
        let mut app = App::new(StructureStore::with_active(StructureKind::Queue));
        for _ in 0..4 {
            press(&mut app, KeyCode::Delete);
        }
        press(&mut app, KeyCode::Delete);
        assert!(app.store.active_sequence().is_empty());
        let text = screen_text(&app, 120, 30);
        assert!(text.contains("FRONT →"));
        assert!(text.contains("← REAR"));
    }

    #[test]
    fn test_render_wraps_long_rows_without_losing_values() {
        for kind in [
            StructureKind::Array,
            StructureKind::Queue,
            StructureKind::LinkedList,
        ] {
            let mut store = StructureStore::with_active(kind);
            for value in 1000..=1020 {
                store.append_value(value);
            }
            let app = App::new(store);
            let text = screen_text(&app, 120, 30);

            let missing: Vec<i64> = (1000..=1020)
                .filter(|v| !text.contains(&v.to_string()))
                .collect();
            assert!(missing.is_empty(), "{kind} missing on screen: {missing:?}");
            match kind {
                StructureKind::Queue => {
                    assert!(text.contains("FRONT →"));
                    assert!(text.contains("← REAR"));
                }
                StructureKind::LinkedList => assert!(text.contains("null")),
                _ => assert!(text.contains(" 25 ")),
            }
        }
    }

    #[test]
    fn test_render_small_terminal_does_not_panic() {
        let app = App::new(StructureStore::with_active(StructureKind::BinaryTree));
        screen_text(&app, 10, 5);
    }
}
