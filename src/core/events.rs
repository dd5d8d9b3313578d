// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::catalog::Category;

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Tap the tab right of the active one
    NextTab,

    /// Tap the tab left of the active one
    PreviousTab,

    /// Tap a specific tab
    SelectTab(Category),

    /// Scroll the product list up one step
    ScrollUp,

    /// Scroll the product list down one step
    ScrollDown,

    /// Page up
    PageUp,

    /// Page down
    PageDown,

    /// Animate to the first section
    Top,

    /// Animate to the end of the list
    Bottom,

    /// Left click at (column, row)
    Click { column: u16, row: u16 },

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            // Tabs
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => AppEvent::NextTab,
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => AppEvent::PreviousTab,
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                Category::from_index(index)
                    .map(AppEvent::SelectTab)
                    .unwrap_or(AppEvent::None)
            }

            // Scrolling
            KeyCode::Up | KeyCode::Char('k') => AppEvent::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') => AppEvent::ScrollDown,
            KeyCode::PageUp => AppEvent::PageUp,
            KeyCode::PageDown | KeyCode::Char(' ') => AppEvent::PageDown,
            KeyCode::Home | KeyCode::Char('g') => AppEvent::Top,
            KeyCode::End | KeyCode::Char('G') => AppEvent::Bottom,

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::ScrollUp => AppEvent::ScrollUp,
            MouseEventKind::ScrollDown => AppEvent::ScrollDown,
            MouseEventKind::Down(MouseButton::Left) => AppEvent::Click {
                column: mouse.column,
                row: mouse.row,
            },
            _ => AppEvent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_digit_selects_tab() {
        assert_eq!(EventHandler::handle(key(KeyCode::Char('1'))), AppEvent::SelectTab(Category::Phone));
        assert_eq!(EventHandler::handle(key(KeyCode::Char('3'))), AppEvent::SelectTab(Category::Laptop));
        assert_eq!(EventHandler::handle(key(KeyCode::Char('9'))), AppEvent::None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(EventHandler::handle(key(KeyCode::Char('q'))), AppEvent::Quit);
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(EventHandler::handle(ctrl_c), AppEvent::Quit);
    }

    #[test]
    fn test_release_is_ignored() {
        let mut release = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(EventHandler::handle(Event::Key(release)), AppEvent::None);
    }

    #[test]
    fn test_mouse_click_and_wheel() {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 2,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(EventHandler::handle(Event::Mouse(click)), AppEvent::Click { column: 12, row: 2 });

        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            ..click
        };
        assert_eq!(EventHandler::handle(Event::Mouse(wheel)), AppEvent::ScrollDown);
    }
}
