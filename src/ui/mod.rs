// UI module
// Event loop, layout pass and rendering for the catalog screen

pub mod app_view;
pub mod product_list;
pub mod styles;
pub mod tab_strip;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use std::time::Instant;
use tracing::info;

use crate::core::{App, AppEvent, EventHandler};

pub use app_view::{frame_rect, render_app, ScreenLayout};
pub use product_list::render_product_list;
pub use styles::Styles;
pub use tab_strip::render_tab_strip;

/// Run the main application event loop
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    app.on_appear();
    let frame_interval = app.config.animation.frame_interval();
    info!(?frame_interval, "event loop started");

    loop {
        // Deferred work from the previous turn, then animation frames
        let now = Instant::now();
        app.tick(now);

        // Layout pass feeds measured frames back into the app before rendering
        terminal.draw(|f| {
            let layout = ScreenLayout::new(f.area());
            app.layout(frame_rect(layout.content), frame_rect(layout.tab_strip), now);
            render_app(f, app, &layout);
        })?;

        // Handle events; the poll timeout paces animation frames
        if event::poll(frame_interval)? {
            let event = event::read()?;
            let app_event = EventHandler::handle(event);

            handle_event(app, app_event, Instant::now());
        }

        // Check if we should quit
        if app.should_quit {
            info!("event loop finished");
            return Ok(());
        }
    }
}

/// Handle an application event
pub fn handle_event(app: &mut App, event: AppEvent, now: Instant) {
    match event {
        AppEvent::Quit => app.quit(),
        AppEvent::NextTab => app.select_next(now),
        AppEvent::PreviousTab => app.select_previous(now),
        AppEvent::SelectTab(category) => app.tap_tab(category, now),
        AppEvent::ScrollUp => app.scroll_up(now),
        AppEvent::ScrollDown => app.scroll_down(now),
        AppEvent::PageUp => app.page_up(now),
        AppEvent::PageDown => app.page_down(now),
        AppEvent::Top => app.scroll_to_top(now),
        AppEvent::Bottom => app.scroll_to_bottom(now),
        AppEvent::Click { column, row } => app.click(column, row, now),
        AppEvent::None => {}
    }
}
