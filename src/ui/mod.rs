//! UI rendering for the LazyNeo TUI.
//!
//! # Module Structure
//!
//! - `panels` - The transaction history panel
//! - `popups` - Modal dialogs (add contact, quit confirmation)
//! - `components` - Reusable UI components (toast notifications)
//! - `layout` - Layout calculations
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::{Frame, layout::Rect};

use crate::state::App;
use crate::state::store::Modal;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Renders the whole screen.
///
/// Draw order is header, history, footer, then the open modal, then the
/// newest notification on top of everything. Rendering updates the list's
/// page size, so the app is borrowed mutably.
pub fn render(app: &mut App, frame: &mut Frame) {
    let size = frame.area();
    let areas = layout::calculate_app_layout(size);

    header::render(frame, areas.header, app);
    panels::render_history(app, frame, areas.main);
    footer::render(frame, areas.footer, app);

    render_modal(app, frame, size);

    if let Some(notification) = app.store.state().notifications.latest() {
        components::render_toast(frame, size, notification);
    }
}

fn render_modal(app: &App, frame: &mut Frame, area: Rect) {
    match app.store.state().modal.current() {
        Some(Modal::AddContact(form)) => popups::render_add_contact(frame, area, form),
        Some(Modal::ConfirmQuit) => popups::render_confirm_quit(frame, area),
        None => {}
    }
}

// ============================================================================
// Tests
// ============================================================================
