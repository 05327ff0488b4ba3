//! Transaction history panel.

use ratatui::{Frame, layout::Rect, style::Style};

use crate::state::App;
use crate::state::store::{HISTORY_REQUEST, RequestStatus};
use crate::theme::BACKDROP_STYLE;
use crate::ui::helpers::create_border_block;
use crate::widgets::TransactionListWidget;

/// Text shown in place of rows, following the history request status.
fn empty_message(app: &App) -> String {
    match app.store.state().requests.status(HISTORY_REQUEST) {
        RequestStatus::Loading => "Loading history...".to_string(),
        RequestStatus::Failed(err) => format!("Could not load history: {err}"),
        RequestStatus::Idle if app.config.history_file.is_none() => {
            "No history file configured".to_string()
        }
        RequestStatus::Idle | RequestStatus::Loaded => "No transactions available".to_string(),
    }
}

/// Renders the history list and records how many rows fit.
pub fn render_history(app: &mut App, frame: &mut Frame, area: Rect) {
    let title = format!("History ({})", app.rows.len());
    let modal_open = app.store.state().modal.is_open();
    let block = create_border_block(&title, !modal_open);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.visible_rows = TransactionListWidget::visible_rows(inner.height).max(1);
    app.list.clamp(app.rows.len(), app.visible_rows);

    let message = empty_message(app);
    let widget = TransactionListWidget::new(&app.rows)
        .focused(true)
        .empty_message(&message)
        .row_style(if modal_open {
            BACKDROP_STYLE
        } else {
            Style::new()
        });
    frame.render_stateful_widget(widget, inner, &mut app.list);
}
