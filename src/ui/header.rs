//! Header rendering for the LazyNeo TUI.
//!
//! Renders the logo, the wallet address, and the network/explorer indicator.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::state::store::HISTORY_REQUEST;
use crate::theme::{MUTED_COLOR, SUCCESS_COLOR, WARNING_COLOR};
use crate::widgets::helpers::truncate_address;

use super::helpers::create_border_block;

const LOGO_WIDTH: u16 = 10;
const INDICATOR_WIDTH: u16 = 22;

/// Render the application header.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(create_border_block("", false), area);

    if area.height <= 2 {
        return;
    }

    let logo_area = Rect::new(
        area.x + 2,
        area.y + 1,
        LOGO_WIDTH.min(area.width.saturating_sub(2)),
        1,
    );
    frame.render_widget(Paragraph::new(create_logo()), logo_area);

    let indicator_width = if area.width > 60 { INDICATOR_WIDTH } else { 0 };
    let wallet_x = logo_area.right() + 2;
    let wallet_width = area
        .right()
        .saturating_sub(wallet_x + indicator_width + 2);
    if wallet_width > 0 {
        let wallet_area = Rect::new(wallet_x, area.y + 1, wallet_width, 1);
        frame.render_widget(Paragraph::new(wallet_line(app, wallet_width)), wallet_area);
    }

    if indicator_width > 0 {
        render_network_indicator(frame, area, app);
    }
}

fn create_logo() -> Line<'static> {
    Line::from(vec![
        "[".into(),
        "lazy".green().bold(),
        "neo".cyan().bold(),
        "]".into(),
    ])
}

fn wallet_line(app: &App, width: u16) -> Line<'static> {
    let mut spans = Vec::new();

    if app.config.address.is_empty() {
        spans.push(Span::styled(
            "no wallet address",
            Style::default().fg(MUTED_COLOR),
        ));
    } else {
        let max_len = usize::from(width).saturating_sub(14);
        spans.push(Span::styled(
            truncate_address(&app.config.address, max_len),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }

    if app
        .store
        .state()
        .requests
        .status(HISTORY_REQUEST)
        .is_loading()
    {
        spans.push(Span::styled(
            "  loading...",
            Style::default().fg(WARNING_COLOR),
        ));
    }

    Line::from(spans)
}

fn render_network_indicator(frame: &mut Frame, area: Rect, app: &App) {
    let text = format!("{} | {}", app.config.network, app.config.explorer);
    let label = Paragraph::new(text)
        .style(
            Style::default()
                .fg(SUCCESS_COLOR)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Right);

    let indicator_area = Rect::new(
        area.right().saturating_sub(INDICATOR_WIDTH + 2),
        area.y + 1,
        INDICATOR_WIDTH,
        1,
    );
    frame.render_widget(label, indicator_area);
}

// ============================================================================
// Tests
// ============================================================================
