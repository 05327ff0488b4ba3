//! Add-contact popup: the address being saved and a name field.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::help_line;
use crate::state::store::AddContactForm;
use crate::theme::{FOCUSED_BORDER_STYLE, MUTED_COLOR, PRIMARY_COLOR};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;
use crate::widgets::helpers::truncate_address;

const POPUP_WIDTH: u16 = 60;
const POPUP_HEIGHT: u16 = 10;
const CURSOR: &str = "_";

/// Renders the add-contact form centered in `area`.
pub fn render(frame: &mut Frame, area: Rect, form: &AddContactForm) {
    let popup_area = centered_popup_area(area, POPUP_WIDTH, POPUP_HEIGHT);
    if popup_area.height < POPUP_HEIGHT || popup_area.width < 20 {
        return;
    }

    let popup_block = create_popup_block("Add Contact");
    let inner = popup_block.inner(popup_area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block, popup_area);

    let content = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);

    let address_line = Line::from(vec![
        Span::styled("Address: ", Style::default().fg(MUTED_COLOR)),
        Span::styled(
            truncate_address(&form.address, usize::from(content.width).saturating_sub(9)),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(address_line),
        Rect::new(content.x, content.y + 1, content.width, 1),
    );

    let input_block = Block::default()
        .borders(Borders::ALL)
        .title(" Name ")
        .border_style(FOCUSED_BORDER_STYLE);
    let input_area = Rect::new(content.x, content.y + 3, content.width, 3);
    let input_inner = input_block.inner(input_area);
    frame.render_widget(input_block, input_area);
    frame.render_widget(Paragraph::new(input_line(form)), input_inner);

    let help_area = Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, 1);
    frame.render_widget(
        Paragraph::new(help_line(&[("Enter", "Save"), ("Esc", "Cancel")]))
            .alignment(Alignment::Center),
        help_area,
    );
}

fn input_line(form: &AddContactForm) -> Line<'static> {
    Line::from(vec![
        Span::raw(form.label.clone()),
        Span::styled(
            CURSOR,
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(form: &AddContactForm, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), form))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_add_contact_popup_shows_form() {
        let mut form = AddContactForm::new("AK2nJJpJr6o664CWJKi1QRXjqeic2zRp8y");
        form.label = "Bob".to_string();

        let text = draw(&form, 100, 30);

        assert!(text.contains("Add Contact"));
        assert!(text.contains("Address: AK2nJJpJr6o664CWJKi1QRXjqeic2zRp8y"));
        assert!(text.contains("Bob_"));
        assert!(text.contains("Enter:Save  Esc:Cancel"));
    }

    #[test]
    fn test_add_contact_popup_too_small() {
        let form = AddContactForm::new("AX");
        assert!(!draw(&form, 40, 10).contains("Add Contact"));
    }
}
