//! A single row of the transaction history.
//!
//! [`TransactionRow::build`] is a pure function of one transaction and the
//! ambient [`RowContext`]: it decides the icon, date, counterparty display,
//! and which controls the row offers. [`TransactionRowWidget`] draws it.
//!
//! ```text
//! ▶ [>] 11/14/2023 | 22:13:20  NEO                       5
//!     Alice                                 [a] Add  [v] View
//!     ↳ AK2nJJpJr6o664CWJKi1QRXjqeic2zRp8y
//! ```
//!
//! Rows never act on their own. The parent asks a row for its
//! [`ViewRequest`], [`add_contact_request`](TransactionRow::add_contact_request)
//! or [`copy_text`](TransactionRow::copy_text) and performs the side effect.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::constants::{SELECTED_SYMBOL, UNSELECTED_SYMBOL};
use crate::domain::{ContactBook, Explorer, Network, Resolved, Transaction, TxKind};
use crate::theme::{BUTTON_STYLE, DISABLED_BUTTON_STYLE, MUTED_COLOR, SELECTED_STYLE};
use crate::widgets::common::AddressDisplay;
use crate::widgets::helpers::{fit_left, fit_right, kind_color, kind_icon};

/// Width of the date column; `MM/DD/YYYY | HH:mm:ss`.
const DATE_WIDTH: usize = 21;
const LABEL_WIDTH: usize = 12;
const AMOUNT_WIDTH: usize = 18;
const ADD_BUTTON: &str = "[a] Add";
const VIEW_BUTTON: &str = "[v] View";

// ============================================================================
// Row Model
// ============================================================================

/// Ambient inputs shared by every row of the list.
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    pub network: Network,
    pub explorer: Explorer,
    pub contacts: &'a ContactBook,
    /// The wallet address whose history is shown.
    pub address: &'a str,
}

/// The row's counterparty column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counterparty {
    pub resolved: Resolved,
    /// Whether the copy control is offered.
    pub copyable: bool,
}

/// The row's trailing action slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    /// "Add contact" for `address`; disabled when it is already a contact.
    AddContact { address: String, enabled: bool },
    /// Empty slot keeping the columns aligned.
    Placeholder,
}

/// Everything the explorer needs to open this row's transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRequest {
    pub network: Network,
    pub explorer: Explorer,
    pub txid: String,
}

/// Display model for one history row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub txid: String,
    pub icon: &'static str,
    pub color: Color,
    /// Formatted time; `None` hides the date column.
    pub date: Option<String>,
    pub label: String,
    pub amount: String,
    pub counterparty: Counterparty,
    pub action: RowAction,
    network: Network,
    explorer: Explorer,
}

impl TransactionRow {
    /// Builds the row for a transaction, dating it in the local timezone.
    #[must_use]
    pub fn build(txn: &Transaction, ctx: &RowContext<'_>) -> Self {
        Self::build_with_date(txn, ctx, txn.formatted_time())
    }

    pub(crate) fn build_with_date(
        txn: &Transaction,
        ctx: &RowContext<'_>,
        date: Option<String>,
    ) -> Self {
        let (counterparty, action) = match &txn.kind {
            TxKind::Claim { to } => {
                let resolved = ctx.contacts.resolve(to);
                let copyable = !resolved.is_contact();
                (Counterparty { resolved, copyable }, RowAction::Placeholder)
            }
            TxKind::Send {
                to,
                network_fee: true,
            } => (
                Counterparty {
                    resolved: Resolved::Raw(to.clone()),
                    copyable: false,
                },
                RowAction::Placeholder,
            ),
            TxKind::Send { to, .. } => {
                let resolved = ctx.contacts.resolve(to);
                let exists = resolved.is_contact();
                (
                    Counterparty {
                        resolved,
                        copyable: !exists,
                    },
                    RowAction::AddContact {
                        address: to.clone(),
                        enabled: !exists,
                    },
                )
            }
            TxKind::Receive { from, .. } => {
                let resolved = ctx.contacts.resolve(from);
                let exists = resolved.is_contact();
                let is_mint = txn.is_mint();
                let action = if is_mint || txn.is_gas_claim(ctx.address) {
                    RowAction::Placeholder
                } else {
                    RowAction::AddContact {
                        address: from.clone(),
                        enabled: !exists,
                    }
                };
                (
                    Counterparty {
                        resolved,
                        copyable: !exists && !is_mint,
                    },
                    action,
                )
            }
        };

        Self {
            txid: txn.txid.clone(),
            icon: kind_icon(&txn.kind),
            color: kind_color(&txn.kind),
            date,
            label: txn.label.clone(),
            amount: txn.amount.to_string(),
            counterparty,
            action,
            network: ctx.network,
            explorer: ctx.explorer,
        }
    }

    /// The explorer request issued by the row's "View" control.
    #[must_use]
    pub fn view_request(&self) -> ViewRequest {
        ViewRequest {
            network: self.network,
            explorer: self.explorer,
            txid: self.txid.clone(),
        }
    }

    /// The address the "Add" control would save, if the control is enabled.
    #[must_use]
    pub fn add_contact_request(&self) -> Option<&str> {
        match &self.action {
            RowAction::AddContact {
                address,
                enabled: true,
            } => Some(address),
            _ => None,
        }
    }

    /// Returns `true` when the row shows an "Add" control, enabled or not.
    #[must_use]
    pub const fn has_add_control(&self) -> bool {
        matches!(self.action, RowAction::AddContact { .. })
    }

    /// The text the copy control puts on the clipboard, if offered.
    #[must_use]
    pub fn copy_text(&self) -> Option<&str> {
        self.counterparty
            .copyable
            .then(|| self.counterparty.resolved.address())
    }
}

// ============================================================================
// TransactionRowWidget
// ============================================================================

/// Renders a [`TransactionRow`] as three terminal lines.
#[derive(Debug, Clone)]
pub struct TransactionRowWidget<'a> {
    row: &'a TransactionRow,
    selected: bool,
    style: Style,
}

impl<'a> TransactionRowWidget<'a> {
    #[must_use]
    pub fn new(row: &'a TransactionRow) -> Self {
        Self {
            row,
            selected: false,
            style: Style::default(),
        }
    }

    /// Marks the row as the current selection.
    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Base style applied under the row's own styling.
    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The effective style for the whole row.
    #[must_use]
    pub fn row_style(&self) -> Style {
        if self.selected {
            self.style.patch(SELECTED_STYLE)
        } else {
            self.style
        }
    }

    /// Builds the row's lines.
    #[must_use]
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        let row = self.row;
        let indicator = if self.selected {
            SELECTED_SYMBOL
        } else {
            UNSELECTED_SYMBOL
        };

        let summary = Line::from(vec![
            Span::raw(format!("{indicator} ")),
            Span::styled(row.icon, Style::default().fg(row.color)),
            Span::raw(" "),
            Span::styled(
                fit_left(row.date.as_deref().unwrap_or_default(), DATE_WIDTH),
                Style::default().fg(MUTED_COLOR),
            ),
            Span::raw("  "),
            Span::raw(fit_left(&row.label, LABEL_WIDTH)),
            Span::styled(
                fit_right(&row.amount, AMOUNT_WIDTH),
                Style::default().fg(row.color),
            ),
        ]);

        let mut detail = vec![Span::raw("    ")];
        detail.extend(
            AddressDisplay::new(&row.counterparty.resolved)
                .copyable(row.counterparty.copyable)
                .to_spans(),
        );
        detail.push(Span::raw("  "));
        detail.push(match &row.action {
            RowAction::AddContact { enabled: true, .. } => Span::styled(ADD_BUTTON, BUTTON_STYLE),
            RowAction::AddContact { enabled: false, .. } => {
                Span::styled(ADD_BUTTON, DISABLED_BUTTON_STYLE)
            }
            RowAction::Placeholder => Span::raw(" ".repeat(ADD_BUTTON.len())),
        });
        detail.push(Span::raw("  "));
        detail.push(Span::styled(VIEW_BUTTON, BUTTON_STYLE));

        // Selected contact rows reveal the raw address underneath the label.
        let tooltip = match &row.counterparty.resolved {
            Resolved::Contact { address, .. } if self.selected => Line::from(vec![
                Span::raw("    "),
                Span::styled(format!("↳ {address}"), Style::default().fg(MUTED_COLOR)),
            ]),
            _ => Line::from(""),
        };

        vec![summary, Line::from(detail), tooltip]
    }
}

impl Widget for TransactionRowWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.row_style();
        Paragraph::new(self.to_lines())
            .style(style)
            .render(area, buf);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Amount;
    use crate::domain::transaction::MINT_SENTINEL;
    use crate::test_utils::{TransactionMother, buffer_to_string};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    const WALLET: &str = "AWALLETxxxxxxxxxxxxxxxxxxxxxxxxxxx";

    fn contacts() -> ContactBook {
        [("0xABC", "Alice")].into_iter().collect()
    }

    fn ctx(contacts: &ContactBook) -> RowContext<'_> {
        RowContext {
            network: Network::TestNet,
            explorer: Explorer::NeoScan,
            contacts,
            address: WALLET,
        }
    }

    fn row(txn: &Transaction, contacts: &ContactBook) -> TransactionRow {
        TransactionRow::build_with_date(txn, &ctx(contacts), None)
    }

    #[rstest]
    #[case::unknown_address("0xDEF")]
    #[case::contact("0xABC")]
    fn test_claim_never_offers_add(#[case] to: &str) {
        let book = contacts();
        let row = row(&TransactionMother::claim("c1", to), &book);

        assert_eq!(row.action, RowAction::Placeholder);
        assert!(!row.has_add_control());
        assert_eq!(row.icon, crate::constants::CLAIM_ICON);
    }

    #[test]
    fn test_claim_copy_only_without_contact() {
        let book = contacts();
        let unknown = row(&TransactionMother::claim("c1", "0xDEF"), &book);
        assert_eq!(unknown.copy_text(), Some("0xDEF"));

        let known = row(&TransactionMother::claim("c2", "0xABC"), &book);
        assert_eq!(known.copy_text(), None);
        assert_eq!(known.counterparty.resolved.display(), "Alice");
    }

    #[rstest]
    #[case::unknown_address("0xDEF")]
    #[case::contact("0xABC")]
    fn test_network_fee_shows_raw_address_without_controls(#[case] to: &str) {
        let book = contacts();
        let row = row(&TransactionMother::network_fee("f1", to), &book);

        assert_eq!(row.counterparty.resolved, Resolved::Raw(to.to_string()));
        assert_eq!(row.copy_text(), None);
        assert!(!row.has_add_control());
    }

    #[test]
    fn test_send_to_unknown_address_offers_add_and_copy() {
        let book = contacts();
        let row = row(&TransactionMother::send("s1", "0xDEF"), &book);

        assert_eq!(row.counterparty.resolved.display(), "0xDEF");
        assert_eq!(row.copy_text(), Some("0xDEF"));
        assert_eq!(row.add_contact_request(), Some("0xDEF"));
    }

    #[test]
    fn test_send_to_contact_disables_add() {
        let book = contacts();
        let row = row(&TransactionMother::send("s1", "0xABC"), &book);

        assert_eq!(row.counterparty.resolved.display(), "Alice");
        assert_eq!(row.copy_text(), None);
        assert!(row.has_add_control());
        assert_eq!(row.add_contact_request(), None);
        assert_eq!(
            row.action,
            RowAction::AddContact {
                address: "0xABC".to_string(),
                enabled: false
            }
        );
    }

    #[test]
    fn test_receive_from_mint_has_no_controls() {
        let book = contacts();
        let row = row(&TransactionMother::receive("r1", MINT_SENTINEL), &book);

        assert_eq!(row.counterparty.resolved.display(), MINT_SENTINEL);
        assert_eq!(row.copy_text(), None);
        assert!(!row.has_add_control());
    }

    #[rstest]
    #[case::zero("0", false)]
    #[case::zero_decimal("0.0", false)]
    #[case::blank("", false)]
    #[case::funded("2", true)]
    fn test_receive_from_self_hides_add_when_amount_is_falsy(
        #[case] amount: &str,
        #[case] expect_add: bool,
    ) {
        let book = contacts();
        let txn = Transaction {
            amount: Amount::new(amount),
            ..TransactionMother::receive("g1", WALLET)
        };
        let row = row(&txn, &book);

        assert_eq!(row.has_add_control(), expect_add, "amount {amount:?}");
        assert_eq!(row.copy_text(), Some(WALLET));
    }

    #[test]
    fn test_receive_from_contact() {
        let book = contacts();
        let row = row(&TransactionMother::receive("r1", "0xABC"), &book);

        assert!(row.counterparty.resolved.is_contact());
        assert_eq!(row.copy_text(), None);
        assert_eq!(row.add_contact_request(), None);
        assert!(row.has_add_control());
    }

    #[test]
    fn test_receive_from_stranger_offers_add_for_sender() {
        let book = ContactBook::new();
        let row = row(&TransactionMother::receive("r1", "0xDEF"), &book);

        assert_eq!(row.add_contact_request(), Some("0xDEF"));
        assert_eq!(row.copy_text(), Some("0xDEF"));
    }

    #[test]
    fn test_view_request_carries_network_and_explorer() {
        let book = contacts();
        let row = row(&TransactionMother::send("0xTX", "0xDEF"), &book);

        assert_eq!(
            row.view_request(),
            ViewRequest {
                network: Network::TestNet,
                explorer: Explorer::NeoScan,
                txid: "0xTX".to_string(),
            }
        );
    }

    #[test]
    fn test_date_follows_time() {
        let book = contacts();
        let undated = TransactionRow::build(
            &Transaction {
                time: None,
                ..TransactionMother::send("s1", "0xDEF")
            },
            &ctx(&book),
        );
        assert_eq!(undated.date, None);

        let dated = TransactionRow::build(
            &Transaction {
                time: Some(1_700_000_000),
                ..TransactionMother::send("s2", "0xDEF")
            },
            &ctx(&book),
        );
        let date = dated.date.unwrap();
        assert_eq!(date.len(), DATE_WIDTH);
        assert!(date.contains(" | "));
    }

    #[test]
    fn test_selected_contact_row_reveals_address() {
        let book = contacts();
        let row = row(&TransactionMother::send("s1", "0xABC"), &book);

        let hidden = TransactionRowWidget::new(&row).to_lines();
        assert_eq!(hidden[2].width(), 0);

        let shown = TransactionRowWidget::new(&row).selected(true).to_lines();
        let tooltip: String = shown[2].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(tooltip.contains("0xABC"));
    }

    #[test]
    fn test_style_override_is_kept_under_selection() {
        let book = contacts();
        let row = row(&TransactionMother::send("s1", "0xDEF"), &book);
        let base = Style::default().fg(Color::White);

        let widget = TransactionRowWidget::new(&row).style(base).selected(true);
        let style = widget.row_style();
        assert_eq!(style.fg, Some(Color::White));
        assert_eq!(style.bg, SELECTED_STYLE.bg);
    }

    #[test]
    fn test_row_rendering() {
        let book = contacts();
        let rows = [
            row(&TransactionMother::send("s1", "0xDEF"), &book),
            row(&TransactionMother::receive("r1", "0xABC"), &book),
            row(&TransactionMother::network_fee("f1", "0xFEE"), &book),
        ];

        let mut terminal = Terminal::new(TestBackend::new(80, 9)).unwrap();
        terminal
            .draw(|frame| {
                for (i, row) in rows.iter().enumerate() {
                    let area = Rect::new(0, i as u16 * 3, 80, 3);
                    frame.render_widget(TransactionRowWidget::new(row).selected(i == 1), area);
                }
            })
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("[>]"));
        assert!(content.contains("[<]"));
        assert!(content.contains("Alice"));
        assert!(content.contains("↳ 0xABC"));
        assert!(content.contains("0xFEE"));
        assert_eq!(content.matches("[a] Add").count(), 2);
        assert_eq!(content.matches("[v] View").count(), 3);
    }

    #[test]
    fn test_row_text_snapshot() {
        let book = contacts();
        let row = TransactionRow::build_with_date(
            &TransactionMother::send("s1", "0xDEF"),
            &ctx(&book),
            Some("11/14/2023 | 22:13:20".to_string()),
        );

        let text = TransactionRowWidget::new(&row)
            .to_lines()
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
                    .trim()
                    .to_string()
            })
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        insta::assert_snapshot!(text, @r"
        [>] 11/14/2023 | 22:13:20  NEO                          5
        0xDEF                              ⧉  [a] Add  [v] View
        ");
    }
}
