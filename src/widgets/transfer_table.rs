//! Transfers table widget.
//!
//! Turns raw [`Transfer`] records into display rows and renders them as a
//! selectable ratatui table.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Cell, Row, StatefulWidget, Table, TableState},
};

use crate::domain::{TokenInfo, Transfer};
use crate::theme::{PRIMARY_COLOR, SELECTED_ROW_STYLE, STALE_ROW_STYLE};
use crate::widgets::helpers::{TxLink, format_address, format_amount, format_tx_link};

// ============================================================================
// Display Row
// ============================================================================

/// One transfer, fully formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRow {
    pub sender: String,
    pub recipient: String,
    pub amount: String,
    pub block: String,
    pub tx: TxLink,
}

impl TransferRow {
    #[must_use]
    pub fn new(transfer: &Transfer) -> Self {
        Self {
            sender: format_address(&transfer.sender),
            recipient: format_address(&transfer.recipient),
            amount: format_amount(&transfer.amount),
            block: transfer.block_number.to_string(),
            tx: format_tx_link(&transfer.tx_hash),
        }
    }
}

/// Column titles, with the token symbol in the amount header.
#[must_use]
pub fn column_titles(symbol: &str) -> [String; 5] {
    [
        "Sender".to_string(),
        "Recipient".to_string(),
        format!("Amount ({symbol})"),
        "Block Number".to_string(),
        "Transaction".to_string(),
    ]
}

// ============================================================================
// TransferTable Widget
// ============================================================================

/// Renders transfers as a table with a highlighted selection.
///
/// # Usage
///
/// ```ignore
/// let mut state = TableState::default().with_selected(Some(0));
/// TransferTable::new(&transfers, &token).render(area, buf, &mut state);
/// ```
#[derive(Debug, Clone)]
pub struct TransferTable<'a> {
    transfers: &'a [Transfer],
    token: &'a TokenInfo,
    stale: bool,
}

impl<'a> TransferTable<'a> {
    const WIDTHS: [Constraint; 5] = [
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Min(14),
        Constraint::Length(13),
        Constraint::Length(16),
    ];

    #[must_use]
    pub const fn new(transfers: &'a [Transfer], token: &'a TokenInfo) -> Self {
        Self {
            transfers,
            token,
            stale: false,
        }
    }

    /// Dim the rows; used while a newer result is loading.
    #[must_use]
    pub const fn stale(mut self, stale: bool) -> Self {
        self.stale = stale;
        self
    }

    fn build(&self) -> Table<'static> {
        let header = Row::new(column_titles(&self.token.symbol)).style(
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        );

        let rows = self.transfers.iter().map(|transfer| {
            let row = TransferRow::new(transfer);
            Row::new(vec![
                Cell::from(row.sender),
                Cell::from(row.recipient),
                Cell::from(Line::from(row.amount).alignment(Alignment::Right)),
                Cell::from(row.block),
                Cell::from(format!("{} ↗", row.tx.label)),
            ])
        });

        let row_style = if self.stale {
            STALE_ROW_STYLE
        } else {
            Style::default()
        };

        Table::new(rows, Self::WIDTHS)
            .header(header)
            .style(row_style)
            .column_spacing(2)
            .row_highlight_style(SELECTED_ROW_STYLE)
            .highlight_symbol("▶ ")
    }
}

impl StatefulWidget for TransferTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        StatefulWidget::render(self.build(), area, buf, state);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{TransferMother, buffer_to_string};

    #[test]
    fn test_transfer_row_formats_scenario() {
        let row = TransferRow::new(&TransferMother::scenario());

        assert_eq!(row.sender, "0xAAAA...1111");
        assert_eq!(row.recipient, "0xBBBB...2222");
        assert_eq!(row.amount, "3");
        assert_eq!(row.block, "100");
        assert_eq!(row.tx.label, "0xCCCC...3333");
        assert_eq!(
            row.tx.url,
            "https://holesky.etherscan.io/tx/0xCCCC000000000000000000000000000000000000000000000000000000003333"
        );
    }

    #[test]
    fn test_transfer_row_amount_is_whole_tokens() {
        let cases = [
            ("1234500", "0"),
            ("1999999999999999999", "1"),
            ("1234567000000000000000000", "1,234,567"),
        ];
        for (amount, expected) in cases {
            let transfer = TransferMother::with_amount(2, amount);
            assert_eq!(TransferRow::new(&transfer).amount, expected, "{amount}");
        }
    }

    #[test]
    fn test_column_titles_include_symbol() {
        let titles = column_titles("DEMO");
        assert_eq!(titles[2], "Amount (DEMO)");
        assert_eq!(titles[4], "Transaction");
    }

    #[test]
    fn test_table_renders_rows_and_header() {
        let transfers = vec![TransferMother::scenario(), TransferMother::with_id(2)];
        let token = TokenInfo::default();
        let area = Rect::new(0, 0, 100, 4);
        let mut buf = Buffer::empty(area);
        let mut state = TableState::default().with_selected(Some(1));

        TransferTable::new(&transfers, &token).render(area, &mut buf, &mut state);

        let content = buffer_to_string(&buf);
        let lines: Vec<&str> = content.lines().collect();
        assert!(lines[0].contains("Amount (LOB)"), "{content}");
        assert!(lines[1].contains("0xAAAA...1111"), "{content}");
        assert!(lines[1].contains("0xCCCC...3333"), "{content}");
        assert!(lines[2].starts_with("▶"), "selected row marker: {content}");
    }
}
