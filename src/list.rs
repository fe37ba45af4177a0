//! `list` subcommand: one fetch, printed as a plain table.

use color_eyre::Result;
use std::process::ExitCode;

use crate::client::TransferClient;
use crate::constants::{DEBOUNCE_DELAY, DEFAULT_TOKEN_SYMBOL};
use crate::domain::{TransferFilter, TransferPage};
use crate::state::{QueryController, StartupOptions};
use crate::ui::transfers::EMPTY_TEXT;
use crate::widgets::{TransferRow, column_titles};

/// Fetch once with the startup filters and print the result.
///
/// A failed fetch prints `Error: {message}` to stderr and exits with 1.
///
/// # Errors
/// Returns an error if the client cannot be built or the API base is invalid.
pub async fn run(options: StartupOptions) -> Result<ExitCode> {
    let client = TransferClient::new(options.http)?;

    let mut query = QueryController::new(options.api, DEBOUNCE_DELAY);
    query.preset(TransferFilter::new(
        options.sender.unwrap_or_default(),
        options.recipient.unwrap_or_default(),
    ));
    let filter = query.request_now();
    let url = query.transfers_url(&filter)?;

    match client.get_transfers(url).await {
        Ok(page) => {
            print!("{}", render_plain(&page));
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("Error: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Column-aligned text table, amounts right-aligned, one line per transfer.
#[must_use]
pub fn render_plain(page: &TransferPage) -> String {
    if page.transfers.is_empty() {
        return format!("{EMPTY_TEXT}\n");
    }

    let symbol = page
        .token
        .as_ref()
        .map_or(DEFAULT_TOKEN_SYMBOL, |token| token.symbol.as_str());
    let [sender, recipient, amount, block, tx] = column_titles(symbol);
    let header = vec![sender, recipient, amount, block, tx, "Link".to_string()];

    let rows: Vec<Vec<String>> = page
        .transfers
        .iter()
        .map(|transfer| {
            let row = TransferRow::new(transfer);
            vec![
                row.sender,
                row.recipient,
                row.amount,
                row.block,
                row.tx.label,
                row.tx.url,
            ]
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            std::iter::once(&header)
                .chain(&rows)
                .map(|cells| cells[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for cells in std::iter::once(&header).chain(&rows) {
        let line = cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(col, (cell, width))| {
                if col == 2 {
                    format!("{cell:>width$}")
                } else {
                    format!("{cell:<width$}")
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
