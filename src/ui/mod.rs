//! UI rendering for the transfer explorer.
//!
//! - `header` - Logo and backend status
//! - `filter_bar` - Sender / recipient inputs
//! - `transfers` - Loading, error, empty or table view of the latest fetch
//! - `footer` - Key hints
//! - `popups` / `components` - Help popup and toast overlay

pub mod components;
pub mod filter_bar;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod popups;
pub mod transfers;

use ratatui::Frame;

use crate::state::App;

/// Main render entry point.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let layout = layout::calculate_app_layout(size);

    header::render(frame, layout.header, app);
    filter_bar::render(frame, layout.filters, app);
    transfers::render(frame, layout.content, app);
    footer::render(frame, layout.footer, app);

    if app.ui.show_help {
        popups::help::render(frame, size);
    }

    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, size, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::time::Duration;

    use crate::commands::AppCommand;
    use crate::test_utils::{
        JsonMother, MockBackend, buffer_to_string, test_app, test_terminal, unreachable_api,
    };

    fn draw(app: &App) -> String {
        let mut terminal = test_terminal(100, 16);
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[tokio::test]
    async fn test_full_screen_after_fetch() {
        let backend = MockBackend::spawn(StatusCode::OK, JsonMother::scenario()).await;
        let mut app = test_app(backend.api());

        app.fetch_now();
        let message = tokio::time::timeout(Duration::from_secs(5), app.message_rx.recv())
            .await
            .unwrap()
            .unwrap();
        app.handle_message(message);

        let content = draw(&app);
        for expected in [
            "LOBSTER | Technical Test",
            "Sender Address",
            "Recipient Address",
            "LobsterToken Transfers",
            "0xAAAA...1111",
            "0xBBBB...2222",
            "0xCCCC...3333",
            "q:Quit",
        ] {
            assert!(content.contains(expected), "missing {expected:?} in\n{content}");
        }
    }

    #[test]
    fn test_help_and_toast_overlays() {
        let mut app = test_app(unreachable_api());
        app.execute_command(AppCommand::ToggleHelp, std::time::Instant::now());
        app.ui.show_toast("[+] Opened in browser", 5);

        let content = draw(&app);
        assert!(content.contains("Help (? to close)"), "{content}");
        assert!(content.contains("[+] Opened in browser"), "{content}");
    }
}
