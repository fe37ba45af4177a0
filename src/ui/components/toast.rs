//! Toast notification drawn in the bottom-right corner.
//!
//! Messages starting with `[+]` are shown as success, `[x]` as errors.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};

const MIN_TOAST_WIDTH: u16 = 20;

const TOAST_HEIGHT: u16 = 3;

const TOAST_MARGIN: u16 = 2;

/// Borders plus one space each side.
const TOAST_WIDTH_PADDING: u16 = 4;

pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_position(area, message);
    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    let text = Paragraph::new(message)
        .style(Style::default().fg(text_color(message)))
        .alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

fn toast_position(area: Rect, message: &str) -> Rect {
    let message_len = message.chars().count() as u16;
    let width = (message_len + TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);
    let height = TOAST_HEIGHT.min(area.height);

    let x = area.x + area.width.saturating_sub(width + TOAST_MARGIN);
    let y = area.y + area.height.saturating_sub(height + TOAST_MARGIN);

    Rect::new(x, y, width, height)
}

fn text_color(message: &str) -> Color {
    if message.starts_with("[+]") {
        SUCCESS_COLOR
    } else if message.starts_with("[x]") {
        ERROR_COLOR
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, test_terminal};

    #[test]
    fn test_toast_position_variants() {
        let long = "x".repeat(80);
        let cases = [
            ("normal", Rect::new(0, 0, 100, 50), "[+] Copied", 20),
            ("long", Rect::new(0, 0, 100, 50), long.as_str(), 50),
            ("tiny area", Rect::new(0, 0, 12, 4), "hello", 12),
        ];

        for (name, area, message, expected_width) in cases {
            let toast = toast_position(area, message);
            assert_eq!(toast.width, expected_width, "{name}: width");
            assert!(toast.right() <= area.right(), "{name}: x bounds");
            assert!(toast.bottom() <= area.bottom(), "{name}: y bounds");
        }
    }

    #[test]
    fn test_text_color_variants() {
        assert_eq!(text_color("[+] Opened in browser"), SUCCESS_COLOR);
        assert_eq!(text_color("[x] Clipboard not available"), ERROR_COLOR);
        assert_eq!(text_color("info"), Color::White);
    }

    #[test]
    fn test_toast_renders_message() {
        let mut terminal = test_terminal(60, 10);
        terminal
            .draw(|frame| render_toast(frame, frame.area(), "[+] Copied 0xCCCC...3333"))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("[+] Copied 0xCCCC...3333"), "{content}");
    }
}
