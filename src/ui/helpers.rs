//! Shared block styles.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::{ACCENT_COLOR, BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE};

/// A bordered block whose border and title follow focus.
///
/// Focused blocks get a double border and a `●` marker in the title.
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'static> {
    let display_title = match (title.is_empty(), focused) {
        (true, _) => String::new(),
        (false, true) => format!(" ● {title} "),
        (false, false) => format!(" {title} "),
    };

    let (border_style, border_set, title_style) = if focused {
        (FOCUSED_BORDER_STYLE, border::DOUBLE, FOCUSED_TITLE_STYLE)
    } else {
        (
            BORDER_STYLE,
            border::ROUNDED,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border_set)
        .border_style(border_style)
}

/// A popup block with a centered title.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(ACCENT_COLOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, test_terminal};

    #[test]
    fn test_block_titles() {
        let mut terminal = test_terminal(24, 9);
        terminal
            .draw(|frame| {
                let area = frame.area();
                let rows = ratatui::layout::Layout::vertical([
                    ratatui::layout::Constraint::Length(3),
                    ratatui::layout::Constraint::Length(3),
                    ratatui::layout::Constraint::Length(3),
                ])
                .split(area);
                frame.render_widget(create_border_block("Idle", false), rows[0]);
                frame.render_widget(create_border_block("Active", true), rows[1]);
                frame.render_widget(create_popup_block("Help"), rows[2]);
            })
            .unwrap();

        insta::assert_snapshot!(buffer_to_string(terminal.backend().buffer()), @r"
        ╭ Idle ────────────────╮
        │                      │
        ╰──────────────────────╯
        ╔ ● Active ════════════╗
        ║                      ║
        ╚══════════════════════╝
        ╭──────── Help ────────╮
        │                      │
        ╰──────────────────────╯
        ");
    }
}
