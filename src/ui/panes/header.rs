//! Title header

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const TITLE: &str = "Data Structures Visualizer";
pub const SUBTITLE: &str = "Interactive learning tool for common data structures";

/// Render the title and subtitle across the top of the screen
pub fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled(
            TITLE,
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(SUBTITLE, Style::default().fg(DEFAULT_THEME.comment)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
        );
    frame.render_widget(paragraph, area);
}
