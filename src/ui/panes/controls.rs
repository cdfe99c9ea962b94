//! Input field and action labels

use crate::structures::StructureKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "Enter a number";

/// Render the staged input and the Add/Remove labels for `kind`
pub fn render_controls_pane(frame: &mut Frame, area: Rect, kind: StructureKind, input: &str) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let field = if input.is_empty() {
        Span::styled(
            format!(" {:<16}", PLACEHOLDER),
            Style::default().fg(DEFAULT_THEME.placeholder),
        )
    } else {
        Span::styled(
            format!(" {:<16}", format!("{}▏", input)),
            Style::default().fg(DEFAULT_THEME.fg),
        )
    };

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let line = Line::from(vec![
        Span::styled("[", Style::default().fg(DEFAULT_THEME.comment)),
        field,
        Span::styled("]", Style::default().fg(DEFAULT_THEME.comment)),
        Span::raw("  "),
        Span::styled(" ↵ ", key_style),
        Span::styled(
            format!(" {} ", kind.add_label()),
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(" Del ", key_style),
        Span::styled(
            format!(" {} ", kind.remove_label()),
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
