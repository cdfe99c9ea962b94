//! Structure selector sidebar

use crate::structures::StructureKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Render the list of structures with the active one highlighted
pub fn render_selector_pane(frame: &mut Frame, area: Rect, active: StructureKind) {
    let block = Block::default()
        .title(" Select Structure ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 0, 1, 0));

    let items: Vec<ListItem> = StructureKind::ALL
        .iter()
        .enumerate()
        .map(|(i, &kind)| {
            let is_active = kind == active;
            let (marker, label_style) = if is_active {
                (
                    "▸ ",
                    Style::default()
                        .fg(DEFAULT_THEME.border_focused)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(DEFAULT_THEME.fg))
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.secondary)),
                Span::styled(
                    format!("F{} ", i + 1),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(kind.label(), label_style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
