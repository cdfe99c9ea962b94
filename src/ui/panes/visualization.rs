//! Visualization pane rendering
//!
//! This module draws a [`LayoutDescription`] with box-drawing characters.
//! All positioning decisions (order, labels, tree slots) are already made
//! by [`crate::layout::derive_layout`]; this code only turns them into
//! styled lines.
//!
//! # Shapes
//!
//! - Array, queue and linked list: rows of boxes, wrapped to the pane width
//! - Stack: a vertical column of boxes, top first
//! - Binary tree: three centered levels of nodes

use crate::layout::{
    LayoutDescription, FRONT_MARKER, NULL_SENTINEL, REAR_MARKER, TOP_LABEL, TREE_LEVEL_WIDTHS,
};
use crate::structures::StructureKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the one-line description of the active structure
pub fn render_description(frame: &mut Frame, area: Rect, kind: StructureKind) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let paragraph = Paragraph::new(kind.description())
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Render the active structure
pub fn render_visualization_pane(frame: &mut Frame, area: Rect, layout: &LayoutDescription) {
    let block = Block::default()
        .title(format!(" {} ", layout.kind()))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::new(1, 1, 1, 0));

    // Content width inside borders and padding
    let content_width = usize::from(area.width.saturating_sub(4));

    let lines = match layout {
        LayoutDescription::Array { cells } => {
            let mut row = BoxRow::new();
            for (i, cell) in cells.iter().enumerate() {
                if i > 0 {
                    row.push_gap(" ", Style::default());
                }
                row.push_labeled_box(&cell.value.to_string(), &cell.index.to_string(), value_style());
            }
            row.into_lines(content_width)
        }
        LayoutDescription::Stack { items } => {
            let texts: Vec<String> = items.iter().map(|item| item.value.to_string()).collect();
            let inner = texts.iter().map(|t| t.chars().count()).max().unwrap_or(0) + 4;
            let mut lines = Vec::new();
            for (i, (item, text)) in items.iter().zip(&texts).enumerate() {
                let edge = if i == 0 { "┌" } else { "├" };
                let edge_end = if i == 0 { "┐" } else { "┤" };
                lines.push(border_line(edge, inner, edge_end));
                let mut spans = vec![
                    Span::styled("│", border_style()),
                    Span::styled(format!("{:^inner$}", text), value_style()),
                    Span::styled("│", border_style()),
                ];
                if item.is_top {
                    spans.push(Span::styled(
                        format!(" ◀ {}", TOP_LABEL),
                        Style::default()
                            .fg(DEFAULT_THEME.top_marker)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
                lines.push(Line::from(spans));
            }
            if !items.is_empty() {
                lines.push(border_line("└", inner, "┘"));
            }
            lines
        }
        LayoutDescription::Queue { items } => {
            let mut row = BoxRow::new();
            row.push_gap(&format!("{} ", FRONT_MARKER), marker_style());
            for (i, value) in items.iter().enumerate() {
                if i > 0 {
                    row.push_gap(" ", Style::default());
                }
                row.push_box(&value.to_string(), value_style());
            }
            row.attach_gap(&format!(" {}", REAR_MARKER), marker_style());
            row.into_lines(content_width)
        }
        LayoutDescription::LinkedList { nodes } => {
            let mut row = BoxRow::new();
            for node in nodes {
                row.push_box(&node.value.to_string(), value_style());
                if node.has_next {
                    row.push_gap(" → ", marker_style());
                } else {
                    row.push_gap(" ", Style::default());
                }
            }
            row.push_box(NULL_SENTINEL, Style::default().fg(DEFAULT_THEME.comment));
            row.into_lines(content_width)
        }
        LayoutDescription::BinaryTree { levels } => {
            let mut lines = Vec::new();
            for (level, width) in levels.iter().zip(TREE_LEVEL_WIDTHS) {
                let segment = (content_width / width).max(1);
                let spans: Vec<Span> = level
                    .iter()
                    .map(|slot| match slot {
                        Some(value) => Span::styled(
                            format!("{:^segment$}", format!("({})", value)),
                            value_style(),
                        ),
                        None => Span::raw(" ".repeat(segment)),
                    })
                    .collect();
                lines.push(Line::from(spans));
                lines.push(Line::default());
            }
            lines
        }
    };

    // Markers still draw for an empty queue or list; say so for the rest
    let show_empty = layout.is_empty()
        && !matches!(
            layout,
            LayoutDescription::Queue { .. } | LayoutDescription::LinkedList { .. }
        );

    let paragraph = if show_empty {
        Paragraph::new("(empty)").style(Style::default().fg(DEFAULT_THEME.comment))
    } else {
        Paragraph::new(lines)
    };

    frame.render_widget(paragraph.alignment(Alignment::Left).block(block), area);
}

fn value_style() -> Style {
    Style::default()
        .fg(DEFAULT_THEME.number)
        .add_modifier(Modifier::BOLD)
}

fn border_style() -> Style {
    Style::default().fg(DEFAULT_THEME.border_normal)
}

fn marker_style() -> Style {
    Style::default().fg(DEFAULT_THEME.connector)
}

fn border_line(start: &str, inner: usize, end: &str) -> Line<'static> {
    Line::styled(format!("{}{}{}", start, "─".repeat(inner), end), border_style())
}

/// One box or gap, one span list per line
struct Piece {
    label: Vec<Span<'static>>,
    top: Vec<Span<'static>>,
    mid: Vec<Span<'static>>,
    bottom: Vec<Span<'static>>,
    width: usize,
    is_blank: bool,
}

impl Piece {
    fn empty(is_blank: bool) -> Self {
        Piece {
            label: Vec::new(),
            top: Vec::new(),
            mid: Vec::new(),
            bottom: Vec::new(),
            width: 0,
            is_blank,
        }
    }
}

/// A horizontal run of boxes with an optional label line above them,
/// wrapped onto as many rows as the pane width needs
struct BoxRow {
    pieces: Vec<Piece>,
    has_labels: bool,
}

impl BoxRow {
    fn new() -> Self {
        BoxRow {
            pieces: Vec::new(),
            has_labels: false,
        }
    }

    /// Add a boxed value; `label` is centered above it
    fn push_labeled_box(&mut self, text: &str, label: &str, style: Style) {
        let inner = text.chars().count().max(label.chars().count()) + 2;
        let label = Span::styled(
            format!(" {:^inner$} ", label),
            Style::default().fg(DEFAULT_THEME.comment),
        );
        self.has_labels = true;
        self.push_framed(text, inner, label, style);
    }

    fn push_box(&mut self, text: &str, style: Style) {
        let inner = text.chars().count() + 2;
        let label = Span::raw(" ".repeat(inner + 2));
        self.push_framed(text, inner, label, style);
    }

    fn push_framed(&mut self, text: &str, inner: usize, label: Span<'static>, style: Style) {
        self.pieces.push(Piece {
            label: vec![label],
            top: vec![Span::styled(
                format!("┌{}┐", "─".repeat(inner)),
                border_style(),
            )],
            mid: vec![
                Span::styled("│", border_style()),
                Span::styled(format!("{:^inner$}", text), style),
                Span::styled("│", border_style()),
            ],
            bottom: vec![Span::styled(
                format!("└{}┘", "─".repeat(inner)),
                border_style(),
            )],
            width: inner + 2,
            is_blank: false,
        });
    }

    /// Add text between boxes on the middle line, padded above and below.
    /// A row may break here; a blank gap at a break is dropped.
    fn push_gap(&mut self, text: &str, style: Style) {
        self.pieces.push(Piece::empty(text.trim().is_empty()));
        self.attach_gap(text, style);
    }

    /// Like `push_gap`, but glued to the previous piece so no row breaks before it
    fn attach_gap(&mut self, text: &str, style: Style) {
        if self.pieces.is_empty() {
            self.pieces.push(Piece::empty(false));
        }
        let Some(piece) = self.pieces.last_mut() else {
            return;
        };
        let width = text.chars().count();
        let pad = " ".repeat(width);
        piece.label.push(Span::raw(pad.clone()));
        piece.top.push(Span::raw(pad.clone()));
        piece.mid.push(Span::styled(text.to_string(), style));
        piece.bottom.push(Span::raw(pad));
        piece.width += width;
    }

    /// Lay pieces out left to right, starting a new row whenever the next
    /// piece would pass `max_width`. Rows are separated by a blank line.
    fn into_lines(self, max_width: usize) -> Vec<Line<'static>> {
        let BoxRow { pieces, has_labels } = self;

        let mut rows: Vec<Vec<Piece>> = Vec::new();
        let mut row_width = 0;
        for piece in pieces {
            let fits = row_width + piece.width <= max_width;
            match rows.last_mut() {
                Some(row) if fits => {
                    row_width += piece.width;
                    row.push(piece);
                }
                Some(_) if piece.is_blank => {}
                _ => {
                    row_width = piece.width;
                    rows.push(vec![piece]);
                }
            }
        }

        let mut lines = Vec::with_capacity(rows.len() * 5);
        for (i, row) in rows.into_iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            let mut label = Vec::new();
            let mut top = Vec::new();
            let mut mid = Vec::new();
            let mut bottom = Vec::new();
            for piece in row {
                label.extend(piece.label);
                top.extend(piece.top);
                mid.extend(piece.mid);
                bottom.extend(piece.bottom);
            }
            if has_labels {
                lines.push(Line::from(label));
            }
            lines.push(Line::from(top));
            lines.push(Line::from(mid));
            lines.push(Line::from(bottom));
        }
        lines
    }
}
