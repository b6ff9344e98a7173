//! Rendering logic for each TUI pane

use crate::tower::{self, Element, Tower};
use crate::ui::theme::{shape_color, DEFAULT_THEME};

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas as CanvasWidget, Rectangle as CanvasRect},
        Block, Borders, List, ListItem, Padding, Paragraph,
    },
    Frame,
};

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        DEFAULT_THEME.border_focused
    } else {
        DEFAULT_THEME.border_normal
    };
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

/// Draw every visible canvas shape into a ratatui canvas widget.
///
/// Screen pixel coordinates grow downward; the widget's y axis grows upward,
/// so shapes are flipped against the view height. Shapes paint in creation
/// order, frame and ticks first, elements on top.
pub fn render_tower_pane(frame: &mut Frame, area: Rect, tower: &Tower, focused: bool) {
    let view_w = (tower::ORIGIN_X * 2 + tower.width()) as f64;
    let view_h = (tower::ORIGIN_Y + 20) as f64;

    let widget = CanvasWidget::default()
        .block(pane_block("Tower", focused))
        .marker(Marker::HalfBlock)
        .x_bounds([0.0, view_w])
        .y_bounds([0.0, view_h])
        .paint(|ctx| {
            for (_, shape) in tower.canvas().shapes() {
                if !shape.visible {
                    continue;
                }
                ctx.draw(&CanvasRect {
                    x: shape.x as f64,
                    y: view_h - (shape.y + shape.height) as f64,
                    width: shape.width as f64,
                    height: shape.height as f64,
                    color: shape_color(&shape.color),
                });
            }
        });
    frame.render_widget(widget, area);
}

/// List the stack contents, top of the tower first
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    tower: &Tower,
    focused: bool,
    scroll: &mut usize,
) {
    let mut items: Vec<ListItem> = Vec::new();
    for (index, elem) in tower.stack().iter().enumerate().rev() {
        let line = match elem {
            Element::Cup(cup) => {
                let lidded = if cup.is_lidded() { "  [lidded]" } else { "" };
                Line::from(vec![
                    Span::styled(
                        format!("{:>2} ", index),
                        Style::default().fg(DEFAULT_THEME.comment),
                    ),
                    Span::styled(
                        format!("Cup {:<3}", cup.id()),
                        Style::default()
                            .fg(shape_color(cup.color()))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{:>3} cm  {}{}", cup.height_cm(), cup.color(), lidded),
                        Style::default().fg(DEFAULT_THEME.fg),
                    ),
                ])
            }
            Element::Lid(lid) => Line::from(vec![
                Span::styled(
                    format!("{:>2} ", index),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("Lid {:<3}", lid.number()),
                    Style::default().fg(shape_color(lid.color())),
                ),
                Span::styled(
                    format!("{:>3} cm  {}", lid.height_cm(), lid.color()),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ]),
        };
        items.push(ListItem::new(line));
    }

    if items.is_empty() {
        items.push(ListItem::new(Span::styled(
            "(empty)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    let visible_rows = area.height.saturating_sub(2) as usize;
    let max_scroll = items.len().saturating_sub(visible_rows);
    *scroll = (*scroll).min(max_scroll);

    let list = List::new(items.into_iter().skip(*scroll).collect::<Vec<_>>())
        .block(pane_block("Stack (top first)", focused).padding(Padding::horizontal(1)));
    frame.render_widget(list, area);
}

/// Command history and tower reports, newest at the bottom.
///
/// A scroll of `usize::MAX` pins the view to the tail.
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    log: &[String],
    focused: bool,
    scroll: &mut usize,
) {
    let visible_rows = area.height.saturating_sub(2) as usize;
    let max_scroll = log.len().saturating_sub(visible_rows);
    *scroll = (*scroll).min(max_scroll);

    let lines: Vec<Line> = log
        .iter()
        .skip(*scroll)
        .take(visible_rows)
        .map(|entry| {
            if entry.starts_with('>') {
                Line::from(Span::styled(
                    entry.clone(),
                    Style::default().fg(DEFAULT_THEME.primary),
                ))
            } else if entry.starts_with("Cup ") {
                // Tower reports name the offending cup
                Line::from(Span::styled(
                    entry.clone(),
                    Style::default().fg(DEFAULT_THEME.error),
                ))
            } else {
                Line::from(Span::styled(
                    entry.clone(),
                    Style::default().fg(DEFAULT_THEME.fg),
                ))
            }
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(pane_block("Log", focused).padding(Padding::horizontal(1)));
    frame.render_widget(paragraph, area);
}

/// The command input line
pub fn render_input_bar(frame: &mut Frame, area: Rect, input: &str) {
    let line = Line::from(vec![
        Span::styled("> ", Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(input, Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled("_", Style::default().fg(DEFAULT_THEME.comment)),
    ]);
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(" Command ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
    );
    frame.render_widget(paragraph, area);
}

/// Bottom status bar: last-operation flag, stacked height, key hints
pub fn render_status_bar(frame: &mut Frame, area: Rect, status: &str, tower: &Tower) {
    let (flag_text, flag_color) = if tower.last_operation_ok() {
        ("OK", DEFAULT_THEME.success)
    } else {
        ("FAILED", DEFAULT_THEME.error)
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", flag_text),
            Style::default()
                .fg(flag_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("│ {}/{} cm ", tower.stack_height_cm(), tower.max_height_cm()),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Span::styled(
            format!("│ {} ", status),
            Style::default().fg(DEFAULT_THEME.secondary),
        ),
        Span::styled(
            "│ Tab: focus │ Enter: run │ help │ q: quit",
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]);

    let paragraph = Paragraph::new(line).alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}
