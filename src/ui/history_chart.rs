use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, RenderDirection, Sparkline};

use crate::system::history::HistoryBuffer;
use crate::ui::theme::Theme;

/// Filled RAM history, newest point at the right edge. `span_label` names
/// how far back a full chart reaches.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    history: &HistoryBuffer,
    span_label: &str,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            " Memory usage ",
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    // Newest first, drawn right to left, so a short history hugs the right
    // edge.
    let width = rows[0].width as usize;
    let visible: Vec<u64> = history.mem_series().into_iter().rev().take(width).collect();
    let sparkline = Sparkline::default()
        .data(&visible)
        .max(100)
        .direction(RenderDirection::RightToLeft)
        .style(Style::default().fg(theme.meter_fg).bg(theme.meter_bg));
    frame.render_widget(sparkline, rows[0]);

    let gap = (rows[1].width as usize).saturating_sub(span_label.len() + 3);
    let labels = Line::from(vec![
        Span::styled(span_label.to_string(), Style::default().fg(theme.text_secondary)),
        Span::raw(" ".repeat(gap)),
        Span::styled("now", Style::default().fg(theme.text_secondary)),
    ]);
    frame.render_widget(Paragraph::new(labels), rows[1]);
}
