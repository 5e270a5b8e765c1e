use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Gauge};

use crate::system::sample::MemorySample;
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, latest: Option<MemorySample>, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (mem, swap) = match latest {
        Some(s) => (Some(s.mem_percent), Some(s.swap_percent)),
        None => (None, None),
    };
    render_gauge(frame, chunks[0], " RAM used ", mem, theme.meter_fg, theme);
    render_gauge(frame, chunks[1], " Swap used ", swap, theme.swap_fg, theme);
}

fn render_gauge(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    percent: Option<u32>,
    fg: ratatui::style::Color,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ));

    // Percentages can exceed 100 on odd counter semantics; the bar cannot.
    let ratio = percent.map_or(0.0, |p| (p as f64 / 100.0).clamp(0.0, 1.0));
    let label = percent.map_or_else(|| "--".to_string(), |p| format!("{p}%"));

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(fg).bg(theme.meter_bg))
        .ratio(ratio)
        .label(label);

    frame.render_widget(gauge, area);
}
