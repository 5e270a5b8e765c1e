pub mod header;
pub mod history_chart;
pub mod statusbar;
pub mod theme;
pub mod top_list;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::App;
use crate::format::history_span_label;

pub fn draw<P>(frame: &mut Frame, app: &App<P>) {
    let monitor = &app.monitor;
    let top_rows = u16::try_from(monitor.top_count())
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(top_rows),
            Constraint::Length(1),
        ])
        .split(frame.area());

    header::render(frame, chunks[0], monitor.latest(), &app.theme);

    let span_label = history_span_label(monitor.history().capacity(), app.chart_interval);
    history_chart::render(frame, chunks[1], monitor.history(), &span_label, &app.theme);

    top_list::render(frame, chunks[2], monitor.top_processes(), &app.theme);
    statusbar::render(frame, chunks[3], &app.keybinds.hint_entries(), &app.theme);
}
