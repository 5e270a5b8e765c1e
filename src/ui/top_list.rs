use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::format::truncate_unicode;
use crate::system::top::TopProcessSlot;
use crate::ui::theme::Theme;

const USAGE_WIDTH: u16 = 12;

pub fn render(frame: &mut Frame, area: Rect, slots: &[TopProcessSlot], theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            " Top processes ",
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(USAGE_WIDTH)])
        .split(inner);

    let name_width = cols[0].width as usize;
    let commands: Vec<Line> = slots
        .iter()
        .map(|s| {
            Line::from(Span::styled(
                truncate_unicode(&s.command, name_width),
                Style::default().fg(theme.text_primary),
            ))
        })
        .collect();
    let usages: Vec<Line> = slots
        .iter()
        .map(|s| {
            Line::from(Span::styled(
                s.usage.clone(),
                Style::default().fg(theme.text_secondary),
            ))
        })
        .collect();

    frame.render_widget(Paragraph::new(commands), cols[0]);
    frame.render_widget(
        Paragraph::new(usages).alignment(Alignment::Right),
        cols[1],
    );
}
