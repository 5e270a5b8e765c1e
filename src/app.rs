use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::config::{Config, KeybindsConfig, parse_key};
use crate::event::Event;
use crate::monitor::Monitor;
use crate::system::collector::Collector;
use crate::system::counters::CountersProvider;
use crate::ui::theme::Theme;

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub refresh: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            refresh: parse_key(&kb.refresh).unwrap_or(KeyCode::Char('r')),
        }
    }

    /// (key_label, description) pairs for the status bar.
    pub fn hint_entries(&self) -> Vec<(String, &'static str)> {
        vec![
            (key_label(self.quit), "Quit"),
            (key_label(self.refresh), "Refresh"),
        ]
    }
}

fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        _ => "?".to_string(),
    }
}

pub struct App<P = Collector> {
    pub running: bool,
    pub monitor: Monitor<P>,
    pub theme: Theme,
    pub keybinds: ResolvedKeybinds,
    pub chart_interval: Duration,
}

impl App<Collector> {
    pub fn new(config: &Config) -> Self {
        Self::with_provider(Collector::new(), config)
    }
}

impl<P: CountersProvider> App<P> {
    pub fn with_provider(provider: P, config: &Config) -> Self {
        let general = &config.general;
        App {
            running: true,
            monitor: Monitor::new(provider, general.history_size, general.top_processes),
            theme: Theme::from_config(&config.colors),
            keybinds: ResolvedKeybinds::from_config(&config.keybinds),
            chart_interval: general.chart_interval(),
        }
    }

    /// Apply one event. Returns whether the screen needs a redraw.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::ChartTick => {
                // A skipped tick leaves the chart as it was; nothing to redraw.
                self.monitor.refresh_chart().is_ok()
            }
            Event::ProcessTick => {
                self.monitor.refresh_processes();
                true
            }
            Event::Resize => true,
            Event::Key(key) => {
                if key.kind != crossterm::event::KeyEventKind::Press {
                    return false;
                }
                let action = self.map_key(key);
                let redraw = action != Action::None;
                self.dispatch(action);
                redraw
            }
        }
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }
        if key.code == self.keybinds.quit {
            Action::Quit
        } else if key.code == self.keybinds.refresh {
            Action::Refresh
        } else {
            Action::None
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::Refresh => {
                self.monitor.refresh_chart().ok();
                self.monitor.refresh_processes();
            }
            Action::None => {}
        }
    }
}
