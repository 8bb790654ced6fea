use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::presentation::formatters::wrap_text;
use crate::presentation::view_models::AstronautViewModel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstronautAction {
    Back,
}

/// Scrollable biography page
pub struct AstronautComponent {
    data: AstronautViewModel,
    scroll: u16,
}

impl AstronautComponent {
    pub fn new(data: AstronautViewModel) -> Self {
        Self { data, scroll: 0 }
    }

    pub fn data(&self) -> &AstronautViewModel {
        &self.data
    }

    #[cfg(test)]
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<AstronautAction> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => Some(AstronautAction::Back),
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.scroll = 0;
                None
            }
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                self.data.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("[{}]", self.data.portrait_key),
                Style::default().add_modifier(Modifier::DIM),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(header, chunks[0]);

        let body = chunks[1];
        let width = body.width.saturating_sub(2).max(1) as usize;
        let mut lines: Vec<Line> = wrap_text(&self.data.description, width)
            .into_iter()
            .map(Line::from)
            .collect();

        if !self.data.missions.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Missions",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for mission in &self.data.missions {
                lines.push(Line::from(vec![
                    Span::raw(format!("  {:<12}", mission.display_name)),
                    Span::styled(mission.role.clone(), Style::default().fg(Color::Gray)),
                ]));
            }
        }

        // Index Safety: Clamp scroll to content height
        let max_scroll = (lines.len() as u16).saturating_sub(body.height);
        self.scroll = self.scroll.min(max_scroll);

        let bio = Paragraph::new(lines)
            .scroll((self.scroll, 0))
            .block(Block::default().padding(Padding::horizontal(1)));
        f.render_widget(bio, body);
    }
}
