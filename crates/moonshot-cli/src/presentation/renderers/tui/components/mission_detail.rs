//! Mission Detail Component
//!
//! Mission header, highlights text and a horizontal crew strip. The crew was
//! resolved when the page was built; this component only holds the result.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::presentation::formatters::wrap_text;
use crate::presentation::view_models::MissionDetailViewModel;
use crate::presentation::views::mission::{CREW_HEADING, HIGHLIGHTS_HEADING};

const CREW_CELL_WIDTH: u16 = 30;
const CREW_CELL_HEIGHT: u16 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissionDetailAction {
    /// Open the biography of the astronaut with this id
    OpenAstronaut(String),
    Back,
}

pub struct MissionDetailComponent {
    data: MissionDetailViewModel,
    selected_crew: usize,
    scroll: u16,
}

impl MissionDetailComponent {
    pub fn new(data: MissionDetailViewModel) -> Self {
        Self {
            data,
            selected_crew: 0,
            scroll: 0,
        }
    }

    pub fn data(&self) -> &MissionDetailViewModel {
        &self.data
    }

    #[cfg(test)]
    pub fn selected_crew(&self) -> usize {
        self.selected_crew
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<MissionDetailAction> {
        let crew_len = self.data.crew.len();
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => Some(MissionDetailAction::Back),
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_crew = self.selected_crew.saturating_sub(1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                if self.selected_crew + 1 < crew_len {
                    self.selected_crew += 1;
                }
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::Enter => self
                .data
                .crew
                .get(self.selected_crew)
                .map(|member| MissionDetailAction::OpenAstronaut(member.astronaut_id.clone())),
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(CREW_CELL_HEIGHT + 1),
            ])
            .split(area);

        self.render_header(f, chunks[0]);
        self.render_highlights(f, chunks[1]);
        self.render_crew(f, chunks[2]);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let mission = &self.data.mission;
        let lines = vec![
            Line::from(Span::styled(
                format!("[{}]", mission.image_key),
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::from(vec![
                Span::styled("Launched: ", Style::default().add_modifier(Modifier::DIM)),
                Span::raw(mission.formatted_launch_date.clone()),
            ]),
        ];

        let header = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(header, area);
    }

    fn render_highlights(&mut self, f: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(2).max(1) as usize;
        let mut lines = vec![
            Line::from(Span::styled(
                HIGHLIGHTS_HEADING,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(
            wrap_text(&self.data.description, width)
                .into_iter()
                .map(Line::from),
        );

        // Index Safety: keep the last line reachable, never past it
        let max_scroll = (lines.len() as u16).saturating_sub(area.height);
        self.scroll = self.scroll.min(max_scroll);

        let body = Paragraph::new(lines).scroll((self.scroll, 0)).block(
            Block::default()
                .borders(Borders::NONE)
                .padding(Padding::horizontal(1)),
        );
        f.render_widget(body, area);
    }

    fn render_crew(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(Span::styled(
                CREW_HEADING,
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        f.render_widget(block, area);

        if self.data.crew.is_empty() {
            f.render_widget(Paragraph::new("No crew assigned."), inner);
            return;
        }
        self.selected_crew = self.selected_crew.min(self.data.crew.len() - 1);

        let visible = (inner.width / CREW_CELL_WIDTH).max(1) as usize;
        let offset = (self.selected_crew + 1).saturating_sub(visible);

        for (slot, (index, member)) in self
            .data
            .crew
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let cell = Rect {
                x: inner.x + slot as u16 * CREW_CELL_WIDTH,
                y: inner.y,
                width: CREW_CELL_WIDTH,
                height: CREW_CELL_HEIGHT,
            }
            .intersection(inner);

            let border_style = if index == self.selected_crew {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let lines = vec![
                Line::from(Span::styled(
                    format!("[{}]", member.portrait_key),
                    Style::default().add_modifier(Modifier::DIM),
                )),
                Line::from(Span::styled(
                    member.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    member.role.clone(),
                    Style::default().fg(Color::Gray),
                )),
            ];

            let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
            f.render_widget(widget, cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{CrewMemberViewModel, MissionCardViewModel};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn member(id: &str, role: &str) -> CrewMemberViewModel {
        CrewMemberViewModel {
            astronaut_id: id.to_string(),
            portrait_key: id.to_string(),
            name: id.to_uppercase(),
            role: role.to_string(),
        }
    }

    fn detail() -> MissionDetailComponent {
        MissionDetailComponent::new(MissionDetailViewModel {
            mission: MissionCardViewModel {
                id: 13,
                display_name: "Apollo 13".to_string(),
                image_key: "apollo13".to_string(),
                launch_date: None,
                formatted_launch_date: "Apr 11, 1970".to_string(),
            },
            description: "Houston, we've had a problem.".to_string(),
            crew: vec![
                member("lovell", "Commander"),
                member("swigert", "Command Module Pilot"),
                member("haise", "Lunar Module Pilot"),
            ],
        })
    }

    #[test]
    fn test_crew_selection_moves_along_strip() {
        let mut d = detail();
        d.handle_input(key(KeyCode::Right));
        d.handle_input(key(KeyCode::Right));
        d.handle_input(key(KeyCode::Right));
        assert_eq!(d.selected_crew(), 2);

        assert_eq!(
            d.handle_input(key(KeyCode::Enter)),
            Some(MissionDetailAction::OpenAstronaut("haise".to_string()))
        );

        d.handle_input(key(KeyCode::Left));
        assert_eq!(d.selected_crew(), 1);
    }

    #[test]
    fn test_back_keys() {
        let mut d = detail();
        assert_eq!(d.handle_input(key(KeyCode::Esc)), Some(MissionDetailAction::Back));
        assert_eq!(
            d.handle_input(key(KeyCode::Backspace)),
            Some(MissionDetailAction::Back)
        );
    }
}
