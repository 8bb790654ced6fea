//! Mission List Component
//!
//! Owns the selection for both layouts. Selection is an index into the
//! mission list and survives a layout toggle.

use crossterm::event::{KeyCode, KeyEvent};
use moonshot_types::ViewMode;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::presentation::view_models::{MissionCardViewModel, MissionListViewModel};
use crate::presentation::views::{grid_columns, mission::DISCLOSURE};

const CELL_HEIGHT: u16 = 5;

/// Actions the mission list emits to the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissionListAction {
    Open(usize),
    ToggleView,
    Quit,
}

pub struct MissionListComponent {
    selected: usize,
    columns: usize,
    grid_offset: usize,
    list_state: ListState,
}

impl MissionListComponent {
    pub fn new() -> Self {
        Self {
            selected: 0,
            columns: 1,
            grid_offset: 0,
            list_state: ListState::default(),
        }
    }

    #[cfg(test)]
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        data_len: usize,
        mode: ViewMode,
    ) -> Option<MissionListAction> {
        let row_step = match mode {
            ViewMode::Grid => self.columns.max(1),
            ViewMode::List => 1,
        };

        match key.code {
            KeyCode::Char('v') | KeyCode::Tab => Some(MissionListAction::ToggleView),
            KeyCode::Esc => Some(MissionListAction::Quit),
            KeyCode::Enter if data_len > 0 => {
                Some(MissionListAction::Open(self.selected.min(data_len - 1)))
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.forward(row_step, data_len);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(row_step);
                None
            }
            KeyCode::Right | KeyCode::Char('l') if mode == ViewMode::Grid => {
                self.forward(1, data_len);
                None
            }
            KeyCode::Left | KeyCode::Char('h') if mode == ViewMode::Grid => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.selected = 0;
                None
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = data_len.saturating_sub(1);
                None
            }
            _ => None,
        }
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        data: &MissionListViewModel,
        min_cell_width: u16,
    ) {
        // Index Safety: Clamp selection to data bounds
        if data.missions.is_empty() {
            self.selected = 0;
            f.render_widget(Paragraph::new("No missions."), area);
            return;
        }
        self.selected = self.selected.min(data.missions.len() - 1);

        match data.view_mode {
            ViewMode::Grid => self.render_grid(f, area, &data.missions, min_cell_width),
            ViewMode::List => self.render_list(f, area, &data.missions),
        }
    }

    fn forward(&mut self, step: usize, data_len: usize) {
        if data_len == 0 {
            return;
        }
        let next = self.selected + step;
        if next < data_len {
            self.selected = next;
        }
    }

    fn render_grid(
        &mut self,
        f: &mut Frame,
        area: Rect,
        missions: &[MissionCardViewModel],
        min_cell_width: u16,
    ) {
        let columns = grid_columns(area.width, min_cell_width);
        self.columns = columns;
        let cell_width = area.width / columns as u16;
        let visible_rows = (area.height / CELL_HEIGHT).max(1) as usize;

        let selected_row = self.selected / columns;
        if selected_row < self.grid_offset {
            self.grid_offset = selected_row;
        } else if selected_row >= self.grid_offset + visible_rows {
            self.grid_offset = selected_row + 1 - visible_rows;
        }

        let first = self.grid_offset * columns;
        let last = (first + visible_rows * columns).min(missions.len());

        for (index, mission) in missions.iter().enumerate().take(last).skip(first) {
            let row = (index / columns - self.grid_offset) as u16;
            let col = (index % columns) as u16;
            let cell = Rect {
                x: area.x + col * cell_width,
                y: area.y + row * CELL_HEIGHT,
                width: cell_width,
                height: CELL_HEIGHT,
            }
            .intersection(area);

            let border_style = if index == self.selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let lines = vec![
                Line::from(Span::styled(
                    format!("[{}]", mission.image_key),
                    Style::default().add_modifier(Modifier::DIM),
                )),
                Line::from(Span::styled(
                    mission.display_name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    mission.formatted_launch_date.clone(),
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

    fn render_list(&mut self, f: &mut Frame, area: Rect, missions: &[MissionCardViewModel]) {
        let items: Vec<ListItem> = missions
            .iter()
            .map(|mission| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<12}", format!("[{}]", mission.image_key)),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                    Span::styled(
                        format!("{:<12}", mission.display_name),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{:>12}", mission.formatted_launch_date),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(
                        format!("  {}", DISCLOSURE),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        self.list_state.select(Some(self.selected));
        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for MissionListComponent {
    fn default() -> Self {
        Self::new()
    }
}
