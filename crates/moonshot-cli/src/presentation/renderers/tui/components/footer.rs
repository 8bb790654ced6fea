use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// Key hints for the page on top of the stack
pub struct Footer;

impl Footer {
    pub fn render(f: &mut Frame, area: Rect, hint: &str) {
        let footer_widget = Paragraph::new(Line::from(hint.to_string()))
            .style(Style::default().fg(Color::Gray))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );

        f.render_widget(footer_widget, area);
    }
}
