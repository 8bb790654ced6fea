use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app::App;
use super::components::Footer;

pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.area());

    render_title_bar(f, main_chunks[0], app);
    app.render_body(f, main_chunks[1]);
    Footer::render(f, main_chunks[2], app.footer_hint());
}

fn render_title_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.breadcrumbs()),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if app.depth() == 0 {
        spans.push(Span::styled(
            format!(" [{}]", app.view_mode()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use moonshot_core::{Bundle, Catalog, CatalogState};
    use moonshot_types::ViewMode;
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app(mode: ViewMode) -> App {
        let catalog = Arc::new(Catalog::load(&Bundle::embedded()).unwrap());
        App::new(CatalogState::new(catalog, mode), 24)
    }

    #[test]
    fn test_grid_root_renders_cards_and_footer() {
        let mut app = app(ViewMode::Grid);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("Moonshot"));
        assert!(text.contains("[grid]"));
        assert!(text.contains("[apollo1]"));
        assert!(text.contains("Apollo 7"));
        assert!(text.contains("Oct 11, 1968"));
        assert!(text.contains("q quit"));
    }

    #[test]
    fn test_list_root_renders_disclosure() {
        let mut app = app(ViewMode::List);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("[list]"));
        assert!(text.contains("Apollo 1"));
        assert!(text.contains("N/A"));
        assert!(text.contains("›"));
    }

    #[test]
    fn test_detail_page_renders_headings_and_crew() {
        let mut app = app(ViewMode::List);
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("Moonshot › Apollo 1"));
        assert!(text.contains("[apollo1]"));
        assert!(text.contains("Launched: N/A"));
        assert!(text.contains("Mission Highlights"));
        assert!(text.contains("Crew"));
        assert!(text.contains("Virgil I. \"Gus\" Grissom") || text.contains("[grissom]"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = app(ViewMode::Grid);
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
    }
}
