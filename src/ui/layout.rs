//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::Route;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let route = app.state.current_route;
    let mut spans = vec![Span::styled(
        format!(" {} {} ", route.path(), route.title()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    // Submission indicator
    if app.is_submitting() {
        spans.push(Span::styled(" ⟳ ", Style::default().fg(Color::Yellow)));
    } else {
        spans.push(Span::raw(" "));
    }

    spans.push(Span::styled(
        get_route_hints(route),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " ^C:quit ";
    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let hint_width = quit_hint.len() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(hint_width),
        y: area.y,
        width: hint_width.min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current route
fn get_route_hints(route: Route) -> String {
    match route {
        Route::Policy => "j/k:scroll  Tab:switch  Enter:choose  a:accept  n:decline  q:quit".to_string(),
        Route::Form => format!(
            "Tab:next  Enter:select image  {}:submit  Esc:back",
            crate::platform::SUBMIT_SHORTCUT
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_status_line() {
        let (content, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(content.height, 23);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 23);
    }

    #[test]
    fn test_form_hints_mention_submit_shortcut() {
        assert!(get_route_hints(Route::Form).contains("Ctrl+S"));
    }
}
