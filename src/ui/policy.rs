//! Privacy policy gate rendering

use crate::state::{GateButton, PolicyBlock, PolicyGate};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the policy text with the accept/decline buttons pinned below
pub fn draw(frame: &mut Frame, area: Rect, policy: &PolicyGate) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title
            Constraint::Min(3),                // Scrollable content
            Constraint::Length(BUTTON_HEIGHT), // Buttons, always visible
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        policy.title.as_str(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let content = Paragraph::new(policy_lines(&policy.content))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: false })
        .scroll((policy.scroll_offset, 0));
    frame.render_widget(content, chunks[1]);

    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    render_action_button(
        frame,
        button_chunks[0],
        &policy.accept_label,
        policy.focused == GateButton::Accept,
        true,
        Color::Green,
    );
    render_action_button(
        frame,
        button_chunks[1],
        &policy.decline_label,
        policy.focused == GateButton::Decline,
        true,
        Color::Red,
    );
}

/// Convert policy blocks into styled lines
fn policy_lines(blocks: &[PolicyBlock]) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    for block in blocks {
        match block {
            PolicyBlock::Heading(text) => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    text.as_str(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            PolicyBlock::Paragraph(text) => {
                lines.push(Line::from(text.as_str()));
                lines.push(Line::from(""));
            }
            PolicyBlock::Bullet(text) => lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::Cyan)),
                Span::raw(text.as_str()),
            ])),
            PolicyBlock::Link {
                before,
                label,
                url,
                after,
            } => {
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::raw(before.as_str()),
                    Span::styled(
                        label.as_str(),
                        Style::default()
                            .fg(Color::Blue)
                            .add_modifier(Modifier::UNDERLINED),
                    ),
                    Span::styled(format!(" <{url}>"), Style::default().fg(Color::DarkGray)),
                    Span::raw(after.as_str()),
                ]));
            }
        }
    }
    lines
}
