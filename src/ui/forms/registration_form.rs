//! Lesson registration form rendering

use super::field_renderer::{draw_field, draw_field_with_value};
use crate::state::{
    format_size, FieldId, PreviewHandle, RegistrationForm, SubmissionStatus, BACK_BUTTON,
    BUTTONS_ROW_INDEX, IMAGE_FIELD_INDEX, MAX_IMAGE_BYTES, SUBMIT_BUTTON,
};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the registration form with preview and action panel.
///
/// `submission_pending` covers uploads started from an earlier form that
/// have not reported back yet.
pub fn draw_registration(
    frame: &mut Frame,
    area: Rect,
    form: &RegistrationForm,
    submission_pending: bool,
) {
    // Split into form (left) and side panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(34), // Preview + actions
        ])
        .split(area);

    draw_form_fields(frame, main_chunks[0], form);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),                        // Preview
            Constraint::Length(BUTTON_HEIGHT * 2 + 2), // Actions
        ])
        .split(main_chunks[1]);

    draw_preview_panel(frame, side_chunks[0], form.preview());
    draw_action_panel(frame, side_chunks[1], form, submission_pending);
}

/// Draw the text inputs, image path input and status message
fn draw_form_fields(frame: &mut Frame, area: Rect, form: &RegistrationForm) {
    let form_focused = !form.is_buttons_row_active();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Lesson Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Intro
            Constraint::Length(3), // Full name
            Constraint::Length(3), // Phone
            Constraint::Length(3), // Email
            Constraint::Min(4),    // Address
            Constraint::Length(3), // License number
            Constraint::Length(3), // Image path
            Constraint::Length(2), // Status message
        ])
        .margin(1)
        .split(area);

    let intro = Paragraph::new("Please fill out the form below to request your driving lesson.")
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(intro, chunks[0]);

    for (index, id) in FieldId::ALL.iter().enumerate() {
        draw_field(
            frame,
            chunks[index + 1],
            form.field(*id),
            form.active_field_index == index,
        );
    }

    let image_label = format!(
        "Upload Driver's License Image (path, max {}) *",
        format_size(MAX_IMAGE_BYTES)
    );
    draw_field_with_value(
        frame,
        chunks[6],
        &image_label,
        form.image_path.as_text(),
        form.active_field_index == IMAGE_FIELD_INDEX,
        false,
    );

    draw_status_message(frame, chunks[7], form);
}

fn draw_status_message(frame: &mut Frame, area: Rect, form: &RegistrationForm) {
    let (text, color) = match form.status() {
        SubmissionStatus::Loading => ("Submitting...", Color::Yellow),
        SubmissionStatus::Success => (form.message(), Color::Green),
        SubmissionStatus::Error => (form.message(), Color::Red),
        SubmissionStatus::Idle => (form.message(), Color::Gray),
    };
    if text.is_empty() {
        return;
    }
    let message = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true });
    frame.render_widget(message, area);
}

/// Draw details of the accepted image
fn draw_preview_panel(frame: &mut Frame, area: Rect, preview: Option<&PreviewHandle>) {
    let label_style = Style::default().fg(Color::DarkGray);

    let content = match preview {
        Some(preview) => {
            let dimensions = preview
                .dimensions
                .map(|(w, h)| format!("{w} x {h}"))
                .unwrap_or_else(|| "unknown".to_string());
            vec![
                Line::from(vec![
                    Span::styled("File: ", label_style),
                    Span::styled(&preview.file_name, Style::default().fg(Color::Cyan)),
                ]),
                Line::from(vec![
                    Span::styled("Type: ", label_style),
                    Span::raw(&preview.content_type),
                ]),
                Line::from(vec![
                    Span::styled("Size: ", label_style),
                    Span::raw(&preview.size_label),
                ]),
                Line::from(vec![
                    Span::styled("Pixels: ", label_style),
                    Span::raw(dimensions),
                ]),
                Line::from(""),
                Line::from(Span::styled(preview.url(), label_style)),
            ]
        }
        None => vec![
            Line::from(Span::styled(
                "No image selected",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Type a file path and press Enter",
                label_style,
            )),
        ],
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Preview ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Draw the Submit / Back buttons
fn draw_action_panel(
    frame: &mut Frame,
    area: Rect,
    form: &RegistrationForm,
    submission_pending: bool,
) {
    let is_focused = form.active_field_index == BUTTONS_ROW_INDEX;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit (primary)
            Constraint::Length(BUTTON_HEIGHT), // Back
            Constraint::Min(0),
        ])
        .split(inner_area);

    let can_submit = form.can_submit() && !submission_pending;
    let submit_label = if !can_submit {
        "Submitting..."
    } else {
        "Submit"
    };
    render_action_button(
        frame,
        button_chunks[0],
        submit_label,
        is_focused && form.selected_button == SUBMIT_BUTTON,
        can_submit,
        Color::Green,
    );
    render_action_button(
        frame,
        button_chunks[1],
        "Back",
        is_focused && form.selected_button == BACK_BUTTON,
        true,
        Color::Gray,
    );
}
