//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod policy;

use crate::app::App;
use crate::state::Route;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    // Draw main content based on current route
    match app.state.current_route {
        Route::Policy => policy::draw(frame, main_area, &app.state.policy),
        Route::Form => {
            if let Some(form) = &app.state.form {
                forms::draw_registration(frame, main_area, form, app.is_submitting());
            }
        }
    }

    layout::draw_status_bar(frame, status_area, app);

    // Alerts block everything else
    if let Some(message) = app.state.current_alert() {
        components::render_alert_dialog(frame, message);
    }
}
