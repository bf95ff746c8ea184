//! Terminal User Interface
//!
//! Full-screen front end for the mansion investigation using ratatui

pub mod app;
pub mod widgets;

pub use app::App;

use crate::data::Severity;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the game
pub struct Theme {
    pub fg: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub dim: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            dim: Color::DarkGray,
            border: Color::DarkGray,
        }
    }
}

/// Get color for severity level
pub fn severity_color(severity: &Severity) -> Color {
    match severity {
        Severity::Info => Color::Gray,
        Severity::Notice => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Critical => Color::Magenta,
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// ASCII art logo
pub const LOGO: &str = r#"
╔════════════════════════════════════════════════════════╗
║                                                        ║
║   ███╗   ███╗ █████╗ ███╗   ██╗███████╗██╗ ██████╗     ║
║   ████╗ ████║██╔══██╗████╗  ██║██╔════╝██║██╔═══██╗    ║
║   ██╔████╔██║███████║██╔██╗ ██║███████╗██║██║   ██║    ║
║   ██║╚██╔╝██║██╔══██║██║╚██╗██║╚════██║██║██║   ██║    ║
║   ██║ ╚═╝ ██║██║  ██║██║ ╚████║███████║██║╚██████╔╝    ║
║   ╚═╝     ╚═╝╚═╝  ╚═╝╚═╝  ╚═══╝╚══════╝╚═╝ ╚═════╝     ║
║                                                        ║
║                 M  Y  S  T  E  R  Y                    ║
║                                                        ║
╚════════════════════════════════════════════════════════╝
"#;

/// Smaller logo for header
pub const SMALL_LOGO: &str = " MANSION MYSTERY ";

/// Help text
pub const HELP_TEXT: &str = r#"
╔═══════════════════════════════════════════╗
║                 CONTROLS                  ║
╠═══════════════════════════════════════════╣
║  ← / l   Take the left doorway            ║
║  → / r   Take the right doorway           ║
║  x / q   Leave the mansion and accuse     ║
║  ?       Toggle this help                 ║
╠═══════════════════════════════════════════╣
║               ACCUSATION                  ║
╠═══════════════════════════════════════════╣
║  Type a name, Enter to accuse             ║
║  Esc     Clear what you typed             ║
╚═══════════════════════════════════════════╝
"#;

/// Create the main layout
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Header
            Constraint::Min(10),     // Main content
            Constraint::Length(1),   // Status bar
        ])
        .split(area)
        .to_vec()
}

/// Create the game content layout (map + main area)
pub fn create_content_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),  // Mansion map
            Constraint::Percentage(65),  // Main area
        ])
        .split(area)
        .to_vec()
}

/// Create the main area layout (narrative + ledger)
pub fn create_main_area_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60),  // Narrative/messages
            Constraint::Percentage(40),  // Clue ledger
        ])
        .split(area)
        .to_vec()
}

/// A rectangle of the given size centered in `area`, clipped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
        assert_eq!(centered_rect(200, 50, area), area);
    }
}
