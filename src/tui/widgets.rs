//! Custom widgets for the game UI

use crate::game::Verdict;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// How close the evidence against one suspect is to a conviction
pub struct EvidenceMeter {
    label: String,
    value: usize,
    threshold: usize,
}

impl EvidenceMeter {
    pub fn new(label: &str, value: usize, threshold: usize) -> Self {
        Self {
            label: label.to_string(),
            value,
            threshold,
        }
    }
}

impl Widget for EvidenceMeter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 1 {
            return;
        }

        let color = if self.value >= self.threshold {
            Color::Green
        } else if self.value > 0 {
            Color::Yellow
        } else {
            Color::Red
        };

        let label = format!("{}: {} of {} needed", self.label, self.value, self.threshold);
        buf.set_string(area.x, area.y, &label, Style::default().fg(color));

        if area.height > 1 {
            let bar_y = area.y + 1;
            let inner = area.width - 2;
            // Full bar means the threshold is met; extra clues overflow nowhere.
            let filled = if self.threshold == 0 {
                inner
            } else {
                (self.value.min(self.threshold) * inner as usize / self.threshold) as u16
            };

            buf.set_string(area.x, bar_y, "[", Style::default());
            buf.set_string(area.x + area.width - 1, bar_y, "]", Style::default());
            for x in 0..filled {
                buf.set_string(area.x + 1 + x, bar_y, "█", Style::default().fg(color));
            }
            for x in filled..inner {
                buf.set_string(area.x + 1 + x, bar_y, "░", Style::default().fg(Color::DarkGray));
            }
        }
    }
}

/// Double-bordered box announcing the verdict
pub struct VerdictBox {
    verdict: Verdict,
    lines: Vec<String>,
}

impl VerdictBox {
    pub fn new(verdict: Verdict) -> Self {
        Self {
            verdict,
            lines: Vec::new(),
        }
    }

    pub fn lines(mut self, lines: Vec<String>) -> Self {
        self.lines = lines;
        self
    }
}

impl Widget for VerdictBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        let color = if self.verdict.is_guilty() { Color::Green } else { Color::Red };
        let style = Style::default().fg(color);
        let right = area.x + area.width - 1;
        let bottom = area.y + area.height - 1;

        for x in area.x + 1..right {
            buf.set_string(x, area.y, "═", style);
            buf.set_string(x, bottom, "═", style);
        }
        for y in area.y + 1..bottom {
            buf.set_string(area.x, y, "║", style);
            buf.set_string(right, y, "║", style);
        }
        buf.set_string(area.x, area.y, "╔", style);
        buf.set_string(right, area.y, "╗", style);
        buf.set_string(area.x, bottom, "╚", style);
        buf.set_string(right, bottom, "╝", style);

        let title = format!(" {} ", self.verdict);
        let title_x = area.x + (area.width.saturating_sub(title.chars().count() as u16)) / 2;
        buf.set_string(title_x, area.y, &title, style.add_modifier(Modifier::BOLD));

        for (i, line) in self.lines.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= bottom {
                break;
            }
            buf.set_stringn(area.x + 2, y, line, (area.width - 4) as usize, Style::default().fg(Color::White));
        }
    }
}
