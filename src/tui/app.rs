//! Main application state and rendering

use crate::game::{Command, Game, GamePhase, GUILT_THRESHOLD};
use crate::tui::widgets::{EvidenceMeter, VerdictBox};
use crate::tui::{centered_rect, severity_color, styled_block, Theme, HELP_TEXT, LOGO, SMALL_LOGO};
use crate::tui::{create_content_layout, create_main_area_layout, create_main_layout};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

/// Application state
pub struct App {
    pub game: Game,
    pub theme: Theme,
    pub running: bool,
    pub show_help: bool,
    pub current_screen: Screen,
    pub input_buffer: String,
}

/// Current screen being displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Title,
    Exploring,
    Accusing,
    Verdict,
}

impl App {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            theme: Theme::default(),
            running: true,
            show_help: false,
            current_screen: Screen::Title,
            input_buffer: String::new(),
        }
    }

    /// Handle keyboard input
    pub fn handle_input(&mut self) -> std::io::Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(self.running)
    }

    /// Apply one key press to the current screen
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.current_screen == Screen::Accusing {
            self.handle_accusation_key(key.code);
            return;
        }

        match key.code {
            KeyCode::Char('?') => {
                self.show_help = !self.show_help;
            }
            KeyCode::Esc if self.show_help => {
                self.show_help = false;
            }
            _ => match self.current_screen {
                Screen::Title => match key.code {
                    KeyCode::Enter => self.current_screen = Screen::Exploring,
                    KeyCode::Char('q') | KeyCode::Esc => self.running = false,
                    _ => {}
                },
                Screen::Exploring => {
                    let command = match key.code {
                        KeyCode::Left => Command::parse("l"),
                        KeyCode::Right => Command::parse("r"),
                        KeyCode::Esc => Command::Exit,
                        KeyCode::Char(c) => Command::parse(&c.to_string()),
                        _ => return,
                    };
                    self.game.execute(&command);
                    if self.game.phase == GamePhase::Accusing {
                        self.current_screen = Screen::Accusing;
                    }
                }
                Screen::Verdict => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => self.running = false,
                    _ => {}
                },
                Screen::Accusing => {}
            },
        }
    }

    fn handle_accusation_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                let accused = self.input_buffer.trim().to_string();
                if accused.is_empty() {
                    return;
                }
                match self.game.accuse(&accused) {
                    Ok(_) => self.current_screen = Screen::Verdict,
                    Err(err) => tracing::warn!(error = %err, "accusation rejected"),
                }
            }
            KeyCode::Esc => self.input_buffer.clear(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => self.input_buffer.push(c),
            _ => {}
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        match self.current_screen {
            Screen::Title => self.render_title(frame),
            Screen::Exploring | Screen::Accusing => self.render_game(frame),
            Screen::Verdict => self.render_verdict(frame),
        }

        // Overlay help if showing
        if self.show_help {
            self.render_help_overlay(frame);
        }
    }

    fn render_title(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Clear, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(15),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let logo = Paragraph::new(LOGO)
            .style(Style::default().fg(self.theme.accent))
            .alignment(Alignment::Center);
        frame.render_widget(logo, chunks[0]);

        let prompt = Paragraph::new(vec![
            Line::from(Span::styled(
                self.game.title.clone(),
                Style::default().fg(self.theme.warning).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Press Enter to begin, q to quit, ? for help",
                Style::default().fg(self.theme.dim),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(prompt, chunks[1]);
    }

    fn render_game(&self, frame: &mut Frame) {
        let layout = create_main_layout(frame.area());
        self.render_header(frame, layout[0]);

        let content_layout = create_content_layout(layout[1]);
        self.render_map(frame, content_layout[0]);

        let main_layout = create_main_area_layout(content_layout[1]);
        self.render_messages(frame, main_layout[0]);
        self.render_ledger(frame, main_layout[1]);

        self.render_status_bar(frame, layout[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(19),
                Constraint::Min(20),
                Constraint::Length(24),
            ])
            .split(area);

        let bordered = || Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.border));

        let logo = Paragraph::new(SMALL_LOGO)
            .style(Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD))
            .block(bordered());
        frame.render_widget(logo, header_layout[0]);

        let title = Paragraph::new(self.game.title.clone())
            .style(Style::default().fg(self.theme.warning))
            .alignment(Alignment::Center)
            .block(bordered());
        frame.render_widget(title, header_layout[1]);

        let room = Paragraph::new(format!(" {} ", self.game.current_room().name))
            .style(Style::default().fg(self.theme.fg))
            .alignment(Alignment::Right)
            .block(bordered());
        frame.render_widget(room, header_layout[2]);
    }

    fn render_map(&self, frame: &mut Frame, area: Rect) {
        let mansion = self.game.mansion();
        let navigator = self.game.navigator();
        let current = navigator.current();

        let lines: Vec<Line> = mansion
            .depth_first()
            .into_iter()
            .map(|(id, depth)| {
                let room = mansion.room(id);
                let indent = "  ".repeat(depth);
                let visited = navigator.path().contains(&id);
                let (marker, style) = if id == current {
                    ("▶ ", Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD))
                } else if visited {
                    ("· ", Style::default().fg(self.theme.fg))
                } else {
                    ("  ", Style::default().fg(self.theme.dim))
                };
                let mut spans = vec![Span::raw(indent), Span::styled(format!("{}{}", marker, room.name), style)];
                if visited && room.clue().is_some() {
                    spans.push(Span::styled(" ✦", Style::default().fg(self.theme.success)));
                }
                Line::from(spans)
            })
            .collect();

        let map = Paragraph::new(lines).block(styled_block("Mansion", &self.theme));
        frame.render_widget(map, area);
    }

    fn render_messages(&self, frame: &mut Frame, area: Rect) {
        let accusing = self.current_screen == Screen::Accusing;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),                                   // Narrative
                Constraint::Length(if accusing { 3 } else { 0 }),     // Accusation input
            ])
            .split(area);

        let visible_lines = chunks[0].height.saturating_sub(2) as usize;
        let log = &self.game.message_log;
        let start = log.len().saturating_sub(visible_lines);
        let lines: Vec<Line> = log[start..]
            .iter()
            .map(|message| {
                Line::from(vec![
                    Span::styled(
                        format!("{} ", message.severity.symbol()),
                        Style::default().fg(severity_color(&message.severity)),
                    ),
                    Span::styled(message.message.as_str(), Style::default().fg(self.theme.fg)),
                ])
            })
            .collect();

        let narrative = Paragraph::new(lines)
            .block(styled_block("Notebook", &self.theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(narrative, chunks[0]);

        if accusing {
            let suspects = self.game.index().suspects().join(", ");
            let input = Paragraph::new(format!("Accuse: {}_", self.input_buffer))
                .style(Style::default().fg(self.theme.success))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(self.theme.success))
                        .title(format!(" Suspects: {} ", suspects)),
                );
            frame.render_widget(input, chunks[1]);
        }
    }

    fn render_ledger(&self, frame: &mut Frame, area: Rect) {
        let ledger = self.game.ledger();
        let lines: Vec<Line> = if ledger.is_empty() {
            vec![Line::from(Span::styled(
                "No clues collected yet.",
                Style::default().fg(self.theme.dim),
            ))]
        } else {
            let mut lines = Vec::with_capacity(ledger.len());
            ledger.traverse_in_order(|clue| {
                lines.push(Line::from(vec![
                    Span::styled("✦ ", Style::default().fg(self.theme.success)),
                    Span::raw(clue.to_string()),
                ]));
            });
            lines
        };

        let panel = Paragraph::new(lines)
            .block(styled_block(&format!("Clue Ledger ({})", ledger.len()), &self.theme))
            .wrap(Wrap { trim: true });
        frame.render_widget(panel, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let keys = match self.current_screen {
            Screen::Accusing => "Type a name, Enter to accuse",
            _ => "←/l left  →/r right  x leave  ? help",
        };
        let status_text = format!(" {} | {} ", self.game.check_status(), keys);

        let status = Paragraph::new(status_text)
            .style(Style::default().fg(self.theme.fg).bg(Color::DarkGray));
        frame.render_widget(status, area);
    }

    fn render_verdict(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Clear, area);

        let Some(accusation) = self.game.accusation() else {
            return;
        };

        let mut lines = vec![
            format!("Accused: {}", accusation.accused),
            format!("Clues pointing at {}: {}", accusation.accused, accusation.matches),
            String::new(),
            accusation.summary(),
            String::new(),
            "Collected clues:".to_string(),
        ];
        lines.extend(self.game.clue_listing());
        lines.push(String::new());
        lines.push("Press q to leave.".to_string());

        let box_area = centered_rect(64, lines.len() as u16 + 5, area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(2)])
            .split(box_area);

        frame.render_widget(VerdictBox::new(accusation.verdict).lines(lines), chunks[0]);
        // The meter may hang off the bottom of a very short terminal
        let meter_area =
            Rect::new(chunks[1].x + 2, chunks[1].y, chunks[1].width.saturating_sub(4), 2).intersection(area);
        if !meter_area.is_empty() {
            frame.render_widget(
                EvidenceMeter::new(&accusation.accused, accusation.matches, GUILT_THRESHOLD),
                meter_area,
            );
        }
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        let popup_area = centered_rect(47, 16, frame.area());
        frame.render_widget(Clear, popup_area);

        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(self.theme.accent))
            .block(Block::default().style(Style::default().bg(Color::Black)));
        frame.render_widget(help, popup_area);
    }
}
