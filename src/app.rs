use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use std::time::{Duration, Instant};

use crate::animation::{Entrance, Transition};
use crate::config::{AppConfig, RevealTrigger};
use crate::content::{GLOSSARY, STEPS};
use crate::ui::layout::ScreenLayout;

/// Status messages clear after this long
const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

/// Glossary cards per row
pub const GLOSSARY_COLUMNS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Steps,
    Languages,
    Glossary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Help,
}

pub struct App {
    // View state
    pub active_step: Option<usize>,
    pub expanded_term: Option<usize>,
    pub dark_mode: bool,

    // Interaction model
    pub reveal: RevealTrigger,
    pub entrance: Entrance,
    pub nerd_font: bool,
    transition_duration: Duration,
    pub step_transition: Option<Transition>,
    pub term_transition: Option<Transition>,

    // Keyboard focus
    pub section: Section,
    pub popup: Popup,
    pub selected_step: usize,
    pub selected_term: usize,
    pub language_scroll: u16,

    // Step card currently under the mouse pointer
    pointer_step: Option<usize>,

    // Status message (shown in footer, auto-clears after timeout)
    pub status_message: Option<String>,
    pub status_message_time: Option<Instant>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            active_step: None,
            expanded_term: None,
            dark_mode: config.dark_mode,

            reveal: config.reveal,
            entrance: config.entrance,
            nerd_font: config.nerd_font,
            transition_duration: Duration::from_millis(config.transition_ms),
            step_transition: None,
            term_transition: None,

            section: Section::Steps,
            popup: Popup::None,
            selected_step: 0,
            selected_term: 0,
            language_scroll: 0,

            pointer_step: None,

            status_message: None,
            status_message_time: None,
        }
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_message_time = Some(Instant::now());
    }

    fn start_transition(&self) -> Option<Transition> {
        match self.entrance {
            Entrance::Ease => Some(Transition::start(Instant::now(), self.transition_duration)),
            Entrance::None => None,
        }
    }

    pub fn on_step_hover_enter(&mut self, index: usize) {
        if index >= STEPS.len() {
            tracing::debug!("Ignoring hover on step {}", index);
            return;
        }
        if self.active_step != Some(index) {
            tracing::debug!("Step {} active", index);
            self.active_step = Some(index);
            self.step_transition = self.start_transition();
        }
    }

    pub fn on_step_hover_leave(&mut self) {
        tracing::debug!("Step hover leave");
        self.active_step = None;
    }

    /// Accordion toggle of the active step, the click reveal trigger
    pub fn on_step_click(&mut self, index: usize) {
        if index >= STEPS.len() {
            tracing::debug!("Ignoring click on step {}", index);
            return;
        }
        if self.active_step == Some(index) {
            self.active_step = None;
        } else {
            self.active_step = Some(index);
            self.step_transition = self.start_transition();
        }
        tracing::debug!("Step click {} -> {:?}", index, self.active_step);
    }

    pub fn on_glossary_click(&mut self, index: usize) {
        if index >= GLOSSARY.len() {
            tracing::debug!("Ignoring click on glossary entry {}", index);
            return;
        }
        if self.expanded_term == Some(index) {
            self.expanded_term = None;
        } else {
            self.expanded_term = Some(index);
            self.term_transition = self.start_transition();
        }
        tracing::debug!("Glossary click {} -> {:?}", index, self.expanded_term);
    }

    pub fn on_theme_toggle(&mut self) {
        self.dark_mode = !self.dark_mode;
        tracing::debug!("Dark mode: {}", self.dark_mode);
    }

    fn emphasis(&self, transition: Option<Transition>, now: Instant) -> f32 {
        match (self.entrance, transition) {
            (Entrance::Ease, Some(transition)) => transition.progress(now),
            _ => 1.0,
        }
    }

    /// Emphasis of the active step card, `0.0..=1.0`
    pub fn step_emphasis(&self, now: Instant) -> f32 {
        self.emphasis(self.step_transition, now)
    }

    /// Emphasis of the expanded glossary card, `0.0..=1.0`
    pub fn term_emphasis(&self, now: Instant) -> f32 {
        self.emphasis(self.term_transition, now)
    }

    pub fn is_animating(&self) -> bool {
        self.step_transition.is_some() || self.term_transition.is_some()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.popup != Popup::None {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Enter | KeyCode::Char('q')) {
                self.popup = Popup::None;
            }
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.section = match self.section {
                    Section::Steps => Section::Languages,
                    Section::Languages => Section::Glossary,
                    Section::Glossary => Section::Steps,
                };
            }
            KeyCode::BackTab => {
                self.section = match self.section {
                    Section::Steps => Section::Glossary,
                    Section::Languages => Section::Steps,
                    Section::Glossary => Section::Languages,
                };
            }

            KeyCode::Char('j') | KeyCode::Down => self.move_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_up(),
            KeyCode::Char('l') | KeyCode::Right => self.move_term(1),
            KeyCode::Left => self.move_term(GLOSSARY.len() - 1),

            KeyCode::Char(' ') | KeyCode::Enter => match self.section {
                Section::Steps => self.on_step_click(self.selected_step),
                Section::Glossary => self.on_glossary_click(self.selected_term),
                Section::Languages => {}
            },

            KeyCode::Esc => match self.section {
                Section::Steps => self.on_step_hover_leave(),
                Section::Glossary => self.expanded_term = None,
                Section::Languages => self.language_scroll = 0,
            },

            KeyCode::Char('t') => self.on_theme_toggle(),

            KeyCode::Char('m') => {
                self.reveal = match self.reveal {
                    RevealTrigger::Hover => RevealTrigger::Click,
                    RevealTrigger::Click => RevealTrigger::Hover,
                };
                let mode = match self.reveal {
                    RevealTrigger::Hover => "hover",
                    RevealTrigger::Click => "click",
                };
                self.set_status(format!("Step details reveal on {}", mode));
            }

            KeyCode::Char('a') => {
                self.entrance = match self.entrance {
                    Entrance::None => Entrance::Ease,
                    Entrance::Ease => Entrance::None,
                };
                if self.entrance == Entrance::None {
                    self.step_transition = None;
                    self.term_transition = None;
                }
                let state = if self.entrance == Entrance::Ease { "on" } else { "off" };
                self.set_status(format!("Animation {}", state));
            }

            KeyCode::Char('?') | KeyCode::Char('h') => self.popup = Popup::Help,

            _ => {}
        }
    }

    fn move_down(&mut self) {
        match self.section {
            Section::Steps => {
                self.selected_step = (self.selected_step + 1) % STEPS.len();
                self.cursor_moved();
            }
            Section::Languages => {
                let max = crate::ui::language_line_count().saturating_sub(1);
                self.language_scroll = (self.language_scroll + 1).min(max);
            }
            Section::Glossary => self.move_term(GLOSSARY_COLUMNS),
        }
    }

    fn move_up(&mut self) {
        match self.section {
            Section::Steps => {
                self.selected_step = (self.selected_step + STEPS.len() - 1) % STEPS.len();
                self.cursor_moved();
            }
            Section::Languages => self.language_scroll = self.language_scroll.saturating_sub(1),
            Section::Glossary => self.move_term(GLOSSARY.len() - GLOSSARY_COLUMNS),
        }
    }

    /// Step cursor movement counts as hovering the step in hover mode
    fn cursor_moved(&mut self) {
        if self.reveal == RevealTrigger::Hover {
            self.on_step_hover_enter(self.selected_step);
        }
    }

    fn move_term(&mut self, offset: usize) {
        if self.section == Section::Glossary {
            self.selected_term = (self.selected_term + offset) % GLOSSARY.len();
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, layout: &ScreenLayout) {
        if self.popup != Popup::None {
            if let MouseEventKind::Down(_) = mouse.kind {
                self.popup = Popup::None;
            }
            return;
        }

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let under = layout.step_at(mouse.column, mouse.row);
                if self.reveal == RevealTrigger::Hover {
                    match under {
                        Some(i) => {
                            self.section = Section::Steps;
                            self.selected_step = i;
                            self.on_step_hover_enter(i);
                        }
                        None if self.pointer_step.is_some() => self.on_step_hover_leave(),
                        None => {}
                    }
                }
                self.pointer_step = under;
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if layout.theme_button_at(mouse.column, mouse.row) {
                    self.on_theme_toggle();
                } else if let Some(i) = layout.step_at(mouse.column, mouse.row) {
                    self.section = Section::Steps;
                    self.selected_step = i;
                    match self.reveal {
                        RevealTrigger::Click => self.on_step_click(i),
                        RevealTrigger::Hover => self.on_step_hover_enter(i),
                    }
                } else if let Some(j) = layout.term_at(mouse.column, mouse.row) {
                    self.section = Section::Glossary;
                    self.selected_term = j;
                    self.on_glossary_click(j);
                }
            }
            MouseEventKind::ScrollDown if layout.languages_at(mouse.column, mouse.row) => {
                let max = crate::ui::language_line_count().saturating_sub(1);
                self.language_scroll = (self.language_scroll + 1).min(max);
            }
            MouseEventKind::ScrollUp if layout.languages_at(mouse.column, mouse.row) => {
                self.language_scroll = self.language_scroll.saturating_sub(1);
            }
            _ => {}
        }
    }

    pub fn tick(&mut self, now: Instant) {
        for slot in [&mut self.step_transition, &mut self.term_transition] {
            if slot.is_some_and(|t| t.is_finished(now)) {
                *slot = None;
            }
        }

        if let Some(time) = self.status_message_time {
            if now.saturating_duration_since(time) >= STATUS_TIMEOUT {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }
}
