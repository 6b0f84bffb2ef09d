//! Screen regions, shared by the renderer and mouse hit testing

use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};

use crate::app::{App, GLOSSARY_COLUMNS};
use crate::content::{COMPARISON, GLOSSARY, STEPS};

/// Collapsed step card: border, title, border
const STEP_CARD_HEIGHT: u16 = 3;
const GLOSSARY_HEIGHT: u16 = 12;
const COMPARISON_HEIGHT: u16 = 6;
pub const THEME_BUTTON_WIDTH: u16 = 5;

#[derive(Debug, Clone, Default)]
pub struct ScreenLayout {
    pub title: Rect,
    pub theme_button: Rect,
    pub steps: Rect,
    pub step_cards: Vec<Rect>,
    pub languages: Rect,
    pub comparison: Vec<Rect>,
    pub glossary: Rect,
    pub glossary_cards: Vec<Rect>,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect, app: &App) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),               // Title + theme button
                Constraint::Min(STEP_CARD_HEIGHT),   // Steps | Languages
                Constraint::Length(GLOSSARY_HEIGHT), // Glossary grid
                Constraint::Length(1),               // Footer
            ])
            .split(area);

        let title = rows[0];
        let button_width = THEME_BUTTON_WIDTH.min(title.width);
        let theme_button = Rect::new(title.right() - button_width, title.y, button_width, title.height);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[1]);
        let steps = columns[0];

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(COMPARISON_HEIGHT)])
            .split(columns[1]);
        let languages = right[0];
        let comparison = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, COMPARISON.len() as u32); COMPARISON.len()])
            .split(right[1])
            .to_vec();

        let glossary = rows[2];

        Self {
            title,
            theme_button,
            steps,
            step_cards: step_cards(steps, app.active_step),
            languages,
            comparison,
            glossary,
            glossary_cards: glossary_cards(glossary),
            footer: rows[3],
        }
    }

    pub fn step_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.step_cards.iter().position(|r| r.contains(pos))
    }

    pub fn term_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.glossary_cards.iter().position(|r| r.contains(pos))
    }

    pub fn theme_button_at(&self, column: u16, row: u16) -> bool {
        self.theme_button.contains(Position::new(column, row))
    }

    pub fn languages_at(&self, column: u16, row: u16) -> bool {
        self.languages.contains(Position::new(column, row))
    }
}

/// Cards stack top to bottom; the active one grows by its detail list.
/// Cards pushed past the panel bottom are clipped to nothing.
fn step_cards(panel: Rect, active: Option<usize>) -> Vec<Rect> {
    let inner = panel.inner(Margin { horizontal: 1, vertical: 1 });
    let mut y = inner.y;

    STEPS
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let height = if active == Some(i) {
                STEP_CARD_HEIGHT + step.details.len() as u16
            } else {
                STEP_CARD_HEIGHT
            };
            let card = Rect::new(inner.x, y.min(inner.bottom()), inner.width, height).intersection(inner);
            y = y.saturating_add(height);
            card
        })
        .collect()
}

fn glossary_cards(panel: Rect) -> Vec<Rect> {
    let inner = panel.inner(Margin { horizontal: 1, vertical: 1 });
    let row_count = GLOSSARY.len().div_ceil(GLOSSARY_COLUMNS);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, row_count as u32); row_count])
        .split(inner);

    rows.iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, GLOSSARY_COLUMNS as u32); GLOSSARY_COLUMNS])
                .split(*row)
                .to_vec()
        })
        .take(GLOSSARY.len())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_cards_present_and_ordered() {
        let app = App::new(&AppConfig::default());
        let layout = ScreenLayout::compute(Rect::new(0, 0, 160, 60), &app);
        assert_eq!(layout.step_cards.len(), STEPS.len());
        assert_eq!(layout.glossary_cards.len(), GLOSSARY.len());
        for pair in layout.step_cards.windows(2) {
            assert_eq!(pair[0].bottom(), pair[1].y);
        }
        assert_eq!(layout.glossary_cards[0].y, layout.glossary_cards[3].y);
        assert!(layout.glossary_cards[4].y > layout.glossary_cards[0].y);
    }

    #[test]
    fn test_active_card_grows() {
        let mut app = App::new(&AppConfig::default());
        app.on_step_hover_enter(1);
        let layout = ScreenLayout::compute(Rect::new(0, 0, 160, 60), &app);
        assert_eq!(layout.step_cards[0].height, STEP_CARD_HEIGHT);
        assert_eq!(layout.step_cards[1].height, STEP_CARD_HEIGHT + 4);
    }

    #[test]
    fn test_hit_testing() {
        let app = App::new(&AppConfig::default());
        let layout = ScreenLayout::compute(Rect::new(0, 0, 160, 60), &app);
        let card = layout.step_cards[4];
        assert_eq!(layout.step_at(card.x, card.y), Some(4));
        let term = layout.glossary_cards[6];
        assert_eq!(layout.term_at(term.x + 1, term.y + 1), Some(6));
        assert_eq!(layout.step_at(0, 0), None);
        assert!(layout.theme_button_at(159, 0));
        assert!(!layout.theme_button_at(0, 0));
    }

    #[test]
    fn test_tiny_terminal_clips_cards() {
        let app = App::new(&AppConfig::default());
        let layout = ScreenLayout::compute(Rect::new(0, 0, 40, 10), &app);
        assert!(layout.step_cards.iter().all(|r| r.bottom() <= layout.steps.bottom()));
    }

    #[test]
    fn test_clipped_cards_are_empty_and_unhittable() {
        let panel = Rect::new(0, 1, 40, 5);
        let cards = step_cards(panel, Some(0));
        let inner_bottom = panel.bottom() - 1;
        assert_eq!(cards[0].height, 3);
        for card in &cards[1..] {
            assert_eq!(card.height, 0);
            assert!(card.y <= inner_bottom);
        }
        let layout = ScreenLayout { step_cards: cards, ..ScreenLayout::default() };
        assert_eq!(layout.step_at(1, inner_bottom), None);
    }
}
