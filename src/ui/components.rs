//! Card and chip helpers used by the panels in mod.rs

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

use crate::animation::blend;
use crate::content::{ComparisonPanel, Language, LanguageCategory, Step};
use crate::theme::Theme;

/// Border for a card: thick and eased toward `accent` when active,
/// brighter when it has keyboard focus, plain otherwise.
pub fn card_block(theme: &Theme, accent: Color, active: bool, focused: bool, emphasis: f32) -> Block<'static> {
    let (border_type, border_color) = if active {
        (BorderType::Thick, blend(theme.inactive, accent, emphasis))
    } else if focused {
        (BorderType::Rounded, theme.text_dim)
    } else {
        (BorderType::Rounded, theme.inactive)
    };

    Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color))
}

pub fn step_lines(step: &Step, theme: &Theme, nerd_font: bool, active: bool) -> Vec<Line<'static>> {
    let color = theme.content_color(step.color);
    let mut lines = vec![Line::from(vec![
        Span::styled(step.glyph.symbol(nerd_font), Style::default().fg(color)),
        Span::raw(" "),
        Span::styled(step.title, Style::default().fg(theme.text).add_modifier(Modifier::BOLD)),
    ])];

    if active {
        lines.extend(step.details.iter().map(|detail| {
            Line::from(Span::styled(format!("  • {}", detail), Style::default().fg(theme.text_dim)))
        }));
    }

    lines
}

/// Rounded-pill spans, one per item
pub fn chips(items: &[&'static str], theme: &Theme, bg: Color) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(items.len() * 2);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {} ", item), Style::default().fg(theme.text).bg(bg)));
    }
    spans
}

/// Name, use cases, frameworks, strengths, and a blank separator
pub const LINES_PER_LANGUAGE: usize = 5;

fn language_lines(language: &Language, theme: &Theme) -> Vec<Line<'static>> {
    let label = Style::default().fg(theme.label).add_modifier(Modifier::BOLD);

    let mut frameworks = vec![Span::styled("  Popular Frameworks: ", label)];
    frameworks.extend(chips(language.frameworks, theme, theme.chip));

    let mut strengths = vec![Span::styled("  Key Strengths: ", label)];
    strengths.extend(chips(language.strengths, theme, theme.panel));

    vec![
        Line::from(Span::styled(
            format!("  {}", language.name),
            Style::default().fg(theme.language).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("  Use Cases: ", label),
            Span::styled(language.uses.join(", "), Style::default().fg(theme.text_dim)),
        ]),
        Line::from(frameworks),
        Line::from(strengths),
    ]
}

pub fn category_lines(categories: &[LanguageCategory], theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for category in categories {
        lines.push(Line::from(Span::styled(
            category.name,
            Style::default().fg(theme.category).add_modifier(Modifier::BOLD),
        )));
        for language in category.languages {
            lines.extend(language_lines(language, theme));
            lines.push(Line::from(""));
        }
    }
    lines
}

pub fn comparison_lines(panel: &ComparisonPanel, theme: &Theme) -> Vec<Line<'static>> {
    let bullet = Style::default().fg(theme.content_color(panel.color));
    panel
        .points
        .iter()
        .map(|point| {
            Line::from(vec![
                Span::styled("● ", bullet),
                Span::styled(*point, Style::default().fg(theme.text)),
            ])
        })
        .collect()
}
