mod components;
pub mod layout;

use std::sync::OnceLock;
use std::time::Instant;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::animation::blend;
use crate::app::{App, Popup, Section};
use crate::config::RevealTrigger;
use crate::content::{COMPARISON, GLOSSARY, LANGUAGE_CATEGORIES, STEPS, TITLE};
use crate::theme::Theme;
use layout::ScreenLayout;

// Both presets are built once and picked per frame
static DARK: OnceLock<Theme> = OnceLock::new();
static LIGHT: OnceLock<Theme> = OnceLock::new();

fn theme(dark_mode: bool) -> &'static Theme {
    if dark_mode {
        DARK.get_or_init(Theme::dark)
    } else {
        LIGHT.get_or_init(Theme::light)
    }
}

/// Lines in the language panel, for scroll clamping.
/// Must agree with `components::category_lines`.
pub fn language_line_count() -> u16 {
    LANGUAGE_CATEGORIES
        .iter()
        .map(|category| 1 + category.languages.len() * components::LINES_PER_LANGUAGE)
        .sum::<usize>() as u16
}

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let theme = theme(app.dark_mode);
    let layout = ScreenLayout::compute(area, app);
    let now = Instant::now();

    f.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.text)),
        area,
    );

    draw_title(f, app, theme, &layout);
    draw_steps(f, app, theme, &layout, app.step_emphasis(now));
    draw_languages(f, app, theme, &layout);
    draw_comparison(f, theme, &layout);
    draw_glossary(f, app, theme, &layout, app.term_emphasis(now));
    draw_footer(f, app, theme, layout.footer);

    if app.popup == Popup::Help {
        draw_help_popup(f, theme);
    }
}

fn panel_block(title: &'static str, title_color: ratatui::style::Color, theme: &Theme, focused: bool) -> Block<'static> {
    let border_color = if focused { title_color } else { theme.inactive };
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(title_color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.panel))
}

fn draw_title(f: &mut Frame, app: &App, theme: &Theme, layout: &ScreenLayout) {
    // Blue to purple gradient, one color step per character
    let len = TITLE.chars().count().max(2) - 1;
    let spans: Vec<Span> = TITLE
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let color = blend(theme.title_from, theme.title_to, i as f32 / len as f32);
            Span::styled(c.to_string(), Style::default().fg(color).add_modifier(Modifier::BOLD))
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), layout.title);

    let icon = if app.dark_mode { "☀" } else { "☾" };
    let button = Paragraph::new(format!("[ {} ]", icon))
        .style(Style::default().fg(theme.text).bg(theme.button))
        .alignment(Alignment::Center);
    f.render_widget(button, layout.theme_button);
}

fn draw_steps(f: &mut Frame, app: &App, theme: &Theme, layout: &ScreenLayout, emphasis: f32) {
    let focused = app.section == Section::Steps;
    f.render_widget(panel_block("Programming Steps", theme.steps_heading, theme, focused), layout.steps);

    for (i, (step, card)) in STEPS.iter().zip(&layout.step_cards).enumerate() {
        if card.height == 0 {
            continue;
        }
        let active = app.active_step == Some(i);
        let block = components::card_block(
            theme,
            theme.content_color(step.color),
            active,
            focused && app.selected_step == i,
            emphasis,
        );
        let lines = components::step_lines(step, theme, app.nerd_font, active);
        f.render_widget(Paragraph::new(lines).block(block), *card);
    }
}

fn draw_languages(f: &mut Frame, app: &App, theme: &Theme, layout: &ScreenLayout) {
    let focused = app.section == Section::Languages;
    let block = panel_block("Choosing the Right Language", theme.languages_heading, theme, focused);
    let content = Paragraph::new(components::category_lines(LANGUAGE_CATEGORIES, theme))
        .block(block)
        .scroll((app.language_scroll, 0));
    f.render_widget(content, layout.languages);
}

fn draw_comparison(f: &mut Frame, theme: &Theme, layout: &ScreenLayout) {
    for (panel, area) in COMPARISON.iter().zip(&layout.comparison) {
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", panel.title),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.content_color(panel.color)))
            .style(Style::default().bg(theme.panel));
        f.render_widget(Paragraph::new(components::comparison_lines(panel, theme)).block(block), *area);
    }
}

fn draw_glossary(f: &mut Frame, app: &App, theme: &Theme, layout: &ScreenLayout, emphasis: f32) {
    let focused = app.section == Section::Glossary;
    f.render_widget(panel_block("Glossary", theme.glossary_heading, theme, focused), layout.glossary);

    for (i, (entry, card)) in GLOSSARY.iter().zip(&layout.glossary_cards).enumerate() {
        let expanded = app.expanded_term == Some(i);
        let block = components::card_block(
            theme,
            theme.term_active,
            expanded,
            focused && app.selected_term == i,
            emphasis,
        );

        let (term_style, bg) = if expanded {
            (Style::default().fg(theme.term_active).add_modifier(Modifier::BOLD), theme.panel_active)
        } else {
            (Style::default().fg(theme.text).add_modifier(Modifier::BOLD), theme.panel)
        };

        let mut lines = vec![Line::from(Span::styled(entry.term, term_style))];
        if expanded {
            lines.push(Line::from(Span::styled(entry.definition, Style::default().fg(theme.text))));
        }

        let content = Paragraph::new(lines)
            .block(block.style(Style::default().bg(bg)))
            .wrap(Wrap { trim: true });
        f.render_widget(content, *card);
    }
}

fn draw_footer(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    if let Some(ref status) = app.status_message {
        let line = Line::from(Span::styled(status.as_str(), Style::default().fg(theme.language)));
        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        return;
    }

    let select = match (app.section, app.reveal) {
        (Section::Steps, RevealTrigger::Hover) => "Hover",
        (Section::Steps, RevealTrigger::Click) => "Select",
        (Section::Languages, _) => "Scroll",
        (Section::Glossary, _) => "Select",
    };
    let hints: Vec<(&str, &str)> = vec![
        ("↑↓", select),
        ("Enter", "Toggle"),
        ("Tab", "Next"),
        ("t", "Theme"),
        ("m", "Reveal"),
        ("a", "Anim"),
        ("?", "Help"),
        ("q", "Quit"),
    ];

    let mut spans = Vec::new();
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(theme.inactive)));
        }
        spans.push(Span::styled(*key, Style::default().fg(theme.category)));
        spans.push(Span::styled(format!(" {}", label), Style::default().fg(theme.text_dim)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}

fn draw_help_popup(f: &mut Frame, theme: &Theme) {
    let popup_area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, popup_area);

    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", k), Style::default().fg(theme.category)),
            Span::styled(desc, Style::default().fg(theme.text)),
        ])
    };

    let help_text = vec![
        Line::from(""),
        key("Tab/S-Tab", "Move focus: steps, languages, glossary"),
        key("↑↓ j k", "Move step cursor, scroll languages, glossary rows"),
        key("← →", "Move across glossary cards"),
        key("Enter/Space", "Expand or collapse the focused card"),
        key("Esc", "Collapse the focused section"),
        key("t", "Toggle dark/light theme"),
        key("m", "Reveal step details on hover or click"),
        key("a", "Toggle card animation"),
        key("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  Mouse: hover or click cards, wheel scrolls languages",
            Style::default().fg(theme.text_dim),
        )),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(Span::styled(" devpath Help ", Style::default().fg(theme.steps_heading)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.steps_heading))
                .style(Style::default().bg(theme.panel)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 60)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        App::new(&AppConfig { nerd_font: false, ..AppConfig::default() })
    }

    #[test]
    fn test_initial_render() {
        let app = app();
        let screen = render(&app);
        assert!(screen.contains(TITLE));
        assert!(screen.contains("☀"));

        let mut last = 0;
        for step in STEPS {
            let at = screen.find(step.title).unwrap();
            assert!(at > last);
            last = at;
        }
        for entry in GLOSSARY {
            assert!(screen.contains(entry.term));
            assert!(!screen.contains(entry.definition));
        }
        assert!(!screen.contains("Define requirements"));
    }

    #[test]
    fn test_glossary_click_reveals_one_definition() {
        let mut app = app();
        app.on_glossary_click(3);
        let screen = render(&app);
        assert!(screen.contains("Reusable software environment"));
        for (i, entry) in GLOSSARY.iter().enumerate() {
            if i != 3 {
                assert!(!screen.contains(entry.definition));
            }
        }
    }

    #[test]
    fn test_active_step_shows_details() {
        let mut app = app();
        app.on_step_hover_enter(3);
        let screen = render(&app);
        assert!(screen.contains("• Performance testing"));
        assert!(!screen.contains("• Write code"));
    }

    #[test]
    fn test_languages_and_comparison() {
        let screen = render(&app());
        assert!(screen.contains("Web Development"));
        assert!(screen.contains("JavaScript"));
        assert!(screen.contains(" React "));
        assert!(screen.contains("No-Code"));
        assert!(screen.contains("Pre-built components"));
    }

    #[test]
    fn test_light_theme_button() {
        let mut app = app();
        app.on_theme_toggle();
        let screen = render(&app);
        assert!(screen.contains("☾"));
        assert!(!screen.contains("☀"));
    }

    #[test]
    fn test_help_popup() {
        let mut app = app();
        app.popup = Popup::Help;
        assert!(render(&app).contains("devpath Help"));
    }

    #[test]
    fn test_language_line_count() {
        // 3 categories, 8 languages at 5 lines each
        assert_eq!(language_line_count(), 3 + 8 * 5);
        for theme in [Theme::dark(), Theme::light()] {
            let lines = components::category_lines(LANGUAGE_CATEGORIES, &theme);
            assert_eq!(lines.len(), language_line_count() as usize);
        }
    }
}
