//! UI rendering

mod analyzer_view;
mod batch_view;
mod help_view;
mod league_view;
mod simulator_view;

use crate::app::{App, Tab};
use companion_core::score::ScoreGrade;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Simulator => simulator_view::draw(f, app, chunks[1]),
        Tab::Analyzer => analyzer_view::draw(f, app, chunks[1]),
        Tab::League => league_view::draw(f, app, chunks[1]),
        Tab::Batch => batch_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let selected = Tab::all()
        .iter()
        .position(|t| *t == app.current_tab)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Compagnon "))
        .select(selected)
        .divider("|");

    f.render_widget(tabs, area);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Simulator => vec![
            ("↑/↓", "Champ"),
            ("←/→", "Ajuster"),
            ("Entrée", "Lancer"),
            ("r", "Réinitialiser"),
        ],
        Tab::Analyzer => vec![("↑/↓", "Champ"), ("←/→", "Ajuster"), ("r", "Réinitialiser")],
        Tab::League => vec![("↑/↓", "Champ"), ("←/→", "Ajuster"), ("r", "Réinitialiser")],
        Tab::Batch => vec![
            ("↑/↓", "Champ"),
            ("←/→", "Ajuster"),
            ("Entrée", "Simuler"),
            ("r", "Réinitialiser"),
        ],
        Tab::Help => vec![],
    };

    let common_keys = vec![("Tab", "Onglet suivant"), ("?", "Aide"), ("q", "Quitter")];

    let mut spans: Vec<Span> = Vec::new();
    for (key, desc) in &tab_keys {
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }
    for (i, (key, desc)) in common_keys.iter().enumerate() {
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
        if i + 1 < common_keys.len() {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Touches "))
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Form row with a selection marker
fn field_line(name: &str, value: String, selected: bool) -> Line<'static> {
    let (marker, name_style, value_style) = if selected {
        (
            "► ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Yellow),
        )
    } else {
        (
            "  ",
            Style::default().fg(Color::Gray),
            Style::default().fg(Color::White),
        )
    };
    Line::from(vec![
        Span::styled(format!("{}{:<20}", marker, name), name_style),
        Span::styled(value, value_style),
    ])
}

/// Filled/empty gauge over a 0..=1 ratio
fn bar_string(ratio: f64, width: usize) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn grade_color(grade: ScoreGrade) -> Color {
    match grade {
        ScoreGrade::Excellent => Color::Green,
        ScoreGrade::Good => Color::LightGreen,
        ScoreGrade::Fair => Color::Yellow,
        ScoreGrade::Poor => Color::LightRed,
        ScoreGrade::Bad => Color::Red,
    }
}

/// Color band for an effective risk percentage
fn risk_color(risk: f64) -> Color {
    if risk <= 15.0 {
        Color::Green
    } else if risk <= 30.0 {
        Color::LightGreen
    } else if risk <= 50.0 {
        Color::Yellow
    } else if risk <= 70.0 {
        Color::LightRed
    } else {
        Color::Red
    }
}
