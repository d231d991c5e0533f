//! Analyzer tab: best/average/worst scenarios from banded readings

use crate::app::{App, AnalyzerField};
use companion_core::analyze::Scenario;
use companion_core::format_duration;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(42), Constraint::Min(0)])
        .split(area);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Min(0),
            Constraint::Length(6),
        ])
        .split(chunks[1]);

    draw_form(f, app, chunks[0]);
    draw_reading(f, app, right[0]);
    draw_scenarios(f, app, right[1]);
    draw_consistency(f, app, right[2]);
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let inputs = &app.ana_inputs;
    let mut lines = Vec::new();

    for (i, field) in AnalyzerField::all().iter().enumerate() {
        let value = match field {
            AnalyzerField::Risk => {
                let (lo, hi) = inputs.risk_level.range();
                format!("{} ({:.0}-{:.0}%)", inputs.risk_level.name(), lo, hi)
            }
            AnalyzerField::Difficulty => {
                let (lo, hi) = inputs.difficulty_level.range();
                format!("{} ({:.0}-{:.0}%)", inputs.difficulty_level.name(), lo, hi)
            }
            AnalyzerField::Reward => {
                let (lo, hi) = inputs.reward_level.range();
                format!("{} ({}-{})", inputs.reward_level.name(), lo, hi)
            }
            AnalyzerField::Food => format!("{}/9", inputs.food_index),
            AnalyzerField::Duration => format_duration(inputs.duration_minutes),
            AnalyzerField::Terrain => {
                format!("{} {}", inputs.terrain.emoji(), inputs.terrain.name())
            }
            AnalyzerField::Pet => app.ana_pet_name(),
            AnalyzerField::Love => format!("{:.0}/110", inputs.love_points),
            AnalyzerField::TalismanBonus => oui_non(inputs.talisman_bonus),
        };
        lines.push(super::field_line(field.name(), value, i == app.ana_field));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "  Force {:.0}   Vitesse {:.0}",
            inputs.pet_force, inputs.pet_speed
        ),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "  Richesse cachée : jetons comptés à zéro.",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Écran d'expédition "),
    );
    f.render_widget(paragraph, area);
}

fn draw_reading(f: &mut Frame, app: &App, area: Rect) {
    let analysis = &app.analysis;
    let partial = analysis.rewards.partial();

    let talisman_style = |active: bool| {
        if active {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Indice rations ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}/9", analysis.food_index),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Raretés ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!(
                    "{} – {}",
                    analysis.rarity_range.min.name(),
                    analysis.rarity_range.max.name()
                ),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Durée réelle ", Style::default().fg(Color::Gray)),
            Span::styled(
                format_duration(analysis.effective_duration),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("  (vitesse ×{:.2})", analysis.speed_modifier),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "💰 {}   ⭐ {}   🏅 {}",
                analysis.rewards.money, analysis.rewards.experience, analysis.rewards.points
            ),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!(
                "moitié si partiel : 💰 {}   ⭐ {}   🏅 {}",
                partial.money, partial.experience, partial.points
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled("🧬 Talisman ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:.2}% de base", analysis.base_talisman_chance),
                talisman_style(!app.ana_inputs.talisman_bonus),
            ),
            Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.2}% avec bonus", analysis.bonus_talisman_chance),
                talisman_style(app.ana_inputs.talisman_bonus),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Lecture "))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_scenarios(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    scenario_panel(f, " Meilleur cas ", &app.analysis.best, columns[0]);
    scenario_panel(f, " Cas moyen ", &app.analysis.average, columns[1]);
    scenario_panel(f, " Pire cas ", &app.analysis.worst, columns[2]);
}

fn scenario_panel(f: &mut Frame, title: &str, scenario: &Scenario, area: Rect) {
    let grade = scenario.score.grade();
    let lines = vec![
        Line::from(Span::styled(
            format!(
                "Danger {:.0}%  Difficulté {:.0}%",
                scenario.risk_rate, scenario.difficulty
            ),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled("Risque effectif ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:.1}%", scenario.effective_risk),
                Style::default()
                    .fg(super::risk_color(scenario.effective_risk))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        rate_line("✨", scenario.rates.total_success, Color::Green),
        rate_line("⚠️", scenario.rates.partial_success, Color::Yellow),
        rate_line("❌", scenario.rates.failure, Color::Red),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                super::bar_string(scenario.score.score, 12),
                Style::default().fg(super::grade_color(grade)),
            ),
            Span::styled(
                format!(" {:.2} {}", scenario.score.score, grade.emoji()),
                Style::default()
                    .fg(super::grade_color(grade))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            grade.label(),
            Style::default().fg(super::grade_color(grade)),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(paragraph, area);
}

fn draw_consistency(f: &mut Frame, app: &App, area: Rect) {
    let report = &app.analysis.consistency;

    let lines = vec![
        check_line(
            report.food_matches_reward_band,
            "Rations dans la catégorie annoncée".to_string(),
        ),
        check_line(
            report.estimate_matches_food,
            format!(
                "Indice estimé {} pour {} affiché",
                report.estimated_index, app.analysis.food_index
            ),
        ),
        Line::from(Span::styled(
            format!(
                "scores : durée {:.2} · risque {:.2} · difficulté {:.2}",
                report.duration_score, report.risk_score, report.difficulty_score
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Cohérence "));
    f.render_widget(paragraph, area);
}

fn rate_line(label: &str, percent: f64, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {} ", label), Style::default().fg(Color::Gray)),
        Span::styled(format!("{:5.1}%", percent), Style::default().fg(color)),
    ])
}

fn check_line(ok: bool, text: String) -> Line<'static> {
    let (mark, color) = if ok {
        ("✓", Color::Green)
    } else {
        ("✗", Color::Red)
    };
    Line::from(vec![
        Span::styled(
            format!("{} ", mark),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(text, Style::default().fg(Color::White)),
    ])
}

fn oui_non(flag: bool) -> String {
    if flag { "Oui" } else { "Non" }.to_string()
}
