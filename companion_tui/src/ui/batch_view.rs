//! Batch tab: mass resolution of generated offers

use crate::app::{App, BatchField};
use companion_core::format_duration;
use companion_core::score::ScoreGrade;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(42), Constraint::Min(0)])
        .split(area);

    draw_form(f, app, chunks[0]);
    draw_report(f, app, chunks[1]);
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let class = app.batch_class();
    let (min_minutes, max_minutes) = class.range();

    let mut lines = Vec::new();
    for (i, field) in BatchField::all().iter().enumerate() {
        let value = match field {
            BatchField::Class => format!(
                "{} ({} à {})",
                class.name(),
                format_duration(min_minutes),
                format_duration(max_minutes)
            ),
            BatchField::Affinity => app.batch_affinity().name().to_string(),
            BatchField::Runs => format!("{}", app.batch_runs),
        };
        lines.push(super::field_line(field.name(), value, i == app.batch_field));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Chaque tirage propose trois offres et",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "  envoie le familier sur la mieux notée.",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "  Familier du simulateur : force {:.0}, vitesse {:.0}",
            app.sim_inputs.pet_force, app.sim_inputs.pet_speed
        ),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        format!("  amour {:.0}/110", app.sim_inputs.love_points),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Entrée lance la série.",
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Série "));
    f.render_widget(paragraph, area);
}

fn draw_report(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Résultats ");

    let Some(report) = &app.batch_report else {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "Aucune série lancée.",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        f.render_widget(placeholder, area);
        return;
    };

    let average_grade = ScoreGrade::for_score(report.average_score());

    let lines = vec![
        Line::from(vec![
            Span::styled("Expéditions résolues  ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", report.runs),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        outcome_line(
            "✨ Succès total",
            report.total_successes,
            report.success_rate(),
            Color::Green,
        ),
        outcome_line(
            "⚠️ Succès partiel",
            report.partial_successes,
            report.partial_rate(),
            Color::Yellow,
        ),
        outcome_line("❌ Échec", report.failures, report.failure_rate(), Color::Red),
        Line::from(""),
        section("Butin cumulé"),
        Line::from(Span::styled(
            format!(
                "💰 {}   ⭐ {}   🏅 {}",
                report.money, report.experience, report.points
            ),
            Style::default().fg(Color::White),
        )),
        Line::from(vec![
            Span::styled(
                format!("🪙 {}", report.tokens),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("  (moy {:.1} par expédition)", report.average_tokens()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("🧬 Talismans trouvés {}", report.talismans),
                Style::default().fg(Color::Magenta),
            ),
            Span::styled(
                format!("   ❤️ Amour cumulé {:+}", report.love_delta),
                Style::default().fg(Color::LightRed),
            ),
        ]),
        Line::from(Span::styled(
            format!("argent moyen {:.0} par expédition", report.average_money()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        section("Score moyen des offres retenues"),
        Line::from(vec![
            Span::styled(
                super::bar_string(report.average_score(), 24),
                Style::default().fg(super::grade_color(average_grade)),
            ),
            Span::styled(
                format!(
                    " {:.3} {} {}",
                    report.average_score(),
                    average_grade.emoji(),
                    average_grade.label()
                ),
                Style::default()
                    .fg(super::grade_color(average_grade))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn outcome_line(label: &str, count: u32, percent: f64, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<18}", label), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:>5}", count),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", super::bar_string(percent / 100.0, 20)),
            Style::default().fg(color),
        ),
        Span::styled(
            format!(" {:5.1}%", percent),
            Style::default().fg(color),
        ),
    ])
}
