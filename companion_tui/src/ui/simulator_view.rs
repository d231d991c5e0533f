//! Simulator tab: live forecast and seeded expedition runs

use crate::app::{App, SimField};
use companion_core::categories::{band_name, risk_band, DIFFICULTY_BANDS, REWARD_BANDS, WEALTH_BANDS};
use companion_core::expedition::affinity_risk_adjustment;
use companion_core::format_duration;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(42), Constraint::Min(0)])
        .split(area);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(10)])
        .split(chunks[1]);

    draw_form(f, app, chunks[0]);
    draw_forecast(f, app, right[0]);
    draw_log(f, app, right[1]);
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let inputs = &app.sim_inputs;
    let mut lines = Vec::new();

    for (i, field) in SimField::all().iter().enumerate() {
        let value = match field {
            SimField::Pet => app.sim_pet_name(),
            SimField::Terrain => format!("{} {}", inputs.terrain.emoji(), inputs.terrain.name()),
            SimField::Affinity => app.sim_affinity().name().to_string(),
            SimField::Duration => format_duration(inputs.duration_minutes),
            SimField::Risk => format!("{:.0}%", inputs.risk_rate),
            SimField::Difficulty => format!(
                "{:.0}% ({})",
                inputs.difficulty,
                band_name(inputs.difficulty, &DIFFICULTY_BANDS)
            ),
            SimField::Wealth => format!(
                "{:.2} ({})",
                inputs.wealth_rate,
                band_name(inputs.wealth_rate, &WEALTH_BANDS)
            ),
            SimField::Love => format!("{:.0}/110", inputs.love_points),
            SimField::Food => oui_non(inputs.has_enough_food),
            SimField::CloneTalisman => oui_non(inputs.has_clone_talisman),
            SimField::Bonus => app.sim_bonus_name().to_string(),
        };
        lines.push(super::field_line(field.name(), value, i == app.sim_field));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Force ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:.0}", inputs.pet_force),
            Style::default().fg(Color::Gray),
        ),
        Span::styled("   Vitesse ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:.0}", inputs.pet_speed),
            Style::default().fg(Color::Gray),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        format!("  {}", inputs.terrain.description()),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Expédition "))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_forecast(f: &mut Frame, app: &App, area: Rect) {
    let plan = &app.sim_forecast;
    let affinity = app.sim_affinity();
    // The affinity shift applies to the advertised risk at launch, not here
    let shift = affinity_risk_adjustment(affinity, app.sim_inputs.duration_minutes);
    let affinity_note = if shift != 0.0 {
        format!("  (affinité {} : {:+.0}% au lancement)", affinity.name(), shift)
    } else {
        format!("  (affinité {})", affinity.name())
    };

    let band = risk_band(plan.effective_risk);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Risque effectif  ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:.1}% {} {}", plan.effective_risk, band.emoji, band.name),
                Style::default()
                    .fg(super::risk_color(plan.effective_risk))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(affinity_note, Style::default().fg(Color::DarkGray)),
        ]),
        rate_line("✨ Succès total", plan.rates.total_success, Color::Green),
        rate_line("⚠️ Succès partiel", plan.rates.partial_success, Color::Yellow),
        rate_line("❌ Échec", plan.rates.failure, Color::Red),
        rate_line("   Succès effectif", plan.rates.effective_success(), Color::Cyan),
        Line::from(""),
        section("Durée"),
        Line::from(vec![
            Span::styled("Vitesse ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("×{:.2}", plan.speed_modifier),
                Style::default().fg(Color::White),
            ),
            Span::styled("   Durée réelle ", Style::default().fg(Color::Gray)),
            Span::styled(
                format_duration(plan.effective_duration),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        section("Récompenses (succès total)"),
        Line::from(vec![
            Span::styled("Indice ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!(
                    "{}/9 ({})",
                    plan.reward_index,
                    band_name(plan.reward_index as f64, &REWARD_BANDS)
                ),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   {} rations requises", plan.food_required),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "💰 {}   ⭐ {}   🏅 {}",
                plan.rewards.money, plan.rewards.experience, plan.rewards.points
            ),
            Style::default().fg(Color::White),
        )),
        token_line(plan),
        Line::from(vec![
            Span::styled("Raretés ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!(
                    "{} {} – {} {}",
                    plan.rarity_range.min.icon(),
                    plan.rarity_range.min.name(),
                    plan.rarity_range.max.icon(),
                    plan.rarity_range.max.name()
                ),
                Style::default().fg(Color::White),
            ),
        ]),
        talisman_line(app),
        Line::from(""),
        section("Score de rentabilité"),
        Line::from(vec![
            Span::styled(
                super::bar_string(plan.score.score, 24),
                Style::default().fg(super::grade_color(plan.score.grade())),
            ),
            Span::styled(
                format!(
                    " {:.3} {} {}",
                    plan.score.score,
                    plan.score.grade().emoji(),
                    plan.score.grade().label()
                ),
                Style::default()
                    .fg(super::grade_color(plan.score.grade()))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            plan.score.explanation(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!(
                "succès {:.2} · gains {:.2} · talisman {:.2} · jetons {:.2} · temps {:.2}",
                plan.score.breakdown.success_score,
                plan.score.breakdown.reward_score,
                plan.score.breakdown.talisman_score,
                plan.score.breakdown.token_score,
                plan.score.breakdown.time_efficiency
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    for tag in &plan.score.positives {
        lines.push(Line::from(Span::styled(
            format!("  + {}", tag.message()),
            Style::default().fg(Color::Green),
        )));
    }
    for tag in &plan.score.issues {
        lines.push(Line::from(Span::styled(
            format!("  ! {}", tag.message()),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Prévision "))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_log(f: &mut Frame, app: &App, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let skip = app.sim_log.len().saturating_sub(visible);

    let items: Vec<ListItem> = app
        .sim_log
        .iter()
        .skip(skip)
        .map(|line| {
            let style = if line.starts_with("━━━") {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if line.contains("✨") {
                Style::default().fg(Color::Green)
            } else if line.contains("⚠️") {
                Style::default().fg(Color::Yellow)
            } else if line.contains("❌") {
                Style::default().fg(Color::Red)
            } else if line.contains("🧬") {
                Style::default().fg(Color::Magenta)
            } else if line.starts_with("  ") {
                Style::default().fg(Color::Gray)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(line.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Journal (Entrée pour lancer) "),
    );
    f.render_widget(list, area);
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn rate_line(label: &str, percent: f64, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<18}", label), Style::default().fg(Color::Gray)),
        Span::styled(format!("{:5.1}%", percent), Style::default().fg(color)),
    ])
}

fn token_line(plan: &companion_core::ExpeditionForecast) -> Line<'static> {
    let tokens = &plan.rewards.tokens;
    let mut spans = vec![Span::styled(
        format!(
            "🪙 {} à {} (attendu {})",
            tokens.min, tokens.max, tokens.expected
        ),
        Style::default().fg(Color::White),
    )];
    if tokens.has_bonus {
        spans.push(Span::styled(
            "  ×3 actif",
            Style::default().fg(Color::Yellow),
        ));
    }
    Line::from(spans)
}

fn talisman_line(app: &App) -> Line<'static> {
    let plan = &app.sim_forecast;
    if app.sim_inputs.has_clone_talisman {
        return Line::from(Span::styled(
            "🧬 Talisman déjà possédé, aucun tirage",
            Style::default().fg(Color::DarkGray),
        ));
    }
    let chance = if app.sim_inputs.talisman_bonus {
        plan.weighted_bonus_talisman_chance
    } else {
        plan.weighted_talisman_chance
    };
    Line::from(vec![
        Span::styled("🧬 Talisman ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:.2}% pondéré", chance),
            Style::default().fg(Color::Magenta),
        ),
    ])
}

fn oui_non(flag: bool) -> String {
    if flag { "Oui" } else { "Non" }.to_string()
}
