//! League tab: weekly ranking rewards

use crate::app::{App, LeagueField};
use companion_core::league::constants::MAX_RANK_FOR_POINTS;
use companion_core::league::rank_category;
use companion_core::types::{League, Rarity};
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

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(chunks[0]);

    draw_form(f, app, left[0]);
    draw_payout(f, app, left[1]);
    draw_rarities(f, app, chunks[1]);
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let league = League::all()[app.league_idx];

    let mut lines = Vec::new();
    for (i, field) in LeagueField::all().iter().enumerate() {
        let value = match field {
            LeagueField::League => format!("{} {}", league.emoji(), league.name()),
            LeagueField::Rank => format!("{}", app.league_rank),
        };
        lines.push(super::field_line(field.name(), value, i == app.league_field));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", rank_category(app.league_rank)),
        Style::default().fg(Color::Cyan),
    )));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Classement "));
    f.render_widget(paragraph, area);
}

fn draw_payout(f: &mut Frame, app: &App, area: Rect) {
    let reward = &app.league_reward;

    let mut lines = vec![
        payout_line("💰 Argent", reward.money),
        payout_line("⭐ Expérience", reward.experience),
        payout_line("🏅 Points", reward.points),
    ];
    if app.league_rank > MAX_RANK_FOR_POINTS {
        lines.push(Line::from(Span::styled(
            format!("  aucun point au-delà du rang {}", MAX_RANK_FOR_POINTS),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    match reward.rarity_range {
        Some((min, max)) => {
            lines.push(Line::from(vec![
                Span::styled("Objet: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{} {} – {} {}", min.icon(), min.name(), max.icon(), max.name()),
                    Style::default().fg(Color::White),
                ),
            ]));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Aucun objet pour cette ligue.",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Récompenses hebdomadaires "),
    );
    f.render_widget(paragraph, area);
}

fn draw_rarities(f: &mut Frame, app: &App, area: Rect) {
    let reward = &app.league_reward;

    let lines: Vec<Line> = if reward.rarities.is_empty() {
        vec![Line::from(Span::styled(
            "Pas de tirage d'objet à ce niveau.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        reward
            .rarities
            .iter()
            .map(|chance| {
                let color = rarity_color(chance.rarity);
                Line::from(vec![
                    Span::styled(
                        format!("{} {:<12}", chance.rarity.icon(), chance.rarity.name()),
                        Style::default().fg(color),
                    ),
                    Span::styled(
                        super::bar_string(chance.probability / 100.0, 24),
                        Style::default().fg(color),
                    ),
                    Span::styled(
                        format!(" {:5.1}%", chance.probability),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect()
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Tirage de rareté "),
    );
    f.render_widget(paragraph, area);
}

fn payout_line(label: &str, amount: u32) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<14}", label), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}", amount),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Basic => Color::DarkGray,
        Rarity::Common => Color::White,
        Rarity::Uncommon => Color::Green,
        Rarity::Exotic => Color::Cyan,
        Rarity::Rare => Color::LightBlue,
        Rarity::Special => Color::Magenta,
        Rarity::Epic => Color::LightMagenta,
        Rarity::Legendary => Color::Yellow,
        Rarity::Mythic => Color::LightYellow,
    }
}
