//! Help tab

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        section("Onglets"),
        key_line("1 Simu", "Prévision d'une expédition et lancements simulés"),
        key_line("2 Analyse", "Lecture bandée de l'écran d'expédition"),
        key_line("3 Ligue", "Récompenses hebdomadaires de classement"),
        key_line("4 Série", "Offres aléatoires résolues en masse"),
        key_line("5 Aide", "Cet écran"),
        Line::from(""),
        section("Touches"),
        key_line("Tab / Shift+Tab", "Changer d'onglet"),
        key_line("1-5", "Aller à l'onglet"),
        key_line("↑/k  ↓/j", "Changer de champ"),
        key_line("←/h  →/l", "Ajuster la valeur"),
        key_line("Entrée", "Lancer (Simu) ou simuler (Série)"),
        key_line("r", "Réinitialiser l'onglet"),
        key_line("q / Ctrl+C", "Quitter"),
        Line::from(""),
        section("Formules"),
        key_line("Risque effectif", "risque + difficulté/4 - force - amour/10"),
        key_line("Sans rations", "risque effectif x3, borné à 0-100"),
        key_line("Issues", "échec r, partiel (1-r)·r, total (1-r)²"),
        key_line("Durée réelle", "durée x (1,20 - vitesse/60)"),
        key_line("Indice (0-9)", "(durée x3 + risque + difficulté) x richesse"),
        key_line("Jetons", "indice - 1, plancher 1, x3 avec bonus"),
        key_line("Talisman", "0,5% + 0,5% par point d'indice, x10 en bonus"),
        key_line("Affinité", "aimé -5% de risque, détesté +10% sous 12h"),
        key_line("Butin", "aimé x1, neutre x0,8, détesté x0,25 (sauf jetons)"),
        key_line("Amour", "+5 total, +2 partiel, -3 échec, doublé si aimé"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Aide "));
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

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<20}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
