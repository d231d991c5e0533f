//! Application state

use companion_core::{
    analyze::{analyze_expedition, AnalyzerInputs, DifficultyLevel, ExpeditionAnalysis, RewardLevel, RiskLevel},
    expedition::constants::{
        MAX_DIFFICULTY, MAX_DURATION_MINUTES, MAX_LOVE_POINTS, MAX_RISK_RATE, MAX_WEALTH_RATE,
        MIN_DURATION_MINUTES,
    },
    expedition::{
        forecast, resolve_expedition_with_rng, DurationClass, ExpeditionBonus, ExpeditionForecast,
        ExpeditionInputs, ResolvedExpedition,
    },
    format_duration,
    league::{reward_for, LeagueReward},
    parse_duration,
    types::{League, Terrain, TerrainAffinity},
};
use companion_data::Roster;
use rand::SeedableRng;

use crate::batch::BatchReport;

/// Duration choices offered on the analyzer form
pub const DURATION_PRESETS: &[&str] = &[
    "30min", "1h", "2h", "4h", "8h", "12h", "1j", "1j 12h", "2j", "3j",
];

/// Wrap an index around a list after a left/right step
fn cycle(idx: usize, len: usize, delta: i32) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as i32;
    (((idx as i32 + delta) % len + len) % len) as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Simulator,
    Analyzer,
    League,
    Batch,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Simulator, Tab::Analyzer, Tab::League, Tab::Batch, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Simulator => "Simu",
            Tab::Analyzer => "Analyse",
            Tab::League => "Ligue",
            Tab::Batch => "Série",
            Tab::Help => "Aide",
        }
    }
}

/// Editable rows of the simulator form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimField {
    Pet,
    Terrain,
    Affinity,
    Duration,
    Risk,
    Difficulty,
    Wealth,
    Love,
    Food,
    CloneTalisman,
    Bonus,
}

impl SimField {
    pub fn all() -> &'static [SimField] {
        &[
            SimField::Pet,
            SimField::Terrain,
            SimField::Affinity,
            SimField::Duration,
            SimField::Risk,
            SimField::Difficulty,
            SimField::Wealth,
            SimField::Love,
            SimField::Food,
            SimField::CloneTalisman,
            SimField::Bonus,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SimField::Pet => "Familier",
            SimField::Terrain => "Terrain",
            SimField::Affinity => "Affinité",
            SimField::Duration => "Durée",
            SimField::Risk => "Risque affiché",
            SimField::Difficulty => "Difficulté",
            SimField::Wealth => "Richesse",
            SimField::Love => "Amour",
            SimField::Food => "Rations suffisantes",
            SimField::CloneTalisman => "Talisman de clonage",
            SimField::Bonus => "Bonus d'offre",
        }
    }
}

/// Editable rows of the analyzer form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerField {
    Risk,
    Difficulty,
    Reward,
    Food,
    Duration,
    Terrain,
    Pet,
    Love,
    TalismanBonus,
}

impl AnalyzerField {
    pub fn all() -> &'static [AnalyzerField] {
        &[
            AnalyzerField::Risk,
            AnalyzerField::Difficulty,
            AnalyzerField::Reward,
            AnalyzerField::Food,
            AnalyzerField::Duration,
            AnalyzerField::Terrain,
            AnalyzerField::Pet,
            AnalyzerField::Love,
            AnalyzerField::TalismanBonus,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnalyzerField::Risk => "Danger annoncé",
            AnalyzerField::Difficulty => "Difficulté annoncée",
            AnalyzerField::Reward => "Récompenses annoncées",
            AnalyzerField::Food => "Rations affichées",
            AnalyzerField::Duration => "Durée",
            AnalyzerField::Terrain => "Terrain",
            AnalyzerField::Pet => "Familier",
            AnalyzerField::Love => "Amour",
            AnalyzerField::TalismanBonus => "Bonus talisman",
        }
    }
}

/// Editable rows of the league form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeagueField {
    League,
    Rank,
}

impl LeagueField {
    pub fn all() -> &'static [LeagueField] {
        &[LeagueField::League, LeagueField::Rank]
    }

    pub fn name(&self) -> &'static str {
        match self {
            LeagueField::League => "Ligue",
            LeagueField::Rank => "Rang",
        }
    }
}

/// Editable rows of the batch form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchField {
    Class,
    Affinity,
    Runs,
}

impl BatchField {
    pub fn all() -> &'static [BatchField] {
        &[BatchField::Class, BatchField::Affinity, BatchField::Runs]
    }

    pub fn name(&self) -> &'static str {
        match self {
            BatchField::Class => "Durée des offres",
            BatchField::Affinity => "Affinité",
            BatchField::Runs => "Expéditions",
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    pub roster: Roster,
    pub rng: rand::rngs::StdRng,
    // Simulator state
    pub sim_field: usize,
    pub sim_pet: usize,
    pub sim_affinity: usize,
    pub sim_bonus: usize,
    pub sim_inputs: ExpeditionInputs,
    pub sim_forecast: ExpeditionForecast,
    pub sim_last: Option<ResolvedExpedition>,
    pub sim_log: Vec<String>,
    // Analyzer state
    pub ana_field: usize,
    pub ana_pet: usize,
    pub ana_duration: usize,
    pub ana_inputs: AnalyzerInputs,
    pub analysis: ExpeditionAnalysis,
    // League state
    pub league_field: usize,
    pub league_idx: usize,
    pub league_rank: u32,
    pub league_reward: LeagueReward,
    // Batch state
    pub batch_field: usize,
    pub batch_class: usize,
    pub batch_affinity: usize,
    pub batch_runs: u32,
    pub batch_report: Option<BatchReport>,
}

impl App {
    pub fn new(roster: Roster) -> Self {
        let sim_inputs = ExpeditionInputs::default();
        let ana_inputs = AnalyzerInputs::default();
        let mut app = App {
            current_tab: Tab::Simulator,
            roster,
            rng: rand::rngs::StdRng::seed_from_u64(42),
            sim_field: 0,
            sim_pet: 0,
            sim_affinity: 1,
            sim_bonus: 0,
            sim_forecast: forecast(&sim_inputs),
            sim_inputs,
            sim_last: None,
            sim_log: vec!["Entrée lance une expédition.".to_string()],
            ana_field: 0,
            ana_pet: 0,
            ana_duration: 2,
            analysis: analyze_expedition(&ana_inputs),
            ana_inputs,
            league_field: 0,
            league_idx: 5,
            league_rank: 50,
            league_reward: reward_for(League::Gold, 50),
            batch_field: 0,
            batch_class: 1,
            batch_affinity: 1,
            batch_runs: 200,
            batch_report: None,
        };
        app.apply_sim_pet();
        app.apply_ana_pet();
        app.refresh_sim();
        app.refresh_ana();
        app
    }

    fn apply_sim_pet(&mut self) {
        if let Some(pet) = self.roster.pets().get(self.sim_pet) {
            self.sim_inputs.pet_force = pet.force;
            self.sim_inputs.pet_speed = pet.speed;
        }
    }

    fn apply_ana_pet(&mut self) {
        if let Some(pet) = self.roster.pets().get(self.ana_pet) {
            self.ana_inputs.pet_force = pet.force;
            self.ana_inputs.pet_speed = pet.speed;
        }
    }

    fn refresh_sim(&mut self) {
        self.sim_forecast = forecast(&self.sim_inputs);
    }

    fn refresh_ana(&mut self) {
        self.analysis = analyze_expedition(&self.ana_inputs);
    }

    fn refresh_league(&mut self) {
        self.league_reward = reward_for(League::all()[self.league_idx], self.league_rank);
    }

    /// Label shown on the simulator's pet row
    pub fn sim_pet_name(&self) -> String {
        match self.roster.pets().get(self.sim_pet) {
            Some(pet) => format!("{} {}", pet.name, pet.rarity_stars()),
            None => "Aucun familier".to_string(),
        }
    }

    /// Label shown on the analyzer's pet row
    pub fn ana_pet_name(&self) -> String {
        match self.roster.pets().get(self.ana_pet) {
            Some(pet) => format!("{} {}", pet.name, pet.rarity_stars()),
            None => "Aucun familier".to_string(),
        }
    }

    /// Label shown on the simulator's bonus row
    pub fn sim_bonus_name(&self) -> &'static str {
        match self.sim_bonus {
            1 => ExpeditionBonus::Talisman.name(),
            2 => ExpeditionBonus::Tokens.name(),
            _ => "Aucun",
        }
    }

    pub fn sim_affinity(&self) -> TerrainAffinity {
        TerrainAffinity::all()[self.sim_affinity]
    }

    pub fn batch_class(&self) -> DurationClass {
        DurationClass::all()[self.batch_class]
    }

    pub fn batch_affinity(&self) -> TerrainAffinity {
        TerrainAffinity::all()[self.batch_affinity]
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
        }
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Simulator => {
                if self.sim_field > 0 {
                    self.sim_field -= 1;
                }
            }
            Tab::Analyzer => {
                if self.ana_field > 0 {
                    self.ana_field -= 1;
                }
            }
            Tab::League => {
                if self.league_field > 0 {
                    self.league_field -= 1;
                }
            }
            Tab::Batch => {
                if self.batch_field > 0 {
                    self.batch_field -= 1;
                }
            }
            Tab::Help => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Simulator => {
                if self.sim_field < SimField::all().len() - 1 {
                    self.sim_field += 1;
                }
            }
            Tab::Analyzer => {
                if self.ana_field < AnalyzerField::all().len() - 1 {
                    self.ana_field += 1;
                }
            }
            Tab::League => {
                if self.league_field < LeagueField::all().len() - 1 {
                    self.league_field += 1;
                }
            }
            Tab::Batch => {
                if self.batch_field < BatchField::all().len() - 1 {
                    self.batch_field += 1;
                }
            }
            Tab::Help => {}
        }
    }

    pub fn on_left(&mut self) {
        self.adjust(-1);
    }

    pub fn on_right(&mut self) {
        self.adjust(1);
    }

    fn adjust(&mut self, delta: i32) {
        match self.current_tab {
            Tab::Simulator => self.adjust_simulator(delta),
            Tab::Analyzer => self.adjust_analyzer(delta),
            Tab::League => self.adjust_league(delta),
            Tab::Batch => self.adjust_batch(delta),
            Tab::Help => {}
        }
    }

    fn adjust_simulator(&mut self, delta: i32) {
        let fields = SimField::all();
        match fields[self.sim_field.min(fields.len() - 1)] {
            SimField::Pet => {
                self.sim_pet = cycle(self.sim_pet, self.roster.len(), delta);
                self.apply_sim_pet();
            }
            SimField::Terrain => {
                let terrains = Terrain::all();
                let idx = terrains
                    .iter()
                    .position(|t| *t == self.sim_inputs.terrain)
                    .unwrap_or(0);
                self.sim_inputs.terrain = terrains[cycle(idx, terrains.len(), delta)];
            }
            SimField::Affinity => {
                self.sim_affinity = cycle(self.sim_affinity, TerrainAffinity::all().len(), delta);
            }
            SimField::Duration => {
                let minutes = self.sim_inputs.duration_minutes as i64 + 10 * delta as i64;
                self.sim_inputs.duration_minutes =
                    minutes.clamp(MIN_DURATION_MINUTES as i64, MAX_DURATION_MINUTES as i64) as u32;
            }
            SimField::Risk => {
                self.sim_inputs.risk_rate =
                    (self.sim_inputs.risk_rate + 5.0 * delta as f64).clamp(0.0, MAX_RISK_RATE);
            }
            SimField::Difficulty => {
                self.sim_inputs.difficulty =
                    (self.sim_inputs.difficulty + 5.0 * delta as f64).clamp(0.0, MAX_DIFFICULTY);
            }
            SimField::Wealth => {
                self.sim_inputs.wealth_rate =
                    (self.sim_inputs.wealth_rate + 0.05 * delta as f64).clamp(0.0, MAX_WEALTH_RATE);
            }
            SimField::Love => {
                self.sim_inputs.love_points =
                    (self.sim_inputs.love_points + 5.0 * delta as f64).clamp(0.0, MAX_LOVE_POINTS);
            }
            SimField::Food => {
                self.sim_inputs.has_enough_food = !self.sim_inputs.has_enough_food;
            }
            SimField::CloneTalisman => {
                self.sim_inputs.has_clone_talisman = !self.sim_inputs.has_clone_talisman;
            }
            SimField::Bonus => {
                self.sim_bonus = cycle(self.sim_bonus, 3, delta);
                self.sim_inputs.talisman_bonus = self.sim_bonus == 1;
                self.sim_inputs.token_bonus = self.sim_bonus == 2;
            }
        }
        self.refresh_sim();
    }

    fn adjust_analyzer(&mut self, delta: i32) {
        let fields = AnalyzerField::all();
        match fields[self.ana_field.min(fields.len() - 1)] {
            AnalyzerField::Risk => {
                let levels = RiskLevel::all();
                let idx = levels
                    .iter()
                    .position(|l| *l == self.ana_inputs.risk_level)
                    .unwrap_or(0);
                self.ana_inputs.risk_level = levels[cycle(idx, levels.len(), delta)];
            }
            AnalyzerField::Difficulty => {
                let levels = DifficultyLevel::all();
                let idx = levels
                    .iter()
                    .position(|l| *l == self.ana_inputs.difficulty_level)
                    .unwrap_or(0);
                self.ana_inputs.difficulty_level = levels[cycle(idx, levels.len(), delta)];
            }
            AnalyzerField::Reward => {
                let levels = RewardLevel::all();
                let idx = levels
                    .iter()
                    .position(|l| *l == self.ana_inputs.reward_level)
                    .unwrap_or(0);
                self.ana_inputs.reward_level = levels[cycle(idx, levels.len(), delta)];
            }
            AnalyzerField::Food => {
                let idx = self.ana_inputs.food_index as i32 + delta;
                self.ana_inputs.food_index = idx.clamp(0, 9) as u8;
            }
            AnalyzerField::Duration => {
                self.ana_duration = cycle(self.ana_duration, DURATION_PRESETS.len(), delta);
                self.ana_inputs.duration_minutes =
                    parse_duration(DURATION_PRESETS[self.ana_duration]).unwrap_or(120);
            }
            AnalyzerField::Terrain => {
                let terrains = Terrain::all();
                let idx = terrains
                    .iter()
                    .position(|t| *t == self.ana_inputs.terrain)
                    .unwrap_or(0);
                self.ana_inputs.terrain = terrains[cycle(idx, terrains.len(), delta)];
            }
            AnalyzerField::Pet => {
                self.ana_pet = cycle(self.ana_pet, self.roster.len(), delta);
                self.apply_ana_pet();
            }
            AnalyzerField::Love => {
                self.ana_inputs.love_points =
                    (self.ana_inputs.love_points + 5.0 * delta as f64).clamp(0.0, MAX_LOVE_POINTS);
            }
            AnalyzerField::TalismanBonus => {
                self.ana_inputs.talisman_bonus = !self.ana_inputs.talisman_bonus;
            }
        }
        self.refresh_ana();
    }

    fn adjust_league(&mut self, delta: i32) {
        let fields = LeagueField::all();
        match fields[self.league_field.min(fields.len() - 1)] {
            LeagueField::League => {
                self.league_idx = cycle(self.league_idx, League::all().len(), delta);
            }
            LeagueField::Rank => {
                let rank = self.league_rank as i64 + delta as i64;
                self.league_rank = rank.clamp(1, 999) as u32;
            }
        }
        self.refresh_league();
    }

    fn adjust_batch(&mut self, delta: i32) {
        let fields = BatchField::all();
        match fields[self.batch_field.min(fields.len() - 1)] {
            BatchField::Class => {
                self.batch_class = cycle(self.batch_class, DurationClass::all().len(), delta);
            }
            BatchField::Affinity => {
                self.batch_affinity = cycle(self.batch_affinity, TerrainAffinity::all().len(), delta);
            }
            BatchField::Runs => {
                let runs = self.batch_runs as i64 + 50 * delta as i64;
                self.batch_runs = runs.clamp(50, 1000) as u32;
            }
        }
    }

    pub fn on_enter(&mut self) {
        match self.current_tab {
            Tab::Simulator => self.resolve_once(),
            Tab::Batch => self.run_batch(),
            _ => {}
        }
    }

    /// Roll the configured expedition once and log what came home
    pub fn resolve_once(&mut self) {
        let affinity = self.sim_affinity();
        let result = resolve_expedition_with_rng(&self.sim_inputs, affinity, &mut self.rng);

        self.sim_log.push(format!(
            "━━━ {} {} · {} ━━━",
            self.sim_inputs.terrain.emoji(),
            self.sim_inputs.terrain.name(),
            format_duration(self.sim_inputs.duration_minutes)
        ));
        self.sim_log.push(format!(
            "  {} {} (risque effectif {:.1}%)",
            result.outcome.emoji(),
            result.outcome.name(),
            result.effective_risk
        ));
        self.sim_log.push(format!(
            "  💰 {}  ⭐ {}  🏅 {}  🪙 {}",
            result.rewards.money,
            result.rewards.experience,
            result.rewards.points,
            result.rewards.tokens
        ));
        if result.talisman_dropped {
            self.sim_log.push("  🧬 Talisman de clonage trouvé !".to_string());
        }
        self.sim_log.push(format!("  ❤️ Amour {:+}", result.love_change));
        self.sim_log.push(String::new());

        // Keep log from growing too large
        while self.sim_log.len() > 200 {
            self.sim_log.remove(0);
        }

        self.sim_last = Some(result);
    }

    /// Roll a whole batch of generated offers and aggregate the results
    pub fn run_batch(&mut self) {
        let class = self.batch_class();
        let affinity = self.batch_affinity();
        let report = BatchReport::run(&self.sim_inputs, class, affinity, self.batch_runs, &mut self.rng);
        self.batch_report = Some(report);
    }

    /// Reset the current tab's form to its defaults
    pub fn reset(&mut self) {
        match self.current_tab {
            Tab::Simulator => {
                self.sim_inputs = ExpeditionInputs::default();
                self.sim_field = 0;
                self.sim_pet = 0;
                self.sim_affinity = 1;
                self.sim_bonus = 0;
                self.sim_last = None;
                self.sim_log.clear();
                self.sim_log.push("Simulation réinitialisée.".to_string());
                self.apply_sim_pet();
                self.refresh_sim();
            }
            Tab::Analyzer => {
                self.ana_inputs = AnalyzerInputs::default();
                self.ana_field = 0;
                self.ana_pet = 0;
                self.ana_duration = 2;
                self.apply_ana_pet();
                self.refresh_ana();
            }
            Tab::League => {
                self.league_field = 0;
                self.league_idx = 5;
                self.league_rank = 50;
                self.refresh_league();
            }
            Tab::Batch => {
                self.batch_field = 0;
                self.batch_class = 1;
                self.batch_affinity = 1;
                self.batch_runs = 200;
                self.batch_report = None;
            }
            Tab::Help => {}
        }
    }
}
