//! Game state and match setup
//!
//! Everything the tick mutates lives here. Iteration order over enemies and
//! shots is insertion order, so a seed plus an input sequence fully
//! determines a match.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::battle_star::{Allegiance, BattleStar};
use super::boundary::BoundaryChecker;
use super::error::{Result, SimError};
use super::position::Position;
use super::shot::Shot;
use super::shot_factory::ShotKind;
use crate::settings::Settings;

/// Current phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Paused,
    /// Every enemy destroyed
    Victory,
    /// Player destroyed
    GameOver,
}

impl GamePhase {
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::Victory | GamePhase::GameOver)
    }
}

/// Things that happened during the last tick, for presentation code
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ShotFired {
        allegiance: Allegiance,
        kind: ShotKind,
    },
    /// A shot left the arena
    ShotRetired { allegiance: Allegiance },
    Hit { target_id: u32, damage: f32 },
    EnemyDestroyed { id: u32 },
    PlayerDestroyed,
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub arena: BoundaryChecker,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub score: u64,
    pub player: BattleStar,
    pub player_weapon: ShotKind,
    /// Enemies still alive
    pub enemies: Vec<BattleStar>,
    pub player_shots: Vec<Shot>,
    pub enemy_shots: Vec<Shot>,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Set up a match. Fails if the settings do not validate.
    pub fn new(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let arena = BoundaryChecker::new(settings.arena)?;

        let player_center = arena.clamp_inset(settings.player_spawn, settings.player_size / 2.0);
        let player = BattleStar::new(
            0,
            Allegiance::Player,
            player_center,
            settings.player_size,
            settings.player_health,
        )?;

        let mut state = Self {
            settings: settings.clone(),
            arena,
            phase: GamePhase::Playing,
            time_ticks: 0,
            score: 0,
            player,
            player_weapon: settings.player_weapon,
            enemies: Vec::with_capacity(settings.enemy_count as usize),
            player_shots: Vec::new(),
            enemy_shots: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(settings.seed),
            next_id: 1,
        };

        for _ in 0..settings.enemy_count {
            state.spawn_enemy()?;
        }

        log::info!(
            "Match set up: seed={}, enemies={}, arena={}x{}",
            settings.seed,
            state.enemies.len(),
            arena.width(),
            arena.height()
        );

        Ok(state)
    }

    /// Allocate a new entity ID. Fails once the ID space is exhausted.
    pub fn next_entity_id(&mut self) -> Result<u32> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or_else(|| SimError::InvalidArgument {
            name: "entity_id",
            reason: "entity id space exhausted".to_string(),
        })?;
        Ok(id)
    }

    /// Place an enemy at a seeded spot in the upper quarter of the arena
    pub fn spawn_enemy(&mut self) -> Result<u32> {
        let id = self.next_entity_id()?;
        let b = self.arena.bounds();
        let size = self.settings.enemy_size;

        let tx: f32 = self.rng.random();
        let ty: f32 = self.rng.random();
        let raw = Vec2::new(
            b.min_x + tx * self.arena.width(),
            b.min_y + ty * self.arena.height() * 0.25,
        );
        let spot = Position::from_vec2(raw).unwrap_or(self.arena.center());
        let center = self.arena.clamp_inset(spot, size / 2.0);

        let mut enemy = BattleStar::new(
            id,
            Allegiance::Enemy,
            center,
            size,
            self.settings.enemy_health,
        )?;
        enemy.fire_cooldown = self
            .rng
            .random_range(0..=self.settings.enemy_fire_interval_ticks);

        log::debug!(
            "Spawned enemy {id} at ({:.1}, {:.1})",
            center.x(),
            center.y()
        );
        self.enemies.push(enemy);
        Ok(id)
    }

    /// Switch phase, recording the change
    pub fn set_phase(&mut self, to: GamePhase) {
        if self.phase != to {
            log::info!("Phase {:?} -> {:?} at tick {}", self.phase, to, self.time_ticks);
            self.events.push(GameEvent::PhaseChanged {
                from: self.phase,
                to,
            });
            self.phase = to;
        }
    }

    /// Active shots from both sides
    pub fn shots(&self) -> impl Iterator<Item = (Allegiance, &Shot)> {
        self.player_shots
            .iter()
            .map(|s| (Allegiance::Player, s))
            .chain(self.enemy_shots.iter().map(|s| (Allegiance::Enemy, s)))
    }
}
