//! Fixed-step simulation tick
//!
//! Order per tick: input, firing, shot movement, boundary retirement,
//! collisions, cleanup, phase check.

use glam::Vec2;

use super::battle_star::Allegiance;
use super::boundary::BoundaryChecker;
use super::collision::{CollisionChecker, PointCollision};
use super::shot::Shot;
use super::shot_factory::ShotKind;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::ENEMY_SCORE;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Horizontal steer, clamped to -1..=1
    pub move_x: f32,
    /// Vertical steer, clamped to -1..=1
    pub move_y: f32,
    pub fire: bool,
    /// Pause toggle
    pub pause: bool,
    /// Switch the player's weapon
    pub weapon: Option<ShotKind>,
}

/// Advance the game state by one fixed step
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if input.pause {
        match state.phase {
            GamePhase::Playing => state.set_phase(GamePhase::Paused),
            GamePhase::Paused => state.set_phase(GamePhase::Playing),
            _ => {}
        }
    }
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    move_player(state, input);
    fire_player(state, input);
    fire_enemies(state);

    advance_shots(
        &mut state.player_shots,
        &state.arena,
        &mut state.events,
        Allegiance::Player,
    );
    advance_shots(
        &mut state.enemy_shots,
        &state.arena,
        &mut state.events,
        Allegiance::Enemy,
    );

    resolve_player_hits(state);
    resolve_enemy_hits(state);

    state.player_shots.retain(Shot::is_active);
    state.enemy_shots.retain(Shot::is_active);

    if state.player.is_destroyed() {
        state.set_phase(GamePhase::GameOver);
    } else if state.enemies.is_empty() {
        state.set_phase(GamePhase::Victory);
    }
}

fn move_player(state: &mut GameState, input: &TickInput) {
    if let Some(weapon) = input.weapon {
        if weapon != state.player_weapon {
            log::debug!("Player weapon -> {}", weapon.as_str());
            state.player_weapon = weapon;
        }
    }

    let steer = Vec2::new(sanitize_axis(input.move_x), sanitize_axis(input.move_y));
    if steer != Vec2::ZERO {
        let delta = steer * state.settings.player_speed;
        state.player.move_by(delta, &state.arena);
    }
}

/// NaN steer counts as no input
fn sanitize_axis(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) }
}

fn fire_player(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;
    player.fire_cooldown = player.fire_cooldown.saturating_sub(1);
    if !input.fire || player.fire_cooldown > 0 {
        return;
    }

    let kind = state.player_weapon;
    match kind.fire(player.muzzle(), Allegiance::Player.facing()) {
        Ok(shot) => {
            player.fire_cooldown = state.settings.player_fire_cooldown_ticks;
            state.player_shots.push(shot);
            state.events.push(GameEvent::ShotFired {
                allegiance: Allegiance::Player,
                kind,
            });
        }
        Err(err) => log::warn!("Player failed to fire {}: {err}", kind.as_str()),
    }
}

/// Fixed cadence, straight down, no aiming
fn fire_enemies(state: &mut GameState) {
    let kind = state.settings.enemy_weapon;
    let interval = state.settings.enemy_fire_interval_ticks;

    for enemy in state.enemies.iter_mut() {
        enemy.fire_cooldown = enemy.fire_cooldown.saturating_sub(1);
        if enemy.fire_cooldown > 0 {
            continue;
        }
        match kind.fire(enemy.muzzle(), Allegiance::Enemy.facing()) {
            Ok(shot) => {
                state.enemy_shots.push(shot);
                state.events.push(GameEvent::ShotFired {
                    allegiance: Allegiance::Enemy,
                    kind,
                });
            }
            Err(err) => log::warn!("Enemy {} failed to fire: {err}", enemy.id),
        }
        enemy.fire_cooldown = interval;
    }
}

/// Move every active shot, retiring those that leave the arena
fn advance_shots(
    shots: &mut [Shot],
    arena: &BoundaryChecker,
    events: &mut Vec<GameEvent>,
    allegiance: Allegiance,
) {
    for shot in shots.iter_mut().filter(|s| s.is_active()) {
        shot.advance();
        if shot.is_active() && arena.is_outside(shot.position()) {
            shot.deactivate();
            events.push(GameEvent::ShotRetired { allegiance });
        }
    }
}

/// Player shots vs. enemies; each shot hits at most one enemy
fn resolve_player_hits(state: &mut GameState) {
    let checker = PointCollision;

    for shot in state.player_shots.iter_mut().filter(|s| s.is_active()) {
        let Some(enemy) = state
            .enemies
            .iter_mut()
            .find(|e| checker.check_collision(&**e, shot))
        else {
            continue;
        };

        shot.deactivate();
        let damage = shot.damage();
        state.events.push(GameEvent::Hit {
            target_id: enemy.id,
            damage,
        });
        if enemy.take_damage(damage) {
            log::info!("Enemy {} destroyed at tick {}", enemy.id, state.time_ticks);
            state.events.push(GameEvent::EnemyDestroyed { id: enemy.id });
            state.score += ENEMY_SCORE;
        } else {
            log::debug!("Enemy {} hit for {damage}, hp={}", enemy.id, enemy.health());
        }
    }

    state.enemies.retain(|e| !e.is_destroyed());
}

/// Enemy shots vs. the player
fn resolve_enemy_hits(state: &mut GameState) {
    let checker = PointCollision;

    for shot in state.enemy_shots.iter_mut().filter(|s| s.is_active()) {
        if state.player.is_destroyed() {
            break;
        }
        if !checker.check_collision(&state.player, shot) {
            continue;
        }

        shot.deactivate();
        let damage = shot.damage();
        state.events.push(GameEvent::Hit {
            target_id: state.player.id,
            damage,
        });
        if state.player.take_damage(damage) {
            log::info!("Player destroyed at tick {}", state.time_ticks);
            state.events.push(GameEvent::PlayerDestroyed);
        } else {
            log::debug!("Player hit for {damage}, hp={}", state.player.health());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{BattleStar, Direction, Position, shot_factory};

    fn quiet_settings() -> Settings {
        Settings {
            enemy_count: 0,
            ..Settings::default()
        }
    }

    fn state_with_enemy_at(x: f32, y: f32) -> GameState {
        let mut state = GameState::new(&quiet_settings()).unwrap();
        let id = state.next_entity_id().unwrap();
        let mut enemy = BattleStar::new(
            id,
            Allegiance::Enemy,
            Position::new(x, y).unwrap(),
            state.settings.enemy_size,
            state.settings.enemy_health,
        )
        .unwrap();
        enemy.fire_cooldown = u32::MAX;
        state.enemies.push(enemy);
        state
    }

    #[test]
    fn test_no_enemies_is_victory() {
        let mut state = GameState::new(&quiet_settings()).unwrap();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Victory);

        // Finished matches stay put
        let ticks = state.time_ticks;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_pause_toggle_freezes_simulation() {
        let mut state = state_with_enemy_at(400.0, 100.0);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };

        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Paused);
        let before = state.player.center();
        tick(
            &mut state,
            &TickInput {
                move_x: 1.0,
                ..Default::default()
            },
        );
        assert_eq!(state.player.center(), before);
        assert_eq!(state.time_ticks, 0);

        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_player_movement_is_clamped() {
        let mut state = state_with_enemy_at(400.0, 100.0);
        let left = TickInput {
            move_x: -5.0,
            ..Default::default()
        };
        for _ in 0..1000 {
            tick(&mut state, &left);
        }
        let half = state.player.half_extents();
        assert_eq!(state.player.center().x(), half.x);
    }

    #[test]
    fn test_player_fire_respects_cooldown() {
        let mut state = state_with_enemy_at(100.0, 100.0);
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        let cooldown = state.settings.player_fire_cooldown_ticks as usize;

        let mut fired = 0;
        for _ in 0..cooldown * 3 {
            tick(&mut state, &fire);
            fired += state
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::ShotFired { allegiance: Allegiance::Player, .. }))
                .count();
        }
        assert_eq!(fired, 3);
    }

    #[test]
    fn test_player_shot_destroys_enemy() {
        let mut state = GameState::new(&quiet_settings()).unwrap();
        let player_x = state.player.center().x();
        let id = state.next_entity_id().unwrap();
        let mut enemy = BattleStar::new(
            id,
            Allegiance::Enemy,
            Position::new(player_x, 114.0).unwrap(),
            Vec2::new(36.0, 24.0),
            15.0,
        )
        .unwrap();
        enemy.fire_cooldown = u32::MAX;
        state.enemies.push(enemy);

        let input = TickInput {
            fire: true,
            weapon: Some(ShotKind::Sniper),
            ..Default::default()
        };
        let mut destroyed = false;
        for _ in 0..50 {
            tick(&mut state, &input);
            destroyed |= state
                .events
                .iter()
                .any(|e| *e == GameEvent::EnemyDestroyed { id });
            if state.phase.is_over() {
                break;
            }
        }
        assert!(destroyed);
        assert_eq!(state.phase, GamePhase::Victory);
        assert_eq!(state.score, ENEMY_SCORE);
        assert_eq!(state.player_weapon, ShotKind::Sniper);
    }

    #[test]
    fn test_enemy_shot_damages_player() {
        let mut state = state_with_enemy_at(400.0, 100.0);
        let player = state.player.center();
        let shot = shot_factory::custom(
            Position::new(player.x(), player.y() - 20.0).unwrap(),
            Direction::DOWN,
            10.0,
            25.0,
        )
        .unwrap();
        state.enemy_shots.push(shot);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.health(), state.settings.player_health - 25.0);
        assert!(state.enemy_shots.is_empty());
        assert!(state.events.contains(&GameEvent::Hit {
            target_id: state.player.id,
            damage: 25.0
        }));
    }

    #[test]
    fn test_lethal_hit_ends_match() {
        let mut state = state_with_enemy_at(400.0, 100.0);
        let player = state.player.center();
        let shot = shot_factory::custom(player, Direction::ZERO, 0.0, 1e6).unwrap();
        state.enemy_shots.push(shot);

        tick(&mut state, &TickInput::default());
        assert!(state.player.is_destroyed());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::PlayerDestroyed));
    }

    #[test]
    fn test_shots_leaving_arena_are_retired() {
        let mut state = state_with_enemy_at(700.0, 100.0);
        let shot = shot_factory::sniper(Position::new(20.0, 30.0).unwrap(), Direction::UP).unwrap();
        state.player_shots.push(shot);

        tick(&mut state, &TickInput::default());
        assert!(state.player_shots.is_empty());
        assert!(state.events.contains(&GameEvent::ShotRetired {
            allegiance: Allegiance::Player
        }));
    }

    #[test]
    fn test_enemies_fire_on_interval() {
        let settings = Settings {
            enemy_count: 1,
            enemy_fire_interval_ticks: 10,
            ..Settings::default()
        };
        let mut state = GameState::new(&settings).unwrap();
        state.enemies[0].fire_cooldown = 0;

        let mut fired_at = Vec::new();
        for _ in 0..25 {
            tick(&mut state, &TickInput::default());
            if state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::ShotFired { allegiance: Allegiance::Enemy, .. }))
            {
                fired_at.push(state.time_ticks);
            }
        }
        assert_eq!(fired_at, vec![1, 11, 21]);
    }

    #[test]
    fn test_player_and_enemy_share_cadence() {
        let mut state = state_with_enemy_at(100.0, 100.0);
        state.settings.player_fire_cooldown_ticks = 10;
        state.settings.enemy_fire_interval_ticks = 10;
        state.enemies[0].fire_cooldown = 0;

        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        let mut player_at = Vec::new();
        let mut enemy_at = Vec::new();
        for _ in 0..25 {
            tick(&mut state, &fire);
            for event in &state.events {
                if let GameEvent::ShotFired { allegiance, .. } = event {
                    match allegiance {
                        Allegiance::Player => player_at.push(state.time_ticks),
                        Allegiance::Enemy => enemy_at.push(state.time_ticks),
                    }
                }
            }
        }
        assert_eq!(player_at, vec![1, 11, 21]);
        assert_eq!(player_at, enemy_at);
    }

    #[test]
    fn test_determinism() {
        let settings = Settings::default();
        let mut a = GameState::new(&settings).unwrap();
        let mut b = GameState::new(&settings).unwrap();

        let inputs = [
            TickInput {
                move_x: 1.0,
                fire: true,
                ..Default::default()
            },
            TickInput {
                move_y: -1.0,
                ..Default::default()
            },
            TickInput {
                fire: true,
                weapon: Some(ShotKind::Scatter),
                ..Default::default()
            },
        ];
        for _ in 0..100 {
            for input in &inputs {
                tick(&mut a, input);
                tick(&mut b, input);
            }
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.score, b.score);
        assert_eq!(a.player.center(), b.player.center());
        assert_eq!(a.player_shots, b.player_shots);
        assert_eq!(a.enemy_shots, b.enemy_shots);
    }
}
