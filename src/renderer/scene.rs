//! Scene drawing: turns a game state into surface calls

use glam::Vec2;

use super::Surface;
use super::vertex::colors;
use crate::sim::{Allegiance, BattleStar, GamePhase, GameState, Position};

const SHOT_RADIUS: f32 = 3.0;
const HEALTH_BAR_HEIGHT: f32 = 3.0;
const HUD_TEXT_SIZE: f32 = 16.0;

/// Draw one full frame
pub fn draw_scene(state: &GameState, surface: &mut impl Surface) {
    surface.begin_frame();
    surface.clear(colors::BACKGROUND);

    let arena = &state.arena;
    surface.rectangle(
        arena.center(),
        Vec2::new(arena.width(), arena.height()),
        colors::ARENA_WALL,
    );

    for enemy in &state.enemies {
        draw_battle_star(enemy, surface);
    }
    if !state.player.is_destroyed() {
        draw_battle_star(&state.player, surface);
    }

    for (allegiance, shot) in state.shots() {
        let color = match allegiance {
            Allegiance::Player => colors::PLAYER_SHOT,
            Allegiance::Enemy => colors::ENEMY_SHOT,
        };
        surface.circle(shot.position(), SHOT_RADIUS, color);
    }

    let b = arena.bounds();
    let hud_at = Position::new(b.min_x + 8.0, b.min_y + 8.0).unwrap_or(arena.center());
    surface.text(hud_at, &hud_line(state), HUD_TEXT_SIZE, colors::HUD_TEXT);

    surface.end_frame();
}

fn hud_line(state: &GameState) -> String {
    let status = match state.phase {
        GamePhase::Playing => "",
        GamePhase::Paused => "  PAUSED",
        GamePhase::Victory => "  VICTORY",
        GamePhase::GameOver => "  GAME OVER",
    };
    format!(
        "SCORE {}  HP {:.0}  WEAPON {}{}",
        state.score,
        state.player.health(),
        state.player_weapon.as_str().to_uppercase(),
        status
    )
}

/// Rectangle hull, a nose triangle on the firing edge, and a health bar
fn draw_battle_star(star: &BattleStar, surface: &mut impl Surface) {
    let color = match star.allegiance {
        Allegiance::Player => colors::PLAYER,
        Allegiance::Enemy => colors::ENEMY,
    };
    let c = star.center().as_vec2();
    let h = star.half_extents();
    surface.rectangle(star.center(), star.size(), color);

    let facing = star.allegiance.facing().as_vec2();
    let tip = star.muzzle().as_vec2() + facing * h.y;
    let base = star.muzzle().as_vec2();
    let side = Vec2::new(h.x / 2.0, 0.0);
    if let (Ok(a), Ok(b), Ok(t)) = (
        Position::from_vec2(base - side),
        Position::from_vec2(base + side),
        Position::from_vec2(tip),
    ) {
        surface.triangle(a, b, t, color);
    }

    let width = star.size().x * star.health_fraction();
    if width > 0.0 {
        let bar_y = c.y - facing.y * (h.y + HEALTH_BAR_HEIGHT * 2.0);
        let bar_x = c.x - h.x + width / 2.0;
        if let Ok(at) = Position::new(bar_x, bar_y) {
            surface.rectangle(at, Vec2::new(width, HEALTH_BAR_HEIGHT), colors::HEALTH_BAR);
        }
    }
}
