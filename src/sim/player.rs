//! The player sprite: vertical movement, ammo-gated firing, power-up timer
//!
//! The player owns its projectile list and compacts it itself; ammo lives in
//! the session state and is passed in, since regeneration and firing both
//! draw on the same pool.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::entity::Projectile;
use super::input::TickInput;
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub speed_y: f32,
    pub projectiles: Vec<Projectile>,
    pub power_up: bool,
    pub power_up_timer_ms: f32,
    /// Swim animation column; row 1 while powered up, row 0 otherwise
    pub frame_x: u32,
    pub frame_y: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: PLAYER_START,
            speed_y: 0.0,
            projectiles: Vec::new(),
            power_up: false,
            power_up_timer_ms: 0.0,
            frame_x: 0,
            frame_y: 0,
        }
    }

    /// Advance one tick
    ///
    /// Power-up bookkeeping runs first: while active it trickles bonus ammo
    /// every tick (on top of the periodic regen, which stays eligible) and
    /// expires after 10 seconds. Then vertical movement with "up" taking
    /// precedence, clamped so half the sprite may poke past either edge,
    /// then the owned projectiles advance and compact.
    pub fn tick(&mut self, input: &TickInput, dt_ms: f32, ammo: &mut f32) {
        if self.power_up {
            if self.power_up_timer_ms > POWER_UP_LIMIT_MS {
                self.power_up_timer_ms = 0.0;
                self.power_up = false;
                self.frame_y = 0;
            } else {
                self.power_up_timer_ms += dt_ms;
                self.frame_y = 1;
                *ammo += POWER_UP_AMMO_BONUS;
            }
        }

        self.speed_y = if input.move_up {
            -PLAYER_MAX_SPEED
        } else if input.move_down {
            PLAYER_MAX_SPEED
        } else {
            0.0
        };
        self.pos.y += self.speed_y;
        self.pos.y = self.pos.y.clamp(
            -PLAYER_HEIGHT * 0.5,
            ARENA_HEIGHT - PLAYER_HEIGHT * 0.5,
        );

        for projectile in &mut self.projectiles {
            projectile.tick();
        }
        self.projectiles.retain(|p| !p.deleted);

        if self.frame_x < SWIM_MAX_FRAME {
            self.frame_x += 1;
        } else {
            self.frame_x = 0;
        }
    }

    /// Fire from the mouth: costs one ammo. While powered up the tail fires
    /// too (checked against the already-decremented ammo, and free).
    pub fn fire_from_top(&mut self, ammo: &mut f32) {
        if *ammo > 0.0 {
            self.projectiles
                .push(Projectile::new(self.pos + MUZZLE_TOP));
            *ammo -= 1.0;
        }
        if self.power_up {
            self.fire_from_bottom(*ammo);
        }
    }

    /// Fire from the tail: gated on ammo but does not consume any
    pub fn fire_from_bottom(&mut self, ammo: f32) {
        if ammo > 0.0 {
            self.projectiles
                .push(Projectile::new(self.pos + MUZZLE_BOTTOM));
        }
    }

    /// Enter the powered-up state: timer restarts, and ammo refills to the
    /// cap in one go if it was below it
    pub fn enter_power_up(&mut self, ammo: &mut f32) {
        self.power_up_timer_ms = 0.0;
        self.power_up = true;
        if *ammo < MAX_AMMO {
            *ammo = MAX_AMMO;
        }
    }

    pub fn hitbox(&self) -> Rect {
        Rect::from_pos(self.pos, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_shots_drain_twenty_ammo() {
        let mut player = Player::new();
        let mut ammo = START_AMMO;
        for _ in 0..20 {
            player.fire_from_top(&mut ammo);
        }
        assert_eq!(ammo, 0.0);
        assert_eq!(player.projectiles.len(), 20);

        // The 21st pull is a dry click
        player.fire_from_top(&mut ammo);
        assert_eq!(player.projectiles.len(), 20);
        assert_eq!(ammo, 0.0);
    }

    #[test]
    fn test_powered_fire_spawns_tail_shot_for_one_ammo() {
        let mut player = Player::new();
        let mut ammo = 5.0;
        player.power_up = true;
        player.fire_from_top(&mut ammo);
        assert_eq!(player.projectiles.len(), 2);
        assert_eq!(ammo, 4.0);
        assert_eq!(player.projectiles[0].pos, PLAYER_START + MUZZLE_TOP);
        assert_eq!(player.projectiles[1].pos, PLAYER_START + MUZZLE_BOTTOM);
    }

    #[test]
    fn test_powered_fire_with_last_ammo_skips_tail_shot() {
        // The tail shot checks ammo after the mouth shot spent the last unit
        let mut player = Player::new();
        let mut ammo = 1.0;
        player.power_up = true;
        player.fire_from_top(&mut ammo);
        assert_eq!(player.projectiles.len(), 1);
        assert_eq!(ammo, 0.0);
    }

    #[test]
    fn test_enter_power_up_refills_only_below_cap() {
        let mut player = Player::new();
        let mut ammo = 12.5;
        player.enter_power_up(&mut ammo);
        assert!(player.power_up);
        assert_eq!(ammo, MAX_AMMO);

        // Overfilled ammo (power-up trickle is uncapped) is left alone
        let mut ammo = 53.0;
        player.enter_power_up(&mut ammo);
        assert_eq!(ammo, 53.0);
    }

    #[test]
    fn test_power_up_expires_after_limit() {
        let mut player = Player::new();
        let mut ammo = MAX_AMMO;
        player.enter_power_up(&mut ammo);

        let input = TickInput::default();
        // 10 ticks of 1001 ms: the timer passes the 10 s limit on the 10th
        for _ in 0..10 {
            player.tick(&input, 1001.0, &mut ammo);
        }
        assert!(player.power_up);
        player.tick(&input, 1001.0, &mut ammo);
        assert!(!player.power_up);
        assert_eq!(player.power_up_timer_ms, 0.0);
        assert_eq!(player.frame_y, 0);
    }

    #[test]
    fn test_vertical_clamp() {
        let mut player = Player::new();
        let mut ammo = 0.0;
        let up = TickInput {
            move_up: true,
            ..Default::default()
        };
        for _ in 0..300 {
            player.tick(&up, 16.0, &mut ammo);
        }
        assert_eq!(player.pos.y, -PLAYER_HEIGHT * 0.5);

        let down = TickInput {
            move_down: true,
            ..Default::default()
        };
        for _ in 0..600 {
            player.tick(&down, 16.0, &mut ammo);
        }
        assert_eq!(player.pos.y, ARENA_HEIGHT - PLAYER_HEIGHT * 0.5);
    }

    #[test]
    fn test_up_takes_precedence_over_down() {
        let mut player = Player::new();
        let mut ammo = 0.0;
        let both = TickInput {
            move_up: true,
            move_down: true,
            ..Default::default()
        };
        player.tick(&both, 16.0, &mut ammo);
        assert_eq!(player.speed_y, -PLAYER_MAX_SPEED);
    }
}
