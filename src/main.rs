//! Reef Raider entry point
//!
//! Runs a session headless at a fixed timestep: this binary is the clock
//! driver and input source the simulation expects, with a small autopilot
//! standing in for a human. A renderer would hang off the same loop and read
//! the session state after each tick.

use std::path::Path;

use reef_raider::Settings;
use reef_raider::consts;
use reef_raider::sim::{Command, CommandQueue, Key, SessionState, tick};

fn main() {
    env_logger::init();

    let settings = Settings::load(Path::new("settings.json"));
    let seed = settings.seed.unwrap_or_else(rand::random);
    let dt_ms = settings.tick_ms;

    let mut state = SessionState::new(seed);
    state.debug = settings.debug_overlay;
    let mut queue = CommandQueue::new();

    let total_ticks = ((consts::TIME_LIMIT_MS + settings.run_out_ms) / dt_ms).ceil() as u64;
    let mut next_report_ms = 5_000.0;

    for _ in 0..total_ticks {
        if settings.autopilot {
            autopilot(&state, &mut queue);
        }
        let input = queue.drain();
        tick(&mut state, &input, dt_ms);

        if !state.game_over && state.game_time_ms >= next_report_ms {
            log::info!(
                "t={:.0}s score={} ammo={:.1} enemies={} debris={}",
                state.game_time_ms / 1000.0,
                state.score,
                state.ammo,
                state.enemies.len(),
                state.particles.len(),
            );
            next_report_ms += 5_000.0;
        }
    }

    if state.victory() {
        println!("MOST WONDERS!");
        println!("Well done, Explorer!");
    } else {
        println!("BLAZES!");
        println!("Get my repair kit and try again!");
    }
    println!("Final score: {} (seed {seed})", state.score);
}

/// Minimal stand-in pilot: chase the nearest enemy vertically and shoot
/// whenever the mouth cannon lines up with its hitbox
fn autopilot(state: &SessionState, queue: &mut CommandQueue) {
    let muzzle_y = state.player.pos.y + consts::MUZZLE_TOP.y;

    let target = state
        .enemies
        .iter()
        .filter(|e| e.pos.x + e.width() > state.player.pos.x + consts::MUZZLE_TOP.x)
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x));

    let Some(target) = target else {
        queue.push(Command::Release(Key::Up));
        queue.push(Command::Release(Key::Down));
        return;
    };

    let aim_y = target.center().y;
    if aim_y < muzzle_y - 12.0 {
        queue.push(Command::Press(Key::Up));
        queue.push(Command::Release(Key::Down));
    } else if aim_y > muzzle_y + 12.0 {
        queue.push(Command::Press(Key::Down));
        queue.push(Command::Release(Key::Up));
    } else {
        queue.push(Command::Release(Key::Up));
        queue.push(Command::Release(Key::Down));
    }

    if muzzle_y >= target.pos.y && muzzle_y <= target.pos.y + target.height() && state.ammo >= 1.0
    {
        queue.push(Command::Fire);
    }
}
