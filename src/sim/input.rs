//! Buffered input commands
//!
//! Event handlers on the host side must not touch simulation state directly.
//! They push discrete [`Command`]s into a [`CommandQueue`]; the engine drains
//! the queue exactly once at the start of each tick, folding the commands
//! into a [`TickInput`] snapshot. That keeps the tick function the only
//! writer of game state.

use std::collections::VecDeque;

/// Movement keys the simulation knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
}

/// A discrete input event from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Press(Key),
    Release(Key),
    Fire,
    ToggleDebug,
}

/// Read-only input snapshot for one tick
///
/// `move_up`/`move_down` are level-triggered held-key states ("up" wins when
/// both are held); `fire` and `toggle_debug` are edge-triggered and consumed
/// by the tick they arrive in.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_up: bool,
    pub move_down: bool,
    pub fire: bool,
    pub toggle_debug: bool,
}

/// Command buffer between the host's event handlers and the engine
#[derive(Debug, Default)]
pub struct CommandQueue {
    queue: VecDeque<Command>,
    up_held: bool,
    down_held: bool,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a command; called from event handlers, never from the tick
    pub fn push(&mut self, command: Command) {
        self.queue.push_back(command);
    }

    /// Drain all pending commands into this tick's input snapshot
    pub fn drain(&mut self) -> TickInput {
        let mut fire = false;
        let mut toggle_debug = false;

        for command in self.queue.drain(..) {
            match command {
                Command::Press(Key::Up) => self.up_held = true,
                Command::Press(Key::Down) => self.down_held = true,
                Command::Release(Key::Up) => self.up_held = false,
                Command::Release(Key::Down) => self.down_held = false,
                Command::Fire => fire = true,
                // Paired presses within one tick cancel out
                Command::ToggleDebug => toggle_debug = !toggle_debug,
            }
        }

        TickInput {
            move_up: self.up_held,
            move_down: self.down_held,
            fire,
            toggle_debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_persist_across_drains() {
        let mut queue = CommandQueue::new();
        queue.push(Command::Press(Key::Up));
        let input = queue.drain();
        assert!(input.move_up);

        // No new events: the key is still held
        let input = queue.drain();
        assert!(input.move_up);

        queue.push(Command::Release(Key::Up));
        let input = queue.drain();
        assert!(!input.move_up);
    }

    #[test]
    fn test_fire_is_edge_triggered() {
        let mut queue = CommandQueue::new();
        queue.push(Command::Fire);
        assert!(queue.drain().fire);
        assert!(!queue.drain().fire);
    }

    #[test]
    fn test_debug_toggle_parity() {
        let mut queue = CommandQueue::new();
        queue.push(Command::ToggleDebug);
        queue.push(Command::ToggleDebug);
        assert!(!queue.drain().toggle_debug);

        queue.push(Command::ToggleDebug);
        assert!(queue.drain().toggle_debug);
    }

    #[test]
    fn test_press_and_release_same_tick() {
        let mut queue = CommandQueue::new();
        queue.push(Command::Press(Key::Down));
        queue.push(Command::Release(Key::Down));
        assert!(!queue.drain().move_down);
    }
}
