//! Player input
//!
//! Keyboard and touch both feed the same [`InputLatch`]. Producers only flip
//! latches or request a shot; the simulation reads a [`TickInput`] built from
//! the latches once per tick and never sees raw events.

use crate::sim::TickInput;

/// A game action bound to a key or on-screen button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    RotateLeft,
    RotateRight,
    Thrust,
    Fire,
}

impl Action {
    /// Map a `KeyboardEvent.key` value to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Action::RotateLeft),
            "ArrowRight" | "d" | "D" => Some(Action::RotateRight),
            "ArrowUp" | "w" | "W" => Some(Action::Thrust),
            " " | "Space" | "Spacebar" => Some(Action::Fire),
            _ => None,
        }
    }
}

/// On-screen buttons for touch devices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchButton {
    Left,
    Right,
    Thrust,
    Fire,
}

impl TouchButton {
    pub const ALL: [TouchButton; 4] = [
        TouchButton::Left,
        TouchButton::Right,
        TouchButton::Thrust,
        TouchButton::Fire,
    ];

    pub fn action(self) -> Action {
        match self {
            TouchButton::Left => Action::RotateLeft,
            TouchButton::Right => Action::RotateRight,
            TouchButton::Thrust => Action::Thrust,
            TouchButton::Fire => Action::Fire,
        }
    }

    /// DOM element id of the button
    pub fn element_id(self) -> &'static str {
        match self {
            TouchButton::Left => "btn-left",
            TouchButton::Right => "btn-right",
            TouchButton::Thrust => "btn-thrust",
            TouchButton::Fire => "btn-fire",
        }
    }
}

/// Shared sink for every input producer
pub trait InputLatch {
    /// Action pressed at monotonic time `now_ms`
    fn press(&mut self, action: Action, now_ms: f64);
    /// Action released
    fn release(&mut self, action: Action);

    /// Keyboard producer: returns true if the key is bound
    fn key_down(&mut self, key: &str, now_ms: f64) -> bool {
        match Action::from_key(key) {
            Some(action) => {
                self.press(action, now_ms);
                true
            }
            None => false,
        }
    }

    /// Keyboard producer: returns true if the key is bound
    fn key_up(&mut self, key: &str) -> bool {
        match Action::from_key(key) {
            Some(action) => {
                self.release(action);
                true
            }
            None => false,
        }
    }

    /// Touch producer
    fn touch_start(&mut self, button: TouchButton, now_ms: f64) {
        self.press(button.action(), now_ms);
    }

    /// Touch producer
    fn touch_end(&mut self, button: TouchButton) {
        self.release(button.action());
    }
}

/// Wall-clock gate between shots
#[derive(Debug, Clone)]
pub struct FireGate {
    cooldown_ms: f64,
    last_fire_ms: Option<f64>,
}

impl FireGate {
    pub fn new(cooldown_ms: f64) -> Self {
        Self {
            cooldown_ms: cooldown_ms.max(0.0),
            last_fire_ms: None,
        }
    }

    /// Returns true and arms the cooldown if a shot is allowed at `now_ms`
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        let ready = match self.last_fire_ms {
            Some(last) => now_ms - last >= self.cooldown_ms,
            None => true,
        };
        if ready {
            self.last_fire_ms = Some(now_ms);
        }
        ready
    }

    pub fn reset(&mut self) {
        self.last_fire_ms = None;
    }
}

/// Latched control state written by input producers
#[derive(Debug, Clone)]
pub struct Controls {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    /// Shot accepted by the gate, waiting for the next tick
    fire_pending: bool,
    gate: FireGate,
}

impl Controls {
    pub fn new(fire_cooldown_ms: f64) -> Self {
        Self {
            rotate_left: false,
            rotate_right: false,
            thrust: false,
            fire_pending: false,
            gate: FireGate::new(fire_cooldown_ms),
        }
    }

    /// Request a shot; suppressed while the cooldown is running
    pub fn request_fire(&mut self, now_ms: f64) -> bool {
        let accepted = self.gate.try_fire(now_ms);
        if accepted {
            self.fire_pending = true;
        }
        accepted
    }

    /// Build this tick's input and consume the pending shot
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            rotate_left: self.rotate_left,
            rotate_right: self.rotate_right,
            thrust: self.thrust,
            fire: self.fire_pending,
        };
        self.fire_pending = false;
        input
    }

    /// Drop held latches and any pending shot
    ///
    /// Used on focus loss, where key-up events never arrive. The fire
    /// cooldown keeps running.
    pub fn release_all(&mut self) {
        self.rotate_left = false;
        self.rotate_right = false;
        self.thrust = false;
        self.fire_pending = false;
    }

    /// Fresh controls for a new run
    pub fn reset(&mut self) {
        self.release_all();
        self.gate.reset();
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::new(crate::consts::FIRE_COOLDOWN_MS)
    }
}

impl InputLatch for Controls {
    fn press(&mut self, action: Action, now_ms: f64) {
        match action {
            Action::RotateLeft => self.rotate_left = true,
            Action::RotateRight => self.rotate_right = true,
            Action::Thrust => self.thrust = true,
            Action::Fire => {
                if !self.request_fire(now_ms) {
                    log::trace!("Fire suppressed by cooldown");
                }
            }
        }
    }

    fn release(&mut self, action: Action) {
        match action {
            Action::RotateLeft => self.rotate_left = false,
            Action::RotateRight => self.rotate_right = false,
            Action::Thrust => self.thrust = false,
            Action::Fire => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        for key in ["ArrowLeft", "a", "A"] {
            assert_eq!(Action::from_key(key), Some(Action::RotateLeft));
        }
        for key in ["ArrowRight", "d", "D"] {
            assert_eq!(Action::from_key(key), Some(Action::RotateRight));
        }
        for key in ["ArrowUp", "w", "W"] {
            assert_eq!(Action::from_key(key), Some(Action::Thrust));
        }
        assert_eq!(Action::from_key(" "), Some(Action::Fire));
        assert_eq!(Action::from_key("ArrowDown"), None);
        assert_eq!(Action::from_key("q"), None);
    }

    #[test]
    fn test_latches_hold_until_release() {
        let mut controls = Controls::default();
        assert!(controls.key_down("ArrowUp", 0.0));
        assert!(controls.key_down("a", 0.0));

        let first = controls.take_tick_input();
        let second = controls.take_tick_input();
        assert!(first.thrust && first.rotate_left);
        assert!(second.thrust && second.rotate_left);

        assert!(controls.key_up("A"));
        assert!(!controls.take_tick_input().rotate_left);
        assert!(!controls.key_up("Escape"));
    }

    #[test]
    fn test_touch_and_keyboard_share_latches() {
        let mut controls = Controls::default();
        controls.touch_start(TouchButton::Thrust, 0.0);
        assert!(controls.thrust);
        // Releasing via keyboard clears the touch press
        controls.key_up("w");
        assert!(!controls.thrust);
    }

    #[test]
    fn test_fire_is_one_shot() {
        let mut controls = Controls::default();
        controls.key_down(" ", 0.0);
        assert!(controls.take_tick_input().fire);
        assert!(!controls.take_tick_input().fire);
    }

    #[test]
    fn test_fire_cooldown() {
        let mut controls = Controls::new(300.0);
        assert!(controls.request_fire(1000.0));
        controls.take_tick_input();
        assert!(!controls.request_fire(1100.0));
        assert!(!controls.request_fire(1299.9));
        assert!(controls.request_fire(1300.0));
    }

    #[test]
    fn test_release_all_drops_held_keys() {
        let mut controls = Controls::new(300.0);
        controls.key_down("ArrowUp", 0.0);
        controls.key_down("d", 0.0);
        controls.key_down(" ", 0.0);

        // Window lost focus while the keys were held
        controls.release_all();
        assert_eq!(controls.take_tick_input(), TickInput::default());

        // Cooldown survives focus loss
        assert!(!controls.request_fire(100.0));
        assert!(controls.request_fire(300.0));
    }

    #[test]
    fn test_reset_clears_cooldown() {
        let mut controls = Controls::new(300.0);
        controls.key_down("w", 0.0);
        controls.key_down(" ", 0.0);
        controls.reset();
        assert_eq!(controls.take_tick_input(), TickInput::default());
        assert!(controls.request_fire(10.0));
    }

    #[test]
    fn test_fire_gate_reset() {
        let mut gate = FireGate::new(300.0);
        assert!(gate.try_fire(0.0));
        assert!(!gate.try_fire(10.0));
        gate.reset();
        assert!(gate.try_fire(20.0));
    }

    #[test]
    fn test_touch_button_mapping() {
        assert_eq!(TouchButton::Left.action(), Action::RotateLeft);
        assert_eq!(TouchButton::Fire.action(), Action::Fire);
        let ids: Vec<_> = TouchButton::ALL.iter().map(|b| b.element_id()).collect();
        assert_eq!(ids, ["btn-left", "btn-right", "btn-thrust", "btn-fire"]);
    }
}
