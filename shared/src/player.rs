use serde::{Serialize, Deserialize};

use crate::config::WheelConfig;

pub const SPINS_LEFT_KEY: &str = "spinsLeft";
pub const SPIN_COOLDOWN_KEY: &str = "spinCooldown";

/// Key-value persistence for the spin counters. The frontend backs this with
/// browser local storage; tests use `MemoryStore`.
pub trait SpinStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinError {
    NoSpinsRemaining,
}

/// Per-player counters, persisted across page loads.
///
/// Invariants: `spins_left <= total_spins`, and `cooldown_expiry` is set
/// exactly when `spins_left` hits zero.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerState {
    pub spins_left: u32,
    pub cooldown_expiry: Option<u64>,
}

impl PlayerState {
    /// Reads the persisted counters, applying the cooldown reset if the
    /// stored expiry is already in the past. Malformed or missing values
    /// fall back to a fresh cycle.
    pub fn load(store: &impl SpinStore, config: &WheelConfig, now_ms: u64) -> Self {
        let spins_left = match store.get(SPINS_LEFT_KEY).map(|v| v.parse::<u32>()) {
            Some(Ok(n)) => n.min(config.total_spins),
            Some(Err(_)) => {
                log::warn!("ignoring malformed {} value", SPINS_LEFT_KEY);
                config.total_spins
            }
            None => config.total_spins,
        };
        let cooldown_expiry = store
            .get(SPIN_COOLDOWN_KEY)
            .and_then(|v| v.parse::<u64>().ok());

        let mut state = Self { spins_left, cooldown_expiry };
        if let Some(expiry) = state.cooldown_expiry {
            if now_ms > expiry {
                state.reset(store, config);
            }
        }
        state
    }

    /// Starts a fresh cycle: full spins, no cooldown.
    pub fn reset(&mut self, store: &impl SpinStore, config: &WheelConfig) {
        self.spins_left = config.total_spins;
        self.cooldown_expiry = None;
        store.set(SPINS_LEFT_KEY, &config.total_spins.to_string());
        store.remove(SPIN_COOLDOWN_KEY);
    }

    /// Consumes one spin and persists the counters. The cooldown timestamp
    /// is written exactly when the last spin of the cycle is used.
    pub fn record_spin(
        &mut self,
        store: &impl SpinStore,
        config: &WheelConfig,
        now_ms: u64,
    ) -> Result<(), SpinError> {
        if self.spins_left == 0 {
            return Err(SpinError::NoSpinsRemaining);
        }

        self.spins_left -= 1;
        store.set(SPINS_LEFT_KEY, &self.spins_left.to_string());

        if self.spins_left == 0 {
            let expiry = now_ms + config.cooldown_ms;
            self.cooldown_expiry = Some(expiry);
            store.set(SPIN_COOLDOWN_KEY, &expiry.to_string());
        }
        Ok(())
    }

    pub fn cooldown_remaining_ms(&self, now_ms: u64) -> u64 {
        self.cooldown_expiry
            .map(|expiry| expiry.saturating_sub(now_ms))
            .unwrap_or(0)
    }

    pub fn can_spin(&self, now_ms: u64) -> bool {
        self.spins_left > 0 && self.cooldown_remaining_ms(now_ms) == 0
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SpinStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: u64 = 1_700_000_000_000;

    #[test]
    fn test_fresh_load_gets_full_spins() {
        let store = MemoryStore::new();
        let config = WheelConfig::new();
        let state = PlayerState::load(&store, &config, NOW);
        assert_eq!(state.spins_left, 5);
        assert_eq!(state.cooldown_expiry, None);
        assert!(state.can_spin(NOW));
    }

    #[test]
    fn test_spin_decrements_and_persists() {
        let store = MemoryStore::new();
        let config = WheelConfig::new();
        let mut state = PlayerState::load(&store, &config, NOW);

        state.record_spin(&store, &config, NOW).unwrap();
        assert_eq!(state.spins_left, 4);
        assert_eq!(store.get(SPINS_LEFT_KEY).as_deref(), Some("4"));
        assert_eq!(store.get(SPIN_COOLDOWN_KEY), None);
    }

    #[test]
    fn test_fifth_spin_sets_cooldown_one_hour_ahead() {
        let store = MemoryStore::new();
        let config = WheelConfig::new();
        let mut state = PlayerState::load(&store, &config, NOW);

        for _ in 0..5 {
            state.record_spin(&store, &config, NOW).unwrap();
        }
        assert_eq!(state.spins_left, 0);
        assert_eq!(state.cooldown_expiry, Some(NOW + 60 * 60 * 1000));
        assert_eq!(
            store.get(SPIN_COOLDOWN_KEY).as_deref(),
            Some((NOW + 60 * 60 * 1000).to_string().as_str())
        );
        assert!(!state.can_spin(NOW));
    }

    #[test]
    fn test_spin_with_none_left_errors_and_leaves_state_alone() {
        let store = MemoryStore::new();
        let config = WheelConfig::new();
        let mut state = PlayerState::load(&store, &config, NOW);

        for _ in 0..5 {
            state.record_spin(&store, &config, NOW).unwrap();
        }
        let before = state.clone();
        assert_eq!(
            state.record_spin(&store, &config, NOW),
            Err(SpinError::NoSpinsRemaining)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_expired_cooldown_resets_on_load() {
        let store = MemoryStore::new();
        store.set(SPINS_LEFT_KEY, "0");
        store.set(SPIN_COOLDOWN_KEY, &(NOW - 1).to_string());

        let config = WheelConfig::new();
        let state = PlayerState::load(&store, &config, NOW);
        assert_eq!(state.spins_left, config.total_spins);
        assert_eq!(state.cooldown_expiry, None);
        assert_eq!(store.get(SPIN_COOLDOWN_KEY), None);
        assert_eq!(store.get(SPINS_LEFT_KEY).as_deref(), Some("5"));
    }

    #[test]
    fn test_live_cooldown_survives_load() {
        let store = MemoryStore::new();
        let expiry = NOW + 30 * 60 * 1000;
        store.set(SPINS_LEFT_KEY, "0");
        store.set(SPIN_COOLDOWN_KEY, &expiry.to_string());

        let config = WheelConfig::new();
        let state = PlayerState::load(&store, &config, NOW);
        assert_eq!(state.spins_left, 0);
        assert_eq!(state.cooldown_expiry, Some(expiry));
        assert_eq!(state.cooldown_remaining_ms(NOW), 30 * 60 * 1000);
        assert!(!state.can_spin(NOW));
    }

    #[test]
    fn test_malformed_values_fall_back_to_defaults() {
        let store = MemoryStore::new();
        store.set(SPINS_LEFT_KEY, "banana");
        store.set(SPIN_COOLDOWN_KEY, "not-a-timestamp");

        let config = WheelConfig::new();
        let state = PlayerState::load(&store, &config, NOW);
        assert_eq!(state.spins_left, config.total_spins);
        assert_eq!(state.cooldown_expiry, None);
    }

    #[test]
    fn test_stored_spins_never_exceed_configured_total() {
        let store = MemoryStore::new();
        store.set(SPINS_LEFT_KEY, "99");

        let config = WheelConfig::new();
        let state = PlayerState::load(&store, &config, NOW);
        assert_eq!(state.spins_left, config.total_spins);
    }
}
