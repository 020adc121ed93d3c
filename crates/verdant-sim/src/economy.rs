//! Sun economy: balance, per-kind placement cooldowns, and delayed
//! collection credits.
//!
//! All mutation goes through validated operations so a rejected action never
//! touches the balance. Credits from collected drops land after a fixed
//! delay, counted in simulation time.

use std::collections::HashMap;

use verdant_core::constants::{SUN_CAP, SUN_CREDIT_DELAY_SECS};
use verdant_core::enums::DefenderKind;
use verdant_core::error::ActionError;
use verdant_core::events::GameEvent;

#[derive(Debug, Clone)]
struct PendingCredit {
    value: u32,
    remaining_secs: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Economy {
    sun: u32,
    cooldowns: HashMap<DefenderKind, f64>,
    pending: Vec<PendingCredit>,
}

impl Economy {
    pub fn new(initial_sun: u32) -> Self {
        Self {
            sun: initial_sun.min(SUN_CAP),
            cooldowns: HashMap::new(),
            pending: Vec::new(),
        }
    }

    pub fn sun(&self) -> u32 {
        self.sun
    }

    /// Whether another collection credit could still fit under the cap.
    pub fn has_capacity(&self) -> bool {
        self.sun < SUN_CAP
    }

    pub fn cooldown_remaining(&self, kind: DefenderKind) -> f64 {
        self.cooldowns.get(&kind).copied().unwrap_or(0.0)
    }

    /// Decay cooldowns and land due credits. Returns the total value banked
    /// this tick (before cap clamping), for score tracking.
    pub fn tick(&mut self, dt: f64, events: &mut Vec<GameEvent>) -> u32 {
        for remaining in self.cooldowns.values_mut() {
            *remaining = (*remaining - dt).max(0.0);
        }

        let mut banked = 0;
        let mut i = 0;
        while i < self.pending.len() {
            self.pending[i].remaining_secs -= dt;
            if self.pending[i].remaining_secs <= 0.0 {
                let credit = self.pending.swap_remove(i);
                // Credit past the cap is discarded, not carried over.
                self.sun = (self.sun + credit.value).min(SUN_CAP);
                banked += credit.value;
                events.push(GameEvent::SunBanked {
                    value: credit.value,
                });
            } else {
                i += 1;
            }
        }
        banked
    }

    /// Check whether `kind` may be armed for placement right now.
    pub fn validate_selection(
        &self,
        kind: DefenderKind,
        available: &[DefenderKind],
    ) -> Result<(), ActionError> {
        if !available.contains(&kind) {
            return Err(ActionError::KindUnavailable);
        }
        let cost = kind.stats().cost;
        if self.sun < cost {
            return Err(ActionError::InsufficientSun {
                needed: cost,
                available: self.sun,
            });
        }
        let remaining = self.cooldown_remaining(kind);
        if remaining > 0.0 {
            return Err(ActionError::OnCooldown {
                remaining_secs: remaining,
            });
        }
        Ok(())
    }

    /// Deduct the cost and start the cooldown. Callers validate first.
    pub fn commit_placement(&mut self, kind: DefenderKind) {
        let stats = kind.stats();
        self.sun = self.sun.saturating_sub(stats.cost);
        self.cooldowns.insert(kind, stats.cooldown_secs);
    }

    /// Enqueue a delayed credit for a collected drop.
    pub fn begin_collection(&mut self, value: u32) {
        self.pending.push(PendingCredit {
            value,
            remaining_secs: SUN_CREDIT_DELAY_SECS,
        });
    }

    #[cfg(test)]
    pub fn set_sun(&mut self, sun: u32) {
        self.sun = sun.min(SUN_CAP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_core::constants::DT;

    fn drain(economy: &mut Economy, secs: f64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let ticks = (secs / DT).round() as u32;
        for _ in 0..ticks {
            economy.tick(DT, &mut events);
        }
        events
    }

    #[test]
    fn credit_lands_after_delay() {
        let mut economy = Economy::new(50);
        economy.begin_collection(25);

        let mut events = Vec::new();
        economy.tick(DT, &mut events);
        assert_eq!(economy.sun(), 50);

        let events = drain(&mut economy, SUN_CREDIT_DELAY_SECS);
        assert_eq!(economy.sun(), 75);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::SunBanked { value: 25 })));
    }

    #[test]
    fn credit_past_cap_is_discarded() {
        let mut economy = Economy::new(SUN_CAP - 10);
        economy.begin_collection(25);
        drain(&mut economy, SUN_CREDIT_DELAY_SECS + DT);
        assert_eq!(economy.sun(), SUN_CAP);

        economy.begin_collection(25);
        drain(&mut economy, SUN_CREDIT_DELAY_SECS + DT);
        assert_eq!(economy.sun(), SUN_CAP);
    }

    #[test]
    fn selection_validation_order() {
        let available = vec![DefenderKind::Sentry];
        let mut economy = Economy::new(200);

        assert_eq!(
            economy.validate_selection(DefenderKind::Barricade, &available),
            Err(ActionError::KindUnavailable)
        );
        assert!(economy
            .validate_selection(DefenderKind::Sentry, &available)
            .is_ok());

        economy.commit_placement(DefenderKind::Sentry);
        assert_eq!(economy.sun(), 100);
        let err = economy
            .validate_selection(DefenderKind::Sentry, &available)
            .unwrap_err();
        assert!(matches!(err, ActionError::OnCooldown { .. }));

        economy.set_sun(50);
        // Insufficient sun is reported before the cooldown.
        assert_eq!(
            economy.validate_selection(DefenderKind::Sentry, &available),
            Err(ActionError::InsufficientSun {
                needed: 100,
                available: 50
            })
        );
    }

    #[test]
    fn cooldown_decays_to_zero() {
        let available = vec![DefenderKind::Sentry];
        let mut economy = Economy::new(500);
        economy.commit_placement(DefenderKind::Sentry);

        let cooldown = DefenderKind::Sentry.stats().cooldown_secs;
        drain(&mut economy, cooldown / 2.0);
        assert!(economy.cooldown_remaining(DefenderKind::Sentry) > 0.0);

        drain(&mut economy, cooldown / 2.0 + DT);
        assert_eq!(economy.cooldown_remaining(DefenderKind::Sentry), 0.0);
        assert!(economy
            .validate_selection(DefenderKind::Sentry, &available)
            .is_ok());
    }
}
