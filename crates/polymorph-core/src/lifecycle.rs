//! Per-tick ageing and the predator's advisory behaviour state

use serde::{Deserialize, Serialize};

use crate::config::PredatorConfig;
use crate::predator::Predator;

/// What the scheduler should have the predator do next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LifecycleState {
    /// Initial state before the first tick
    #[default]
    Patrol,
    MateSearch,
    PreySearch,
    /// Terminal; the scheduler removes the predator
    Death,
}

impl LifecycleState {
    pub fn as_label(&self) -> &'static str {
        match self {
            LifecycleState::Patrol => "PATROL",
            LifecycleState::MateSearch => "MATE SEARCH",
            LifecycleState::PreySearch => "PREY SEARCH",
            LifecycleState::Death => "DEATH",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, LifecycleState::Death)
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_label())
    }
}

impl Predator {
    /// Advance the predator's counters by one tick and report its next state.
    ///
    /// Clears last tick's kill cue, increments hunger and, with ageing
    /// enabled, decrements lifespan.
    pub fn age(&mut self, config: &PredatorConfig) -> LifecycleState {
        self.attack_success = false;
        self.hunger += 1;
        if config.ageing_enabled {
            self.lifespan -= 1;
        }

        let starved = config.starvation_enabled && self.hunger > config.hunger_limit;
        if self.lifespan <= 0 || starved {
            LifecycleState::Death
        } else if self.hunger < config.sexual_readiness_threshold {
            LifecycleState::MateSearch
        } else {
            LifecycleState::PreySearch
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predator::test_predator;

    fn config() -> PredatorConfig {
        PredatorConfig {
            ageing_enabled: true,
            starvation_enabled: true,
            hunger_limit: 10,
            sexual_readiness_threshold: 3,
            ..PredatorConfig::default()
        }
    }

    #[test]
    fn test_last_tick_of_life() {
        let mut p = test_predator(0.0, 0.0);
        p.lifespan = 1;
        assert_eq!(p.age(&config()), LifecycleState::Death);
        assert_eq!(p.lifespan, 0);
    }

    #[test]
    fn test_no_ageing_keeps_lifespan() {
        let mut p = test_predator(0.0, 0.0);
        p.lifespan = 1;
        let config = PredatorConfig {
            ageing_enabled: false,
            ..config()
        };
        assert_ne!(p.age(&config), LifecycleState::Death);
        assert_eq!(p.lifespan, 1);
        assert_eq!(p.hunger, 1);
    }

    #[test]
    fn test_starvation() {
        let mut p = test_predator(0.0, 0.0);
        p.hunger = 10;
        assert_eq!(p.age(&config()), LifecycleState::Death);

        let mut p = test_predator(0.0, 0.0);
        p.hunger = 10;
        let lenient = PredatorConfig {
            starvation_enabled: false,
            ..config()
        };
        assert_eq!(p.age(&lenient), LifecycleState::PreySearch);
    }

    #[test]
    fn test_hunger_crosses_readiness_threshold() {
        let mut p = test_predator(0.0, 0.0);
        p.hunger = 0;
        let config = config();
        // hunger 1, 2 are below 3; hunger 3 is not
        assert_eq!(p.age(&config), LifecycleState::MateSearch);
        assert_eq!(p.age(&config), LifecycleState::MateSearch);
        assert_eq!(p.age(&config), LifecycleState::PreySearch);
        assert_eq!(p.hunger, 3);
    }

    #[test]
    fn test_age_clears_kill_cue() {
        let mut p = test_predator(0.0, 0.0);
        p.attack_success = true;
        p.age(&config());
        assert!(!p.attack_success);
    }

    #[test]
    fn test_labels() {
        assert_eq!(LifecycleState::default(), LifecycleState::Patrol);
        assert_eq!(LifecycleState::MateSearch.to_string(), "MATE SEARCH");
        assert_eq!(LifecycleState::PreySearch.as_label(), "PREY SEARCH");
        assert!(LifecycleState::Death.is_terminal());
        assert!(!LifecycleState::Patrol.is_terminal());
    }
}
