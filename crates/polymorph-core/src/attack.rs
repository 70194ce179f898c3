//! Attack resolution and colour imprinting

use crate::predator::Predator;
use crate::prey::Prey;
use crate::rng::SimRng;

/// Hunger removed by one kill
pub const SATIETY: i32 = 5;

impl Predator {
    /// Try to eat `prey`. Returns whether the attack succeeded.
    ///
    /// One uniform draw α in `[0, 1)` is taken; the attack succeeds when
    /// `α > 1 - attack_chance`. On success the imprint is pulled toward the
    /// prey's colouration by `imprint_factor`, hunger drops by [`SATIETY`], the
    /// prey is flagged dead and `attack_success` is set for this tick.
    ///
    /// An absent prey is a no-op: nothing is drawn and nothing changes.
    pub fn attack<P: Prey, R: SimRng + ?Sized>(
        &mut self,
        prey: Option<&mut P>,
        attack_chance: f64,
        imprint_factor: f64,
        rng: &mut R,
    ) -> bool {
        let Some(prey) = prey else {
            return false;
        };

        let alpha = rng.next_unit();
        if alpha <= 1.0 - attack_chance {
            return false;
        }

        let colouration = prey.colouration();
        self.colour_imprint = self.colour_imprint.imprint_toward(&colouration, imprint_factor);
        self.hunger -= SATIETY;
        prey.kill();
        self.attack_success = true;

        let position = prey.position();
        log::info!(
            "prey eaten at ({}, {}) colouration={}\neater:\n{}",
            position.x,
            position.y,
            colouration,
            self
        );
        true
    }
}
