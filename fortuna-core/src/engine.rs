use std::time::Duration;

use rand::Rng;

use crate::option_set::{OptionSet, WheelOption};

/// Degrees every spin adds before the random jitter: five full turns, so
/// consecutive spins always travel visibly.
pub const SPIN_TURNS_DEG: f64 = 1800.0;

/// How long a spin takes to settle.
///
/// Contract between the engine and the presentation's animation; not tunable
/// mid-spin. The driver schedules `settle` after this delay.
pub const SPIN_DURATION: Duration = Duration::from_secs(4);

/// Lifecycle of a spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinPhase {
    #[default]
    Idle,
    Spinning,
    Settled,
}

/// Maps spin requests to a randomized target rotation and resolves the
/// winning option once the rotation settles.
///
/// The engine never owns the options; the `OptionSet` is passed into each
/// transition so the caller keeps a single source of truth.
#[derive(Debug, Clone, Default)]
pub struct SpinEngine {
    rotation: f64,
    phase: SpinPhase,
    winner: Option<WheelOption>,
}

impl SpinEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated rotation in degrees. Monotonically increasing across
    /// spins and retained through dismissal, so every spin is guaranteed at
    /// least five additional turns.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == SpinPhase::Spinning
    }

    pub fn winner(&self) -> Option<&WheelOption> {
        self.winner.as_ref()
    }

    /// Starts a spin with a uniform random stopping jitter.
    ///
    /// Rejected (state unchanged, returns false) while already spinning or
    /// with fewer than two options; a one-option wheel has nothing to select.
    pub fn spin<R: Rng>(&mut self, options: &OptionSet, rng: &mut R) -> bool {
        self.begin_spin(options, rng.gen_range(0.0..360.0))
    }

    /// Starts a spin with the stopping jitter supplied by the caller.
    ///
    /// `jitter` is the `U(0,360)` term of `rotation + 1800 + U(0,360)`;
    /// taking it as a parameter lets tests fix the draw and assert the exact
    /// winner. Same rejection rules as `spin`.
    pub fn begin_spin(&mut self, options: &OptionSet, jitter: f64) -> bool {
        if self.phase == SpinPhase::Spinning || options.len() < 2 {
            return false;
        }
        self.rotation += SPIN_TURNS_DEG + jitter;
        self.winner = None;
        self.phase = SpinPhase::Spinning;
        true
    }

    /// Finalizes the current spin and resolves the winner.
    ///
    /// Called by the driver once `SPIN_DURATION` has elapsed; a no-op in any
    /// other phase. When no winner can be resolved (the set was emptied
    /// mid-spin) the engine returns to idle without signaling a result.
    pub fn settle(&mut self, options: &OptionSet) -> Option<&WheelOption> {
        if self.phase != SpinPhase::Spinning {
            return None;
        }
        self.winner = winning_index(self.rotation, options.len())
            .and_then(|index| options.get(index))
            .cloned();
        self.phase = if self.winner.is_some() {
            SpinPhase::Settled
        } else {
            SpinPhase::Idle
        };
        self.winner.as_ref()
    }

    /// Clears the settled winner and returns to idle. The accumulated
    /// rotation is retained. Re-spinning from `Settled` does not require a
    /// dismissal first.
    pub fn dismiss(&mut self) {
        if self.phase == SpinPhase::Settled {
            self.phase = SpinPhase::Idle;
            self.winner = None;
        }
    }
}

/// Index of the slice resting under the fixed pointer for a rotation.
///
/// The rotation value turns the wheel clockwise while slice 0 is drawn from
/// angle 0 counter-clockwise, so the rotation is inverted before mapping onto
/// slices. The floored index is clamped into `[0, count - 1]` to absorb
/// floating-point rounding at exact slice edges.
pub fn winning_index(rotation: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let effective = (360.0 - rotation.rem_euclid(360.0)).rem_euclid(360.0);
    let slice = 360.0 / count as f64;
    let index = (effective / slice).floor() as usize;
    Some(index.min(count - 1))
}
