//! Per-tick simulation systems, run in a fixed order by the engine.

pub mod detection;
pub mod dynamics;
pub mod power;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Uniform jitter in `(-span/2, span/2)`.
pub(crate) fn jitter(rng: &mut ChaCha8Rng, span: f64) -> f64 {
    (rng.gen::<f64>() - 0.5) * span
}
