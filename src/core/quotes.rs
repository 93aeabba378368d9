//! Random quote selection

use crate::core::error::DashboardError;
use crate::core::models::Quote;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Pick a quote uniformly at random using the thread RNG.
///
/// # Errors
/// Returns `EmptyCollection` if `quotes` is empty.
pub fn pick_random(quotes: &[Quote]) -> Result<&Quote, DashboardError> {
    pick_random_with(quotes, &mut rand::rng())
}

/// Pick a quote uniformly at random with a caller-supplied RNG.
///
/// # Errors
/// Returns `EmptyCollection` if `quotes` is empty.
pub fn pick_random_with<'a, R: Rng + ?Sized>(
    quotes: &'a [Quote],
    rng: &mut R,
) -> Result<&'a Quote, DashboardError> {
    quotes
        .choose(rng)
        .ok_or(DashboardError::EmptyCollection("quote"))
}

/// Pick a random quote, or the built-in fallback when there is none.
#[must_use]
pub fn pick_or_fallback(quotes: &[Quote]) -> Quote {
    pick_random(quotes).map_or_else(|_| Quote::fallback(), Clone::clone)
}
