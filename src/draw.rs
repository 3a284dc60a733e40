use std::collections::BTreeSet;

use log::debug;
use rand::seq::index;
use rand::Rng;

use crate::error::LottoError;
use crate::Number;

pub const MIN_NUMBER: Number = 1;
pub const MAX_NUMBER: Number = 49;

fn population() -> usize {
    usize::from(MAX_NUMBER - MIN_NUMBER) + 1
}

/// Checks that `amount` numbers can be drawn from the pool and returns it as a
/// sample size.
pub fn check_amount(amount: i64) -> Result<usize, LottoError> {
    if amount == 0 {
        return Err(LottoError::NonPositiveAmount);
    }
    usize::try_from(amount)
        .ok()
        .filter(|&size| size <= population())
        .ok_or(LottoError::SampleOutOfRange { amount })
}

/// Draws `amount` distinct numbers uniformly, without replacement.
pub fn draw_numbers<R: Rng + ?Sized>(
    rng: &mut R,
    amount: i64,
) -> Result<BTreeSet<Number>, LottoError> {
    let size = check_amount(amount)?;
    let drawn: BTreeSet<Number> = index::sample(rng, population(), size)
        .into_iter()
        // indices are below the population size, which fits in a Number
        .map(|i| MIN_NUMBER + i as Number)
        .collect();
    debug!("drawn numbers: {:?}", drawn);
    Ok(drawn)
}
