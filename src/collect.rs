use std::collections::BTreeSet;
use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::draw::MAX_NUMBER;
use crate::error::LottoError;
use crate::validate::{number_validators, validate};
use crate::Number;

pub const PROMPT: &str = "Please enter a number:\n";

/// Prompts on `output` and reads lines from `input` until `amount` distinct
/// valid numbers are collected. Invalid and repeated entries are dropped
/// without a message.
pub fn get_user_numbers<R: BufRead, W: Write>(
    amount: usize,
    input: &mut R,
    output: &mut W,
) -> Result<BTreeSet<Number>, LottoError> {
    if amount > usize::from(MAX_NUMBER) {
        return Err(LottoError::SampleOutOfRange {
            amount: amount as i64,
        });
    }
    let validators = number_validators();
    let mut user_numbers = BTreeSet::new();
    let mut line = String::new();
    while user_numbers.len() < amount {
        writeln!(output, "{PROMPT}")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            warn!(
                "input closed after {} of {} numbers",
                user_numbers.len(),
                amount
            );
            return Err(LottoError::InputClosed);
        }
        let entry = line.trim_end_matches(&['\r', '\n'][..]);
        let number = validate(entry, &validators)?
            .and_then(|token| token.as_number())
            .and_then(|n| Number::try_from(n).ok());
        match number {
            Some(n) => {
                if !user_numbers.insert(n) {
                    debug!("duplicate entry {n}");
                }
            }
            None => debug!("rejected entry {entry:?}"),
        }
    }
    Ok(user_numbers)
}
