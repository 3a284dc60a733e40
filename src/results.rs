use std::collections::BTreeSet;
use std::io::Write;

use crate::Number;

pub const CURRENCY: &str = "PLN";

/// Prize tiers, keyed by the number of hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prize {
    Fourth,
    Fifth,
    Jackpot,
}

impl Prize {
    pub fn for_hits(count: usize) -> Option<Prize> {
        match count {
            4 => Some(Prize::Fourth),
            5 => Some(Prize::Fifth),
            6 => Some(Prize::Jackpot),
            _ => None,
        }
    }

    pub fn payout(&self) -> u64 {
        match self {
            Prize::Fourth => 5,
            Prize::Fifth => 100,
            Prize::Jackpot => 3_000_000,
        }
    }

    fn announcement(&self) -> String {
        let payout = group_thousands(self.payout());
        match self {
            Prize::Fourth => format!("Well done! You won {payout} {CURRENCY}."),
            Prize::Fifth => format!("Great job! You won {payout} {CURRENCY}"),
            Prize::Jackpot => format!("You won {payout} {CURRENCY}!."),
        }
    }
}

/// 3000000 -> "3 000 000"
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "number"
    } else {
        "numbers"
    }
}

pub(crate) fn join_numbers(numbers: &BTreeSet<Number>) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_results(hits: &BTreeSet<Number>) -> String {
    let count = hits.len();
    let mut message = format!("You hit {} {}.\n", count, plural(count));
    if count > 0 {
        message.push_str(&format!(
            "Matched {}: {}.\n",
            plural(count),
            join_numbers(hits)
        ));
    }
    match Prize::for_hits(count) {
        Some(prize) => {
            message.push_str(&prize.announcement());
            message.push('\n');
        }
        None if count <= 3 => message.push_str("Better luck next time!\n"),
        None => {}
    }
    message
}

pub fn show_results<W: Write>(hits: &BTreeSet<Number>, output: &mut W) -> std::io::Result<()> {
    output.write_all(format_results(hits).as_bytes())?;
    output.flush()
}
