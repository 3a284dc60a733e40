use std::collections::BTreeSet;

use crate::Number;

pub fn check_hits(user_numbers: &BTreeSet<Number>, drawn_numbers: &BTreeSet<Number>) -> BTreeSet<Number> {
    user_numbers.intersection(drawn_numbers).copied().collect()
}
