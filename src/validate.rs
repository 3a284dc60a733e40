use crate::draw::{MAX_NUMBER, MIN_NUMBER};
use crate::error::LottoError;

/// Value travelling through a validator chain. Raw console text enters as
/// `Text` and becomes `Number` once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Text(String),
    Number(i64),
}

impl Token {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Token::Number(n) => Some(*n),
            Token::Text(_) => None,
        }
    }
}

/// One step of a chain. `None` means the input was rejected.
pub trait Validator {
    fn check(&self, token: Token) -> Option<Token>;
}

impl<F> Validator for F
where
    F: Fn(Token) -> Option<Token>,
{
    fn check(&self, token: Token) -> Option<Token> {
        self(token)
    }
}

/// Accepts non-empty text made only of ascii digits.
pub fn is_number(token: Token) -> Option<Token> {
    match token {
        Token::Text(text) if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) => {
            Some(Token::Text(text))
        }
        _ => None,
    }
}

/// Parses text into an integer. A sign is accepted here, `is_number` is what
/// keeps signs out of the console chain.
pub fn to_number(token: Token) -> Option<Token> {
    match token {
        Token::Text(text) => text.parse::<i64>().ok().map(Token::Number),
        Token::Number(n) => Some(Token::Number(n)),
    }
}

pub fn is_in_range(token: Token) -> Option<Token> {
    match token {
        Token::Number(n) if (i64::from(MIN_NUMBER)..=i64::from(MAX_NUMBER)).contains(&n) => {
            Some(token)
        }
        _ => None,
    }
}

/// The chain applied to every console entry.
pub fn number_validators() -> [&'static dyn Validator; 3] {
    [&is_number, &to_number, &is_in_range]
}

/// Runs `validators` left to right, stopping at the first rejection.
/// An empty chain is a programming error and is reported as `Err`, while a
/// rejected input is `Ok(None)`.
pub fn validate(input: &str, validators: &[&dyn Validator]) -> Result<Option<Token>, LottoError> {
    if validators.is_empty() {
        return Err(LottoError::NoValidators);
    }
    Ok(validators
        .iter()
        .try_fold(Token::Text(input.to_string()), |token, validator| {
            validator.check(token)
        }))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn text(s: &str) -> Token {
        Token::Text(s.to_string())
    }

    #[test]
    fn is_number_accepts_digits_only() {
        for accepted in ["5", "0", "001", "49", "1234567890"] {
            assert_eq!(is_number(text(accepted)), Some(text(accepted)), "{accepted:?}");
        }
        for rejected in ["ten", "", "12a", "a12", " ", "!@", "1 2 3", "+42", "-1", "5.5", "5\n", "٣"] {
            assert_eq!(is_number(text(rejected)), None, "{rejected:?}");
        }
        assert_eq!(is_number(Token::Number(5)), None);
    }

    #[test]
    fn to_number_parses_integers() {
        let cases = [
            ("5", Some(5)),
            ("1", Some(1)),
            ("49", Some(49)),
            ("-1", Some(-1)),
            ("0012", Some(12)),
            ("+42", Some(42)),
            ("", None),
            ("abc", None),
            ("5.5", None),
            ("99999999999999999999999", None),
        ];
        for (input, expected) in cases {
            assert_eq!(
                to_number(text(input)),
                expected.map(Token::Number),
                "{input:?}"
            );
        }
        assert_eq!(to_number(Token::Number(7)), Some(Token::Number(7)));
    }

    #[test]
    fn is_in_range_bounds() {
        for n in -100..=100 {
            let expected = if (1..=49).contains(&n) {
                Some(Token::Number(n))
            } else {
                None
            };
            assert_eq!(is_in_range(Token::Number(n)), expected, "{n}");
        }
        assert_eq!(is_in_range(text("5")), None);
    }

    #[test]
    fn validate_various_data() {
        let full = number_validators();
        let partial: [&dyn Validator; 2] = [&is_number, &to_number];
        assert_eq!(validate("5", &full).unwrap(), Some(Token::Number(5)));
        assert_eq!(validate("49", &full).unwrap(), Some(Token::Number(49)));
        assert_eq!(validate("0", &full).unwrap(), None);
        assert_eq!(validate("ten", &full).unwrap(), None);
        assert_eq!(validate("100", &full).unwrap(), None);
        assert_eq!(validate("250", &partial).unwrap(), Some(Token::Number(250)));
        assert_eq!(validate("abc", &partial).unwrap(), None);
        // 0 is a legitimate parse result, not a rejection
        assert_eq!(validate("0", &partial).unwrap(), Some(Token::Number(0)));

        let reject_all = |_: Token| -> Option<Token> { None };
        assert_eq!(validate("5", &[&reject_all, &to_number]).unwrap(), None);
    }

    #[test]
    fn validate_fails_without_validators() {
        for input in ["5", "", "ten"] {
            let err = validate(input, &[]).unwrap_err();
            assert!(matches!(err, LottoError::NoValidators));
            assert_eq!(err.to_string(), "No validators specified");
        }
    }

    #[test]
    fn validate_chain_breaks_on_first_rejection() {
        let calls = RefCell::new(Vec::new());
        let f1 = |_: Token| -> Option<Token> {
            calls.borrow_mut().push("f1");
            None
        };
        let f2 = |_: Token| -> Option<Token> {
            calls.borrow_mut().push("f2");
            Some(Token::Number(42))
        };
        let result = validate("4", &[&f1, &f2]).unwrap();
        assert_eq!(result, None);
        assert_eq!(*calls.borrow(), vec!["f1"]);
    }
}
