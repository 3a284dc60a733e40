pub mod cli;
pub mod collect;
pub mod draw;
pub mod error;
pub mod game;
pub mod hits;
pub mod results;
pub mod validate;

pub use error::LottoError;
pub use game::{play, Game, LottoConfig};

/// A lotto ball, always within `draw::MIN_NUMBER..=draw::MAX_NUMBER` once validated.
pub type Number = u8;
