use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

use log::info;
use rand::Rng;

use crate::collect::get_user_numbers;
use crate::draw::{check_amount, draw_numbers};
use crate::error::LottoError;
use crate::hits::check_hits;
use crate::results::{join_numbers, show_results};
use crate::Number;

pub const PLAY_AGAIN_PROMPT: &str = "Do you want to play again? (y/n)";
pub const GAME_OVER: &str = "Game Over!";

/// How many numbers are picked and drawn per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LottoConfig {
    amount: usize,
}

impl LottoConfig {
    pub fn new(amount: i64) -> Result<Self, LottoError> {
        Ok(Self {
            amount: check_amount(amount)?,
        })
    }

    pub fn amount(&self) -> usize {
        self.amount
    }
}

impl Default for LottoConfig {
    fn default() -> Self {
        Self { amount: 5 }
    }
}

pub fn wants_another_round(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}

pub struct Game<R, W, G> {
    config: LottoConfig,
    input: R,
    output: W,
    rng: G,
}

impl<R: BufRead, W: Write, G: Rng> Game<R, W, G> {
    pub fn new(config: LottoConfig, input: R, output: W, rng: G) -> Self {
        Self {
            config,
            input,
            output,
            rng,
        }
    }

    /// Plays a single round and returns the hits.
    pub fn play_round(&mut self) -> Result<BTreeSet<Number>, LottoError> {
        let amount = self.config.amount;
        let user_numbers = get_user_numbers(amount, &mut self.input, &mut self.output)?;
        let drawn_numbers = draw_numbers(&mut self.rng, amount as i64)?;
        writeln!(self.output, "Drawn numbers: {}.", join_numbers(&drawn_numbers))?;
        let hits = check_hits(&user_numbers, &drawn_numbers);
        info!("round finished with {} hits", hits.len());
        show_results(&hits, &mut self.output)?;
        Ok(hits)
    }

    fn ask_play_again(&mut self) -> Result<bool, LottoError> {
        writeln!(self.output, "{PLAY_AGAIN_PROMPT}")?;
        self.output.flush()?;
        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            info!("input closed at play again prompt");
            return Ok(false);
        }
        Ok(wants_another_round(answer.trim_end_matches(&['\r', '\n'][..])))
    }

    /// Runs rounds until the player declines another one. Returns the number
    /// of rounds played.
    pub fn play(&mut self) -> Result<usize, LottoError> {
        let mut rounds = 0;
        loop {
            rounds += 1;
            info!("starting round {rounds}");
            self.play_round()?;
            if !self.ask_play_again()? {
                break;
            }
        }
        writeln!(self.output, "{GAME_OVER}")?;
        self.output.flush()?;
        Ok(rounds)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Plays on the console with an OS-seeded generator.
pub fn play(config: LottoConfig) -> Result<usize, LottoError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = Game::new(config, stdin.lock(), stdout.lock(), rand::rng());
    game.play()
}
