//! Coin flips.

use rand::Rng;

/// The two faces of the coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoinSide {
    /// Testa
    Heads,
    /// Croce
    Tails,
}

impl CoinSide {
    /// Label used in replies.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Heads => "testa",
            Self::Tails => "croce",
        }
    }

    /// Reply announcing this side.
    #[must_use]
    pub fn message(self) -> String {
        format!("È uscita **{}**", self.label())
    }
}

/// Flips a fair coin.
pub fn flip<R: Rng + ?Sized>(rng: &mut R) -> CoinSide {
    if rng.gen_bool(0.5) {
        CoinSide::Heads
    } else {
        CoinSide::Tails
    }
}
