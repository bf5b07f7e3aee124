//! Dice expressions (`<count>d<sides>`) and their rolls.

use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Reply sent when the dice expression cannot be understood.
pub const USAGE: &str = "Il formato del comando è **?roll <numeroDadi>d<dado>**\n\
    es. **?roll 3d10**  => *lancia 3 dadi a 10 facce*";

/// Upper bound on dice per roll, keeping the reply within one message.
pub const MAX_DICE: u32 = 100;

/// A parsed `<count>d<sides>` expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceExpr {
    /// Number of dice thrown
    pub count: u32,
    /// Faces on each die
    pub sides: u32,
}

/// Why a dice expression was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDice;

impl fmt::Display for InvalidDice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid dice expression")
    }
}

impl std::error::Error for InvalidDice {}

impl FromStr for DiceExpr {
    type Err = InvalidDice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('d');
        let (Some(count), Some(sides), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(InvalidDice);
        };

        let count: u32 = count.trim().parse().map_err(|_| InvalidDice)?;
        let sides: u32 = sides.trim().parse().map_err(|_| InvalidDice)?;

        if count == 0 || count > MAX_DICE || sides == 0 {
            return Err(InvalidDice);
        }

        Ok(Self { count, sides })
    }
}

/// The outcome of a roll, in throw order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceRoll {
    values: Vec<u32>,
}

impl DiceRoll {
    /// Wraps already-drawn values.
    #[must_use]
    pub const fn from_values(values: Vec<u32>) -> Self {
        Self { values }
    }

    /// Individual die results.
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Sum of all dice.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.values.iter().copied().map(u64::from).sum()
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{joined}\nTot = {}", self.total())
    }
}

/// Rolls using `draw(sides)` as the source of each die result.
pub fn roll_with<F>(expr: DiceExpr, mut draw: F) -> DiceRoll
where
    F: FnMut(u32) -> u32,
{
    DiceRoll::from_values((0..expr.count).map(|_| draw(expr.sides)).collect())
}

/// Rolls every die uniformly in `[1, sides]`.
pub fn roll<R: Rng + ?Sized>(expr: DiceExpr, rng: &mut R) -> DiceRoll {
    roll_with(expr, |sides| rng.gen_range(1..=sides))
}

/// Full reply for a `roll` invocation: the result, or [`USAGE`].
pub fn roll_reply<R: Rng + ?Sized>(input: Option<&str>, rng: &mut R) -> String {
    match input.map(str::parse::<DiceExpr>) {
        Some(Ok(expr)) => roll(expr, rng).to_string(),
        _ => USAGE.to_string(),
    }
}
