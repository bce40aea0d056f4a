use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One marginal tax band.
///
/// `upper_bound` is the taxable-income ceiling of the band; `None` marks the
/// open-ended top band. The lower bound is implied by the previous band (zero
/// for the first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

/// Errors raised when constructing a [`BracketTable`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    /// A bracket table must contain at least one band.
    #[error("bracket table must contain at least one bracket")]
    Empty,

    /// Every marginal rate must be a fraction between 0 and 1.
    #[error("bracket rate must be between 0 and 1, got {0}")]
    RateOutOfRange(Decimal),

    /// Upper bounds must be positive and strictly increasing.
    #[error("bracket upper bound {found} does not increase past {previous}")]
    BoundsOutOfOrder { previous: Decimal, found: Decimal },

    /// Only the final band may be open-ended.
    #[error("open-ended bracket is only allowed in the last position")]
    OpenEndedBeforeLast,

    /// The final band must be open-ended so the table covers all income.
    #[error("the last bracket must be open-ended")]
    MissingOpenEndedBracket,
}

/// An ordered progressive bracket table.
///
/// Construction validates the invariants once, so calculation code can walk
/// the bands without re-checking them: non-empty, rates in `[0, 1]`, strictly
/// increasing positive upper bounds, and exactly one open-ended band in the
/// last position. The bands therefore partition `[0, ∞)` with no gaps or
/// overlaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketTable {
    brackets: Vec<TaxBracket>,
}

impl BracketTable {
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, BracketTableError> {
        let Some(last) = brackets.last() else {
            return Err(BracketTableError::Empty);
        };
        if last.upper_bound.is_some() {
            return Err(BracketTableError::MissingOpenEndedBracket);
        }

        let mut previous = Decimal::ZERO;
        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(BracketTableError::RateOutOfRange(bracket.rate));
            }
            match bracket.upper_bound {
                Some(bound) => {
                    if bound <= previous {
                        return Err(BracketTableError::BoundsOutOfOrder {
                            previous,
                            found: bound,
                        });
                    }
                    previous = bound;
                }
                None if index + 1 < brackets.len() => {
                    return Err(BracketTableError::OpenEndedBeforeLast);
                }
                None => {}
            }
        }

        Ok(Self { brackets })
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Rate of the first band, used to value non-refundable credits.
    pub fn lowest_rate(&self) -> Decimal {
        self.brackets[0].rate
    }

    /// The band `income` falls in.
    ///
    /// Income exactly equal to a band's upper bound belongs to the band
    /// *ending* at that bound, not the next one. Income beyond every finite
    /// bound lands in the open-ended top band, so the lookup is total.
    pub fn bracket_for(&self, income: Decimal) -> &TaxBracket {
        self.brackets
            .iter()
            .find(|bracket| match bracket.upper_bound {
                Some(bound) => income <= bound,
                None => true,
            })
            .unwrap_or_else(|| unreachable!("validated table ends open-ended"))
    }
}
