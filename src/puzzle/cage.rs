//! Cage constraints: operator tags and validated cell groups
//!
//! Every cell of a puzzle belongs to exactly one cage, and every cage
//! carries an operator and a target value. Arity rules are enforced at
//! construction so an invalid cage cannot exist past its constructor.

use std::fmt;

use serde::de::{Error as _, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::io::error::{Result, computation_error, invalid_cage};
use crate::puzzle::grid::Cell;

/// Arithmetic operator attached to a cage
///
/// `Nop` marks a single-cell cage whose target is the cell value itself; it
/// serializes as JSON `null`. Subtraction is the absolute difference of a
/// two-cell cage, so every target is order independent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Sum of all cell values
    Add,
    /// Absolute difference of exactly two cell values
    Sub,
    /// Product of all cell values
    Mul,
    /// No operation; valid only for single-cell cages
    Nop,
}

impl Operator {
    /// The display symbol, or `None` for single-cell cages
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            Self::Add => Some("+"),
            Self::Sub => Some("-"),
            Self::Mul => Some("\u{d7}"),
            Self::Nop => None,
        }
    }

    /// Parse a schema operator symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "\u{d7}" => Some(Self::Mul),
            _ => None,
        }
    }

    /// Compute the target this operator produces over the given cell values
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidCage`](crate::PuzzleError::InvalidCage)
    /// when the value count violates the operator's arity, and
    /// [`PuzzleError::Computation`](crate::PuzzleError::Computation) when a
    /// product overflows the 64-bit range.
    pub fn apply(self, values: &[u8]) -> Result<u64> {
        match (self, values) {
            (Self::Nop, [single]) => Ok(u64::from(*single)),
            (Self::Sub, [a, b]) => Ok(u64::from(*a).abs_diff(u64::from(*b))),
            (Self::Add, [_, _, ..]) => Ok(values.iter().map(|&v| u64::from(v)).sum()),
            (Self::Mul, [_, _, ..]) => {
                values.iter().try_fold(1_u64, |product, &value| {
                    product
                        .checked_mul(u64::from(value))
                        .ok_or_else(|| {
                            computation_error("cage product", &"target exceeds the 64-bit range")
                        })
                })
            }
            _ => Err(invalid_cage(format!(
                "operator arity mismatch: {} over {} cells",
                self.symbol().unwrap_or("none"),
                values.len()
            ))),
        }
    }
}

impl Serialize for Operator {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.symbol() {
            Some(symbol) => serializer.serialize_str(symbol),
            None => serializer.serialize_none(),
        }
    }
}

struct OperatorVisitor;

impl<'de> Visitor<'de> for OperatorVisitor {
    type Value = Operator;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an operator symbol (\"+\", \"-\", \"\u{d7}\") or null")
    }

    fn visit_str<E>(self, symbol: &str) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Operator::from_symbol(symbol)
            .ok_or_else(|| E::invalid_value(Unexpected::Str(symbol), &self))
    }

    fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Operator::Nop)
    }

    fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Operator::Nop)
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(Self)
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(OperatorVisitor)
    }
}

/// A connected group of cells bound by one arithmetic constraint
///
/// Cells are kept sorted row-major, so two cages covering the same cells
/// with the same label compare equal regardless of build order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cage {
    operator: Operator,
    #[serde(rename = "elements")]
    cells: Vec<Cell>,
    value: u32,
}

impl Cage {
    /// Create a cage, enforcing the operator arity rules
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidCage`](crate::PuzzleError::InvalidCage)
    /// if the cage is empty, contains duplicate cells, pairs `Nop` with more
    /// than one cell, pairs subtraction with anything but exactly two cells,
    /// or pairs an arithmetic operator with a single cell.
    pub fn new(operator: Operator, cells: impl Into<Vec<Cell>>, value: u32) -> Result<Self> {
        let mut cells = cells.into();
        cells.sort_unstable();

        match (operator, cells.len()) {
            (_, 0) => {
                return Err(invalid_cage("cage must contain at least one cell"));
            }
            (Operator::Nop, 1) | (Operator::Sub, 2) => {}
            (Operator::Nop, _) => {
                return Err(invalid_cage("cage with multiple cells must carry an operator"));
            }
            (Operator::Sub, count) => {
                return Err(invalid_cage(format!(
                    "subtraction cage requires exactly two cells, found {count}"
                )));
            }
            (single_op, 1) => {
                return Err(invalid_cage(format!(
                    "operator {} requires more than one cell",
                    single_op.symbol().unwrap_or("none")
                )));
            }
            _ => {}
        }

        if cells
            .windows(2)
            .any(|pair| pair.first() == pair.get(1))
        {
            return Err(invalid_cage("cage contains duplicate cells"));
        }

        Ok(Self {
            operator,
            cells,
            value,
        })
    }

    /// The operator on the cage
    pub const fn operator(&self) -> Operator {
        self.operator
    }

    /// The cells in the cage, sorted row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The arithmetic target of the cage
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Number of cells in the cage
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the cage has no cells (never true for a constructed cage)
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Test whether the cells form one region under 4-directional adjacency
    pub fn is_connected(&self) -> bool {
        if self.cells.is_empty() {
            return false;
        }

        let mut visited = vec![false; self.cells.len()];
        if let Some(first) = visited.first_mut() {
            *first = true;
        }
        let mut stack = vec![0_usize];
        let mut reached = 1;

        while let Some(index) = stack.pop() {
            let Some(&cell) = self.cells.get(index) else {
                continue;
            };
            for (other_index, &other) in self.cells.iter().enumerate() {
                let Some(slot) = visited.get_mut(other_index) else {
                    continue;
                };
                if !*slot && cell.is_adjacent(other) {
                    *slot = true;
                    reached += 1;
                    stack.push(other_index);
                }
            }
        }

        reached == self.cells.len()
    }
}

#[derive(Deserialize)]
struct RawCage {
    operator: Operator,
    elements: Vec<Cell>,
    value: u32,
}

impl<'de> Deserialize<'de> for Cage {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawCage::deserialize(deserializer)?;
        Self::new(raw.operator, raw.elements, raw.value).map_err(D::Error::custom)
    }
}
