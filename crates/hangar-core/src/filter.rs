//! Characteristic value predicates for the filter engine.
//!
//! Stored values are opaque strings, so comparison is dual-mode: the four
//! ordering operators and the range operator work on numbers only, while
//! equality and inequality compare numerically when both sides parse and
//! fall back to case-insensitive trimmed text otherwise. Stored values
//! that fail to parse are silently excluded from ordering comparisons;
//! only the query-side operand is validated.

use std::fmt;
use std::str::FromStr;

use crate::error::{HangarError, Result};
use crate::numeric::parse_numeric;

/// Comparison operator for a characteristic filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    /// Closed-range membership over two bounds, inclusive on both ends
    Between,
}

impl FilterOp {
    /// Operators that require numeric operands on the query side.
    pub fn is_numeric_only(self) -> bool {
        matches!(
            self,
            FilterOp::Gt | FilterOp::Ge | FilterOp::Lt | FilterOp::Le | FilterOp::Between
        )
    }
}

impl FromStr for FilterOp {
    type Err = HangarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "=" | "==" => Ok(FilterOp::Eq),
            "!=" | "<>" => Ok(FilterOp::Ne),
            ">" => Ok(FilterOp::Gt),
            ">=" => Ok(FilterOp::Ge),
            "<" => Ok(FilterOp::Lt),
            "<=" => Ok(FilterOp::Le),
            "in" | "between" => Ok(FilterOp::Between),
            other => Err(HangarError::Validation(format!(
                "unknown filter operator '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            FilterOp::Eq => "=",
            FilterOp::Ne => "!=",
            FilterOp::Gt => ">",
            FilterOp::Ge => ">=",
            FilterOp::Lt => "<",
            FilterOp::Le => "<=",
            FilterOp::Between => "in",
        };
        f.write_str(symbol)
    }
}

/// A compiled filter predicate over stored characteristic values.
///
/// Construction validates the query-side operands; evaluation never fails.
#[derive(Debug, Clone)]
pub struct ValuePredicate {
    op: FilterOp,
    text: String,
    number: Option<f64>,
    bounds: (f64, f64),
}

impl ValuePredicate {
    /// Compile a predicate from an operator and its operand(s).
    ///
    /// # Errors
    ///
    /// Returns `HangarError::Validation` if a numeric operator is given a
    /// non-numeric operand, or if the range operator is missing its second
    /// bound.
    pub fn new(op: FilterOp, operand: &str, upper: Option<&str>) -> Result<Self> {
        let mut predicate = Self {
            op,
            text: operand.trim().to_lowercase(),
            number: parse_numeric(operand),
            bounds: (0.0, 0.0),
        };

        match op {
            FilterOp::Between => {
                let upper = upper.ok_or_else(|| {
                    HangarError::Validation("range filter requires two bounds".to_string())
                })?;
                let a = require_numeric(operand)?;
                let b = require_numeric(upper)?;
                // Smaller supplied bound is the lower edge regardless of
                // argument order.
                predicate.bounds = if a <= b { (a, b) } else { (b, a) };
            }
            FilterOp::Gt | FilterOp::Ge | FilterOp::Lt | FilterOp::Le => {
                predicate.number = Some(require_numeric(operand)?);
            }
            FilterOp::Eq | FilterOp::Ne => {}
        }

        Ok(predicate)
    }

    /// Evaluate the predicate against one stored value.
    pub fn matches(&self, stored: &str) -> bool {
        match self.op {
            FilterOp::Eq => self.equals(stored),
            FilterOp::Ne => !self.equals(stored),
            FilterOp::Gt => self.compare(stored, |s, q| s > q),
            FilterOp::Ge => self.compare(stored, |s, q| s >= q),
            FilterOp::Lt => self.compare(stored, |s, q| s < q),
            FilterOp::Le => self.compare(stored, |s, q| s <= q),
            FilterOp::Between => match parse_numeric(stored) {
                Some(s) => self.bounds.0 <= s && s <= self.bounds.1,
                None => false,
            },
        }
    }

    /// Numeric when both sides parse, case-insensitive trimmed text otherwise.
    fn equals(&self, stored: &str) -> bool {
        if let (Some(query), Some(stored)) = (self.number, parse_numeric(stored)) {
            return stored == query;
        }
        stored.trim().to_lowercase() == self.text
    }

    fn compare(&self, stored: &str, cmp: impl Fn(f64, f64) -> bool) -> bool {
        match (parse_numeric(stored), self.number) {
            (Some(s), Some(q)) => cmp(s, q),
            // Non-numeric stored values ("N/A") are excluded, not a failure.
            _ => false,
        }
    }
}

fn require_numeric(operand: &str) -> Result<f64> {
    parse_numeric(operand).ok_or_else(|| {
        HangarError::Validation(format!("filter operand '{}' is not numeric", operand))
    })
}
