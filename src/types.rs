//! Wire and domain types shared across the question pipeline.

use serde::{Deserialize, Serialize};

use crate::topics::Topic;

// ---------------------------------------------------------------------------
// Arithmetic expression
// ---------------------------------------------------------------------------

/// Binary arithmetic operator recognized in free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Map an operator character from the expression pattern.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    /// Visualization kind for this operator, if it has one.
    ///
    /// Division deliberately has no visualization.
    pub fn visualization_kind(self) -> Option<Topic> {
        match self {
            Operator::Add => Some(Topic::Addition),
            Operator::Sub => Some(Topic::Subtraction),
            Operator::Mul => Some(Topic::Multiplication),
            Operator::Div => None,
        }
    }
}

/// A single binary arithmetic expression found in question text.
///
/// `raw` is the matched substring verbatim, preserved for echoing back in
/// the reply text. Constructed per request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub raw: String,
    pub operand1: i64,
    pub operator: Operator,
    pub operand2: i64,
}

// ---------------------------------------------------------------------------
// Visualization payload
// ---------------------------------------------------------------------------

/// Flat descriptive record the frontend renders as a picture of the
/// operation. Field names (`type`, `num1`, `num2`, `result`) are part of the
/// frontend contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visualization {
    #[serde(rename = "type")]
    pub kind: Topic,
    pub num1: i64,
    pub num2: i64,
    pub result: i64,
}

// ---------------------------------------------------------------------------
// Reply
// ---------------------------------------------------------------------------

/// One answer to one question: response text plus an optional visualization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub visualization: Option<Visualization>,
}

impl Reply {
    pub fn new(text: impl Into<String>, visualization: Option<Visualization>) -> Self {
        Self {
            text: text.into(),
            visualization,
        }
    }

    /// Reply carrying only text, no visualization.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }
}
