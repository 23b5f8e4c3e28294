//! Arithmetic evaluation of extracted expressions.
//!
//! Evaluation is a typed fallible computation: every failure kind is a
//! variant of [`EvalError`], and [`reply_for`] folds failures into friendly
//! text-only replies at the boundary. Nothing in here panics on user input.

use thiserror::Error;

use crate::types::{Expression, Operator, Reply, Visualization};

/// Ways evaluating an expression can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    /// Unreachable through the extractor's pattern, handled defensively.
    #[error("unrecognized operator")]
    UnknownOperator,

    #[error("arithmetic overflow evaluating '{0}'")]
    Overflow(String),
}

/// Outcome of a successful evaluation: the computed value plus the
/// visualization kind it carries, if any.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// Integer result with a visualization (addition, subtraction,
    /// multiplication).
    Exact(i64, Visualization),
    /// Real-valued result with no visualization (division).
    Real(f64),
}

/// Evaluate a parsed expression.
pub fn evaluate(expr: &Expression) -> Result<Evaluation, EvalError> {
    let (a, b) = (expr.operand1, expr.operand2);
    let result = match expr.operator {
        Operator::Add => a.checked_add(b),
        Operator::Sub => a.checked_sub(b),
        Operator::Mul => a.checked_mul(b),
        Operator::Div => {
            if b == 0 {
                return Err(EvalError::DivisionByZero);
            }
            // Real-valued division, not integer division.
            return Ok(Evaluation::Real(a as f64 / b as f64));
        }
    };
    let result = result.ok_or_else(|| EvalError::Overflow(expr.raw.clone()))?;

    let kind = expr
        .operator
        .visualization_kind()
        .ok_or(EvalError::UnknownOperator)?;

    Ok(Evaluation::Exact(
        result,
        Visualization {
            kind,
            num1: a,
            num2: b,
            result,
        },
    ))
}

/// Evaluate an expression and render the outcome as a reply, converting
/// every failure into a text-only reply rather than propagating it.
pub fn reply_for(expr: &Expression) -> Reply {
    match evaluate(expr) {
        Ok(Evaluation::Exact(result, viz)) => Reply::new(
            format!("The result of {} is {}.", expr.raw, result),
            Some(viz),
        ),
        // f64 Display drops trailing ".0", so 6 / 3 renders as "2".
        Ok(Evaluation::Real(result)) => {
            Reply::text_only(format!("The result of {} is {}.", expr.raw, result))
        }
        Err(EvalError::DivisionByZero) => Reply::text_only("I can't divide by zero."),
        Err(EvalError::UnknownOperator) => Reply::text_only("I don't recognize that operation."),
        Err(err @ EvalError::Overflow(_)) => {
            tracing::warn!("expression evaluation failed: {}", err);
            Reply::text_only(format!("I couldn't solve that operation: {}.", err))
        }
    }
}
