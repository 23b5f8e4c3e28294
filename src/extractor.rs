//! Question-understanding pass: topic detection and expression extraction.
//!
//! Both functions expect already-lowercased text; callers lowercase once at
//! the top of the pipeline.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::topics::{Topic, TopicCatalog};
use crate::types::{Expression, Operator};

static EXPRESSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*([+\-*/])\s*(\d+)").expect("Invalid regex"));

/// Detect which math topic a question is about.
///
/// Topics are scanned in the catalog's fixed order, and within a topic the
/// trigger words are checked in listed order; the first topic with any
/// matching trigger wins. There is no scoring and no multi-topic detection.
pub fn detect_topic(catalog: &TopicCatalog, text: &str) -> Option<Topic> {
    for entry in catalog.entries() {
        for trigger in &entry.triggers {
            if text.contains(trigger) {
                return Some(entry.topic);
            }
        }
    }
    None
}

/// Extract the first binary arithmetic expression from the text, like
/// "2 + 3" or "10/4". Returns the matched substring verbatim along with the
/// parsed operands and operator, or `None` if no expression is present.
pub fn extract_expression(text: &str) -> Option<Expression> {
    let caps = EXPRESSION_PATTERN.captures(text)?;

    // The pattern only admits digit runs and one of + - * /, so the
    // sub-parses cannot fail on shape. Operands too wide for i64 are
    // treated as no expression at all, so such text falls through to topic
    // detection, where the operator character itself may still match a
    // trigger.
    let operand1: i64 = caps[1].parse().ok()?;
    let operator = Operator::from_char(caps[2].chars().next()?)?;
    let operand2: i64 = caps[3].parse().ok()?;

    Some(Expression {
        raw: caps[0].to_string(),
        operand1,
        operator,
        operand2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_topic_addition_triggers() {
        let catalog = TopicCatalog::new();
        assert_eq!(
            detect_topic(&catalog, "can you explain sums to me"),
            Some(Topic::Addition)
        );
        assert_eq!(
            detect_topic(&catalog, "qué es la adicion"),
            Some(Topic::Addition)
        );
    }

    #[test]
    fn test_detect_topic_subtraction_and_multiplication() {
        let catalog = TopicCatalog::new();
        assert_eq!(
            detect_topic(&catalog, "quiero restar dos numeros"),
            Some(Topic::Subtraction)
        );
        assert_eq!(
            detect_topic(&catalog, "enséñame la tabla del 7"),
            Some(Topic::Multiplication)
        );
    }

    #[test]
    fn test_detect_topic_order_is_stable() {
        let catalog = TopicCatalog::new();
        // Contains both an addition trigger ("sum") and a subtraction
        // trigger ("rest"); addition is checked first and wins.
        assert_eq!(
            detect_topic(&catalog, "sumas y restas"),
            Some(Topic::Addition)
        );
    }

    #[test]
    fn test_detect_topic_none() {
        let catalog = TopicCatalog::new();
        assert_eq!(detect_topic(&catalog, "hola, cómo estás"), None);
    }

    #[test]
    fn test_extract_expression_with_spaces() {
        let expr = extract_expression("what is 3 + 4?").unwrap();
        assert_eq!(expr.raw, "3 + 4");
        assert_eq!(expr.operand1, 3);
        assert_eq!(expr.operator, Operator::Add);
        assert_eq!(expr.operand2, 4);
    }

    #[test]
    fn test_extract_expression_without_spaces() {
        let expr = extract_expression("calcula 10/4 por favor").unwrap();
        assert_eq!(expr.raw, "10/4");
        assert_eq!(expr.operator, Operator::Div);
    }

    #[test]
    fn test_extract_expression_first_match_wins() {
        let expr = extract_expression("2 + 3 and then 5 * 6").unwrap();
        assert_eq!(expr.raw, "2 + 3");
    }

    #[test]
    fn test_extract_expression_absent() {
        assert!(extract_expression("explain sums to me").is_none());
        assert!(extract_expression("3 plus 4").is_none());
    }

    #[test]
    fn test_extract_expression_rejects_operands_wider_than_i64() {
        assert!(extract_expression("99999999999999999999 + 1").is_none());
        assert!(extract_expression(&format!("{} + 1", i64::MAX)).is_some());
    }
}
