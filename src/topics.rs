//! Math topics and their fixed reference data.
//!
//! The catalog of canned explanations, worked examples, and trigger words is
//! immutable after startup: it is built once in `main` and shared by
//! reference into the responder. Trigger words include the Spanish forms the
//! assistant's original audience uses.

use serde::{Deserialize, Serialize};

/// A math topic the assistant can explain.
///
/// Order matters: topic detection scans in this order and the first topic
/// with a matching trigger wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Addition,
    Subtraction,
    Multiplication,
}

impl Topic {
    /// All topics in detection order.
    pub const ALL: [Topic; 3] = [Topic::Addition, Topic::Subtraction, Topic::Multiplication];
}

/// Reference data for one topic: trigger words for detection, canned
/// explanations, and worked examples appended to every explanation.
#[derive(Debug, Clone)]
pub struct TopicEntry {
    pub topic: Topic,
    pub triggers: Vec<&'static str>,
    pub responses: Vec<&'static str>,
    pub examples: Vec<&'static str>,
}

/// Immutable catalog of all topic reference data.
#[derive(Debug, Clone)]
pub struct TopicCatalog {
    entries: Vec<TopicEntry>,
}

impl TopicCatalog {
    /// Build the catalog with the fixed topic tables.
    pub fn new() -> Self {
        let entries = vec![
            TopicEntry {
                topic: Topic::Addition,
                triggers: vec!["sum", "mas", "+", "agreg", "junt", "añad", "adicion"],
                responses: vec![
                    "Addition is a mathematical operation that combines two or more \
                     numbers to obtain a total. It is written with the + symbol.",
                    "When we add, we are putting quantities together to get a total. \
                     It is one of the basic operations of arithmetic.",
                ],
                examples: vec!["24 + 35 = 59", "8 + 7 = 15", "45 + 38 = 83"],
            },
            TopicEntry {
                topic: Topic::Subtraction,
                triggers: vec![
                    "rest", "menos", "quitar", "diferencia", "sustrae", "-", "sacar",
                ],
                responses: vec![
                    "Subtraction is an operation that takes one quantity away from \
                     another to find the difference between them. It is written with \
                     the - symbol.",
                    "Subtracting means finding the difference between two numbers. \
                     It is the inverse operation of addition.",
                ],
                examples: vec!["45 - 23 = 22", "32 - 15 = 17", "50 - 25 = 25"],
            },
            TopicEntry {
                topic: Topic::Multiplication,
                triggers: vec!["multip", "por", "veces", "*", "producto", "tabla"],
                responses: vec![
                    "Multiplication is a mathematical operation that adds a number to \
                     itself as many times as another number indicates. It is written \
                     with the × symbol.",
                    "Multiplying means repeating the addition of a number a set number \
                     of times, which lets us shorten repeated addition.",
                ],
                examples: vec!["3 × 4 = 12", "5 × 6 = 30", "2 × 7 = 14"],
            },
        ];
        Self { entries }
    }

    /// Entries in detection order.
    pub fn entries(&self) -> &[TopicEntry] {
        &self.entries
    }

    /// Reference data for a single topic.
    pub fn entry(&self, topic: Topic) -> &TopicEntry {
        // Topic::ALL and the entry list cover the same variants.
        self.entries
            .iter()
            .find(|e| e.topic == topic)
            .unwrap_or(&self.entries[0])
    }
}

impl Default for TopicCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(Topic::Multiplication).unwrap(),
            "multiplication"
        );
    }

    #[test]
    fn test_catalog_covers_all_topics_in_detection_order() {
        let catalog = TopicCatalog::new();
        let order: Vec<Topic> = catalog.entries().iter().map(|e| e.topic).collect();
        assert_eq!(order, Topic::ALL);
    }

    #[test]
    fn test_every_topic_has_responses_and_three_examples() {
        let catalog = TopicCatalog::new();
        for topic in Topic::ALL {
            let entry = catalog.entry(topic);
            assert!(entry.responses.len() >= 2, "{:?} needs responses", topic);
            assert_eq!(entry.examples.len(), 3, "{:?} needs 3 examples", topic);
            assert!(!entry.triggers.is_empty());
        }
    }
}
