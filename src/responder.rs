//! Response generation: the extractor-to-reply pipeline behind every
//! question, shared by the REST and WebSocket handlers.

use rand::Rng;

use crate::evaluator;
use crate::extractor::{detect_topic, extract_expression};
use crate::topics::TopicCatalog;
use crate::types::Reply;
use crate::visualization::random_example;

/// Fallback reply when neither an expression nor a known topic is found.
const HELP_TEXT: &str = "I can help you with primary school math. \
                         Ask me about addition, subtraction, or multiplication.";

/// Answer one question.
///
/// An arithmetic expression anywhere in the text always wins over topic
/// detection; a detected topic in the same text is ignored in that case.
/// A detected topic yields one of its canned explanations (uniform random)
/// with the topic's worked examples appended and a randomly generated
/// example visualization. Anything else gets the generic help reply.
pub fn generate_response<R: Rng>(catalog: &TopicCatalog, rng: &mut R, question: &str) -> Reply {
    let question = question.to_lowercase();

    if let Some(expr) = extract_expression(&question) {
        return evaluator::reply_for(&expr);
    }

    if let Some(topic) = detect_topic(catalog, &question) {
        let entry = catalog.entry(topic);
        let response = entry.responses[rng.gen_range(0..entry.responses.len())];
        let text = format!(
            "{}\n\nExamples:\n• {}",
            response,
            entry.examples.join("\n• ")
        );
        let visualization = random_example(topic, rng);
        return Reply::new(text, Some(visualization));
    }

    Reply::text_only(HELP_TEXT)
}
