//! Request and response types for the scoring surface.

use serde::{Deserialize, Serialize};

/// Batch of texts submitted for scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextInput {
    /// Texts to score, in the order results should come back.
    pub texts: Vec<String>,
}

/// Four-component polarity summary for one text.
///
/// `neg`, `neu` and `pos` are proportions in `[0, 1]` that sum to 1
/// (within rounding); `compound` is the normalized aggregate in
/// `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityScore {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl PolarityScore {
    /// All-zero score, returned for texts with no scorable content.
    pub const ZERO: Self = Self {
        neg: 0.0,
        neu: 0.0,
        pos: 0.0,
        compound: 0.0,
    };

    /// True if every component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.neg.is_finite()
            && self.neu.is_finite()
            && self.pos.is_finite()
            && self.compound.is_finite()
    }
}

/// One scored text, paired with its input string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    pub text: String,
    pub sentiment: PolarityScore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_serializes_with_wire_field_names() {
        let score = PolarityScore {
            neg: 0.0,
            neu: 0.323,
            pos: 0.677,
            compound: 0.8622,
        };
        let record = ResultRecord {
            text: "I love this product! It's amazing!".to_string(),
            sentiment: score,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["text"], "I love this product! It's amazing!");
        assert_eq!(json["sentiment"]["neg"], 0.0);
        assert_eq!(json["sentiment"]["neu"], 0.323);
        assert_eq!(json["sentiment"]["pos"], 0.677);
        assert_eq!(json["sentiment"]["compound"], 0.8622);
    }

    #[test]
    fn text_input_deserializes() {
        let input: TextInput = serde_json::from_str(r#"{"texts": ["a", "b"]}"#).unwrap();
        assert_eq!(input.texts, vec!["a", "b"]);
    }
}
