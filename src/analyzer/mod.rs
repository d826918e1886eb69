//! Lexicon/rule-based sentiment scoring.
//!
//! The analyzer looks up each token's valence in a [`Lexicon`] and then
//! applies a fixed set of contextual rules before aggregating:
//!
//! - degree modifiers ("very", "barely") within three tokens shift the
//!   valence, with decaying weight at distance two and three
//! - negations within three tokens flip and dampen it
//! - ALL-CAPS words in otherwise mixed-case text get extra emphasis
//! - a "but" shifts weight from the leading clause to the trailing one
//! - trailing `!` and `?` marks amplify the final sum
//!
//! The summed valence is normalized into a `compound` score in
//! `[-1, 1]`; the `neg`/`neu`/`pos` proportions come from the same
//! per-token valences. Scoring is deterministic and stateless per call,
//! so one analyzer handle can be shared read-only for the process
//! lifetime.

mod lexicon;
mod rules;

use std::sync::Arc;

use crate::error::Error;
use crate::types::PolarityScore;

pub use lexicon::Lexicon;

use rules::{C_INCR, N_SCALAR, NORMALIZE_ALPHA};

/// Weight decay for modifiers two and three tokens away.
const DECAY_TWO_BACK: f64 = 0.95;
const DECAY_THREE_BACK: f64 = 0.9;

/// Per-clause weights around a contrastive "but".
const BUT_BEFORE: f64 = 0.5;
const BUT_AFTER: f64 = 1.5;

/// Amplification per exclamation mark, capped at four marks.
const EP_AMPLIFY: f64 = 0.292;
const EP_CAP: usize = 4;
/// Amplification per question mark for two or three marks, and the flat
/// value applied beyond that.
const QM_AMPLIFY: f64 = 0.18;
const QM_FLAT: f64 = 0.96;

/// Rule-based polarity scorer over a shared valence lexicon.
pub struct SentimentIntensityAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl Default for SentimentIntensityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentIntensityAnalyzer {
    /// Analyzer over the bundled lexicon.
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::bundled(),
        }
    }

    /// Analyzer over a caller-supplied lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
        }
    }

    /// Score one text.
    ///
    /// Empty or entirely score-free text yields [`PolarityScore::ZERO`].
    /// Fails only if aggregation produces a non-finite value, which a
    /// well-formed lexicon cannot cause.
    pub fn polarity_scores(&self, text: &str) -> Result<PolarityScore, Error> {
        let tokens = tokenize(text);
        let cap_diff = cap_differential(&tokens);

        let mut sentiments = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            // Degree modifiers contribute through their neighbours, not
            // on their own.
            if rules::booster_increment(&token.to_lowercase()).is_some() {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.token_valence(&tokens, i, cap_diff));
        }
        apply_but_clause(&tokens, &mut sentiments);

        let score = aggregate(&sentiments, text);
        if !score.is_finite() {
            return Err(Error::Scoring(format!(
                "non-finite polarity for input of {} tokens",
                tokens.len()
            )));
        }
        Ok(score)
    }

    /// Contextual valence of the token at `i`, or 0 for non-lexicon words.
    fn token_valence(&self, tokens: &[String], i: usize, cap_diff: bool) -> f64 {
        let lower = tokens[i].to_lowercase();
        let Some(mut valence) = self.lexicon.valence(&lower) else {
            return 0.0;
        };

        if cap_diff && rules::is_all_caps(&tokens[i]) {
            valence += C_INCR * valence.signum();
        }

        for dist in 0..3usize {
            if i <= dist {
                break;
            }
            let prev = &tokens[i - dist - 1];
            let prev_lower = prev.to_lowercase();
            // Lexicon words in the window carry their own valence and
            // do not modify this one.
            if self.lexicon.contains(&prev_lower) {
                continue;
            }
            let mut shift = scalar_inc_dec(prev, &prev_lower, valence, cap_diff);
            if shift != 0.0 {
                if dist == 1 {
                    shift *= DECAY_TWO_BACK;
                } else if dist == 2 {
                    shift *= DECAY_THREE_BACK;
                }
                valence += shift;
            }
            valence = negation_window(valence, tokens, dist, i);
        }

        least_check(valence, tokens, i, &self.lexicon)
    }
}

/// Whitespace tokenization with edge punctuation stripped from word-like
/// tokens. Short tokens keep their punctuation so emoticons such as ":)"
/// and "<3" survive to be looked up verbatim.
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(clean_token).collect()
}

fn clean_token(raw: &str) -> String {
    let stripped = raw.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        raw.to_string()
    } else {
        stripped.to_string()
    }
}

/// True if some but not all tokens are ALL CAPS, i.e. the caps carry
/// emphasis rather than the whole text shouting.
fn cap_differential(tokens: &[String]) -> bool {
    let caps = tokens.iter().filter(|t| rules::is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}

/// Valence shift contributed by a preceding degree modifier.
fn scalar_inc_dec(prev_raw: &str, prev_lower: &str, valence: f64, cap_diff: bool) -> f64 {
    let Some(mut scalar) = rules::booster_increment(prev_lower) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if cap_diff && rules::is_all_caps(prev_raw) {
        scalar += if valence > 0.0 { C_INCR } else { -C_INCR };
    }
    scalar
}

/// Negation handling for the modifier window position `dist` tokens
/// before the current word's immediate predecessor.
fn negation_window(valence: f64, tokens: &[String], dist: usize, i: usize) -> f64 {
    let lower = |idx: usize| tokens[idx].to_lowercase();
    match dist {
        0 => {
            if rules::is_negation(&lower(i - 1)) {
                valence * N_SCALAR
            } else {
                valence
            }
        }
        1 => {
            if lower(i - 2) == "never" && matches!(lower(i - 1).as_str(), "so" | "this") {
                valence * 1.25
            } else if lower(i - 2) == "without" && lower(i - 1) == "doubt" {
                valence
            } else if rules::is_negation(&lower(i - 2)) {
                valence * N_SCALAR
            } else {
                valence
            }
        }
        2 => {
            let never_emphasis = lower(i - 3) == "never"
                && (matches!(lower(i - 2).as_str(), "so" | "this")
                    || matches!(lower(i - 1).as_str(), "so" | "this"));
            let without_doubt = lower(i - 3) == "without"
                && (lower(i - 2) == "doubt" || lower(i - 1) == "doubt");
            if never_emphasis {
                valence * 1.25
            } else if without_doubt {
                valence
            } else if rules::is_negation(&lower(i - 3)) {
                valence * N_SCALAR
            } else {
                valence
            }
        }
        _ => valence,
    }
}

/// "least good" reads as negated, but "at least" and "very least" do not.
fn least_check(valence: f64, tokens: &[String], i: usize, lexicon: &Lexicon) -> f64 {
    if i > 1 {
        let prev = tokens[i - 1].to_lowercase();
        if prev == "least" && !lexicon.contains(&prev) {
            let before = tokens[i - 2].to_lowercase();
            if before != "at" && before != "very" {
                return valence * N_SCALAR;
            }
        }
    } else if i == 1 && tokens[i - 1].to_lowercase() == "least" {
        return valence * N_SCALAR;
    }
    valence
}

/// Reweight clauses around the first contrastive "but".
fn apply_but_clause(tokens: &[String], sentiments: &mut [f64]) {
    let Some(but_idx) = tokens.iter().position(|t| t.to_lowercase() == "but") else {
        return;
    };
    for (j, s) in sentiments.iter_mut().enumerate() {
        if j < but_idx {
            *s *= BUT_BEFORE;
        } else if j > but_idx {
            *s *= BUT_AFTER;
        }
    }
}

/// Extra intensity contributed by trailing punctuation.
fn punctuation_emphasis(text: &str) -> f64 {
    let ep = text.chars().filter(|&c| c == '!').count().min(EP_CAP) as f64 * EP_AMPLIFY;
    let qm_count = text.chars().filter(|&c| c == '?').count();
    let qm = if qm_count > 1 {
        if qm_count <= 3 {
            qm_count as f64 * QM_AMPLIFY
        } else {
            QM_FLAT
        }
    } else {
        0.0
    };
    ep + qm
}

/// Fold per-token valences and punctuation emphasis into the four-field
/// score.
fn aggregate(sentiments: &[f64], text: &str) -> PolarityScore {
    if sentiments.is_empty() {
        return PolarityScore::ZERO;
    }

    let punct = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += punct;
    } else if sum < 0.0 {
        sum -= punct;
    }
    let compound = normalize(sum);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            // The +1/-1 offsets keep weak hits from vanishing next to
            // the neutral token count.
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += punct;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= punct;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    if total == 0.0 {
        return PolarityScore::ZERO;
    }

    PolarityScore {
        neg: round3((neg_sum / total).abs()),
        neu: round3((neu_count / total).abs()),
        pos: round3((pos_sum / total).abs()),
        compound: round4(compound),
    }
}

/// Map an unbounded valence sum into `[-1, 1]`.
fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + NORMALIZE_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

fn round4(x: f64) -> f64 {
    (x * 10000.0).round() / 10000.0
}
