//! Scoring rule constants and small predicate helpers.
//!
//! The numbers here follow the standard valence-aware lexicon heuristics:
//! modifier words shift a neighbouring valence by a fixed increment,
//! negations dampen and flip it, and ALL-CAPS emphasis adds a constant
//! boost when the rest of the text is not shouting too.

/// Increment applied by an intensifying modifier ("very", "extremely").
pub(crate) const B_INCR: f64 = 0.293;
/// Decrement applied by a dampening modifier ("slightly", "barely").
pub(crate) const B_DECR: f64 = -0.293;

/// Emphasis added when a sentiment word is ALL CAPS in mixed-case text.
pub(crate) const C_INCR: f64 = 0.733;

/// Multiplier applied to a valence in the scope of a negation.
pub(crate) const N_SCALAR: f64 = -0.74;

/// Denominator constant for compound-score normalization.
pub(crate) const NORMALIZE_ALPHA: f64 = 15.0;

/// Words that negate the valence of what follows them.
pub(crate) const NEGATIONS: &[&str] = &[
    "aint", "ain't", "arent", "aren't", "cannot", "cant", "can't", "couldnt", "couldn't",
    "darent", "daren't", "didnt", "didn't", "doesnt", "doesn't", "dont", "don't", "hadnt",
    "hadn't", "hasnt", "hasn't", "havent", "haven't", "isnt", "isn't", "mightnt", "mightn't",
    "mustnt", "mustn't", "neednt", "needn't", "neither", "never", "none", "nope", "nor", "not",
    "nothing", "nowhere", "oughtnt", "oughtn't", "rarely", "seldom", "shant", "shan't",
    "shouldnt", "shouldn't", "uhuh", "uh-uh", "wasnt", "wasn't", "werent", "weren't", "without",
    "wont", "won't", "wouldnt", "wouldn't",
];

/// Degree modifiers and the increment they contribute.
pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("amazingly", B_INCR),
    ("awfully", B_INCR),
    ("completely", B_INCR),
    ("considerably", B_INCR),
    ("decidedly", B_INCR),
    ("deeply", B_INCR),
    ("enormously", B_INCR),
    ("entirely", B_INCR),
    ("especially", B_INCR),
    ("exceptionally", B_INCR),
    ("extremely", B_INCR),
    ("fully", B_INCR),
    ("greatly", B_INCR),
    ("highly", B_INCR),
    ("hugely", B_INCR),
    ("incredibly", B_INCR),
    ("intensely", B_INCR),
    ("majorly", B_INCR),
    ("more", B_INCR),
    ("most", B_INCR),
    ("particularly", B_INCR),
    ("purely", B_INCR),
    ("quite", B_INCR),
    ("really", B_INCR),
    ("remarkably", B_INCR),
    ("so", B_INCR),
    ("substantially", B_INCR),
    ("thoroughly", B_INCR),
    ("totally", B_INCR),
    ("tremendously", B_INCR),
    ("unbelievably", B_INCR),
    ("unusually", B_INCR),
    ("utterly", B_INCR),
    ("very", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("kinda", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginally", B_DECR),
    ("occasionally", B_DECR),
    ("partly", B_DECR),
    ("scarcely", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
    ("sorta", B_DECR),
];

/// True if the token (already lowercased) negates what follows it.
pub(crate) fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token) || token.contains("n't")
}

/// Increment contributed by a degree modifier, if the token is one.
pub(crate) fn booster_increment(token: &str) -> Option<f64> {
    BOOSTERS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|&(_, inc)| inc)
}

/// True if every alphabetic character in the token is uppercase and the
/// token contains at least one alphabetic character.
pub(crate) fn is_all_caps(token: &str) -> bool {
    let mut has_alpha = false;
    for c in token.chars() {
        if c.is_alphabetic() {
            has_alpha = true;
            if !c.is_uppercase() {
                return false;
            }
        }
    }
    has_alpha
}
