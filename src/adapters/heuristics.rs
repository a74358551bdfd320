//! Heuristic assessment provider
//!
//! Submission-time screening without an ML model: gibberish detection,
//! title/description consistency, and category keyword checks. Verdicts are
//! advisory tags for admin review; the screener never rejects anything by
//! itself.

use std::collections::HashSet;

use regex::Regex;

use crate::core::models::{AiAssessment, Category, IssueDraft, Veracity};
use crate::core::ports::AssessmentProvider;

/// Baseline severity when no model is available
const DEFAULT_SEVERITY: f64 = 0.5;

/// Tokens shorter than this are ignored
const MIN_TOKEN_LEN: usize = 3;

/// A token with fewer vowels than this ratio reads as keyboard mash
const VOWEL_RATIO_FLOOR: f64 = 0.20;

/// Share of mashed tokens at which a whole text is gibberish
const GIBBERISH_SHARE: f64 = 0.60;

/// Keyword table per category; a report should hit at least one of its own
fn category_keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Road => {
            &["road", "pothole", "bridge", "traffic", "accident", "highway", "street", "lane", "damaged"]
        }
        Category::Water => {
            &["water", "pipe", "leak", "leakage", "supply", "tap", "drain", "drainage", "sewage"]
        }
        Category::Electricity => {
            &["power", "electric", "electricity", "voltage", "transformer", "wire", "outage", "cut"]
        }
        Category::Sanitation => {
            &["garbage", "waste", "dirty", "smell", "toilet", "sanitation", "drain", "cleanup"]
        }
        Category::Law => {
            &["theft", "fight", "violence", "crime", "police", "assault", "harassment", "illegal"]
        }
    }
}

/// A run of this many identical characters reads as keyboard mash
const REPEAT_RUN_LEN: usize = 6;

/// Rule-based screener implementing [`AssessmentProvider`]
#[derive(Debug)]
pub struct HeuristicAssessor {
    non_alnum: Regex,
}

impl HeuristicAssessor {
    /// Create a screener
    ///
    /// # Panics
    ///
    /// Never; the embedded pattern is valid.
    #[must_use]
    pub fn new() -> Self {
        Self { non_alnum: Regex::new(r"[^a-z0-9\s]").expect("valid pattern") }
    }

    fn tokens(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let cleaned = self.non_alnum.replace_all(&lowered, " ");
        cleaned
            .split_whitespace()
            .filter(|t| t.len() >= MIN_TOKEN_LEN)
            .map(str::to_string)
            .collect()
    }

    fn is_gibberish(&self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.len() < 8 {
            return true;
        }

        let tokens = self.tokens(trimmed);
        if tokens.is_empty() {
            return true;
        }

        let sample = &tokens[..tokens.len().min(20)];
        let mashed = sample.iter().filter(|t| vowel_ratio(t) < VOWEL_RATIO_FLOOR).count();
        #[allow(clippy::cast_precision_loss)]
        let mashed_share = mashed as f64 / sample.len() as f64;
        if mashed_share >= GIBBERISH_SHARE {
            return true;
        }

        has_repeated_run(&trimmed.to_lowercase())
    }

    fn title_desc_mismatch(&self, title: &str, desc: &str) -> bool {
        if !self.is_gibberish(title) && self.is_gibberish(desc) {
            return true;
        }

        let title_tokens: HashSet<String> = self.tokens(title).into_iter().collect();
        let desc_tokens: HashSet<String> = self.tokens(desc).into_iter().collect();
        if title_tokens.len() >= 2 && desc_tokens.len() >= 4 {
            let overlap = title_tokens.intersection(&desc_tokens).count();
            #[allow(clippy::cast_precision_loss)]
            let overlap_ratio = overlap as f64 / title_tokens.len() as f64;
            if overlap_ratio < 0.15 {
                return true;
            }
        }

        false
    }

    fn category_mismatch(&self, category: Category, title: &str, desc: &str) -> bool {
        let tokens: HashSet<String> = self.tokens(&format!("{title} {desc}")).into_iter().collect();

        let own_hits =
            category_keywords(category).iter().filter(|k| tokens.contains(**k)).count();
        if own_hits >= 1 {
            return false;
        }

        // No hit on the filed category: suspicious only when another
        // category matches clearly better.
        let best_other = Category::ALL
            .iter()
            .filter(|c| **c != category)
            .map(|c| category_keywords(*c).iter().filter(|k| tokens.contains(**k)).count())
            .max()
            .unwrap_or(0);

        best_other >= 2
    }
}

impl Default for HeuristicAssessor {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentProvider for HeuristicAssessor {
    fn assess(&self, draft: &IssueDraft) -> anyhow::Result<AiAssessment> {
        // A gibberish title is treated as a bot pattern whether or not the
        // description is readable. Stricter than flagging only the
        // title-over-real-description case: a fully mashed report is tagged
        // Spam here instead of falling through to the mismatch rules.
        if self.is_gibberish(&draft.title) {
            return Ok(AiAssessment::new(DEFAULT_SEVERITY, Veracity::Spam, true));
        }

        let mismatch = self.title_desc_mismatch(&draft.title, &draft.description)
            || self.category_mismatch(draft.category, &draft.title, &draft.description)
            || (!draft.description.trim().is_empty() && draft.description.trim().len() < 12);

        if mismatch {
            return Ok(AiAssessment::new(DEFAULT_SEVERITY, Veracity::LowQuality, true));
        }

        Ok(AiAssessment::new(DEFAULT_SEVERITY, Veracity::Unknown, false))
    }
}

// The regex crate has no backreferences, so the repeated-character scan
// is a plain character walk.
fn has_repeated_run(text: &str) -> bool {
    let mut prev = None;
    let mut run = 0;
    for c in text.chars() {
        if Some(c) == prev {
            run += 1;
            if run >= REPEAT_RUN_LEN {
                return true;
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }
    false
}

fn vowel_ratio(token: &str) -> f64 {
    let vowels = token.chars().filter(|c| "aeiou".contains(*c)).count();
    #[allow(clippy::cast_precision_loss)]
    {
        vowels as f64 / token.len().max(1) as f64
    }
}
