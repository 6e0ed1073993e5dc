//! Skill text segmentation.
//!
//! Raw ability text concatenates one or more 技能名：描述 blocks with no
//! delimiter. The only structural hint is a short ideograph run before a
//! full-width colon, which may equally well be mid-sentence prose, so
//! candidates go through positional and lexical checks before they are
//! allowed to split the text.

use serde::Serialize;

use super::lexicon::{Lexicon, CLAUSE_TERMINATORS};

/// One segmented (name, description) pair.
///
/// Produced fresh on every call; ordering follows the accepted headers'
/// positions in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillEntry {
    pub name: String,
    pub description: String,
}

/// A colon-adjacent ideograph run, before classification.
struct Candidate<'a> {
    text: &'a str,
    /// Byte offset of the run's first character.
    start: usize,
    /// Byte offset just past the colon.
    body_start: usize,
    /// Character immediately before the run, if any.
    prev: Option<char>,
}

fn is_ideograph(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Collects every run of 2-4 ideographs that sits immediately before a
/// full-width colon. A longer run contributes only its trailing four
/// characters, matching how the text reads: the head of the run is prose.
fn scan(raw: &str) -> Vec<Candidate<'_>> {
    let chars: Vec<(usize, char)> = raw.char_indices().collect();
    let mut candidates = Vec::new();

    for (i, &(offset, c)) in chars.iter().enumerate() {
        if c != '：' {
            continue;
        }
        let mut run = 0;
        while run < 4 && i > run && is_ideograph(chars[i - run - 1].1) {
            run += 1;
        }
        if run < 2 {
            continue;
        }
        let start_idx = i - run;
        candidates.push(Candidate {
            text: &raw[chars[start_idx].0..offset],
            start: chars[start_idx].0,
            body_start: offset + '：'.len_utf8(),
            prev: if start_idx > 0 { Some(chars[start_idx - 1].1) } else { None },
        });
    }

    candidates
}

/// Segments raw ability text using a configurable lexicon.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    lexicon: Lexicon,
}

impl Segmenter {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Splits `raw` into ordered skill entries.
    ///
    /// Total over all inputs: when no header is accepted the full input
    /// comes back as a single unnamed entry, so no text is ever dropped by
    /// the fallback path. Text before the first accepted header, if any, is
    /// discarded.
    pub fn segment(&self, raw: &str) -> Vec<SkillEntry> {
        let candidates = scan(raw);
        let accepted: Vec<&Candidate<'_>> = candidates
            .iter()
            .filter(|c| self.accepts(c.text, c.prev))
            .collect();

        if accepted.is_empty() {
            return vec![SkillEntry {
                name: String::new(),
                description: raw.to_string(),
            }];
        }

        let mut entries = Vec::with_capacity(accepted.len());
        for (i, candidate) in accepted.iter().enumerate() {
            let end = accepted.get(i + 1).map_or(raw.len(), |next| next.start);
            entries.push(SkillEntry {
                name: candidate.text.to_string(),
                description: raw[candidate.body_start..end].trim().to_string(),
            });
        }
        entries
    }

    /// First matching rule decides; candidates are judged independently.
    fn accepts(&self, text: &str, prev: Option<char>) -> bool {
        if self.lexicon.is_skill_name(text) {
            return true;
        }
        let prev = match prev {
            Some(c) => c,
            // The candidate opens the string.
            None => return true,
        };
        if CLAUSE_TERMINATORS.contains(&prev) {
            return true;
        }
        // 选择N项 introduces an option list, never a skill.
        if text.starts_with("选择") && text.ends_with("项") {
            return false;
        }
        if self.lexicon.is_stop_phrase(text) {
            return false;
        }
        // Mid-sentence colon with no positional or lexical backing.
        false
    }
}

/// Segments `raw` with the built-in lexicon.
pub fn segment(raw: &str) -> Vec<SkillEntry> {
    Segmenter::default().segment(raw)
}
