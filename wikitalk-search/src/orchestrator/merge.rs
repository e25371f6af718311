//! Candidate merging by title.
//!
//! The two primary searches (normalised and raw query) usually overlap.
//! Candidates sharing a title are collapsed to the one with the highest
//! score; on equal scores the earlier candidate stays. Output keeps the
//! order in which each surviving title was first seen, so a later stable
//! sort breaks score ties by insertion order.

use std::collections::HashMap;

use crate::types::CandidateResult;

/// Merge two candidate lists, `first` before `second`, keeping one entry
/// per title.
///
/// A later duplicate replaces the kept entry only if its score is strictly
/// higher. The replacement takes over the earlier entry's position.
pub fn merge_candidates(
    first: Vec<CandidateResult>,
    second: Vec<CandidateResult>,
) -> Vec<CandidateResult> {
    // Title → index into `merged`.
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut merged: Vec<CandidateResult> = Vec::with_capacity(first.len() + second.len());

    for candidate in first.into_iter().chain(second) {
        match positions.get(&candidate.title) {
            Some(&index) => {
                if candidate.score > merged[index].score {
                    merged[index] = candidate;
                }
            }
            None => {
                positions.insert(candidate.title.clone(), merged.len());
                merged.push(candidate);
            }
        }
    }

    merged
}
