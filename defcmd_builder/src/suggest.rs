use crate::constant::SUGGESTION_DIVISOR;

/// Registered command names, searched for near matches of unrecognized tokens.
///
/// Proximity is the case-insensitive Levenshtein distance.
/// A name is a suggestion when its distance is at most half the length of the longer word (and always at least 1).
/// Suggestions are ranked by distance, then by registration order.
#[derive(Debug, Default)]
pub(crate) struct SuggestionIndex {
    names: Vec<String>,
}

impl SuggestionIndex {
    pub(crate) fn add(&mut self, name: impl Into<String>) {
        let name = name.into();

        if !self.names.contains(&name) {
            self.names.push(name);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.names.clear();
    }

    pub(crate) fn suggest(&self, token: &str) -> Vec<String> {
        let token_lower = token.to_lowercase();
        let token_length = token_lower.chars().count();
        let mut candidates: Vec<(usize, &String)> = self
            .names
            .iter()
            .filter_map(|name| {
                let name_lower = name.to_lowercase();
                let longest = std::cmp::max(token_length, name_lower.chars().count());
                let threshold = std::cmp::max(1, longest / SUGGESTION_DIVISOR);
                let distance = strsim::levenshtein(&token_lower, &name_lower);

                if distance <= threshold {
                    Some((distance, name))
                } else {
                    None
                }
            })
            .collect();

        // Stable, so equal distances keep their registration order.
        candidates.sort_by_key(|(distance, _)| *distance);
        candidates
            .into_iter()
            .map(|(_, name)| name.clone())
            .collect()
    }
}
