//! Search-match highlighting support.

/// A piece of text, flagged when it is part of a search match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment {
    pub text: String,
    pub is_match: bool,
}

impl TextSegment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_match: false,
        }
    }

    fn matched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_match: true,
        }
    }
}

/// Splits `text` into plain and matched segments (case-insensitive).
///
/// When lowercasing changes the byte length of `text` (some non-ASCII
/// characters do), byte offsets of the lowercased copy cannot be mapped back,
/// so the whole text is returned as one plain segment.
///
/// `filter` is not trimmed: the marked text is exactly what
/// [`Searchable::matches_filter`](crate::shared::list::Searchable) matched.
pub fn split_matches(text: &str, filter: &str) -> Vec<TextSegment> {
    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    if filter_lower.is_empty() || text_lower.len() != text.len() {
        return vec![TextSegment::plain(text)];
    }

    let mut parts = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            break;
        }
        if start > last_pos {
            parts.push(TextSegment::plain(&text[last_pos..start]));
        }
        parts.push(TextSegment::matched(&text[start..end]));
        last_pos = end;
    }

    if last_pos < text.len() {
        parts.push(TextSegment::plain(&text[last_pos..]));
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::mock;
    use crate::domain::a001_order::query::OrdersQuery;

    #[test]
    fn test_split_matches_marks_every_occurrence() {
        let parts = split_matches("Landing Page", "an");
        assert_eq!(
            parts,
            vec![
                TextSegment::plain("L"),
                TextSegment::matched("an"),
                TextSegment::plain("ding Page"),
            ]
        );

        let parts = split_matches("CM9801", "cm");
        assert_eq!(parts, vec![TextSegment::matched("CM"), TextSegment::plain("9801")]);
    }

    #[test]
    fn test_split_matches_keeps_surrounding_spaces() {
        assert_eq!(
            split_matches("Kate Morrison", "kate "),
            vec![TextSegment::matched("Kate "), TextSegment::plain("Morrison")]
        );
        assert_eq!(split_matches("Kate", "kate "), vec![TextSegment::plain("Kate")]);
    }

    #[test]
    fn test_split_matches_agrees_with_order_search() {
        let orders = mock::orders().unwrap();
        for term in ["kate ", " page", "CM98", "a"] {
            let query = OrdersQuery {
                search_term: term.to_string(),
                ..OrdersQuery::default()
            };
            for order in orders.iter() {
                let highlighted = [&order.user, &order.project, &order.id]
                    .iter()
                    .any(|field| split_matches(field, term).iter().any(|s| s.is_match));
                assert_eq!(highlighted, query.matches(order), "{} / {:?}", order.id, term);
            }
        }
    }

    #[test]
    fn test_split_matches_without_filter() {
        assert_eq!(split_matches("Drew Cano", ""), vec![TextSegment::plain("Drew Cano")]);
        assert_eq!(split_matches("Drew Cano", "xyz"), vec![TextSegment::plain("Drew Cano")]);
    }
}
