//! Counting how often each word appears in a piece of text.

use std::collections::HashMap;

/// The number of tokens the word-frequency report prints.
pub const TOP_TOKEN_LIMIT: usize = 10;

/// A token and the number of times it appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCount {
    /// The lowercased token.
    pub token: String,
    /// How many times the token appeared in the text.
    pub count: usize,
}

/// Count each whitespace-separated token in `text`, ignoring case.
///
/// The returned list is ordered by where each token first appeared, which
/// [top_tokens] relies on to break ties.
pub fn count_tokens(text: &str) -> Vec<TokenCount> {
    let mut index_by_token: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<TokenCount> = Vec::new();

    for token in text.split_whitespace() {
        let token = token.to_lowercase();

        match index_by_token.get(&token) {
            Some(&index) => counts[index].count += 1,
            None => {
                index_by_token.insert(token.clone(), counts.len());
                counts.push(TokenCount { token, count: 1 });
            }
        }
    }

    counts
}

/// The `limit` most frequent tokens in `text`, most frequent first.
///
/// Tokens with equal counts are ordered by where they first appeared in the
/// text.
pub fn top_tokens(text: &str, limit: usize) -> Vec<TokenCount> {
    let mut counts = count_tokens(text);

    // The sort is stable, so equal counts keep their first-seen order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);

    counts
}


#[cfg(test)]
mod top_tokens_tests {
    use crate::wordfreq::top_tokens;

    #[test]
    fn returns_at_most_limit_tokens() {
        let text = "a b c d e f g h i j k l m n o p";

        let top = top_tokens(text, 10);

        assert_eq!(top.len(), 10);
    }

    #[test]
    fn returns_every_token_when_limit_exceeds_the_vocabulary() {
        let top = top_tokens("a b a", 10);

        assert_eq!(top.len(), 2);
    }

    #[test]
    fn tokens_are_ordered_by_descending_count() {
        let top = top_tokens("c b b a a a", 10);

        let counts: Vec<usize> = top.iter().map(|entry| entry.count).collect();
        assert_eq!(counts, vec![3, 2, 1]);
        assert_eq!(top[0].token, "a");
    }

    #[test]
    fn tied_tokens_keep_their_first_seen_order() {
        let top = top_tokens("zebra apple zebra apple mango", 10);

        assert_eq!(top[0].token, "zebra");
        assert_eq!(top[1].token, "apple");
        assert_eq!(top[2].token, "mango");
    }

    #[test]
    fn case_variants_count_as_one_token() {
        let top = top_tokens("Word word WORD other", 1);

        assert_eq!(top[0].token, "word");
        assert_eq!(top[0].count, 3);
    }
}
