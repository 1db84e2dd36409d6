//! Feed search and like state.

use std::collections::BTreeSet;

use barkhood_i18n::{TranslationSet, format_template};

use crate::features::feed::fixtures::Post;

/// Local state of the feed view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedState {
    /// Text typed into the search box.
    pub search: String,
    liked: BTreeSet<&'static str>,
}

impl FeedState {
    /// Whether the current user liked `post_id`.
    #[must_use]
    pub fn is_liked(&self, post_id: &str) -> bool {
        self.liked.contains(post_id)
    }

    /// Like or unlike a post.
    pub fn toggle_like(&mut self, post_id: &'static str) {
        if !self.liked.remove(post_id) {
            self.liked.insert(post_id);
        }
    }

    /// Likes to display, including the current user's.
    #[must_use]
    pub fn like_count(&self, post: &Post) -> u32 {
        post.likes + u32::from(self.is_liked(post.id))
    }
}

/// Posts whose author, dog name or content contains `query`, ignoring case.
#[must_use]
pub fn filter_posts<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    let needle = query.trim().to_lowercase();
    posts
        .iter()
        .filter(|post| {
            needle.is_empty()
                || [post.author, post.dog_name, post.content]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Line under the author's name.
#[must_use]
pub fn byline(strings: &TranslationSet, post: &Post) -> String {
    format_template(strings.with_dog, &[("dog", post.dog_name), ("time", post.posted)])
}

/// Text shared for a post, and shown when no share sheet exists.
#[must_use]
pub fn share_text(post: &Post) -> String {
    format!("{} ({}): {}", post.author, post.dog_name, post.content)
}

/// Alert shown when the platform cannot share.
#[must_use]
pub fn share_fallback_message(strings: &TranslationSet, post: &Post) -> String {
    let text = share_text(post);
    format_template(strings.share_fallback, &[("text", text.as_str())])
}

#[cfg(test)]
mod tests {
    use barkhood_i18n::{Language, catalog};

    use super::*;
    use crate::features::feed::fixtures::POSTS;

    #[test]
    fn empty_query_keeps_every_post() {
        assert_eq!(filter_posts(&POSTS, "  ").len(), POSTS.len());
    }

    #[test]
    fn query_matches_author_dog_or_content() {
        let by_dog = filter_posts(&POSTS, "רקס");
        assert_eq!(by_dog.len(), 1);
        assert_eq!(by_dog[0].id, "3");

        let by_author = filter_posts(&POSTS, "מיכל");
        assert_eq!(by_author[0].id, "2");

        let by_content = filter_posts(&POSTS, "הרצל");
        assert_eq!(by_content[0].id, "1");

        assert!(filter_posts(&POSTS, "poodle").is_empty());
    }

    #[test]
    fn matching_ignores_case() {
        let posts = [Post {
            author: "Dana",
            dog_name: "Bolt",
            content: "Morning walk",
            ..POSTS[2]
        }];
        assert_eq!(filter_posts(&posts, "BOLT").len(), 1);
        assert_eq!(filter_posts(&posts, "morning").len(), 1);
    }

    #[test]
    fn like_toggles_the_displayed_count() {
        let mut state = FeedState::default();
        let post = &POSTS[0];
        assert_eq!(state.like_count(post), 12);

        state.toggle_like(post.id);
        assert!(state.is_liked(post.id));
        assert_eq!(state.like_count(post), 13);

        state.toggle_like(post.id);
        assert_eq!(state.like_count(post), 12);
    }

    #[test]
    fn byline_and_share_fallback_are_localized() {
        let english = catalog(Language::En);
        assert_eq!(byline(english, &POSTS[0]), "with לוקה • לפני 15 דקות");

        let message = share_fallback_message(english, &POSTS[2]);
        assert!(message.starts_with("Sharing is not available"));
        assert!(message.ends_with(&share_text(&POSTS[2])));
    }
}
