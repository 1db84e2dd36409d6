//! Sample posts shown in the feed.

/// A post by a neighbour about their dog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Post {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name of the owner.
    pub author: &'static str,
    /// Name of the dog.
    pub dog_name: &'static str,
    /// Post body, in the author's language.
    pub content: &'static str,
    /// Optional photo URL.
    pub image: Option<&'static str>,
    /// Relative time as the author's client recorded it.
    pub posted: &'static str,
    /// Likes from other users.
    pub likes: u32,
    /// Comment count.
    pub comments: u32,
}

/// Posts in display order.
pub const POSTS: [Post; 3] = [
    Post {
        id: "1",
        author: "רוני כהן",
        dog_name: "לוקה",
        content: "מישהו בגינת הכלבים ברחוב הרצל? לוקה מחפשת חברים למשחקים!",
        image: Some("https://picsum.photos/seed/dog1/600/400"),
        posted: "לפני 15 דקות",
        likes: 12,
        comments: 3,
    },
    Post {
        id: "2",
        author: "מיכל לוי",
        dog_name: "צ׳ארלי",
        content: "מצאנו את המותג אוכל הזה בחנות החדשה בפינה, צ׳ארלי פשוט עף על זה!",
        image: Some("https://picsum.photos/seed/dog2/600/400"),
        posted: "לפני שעה",
        likes: 45,
        comments: 8,
    },
    Post {
        id: "3",
        author: "דניאל גרין",
        dog_name: "רקס",
        content: "טיפ יומי: אל תשכחו למלא מים טריים לפני היציאה לגינה היום, חם מאוד בחוץ!",
        image: None,
        posted: "לפני 3 שעות",
        likes: 89,
        comments: 12,
    },
];
