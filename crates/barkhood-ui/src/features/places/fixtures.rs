//! Places cached for offline use.

/// Kind of a place, used for its icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceKind {
    /// Dog park.
    Park,
    /// Veterinary clinic.
    Vet,
    /// Playground.
    Playground,
    /// Pet food store.
    Food,
    /// Grooming salon.
    Grooming,
}

impl PlaceKind {
    /// Emoji shown next to the place.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Park => "🌳",
            Self::Vet => "🩺",
            Self::Playground => "🎾",
            Self::Food => "🦴",
            Self::Grooming => "✂️",
        }
    }
}

/// A place near the user.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Place {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name.
    pub title: &'static str,
    /// Kind of place.
    pub kind: PlaceKind,
    /// Average rating out of five.
    pub rating: f32,
    /// Street address.
    pub address: &'static str,
}

/// Places in display order.
pub const PLACES: [Place; 5] = [
    Place {
        id: "1",
        title: "גינת כלבים הרצל",
        kind: PlaceKind::Park,
        rating: 4.8,
        address: "הרצל 45",
    },
    Place {
        id: "2",
        title: "מרכז וטרינרי שכונתי",
        kind: PlaceKind::Vet,
        rating: 4.9,
        address: "בן גוריון 12",
    },
    Place {
        id: "3",
        title: "גינת שעשועים הצפון",
        kind: PlaceKind::Playground,
        rating: 4.2,
        address: "הנביאים 5",
    },
    Place {
        id: "4",
        title: "חנות חיות השכונה",
        kind: PlaceKind::Food,
        rating: 4.7,
        address: "ויצמן 10",
    },
    Place {
        id: "5",
        title: "מספרת פאפיז",
        kind: PlaceKind::Grooming,
        rating: 4.5,
        address: "רוטשילד 22",
    },
];
