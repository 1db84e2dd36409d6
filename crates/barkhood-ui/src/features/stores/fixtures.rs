//! Stores and walkers near the user.

/// Business category of a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StoreCategory {
    /// Food and supplies.
    Food,
    /// Grooming salon.
    Grooming,
    /// Veterinary clinic.
    Vet,
}

impl StoreCategory {
    /// Stable identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Grooming => "grooming",
            Self::Vet => "vet",
        }
    }
}

/// A local business.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Store {
    /// Stable identifier.
    pub id: &'static str,
    /// Business name.
    pub name: &'static str,
    /// Short description written by the business.
    pub tagline: &'static str,
    /// Category used by the filter chips.
    pub category: StoreCategory,
    /// Average rating out of five.
    pub rating: f32,
    /// Distance from the user as displayed.
    pub distance: &'static str,
    /// Photo URL.
    pub image: &'static str,
}

/// A dog walker offering services nearby.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Walker {
    /// Stable identifier.
    pub id: &'static str,
    /// Walker's name.
    pub name: &'static str,
    /// Offered services.
    pub services: &'static [&'static str],
    /// Availability as written by the walker.
    pub availability: &'static str,
    /// Average rating out of five.
    pub rating: f32,
    /// Hourly price as displayed.
    pub price: &'static str,
    /// Profile photo URL.
    pub image: &'static str,
}

/// Stores in fixture order.
pub const STORES: [Store; 3] = [
    Store {
        id: "1",
        name: "כלב וחתול בשכונה",
        tagline: "חנות מזון וציוד",
        category: StoreCategory::Food,
        rating: 4.8,
        distance: "300 מ׳",
        image: "https://picsum.photos/seed/store1/200/200",
    },
    Store {
        id: "2",
        name: "פט-סנטר המרכזי",
        tagline: "מספרה וחנות",
        category: StoreCategory::Grooming,
        rating: 4.5,
        distance: "850 מ׳",
        image: "https://picsum.photos/seed/store2/200/200",
    },
    Store {
        id: "3",
        name: "וטרינר ד״ר רותם",
        tagline: "מרפאה וטרינרית",
        category: StoreCategory::Vet,
        rating: 4.9,
        distance: "1.2 ק״מ",
        image: "https://picsum.photos/seed/vet1/200/200",
    },
];

/// Walkers in fixture order.
pub const WALKERS: [Walker; 2] = [
    Walker {
        id: "w1",
        name: "נועה ברק",
        services: &["טיולים ארוכים", "פנסיון ביתי"],
        availability: "בקרים וערבים",
        rating: 5.0,
        price: "₪50",
        image: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?auto=format&fit=crop&w=150&h=150",
    },
    Walker {
        id: "w2",
        name: "עידו לוי",
        services: &["ריצה עם כלבים", "אילוף בסיסי"],
        availability: "זמין עכשיו",
        rating: 4.7,
        price: "₪70",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=crop&w=150&h=150",
    },
];
