use crate::keys::TranslationSet;

pub(crate) const EN: TranslationSet = TranslationSet {
    app_title: "Neighborhood Bark",
    feed: "Feed",
    map: "Map",
    stores: "Stores",
    assistant: "Expert",
    settings: "Settings",
    language: "Language",
    font_size: "Text size",
    font_small: "Small",
    font_medium: "Medium",
    font_large: "Large",
    theme: "Theme",
    dark_mode: "Dark",
    light_mode: "Light",
    search_dog: "Search a dog or owner...",
    post_placeholder: "What is your dog up to today?",
    with_dog: "with {dog} • {time}",
    likes: "Likes",
    comments: "Comments",
    share: "Share",
    share_fallback: "Sharing is not available on this device. Copy the text: {text}",
    search_place: "Search a park, vet or store...",
    offline_mode: "Offline mode",
    offline_note: "Map data cached locally for offline access",
    no_places_for: "No places found for \"{query}\"",
    ai_search: "Smart search nearby",
    ai_searching: "Searching...",
    no_results: "No results found.",
    unknown_place: "Unknown place",
    walkers_title: "Dog walkers nearby",
    book_now: "Book now",
    from_price: "From",
    per_hour: "/hour",
    booking_started: "Starting a booking with {name}. They will be notified soon!",
    stores_title: "Stores & clinics",
    category_all: "All",
    category_food: "Food store",
    category_grooming: "Grooming",
    category_vet: "Vet",
    sort_by_rating: "Sort by rating",
    no_stores: "No businesses in this category nearby.",
    details: "Details",
    away: "{distance} away",
    sponsored: "Sponsored",
    promo_title: "15% off all healthy treats!",
    promo_body: "Exclusive to Neighborhood Bark members with code BARK15",
    shop_now: "Shop now",
    deal_title: "Weekend deals at the main store",
    deal_body: "Buy a bag of food and get a chew toy for free!",
    assistant_title: "Your dog expert",
    assistant_subtitle: "Available for advice 24/7",
    assistant_greeting: "Hi! I'm your digital dog expert. Got a question about your dog? Training? Or what to buy?",
    assistant_thinking: "The expert is thinking...",
    ask_placeholder: "Ask me anything...",
    send: "Send",
    listen: "Listen",
    chat_fallback: "Sorry, I can't answer right now. Please try again later!",
};
