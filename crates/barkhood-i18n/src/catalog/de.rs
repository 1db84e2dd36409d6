use crate::keys::TranslationSet;

pub(crate) const DE: TranslationSet = TranslationSet {
    app_title: "Nachbarschaftsbellen",
    feed: "Feed",
    map: "Karte",
    stores: "Geschäfte",
    assistant: "Experte",
    settings: "Einstellungen",
    language: "Sprache",
    font_size: "Schriftgröße",
    font_small: "Klein",
    font_medium: "Mittel",
    font_large: "Groß",
    theme: "Design",
    dark_mode: "Dunkel",
    light_mode: "Hell",
    search_dog: "Hund oder Halter suchen...",
    post_placeholder: "Was macht dein Hund heute?",
    with_dog: "mit {dog} • {time}",
    likes: "Likes",
    comments: "Kommentare",
    share: "Teilen",
    share_fallback: "Teilen ist auf diesem Gerät nicht verfügbar. Text kopieren: {text}",
    search_place: "Park, Tierarzt oder Geschäft suchen...",
    offline_mode: "Offline-Modus",
    offline_note: "Kartendaten lokal für den Offline-Zugriff gespeichert",
    no_places_for: "Keine Orte für \"{query}\" gefunden",
    ai_search: "Intelligente Suche in der Nähe",
    ai_searching: "Suche läuft...",
    no_results: "Keine Ergebnisse gefunden.",
    unknown_place: "Unbekannter Ort",
    walkers_title: "Gassigeher in der Nähe",
    book_now: "Jetzt buchen",
    from_price: "Ab",
    per_hour: "/Stunde",
    booking_started: "Buchung mit {name} wird gestartet. Sie werden bald benachrichtigt!",
    stores_title: "Geschäfte & Praxen",
    category_all: "Alle",
    category_food: "Futterladen",
    category_grooming: "Hundesalon",
    category_vet: "Tierarzt",
    sort_by_rating: "Nach Bewertung sortieren",
    no_stores: "Keine Betriebe dieser Kategorie in der Nähe.",
    details: "Details",
    away: "{distance} entfernt",
    sponsored: "Gesponsert",
    promo_title: "15 % Rabatt auf alle gesunden Leckerlis!",
    promo_body: "Exklusiv für Mitglieder mit dem Code BARK15",
    shop_now: "Jetzt kaufen",
    deal_title: "Wochenendangebote im Hauptgeschäft",
    deal_body: "Kaufe einen Sack Futter und erhalte ein Kauspielzeug gratis!",
    assistant_title: "Dein Hundeexperte",
    assistant_subtitle: "Rund um die Uhr für Beratung da",
    assistant_greeting: "Hallo! Ich bin dein digitaler Hundeexperte. Fragen zu deinem Hund, zum Training oder zum Einkauf?",
    assistant_thinking: "Der Experte denkt nach...",
    ask_placeholder: "Frag mich etwas...",
    send: "Senden",
    listen: "Vorlesen",
    chat_fallback: "Entschuldigung, ich kann gerade nicht antworten. Bitte versuche es später erneut!",
};
