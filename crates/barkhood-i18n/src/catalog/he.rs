use crate::keys::TranslationSet;

pub(crate) const HE: TranslationSet = TranslationSet {
    app_title: "נביחת השכונה",
    feed: "פיד",
    map: "מפה",
    stores: "חנויות",
    assistant: "מומחה",
    settings: "הגדרות",
    language: "שפה",
    font_size: "גודל טקסט",
    font_small: "קטן",
    font_medium: "בינוני",
    font_large: "גדול",
    theme: "ערכת נושא",
    dark_mode: "כהה",
    light_mode: "בהיר",
    search_dog: "חיפוש כלב או בעלים...",
    post_placeholder: "מה הכלב שלך עושה היום?",
    with_dog: "עם {dog} • {time}",
    likes: "לייקים",
    comments: "תגובות",
    share: "שיתוף",
    share_fallback: "השיתוף אינו זמין במכשיר הזה. העתיקו את הטקסט: {text}",
    search_place: "חיפוש גינה, וטרינר או חנות...",
    offline_mode: "מצב לא מקוון",
    offline_note: "נתוני מפה טעונים מקומית לגישה מהירה ללא אינטרנט",
    no_places_for: "לא נמצאו מקומות עבור \"{query}\"",
    ai_search: "חיפוש חכם בסביבה",
    ai_searching: "מחפש...",
    no_results: "לא נמצאו תוצאות.",
    unknown_place: "מקום לא ידוע",
    walkers_title: "דוג-ווקרים בשכונה",
    book_now: "הזמן עכשיו",
    from_price: "החל מ-",
    per_hour: "/שעה",
    booking_started: "מתחיל תהליך הזמנה עבור {name}. הודעה תישלח אליהם בקרוב!",
    stores_title: "חנויות ומרפאות",
    category_all: "הכל",
    category_food: "חנות מזון",
    category_grooming: "מספרה",
    category_vet: "וטרינר",
    sort_by_rating: "מיון לפי דירוג",
    no_stores: "לא נמצאו עסקים בקטגוריה זו בשכונה.",
    details: "לפרטים",
    away: "{distance} ממך",
    sponsored: "בחסות",
    promo_title: "15% הנחה על כל חטיפי הבריאות!",
    promo_body: "בלעדי לחברי נביחת השכונה בשימוש בקוד BARK15",
    shop_now: "לקנייה עכשיו",
    deal_title: "מבצעי סופ״ש בחנות המרכזית",
    deal_body: "קנו שק אוכל וקבלו צעצוע לעיסה במתנה!",
    assistant_title: "מומחה הכלבים שלכם",
    assistant_subtitle: "זמין להתייעצות 24/7",
    assistant_greeting: "היי! אני המומחה הדיגיטלי שלכם. יש לכם שאלה על הכלב? על אילוף? או אולי מה לקנות לו?",
    assistant_thinking: "המומחה חושב...",
    ask_placeholder: "שאל אותי משהו...",
    send: "שליחה",
    listen: "הקראה",
    chat_fallback: "מצטער, אני לא מצליח לענות כרגע. נסה שוב מאוחר יותר!",
};
