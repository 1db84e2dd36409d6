use crate::keys::TranslationSet;

pub(crate) const HI: TranslationSet = TranslationSet {
    app_title: "मोहल्ले की भौंक",
    feed: "फ़ीड",
    map: "नक्शा",
    stores: "दुकानें",
    assistant: "विशेषज्ञ",
    settings: "सेटिंग्स",
    language: "भाषा",
    font_size: "अक्षर का आकार",
    font_small: "छोटा",
    font_medium: "मध्यम",
    font_large: "बड़ा",
    theme: "थीम",
    dark_mode: "डार्क",
    light_mode: "लाइट",
    search_dog: "कुत्ता या मालिक खोजें...",
    post_placeholder: "आज आपका कुत्ता क्या कर रहा है?",
    with_dog: "{dog} के साथ • {time}",
    likes: "पसंद",
    comments: "टिप्पणियाँ",
    share: "साझा करें",
    share_fallback: "इस डिवाइस पर साझा करना उपलब्ध नहीं है। टेक्स्ट कॉपी करें: {text}",
    search_place: "पार्क, पशु चिकित्सक या दुकान खोजें...",
    offline_mode: "ऑफ़लाइन मोड",
    offline_note: "ऑफ़लाइन उपयोग के लिए नक्शा डेटा स्थानीय रूप से सहेजा गया है",
    no_places_for: "\"{query}\" के लिए कोई स्थान नहीं मिला",
    ai_search: "आस-पास स्मार्ट खोज",
    ai_searching: "खोज रहे हैं...",
    no_results: "कोई परिणाम नहीं मिला।",
    unknown_place: "अज्ञात स्थान",
    walkers_title: "आस-पास के डॉग वॉकर",
    book_now: "अभी बुक करें",
    from_price: "शुरुआत",
    per_hour: "/घंटा",
    booking_started: "{name} के साथ बुकिंग शुरू हो रही है। उन्हें जल्द सूचित किया जाएगा!",
    stores_title: "दुकानें और क्लिनिक",
    category_all: "सभी",
    category_food: "भोजन की दुकान",
    category_grooming: "ग्रूमिंग",
    category_vet: "पशु चिकित्सक",
    sort_by_rating: "रेटिंग से क्रमबद्ध करें",
    no_stores: "इस श्रेणी में आस-पास कोई व्यवसाय नहीं मिला।",
    details: "विवरण",
    away: "आपसे {distance} दूर",
    sponsored: "प्रायोजित",
    promo_title: "सभी हेल्दी ट्रीट्स पर 15% छूट!",
    promo_body: "कोड BARK15 के साथ केवल मोहल्ले की भौंक सदस्यों के लिए",
    shop_now: "अभी खरीदें",
    deal_title: "मुख्य दुकान पर सप्ताहांत ऑफ़र",
    deal_body: "खाने का एक बैग खरीदें और चबाने वाला खिलौना मुफ़्त पाएँ!",
    assistant_title: "आपका डॉग विशेषज्ञ",
    assistant_subtitle: "24/7 सलाह के लिए उपलब्ध",
    assistant_greeting: "नमस्ते! मैं आपका डिजिटल डॉग विशेषज्ञ हूँ। कुत्ते, ट्रेनिंग या खरीदारी के बारे में कोई सवाल?",
    assistant_thinking: "विशेषज्ञ सोच रहा है...",
    ask_placeholder: "मुझसे कुछ भी पूछें...",
    send: "भेजें",
    listen: "सुनें",
    chat_fallback: "क्षमा करें, मैं अभी उत्तर नहीं दे सकता। कृपया बाद में पुनः प्रयास करें!",
};
