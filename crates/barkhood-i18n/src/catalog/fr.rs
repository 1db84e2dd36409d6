use crate::keys::TranslationSet;

pub(crate) const FR: TranslationSet = TranslationSet {
    app_title: "Aboiements du Quartier",
    feed: "Fil",
    map: "Carte",
    stores: "Boutiques",
    assistant: "Expert",
    settings: "Paramètres",
    language: "Langue",
    font_size: "Taille du texte",
    font_small: "Petit",
    font_medium: "Moyen",
    font_large: "Grand",
    theme: "Thème",
    dark_mode: "Sombre",
    light_mode: "Clair",
    search_dog: "Rechercher un chien ou un maître...",
    post_placeholder: "Que fait votre chien aujourd'hui ?",
    with_dog: "avec {dog} • {time}",
    likes: "J'aime",
    comments: "Commentaires",
    share: "Partager",
    share_fallback: "Le partage n'est pas disponible sur cet appareil. Copiez le texte : {text}",
    search_place: "Rechercher un parc, un vétérinaire ou une boutique...",
    offline_mode: "Mode hors ligne",
    offline_note: "Données de carte enregistrées localement pour un accès hors ligne",
    no_places_for: "Aucun lieu trouvé pour « {query} »",
    ai_search: "Recherche intelligente à proximité",
    ai_searching: "Recherche...",
    no_results: "Aucun résultat.",
    unknown_place: "Lieu inconnu",
    walkers_title: "Promeneurs de chiens à proximité",
    book_now: "Réserver",
    from_price: "À partir de",
    per_hour: "/heure",
    booking_started: "Réservation en cours avec {name}. Un message lui sera bientôt envoyé !",
    stores_title: "Boutiques et cliniques",
    category_all: "Tout",
    category_food: "Animalerie",
    category_grooming: "Toilettage",
    category_vet: "Vétérinaire",
    sort_by_rating: "Trier par note",
    no_stores: "Aucun commerce de cette catégorie à proximité.",
    details: "Détails",
    away: "à {distance}",
    sponsored: "Sponsorisé",
    promo_title: "15 % de réduction sur toutes les friandises saines !",
    promo_body: "Réservé aux membres avec le code BARK15",
    shop_now: "Acheter",
    deal_title: "Promotions du week-end à la boutique principale",
    deal_body: "Achetez un sac de croquettes et recevez un jouet à mâcher offert !",
    assistant_title: "Votre expert canin",
    assistant_subtitle: "Disponible 24h/24 et 7j/7",
    assistant_greeting: "Bonjour ! Je suis votre expert canin numérique. Une question sur votre chien, le dressage ou quoi lui acheter ?",
    assistant_thinking: "L'expert réfléchit...",
    ask_placeholder: "Posez-moi une question...",
    send: "Envoyer",
    listen: "Écouter",
    chat_fallback: "Désolé, je ne peux pas répondre pour le moment. Réessayez plus tard !",
};
