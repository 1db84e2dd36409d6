use crate::keys::TranslationSet;

pub(crate) const ES: TranslationSet = TranslationSet {
    app_title: "Ladridos del Barrio",
    feed: "Inicio",
    map: "Mapa",
    stores: "Tiendas",
    assistant: "Experto",
    settings: "Ajustes",
    language: "Idioma",
    font_size: "Tamaño de texto",
    font_small: "Pequeño",
    font_medium: "Mediano",
    font_large: "Grande",
    theme: "Tema",
    dark_mode: "Oscuro",
    light_mode: "Claro",
    search_dog: "Buscar un perro o dueño...",
    post_placeholder: "¿Qué está haciendo tu perro hoy?",
    with_dog: "con {dog} • {time}",
    likes: "Me gusta",
    comments: "Comentarios",
    share: "Compartir",
    share_fallback: "No se puede compartir en este dispositivo. Copia el texto: {text}",
    search_place: "Buscar un parque, veterinario o tienda...",
    offline_mode: "Modo sin conexión",
    offline_note: "Datos del mapa guardados localmente para acceso sin conexión",
    no_places_for: "No se encontraron lugares para \"{query}\"",
    ai_search: "Búsqueda inteligente cercana",
    ai_searching: "Buscando...",
    no_results: "No se encontraron resultados.",
    unknown_place: "Lugar desconocido",
    walkers_title: "Paseadores de perros cerca",
    book_now: "Reservar ahora",
    from_price: "Desde",
    per_hour: "/hora",
    booking_started: "Iniciando una reserva con {name}. ¡Pronto recibirá un aviso!",
    stores_title: "Tiendas y clínicas",
    category_all: "Todo",
    category_food: "Tienda de comida",
    category_grooming: "Peluquería",
    category_vet: "Veterinario",
    sort_by_rating: "Ordenar por valoración",
    no_stores: "No hay negocios de esta categoría cerca.",
    details: "Detalles",
    away: "a {distance}",
    sponsored: "Patrocinado",
    promo_title: "¡15% de descuento en todos los premios saludables!",
    promo_body: "Exclusivo para miembros con el código BARK15",
    shop_now: "Comprar ahora",
    deal_title: "Ofertas de fin de semana en la tienda principal",
    deal_body: "¡Compra un saco de comida y llévate un juguete para morder gratis!",
    assistant_title: "Tu experto en perros",
    assistant_subtitle: "Disponible para consultas 24/7",
    assistant_greeting: "¡Hola! Soy tu experto digital en perros. ¿Tienes una pregunta sobre tu perro, el adiestramiento o qué comprarle?",
    assistant_thinking: "El experto está pensando...",
    ask_placeholder: "Pregúntame algo...",
    send: "Enviar",
    listen: "Escuchar",
    chat_fallback: "Lo siento, no puedo responder ahora. ¡Inténtalo más tarde!",
};
