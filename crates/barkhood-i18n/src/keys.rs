//! The closed set of UI string keys and the per-language string table.

/// Every string the UI renders. Adding a variant forces a matching field on
/// [`TranslationSet`], which in turn forces every language to supply it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TranslationKey {
    /// Application name shown in the header.
    AppTitle,
    /// Feed tab label.
    Feed,
    /// Map tab label.
    Map,
    /// Stores tab label.
    Stores,
    /// Assistant tab label.
    Assistant,
    /// Settings menu title.
    Settings,
    /// Language picker label.
    Language,
    /// Font size picker label.
    FontSize,
    /// Small font option.
    FontSmall,
    /// Medium font option.
    FontMedium,
    /// Large font option.
    FontLarge,
    /// Theme picker label.
    Theme,
    /// Dark theme option.
    DarkMode,
    /// Light theme option.
    LightMode,
    /// Feed search placeholder.
    SearchDog,
    /// Composer placeholder on the feed.
    PostPlaceholder,
    /// Post byline; `{dog}` and `{time}` placeholders.
    WithDog,
    /// Likes counter label.
    Likes,
    /// Comments counter label.
    Comments,
    /// Share action label.
    Share,
    /// Alert shown when native sharing is unavailable; `{text}` placeholder.
    ShareFallback,
    /// Places search placeholder.
    SearchPlace,
    /// Offline badge label.
    OfflineMode,
    /// Note under the places search box.
    OfflineNote,
    /// Empty places result; `{query}` placeholder.
    NoPlacesFor,
    /// Button that asks the assistant for nearby places.
    AiSearch,
    /// Label while the place search runs.
    AiSearching,
    /// Shown when a place search returns nothing or fails.
    NoResults,
    /// Title for a place reference without a name.
    UnknownPlace,
    /// Dog walkers section title.
    WalkersTitle,
    /// Walker booking button.
    BookNow,
    /// Prefix before a walker's price.
    FromPrice,
    /// Suffix after a walker's price.
    PerHour,
    /// Booking confirmation; `{name}` placeholder.
    BookingStarted,
    /// Stores and clinics section title.
    StoresTitle,
    /// Filter chip: all categories.
    CategoryAll,
    /// Filter chip: food stores.
    CategoryFood,
    /// Filter chip: grooming.
    CategoryGrooming,
    /// Filter chip: veterinarians.
    CategoryVet,
    /// Sort toggle label.
    SortByRating,
    /// Empty state for a store category.
    NoStores,
    /// Store details link.
    Details,
    /// Distance label; `{distance}` placeholder.
    Away,
    /// Sponsored badge.
    Sponsored,
    /// Featured promotion headline.
    PromoTitle,
    /// Featured promotion body.
    PromoBody,
    /// Promotion call to action.
    ShopNow,
    /// Weekend deal headline.
    DealTitle,
    /// Weekend deal body.
    DealBody,
    /// Assistant panel title.
    AssistantTitle,
    /// Assistant availability line.
    AssistantSubtitle,
    /// First assistant message of a conversation.
    AssistantGreeting,
    /// Typing indicator text.
    AssistantThinking,
    /// Assistant input placeholder.
    AskPlaceholder,
    /// Send button label.
    Send,
    /// Read-aloud button label.
    Listen,
    /// Reply used when the assistant cannot answer.
    ChatFallback,
}

impl TranslationKey {
    /// Every key in declaration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::AppTitle,
            Self::Feed,
            Self::Map,
            Self::Stores,
            Self::Assistant,
            Self::Settings,
            Self::Language,
            Self::FontSize,
            Self::FontSmall,
            Self::FontMedium,
            Self::FontLarge,
            Self::Theme,
            Self::DarkMode,
            Self::LightMode,
            Self::SearchDog,
            Self::PostPlaceholder,
            Self::WithDog,
            Self::Likes,
            Self::Comments,
            Self::Share,
            Self::ShareFallback,
            Self::SearchPlace,
            Self::OfflineMode,
            Self::OfflineNote,
            Self::NoPlacesFor,
            Self::AiSearch,
            Self::AiSearching,
            Self::NoResults,
            Self::UnknownPlace,
            Self::WalkersTitle,
            Self::BookNow,
            Self::FromPrice,
            Self::PerHour,
            Self::BookingStarted,
            Self::StoresTitle,
            Self::CategoryAll,
            Self::CategoryFood,
            Self::CategoryGrooming,
            Self::CategoryVet,
            Self::SortByRating,
            Self::NoStores,
            Self::Details,
            Self::Away,
            Self::Sponsored,
            Self::PromoTitle,
            Self::PromoBody,
            Self::ShopNow,
            Self::DealTitle,
            Self::DealBody,
            Self::AssistantTitle,
            Self::AssistantSubtitle,
            Self::AssistantGreeting,
            Self::AssistantThinking,
            Self::AskPlaceholder,
            Self::Send,
            Self::Listen,
            Self::ChatFallback,
        ]
    }

    /// Stable camelCase identifier, matching the web client's key names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AppTitle => "appTitle",
            Self::Feed => "feed",
            Self::Map => "map",
            Self::Stores => "stores",
            Self::Assistant => "assistant",
            Self::Settings => "settings",
            Self::Language => "language",
            Self::FontSize => "fontSize",
            Self::FontSmall => "fontSmall",
            Self::FontMedium => "fontMedium",
            Self::FontLarge => "fontLarge",
            Self::Theme => "theme",
            Self::DarkMode => "darkMode",
            Self::LightMode => "lightMode",
            Self::SearchDog => "searchDog",
            Self::PostPlaceholder => "postPlaceholder",
            Self::WithDog => "withDog",
            Self::Likes => "likes",
            Self::Comments => "comments",
            Self::Share => "share",
            Self::ShareFallback => "shareFallback",
            Self::SearchPlace => "searchPlace",
            Self::OfflineMode => "offlineMode",
            Self::OfflineNote => "offlineNote",
            Self::NoPlacesFor => "noPlacesFor",
            Self::AiSearch => "aiSearch",
            Self::AiSearching => "aiSearching",
            Self::NoResults => "noResults",
            Self::UnknownPlace => "unknownPlace",
            Self::WalkersTitle => "walkersTitle",
            Self::BookNow => "bookNow",
            Self::FromPrice => "fromPrice",
            Self::PerHour => "perHour",
            Self::BookingStarted => "bookingStarted",
            Self::StoresTitle => "storesTitle",
            Self::CategoryAll => "categoryAll",
            Self::CategoryFood => "categoryFood",
            Self::CategoryGrooming => "categoryGrooming",
            Self::CategoryVet => "categoryVet",
            Self::SortByRating => "sortByRating",
            Self::NoStores => "noStores",
            Self::Details => "details",
            Self::Away => "away",
            Self::Sponsored => "sponsored",
            Self::PromoTitle => "promoTitle",
            Self::PromoBody => "promoBody",
            Self::ShopNow => "shopNow",
            Self::DealTitle => "dealTitle",
            Self::DealBody => "dealBody",
            Self::AssistantTitle => "assistantTitle",
            Self::AssistantSubtitle => "assistantSubtitle",
            Self::AssistantGreeting => "assistantGreeting",
            Self::AssistantThinking => "assistantThinking",
            Self::AskPlaceholder => "askPlaceholder",
            Self::Send => "send",
            Self::Listen => "listen",
            Self::ChatFallback => "chatFallback",
        }
    }
}

/// One language's complete string table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct TranslationSet {
    pub app_title: &'static str,
    pub feed: &'static str,
    pub map: &'static str,
    pub stores: &'static str,
    pub assistant: &'static str,
    pub settings: &'static str,
    pub language: &'static str,
    pub font_size: &'static str,
    pub font_small: &'static str,
    pub font_medium: &'static str,
    pub font_large: &'static str,
    pub theme: &'static str,
    pub dark_mode: &'static str,
    pub light_mode: &'static str,
    pub search_dog: &'static str,
    pub post_placeholder: &'static str,
    pub with_dog: &'static str,
    pub likes: &'static str,
    pub comments: &'static str,
    pub share: &'static str,
    pub share_fallback: &'static str,
    pub search_place: &'static str,
    pub offline_mode: &'static str,
    pub offline_note: &'static str,
    pub no_places_for: &'static str,
    pub ai_search: &'static str,
    pub ai_searching: &'static str,
    pub no_results: &'static str,
    pub unknown_place: &'static str,
    pub walkers_title: &'static str,
    pub book_now: &'static str,
    pub from_price: &'static str,
    pub per_hour: &'static str,
    pub booking_started: &'static str,
    pub stores_title: &'static str,
    pub category_all: &'static str,
    pub category_food: &'static str,
    pub category_grooming: &'static str,
    pub category_vet: &'static str,
    pub sort_by_rating: &'static str,
    pub no_stores: &'static str,
    pub details: &'static str,
    pub away: &'static str,
    pub sponsored: &'static str,
    pub promo_title: &'static str,
    pub promo_body: &'static str,
    pub shop_now: &'static str,
    pub deal_title: &'static str,
    pub deal_body: &'static str,
    pub assistant_title: &'static str,
    pub assistant_subtitle: &'static str,
    pub assistant_greeting: &'static str,
    pub assistant_thinking: &'static str,
    pub ask_placeholder: &'static str,
    pub send: &'static str,
    pub listen: &'static str,
    pub chat_fallback: &'static str,
}

impl TranslationSet {
    /// Look up the text for `key`.
    #[must_use]
    pub const fn text(&self, key: TranslationKey) -> &'static str {
        match key {
            TranslationKey::AppTitle => self.app_title,
            TranslationKey::Feed => self.feed,
            TranslationKey::Map => self.map,
            TranslationKey::Stores => self.stores,
            TranslationKey::Assistant => self.assistant,
            TranslationKey::Settings => self.settings,
            TranslationKey::Language => self.language,
            TranslationKey::FontSize => self.font_size,
            TranslationKey::FontSmall => self.font_small,
            TranslationKey::FontMedium => self.font_medium,
            TranslationKey::FontLarge => self.font_large,
            TranslationKey::Theme => self.theme,
            TranslationKey::DarkMode => self.dark_mode,
            TranslationKey::LightMode => self.light_mode,
            TranslationKey::SearchDog => self.search_dog,
            TranslationKey::PostPlaceholder => self.post_placeholder,
            TranslationKey::WithDog => self.with_dog,
            TranslationKey::Likes => self.likes,
            TranslationKey::Comments => self.comments,
            TranslationKey::Share => self.share,
            TranslationKey::ShareFallback => self.share_fallback,
            TranslationKey::SearchPlace => self.search_place,
            TranslationKey::OfflineMode => self.offline_mode,
            TranslationKey::OfflineNote => self.offline_note,
            TranslationKey::NoPlacesFor => self.no_places_for,
            TranslationKey::AiSearch => self.ai_search,
            TranslationKey::AiSearching => self.ai_searching,
            TranslationKey::NoResults => self.no_results,
            TranslationKey::UnknownPlace => self.unknown_place,
            TranslationKey::WalkersTitle => self.walkers_title,
            TranslationKey::BookNow => self.book_now,
            TranslationKey::FromPrice => self.from_price,
            TranslationKey::PerHour => self.per_hour,
            TranslationKey::BookingStarted => self.booking_started,
            TranslationKey::StoresTitle => self.stores_title,
            TranslationKey::CategoryAll => self.category_all,
            TranslationKey::CategoryFood => self.category_food,
            TranslationKey::CategoryGrooming => self.category_grooming,
            TranslationKey::CategoryVet => self.category_vet,
            TranslationKey::SortByRating => self.sort_by_rating,
            TranslationKey::NoStores => self.no_stores,
            TranslationKey::Details => self.details,
            TranslationKey::Away => self.away,
            TranslationKey::Sponsored => self.sponsored,
            TranslationKey::PromoTitle => self.promo_title,
            TranslationKey::PromoBody => self.promo_body,
            TranslationKey::ShopNow => self.shop_now,
            TranslationKey::DealTitle => self.deal_title,
            TranslationKey::DealBody => self.deal_body,
            TranslationKey::AssistantTitle => self.assistant_title,
            TranslationKey::AssistantSubtitle => self.assistant_subtitle,
            TranslationKey::AssistantGreeting => self.assistant_greeting,
            TranslationKey::AssistantThinking => self.assistant_thinking,
            TranslationKey::AskPlaceholder => self.ask_placeholder,
            TranslationKey::Send => self.send,
            TranslationKey::Listen => self.listen,
            TranslationKey::ChatFallback => self.chat_fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TranslationKey;
    use std::collections::HashSet;

    #[test]
    fn all_lists_every_variant_in_order() {
        let keys = TranslationKey::all();
        for (index, key) in keys.iter().enumerate() {
            assert_eq!(*key as usize, index, "{} out of order", key.as_str());
        }
        let last = keys.last().copied();
        assert_eq!(last, Some(TranslationKey::ChatFallback));
    }

    #[test]
    fn key_names_are_unique() {
        let names: HashSet<&str> = TranslationKey::all().iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), TranslationKey::all().len());
    }
}
