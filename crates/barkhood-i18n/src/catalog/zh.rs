use crate::keys::TranslationSet;

pub(crate) const ZH: TranslationSet = TranslationSet {
    app_title: "邻里犬声",
    feed: "动态",
    map: "地图",
    stores: "商店",
    assistant: "专家",
    settings: "设置",
    language: "语言",
    font_size: "字体大小",
    font_small: "小",
    font_medium: "中",
    font_large: "大",
    theme: "主题",
    dark_mode: "深色",
    light_mode: "浅色",
    search_dog: "搜索狗狗或主人...",
    post_placeholder: "你的狗狗今天在做什么？",
    with_dog: "和 {dog} • {time}",
    likes: "点赞",
    comments: "评论",
    share: "分享",
    share_fallback: "此设备不支持分享。请复制文本：{text}",
    search_place: "搜索公园、兽医或商店...",
    offline_mode: "离线模式",
    offline_note: "地图数据已缓存在本地，可离线访问",
    no_places_for: "未找到与“{query}”相关的地点",
    ai_search: "附近智能搜索",
    ai_searching: "搜索中...",
    no_results: "未找到结果。",
    unknown_place: "未知地点",
    walkers_title: "附近的遛狗师",
    book_now: "立即预约",
    from_price: "起价",
    per_hour: "/小时",
    booking_started: "正在为 {name} 发起预约，对方很快会收到通知！",
    stores_title: "商店与诊所",
    category_all: "全部",
    category_food: "食品店",
    category_grooming: "美容",
    category_vet: "兽医",
    sort_by_rating: "按评分排序",
    no_stores: "附近没有此类商家。",
    details: "详情",
    away: "距你 {distance}",
    sponsored: "赞助",
    promo_title: "所有健康零食 85 折！",
    promo_body: "邻里犬声会员专享，使用优惠码 BARK15",
    shop_now: "立即购买",
    deal_title: "主店周末特惠",
    deal_body: "购买一袋狗粮即送咀嚼玩具！",
    assistant_title: "你的狗狗专家",
    assistant_subtitle: "全天候 24/7 提供咨询",
    assistant_greeting: "你好！我是你的数字狗狗专家。有关于狗狗、训练或购物的问题吗？",
    assistant_thinking: "专家正在思考...",
    ask_placeholder: "问我任何问题...",
    send: "发送",
    listen: "朗读",
    chat_fallback: "抱歉，我现在无法回答。请稍后再试！",
};
