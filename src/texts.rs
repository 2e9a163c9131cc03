//! Fixed user-facing texts, one bilingual template per prompt.
//!
//! The router's `reply_to` is the single point where these are localized.

/// A message template in both supported languages.
#[derive(Debug, Clone, Copy)]
pub struct Reply {
    pub en: &'static str,
    pub ru: &'static str,
}

/// Sent raw (both languages at once) to users with no recorded language.
pub const CHOOSE_LANGUAGE: &str =
    "Выберите язык / Choose language\n\n/ru — Русский\n/en — English";

pub const WELCOME: Reply = Reply {
    en: "Welcome to the chat! Use /start to find a person to chat with (it's anonymous).",
    ru: "Добро пожаловать в чат! Используйте /start чтобы найти собеседника (это анонимно).",
};

pub const SEARCH_STARTED: Reply = Reply {
    en: "Searching for a person to chat with...\n\nTo stop searching: /stop",
    ru: "Поиск нового собеседника...\n\nОстановить поиск: /stop",
};

pub const NEXT_SEARCH: Reply = Reply {
    en: "Searching for new person...\n\nTo stop searching: /stop",
    ru: "Поиск нового собеседника...\n\nОстановить поиск: /stop",
};

pub const STILL_SEARCHING: Reply = Reply {
    en: "Currently we're searching for a person to chat with...\n\nTo stop searching: /stop",
    ru: "Идет поиск нового собеседника...\n\nОстановить поиск: /stop",
};

pub const SEARCH_STOPPED: Reply = Reply {
    en: "Search stopped.\n\nFind a person to chat: /start",
    ru: "Поиск остановлен.\n\nНайти собеседника: /start",
};

pub const CHAT_ENDED: Reply = Reply {
    en: "Chat ended.\n\nFind a new person to chat: /start",
    ru: "Диалог завершен.\n\nНайти другого собеседника: /start",
};

pub const PARTNER_FOUND: Reply = Reply {
    en: "Found a person to chat with!\n\nTo find a new person: /next\nTo end the dialog: /stop",
    ru: "Найден собеседник!\n\nНайти другого собеседника: /next\nЗавершить диалог: /stop",
};

pub const PARTNER_LEFT: Reply = Reply {
    en: "Your interlocutor has ended the dialog.\n\nFind a new person to chat: /start",
    ru: "Ваш собеседник завершил диалог.\n\nНайти другого собеседника: /start",
};
