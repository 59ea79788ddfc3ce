//! Demo seed data.
//!
//! Literal demo content embedded at process startup. The strings are the
//! product's demo copy and are not translated.

use crate::models::{ChatMessage, NewsItem, Sport};

/// The sports catalog, in display order.
pub fn sports() -> Vec<Sport> {
    [
        (1, "Футбол", "⚽", 15, 12500),
        (2, "Баскетбол", "🏀", 12, 8900),
        (3, "Теннис", "🎾", 8, 5600),
        (4, "Хоккей", "🏒", 10, 7200),
        (5, "Формула 1", "🏎️", 5, 15000),
        (6, "Бокс", "🥊", 6, 9800),
        (7, "MMA", "🥋", 4, 11200),
        (8, "Плавание", "🏊", 7, 3400),
        (9, "Легкая атлетика", "🏃", 9, 4800),
        (10, "Волейбол", "🏐", 11, 6100),
    ]
    .into_iter()
    .map(|(id, name, icon, streams, viewers)| Sport {
        id,
        name: name.to_string(),
        icon: icon.to_string(),
        streams,
        viewers,
    })
    .collect()
}

/// News ticker headlines, newest first.
pub fn news() -> Vec<NewsItem> {
    [
        (1, "Чемпионат мира по футболу 2024", "2 часа назад"),
        (2, "Новый рекорд в плавании", "4 часа назад"),
        (3, "Формула 1: Гран-при Монако", "6 часов назад"),
        (4, "Боксерский поединок века", "8 часов назад"),
        (5, "Олимпийские игры 2024", "10 часов назад"),
    ]
    .into_iter()
    .map(|(id, title, time)| NewsItem {
        id,
        title: title.to_string(),
        time: time.to_string(),
    })
    .collect()
}

/// Initial chat log.
pub fn chat_messages() -> Vec<ChatMessage> {
    [
        (1, "Fan123", "Отличный матч!", "2 мин назад"),
        (2, "SportsLover", "Кто выиграет?", "5 мин назад"),
        (3, "NebulaUser", "Космическая игра! 🚀", "8 мин назад"),
    ]
    .into_iter()
    .map(|(id, user, message, time)| ChatMessage {
        id,
        user: user.to_string(),
        message: message.to_string(),
        time: time.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique_and_sequential() {
        let sports = sports();
        for (i, sport) in sports.iter().enumerate() {
            assert_eq!(sport.id, i as u32 + 1);
        }
        let news = news();
        for (i, item) in news.iter().enumerate() {
            assert_eq!(item.id, i as u32 + 1);
        }
        let chat = chat_messages();
        for (i, msg) in chat.iter().enumerate() {
            assert_eq!(msg.id, i as u32 + 1);
        }
    }

    #[test]
    fn sport_serializes_with_flat_field_names() {
        let sport = &sports()[0];
        let json = serde_json::to_value(sport).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Футбол");
        assert_eq!(json["icon"], "⚽");
        assert_eq!(json["streams"], 15);
        assert_eq!(json["viewers"], 12500);
    }
}
