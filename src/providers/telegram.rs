use teloxide::prelude::*;
use teloxide::types::Recipient;

use crate::error::NotifyError;
use crate::providers::Notifier;

pub struct Telegram {
    pub bot: Bot,
    chat: Recipient,
}

impl Telegram {
    pub fn new(token: &str, chat_id: &str) -> Self {
        Telegram {
            bot: Bot::new(token),
            chat: parse_recipient(chat_id),
        }
    }
}

impl Notifier for Telegram {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        self.bot
            .send_message(self.chat.clone(), text)
            .await
            .map(|_| ())
            .map_err(|e| NotifyError(e.to_string()))
    }
}

/// Numeric ids address a chat directly; anything else is taken as a
/// `@channel` username.
pub fn parse_recipient(chat_id: &str) -> Recipient {
    match chat_id.trim().parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(chat_id.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_chat_ids_map_to_chat() {
        assert_eq!(parse_recipient("123456"), Recipient::Id(ChatId(123456)));
        assert_eq!(parse_recipient("-1001234"), Recipient::Id(ChatId(-1001234)));
    }

    #[test]
    fn other_chat_ids_are_channel_usernames() {
        assert_eq!(
            parse_recipient(" @homework_feed "),
            Recipient::ChannelUsername("@homework_feed".to_string())
        );
    }
}
