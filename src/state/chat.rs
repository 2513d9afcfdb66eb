// Chat transcript
// In-memory log of the chat panel; nothing here is persisted or sent anywhere

/// Reply appended after every user message
pub const BOT_PLACEHOLDER: &str = "분석 중...";

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One entry of the transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

/// Chat panel state: the transcript plus the pending input text
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
    /// Text currently in the input box
    pub input: String,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether the current input would be accepted by [`ChatState::send_input`]
    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Send the text in the input box and clear it
    /// Returns false when the input is blank
    pub fn send_input(&mut self) -> bool {
        let text = std::mem::take(&mut self.input);
        if self.send_message(&text) {
            true
        } else {
            self.input = text;
            false
        }
    }

    /// Append a user message and the bot placeholder as one pair
    /// Whitespace-only text is ignored
    pub fn send_message(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.messages.push(ChatMessage::user(text));
        self.messages.push(ChatMessage::bot(BOT_PLACEHOLDER));
        true
    }
}

/// Visible rows for the chat input so that it fits its content
pub fn input_rows(text: &str) -> usize {
    let lines = text.split('\n').count();
    lines.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_ignored() {
        let mut chat = ChatState::new();
        chat.input = "  ".to_string();

        assert!(!chat.can_send());
        assert!(!chat.send_input());
        assert!(chat.messages().is_empty());
        assert_eq!(chat.input, "  ");
    }

    #[test]
    fn test_send_appends_user_and_bot_pair() {
        let mut chat = ChatState::new();
        chat.input = "hello".to_string();

        assert!(chat.send_input());
        assert_eq!(
            chat.messages(),
            &[ChatMessage::user("hello"), ChatMessage::bot(BOT_PLACEHOLDER)]
        );
        assert!(chat.input.is_empty());
    }

    #[test]
    fn test_user_text_kept_literally() {
        let mut chat = ChatState::new();
        assert!(chat.send_message("  padded  "));
        assert_eq!(chat.messages()[0].text, "  padded  ");
    }

    #[test]
    fn test_every_user_entry_followed_by_bot() {
        let mut chat = ChatState::new();
        for text in ["one", " ", "two", "", "three"] {
            chat.send_message(text);
        }

        let messages = chat.messages();
        assert_eq!(messages.len(), 6);
        for pair in messages.chunks(2) {
            assert_eq!(pair[0].sender, Sender::User);
            assert_eq!(pair[1], ChatMessage::bot(BOT_PLACEHOLDER));
        }
    }

    #[test]
    fn test_input_rows_grow_with_content() {
        assert_eq!(input_rows(""), 1);
        assert_eq!(input_rows("one line"), 1);
        assert_eq!(input_rows("a\nb\nc"), 3);
    }
}
