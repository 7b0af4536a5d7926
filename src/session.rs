use chrono::{DateTime, Duration, Utc};

use crate::chat::{content, Answer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub tip: Option<String>,
    pub time: String,
}
impl ChatMessage {
    fn new(role: Role, text: String, tip: Option<String>, at: DateTime<Utc>) -> Self {
        Self {
            role,
            text,
            tip,
            // UTC, the learner's zone is unknown
            time: at.format("%H:%M:%S").to_string(),
        }
    }

    pub fn welcome(at: DateTime<Utc>) -> Self {
        let answer = content::WELCOME.to_answer();
        Self::new(Role::Bot, answer.text, Some(answer.tip), at)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum SpeechRate {
    #[default]
    Normal,
    Slow,
}

/// One learner's conversation. The log has no eviction; only an idle reset clears it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub messages: Vec<ChatMessage>,
    pub last_activity: DateTime<Utc>,
    pub speech_rate: SpeechRate,
}

impl Session {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            messages: vec![ChatMessage::welcome(now)],
            last_activity: now,
            speech_rate: SpeechRate::default(),
        }
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_activity = now;
    }

    pub fn is_idle(&self, now: DateTime<Utc>, timeout: Duration) -> bool {
        now - self.last_activity >= timeout
    }

    /// Drops everything but the welcome message. The speech rate is kept.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.messages = vec![ChatMessage::welcome(now)];
        self.last_activity = now;
    }

    /// Resets the log if nothing happened for `timeout`. Returns whether it did.
    pub fn expire_if_idle(&mut self, now: DateTime<Utc>, timeout: Duration) -> bool {
        if !self.is_idle(now, timeout) {
            return false;
        }
        self.reset(now);
        true
    }

    pub fn push_user(&mut self, text: &str, now: DateTime<Utc>) -> &ChatMessage {
        self.push(ChatMessage::new(Role::User, text.to_string(), None, now), now)
    }

    pub fn push_bot(&mut self, answer: &Answer, now: DateTime<Utc>) -> &ChatMessage {
        let tip = Some(answer.tip.clone());
        self.push(ChatMessage::new(Role::Bot, answer.text.clone(), tip, now), now)
    }

    fn push(&mut self, message: ChatMessage, now: DateTime<Utc>) -> &ChatMessage {
        self.touch(now);
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn toggle_slow_mode(&mut self, now: DateTime<Utc>) -> SpeechRate {
        self.speech_rate = match self.speech_rate {
            SpeechRate::Normal => SpeechRate::Slow,
            SpeechRate::Slow => SpeechRate::Normal,
        };
        self.touch(now);
        self.speech_rate
    }
}
