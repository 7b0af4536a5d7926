mod chat;
mod config;
mod session;

use std::sync::Arc;

use chrono::Utc;
use config::{Config, StorageKind};
use dotenv::dotenv;
use log::{debug, info};
use session::{Session, SpeechRate};
use teloxide::{
    dispatching::dialogue::{serializer::Json, ErasedStorage, InMemStorage, SqliteStorage, Storage},
    prelude::*,
    types::{ChatAction, ParseMode},
    utils::html,
};

type ChatDialogue = Dialogue<State, ErasedStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(Clone, Default, serde::Serialize, serde::Deserialize)]
pub enum State {
    #[default]
    Start,
    Conversation {
        session: Session,
    },
}

type SessionStorage = std::sync::Arc<ErasedStorage<State>>;

#[tokio::main]
async fn main() -> HandlerResult {
    // .env is optional, the variables may come from the environment
    dotenv().ok();

    pretty_env_logger::init();
    info!("Starting EnglishFlow bot...");

    let config = Arc::new(Config::from_env()?);
    debug!("Loaded {:?}", config);

    let bot = Bot::from_env();

    let storage: SessionStorage = match config.storage {
        StorageKind::Sqlite => {
            info!("Opening dialogue storage at {}", config.db_path);
            SqliteStorage::open(&config.db_path, Json).await?.erase()
        }
        StorageKind::Memory => {
            info!("Keeping dialogues in memory, they will be lost on restart");
            InMemStorage::<State>::new().erase()
        }
    };

    Dispatcher::builder(
        bot,
        Update::filter_message()
            .enter_dialogue::<Message, ErasedStorage<State>, State>()
            .branch(dptree::case![State::Start].endpoint(start))
            .branch(dptree::case![State::Conversation { session }].endpoint(converse)),
    )
    .dependencies(dptree::deps![storage, config])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;

    Ok(())
}

const RESET_COMMAND: &str = "/reset";
const SLOW_COMMAND: &str = "/slow";
const LISTEN_ERROR: &str = "Erro ao ouvir. Tente novamente.";
const RESTARTED_TEXT: &str = "A conversa foi reiniciada por inatividade.";

fn format_reply(text: &str, tip: &str) -> String {
    format!("{}\n\n<i>{}</i>", html::escape(text), html::escape(tip))
}

// The rate is only a saved preference, this chat sends text
fn speech_rate_status(rate: SpeechRate) -> &'static str {
    match rate {
        SpeechRate::Normal => "🐇 Velocidade normal salva (chat só de texto, sem áudio).",
        SpeechRate::Slow => "🐢 Modo lento salvo (chat só de texto, sem áudio).",
    }
}

async fn send_welcome(bot: &Bot, msg: &Message) -> HandlerResult {
    let welcome = chat::content::WELCOME;
    bot.send_message(msg.chat.id, format_reply(welcome.text, welcome.tip))
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

async fn start(
    bot: Bot,
    dialogue: ChatDialogue,
    config: Arc<Config>,
    msg: Message,
) -> HandlerResult {
    info!("New conversation in chat {}", msg.chat.id);
    let session = Session::new(Utc::now());
    send_welcome(&bot, &msg).await?;
    dialogue
        .update(State::Conversation {
            session: session.clone(),
        })
        .await?;

    // Anything but a command is already the learner's first turn
    let is_turn = msg.text().map_or(false, |text| !text.starts_with('/'));
    if is_turn {
        return converse(bot, dialogue, session, config, msg).await;
    }
    Ok(())
}

async fn converse(
    bot: Bot,
    dialogue: ChatDialogue,
    session: Session,
    config: Arc<Config>,
    msg: Message,
) -> HandlerResult {
    let mut session = session;
    let now = Utc::now();

    let transcript = match msg.text() {
        Some(text) => text.to_string(),
        None => {
            bot.send_message(msg.chat.id, LISTEN_ERROR).await?;
            return Ok(());
        }
    };

    match transcript.trim() {
        RESET_COMMAND => {
            session.reset(now);
            send_welcome(&bot, &msg).await?;
            dialogue.update(State::Conversation { session }).await?;
            return Ok(());
        }
        SLOW_COMMAND => {
            let rate = session.toggle_slow_mode(now);
            bot.send_message(msg.chat.id, speech_rate_status(rate)).await?;
            dialogue.update(State::Conversation { session }).await?;
            return Ok(());
        }
        _ => {}
    }

    if session.expire_if_idle(now, config.idle_timeout) {
        debug!("Chat {} was idle, conversation reset", msg.chat.id);
        bot.send_message(msg.chat.id, RESTARTED_TEXT).await?;
        send_welcome(&bot, &msg).await?;
    }

    session.push_user(&transcript, now);
    dialogue
        .update(State::Conversation {
            session: session.clone(),
        })
        .await?;

    // Only cosmetic, so a failed chat action is ignored
    let _ = bot.send_chat_action(msg.chat.id, ChatAction::Typing).await;
    tokio::time::sleep(config.thinking_delay).await;

    let answer = chat::select_response(&transcript.to_lowercase(), &transcript);
    debug!("Chat {}: {:?} -> {:?}", msg.chat.id, transcript, answer.text);
    session.push_bot(&answer, Utc::now());

    bot.send_message(msg.chat.id, format_reply(&answer.text, &answer.tip))
        .parse_mode(ParseMode::Html)
        .await?;

    dialogue.update(State::Conversation { session }).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_escapes_text_and_italicises_tip() {
        assert_eq!(
            format_reply("I didn't catch <that>", "Dica: Responda 'Hi'"),
            "I didn't catch &lt;that&gt;\n\n<i>Dica: Responda 'Hi'</i>"
        );
    }

    #[test]
    fn slow_mode_reply_does_not_promise_audio() {
        for rate in [SpeechRate::Normal, SpeechRate::Slow] {
            let status = speech_rate_status(rate);
            assert!(status.contains("sem áudio"));
            assert!(!status.contains("0.5") && !status.contains("0.9"));
        }
    }
}
