use crate::transport::{ChatId, IncomingUpdate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Video,
}

impl BotCommand {
    pub const ALL: [BotCommand; 2] = [BotCommand::Start, BotCommand::Video];

    pub fn name(&self) -> &'static str {
        match self {
            BotCommand::Start => "start",
            BotCommand::Video => "video",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

/// A recognised command together with the conversation it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEvent {
    pub chat_id: ChatId,
    pub command: BotCommand,
}

impl CommandEvent {
    pub fn from_update(update: &IncomingUpdate, bot_username: Option<&str>) -> Option<Self> {
        let chat_id = update.chat_id?;
        let text = update.text.as_deref()?;
        let command = parse_command(text, bot_username)?;
        Some(Self { chat_id, command })
    }
}

/// Parses `/name[@bot]`; anything after the first word is ignored.
///
/// A command addressed to a different bot is not ours and yields `None`.
pub fn parse_command(text: &str, bot_username: Option<&str>) -> Option<BotCommand> {
    let head = text.split_whitespace().next()?.strip_prefix('/')?;

    let name = match head.split_once('@') {
        Some((name, addressee)) => {
            if let Some(me) = bot_username {
                if !addressee.eq_ignore_ascii_case(me.trim_start_matches('@')) {
                    return None;
                }
            }
            name
        }
        None => head,
    };

    BotCommand::from_name(name)
}
