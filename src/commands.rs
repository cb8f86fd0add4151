use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::info;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "Start the bot")]
    Start,
}

pub fn greeting(first_name: &str) -> String {
    format!("Hello {}! I am LuLuCatch Bot.", first_name)
}

pub async fn handle_command(bot: Bot, msg: Message, cmd: Command) -> ResponseResult<()> {
    match cmd {
        Command::Start => {
            // Channel posts carry no sender; nothing to greet
            let Some(user) = msg.from.as_ref() else {
                return Ok(());
            };

            info!("/start from user {}", user.id.0);

            bot.send_message(msg.chat.id, greeting(&user.first_name))
                .await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::User;

    fn user(first_name: &str) -> User {
        serde_json::from_value(serde_json::json!({
            "id": 250918540,
            "is_bot": false,
            "first_name": first_name,
            "language_code": "en"
        }))
        .unwrap()
    }

    #[test]
    fn test_greeting_text() {
        assert_eq!(greeting("Alice"), "Hello Alice! I am LuLuCatch Bot.");
    }

    #[test]
    fn test_greeting_for_alice() {
        let alice = user("Alice");
        assert_eq!(greeting(&alice.first_name), "Hello Alice! I am LuLuCatch Bot.");
    }

    #[test]
    fn test_greeting_keeps_name_verbatim() {
        let name = user("Андрей *bold*");
        assert_eq!(
            greeting(&name.first_name),
            "Hello Андрей *bold*! I am LuLuCatch Bot."
        );
    }

    #[test]
    fn test_parse_start() {
        assert_eq!(Command::parse("/start", "LuLuCatchBot").unwrap(), Command::Start);
        assert_eq!(
            Command::parse("/start@LuLuCatchBot", "LuLuCatchBot").unwrap(),
            Command::Start
        );
    }

    #[test]
    fn test_parse_rejects_other_commands() {
        assert!(Command::parse("/help", "LuLuCatchBot").is_err());
        assert!(Command::parse("/start@SomeOtherBot", "LuLuCatchBot").is_err());
        assert!(Command::parse("hello", "LuLuCatchBot").is_err());
    }

    #[test]
    fn test_menu_has_only_start() {
        let menu = Command::bot_commands();
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].command.trim_start_matches('/'), "start");
    }
}
