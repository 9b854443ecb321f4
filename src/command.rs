//! Text commands driving the menus from a terminal

use std::str::FromStr;

use crate::error::CommandError;

/// One user action
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    NewGame,
    Continue,
    ToggleSettings,
    Volume(f32),
    Particles(bool),
    Score(i32),
    Die,
    Pause,
    Resume,
    Save,
    Menu,
    Status,
    Quit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::NewGame => "new",
            Command::Continue => "continue",
            Command::ToggleSettings => "settings",
            Command::Volume(_) => "volume",
            Command::Particles(_) => "particles",
            Command::Score(_) => "score",
            Command::Die => "die",
            Command::Pause => "pause",
            Command::Resume => "resume",
            Command::Save => "save",
            Command::Menu => "menu",
            Command::Status => "status",
            Command::Quit => "quit",
        }
    }

    /// One-line help for every command
    pub fn help() -> &'static str {
        "new | continue | settings | volume <0..1> | particles <on|off> | \
         score <n> | die | pause | resume | save | menu | status | quit"
    }
}

fn invalid(command: &str, message: impl Into<String>) -> CommandError {
    CommandError::InvalidArgument {
        command: command.to_string(),
        message: message.into(),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Err(CommandError::Unknown(String::new()));
        };
        let word = word.to_lowercase();
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(invalid(&word, "too many arguments"));
        }

        let command = match (word.as_str(), arg) {
            ("new", None) => Command::NewGame,
            ("continue", None) => Command::Continue,
            ("settings", None) => Command::ToggleSettings,
            ("volume", Some(v)) => Command::Volume(
                v.parse()
                    .map_err(|_| invalid("volume", format!("'{}' is not a number", v)))?,
            ),
            ("particles", Some(v)) => match v.to_lowercase().as_str() {
                "on" | "true" | "1" => Command::Particles(true),
                "off" | "false" | "0" => Command::Particles(false),
                _ => return Err(invalid("particles", "expected on or off")),
            },
            ("score", Some(v)) => Command::Score(
                v.parse()
                    .map_err(|_| invalid("score", format!("'{}' is not an integer", v)))?,
            ),
            ("die", None) => Command::Die,
            ("pause", None) => Command::Pause,
            ("resume", None) => Command::Resume,
            ("save", None) => Command::Save,
            ("menu", None) => Command::Menu,
            ("status", None) => Command::Status,
            ("quit" | "exit", None) => Command::Quit,
            ("volume" | "particles" | "score", None) => {
                return Err(invalid(&word, "missing argument"));
            }
            (
                "new" | "continue" | "settings" | "die" | "pause" | "resume" | "save" | "menu"
                | "status" | "quit" | "exit",
                Some(_),
            ) => return Err(invalid(&word, "takes no argument")),
            _ => return Err(CommandError::Unknown(word)),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        assert_eq!("new".parse::<Command>(), Ok(Command::NewGame));
        assert_eq!("  Continue ".parse::<Command>(), Ok(Command::Continue));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_arguments() {
        assert_eq!("volume 0.3".parse::<Command>(), Ok(Command::Volume(0.3)));
        assert_eq!("particles off".parse::<Command>(), Ok(Command::Particles(false)));
        assert_eq!("particles ON".parse::<Command>(), Ok(Command::Particles(true)));
        assert_eq!("score -5".parse::<Command>(), Ok(Command::Score(-5)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "jump".parse::<Command>(),
            Err(CommandError::Unknown("jump".to_string()))
        );
        assert!(matches!(
            "volume loud".parse::<Command>(),
            Err(CommandError::InvalidArgument { .. })
        ));
        assert!(matches!(
            "volume".parse::<Command>(),
            Err(CommandError::InvalidArgument { .. })
        ));
        assert!(matches!(
            "save now".parse::<Command>(),
            Err(CommandError::InvalidArgument { .. })
        ));
        assert!(matches!(
            "score 1 2".parse::<Command>(),
            Err(CommandError::InvalidArgument { .. })
        ));
        assert!(matches!("".parse::<Command>(), Err(CommandError::Unknown(_))));
    }

    #[test]
    fn test_names_parse_back() {
        for cmd in [Command::NewGame, Command::Die, Command::Status, Command::Quit] {
            assert_eq!(cmd.name().parse::<Command>(), Ok(cmd));
        }
    }
}
