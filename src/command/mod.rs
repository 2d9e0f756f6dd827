// Command parsing - turns one input line into a validated command
// Songs come in as `id:artist:title:length[:priority]`

use regex::Regex;

use crate::error::CommandError;
use crate::playback::{Track, NEXT_PRIORITY, PRIORITY_LEVELS};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Track),
    Next(Track),
    Play(u32),
    Skip,
    Remove(u32),
    Peek,
    List,
    History,
    Quit,
}

pub struct CommandParser {
    song_with_priority: Regex,
    song_without_priority: Regex,
    number: Regex,
}

impl CommandParser {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            song_with_priority: Regex::new(r"^(\d+):([^:]+):([^:]+):(\d+):(\d+)$")?,
            song_without_priority: Regex::new(r"^(\d+):([^:]+):([^:]+):(\d+)$")?,
            number: Regex::new(r"^\d+$")?,
        })
    }

    pub fn parse(&self, line: &str) -> Result<Command, CommandError> {
        let line = line.trim();
        let (keyword, args) = match line.split_once(char::is_whitespace) {
            Some((keyword, args)) => (keyword, args.trim()),
            None => (line, ""),
        };

        match keyword {
            "add" => self.parse_song(args, true, "add").map(Command::Add),
            "next" => self.parse_song(args, false, "next").map(Command::Next),
            "play" => self.parse_number(args, "play").map(Command::Play),
            "remove" => self.parse_number(args, "remove").map(Command::Remove),
            "skip" => bare(Command::Skip, "skip", line, args),
            "peek" => bare(Command::Peek, "peek", line, args),
            "list" => bare(Command::List, "list", line, args),
            "history" => bare(Command::History, "history", line, args),
            "quit" => bare(Command::Quit, "quit", line, args),
            _ => Err(CommandError::UnknownCommand(line.to_string())),
        }
    }

    fn parse_song(
        &self,
        def: &str,
        with_priority: bool,
        command: &'static str,
    ) -> Result<Track, CommandError> {
        let pattern = if with_priority {
            &self.song_with_priority
        } else {
            &self.song_without_priority
        };
        let invalid = || CommandError::InvalidFormat {
            command,
            input: def.to_string(),
        };

        let caps = pattern.captures(def).ok_or_else(invalid)?;
        let artist = caps[2].trim();
        let title = caps[3].trim();
        if artist.is_empty() || title.is_empty() {
            return Err(invalid());
        }

        let id = parse_u32(&caps[1])?;
        let length = parse_u32(&caps[4])?;
        if length == 0 {
            return Err(CommandError::ZeroLength);
        }

        let priority = match caps.get(5) {
            Some(m) => {
                let raw = parse_u32(m.as_str())?;
                if raw as usize >= PRIORITY_LEVELS {
                    return Err(CommandError::InvalidPriority(raw));
                }
                raw as u8
            }
            None => NEXT_PRIORITY,
        };

        Ok(Track::new(id, artist, title, length, priority))
    }

    fn parse_number(&self, arg: &str, command: &'static str) -> Result<u32, CommandError> {
        if !self.number.is_match(arg) {
            return Err(CommandError::InvalidFormat {
                command,
                input: arg.to_string(),
            });
        }
        parse_u32(arg)
    }
}

fn parse_u32(digits: &str) -> Result<u32, CommandError> {
    digits
        .parse()
        .map_err(|_| CommandError::InvalidNumber(digits.to_string()))
}

/// Commands that take no arguments
fn bare(
    command: Command,
    name: &'static str,
    line: &str,
    args: &str,
) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::InvalidFormat {
            command: name,
            input: line.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> CommandParser {
        CommandParser::new().unwrap()
    }

    #[test]
    fn test_parse_add() {
        let cmd = parser().parse("add 12:Boards of Canada: Roygbiv :151:3").unwrap();
        let track = match cmd {
            Command::Add(track) => track,
            other => panic!("expected add, got {:?}", other),
        };
        assert_eq!(track.id, 12);
        assert_eq!(track.artist, "Boards of Canada");
        assert_eq!(track.title, "Roygbiv");
        assert_eq!(track.length, 151);
        assert_eq!(track.priority, 3);
        assert_eq!(track.remaining_time(), 151);
    }

    #[test]
    fn test_parse_next_defaults_to_top_priority() {
        let cmd = parser().parse("next 5:Burial:Archangel:239").unwrap();
        assert_eq!(cmd, Command::Next(Track::new(5, "Burial", "Archangel", 239, 0)));
    }

    #[test]
    fn test_parse_simple_commands() {
        let p = parser();
        assert_eq!(p.parse("play 45").unwrap(), Command::Play(45));
        assert_eq!(p.parse("  remove   7 ").unwrap(), Command::Remove(7));
        assert_eq!(p.parse("skip").unwrap(), Command::Skip);
        assert_eq!(p.parse("peek").unwrap(), Command::Peek);
        assert_eq!(p.parse("list").unwrap(), Command::List);
        assert_eq!(p.parse("history").unwrap(), Command::History);
        assert_eq!(p.parse("quit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_rejects_bad_song_definitions() {
        let p = parser();
        assert!(matches!(
            p.parse("add 1:Artist:Title:100"),
            Err(CommandError::InvalidFormat { command: "add", .. })
        ));
        assert!(matches!(
            p.parse("next 1:Artist:Title:100:2"),
            Err(CommandError::InvalidFormat { command: "next", .. })
        ));
        assert!(matches!(
            p.parse("add 1: :Title:100:2"),
            Err(CommandError::InvalidFormat { .. })
        ));
        assert_eq!(p.parse("add 1:A:T:0:2"), Err(CommandError::ZeroLength));
        assert_eq!(p.parse("add 1:A:T:10:6"), Err(CommandError::InvalidPriority(6)));
        assert_eq!(
            p.parse("add 99999999999:A:T:10:1"),
            Err(CommandError::InvalidNumber("99999999999".to_string()))
        );
    }

    #[test]
    fn test_rejects_bad_numbers_and_unknown_commands() {
        let p = parser();
        assert!(matches!(p.parse("play -3"), Err(CommandError::InvalidFormat { .. })));
        assert!(matches!(p.parse("play"), Err(CommandError::InvalidFormat { .. })));
        assert!(matches!(p.parse("remove x"), Err(CommandError::InvalidFormat { .. })));
        assert!(matches!(p.parse("peek now"), Err(CommandError::InvalidFormat { command: "peek", .. })));
        assert_eq!(
            p.parse("shuffle"),
            Err(CommandError::UnknownCommand("shuffle".to_string()))
        );
    }
}
