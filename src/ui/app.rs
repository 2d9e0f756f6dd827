use super::{banner, describe_event, removed, warning, GOODBYE, UNKNOWN_COMMAND};
use crate::command::{Command, CommandParser};
use crate::config::Config;
use crate::error::{CommandError, PlaybackError};
use crate::playback::PlaybackEngine;
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

pub struct App {
    config: Config,
    engine: PlaybackEngine,
    parser: CommandParser,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            config,
            engine: PlaybackEngine::new(),
            parser: CommandParser::new()?,
            should_quit: false,
        })
    }

    pub fn engine(&self) -> &PlaybackEngine {
        &self.engine
    }

    /// Read commands until `quit` or end of input, writing results to `output`.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        if self.config.ui.show_banner {
            write_lines(&mut output, &banner()).await?;
        }

        let mut lines = input.lines();
        while !self.should_quit {
            let Some(line) = lines.next_line().await? else {
                debug!("Input closed without quit");
                break;
            };
            let out = self.handle_line(&line);
            write_lines(&mut output, &out).await?;
        }

        info!(
            "Session over: {} played, {} queued",
            self.engine.history().len(),
            self.engine.queued_len()
        );
        Ok(())
    }

    /// Run one input line and return what should be printed for it
    pub fn handle_line(&mut self, line: &str) -> Vec<String> {
        let line = line.trim();
        if line.is_empty() {
            return Vec::new();
        }

        match self.parser.parse(line) {
            Ok(command) => {
                debug!("Running {:?}", command);
                self.execute(command)
                    .unwrap_or_else(|e| vec![warning(e)])
            }
            Err(CommandError::UnknownCommand(input)) => {
                debug!("Unknown command: {}", input);
                vec![UNKNOWN_COMMAND.to_string()]
            }
            Err(e) => {
                warn!("Rejected '{}': {}", line, e);
                vec![warning(e)]
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Vec<String>, PlaybackError> {
        let out = match command {
            Command::Add(track) => {
                self.engine.enqueue(track)?;
                Vec::new()
            }
            Command::Next(track) => {
                self.engine.enqueue_next(track)?;
                Vec::new()
            }
            Command::Play(seconds) => {
                let events = self.engine.advance_time(seconds);
                if self.config.ui.echo_events {
                    events.iter().map(describe_event).collect()
                } else {
                    Vec::new()
                }
            }
            Command::Skip => {
                self.engine.skip();
                Vec::new()
            }
            Command::Remove(id) => match self.engine.remove_by_id(id) {
                0 => Vec::new(),
                count => vec![removed(count)],
            },
            Command::Peek => self
                .engine
                .peek()
                .map(|track| track.peek_view().to_string())
                .into_iter()
                .collect(),
            Command::List => self
                .engine
                .list()
                .into_iter()
                .map(|track| track.list_view().to_string())
                .collect(),
            Command::History => self
                .engine
                .history()
                .iter()
                .map(|track| track.list_view().to_string())
                .collect(),
            Command::Quit => {
                self.should_quit = true;
                vec![GOODBYE.to_string()]
            }
        };
        Ok(out)
    }
}

async fn write_lines<W: AsyncWrite + Unpin>(output: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        output.write_all(line.as_bytes()).await?;
        output.write_all(b"\n").await?;
    }
    output.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_app() -> App {
        let mut config = Config::default();
        config.ui.show_banner = false;
        App::new(config).unwrap()
    }

    #[test]
    fn test_session_output() {
        let mut app = quiet_app();
        assert!(app.handle_line("add 1:Aphex Twin:Xtal:30:0").is_empty());
        assert!(app.handle_line("add 2:Autechre:Rae:20:0").is_empty());
        assert!(app.handle_line("play 45").is_empty());

        assert_eq!(app.handle_line("peek"), vec!["00002:Autechre:Rae:20:5"]);
        assert_eq!(app.handle_line("history"), vec!["00001:Aphex Twin:Xtal:30"]);
        assert_eq!(app.handle_line("list"), vec!["00002:Autechre:Rae:20"]);
    }

    #[test]
    fn test_remove_reports_count() {
        let mut app = quiet_app();
        app.handle_line("add 4:A:One:10:2");
        app.handle_line("add 4:A:Two:10:3");
        assert_eq!(app.handle_line("remove 4"), vec!["Removed 2 songs."]);
        assert!(app.handle_line("remove 4").is_empty());
    }

    #[test]
    fn test_errors_and_unknown_lines() {
        let mut app = quiet_app();
        assert_eq!(app.handle_line("dance"), vec![UNKNOWN_COMMAND]);
        assert_eq!(app.handle_line("add 1:A:T:10:8"), vec!["⚠️ Invalid priority: 8"]);
        assert!(app.handle_line("   ").is_empty());
        assert_eq!(app.engine().queued_len(), 0);
    }

    #[test]
    fn test_echo_events() {
        let mut config = Config::default();
        config.ui.echo_events = true;
        let mut app = App::new(config).unwrap();
        app.handle_line("add 9:A:T:10:1");
        assert_eq!(
            app.handle_line("play 15"),
            vec!["▶ 00009 started at 0s", "✔ 00009 finished at 10s"]
        );
    }

    #[tokio::test]
    async fn test_run_until_quit() {
        let mut config = Config::default();
        config.ui.show_banner = false;
        let mut app = App::new(config).unwrap();

        let input: &[u8] = b"add 1:A:First:10:3\nnext 2:B:Second:10\nlist\nquit\nlist\n";
        let mut output = Vec::new();
        app.run(input, &mut output).await.unwrap();

        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed, "00002:B:Second:10\n00001:A:First:10\n👋 Bye!\n");
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_run_prints_banner_and_stops_at_eof() {
        let mut app = App::new(Config::default()).unwrap();
        let input: &[u8] = b"add 1:A:First:10:3\n";
        let mut output = Vec::new();
        app.run(input, &mut output).await.unwrap();

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.starts_with("🎵 prioplay"));
        assert!(!app.should_quit);
        assert_eq!(app.engine().queued_len(), 1);
    }
}
