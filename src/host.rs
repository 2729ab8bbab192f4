//! Line-oriented headless host.
//!
//! Stands in for the mobile shell: each input line is one user action, each
//! output line is a JSON object describing what the host should render.
//!
//! ```text
//! login <token>     sign in with an identity-provider token
//! logout            sign out
//! refresh           re-evaluate (foreground / retry)
//! call-manager      forgot-password call
//! state             current gate state
//! quit              stop
//! ```

use serde_json::json;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::bootstrap::AppRuntime;
use crate::commands;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    Login(String),
    Logout,
    Refresh,
    CallManager,
    State,
    Quit,
}

impl HostCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        match verb {
            "login" => Ok(Self::Login(rest.to_string())),
            "logout" => Ok(Self::Logout),
            "refresh" | "foreground" => Ok(Self::Refresh),
            "call-manager" => Ok(Self::CallManager),
            "state" => Ok(Self::State),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

async fn execute(runtime: &AppRuntime, command: HostCommand) -> serde_json::Value {
    let result = match command {
        HostCommand::Login(token) => commands::sign_in(runtime, token)
            .await
            .map(|dto| json!({ "gate": dto })),
        HostCommand::Logout => Ok(json!({ "gate": commands::sign_out(runtime).await })),
        HostCommand::Refresh => commands::refresh(runtime)
            .await
            .map(|dto| json!({ "gate": dto })),
        HostCommand::CallManager => {
            Ok(json!({ "recovery": commands::contact_manager(runtime).await }))
        }
        HostCommand::State => Ok(json!({ "gate": commands::current_screen(runtime).await })),
        HostCommand::Quit => Ok(json!({ "bye": true })),
    };
    result.unwrap_or_else(|message| json!({ "error": message }))
}

/// Read commands from `input` and write one JSON line per command to
/// `output` until EOF or `quit`.
pub async fn serve<R, W>(runtime: &AppRuntime, input: R, mut output: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let (reply, quit) = match HostCommand::parse(&line) {
            Ok(command) => {
                debug!(?command, "host command");
                let quit = command == HostCommand::Quit;
                (execute(runtime, command).await, quit)
            }
            Err(message) => (json!({ "error": message }), false),
        };
        output.write_all(reply.to_string().as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
        if quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(
            HostCommand::parse("login  abc.def "),
            Ok(HostCommand::Login("abc.def".to_string()))
        );
        assert_eq!(HostCommand::parse("login"), Ok(HostCommand::Login(String::new())));
        assert_eq!(HostCommand::parse("foreground"), Ok(HostCommand::Refresh));
        assert_eq!(HostCommand::parse("call-manager"), Ok(HostCommand::CallManager));
        assert_eq!(HostCommand::parse(" quit"), Ok(HostCommand::Quit));
        assert!(HostCommand::parse("dance").is_err());
    }
}
