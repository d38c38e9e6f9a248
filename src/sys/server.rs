use std::str::FromStr;

use async_channel::Sender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

use crate::data::Dimension;
use crate::events::AppEvent;

const SOCKET_PATH: &str = "/tmp/snowflake.sock";

/// Line-oriented control socket. Commands:
///   overview          — back to the full blob
///   focus <dimension> — isolate one dimension (e.g. "focus health")
///   reload            — re-read the config file
pub async fn run_server(tx: Sender<AppEvent>) {
    // Cleanup old socket if it exists
    if std::fs::metadata(SOCKET_PATH).is_ok() {
        let _ = std::fs::remove_file(SOCKET_PATH);
    }

    let listener = match UnixListener::bind(SOCKET_PATH) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket: {}", e);
            return;
        }
    };

    loop {
        match listener.accept().await {
            Ok((mut stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let reader = BufReader::new(&mut stream);
                    let mut lines = reader.lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        match parse_command(line.trim()) {
                            Some(event) => {
                                let _ = tx.send(event).await;
                            }
                            None => log::warn!("Unknown command: {}", line.trim()),
                        }
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}

fn parse_command(line: &str) -> Option<AppEvent> {
    match line {
        "overview" => Some(AppEvent::Overview),
        "reload" => Some(AppEvent::ConfigReload),
        _ => {
            let target = line.strip_prefix("focus")?.trim();
            Dimension::from_str(target).ok().map(AppEvent::Focus)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert!(matches!(parse_command("overview"), Some(AppEvent::Overview)));
        assert!(matches!(
            parse_command("reload"),
            Some(AppEvent::ConfigReload)
        ));
        assert!(matches!(
            parse_command("focus health"),
            Some(AppEvent::Focus(Dimension::Health))
        ));
        assert!(matches!(
            parse_command("focus DIVIDEND"),
            Some(AppEvent::Focus(Dimension::Dividend))
        ));
        assert!(parse_command("focus nonsense").is_none());
        assert!(parse_command("quit").is_none());
    }
}
