use std::path::PathBuf;
use std::thread;

use async_channel::Sender;
use tokio::runtime::Runtime;

use crate::events::AppEvent;

/// Runs the control socket and the config watcher on a dedicated tokio
/// runtime so the GTK main loop stays untouched.
pub fn start_background_services(tx: Sender<AppEvent>, config_path: PathBuf, serve: bool) {
    thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to create Tokio runtime: {}", e);
                return;
            }
        };

        rt.block_on(async {
            if serve {
                let tx = tx.clone();
                tokio::spawn(async move {
                    crate::sys::server::run_server(tx).await;
                });
            }

            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    crate::config::run_async_watcher(tx, config_path).await;
                });
            }

            std::future::pending::<()>().await;
        });
    });
}
