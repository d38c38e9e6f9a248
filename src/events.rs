use crate::data::Dimension;

/// Events delivered to the GUI from background services (socket server,
/// config watcher).
#[derive(Debug, Clone)]
pub enum AppEvent {
    Focus(Dimension),
    Overview,
    ConfigReload,
}
