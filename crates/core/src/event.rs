/// All messages (events) the host loop reacts to.
///
/// Sources:
/// - Terminal input stream → `Resize`, `Quit`
/// - Config watcher task   → `ConfigReloaded`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The terminal changed size (new width/height in character cells).
    Resize { width: u16, height: u16 },
    /// Config file changed on disk; triggers a live theme reload.
    ConfigReloaded,
    /// `q`, `Esc` or `Ctrl+C` was pressed.
    Quit,
}
