use crate::capability::Capabilities;

/// An entry in the article context menu. Action internals live elsewhere;
/// this module only decides which entries appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Share,
    DownloadAs,
    SaveOffline,
    Webhook(String),
}

/// Compose the context menu for the current environment.
/// `Share` only appears when the environment exposes a share sheet;
/// outgoing webhooks are appended in configuration order.
pub fn build_menu(capabilities: &dyn Capabilities, webhooks: &[String]) -> Vec<MenuEntry> {
    let mut entries = Vec::with_capacity(3 + webhooks.len());
    if capabilities.supports_share() {
        entries.push(MenuEntry::Share);
    }
    entries.push(MenuEntry::DownloadAs);
    entries.push(MenuEntry::SaveOffline);
    entries.extend(webhooks.iter().cloned().map(MenuEntry::Webhook));
    entries
}
