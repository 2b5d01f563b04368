/// Browser tab lifecycle signals the coordinator reacts to.
///
/// These mirror the host browser's `onActivated` and `onUpdated`
/// (status == complete) events; the browser itself is an opaque collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabEvent {
    /// The tab became the active tab.
    Activated { tab_id: u64, url: String },
    /// The tab finished loading a (possibly new) URL.
    NavigationCompleted { tab_id: u64, url: String },
}

impl TabEvent {
    pub fn tab_id(&self) -> u64 {
        match self {
            TabEvent::Activated { tab_id, .. } => *tab_id,
            TabEvent::NavigationCompleted { tab_id, .. } => *tab_id,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            TabEvent::Activated { url, .. } => url,
            TabEvent::NavigationCompleted { url, .. } => url,
        }
    }
}
