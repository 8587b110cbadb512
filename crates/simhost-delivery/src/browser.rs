//! User-agent classification.

/// The browser families the stylesheet is tailored for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    /// Chrome and Chromium derivatives, which keep shadow-DOM selectors.
    Chrome,
    /// Everything else, including requests without a user agent.
    Other,
}

impl Browser {
    /// Chrome-like iff the agent mentions `Chrome` and is not legacy Edge.
    pub fn classify(user_agent: Option<&str>) -> Self {
        match user_agent {
            Some(ua) if ua.contains("Chrome") && !ua.contains("Edge/") => Self::Chrome,
            _ => Self::Other,
        }
    }

    pub fn is_chrome(self) -> bool {
        self == Self::Chrome
    }
}
