use crate::filters::FilterConfig;
use crate::model::Listing;

pub mod browse;
pub mod favorites;
pub mod filters;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A listing paired with its session favorite flag, ready for display.
#[derive(Debug, Clone)]
pub struct ListingView {
    pub listing: Listing,
    pub favorite: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listings: Vec<ListingView>,
    pub config: Option<FilterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listings(mut self, listings: Vec<ListingView>) -> Self {
        self.listings = listings;
        self
    }

    pub fn with_config(mut self, config: FilterConfig) -> Self {
        self.config = Some(config);
        self
    }
}
