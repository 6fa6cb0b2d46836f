use serde::Serialize;

pub const ZERO_COUNT: &str = "0";

/// Text values read from one post's markup at one point in time.
///
/// Missing elements are represented by the field defaults, never by `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSnapshot {
    pub is_repost: bool,
    pub reposter_text: String,
    pub raw_time_text: String,
    pub author_display_name: String,
    pub body_text: String,
    pub reply_count: String,
    pub repost_count: String,
    pub like_count: String,
}

impl Default for PostSnapshot {
    fn default() -> Self {
        Self {
            is_repost: false,
            reposter_text: String::new(),
            raw_time_text: String::new(),
            author_display_name: String::new(),
            body_text: String::new(),
            reply_count: ZERO_COUNT.to_string(),
            repost_count: ZERO_COUNT.to_string(),
            like_count: ZERO_COUNT.to_string(),
        }
    }
}
