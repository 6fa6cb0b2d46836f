use crate::post_snapshot::{PostSnapshot, ZERO_COUNT};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

const NO_ENGAGEMENT: &str = "No engagement yet";

static RELATIVE_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)(mo|[smhd])$").expect("relative time regex"));

/// How count text is compared against zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountPolicy {
    /// Only the exact text `"0"` is zero.
    #[default]
    Literal,
    /// Any text that parses as a number equal to zero (`"00"`, `"0.0"`).
    Numeric,
}

impl CountPolicy {
    pub fn is_zero(self, count: &str) -> bool {
        match self {
            CountPolicy::Literal => count == ZERO_COUNT,
            CountPolicy::Numeric => count
                .trim()
                .parse::<f64>()
                .map(|n| n == 0.0)
                .unwrap_or(false),
        }
    }
}

/// Expands compact relative timestamps: `"3h"` becomes `"3 hours ago"`.
/// Anything else is returned trimmed but otherwise unchanged.
pub fn format_time_text(time_text: &str) -> String {
    let time_text = time_text.trim();
    let Some(caps) = RELATIVE_TIME.captures(time_text) else {
        return time_text.to_string();
    };
    let unit = match &caps[2] {
        "s" => "seconds",
        "m" => "minutes",
        "h" => "hours",
        "d" => "days",
        "mo" => "months",
        _ => return time_text.to_string(),
    };
    format!("{} {} ago", &caps[1], unit)
}

/// Non-zero counts in reply, repost, like order, or the no-engagement phrase.
pub fn engagement_summary(snapshot: &PostSnapshot, policy: CountPolicy) -> String {
    let parts: Vec<String> = [
        (&snapshot.reply_count, "replies"),
        (&snapshot.repost_count, "reposts"),
        (&snapshot.like_count, "likes"),
    ]
    .into_iter()
    .filter(|(count, _)| !policy.is_zero(count))
    .map(|(count, label)| format!("{} {}", count, label))
    .collect();

    if parts.is_empty() {
        NO_ENGAGEMENT.to_string()
    } else {
        parts.join(", ")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnnouncementFormatter {
    policy: CountPolicy,
}

impl AnnouncementFormatter {
    pub fn new(policy: CountPolicy) -> Self {
        Self { policy }
    }

    pub fn format(&self, snapshot: &PostSnapshot) -> String {
        format!(
            "{} {} {} posted \"{}\". {}",
            snapshot.reposter_text,
            format_time_text(&snapshot.raw_time_text),
            snapshot.author_display_name,
            snapshot.body_text,
            engagement_summary(snapshot, self.policy)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn counts(reply: &str, repost: &str, like: &str) -> PostSnapshot {
        PostSnapshot {
            reply_count: reply.to_string(),
            repost_count: repost.to_string(),
            like_count: like.to_string(),
            ..PostSnapshot::default()
        }
    }

    #[test]
    fn test_format_time_units() {
        assert_eq!(format_time_text("5s"), "5 seconds ago");
        assert_eq!(format_time_text("12m"), "12 minutes ago");
        assert_eq!(format_time_text("3h"), "3 hours ago");
        assert_eq!(format_time_text("2d"), "2 days ago");
        assert_eq!(format_time_text("1mo"), "1 months ago");
    }

    #[test]
    fn test_format_time_trims_before_matching() {
        assert_eq!(format_time_text("  45m\n"), "45 minutes ago");
    }

    #[test]
    fn test_format_time_passthrough() {
        assert_eq!(format_time_text("Jan 5"), "Jan 5");
        assert_eq!(format_time_text(" Jan 5 "), "Jan 5");
        assert_eq!(format_time_text("3 h"), "3 h");
        assert_eq!(format_time_text("3y"), "3y");
        assert_eq!(format_time_text("h"), "h");
        assert_eq!(format_time_text(""), "");
    }

    #[test]
    fn test_format_time_ascii_digits_only() {
        assert_eq!(format_time_text("٣h"), "٣h");
    }

    #[test]
    fn test_engagement_none() {
        assert_eq!(
            engagement_summary(&counts("0", "0", "0"), CountPolicy::Literal),
            "No engagement yet"
        );
    }

    #[test]
    fn test_engagement_order_and_zero_suppression() {
        assert_eq!(
            engagement_summary(&counts("3", "0", "10"), CountPolicy::Literal),
            "3 replies, 10 likes"
        );
        assert_eq!(
            engagement_summary(&counts("0", "2", "0"), CountPolicy::Literal),
            "2 reposts"
        );
        assert_eq!(
            engagement_summary(&counts("1", "2", "3"), CountPolicy::Literal),
            "1 replies, 2 reposts, 3 likes"
        );
    }

    #[test]
    fn test_literal_policy_keeps_zero_lookalikes() {
        assert_eq!(
            engagement_summary(&counts("00", "0.0", "0"), CountPolicy::Literal),
            "00 replies, 0.0 reposts"
        );
    }

    #[test]
    fn test_numeric_policy_suppresses_zero_lookalikes() {
        assert_eq!(
            engagement_summary(&counts("00", "0.0", "1.2K"), CountPolicy::Numeric),
            "1.2K likes"
        );
        assert!(CountPolicy::Numeric.is_zero(" 0 "));
        assert!(!CountPolicy::Numeric.is_zero(""));
    }

    #[test]
    fn test_format_end_to_end() {
        let snapshot = PostSnapshot {
            is_repost: false,
            reposter_text: String::new(),
            raw_time_text: "2h".to_string(),
            author_display_name: "Ada".to_string(),
            body_text: "Hello world".to_string(),
            reply_count: "1".to_string(),
            repost_count: "0".to_string(),
            like_count: "5".to_string(),
        };
        assert_eq!(
            AnnouncementFormatter::default().format(&snapshot),
            " 2 hours ago Ada posted \"Hello world\". 1 replies, 5 likes"
        );
    }

    #[test]
    fn test_format_repost() {
        let snapshot = PostSnapshot {
            is_repost: true,
            reposter_text: "Reposted by Grace".to_string(),
            raw_time_text: "Jan 5".to_string(),
            author_display_name: "Ada".to_string(),
            body_text: "Hi".to_string(),
            ..PostSnapshot::default()
        };
        assert_eq!(
            AnnouncementFormatter::default().format(&snapshot),
            "Reposted by Grace Jan 5 Ada posted \"Hi\". No engagement yet"
        );
    }

    #[test]
    fn test_format_all_defaults_is_well_formed() {
        assert_eq!(
            AnnouncementFormatter::default().format(&PostSnapshot::default()),
            "   posted \"\". No engagement yet"
        );
    }

    #[test]
    fn test_format_is_idempotent() {
        let formatter = AnnouncementFormatter::new(CountPolicy::Numeric);
        let snapshot = counts("4", "0", "0");
        assert_eq!(formatter.format(&snapshot), formatter.format(&snapshot));
    }
}
