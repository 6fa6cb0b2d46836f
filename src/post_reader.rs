use crate::markup::{MarkupReader, Part};
use crate::post_snapshot::{PostSnapshot, ZERO_COUNT};

/// Reads a [`PostSnapshot`] out of a post's markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostSnapshotReader;

impl PostSnapshotReader {
    pub fn new() -> Self {
        Self
    }

    /// Returns `None` only when there is no post root. Every missing
    /// sub-element falls back to its default.
    pub fn read<M: MarkupReader>(
        &self,
        markup: &M,
        root: Option<M::Handle>,
    ) -> Option<PostSnapshot> {
        let root = root?;

        let repost = markup.find_first(root, Part::RepostAttribution);
        let reposter_text = repost.map(|el| markup.text_of(el)).unwrap_or_default();

        Some(PostSnapshot {
            is_repost: repost.is_some(),
            reposter_text,
            raw_time_text: text_or_empty(markup, root, Part::Timestamp),
            author_display_name: trimmed_text(markup, root, Part::AuthorName),
            body_text: trimmed_text(markup, root, Part::PostText),
            reply_count: count_text(markup, root, Part::ReplyCount),
            repost_count: count_text(markup, root, Part::RepostCount),
            like_count: count_text(markup, root, Part::LikeCount),
        })
    }
}

fn text_or_empty<M: MarkupReader>(markup: &M, root: M::Handle, part: Part) -> String {
    markup
        .find_first(root, part)
        .map(|el| markup.text_of(el))
        .unwrap_or_default()
}

fn trimmed_text<M: MarkupReader>(markup: &M, root: M::Handle, part: Part) -> String {
    text_or_empty(markup, root, part).trim().to_string()
}

// An empty count element reads the same as a missing one.
fn count_text<M: MarkupReader>(markup: &M, root: M::Handle, part: Part) -> String {
    let text = text_or_empty(markup, root, part);
    if text.is_empty() {
        ZERO_COUNT.to_string()
    } else {
        text
    }
}
