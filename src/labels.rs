use crate::markup::{MarkupWriter, Part};
use crate::post_snapshot::ZERO_COUNT;

pub const REPOST_LABEL: &str = "Repost or quote this post";

pub fn like_label(count: &str) -> String {
    format!("Like post, currently {} likes", count)
}

pub fn reply_label(count: &str) -> String {
    format!("Reply to post, currently {} replies", count)
}

/// Which controls received an accessible name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelOutcome {
    pub like: bool,
    pub reply: bool,
    pub repost: bool,
}

/// Writes accessible names onto a post's like, reply and repost controls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlLabeler;

impl ControlLabeler {
    pub fn new() -> Self {
        Self
    }

    /// Each control is handled on its own; a missing one never blocks the
    /// others. Returns the default outcome when there is no post root.
    pub fn label<M: MarkupWriter>(&self, markup: &mut M, root: Option<M::Handle>) -> LabelOutcome {
        let Some(root) = root else {
            tracing::debug!("no post root, skipping control labels");
            return LabelOutcome::default();
        };

        let like = markup.find_first(root, Part::LikeControl);
        let reply = markup.find_first(root, Part::ReplyControl);
        let repost = markup.find_first(root, Part::RepostControl);

        if let Some(button) = like {
            let count = nested_count(markup, button, Part::LikeCount);
            markup.set_accessible_name(button, &like_label(&count));
        }

        if let Some(button) = reply {
            let count = nested_count(markup, button, Part::ControlCount);
            markup.set_accessible_name(button, &reply_label(&count));
        }

        if let Some(button) = repost {
            markup.set_accessible_name(button, REPOST_LABEL);
        }

        LabelOutcome {
            like: like.is_some(),
            reply: reply.is_some(),
            repost: repost.is_some(),
        }
    }
}

// A present count element is used verbatim, even when its text is empty.
fn nested_count<M: MarkupWriter>(markup: &M, control: M::Handle, part: Part) -> String {
    markup
        .find_first(control, part)
        .map(|el| markup.text_of(el))
        .unwrap_or_else(|| ZERO_COUNT.to_string())
}
