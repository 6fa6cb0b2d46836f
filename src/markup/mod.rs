//! Read and write access to a post's markup tree.
//!
//! The extraction and labeling code never touches CSS or a parser directly.
//! It asks a [`MarkupReader`] for named [`Part`]s, so any tree that can map a
//! part to an element can drive it.

pub mod html;

/// An addressable sub-element of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    RepostAttribution,
    Timestamp,
    AuthorName,
    PostText,
    ReplyCount,
    RepostCount,
    LikeCount,
    LikeControl,
    ReplyControl,
    RepostControl,
    /// Count element nested inside the reply control.
    ControlCount,
}

impl Part {
    pub const ALL: [Part; 11] = [
        Part::RepostAttribution,
        Part::Timestamp,
        Part::AuthorName,
        Part::PostText,
        Part::ReplyCount,
        Part::RepostCount,
        Part::LikeCount,
        Part::LikeControl,
        Part::ReplyControl,
        Part::RepostControl,
        Part::ControlCount,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Part::RepostAttribution => "repost_attribution",
            Part::Timestamp => "timestamp",
            Part::AuthorName => "author_name",
            Part::PostText => "post_text",
            Part::ReplyCount => "reply_count",
            Part::RepostCount => "repost_count",
            Part::LikeCount => "like_count",
            Part::LikeControl => "like_control",
            Part::ReplyControl => "reply_control",
            Part::RepostControl => "repost_control",
            Part::ControlCount => "control_count",
        }
    }
}

pub trait MarkupReader {
    type Handle: Copy;

    /// First descendant of `scope` (in document order) matching `part`.
    /// `scope` itself never matches.
    fn find_first(&self, scope: Self::Handle, part: Part) -> Option<Self::Handle>;

    /// Concatenated text of every descendant text node, untrimmed.
    fn text_of(&self, handle: Self::Handle) -> String;
}

pub trait MarkupWriter: MarkupReader {
    fn set_accessible_name(&mut self, handle: Self::Handle, name: &str);
}
