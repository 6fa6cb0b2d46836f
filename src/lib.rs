//! Screen-reader support for social feed posts.
//!
//! A post's markup is read into a [`PostSnapshot`], formatted into one
//! sentence by [`AnnouncementFormatter`] and published through a
//! [`LiveChannel`]. [`ControlLabeler`] independently gives the post's like,
//! reply and repost controls accessible names that include their counts.

pub mod announcement;
pub mod announcer;
pub mod config;
pub mod labels;
pub mod live_region;
pub mod markup;
pub mod post_reader;
pub mod post_snapshot;

pub use announcement::{format_time_text, AnnouncementFormatter, CountPolicy};
pub use announcer::PostAnnouncer;
pub use config::Config;
pub use labels::{ControlLabeler, LabelOutcome};
pub use live_region::{LiveChannel, LiveRegion, MemoryRegion, WriterRegion};
pub use markup::html::{HtmlMarkup, PartSelectors};
pub use markup::{MarkupReader, MarkupWriter, Part};
pub use post_reader::PostSnapshotReader;
pub use post_snapshot::PostSnapshot;
