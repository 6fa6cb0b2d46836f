use crate::announcement::{AnnouncementFormatter, CountPolicy};
use crate::live_region::LiveChannel;
use crate::markup::MarkupReader;
use crate::post_reader::PostSnapshotReader;

/// Reads a post, formats it and publishes the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostAnnouncer {
    reader: PostSnapshotReader,
    formatter: AnnouncementFormatter,
}

impl PostAnnouncer {
    pub fn new(policy: CountPolicy) -> Self {
        Self {
            reader: PostSnapshotReader::new(),
            formatter: AnnouncementFormatter::new(policy),
        }
    }

    pub fn build_announcement<M: MarkupReader>(
        &self,
        markup: &M,
        root: Option<M::Handle>,
    ) -> Option<String> {
        let snapshot = self.reader.read(markup, root)?;
        Some(self.formatter.format(&snapshot))
    }

    /// Publishes to `channel` and returns the announcement. Without a post
    /// root nothing is published.
    pub fn announce_post<M: MarkupReader, C: LiveChannel + ?Sized>(
        &self,
        markup: &M,
        root: Option<M::Handle>,
        channel: &mut C,
    ) -> Option<String> {
        tracing::debug!("announcing post details");
        let Some(announcement) = self.build_announcement(markup, root) else {
            tracing::debug!("no post root, nothing to announce");
            return None;
        };
        tracing::debug!(%announcement);
        channel.publish(&announcement);
        Some(announcement)
    }
}
