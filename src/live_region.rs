//! The announcement sink.
//!
//! Screen readers only speak a live region when they see its content
//! change. Publishing therefore clears the region, forces a layout pass and
//! then writes the new text, so repeating an identical announcement is
//! still heard.

use std::io::Write;

pub trait LiveChannel {
    /// Replace whatever was announced before with `text`.
    fn publish(&mut self, text: &str);
}

/// The side-effecting element behind a [`LiveRegion`].
pub trait RegionSurface {
    fn set_text(&mut self, text: &str);

    /// Synchronisation point between the clear and the write.
    fn force_layout(&mut self);
}

#[derive(Debug, Default)]
pub struct LiveRegion<S> {
    surface: S,
}

impl<S: RegionSurface> LiveRegion<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl<S: RegionSurface> LiveChannel for LiveRegion<S> {
    fn publish(&mut self, text: &str) {
        self.surface.set_text("");
        self.surface.force_layout();
        self.surface.set_text(text);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    SetText(String),
    ForceLayout,
}

/// Keeps the current text plus a log of every operation.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegion {
    text: String,
    ops: Vec<SurfaceOp>,
}

impl MemoryRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }
}

impl RegionSurface for MemoryRegion {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.ops.push(SurfaceOp::SetText(text.to_string()));
    }

    fn force_layout(&mut self) {
        self.ops.push(SurfaceOp::ForceLayout);
    }
}

/// Prints each published text as one line.
pub struct WriterRegion<W> {
    writer: W,
}

impl<W: Write> WriterRegion<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RegionSurface for WriterRegion<W> {
    fn set_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Err(e) = writeln!(self.writer, "{}", text) {
            tracing::warn!(error = %e, "failed to write announcement");
        }
    }

    fn force_layout(&mut self) {
        if let Err(e) = self.writer.flush() {
            tracing::warn!(error = %e, "failed to flush live region");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Default)]
    struct BrokenPipe {
        writes: usize,
        flushes: usize,
    }

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_publish_clears_then_syncs_then_writes() {
        let mut region = LiveRegion::new(MemoryRegion::new());
        region.publish("hello");
        assert_eq!(region.surface().text(), "hello");
        assert_eq!(
            region.surface().ops(),
            &[
                SurfaceOp::SetText(String::new()),
                SurfaceOp::ForceLayout,
                SurfaceOp::SetText("hello".to_string()),
            ]
        );
    }

    #[test]
    fn test_last_write_wins() {
        let mut region = LiveRegion::new(MemoryRegion::new());
        region.publish("first");
        region.publish("second");
        assert_eq!(region.surface().text(), "second");
        assert_eq!(region.surface().ops().len(), 6);
    }

    #[test]
    fn test_repeated_text_still_cleared() {
        let mut region = LiveRegion::new(MemoryRegion::new());
        region.publish("same");
        region.publish("same");
        assert_eq!(region.surface().ops()[3], SurfaceOp::SetText(String::new()));
    }

    #[test]
    fn test_writer_region_prints_lines() {
        let mut region = LiveRegion::new(WriterRegion::new(Vec::new()));
        region.publish("one");
        region.publish("two");
        let out = region.into_surface().into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_writer_errors_are_swallowed() {
        let mut region = LiveRegion::new(WriterRegion::new(BrokenPipe::default()));

        region.publish("first");
        let after_first = region.surface().get_ref().writes;
        assert!(after_first >= 1);
        assert_eq!(region.surface().get_ref().flushes, 1);

        region.publish("second");
        assert!(region.surface().get_ref().writes > after_first);
        assert_eq!(region.surface().get_ref().flushes, 2);
    }
}
