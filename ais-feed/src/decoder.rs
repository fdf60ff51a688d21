use ais_core::VesselRecord;
use futures::StreamExt;
use tokio::io::AsyncRead;
use tokio_util::codec::{FramedRead, LinesCodec};
use tracing::warn;

const MAX_LINE_LENGTH: usize = 1000;

/// Splits a connection's byte stream into newline-delimited vessel
/// records.
///
/// TCP delivers arbitrary fragments; the codec buffers partial lines
/// until the delimiter arrives, so records survive any read boundary.
/// Blank lines are skipped and malformed lines are logged and
/// discarded without ending the stream.
pub struct RecordStream<R> {
    framed: FramedRead<R, LinesCodec>,
}

impl<R: AsyncRead + Unpin> RecordStream<R> {
    pub fn new(source: R) -> Self {
        Self {
            framed: FramedRead::new(source, LinesCodec::new_with_max_length(MAX_LINE_LENGTH)),
        }
    }

    /// The next successfully decoded record, or `None` on a clean end
    /// of stream.
    pub async fn next(&mut self) -> Option<VesselRecord> {
        while let Some(line) = self.framed.next().await {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("failed to read line from stream: {e:?}");
                    continue;
                }
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match serde_json::from_str(line) {
                Ok(record) => return Some(record),
                Err(e) => warn!("discarding malformed record: {e:?}"),
            }
        }
        None
    }
}
