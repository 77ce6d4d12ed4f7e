//! Relay of transcoder diagnostic output, one line at a time

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Longest line kept before it is flushed as-is
const MAX_LINE_BYTES: usize = 64 * 1024;

/// Receives every non-empty diagnostic line as soon as it is read
pub trait LineSink: Send {
    fn line(&mut self, line: &str);

    /// Status message from the tool itself rather than the transcoder
    fn status(&mut self, message: &str) {
        self.line(message);
    }
}

/// Echoes lines to standard output
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl LineSink for ConsoleSink {
    fn line(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Keeps lines in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub lines: Vec<String>,
}

impl LineSink for CollectingSink {
    fn line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Splits a byte stream on `\n`, `\r\n` and bare `\r`.
///
/// ffmpeg redraws its progress line with carriage returns, so `\r` has to
/// end a line for progress to show up while the process is running.
pub struct LineRelay<R> {
    reader: R,
    pending: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> LineRelay<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
        }
    }

    /// Next raw line, or `None` at end of stream
    pub async fn next_line(&mut self) -> io::Result<Option<String>> {
        loop {
            let available = self.reader.fill_buf().await?;
            if available.is_empty() {
                if self.pending.is_empty() {
                    return Ok(None);
                }
                return Ok(Some(self.take_pending()));
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(pos) => {
                    self.pending.extend_from_slice(&available[..pos]);
                    self.reader.consume(pos + 1);
                    return Ok(Some(self.take_pending()));
                }
                None => {
                    let len = available.len();
                    self.pending.extend_from_slice(available);
                    self.reader.consume(len);
                    if self.pending.len() >= MAX_LINE_BYTES {
                        return Ok(Some(self.take_pending()));
                    }
                }
            }
        }
    }

    /// Forward every non-empty trimmed line to `sink` until end of stream.
    /// Returns the number of lines forwarded.
    pub async fn relay(mut self, sink: &mut dyn LineSink) -> io::Result<usize> {
        let mut forwarded = 0;
        while let Some(line) = self.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            sink.line(line);
            forwarded += 1;
        }
        Ok(forwarded)
    }

    fn take_pending(&mut self) -> String {
        let bytes = std::mem::take(&mut self.pending);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}
