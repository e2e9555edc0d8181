use crate::domain::model::Transcript;
use crate::domain::ports::OutputSink;
use crate::utils::error::Result;
use std::io::{self, Write};

/// Writes each line to any `io::Write`, stdout by default.
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self { writer: io::stdout() }
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Pushes buffered output through; call once after a run.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}

impl OutputSink for Transcript {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_sink_writes_newline_terminated_lines() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.write_line("first").unwrap();
        sink.write_line("second").unwrap();
        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written, "first\nsecond\n");
    }

    #[derive(Default)]
    struct CountingWriter {
        bytes: Vec<u8>,
        flushes: usize,
    }

    impl Write for CountingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_console_sink_flushes_only_on_request() {
        let mut sink = ConsoleSink::new(CountingWriter::default());
        for line in ["a", "b", "c"] {
            sink.write_line(line).unwrap();
        }
        sink.flush().unwrap();

        let writer = sink.into_inner();
        assert_eq!(writer.flushes, 1);
        assert_eq!(writer.bytes, b"a\nb\nc\n");
    }

    #[test]
    fn test_console_sink_surfaces_write_errors() {
        struct ClosedPipe;

        impl Write for ClosedPipe {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }

            fn flush(&mut self) -> io::Result<()> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }
        }

        let mut sink = ConsoleSink::new(ClosedPipe);
        assert!(matches!(
            sink.write_line("lost"),
            Err(crate::utils::error::AppError::IoError(_))
        ));
        assert!(sink.flush().is_err());
    }

    #[test]
    fn test_transcript_records_in_order() {
        let mut transcript = Transcript::new();
        transcript.write_line("one").unwrap();
        transcript.write_line("two").unwrap();
        assert_eq!(transcript.lines, vec!["one", "two"]);
    }
}
