use std::io::{BufRead, Write};
use std::pin::Pin;

use futures::stream::{self, Stream};

use crate::domain::{Console, Error, LineStream};

/// Customer input read line by line from any buffered reader (stdin in the
/// binary, byte slices in tests).
pub struct ReaderLines<R: BufRead> {
    reader: Option<R>,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
        }
    }
}

impl<R: BufRead + Send + 'static> LineStream for ReaderLines<R> {
    type Lines = Pin<Box<dyn Stream<Item = Result<String, Error>> + Send>>;

    fn lines(&mut self) -> Self::Lines {
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                // Already consumed; nothing more to read.
                return Box::pin(stream::iter(Vec::<Result<String, Error>>::new()));
            }
        };

        let iter = reader.lines().map(|line_res| match line_res {
            Ok(line) => Ok(line.trim_end_matches('\r').to_owned()),
            Err(e) => Err(Error::from(e)),
        });

        Box::pin(stream::iter(iter))
    }
}

/// Console output written to any `Write` (stdout in the binary).
#[derive(Debug)]
pub struct WriterConsole<W: Write> {
    writer: W,
}

impl<W: Write> WriterConsole<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Console for WriterConsole<W> {
    fn say(&mut self, text: &str) -> Result<(), Error> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<(), Error> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;

    use super::{ReaderLines, WriterConsole};
    use crate::domain::{Console, LineStream};

    #[tokio::test]
    async fn yields_lines_without_terminators() {
        let mut input = ReaderLines::new(&b"3801234567\r\n1234\n\n"[..]);
        let lines: Vec<String> = input
            .lines()
            .map(|l| l.unwrap())
            .collect()
            .await;
        assert_eq!(lines, ["3801234567", "1234", ""]);

        // second call sees an exhausted source
        assert!(input.lines().next().await.is_none());
    }

    #[test]
    fn prompt_has_no_newline_and_say_does() {
        let mut buf = Vec::new();
        {
            let mut console = WriterConsole::new(&mut buf);
            console.prompt("PIN: ").unwrap();
            console.say("hello").unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "PIN: hello\n");
    }
}
