//! Terminal surface and prompt.
//!
//! One [`Console`] owns the session's input and output streams. It prints the
//! text table on every render and answers confirmations from the same input
//! the command loop reads, so the two must never read concurrently.
//!
//! Confirmation is a synchronous `read_line` on the reader, called from inside
//! `ArticleListView::delete`. On stdin this blocks the Tokio worker running the
//! session until the user answers. The binary runs a single session task and
//! nothing else is scheduled while a delete waits for its answer, so the block
//! only stalls the caller that asked.

use std::io::{BufRead, Write};
use std::sync::{Mutex, PoisonError};

use scholar_desk::view::render_table;
use scholar_desk::{ArticleError, ListContent, ListSurface, UserPrompt};

use super::output::io_error;

/// Console bound to an input reader and an output writer.
pub struct Console<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console. With `assume_yes` every confirmation is accepted
    /// without reading input.
    #[must_use]
    pub const fn new(input: R, output: W, assume_yes: bool) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
            assume_yes,
        }
    }

    /// Reads one line without its terminator. Returns `None` at end of input.
    pub fn read_line(&self) -> Result<Option<String>, ArticleError> {
        let mut line = String::new();
        let read = self
            .input
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .read_line(&mut line)
            .map_err(|error| io_error(&error))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    /// Runs `write` against the output stream and flushes it.
    pub fn write_with<F>(&self, write: F) -> Result<(), ArticleError>
    where
        F: FnOnce(&mut W) -> Result<(), ArticleError>,
    {
        let mut output = self.output.lock().unwrap_or_else(PoisonError::into_inner);
        write(&mut output)?;
        output.flush().map_err(|error| io_error(&error))
    }

    /// Writes one line.
    pub fn write_line(&self, text: &str) -> Result<(), ArticleError> {
        self.write_with(|output| writeln!(output, "{text}").map_err(|error| io_error(&error)))
    }

    /// Consumes the console and returns its output writer.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of everything written so far.
    #[cfg(test)]
    pub fn written(&self) -> String
    where
        W: AsRef<[u8]>,
    {
        let output = self.output.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy((*output).as_ref()).into_owned()
    }
}

impl<R, W> ListSurface for Console<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn render(&self, content: &ListContent) -> Result<(), ArticleError> {
        let table = render_table(content);
        self.write_with(|output| {
            output
                .write_all(table.as_bytes())
                .map_err(|error| io_error(&error))
        })
    }
}

impl<R, W> UserPrompt for Console<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            if let Err(error) = self.write_line(&format!("{message} [y/N] y")) {
                tracing::warn!("failed to echo confirmation: {error}");
            }
            return true;
        }

        let asked = self.write_with(|output| {
            write!(output, "{message} [y/N] ").map_err(|error| io_error(&error))
        });
        if let Err(error) = asked {
            tracing::warn!("failed to show confirmation: {error}");
            return false;
        }

        match self.read_line() {
            Ok(Some(answer)) => is_affirmative(&answer),
            Ok(None) => false,
            Err(error) => {
                tracing::warn!("failed to read confirmation: {error}");
                false
            }
        }
    }

    fn notify(&self, message: &str) {
        if let Err(error) = self.write_line(&format!("! {message}")) {
            tracing::warn!("failed to show notice: {error}");
        }
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rstest::rstest;
    use scholar_desk::{ListContent, ListSurface, UserPrompt};

    use super::Console;

    fn console(input: &str, assume_yes: bool) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), assume_yes)
    }

    fn output_of(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).expect("output should be valid UTF-8")
    }

    #[rstest]
    #[case::short("y\n", true)]
    #[case::long_mixed_case("Yes\n", true)]
    #[case::padded("  y  \r\n", true)]
    #[case::no("n\n", false)]
    #[case::blank("\n", false)]
    #[case::other("sure\n", false)]
    #[case::end_of_input("", false)]
    fn confirm_reads_answer(#[case] input: &str, #[case] expected: bool) {
        let console = console(input, false);

        assert_eq!(console.confirm("Delete article 1?"), expected);
        assert_eq!(output_of(console), "Delete article 1? [y/N] ");
    }

    #[test]
    fn assume_yes_confirms_without_reading() {
        let console = console("n\n", true);

        assert!(console.confirm("Delete article 1?"));
        assert_eq!(
            console.read_line().expect("line should read"),
            Some("n".to_owned()),
            "input should be left untouched"
        );
    }

    #[test]
    fn confirm_takes_one_line_and_leaves_the_rest_for_commands() {
        let console = console("y\nrefresh\n", false);

        assert!(console.confirm("Delete article 1?"));
        assert_eq!(console.read_line().ok().flatten().as_deref(), Some("refresh"));
    }

    #[test]
    fn notify_prints_marked_line() {
        let console = console("", false);

        console.notify("Delete failed");

        assert_eq!(output_of(console), "! Delete failed\n");
    }

    #[test]
    fn render_prints_table() {
        let console = console("", false);

        console
            .render(&ListContent::Empty)
            .expect("render should succeed");

        assert_eq!(output_of(console), "No articles\n");
    }

    #[test]
    fn read_line_strips_terminators_and_reports_end() {
        let console = console("refresh\r\nquit", false);

        assert_eq!(console.read_line().ok().flatten().as_deref(), Some("refresh"));
        assert_eq!(console.read_line().ok().flatten().as_deref(), Some("quit"));
        assert_eq!(console.read_line().ok().flatten(), None);
    }
}
