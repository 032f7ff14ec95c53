//! Line-oriented terminal interaction.

use std::fmt::Display;
use std::io::{self, BufRead, Stdout, Write};

/// Prompts and menus over any line reader and writer.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Console { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Print one line.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }

    /// Print a blank line.
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.writer)
    }

    /// Show `prompt` and read one trimmed line.
    ///
    /// End of input is reported as `UnexpectedEof`. Bytes that are not UTF-8
    /// are replaced rather than rejected.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut input = Vec::new();
        if self.reader.read_until(b'\n', &mut input)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        Ok(String::from_utf8_lossy(&input).trim().to_string())
    }

    /// Yes/no question. An empty answer takes `default`; anything other than
    /// `y`/`yes` is a no.
    pub fn confirm(&mut self, question: &str, default: bool) -> io::Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        let answer = self.ask(&format!("{} {} ", question, hint))?;
        Ok(parse_confirmation(&answer, default))
    }

    /// Numbered menu of `items` with `[0] Cancel`. Returns the chosen index.
    ///
    /// Non-numeric, zero and out-of-range answers are a cancellation.
    pub fn choose(&mut self, title: &str, items: &[String]) -> io::Result<Option<usize>> {
        self.say(title)?;
        for (i, item) in items.iter().enumerate() {
            self.say(format_args!("  [{}] {}", i + 1, item))?;
        }
        self.say("  [0] Cancel")?;

        let answer = self.ask("> ")?;
        Ok(parse_choice(&answer, items.len()))
    }
}

fn parse_confirmation(answer: &str, default: bool) -> bool {
    if answer.is_empty() {
        return default;
    }
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

fn parse_choice(answer: &str, count: usize) -> Option<usize> {
    let n: usize = answer.parse().ok()?;
    if n == 0 || n > count {
        return None;
    }
    Some(n - 1)
}
