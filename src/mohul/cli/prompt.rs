use std::io::{self, BufRead, Write};

const RETRY_PROMPT: &str = "Invalid input. Try again: ";

/// Line-oriented prompt over any reader/writer pair.
///
/// Every read returns `None` once input is exhausted.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(&['\n', '\r'][..]).to_string()))
    }

    fn show(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()
    }

    /// Prompt and return the raw line, without its line ending.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.show(prompt)?;
        self.next_line()
    }

    /// Prompt and return the line with surrounding whitespace removed.
    pub fn read_trimmed(&mut self, prompt: &str) -> io::Result<Option<String>> {
        Ok(self.read_line(prompt)?.map(|line| line.trim().to_string()))
    }

    /// Prompt until an integer is read.
    ///
    /// Input is taken a whitespace-separated token at a time. Each token that
    /// is not a number prints a retry prompt; blank lines are passed over
    /// silently. Once a number is found the rest of its line is discarded.
    pub fn read_int(&mut self, prompt: &str) -> io::Result<Option<i32>> {
        self.show(prompt)?;
        loop {
            let Some(line) = self.next_line()? else {
                return Ok(None);
            };
            for token in line.split_whitespace() {
                match token.parse::<i32>() {
                    Ok(value) => return Ok(Some(value)),
                    Err(_) => self.show(RETRY_PROMPT)?,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn read_line_strips_line_ending_only() {
        let mut c = console("  Batch 7  \r\n");
        assert_eq!(c.read_line("> ").unwrap().as_deref(), Some("  Batch 7  "));
        assert_eq!(output(c), "> ");
    }

    #[test]
    fn read_trimmed_trims() {
        let mut c = console("  A1 \n");
        assert_eq!(c.read_trimmed("ID: ").unwrap().as_deref(), Some("A1"));
    }

    #[test]
    fn read_int_reprompts_until_number() {
        let mut c = console("abc\n\n4.5\n 12 \n");
        assert_eq!(c.read_int("Choice: ").unwrap(), Some(12));
        assert_eq!(
            output(c),
            "Choice: Invalid input. Try again: Invalid input. Try again: "
        );
    }

    #[test]
    fn read_int_takes_first_number_on_a_line() {
        let mut c = console("4 5\n6\n");
        assert_eq!(c.read_int("Choice: ").unwrap(), Some(4));
        assert_eq!(c.read_int("Choice: ").unwrap(), Some(6));
    }

    #[test]
    fn read_int_retries_each_bad_token() {
        let mut c = console("abc def 7\n");
        assert_eq!(c.read_int("Qty: ").unwrap(), Some(7));
        assert_eq!(output(c), "Qty: Invalid input. Try again: Invalid input. Try again: ");
    }

    #[test]
    fn invalid_utf8_is_read_lossily() {
        let mut input = vec![0xff, 0xfe, b'\n'];
        input.extend_from_slice(b"2\n");
        let mut c = Console::new(Cursor::new(input), Vec::new());
        assert_eq!(c.read_int("x").unwrap(), Some(2));
        assert_eq!(output(c), "xInvalid input. Try again: ");

        let mut c = Console::new(Cursor::new(vec![b'B', 0xff, b'\n']), Vec::new());
        assert_eq!(c.read_line("x").unwrap().as_deref(), Some("B\u{fffd}"));
    }

    #[test]
    fn read_int_accepts_negative_numbers() {
        let mut c = console("-3\n");
        assert_eq!(c.read_int("Qty: ").unwrap(), Some(-3));
    }

    #[test]
    fn end_of_input_is_none() {
        let mut c = console("");
        assert_eq!(c.read_line("x").unwrap(), None);
        let mut c = console("nope\n");
        assert_eq!(c.read_int("x").unwrap(), None);
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let mut c = console("3");
        assert_eq!(c.read_int("x").unwrap(), Some(3));
    }
}
