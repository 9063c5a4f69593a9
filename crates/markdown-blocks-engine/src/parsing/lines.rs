/// A reference to a single input line with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    pub number: usize,
    /// Line text without its terminator.
    pub text: &'a str,
}

/// Returns an iterator over the lines of `src`.
///
/// Splits on `\n` only, so a trailing newline yields a final empty line. A
/// single `\r` before each `\n` is dropped so CRLF input reads like LF.
pub fn lines_with_numbers(src: &str) -> impl Iterator<Item = LineRef<'_>> {
    src.split('\n').enumerate().map(|(i, line)| LineRef {
        number: i + 1,
        text: line.strip_suffix('\r').unwrap_or(line),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(src: &str) -> Vec<&str> {
        lines_with_numbers(src).map(|l| l.text).collect()
    }

    #[test]
    fn empty_input_is_one_empty_line() {
        assert_eq!(texts(""), vec![""]);
    }

    #[test]
    fn trailing_newline_yields_empty_line() {
        assert_eq!(texts("a\nb\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn strips_carriage_returns() {
        assert_eq!(texts("a\r\nb\r\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn numbers_start_at_one() {
        let numbers: Vec<_> = lines_with_numbers("x\ny").map(|l| l.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }
}
