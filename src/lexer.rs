//! Lexical analysis of a single input line into shell words.

/// Characters that separate words outside of quotes.
const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexingState {
    Unquoted,
    SingleQuote,
    DoubleQuote,
}

struct LexingFSM {
    input: Vec<char>,
    pos: usize,
    state: LexingState,
    buffer: String,
    words: Vec<String>,
}

impl LexingFSM {
    /// Creates a new lexer positioned at the start of `line`.
    fn new(line: &str) -> Self {
        LexingFSM {
            input: line.chars().collect(),
            pos: 0,
            state: LexingState::Unquoted,
            buffer: String::new(),
            words: Vec::new(),
        }
    }

    /// Consumes the whole input and returns the decoded words.
    ///
    /// Never fails: an unterminated quote simply ends the line, and whatever was
    /// accumulated for the current word is kept.
    fn make_words(mut self) -> Vec<String> {
        while let Some(ch) = self.read_char() {
            match self.state {
                LexingState::Unquoted => self.handle_unquoted(ch),
                LexingState::SingleQuote => self.handle_single_quote(ch),
                LexingState::DoubleQuote => self.handle_double_quote(ch),
            }
        }

        self.finish_word();
        self.words
    }

    fn read_char(&mut self) -> Option<char> {
        let ch = self.input.get(self.pos).copied();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn handle_unquoted(&mut self, ch: char) {
        match ch {
            '\\' => self.escape_next(),
            '\'' => self.state = LexingState::SingleQuote,
            '"' => self.state = LexingState::DoubleQuote,
            c if DELIMITERS.contains(&c) => self.finish_word(),
            c => self.buffer.push(c),
        }
    }

    fn handle_single_quote(&mut self, ch: char) {
        match ch {
            '\'' => self.state = LexingState::Unquoted,
            c => self.buffer.push(c),
        }
    }

    fn handle_double_quote(&mut self, ch: char) {
        match ch {
            '\\' => self.escape_next(),
            '"' => self.state = LexingState::Unquoted,
            c => self.buffer.push(c),
        }
    }

    /// Takes the character after a backslash literally. A backslash at the very end
    /// of the line has nothing to escape and is dropped.
    fn escape_next(&mut self) {
        if let Some(c) = self.read_char() {
            self.buffer.push(c);
        }
    }

    fn finish_word(&mut self) {
        if !self.buffer.is_empty() {
            self.words.push(std::mem::take(&mut self.buffer));
        }
    }
}

/// Splits `line` into words, removing quoting and escaping.
///
/// Words are separated by runs of space, tab, carriage return, newline or bell
/// outside of quotes. Single quotes keep everything literal; double quotes keep
/// whitespace but still honour backslash escapes. Quote and escape characters are
/// stripped from the result.
///
/// ```
/// use minsh::tokenize;
/// assert_eq!(tokenize("echo 'a b' c"), vec!["echo", "a b", "c"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(line: &str) -> Vec<String> {
    LexingFSM::new(line).make_words()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(tokenize("echo hello"), vec!["echo", "hello"]);
        assert_eq!(tokenize("  ls \t -la\r\n"), vec!["ls", "-la"]);
    }

    #[test]
    fn empty_and_blank_lines() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\x07 ").is_empty());
    }

    #[test]
    fn unquoted_input_matches_whitespace_split() {
        let lines = [
            "a b c",
            "   leading and trailing   ",
            "tabs\tand\tspaces  mixed",
            "one",
            "x\ry\nz\x07w",
        ];
        for line in lines {
            let expected: Vec<String> = line
                .split(|c: char| DELIMITERS.contains(&c))
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            assert_eq!(tokenize(line), expected, "line: {:?}", line);
        }
    }

    #[test]
    fn non_delimiter_whitespace_is_data() {
        assert_eq!(tokenize("a\u{0b}b c"), vec!["a\u{0b}b", "c"]);
    }

    #[test]
    fn single_quotes_preserve_whitespace() {
        assert_eq!(tokenize("echo 'a b' c"), vec!["echo", "a b", "c"]);
        assert_eq!(tokenize("echo 'say \"hi\"'"), vec!["echo", "say \"hi\""]);
    }

    #[test]
    fn backslash_is_literal_inside_single_quotes() {
        assert_eq!(tokenize(r"echo 'a\nb'"), vec!["echo", r"a\nb"]);
    }

    #[test]
    fn double_quotes_keep_escapes() {
        assert_eq!(tokenize("echo \"a\\\"b\""), vec!["echo", "a\"b"]);
        assert_eq!(tokenize("echo \"it's\""), vec!["echo", "it's"]);
        assert_eq!(tokenize(r#"echo "a\\b""#), vec!["echo", r"a\b"]);
    }

    #[test]
    fn escaped_space_joins_words() {
        assert_eq!(tokenize("a\\ b"), vec!["a b"]);
        assert_eq!(tokenize(r"a\'b"), vec!["a'b"]);
    }

    #[test]
    fn quotes_concatenate_with_adjacent_text() {
        assert_eq!(tokenize("pre'mid dle'post"), vec!["premid dlepost"]);
        assert_eq!(tokenize("\"a\"'b'c"), vec!["abc"]);
    }

    #[test]
    fn trailing_backslash_is_dropped() {
        assert_eq!(tokenize("echo foo\\"), vec!["echo", "foo"]);
        assert!(tokenize("\\").is_empty());
    }

    #[test]
    fn unterminated_quote_keeps_partial_word() {
        assert_eq!(tokenize("echo 'abc def"), vec!["echo", "abc def"]);
        assert_eq!(tokenize("echo \"x y"), vec!["echo", "x y"]);
    }

    #[test]
    fn empty_quotes_produce_no_word() {
        assert_eq!(tokenize("echo '' \"\""), vec!["echo"]);
    }

    #[test]
    fn non_ascii_text() {
        assert_eq!(tokenize("echo 'héllo wörld' ✓"), vec!["echo", "héllo wörld", "✓"]);
    }
}
