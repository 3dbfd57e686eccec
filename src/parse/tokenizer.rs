//! tokenizer.rs
//! Splits cleaned expression text into parentheses and atoms.

/// Removes `;` line comments and trims surrounding whitespace.
///
/// Everything from the first `;` on a line up to the end of that line is dropped,
/// including a `;` that appears in the middle of what would otherwise be an atom.
pub fn strip_comments(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            cleaned.push('\n');
        }
        match line.find(';') {
            Some(cut) => cleaned.push_str(&line[..cut]),
            None => cleaned.push_str(line),
        }
    }
    cleaned.trim_matches(is_space).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    Open,
    Close,
    Atom(&'a str),
}

/// A token plus its byte offset in the cleaned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub offset: usize,
}

/// Lazy token stream over a cleaned source string.
///
/// The stream is a cheap cursor, so cloning it (or calling [`tokenize`] again)
/// restarts tokenization from the current position.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
}

pub fn tokenize(src: &str) -> Tokenizer<'_> {
    Tokenizer { src, pos: 0 }
}

/// Whitespace as the expression format defines it: Unicode `White_Space` plus the
/// information separators U+001C..=U+001F.
#[inline]
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

#[inline]
fn is_delimiter(c: char) -> bool {
    c == '(' || c == ')' || is_space(c)
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let src: &'a str = self.src;
        let rest = &src[self.pos..];
        self.pos += rest.len() - rest.trim_start_matches(is_space).len();

        let rest = &src[self.pos..];
        let first = rest.chars().next()?;
        let offset = self.pos;

        let kind = match first {
            '(' => {
                self.pos += 1;
                TokenKind::Open
            }
            ')' => {
                self.pos += 1;
                TokenKind::Close
            }
            _ => {
                let len = rest.find(is_delimiter).unwrap_or(rest.len());
                self.pos += len;
                TokenKind::Atom(&rest[..len])
            }
        };
        Some(Token { kind, offset })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn kinds(src: &str) -> Vec<TokenKind<'_>> {
        tokenize(src).map(|t| t.kind).collect()
    }

    #[rstest]
    #[case("(a b)", vec![TokenKind::Open, TokenKind::Atom("a"), TokenKind::Atom("b"), TokenKind::Close])]
    #[case("((x))", vec![TokenKind::Open, TokenKind::Open, TokenKind::Atom("x"), TokenKind::Close, TokenKind::Close])]
    #[case("foo(bar)baz", vec![TokenKind::Atom("foo"), TokenKind::Open, TokenKind::Atom("bar"), TokenKind::Close, TokenKind::Atom("baz")])]
    #[case("  \t\n ", vec![])]
    #[case("$x->y 3.5", vec![TokenKind::Atom("$x->y"), TokenKind::Atom("3.5")])]
    #[case("a\u{1f}b\u{1c}(c)", vec![TokenKind::Atom("a"), TokenKind::Atom("b"), TokenKind::Open, TokenKind::Atom("c"), TokenKind::Close])]
    #[case("x\u{a0}y\u{2028}z", vec![TokenKind::Atom("x"), TokenKind::Atom("y"), TokenKind::Atom("z")])]
    fn test_token_classification(#[case] src: &str, #[case] expected: Vec<TokenKind<'static>>) {
        assert_eq!(kinds(src), expected);
    }

    #[test]
    fn test_offsets_point_into_source() {
        let src = "(is  élan x)";
        for tok in tokenize(src) {
            match tok.kind {
                TokenKind::Open => assert_eq!(&src[tok.offset..tok.offset + 1], "("),
                TokenKind::Close => assert_eq!(&src[tok.offset..tok.offset + 1], ")"),
                TokenKind::Atom(a) => assert!(src[tok.offset..].starts_with(a)),
            }
        }
    }

    #[test]
    fn test_stream_is_restartable() {
        let stream = tokenize("(a b c)");
        let first: Vec<_> = stream.clone().collect();
        let second: Vec<_> = stream.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn test_no_empty_atoms() {
        assert!(kinds("( ( a  )\n b ) )").iter().all(|k| !matches!(k, TokenKind::Atom(""))));
    }

    #[rstest]
    #[case("(a b) ; trailing note", "(a b)")]
    #[case("; whole line\n(x y)\n", "(x y)")]
    #[case("ab;cd ef\ngh", "ab\ngh")]
    #[case("   (p q)   ", "(p q)")]
    #[case("\u{1e}(p q)\u{1d}", "(p q)")]
    fn test_strip_comments(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_comments(input), expected);
    }
}
