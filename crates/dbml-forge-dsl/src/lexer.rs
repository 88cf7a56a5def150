//! Hand-rolled scanner producing trivia-attached tokens.
//!
//! One token per call, end-of-input token included. The cursor advances at
//! least one character per emitted token, so lexing always terminates, and
//! every consumed character lands in exactly one token or trivia text.

use rust_decimal::Decimal;

use crate::diagnostics::DiagnosticBag;
use crate::text::{SourceText, TextSpan};
use crate::token::{SyntaxKind, SyntaxToken, SyntaxTrivia, TokenValue};

const EOI: char = '\0';

pub struct Lexer<'a> {
    text: &'a SourceText,
    position: usize,
    diagnostics: DiagnosticBag,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a SourceText) -> Self {
        Self {
            text,
            position: 0,
            diagnostics: DiagnosticBag::new(),
        }
    }

    /// Lexes the whole document into a token vector ending with the
    /// end-of-input token.
    pub fn tokenize(text: &'a SourceText) -> (Vec<SyntaxToken>, DiagnosticBag) {
        let mut lexer = Lexer::new(text);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_last = token.kind() == SyntaxKind::EndOfFileToken;
            tokens.push(token);
            if is_last {
                break;
            }
        }
        (tokens, lexer.diagnostics)
    }

    pub fn into_diagnostics(self) -> DiagnosticBag {
        self.diagnostics
    }

    pub fn next_token(&mut self) -> SyntaxToken {
        let leading = self.read_trivia(true);
        let start = self.position;
        let (kind, value) = self.read_token();
        let text = self.text.slice(TextSpan::from_bounds(start, self.position)).to_string();
        let trailing = self.read_trivia(false);
        SyntaxToken::new(kind, start, text, value, leading, trailing)
    }

    // -- Trivia --

    /// Collects trivia before (leading) or after (trailing) a token.
    /// Trailing trivia stops once a line break has been consumed; leading
    /// trivia runs until a significant character.
    fn read_trivia(&mut self, leading: bool) -> Vec<SyntaxTrivia> {
        let mut trivia = Vec::new();
        loop {
            let start = self.position;
            let kind = match self.current() {
                EOI => break,
                '/' => match self.lookahead() {
                    '/' => self.read_single_line_comment(),
                    '*' => self.read_multi_line_comment(start),
                    _ => break,
                },
                '\r' | '\n' => {
                    self.read_line_break();
                    SyntaxKind::LineBreakTrivia
                }
                c if c.is_whitespace() => self.read_whitespace(),
                _ => break,
            };
            let text = self.text.slice(TextSpan::from_bounds(start, self.position));
            trivia.push(SyntaxTrivia::new(kind, start, text));
            if !leading && kind == SyntaxKind::LineBreakTrivia {
                break;
            }
        }
        trivia
    }

    fn read_line_break(&mut self) {
        if self.current() == '\r' && self.lookahead() == '\n' {
            self.advance();
        }
        self.advance();
    }

    fn read_whitespace(&mut self) -> SyntaxKind {
        while self.current() != EOI
            && self.current() != '\r'
            && self.current() != '\n'
            && self.current().is_whitespace()
        {
            self.advance();
        }
        SyntaxKind::WhitespaceTrivia
    }

    fn read_single_line_comment(&mut self) -> SyntaxKind {
        self.advance();
        self.advance();
        while !matches!(self.current(), EOI | '\r' | '\n') {
            self.advance();
        }
        SyntaxKind::SingleLineCommentTrivia
    }

    fn read_multi_line_comment(&mut self, start: usize) -> SyntaxKind {
        self.advance();
        self.advance();
        loop {
            match self.current() {
                EOI => {
                    let location = self.text.location(TextSpan::new(start, 2));
                    self.diagnostics.report_unterminated_multi_line_comment(location);
                    break;
                }
                '*' if self.lookahead() == '/' => {
                    self.advance();
                    self.advance();
                    break;
                }
                _ => self.advance(),
            }
        }
        SyntaxKind::MultiLineCommentTrivia
    }

    // -- Tokens --

    fn read_token(&mut self) -> (SyntaxKind, Option<TokenValue>) {
        let start = self.position;
        match self.current() {
            EOI => (SyntaxKind::EndOfFileToken, None),
            '.' => self.single(SyntaxKind::DotToken),
            ',' => self.single(SyntaxKind::CommaToken),
            ':' => self.single(SyntaxKind::ColonToken),
            '+' => self.single(SyntaxKind::PlusToken),
            '-' => self.single(SyntaxKind::MinusToken),
            '*' => self.single(SyntaxKind::StarToken),
            '/' => self.single(SyntaxKind::SlashToken),
            '(' => self.single(SyntaxKind::OpenParenthesisToken),
            ')' => self.single(SyntaxKind::CloseParenthesisToken),
            '{' => self.single(SyntaxKind::OpenBraceToken),
            '}' => self.single(SyntaxKind::CloseBraceToken),
            '[' => self.single(SyntaxKind::OpenBracketToken),
            ']' => self.single(SyntaxKind::CloseBracketToken),
            '`' => self.single(SyntaxKind::BacktickToken),
            '>' => self.single(SyntaxKind::GreaterToken),
            '<' => {
                if self.lookahead() == '>' {
                    self.advance();
                    self.advance();
                    (SyntaxKind::LessGreaterToken, None)
                } else {
                    self.single(SyntaxKind::LessToken)
                }
            }
            '#' => self.read_hex_triplet(),
            '"' => self.read_string('"', SyntaxKind::QuotationMarksStringToken),
            '\'' => {
                if self.lookahead() == '\'' && self.peek(2) == '\'' {
                    self.read_multi_line_string(start)
                } else {
                    self.read_string('\'', SyntaxKind::SingleQuotationMarksStringToken)
                }
            }
            c if c.is_ascii_digit() => self.read_number(start),
            c if c.is_alphabetic() || c == '_' => self.read_identifier_or_keyword(start),
            c => {
                let location = self.text.location(TextSpan::new(start, c.len_utf8()));
                self.diagnostics.report_bad_character(location, c);
                self.advance();
                (SyntaxKind::BadToken, None)
            }
        }
    }

    fn single(&mut self, kind: SyntaxKind) -> (SyntaxKind, Option<TokenValue>) {
        self.advance();
        (kind, None)
    }

    /// `#` plus up to six letter/digit characters. An invalid character is
    /// reported as a bad character, consumed, and ends the literal;
    /// end-of-input ends it silently.
    fn read_hex_triplet(&mut self) -> (SyntaxKind, Option<TokenValue>) {
        self.advance();
        for _ in 0..6 {
            let c = self.current();
            if c == EOI {
                break;
            }
            if !c.is_alphanumeric() {
                let location = self.text.location(TextSpan::new(self.position, c.len_utf8()));
                self.diagnostics.report_bad_character(location, c);
                self.advance();
                break;
            }
            self.advance();
        }
        (SyntaxKind::HexTripletToken, None)
    }

    /// A quoted string with doubled-delimiter escaping. Unterminated at a
    /// line break or end-of-input; the decoded value keeps the partial
    /// content.
    fn read_string(&mut self, delimiter: char, kind: SyntaxKind) -> (SyntaxKind, Option<TokenValue>) {
        let start = self.position;
        self.advance();
        let mut value = String::new();
        loop {
            match self.current() {
                EOI | '\r' | '\n' => {
                    let location = self.text.location(TextSpan::new(start, 1));
                    self.diagnostics.report_unterminated_string(location);
                    break;
                }
                c if c == delimiter => {
                    if self.lookahead() == delimiter {
                        value.push(delimiter);
                        self.advance();
                        self.advance();
                    } else {
                        self.advance();
                        break;
                    }
                }
                c => {
                    value.push(c);
                    self.advance();
                }
            }
        }
        (kind, Some(TokenValue::String(value)))
    }

    /// A `'''` multi-line string. `\\` escapes a backslash, `\'''` escapes
    /// the closing delimiter; any other backslash is reported and dropped.
    /// The decoded value is unindented afterwards.
    fn read_multi_line_string(&mut self, start: usize) -> (SyntaxKind, Option<TokenValue>) {
        self.advance();
        self.advance();
        self.advance();
        let mut value = String::new();
        loop {
            match self.current() {
                EOI => {
                    let location = self.text.location(TextSpan::new(start, 3));
                    self.diagnostics.report_unterminated_multi_line_string(location);
                    break;
                }
                '\\' => {
                    if self.lookahead() == '\\' {
                        value.push('\\');
                        self.advance();
                        self.advance();
                    } else if self.lookahead() == '\''
                        && self.peek(2) == '\''
                        && self.peek(3) == '\''
                    {
                        value.push_str("'''");
                        self.advance();
                        self.advance();
                        self.advance();
                        self.advance();
                    } else {
                        let location = self.text.location(TextSpan::new(self.position, 1));
                        self.diagnostics.report_unrecognized_escape_sequence(location);
                        self.advance();
                    }
                }
                '\'' if self.lookahead() == '\'' && self.peek(2) == '\'' => {
                    self.advance();
                    self.advance();
                    self.advance();
                    break;
                }
                c => {
                    value.push(c);
                    self.advance();
                }
            }
        }
        (SyntaxKind::MultiLineStringToken, Some(TokenValue::String(unindent(&value))))
    }

    /// Digits with `_` group separators and an optional fractional part,
    /// decoded as an exact decimal. Overflow reports an error and leaves
    /// the token valueless.
    fn read_number(&mut self, start: usize) -> (SyntaxKind, Option<TokenValue>) {
        while self.current().is_ascii_digit() || self.current() == '_' {
            self.advance();
        }
        if self.current() == '.' {
            self.advance();
            while self.current().is_ascii_digit() || self.current() == '_' {
                self.advance();
            }
        }
        let span = TextSpan::from_bounds(start, self.position);
        let text = self.text.slice(span);
        let mut clean = text.replace('_', "");
        if clean.ends_with('.') {
            clean.pop();
        }
        match clean.parse::<Decimal>() {
            Ok(number) => (SyntaxKind::NumberToken, Some(TokenValue::Number(number))),
            Err(_) => {
                let location = self.text.location(span);
                self.diagnostics.report_number_too_large(location, text);
                (SyntaxKind::NumberToken, None)
            }
        }
    }

    fn read_identifier_or_keyword(&mut self, start: usize) -> (SyntaxKind, Option<TokenValue>) {
        while self.current().is_alphanumeric() || self.current() == '_' {
            self.advance();
        }
        let text = self.text.slice(TextSpan::from_bounds(start, self.position));
        let kind = SyntaxKind::keyword_kind(text);
        let value = match kind {
            SyntaxKind::TrueKeyword => Some(TokenValue::Bool(true)),
            SyntaxKind::FalseKeyword => Some(TokenValue::Bool(false)),
            _ => None,
        };
        (kind, value)
    }

    // -- Cursor --

    fn peek(&self, offset: usize) -> char {
        self.text.as_str()[self.position..]
            .chars()
            .nth(offset)
            .unwrap_or(EOI)
    }

    fn current(&self) -> char {
        self.peek(0)
    }

    fn lookahead(&self) -> char {
        self.peek(1)
    }

    fn advance(&mut self) {
        let c = self.current();
        if c != EOI {
            self.position += c.len_utf8();
        }
    }
}

/// Strips the common leading whitespace indentation shared by all
/// non-empty lines. Line breaks inside the value are preserved exactly.
fn unindent(text: &str) -> String {
    fn content(line: &str) -> &str {
        line.strip_suffix('\r').unwrap_or(line)
    }
    // Indentation is counted in characters so stripping never lands inside
    // a multi-byte whitespace character.
    fn indent_len(line: &str) -> usize {
        content(line).chars().take_while(|c| c.is_whitespace()).count()
    }
    fn strip(line: &str, count: usize) -> &str {
        match line.char_indices().nth(count) {
            Some((offset, _)) => &line[offset..],
            None => "",
        }
    }

    let min_indent = text
        .split('\n')
        .filter(|line| !content(line).is_empty())
        .map(indent_len)
        .min()
        .unwrap_or(0);
    if min_indent == 0 {
        return text.to_string();
    }
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| {
            if content(line).is_empty() {
                line
            } else {
                strip(line, min_indent)
            }
        })
        .collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> (Vec<SyntaxToken>, DiagnosticBag) {
        let text = SourceText::new(input);
        let (tokens, diagnostics) = Lexer::tokenize(&text);
        (tokens, diagnostics)
    }

    /// Lexes and returns all tokens before the end-of-input token,
    /// asserting the input was clean.
    fn lex_clean(input: &str) -> Vec<SyntaxToken> {
        let (mut tokens, diagnostics) = lex(input);
        assert!(
            diagnostics.is_empty(),
            "unexpected diagnostics: {:?}",
            diagnostics.as_slice()
        );
        let eof = tokens.pop().unwrap();
        assert_eq!(eof.kind(), SyntaxKind::EndOfFileToken);
        tokens
    }

    fn kinds(tokens: &[SyntaxToken]) -> Vec<SyntaxKind> {
        tokens.iter().map(SyntaxToken::kind).collect()
    }

    #[test]
    fn empty_input_is_just_end_of_input() {
        let (tokens, diagnostics) = lex("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind(), SyntaxKind::EndOfFileToken);
        assert_eq!(tokens[0].text(), "");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn punctuation() {
        let tokens = lex_clean(". , : + - * / ( ) { } [ ] ` < > <>");
        assert_eq!(
            kinds(&tokens),
            vec![
                SyntaxKind::DotToken,
                SyntaxKind::CommaToken,
                SyntaxKind::ColonToken,
                SyntaxKind::PlusToken,
                SyntaxKind::MinusToken,
                SyntaxKind::StarToken,
                SyntaxKind::SlashToken,
                SyntaxKind::OpenParenthesisToken,
                SyntaxKind::CloseParenthesisToken,
                SyntaxKind::OpenBraceToken,
                SyntaxKind::CloseBraceToken,
                SyntaxKind::OpenBracketToken,
                SyntaxKind::CloseBracketToken,
                SyntaxKind::BacktickToken,
                SyntaxKind::LessToken,
                SyntaxKind::GreaterToken,
                SyntaxKind::LessGreaterToken,
            ]
        );
    }

    #[test]
    fn keywords_resolve_case_sensitively() {
        let tokens = lex_clean("Table table pk note");
        assert_eq!(
            kinds(&tokens),
            vec![
                SyntaxKind::TableKeyword,
                SyntaxKind::IdentifierToken,
                SyntaxKind::PkKeyword,
                SyntaxKind::NoteKeyword,
            ]
        );
    }

    #[test]
    fn boolean_keywords_carry_values() {
        let tokens = lex_clean("true false");
        assert_eq!(tokens[0].value(), Some(&TokenValue::Bool(true)));
        assert_eq!(tokens[1].value(), Some(&TokenValue::Bool(false)));
    }

    #[test]
    fn identifiers_allow_underscores_and_digits() {
        let tokens = lex_clean("user_id _private tbl2");
        assert_eq!(
            kinds(&tokens),
            vec![
                SyntaxKind::IdentifierToken,
                SyntaxKind::IdentifierToken,
                SyntaxKind::IdentifierToken,
            ]
        );
        assert_eq!(tokens[0].text(), "user_id");
    }

    #[test]
    fn leading_and_trailing_trivia_split_at_line_break() {
        let tokens = lex_clean("a \n  b");
        // 'a' owns the space and line break as trailing trivia; 'b' owns
        // the next line's indentation as leading trivia.
        assert_eq!(tokens[0].text(), "a");
        let trailing: Vec<SyntaxKind> =
            tokens[0].trailing_trivia().iter().map(SyntaxTrivia::kind).collect();
        assert_eq!(
            trailing,
            vec![SyntaxKind::WhitespaceTrivia, SyntaxKind::LineBreakTrivia]
        );
        let leading: Vec<SyntaxKind> =
            tokens[1].leading_trivia().iter().map(SyntaxTrivia::kind).collect();
        assert_eq!(leading, vec![SyntaxKind::WhitespaceTrivia]);
    }

    #[test]
    fn crlf_is_one_line_break_trivia() {
        let tokens = lex_clean("a\r\nb");
        assert_eq!(tokens[0].trailing_trivia().len(), 1);
        assert_eq!(tokens[0].trailing_trivia()[0].text(), "\r\n");
    }

    #[test]
    fn comments_are_trivia() {
        let tokens = lex_clean("a // line comment\n/* block */ b");
        assert_eq!(kinds(&tokens), vec![SyntaxKind::IdentifierToken, SyntaxKind::IdentifierToken]);
        let trailing: Vec<SyntaxKind> =
            tokens[0].trailing_trivia().iter().map(SyntaxTrivia::kind).collect();
        assert_eq!(
            trailing,
            vec![
                SyntaxKind::WhitespaceTrivia,
                SyntaxKind::SingleLineCommentTrivia,
                SyntaxKind::LineBreakTrivia,
            ]
        );
        let leading: Vec<SyntaxKind> =
            tokens[1].leading_trivia().iter().map(SyntaxTrivia::kind).collect();
        assert_eq!(
            leading,
            vec![SyntaxKind::MultiLineCommentTrivia, SyntaxKind::WhitespaceTrivia]
        );
    }

    #[test]
    fn unterminated_multi_line_comment_reports_at_opener() {
        let (tokens, diagnostics) = lex("a /* never closed");
        assert_eq!(tokens.last().unwrap().kind(), SyntaxKind::EndOfFileToken);
        assert_eq!(diagnostics.len(), 1);
        let diagnostic = &diagnostics.as_slice()[0];
        assert!(diagnostic.is_error());
        assert_eq!(diagnostic.message(), "Unterminated multi-line comment.");
        assert_eq!(diagnostic.location().span, TextSpan::new(2, 2));
    }

    #[test]
    fn double_quoted_string_with_doubled_escape() {
        let tokens = lex_clean(r#""say ""hi"" now""#);
        assert_eq!(tokens[0].kind(), SyntaxKind::QuotationMarksStringToken);
        assert_eq!(
            tokens[0].value().unwrap().as_str(),
            Some(r#"say "hi" now"#)
        );
    }

    #[test]
    fn single_quoted_string() {
        let tokens = lex_clean("'it''s fine'");
        assert_eq!(tokens[0].kind(), SyntaxKind::SingleQuotationMarksStringToken);
        assert_eq!(tokens[0].value().unwrap().as_str(), Some("it's fine"));
    }

    #[test]
    fn unterminated_string_stops_at_line_break() {
        let (tokens, diagnostics) = lex("\"abc\ndef");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.as_slice()[0].message(), "Unterminated string literal.");
        assert_eq!(diagnostics.as_slice()[0].location().span, TextSpan::new(0, 1));
        // Partial content is kept; lexing continues on the next line.
        assert_eq!(tokens[0].value().unwrap().as_str(), Some("abc"));
        assert_eq!(tokens[1].kind(), SyntaxKind::IdentifierToken);
    }

    #[test]
    fn multi_line_string_strips_common_indentation() {
        let input = "'''\n    line one\n    line two\n    '''";
        let tokens = lex_clean(input);
        assert_eq!(tokens[0].kind(), SyntaxKind::MultiLineStringToken);
        assert_eq!(
            tokens[0].value().unwrap().as_str(),
            Some("\nline one\nline two\n")
        );
    }

    #[test]
    fn multi_line_string_escapes() {
        let tokens = lex_clean(r"'''a \\ b \''' c'''");
        assert_eq!(tokens[0].value().unwrap().as_str(), Some(r"a \ b ''' c"));
    }

    #[test]
    fn multi_line_string_unrecognized_escape_drops_backslash() {
        let (tokens, diagnostics) = lex(r"'''a \q b'''");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.as_slice()[0].message(), "Unrecognized escape sequence.");
        assert_eq!(tokens[0].value().unwrap().as_str(), Some("a q b"));
    }

    #[test]
    fn unterminated_multi_line_string_reports_at_opener() {
        let (_, diagnostics) = lex("'''abc");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics.as_slice()[0].message(),
            "Unterminated multi-line string literal."
        );
        assert_eq!(diagnostics.as_slice()[0].location().span, TextSpan::new(0, 3));
    }

    #[test]
    fn numbers_with_group_separators() {
        let tokens = lex_clean("1_000_000.5");
        assert_eq!(tokens[0].kind(), SyntaxKind::NumberToken);
        assert_eq!(
            tokens[0].value().unwrap().as_number(),
            Some("1000000.5".parse().unwrap())
        );
    }

    #[test]
    fn number_with_trailing_dot_still_decodes() {
        let tokens = lex_clean("42.");
        assert_eq!(tokens[0].text(), "42.");
        assert_eq!(tokens[0].value().unwrap().as_number(), Some("42".parse().unwrap()));
    }

    #[test]
    fn number_overflow_reports_and_drops_value() {
        let text = "79228162514264337593543950336"; // one past the largest decimal
        let (tokens, diagnostics) = lex(text);
        assert_eq!(tokens[0].kind(), SyntaxKind::NumberToken);
        assert!(tokens[0].value().is_none());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics.as_slice()[0].message(),
            format!("The number '{text}' is too large.")
        );
        assert_eq!(
            diagnostics.as_slice()[0].location().span,
            TextSpan::new(0, text.len())
        );
    }

    #[test]
    fn hex_triplet() {
        let tokens = lex_clean("#FF5733");
        assert_eq!(tokens[0].kind(), SyntaxKind::HexTripletToken);
        assert_eq!(tokens[0].text(), "#FF5733");
    }

    #[test]
    fn hex_triplet_with_invalid_character() {
        let (tokens, diagnostics) = lex("#FF}");
        assert_eq!(tokens[0].kind(), SyntaxKind::HexTripletToken);
        assert_eq!(tokens[0].text(), "#FF}");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.as_slice()[0].message(), "Bad character input: '}'.");
    }

    #[test]
    fn hex_triplet_at_end_of_input() {
        let (tokens, diagnostics) = lex("#AB");
        assert_eq!(tokens[0].kind(), SyntaxKind::HexTripletToken);
        assert_eq!(tokens[0].text(), "#AB");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn bad_character_is_reported_and_consumed() {
        let (tokens, diagnostics) = lex("a $ b");
        assert_eq!(
            kinds(&tokens[..3]),
            vec![
                SyntaxKind::IdentifierToken,
                SyntaxKind::BadToken,
                SyntaxKind::IdentifierToken,
            ]
        );
        assert_eq!(tokens[1].text(), "$");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.as_slice()[0].message(), "Bad character input: '$'.");
    }

    #[test]
    fn round_trip_concatenation_reproduces_source() {
        let input = "Table users {\r\n  id int [pk] // key\n  note: '''\n    x\n  '''\n}\n";
        let (tokens, _) = lex(input);
        let rebuilt: String = tokens.iter().map(SyntaxToken::full_text).collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn round_trip_with_errors_still_reproduces_source() {
        let input = "a $ \"open\n#Z. 99999999999999999999999999999999";
        let (tokens, diagnostics) = lex(input);
        assert!(!diagnostics.is_empty());
        let rebuilt: String = tokens.iter().map(SyntaxToken::full_text).collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn unindent_ignores_blank_lines() {
        assert_eq!(unindent("\n  a\n\n  b\n"), "\na\n\nb\n");
    }

    #[test]
    fn unindent_uses_smallest_indent() {
        assert_eq!(unindent("    a\n  b"), "  a\nb");
    }

    #[test]
    fn unindent_keeps_unindented_text() {
        assert_eq!(unindent("a\n  b"), "a\n  b");
        assert_eq!(unindent("plain"), "plain");
    }

    #[test]
    fn unindent_counts_wide_whitespace_by_character() {
        assert_eq!(unindent("\u{a0}\u{a0}a\n b"), "\u{a0}a\nb");
    }
}
