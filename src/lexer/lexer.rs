use regex::Regex;

use crate::{
    diagnostics::diagnostics::{Diagnostic, DiagnosticKind},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

pub struct Lexer {
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            diagnostics: vec![],
            source: String::from(source),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn position(&self) -> Position {
        Position {
            offset: self.pos as u32,
            line: self.line,
            column: self.column,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        for byte in self.source.as_bytes()[self.pos..self.pos + n].iter() {
            if *byte == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn report(&mut self, kind: DiagnosticKind, span: Span) {
        self.diagnostics.push(Diagnostic::new(kind, span));
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn create_patterns() -> Vec<RegexPattern> {
    vec![
        RegexPattern { regex: Regex::new(r"\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"//[^\n]*").unwrap(), handler: line_comment_handler },
        RegexPattern { regex: Regex::new(r"(?s)/\*.*?\*/").unwrap(), handler: block_comment_handler },
        RegexPattern { regex: Regex::new(r"/\*").unwrap(), handler: unterminated_block_comment_handler },
        RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"[0-9]+(\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r#"(?s)"([^"\\]|\\.)*""#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("\"").unwrap(), handler: unterminated_string_handler },
        RegexPattern { regex: Regex::new(r"(?s)'([^'\\]|\\.)'").unwrap(), handler: char_handler },
        RegexPattern { regex: Regex::new("'").unwrap(), handler: bad_char_handler },
        RegexPattern { regex: Regex::new(r"\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
        RegexPattern { regex: Regex::new(r"\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
        RegexPattern { regex: Regex::new(r"\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new(r"\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new(r"\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new(r"\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: Regex::new("!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new("<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new(">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new(r"\|\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "||") },
        RegexPattern { regex: Regex::new("&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&") },
        RegexPattern { regex: Regex::new("&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Ampersand, "&") },
        RegexPattern { regex: Regex::new(r"\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
        RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("::").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ColonColon, "::") },
        RegexPattern { regex: Regex::new(":").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("@").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::At, "@") },
        RegexPattern { regex: Regex::new(r"\+=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusEquals, "+=") },
        RegexPattern { regex: Regex::new("-=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusEquals, "-=") },
        RegexPattern { regex: Regex::new(r"\*=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::StarEquals, "*=") },
        RegexPattern { regex: Regex::new("/=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::SlashEquals, "/=") },
        RegexPattern { regex: Regex::new("%=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PercentEquals, "%=") },
        RegexPattern { regex: Regex::new(r"\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new(r"\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
    ]
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let start = lexer.position();
    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(
        TokenKind::Number,
        matched,
        Span { start, end: lexer.position() }
    ));
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(matched);
}

fn line_comment_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let start = lexer.position();
    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(
        TokenKind::LineComment,
        matched,
        Span { start, end: lexer.position() }
    ));
}

fn block_comment_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let start = lexer.position();
    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(
        TokenKind::BlockComment,
        matched,
        Span { start, end: lexer.position() }
    ));
}

fn unterminated_block_comment_handler(lexer: &mut Lexer, _regex: &Regex) {
    let start = lexer.position();
    let length = lexer.remainder().len();
    lexer.advance_n(length);
    lexer.report(
        DiagnosticKind::UnterminatedBlockComment,
        Span { start, end: lexer.position() },
    );
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    let decoded = decode_escapes(&matched[1..matched.len() - 1]);

    let start = lexer.position();
    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(
        TokenKind::String,
        decoded,
        Span { start, end: lexer.position() }
    ));
}

fn unterminated_string_handler(lexer: &mut Lexer, _regex: &Regex) {
    // No closing quote anywhere in the remaining input; strings may span
    // newlines, so there is no later point to resynchronize at.
    let start = lexer.position();
    let length = lexer.remainder().len();
    lexer.advance_n(length);
    lexer.report(
        DiagnosticKind::UnterminatedString,
        Span { start, end: lexer.position() },
    );
}

fn char_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    let decoded = decode_escapes(&matched[1..matched.len() - 1]);

    let start = lexer.position();
    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(
        TokenKind::Char,
        decoded,
        Span { start, end: lexer.position() }
    ));
}

fn bad_char_handler(lexer: &mut Lexer, _regex: &Regex) {
    let start = lexer.position();
    let remainder = lexer.remainder();

    // A quote that the full char pattern rejected: either the closing quote
    // arrives after zero or several characters, or never on this line.
    let close = remainder[1..].find(|c: char| c == '\'' || c == '\n');
    match close {
        Some(index) if remainder.as_bytes()[index + 1] == b'\'' => {
            let lexeme = remainder[..index + 2].to_string();
            lexer.advance_n(lexeme.len());
            lexer.report(
                DiagnosticKind::MalformedChar { lexeme },
                Span { start, end: lexer.position() },
            );
        }
        _ => {
            lexer.advance_n(1);
            lexer.report(
                DiagnosticKind::UnterminatedChar,
                Span { start, end: lexer.position() },
            );
        }
    }
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let kind = match RESERVED_LOOKUP.get(matched.as_str()) {
        Some(kind) => *kind,
        None => TokenKind::Identifier,
    };

    let start = lexer.position();
    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(
        kind,
        matched,
        Span { start, end: lexer.position() }
    ));
}

/// Decodes escape sequences in a string or char literal body.
///
/// `\n \r \t \\ \" \'` decode to their control/quote characters. Any other
/// escaped character passes through literally; unrecognised escapes are
/// never an error.
fn decode_escapes(raw: &str) -> String {
    let mut result = String::new();
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('\'') => result.push('\''),
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }

    result
}

/// Tokenizes a complete source buffer.
///
/// Returns every token in source order (comments included, as trivia
/// tokens) terminated by an `EOF` token, together with all lex diagnostics.
/// Lexing never aborts: unrecognised input is reported and skipped.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut lex = Lexer::new(source);
    let patterns = create_patterns();

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in patterns.iter() {
            let match_here = pattern.regex.find(lex.remainder());

            if match_here.is_some() && match_here.unwrap().start() == 0 {
                (pattern.handler)(&mut lex, &pattern.regex);
                matched = true;
                break;
            }
        }

        if !matched {
            let character = lex.remainder().chars().next().unwrap();
            let start = lex.position();
            lex.advance_n(character.len_utf8());
            lex.report(
                DiagnosticKind::UnrecognisedCharacter { character },
                Span { start, end: lex.position() },
            );
        }
    }

    let end = lex.position();
    lex.push(MK_TOKEN!(
        TokenKind::EOF,
        String::from("EOF"),
        Span { start: end, end }
    ));

    (lex.tokens, lex.diagnostics)
}
