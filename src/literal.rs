/*! Structural parsing of literal-encoded fields.

The raw dataset stores nested values (tag lists, rating objects) as their
source-language literal representation, e.g.
`[{'value': 'tag_12', 'sentiment': 'positive'}]`.

[parse_literal] is a recursive-descent parser over that syntax: strings,
numbers, booleans, `None`, lists and dicts. It never evaluates anything,
so untrusted field contents cannot trigger code execution.
!*/
use crate::error::Error;

/// A parsed literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    None,
    List(Vec<Literal>),
    /// Insertion-ordered. Keys are restricted to string literals.
    Dict(Vec<(String, Literal)>),
}

impl Literal {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view: ints are widened to floats.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Int(i) => Some(*i as f64),
            Literal::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Literal]> {
        match self {
            Literal::List(items) => Some(items),
            _ => None,
        }
    }

    /// Dict lookup by key. Returns [None] for non-dicts too.
    pub fn get(&self, key: &str) -> Option<&Literal> {
        match self {
            Literal::Dict(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

/// Parse a whole string as a single literal value.
///
/// Fails with [Error::Format] on malformed input or trailing garbage.
pub fn parse_literal(raw: &str) -> Result<Literal, Error> {
    let mut parser = Parser::new(raw);
    parser.skip_ws();
    let value = parser.parse_value()?;
    parser.skip_ws();
    match parser.peek() {
        Some(c) => Err(parser.err(&format!("trailing character '{}'", c))),
        None => Ok(value),
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn new(raw: &str) -> Self {
        Self {
            chars: raw.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), Error> {
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(self.err(&format!("expected '{}', got '{}'", expected, c))),
            None => Err(self.err(&format!("expected '{}', got end of input", expected))),
        }
    }

    fn err(&self, msg: &str) -> Error {
        Error::Format(format!("literal parse error at char {}: {}", self.pos, msg))
    }

    fn parse_value(&mut self) -> Result<Literal, Error> {
        match self.peek() {
            Some('[') => self.parse_list(),
            Some('{') => self.parse_dict(),
            Some('\'') | Some('"') => Ok(Literal::Str(self.parse_string()?)),
            Some(c) if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => {
                self.parse_number()
            }
            Some(c) if c.is_alphabetic() => self.parse_word(),
            Some(c) => Err(self.err(&format!("unexpected character '{}'", c))),
            None => Err(self.err("unexpected end of input")),
        }
    }

    fn parse_string(&mut self) -> Result<String, Error> {
        // caller checked the quote is there
        let quote = self.bump().unwrap();
        let mut out = String::new();
        loop {
            match self.bump() {
                Some('\\') => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('r') => out.push('\r'),
                    Some(c) => out.push(c),
                    None => return Err(self.err("unterminated escape")),
                },
                Some(c) if c == quote => return Ok(out),
                Some(c) => out.push(c),
                None => return Err(self.err("unterminated string")),
            }
        }
    }

    fn parse_number(&mut self) -> Result<Literal, Error> {
        let mut repr = String::new();
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' | '+' | '-' | '.' | 'e' | 'E' => {
                    repr.push(c);
                    self.pos += 1;
                }
                // numeric group separator, insignificant
                '_' => {
                    self.pos += 1;
                }
                _ => break,
            }
        }
        if repr.contains('.') || repr.contains('e') || repr.contains('E') {
            Ok(Literal::Float(repr.parse::<f64>()?))
        } else {
            Ok(Literal::Int(repr.parse::<i64>()?))
        }
    }

    fn parse_word(&mut self) -> Result<Literal, Error> {
        let mut word = String::new();
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            word.push(self.bump().unwrap());
        }
        match word.as_str() {
            "True" => Ok(Literal::Bool(true)),
            "False" => Ok(Literal::Bool(false)),
            "None" => Ok(Literal::None),
            other => Err(self.err(&format!("unknown keyword '{}'", other))),
        }
    }

    fn parse_list(&mut self) -> Result<Literal, Error> {
        self.expect('[')?;
        let mut items = Vec::new();
        loop {
            self.skip_ws();
            if self.peek() == Some(']') {
                self.pos += 1;
                return Ok(Literal::List(items));
            }
            items.push(self.parse_value()?);
            self.skip_ws();
            match self.peek() {
                Some(',') => {
                    self.pos += 1;
                }
                Some(']') => {
                    self.pos += 1;
                    return Ok(Literal::List(items));
                }
                _ => return Err(self.err("expected ',' or ']' in list")),
            }
        }
    }

    fn parse_dict(&mut self) -> Result<Literal, Error> {
        self.expect('{')?;
        let mut entries = Vec::new();
        loop {
            self.skip_ws();
            if self.peek() == Some('}') {
                self.pos += 1;
                return Ok(Literal::Dict(entries));
            }
            let key = match self.peek() {
                Some('\'') | Some('"') => self.parse_string()?,
                _ => return Err(self.err("dict keys must be string literals")),
            };
            self.skip_ws();
            self.expect(':')?;
            self.skip_ws();
            let value = self.parse_value()?;
            entries.push((key, value));
            self.skip_ws();
            match self.peek() {
                Some(',') => {
                    self.pos += 1;
                }
                Some('}') => {
                    self.pos += 1;
                    return Ok(Literal::Dict(entries));
                }
                _ => return Err(self.err("expected ',' or '}' in dict")),
            }
        }
    }
}
