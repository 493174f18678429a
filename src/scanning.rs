use crate::error_handling::*;
use crate::operators::*;

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    // kept as written so `2` and `2.0` stay apart, with a fused unary minus in front
    number(String),
    operator(Operator),
    open_paren,
    close_paren,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::number(content) => write!(f, "{}", content),
            Token::operator(operator) => write!(f, "{}", operator),
            Token::open_paren => write!(f, "("),
            Token::close_paren => write!(f, ")"),
        }
    }
}

impl TryFrom<&str> for Token {
    type Error = CalcError;

    fn try_from(text: &str) -> Result<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some('('), None) => return Ok(Token::open_paren),
            (Some(')'), None) => return Ok(Token::close_paren),
            (Some(symbol), None) => {
                if let Some(operator) = Operator::lookup(symbol) {
                    return Ok(Token::operator(operator));
                }
            },
            _ => {},
        }

        if let Some(character) = text.chars().find(|&c| !is_digit_or_dot(c) && c != '-') {
            return Err(CalcError::invalid_character(character));
        }

        if is_number_literal(text) {
            Ok(Token::number(text.into()))
        } else {
            Err(CalcError::invalid_number_format(text.into()))
        }
    }
}

fn is_digit_or_dot(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

fn is_allowed(character: char) -> bool {
    is_digit_or_dot(character)
        || character.is_whitespace()
        || matches!(character, '(' | ')')
        || Operator::lookup(character).is_some()
}

fn is_number_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    digits.starts_with(|c: char| c.is_ascii_digit())
        && digits.chars().all(is_digit_or_dot)
        && digits.matches('.').count() <= 1
}

fn check_balance(expression: &str) -> Result<()> {
    let mut depth = 0i64;
    for character in expression.chars() {
        match character {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {},
        }
        if depth < 0 {
            return Err(CalcError::unbalanced_parentheses);
        }
    }

    if depth == 0 {
        Ok(())
    } else {
        Err(CalcError::unbalanced_parentheses)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LastToken {
    none,
    number,
    operator,
    open,
    close,
}

pub struct StringScanner {
    chars: Vec<char>,
    index: usize,
    last: LastToken,
    tokens: Vec<Token>,
}

impl StringScanner {
    pub fn new(expression: &str) -> Self {
        // trailing space so lookahead past the last character never runs dry
        let chars = expression.chars().chain(std::iter::once(' ')).collect();
        Self {
            chars,
            index: 0,
            last: LastToken::none,
            tokens: Vec::new(),
        }
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn lookahead(&self) -> Option<char> {
        self.chars.get(self.index + 1).copied()
    }

    fn literal_from(&self, start: usize) -> String {
        self.chars[start..]
            .iter()
            .take_while(|&&c| is_digit_or_dot(c))
            .collect()
    }

    fn push(&mut self, token: Token, last: LastToken) {
        self.tokens.push(token);
        self.last = last;
    }

    fn scan_number(&mut self, mut literal: String) -> Result<()> {
        if self.last == LastToken::number {
            return Err(CalcError::consecutive_numbers);
        }

        while let Some(character) = self.current().filter(|&c| is_digit_or_dot(c)) {
            if character == '.' && literal.contains('.') {
                literal.push_str(&self.literal_from(self.index));
                return Err(CalcError::invalid_number_format(literal));
            }
            literal.push(character);
            self.index += 1;
        }

        self.push(Token::number(literal), LastToken::number);
        Ok(())
    }

    fn scan_operator(&mut self, operator: Operator) -> Result<()> {
        match self.last {
            LastToken::none => Err(CalcError::leading_operator(operator.symbol())),
            LastToken::operator => Err(CalcError::consecutive_operators(operator.symbol())),
            _ => {
                self.index += 1;
                self.push(Token::operator(operator), LastToken::operator);
                Ok(())
            },
        }
    }

    fn scan_minus(&mut self, minus: Operator) -> Result<()> {
        let before_digit = self.lookahead().filter(char::is_ascii_digit).is_some();
        let after_operand = self.last == LastToken::number;

        if before_digit && !after_operand {
            self.index += 1;
            self.scan_number("-".into())
        } else {
            self.scan_operator(minus)
        }
    }

    fn scan_open_paren(&mut self) -> Result<()> {
        if self.last == LastToken::number {
            return Err(CalcError::missing_operator_before_paren);
        }
        self.index += 1;
        self.push(Token::open_paren, LastToken::open);
        Ok(())
    }

    fn scan_close_paren(&mut self) -> Result<()> {
        if matches!(self.last, LastToken::none | LastToken::open | LastToken::operator) {
            return Err(CalcError::empty_or_dangling_group);
        }
        self.index += 1;
        self.push(Token::close_paren, LastToken::close);
        Ok(())
    }

    pub fn scan(mut self) -> Result<Vec<Token>> {
        while let Some(character) = self.current() {
            match character {
                c if c.is_ascii_digit() => self.scan_number(String::new())?,
                '.' => return Err(CalcError::invalid_number_format(self.literal_from(self.index))),
                c if c.is_whitespace() => self.index += 1,
                '(' => self.scan_open_paren()?,
                ')' => self.scan_close_paren()?,
                c => match Operator::lookup(c) {
                    Some(operator) if c == '-' => self.scan_minus(operator)?,
                    Some(operator) => self.scan_operator(operator)?,
                    None => return Err(CalcError::invalid_character(c)),
                },
            }
        }

        if let Some(Token::operator(operator)) = self.tokens.last() {
            return Err(CalcError::trailing_operator(operator.symbol()));
        }
        Ok(self.tokens)
    }
}

/// Splits `expression` into numbers, operators and parentheses, rejecting
/// anything that cannot form a well-shaped infix expression.
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    if expression.trim().is_empty() {
        return Err(CalcError::empty_expression);
    }

    if let Some(character) = expression.chars().find(|&c| !is_allowed(c)) {
        return Err(CalcError::invalid_character(character));
    }

    check_balance(expression)?;

    StringScanner::new(expression).scan()
}
