use crate::core::models::atom::Atom;
use crate::core::models::compound::{Compound, Stack};
use crate::core::models::error::ModelError;
use crate::core::table::PeriodicTable;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormulaError {
    #[error("Formula is empty")]
    Empty,
    #[error("Parse error at column {column}: {kind}")]
    Parse {
        column: usize,
        kind: FormulaParseErrorKind,
    },
    #[error("Invalid compound: {0}")]
    Model(#[from] ModelError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormulaParseErrorKind {
    #[error("Unexpected character '{0}'")]
    UnexpectedCharacter(char),
    #[error("Unknown element symbol '{0}'")]
    UnknownElement(String),
    #[error("Group opened with '{0}' is never closed")]
    UnclosedGroup(char),
    #[error("Group contains no atoms")]
    EmptyGroup,
    #[error("Count must be at least 1")]
    ZeroCount,
    #[error("Count '{0}' is too large")]
    CountOverflow(String),
    #[error("Invalid charge: {0}")]
    InvalidCharge(String),
}

/// Parses a formula into a compound.
///
/// Parenthesised groups are merged into the enclosing compound, so `Ca(OH)2`
/// yields `CaO2H2`. Bracketed groups stay nested and may carry their own
/// charge: `[NH4^+][NO3^-]`. A trailing `^2-`, `^-2`, `^+` sets the charge of
/// the whole formula.
pub fn parse<'t>(table: &'t PeriodicTable, text: &str) -> Result<Compound<'t>, FormulaError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(FormulaError::Empty);
    }

    let mut parser = Parser {
        table,
        chars: text.chars().collect(),
        pos: 0,
    };
    let compound = parser.compound(None)?;
    if let Some(c) = parser.peek() {
        return Err(parser.error(FormulaParseErrorKind::UnexpectedCharacter(c)));
    }

    debug!(formula = text, parsed = %compound, "Parsed formula.");
    Ok(compound)
}

struct Parser<'t> {
    table: &'t PeriodicTable,
    chars: Vec<char>,
    pos: usize,
}

impl<'t> Parser<'t> {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn error(&self, kind: FormulaParseErrorKind) -> FormulaError {
        self.error_at(self.pos, kind)
    }

    fn error_at(&self, pos: usize, kind: FormulaParseErrorKind) -> FormulaError {
        FormulaError::Parse {
            column: pos + 1,
            kind,
        }
    }

    fn compound(&mut self, closing: Option<char>) -> Result<Compound<'t>, FormulaError> {
        let start = self.pos;
        let stacks = self.units(closing)?;
        if stacks.is_empty() {
            return Err(self.error_at(start, FormulaParseErrorKind::EmptyGroup));
        }
        let charge = if self.peek() == Some('^') {
            self.charge()?
        } else {
            0
        };
        Ok(Compound::with_charge(stacks, charge)?)
    }

    fn units(&mut self, closing: Option<char>) -> Result<Vec<Stack<'t>>, FormulaError> {
        let mut stacks = Vec::new();
        while let Some(c) = self.peek() {
            match c {
                'A'..='Z' => {
                    let atom = self.atom()?;
                    let count = self.count()?;
                    stacks.push(Stack::new(atom, count)?);
                }
                '(' => {
                    let open = self.pos;
                    self.bump();
                    let inner = self.units(Some(')'))?;
                    self.close(')', '(', open)?;
                    if inner.is_empty() {
                        return Err(self.error_at(open, FormulaParseErrorKind::EmptyGroup));
                    }
                    let count = self.count()?;
                    for stack in inner {
                        let quantity = stack.quantity().checked_mul(count).ok_or_else(|| {
                            self.error_at(
                                open,
                                FormulaParseErrorKind::CountOverflow(format!(
                                    "{} x {count}",
                                    stack.quantity()
                                )),
                            )
                        })?;
                        stacks.push(Stack::new(stack.unit().clone(), quantity)?);
                    }
                }
                '[' => {
                    let open = self.pos;
                    self.bump();
                    let inner = self.compound(Some(']'))?;
                    self.close(']', '[', open)?;
                    let count = self.count()?;
                    stacks.push(Stack::new(inner, count)?);
                }
                '^' => break,
                c if Some(c) == closing => break,
                other => {
                    return Err(self.error(FormulaParseErrorKind::UnexpectedCharacter(other)));
                }
            }
        }
        Ok(stacks)
    }

    fn close(&mut self, expected: char, opener: char, open: usize) -> Result<(), FormulaError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            Some(other) => Err(self.error(FormulaParseErrorKind::UnexpectedCharacter(other))),
            None => Err(self.error_at(open, FormulaParseErrorKind::UnclosedGroup(opener))),
        }
    }

    fn atom(&mut self) -> Result<Atom<'t>, FormulaError> {
        let start = self.pos;
        let mut symbol = String::new();
        if let Some(c) = self.peek() {
            symbol.push(c);
            self.bump();
        }
        while let Some(c) = self.peek().filter(char::is_ascii_lowercase) {
            symbol.push(c);
            self.bump();
        }
        let table: &'t PeriodicTable = self.table;
        match table.by_symbol(&symbol) {
            Some(element) => Ok(Atom::new(element)),
            None => Err(self.error_at(start, FormulaParseErrorKind::UnknownElement(symbol))),
        }
    }

    fn digits(&mut self) -> Option<String> {
        let mut digits = String::new();
        while let Some(c) = self.peek().filter(char::is_ascii_digit) {
            digits.push(c);
            self.bump();
        }
        (!digits.is_empty()).then_some(digits)
    }

    fn count(&mut self) -> Result<u32, FormulaError> {
        let start = self.pos;
        let Some(digits) = self.digits() else {
            return Ok(1);
        };
        match digits.parse::<u32>() {
            Ok(0) => Err(self.error_at(start, FormulaParseErrorKind::ZeroCount)),
            Ok(count) => Ok(count),
            Err(_) => Err(self.error_at(start, FormulaParseErrorKind::CountOverflow(digits))),
        }
    }

    fn charge(&mut self) -> Result<i32, FormulaError> {
        let start = self.pos;
        self.bump();

        let leading = self.digits();
        let sign = match self.peek() {
            Some('+') => 1,
            Some('-') => -1,
            _ => {
                return Err(self.error_at(
                    start,
                    FormulaParseErrorKind::InvalidCharge("a sign is required".to_string()),
                ));
            }
        };
        self.bump();
        let trailing = if leading.is_none() { self.digits() } else { None };

        let magnitude = match leading.or(trailing) {
            None => 1,
            Some(digits) => digits.parse::<i32>().map_err(|_| {
                self.error_at(
                    start,
                    FormulaParseErrorKind::InvalidCharge(format!("'{digits}' is too large")),
                )
            })?,
        };
        if magnitude == 0 {
            return Err(self.error_at(
                start,
                FormulaParseErrorKind::InvalidCharge("a charge of zero must be omitted".to_string()),
            ));
        }
        Ok(sign * magnitude)
    }
}
