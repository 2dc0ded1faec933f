//! Operator set and precedence/associativity table.
//!
//! Classification and metadata are separate data: a token is an
//! operator when its symbol appears in [`OPERATOR_SYMBOLS`], and its binding
//! behaviour comes from a lookup in [`OPERATOR_TABLE`]. [`validate_table`]
//! checks that the two agree.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Grouping rule for a run of operators sharing one precedence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Associativity {
    Left,
    Right,
}

impl fmt::Display for Associativity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Associativity::Left => f.write_str("left"),
            Associativity::Right => f.write_str("right"),
        }
    }
}

/// Binding metadata for one operator. Higher precedence binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorInfo {
    pub precedence: u8,
    pub associativity: Associativity,
}

impl OperatorInfo {
    const fn left(precedence: u8) -> Self {
        Self {
            precedence,
            associativity: Associativity::Left,
        }
    }

    const fn right(precedence: u8) -> Self {
        Self {
            precedence,
            associativity: Associativity::Right,
        }
    }
}

/// Precedence reported for `(` and `)`. Below every real operator.
pub const PAREN_PRECEDENCE: u8 = 0;

/// The closed set of recognised operator literals.
pub const OPERATOR_SYMBOLS: [&str; 13] = [
    "+", "-", "*", "/", "^", "<", "<=", ">", ">=", "=", "!=", "&&", "||",
];

/// Precedence/associativity rows, one per operator symbol.
pub static OPERATOR_TABLE: &[(&str, OperatorInfo)] = &[
    ("^", OperatorInfo::right(13)),
    ("*", OperatorInfo::left(12)),
    ("/", OperatorInfo::left(12)),
    ("+", OperatorInfo::left(11)),
    ("-", OperatorInfo::left(11)),
    ("<", OperatorInfo::left(9)),
    ("<=", OperatorInfo::left(9)),
    (">", OperatorInfo::left(9)),
    (">=", OperatorInfo::left(9)),
    ("=", OperatorInfo::left(8)),
    ("!=", OperatorInfo::left(8)),
    ("&&", OperatorInfo::left(4)),
    ("||", OperatorInfo::left(3)),
];

/// A token already classified as a member of [`OPERATOR_SYMBOLS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operator(&'static str);

impl Operator {
    /// Classify `symbol` against the operator set. Does not consult the
    /// metadata table.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        OPERATOR_SYMBOLS
            .iter()
            .find(|&&known| known == symbol)
            .map(|&known| Operator(known))
    }

    pub fn symbol(&self) -> &'static str {
        self.0
    }

    /// Look up this operator's precedence and associativity.
    pub fn info(&self) -> Result<OperatorInfo, ConvertError> {
        lookup(self.0)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Find the metadata row for `symbol`.
pub fn lookup(symbol: &str) -> Result<OperatorInfo, ConvertError> {
    lookup_in(OPERATOR_TABLE, symbol)
}

fn lookup_in(table: &[(&str, OperatorInfo)], symbol: &str) -> Result<OperatorInfo, ConvertError> {
    table
        .iter()
        .find(|(known, _)| *known == symbol)
        .map(|(_, info)| *info)
        .ok_or_else(|| ConvertError::UnknownOperator {
            symbol: symbol.to_string(),
        })
}

/// Check the built-in operator set against the built-in table.
///
/// Returns one message per problem; an empty list means the table is
/// consistent.
pub fn validate_table() -> Vec<String> {
    validate(&OPERATOR_SYMBOLS, OPERATOR_TABLE)
}

fn validate(symbols: &[&str], table: &[(&str, OperatorInfo)]) -> Vec<String> {
    let mut problems = Vec::new();

    for symbol in symbols {
        let rows = table.iter().filter(|(known, _)| known == symbol).count();
        match rows {
            0 => problems.push(format!("operator [{symbol}] has no table entry")),
            1 => {}
            n => problems.push(format!("operator [{symbol}] has {n} table entries")),
        }
    }

    for (known, info) in table {
        if !symbols.contains(known) {
            problems.push(format!("table entry [{known}] is not a recognised operator"));
        }
        if info.precedence == PAREN_PRECEDENCE {
            problems.push(format!(
                "operator [{known}] uses precedence {PAREN_PRECEDENCE}, reserved for parentheses"
            ));
        }
    }

    // Mixed associativity within one level is unsupported.
    let mut levels: HashMap<u8, (Associativity, &str)> = HashMap::new();
    for (known, info) in table {
        match levels.get(&info.precedence) {
            Some((assoc, first)) if *assoc != info.associativity => problems.push(format!(
                "precedence {} mixes {} ([{}]) and {} ([{}])",
                info.precedence, assoc, first, info.associativity, known
            )),
            Some(_) => {}
            None => {
                levels.insert(info.precedence, (info.associativity, *known));
            }
        }
    }

    problems
}
