//! Fixture cases and pass/fail reports for exercising the converter.
//!
//! A fixture pairs an infix token sequence with the postfix sequence it must
//! produce. [`run_cases`] converts each input and compares token strings;
//! the resulting [`FixtureReport`] renders as one `PASS #n` / `FAIL #n`
//! line per case followed by a `Passed x of y` summary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ConvertOptions;
use crate::converter::convert;
use crate::error::ConvertError;

/// An infix input and its expected postfix output, both as raw tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureCase {
    pub input: Vec<String>,
    pub expected: Vec<String>,
}

impl FixtureCase {
    /// Build a case from two space-separated token strings.
    pub fn from_strs(input: &str, expected: &str) -> Self {
        Self {
            input: split(input),
            expected: split(expected),
        }
    }
}

fn split(s: &str) -> Vec<String> {
    s.split_ascii_whitespace().map(str::to_string).collect()
}

/// The reference cases every conversion must reproduce.
pub fn builtin_cases() -> Vec<FixtureCase> {
    [
        ("A * B + C", "A B * C +"),
        ("A + B * C", "A B C * +"),
        ("A * ( B + C )", "A B C + *"),
        ("A - B + C", "A B - C +"),
        ("A * B ^ C + D", "A B C ^ * D +"),
        ("A * ( B + C * D ) + E", "A B C D * + * E +"),
        (
            "A + B * ( C ^ D - E ) ^ ( F + G * H ) - I",
            "A B C D ^ E - F G H * + ^ * + I -",
        ),
        ("5 + 2 / ( 3 - 8 ) ^ 5 ^ 2", "5 2 3 8 - 5 2 ^ ^ / +"),
        ("3 + 4 * 2 / ( 1 - 5 ) ^ 2 ^ 3", "3 4 2 * 1 5 - 2 3 ^ ^ / +"),
    ]
    .into_iter()
    .map(|(input, expected)| FixtureCase::from_strs(input, expected))
    .collect()
}

/// Parse a JSON array of `{ "input": [...], "expected": [...] }` objects.
pub fn load_cases(json: &str) -> Result<Vec<FixtureCase>, ConvertError> {
    let cases: Vec<FixtureCase> = serde_json::from_str(json)?;
    if cases.is_empty() {
        return Err(ConvertError::Fixture("fixture file contains no cases".to_string()));
    }
    Ok(cases)
}

/// Result of running a single case.
#[derive(Debug)]
pub struct CaseOutcome {
    /// 1-based position of the case in the run.
    pub index: usize,
    pub case: FixtureCase,
    /// Converted tokens, or the error the conversion failed with.
    pub actual: Result<Vec<String>, String>,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        matches!(&self.actual, Ok(tokens) if *tokens == self.case.expected)
    }
}

/// Outcomes for a whole run, in case order.
#[derive(Debug, Default)]
pub struct FixtureReport {
    pub outcomes: Vec<CaseOutcome>,
}

impl FixtureReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }
}

/// Convert every case and record whether it matched.
pub fn run_cases(cases: &[FixtureCase], options: &ConvertOptions) -> FixtureReport {
    let outcomes = cases
        .iter()
        .enumerate()
        .map(|(i, case)| {
            let actual = convert(&case.input, options)
                .map(|tokens| tokens.iter().map(ToString::to_string).collect())
                .map_err(|e| e.to_string());
            let outcome = CaseOutcome {
                index: i + 1,
                case: case.clone(),
                actual,
            };
            tracing::debug!(index = outcome.index, passed = outcome.passed(), "fixture case");
            outcome
        })
        .collect();

    FixtureReport { outcomes }
}

impl fmt::Display for FixtureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            if outcome.passed() {
                writeln!(f, "PASS #{}", outcome.index)?;
                continue;
            }
            writeln!(f, "FAIL #{}", outcome.index)?;
            writeln!(f, "     input ....: {}", outcome.case.input.concat())?;
            writeln!(f, "     expected .: {}", outcome.case.expected.concat())?;
            match &outcome.actual {
                Ok(tokens) => writeln!(f, "     got ......: {}", tokens.concat())?,
                Err(message) => writeln!(f, "     got ......: error: {}", message)?,
            }
        }
        write!(f, "Passed {} of {}", self.passed(), self.total())
    }
}
