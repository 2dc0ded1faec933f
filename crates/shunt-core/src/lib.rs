//! Convert pre-tokenized infix expressions into postfix (Reverse Polish)
//! notation with the shunting-yard algorithm.
//!
//! ```
//! use shunt_core::{convert, to_postfix_string, ConvertOptions};
//!
//! let postfix = convert(&["A", "*", "(", "B", "+", "C", ")"], &ConvertOptions::default()).unwrap();
//! assert_eq!(to_postfix_string(&postfix), "A B C + *");
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod fixture;
pub mod operators;
pub mod token;

pub use config::{ConvertOptions, UnclosedGroups};
pub use converter::{convert, convert_str, to_postfix_string};
pub use error::ConvertError;
pub use operators::{Associativity, Operator, OperatorInfo};
pub use token::Token;
