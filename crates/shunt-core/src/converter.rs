//! Shunting-yard conversion from infix to postfix order.
//!
//! A single left-to-right pass over the tokens:
//! 1. Operands go straight to the output.
//! 2. An operator pops pending operators of greater or equal precedence,
//!    but only when it is itself left-associative, then is pushed.
//! 3. `(` is pushed unconditionally.
//! 4. `)` pops into the output down to the matching `(`, which is discarded.
//! 5. At end of input the stack is drained into the output.
//!
//! Operands are never reordered; only operators move.

use crate::config::{ConvertOptions, UnclosedGroups};
use crate::error::ConvertError;
use crate::operators::{Associativity, Operator, PAREN_PRECEDENCE};
use crate::token::Token;

/// An entry on the operator stack. Close parentheses never appear here.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator(Operator),
    /// An open parenthesis and the input position it came from.
    Group { position: usize },
}

impl Pending {
    fn token(&self) -> Token {
        match self {
            Pending::Operator(op) => Token::Operator(*op),
            Pending::Group { .. } => Token::OpenParen,
        }
    }
}

/// Convert a pre-tokenized infix expression into postfix order.
///
/// The input is borrowed and left untouched. On error no partial output is
/// returned.
pub fn convert<S: AsRef<str>>(
    tokens: &[S],
    options: &ConvertOptions,
) -> Result<Vec<Token>, ConvertError> {
    tracing::debug!(tokens = tokens.len(), "converting infix expression");

    let mut stack: Vec<Pending> = Vec::new();
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut depth = 0usize;

    for (position, raw) in tokens.iter().enumerate() {
        match Token::classify(raw.as_ref(), position)? {
            token @ Token::Operand(_) => output.push(token),
            Token::Operator(op) => push_operator(op, &mut stack, &mut output)?,
            Token::OpenParen => {
                depth += 1;
                if let Some(max_depth) = options.max_depth {
                    if depth > max_depth {
                        return Err(ConvertError::NestingTooDeep {
                            position,
                            max_depth,
                        });
                    }
                }
                tracing::trace!(position, depth, "push (");
                stack.push(Pending::Group { position });
            }
            Token::CloseParen => {
                close_group(position, &mut stack, &mut output)?;
                depth -= 1;
            }
        }
    }

    drain(stack, &mut output, options)?;

    tracing::debug!(output = output.len(), "conversion complete");
    Ok(output)
}

/// Split `input` on ASCII whitespace and convert the resulting tokens.
///
/// Tokens must already be separated: `A*B` is one (invalid) token.
pub fn convert_str(input: &str, options: &ConvertOptions) -> Result<Vec<Token>, ConvertError> {
    let tokens: Vec<&str> = input.split_ascii_whitespace().collect();
    convert(&tokens, options)
}

/// Render a token sequence space-joined, e.g. `A B * C +`.
pub fn to_postfix_string(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_operator(
    op: Operator,
    stack: &mut Vec<Pending>,
    output: &mut Vec<Token>,
) -> Result<(), ConvertError> {
    let info = op.info()?;

    // Equal precedence is settled by the incoming operator's associativity.
    if info.associativity == Associativity::Left {
        while let Some(top) = stack.last().map(Pending::token) {
            // An open group is never compared by precedence.
            if top.is_paren() {
                break;
            }
            if top.precedence()?.unwrap_or(PAREN_PRECEDENCE) < info.precedence {
                break;
            }
            tracing::trace!(popped = %top, incoming = %op, "pop for precedence");
            stack.pop();
            output.push(top);
        }
    }

    tracing::trace!(operator = %op, "push operator");
    stack.push(Pending::Operator(op));
    Ok(())
}

fn close_group(
    position: usize,
    stack: &mut Vec<Pending>,
    output: &mut Vec<Token>,
) -> Result<(), ConvertError> {
    loop {
        match stack.pop() {
            Some(Pending::Operator(op)) => output.push(Token::Operator(op)),
            Some(Pending::Group { position: opened }) => {
                tracing::trace!(opened, closed = position, "group closed");
                return Ok(());
            }
            None => return Err(ConvertError::UnbalancedParentheses { position }),
        }
    }
}

fn drain(
    mut stack: Vec<Pending>,
    output: &mut Vec<Token>,
    options: &ConvertOptions,
) -> Result<(), ConvertError> {
    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push(Token::Operator(op)),
            Pending::Group { position } => match options.unclosed_groups {
                UnclosedGroups::Reject => {
                    return Err(ConvertError::UnclosedParenthesis { position });
                }
                UnclosedGroups::Emit => {
                    tracing::warn!(position, "unclosed '(' emitted into output");
                    output.push(Token::OpenParen);
                }
            },
        }
    }
    Ok(())
}
