//! Operand Grammar
//!
//! Lexical rules for each operand role. Every rule is a plain predicate over a
//! single whitespace-free token, so each can be exercised on its own.

use crate::error::OperandDefect;
use crate::isa::{OperandKind, OperandRole};

const FRAMES: [&str; 3] = ["LF", "TF", "GF"];
const TYPES: [&str; 3] = ["int", "string", "bool"];
const NAME_SPECIALS: &str = "_-$&%*!?";

/// Escape marker inside `string@` constants
const ESCAPE: char = '\\';

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || NAME_SPECIALS.contains(c)
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit()
}

/// `NAME`: identifier used by labels and variable names
pub fn is_name(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if is_name_start(first) => chars.all(is_name_char),
        _ => false,
    }
}

pub fn is_label(token: &str) -> bool {
    is_name(token)
}

/// `FRAME@NAME`
pub fn is_var(token: &str) -> bool {
    match token.split_once('@') {
        Some((frame, name)) => FRAMES.contains(&frame) && is_name(name),
        None => false,
    }
}

/// `int`, `string` or `bool`; `nil` is not a readable type
pub fn is_type(token: &str) -> bool {
    TYPES.contains(&token)
}

fn is_int_literal(value: &str) -> bool {
    if value == "nil" {
        return true;
    }
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_bool_literal(value: &str) -> bool {
    matches!(value, "true" | "false" | "nil")
}

/// Zero or more of: `\ddd` escape, or any character but the escape marker.
/// C0 control characters cannot appear in XML 1.0 text and must be written as escapes.
fn is_string_literal(value: &str) -> bool {
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c < ' ' {
            return false;
        }
        if c == ESCAPE {
            for _ in 0..3 {
                match chars.next() {
                    Some(d) if d.is_ascii_digit() => {}
                    _ => return false,
                }
            }
        }
    }
    true
}

/// Classify a typed constant, returning its kind and the value after `@`
pub fn classify_constant(token: &str) -> Option<(OperandKind, &str)> {
    let (prefix, value) = token.split_once('@')?;
    let (kind, valid) = match prefix {
        "int" => (OperandKind::Int, is_int_literal(value)),
        "bool" => (OperandKind::Bool, is_bool_literal(value)),
        "string" => (OperandKind::String, is_string_literal(value)),
        "nil" => (OperandKind::Nil, value == "nil"),
        _ => return None,
    };
    valid.then_some((kind, value))
}

/// Classify a symbol operand: a variable, or a typed constant
pub fn classify_symbol(token: &str) -> Option<(OperandKind, &str)> {
    if is_var(token) {
        return Some((OperandKind::Var, token));
    }
    classify_constant(token)
}

/// Validate `token` against the grammar of `role`.
///
/// On success returns the resolved kind and the text to emit: the token
/// itself, except for constants whose `TYPE@` prefix is dropped.
pub fn classify(role: OperandRole, token: &str) -> Result<(OperandKind, &str), OperandDefect> {
    match role {
        OperandRole::Label => is_label(token)
            .then_some((OperandKind::Label, token))
            .ok_or(OperandDefect::Label),
        OperandRole::Var => is_var(token)
            .then_some((OperandKind::Var, token))
            .ok_or(OperandDefect::Variable),
        OperandRole::Type => is_type(token)
            .then_some((OperandKind::Type, token))
            .ok_or(OperandDefect::Type),
        OperandRole::Symbol => classify_symbol(token).ok_or(OperandDefect::Symbol),
    }
}
