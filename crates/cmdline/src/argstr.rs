// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! printf-style interpolation for argstr and name templates.
//!
//! Supports `%s`, `%d`, `%i`, `%f`, `%e`, `%g` (and upper-case variants)
//! with optional `-`/`0` flags, width and precision, plus `%%`.

use crate::error::ArgstrError;
use nw_core::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Conversion {
    left: bool,
    zero: bool,
    width: Option<usize>,
    precision: Option<usize>,
    kind: char,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Convert(Conversion),
}

/// True if `argstr` contains a `%` directive.
pub fn has_placeholder(argstr: &str) -> bool {
    argstr.contains('%')
}

/// Substitute `values` into `argstr`, one value per placeholder.
pub fn interpolate(argstr: &str, values: &[&Value]) -> Result<String, ArgstrError> {
    let pieces = parse(argstr)?;
    let expected = pieces.iter().filter(|p| matches!(p, Piece::Convert(_))).count();
    if expected != values.len() {
        return Err(ArgstrError::ArgumentCount {
            argstr: argstr.to_string(),
            expected,
            found: values.len(),
        });
    }

    let mut out = String::new();
    let mut values = values.iter();
    for piece in pieces {
        match piece {
            Piece::Literal(text) => out.push_str(&text),
            Piece::Convert(conv) => {
                let Some(value) = values.next() else { break };
                out.push_str(&render(conv, value)?);
            }
        }
    }
    Ok(out)
}

fn parse(argstr: &str) -> Result<Vec<Piece>, ArgstrError> {
    let mut pieces = Vec::new();
    let mut literal = String::new();
    let mut chars = argstr.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            literal.push(ch);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            literal.push('%');
            continue;
        }

        let mut conv =
            Conversion { left: false, zero: false, width: None, precision: None, kind: 's' };
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => conv.left = true,
                '0' => conv.zero = true,
                _ => break,
            }
            chars.next();
        }
        conv.width = read_number(&mut chars);
        if chars.peek() == Some(&'.') {
            chars.next();
            conv.precision = Some(read_number(&mut chars).unwrap_or(0));
        }
        conv.kind = match chars.next() {
            Some(k @ ('s' | 'd' | 'i' | 'f' | 'F' | 'e' | 'E' | 'g' | 'G')) => k,
            Some(other) => {
                return Err(ArgstrError::UnsupportedConversion {
                    conversion: other,
                    argstr: argstr.to_string(),
                })
            }
            None => return Err(ArgstrError::Incomplete { argstr: argstr.to_string() }),
        };

        if !literal.is_empty() {
            pieces.push(Piece::Literal(std::mem::take(&mut literal)));
        }
        pieces.push(Piece::Convert(conv));
    }
    if !literal.is_empty() {
        pieces.push(Piece::Literal(literal));
    }
    Ok(pieces)
}

fn read_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut digits = String::new();
    while let Some(&d) = chars.peek() {
        if !d.is_ascii_digit() {
            break;
        }
        digits.push(d);
        chars.next();
    }
    digits.parse().ok()
}

fn render(conv: Conversion, value: &Value) -> Result<String, ArgstrError> {
    let number = || match value {
        Value::Int(i) => Ok(*i as f64),
        Value::Float(f) => Ok(*f),
        Value::Bool(b) => Ok(f64::from(u8::from(*b))),
        other => Err(ArgstrError::Type { conversion: conv.kind, value_type: other.type_name() }),
    };

    let text = match conv.kind {
        's' => {
            let text = value.to_string();
            match conv.precision {
                Some(p) => text.chars().take(p).collect(),
                None => text,
            }
        }
        'd' | 'i' => match value {
            Value::Int(i) => i.to_string(),
            Value::Bool(b) => u8::from(*b).to_string(),
            Value::Float(f) => (f.trunc() as i64).to_string(),
            other => {
                return Err(ArgstrError::Type {
                    conversion: conv.kind,
                    value_type: other.type_name(),
                })
            }
        },
        'f' | 'F' => format!("{:.*}", conv.precision.unwrap_or(6), number()?),
        'e' => format_exp(number()?, conv.precision.unwrap_or(6)),
        'E' => format_exp(number()?, conv.precision.unwrap_or(6)).to_uppercase(),
        'g' => format_general(number()?, conv.precision.unwrap_or(6)),
        _ => format_general(number()?, conv.precision.unwrap_or(6)).to_uppercase(),
    };
    Ok(pad(conv, text))
}

fn pad(conv: Conversion, text: String) -> String {
    let Some(width) = conv.width else { return text };
    let len = text.chars().count();
    if len >= width {
        return text;
    }
    let fill = width - len;
    if conv.left {
        format!("{text}{}", " ".repeat(fill))
    } else if conv.zero && conv.kind != 's' {
        match text.strip_prefix('-') {
            Some(digits) => format!("-{}{digits}", "0".repeat(fill)),
            None => format!("{}{text}", "0".repeat(fill)),
        }
    } else {
        format!("{}{text}", " ".repeat(fill))
    }
}

/// `1.500000e+02` style: signed exponent of at least two digits.
fn format_exp(x: f64, precision: usize) -> String {
    if !x.is_finite() {
        return non_finite(x);
    }
    let raw = format!("{:.*e}", precision, x);
    let Some((mantissa, exp)) = raw.split_once('e') else { return raw };
    let exp: i32 = exp.parse().unwrap_or(0);
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exp.abs())
}

/// Shortest of fixed and exponent notation with `precision` significant digits.
fn format_general(x: f64, precision: usize) -> String {
    if !x.is_finite() {
        return non_finite(x);
    }
    if x == 0.0 {
        return "0".to_string();
    }
    let precision = precision.max(1);
    let exp = format!("{:.*e}", precision - 1, x)
        .split_once('e')
        .and_then(|(_, e)| e.parse::<i32>().ok())
        .unwrap_or(0);

    if exp < -4 || exp >= precision as i32 {
        let formatted = format_exp(x, precision - 1);
        match formatted.split_once('e') {
            Some((mantissa, exp)) => format!("{}e{exp}", trim_zeros(mantissa)),
            None => formatted,
        }
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, x)).to_string()
    }
}

fn trim_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

fn non_finite(x: f64) -> String {
    if x.is_nan() {
        "nan".to_string()
    } else if x > 0.0 {
        "inf".to_string()
    } else {
        "-inf".to_string()
    }
}

#[cfg(test)]
#[path = "argstr_tests.rs"]
mod tests;
