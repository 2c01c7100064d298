//! Structural equality.

use crate::value::Value;

/// Returns true if `a` and `b` have the same structure and values.
///
/// Maps must have identical key sets (order is ignored), lists must have
/// the same length and be equal element by element. Numbers compare by
/// value, so `Int(2)` equals `Float(2.0)`.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    equal_within(a, b, 0.0)
}

/// Like [`deep_equal`], but two numbers are equal when they differ by at
/// most `tolerance`.
pub fn deep_equal_with_tolerance(a: &Value, b: &Value, tolerance: f64) -> bool {
    equal_within(a, b, tolerance)
}

fn equal_within(a: &Value, b: &Value, tolerance: f64) -> bool {
    // Explicit work list so that deep nesting does not grow the call stack.
    let mut pending = vec![(a, b)];
    while let Some((a, b)) = pending.pop() {
        match (a, b) {
            (Value::List(x), Value::List(y)) => {
                if x.len() != y.len() {
                    return false;
                }
                pending.extend(x.iter().zip(y.iter()));
            }
            (Value::Map(x), Value::Map(y)) => {
                if x.len() != y.len() {
                    return false;
                }
                for (key, left) in x.iter() {
                    match y.get(key) {
                        Some(right) => pending.push((left, right)),
                        None => return false,
                    }
                }
            }
            _ => {
                if !scalar_equal(a, b, tolerance) {
                    return false;
                }
            }
        }
    }
    true
}

fn scalar_equal(a: &Value, b: &Value, tolerance: f64) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y || (x - y).abs() <= tolerance,
        (Value::Int(_), Value::Int(_) | Value::Float(_)) | (Value::Float(_), Value::Int(_)) => {
            match (a.as_exact_int(), b.as_exact_int()) {
                (Some(x), Some(y)) => ints_within(x, y, tolerance),
                // One side is a non-integral or out of range float, which no
                // i64 equals exactly.
                _ => match (a.as_f64(), b.as_f64()) {
                    (Some(x), Some(y)) => tolerance > 0.0 && (x - y).abs() <= tolerance,
                    _ => false,
                },
            }
        }
        _ => false,
    }
}

/// Integer distance checked without going through f64, which cannot hold
/// every i64.
fn ints_within(x: i64, y: i64, tolerance: f64) -> bool {
    let distance = (i128::from(x) - i128::from(y)).unsigned_abs();
    // An integral distance is within the tolerance iff it is within its floor.
    distance == 0 || (tolerance >= 0.0 && distance <= tolerance.floor() as u128)
}
