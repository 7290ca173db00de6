use std::cmp::Ordering;

use crate::Value;

// Numbers compare by numeric value whether they are integers or doubles. A
// NaN is never equal to anything, itself included.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Absent, Value::Absent) | (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Sequence(a), Value::Sequence(b)) => a == b,
            (Value::Mapping(a), Value::Mapping(b)) => a == b,
            _ => compare_numbers(self, other) == Some(Ordering::Equal),
        }
    }
}

/// Values of the same kind order naturally; numbers order across integer
/// and double. Sequences and mappings only compare equal to an equal
/// value, as do absent and null. Anything else is incomparable.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Absent, Value::Absent) | (Value::Null, Value::Null) => Some(Ordering::Equal),
            (Value::Boolean(a), Value::Boolean(b)) => a.partial_cmp(b),
            (Value::String(a), Value::String(b)) => a.partial_cmp(b),
            (Value::Sequence(_), Value::Sequence(_)) | (Value::Mapping(_), Value::Mapping(_)) => {
                (self == other).then_some(Ordering::Equal)
            }
            _ => compare_numbers(self, other),
        }
    }
}

fn compare_numbers(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (Value::Double(a), Value::Double(b)) => a.partial_cmp(b),
        (Value::Integer(i), Value::Double(d)) => compare_integer_double(*i, *d),
        (Value::Double(d), Value::Integer(i)) => {
            compare_integer_double(*i, *d).map(Ordering::reverse)
        }
        _ => None,
    }
}

// 2^63, the first double past i64::MAX
const I64_END: f64 = 9_223_372_036_854_775_808.0;

// exact, unlike `i as f64`, which rounds above 2^53
fn compare_integer_double(i: i64, d: f64) -> Option<Ordering> {
    if d.is_nan() {
        return None;
    }
    if d >= I64_END {
        return Some(Ordering::Less);
    }
    if d < -I64_END {
        return Some(Ordering::Greater);
    }
    let whole = d.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => 0f64.partial_cmp(&(d - whole)),
        ordering => Some(ordering),
    }
}
