// The library traits for dynamic values.

use underbar_value::Value;

use crate::error;
use crate::sort::sort_by;
use crate::traits::{no_arguments, Methods, Record, Truthy};

/// Mappings look properties up by key. Sequences take a property name that
/// is a decimal index. An explicitly absent entry counts as missing.
impl Record for Value {
    type Value = Value;

    fn property(&self, name: &str) -> Option<&Value> {
        let found = match self {
            Value::Mapping(entries) => entries.get(name),
            Value::Sequence(items) => name.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        found.filter(|value| !value.is_absent())
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Absent | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Integer(i) => *i != 0,
            Value::Double(d) => d.is_truthy(),
            Value::String(s) => !s.is_empty(),
            Value::Sequence(_) | Value::Mapping(_) => true,
        }
    }
}

/// Sequences: `push`, `pop`, `reverse`, `sort`, `clear`.
/// Mappings: `clear`.
/// Strings: `to_uppercase`, `to_lowercase`, `clear`.
///
/// `sort` orders the way [`sort_by`] does, so incomparable values keep
/// their relative order.
impl Methods for Value {
    type Arg = Value;

    fn call_method(&mut self, name: &str, args: &[Value]) -> error::Result<()> {
        let receiver = self.type_name();
        match (self, name) {
            (Value::Absent | Value::Null, _) => {
                return Err(error::Error::NotInvocable { receiver });
            }
            (Value::Sequence(items), "push") => items.extend_from_slice(args),
            (Value::Sequence(items), "pop") => {
                no_arguments(name, args)?;
                items.pop();
            }
            (Value::Sequence(items), "reverse") => {
                no_arguments(name, args)?;
                items.reverse();
            }
            (Value::Sequence(items), "sort") => {
                no_arguments(name, args)?;
                *items = sort_by(items.as_slice(), |value| Some(value));
            }
            (Value::Sequence(items), "clear") => {
                no_arguments(name, args)?;
                items.clear();
            }
            (Value::Mapping(entries), "clear") => {
                no_arguments(name, args)?;
                entries.clear();
            }
            (Value::String(s), "to_uppercase") => {
                no_arguments(name, args)?;
                *s = s.to_uppercase();
            }
            (Value::String(s), "to_lowercase") => {
                no_arguments(name, args)?;
                *s = s.to_lowercase();
            }
            (Value::String(s), "clear") => {
                no_arguments(name, args)?;
                s.clear();
            }
            _ => {
                return Err(error::Error::MethodNotFound {
                    method: name.to_string(),
                    receiver,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_of_mapping() {
        let value = Value::mapping([("a", Value::from(1)), ("gone", Value::Absent)]);
        assert_eq!(value.property("a"), Some(&Value::from(1)));
        assert_eq!(value.property("gone"), None);
        assert_eq!(value.property("b"), None);
    }

    #[test]
    fn test_property_of_sequence() {
        let value = Value::sequence(["x", "y"]);
        assert_eq!(value.property("1"), Some(&Value::from("y")));
        assert_eq!(value.property("2"), None);
        assert_eq!(value.property("length"), None);
    }

    #[test]
    fn test_truthiness() {
        let falsy = [
            Value::Absent,
            Value::Null,
            Value::from(false),
            Value::from(0),
            Value::from(0.0),
            Value::from(f64::NAN),
            Value::from(""),
        ];
        assert!(falsy.iter().all(|value| !value.is_truthy()));
        let truthy = [
            Value::from(true),
            Value::from(-1),
            Value::from("yes"),
            Value::sequence(Vec::<Value>::new()),
            Value::mapping(Vec::<(String, Value)>::new()),
        ];
        assert!(truthy.iter().all(Truthy::is_truthy));
    }

    #[test]
    fn test_sort_method() {
        let mut value = Value::sequence([3, 1, 2]);
        value.call_method("sort", &[]).unwrap();
        assert_eq!(value, Value::sequence([1, 2, 3]));
    }

    #[test]
    fn test_string_method() {
        let mut value = Value::from("Moe");
        value.call_method("to_uppercase", &[]).unwrap();
        assert_eq!(value, Value::from("MOE"));
    }

    #[test]
    fn test_method_missing_for_kind() {
        let mut value = Value::from(3);
        assert_eq!(
            value.call_method("push", &[Value::from(1)]),
            Err(error::Error::MethodNotFound {
                method: "push".to_string(),
                receiver: "integer",
            })
        );
    }

    #[test]
    fn test_method_on_null() {
        let mut value = Value::Null;
        assert_eq!(
            value.call_method("sort", &[]),
            Err(error::Error::NotInvocable { receiver: "null" })
        );
    }
}
