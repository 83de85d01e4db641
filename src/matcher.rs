//! Loose-typing comparison of stored field values against search terms.
//!
//! The stored value (the subject) decides how the term is interpreted:
//!
//! | Subject | Term handling |
//! |---------|---------------|
//! | number  | coerced to a number (`""` is zero); null matches only zero |
//! | bool    | coerced to a bool (`"true"`/`"1"`, `"false"`/`"0"`/`""`, null is false) |
//! | list    | normalised to a list; every term item must be found in the subject |
//! | string  | rendered as text and compared exactly (null is `""`) |
//! | null    | matches null, `""`, `0` and `false` |
//! | object  | strict equality |

use crate::models::Value;

/// Strategy used by repositories for generic field scans
pub trait ValueMatcher: Send + Sync {
    fn matches(&self, subject: &Value, term: &Value) -> bool;
}

impl<F> ValueMatcher for F
where
    F: Fn(&Value, &Value) -> bool + Send + Sync,
{
    fn matches(&self, subject: &Value, term: &Value) -> bool {
        self(subject, term)
    }
}

/// Default matcher implementing the loose-typing rules
#[derive(Debug, Clone, Copy, Default)]
pub struct LooseMatcher;

impl ValueMatcher for LooseMatcher {
    fn matches(&self, subject: &Value, term: &Value) -> bool {
        values_match(subject, term)
    }
}

/// Compare a stored value against a search term
pub fn values_match(subject: &Value, term: &Value) -> bool {
    match subject {
        Value::Number(n) => match term {
            Value::Null => *n == 0.0,
            _ => term.coerce_number().is_some_and(|t| t == *n),
        },
        Value::Bool(b) => term.coerce_bool().is_some_and(|t| t == *b),
        Value::List(items) => list_contains(items, &term.to_term_list()),
        Value::String(s) => match term {
            Value::String(t) => s == t,
            _ => term.to_string() == *s,
        },
        Value::Null => term.is_empty_term(),
        Value::Object(_) => subject == term,
    }
}

/// Every term item must match some subject item. An empty term list only
/// matches an empty subject.
fn list_contains(subject: &[Value], terms: &[Value]) -> bool {
    if terms.is_empty() {
        return subject.is_empty();
    }

    terms
        .iter()
        .all(|term| subject.iter().any(|item| values_match(item, term)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Value {
        Value::List(items.iter().map(|s| Value::from(*s)).collect())
    }

    #[test]
    fn test_number_subject() {
        assert!(values_match(&Value::from(2.0), &Value::from(2.0)));
        assert!(values_match(&Value::from(3.0), &Value::from("3")));
        assert!(values_match(&Value::from(3.0), &Value::from("3.0")));
        assert!(values_match(&Value::from(0.0), &Value::from("")));
        assert!(values_match(&Value::from(0.0), &Value::Null));
        assert!(!values_match(&Value::from(5.0), &Value::Null));
        assert!(!values_match(&Value::from(0.0), &Value::from("abc")));
        assert!(!values_match(&Value::from(123.0), &Value::from(456.0)));
        assert!(!values_match(&Value::from(1.0), &Value::from(true)));
        assert!(!values_match(&Value::from(1.0), &list(&["1"])));
    }

    #[test]
    fn test_bool_subject() {
        assert!(values_match(&Value::from(false), &Value::from(false)));
        assert!(values_match(&Value::from(true), &Value::from("true")));
        assert!(values_match(&Value::from(true), &Value::from("TRUE")));
        assert!(values_match(&Value::from(true), &Value::from("1")));
        assert!(values_match(&Value::from(true), &Value::from(1.0)));
        assert!(values_match(&Value::from(false), &Value::from("false")));
        assert!(values_match(&Value::from(false), &Value::from("0")));
        assert!(values_match(&Value::from(false), &Value::from(0.0)));
        assert!(values_match(&Value::from(false), &Value::from("")));
        assert!(values_match(&Value::from(false), &Value::Null));
        assert!(!values_match(&Value::from(false), &Value::from(true)));
        assert!(!values_match(&Value::from(true), &Value::from("maybe")));
        assert!(!values_match(&Value::from(false), &Value::from("maybe")));
    }

    #[test]
    fn test_string_subject() {
        assert!(values_match(&Value::from("Mr Caitlin"), &Value::from("Mr Caitlin")));
        assert!(values_match(&Value::from("1"), &Value::from(1.0)));
        assert!(values_match(&Value::from("true"), &Value::from(true)));
        assert!(values_match(&Value::from(""), &Value::Null));
        assert!(!values_match(&Value::from("x"), &Value::Null));
        assert!(!values_match(&Value::from("Mr Caitlin"), &Value::from("mr caitlin")));
    }

    #[test]
    fn test_list_subject_is_order_independent_subset() {
        let cities = list(&["Appleton", "Boston", "Chicago"]);

        assert!(values_match(&cities, &list(&["Appleton"])));
        assert!(values_match(&cities, &list(&["Chicago", "Appleton"])));
        assert!(values_match(&cities, &Value::from("Boston")));
        assert!(values_match(&cities, &Value::from("Chicago,Boston")));
        assert!(!values_match(&cities, &list(&["Appleton", "Denver"])));
        assert!(!values_match(&cities, &Value::from("boston")));
    }

    #[test]
    fn test_list_subject_empty_terms() {
        let abc = list(&["a", "b", "c"]);
        let empty = Value::List(Vec::new());

        assert!(!values_match(&abc, &empty));
        assert!(!values_match(&abc, &Value::from("")));
        assert!(!values_match(&abc, &Value::Null));
        assert!(values_match(&empty, &empty));
        assert!(values_match(&empty, &Value::from("")));
        assert!(values_match(&empty, &Value::Null));
        assert!(!values_match(&empty, &Value::from("a")));
    }

    #[test]
    fn test_list_items_use_loose_rules() {
        let numbers = Value::List(vec![Value::from(1.0), Value::from(2.0)]);

        assert!(values_match(&numbers, &Value::from("2")));
        assert!(values_match(&numbers, &Value::from("2,1")));
        assert!(!values_match(&numbers, &Value::from("3")));
    }

    #[test]
    fn test_null_subject() {
        assert!(values_match(&Value::Null, &Value::Null));
        assert!(values_match(&Value::Null, &Value::from("")));
        assert!(values_match(&Value::Null, &Value::from(0.0)));
        assert!(values_match(&Value::Null, &Value::from(false)));
        assert!(!values_match(&Value::Null, &Value::from("something")));
        assert!(!values_match(&Value::Null, &Value::from(true)));
        assert!(!values_match(&Value::Null, &Value::from(4.0)));
    }

    #[test]
    fn test_object_subject_uses_strict_equality() {
        use crate::models::Record;

        let org = Value::Object(Record::new().with("a", 1.0).with("name", "Enthaze"));

        assert!(values_match(&org, &org.clone()));
        assert!(!values_match(
            &org,
            &Value::Object(Record::new().with("a", 2.0).with("name", "Enthaze"))
        ));
        assert!(!values_match(&org, &Value::from(r#"{"a":1,"name":"Enthaze"}"#)));
        assert!(!values_match(&org, &Value::Null));
    }

    #[test]
    fn test_closure_is_a_matcher() {
        let never = |_: &Value, _: &Value| false;
        assert!(!never.matches(&Value::from("a"), &Value::from("a")));
        assert!(LooseMatcher.matches(&Value::from("a"), &Value::from("a")));
    }
}
