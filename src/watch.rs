//! Change notification for map assignments.

use crate::value::{Map, Value};

/// Watched wraps a map and reports every assignment made through it.
///
/// [`Watched::set`] stores the value first and then calls the callback with
/// the key and the stored value. If the callback fails, its error is
/// returned to the caller and the assignment stays in place.
pub struct Watched<'a, F> {
    target: &'a mut Map,
    on_set: F,
}

/// Wraps `target` so that each [`Watched::set`] calls `on_set(key, value)`.
pub fn watch<F>(target: &mut Map, on_set: F) -> Watched<'_, F> {
    Watched::new(target, on_set)
}

impl<'a, F> Watched<'a, F> {
    /// Creates a new watcher over `target`.
    pub fn new(target: &'a mut Map, on_set: F) -> Self {
        Watched { target, on_set }
    }

    /// Assigns `value` to `key`, then notifies the callback.
    ///
    /// Returns the previous value on success.
    pub fn set<E>(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, E>
    where
        F: FnMut(&str, &Value) -> Result<(), E>,
    {
        let key = key.into();
        let previous = self.target.set(key.clone(), value);
        if let Some(stored) = self.target.get(&key) {
            (self.on_set)(&key, stored)?;
        }
        Ok(previous)
    }

    /// Returns the current value of `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.target.get(key)
    }

    /// Returns the wrapped map.
    pub fn target(&self) -> &Map {
        &*self.target
    }

    /// Ends watching and returns the wrapped map.
    pub fn into_inner(self) -> &'a mut Map {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::convert::Infallible;

    fn map(json: serde_json::Value) -> Map {
        Value::from(json).as_map().cloned().unwrap_or_default()
    }

    #[test]
    fn test_watch_reports_each_assignment() {
        let mut data = map(json!({"a": 1, "b": 2}));
        let mut log = Vec::new();
        {
            let mut watcher = watch(&mut data, |key: &str, value: &Value| {
                log.push(format!("Key {} changed to {}", key, value));
                Ok::<(), Infallible>(())
            });
            assert_eq!(watcher.set("a", 3), Ok(Some(Value::Int(1))));
            assert_eq!(watcher.set("b", 4), Ok(Some(Value::Int(2))));
            assert_eq!(watcher.set("c", "new"), Ok(None));
            assert_eq!(watcher.get("a"), Some(&Value::Int(3)));
        }
        assert_eq!(
            log,
            vec!["Key a changed to 3", "Key b changed to 4", r#"Key c changed to "new""#]
        );
        assert_eq!(data, map(json!({"a": 3, "b": 4, "c": "new"})));
    }

    #[test]
    fn test_callback_sees_stored_value() {
        let mut data = Map::new();
        let mut watcher = Watched::new(&mut data, |key: &str, value: &Value| {
            if key == "n" && value.as_int() == Some(5) {
                Ok(())
            } else {
                Err(format!("unexpected {}={}", key, value))
            }
        });
        assert!(watcher.set("n", 5).is_ok());
        assert_eq!(watcher.target().len(), 1);
    }

    #[test]
    fn test_failing_callback_keeps_assignment() {
        let mut data = map(json!({"limit": 10}));
        let mut watcher = watch(&mut data, |_: &str, value: &Value| {
            if value.as_int().is_some_and(|n| n > 100) {
                Err("limit too large")
            } else {
                Ok(())
            }
        });
        assert_eq!(watcher.set("limit", 500), Err("limit too large"));
        let data = watcher.into_inner();
        assert_eq!(data.get("limit"), Some(&Value::Int(500)));
    }
}
