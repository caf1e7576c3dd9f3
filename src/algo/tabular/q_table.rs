use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::EnumCount;

use crate::{abstraction::StateKey, action::Action};

/// Learned values of every action from one state
///
/// Persisted as a map from action symbol to value. Actions missing from a persisted row load
/// as `0.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Action, f64>", into = "BTreeMap<Action, f64>")]
pub struct ActionValues([f64; Action::COUNT]);

impl ActionValues {
    pub fn get(&self, action: Action) -> f64 {
        self.0[action.index()]
    }

    pub fn set(&mut self, action: Action, value: f64) {
        self.0[action.index()] = value;
    }

    /// The largest value in the row
    pub fn max_value(&self) -> f64 {
        self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// The highest valued action, preferring the earliest in [`Action::ALL`] on ties
    pub fn greedy_action(&self) -> Action {
        let mut best = Action::ALL[0];
        for action in Action::ALL.into_iter().skip(1) {
            if self.get(action) > self.get(best) {
                best = action;
            }
        }
        best
    }

    pub fn iter(&self) -> impl Iterator<Item = (Action, f64)> + '_ {
        Action::ALL.into_iter().map(|a| (a, self.get(a)))
    }
}

impl From<BTreeMap<Action, f64>> for ActionValues {
    fn from(map: BTreeMap<Action, f64>) -> Self {
        let mut values = Self::default();
        for (action, value) in map {
            values.set(action, value);
        }
        values
    }
}

impl From<ActionValues> for BTreeMap<Action, f64> {
    fn from(values: ActionValues) -> Self {
        values.iter().collect()
    }
}

/// A Q-table mapping abstracted state keys to per-action values
///
/// Keys are never evicted. The table is kept ordered so that its serialized form is stable
/// across saves.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QTable {
    rows: BTreeMap<StateKey, ActionValues>,
}

impl QTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a state's row, inserting an all-zero row if the state has never been seen
    ///
    /// This is the only read that mutates the table. An existing row is never reset.
    pub fn get_or_insert(&mut self, key: &StateKey) -> &mut ActionValues {
        self.rows.entry(key.clone()).or_default()
    }

    pub fn get(&self, key: &StateKey) -> Option<&ActionValues> {
        self.rows.get(key)
    }

    /// Get the value of a state-action pair, `None` if the state has never been seen
    pub fn value(&self, key: &StateKey, action: Action) -> Option<f64> {
        self.rows.get(key).map(|row| row.get(action))
    }

    pub fn set(&mut self, key: &StateKey, action: Action, value: f64) {
        self.get_or_insert(key).set(action, value);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StateKey, &ActionValues)> {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: [f64; 5]) -> ActionValues {
        ActionValues(values)
    }

    #[test]
    fn greedy_breaks_ties_by_enumeration_order() {
        assert_eq!(row([0.0; 5]).greedy_action(), Action::Up);
        assert_eq!(row([-1.0, 2.0, 2.0, 0.0, 2.0]).greedy_action(), Action::Down);
        assert_eq!(row([-1.0, -1.0, -3.0, -0.5, -0.5]).greedy_action(), Action::Right);
    }

    #[test]
    fn max_value_handles_all_negative_rows() {
        assert_eq!(row([-4.0, -3.0, -9.0, -3.5, -8.0]).max_value(), -3.0);
    }

    #[test]
    fn get_or_insert_is_idempotent() {
        let mut table = QTable::new();
        let key = StateKey::from("________");

        assert_eq!(*table.get_or_insert(&key), ActionValues::default());
        table.get_or_insert(&key).set(Action::Left, 1.5);
        assert_eq!(table.get_or_insert(&key).get(Action::Left), 1.5);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn reads_do_not_insert() {
        let table = QTable::new();
        let key = StateKey::from("C_______");
        assert!(table.get(&key).is_none());
        assert!(table.value(&key, Action::Up).is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn serialized_rows_use_action_symbols() {
        let mut table = QTable::new();
        table.set(&StateKey::from("_C______"), Action::Up, -3.6);

        let json: serde_json::Value = serde_json::to_value(&table).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "_C______": { "u": -3.6, "d": 0.0, "l": 0.0, "r": 0.0, "_": 0.0 }
            })
        );
    }

    #[test]
    fn partial_rows_fill_with_zero() {
        let table: QTable = serde_json::from_str(r#"{ "________": { "u": 2.5 } }"#).unwrap();
        let values = table.get(&StateKey::from("________")).unwrap();
        assert_eq!(values.get(Action::Up), 2.5);
        assert_eq!(values.get(Action::Stay), 0.0);
    }
}
