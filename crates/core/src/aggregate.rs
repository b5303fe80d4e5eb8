// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Group-by aggregation over flat row sequences.

use std::collections::HashMap;
use std::hash::Hash;

/// Collects values under keys, remembering the order keys were first seen.
#[derive(Debug, Clone)]
pub struct GroupBuilder<K, V> {
    order: Vec<K>,
    groups: HashMap<K, Vec<V>>,
}

impl<K, V> GroupBuilder<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            groups: HashMap::new(),
        }
    }

    /// Appends `value` to the group for `key`, opening the group if needed.
    pub fn push(&mut self, key: K, value: V) {
        if let Some(members) = self.groups.get_mut(&key) {
            members.push(value);
            return;
        }
        self.order.push(key.clone());
        self.groups.insert(key, vec![value]);
    }

    /// Returns the number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether no values were pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Consumes the builder, yielding groups in first-seen order.
    #[must_use]
    pub fn finish(mut self) -> Vec<(K, Vec<V>)> {
        let mut result: Vec<(K, Vec<V>)> = Vec::with_capacity(self.order.len());
        for key in self.order {
            if let Some(members) = self.groups.remove(&key) {
                result.push((key, members));
            }
        }
        result
    }
}

impl<K, V> Default for GroupBuilder<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
