/// Running totals keyed by `K`, remembering the order in which keys were first
/// added.
#[derive(Debug, Clone)]
pub struct Aggregate<K, V> {
    index: std::collections::HashMap<K, usize>,
    totals: Vec<(K, V)>,
    sum: V,
}

impl<K, V> Default for Aggregate<K, V>
where
    V: Default,
{
    fn default() -> Self {
        Self {
            index: Default::default(),
            totals: Default::default(),
            sum: Default::default(),
        }
    }
}

impl<K, V> Aggregate<K, V> {
    /// Returns the total over all keys.
    pub fn sum(&self) -> V
    where
        V: Copy,
    {
        self.sum
    }

    pub fn add(&mut self, key: K, value: V)
    where
        K: Clone + Eq + std::hash::Hash,
        V: Copy + Default + std::ops::AddAssign,
    {
        let i = match self.index.get(&key) {
            Some(&i) => i,
            None => {
                self.index.insert(key.clone(), self.totals.len());
                self.totals.push((key, V::default()));
                self.totals.len() - 1
            }
        };
        self.totals[i].1 += value;
        self.sum += value;
    }

    /// Consumes the aggregate, yielding totals in first-seen key order.
    pub fn into_vec(self) -> Vec<(K, V)> {
        self.totals
    }
}
