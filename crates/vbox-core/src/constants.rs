use indexmap::IndexMap;

/// The named numeric constants exported by an automation bridge.
///
/// The full constant set of the automation interface is large and varies
/// between releases, so the pool is populated dynamically by the driver
/// rather than enumerated here. Lookups are by exact name.
#[derive(Debug, Clone, Default)]
pub struct ConstantPool {
    values: IndexMap<String, i64>,
}

impl ConstantPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a constant, returning the previous value under that name.
    pub fn insert(&mut self, name: impl Into<String>, value: i64) -> Option<i64> {
        self.values.insert(name.into(), value)
    }

    /// Returns the value held under a name.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    /// Returns the number of constants in the pool.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the pool holds no constants.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the constants in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<N> FromIterator<(N, i64)> for ConstantPool
where
    N: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, i64)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}
