//! Deep merge of TOML tables

use toml::{Table, Value};

/// Merge `overlay` onto `base`: nested tables merge key by key,
/// every other value in `overlay` replaces the one in `base`.
pub fn deep_merge(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        match value {
            Value::Table(incoming) => {
                if let Some(Value::Table(existing)) = base.get_mut(&key) {
                    deep_merge(existing, incoming);
                    continue;
                }
                base.insert(key, Value::Table(incoming));
            }
            other => {
                base.insert(key, other);
            }
        }
    }
}
