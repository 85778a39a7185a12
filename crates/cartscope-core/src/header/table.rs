use std::{borrow::Borrow, collections::HashMap, fmt::Debug, hash::Hash};

use tracing::debug;

/// Label shown for codes missing from a lookup table.
pub const UNKNOWN: &str = "Unknown";

/// Look `code` up in `table`, logging misses under the table's `name`.
pub(crate) fn lookup<K, Q>(
    table: &HashMap<K, &'static str>,
    name: &str,
    code: &Q,
) -> Option<&'static str>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + Debug + ?Sized,
{
    let label = table.get(code).copied();
    if label.is_none() {
        debug!(table = name, ?code, "code missing from lookup table");
    }
    label
}
