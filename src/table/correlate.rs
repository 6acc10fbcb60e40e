use crate::error::RowpickError;

/// Two equal-length columns whose matching positions form one logical row.
///
/// Lengths are validated once at construction; a mismatch means the caller
/// scraped the table inconsistently and is surfaced immediately rather than
/// silently truncated.
#[derive(Debug, Clone)]
pub struct ParallelTable<V> {
    keys: Vec<String>,
    values: Vec<V>,
}

impl<V> ParallelTable<V> {
    /// Pair a key column with a value column.
    pub fn new(keys: Vec<String>, values: Vec<V>) -> Result<Self, RowpickError> {
        if keys.len() != values.len() {
            return Err(RowpickError::ColumnMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        Ok(Self { keys, values })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Value cell of the first row whose key satisfies `predicate`.
    ///
    /// First match wins. The predicate runs once per row, in row order, up
    /// to and including the matching row; it may carry side effects.
    pub fn find_value<P>(&self, predicate: P) -> Option<&V>
    where
        P: FnMut(&str) -> bool,
    {
        self.find_row(predicate).map(|(_, _, value)| value)
    }

    /// Like [`ParallelTable::find_value`], but also yields the row index
    /// and the key cell that matched.
    pub fn find_row<P>(&self, mut predicate: P) -> Option<(usize, &str, &V)>
    where
        P: FnMut(&str) -> bool,
    {
        self.keys.iter().enumerate().find_map(|(index, key)| {
            if predicate(key) {
                log::debug!("row {} matched: \"{}\"", index, key);
                Some((index, key.as_str(), &self.values[index]))
            } else {
                None
            }
        })
    }
}

/// One-shot correlation over two raw columns.
///
/// Checks the structural invariant, then scans `keys` in order and returns
/// the value paired with the first key satisfying `predicate`. `Ok(None)`
/// when no row matches.
pub fn lookup<'a, V, P>(
    keys: &[String],
    values: &'a [V],
    mut predicate: P,
) -> Result<Option<&'a V>, RowpickError>
where
    P: FnMut(&str) -> bool,
{
    if keys.len() != values.len() {
        return Err(RowpickError::ColumnMismatch {
            keys: keys.len(),
            values: values.len(),
        });
    }

    let matched = keys
        .iter()
        .enumerate()
        .find_map(|(index, key)| predicate(key).then(|| &values[index]));

    Ok(matched)
}

#[cfg(test)]
#[path = "correlate_tests.rs"]
mod correlate_tests;
