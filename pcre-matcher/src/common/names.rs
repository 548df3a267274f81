use std::collections::HashMap;

/// Maps capture group names to their 1-based indices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamedGroupTable {
    names: HashMap<String, usize>,
}

impl NamedGroupTable {
    /// Decodes the engine's name table.
    ///
    /// Each entry is `entry_size` bytes: the group number as a big-endian `u16`,
    /// then the NUL terminated name. A duplicated name keeps its lowest group number.
    pub(crate) fn from_raw(table: &[u8], entry_size: usize) -> Self {
        let mut names = HashMap::new();

        if entry_size > 2 {
            for entry in table.chunks_exact(entry_size) {
                let index = usize::from(entry[0]) << 8 | usize::from(entry[1]);
                let name = &entry[2..];
                let name = &name[..name.iter().position(|&b| b == 0).unwrap_or(name.len())];

                names
                    .entry(String::from_utf8_lossy(name).into_owned())
                    .and_modify(|i: &mut usize| *i = (*i).min(index))
                    .or_insert(index);
            }
        }

        NamedGroupTable { names }
    }

    /// Returns the index of the named group.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.names.get(name).copied()
    }

    /// Returns the number of distinct names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the pattern has no named groups.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// An iterator over the names and their indices, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.names.iter().map(|(name, &index)| (name.as_str(), index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_table() {
        let table = b"\x00\x02day\x00\x00\x00\x01year\x00\x00\x03year\x00";
        let names = NamedGroupTable::from_raw(table, 7);

        assert_eq!(names.len(), 2);
        assert_eq!(names.get("day"), Some(2));
        assert_eq!(names.get("year"), Some(1));
        assert_eq!(names.get("month"), None);
    }

    #[test]
    fn test_empty_name_table() {
        let names = NamedGroupTable::from_raw(&[], 0);

        assert!(names.is_empty());
        assert_eq!(names.iter().count(), 0);
    }
}
