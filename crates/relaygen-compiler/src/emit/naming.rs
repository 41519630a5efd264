//! Collision-free names for generated members.

use indexmap::IndexSet;

/// Hands out identifiers that clash neither with names the contract declares
/// nor with anything handed out before.
///
/// The reserved set is borrowed read-only from the descriptor; only the
/// allocated set grows.
#[derive(Debug)]
pub struct NameAllocator<'a> {
    reserved: IndexSet<&'a str>,
    allocated: IndexSet<String>,
}

impl<'a> NameAllocator<'a> {
    pub fn new(reserved: IndexSet<&'a str>) -> Self {
        Self {
            reserved,
            allocated: IndexSet::new(),
        }
    }

    /// Return `base` if it is free, otherwise the first free `base1`, `base2`, ...
    ///
    /// Terminates because every probe is a distinct string and only finitely
    /// many names are taken.
    pub fn allocate(&mut self, base: &str) -> String {
        if self.is_free(base) {
            self.allocated.insert(base.to_string());
            return base.to_string();
        }

        let mut counter = 1usize;
        loop {
            let name = format!("{base}{counter}");
            if self.is_free(&name) {
                tracing::debug!(base, name = %name, "renamed generated identifier");
                self.allocated.insert(name.clone());
                return name;
            }
            counter += 1;
        }
    }

    pub fn is_free(&self, name: &str) -> bool {
        !self.reserved.contains(name) && !self.allocated.contains(name)
    }

    /// Names handed out so far, in allocation order.
    pub fn allocated(&self) -> impl Iterator<Item = &str> {
        self.allocated.iter().map(String::as_str)
    }
}
