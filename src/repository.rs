use std::io::Write;
use std::slice;

use crate::console::Console;
use crate::error::{Result, TourError};
use crate::person::Person;

/// Append-only, insertion-ordered store with predicate lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Repository<T> {
    items: Vec<T>,
}

impl<T> Default for Repository<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Repository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Appends `item`, rejecting an absent value.
    pub fn try_add(&mut self, item: Option<T>) -> Result<()> {
        let item = item.ok_or(TourError::MissingItem { param: "item" })?;
        self.add(item);
        Ok(())
    }

    /// First item, in insertion order, that satisfies `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|&item| predicate(item))
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a Repository<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Repository<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Section
// =============================================================================

pub fn demo<W: Write>(console: &mut Console<W>) -> Result<()> {
    console.section("Generics")?;

    let mut repo = Repository::new();
    repo.add(Person::new("Alice", 25).with_email("alice@example.com"));
    repo.add(Person::new("Bob", 30).with_email("bob@example.com"));
    repo.add(Person::new("Charlie", 17));

    let adult = repo.find(Person::is_adult);
    console.field(
        "Found adult",
        adult.map(|p| p.name.as_str()).unwrap_or("<none>"),
    )?;
    console.field("Total persons", repo.len())?;

    if let Err(e) = repo.try_add(None) {
        console.field("Rejected add", e)?;
    }
    console.field("Total persons after rejected add", repo.len())?;
    console.blank()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Repository<Person> {
        let mut repo = Repository::new();
        repo.add(Person::new("Alice", 25));
        repo.add(Person::new("Bob", 30));
        repo.add(Person::new("Charlie", 17));
        repo
    }

    #[test]
    fn test_find_returns_first_match_in_insertion_order() {
        let repo = people();
        let adult = repo.find(|p| p.age >= 18).unwrap();
        assert_eq!(adult.name, "Alice");
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn test_find_no_match() {
        let repo = people();
        assert!(repo.find(|p| p.age > 100).is_none());
        assert!(Repository::<Person>::new().find(|_| true).is_none());
    }

    #[test]
    fn test_try_add_rejects_absent_item() {
        let mut repo = people();
        let result = repo.try_add(None);
        assert!(matches!(result, Err(TourError::MissingItem { param: "item" })));
        assert_eq!(repo.len(), 3);

        repo.try_add(Some(Person::new("Dana", 70))).unwrap();
        assert_eq!(repo.len(), 4);
    }

    #[test]
    fn test_iteration_preserves_order() {
        let repo = people();
        let names: Vec<&str> = repo.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);

        let mut count = 0;
        for _ in &repo {
            count += 1;
        }
        assert_eq!(count, repo.len());
    }

    #[test]
    fn test_collect_into_repository() {
        let repo: Repository<i32> = (1..=4).collect();
        assert_eq!(repo.len(), 4);
        assert_eq!(repo.find(|n| n % 2 == 0), Some(&2));
        assert!(!repo.is_empty());
    }

    #[test]
    fn test_demo_output() {
        let mut console = Console::buffer();
        demo(&mut console).unwrap();
        let output = console.contents();

        assert!(output.contains("Found adult: Alice\n"));
        assert!(output.contains("Total persons: 3\n"));
        assert!(output.contains("Total persons after rejected add: 3\n"));
    }
}
