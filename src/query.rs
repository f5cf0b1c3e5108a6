//! Iterator adapters standing in for a query language: filter, map, fold,
//! group and sort.

use std::fmt;
use std::io::Write;

use itertools::Itertools;

use crate::console::Console;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    pub fn of(n: i32) -> Self {
        if n % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Odd => f.write_str("Odd"),
            Parity::Even => f.write_str("Even"),
        }
    }
}

pub fn evens(numbers: &[i32]) -> Vec<i32> {
    numbers.iter().copied().filter(|n| n % 2 == 0).collect()
}

/// Squares are widened to `i64`, which holds the square of any `i32`.
pub fn squares(numbers: &[i32]) -> Vec<i64> {
    numbers
        .iter()
        .map(|&n| i64::from(n) * i64::from(n))
        .collect()
}

/// Accumulates in `i64` so sums past `i32::MAX` do not overflow.
pub fn sum(numbers: &[i32]) -> i64 {
    numbers.iter().fold(0_i64, |acc, &n| acc + i64::from(n))
}

/// Groups by parity. Groups appear in the order their key is first seen and
/// members keep their input order.
pub fn group_by_parity(numbers: &[i32]) -> Vec<(Parity, Vec<i32>)> {
    let mut groups: Vec<(Parity, Vec<i32>)> = Vec::new();
    for &n in numbers {
        let key = Parity::of(n);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(n),
            None => groups.push((key, vec![n])),
        }
    }
    groups
}

pub fn sorted_descending(numbers: &[i32]) -> Vec<i32> {
    numbers.iter().copied().sorted_by(|a, b| b.cmp(a)).collect()
}

fn bracketed<T: fmt::Display>(numbers: &[T]) -> String {
    format!("[{}]", numbers.iter().join(", "))
}

// =============================================================================
// Section
// =============================================================================

pub fn demo<W: Write>(console: &mut Console<W>) -> Result<()> {
    console.section("Iterator Queries")?;

    let numbers: Vec<i32> = (1..=10).collect();

    console.field("Even numbers", bracketed(&evens(&numbers)))?;
    console.field("Squares", bracketed(&squares(&numbers)))?;
    console.field("Sum", sum(&numbers))?;
    for (parity, members) in group_by_parity(&numbers) {
        console.field(&parity.to_string(), bracketed(&members))?;
    }
    console.field("Sorted descending", bracketed(&sorted_descending(&numbers)))?;
    console.blank()?;
    Ok(())
}
