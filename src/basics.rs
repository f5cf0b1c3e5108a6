//! Scalar types, enums and the standard collections.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;
use std::io::Write;
use std::time::Duration;

use chrono::Local;
use itertools::Itertools;

use crate::config::{APPROX_PI, APP_NAME, VERSION};
use crate::console::Console;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    Pending,
    Approved,
    Rejected,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Pending, Status::Approved, Status::Rejected];
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Pending => "Pending",
            Status::Approved => "Approved",
            Status::Rejected => "Rejected",
        };
        f.write_str(name)
    }
}

/// Currency amount held as whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

/// Renders a duration as `hh:mm:ss`, with a leading `d.` once it spans days.
pub fn format_hms(duration: Duration) -> String {
    let total = duration.as_secs();
    let (days, rest) = (total / 86_400, total % 86_400);
    let (hours, minutes, seconds) = (rest / 3600, rest % 3600 / 60, rest % 60);
    if days > 0 {
        format!("{days}.{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}

fn bracketed<T: fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    format!("[{}]", items.into_iter().join(", "))
}

// =============================================================================
// Sections
// =============================================================================

pub fn demo_types<W: Write>(console: &mut Console<W>) -> Result<()> {
    console.section("Basic Data Types")?;

    let text = "Hello, Rust World!";
    let integer: i32 = 42;
    let double: f64 = APPROX_PI;
    let boolean = true;
    let ch = 'R';
    let money = Money::from_cents(9999);
    let now = Local::now();
    let duration = Duration::from_secs(2 * 60 * 60);

    console.field("App", format!("{APP_NAME} v{VERSION}"))?;
    console.field("String", text)?;
    console.field("Integer", integer)?;
    console.field("Double", double)?;
    console.field("Boolean", boolean)?;
    console.field("Char", ch)?;
    console.field("Money", money)?;
    console.field("DateTime", now.format("%Y-%m-%d %H:%M:%S"))?;
    console.field("Duration", format_hms(duration))?;
    console.field("Status", bracketed(Status::ALL))?;
    console.blank()?;
    Ok(())
}

pub fn demo_collections<W: Write>(console: &mut Console<W>) -> Result<()> {
    console.section("Collections")?;

    let array = [1, 2, 3, 4, 5];
    console.field("Array", bracketed(array))?;

    let mut list = vec![10, 20, 30, 40, 50];
    list.push(60);
    console.field("Vec", bracketed(&list))?;

    let map = BTreeMap::from([("one", 1), ("two", 2), ("three", 3)]);
    console.field(
        "BTreeMap",
        map.iter().map(|(k, v)| format!("{k}={v}")).join(", "),
    )?;

    let set: BTreeSet<i32> = [1, 2, 3, 3, 4, 4, 5].into_iter().collect();
    console.field("BTreeSet", bracketed(&set))?;

    let mut queue = VecDeque::from(["first", "second", "third"]);
    if let Some(front) = queue.pop_front() {
        console.field("VecDeque", front)?;
    }

    let mut stack = vec![1, 2, 3];
    if let Some(top) = stack.pop() {
        console.field("Stack", top)?;
    }
    console.blank()?;
    Ok(())
}
