//! `Person`, a value record: equality comes from the fields, and "mutation"
//! means building a modified copy.

use std::fmt;
use std::io::Write;

use crate::console::Console;
use crate::error::Result;

pub const ADULT_AGE: u32 = 18;
pub const SENIOR_AGE: u32 = 65;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub email: Option<String>,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            email: None,
        }
    }

    pub fn with_email(self, email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..self
        }
    }

    /// Copy of `self` with `age` replaced.
    pub fn with_age(&self, age: u32) -> Self {
        Self {
            age,
            ..self.clone()
        }
    }

    pub fn celebrate_birthday(&self) -> Self {
        self.with_age(self.age.saturating_add(1))
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    pub fn age_band(&self) -> AgeBand {
        AgeBand::of(self.age)
    }

    pub fn greet(&self) -> String {
        format!("Hello, I'm {} and I'm {} years old!", self.name, self.age)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person {{ Name = {}, Age = {}, Email = {} }}",
            self.name,
            self.age,
            self.email.as_deref().unwrap_or("")
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBand {
    Minor,
    Adult,
    Senior,
}

impl AgeBand {
    pub fn of(age: u32) -> Self {
        match age {
            0..ADULT_AGE => AgeBand::Minor,
            ADULT_AGE..SENIOR_AGE => AgeBand::Adult,
            _ => AgeBand::Senior,
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AgeBand::Minor => "Minor",
            AgeBand::Adult => "Adult",
            AgeBand::Senior => "Senior",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Section
// =============================================================================

pub fn demo<W: Write>(console: &mut Console<W>) -> Result<()> {
    console.section("Records")?;

    let person1 = Person::new("Alice", 25).with_email("alice@example.com");
    let person2 = Person::new("Alice", 25).with_email("alice@example.com");
    let person3 = person1.with_age(26);

    console.field("Person1", &person1)?;
    console.field("Person2", &person2)?;
    console.field("Person3", &person3)?;
    console.field("Person1 == Person2", person1 == person2)?;
    console.field("Person1 == Person3", person1 == person3)?;
    console.field("Person1.is_adult()", person1.is_adult())?;
    console.field("Person1.greet()", person1.greet())?;
    console.field(
        "Person1.celebrate_birthday()",
        person1.celebrate_birthday().greet(),
    )?;
    console.blank()?;
    Ok(())
}
