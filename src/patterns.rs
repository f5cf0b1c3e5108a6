//! Matching on runtime types through `Any`, and on ranges through `match`.

use std::any::Any;
use std::io::Write;

use crate::console::Console;
use crate::error::Result;
use crate::person::Person;

/// Classifies a value by its concrete type.
pub fn describe_value(value: &dyn Any) -> String {
    if let Some(i) = value.downcast_ref::<i32>() {
        format!("Integer: {i}")
    } else if let Some(s) = value.downcast_ref::<String>() {
        format!("String: {s}")
    } else if let Some(s) = value.downcast_ref::<&str>() {
        format!("String: {s}")
    } else if let Some(d) = value.downcast_ref::<f64>() {
        format!("Double: {d}")
    } else {
        "Unknown type".to_string()
    }
}

// =============================================================================
// Section
// =============================================================================

pub fn demo<W: Write>(console: &mut Console<W>) -> Result<()> {
    console.section("Pattern Matching")?;

    let value: Box<dyn Any> = Box::new(42_i32);

    if let Some(number) = value.downcast_ref::<i32>() {
        console.line(format!("It's an integer: {number}"))?;
    }
    console.line(describe_value(value.as_ref()))?;

    let person = Person::new("Alice", 25);
    let category = match person {
        Person { age: 0..=17, .. } => "Minor",
        Person { age: 18..=64, .. } => "Adult",
        Person { age: 65.., .. } => "Senior",
    };
    console.field("Person category", category)?;
    console.field("Person band", person.age_band())?;
    console.blank()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_value_by_type() {
        assert_eq!(describe_value(&42_i32), "Integer: 42");
        assert_eq!(describe_value(&"hi".to_string()), "String: hi");
        assert_eq!(describe_value(&"hi"), "String: hi");
        assert_eq!(describe_value(&2.5_f64), "Double: 2.5");
        assert_eq!(describe_value(&7_u8), "Unknown type");
        assert_eq!(describe_value(&vec![1, 2]), "Unknown type");
    }

    #[test]
    fn test_boxed_value_is_classified_by_contents() {
        let boxed: Box<dyn Any> = Box::new(3.0_f64);
        assert_eq!(describe_value(boxed.as_ref()), "Double: 3");
    }

    #[test]
    fn test_demo_output() {
        let mut console = Console::buffer();
        demo(&mut console).unwrap();

        assert_eq!(
            console.contents(),
            "--- Pattern Matching ---\n\
             It's an integer: 42\n\
             Integer: 42\n\
             Person category: Adult\n\
             Person band: Adult\n\n"
        );
    }
}
