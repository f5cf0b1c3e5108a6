use std::fmt::Display;
use std::io::{self, Write};

use colored::Colorize;

/// Output sink shared by every section.
///
/// Writing through a `Console` instead of `println!` lets tests render a
/// section into a `Vec<u8>` and inspect it.
pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl Console<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn banner(&mut self, text: &str) -> io::Result<()> {
        let text = format!("=== {text} ===");
        if self.color {
            writeln!(self.out, "{}", text.bold().cyan())
        } else {
            writeln!(self.out, "{text}")
        }
    }

    pub fn section(&mut self, title: &str) -> io::Result<()> {
        let text = format!("--- {title} ---");
        if self.color {
            writeln!(self.out, "{}", text.bold().yellow())
        } else {
            writeln!(self.out, "{text}")
        }
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// `label: value` on a single line.
    pub fn field(&mut self, label: &str, value: impl Display) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}: {value}", label.green())
        } else {
            writeln!(self.out, "{label}: {value}")
        }
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Raw writer, for types that render themselves.
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Console<Vec<u8>> {
    /// Plain in-memory console, used by tests.
    pub fn buffer() -> Self {
        Self::new(Vec::new(), false)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output() {
        let mut console = Console::buffer();
        console.banner("Tour").unwrap();
        console.section("Basics").unwrap();
        console.field("Integer", 42).unwrap();
        console.line("done").unwrap();
        console.blank().unwrap();

        assert_eq!(
            console.contents(),
            "=== Tour ===\n--- Basics ---\nInteger: 42\ndone\n\n"
        );
    }

    #[test]
    fn test_into_inner_returns_bytes() {
        let mut console = Console::buffer();
        console.line("abc").unwrap();
        assert_eq!(console.into_inner(), b"abc\n".to_vec());
    }
}
