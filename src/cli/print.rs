use crate::error::Result;
use crate::model::Book;
use colored::Colorize;
use std::io::Write;

pub fn success<W: Write>(out: &mut W, message: &str) -> Result<()> {
    writeln!(out, "{}", message.green())?;
    Ok(())
}

pub fn warning<W: Write>(out: &mut W, message: &str) -> Result<()> {
    writeln!(out, "{}", message.yellow())?;
    Ok(())
}

pub fn error<W: Write>(out: &mut W, message: &str) -> Result<()> {
    writeln!(out, "{}", message.red())?;
    Ok(())
}

pub fn info<W: Write>(out: &mut W, message: &str) -> Result<()> {
    writeln!(out, "{}", message.dimmed())?;
    Ok(())
}

/// One book per line, in its serialized form.
pub fn write_book<W: Write>(out: &mut W, book: &Book) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string(book)?)?;
    Ok(())
}
