//! The text menu driving the catalog.
//!
//! The loop owns all user I/O: it parses and re-prompts on malformed numeric
//! input, so the catalog only ever sees well-typed arguments. EOF anywhere
//! behaves like choosing Exit.

use crate::catalog::{BookFilter, Catalog};
use crate::cli::print;
use crate::error::Result;
use crate::store::Backend;
use std::io::{BufRead, Write};

const MENU: &str = "\nBook catalog\n\
    1. Add a book\n\
    2. Remove a book\n\
    3. Find books\n\
    4. List all books\n\
    5. Update book status\n\
    0. Exit";

pub fn run<B, R, W>(catalog: &mut Catalog<B>, input: &mut R, out: &mut W) -> Result<()>
where
    B: Backend,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "{}", MENU)?;
        let Some(choice) = prompt(input, out, "Choose an action: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                if handle_add(catalog, input, out)?.is_none() {
                    break;
                }
            }
            "2" => {
                if handle_remove(catalog, input, out)?.is_none() {
                    break;
                }
            }
            "3" => {
                if handle_find(catalog, input, out)?.is_none() {
                    break;
                }
            }
            "4" => handle_list(catalog, out)?,
            "5" => {
                if handle_update_status(catalog, input, out)?.is_none() {
                    break;
                }
            }
            "0" => break,
            _ => print::error(out, "Invalid choice, try again.")?,
        }
    }
    Ok(())
}

/// Handlers return `None` when input hit EOF mid-dialog, which ends the loop.
fn handle_add<B: Backend, R: BufRead, W: Write>(
    catalog: &mut Catalog<B>,
    input: &mut R,
    out: &mut W,
) -> Result<Option<()>> {
    let Some(title) = prompt(input, out, "Title: ")? else {
        return Ok(None);
    };
    let Some(author) = prompt(input, out, "Author: ")? else {
        return Ok(None);
    };
    let Some(year) = prompt_number(input, out, "Publication year: ")? else {
        return Ok(None);
    };

    let book = catalog.add(title, author, year)?;
    print::success(out, &format!("Book added with id: {}", book.id))?;
    Ok(Some(()))
}

fn handle_remove<B: Backend, R: BufRead, W: Write>(
    catalog: &mut Catalog<B>,
    input: &mut R,
    out: &mut W,
) -> Result<Option<()>> {
    let Some(id) = prompt_number(input, out, "Id of the book to remove: ")? else {
        return Ok(None);
    };

    if catalog.remove(id)? {
        print::success(out, "Book removed.")?;
    } else {
        print::warning(out, "Book not found.")?;
    }
    Ok(Some(()))
}

fn handle_find<B: Backend, R: BufRead, W: Write>(
    catalog: &Catalog<B>,
    input: &mut R,
    out: &mut W,
) -> Result<Option<()>> {
    let Some(title) = prompt(input, out, "Title (leave empty to skip): ")? else {
        return Ok(None);
    };
    let Some(author) = prompt(input, out, "Author (leave empty to skip): ")? else {
        return Ok(None);
    };
    let Some(year) = prompt_optional_number(input, out, "Year (leave empty to skip): ")? else {
        return Ok(None);
    };

    let filter = BookFilter {
        title: (!title.is_empty()).then_some(title),
        author: (!author.is_empty()).then_some(author),
        year,
    };

    let results = catalog.find(&filter);
    if results.is_empty() {
        print::warning(out, "No books found.")?;
    } else {
        for book in &results {
            print::write_book(out, book)?;
        }
    }
    Ok(Some(()))
}

fn handle_list<B: Backend, W: Write>(catalog: &Catalog<B>, out: &mut W) -> Result<()> {
    if catalog.list().is_empty() {
        print::info(out, "The catalog is empty.")?;
        return Ok(());
    }
    for book in catalog.list() {
        print::write_book(out, book)?;
    }
    Ok(())
}

fn handle_update_status<B: Backend, R: BufRead, W: Write>(
    catalog: &mut Catalog<B>,
    input: &mut R,
    out: &mut W,
) -> Result<Option<()>> {
    let Some(id) = prompt_number(input, out, "Id of the book: ")? else {
        return Ok(None);
    };
    let Some(status) = prompt(input, out, "New status (available/checked out): ")? else {
        return Ok(None);
    };

    if catalog.update_status(id, &status)? {
        print::success(out, "Status updated.")?;
    } else {
        print::warning(out, "Book not found.")?;
    }
    Ok(Some(()))
}

/// Print a label and read one line. `None` on EOF. The line comes back
/// trimmed; callers decide whether empty input means anything.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt until the input parses as a number. `None` on EOF.
fn prompt_number<T, R, W>(input: &mut R, out: &mut W, label: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(line) = prompt(input, out, label)? else {
            return Ok(None);
        };
        match line.parse() {
            Ok(n) => return Ok(Some(n)),
            Err(_) => print::error(out, "Please enter a whole number.")?,
        }
    }
}

/// Like [`prompt_number`], but an empty line means "no value".
/// `None` on EOF, `Some(None)` on empty input.
fn prompt_optional_number<T, R, W>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<Option<T>>>
where
    T: std::str::FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(line) = prompt(input, out, label)? else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(Some(None));
        }
        match line.parse() {
            Ok(n) => return Ok(Some(Some(n))),
            Err(_) => print::error(out, "Please enter a whole number.")?,
        }
    }
}
