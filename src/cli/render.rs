// src/cli/render.rs

use std::io::{self, Write};

use crate::application::CommandOutcome;
use crate::domain::Book;

fn write_books<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    for book in books {
        writeln!(out, "{}", book)?;
    }
    Ok(())
}

/// Print an outcome the way the console shows it
pub fn render_outcome<W: Write>(out: &mut W, outcome: &CommandOutcome) -> io::Result<()> {
    match outcome {
        CommandOutcome::Failed(response) => writeln!(out, "{}", response.message),

        CommandOutcome::BookList(books) => {
            writeln!(out, "Книги, представленные в библиотеке: ")?;
            write_books(out, books)
        }

        CommandOutcome::SearchResults(results) => {
            if !results.by_title.is_empty() {
                writeln!(out, "Совпадения по названию книги:")?;
                write_books(out, &results.by_title)?;
                writeln!(out)?;
            }
            if !results.by_author.is_empty() {
                writeln!(out, "Совпадения по автору:")?;
                write_books(out, &results.by_author)?;
                writeln!(out)?;
            }
            if !results.by_year.is_empty() {
                writeln!(out, "Совпадения по году:")?;
                write_books(out, &results.by_year)?;
            }
            Ok(())
        }

        CommandOutcome::BookAdded(book) => {
            writeln!(out, "Новая книга успешно добавлена в библиотеку: ")?;
            writeln!(out, "{}", book)
        }

        CommandOutcome::BookDeleted(book) => {
            writeln!(out, "Следующая книга была удалена из библиотеки: ")?;
            writeln!(out, "{}", book)
        }

        CommandOutcome::StatusChanged(book) => {
            writeln!(out, "У следующей книги установлен новый статус: ")?;
            writeln!(out, "{}", book)
        }
    }
}
