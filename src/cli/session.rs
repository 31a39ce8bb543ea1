// src/cli/session.rs
//
// Interactive command loop. Generic over its input and output so the
// whole dialogue can be driven from tests.

use log::debug;
use std::io::{BufRead, Write};

use super::menu::*;
use super::render::render_outcome;
use crate::application::{self, AppState, CommandOutcome};
use crate::error::AppResult;

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run until EXIT or end of input
    /// Only fatal errors (storage, terminal I/O) are returned
    pub fn run(&mut self, state: &mut AppState) -> AppResult<()> {
        writeln!(self.output, "{}", MAIN_MENU)?;

        loop {
            writeln!(self.output, "{}", "-".repeat(SEPARATOR_WIDTH))?;

            let Some(line) = self.prompt(COMMAND_PROMPT)? else {
                break;
            };

            let command = match line.parse::<MenuCommand>() {
                Ok(command) => command,
                Err(e) => {
                    debug!("{}", e);
                    writeln!(self.output, "{}", UNKNOWN_COMMAND)?;
                    continue;
                }
            };

            if command == MenuCommand::Exit {
                break;
            }

            if !self.dispatch(command, state)? {
                break;
            }
        }

        writeln!(self.output, "{}", FAREWELL)?;
        self.output.flush()?;
        Ok(())
    }

    /// Returns false when input ended in the middle of a command
    fn dispatch(&mut self, command: MenuCommand, state: &mut AppState) -> AppResult<bool> {
        let outcome = match command {
            MenuCommand::Menu => {
                writeln!(self.output, "{}", MAIN_MENU)?;
                return Ok(true);
            }

            MenuCommand::AllBooks => application::list_books(state)?,

            MenuCommand::FindBook => {
                let Some(query) = self.prompt(SEARCH_PROMPT)? else {
                    return Ok(false);
                };
                application::find_books(state, &query)?
            }

            MenuCommand::AddBook => {
                let Some(title) = self.prompt(TITLE_PROMPT)? else {
                    return Ok(false);
                };
                let Some(author) = self.prompt(AUTHOR_PROMPT)? else {
                    return Ok(false);
                };
                let Some(year) = self.prompt(YEAR_PROMPT)? else {
                    return Ok(false);
                };
                application::add_book(state, &title, &author, &year)?
            }

            MenuCommand::DeleteBook => {
                let Some(book_id) = self.prompt(DELETE_ID_PROMPT)? else {
                    return Ok(false);
                };
                application::delete_book(state, &book_id)?
            }

            MenuCommand::ChangeStatus => {
                let Some(book_id) = self.prompt(STATUS_ID_PROMPT)? else {
                    return Ok(false);
                };
                let Some(new_status) = self.prompt(STATUS_PROMPT)? else {
                    return Ok(false);
                };
                application::change_book_status(state, &book_id, &new_status)?
            }

            MenuCommand::Exit => return Ok(false),
        };

        self.show(&outcome)?;
        Ok(true)
    }

    fn show(&mut self, outcome: &CommandOutcome) -> AppResult<()> {
        writeln!(self.output)?;
        render_outcome(&mut self.output, outcome)?;
        Ok(())
    }

    /// Print a prompt and read one line without its line ending
    /// None on end of input
    fn prompt(&mut self, text: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{BookRepository, JsonFileBookRepository};
    use crate::services::CatalogService;
    use std::io::Cursor;
    use std::sync::Arc;
    use tempfile::TempDir;

    struct Console {
        _dir: TempDir,
        repo: Arc<JsonFileBookRepository>,
        state: AppState,
    }

    impl Console {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let repo = Arc::new(JsonFileBookRepository::new(dir.path().join("database.json")));
            repo.initialize().unwrap();
            let state = AppState::new(CatalogService::load(repo.clone()).unwrap());
            Self {
                _dir: dir,
                repo,
                state,
            }
        }

        fn type_in(&mut self, lines: &[&str]) -> String {
            let input = Cursor::new(lines.join("\n") + "\n");
            let mut output = Vec::new();
            Session::new(input, &mut output).run(&mut self.state).unwrap();
            String::from_utf8(output).unwrap()
        }
    }

    #[test]
    fn test_exit_prints_menu_and_farewell() {
        let mut console = Console::new();
        let text = console.type_in(&["exit"]);
        assert!(text.starts_with(MAIN_MENU));
        assert!(text.ends_with(&format!("{}\n", FAREWELL)));
    }

    #[test]
    fn test_unknown_command() {
        let mut console = Console::new();
        let text = console.type_in(&["hello", "EXIT"]);
        assert!(text.contains(UNKNOWN_COMMAND));
    }

    #[test]
    fn test_add_list_and_change_status() {
        let mut console = Console::new();
        let text = console.type_in(&[
            "ALL_BOOKS",
            "ADD_BOOK",
            "Мастер и Маргарита",
            "Булгаков",
            "1967",
            "all_books",
            "CHANGE_STATUS",
            "1",
            "выдана",
            "EXIT",
        ]);

        assert!(text.contains("На данный момент в библиотеке нет книг."));
        assert!(text.contains("Новая книга успешно добавлена в библиотеку: "));
        assert!(text.contains("    Книга №1: \"Мастер и Маргарита\", Булгаков, 1967 г. (в наличии)"));
        assert!(text.contains("У следующей книги установлен новый статус: "));
        assert!(text.contains("    Книга №1: \"Мастер и Маргарита\", Булгаков, 1967 г. (выдана)"));

        let stored = console.repo.load_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].status().as_str(), "выдана");
    }

    #[test]
    fn test_errors_are_printed_and_loop_continues() {
        let mut console = Console::new();
        let text = console.type_in(&[
            "ADD_BOOK", "", "", "", "DELETE_BOOK", "abc", "FIND_BOOK", "nothing", "EXIT",
        ]);

        assert!(text.contains("ОШИБКА: Название книги не может быть пустой строкой!"));
        assert!(text.contains("ОШИБКА: Некорректно введен id книги. Это должно быть целое число!"));
        assert!(text.contains("Увы, совпадений не найдено."));
        assert!(text.ends_with(&format!("{}\n", FAREWELL)));
    }

    #[test]
    fn test_end_of_input_mid_command_ends_session() {
        let mut console = Console::new();
        let input = Cursor::new("ADD_BOOK\nTitle only\n");
        let mut output = Vec::new();
        Session::new(input, &mut output)
            .run(&mut console.state)
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.ends_with(&format!("{}\n", FAREWELL)));
        assert!(console.repo.load_all().unwrap().is_empty());
    }
}
