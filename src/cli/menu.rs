// src/cli/menu.rs

use std::str::FromStr;

pub const MAIN_MENU: &str = "\
Добро пожаловать в библиотеку!

Доступные команды:
    MENU          - показать это меню
    ALL_BOOKS     - показать все книги
    FIND_BOOK     - найти книгу по названию, автору или году
    ADD_BOOK      - добавить новую книгу
    DELETE_BOOK   - удалить книгу по id
    CHANGE_STATUS - изменить статус книги
    EXIT          - завершить работу";

pub const SEPARATOR_WIDTH: usize = 50;

pub const COMMAND_PROMPT: &str = "> Введите команду: ";
pub const UNKNOWN_COMMAND: &str = "Кажется, Вы ввели что-то не то. Попробуйте снова!";
pub const FAREWELL: &str = "Работа завершена. До новых встреч!";

pub const SEARCH_PROMPT: &str = ">>> Введите данные для поиска (название книги, автор или год): ";
pub const TITLE_PROMPT: &str = ">>> Введите название новой книги: ";
pub const AUTHOR_PROMPT: &str = ">>> Введите автора новой книги: ";
pub const YEAR_PROMPT: &str = ">>> Введите год выпуска новой книги: ";
pub const DELETE_ID_PROMPT: &str = ">>> Введите id книги, которую хотите удалить: ";
pub const STATUS_ID_PROMPT: &str = ">>> Введите id книги, чей статус хотите поменять: ";
pub const STATUS_PROMPT: &str = ">>> Введите новый статус ('в наличии' или 'выдана'): ";

/// Top-level console commands, matched case-insensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Menu,
    AllBooks,
    FindBook,
    AddBook,
    DeleteBook,
    ChangeStatus,
    Exit,
}

impl FromStr for MenuCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MENU" => Ok(MenuCommand::Menu),
            "ALL_BOOKS" => Ok(MenuCommand::AllBooks),
            "FIND_BOOK" => Ok(MenuCommand::FindBook),
            "ADD_BOOK" => Ok(MenuCommand::AddBook),
            "DELETE_BOOK" => Ok(MenuCommand::DeleteBook),
            "CHANGE_STATUS" => Ok(MenuCommand::ChangeStatus),
            "EXIT" => Ok(MenuCommand::Exit),
            other => Err(format!("Unknown command: {}", other)),
        }
    }
}
