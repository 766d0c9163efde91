//! The command grammar: one [`CommandKind`] per supported command, each
//! owning the anchored pattern for its textual shape and a usage line for
//! help text. Shape matching is case-insensitive on the whole input;
//! anything before or after a command is a mismatch, not a partial match.

use crate::model::{Item, Table};
use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    // Patterns are literals fixed at build time.
    Regex::new(pattern).expect("command pattern must compile")
}

static CREATE_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^create\s+(\w+)\s+(\d+(?:\.\d+)?)\s+(\d+)$"));

static READ_RE: Lazy<Regex> = Lazy::new(|| {
    let tables = Table::ALL.map(Table::name).join("|");
    compile(&format!(r"(?i)^read\s+({tables})$"))
});

static UPDATE_RE: Lazy<Regex> = Lazy::new(|| {
    let columns = Item::COLUMNS.map(|c| c.name).join("|");
    compile(&format!(r"(?i)^update\s+(\d+)\s+({columns})\s*=\s*(.+)$"))
});

static DELETE_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)^delete\s+(\d+)(?:\s+(.+))?$"));

static RESTORE_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)^restore\s+(\d+)$"));

static HELP_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)^help$"));
static TABLES_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)^tables$"));
static QUIT_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)^quit$"));

/// The eight supported commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Create,
    Read,
    Update,
    Delete,
    Restore,
    Help,
    Tables,
    Quit,
}

impl CommandKind {
    pub const ALL: [CommandKind; 8] = [
        CommandKind::Create,
        CommandKind::Read,
        CommandKind::Update,
        CommandKind::Delete,
        CommandKind::Restore,
        CommandKind::Help,
        CommandKind::Tables,
        CommandKind::Quit,
    ];

    /// The literal command word, lowercase.
    pub fn keyword(self) -> &'static str {
        match self {
            CommandKind::Create => "create",
            CommandKind::Read => "read",
            CommandKind::Update => "update",
            CommandKind::Delete => "delete",
            CommandKind::Restore => "restore",
            CommandKind::Help => "help",
            CommandKind::Tables => "tables",
            CommandKind::Quit => "quit",
        }
    }

    /// Anchored pattern for this command's full textual shape.
    pub fn pattern(self) -> &'static Regex {
        match self {
            CommandKind::Create => &CREATE_RE,
            CommandKind::Read => &READ_RE,
            CommandKind::Update => &UPDATE_RE,
            CommandKind::Delete => &DELETE_RE,
            CommandKind::Restore => &RESTORE_RE,
            CommandKind::Help => &HELP_RE,
            CommandKind::Tables => &TABLES_RE,
            CommandKind::Quit => &QUIT_RE,
        }
    }

    /// One help line per command, shown by HELP and in the introduction.
    pub fn usage(self) -> &'static str {
        match self {
            CommandKind::Create => {
                "`CREATE [name] [dollar.cents] [stock]` - insert a row into the table items"
            }
            CommandKind::Read => "`READ [tableName]` - view the rows of one of the tables",
            CommandKind::Update => {
                "`UPDATE [id] [columnName] = [value]` - update a value in the table items. Text values must be quoted like 'this'"
            }
            CommandKind::Delete => {
                "`DELETE [id] [optionalComment]` - delete a row from the table items, keeping an optional comment"
            }
            CommandKind::Restore => {
                "`RESTORE [id]` - restore a deleted row to the table items"
            }
            CommandKind::Help => "`HELP` - view the list of valid commands",
            CommandKind::Tables => "`TABLES` - view the list of tables",
            CommandKind::Quit => "`QUIT` - exit the command-line interface",
        }
    }

    /// Case-insensitive lookup from a literal command word.
    pub fn from_keyword(word: &str) -> Option<CommandKind> {
        let word = word.trim();
        CommandKind::ALL
            .into_iter()
            .find(|k| k.keyword().eq_ignore_ascii_case(word))
    }
}
