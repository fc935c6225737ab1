/// Edits to the persisted exchange list, parsed from command-line words
use tracing::info;

use super::ExchangeStore;
use crate::error::{ClockError, Result};

pub const USAGE: &str = "\
Usage: manage_exchanges <command>

  list                    show every exchange in display order
  select <id>             show the exchange on the board
  deselect <id>           hide the exchange from the board
  toggle <id>             flip the selection of an exchange
  move <from> <to>        move by position in display order (0-based)
  order <id> <n>          set the display order of one exchange";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCommand {
    List,
    Select(String),
    Deselect(String),
    Toggle(String),
    Move { from: usize, to: usize },
    SetOrder { id: String, order: i32 },
}

impl StoreCommand {
    /// Parse `args` (program name already stripped)
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let words: Vec<&str> = args.iter().map(|a| a.as_ref()).collect();
        let command = match words.as_slice() {
            ["list"] => StoreCommand::List,
            ["select", id] => StoreCommand::Select(id.to_string()),
            ["deselect", id] => StoreCommand::Deselect(id.to_string()),
            ["toggle", id] => StoreCommand::Toggle(id.to_string()),
            ["move", from, to] => StoreCommand::Move {
                from: parse_number(from)?,
                to: parse_number(to)?,
            },
            ["order", id, order] => StoreCommand::SetOrder {
                id: id.to_string(),
                order: parse_number(order)?,
            },
            [] => return Err(ClockError::InvalidCommand("no command given".to_string())),
            other => return Err(ClockError::InvalidCommand(other.join(" "))),
        };
        Ok(command)
    }

    /// Whether applying the command changes the store
    pub fn is_edit(&self) -> bool {
        !matches!(self, StoreCommand::List)
    }

    /// Apply to the store and describe the outcome
    pub async fn apply(&self, store: &ExchangeStore) -> Result<String> {
        let message = match self {
            StoreCommand::List => {
                let lines: Vec<String> = store
                    .all()
                    .await
                    .iter()
                    .enumerate()
                    .map(|(position, e)| {
                        let mark = if e.is_selected { "x" } else { " " };
                        format!("{:>2} [{}] {:<8} {}", position, mark, e.id, e.name)
                    })
                    .collect();
                lines.join("\n")
            }
            StoreCommand::Select(id) => {
                store.set_selected(id, true).await?;
                format!("{} selected", id)
            }
            StoreCommand::Deselect(id) => {
                store.set_selected(id, false).await?;
                format!("{} deselected", id)
            }
            StoreCommand::Toggle(id) => {
                let selected = store.toggle_selected(id).await?;
                format!("{} {}", id, if selected { "selected" } else { "deselected" })
            }
            StoreCommand::Move { from, to } => {
                let list = store.reorder(*from, *to).await?;
                let id = list.get(*to).map(|e| e.id.as_str()).unwrap_or_default();
                format!("{} moved to position {}", id, to)
            }
            StoreCommand::SetOrder { id, order } => {
                store.set_display_order(id, *order).await?;
                format!("{} display order set to {}", id, order)
            }
        };

        if self.is_edit() {
            info!("{}", message);
        }
        Ok(message)
    }
}

fn parse_number<T: std::str::FromStr>(value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| ClockError::InvalidCommand(format!("not a number: {}", value)))
}
