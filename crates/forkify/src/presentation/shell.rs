use std::io::Write;

use anyhow::Result;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::{AppContext, Event, dispatch};

const HELP: &str = "\
commands:
  search <query>        search recipes
  page <n>              show another page of results
  open <id>             open a recipe
  + / -                 more / fewer servings
  add                   add the open recipe to the shopping list
  like                  like or unlike the open recipe
  likes                 show liked recipes
  del <item-id>         remove a shopping list item
  count <item-id> <n>   change a shopping list item's count
  help                  show this help
  quit                  leave";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Event),
    Help,
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?}, try `help`")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name {
        "" => return Ok(None),
        "search" | "s" if !rest.is_empty() => Event::SearchSubmitted(rest.to_string()),
        "search" | "s" => return Err(CommandError::Usage("search <query>")),
        "page" => Event::ResultsPage(
            rest.parse()
                .map_err(|_| CommandError::Usage("page <n>"))?,
        ),
        "open" | "o" if !rest.is_empty() => Event::HashChanged(rest.to_string()),
        "open" | "o" => return Err(CommandError::Usage("open <id>")),
        "+" => Event::ServingsIncreased,
        "-" => Event::ServingsDecreased,
        "add" => Event::AddToList,
        "like" => Event::LikeToggled,
        "likes" => Event::Load(None),
        "del" if !rest.is_empty() => Event::ListItemDeleted(rest.to_string()),
        "del" => return Err(CommandError::Usage("del <item-id>")),
        "count" => {
            let usage = CommandError::Usage("count <item-id> <n>");
            let (id, value) = rest.split_once(char::is_whitespace).ok_or(usage.clone())?;
            let value: f64 = value.trim().parse().map_err(|_| usage)?;
            Event::ListCountChanged(id.to_string(), value)
        }
        "help" | "?" => return Ok(Some(Command::Help)),
        "quit" | "exit" | "q" => return Ok(Some(Command::Quit)),
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(Command::Dispatch(command)))
}

/// Read commands from stdin until `quit` or end of input.
pub async fn run(ctx: &AppContext) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{HELP}");
    loop {
        print!("forkify> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Ok(Some(Command::Dispatch(event))) => {
                let outcome = dispatch(ctx, event).await;
                debug!("outcome: {outcome:?}");
            }
            Ok(Some(Command::Help)) => println!("{HELP}"),
            Ok(Some(Command::Quit)) => break,
            Ok(None) => {}
            Err(e) => eprintln!("{e}"),
        }
    }

    Ok(())
}
