//! Interactive reader session

use crate::components::Screen;
use anyhow::Result;
use obible_core::{Action, App, HttpClient, Locale, Session};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  go <path>        open a location, e.g. go /LUT/GEN/3
  t <translation>  change translation
  b <book>         select a book by id
  c <n>            select a chapter
  next, prev       step one chapter
  /<query>         search the selected translation
  open <n>         jump to the n-th search result
  close            dismiss the search results
  back, forward    move through history
  help             show this help
  quit             leave the shell";

/// A parsed shell input line
#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    Act(Action),
    Redraw,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    if let Some(query) = line.strip_prefix('/') {
        return Ok(ShellCommand::Act(Action::Search(query.to_string())));
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let require = |what: &str| {
        if rest.is_empty() {
            Err(format!("'{}' needs {}", word, what))
        } else {
            Ok(rest.to_string())
        }
    };

    let action = match word.to_lowercase().as_str() {
        "" => return Ok(ShellCommand::Redraw),
        "help" | "?" => return Ok(ShellCommand::Help),
        "quit" | "exit" | "q" => return Ok(ShellCommand::Quit),
        "go" => Action::Navigate(require("a path")?),
        "t" | "translation" => Action::ChangeTranslation(require("a translation")?),
        "b" | "book" => Action::SelectBook(require("a book id")?),
        "c" | "chapter" => {
            let value = require("a chapter number")?;
            let chapter = value
                .parse()
                .map_err(|_| format!("'{}' is not a valid chapter", value))?;
            Action::SelectChapter(chapter)
        }
        "n" | "next" => Action::NextChapter,
        "p" | "prev" => Action::PreviousChapter,
        "s" | "search" => Action::Search(require("a query")?),
        "open" => {
            let value = require("a result number")?;
            match value.parse::<usize>() {
                Ok(n) if n >= 1 => Action::OpenResult(n - 1),
                _ => return Err(format!("'{}' is not a valid result number", value)),
            }
        }
        "close" => Action::ClearSearch,
        "back" => Action::Back,
        "forward" => Action::Forward,
        other => return Err(format!("Unknown command '{}', try 'help'", other)),
    };
    Ok(ShellCommand::Act(action))
}

fn render(app: &App, locale: Locale) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "@ {}", app.location())?;
    write!(stdout, "{}", Screen { app, locale })?;
    stdout.flush()?;
    Ok(())
}

fn prompt() -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "> ")?;
    stdout.flush()?;
    Ok(())
}

/// Run an interactive session starting at `start`
pub async fn shell(api: HttpClient, start: &str, locale: Locale) -> Result<()> {
    let limit = api.config().search_limit;
    let mut session = Session::new(api, App::with_location(start, limit));
    tracing::info!("shell against {}", session.api().base_url());

    session.start().await;
    render(session.app(), locale)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Ok(ShellCommand::Quit) => break,
            Ok(ShellCommand::Help) => println!("{}", HELP),
            Ok(ShellCommand::Redraw) => render(session.app(), locale)?,
            Ok(ShellCommand::Act(action)) => {
                session.dispatch(action).await;
                render(session.app(), locale)?;
            }
            Err(message) => println!("{}", message),
        }
    }

    println!();
    Ok(())
}
