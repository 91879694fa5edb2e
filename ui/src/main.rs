//! Interactive phonebook client.
//!
//! Terminal counterpart of the server: loads the collection once at startup,
//! keeps a local mirror, and issues record API calls while re-rendering the
//! filtered listing after every change. A stale mirror entry (the record was
//! deleted on the server in the meantime) is detected on update and dropped.

mod api;
mod mirror;


use std::io::Write;

use phonebook::record::PersonDraft;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use api::{PersonService, ServiceError};
use mirror::{Mirror, SaveAction};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let base_url =
        std::env::var("PHONEBOOK_URL").unwrap_or_else(|_| "http://localhost:3001".to_string());
    let service = PersonService::new(&base_url);
    let mut mirror = Mirror::new();

    match service.get_all().await {
        Ok(records) => {
            println!("Loaded {} contacts from {}", records.len(), base_url);
            mirror.replace_all(records);
        }
        Err(err) => {
            eprintln!("Could not reach {}: {}", base_url, err);
            std::process::exit(1);
        }
    }

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut filter = String::new();

    render(&mirror, &filter);
    print_help();

    loop {
        let line = match ask(&mut input, "> ").await? {
            Some(line) => line,
            None => break,
        };
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line.as_str(), ""),
        };

        match command {
            "" => {}
            "list" => render(&mirror, &filter),
            "filter" => {
                filter = rest.to_string();
                render(&mirror, &filter);
            }
            "add" => {
                add_contact(&service, &mut mirror, &mut input).await?;
                render(&mirror, &filter);
            }
            "delete" => {
                delete_contact(&service, &mut mirror, &mut input, rest).await?;
                render(&mirror, &filter);
            }
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("unknown command: {} (try 'help')", other),
        }
    }

    Ok(())
}

/// Prints `prompt`, reads one trimmed line; `None` when stdin is closed.
async fn ask(input: &mut Lines<BufReader<Stdin>>, prompt: &str) -> anyhow::Result<Option<String>> {
    print!("{}", prompt);
    std::io::stdout().flush()?;
    Ok(input
        .next_line()
        .await?
        .map(|line| line.trim().to_string()))
}

async fn ask_or_empty(
    input: &mut Lines<BufReader<Stdin>>,
    prompt: &str,
) -> anyhow::Result<String> {
    Ok(ask(input, prompt).await?.unwrap_or_default())
}

async fn add_contact(
    service: &PersonService,
    mirror: &mut Mirror,
    input: &mut Lines<BufReader<Stdin>>,
) -> anyhow::Result<()> {
    let name = ask_or_empty(input, "name: ").await?;
    let number = ask_or_empty(input, "number: ").await?;
    let draft = PersonDraft::new(&name, &number);

    match mirror.plan_save(&name) {
        SaveAction::Create => match service.create(&draft).await {
            Ok(created) => {
                println!("Added {}", created.name);
                mirror.upsert(created);
            }
            Err(err) => println!("{}", err),
        },
        SaveAction::Replace { id } => {
            let prompt = format!(
                "{} is already added to phonebook, replace the old number with the new one? (y/n) ",
                name
            );
            if !confirmed(input, &prompt).await? {
                return Ok(());
            }
            match service.update(&id, &draft).await {
                Ok(updated) => {
                    println!("Updated {}", updated.name);
                    mirror.upsert(updated);
                }
                Err(ServiceError::Gone) => {
                    println!(
                        "Information of {} has already been removed from server",
                        name
                    );
                    mirror.remove(&id);
                }
                Err(err) => println!("{}", err),
            }
        }
    }
    Ok(())
}

async fn delete_contact(
    service: &PersonService,
    mirror: &mut Mirror,
    input: &mut Lines<BufReader<Stdin>>,
    rest: &str,
) -> anyhow::Result<()> {
    let name = if rest.is_empty() {
        ask_or_empty(input, "name: ").await?
    } else {
        rest.to_string()
    };

    let id = match mirror.find_by_name(&name) {
        Some(person) => person.id.clone(),
        None => {
            println!("no contact named {}", name);
            return Ok(());
        }
    };

    let prompt = format!("Do you want to delete {}? (y/n) ", name);
    if !confirmed(input, &prompt).await? {
        return Ok(());
    }

    match service.delete(&id).await {
        Ok(()) => {
            println!("Deleted {}", name);
            mirror.remove(&id);
        }
        Err(ServiceError::Gone) => {
            // Someone else got there first; the outcome is the same.
            println!(
                "Information of {} has already been removed from server",
                name
            );
            mirror.remove(&id);
        }
        Err(err) => println!("{}", err),
    }
    Ok(())
}

async fn confirmed(input: &mut Lines<BufReader<Stdin>>, prompt: &str) -> anyhow::Result<bool> {
    Ok(ask_or_empty(input, prompt).await?.eq_ignore_ascii_case("y"))
}

fn render(mirror: &Mirror, filter: &str) {
    let visible = mirror.filtered(filter);
    if !filter.is_empty() {
        println!(
            "{} of {} contacts match '{}'",
            visible.len(),
            mirror.len(),
            filter
        );
    }
    for person in visible {
        println!("{:<24} {}", person.name, person.number);
    }
}

fn print_help() {
    println!("commands: list | filter <text> | add | delete <name> | help | quit");
}
