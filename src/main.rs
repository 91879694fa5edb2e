use std::net::SocketAddr;
use std::sync::Arc;

use phonebook::api;
use phonebook::config::Config;
use phonebook::record::{Note, Person};
use phonebook::store::{DocumentStore, DynStore, MemoryStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::from_env()?;

    // 1. Record stores: document collections when DATA_DIR is set, otherwise
    //    the seeded in-memory collections.
    let (persons, notes): (DynStore<Person>, DynStore<Note>) = match &config.data_dir {
        Some(dir) => {
            tracing::info!("Using document collections in {}", dir.display());
            (
                Arc::new(DocumentStore::open(dir)?),
                Arc::new(DocumentStore::open(dir)?),
            )
        }
        None => {
            tracing::info!("Using seeded in-memory collections");
            (
                Arc::new(MemoryStore::with_records(seed_persons())),
                Arc::new(MemoryStore::with_records(seed_notes())),
            )
        }
    };

    // 2. HTTP router:
    let app = api::router(persons, notes, config.delete_policy);

    // 3. Start HTTP server:
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}

fn seed_persons() -> Vec<Person> {
    let entries = [
        ("1", "Arto Hellas", "040-123456"),
        ("2", "Ada Lovelace", "39-44-5323523"),
        ("3", "Dan Abramov", "12-43-234345"),
        ("4", "Mary Poppendieck", "39-23-6423122"),
    ];
    entries
        .into_iter()
        .map(|(id, name, number)| Person {
            id: id.to_string(),
            name: name.to_string(),
            number: number.to_string(),
        })
        .collect()
}

fn seed_notes() -> Vec<Note> {
    let entries = [
        ("1", "HTML is easy", "2019-05-30T17:30:31.098Z"),
        (
            "2",
            "Browser can execute only Javascript",
            "2019-05-30T18:39:34.091Z",
        ),
        (
            "3",
            "GET and POST are the most important methods of HTTP protocol",
            "2019-05-30T19:20:14.298Z",
        ),
    ];
    entries
        .into_iter()
        .map(|(id, content, date)| Note {
            id: id.to_string(),
            content: content.to_string(),
            important: true,
            date: date.to_string(),
        })
        .collect()
}
