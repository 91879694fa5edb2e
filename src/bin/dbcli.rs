//! Collection CLI for the document backend.
//!
//! Operates directly on a collection directory without going through the
//! HTTP server: with only a directory it prints every phonebook entry, with
//! a name and number it adds one.

use phonebook::record::{Person, PersonDraft};
use phonebook::store::{DocumentStore, RecordStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <data-dir> [<name> <number>]", args[0]);
        eprintln!("Example: {} ./data", args[0]);
        eprintln!("Example: {} ./data \"Anna\" 040-1234556", args[0]);
        std::process::exit(1);
    }

    let store: DocumentStore<Person> = DocumentStore::open(&args[1])?;

    if args.len() >= 3 {
        let draft = PersonDraft {
            name: Some(args[2].clone()),
            number: args.get(3).cloned(),
        };
        let person = store.create(draft).await?;
        println!("Added {} number {} to phonebook", person.name, person.number);
    } else {
        println!("phonebook:");
        for person in store.list_all().await? {
            println!("{} {}", person.name, person.number);
        }
    }

    Ok(())
}
