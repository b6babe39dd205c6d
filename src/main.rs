//! Agenda Client - command-line entry point
//!
//! Runs a single directory operation against the configured Agenda server and
//! prints the outcome to stdout. Diagnostics go to stderr.

use agenda_client::{Config, Contact, DirectoryClient, DirectoryError};
use anyhow::{bail, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: agenda-client <list | get EMAIL | add NAME EMAIL [PHONE] | remove EMAIL>";

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using Agenda server at {}", config.server_url);
    let client = DirectoryClient::from_config(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        [] | ["list"] => {
            let contacts = client.try_list()?;
            if contacts.is_empty() {
                println!("Agenda is empty");
            }
            for contact in &contacts {
                print_contact(contact);
            }
        }
        ["get", email] => match client.try_fetch(email) {
            Ok(contact) => print_contact(&contact),
            Err(DirectoryError::ResolutionMiss(_)) => bail!("no contact with email {}", email),
            Err(e) => return Err(e.into()),
        },
        ["add", name, email] => add(&client, Contact::new(*name, *email))?,
        ["add", name, email, phone] => add(&client, Contact::new(*name, *email).with_phone(*phone))?,
        ["remove", email] => {
            client.try_delete(email)?;
            println!("Removed {}", email);
        }
        _ => {
            error!("Unrecognized arguments: {:?}", args);
            bail!(USAGE);
        }
    }

    let summary = client.metrics().summary();
    info!(
        "Done: {} request(s), {} error(s), {:.1} ms average",
        summary.http_requests_total, summary.http_errors_total, summary.http_duration_avg_ms
    );
    Ok(())
}

fn add(client: &DirectoryClient, contact: Contact) -> Result<()> {
    client.try_create(&contact)?;
    println!("Added {} <{}>", contact.name, contact.email().unwrap_or_default());
    Ok(())
}

fn print_contact(contact: &Contact) {
    println!(
        "{}\t{}\t{}\t{}",
        contact.id,
        contact.name,
        contact.email().unwrap_or_default(),
        contact.phone
    );
}
