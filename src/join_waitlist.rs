use anyhow::{Context, Result};
use meraxes_waitlist::clients::Notification;
use meraxes_waitlist::configuration::get_configuration;
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let configuration = get_configuration().context("Failed to read configuration.")?;
    let waitlist_client = configuration.client.client()?;

    let name = prompt("Enter your Name: ")?;
    let email = prompt("Enter your email: ")?;

    println!("{}", Notification::loading());
    let notification = waitlist_client.join(&name, &email).await;
    println!("{}", notification);

    match notification {
        Notification::Success(_) => Ok(ExitCode::SUCCESS),
        _ => Ok(ExitCode::FAILURE),
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read line.")?;
    Ok(input.trim().to_string())
}
