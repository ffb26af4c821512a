//! SecureBank CLI - Main entry point
//!
//! One interactive session per process: commands are read line by line,
//! each one drives the workflow, and the projected view is rendered after
//! every change.

mod render;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use chrono::Utc;
use clap::Parser;
use securebank_app::{BankWorkflow, Panel, WorkflowError};
use securebank_client::HttpBankClient;
use securebank_core::TxAmount;

#[derive(Parser)]
#[command(name = "securebank")]
#[command(about = "SecureBank - terminal client for the banking service", long_about = None)]
struct Cli {
    /// API base URL of the banking backend
    #[arg(long, default_value = "http://localhost:8081/api")]
    base_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let api = HttpBankClient::new(&cli.base_url)?;
    let workflow = BankWorkflow::new(Arc::new(api));

    println!("SecureBank client — connected to {}", cli.base_url);
    println!("Type 'help' for commands.");

    repl(&workflow).await
}

async fn repl(workflow: &BankWorkflow) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        render::render(&workflow.view(Utc::now()));

        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();

        let result = match parts.as_slice() {
            [] => Ok(()),
            ["quit"] | ["exit"] => break,
            ["help"] => {
                print_help();
                Ok(())
            }
            ["signup", username, password] => workflow.signup(username, password).await,
            ["login", username, password] => workflow.login(username, password).await,
            ["logout"] => workflow.logout().await,
            ["deposit", raw] => submit_amount(workflow, raw, true).await,
            ["withdraw", raw] => submit_amount(workflow, raw, false).await,
            ["history"] => workflow.open_panel(Panel::History).await,
            ["dashboard"] => workflow.open_panel(Panel::Dashboard).await,
            ["refresh"] => workflow.refresh_account().await,
            _ => {
                println!("Unknown command; type 'help'");
                Ok(())
            }
        };

        if let Err(err) = result {
            println!("❌ {err}");
        }
    }

    Ok(())
}

/// Validate the amount locally before submitting; real bounds (funds
/// sufficiency) stay with the backend.
async fn submit_amount(
    workflow: &BankWorkflow,
    raw: &str,
    deposit: bool,
) -> Result<(), WorkflowError> {
    let amount: TxAmount = match raw.parse() {
        Ok(amount) => amount,
        Err(err) => {
            println!("❌ {err}");
            return Ok(());
        }
    };
    if deposit {
        workflow.deposit(amount).await
    } else {
        workflow.withdraw(amount).await
    }
}

fn print_help() {
    println!("Commands:");
    println!("  signup <username> <password>   create a new account");
    println!("  login <username> <password>    start a session");
    println!("  logout                         end the session");
    println!("  deposit <amount>               deposit funds");
    println!("  withdraw <amount>              withdraw funds");
    println!("  history                        show transaction history");
    println!("  dashboard                      show the account dashboard");
    println!("  refresh                        re-fetch account info");
    println!("  quit                           exit");
}
