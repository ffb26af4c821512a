//! Terminal rendering of a projected view

use securebank_app::{Panel, ViewState};
use securebank_core::Severity;

pub fn render(view: &ViewState) {
    if let Some(banner) = &view.banner {
        let tag = match banner.severity {
            Severity::Success => "✅",
            Severity::Warning => "⚠️ ",
            Severity::Failure => "❌",
        };
        println!("{tag} {}", banner.text);
    }

    match view.panel {
        Panel::Login => println!("-- Login: 'login <user> <pass>' or 'signup <user> <pass>'"),
        Panel::Signup => println!("-- Signup: 'signup <user> <pass>'"),
        Panel::Dashboard => match &view.dashboard {
            Some(dashboard) => {
                println!("-- Dashboard");
                println!("   Welcome, {}", dashboard.username);
                println!("   Account number: {}", dashboard.account_number);
                println!("   Balance: ${}", dashboard.balance);
            }
            None => println!("-- Dashboard (account info still loading)"),
        },
        Panel::Deposit => println!("-- Deposit: 'deposit <amount>'"),
        Panel::Withdraw => println!("-- Withdraw: 'withdraw <amount>'"),
        Panel::History => {
            println!("-- Transaction history");
            if view.transactions.is_empty() {
                println!("   No transactions found");
            }
            for tx in &view.transactions {
                println!(
                    "   #{:<5} {:<10} {}{}  {}",
                    tx.id,
                    tx.kind,
                    tx.kind.sign(),
                    tx.amount,
                    tx.timestamp.as_deref().unwrap_or("-"),
                );
            }
        }
    }

    if view.controls_disabled {
        println!("   (a request is in flight; submissions are disabled)");
    }
}
