use clap::{Parser, Subcommand};

use itzgen::repository::seed;
use itzgen::service::auth::bcrypt;

/// Operator helpers for an itzgen deployment.
#[derive(Parser)]
#[command(name = "itzgen-cli", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the bcrypt hash of a password.
    HashPassword {
        password: String,
        #[arg(long, default_value_t = ::bcrypt::DEFAULT_COST)]
        cost: u32,
    },
    /// Print the plan catalog a fresh server starts with, as JSON.
    DefaultPlans,
}

fn main() {
    let cli = Cli::parse();
    let res = match cli.command {
        Command::HashPassword { password, cost } => {
            bcrypt::encrypt_password(&password, cost).map_err(|e| e.to_string())
        }
        Command::DefaultPlans => {
            let plans: Vec<serde_json::Value> = seed::default_plans()
                .into_iter()
                .map(|p| {
                    serde_json::json!({
                        "name": p.name,
                        "price": p.price,
                        "limits": p.limits,
                        "description": p.description,
                    })
                })
                .collect();
            serde_json::to_string_pretty(&plans).map_err(|e| e.to_string())
        }
    };
    match res {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
