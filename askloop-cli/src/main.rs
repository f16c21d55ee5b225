mod logging;

use askloop::AskError;
use askloop::utils::{Ask, Budget, MenuStyle};
use std::process::ExitCode;
use tracing::warn;

/// Budget applied to every prompt, e.g. `ASKLOOP_BUDGET='{"timeout_secs": 30, "limit": 3}'`.
const BUDGET_VAR: &str = "ASKLOOP_BUDGET";

fn load_budget() -> Budget {
    let Ok(raw) = std::env::var(BUDGET_VAR) else {
        return Budget::unbounded();
    };
    match serde_json::from_str::<Budget>(&raw) {
        Ok(budget) => budget,
        Err(e) => {
            warn!(error = %e, "ignoring invalid {BUDGET_VAR}");
            eprintln!("Ignoring {BUDGET_VAR}: {}", e);
            Budget::unbounded()
        }
    }
}

async fn interview(budget: Budget) -> Result<(), AskError> {
    let name = Ask::text("What's your name? ")
        .budget(budget)
        .default_value("stranger".to_string())
        .run_async()
        .await?;

    let age = Ask::integer_between("How old are you? ", 0, 150)
        .budget(budget)
        .run_async()
        .await?;

    let pet = Ask::menu(None, ["cat", "dog", "fish"], MenuStyle::Numbered)
        .budget(budget)
        .post_transform(|pet: String| pet.to_uppercase())
        .run_async()
        .await?;

    let _secret = Ask::password("Pick a secret word: ")
        .budget(budget)
        .run_async()
        .await?;

    let confirm = Ask::yes_no("Save these answers? ")
        .budget(budget)
        .default_value(false)
        .run_async()
        .await?;

    println!("------------------------------------------------------------");
    println!("Name: {}", name);
    println!("Age: {}", age);
    println!("Pet: {}", pet);
    println!("Saved: {}", confirm);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    println!("------------------------------------------------------------");
    println!("                         ASKLOOP                            ");
    println!("                       VERSION: {}                        ", env!("CARGO_PKG_VERSION"));
    println!("------------------------------------------------------------");

    match interview(load_budget()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
