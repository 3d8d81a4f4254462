//! Runs the reference submissions against a seeded address book and prints the results.

use actor_store::tracing::setup_tracing;
use physician_book::config::Config;
use physician_book::lifecycle::BookSystem;
use physician_book::model::{OrderSubmission, Physician};
use tracing::{error, info, Instrument};

fn physician(id: &str, facility: &str, first: &str, last: &str, n: u32) -> Physician {
    Physician {
        physician_id: id.to_string(),
        facility_id: facility.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        institution: format!("Facility {n}"),
        address: format!("Address {n}"),
        zip_code: format!("{n}{n}{n}{n}{n}"),
        city_state: format!("State {n}"),
        country: "USA".to_string(),
        email: format!("{}@example.com", first.to_lowercase()),
        phone_number: "(123) 123-1234".to_string(),
        fax_number: "(789) 789-7897".to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = Config::from_env().map_err(|e| e.to_string())?;
    setup_tracing(&config.log_filter);

    info!(?config, "Starting address book");
    let system = BookSystem::new(&config);

    let baseline = system
        .seed([
            physician("-11111", "111111", "Robert", "Wolks", 1),
            physician("-22222", "222222", "Jane", "Doe", 3),
        ])
        .await
        .map_err(|e| e.to_string())?;
    for (entry, tag) in baseline.iter().zip(["P-100", "P-200"]) {
        system
            .address_book
            .tag_palmetto(entry.id, tag)
            .await
            .map_err(|e| e.to_string())?;
    }

    let rick = physician("", "", "Rick", "Chihu", 2);
    let submissions = [
        rick.clone(),
        Physician {
            first_name: "rick".to_string(),
            last_name: "chihu".to_string(),
            email: "new_email@example.com".to_string(),
            ..rick.clone()
        },
        Physician {
            first_name: "Ricks".to_string(),
            ..rick
        },
        Physician {
            first_name: "Janet".to_string(),
            institution: "new Facility".to_string(),
            ..physician("-22222", "222222", "Jane", "Doe", 3)
        },
    ];

    for submitted in submissions {
        let span = tracing::info_span!("order_submission", first = %submitted.first_name);
        let result = system
            .reconciler
            .reconcile(&OrderSubmission::new(submitted))
            .instrument(span)
            .await;
        match result {
            Ok(done) => info!(id = %done.entry.id, outcome = ?done.outcome, "Order applied"),
            Err(e) => error!(error = %e, "Order rejected"),
        }
    }

    let entries = system
        .reconciler
        .list_address_book()
        .await
        .map_err(|e| e.to_string())?;
    let saved = system
        .reconciler
        .saved_order(physician_book::model::DEFAULT_ACCOUNT)
        .await
        .map_err(|e| e.to_string())?;

    let book_json = serde_json::to_string_pretty(&entries).map_err(|e| e.to_string())?;
    let saved_json = serde_json::to_string_pretty(&saved).map_err(|e| e.to_string())?;
    println!("{book_json}");
    println!("{saved_json}");

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
