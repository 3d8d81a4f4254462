#![allow(dead_code)]

use physician_book::config::{Config, NameCasing};
use physician_book::lifecycle::BookSystem;
use physician_book::model::{AddressBookEntry, OrderSubmission, Physician};
use tracing_subscriber::EnvFilter;

pub const BASELINE: usize = 2;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

/// The logged-in ordering physician, already in the address book.
pub fn robert_wolks() -> Physician {
    Physician {
        physician_id: "-22222".to_string(),
        facility_id: "222222".to_string(),
        first_name: "Robert".to_string(),
        last_name: "Wolks".to_string(),
        institution: "Facility 1".to_string(),
        address: "Address 1".to_string(),
        zip_code: "11111".to_string(),
        city_state: "State 1".to_string(),
        country: "USA".to_string(),
        email: "robert@example.com".to_string(),
        phone_number: "(555) 555-5555".to_string(),
        fax_number: "(777) 777-7777".to_string(),
    }
}

/// A colleague at the same facility, already in the address book.
pub fn jane_doe() -> Physician {
    Physician {
        physician_id: "-22223".to_string(),
        facility_id: "222222".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        institution: "Facility 3".to_string(),
        address: "Address 3".to_string(),
        zip_code: "33333".to_string(),
        city_state: "State 3".to_string(),
        country: "USA".to_string(),
        email: "jane@example.com".to_string(),
        phone_number: "(333) 333-3333".to_string(),
        fax_number: "(444) 444-4444".to_string(),
    }
}

/// A physician with no physician id.
pub fn rick_chihu() -> Physician {
    Physician {
        physician_id: String::new(),
        facility_id: String::new(),
        first_name: "Rick".to_string(),
        last_name: "Chihu".to_string(),
        institution: "Facility 2".to_string(),
        address: "Address 2".to_string(),
        zip_code: "22222".to_string(),
        city_state: "State 2".to_string(),
        country: "USA".to_string(),
        email: "rick@example.com".to_string(),
        phone_number: "(123) 123-1234".to_string(),
        fax_number: "(789) 789-7897".to_string(),
    }
}

/// A physician with an id nobody has submitted yet.
pub fn ana_lopez() -> Physician {
    Physician {
        physician_id: "-44444".to_string(),
        facility_id: "444444".to_string(),
        first_name: "Ana".to_string(),
        last_name: "Lopez".to_string(),
        institution: "Facility 4".to_string(),
        address: "Address 4".to_string(),
        zip_code: "44444".to_string(),
        city_state: "State 4".to_string(),
        country: "USA".to_string(),
        email: "ana@example.com".to_string(),
        phone_number: "(444) 444-0000".to_string(),
        fax_number: "(444) 444-9999".to_string(),
    }
}

/// Keeps the identity fields of `physician` and replaces every contact detail.
pub fn with_new_contact_details(physician: Physician, round: u32) -> Physician {
    Physician {
        institution: format!("new Facility {round}"),
        address: format!("new Address {round}"),
        zip_code: format!("{round:05}"),
        city_state: format!("new State {round}"),
        country: format!("new Country {round}"),
        email: format!("new_email{round}@example.com"),
        phone_number: format!("(000) 000-{round:04}"),
        fax_number: format!("(999) 999-{round:04}"),
        ..physician
    }
}

pub fn order(physician: Physician) -> OrderSubmission {
    OrderSubmission::new(physician)
}

/// A running system holding the baseline entries, each with a palmetto tag.
pub async fn seeded_system(name_casing: NameCasing) -> BookSystem {
    init_tracing();
    let config = Config {
        name_casing,
        ..Config::default()
    };
    let system = BookSystem::new(&config);

    let baseline = system.seed([robert_wolks(), jane_doe()]).await.unwrap();
    for (entry, tag) in baseline.iter().zip(["P-22222", "P-22223"]) {
        system.address_book.tag_palmetto(entry.id, tag).await.unwrap();
    }
    system
}

pub fn find_by_email<'a>(entries: &'a [AddressBookEntry], email: &str) -> &'a AddressBookEntry {
    entries
        .iter()
        .find(|entry| entry.physician.email == email)
        .unwrap_or_else(|| panic!("no entry with email {email}"))
}
