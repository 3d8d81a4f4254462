mod common;

use common::*;
use physician_book::address_book::AddressBookError;
use physician_book::config::NameCasing;
use physician_book::model::{
    AddressBookId, IdentityKey, OrderSubmission, Physician, PrevOrderData, DEFAULT_ACCOUNT,
};
use physician_book::reconciler::{Outcome, ReconcileError};

#[tokio::test]
async fn test_address_book_starts_with_baseline() {
    let system = seeded_system(NameCasing::Frozen).await;

    let entries = system.reconciler.list_address_book().await.unwrap();
    assert_eq!(entries.len(), BASELINE);
    assert_eq!(
        find_by_email(&entries, "robert@example.com").palmetto.as_deref(),
        Some("P-22222")
    );
    assert_eq!(system.reconciler.prev_order_data(DEFAULT_ACCOUNT).await.unwrap(), None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_no_id_physician_is_created_then_updated_by_name() {
    let system = seeded_system(NameCasing::Frozen).await;
    let rick = rick_chihu();

    let created = system.reconciler.reconcile(&order(rick.clone())).await.unwrap();
    assert_eq!(created.outcome, Outcome::Created);

    let entries = system.reconciler.list_address_book().await.unwrap();
    assert_eq!(entries.len(), BASELINE + 1);
    let saved = find_by_email(&entries, "rick@example.com");
    assert_eq!(saved.physician, rick);
    assert_eq!(saved.palmetto, None);

    let recased = Physician {
        first_name: "rick".to_string(),
        last_name: "chihu".to_string(),
        ..with_new_contact_details(rick, 1)
    };
    let updated = system.reconciler.reconcile(&order(recased.clone())).await.unwrap();
    assert_eq!(updated.outcome, Outcome::Updated);
    assert_eq!(updated.entry.id, created.entry.id);

    let entries = system.reconciler.list_address_book().await.unwrap();
    assert_eq!(entries.len(), BASELINE + 1);
    let saved = find_by_email(&entries, "new_email1@example.com");
    assert_eq!(saved.id, created.entry.id);
    assert_eq!(saved.physician, recased);

    let prev = system
        .reconciler
        .prev_order_data(DEFAULT_ACCOUNT)
        .await
        .unwrap()
        .unwrap();
    let expected = PrevOrderData {
        physician_address_book_id: saved.id,
        physician_id: String::new(),
        physician_facility_id: String::new(),
        physician_institution: "new Facility 1".to_string(),
        physician_first_name: "rick".to_string(),
        physician_last_name: "chihu".to_string(),
        physician_address: "new Address 1".to_string(),
        physician_city_state: "new State 1".to_string(),
        physician_zip_code: "00001".to_string(),
        physician_country: "new Country 1".to_string(),
        physician_phone_number: "(000) 000-0001".to_string(),
        physician_fax_number: "(999) 999-0001".to_string(),
        physician_email: "new_email1@example.com".to_string(),
    };
    assert_eq!(prev, expected);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unseen_physician_id_is_created_verbatim() {
    let system = seeded_system(NameCasing::Frozen).await;
    let ana = ana_lopez();

    let created = system.reconciler.reconcile(&order(ana.clone())).await.unwrap();
    assert_eq!(created.outcome, Outcome::Created);
    assert_eq!(created.entry.physician, ana);
    assert_eq!(created.entry.palmetto, None);
    assert_eq!(
        system.reconciler.list_address_book().await.unwrap().len(),
        BASELINE + 1
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_physician_id_keeps_identity_fields_on_update() {
    let system = seeded_system(NameCasing::Frozen).await;
    let ana = ana_lopez();
    let created = system.reconciler.reconcile(&order(ana.clone())).await.unwrap();

    let renamed = Physician {
        first_name: "Anabel".to_string(),
        last_name: "Lopes".to_string(),
        facility_id: "555555".to_string(),
        ..with_new_contact_details(ana.clone(), 1)
    };
    let updated = system.reconciler.reconcile(&order(renamed.clone())).await.unwrap();
    assert_eq!(updated.outcome, Outcome::Updated);

    let entries = system.reconciler.list_address_book().await.unwrap();
    assert_eq!(entries.len(), BASELINE + 1);
    let saved = find_by_email(&entries, "new_email1@example.com");
    let expected = Physician {
        physician_id: ana.physician_id.clone(),
        facility_id: ana.facility_id.clone(),
        first_name: ana.first_name.clone(),
        last_name: ana.last_name.clone(),
        ..renamed.clone()
    };
    assert_eq!(saved.id, created.entry.id);
    assert_eq!(saved.physician, expected);

    // The projection follows the submission, not the stored entry.
    let prev = system
        .reconciler
        .prev_order_data(DEFAULT_ACCOUNT)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(prev, PrevOrderData::project(&renamed, saved.id));
    assert_eq!(prev.physician_first_name, "Anabel");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_seeded_physician_update_preserves_palmetto() {
    let system = seeded_system(NameCasing::Frozen).await;
    let robert = robert_wolks();

    for round in 1..=2 {
        let result = system
            .reconciler
            .reconcile(&order(with_new_contact_details(robert.clone(), round)))
            .await
            .unwrap();
        assert_eq!(result.outcome, Outcome::Updated);
        assert_eq!(result.entry.palmetto.as_deref(), Some("P-22222"));
    }

    let entries = system.reconciler.list_address_book().await.unwrap();
    assert_eq!(entries.len(), BASELINE);
    let saved = find_by_email(&entries, "new_email2@example.com");
    assert_eq!(saved.physician, with_new_contact_details(robert, 2));
    assert_eq!(saved.palmetto.as_deref(), Some("P-22222"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_recased_name_under_physician_id_is_ignored_by_default() {
    let system = seeded_system(NameCasing::Frozen).await;
    let recased = Physician {
        first_name: "robert".to_string(),
        last_name: "wolks".to_string(),
        ..with_new_contact_details(robert_wolks(), 1)
    };

    let result = system.reconciler.reconcile(&order(recased)).await.unwrap();
    assert_eq!(result.entry.physician.first_name, "Robert");
    assert_eq!(result.entry.physician.last_name, "Wolks");
    assert_eq!(result.entry.physician.email, "new_email1@example.com");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_follow_casing_stores_recased_name_under_physician_id() {
    let system = seeded_system(NameCasing::Follow).await;
    let robert = robert_wolks();

    let recased = Physician {
        first_name: "robert".to_string(),
        last_name: "wolks".to_string(),
        ..with_new_contact_details(robert.clone(), 2)
    };
    let result = system.reconciler.reconcile(&order(recased.clone())).await.unwrap();
    assert_eq!(result.outcome, Outcome::Updated);
    assert_eq!(result.entry.physician.first_name, "robert");
    assert_eq!(result.entry.physician.last_name, "wolks");
    assert_eq!(result.entry.physician.physician_id, robert.physician_id);

    // A different name is still not stored.
    let renamed = Physician {
        first_name: "Bob".to_string(),
        ..recased
    };
    let result = system.reconciler.reconcile(&order(renamed)).await.unwrap();
    assert_eq!(result.entry.physician.first_name, "robert");
    assert_eq!(
        system.reconciler.list_address_book().await.unwrap().len(),
        BASELINE
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_name_typo_creates_second_entry() {
    let system = seeded_system(NameCasing::Frozen).await;
    let rick = rick_chihu();

    system.reconciler.reconcile(&order(rick.clone())).await.unwrap();
    let typo = Physician {
        first_name: "Ricks".to_string(),
        email: "newEmail@example.com".to_string(),
        ..rick
    };
    let result = system.reconciler.reconcile(&order(typo.clone())).await.unwrap();
    assert_eq!(result.outcome, Outcome::Created);

    let entries = system.reconciler.list_address_book().await.unwrap();
    assert_eq!(entries.len(), BASELINE + 2);
    assert_eq!(find_by_email(&entries, "newEmail@example.com").physician, typo);
    assert_eq!(find_by_email(&entries, "rick@example.com").physician, rick_chihu());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_name_match_ignores_entries_with_physician_id() {
    let system = seeded_system(NameCasing::Frozen).await;

    // Same name as a seeded physician, but submitted without an id.
    let no_id = Physician {
        physician_id: String::new(),
        facility_id: String::new(),
        ..rick_chihu()
    };
    let no_id = Physician {
        first_name: "Robert".to_string(),
        last_name: "Wolks".to_string(),
        ..no_id
    };
    let created = system.reconciler.reconcile(&order(no_id.clone())).await.unwrap();
    assert_eq!(created.outcome, Outcome::Created);
    assert_eq!(
        system.reconciler.list_address_book().await.unwrap().len(),
        BASELINE + 1
    );

    // Submitted again under the id, the id entry is the one that changes.
    let with_id = Physician {
        first_name: "Robert".to_string(),
        last_name: "Wolks".to_string(),
        ..with_new_contact_details(robert_wolks(), 3)
    };
    let updated = system.reconciler.reconcile(&order(with_id)).await.unwrap();
    assert_eq!(updated.outcome, Outcome::Updated);
    assert_ne!(updated.entry.id, created.entry.id);
    assert_eq!(updated.entry.physician.physician_id, "-22222");

    let entries = system.reconciler.list_address_book().await.unwrap();
    assert_eq!(entries.len(), BASELINE + 1);
    let untouched = entries
        .iter()
        .find(|entry| entry.id == created.entry.id)
        .unwrap();
    assert_eq!(untouched.physician, no_id);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_submission_leaves_stores_unchanged() {
    let system = seeded_system(NameCasing::Frozen).await;

    let incomplete = Physician {
        email: "  ".to_string(),
        ..rick_chihu()
    };
    let result = system.reconciler.reconcile(&order(incomplete)).await;
    assert!(matches!(result, Err(ReconcileError::Validation(_))));

    let nameless = Physician {
        last_name: String::new(),
        ..robert_wolks()
    };
    let result = system.reconciler.reconcile(&order(nameless)).await;
    assert!(matches!(result, Err(ReconcileError::Validation(_))));

    let entries = system.reconciler.list_address_book().await.unwrap();
    assert_eq!(entries.len(), BASELINE);
    assert_eq!(
        find_by_email(&entries, "robert@example.com").physician,
        robert_wolks()
    );
    assert_eq!(system.reconciler.saved_order(DEFAULT_ACCOUNT).await.unwrap(), None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_prev_order_data_is_kept_per_account() {
    let system = seeded_system(NameCasing::Frozen).await;

    let first = system
        .reconciler
        .reconcile(&OrderSubmission::for_account("clinic-a", rick_chihu()))
        .await
        .unwrap();
    let second = system
        .reconciler
        .reconcile(&OrderSubmission::for_account("clinic-b", ana_lopez()))
        .await
        .unwrap();

    let a = system.reconciler.prev_order_data("clinic-a").await.unwrap().unwrap();
    let b = system.reconciler.prev_order_data("clinic-b").await.unwrap().unwrap();
    assert_eq!(a.physician_address_book_id, first.entry.id);
    assert_eq!(b.physician_address_book_id, second.entry.id);
    assert_eq!(a.physician_first_name, "Rick");
    assert_eq!(b.physician_first_name, "Ana");
    assert_eq!(system.reconciler.prev_order_data(DEFAULT_ACCOUNT).await.unwrap(), None);

    // A later order of clinic-a replaces its projection wholesale.
    system
        .reconciler
        .reconcile(&OrderSubmission::for_account("clinic-a", robert_wolks()))
        .await
        .unwrap();
    let a = system.reconciler.prev_order_data("clinic-a").await.unwrap().unwrap();
    assert_eq!(a.physician_id, "-22222");
    assert_eq!(a.physician_address_book_id, AddressBookId(1));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_seeding_a_known_identity_conflicts() {
    let system = seeded_system(NameCasing::Frozen).await;

    let result = system.seed([robert_wolks()]).await;
    assert!(matches!(result, Err(AddressBookError::Conflict(_))));

    let found = system
        .address_book
        .find_by_identity(&IdentityKey::PhysicianId("-22222".to_string()))
        .await
        .unwrap();
    assert_eq!(found.map(|entry| entry.id), Some(AddressBookId(1)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_padded_physician_id_is_trimmed_before_matching_and_storing() {
    let system = seeded_system(NameCasing::Frozen).await;

    let padded_known = Physician {
        physician_id: " -22222 ".to_string(),
        ..with_new_contact_details(robert_wolks(), 1)
    };
    let updated = system.reconciler.reconcile(&order(padded_known)).await.unwrap();
    assert_eq!(updated.outcome, Outcome::Updated);
    assert_eq!(updated.entry.id, AddressBookId(1));
    assert_eq!(updated.entry.physician.physician_id, "-22222");

    let padded_new = Physician {
        physician_id: "-44444 ".to_string(),
        facility_id: " 444444".to_string(),
        ..ana_lopez()
    };
    let created = system.reconciler.reconcile(&order(padded_new)).await.unwrap();
    assert_eq!(created.outcome, Outcome::Created);
    assert_eq!(created.entry.physician, ana_lopez());
    assert_eq!(created.prev_order_data.physician_id, "-44444");
    assert_eq!(created.prev_order_data.physician_facility_id, "444444");

    // The trimmed form is the identity from now on.
    let again = system.reconciler.reconcile(&order(ana_lopez())).await.unwrap();
    assert_eq!(again.outcome, Outcome::Updated);
    assert_eq!(again.entry.id, created.entry.id);
    assert_eq!(
        system.reconciler.list_address_book().await.unwrap().len(),
        BASELINE + 1
    );

    system.shutdown().await.unwrap();
}
