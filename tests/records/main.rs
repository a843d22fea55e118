//! Integration tests for the records database (cases, persons, snapshots).

mod fixtures;

use pretty_assertions::assert_eq;
use police_records::{
    CaseCategory, Database, DatabaseSnapshot, FreePerson, Person, PersonRecord, PersonStatus,
    RecordError, SharedDatabase,
};

use fixtures::{case, populated};

#[test]
fn case_lifecycle_scenario() {
    let mut db = Database::new();

    assert!(db.add_case(case(101, CaseCategory::Theft, "Stolen bicycle")));
    assert!(db.add_case(case(102, CaseCategory::Fraud, "Wire fraud scheme")));
    assert!(!db.add_case(case(101, CaseCategory::Other, "duplicate")));
    assert_eq!(db.case_count(), 2);

    assert_eq!(
        db.get_case_by_id(102).unwrap().to_string(),
        "Case ID: 102 | Type: Fraud | Description: Wire fraud scheme"
    );

    assert!(db.remove_case_by_id(101));
    assert_eq!(db.case_count(), 1);
    assert!(!db.remove_case_by_id(101));
    assert!(db.get_case_by_id(101).is_none());
}

#[test]
fn stored_case_equals_added_case() {
    let mut db = Database::new();
    let added = case(7, CaseCategory::DisruptingPeace, "Noise after midnight");
    db.add_case(added.clone());

    let stored = db.get_case_by_id(7).unwrap();
    assert_eq!(stored, added);
    assert_eq!(stored.category(), CaseCategory::DisruptingPeace);
}

#[test]
fn invalid_cases_fail_fast() {
    for id in [0, -1, -101] {
        let err = police_records::Case::new(id, CaseCategory::Assault, "x").unwrap_err();
        assert!(matches!(err, RecordError::InvalidArgument(_)));
    }
    assert!(matches!(
        police_records::Case::new(5, CaseCategory::Assault, ""),
        Err(RecordError::InvalidArgument(_))
    ));
}

#[test]
fn person_positions_shift_after_removal() {
    let mut db = populated();
    assert_eq!(db.person_count(), 4);

    assert!(!db.remove_person(4));
    assert_eq!(db.person_count(), 4);

    assert!(db.remove_person(1));
    let statuses: Vec<PersonStatus> = db
        .persons()
        .map(|handle| handle.read().unwrap().status())
        .collect();
    assert_eq!(
        statuses,
        vec![PersonStatus::Free, PersonStatus::Imprisoned, PersonStatus::Deceased]
    );
}

#[test]
fn arrest_a_free_person_in_place() {
    let mut db = populated();

    let current = db.get_person(0).unwrap();
    let free = match &*current.read().unwrap() {
        Person::Free(free) => free.clone(),
        other => panic!("expected free person, got {:?}", other.status()),
    };

    let mut arrested = free.arrest(vec![102]);
    arrested.add_case(102);
    let previous = db.replace_person(0, arrested).unwrap();

    assert_eq!(previous.read().unwrap().status(), PersonStatus::Free);
    let stored = db.get_person(0).unwrap();
    let stored = stored.read().unwrap();
    assert_eq!(stored.status(), PersonStatus::Arrested);
    assert_eq!(stored.first_name(), "Marta");
    assert_eq!(stored.related_cases(), Some(&[102, 102][..]));
    assert_eq!(db.person_count(), 4);
}

#[test]
fn related_cases_are_not_validated() {
    let mut db = Database::new();
    let handle = db.insert_person(FreePerson::new("Ales", "Vesely", "2002-02-02").arrest(vec![]));

    handle.write().unwrap().as_arrested_mut().unwrap().add_case(999);
    assert_eq!(db.case_count(), 0);
    assert_eq!(
        db.get_person(0).unwrap().read().unwrap().related_cases(),
        Some(&[999][..])
    );
}

#[test]
fn clear_resets_counts() {
    let mut db = populated();
    db.clear();
    assert_eq!(db.person_count(), 0);
    assert_eq!(db.case_count(), 0);
}

#[test]
fn snapshot_survives_json() {
    let db = populated();
    let json = db.snapshot().unwrap().to_json_pretty().unwrap();

    let restored = Database::restore(DatabaseSnapshot::from_json(&json).unwrap()).unwrap();
    assert_eq!(restored.person_count(), 4);
    assert_eq!(restored.cases(), db.cases());
    assert_eq!(restored.snapshot().unwrap(), db.snapshot().unwrap());
}

#[test]
fn shared_database_wraps_existing_records() {
    let shared = SharedDatabase::from(populated());
    assert_eq!(shared.case_count().unwrap(), 2);
    assert!(!shared
        .add_case(case(102, CaseCategory::Other, "duplicate"))
        .unwrap());

    let descriptions = shared
        .read(|db| {
            db.cases()
                .iter()
                .map(|case| case.description().to_string())
                .collect::<Vec<_>>()
        })
        .unwrap();
    assert_eq!(descriptions, vec!["Stolen bicycle", "Wire fraud scheme"]);
}

#[test]
fn handle_holders_see_a_fixed_status() {
    let mut db = populated();
    let reader = db.get_person(1).unwrap();

    db.get_person(1)
        .unwrap()
        .write()
        .unwrap()
        .record_mut()
        .set_first_name("Tom");
    let imprisoned = match &*reader.read().unwrap() {
        Person::Arrested(arrested) => arrested.clone().imprison("2025-01-01", 6),
        other => panic!("expected arrested person, got {:?}", other.status()),
    };
    db.replace_person(1, imprisoned);

    assert_eq!(reader.read().unwrap().status(), PersonStatus::Arrested);
    assert_eq!(reader.read().unwrap().first_name(), "Tom");
    assert_eq!(
        db.get_person(1).unwrap().read().unwrap().status(),
        PersonStatus::Imprisoned
    );
}
