use police_records::{
    ArrestedPerson, Case, CaseCategory, Database, DeceasedPerson, FreePerson, ImprisonedPerson,
};

pub fn case(id: i64, category: CaseCategory, description: &str) -> Case {
    Case::new(id, category, description).expect("valid case")
}

/// A database holding one person of every status and two cases.
pub fn populated() -> Database {
    let mut db = Database::new();
    db.insert_person(FreePerson::new("Marta", "Novakova", "1991-06-21"));
    db.insert_person(ArrestedPerson::new("Tomas", "Benes", "1987-03-14", vec![101]));
    db.insert_person(ImprisonedPerson::new(
        "Radek",
        "Pokorny",
        "1979-11-02",
        "2019-04-01",
        60,
        vec![102, 101],
    ));
    db.insert_person(DeceasedPerson::new("Josef", "Kucera", "2022-08-30", "Stab wound"));
    db.add_case(case(101, CaseCategory::Theft, "Stolen bicycle"));
    db.add_case(case(102, CaseCategory::Fraud, "Wire fraud scheme"));
    db
}
