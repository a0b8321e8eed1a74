use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use track2gather_core::{
    Address, CaseDetails, CaseNumber, Email, Name, Person, PersonError, PersonField, Phone,
    ShnPeriod, Tag,
};

const NO_TAGS: [Tag; 0] = [];

fn name(value: &str) -> Name {
    Name::new(value).unwrap()
}

fn phone(value: &str) -> Phone {
    Phone::new(value).unwrap()
}

fn email(value: &str) -> Email {
    Email::new(value).unwrap()
}

fn address(value: &str) -> Address {
    Address::new(value).unwrap()
}

fn tag(value: &str) -> Tag {
    Tag::new(value).unwrap()
}

fn alex() -> Person {
    Person::new(
        name("Alex"),
        phone("91234567"),
        email("alex@example.com"),
        address("123 Clementi Rd"),
        CaseDetails::default(),
        NO_TAGS,
    )
}

fn hash_of(person: &Person) -> u64 {
    let mut hasher = DefaultHasher::new();
    person.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn accessors_return_supplied_values_with_absent_details() {
    let person = Person::builder()
        .name(name("Bernice Yu"))
        .phone(phone("99272758"))
        .email(email("berniceyu@example.com"))
        .home_address(address("Blk 30 Lorong 3 Serangoon Gardens"))
        .work_address(None)
        .quarantine_address(Some(address("Blk 12 Tampines Ave 4")))
        .shn_period(None)
        .case_number(Some(CaseNumber::new("C-1001").unwrap()))
        .next_of_kin_name(None)
        .next_of_kin_phone(Some(phone("88887777")))
        .next_of_kin_address(None)
        .tags([tag("positive")])
        .build()
        .unwrap();

    assert_eq!(person.name().as_str(), "Bernice Yu");
    assert_eq!(person.phone().as_str(), "99272758");
    assert_eq!(person.email().as_str(), "berniceyu@example.com");
    assert_eq!(
        person.home_address().as_str(),
        "Blk 30 Lorong 3 Serangoon Gardens"
    );
    assert_eq!(person.work_address(), None);
    assert_eq!(
        person.quarantine_address(),
        Some(&address("Blk 12 Tampines Ave 4"))
    );
    assert_eq!(person.shn_period(), None);
    assert_eq!(person.case_number().map(|c| c.as_str()), Some("C-1001"));
    assert_eq!(person.next_of_kin_name(), None);
    assert_eq!(person.next_of_kin_phone(), Some(&phone("88887777")));
    assert_eq!(person.next_of_kin_address(), None);
    assert_eq!(person.tags().len(), 1);
    assert!(person.tags().contains(&tag("positive")));
}

#[test]
fn build_fails_for_each_missing_required_field() {
    let complete = || {
        Person::builder()
            .name(name("Alex"))
            .phone(phone("91234567"))
            .email(email("alex@example.com"))
            .home_address(address("123 Clementi Rd"))
            .tags(NO_TAGS)
    };
    assert!(complete().build().is_ok());

    let cases = [
        (
            PersonField::Name,
            Person::builder()
                .phone(phone("91234567"))
                .email(email("alex@example.com"))
                .home_address(address("123 Clementi Rd"))
                .tags(NO_TAGS),
        ),
        (
            PersonField::Phone,
            Person::builder()
                .name(name("Alex"))
                .email(email("alex@example.com"))
                .home_address(address("123 Clementi Rd"))
                .tags(NO_TAGS),
        ),
        (
            PersonField::Email,
            Person::builder()
                .name(name("Alex"))
                .phone(phone("91234567"))
                .home_address(address("123 Clementi Rd"))
                .tags(NO_TAGS),
        ),
        (
            PersonField::HomeAddress,
            Person::builder()
                .name(name("Alex"))
                .phone(phone("91234567"))
                .email(email("alex@example.com"))
                .tags(NO_TAGS),
        ),
        (
            PersonField::Tags,
            Person::builder()
                .name(name("Alex"))
                .phone(phone("91234567"))
                .email(email("alex@example.com"))
                .home_address(address("123 Clementi Rd")),
        ),
    ];

    for (field, builder) in cases {
        let err = builder.build().unwrap_err();
        assert_eq!(err, PersonError::MissingFields(vec![field]));
    }
}

#[test]
fn build_reports_all_missing_fields_together() {
    let err = Person::builder()
        .case_number(Some(CaseNumber::new("C-1").unwrap()))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        PersonError::MissingFields(vec![
            PersonField::Name,
            PersonField::Phone,
            PersonField::Email,
            PersonField::HomeAddress,
            PersonField::Tags,
        ])
    );
}

#[test]
fn tags_are_deduplicated_and_unaffected_by_caller_copies() {
    let person = alex()
        .to_builder()
        .tags([tag("family"), tag("family"), tag("positive")])
        .build()
        .unwrap();
    assert_eq!(person.tags().len(), 2);

    let mut copy = person.tags().clone();
    copy.insert(tag("edited"));
    copy.remove(&tag("family"));

    assert_eq!(person.tags().len(), 2);
    assert!(person.tags().contains(&tag("family")));
    assert!(!person.tags().contains(&tag("edited")));
}

#[test]
fn same_person_uses_name_only() {
    let a = alex();
    assert!(a.is_same_person(Some(&a)));
    assert!(!a.is_same_person(None));

    let other_contact = a
        .to_builder()
        .phone(phone("80000000"))
        .email(email("alex.other@example.com"))
        .build()
        .unwrap();
    assert!(a.is_same_person(Some(&other_contact)));
    assert_ne!(a, other_contact);

    let renamed = a.to_builder().name(name("Alexis")).build().unwrap();
    assert!(!a.is_same_person(Some(&renamed)));
}

#[test]
fn full_equality_is_reflexive_symmetric_and_consistent() {
    let a = alex();
    let b = alex();
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    for _ in 0..3 {
        assert!(a == b);
    }

    let tagged = a.to_builder().tags([tag("positive")]).build().unwrap();
    assert_ne!(a, tagged);
    assert_ne!(tagged, a);
}

#[test]
fn case_details_do_not_affect_equality_or_hash() {
    let a = alex();
    let b = a
        .to_builder()
        .case_number(Some(CaseNumber::new("C-0042").unwrap()))
        .shn_period(Some(ShnPeriod::new("2021-10-01 to 2021-10-14").unwrap()))
        .build()
        .unwrap();

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
#[allow(deprecated)]
fn from_identity_leaves_every_case_detail_absent() {
    let person = Person::from_identity(
        name("Alex"),
        phone("91234567"),
        email("alex@example.com"),
        address("123 Clementi Rd"),
        [tag("positive")],
    );
    assert_eq!(person.details(), &CaseDetails::default());
    assert_eq!(person.tags().len(), 1);
}

#[test]
fn display_matches_canonical_summary() {
    assert_eq!(
        alex().to_string(),
        "Alex; Phone: 91234567; Email: alex@example.com; Home Address: 123 Clementi Rd; \
         Work Address: null; Quarantine Address: null; SHN Period: null; Case Number: null; \
         Next of Kin Name: null; Next of Kin Phone: null; Next of Kin Address: null"
    );
}

#[test]
fn display_renders_present_details_and_tags() {
    let person = alex()
        .to_builder()
        .work_address(Some(address("1 Fusionopolis Way")))
        .case_number(Some(CaseNumber::new("C-7").unwrap()))
        .tags([tag("positive")])
        .build()
        .unwrap();
    let rendered = person.to_string();
    assert!(rendered.contains("; Work Address: 1 Fusionopolis Way;"));
    assert!(rendered.contains("; Case Number: C-7;"));
    assert!(rendered.ends_with("; Next of Kin Address: null; Tags: [positive]"));
}

#[test]
fn serialization_uses_snake_case_fields_and_omits_nothing() {
    let person = alex()
        .to_builder()
        .case_number(Some(CaseNumber::new("C-0042").unwrap()))
        .tags([tag("positive")])
        .build()
        .unwrap();

    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(json["name"], "Alex");
    assert_eq!(json["home_address"], "123 Clementi Rd");
    assert_eq!(json["case_number"], "C-0042");
    assert_eq!(json["work_address"], serde_json::Value::Null);
    assert_eq!(json["tags"], serde_json::json!(["positive"]));

    let decoded: Person = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, person);
    assert_eq!(decoded.case_number(), person.case_number());
}

#[test]
fn deserialize_rejects_missing_tags_and_blank_values() {
    let missing_tags = serde_json::json!({
        "name": "Alex",
        "phone": "91234567",
        "email": "alex@example.com",
        "home_address": "123 Clementi Rd"
    });
    let err = serde_json::from_value::<Person>(missing_tags).unwrap_err();
    assert!(err.to_string().contains("tags"), "unexpected error: {err}");

    let blank_email = serde_json::json!({
        "name": "Alex",
        "phone": "91234567",
        "email": "  ",
        "home_address": "123 Clementi Rd",
        "tags": []
    });
    let err = serde_json::from_value::<Person>(blank_email).unwrap_err();
    assert!(
        err.to_string().contains("email cannot be blank"),
        "unexpected error: {err}"
    );
}
