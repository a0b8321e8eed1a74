//! Person record domain model.
//!
//! # Responsibility
//! - Define the immutable contact/case record tracked by the application.
//! - Own the weak (same-person) and strong (`==`) equality contracts.
//! - Render the canonical one-line summary used by list views and logs.
//!
//! # Invariants
//! - Name, phone, email, home address and tag set are always present.
//! - Case details may be absent individually; there is no joint constraint.
//! - Records are never mutated after construction; edits build a new record.
//! - `==` and `Hash` both ignore case details, so equal records hash equally.

use crate::model::fields::{Address, CaseNumber, Email, Name, Phone, ShnPeriod, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Required attribute of a [`Person`], reported when construction fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PersonField {
    Name,
    Phone,
    Email,
    HomeAddress,
    Tags,
}

impl PersonField {
    /// Stable snake_case field id, matching the serialized field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::HomeAddress => "home_address",
            Self::Tags => "tags",
        }
    }
}

impl Display for PersonField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Construction error for [`PersonBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonError {
    /// One or more required fields were not supplied, in declaration order.
    MissingFields(Vec<PersonField>),
}

impl Display for PersonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields(fields) => {
                let names = fields
                    .iter()
                    .map(|field| field.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "missing required person fields: {names}")
            }
        }
    }
}

impl Error for PersonError {}

/// Secondary case attributes of a [`Person`].
///
/// Every attribute is optional on its own. None of them take part in
/// equality or hashing of the owning record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseDetails {
    pub work_address: Option<Address>,
    pub quarantine_address: Option<Address>,
    /// Stay-home-notice (isolation) period.
    pub shn_period: Option<ShnPeriod>,
    pub case_number: Option<CaseNumber>,
    pub next_of_kin_name: Option<Name>,
    pub next_of_kin_phone: Option<Phone>,
    pub next_of_kin_address: Option<Address>,
}

/// Immutable contact/case record.
///
/// Two equality notions exist:
/// - [`Person::is_same_person`]: names match. Used for duplicate detection.
/// - `==`: name, phone, email, home address and tag set all match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    home_address: Address,
    #[serde(flatten)]
    details: CaseDetails,
    tags: BTreeSet<Tag>,
}

impl Person {
    /// Creates a record from every attribute.
    ///
    /// Duplicate tags collapse into one.
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        home_address: Address,
        details: CaseDetails,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            home_address,
            details,
            tags: tags.into_iter().collect(),
        }
    }

    /// Creates a record with identity fields only; every case detail is `None`.
    #[deprecated(
        since = "0.1.0",
        note = "use `Person::new` and pass `CaseDetails` explicitly"
    )]
    pub fn from_identity(
        name: Name,
        phone: Phone,
        email: Email,
        home_address: Address,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self::new(
            name,
            phone,
            email,
            home_address,
            CaseDetails::default(),
            tags,
        )
    }

    /// Starts a builder for the fallible construction path.
    pub fn builder() -> PersonBuilder {
        PersonBuilder::default()
    }

    /// Returns a builder seeded with this record's values.
    ///
    /// Building it after changes yields a new record; `self` is untouched.
    pub fn to_builder(&self) -> PersonBuilder {
        PersonBuilder {
            name: Some(self.name.clone()),
            phone: Some(self.phone.clone()),
            email: Some(self.email.clone()),
            home_address: Some(self.home_address.clone()),
            details: self.details.clone(),
            tags: Some(self.tags.clone()),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn home_address(&self) -> &Address {
        &self.home_address
    }

    pub fn work_address(&self) -> Option<&Address> {
        self.details.work_address.as_ref()
    }

    pub fn quarantine_address(&self) -> Option<&Address> {
        self.details.quarantine_address.as_ref()
    }

    pub fn shn_period(&self) -> Option<&ShnPeriod> {
        self.details.shn_period.as_ref()
    }

    pub fn case_number(&self) -> Option<&CaseNumber> {
        self.details.case_number.as_ref()
    }

    pub fn next_of_kin_name(&self) -> Option<&Name> {
        self.details.next_of_kin_name.as_ref()
    }

    pub fn next_of_kin_phone(&self) -> Option<&Phone> {
        self.details.next_of_kin_phone.as_ref()
    }

    pub fn next_of_kin_address(&self) -> Option<&Address> {
        self.details.next_of_kin_address.as_ref()
    }

    /// Returns all case details at once.
    pub fn details(&self) -> &CaseDetails {
        &self.details
    }

    /// Returns a read-only view of the tag set.
    ///
    /// The view is a shared borrow, so callers cannot insert or remove:
    ///
    /// ```compile_fail
    /// use track2gather_core::{Person, Tag};
    ///
    /// fn retag(person: &Person) {
    ///     person.tags().insert(Tag::new("edited").unwrap());
    /// }
    /// ```
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns true when `other` refers to the same person by name.
    ///
    /// This is weaker than `==` and is what duplicate detection uses.
    pub fn is_same_person(&self, other: Option<&Person>) -> bool {
        other.is_some_and(|other| std::ptr::eq(self, other) || other.name == self.name)
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (self.name == other.name
                && self.phone == other.phone
                && self.email == other.email
                && self.home_address == other.home_address
                && self.tags == other.tags)
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.phone.hash(state);
        self.email.hash(state);
        self.home_address.hash(state);
        self.tags.hash(state);
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let details = &self.details;
        write!(
            f,
            "{}; Phone: {}; Email: {}; Home Address: {}",
            self.name, self.phone, self.email, self.home_address
        )?;
        write!(
            f,
            "; Work Address: {}; Quarantine Address: {}; SHN Period: {}; Case Number: {}",
            OrNull(details.work_address.as_ref()),
            OrNull(details.quarantine_address.as_ref()),
            OrNull(details.shn_period.as_ref()),
            OrNull(details.case_number.as_ref()),
        )?;
        write!(
            f,
            "; Next of Kin Name: {}; Next of Kin Phone: {}; Next of Kin Address: {}",
            OrNull(details.next_of_kin_name.as_ref()),
            OrNull(details.next_of_kin_phone.as_ref()),
            OrNull(details.next_of_kin_address.as_ref()),
        )?;

        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{tag}")?;
            }
        }
        Ok(())
    }
}

struct OrNull<'a, T>(Option<&'a T>);

impl<T: Display> Display for OrNull<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => Display::fmt(value, f),
            None => f.write_str("null"),
        }
    }
}

/// Builder that checks every required field is present before producing a
/// [`Person`].
///
/// Case details are accepted as given, including `None`.
#[derive(Debug, Clone, Default)]
pub struct PersonBuilder {
    name: Option<Name>,
    phone: Option<Phone>,
    email: Option<Email>,
    home_address: Option<Address>,
    details: CaseDetails,
    tags: Option<BTreeSet<Tag>>,
}

impl PersonBuilder {
    pub fn name(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    pub fn phone(mut self, phone: Phone) -> Self {
        self.phone = Some(phone);
        self
    }

    pub fn email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn home_address(mut self, home_address: Address) -> Self {
        self.home_address = Some(home_address);
        self
    }

    pub fn work_address(mut self, value: Option<Address>) -> Self {
        self.details.work_address = value;
        self
    }

    pub fn quarantine_address(mut self, value: Option<Address>) -> Self {
        self.details.quarantine_address = value;
        self
    }

    pub fn shn_period(mut self, value: Option<ShnPeriod>) -> Self {
        self.details.shn_period = value;
        self
    }

    pub fn case_number(mut self, value: Option<CaseNumber>) -> Self {
        self.details.case_number = value;
        self
    }

    pub fn next_of_kin_name(mut self, value: Option<Name>) -> Self {
        self.details.next_of_kin_name = value;
        self
    }

    pub fn next_of_kin_phone(mut self, value: Option<Phone>) -> Self {
        self.details.next_of_kin_phone = value;
        self
    }

    pub fn next_of_kin_address(mut self, value: Option<Address>) -> Self {
        self.details.next_of_kin_address = value;
        self
    }

    /// Replaces all case details at once.
    pub fn details(mut self, details: CaseDetails) -> Self {
        self.details = details;
        self
    }

    /// Sets the full tag set. An empty iterator is a valid, present tag set.
    pub fn tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    /// Produces the record, or reports every missing required field.
    ///
    /// # Errors
    /// - `PersonError::MissingFields` when name, phone, email, home address or
    ///   tags were never supplied. No partial record is produced.
    pub fn build(self) -> Result<Person, PersonError> {
        let missing = [
            (PersonField::Name, self.name.is_none()),
            (PersonField::Phone, self.phone.is_none()),
            (PersonField::Email, self.email.is_none()),
            (PersonField::HomeAddress, self.home_address.is_none()),
            (PersonField::Tags, self.tags.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect::<Vec<_>>();

        match (
            self.name,
            self.phone,
            self.email,
            self.home_address,
            self.tags,
        ) {
            (Some(name), Some(phone), Some(email), Some(home_address), Some(tags)) => Ok(Person {
                name,
                phone,
                email,
                home_address,
                details: self.details,
                tags,
            }),
            _ => Err(PersonError::MissingFields(missing)),
        }
    }
}
