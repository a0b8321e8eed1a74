//! In-memory list of tracked persons.
//!
//! # Responsibility
//! - Hold the records the application is currently tracking.
//! - Reject a second record for a person who is already tracked.
//!
//! # Invariants
//! - No two entries satisfy `Person::is_same_person`.
//! - Insertion order is preserved; edits keep the entry's position.
//! - Log events carry counts and error codes only, never record contents.

use crate::model::fields::Name;
use crate::model::person::Person;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ContactBookResult<T> = Result<T, ContactBookError>;

/// Error for contact book mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactBookError {
    /// A record with the same name is already tracked.
    DuplicatePerson(Name),
    /// The target record is not tracked.
    PersonNotFound(Name),
}

impl Display for ContactBookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePerson(name) => write!(f, "person already exists: {name}"),
            Self::PersonNotFound(name) => write!(f, "person not found: {name}"),
        }
    }
}

impl Error for ContactBookError {}

/// Ordered collection of unique persons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    persons: Vec<Person>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a record for the same person is tracked.
    pub fn contains(&self, person: &Person) -> bool {
        self.persons
            .iter()
            .any(|existing| existing.is_same_person(Some(person)))
    }

    /// Appends a new record.
    ///
    /// # Errors
    /// - `DuplicatePerson` when a record with the same name exists.
    pub fn add(&mut self, person: Person) -> ContactBookResult<()> {
        if self.contains(&person) {
            warn!(
                "event=person_add module=contact_book status=error error_code=duplicate_person total={}",
                self.persons.len()
            );
            return Err(ContactBookError::DuplicatePerson(person.name().clone()));
        }

        self.persons.push(person);
        info!(
            "event=person_add module=contact_book status=ok total={}",
            self.persons.len()
        );
        Ok(())
    }

    /// Replaces `target` with `edited` in place.
    ///
    /// `target` is matched with full equality. `edited` may keep the same
    /// name or take a name no other entry uses.
    ///
    /// # Errors
    /// - `PersonNotFound` when `target` is not tracked.
    /// - `DuplicatePerson` when `edited` collides with a different entry.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> ContactBookResult<()> {
        let Some(index) = self.persons.iter().position(|existing| existing == target) else {
            warn!(
                "event=person_set module=contact_book status=error error_code=person_not_found"
            );
            return Err(ContactBookError::PersonNotFound(target.name().clone()));
        };

        if !target.is_same_person(Some(&edited)) && self.contains(&edited) {
            warn!(
                "event=person_set module=contact_book status=error error_code=duplicate_person"
            );
            return Err(ContactBookError::DuplicatePerson(edited.name().clone()));
        }

        self.persons[index] = edited;
        info!("event=person_set module=contact_book status=ok index={index}");
        Ok(())
    }

    /// Removes a record matched with full equality and returns it.
    ///
    /// # Errors
    /// - `PersonNotFound` when no equal record is tracked.
    pub fn remove(&mut self, person: &Person) -> ContactBookResult<Person> {
        let Some(index) = self.persons.iter().position(|existing| existing == person) else {
            warn!(
                "event=person_remove module=contact_book status=error error_code=person_not_found"
            );
            return Err(ContactBookError::PersonNotFound(person.name().clone()));
        };

        let removed = self.persons.remove(index);
        info!(
            "event=person_remove module=contact_book status=ok total={}",
            self.persons.len()
        );
        Ok(removed)
    }

    /// Returns tracked records in insertion order.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}
