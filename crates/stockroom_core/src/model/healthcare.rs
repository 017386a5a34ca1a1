//! Patient and prescription records.

use crate::model::entity::{EntityId, Keyed};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    id: EntityId,
    pub name: String,
    pub age: u32,
    pub gender: String,
}

impl Patient {
    pub fn new(id: EntityId, name: impl Into<String>, age: u32, gender: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            gender: gender.into(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }
}

impl Keyed for Patient {
    type Key = EntityId;

    fn key(&self) -> EntityId {
        self.id
    }
}

impl Display for Patient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (ID:{}, Age:{}, Gender:{})",
            self.name, self.id, self.age, self.gender
        )
    }
}

/// Medication issued to one patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    id: EntityId,
    /// Key of the owning `Patient`.
    pub patient_id: EntityId,
    pub medication_name: String,
    pub date_issued: NaiveDate,
}

impl Prescription {
    pub fn new(
        id: EntityId,
        patient_id: EntityId,
        medication_name: impl Into<String>,
        date_issued: NaiveDate,
    ) -> Self {
        Self {
            id,
            patient_id,
            medication_name: medication_name.into(),
            date_issued,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }
}

impl Keyed for Prescription {
    type Key = EntityId;

    fn key(&self) -> EntityId {
        self.id
    }
}

impl Display for Prescription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (ID:{}) - {}",
            self.medication_name,
            self.id,
            self.date_issued.format("%Y-%m-%d")
        )
    }
}
