//! Healthcare use-case service.
//!
//! # Responsibility
//! - Keep patients and prescriptions in keyed repositories.
//! - Maintain a patient -> prescriptions index for lookups.
//!
//! # Invariants
//! - A prescription can only be added for a stored patient.
//! - The index reflects the prescriptions repository as of the last
//!   `build_prescription_map` call, in prescription insertion order.

use crate::model::entity::EntityId;
use crate::model::healthcare::{Patient, Prescription};
use crate::repo::keyed_repo::{KeyedRepository, RepoError, RepoResult};
use log::debug;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct HealthSystem {
    patients: KeyedRepository<Patient>,
    prescriptions: KeyedRepository<Prescription>,
    by_patient: BTreeMap<EntityId, Vec<Prescription>>,
}

impl HealthSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_patient(&mut self, patient: Patient) -> RepoResult<()> {
        self.patients.add(patient)
    }

    /// Stores a prescription for an existing patient.
    ///
    /// # Errors
    /// - `NotFound(patient_id)` when the owning patient is not stored.
    /// - `DuplicateKey` when the prescription id is already used.
    pub fn add_prescription(&mut self, prescription: Prescription) -> RepoResult<()> {
        if !self.patients.contains(prescription.patient_id) {
            return Err(RepoError::NotFound(prescription.patient_id));
        }
        self.prescriptions.add(prescription)
    }

    /// Rebuilds the patient index from scratch.
    pub fn build_prescription_map(&mut self) {
        self.by_patient.clear();
        for prescription in self.prescriptions.iter() {
            self.by_patient
                .entry(prescription.patient_id)
                .or_default()
                .push(prescription.clone());
        }
        debug!(
            "event=prescription_index module=health status=ok patients={} prescriptions={}",
            self.by_patient.len(),
            self.prescriptions.len()
        );
    }

    /// Indexed prescriptions of one patient; empty when there are none.
    pub fn prescriptions_for(&self, patient_id: EntityId) -> &[Prescription] {
        self.by_patient
            .get(&patient_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn get_patient(&self, id: EntityId) -> RepoResult<&Patient> {
        self.patients.get_by_id(id)
    }

    /// Removes a patient together with all of their prescriptions.
    pub fn remove_patient(&mut self, id: EntityId) -> RepoResult<Patient> {
        let patient = self.patients.remove(id)?;
        let owned: Vec<EntityId> = self
            .prescriptions
            .iter()
            .filter(|prescription| prescription.patient_id == id)
            .map(Prescription::id)
            .collect();
        for prescription_id in owned {
            self.prescriptions.remove(prescription_id)?;
        }
        self.by_patient.remove(&id);
        Ok(patient)
    }

    pub fn patients(&self) -> Vec<Patient> {
        self.patients.get_all()
    }

    pub fn prescriptions(&self) -> Vec<Prescription> {
        self.prescriptions.get_all()
    }
}
