//! Indexed in-process store.
//!
//! # Responsibility
//! - Keep all campus entities in process memory with identity indexes.
//! - Preserve event insertion order and request creation order.
//!
//! # Invariants
//! - `event_order` holds exactly the keys of `events`, in insertion order.
//! - `requests` stays sorted by `created_at`, FIFO for equal stamps; new
//!   entries are placed by binary search instead of re-sorting the list.

use super::{CampusStore, StoreError, StoreResult};
use crate::model::event::Event;
use crate::model::registration::{Registration, RegistrationStatus};
use crate::model::request::{RequestStatus, ServiceRequest};
use crate::model::student::Student;
use chrono::NaiveDate;
use std::collections::HashMap;

/// In-process store backed by indexed collections.
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: HashMap<String, Event>,
    event_order: Vec<String>,
    students: HashMap<String, Student>,
    registrations: Vec<Registration>,
    requests: Vec<ServiceRequest>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CampusStore for MemoryStore {
    fn insert_event(&mut self, event: &Event) -> StoreResult<()> {
        if self.events.contains_key(&event.event_id) {
            return Err(StoreError::InvalidData(format!(
                "event `{}` already stored",
                event.event_id
            )));
        }
        self.event_order.push(event.event_id.clone());
        self.events.insert(event.event_id.clone(), event.clone());
        Ok(())
    }

    fn event_exists(&self, event_id: &str) -> StoreResult<bool> {
        Ok(self.events.contains_key(event_id))
    }

    fn get_event(&self, event_id: &str) -> StoreResult<Option<Event>> {
        Ok(self.events.get(event_id).cloned())
    }

    fn list_events(&self) -> StoreResult<Vec<Event>> {
        Ok(self
            .event_order
            .iter()
            .filter_map(|id| self.events.get(id))
            .cloned()
            .collect())
    }

    fn events_in_slot(&self, date: NaiveDate, venue: &str) -> StoreResult<Vec<Event>> {
        Ok(self
            .event_order
            .iter()
            .filter_map(|id| self.events.get(id))
            .filter(|event| event.date == date && event.venue == venue)
            .cloned()
            .collect())
    }

    fn insert_student(&mut self, student: &Student) -> StoreResult<()> {
        if self.students.contains_key(&student.student_id) {
            return Err(StoreError::InvalidData(format!(
                "student `{}` already stored",
                student.student_id
            )));
        }
        self.students
            .insert(student.student_id.clone(), student.clone());
        Ok(())
    }

    fn student_exists(&self, student_id: &str) -> StoreResult<bool> {
        Ok(self.students.contains_key(student_id))
    }

    fn insert_registration(&mut self, registration: &Registration) -> StoreResult<()> {
        if self.registration_exists(&registration.student_id, &registration.event_id)? {
            return Err(StoreError::InvalidData(format!(
                "registration `{}/{}` already stored",
                registration.student_id, registration.event_id
            )));
        }
        self.registrations.push(registration.clone());
        Ok(())
    }

    fn registration_exists(&self, student_id: &str, event_id: &str) -> StoreResult<bool> {
        Ok(self
            .registrations
            .iter()
            .any(|reg| reg.student_id == student_id && reg.event_id == event_id))
    }

    fn count_registrations(
        &self,
        event_id: &str,
        status: RegistrationStatus,
    ) -> StoreResult<u32> {
        let count = self
            .registrations
            .iter()
            .filter(|reg| reg.event_id == event_id && reg.status == status)
            .count();
        Ok(count as u32)
    }

    fn insert_request(&mut self, request: &ServiceRequest) -> StoreResult<()> {
        if self.request_exists(&request.request_id)? {
            return Err(StoreError::InvalidData(format!(
                "request `{}` already stored",
                request.request_id
            )));
        }
        let position = self
            .requests
            .partition_point(|stored| stored.created_at <= request.created_at);
        self.requests.insert(position, request.clone());
        Ok(())
    }

    fn request_exists(&self, request_id: &str) -> StoreResult<bool> {
        Ok(self
            .requests
            .iter()
            .any(|request| request.request_id == request_id))
    }

    fn get_request(&self, request_id: &str) -> StoreResult<Option<ServiceRequest>> {
        Ok(self
            .requests
            .iter()
            .find(|request| request.request_id == request_id)
            .cloned())
    }

    fn set_request_status(&mut self, request_id: &str, status: RequestStatus) -> StoreResult<()> {
        let request = self
            .requests
            .iter_mut()
            .find(|request| request.request_id == request_id)
            .ok_or_else(|| {
                StoreError::InvalidData(format!("request `{request_id}` not stored"))
            })?;
        request.status = status;
        Ok(())
    }

    fn list_requests(&self) -> StoreResult<Vec<ServiceRequest>> {
        Ok(self.requests.clone())
    }
}
