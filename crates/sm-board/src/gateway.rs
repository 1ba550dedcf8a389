use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use sm_client::{ApiClient, ClientResult};
use sm_core::{Appointment, AppointmentStatus};

/// Seam between the board engine and the appointment-status API.
///
/// The engine only ever needs these two calls; keeping them behind a trait
/// lets tests drive the whole optimistic protocol with a scripted gateway.
#[async_trait]
pub trait StatusGateway: Send + Sync {
    /// PATCH an appointment's status/position with optimistic locking
    async fn move_appointment(
        &self,
        id: Uuid,
        status: AppointmentStatus,
        position: i32,
        expected_version: i32,
    ) -> ClientResult<Appointment>;

    /// Fetch the authoritative board, optionally filtered to one technician
    async fn fetch_board(&self, technician_id: Option<Uuid>) -> ClientResult<Vec<Appointment>>;
}

#[async_trait]
impl<G: StatusGateway + ?Sized> StatusGateway for Arc<G> {
    async fn move_appointment(
        &self,
        id: Uuid,
        status: AppointmentStatus,
        position: i32,
        expected_version: i32,
    ) -> ClientResult<Appointment> {
        (**self)
            .move_appointment(id, status, position, expected_version)
            .await
    }

    async fn fetch_board(&self, technician_id: Option<Uuid>) -> ClientResult<Vec<Appointment>> {
        (**self).fetch_board(technician_id).await
    }
}

#[async_trait]
impl StatusGateway for ApiClient {
    async fn move_appointment(
        &self,
        id: Uuid,
        status: AppointmentStatus,
        position: i32,
        expected_version: i32,
    ) -> ClientResult<Appointment> {
        ApiClient::move_appointment(self, id, status, position, expected_version).await
    }

    async fn fetch_board(&self, technician_id: Option<Uuid>) -> ClientResult<Vec<Appointment>> {
        ApiClient::fetch_board(self, technician_id).await
    }
}
