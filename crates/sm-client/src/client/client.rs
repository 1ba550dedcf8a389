use crate::{ClientError, ClientResult};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use sm_core::{
    Appointment, AppointmentDto, AppointmentStatus, Customer, CustomerDto, HistoryEntry,
    HistoryEntryDto, Message, MessageDto, MessageTemplate, MessageTemplateDto, ServiceLine,
    ServiceLineDto, Vehicle, VehicleDto,
};

/// HTTP client for the shop management REST API
#[derive(Clone)]
pub struct ApiClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a new client with a per-request timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::from_reqwest)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Build a request for an API path
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request and map error envelopes onto `ClientError`
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            if let Some(error) = body.get("error") {
                let code = error
                    .get("code")
                    .and_then(|v| v.as_str())
                    .unwrap_or("UNKNOWN")
                    .to_string();
                let message = error
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or("Unknown error")
                    .to_string();

                return Err(match code.as_str() {
                    "CONFLICT" => ClientError::Conflict {
                        message,
                        current_version: error
                            .get("current_version")
                            .and_then(Value::as_i64)
                            .map(|v| v as i32),
                        location: ErrorLocation::from(Location::caller()),
                    },
                    "NOT_FOUND" => ClientError::NotFound {
                        message,
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => ClientError::Api {
                        code,
                        message,
                        location: ErrorLocation::from(Location::caller()),
                    },
                });
            }

            return Err(ClientError::Api {
                code: status.as_u16().to_string(),
                message: "Unexpected error response".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(body)
    }

    /// Pull `key` out of the response envelope and deserialize it
    fn decode<T: DeserializeOwned>(mut body: Value, key: &str) -> ClientResult<T> {
        let value = body.get_mut(key).map(Value::take).unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(ClientError::from_json)
    }

    // =========================================================================
    // Appointment Operations
    // =========================================================================

    /// Get an appointment by ID
    pub async fn get_appointment(&self, id: Uuid) -> ClientResult<Appointment> {
        let req = self.request(Method::GET, &format!("/api/v1/appointments/{}", id));
        let body = self.execute(req).await?;
        let dto: AppointmentDto = Self::decode(body, "appointment")?;
        Ok(Appointment::try_from(dto)?)
    }

    /// Move an appointment to a new status/position (optimistic locking)
    pub async fn move_appointment(
        &self,
        id: Uuid,
        status: AppointmentStatus,
        position: i32,
        expected_version: i32,
    ) -> ClientResult<Appointment> {
        #[derive(Serialize)]
        struct MoveRequest<'a> {
            status: &'a str,
            position: i32,
            expected_version: i32,
        }

        let body = MoveRequest {
            status: status.as_str(),
            position,
            expected_version,
        };
        let req = self
            .request(Method::PATCH, &format!("/api/v1/appointments/{}", id))
            .json(&body);
        let body = self.execute(req).await?;
        let dto: AppointmentDto = Self::decode(body, "appointment")?;
        Ok(Appointment::try_from(dto)?)
    }

    /// Update appointment fields (optimistic locking)
    pub async fn update_appointment(
        &self,
        id: Uuid,
        notes: Option<&str>,
        technician_id: Option<&str>,
        start_time: Option<i64>,
        expected_version: i32,
    ) -> ClientResult<Appointment> {
        #[derive(Serialize)]
        struct UpdateRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            notes: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            technician_id: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            start_time: Option<i64>,
            expected_version: i32,
        }

        let body = UpdateRequest {
            notes,
            technician_id,
            start_time,
            expected_version,
        };
        let req = self
            .request(Method::PATCH, &format!("/api/v1/appointments/{}", id))
            .json(&body);
        let body = self.execute(req).await?;
        let dto: AppointmentDto = Self::decode(body, "appointment")?;
        Ok(Appointment::try_from(dto)?)
    }

    /// Delete an appointment
    pub async fn delete_appointment(&self, id: Uuid) -> ClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/api/v1/appointments/{}", id));
        self.execute(req).await
    }

    // =========================================================================
    // Board Operations
    // =========================================================================

    /// Fetch the full board (optionally filtered to one technician's bays)
    pub async fn fetch_board(&self, technician_id: Option<Uuid>) -> ClientResult<Vec<Appointment>> {
        let url = match technician_id {
            Some(id) => format!("/api/v1/board?technician_id={}", id),
            None => "/api/v1/board".to_string(),
        };

        let req = self.request(Method::GET, &url);
        let body = self.execute(req).await?;
        let dtos: Vec<AppointmentDto> = Self::decode(body, "appointments")?;
        dtos.into_iter()
            .map(|dto| Appointment::try_from(dto).map_err(ClientError::from))
            .collect()
    }

    // =========================================================================
    // Service Line Operations
    // =========================================================================

    /// Add a service line to an appointment
    pub async fn create_service(
        &self,
        appointment_id: Uuid,
        name: &str,
        price_cents: i64,
    ) -> ClientResult<ServiceLine> {
        #[derive(Serialize)]
        struct CreateServiceRequest<'a> {
            name: &'a str,
            price_cents: i64,
        }

        let body = CreateServiceRequest { name, price_cents };
        let req = self
            .request(
                Method::POST,
                &format!("/api/v1/appointments/{}/services", appointment_id),
            )
            .json(&body);
        let body = self.execute(req).await?;
        let dto: ServiceLineDto = Self::decode(body, "service")?;
        Ok(ServiceLine::try_from(dto)?)
    }

    /// Update a service line
    pub async fn update_service(
        &self,
        id: Uuid,
        name: Option<&str>,
        price_cents: Option<i64>,
    ) -> ClientResult<ServiceLine> {
        #[derive(Serialize)]
        struct UpdateServiceRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            price_cents: Option<i64>,
        }

        let body = UpdateServiceRequest { name, price_cents };
        let req = self
            .request(Method::PATCH, &format!("/api/v1/services/{}", id))
            .json(&body);
        let body = self.execute(req).await?;
        let dto: ServiceLineDto = Self::decode(body, "service")?;
        Ok(ServiceLine::try_from(dto)?)
    }

    /// Delete a service line
    pub async fn delete_service(&self, id: Uuid) -> ClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/api/v1/services/{}", id));
        self.execute(req).await
    }

    // =========================================================================
    // Message Operations
    // =========================================================================

    /// List messages on an appointment
    pub async fn list_messages(&self, appointment_id: Uuid) -> ClientResult<Vec<Message>> {
        let req = self.request(
            Method::GET,
            &format!("/api/v1/appointments/{}/messages", appointment_id),
        );
        let body = self.execute(req).await?;
        let dtos: Vec<MessageDto> = Self::decode(body, "messages")?;
        dtos.into_iter()
            .map(|dto| Message::try_from(dto).map_err(ClientError::from))
            .collect()
    }

    /// Send an outbound message on an appointment
    pub async fn send_message(&self, appointment_id: Uuid, body_text: &str) -> ClientResult<Message> {
        #[derive(Serialize)]
        struct SendMessageRequest<'a> {
            body: &'a str,
        }

        let body = SendMessageRequest { body: body_text };
        let req = self
            .request(
                Method::POST,
                &format!("/api/v1/appointments/{}/messages", appointment_id),
            )
            .json(&body);
        let body = self.execute(req).await?;
        let dto: MessageDto = Self::decode(body, "message")?;
        Ok(Message::try_from(dto)?)
    }

    /// Delete a message
    pub async fn delete_message(&self, id: Uuid) -> ClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/api/v1/messages/{}", id));
        self.execute(req).await
    }

    // =========================================================================
    // Customer Operations
    // =========================================================================

    /// List all customers
    pub async fn list_customers(&self) -> ClientResult<Vec<Customer>> {
        let req = self.request(Method::GET, "/api/v1/customers");
        let body = self.execute(req).await?;
        let dtos: Vec<CustomerDto> = Self::decode(body, "customers")?;
        dtos.into_iter()
            .map(|dto| Customer::try_from(dto).map_err(ClientError::from))
            .collect()
    }

    /// Get a customer by ID
    pub async fn get_customer(&self, id: Uuid) -> ClientResult<Customer> {
        let req = self.request(Method::GET, &format!("/api/v1/customers/{}", id));
        let body = self.execute(req).await?;
        let dto: CustomerDto = Self::decode(body, "customer")?;
        Ok(Customer::try_from(dto)?)
    }

    /// Create a new customer
    pub async fn create_customer(
        &self,
        first_name: &str,
        last_name: &str,
        phone: &str,
        email: Option<&str>,
    ) -> ClientResult<Customer> {
        #[derive(Serialize)]
        struct CreateCustomerRequest<'a> {
            first_name: &'a str,
            last_name: &'a str,
            phone: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            email: Option<&'a str>,
        }

        let body = CreateCustomerRequest {
            first_name,
            last_name,
            phone,
            email,
        };
        let req = self.request(Method::POST, "/api/v1/customers").json(&body);
        let body = self.execute(req).await?;
        let dto: CustomerDto = Self::decode(body, "customer")?;
        Ok(Customer::try_from(dto)?)
    }

    /// Update a customer
    pub async fn update_customer(
        &self,
        id: Uuid,
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> ClientResult<Customer> {
        #[derive(Serialize)]
        struct UpdateCustomerRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            first_name: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            last_name: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            phone: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            email: Option<&'a str>,
        }

        let body = UpdateCustomerRequest {
            first_name,
            last_name,
            phone,
            email,
        };
        let req = self
            .request(Method::PATCH, &format!("/api/v1/customers/{}", id))
            .json(&body);
        let body = self.execute(req).await?;
        let dto: CustomerDto = Self::decode(body, "customer")?;
        Ok(Customer::try_from(dto)?)
    }

    /// Get a customer's visit history
    pub async fn customer_history(&self, customer_id: Uuid) -> ClientResult<Vec<HistoryEntry>> {
        let req = self.request(
            Method::GET,
            &format!("/api/v1/customers/{}/history", customer_id),
        );
        let body = self.execute(req).await?;
        let dtos: Vec<HistoryEntryDto> = Self::decode(body, "history")?;
        dtos.into_iter()
            .map(|dto| HistoryEntry::try_from(dto).map_err(ClientError::from))
            .collect()
    }

    // =========================================================================
    // Vehicle Operations
    // =========================================================================

    /// Get a vehicle by ID
    pub async fn get_vehicle(&self, id: Uuid) -> ClientResult<Vehicle> {
        let req = self.request(Method::GET, &format!("/api/v1/vehicles/{}", id));
        let body = self.execute(req).await?;
        let dto: VehicleDto = Self::decode(body, "vehicle")?;
        Ok(Vehicle::try_from(dto)?)
    }

    /// Register a vehicle for a customer
    pub async fn create_vehicle(
        &self,
        customer_id: Uuid,
        year: i32,
        make: &str,
        model: &str,
        license_plate: Option<&str>,
    ) -> ClientResult<Vehicle> {
        #[derive(Serialize)]
        struct CreateVehicleRequest<'a> {
            customer_id: &'a str,
            year: i32,
            make: &'a str,
            model: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            license_plate: Option<&'a str>,
        }

        let customer_id = customer_id.to_string();
        let body = CreateVehicleRequest {
            customer_id: &customer_id,
            year,
            make,
            model,
            license_plate,
        };
        let req = self.request(Method::POST, "/api/v1/vehicles").json(&body);
        let body = self.execute(req).await?;
        let dto: VehicleDto = Self::decode(body, "vehicle")?;
        Ok(Vehicle::try_from(dto)?)
    }

    /// Update a vehicle
    pub async fn update_vehicle(
        &self,
        id: Uuid,
        year: Option<i32>,
        make: Option<&str>,
        model: Option<&str>,
        license_plate: Option<&str>,
    ) -> ClientResult<Vehicle> {
        #[derive(Serialize)]
        struct UpdateVehicleRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            year: Option<i32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            make: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            model: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            license_plate: Option<&'a str>,
        }

        let body = UpdateVehicleRequest {
            year,
            make,
            model,
            license_plate,
        };
        let req = self
            .request(Method::PATCH, &format!("/api/v1/vehicles/{}", id))
            .json(&body);
        let body = self.execute(req).await?;
        let dto: VehicleDto = Self::decode(body, "vehicle")?;
        Ok(Vehicle::try_from(dto)?)
    }

    // =========================================================================
    // Template Operations (read-only — templates are fixed configuration)
    // =========================================================================

    /// List message templates
    pub async fn list_templates(&self) -> ClientResult<Vec<MessageTemplate>> {
        let req = self.request(Method::GET, "/api/v1/templates");
        let body = self.execute(req).await?;
        let dtos: Vec<MessageTemplateDto> = Self::decode(body, "templates")?;
        dtos.into_iter()
            .map(|dto| MessageTemplate::try_from(dto).map_err(ClientError::from))
            .collect()
    }
}
