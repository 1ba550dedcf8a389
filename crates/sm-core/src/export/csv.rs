use crate::Appointment;

/// Exportable appointment columns, selectable per export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentField {
    CustomerName,
    VehicleInfo,
    Service,
    Status,
    Position,
    StartTime,
    Total,
}

impl std::str::FromStr for AppointmentField {
    type Err = crate::CoreError;

    #[track_caller]
    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "customer_name" => Ok(Self::CustomerName),
            "vehicle_info" => Ok(Self::VehicleInfo),
            "service" => Ok(Self::Service),
            "status" => Ok(Self::Status),
            "position" => Ok(Self::Position),
            "start_time" => Ok(Self::StartTime),
            "total" => Ok(Self::Total),
            _ => Err(crate::CoreError::validation(format!(
                "unknown export field: {}",
                s
            ))),
        }
    }
}

impl AppointmentField {
    pub fn header(&self) -> &'static str {
        match self {
            Self::CustomerName => "customer_name",
            Self::VehicleInfo => "vehicle_info",
            Self::Service => "service",
            Self::Status => "status",
            Self::Position => "position",
            Self::StartTime => "start_time",
            Self::Total => "total",
        }
    }

    pub fn extract(&self, a: &Appointment) -> String {
        match self {
            Self::CustomerName => a.customer_name.clone(),
            Self::VehicleInfo => a.vehicle_info.clone(),
            Self::Service => a.service_summary.clone(),
            Self::Status => a.status.as_str().to_string(),
            Self::Position => a.position.to_string(),
            Self::StartTime => a.start_time.to_rfc3339(),
            Self::Total => format!("{:.2}", a.total_cents as f64 / 100.0),
        }
    }
}

/// Flatten appointments into one row per record, in field order.
pub fn appointment_rows(appointments: &[Appointment], fields: &[AppointmentField]) -> Vec<Vec<String>> {
    appointments
        .iter()
        .map(|a| fields.iter().map(|f| f.extract(a)).collect())
        .collect()
}

/// Serialize a header row plus data rows as RFC 4180 CSV.
pub fn write_csv(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    push_row(&mut out, headers.iter().copied());
    for row in rows {
        push_row(&mut out, row.iter().map(String::as_str));
    }
    out
}

fn push_row<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&escape(field));
    }
    out.push('\n');
}

/// A field containing a comma, quote, CR or LF is quoted, quotes doubled.
fn escape(field: &str) -> String {
    if field.contains(['"', ',', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
