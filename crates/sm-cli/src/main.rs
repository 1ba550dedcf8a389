//! sm - Shop Manager CLI
//!
//! Admin console for the shop management REST API: the appointment status
//! board with optimistic moves, customer/vehicle records, messaging and
//! export utilities.
//!
//! # Examples
//!
//! ```bash
//! # Show the status board
//! sm board show --pretty
//!
//! # Move an appointment into the In Progress column
//! sm appointment move <uuid> --status in_progress --position 0
//!
//! # Export visible appointments to CSV
//! sm export appointments --fields customer_name,service
//! ```

use sm_cli::appointment_commands::AppointmentCommands;
use sm_cli::board_commands::BoardCommands;
use sm_cli::customer_commands::CustomerCommands;
use sm_cli::export_commands::ExportCommands;
use sm_cli::message_commands::MessageCommands;
use sm_cli::service_commands::ServiceCommands;
use sm_cli::template_commands::TemplateCommands;
use sm_cli::vehicle_commands::VehicleCommands;
use sm_cli::{Cli, CliError, CliResult, Commands, logger};

use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use serde_json::{Value, json};
use uuid::Uuid;

use sm_board::{
    BoardCard, BoardRefresher, MoveEngine, MoveRequest, MoveResolution, MoveTarget, RetryPolicy,
    ShutdownCoordinator,
};
use sm_client::ApiClient;
use sm_config::Config;
use sm_core::export::csv::{AppointmentField, appointment_rows, write_csv};
use sm_core::{
    AppointmentDto, AppointmentStatus, CustomerDto, ExportData, HistoryEntryDto, MessageDto,
    MessageTemplateDto, ServiceLineDto, VehicleDto,
};

/// Query key for the single board view the CLI keeps cached
const BOARD_VIEW: &str = "board";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = logger::initialize(
        config.logging.level,
        config.logging.file.clone().map(PathBuf::from),
        config.logging.colored,
    ) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let base_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());
    let client = match ApiClient::with_timeout(
        &base_url,
        Duration::from_secs(config.api.request_timeout_secs),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command, &client, &config).await {
        Ok(Value::Null) => ExitCode::SUCCESS,
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, client: &ApiClient, config: &Config) -> CliResult<Value> {
    match command {
        Commands::Appointment { action } => appointment(action, client, config).await,
        Commands::Board { action } => board(action, client, config).await,
        Commands::Service { action } => service(action, client).await,
        Commands::Message { action } => message(action, client, config).await,
        Commands::Customer { action } => customer(action, client).await,
        Commands::Vehicle { action } => vehicle(action, client).await,
        Commands::Template { action } => template(action, client).await,
        Commands::Export { action } => export(action, client).await,
    }
}

fn board_engine(client: &ApiClient, config: &Config) -> MoveEngine<ApiClient> {
    MoveEngine::with_retry_policy(client.clone(), RetryPolicy::from(&config.retry))
}

fn card_json(card: &BoardCard) -> Value {
    json!({
        "id": card.id.to_string(),
        "customer_name": card.customer_name,
        "vehicle_info": card.vehicle_info,
        "service_summary": card.service_summary,
        "status": card.status.as_str(),
        "position": card.position,
        "version": card.version,
        "start": card.start_label(),
        "total_cents": card.total_cents,
    })
}

async fn appointment(
    action: AppointmentCommands,
    client: &ApiClient,
    config: &Config,
) -> CliResult<Value> {
    match action {
        AppointmentCommands::Get { id } => {
            let appointment = client.get_appointment(Uuid::parse_str(&id)?).await?;
            Ok(json!({"appointment": AppointmentDto::from_appointment(&appointment)}))
        }

        AppointmentCommands::Move {
            id,
            status,
            position,
            technician_id,
        } => {
            let card_id = Uuid::parse_str(&id)?;
            let status = AppointmentStatus::from_str(&status)?;
            let technician_id = technician_id
                .as_deref()
                .map(Uuid::parse_str)
                .transpose()?;

            let engine = board_engine(client, config);
            engine.load_view(BOARD_VIEW, technician_id).await?;

            let request = MoveRequest {
                card_id,
                target: MoveTarget { status, position },
            };

            match engine.submit_move(request).await? {
                MoveResolution::Applied(appointment) => Ok(json!({
                    "resolution": "applied",
                    "appointment": AppointmentDto::from_appointment(&appointment),
                })),
                MoveResolution::Noop => Ok(json!({"resolution": "noop"})),
                MoveResolution::RolledBack { error } => Err(error.into()),
                // Single move per invocation; nothing can supersede it
                MoveResolution::Superseded => Ok(json!({"resolution": "superseded"})),
            }
        }

        AppointmentCommands::Update {
            id,
            notes,
            technician_id,
            start_time,
            version,
        } => {
            let appointment = client
                .update_appointment(
                    Uuid::parse_str(&id)?,
                    notes.as_deref(),
                    technician_id.as_deref(),
                    start_time,
                    version,
                )
                .await?;
            Ok(json!({"appointment": AppointmentDto::from_appointment(&appointment)}))
        }

        AppointmentCommands::Delete { id } => {
            Ok(client.delete_appointment(Uuid::parse_str(&id)?).await?)
        }
    }
}

async fn board(action: BoardCommands, client: &ApiClient, config: &Config) -> CliResult<Value> {
    match action {
        BoardCommands::Show { technician_id } => {
            let technician_id = technician_id
                .as_deref()
                .map(Uuid::parse_str)
                .transpose()?;

            let engine = board_engine(client, config);
            engine.load_view(BOARD_VIEW, technician_id).await?;

            let columns = engine.column_cards(BOARD_VIEW).await?;
            Ok(json!({
                "columns": columns
                    .iter()
                    .map(|(column, cards)| json!({
                        "status": column.status.as_str(),
                        "title": column.title,
                        "count": column.count,
                        "sum_cents": column.sum_cents,
                        "cards": cards.iter().map(card_json).collect::<Vec<_>>(),
                    }))
                    .collect::<Vec<_>>(),
            }))
        }

        BoardCommands::Watch { technician_id } => {
            let technician_id = technician_id
                .as_deref()
                .map(Uuid::parse_str)
                .transpose()?;

            config.log_summary();

            let engine = Arc::new(board_engine(client, config));
            engine.load_view(BOARD_VIEW, technician_id).await?;

            let interval = Duration::from_secs(config.polling.board_refresh_secs);
            let shutdown = ShutdownCoordinator::new();
            let refresher = BoardRefresher::new(engine.clone(), interval).spawn(&shutdown);

            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {
                        shutdown.shutdown();
                        break;
                    }
                    _ = ticker.tick() => {
                        let columns = engine.columns(BOARD_VIEW).await?;
                        let summary = columns
                            .iter()
                            .map(|c| format!("{}={}", c.status.as_str(), c.count))
                            .collect::<Vec<_>>()
                            .join(" ");
                        println!("{}", summary);
                    }
                }
            }
            let _ = refresher.await;

            Ok(json!({"status": "stopped"}))
        }
    }
}

async fn service(action: ServiceCommands, client: &ApiClient) -> CliResult<Value> {
    match action {
        ServiceCommands::Add {
            appointment_id,
            name,
            price_cents,
        } => {
            let service = client
                .create_service(Uuid::parse_str(&appointment_id)?, &name, price_cents)
                .await?;
            Ok(json!({"service": ServiceLineDto::from_service_line(&service)}))
        }

        ServiceCommands::Update {
            id,
            name,
            price_cents,
        } => {
            let service = client
                .update_service(Uuid::parse_str(&id)?, name.as_deref(), price_cents)
                .await?;
            Ok(json!({"service": ServiceLineDto::from_service_line(&service)}))
        }

        ServiceCommands::Delete { id } => Ok(client.delete_service(Uuid::parse_str(&id)?).await?),
    }
}

async fn message(
    action: MessageCommands,
    client: &ApiClient,
    config: &Config,
) -> CliResult<Value> {
    match action {
        MessageCommands::List { appointment_id } => {
            let messages = client.list_messages(Uuid::parse_str(&appointment_id)?).await?;
            Ok(json!({
                "messages": messages.iter().map(MessageDto::from_message).collect::<Vec<_>>(),
            }))
        }

        MessageCommands::Send {
            appointment_id,
            body,
            template,
        } => {
            let appointment_id = Uuid::parse_str(&appointment_id)?;

            let body = match (body, template) {
                (Some(body), _) => body,
                (None, Some(name)) => {
                    let templates = client.list_templates().await?;
                    let template = templates
                        .into_iter()
                        .find(|t| t.name == name)
                        .ok_or(CliError::UnknownTemplate(name))?;
                    let appointment = client.get_appointment(appointment_id).await?;
                    template.render(&appointment)
                }
                (None, None) => {
                    return Err(CliError::Usage(
                        "pass --body or --template".to_string(),
                    ));
                }
            };

            let message = client.send_message(appointment_id, &body).await?;
            Ok(json!({"message": MessageDto::from_message(&message)}))
        }

        MessageCommands::Delete { id } => Ok(client.delete_message(Uuid::parse_str(&id)?).await?),

        MessageCommands::Watch { appointment_id } => {
            let appointment_id = Uuid::parse_str(&appointment_id)?;
            let mut seen = 0usize;

            let mut ticker =
                tokio::time::interval(Duration::from_secs(config.polling.message_poll_secs));
            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => break,
                    _ = ticker.tick() => {
                        let messages = client.list_messages(appointment_id).await?;
                        for message in &messages[seen.min(messages.len())..] {
                            println!(
                                "{}",
                                serde_json::to_string(&MessageDto::from_message(message))?
                            );
                        }
                        seen = messages.len();
                    }
                }
            }

            Ok(json!({"status": "stopped"}))
        }
    }
}

async fn customer(action: CustomerCommands, client: &ApiClient) -> CliResult<Value> {
    match action {
        CustomerCommands::List => {
            let customers = client.list_customers().await?;
            Ok(json!({
                "customers": customers.iter().map(CustomerDto::from_customer).collect::<Vec<_>>(),
            }))
        }

        CustomerCommands::Get { id } => {
            let customer = client.get_customer(Uuid::parse_str(&id)?).await?;
            Ok(json!({"customer": CustomerDto::from_customer(&customer)}))
        }

        CustomerCommands::Create {
            first_name,
            last_name,
            phone,
            email,
        } => {
            let customer = client
                .create_customer(&first_name, &last_name, &phone, email.as_deref())
                .await?;
            Ok(json!({"customer": CustomerDto::from_customer(&customer)}))
        }

        CustomerCommands::Update {
            id,
            first_name,
            last_name,
            phone,
            email,
        } => {
            let customer = client
                .update_customer(
                    Uuid::parse_str(&id)?,
                    first_name.as_deref(),
                    last_name.as_deref(),
                    phone.as_deref(),
                    email.as_deref(),
                )
                .await?;
            Ok(json!({"customer": CustomerDto::from_customer(&customer)}))
        }

        CustomerCommands::History { id } => {
            let history = client.customer_history(Uuid::parse_str(&id)?).await?;
            Ok(json!({
                "history": history
                    .iter()
                    .map(HistoryEntryDto::from_history_entry)
                    .collect::<Vec<_>>(),
            }))
        }
    }
}

async fn vehicle(action: VehicleCommands, client: &ApiClient) -> CliResult<Value> {
    match action {
        VehicleCommands::Get { id } => {
            let vehicle = client.get_vehicle(Uuid::parse_str(&id)?).await?;
            Ok(json!({"vehicle": VehicleDto::from_vehicle(&vehicle)}))
        }

        VehicleCommands::Create {
            customer_id,
            year,
            make,
            model,
            license_plate,
        } => {
            let vehicle = client
                .create_vehicle(
                    Uuid::parse_str(&customer_id)?,
                    year,
                    &make,
                    &model,
                    license_plate.as_deref(),
                )
                .await?;
            Ok(json!({"vehicle": VehicleDto::from_vehicle(&vehicle)}))
        }

        VehicleCommands::Update {
            id,
            year,
            make,
            model,
            license_plate,
        } => {
            let vehicle = client
                .update_vehicle(
                    Uuid::parse_str(&id)?,
                    year,
                    make.as_deref(),
                    model.as_deref(),
                    license_plate.as_deref(),
                )
                .await?;
            Ok(json!({"vehicle": VehicleDto::from_vehicle(&vehicle)}))
        }
    }
}

async fn template(action: TemplateCommands, client: &ApiClient) -> CliResult<Value> {
    match action {
        TemplateCommands::List => {
            let templates = client.list_templates().await?;
            Ok(json!({
                "templates": templates
                    .iter()
                    .map(MessageTemplateDto::from_template)
                    .collect::<Vec<_>>(),
            }))
        }
    }
}

async fn export(action: ExportCommands, client: &ApiClient) -> CliResult<Value> {
    match action {
        ExportCommands::Appointments {
            fields,
            format,
            output,
            technician_id,
        } => {
            let technician_id = technician_id
                .as_deref()
                .map(Uuid::parse_str)
                .transpose()?;

            let fields = fields
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(AppointmentField::from_str)
                .collect::<Result<Vec<_>, _>>()?;

            let appointments = client.fetch_board(technician_id).await?;
            let rows = appointment_rows(&appointments, &fields);

            let content = match format.as_str() {
                "json" => {
                    let records: Vec<Value> = rows
                        .iter()
                        .map(|row| {
                            fields
                                .iter()
                                .zip(row)
                                .map(|(field, value)| (field.header().to_string(), json!(value)))
                                .collect::<serde_json::Map<_, _>>()
                                .into()
                        })
                        .collect();
                    serde_json::to_string_pretty(&records)?
                }
                _ => {
                    let headers: Vec<&str> = fields.iter().map(|f| f.header()).collect();
                    write_csv(&headers, &rows)
                }
            };

            write_output(&output, &content, appointments.len())
        }

        ExportCommands::All { output } => {
            let appointments = client.fetch_board(None).await?;
            let customers = client.list_customers().await?;

            let mut vehicles = Vec::new();
            let mut seen_vehicles = HashSet::new();
            for appointment in &appointments {
                if seen_vehicles.insert(appointment.vehicle_id) {
                    vehicles.push(client.get_vehicle(appointment.vehicle_id).await?);
                }
            }

            let mut messages = Vec::new();
            for appointment in &appointments {
                messages.extend(client.list_messages(appointment.id).await?);
            }

            let record_count = appointments.len();
            let data = ExportData::new(
                "sm-cli",
                appointments.iter().map(AppointmentDto::from_appointment).collect(),
                customers.iter().map(CustomerDto::from_customer).collect(),
                vehicles.iter().map(VehicleDto::from_vehicle).collect(),
                messages.iter().map(MessageDto::from_message).collect(),
            );

            let content = serde_json::to_string_pretty(&data)?;
            write_output(&output, &content, record_count)
        }
    }
}

/// Write export content to a file, or dump it raw to stdout for "-".
fn write_output(output: &str, content: &str, records: usize) -> CliResult<Value> {
    if output == "-" {
        print!("{}", content);
        return Ok(Value::Null);
    }

    let path = PathBuf::from(output);
    std::fs::write(&path, content).map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })?;

    Ok(json!({"exported": records, "path": path.display().to_string()}))
}
