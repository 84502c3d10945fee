//! Output → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): one car per line, e.g. `Car{id='CAR001', ...}`
//! - **JSON** (`--json`): `serde_json::to_string_pretty`

use showroom_executor::{ContractMetadata, Error, Output};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(output),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error as `error[KIND]: message`.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": {
                "kind": err.label(),
                "message": err.to_string(),
            }
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Human => format!("error[{}]: {}", err.label(), err),
    }
}

fn format_json(output: &Output) -> String {
    let value = match output {
        Output::Car(car) => serde_json::to_value(car),
        Output::Cars(cars) => serde_json::to_value(cars),
        Output::Bool(b) => serde_json::to_value(b),
        Output::Initialized { created, message } => Ok(serde_json::json!({
            "created": created,
            "message": message,
        })),
        Output::Metadata(metadata) => serde_json::to_value(metadata),
    };
    value
        .and_then(|v| serde_json::to_string_pretty(&v))
        .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Car(car) => car.to_string(),
        Output::Cars(cars) => {
            if cars.is_empty() {
                "(empty list)".to_string()
            } else {
                cars.iter()
                    .enumerate()
                    .map(|(i, car)| format!("{}) {}", i + 1, car))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        Output::Bool(b) => format!("(boolean) {}", b),
        Output::Initialized { message, .. } => message.clone(),
        Output::Metadata(metadata) => format_metadata(metadata),
    }
}

fn format_metadata(metadata: &ContractMetadata) -> String {
    let info = &metadata.info;
    let mut lines = vec![
        format!("{} v{} ({})", info.title, info.version, info.name),
        info.description.clone(),
        format!("contact: {} <{}>", info.contact.name, info.contact.email),
        format!("license: {} {}", info.license.name, info.license.url),
        "transactions:".to_string(),
    ];
    for txn in &metadata.transactions {
        lines.push(format!(
            "  {} [{}] ({})",
            txn.name,
            txn.intent.as_str(),
            txn.parameters.join(", ")
        ));
    }
    lines.join("\n")
}
