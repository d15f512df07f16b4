use serde::Deserialize;

use crate::models::client::ClientDto;

#[derive(Debug, Deserialize)]
struct ClientCsvRecord {
    #[serde(default)]
    #[allow(dead_code)]
    client_id: Option<i32>,
    first_name: String,
    last_name: String,
    #[serde(default)]
    email: Option<String>,
    phone: String,
    passport_number: String,
    passport_expiry: String,
    #[serde(default)]
    name_latin: Option<String>,
    birth_date: String,
    gender: String,
}

pub fn parse_clients_csv(content: &[u8]) -> Result<Vec<ClientDto>, String> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content);

    let mut clients = Vec::new();

    for result in rdr.deserialize() {
        let record: ClientCsvRecord = result.map_err(|e| format!("CSV parse error: {}", e))?;

        clients.push(ClientDto {
            first_name: record.first_name,
            last_name: record.last_name,
            name_latin: record.name_latin.filter(|n| !n.is_empty()),
            passport_number: record.passport_number,
            passport_expiry: record.passport_expiry,
            birth_date: record.birth_date,
            gender: record.gender,
            phone: record.phone,
            email: record.email.filter(|e| !e.is_empty()),
        });
    }

    Ok(clients)
}
