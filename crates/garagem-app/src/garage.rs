//! Vehicle and maintenance use cases
//!
//! Form input is validated with the domain validators, normalized with the
//! formatters and persisted through a [`CollectionStore`].

use chrono::{Datelike, Local, NaiveDate};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{error, info};

use garagem_domain::{
    format_plate_for_display, is_today_or_future, is_valid_date_string, is_valid_plate_format,
    is_valid_vehicle_year_in, normalize_plate, parse_brl_decimal, Maintenance, Vehicle, YearRange,
};
use garagem_store::{CollectionStore, KeyValueStore, MAINTENANCES_KEY, VEHICLES_KEY};

/// Form field a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Plate,
    Model,
    Year,
    Date,
    Service,
    Cost,
}

/// Why a form submission was rejected
#[derive(Debug, Error)]
pub enum FormError {
    /// A field failed validation; the message is meant for the user
    #[error("{message}")]
    Invalid { field: Field, message: String },

    /// Stored data could not be read, so nothing was written over it
    #[error("Não foi possível carregar os dados ({key}).")]
    LoadFailed { key: String },

    /// The write failed; the storage layer has already told the user
    #[error("Não foi possível salvar os dados ({key}).")]
    SaveFailed { key: String },
}

impl FormError {
    fn invalid(field: Field, message: impl Into<String>) -> Self {
        FormError::Invalid {
            field,
            message: message.into(),
        }
    }

    pub fn field(&self) -> Option<Field> {
        match self {
            FormError::Invalid { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// True when the user has not been told about this error yet
    pub fn needs_notification(&self) -> bool {
        !matches!(self, FormError::SaveFailed { .. })
    }
}

impl From<FormError> for garagem_types::Error {
    fn from(err: FormError) -> Self {
        garagem_types::Error::Rejected(err.to_string())
    }
}

/// Raw values of the vehicle form
#[derive(Debug, Clone, Default)]
pub struct VehicleInput {
    pub plate: String,
    pub model: String,
    pub year: String,
    pub color: Option<String>,
    pub notes: Option<String>,
}

/// Raw values of the maintenance form
#[derive(Debug, Clone, Default)]
pub struct MaintenanceInput {
    pub plate: String,
    pub date: String,
    pub service: String,
    pub cost: Option<String>,
    pub notes: Option<String>,
    /// Scheduling a future service: the date may not be in the past
    pub scheduled: bool,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Vehicles and their maintenance records
pub struct Garage<S> {
    store: CollectionStore<S>,
    year_range: YearRange,
}

impl<S: KeyValueStore> Garage<S> {
    pub fn new(store: CollectionStore<S>) -> Self {
        Self {
            store,
            year_range: YearRange::default(),
        }
    }

    pub fn with_year_range(mut self, year_range: YearRange) -> Self {
        self.year_range = year_range;
        self
    }

    pub fn store(&self) -> &CollectionStore<S> {
        &self.store
    }

    /// All vehicles in registration order
    pub fn vehicles(&self) -> Vec<Vehicle> {
        self.store.get_collection(VEHICLES_KEY)
    }

    /// All maintenance records in registration order
    pub fn maintenances(&self) -> Vec<Maintenance> {
        self.store.get_collection(MAINTENANCES_KEY)
    }

    /// Find a vehicle by plate, in any typed form ("abc-1234", "ABC1234")
    pub fn find_vehicle(&self, plate: &str) -> Option<Vehicle> {
        let plate = normalize_plate(plate);
        self.vehicles().into_iter().find(|v| v.plate == plate)
    }

    pub fn maintenances_for(&self, plate: &str) -> Vec<Maintenance> {
        let plate = normalize_plate(plate);
        self.maintenances()
            .into_iter()
            .filter(|m| m.vehicle_plate == plate)
            .collect()
    }

    /// Maintenance dated `today` or later, soonest first
    pub fn upcoming_maintenances(&self, today: NaiveDate) -> Vec<Maintenance> {
        let mut upcoming: Vec<_> = self
            .maintenances()
            .into_iter()
            .filter(|m| m.is_upcoming(today))
            .collect();
        // YYYY-MM-DD sorts chronologically as text
        upcoming.sort_by(|a, b| a.date.cmp(&b.date));
        upcoming
    }

    /// Sum of the known costs recorded for a vehicle
    pub fn total_cost_for(&self, plate: &str) -> f64 {
        self.maintenances_for(plate)
            .iter()
            .filter_map(|m| m.cost)
            .sum()
    }

    pub fn register_vehicle(&self, input: VehicleInput) -> Result<Vehicle, FormError> {
        let plate = normalize_plate(&input.plate);
        if !is_valid_plate_format(&plate) {
            return Err(FormError::invalid(
                Field::Plate,
                "Placa inválida. Use o formato AAA-1234 ou AAA1B23.",
            ));
        }

        let model = input.model.trim();
        if model.is_empty() {
            return Err(FormError::invalid(Field::Model, "Informe o modelo do veículo."));
        }

        let current_year = Local::now().year();
        let year = input.year.trim();
        if !is_valid_vehicle_year_in(year, self.year_range, current_year) {
            return Err(FormError::invalid(
                Field::Year,
                format!(
                    "Ano inválido. Informe um ano entre {} e {}.",
                    self.year_range.min_year,
                    self.year_range.max_year(current_year)
                ),
            ));
        }
        let year = year.parse::<f64>().map(|y| y as i32).map_err(|_| {
            FormError::invalid(Field::Year, "Ano inválido.")
        })?;

        let mut vehicles: Vec<Vehicle> = self.load(VEHICLES_KEY)?;
        if vehicles.iter().any(|v| v.plate == plate) {
            return Err(FormError::invalid(
                Field::Plate,
                format!(
                    "Já existe um veículo com a placa {}.",
                    format_plate_for_display(&plate)
                ),
            ));
        }

        let mut vehicle = Vehicle::new(plate, model.to_string(), year);
        if let Some(color) = non_blank(input.color) {
            vehicle = vehicle.with_color(color);
        }
        if let Some(notes) = non_blank(input.notes) {
            vehicle = vehicle.with_notes(notes);
        }

        vehicles.push(vehicle.clone());
        self.save(VEHICLES_KEY, &vehicles)?;
        info!(plate = %vehicle.plate, "vehicle registered");
        Ok(vehicle)
    }

    /// Remove a vehicle and its maintenance records.
    ///
    /// Returns false when no vehicle has this plate.
    pub fn remove_vehicle(&self, plate: &str) -> Result<bool, FormError> {
        let plate = normalize_plate(plate);

        let mut vehicles: Vec<Vehicle> = self.load(VEHICLES_KEY)?;
        let before = vehicles.len();
        vehicles.retain(|v| v.plate != plate);
        if vehicles.len() == before {
            return Ok(false);
        }

        let mut maintenances: Vec<Maintenance> = self.load(MAINTENANCES_KEY)?;
        let had_maintenances = maintenances.len();
        maintenances.retain(|m| m.vehicle_plate != plate);

        // Records first: a failed vehicle save must not leave orphans behind
        if maintenances.len() != had_maintenances {
            self.save(MAINTENANCES_KEY, &maintenances)?;
        }
        self.save(VEHICLES_KEY, &vehicles)?;
        info!(plate = %plate, "vehicle removed");
        Ok(true)
    }

    pub fn register_maintenance(&self, input: MaintenanceInput) -> Result<Maintenance, FormError> {
        let plate = normalize_plate(&input.plate);
        if !is_valid_plate_format(&plate) {
            return Err(FormError::invalid(
                Field::Plate,
                "Placa inválida. Use o formato AAA-1234 ou AAA1B23.",
            ));
        }

        let vehicles: Vec<Vehicle> = self.load(VEHICLES_KEY)?;
        if !vehicles.iter().any(|v| v.plate == plate) {
            return Err(FormError::invalid(
                Field::Plate,
                format!(
                    "Nenhum veículo cadastrado com a placa {}.",
                    format_plate_for_display(&plate)
                ),
            ));
        }

        let date = input.date.trim();
        if !is_valid_date_string(date) {
            return Err(FormError::invalid(
                Field::Date,
                "Data inválida. Use o formato AAAA-MM-DD.",
            ));
        }
        if input.scheduled && !is_today_or_future(date) {
            return Err(FormError::invalid(
                Field::Date,
                "A data do agendamento deve ser hoje ou uma data futura.",
            ));
        }

        let service = input.service.trim();
        if service.is_empty() {
            return Err(FormError::invalid(Field::Service, "Informe o serviço realizado."));
        }

        let cost = match non_blank(input.cost) {
            Some(text) => match parse_brl_decimal(&text) {
                Some(value) if value.is_finite() && value >= 0.0 => Some(value),
                _ => {
                    return Err(FormError::invalid(
                        Field::Cost,
                        "Custo inválido. Use valores como 150,00 ou 1.234,56.",
                    ))
                }
            },
            None => None,
        };

        let mut record = Maintenance::new(plate, date.to_string(), service.to_string());
        if let Some(cost) = cost {
            record = record.with_cost(cost);
        }
        if let Some(notes) = non_blank(input.notes) {
            record = record.with_notes(notes);
        }

        let mut maintenances: Vec<Maintenance> = self.load(MAINTENANCES_KEY)?;
        maintenances.push(record.clone());
        self.save(MAINTENANCES_KEY, &maintenances)?;
        info!(plate = %record.vehicle_plate, date = %record.date, "maintenance registered");
        Ok(record)
    }

    /// Read a collection before modifying it. Unreadable data is reported
    /// instead of being replaced.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, FormError> {
        self.store.try_get_collection(key).map_err(|err| {
            error!(key, error = %err, "refusing to overwrite unreadable collection");
            FormError::LoadFailed {
                key: key.to_string(),
            }
        })
    }

    fn save<T: serde::Serialize>(&self, key: &str, items: &[T]) -> Result<(), FormError> {
        if self.store.save_collection(key, items) {
            Ok(())
        } else {
            Err(FormError::SaveFailed {
                key: key.to_string(),
            })
        }
    }
}
