//! Page controller: binds the garage forms, status line and navigation of a
//! [`Document`] to a [`Garage`].

use garagem_domain::{Maintenance, Vehicle};
use garagem_store::KeyValueStore;
use garagem_types::MessageKind;
use garagem_ui::element::lock;
use garagem_ui::{
    clear_form_errors, mark_input_error, set_active_section, Document, ElementRef,
    StatusDisplay, DEFAULT_ERROR_CLASS,
};

use crate::garage::{Field, FormError, Garage, MaintenanceInput, VehicleInput};

/// Element ids and classes the page is built with
pub mod ids {
    pub const VEHICLE_FORM: &str = "form-veiculo";
    pub const VEHICLE_PLATE: &str = "placa";
    pub const VEHICLE_MODEL: &str = "modelo";
    pub const VEHICLE_YEAR: &str = "ano";
    pub const VEHICLE_COLOR: &str = "cor";

    pub const MAINTENANCE_FORM: &str = "form-manutencao";
    pub const MAINTENANCE_PLATE: &str = "manutencao-placa";
    pub const MAINTENANCE_DATE: &str = "data";
    pub const MAINTENANCE_SERVICE: &str = "servico";
    pub const MAINTENANCE_COST: &str = "custo";
    pub const MAINTENANCE_SCHEDULED: &str = "agendar";

    pub const SECTION_CLASS: &str = "content-section";
    pub const NAV_LINK_CLASS: &str = "nav-link";
}

fn vehicle_input_id(field: Field) -> &'static str {
    match field {
        Field::Plate => ids::VEHICLE_PLATE,
        Field::Year => ids::VEHICLE_YEAR,
        _ => ids::VEHICLE_MODEL,
    }
}

fn maintenance_input_id(field: Field) -> &'static str {
    match field {
        Field::Plate => ids::MAINTENANCE_PLATE,
        Field::Date => ids::MAINTENANCE_DATE,
        Field::Cost => ids::MAINTENANCE_COST,
        _ => ids::MAINTENANCE_SERVICE,
    }
}

/// Controller for the garage page
pub struct GaragePage<S> {
    document: Document,
    status: StatusDisplay,
    garage: Garage<S>,
}

impl<S: KeyValueStore> GaragePage<S> {
    /// `garage` should report storage failures through a clone of `status`
    pub fn new(document: Document, status: StatusDisplay, garage: Garage<S>) -> Self {
        Self {
            document,
            status,
            garage,
        }
    }

    pub fn garage(&self) -> &Garage<S> {
        &self.garage
    }

    fn value(&self, id: &str) -> String {
        let Some(el) = self.document.get_element_by_id(id) else {
            return String::new();
        };
        let text = lock(&el).text().trim().to_string();
        text
    }

    fn optional_value(&self, id: &str) -> Option<String> {
        Some(self.value(id)).filter(|v| !v.is_empty())
    }

    fn reset_inputs(&self, input_ids: &[&str]) {
        for id in input_ids {
            if let Some(el) = self.document.get_element_by_id(id) {
                lock(&el).set_text("");
            }
        }
    }

    fn report(&self, err: &FormError, input_id: Option<&str>) {
        if let Some(id) = input_id {
            mark_input_error(
                self.document.get_element_by_id(id).as_ref(),
                DEFAULT_ERROR_CLASS,
            );
        }
        if err.needs_notification() {
            self.status.show(&err.to_string(), MessageKind::Error);
        }
    }

    /// Validate and save the vehicle form
    pub fn submit_vehicle(&self) -> Option<Vehicle> {
        let form = self.document.get_element_by_id(ids::VEHICLE_FORM);
        clear_form_errors(form.as_ref(), DEFAULT_ERROR_CLASS);

        let input = VehicleInput {
            plate: self.value(ids::VEHICLE_PLATE),
            model: self.value(ids::VEHICLE_MODEL),
            year: self.value(ids::VEHICLE_YEAR),
            color: self.optional_value(ids::VEHICLE_COLOR),
            notes: None,
        };

        match self.garage.register_vehicle(input) {
            Ok(vehicle) => {
                self.reset_inputs(&[
                    ids::VEHICLE_PLATE,
                    ids::VEHICLE_MODEL,
                    ids::VEHICLE_YEAR,
                    ids::VEHICLE_COLOR,
                ]);
                self.status.show(
                    &format!("Veículo {} cadastrado com sucesso!", vehicle.display_plate()),
                    MessageKind::Success,
                );
                Some(vehicle)
            }
            Err(err) => {
                self.report(&err, err.field().map(vehicle_input_id));
                None
            }
        }
    }

    /// Validate and save the maintenance form
    pub fn submit_maintenance(&self) -> Option<Maintenance> {
        let form = self.document.get_element_by_id(ids::MAINTENANCE_FORM);
        clear_form_errors(form.as_ref(), DEFAULT_ERROR_CLASS);

        let scheduled = match self.document.get_element_by_id(ids::MAINTENANCE_SCHEDULED) {
            Some(el) => {
                let checked = lock(&el).is_checked();
                checked
            }
            None => false,
        };

        let input = MaintenanceInput {
            plate: self.value(ids::MAINTENANCE_PLATE),
            date: self.value(ids::MAINTENANCE_DATE),
            service: self.value(ids::MAINTENANCE_SERVICE),
            cost: self.optional_value(ids::MAINTENANCE_COST),
            notes: None,
            scheduled,
        };

        match self.garage.register_maintenance(input) {
            Ok(record) => {
                self.reset_inputs(&[
                    ids::MAINTENANCE_DATE,
                    ids::MAINTENANCE_SERVICE,
                    ids::MAINTENANCE_COST,
                ]);
                self.status.show(
                    &format!(
                        "Manutenção de {} registrada para {}.",
                        record.display_plate(),
                        record.display_date()
                    ),
                    MessageKind::Success,
                );
                Some(record)
            }
            Err(err) => {
                self.report(&err, err.field().map(maintenance_input_id));
                None
            }
        }
    }

    /// Switch to the section `target_id`, falling back to the first one
    pub fn show_section(&self, target_id: &str) -> Option<String> {
        let sections: Vec<ElementRef> = self.document.elements_by_class(ids::SECTION_CLASS);
        let links: Vec<ElementRef> = self.document.elements_by_class(ids::NAV_LINK_CLASS);
        set_active_section(target_id, &sections, &links)
    }
}
