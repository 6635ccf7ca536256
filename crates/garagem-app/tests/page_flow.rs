//! End-to-end form flows on a modelled page

use std::time::Duration;

use garagem_app::config::Config;
use garagem_app::garage::Garage;
use garagem_app::page::{ids, GaragePage};
use garagem_app::repository::{open_file_store_at, open_page};
use garagem_store::{CollectionStore, FileStore, MemoryStore, VEHICLES_KEY};
use garagem_ui::element::lock;
use garagem_ui::{
    Document, Element, ElementRef, StatusDisplay, ACTIVE_LINK_CLASS, ACTIVE_SECTION_CLASS,
    DEFAULT_ERROR_CLASS, NAV_TARGET_ATTR, STATUS_ELEMENT_ID,
};
use tempfile::tempdir;

fn input(id: &str) -> ElementRef {
    Element::new("input").with_id(id).into_ref()
}

fn build_document() -> Document {
    let document = Document::new();
    document.append(Element::new("div").with_id(STATUS_ELEMENT_ID));

    for (target, label) in [("veiculos", "Veículos"), ("manutencoes", "Manutenções")] {
        let mut link = Element::new("a")
            .with_class(ids::NAV_LINK_CLASS)
            .with_data(NAV_TARGET_ATTR, target);
        link.set_text(label);
        document.append(link);
    }

    let vehicle_form = Element::new("form")
        .with_id(ids::VEHICLE_FORM)
        .with_child(input(ids::VEHICLE_PLATE))
        .with_child(input(ids::VEHICLE_MODEL))
        .with_child(input(ids::VEHICLE_YEAR))
        .with_child(input(ids::VEHICLE_COLOR))
        .into_ref();
    document.append(
        Element::new("section")
            .with_id("veiculos")
            .with_class(ids::SECTION_CLASS)
            .with_child(vehicle_form),
    );

    let maintenance_form = Element::new("form")
        .with_id(ids::MAINTENANCE_FORM)
        .with_child(input(ids::MAINTENANCE_PLATE))
        .with_child(input(ids::MAINTENANCE_DATE))
        .with_child(input(ids::MAINTENANCE_SERVICE))
        .with_child(input(ids::MAINTENANCE_COST))
        .with_child(input(ids::MAINTENANCE_SCHEDULED))
        .into_ref();
    document.append(
        Element::new("section")
            .with_id("manutencoes")
            .with_class(ids::SECTION_CLASS)
            .with_child(maintenance_form),
    );

    document
}

fn page_with<S: garagem_store::KeyValueStore>(
    document: &Document,
    backend: S,
) -> GaragePage<S> {
    let status = StatusDisplay::new(document.clone());
    let garage = Garage::new(CollectionStore::new(backend).with_notifier(status.clone()));
    GaragePage::new(document.clone(), status, garage)
}

fn type_into(document: &Document, id: &str, text: &str) {
    let el = document.get_element_by_id(id).unwrap();
    lock(&el).type_text(text);
}

fn has_error(document: &Document, id: &str) -> bool {
    let el = document.get_element_by_id(id).unwrap();
    let marked = lock(&el).class_list().contains(DEFAULT_ERROR_CLASS);
    marked
}

fn status_text(document: &Document) -> (String, String) {
    let el = document.get_element_by_id(STATUS_ELEMENT_ID).unwrap();
    let status = lock(&el);
    (status.text().to_string(), status.class_list().class_name())
}

#[test]
fn test_vehicle_submit_success() {
    let document = build_document();
    let page = page_with(&document, MemoryStore::new());

    type_into(&document, ids::VEHICLE_PLATE, "abc 1234");
    type_into(&document, ids::VEHICLE_MODEL, "Fiat Uno");
    type_into(&document, ids::VEHICLE_YEAR, "2010");

    let vehicle = page.submit_vehicle().expect("vehicle saved");
    assert_eq!(vehicle.plate, "ABC1234");

    let (text, classes) = status_text(&document);
    assert_eq!(text, "Veículo ABC-1234 cadastrado com sucesso!");
    assert_eq!(classes, "show success");

    let plate = document.get_element_by_id(ids::VEHICLE_PLATE).unwrap();
    assert_eq!(lock(&plate).text(), "");
}

#[test]
fn test_vehicle_submit_marks_invalid_field_until_next_input() {
    let document = build_document();
    let page = page_with(&document, MemoryStore::new());

    type_into(&document, ids::VEHICLE_PLATE, "ABC1234");
    type_into(&document, ids::VEHICLE_MODEL, "Fiat Uno");
    type_into(&document, ids::VEHICLE_YEAR, "1850");

    assert!(page.submit_vehicle().is_none());
    assert!(has_error(&document, ids::VEHICLE_YEAR));
    assert!(!has_error(&document, ids::VEHICLE_PLATE));

    let year = document.get_element_by_id(ids::VEHICLE_YEAR).unwrap();
    assert!(lock(&year).is_focused());

    let (text, classes) = status_text(&document);
    assert!(text.starts_with("Ano inválido."));
    assert_eq!(classes, "show error");

    type_into(&document, ids::VEHICLE_YEAR, "2015");
    assert!(!has_error(&document, ids::VEHICLE_YEAR));

    assert!(page.submit_vehicle().is_some());
    assert_eq!(page.garage().vehicles().len(), 1);
}

#[test]
fn test_resubmit_clears_stale_errors() {
    let document = build_document();
    let page = page_with(&document, MemoryStore::new());

    type_into(&document, ids::VEHICLE_PLATE, "invalida");
    assert!(page.submit_vehicle().is_none());
    assert!(has_error(&document, ids::VEHICLE_PLATE));

    // Marked again without typing: the form-wide clear runs before validation
    let plate = document.get_element_by_id(ids::VEHICLE_PLATE).unwrap();
    lock(&plate).set_text("ABC1D23");
    type_into(&document, ids::VEHICLE_MODEL, "Onix");
    assert!(page.submit_vehicle().is_none());
    assert!(!has_error(&document, ids::VEHICLE_PLATE));
    assert!(has_error(&document, ids::VEHICLE_YEAR));
}

#[test]
fn test_maintenance_submit_for_unknown_vehicle() {
    let document = build_document();
    let page = page_with(&document, MemoryStore::new());

    type_into(&document, ids::MAINTENANCE_PLATE, "XYZ9A99");
    type_into(&document, ids::MAINTENANCE_DATE, "2024-05-10");
    type_into(&document, ids::MAINTENANCE_SERVICE, "Alinhamento");

    assert!(page.submit_maintenance().is_none());
    assert!(has_error(&document, ids::MAINTENANCE_PLATE));
    let (text, _) = status_text(&document);
    assert_eq!(text, "Nenhum veículo cadastrado com a placa XYZ9A99.");
}

#[test]
fn test_maintenance_submit_success() {
    let document = build_document();
    let page = page_with(&document, MemoryStore::new());

    type_into(&document, ids::VEHICLE_PLATE, "ABC1234");
    type_into(&document, ids::VEHICLE_MODEL, "Fiat Uno");
    type_into(&document, ids::VEHICLE_YEAR, "2010");
    page.submit_vehicle().unwrap();

    type_into(&document, ids::MAINTENANCE_PLATE, "abc-1234");
    type_into(&document, ids::MAINTENANCE_DATE, "2024-12-25");
    type_into(&document, ids::MAINTENANCE_SERVICE, "Troca de óleo");
    type_into(&document, ids::MAINTENANCE_COST, "250,90");

    let record = page.submit_maintenance().unwrap();
    assert_eq!(record.cost, Some(250.9));
    let (text, classes) = status_text(&document);
    assert_eq!(text, "Manutenção de ABC-1234 registrada para 25/12/2024.");
    assert_eq!(classes, "show success");
}

#[test]
fn test_scheduled_maintenance_in_the_past_is_rejected() {
    let document = build_document();
    let page = page_with(&document, MemoryStore::new());

    type_into(&document, ids::VEHICLE_PLATE, "ABC1234");
    type_into(&document, ids::VEHICLE_MODEL, "Fiat Uno");
    type_into(&document, ids::VEHICLE_YEAR, "2010");
    page.submit_vehicle().unwrap();

    let checkbox = document.get_element_by_id(ids::MAINTENANCE_SCHEDULED).unwrap();
    lock(&checkbox).set_checked(true);
    type_into(&document, ids::MAINTENANCE_PLATE, "ABC1234");
    type_into(&document, ids::MAINTENANCE_DATE, "2001-01-01");
    type_into(&document, ids::MAINTENANCE_SERVICE, "Revisão");

    assert!(page.submit_maintenance().is_none());
    assert!(has_error(&document, ids::MAINTENANCE_DATE));
}

#[test]
fn test_quota_error_reaches_status_line() {
    let document = build_document();
    let dir = tempdir().unwrap();
    let backend: FileStore = open_file_store_at(dir.path().to_path_buf(), Some(32)).unwrap();
    let page = page_with(&document, backend);

    type_into(&document, ids::VEHICLE_PLATE, "ABC1234");
    type_into(&document, ids::VEHICLE_MODEL, "Fiat Uno");
    type_into(&document, ids::VEHICLE_YEAR, "2010");

    assert!(page.submit_vehicle().is_none());
    let (text, classes) = status_text(&document);
    assert_eq!(
        text,
        format!("Erro: Não há espaço suficiente para salvar os dados. ({VEHICLES_KEY})")
    );
    assert_eq!(classes, "show error");
}

#[test]
fn test_navigation() {
    let document = build_document();
    let page = page_with(&document, MemoryStore::new());

    assert_eq!(page.show_section("manutencoes").as_deref(), Some("manutencoes"));
    let sections = document.elements_by_class(ids::SECTION_CLASS);
    assert!(!lock(&sections[0]).class_list().contains(ACTIVE_SECTION_CLASS));
    assert!(lock(&sections[1]).class_list().contains(ACTIVE_SECTION_CLASS));

    assert_eq!(page.show_section("inexistente").as_deref(), Some("veiculos"));
    let links = document.elements_by_class(ids::NAV_LINK_CLASS);
    assert!(lock(&links[0]).class_list().contains(ACTIVE_LINK_CLASS));
    assert!(!lock(&links[1]).class_list().contains(ACTIVE_LINK_CLASS));
}

#[tokio::test(start_paused = true)]
async fn test_open_page_uses_configured_store_and_status_duration() {
    let dir = tempdir().unwrap();
    let config = Config {
        store_dir: Some(dir.path().join("dados")),
        status_duration_ms: 200,
        ..Config::default()
    };
    let document = build_document();
    let page = open_page(&config, document.clone()).unwrap();

    type_into(&document, ids::VEHICLE_PLATE, "ABC1234");
    type_into(&document, ids::VEHICLE_MODEL, "Fiat Uno");
    type_into(&document, ids::VEHICLE_YEAR, "2010");
    assert!(page.submit_vehicle().is_some());
    assert_eq!(status_text(&document).1, "show success");

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(status_text(&document).1, "show success");
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(status_text(&document).1, "success");

    let stored = dir.path().join("dados").join(format!("{VEHICLES_KEY}.json"));
    assert!(stored.exists());
}
