//! Runs the garagem binary against a scratch config and data directory

use std::path::Path;
use std::process::{Command, Output};

use tempfile::{tempdir, TempDir};

struct Sandbox {
    home: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            home: tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.home.path()
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_garagem"))
            .args(args)
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join("config"))
            .env("XDG_DATA_HOME", self.path().join("data"))
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_vehicle_add_and_list() {
    let sandbox = Sandbox::new();

    let added = sandbox.run(&["vehicle", "add", "abc1234", "-m", "Fiat Uno", "-y", "2010"]);
    assert!(added.status.success(), "{}", stderr(&added));
    assert!(stdout(&added).contains("Veículo ABC-1234 cadastrado com sucesso!"));

    let listed = sandbox.run(&["vehicle", "list"]);
    assert!(listed.status.success());
    let table = stdout(&listed);
    assert!(table.contains("ABC-1234"));
    assert!(table.contains("Fiat Uno"));

    let json = sandbox.run(&["--format", "json", "vehicle", "list"]);
    let vehicles: serde_json::Value = serde_json::from_slice(&json.stdout).unwrap();
    assert_eq!(vehicles[0]["plate"], "ABC1234");
    assert_eq!(vehicles[0]["year"], 2010);
}

#[test]
fn test_invalid_plate_exits_with_error() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["vehicle", "add", "AB-12", "-m", "Gol", "-y", "2010"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: Placa inválida."));
}

#[test]
fn test_maintenance_flow() {
    let sandbox = Sandbox::new();
    let store_dir = sandbox.path().join("custom");
    let store_arg = store_dir.to_str().unwrap();

    let added = sandbox.run(&[
        "--store-dir", store_arg, "vehicle", "add", "ABC1D23", "-m", "Onix", "-y", "2022",
    ]);
    assert!(added.status.success(), "{}", stderr(&added));

    let service = sandbox.run(&[
        "--store-dir", store_arg, "maintenance", "add", "abc-1d23", "-d", "2024-03-15", "-s",
        "Troca de óleo", "-c", "1.234,5",
    ]);
    assert!(service.status.success(), "{}", stderr(&service));
    assert!(stdout(&service).contains("Manutenção de ABC1D23 registrada para 15/03/2024."));
    assert!(stdout(&service).contains("R$ 1.234,50"));

    let listed = sandbox.run(&["--store-dir", store_arg, "maintenance", "list", "-p", "ABC1D23"]);
    assert!(stdout(&listed).contains("15/03/2024"));
    assert!(stdout(&listed).contains("total R$ 1.234,50"));

    // Past services are not upcoming
    let upcoming = sandbox.run(&["--store-dir", store_arg, "maintenance", "list", "--upcoming"]);
    assert!(stdout(&upcoming).contains("Nenhuma manutenção encontrada."));

    // Nothing was written to the default data directory
    let default_list = sandbox.run(&["vehicle", "list"]);
    assert!(stdout(&default_list).contains("Nenhum veículo cadastrado."));

    let removed = sandbox.run(&["--store-dir", store_arg, "vehicle", "remove", "ABC1D23"]);
    assert!(removed.status.success());
    let again = sandbox.run(&["--store-dir", store_arg, "vehicle", "remove", "ABC1D23"]);
    assert_eq!(again.status.code(), Some(1));
}

#[test]
fn test_config_set_output_and_reset() {
    let sandbox = Sandbox::new();

    let set = sandbox.run(&["config", "--set-output", "json"]);
    assert!(set.status.success(), "{}", stderr(&set));
    assert!(sandbox.path().join("config/garagem/config.json").exists());

    let listed = sandbox.run(&["vehicle", "list"]);
    assert_eq!(stdout(&listed).trim(), "[]");

    let reset = sandbox.run(&["config", "--reset"]);
    assert!(reset.status.success());
    let listed = sandbox.run(&["vehicle", "list"]);
    assert!(stdout(&listed).contains("Nenhum veículo cadastrado."));
}
