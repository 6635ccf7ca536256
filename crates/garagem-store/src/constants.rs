/// Storage key of the vehicles collection
pub const VEHICLES_KEY: &str = "garagem_veiculos_v2";

/// Storage key of the maintenance records collection
pub const MAINTENANCES_KEY: &str = "garagem_manutencoes_v2";
