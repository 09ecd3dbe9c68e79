//! Dashboard statistics service.
//!
//! Turns the flat equipment set into grouped counts for the dashboards.
//! All grouping is done in memory over a snapshot read so the same input
//! set always produces the same output: groups are ordered by descending
//! total then key, sub-maps list canonical statuses/types first and any
//! remaining values alphabetically, and records without a usable dimension
//! value land in a single "unspecified" bucket. Group totals therefore
//! always add up to the size of the input set.

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use uuid::Uuid;

use crate::{
    api::dashboard::{DashboardStats, DimensionGroup},
    error::AppResult,
    models::{
        department::Department,
        enums::{AssetType, OperationalStatus},
        equipment::{Equipment, EquipmentQuery},
        location::Location,
    },
    repository::Repository,
};

/// Bucket for records whose dimension value is missing or blank
pub const UNSPECIFIED_KEY: &str = "unspecified";

#[derive(Default)]
struct GroupAcc {
    total: i64,
    by_status: BTreeMap<String, i64>,
    by_type: BTreeMap<String, i64>,
}

/// Group an equipment set along one dimension.
///
/// `key_of` yields the dimension value of a record; `None` or a blank value
/// selects the "unspecified" bucket, so every record lands in exactly one
/// group and `sum(total) == equipment.len()`.
pub fn group_equipment<F>(equipment: &[Equipment], key_of: F) -> Vec<DimensionGroup>
where
    F: Fn(&Equipment) -> Option<String>,
{
    let mut groups: BTreeMap<String, GroupAcc> = BTreeMap::new();
    for eq in equipment {
        let key = match key_of(eq) {
            Some(k) if !k.trim().is_empty() => k,
            _ => UNSPECIFIED_KEY.to_string(),
        };
        let acc = groups.entry(key).or_default();
        acc.total += 1;
        *acc
            .by_status
            .entry(eq.estado_operativo.as_str().to_string())
            .or_insert(0) += 1;
        *acc
            .by_type
            .entry(eq.tipo_bien.as_str().to_string())
            .or_insert(0) += 1;
    }

    let mut out: Vec<DimensionGroup> = groups
        .into_iter()
        .map(|(key, acc)| DimensionGroup {
            key,
            total: acc.total,
            by_status: canonical_first(acc.by_status, &OperationalStatus::CANONICAL),
            by_type: canonical_first(acc.by_type, &AssetType::CANONICAL),
        })
        .collect();
    out.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.key.cmp(&b.key)));
    out
}

/// Order a count map: canonical names first, remaining keys alphabetically
fn canonical_first(counts: BTreeMap<String, i64>, canonical: &[&str]) -> IndexMap<String, i64> {
    let mut out = IndexMap::with_capacity(counts.len());
    for &name in canonical {
        if let Some(&n) = counts.get(name) {
            out.insert(name.to_string(), n);
        }
    }
    for (name, n) in counts {
        if !out.contains_key(&name) {
            out.insert(name, n);
        }
    }
    out
}

/// Overall inventory counters for the main dashboard.
///
/// `by_type` is seeded with every catalog name (zero counts included, as the
/// dashboard renders the full catalog) and `by_status` with the canonical
/// statuses; values outside either vocabulary are counted under their
/// verbatim name so the maps still sum to `total_equipment`.
pub fn overall_stats(equipment: &[Equipment], tipo_names: &[String]) -> DashboardStats {
    let mut status_counts: BTreeMap<String, i64> = OperationalStatus::CANONICAL
        .iter()
        .map(|s| (s.to_string(), 0))
        .collect();
    let mut type_counts: BTreeMap<String, i64> =
        tipo_names.iter().map(|n| (n.clone(), 0)).collect();
    let mut dept_counts: BTreeMap<String, i64> = BTreeMap::new();

    for eq in equipment {
        *status_counts
            .entry(eq.estado_operativo.as_str().to_string())
            .or_insert(0) += 1;
        *type_counts
            .entry(eq.tipo_bien.as_str().to_string())
            .or_insert(0) += 1;
        let dept = if eq.departamento.trim().is_empty() {
            UNSPECIFIED_KEY.to_string()
        } else {
            eq.departamento.clone()
        };
        *dept_counts.entry(dept).or_insert(0) += 1;
    }

    let mut dept_entries: Vec<(String, i64)> = dept_counts.into_iter().collect();
    dept_entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    DashboardStats {
        total_equipment: equipment.len() as i64,
        by_type: type_counts.into_iter().collect(),
        by_status: canonical_first(status_counts, &OperationalStatus::CANONICAL),
        by_department: dept_entries.into_iter().collect(),
    }
}

/// Resolves the building an equipment record belongs to.
///
/// A record is assigned to exactly one building: by its ubicacion when that
/// matches a known location display name, otherwise by the building of its
/// department's location. Records matching neither go to the "unspecified"
/// bucket.
pub struct BuildingResolver {
    by_location_name: HashMap<String, String>,
    by_department: HashMap<String, String>,
}

impl BuildingResolver {
    pub fn new(locations: &[Location], departments: &[Department]) -> Self {
        let by_location_name: HashMap<String, String> = locations
            .iter()
            .map(|l| (l.display_name(), l.edificio.clone()))
            .collect();

        let locations_by_id: HashMap<Uuid, &Location> =
            locations.iter().map(|l| (l.id, l)).collect();
        let by_department: HashMap<String, String> = departments
            .iter()
            .filter_map(|d| {
                locations_by_id
                    .get(&d.ubicacion_id)
                    .map(|l| (d.nombre.clone(), l.edificio.clone()))
            })
            .collect();

        Self {
            by_location_name,
            by_department,
        }
    }

    pub fn resolve(&self, eq: &Equipment) -> Option<String> {
        self.by_location_name
            .get(&eq.ubicacion)
            .or_else(|| self.by_department.get(&eq.departamento))
            .cloned()
    }
}

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Overall inventory counters for the main dashboard
    pub async fn dashboard_stats(&self) -> AppResult<DashboardStats> {
        let equipment = self
            .repository
            .equipment
            .list(&EquipmentQuery::default())
            .await?;
        let tipo_names: Vec<String> = self
            .repository
            .lookups
            .tipos_list()
            .await?
            .into_iter()
            .map(|t| t.nombre)
            .collect();
        Ok(overall_stats(&equipment, &tipo_names))
    }

    /// Equipment grouped by department
    pub async fn equipment_by_department(&self) -> AppResult<Vec<DimensionGroup>> {
        let equipment = self
            .repository
            .equipment
            .list(&EquipmentQuery::default())
            .await?;
        Ok(group_equipment(&equipment, |eq| {
            Some(eq.departamento.clone())
        }))
    }

    /// Equipment grouped by location
    pub async fn equipment_by_location(&self) -> AppResult<Vec<DimensionGroup>> {
        let equipment = self
            .repository
            .equipment
            .list(&EquipmentQuery::default())
            .await?;
        Ok(group_equipment(&equipment, |eq| Some(eq.ubicacion.clone())))
    }

    /// Equipment grouped by building
    pub async fn equipment_by_edificio(&self) -> AppResult<Vec<DimensionGroup>> {
        let equipment = self
            .repository
            .equipment
            .list(&EquipmentQuery::default())
            .await?;
        let locations = self.repository.locations.list().await?;
        let departments = self.repository.departments.list().await?;
        let resolver = BuildingResolver::new(&locations, &departments);
        Ok(group_equipment(&equipment, |eq| resolver.resolve(eq)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn record(departamento: &str, ubicacion: &str, tipo: &str, estado: &str) -> Equipment {
        let now = Utc::now();
        Equipment {
            id: Uuid::new_v4(),
            ubicacion: ubicacion.to_string(),
            resguardante: "Ana Pérez".to_string(),
            departamento: departamento.to_string(),
            tipo_bien: AssetType::from(tipo),
            numero_serie: Uuid::new_v4().to_string(),
            numero_factura: String::new(),
            numero_inventario: String::new(),
            marca: "Dell".to_string(),
            modelo: "Latitude".to_string(),
            fecha_adquisicion: NaiveDate::from_ymd_opt(2023, 5, 10).unwrap(),
            estado_operativo: OperationalStatus::from(estado),
            observaciones: String::new(),
            created_at: now,
            updated_at: now,
            created_by: "admin@universidad.edu".to_string(),
        }
    }

    fn location(edificio: &str, piso: &str, salon: &str) -> Location {
        let now = Utc::now();
        Location {
            id: Uuid::new_v4(),
            edificio: edificio.to_string(),
            piso: piso.to_string(),
            salon_aula: salon.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn department(nombre: &str, ubicacion_id: Uuid) -> Department {
        let now = Utc::now();
        Department {
            id: Uuid::new_v4(),
            nombre: nombre.to_string(),
            ubicacion_id,
            numero_trabajadores: 0,
            trabajadores: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn totals_reconcile_for_every_group() {
        let set = vec![
            record("Sistemas", "A - 1 - 101", "computadora", "disponible"),
            record("Sistemas", "A - 1 - 101", "computadora", "asignado"),
            record("Sistemas", "A - 2 - 201", "periferico", "disponible"),
            record("Contabilidad", "B - 1 - 102", "dispositivo_movil", "en_mantenimiento"),
            record("", "B - 1 - 102", "proyector", "prestado"),
        ];

        let groups = group_equipment(&set, |eq| Some(eq.departamento.clone()));
        let total: i64 = groups.iter().map(|g| g.total).sum();
        assert_eq!(total, set.len() as i64);

        for group in &groups {
            let by_status: i64 = group.by_status.values().sum();
            let by_type: i64 = group.by_type.values().sum();
            assert_eq!(by_status, group.total, "group {}", group.key);
            assert_eq!(by_type, group.total, "group {}", group.key);
        }
    }

    #[test]
    fn empty_set_yields_empty_groups_and_zero_stats() {
        let groups = group_equipment(&[], |eq| Some(eq.departamento.clone()));
        assert!(groups.is_empty());

        let stats = overall_stats(&[], &["computadora".to_string()]);
        assert_eq!(stats.total_equipment, 0);
        assert_eq!(stats.by_type.get("computadora"), Some(&0));
        assert!(stats.by_status.values().all(|&n| n == 0));
        assert!(stats.by_department.is_empty());
    }

    #[test]
    fn blank_dimension_goes_to_a_single_unspecified_bucket() {
        let set = vec![
            record("", "A - 1 - 101", "computadora", "disponible"),
            record("   ", "A - 1 - 101", "computadora", "disponible"),
            record("Sistemas", "A - 1 - 101", "computadora", "disponible"),
        ];
        let groups = group_equipment(&set, |eq| Some(eq.departamento.clone()));
        let unspecified: Vec<_> = groups.iter().filter(|g| g.key == UNSPECIFIED_KEY).collect();
        assert_eq!(unspecified.len(), 1);
        assert_eq!(unspecified[0].total, 2);
        assert_eq!(groups.iter().map(|g| g.total).sum::<i64>(), 3);
    }

    #[test]
    fn department_grouping_matches_expected_shape() {
        // 2 available computers in dept A, 1 assigned peripheral in dept B
        let set = vec![
            record("A", "x", "computadora", "disponible"),
            record("A", "x", "computadora", "disponible"),
            record("B", "y", "periferico", "asignado"),
        ];
        let groups = group_equipment(&set, |eq| Some(eq.departamento.clone()));

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "A");
        assert_eq!(groups[0].total, 2);
        assert_eq!(groups[0].by_status.get("disponible"), Some(&2));
        assert_eq!(groups[0].by_type.get("computadora"), Some(&2));
        assert_eq!(groups[1].key, "B");
        assert_eq!(groups[1].total, 1);
        assert_eq!(groups[1].by_status.get("asignado"), Some(&1));
        assert_eq!(groups[1].by_type.get("periferico"), Some(&1));
    }

    #[test]
    fn grouping_is_order_independent() {
        let mut set = vec![
            record("A", "x", "computadora", "disponible"),
            record("B", "y", "periferico", "asignado"),
            record("A", "x", "proyector", "disponible"),
            record("C", "z", "computadora", "dado_de_baja"),
        ];
        let forward = group_equipment(&set, |eq| Some(eq.departamento.clone()));
        set.reverse();
        let backward = group_equipment(&set, |eq| Some(eq.departamento.clone()));
        assert_eq!(forward, backward);
    }

    #[test]
    fn sub_maps_list_canonical_values_first() {
        let set = vec![
            record("A", "x", "antena", "prestado"),
            record("A", "x", "computadora", "disponible"),
        ];
        let groups = group_equipment(&set, |eq| Some(eq.departamento.clone()));
        let statuses: Vec<&String> = groups[0].by_status.keys().collect();
        assert_eq!(statuses, ["disponible", "prestado"]);
        let types: Vec<&String> = groups[0].by_type.keys().collect();
        assert_eq!(types, ["computadora", "antena"]);
    }

    #[test]
    fn overall_stats_count_unknown_values_verbatim() {
        let set = vec![
            record("A", "x", "computadora", "disponible"),
            record("A", "x", "proyector", "calibrando"),
        ];
        let stats = overall_stats(&set, &["computadora".to_string(), "periferico".to_string()]);
        assert_eq!(stats.total_equipment, 2);
        assert_eq!(stats.by_type.get("computadora"), Some(&1));
        assert_eq!(stats.by_type.get("periferico"), Some(&0));
        assert_eq!(stats.by_type.get("proyector"), Some(&1));
        assert_eq!(stats.by_status.get("calibrando"), Some(&1));
        assert_eq!(stats.by_type.values().sum::<i64>(), stats.total_equipment);
        assert_eq!(stats.by_status.values().sum::<i64>(), stats.total_equipment);
    }

    #[test]
    fn building_resolution_assigns_exactly_one_building() {
        let loc_a = location("Edificio A", "1", "101");
        let loc_b = location("Edificio B", "2", "202");
        let dept = department("Sistemas", loc_b.id);
        let locations = vec![loc_a.clone(), loc_b.clone()];
        let departments = vec![dept];
        let resolver = BuildingResolver::new(&locations, &departments);

        // Matched by location display name, even though the department
        // would resolve to a different building.
        let by_location = record("Sistemas", &loc_a.display_name(), "computadora", "disponible");
        // Unknown ubicacion, resolved through the department.
        let by_department = record("Sistemas", "almacén externo", "computadora", "disponible");
        // Neither matches.
        let unresolved = record("Recursos Humanos", "bodega", "computadora", "disponible");

        assert_eq!(resolver.resolve(&by_location).as_deref(), Some("Edificio A"));
        assert_eq!(resolver.resolve(&by_department).as_deref(), Some("Edificio B"));
        assert_eq!(resolver.resolve(&unresolved), None);

        let set = vec![by_location, by_department, unresolved];
        let groups = group_equipment(&set, |eq| resolver.resolve(eq));
        assert_eq!(groups.iter().map(|g| g.total).sum::<i64>(), 3);
        assert!(groups.iter().any(|g| g.key == UNSPECIFIED_KEY && g.total == 1));
    }
}
