use crate::models::{
    ActuatorModelTable, ActuatorTable, ActuatorTypeTable, DeviceTable, HouseTable, RoomTable,
    SensorModelTable, SensorReadingTable, SensorTable, SensorTypeTable, Table,
};

pub struct SchemaManager {
    tables: Vec<Box<dyn Table>>,
}

impl SchemaManager {
    pub fn new(mut tables: Vec<Box<dyn Table>>) -> Self {
        Self::sort_tables(&mut tables);
        Self { tables }
    }

    fn sort_tables(tables: &mut Vec<Box<dyn Table>>) {
        let mut to_sort = std::mem::take(tables);
        let mut deps_list: Vec<_> = to_sort.iter().map(|t| t.dependencies()).collect();
        let mut sorted: Vec<Box<dyn Table>> = Vec::with_capacity(to_sort.len());

        while !to_sort.is_empty() {
            let independent_indices: Vec<usize> = deps_list
                .iter()
                .enumerate()
                .filter(|(_, deps)| deps.is_empty())
                .map(|(i, _)| i)
                .collect();

            assert!(
                !independent_indices.is_empty(),
                "Circular dependency detected or unresolved dependencies exist."
            );

            // Keep declaration order among tables resolved in the same round.
            let mut resolved = Vec::with_capacity(independent_indices.len());
            for &index in independent_indices.iter().rev() {
                let table = to_sort.remove(index);
                let _ = deps_list.remove(index);
                resolved.push(table);
            }
            sorted.extend(resolved.into_iter().rev());

            for deps in deps_list.iter_mut() {
                deps.retain(|dep_name| {
                    !sorted.iter().any(|resolved_table| resolved_table.name() == *dep_name)
                });
            }
        }

        *tables = sorted;
    }

    pub fn create_schema(&self) -> Vec<String> {
        self.tables.iter().map(|table| table.create()).collect()
    }

    pub fn dispose_schema(&self) -> Vec<String> {
        self.tables.iter().rev().map(|table| table.dispose()).collect()
    }
}

impl Default for SchemaManager {
    fn default() -> Self {
        SchemaManager::new(vec![
            Box::new(SensorReadingTable),
            Box::new(SensorTable),
            Box::new(ActuatorTable),
            Box::new(DeviceTable),
            Box::new(RoomTable),
            Box::new(HouseTable),
            Box::new(SensorModelTable),
            Box::new(ActuatorModelTable),
            Box::new(SensorTypeTable),
            Box::new(ActuatorTypeTable),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockTable {
        name: &'static str,
        dependencies: Vec<&'static str>,
    }

    impl Table for MockTable {
        fn name(&self) -> &'static str {
            self.name
        }

        fn create(&self) -> String {
            format!("CREATE TABLE {};", self.name)
        }

        fn dispose(&self) -> String {
            format!("DROP TABLE {};", self.name)
        }

        fn dependencies(&self) -> Vec<&'static str> {
            self.dependencies.clone()
        }
    }

    fn table(name: &'static str, dependencies: Vec<&'static str>) -> Box<dyn Table> {
        Box::new(MockTable { name, dependencies })
    }

    #[test]
    fn test_correct_creation_order() {
        let tables = vec![
            table("sensors", vec!["devices"]),
            table("rooms", vec!["houses"]),
            table("devices", vec!["rooms"]),
            table("houses", vec![]),
        ];

        let manager = SchemaManager::new(tables);
        let statements = manager.create_schema();

        assert_eq!(statements[0], "CREATE TABLE houses;");
        assert_eq!(statements[1], "CREATE TABLE rooms;");
        assert_eq!(statements[2], "CREATE TABLE devices;");
        assert_eq!(statements[3], "CREATE TABLE sensors;");

        let statements = manager.dispose_schema();
        assert_eq!(statements[0], "DROP TABLE sensors;");
        assert_eq!(statements[3], "DROP TABLE houses;");
    }

    #[test]
    fn test_default_schema_respects_dependencies() {
        let manager = SchemaManager::default();
        let position = |name: &str| {
            manager
                .tables
                .iter()
                .position(|table| table.name() == name)
                .unwrap()
        };

        for table in &manager.tables {
            for dependency in table.dependencies() {
                assert!(position(dependency) < position(table.name()));
            }
        }
    }
}
