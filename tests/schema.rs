#[cfg(test)]
mod tests {
    use choo_choo::db::areas::Area;
    use choo_choo::db::crags::Crag;
    use choo_choo::db::db::{Db, DB_FILE_NAME};
    use choo_choo::db::error::DbError;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SchemaTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for SchemaTestContext {
        fn setup() -> Self {
            SchemaTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn table_names(db: &Db) -> Vec<String> {
        let mut stmt = db
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name")
            .unwrap();
        let names = stmt.query_map([], |row| row.get::<_, String>(0)).unwrap();
        let names: Vec<String> = names.map(|name| name.unwrap()).collect();
        names
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_open_creates_directory_and_file(ctx: &mut SchemaTestContext) {
        let dir = ctx.temp_dir.path().join("nested").join(".db");
        let db = Db::open(&dir).unwrap();

        assert!(dir.join(DB_FILE_NAME).exists());
        assert_eq!(table_names(&db), vec!["areas", "crags", "routes", "ticks"]);
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_apply_schema_twice(ctx: &mut SchemaTestContext) {
        let db = Db::open(ctx.temp_dir.path()).unwrap();
        let mut crag = Crag::new("Vantage", "Columbia River Gorge");
        db.insert(&mut crag).unwrap();

        db.apply_schema().unwrap();
        db.apply_schema().unwrap();

        assert_eq!(table_names(&db), vec!["areas", "crags", "routes", "ticks"]);
        assert_eq!(db.get_all_crags().unwrap(), vec![crag]);
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_reopen_keeps_data_and_foreign_keys(ctx: &mut SchemaTestContext) {
        let crag = {
            let db = Db::open(ctx.temp_dir.path()).unwrap();
            let mut crag = Crag::new("Exit 38", "North Bend, WA");
            db.insert(&mut crag).unwrap();
            crag
        };

        let db = Db::open(ctx.temp_dir.path()).unwrap();
        assert_eq!(db.get_crag(crag.id).unwrap(), Some(crag));

        let mut orphan = Area {
            crag_id: 1234,
            name: "Orphan".to_string(),
            ..Area::default()
        };
        assert!(db.insert(&mut orphan).unwrap_err().is_constraint_violation());
    }

    #[test]
    fn test_row_with_wrong_column_count() {
        let db = Db::open_in_memory().unwrap();
        let mut crag = Crag::new("Leavenworth", "WA");
        db.insert(&mut crag).unwrap();

        let result = db.query::<Crag>("SELECT id, name FROM crags", &[]);
        assert!(matches!(
            result,
            Err(DbError::RowShape {
                table: "crags",
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_row_with_wrong_column_type() {
        let db = Db::open_in_memory().unwrap();
        let mut crag = Crag::new("Leavenworth", "WA");
        db.insert(&mut crag).unwrap();
        let mut area = Area::new(&crag, "Castle Rock");
        db.insert(&mut area).unwrap();

        let result = db.query::<Area>("SELECT id, name, crag_id FROM areas", &[]);
        assert!(matches!(result, Err(DbError::Sqlite(_))));
    }
}
