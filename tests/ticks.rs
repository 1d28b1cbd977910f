#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use choo_choo::db::areas::Area;
    use choo_choo::db::crags::Crag;
    use choo_choo::db::db::Db;
    use choo_choo::db::error::DbError;
    use choo_choo::db::routes::Route;
    use choo_choo::db::ticks::Tick;
    use test_context::{test_context, TestContext};

    struct TickTestContext {
        db: Db,
        crag: Crag,
        area: Area,
        route: Route,
    }

    impl TestContext for TickTestContext {
        fn setup() -> Self {
            let db = Db::open_in_memory().unwrap();
            let mut crag = Crag::new("Little Si", "North Bend, WA");
            db.insert(&mut crag).unwrap();
            let mut area = Area::new(&crag, "Boulders");
            db.insert(&mut area).unwrap();
            let mut route = Route::new(&area, "Cobra Crack", "5.10a");
            db.insert(&mut route).unwrap();

            TickTestContext { db, crag, area, route }
        }
    }

    fn may_day() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_store_has_no_ticks() {
        let db = Db::open_in_memory().unwrap();
        assert!(db.get_all_ticks().unwrap().is_empty());
    }

    #[test_context(TickTestContext)]
    #[test]
    fn test_crag_ticks_scenario(ctx: &mut TickTestContext) {
        let mut tick = Tick::new(&ctx.route, may_day());
        tick.attempts = 3;
        tick.redpoint = true;
        ctx.db.insert(&mut tick).unwrap();

        let ticks = ctx.db.get_crag_ticks(ctx.crag.id).unwrap();
        assert_eq!(ticks.len(), 1);
        let fetched = &ticks[0];
        assert!(fetched.id > 0);
        assert_eq!(fetched.attempts, 3);
        assert!(fetched.redpoint);
        assert_eq!(fetched.route_id, ctx.route.id);
        assert_eq!(fetched.area_id, ctx.area.id);
        assert_eq!(fetched.crag_id, ctx.crag.id);
        assert_eq!(fetched.date, may_day());
    }

    #[test_context(TickTestContext)]
    #[test]
    fn test_lookup_at_every_level(ctx: &mut TickTestContext) {
        let mut other_route = Route::new(&ctx.area, "Aerial Boundaries", "5.11b");
        ctx.db.insert(&mut other_route).unwrap();

        let mut first = Tick::new(&ctx.route, may_day());
        let mut second = Tick::new(&other_route, may_day());
        ctx.db.insert(&mut first).unwrap();
        ctx.db.insert(&mut second).unwrap();

        assert_eq!(ctx.db.get_ticks(ctx.route.id).unwrap(), vec![first.clone()]);
        assert_eq!(ctx.db.get_ticks(other_route.id).unwrap(), vec![second.clone()]);
        assert_eq!(ctx.db.get_area_ticks(ctx.area.id).unwrap().len(), 2);
        assert_eq!(ctx.db.get_crag_ticks(ctx.crag.id).unwrap().len(), 2);
        assert_eq!(ctx.db.get_all_ticks().unwrap().len(), 2);
        assert!(ctx.db.get_crag_ticks(ctx.crag.id + 1).unwrap().is_empty());
    }

    #[test_context(TickTestContext)]
    #[test]
    fn test_full_round_trip(ctx: &mut TickTestContext) {
        let mut tick = Tick::new(&ctx.route, Utc.with_ymd_and_hms(2021, 9, 18, 14, 37, 5).unwrap());
        tick.lead = true;
        tick.onsight = true;
        tick.flash = true;
        tick.falls = 2;
        tick.hangs = 7;
        tick.attempts = 11;
        tick.sessions = 4;
        tick.url = "https://example.com/tick".to_string();
        tick.comment = "finally".to_string();
        let id = ctx.db.insert(&mut tick).unwrap();

        let fetched = ctx.db.get_tick(id).unwrap().unwrap();
        assert_eq!(fetched, tick);
    }

    #[test_context(TickTestContext)]
    #[test]
    fn test_date_before_epoch_round_trips(ctx: &mut TickTestContext) {
        let date = Utc.with_ymd_and_hms(1965, 7, 4, 9, 30, 0).unwrap();
        let mut tick = Tick::new(&ctx.route, date);
        let id = ctx.db.insert(&mut tick).unwrap();

        assert_eq!(ctx.db.get_tick(id).unwrap().unwrap().date, date);
    }

    #[test_context(TickTestContext)]
    #[test]
    fn test_dangling_route_is_rejected(ctx: &mut TickTestContext) {
        let mut tick = Tick::new(&ctx.route, may_day());
        tick.route_id = ctx.route.id + 100;

        let err = ctx.db.insert(&mut tick).unwrap_err();
        assert!(err.is_constraint_violation());
        assert_eq!(tick.id, 0);
        assert!(ctx.db.get_all_ticks().unwrap().is_empty());
    }

    #[test_context(TickTestContext)]
    #[test]
    fn test_dangling_crag_is_rejected(ctx: &mut TickTestContext) {
        let mut tick = Tick::new(&ctx.route, may_day());
        tick.crag_id = 777;

        assert!(ctx.db.insert(&mut tick).unwrap_err().is_constraint_violation());
        assert!(ctx.db.get_all_ticks().unwrap().is_empty());
    }

    #[test_context(TickTestContext)]
    #[test]
    fn test_update_and_delete(ctx: &mut TickTestContext) {
        let mut tick = Tick::new(&ctx.route, may_day());
        let id = ctx.db.insert(&mut tick).unwrap();

        tick.sessions = 2;
        tick.redpoint = true;
        tick.date = Utc.with_ymd_and_hms(2023, 5, 8, 0, 0, 0).unwrap();
        ctx.db.update(&tick).unwrap();
        let fetched = ctx.db.get_tick(id).unwrap().unwrap();
        assert_eq!(fetched, tick);
        assert_eq!(fetched.id, id);

        ctx.db.delete(&tick).unwrap();
        assert!(ctx.db.get_tick(id).unwrap().is_none());
        assert!(ctx.db.get_ticks(ctx.route.id).unwrap().is_empty());
    }

    #[test_context(TickTestContext)]
    #[test]
    fn test_route_with_ticks_cannot_be_deleted(ctx: &mut TickTestContext) {
        let mut tick = Tick::new(&ctx.route, may_day());
        ctx.db.insert(&mut tick).unwrap();

        assert!(ctx.db.delete(&ctx.route).unwrap_err().is_constraint_violation());

        ctx.db.delete(&tick).unwrap();
        ctx.db.delete(&ctx.route).unwrap();
        assert!(ctx.db.get_route(ctx.route.id).unwrap().is_none());
    }

    #[test_context(TickTestContext)]
    #[test]
    fn test_insert_child_sets_route(ctx: &mut TickTestContext) {
        let mut tick = Tick::new(&ctx.route, may_day());
        tick.route_id = 0;

        ctx.db.insert_child(&ctx.route, &mut tick).unwrap();
        assert_eq!(tick.route_id, ctx.route.id);
    }

    #[test_context(TickTestContext)]
    #[test]
    fn test_query_by_unknown_column(ctx: &mut TickTestContext) {
        let result = ctx.db.query_by_parent::<Tick>("route_id; DROP TABLE ticks", 1);
        assert!(matches!(result, Err(DbError::UnknownColumn { table: "ticks", .. })));
    }
}
