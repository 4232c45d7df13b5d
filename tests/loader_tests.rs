mod common;

use common::*;
use osrs_cache_api::{load_all, load_kind, store, FieldValue, KeyTable, Kind, LookupService};
use serde_json::json;

#[tokio::test]
async fn loads_every_kind_from_its_directory() {
    let fx = Fixture::new().await;
    fx.write_json(Kind::Item, "4151.json", &whip());
    fx.write_json(Kind::Item, "4587.json", &dragon_scimitar());
    fx.write_json(Kind::Npc, "8061.json", &vorkath());
    fx.write_json(Kind::Object, "10583.json", &bank_booth());

    let reports = load_all(&fx.pool, &fx.root()).await.unwrap();
    let loaded: Vec<_> = reports.iter().map(|r| (r.kind, r.loaded)).collect();
    assert_eq!(loaded, vec![(Kind::Item, 2), (Kind::Npc, 1), (Kind::Object, 1)]);
    assert_eq!(store::count(&fx.pool, Kind::Item).await.unwrap(), 2);
    assert_eq!(store::count(&fx.pool, Kind::Npc).await.unwrap(), 1);
    assert_eq!(store::count(&fx.pool, Kind::Object).await.unwrap(), 1);
    assert!(reports.iter().all(|r| r.finished_at >= r.started_at));
}

#[tokio::test]
async fn invalid_files_are_skipped_and_the_rest_load() {
    let fx = Fixture::new().await;
    fx.write_json(Kind::Object, "1.json", &bank_booth());
    fx.write(Kind::Object, "2.json", "{\"id\": 12, \"name\": ");
    fx.write(Kind::Object, "3.json", "[1, 2, 3]");
    fx.write(Kind::Object, "4.json", "{\"id\": 14, \"name\": 99}");
    fx.write_json(Kind::Object, "5.json", &json!({"id": 15, "name": "Altar"}));

    let report = load_kind(&fx.pool, &fx.root(), Kind::Object).await.unwrap();
    assert_eq!(report.files, 5);
    assert_eq!(report.loaded, 2);
    assert_eq!(report.skipped, 3);
    assert_eq!(store::count(&fx.pool, Kind::Object).await.unwrap(), 2);
}

#[tokio::test]
async fn empty_files_and_subdirectories_are_ignored() {
    let fx = Fixture::new().await;
    fx.write_json(Kind::Npc, "8061.json", &vorkath());
    fx.write(Kind::Npc, "empty.json", "");
    std::fs::create_dir_all(fx.root().join("npc_defs").join("nested")).unwrap();
    fx.write(Kind::Npc, "nested/9.json", &json!({"id": 9, "name": "Hidden"}).to_string());

    let report = load_kind(&fx.pool, &fx.root(), Kind::Npc).await.unwrap();
    assert_eq!(report.files, 2);
    assert_eq!(report.empty, 1);
    assert_eq!(report.loaded, 1);
    assert_eq!(report.skipped, 0);
    assert_eq!(store::count(&fx.pool, Kind::Npc).await.unwrap(), 1);
}

#[tokio::test]
async fn missing_directory_is_an_empty_report() {
    let fx = Fixture::new().await;
    let report = load_kind(&fx.pool, &fx.root(), Kind::Item).await.unwrap();
    assert_eq!((report.files, report.loaded, report.skipped), (0, 0, 0));
}

#[tokio::test]
async fn reloading_an_id_replaces_the_row() {
    let fx = Fixture::new().await;
    fx.write_json(Kind::Item, "4151.json", &whip());
    load_kind(&fx.pool, &fx.root(), Kind::Item).await.unwrap();

    let mut updated = whip();
    updated["cost"] = json!(5);
    updated["name"] = json!("Abyssal tentacle");
    fx.write_json(Kind::Item, "4151.json", &updated);
    load_kind(&fx.pool, &fx.root(), Kind::Item).await.unwrap();

    assert_eq!(store::count(&fx.pool, Kind::Item).await.unwrap(), 1);
    let keys = KeyTable::build(&[]).unwrap();
    let rows = LookupService::find(&fx.pool, &keys, Kind::Item, "id", "4151").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("cost"), Some(&FieldValue::Int(5)));
    assert_eq!(rows[0].get("name"), Some(&FieldValue::Text("Abyssal tentacle".into())));
}

#[tokio::test]
async fn stored_rows_read_back_with_their_types() {
    let fx = Fixture::new().await;
    fx.write_json(Kind::Item, "4151.json", &whip());
    load_kind(&fx.pool, &fx.root(), Kind::Item).await.unwrap();

    let keys = KeyTable::build(&[]).unwrap();
    let rows = LookupService::find(&fx.pool, &keys, Kind::Item, "id", "4151").await.unwrap();
    let whip = &rows[0];
    assert_eq!(whip.id(), 4151);
    assert_eq!(whip.get("isTradable"), Some(&FieldValue::Bool(true)));
    assert_eq!(
        whip.get("options"),
        Some(&FieldValue::TextList(vec![None, None, Some("Take".into()), None, None]))
    );
    // absent keys come back as zero values
    assert_eq!(whip.get("colorFind"), Some(&FieldValue::IntList(vec![])));
    assert_eq!(whip.get("category"), Some(&FieldValue::Int(0)));
    let params = match whip.get("params") {
        Some(FieldValue::Params(map)) => map.clone(),
        other => panic!("unexpected params {:?}", other),
    };
    assert_eq!(params.get("1397"), Some(&json!(1)));
    assert_eq!(params.get("14"), Some(&json!("whip")));
}
