use std::collections::HashMap;

use assert_fs::prelude::*;
use predicates::prelude::*;
use tokio::task;
use warp::http::StatusCode;
use warp::{Filter, Reply};

fn hiscore_payload() -> serde_json::Value {
    serde_json::json!({
        "skills": [
            { "id": 0, "name": "Overall", "rank": 1000, "level": 2000, "xp": 300000000 },
            { "id": 1, "name": "Attack", "rank": 900, "level": 99, "xp": 14000000 }
        ],
        "activities": [
            { "id": 6, "name": "Clue Scrolls (all)", "rank": 5000, "score": 120 },
            { "id": 40, "name": "Zulrah", "rank": 300, "score": 4000 }
        ]
    })
}

#[tokio::test]
async fn fetch_hiscores_writes_one_file_per_known_player() {
    let payload = hiscore_payload();
    let hiscore_route = warp::path("hiscore")
        .and(warp::get())
        .and(warp::query::<HashMap<String, String>>())
        .map(move |query: HashMap<String, String>| {
            if query.get("player").map(String::as_str) == Some("ghost") {
                warp::reply::with_status(
                    warp::reply::json(&serde_json::json!({ "error": "not found" })),
                    StatusCode::NOT_FOUND,
                )
                .into_response()
            } else {
                warp::reply::json(&payload).into_response()
            }
        });
    let (addr, server) = warp::serve(hiscore_route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let workspace = assert_fs::TempDir::new().unwrap();
    let store_path = workspace.child("hiscore_logs").path().to_path_buf();
    let config_yaml = format!(
        "name: Yama Hunt\nhiscore_base_url: http://{addr}/hiscore\nsnapshot_dir: {store}\nretry_delay_secs: 0\nparticipants:\n  - rsn: Ruto, Politoed22\n  - rsn: ghost\n",
        store = store_path.display(),
    );
    let config_file = workspace.child("event.yaml");
    config_file.write_str(&config_yaml).unwrap();
    let config_arg = config_file.path().to_str().unwrap().to_string();

    task::spawn_blocking(move || {
        let mut cmd = assert_cmd::cargo_bin_cmd!("clanboard");
        cmd.args(["fetch-hiscores", "-c", &config_arg]);
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Snapshot written to"))
            .stderr(predicate::str::contains("ghost is not on the hiscores"));
    })
    .await
    .unwrap();

    let snapshot_dirs: Vec<_> = std::fs::read_dir(&store_path)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(snapshot_dirs.len(), 1);

    let snapshot_dir = &snapshot_dirs[0];
    let ruto = std::fs::read_to_string(snapshot_dir.join("ruto.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&ruto).unwrap();
    assert_eq!(parsed["skills"]["attack"]["xp"], 14_000_000);
    assert_eq!(parsed["bosses"]["Zulrah"]["kills"], 4000);
    assert_eq!(parsed["minigames"]["Clue Scrolls (all)"]["score"], 120);

    assert!(snapshot_dir.join("politoed22.json").exists());
    assert!(!snapshot_dir.join("ghost.json").exists());
}

#[tokio::test]
async fn fetch_hiscores_gives_up_after_repeated_server_errors() {
    let failing_route = warp::path("hiscore").and(warp::get()).map(|| {
        warp::reply::with_status(
            warp::reply::json(&serde_json::json!({ "error": "down" })),
            StatusCode::INTERNAL_SERVER_ERROR,
        )
    });
    let (addr, server) = warp::serve(failing_route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let workspace = assert_fs::TempDir::new().unwrap();
    let store_path = workspace.child("hiscore_logs").path().to_path_buf();
    let config_yaml = format!(
        "name: Yama Hunt\nhiscore_base_url: http://{addr}/hiscore\nsnapshot_dir: {store}\nretry_delay_secs: 0\nparticipants:\n  - rsn: ruto\n",
        store = store_path.display(),
    );
    let config_file = workspace.child("event.yaml");
    config_file.write_str(&config_yaml).unwrap();
    let config_arg = config_file.path().to_str().unwrap().to_string();

    task::spawn_blocking(move || {
        let mut cmd = assert_cmd::cargo_bin_cmd!("clanboard");
        cmd.args(["fetch-hiscores", "-c", &config_arg]);
        cmd.assert()
            .success()
            .stderr(predicate::str::contains("Failed to fetch hiscores for ruto"));
    })
    .await
    .unwrap();
}
