// Client tests against an in-process HTTP stub serving fixture payloads.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use benchwarmer_sleeper::{ScoringFormat, SleeperClient, SleeperError, SleeperSettings};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("missing fixture {path}: {e}"))
}

/// Serve `routes` (request target -> JSON body) on an ephemeral port. Unknown
/// targets get a 404.
async fn serve(routes: HashMap<String, String>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let routes = Arc::new(routes);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let routes = Arc::clone(&routes);
            tokio::spawn(async move {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                loop {
                    let n = socket.read(&mut chunk).await.unwrap_or(0);
                    if n == 0 {
                        break;
                    }
                    buf.extend_from_slice(&chunk[..n]);
                    if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
                let request = String::from_utf8_lossy(&buf);
                let target = request.split_whitespace().nth(1).unwrap_or("/");
                let (status, body) = match routes.get(target) {
                    Some(body) => ("200 OK", body.clone()),
                    None => ("404 Not Found", "{}".to_string()),
                };
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

fn settings_for(addr: SocketAddr) -> SleeperSettings {
    let mut settings = SleeperSettings::new("L1", "2025");
    settings.api_base = format!("http://{addr}/v1");
    settings.stats_base = format!("http://{addr}");
    settings.scoring = ScoringFormat::HalfPpr;
    settings.concurrency = 2;
    settings.team_names.insert(1, "Chiefs Kingdom".into());
    settings
}

fn player_route(id: &str) -> String {
    format!("/stats/nfl/player/{id}?season_type=regular&season=2025")
}

fn league_routes() -> HashMap<String, String> {
    let mut routes = HashMap::new();
    routes.insert("/v1/league/L1/rosters".to_string(), fixture("rosters.json"));
    routes.insert(player_route("4046"), fixture("player_4046.json"));
    routes.insert(player_route("9509"), fixture("player_9509.json"));
    routes.insert(player_route("6794"), fixture("player_6794.json"));
    routes.insert(player_route("0000"), "null".to_string());
    routes
}

#[tokio::test]
async fn fetch_teams_resolves_rosters_in_order() {
    let addr = serve(league_routes()).await;
    let client = SleeperClient::new(settings_for(addr)).unwrap();

    let teams = client.fetch_teams().await.unwrap();
    assert_eq!(teams.len(), 2);

    let first = &teams[0];
    assert_eq!(first.id, 1);
    assert_eq!(first.name, "Chiefs Kingdom");
    assert_eq!(first.points_for, 1502.25);
    assert_eq!(first.points_against, 1440.8);
    assert_eq!(first.max_points, 1799.62);

    // Player 0000 has no stats record and is skipped.
    let ids: Vec<&str> = first.players.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["4046", "9509", "6794"]);
    assert_eq!(first.players[0].name, "Patrick Mahomes");
    assert!((first.players[0].avg_points_per_game() - 20.0).abs() < 1e-9);
    assert!((first.players[1].avg_points_per_game() - 18.0).abs() < 1e-9);
    assert_eq!(first.players[2].avg_points_per_game(), 0.0);

    let second = &teams[1];
    assert_eq!(second.name, "Roster 2");
    assert_eq!(second.points_for, 1100.5);
    assert!(second.players.is_empty());
}

#[tokio::test]
async fn fetch_player_returns_none_for_null_body() {
    let addr = serve(league_routes()).await;
    let client = SleeperClient::new(settings_for(addr)).unwrap();
    assert!(client.fetch_player("0000").await.unwrap().is_none());
    let p = client.fetch_player("9509").await.unwrap().unwrap();
    assert_eq!(p.positions, vec!["RB".to_string()]);
}

#[tokio::test]
async fn missing_endpoint_is_a_status_error() {
    let addr = serve(HashMap::new()).await;
    let client = SleeperClient::new(settings_for(addr)).unwrap();
    let err = client.fetch_rosters().await.unwrap_err();
    match err {
        SleeperError::Status { status, .. } => assert_eq!(status.as_u16(), 404),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn roster_without_points_is_rejected() {
    let mut routes = HashMap::new();
    routes.insert(
        "/v1/league/L1/rosters".to_string(),
        r#"[{"roster_id": 3, "players": [], "settings": {"fpts_against": 10, "ppts": 20}}]"#.to_string(),
    );
    let addr = serve(routes).await;
    let client = SleeperClient::new(settings_for(addr)).unwrap();
    let err = client.fetch_teams().await.unwrap_err();
    assert!(matches!(
        err,
        SleeperError::MissingField { roster_id: 3, field: "fpts" }
    ));
}

#[tokio::test]
async fn garbage_body_is_a_decode_error() {
    let mut routes = HashMap::new();
    routes.insert("/v1/league/L1/rosters".to_string(), "not json".to_string());
    let addr = serve(routes).await;
    let client = SleeperClient::new(settings_for(addr)).unwrap();
    assert!(matches!(
        client.fetch_rosters().await,
        Err(SleeperError::Decode { .. })
    ));
}
