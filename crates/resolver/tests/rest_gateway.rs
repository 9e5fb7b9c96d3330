use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use country_resolver::{
    plan, CountryLookup, CountryResolver, MatchTier, Resolution, ResolverError,
    RestCountriesGateway, SearchTerm,
};

const NORTH: &str = r#"[
    {"name": "North Macedonia", "capital": "Skopje", "population": 2077132, "demonym": "Macedonian", "region": "Europe"},
    {"name": "Korea (Democratic People's Republic of)", "capital": "Pyongyang", "population": 25281000, "demonym": "North Korean", "region": "Asia"}
]"#;

const KOREA: &str = r#"[
    {"name": "Korea (Democratic People's Republic of)", "capital": "Pyongyang", "population": 25281000, "demonym": "North Korean"},
    {"name": "Korea (Republic of)", "capital": "Seoul", "population": 50801405, "demonym": "South Korean"}
]"#;

async fn by_name(Path(term): Path<String>) -> Response {
    let json = |body: &'static str| {
        ([(header::CONTENT_TYPE, "application/json")], body).into_response()
    };
    match term.as_str() {
        "north" => json(NORTH),
        "korea" => json(KOREA),
        "garbled" => json("{\"name\": \"not an array\""),
        "teapot" => (StatusCode::IM_A_TEAPOT, NORTH).into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            r#"{"status": 404, "message": "Not Found"}"#,
        )
            .into_response(),
    }
}

async fn spawn_stub() -> String {
    let app = Router::new().route("/rest/v2/name/:term", get(by_name));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });
    format!("http://{addr}")
}

fn term(raw: &str) -> SearchTerm {
    plan(raw).terms.remove(0)
}

fn gateway(base_url: &str) -> RestCountriesGateway {
    RestCountriesGateway::new(reqwest::Client::new(), base_url).expect("gateway")
}

#[tokio::test]
async fn decodes_records_from_success_response() {
    let base = spawn_stub().await;
    let records = gateway(&base).lookup(&term("north")).await;

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].capital, "Pyongyang");
    assert_eq!(records[0].region.as_deref(), Some("Europe"));
}

#[tokio::test]
async fn not_found_degrades_to_empty() {
    let base = spawn_stub().await;
    let gateway = gateway(&base);

    assert!(matches!(
        gateway.try_lookup(&term("atlantis")).await,
        Err(ResolverError::Status { status, .. }) if status == reqwest::StatusCode::NOT_FOUND
    ));
    assert!(gateway.lookup(&term("atlantis")).await.is_empty());
}

#[tokio::test]
async fn non_success_with_valid_body_is_still_empty() {
    let base = spawn_stub().await;
    assert!(gateway(&base).lookup(&term("teapot")).await.is_empty());
}

#[tokio::test]
async fn malformed_payload_degrades_to_empty() {
    let base = spawn_stub().await;
    let gateway = gateway(&base);

    assert!(matches!(
        gateway.try_lookup(&term("garbled")).await,
        Err(ResolverError::Decode(_))
    ));
    assert!(gateway.lookup(&term("garbled")).await.is_empty());
}

#[tokio::test]
async fn unreachable_service_degrades_to_empty() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let gateway = gateway(&format!("http://{addr}"));
    assert!(matches!(
        gateway.try_lookup(&term("canada")).await,
        Err(ResolverError::Transport(_))
    ));
    assert!(gateway.lookup(&term("canada")).await.is_empty());
}

#[tokio::test]
async fn resolver_over_rest_picks_north_korea() {
    let base = spawn_stub().await;
    let resolver = CountryResolver::new(gateway(&base));

    let resolution = resolver.resolve("North Korea").await.expect("resolve");

    let Resolution::Match { record, tier } = resolution else {
        panic!("expected a match");
    };
    assert_eq!(tier, MatchTier::Exact);
    assert_eq!(record.capital, "Pyongyang");
    assert_eq!(record.population, 25_281_000);
}

#[tokio::test]
async fn resolver_survives_partial_failures() {
    let base = spawn_stub().await;
    let resolver = CountryResolver::new(gateway(&base));

    // "garbled" fails to decode, "atlantis" is a 404; "korea" still answers.
    let resolution = resolver
        .resolve("garbled atlantis korea")
        .await
        .expect("resolve");

    assert_eq!(
        resolution.record().map(|r| r.name.as_str()),
        Some("Korea (Democratic People's Republic of)")
    );
}

#[tokio::test]
async fn resolver_reports_no_match_when_every_lookup_fails() {
    let base = spawn_stub().await;
    let resolver = CountryResolver::new(gateway(&base));

    let resolution = resolver.resolve("lost kingdom").await.expect("resolve");
    assert_eq!(resolution, Resolution::NoMatch);
}
