//! JSON API over the Swiss tournament service.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Byes and tie-break policy come from SWISS_ALLOW_BYES and SWISS_TIE_BREAK.

use actix_web::{
    delete, get, post,
    web::{Data, Json},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use std::fs::File;
use swiss_tournament::{
    export, Config, MemoryStore, PlayerId, TournamentError, TournamentService,
};

type AppState = Data<TournamentService<MemoryStore>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct ReportMatchBody {
    winner: PlayerId,
    loser: PlayerId,
}

/// Caller mistakes are 400s; anything else is a 500.
fn error_response(e: TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    if e.is_invalid_input() {
        HttpResponse::BadRequest().json(body)
    } else {
        log::error!("{}", e);
        HttpResponse::InternalServerError().json(body)
    }
}

fn respond<T: serde::Serialize>(result: Result<T, TournamentError>) -> HttpResponse {
    match result {
        Ok(v) => HttpResponse::Ok().json(v),
        Err(e) => error_response(e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-tournament",
    })
}

#[get("/api/players")]
async fn api_list_players(state: AppState) -> HttpResponse {
    respond(state.players())
}

#[get("/api/players/count")]
async fn api_count_players(state: AppState) -> HttpResponse {
    respond(
        state
            .count_players()
            .map(|count| serde_json::json!({ "count": count })),
    )
}

/// Register a player; the store assigns the id.
#[post("/api/players")]
async fn api_add_player(state: AppState, body: Json<AddPlayerBody>) -> HttpResponse {
    respond(state.register_player(&body.name))
}

/// Delete all players (matches must be deleted first).
#[delete("/api/players")]
async fn api_delete_players(state: AppState) -> HttpResponse {
    respond(state.delete_players().map(|()| serde_json::json!({ "ok": true })))
}

#[get("/api/matches")]
async fn api_list_matches(state: AppState) -> HttpResponse {
    respond(state.matches())
}

/// Report a result. While a round is open, the pair must belong to it.
#[post("/api/matches")]
async fn api_report_match(state: AppState, body: Json<ReportMatchBody>) -> HttpResponse {
    respond(state.report_match(body.winner, body.loser))
}

/// Delete all matches and discard the open round.
#[delete("/api/matches")]
async fn api_delete_matches(state: AppState) -> HttpResponse {
    respond(state.delete_matches().map(|()| serde_json::json!({ "ok": true })))
}

#[get("/api/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    respond(state.standings())
}

#[get("/api/standings.csv")]
async fn api_standings_csv(state: AppState) -> HttpResponse {
    let rows = match state.standings() {
        Ok(rows) => rows,
        Err(e) => return error_response(e),
    };
    let mut out = Vec::new();
    match export::write_standings(&rows, &mut out) {
        Ok(()) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(out),
        Err(e) => error_response(e),
    }
}

/// Pairings for the next round without opening it.
#[get("/api/pairings")]
async fn api_pairings(state: AppState) -> HttpResponse {
    respond(state.preview_pairings())
}

#[get("/api/rounds/current")]
async fn api_current_round(state: AppState) -> HttpResponse {
    match state.current_round() {
        Ok(Some(round)) => HttpResponse::Ok().json(round),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({ "error": "No open round" })),
        Err(e) => error_response(e),
    }
}

/// Pair and open the next round.
#[post("/api/rounds")]
async fn api_open_round(state: AppState) -> HttpResponse {
    respond(state.open_round())
}

fn load_store(config: &Config) -> std::io::Result<MemoryStore> {
    let Some(players_path) = &config.players_csv else {
        return Ok(MemoryStore::new());
    };
    let players = File::open(players_path)?;
    let matches = config.matches_csv.as_ref().map(File::open).transpose()?;
    export::import_store(players, matches)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let store = load_store(&config)?;
    let state = Data::new(TournamentService::new(store, &config));

    let bind = (config.host.clone(), config.port);
    log::info!(
        "Starting server at http://{}:{} (byes: {}, tie-break: {:?})",
        bind.0,
        bind.1,
        config.allow_byes,
        config.tie_break
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_count_players)
            .service(api_list_players)
            .service(api_add_player)
            .service(api_delete_players)
            .service(api_list_matches)
            .service(api_report_match)
            .service(api_delete_matches)
            .service(api_standings_csv)
            .service(api_standings)
            .service(api_pairings)
            .service(api_current_round)
            .service(api_open_round)
    })
    .bind(bind)?
    .run()
    .await
}
