//! Single binary web server: JSON API over the league engine, tournaments kept in memory.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use league_engine::{
    score_from_json, write_standings_csv, FixtureDraft, LeagueError, MatchId, Player, Role, Side,
    Team, Tournament, TournamentId,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// In-memory record store: tournaments by id.
type AppState = Data<RwLock<HashMap<TournamentId, Tournament>>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
}

#[derive(Deserialize)]
struct AddTeamBody {
    /// Generated when omitted.
    #[serde(default)]
    id: Option<String>,
    name: String,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    email: String,
    name: String,
    #[serde(default)]
    role: Role,
}

#[derive(Deserialize)]
struct TwoRoundBody {
    drafts: Vec<FixtureDraft>,
}

#[derive(Deserialize)]
struct RoundRobinBody {
    #[serde(default)]
    double: bool,
}

#[derive(Deserialize)]
struct ResultBody {
    home_score: serde_json::Value,
    away_score: serde_json::Value,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

#[derive(Deserialize)]
struct TournamentTeamPath {
    id: TournamentId,
    team_id: String,
}

#[derive(Deserialize)]
struct TournamentPlayerPath {
    id: TournamentId,
    email: String,
}

#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: MatchId,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

fn bad_request(e: LeagueError) -> HttpResponse {
    log::warn!("Rejected: {}", e);
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

/// Run `f` against one tournament under the write lock (404 if missing).
fn with_tournament<F>(state: &AppState, id: TournamentId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Tournament) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&id) {
        Some(t) => f(t),
        None => not_found(),
    }
}

/// Run `f` against one tournament under the read lock (404 if missing).
fn read_tournament<F>(state: &AppState, id: TournamentId, f: F) -> HttpResponse
where
    F: FnOnce(&Tournament) -> HttpResponse,
{
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get(&id) {
        Some(t) => f(t),
        None => not_found(),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "league-engine",
    })
}

#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let name = body.name.trim();
    if name.is_empty() {
        return bad_request(LeagueError::InvalidName);
    }
    let tournament = Tournament::new(name);
    let id = tournament.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    log::info!("Created tournament {} ({})", id, name);
    let response = HttpResponse::Ok().json(&tournament);
    g.insert(id, tournament);
    response
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    read_tournament(&state, path.id, |t| {
        HttpResponse::Ok().json(serde_json::json!({
            "tournament": t,
            "roster_status": t.roster_status(),
        }))
    })
}

#[post("/api/tournaments/{id}/teams")]
async fn api_add_team(state: AppState, path: Path<TournamentPath>, body: Json<AddTeamBody>) -> HttpResponse {
    let body = body.into_inner();
    let team_id = body.id.unwrap_or_else(|| Uuid::new_v4().to_string());
    with_tournament(&state, path.id, |t| match t.add_team(Team::new(team_id, body.name)) {
        Ok(()) => HttpResponse::Ok().json(&t.teams),
        Err(e) => bad_request(e),
    })
}

/// Bulk import: request body is CSV with an `id,name` header.
#[post("/api/tournaments/{id}/teams/import")]
async fn api_import_teams(state: AppState, path: Path<TournamentPath>, body: String) -> HttpResponse {
    with_tournament(&state, path.id, |t| match t.import_teams_csv(body.as_bytes()) {
        Ok(added) => {
            log::info!("Imported {} team(s) into {}", added, t.id);
            HttpResponse::Ok().json(&t.teams)
        }
        Err(e) => bad_request(e),
    })
}

#[delete("/api/tournaments/{id}/teams/{team_id}")]
async fn api_remove_team(state: AppState, path: Path<TournamentTeamPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| match t.remove_team(&path.team_id) {
        Ok(()) => HttpResponse::Ok().json(&t.teams),
        Err(e) => bad_request(e),
    })
}

#[post("/api/tournaments/{id}/players")]
async fn api_add_player(state: AppState, path: Path<TournamentPath>, body: Json<AddPlayerBody>) -> HttpResponse {
    let body = body.into_inner();
    with_tournament(&state, path.id, |t| {
        match t.add_player(Player::with_role(body.email, body.name, body.role)) {
            Ok(()) => HttpResponse::Ok().json(&t.players),
            Err(e) => bad_request(e),
        }
    })
}

#[delete("/api/tournaments/{id}/players/{email}")]
async fn api_remove_player(state: AppState, path: Path<TournamentPlayerPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| match t.remove_player(&path.email) {
        Ok(()) => HttpResponse::Ok().json(&t.players),
        Err(e) => bad_request(e),
    })
}

#[post("/api/tournaments/{id}/roster/lock")]
async fn api_lock_roster(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| match t.lock_roster() {
        Ok(transition) => {
            log::info!("Roster locked for {}", t.id);
            HttpResponse::Ok().json(transition)
        }
        Err(e) => bad_request(e),
    })
}

#[post("/api/tournaments/{id}/roster/unlock")]
async fn api_unlock_roster(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        let transition = t.unlock_roster();
        log::info!("Roster unlocked for {}", t.id);
        HttpResponse::Ok().json(transition)
    })
}

/// Run (or re-run) the draw. A new rng is taken per call so draws are not reproducible.
#[post("/api/tournaments/{id}/draw")]
async fn api_draw(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        let mut rng = rand::thread_rng();
        match t.run_draw(&mut rng) {
            Ok(assignments) => HttpResponse::Ok().json(assignments),
            Err(e) => bad_request(e),
        }
    })
}

/// Submit round 1 of the two-round format. Replaces every stored fixture and match.
#[put("/api/tournaments/{id}/fixtures/two-round")]
async fn api_two_round_fixtures(state: AppState, path: Path<TournamentPath>, body: Json<TwoRoundBody>) -> HttpResponse {
    with_tournament(&state, path.id, |t| match t.set_two_round_fixtures(&body.drafts) {
        Ok(fixtures) => HttpResponse::Ok().json(fixtures),
        Err(e) => bad_request(e),
    })
}

/// Generate a round-robin over the team pool. Replaces every stored fixture and match.
#[post("/api/tournaments/{id}/fixtures/round-robin")]
async fn api_round_robin_fixtures(
    state: AppState,
    path: Path<TournamentPath>,
    body: Option<Json<RoundRobinBody>>,
) -> HttpResponse {
    let double = body.map(|b| b.double).unwrap_or(false);
    with_tournament(&state, path.id, |t| match t.set_round_robin_fixtures(double) {
        Ok(fixtures) => HttpResponse::Ok().json(fixtures),
        Err(e) => bad_request(e),
    })
}

#[put("/api/tournaments/{id}/matches/{match_id}/result")]
async fn api_record_result(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<ResultBody>,
) -> HttpResponse {
    let (home, away) = match (
        score_from_json(Side::Home, &body.home_score),
        score_from_json(Side::Away, &body.away_score),
    ) {
        (Ok(home), Ok(away)) => (home, away),
        (Err(e), _) | (_, Err(e)) => return bad_request(e),
    };
    with_tournament(&state, path.id, |t| match t.record_result(path.match_id, home, away) {
        Ok(m) => HttpResponse::Ok().json(m),
        Err(e) => bad_request(e),
    })
}

#[delete("/api/tournaments/{id}/matches/{match_id}/result")]
async fn api_clear_result(state: AppState, path: Path<TournamentMatchPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| match t.clear_result(path.match_id) {
        Ok(m) => HttpResponse::Ok().json(m),
        Err(e) => bad_request(e),
    })
}

#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    read_tournament(&state, path.id, |t| HttpResponse::Ok().json(t.standings()))
}

#[get("/api/tournaments/{id}/standings.csv")]
async fn api_standings_csv(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    read_tournament(&state, path.id, |t| {
        let mut buf = Vec::new();
        match write_standings_csv(&t.standings(), &mut buf) {
            Ok(()) => HttpResponse::Ok().content_type("text/csv; charset=utf-8").body(buf),
            Err(e) => bad_request(e),
        }
    })
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, Tournament>::new()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_add_team)
            .service(api_import_teams)
            .service(api_remove_team)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_lock_roster)
            .service(api_unlock_roster)
            .service(api_draw)
            .service(api_two_round_fixtures)
            .service(api_round_robin_fixtures)
            .service(api_record_result)
            .service(api_clear_result)
            .service(api_standings_csv)
            .service(api_standings)
    })
    .bind(bind)?
    .run()
    .await
}
