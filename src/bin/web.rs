//! Read-only JSON API over the sample league: the dashboard's data source.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.

use actix_web::{
    get,
    web::{Data, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::Utc;
use foosball_league_web::{
    bracket_rounds, filter_games, filter_tournaments, fixtures, goal_tallies, goal_timeline,
    next_tournament, outcome_for_player, player_of_the_week, player_profile_stats, rosters,
    search_games, search_locations, search_players, search_tournaments, sort_players,
    BracketRound, Game, GameFilter, GameOutcome, Goal, GoalTally, LeagueStore, Location, Player,
    PlayerOutcome, PlayerProfileStats, PlayerSortKey, Schedule, Tournament, TournamentStatus,
    TournamentTab, TournamentTeam,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Query string for the players list: ?q=wall&sort=streak
#[derive(Deserialize)]
struct PlayersQuery {
    #[serde(default)]
    q: String,
    #[serde(default)]
    sort: PlayerSortKey,
}

/// Query string for the games list: ?q=emily&filter=past
#[derive(Deserialize)]
struct GamesQuery {
    #[serde(default)]
    q: String,
    #[serde(default)]
    filter: GameFilter,
}

/// Query string for the tournaments list: ?q=summer&tab=active
#[derive(Deserialize)]
struct TournamentsQuery {
    #[serde(default)]
    q: String,
    #[serde(default)]
    tab: TournamentTab,
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

/// Path segment: entity id (e.g. /api/players/{id})
#[derive(Deserialize)]
struct IdPath {
    id: Uuid,
}

#[derive(Serialize)]
struct PlayerCard<'a> {
    #[serde(flatten)]
    player: &'a Player,
    win_rate: u32,
}

#[derive(Serialize)]
struct GameView<'a> {
    game: &'a Game,
    team_a: Vec<&'a Player>,
    team_b: Vec<&'a Player>,
    player_of_match: Option<&'a Player>,
    outcome: GameOutcome,
}

#[derive(Serialize)]
struct PlayerGameView<'a> {
    #[serde(flatten)]
    view: GameView<'a>,
    player_outcome: Option<PlayerOutcome>,
}

#[derive(Serialize)]
struct PlayerProfileView<'a> {
    player: &'a Player,
    preferred_partner: Option<&'a Player>,
    stats: PlayerProfileStats,
    recent_games: Vec<PlayerGameView<'a>>,
}

#[derive(Serialize)]
struct TallyView<'a> {
    scorer: &'a Player,
    count: u32,
}

#[derive(Serialize)]
struct TimelineEntry<'a> {
    goal: &'a Goal,
    scorer: Option<&'a Player>,
}

#[derive(Serialize)]
struct GameDetailView<'a> {
    #[serde(flatten)]
    view: GameView<'a>,
    location: Option<&'a Location>,
    team_a_goals: Vec<TallyView<'a>>,
    team_b_goals: Vec<TallyView<'a>>,
    timeline: Vec<TimelineEntry<'a>>,
}

#[derive(Serialize)]
struct LocationView<'a> {
    #[serde(flatten)]
    location: &'a Location,
    schedules: Vec<&'a Schedule>,
}

#[derive(Serialize)]
struct TournamentView<'a> {
    #[serde(flatten)]
    tournament: &'a Tournament,
    status: TournamentStatus,
}

#[derive(Serialize)]
struct TeamView<'a> {
    #[serde(flatten)]
    team: &'a TournamentTeam,
    player1: Option<&'a Player>,
    player2: Option<&'a Player>,
}

#[derive(Serialize)]
struct TournamentDetailView<'a> {
    #[serde(flatten)]
    tournament: &'a Tournament,
    status: TournamentStatus,
    teams: Vec<TeamView<'a>>,
    rounds: Vec<BracketRound<'a>>,
}

#[derive(Serialize)]
struct DashboardView<'a> {
    todays_games: Vec<GameView<'a>>,
    player_of_the_week: Option<PlayerCard<'a>>,
    tournament_banner: Option<TournamentView<'a>>,
}

fn game_view<'a>(store: &'a LeagueStore, game: &'a Game) -> GameView<'a> {
    let rosters = rosters(store, game);
    GameView {
        game,
        team_a: rosters.team_a,
        team_b: rosters.team_b,
        player_of_match: rosters.player_of_match,
        outcome: game.outcome(),
    }
}

fn tally_views(tallies: Vec<GoalTally>) -> Vec<TallyView> {
    tallies
        .into_iter()
        .map(|t| TallyView {
            scorer: t.scorer,
            count: t.count,
        })
        .collect()
}

fn not_found(what: &str) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": format!("No {what}") }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "foosball-league-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Landing view: today's games, player of the week, tournament banner.
#[get("/api/dashboard")]
async fn api_dashboard(store: Data<LeagueStore>) -> HttpResponse {
    let now = Utc::now();
    let todays_games = filter_games(store.games().iter().collect(), GameFilter::Today, now)
        .into_iter()
        .map(|g| game_view(&store, g))
        .collect();
    let player_of_the_week = player_of_the_week(store.players()).map(|p| PlayerCard {
        player: p,
        win_rate: p.win_rate(),
    });
    let tournament_banner = next_tournament(store.tournaments(), now).map(|t| TournamentView {
        tournament: t,
        status: t.status(now),
    });
    HttpResponse::Ok().json(DashboardView {
        todays_games,
        player_of_the_week,
        tournament_banner,
    })
}

/// Players list: searched, then stably sorted by the requested key.
#[get("/api/players")]
async fn api_players(store: Data<LeagueStore>, query: Query<PlayersQuery>) -> HttpResponse {
    let mut players = search_players(store.players(), &query.q);
    sort_players(&mut players, query.sort);
    let cards: Vec<PlayerCard> = players
        .into_iter()
        .map(|p| PlayerCard {
            player: p,
            win_rate: p.win_rate(),
        })
        .collect();
    HttpResponse::Ok().json(cards)
}

/// Player profile: partner, derived stats, recent games newest first with the
/// player's own win/loss per game.
#[get("/api/players/{id}")]
async fn api_player(store: Data<LeagueStore>, path: Path<IdPath>) -> HttpResponse {
    let now = Utc::now();
    let player = match store.player(path.id) {
        Some(p) => p,
        None => return not_found("player"),
    };
    let preferred_partner = player.preferred_partner_id.and_then(|id| store.player(id));
    let games = store.games_for_player(player.id);
    let stats = player_profile_stats(player, &games);
    let recent_games = filter_games(games, GameFilter::Past, now)
        .into_iter()
        .map(|g| PlayerGameView {
            view: game_view(&store, g),
            player_outcome: outcome_for_player(g, player.id),
        })
        .collect();
    HttpResponse::Ok().json(PlayerProfileView {
        player,
        preferred_partner,
        stats,
        recent_games,
    })
}

/// Games list: searched, bucket-filtered, date-ordered.
#[get("/api/games")]
async fn api_games(store: Data<LeagueStore>, query: Query<GamesQuery>) -> HttpResponse {
    let now = Utc::now();
    let games = search_games(&store, &query.q);
    let views: Vec<GameView> = filter_games(games, query.filter, now)
        .into_iter()
        .map(|g| game_view(&store, g))
        .collect();
    HttpResponse::Ok().json(views)
}

/// Game details: rosters, location, per-team goal tallies, goal timeline.
#[get("/api/games/{id}")]
async fn api_game(store: Data<LeagueStore>, path: Path<IdPath>) -> HttpResponse {
    let game = match store.game(path.id) {
        Some(g) => g,
        None => return not_found("game"),
    };
    let (team_a_goals, team_b_goals) = goal_tallies(&store, game);
    let timeline = goal_timeline(&store, game)
        .into_iter()
        .map(|goal| TimelineEntry {
            goal,
            scorer: store.player(goal.scorer_id),
        })
        .collect();
    HttpResponse::Ok().json(GameDetailView {
        view: game_view(&store, game),
        location: game.location_id.and_then(|id| store.location(id)),
        team_a_goals: tally_views(team_a_goals),
        team_b_goals: tally_views(team_b_goals),
        timeline,
    })
}

/// Locations list with their bookings.
#[get("/api/locations")]
async fn api_locations(store: Data<LeagueStore>, query: Query<SearchQuery>) -> HttpResponse {
    let views: Vec<LocationView> = search_locations(store.locations(), &query.q)
        .into_iter()
        .map(|l| LocationView {
            location: l,
            schedules: store.schedules_for_location(l.id),
        })
        .collect();
    HttpResponse::Ok().json(views)
}

/// Tournaments list: searched, tab-filtered, with derived status.
#[get("/api/tournaments")]
async fn api_tournaments(
    store: Data<LeagueStore>,
    query: Query<TournamentsQuery>,
) -> HttpResponse {
    let now = Utc::now();
    let tournaments = search_tournaments(store.tournaments(), &query.q);
    let views: Vec<TournamentView> = filter_tournaments(tournaments, query.tab, now)
        .into_iter()
        .map(|t| TournamentView {
            tournament: t,
            status: t.status(now),
        })
        .collect();
    HttpResponse::Ok().json(views)
}

/// Tournament details: status, teams with resolved players, bracket rounds.
#[get("/api/tournaments/{id}")]
async fn api_tournament(store: Data<LeagueStore>, path: Path<IdPath>) -> HttpResponse {
    let now = Utc::now();
    let tournament = match store.tournament(path.id) {
        Some(t) => t,
        None => return not_found("tournament"),
    };
    let teams = store
        .teams_for_tournament(tournament.id)
        .into_iter()
        .map(|team| TeamView {
            team,
            player1: team.player1_id.and_then(|id| store.player(id)),
            player2: team.player2_id.and_then(|id| store.player(id)),
        })
        .collect();
    let games = store.games_for_tournament(tournament.id);
    HttpResponse::Ok().json(TournamentDetailView {
        tournament,
        status: tournament.status(now),
        teams,
        rounds: bracket_rounds(&games),
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

    let store = Data::new(fixtures::sample_league(Utc::now()));
    log::info!(
        "Loaded league fixtures: {} players, {} games, {} tournaments",
        store.players().len(),
        store.games().len(),
        store.tournaments().len()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .service(api_health)
            .service(favicon)
            .service(api_dashboard)
            .service(api_players)
            .service(api_player)
            .service(api_games)
            .service(api_game)
            .service(api_locations)
            .service(api_tournaments)
            .service(api_tournament)
    })
    .bind(bind)?
    .run()
    .await
}
