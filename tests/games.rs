//! Game time buckets, ordering, outcomes, goal tallies, and game search.

use chrono::{DateTime, TimeZone, Utc};
use foosball_league_web::{
    filter_games, goal_tallies, goal_timeline, outcome_for_player, search_games, time_bucket,
    Game, GameFilter, GameOutcome, Goal, LeagueStore, Player, PlayerId, PlayerOutcome, TeamSide,
    TimeBucket, TournamentContext,
};
use uuid::Uuid;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

fn player(name: &str) -> Player {
    Player::new(name, "", "Engineering", 3, at(2024, 1, 1, 9, 0))
}

fn game(
    team_a: (PlayerId, Option<PlayerId>),
    team_b: (PlayerId, Option<PlayerId>),
    score_a: u32,
    score_b: u32,
    datetime: DateTime<Utc>,
) -> Game {
    Game {
        id: Uuid::new_v4(),
        location_id: None,
        team_a_player1_id: team_a.0,
        team_a_player2_id: team_a.1,
        team_b_player1_id: team_b.0,
        team_b_player2_id: team_b.1,
        score_team_a: score_a,
        score_team_b: score_b,
        player_of_match_id: None,
        datetime,
        tournament: None,
    }
}

fn store(players: Vec<Player>, games: Vec<Game>, goals: Vec<Goal>) -> LeagueStore {
    LeagueStore::new(players, vec![], vec![], games, goals, vec![], vec![])
}

#[test]
fn time_buckets_are_exclusive_and_today_wins() {
    let now = at(2024, 6, 15, 12, 0);
    assert_eq!(time_bucket(at(2024, 6, 15, 8, 0), now), TimeBucket::Today);
    assert_eq!(time_bucket(at(2024, 6, 14, 23, 59), now), TimeBucket::Past);
    assert_eq!(time_bucket(at(2024, 6, 16, 0, 1), now), TimeBucket::Upcoming);
    // Later today is still "today", never "upcoming".
    assert_eq!(time_bucket(at(2024, 6, 15, 23, 0), now), TimeBucket::Today);
}

#[test]
fn past_view_is_most_recent_first_others_soonest_first() {
    let now = at(2024, 6, 15, 12, 0);
    let p1 = player("John Smith");
    let p2 = player("Michael Lee");
    let early = game((p1.id, None), (p2.id, None), 10, 5, at(2024, 6, 10, 12, 0));
    let late = game((p1.id, None), (p2.id, None), 5, 10, at(2024, 6, 13, 12, 0));
    let future = game((p1.id, None), (p2.id, None), 0, 0, at(2024, 6, 20, 12, 0));
    let games = [early.clone(), late.clone(), future.clone()];
    let refs: Vec<&Game> = games.iter().collect();

    let past = filter_games(refs.clone(), GameFilter::Past, now);
    assert_eq!(
        past.iter().map(|g| g.id).collect::<Vec<_>>(),
        [late.id, early.id]
    );

    let all = filter_games(refs.clone(), GameFilter::All, now);
    assert_eq!(
        all.iter().map(|g| g.id).collect::<Vec<_>>(),
        [early.id, late.id, future.id]
    );

    let upcoming = filter_games(refs, GameFilter::Upcoming, now);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].id, future.id);
}

#[test]
fn exactly_one_of_win_lose_draw_holds() {
    let p1 = player("A");
    let p2 = player("B");
    let when = at(2024, 6, 1, 12, 0);
    let a_wins = game((p1.id, None), (p2.id, None), 10, 5, when);
    let b_wins = game((p1.id, None), (p2.id, None), 3, 8, when);
    let tie = game((p1.id, None), (p2.id, None), 6, 6, when);
    assert_eq!(a_wins.outcome(), GameOutcome::TeamA);
    assert_eq!(b_wins.outcome(), GameOutcome::TeamB);
    assert_eq!(tie.outcome(), GameOutcome::Draw);
}

#[test]
fn outcome_for_player_follows_their_side() {
    let p1 = player("A");
    let p2 = player("B");
    let stranger = player("C");
    let g = game((p1.id, None), (p2.id, None), 10, 5, at(2024, 6, 1, 12, 0));
    assert_eq!(outcome_for_player(&g, p1.id), Some(PlayerOutcome::Won));
    assert_eq!(outcome_for_player(&g, p2.id), Some(PlayerOutcome::Lost));
    assert_eq!(outcome_for_player(&g, stranger.id), None);

    let tie = game((p1.id, None), (p2.id, None), 4, 4, at(2024, 6, 1, 12, 0));
    assert_eq!(outcome_for_player(&tie, p1.id), Some(PlayerOutcome::Drew));
}

#[test]
fn goal_tallies_count_per_scorer_in_first_seen_order() {
    let p1 = player("P1");
    let p2 = player("P2");
    let p3 = player("P3");
    let g = game(
        (p1.id, Some(p2.id)),
        (p3.id, None),
        3,
        0,
        at(2024, 6, 1, 12, 0),
    );
    let goals = vec![
        Goal::new(g.id, p1.id, Some(2)),
        Goal::new(g.id, p1.id, Some(5)),
        Goal::new(g.id, p2.id, Some(9)),
    ];
    let store = store(vec![p1.clone(), p2.clone(), p3], vec![g.clone()], goals);
    let (team_a, team_b) = goal_tallies(&store, store.game(g.id).unwrap());
    assert_eq!(team_a.len(), 2);
    assert_eq!((team_a[0].scorer.id, team_a[0].count), (p1.id, 2));
    assert_eq!((team_a[1].scorer.id, team_a[1].count), (p2.id, 1));
    assert!(team_b.is_empty());
}

#[test]
fn goals_from_non_roster_scorers_are_dropped() {
    let p1 = player("P1");
    let p2 = player("P2");
    let outsider = player("Outsider");
    let g = game((p1.id, None), (p2.id, None), 1, 0, at(2024, 6, 1, 12, 0));
    let goals = vec![
        Goal::new(g.id, p1.id, Some(3)),
        Goal::new(g.id, outsider.id, Some(7)),
    ];
    let store = store(vec![p1.clone(), p2, outsider], vec![g.clone()], goals);
    let (team_a, team_b) = goal_tallies(&store, store.game(g.id).unwrap());
    assert_eq!(team_a.len(), 1);
    assert_eq!(team_a[0].scorer.id, p1.id);
    assert!(team_b.is_empty());
}

#[test]
fn goal_timeline_sorts_by_minute_with_missing_as_zero() {
    let p1 = player("P1");
    let p2 = player("P2");
    let g = game((p1.id, None), (p2.id, None), 2, 1, at(2024, 6, 1, 12, 0));
    let goals = vec![
        Goal::new(g.id, p1.id, Some(40)),
        Goal::new(g.id, p2.id, None),
        Goal::new(g.id, p1.id, Some(12)),
    ];
    let store = store(vec![p1, p2], vec![g.clone()], goals);
    let timeline = goal_timeline(&store, store.game(g.id).unwrap());
    let minutes: Vec<Option<u32>> = timeline.iter().map(|g| g.minute).collect();
    assert_eq!(minutes, [None, Some(12), Some(40)]);
}

#[test]
fn game_search_matches_resolved_player_and_tournament_names() {
    let john = player("John Smith");
    let emily = player("Emily Johnson");
    let michael = player("Michael Lee");
    let sarah = player("Sarah Davis");
    let friendly = game(
        (john.id, None),
        (michael.id, None),
        7,
        10,
        at(2024, 6, 1, 12, 0),
    );
    let mut bracket_game = game(
        (emily.id, None),
        (sarah.id, None),
        0,
        0,
        at(2024, 6, 2, 12, 0),
    );
    bracket_game.tournament = Some(TournamentContext {
        tournament_id: Uuid::new_v4(),
        tournament_name: "Summer Championship".to_string(),
        round: Some(1),
        team_a_name: None,
        team_b_name: None,
        winner: None,
        match_order: None,
    });
    let store = store(
        vec![john, emily, michael, sarah],
        vec![friendly.clone(), bracket_game.clone()],
        vec![],
    );

    let by_player = search_games(&store, "smith");
    assert_eq!(by_player.len(), 1);
    assert_eq!(by_player[0].id, friendly.id);

    let by_tournament = search_games(&store, "summer");
    assert_eq!(by_tournament.len(), 1);
    assert_eq!(by_tournament[0].id, bracket_game.id);

    assert_eq!(search_games(&store, "").len(), 2);
    assert!(search_games(&store, "nobody").is_empty());
}

#[test]
fn side_of_checks_all_four_slots() {
    let a1 = player("A1");
    let a2 = player("A2");
    let b1 = player("B1");
    let b2 = player("B2");
    let g = game(
        (a1.id, Some(a2.id)),
        (b1.id, Some(b2.id)),
        0,
        0,
        at(2024, 6, 1, 12, 0),
    );
    assert_eq!(g.side_of(a2.id), Some(TeamSide::A));
    assert_eq!(g.side_of(b2.id), Some(TeamSide::B));
    assert_eq!(g.side_of(Uuid::new_v4()), None);
}
