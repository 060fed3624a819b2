//! Store lookups and the sample league fixtures.

use chrono::{TimeZone, Utc};
use foosball_league_web::{fixtures, time_bucket, LeagueStore, Player, TimeBucket};

fn player(name: &str) -> Player {
    let joined = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    Player::new(name, "", "Engineering", 3, joined)
}

#[test]
fn lookup_hits_and_misses_are_both_ordinary() {
    let p = player("John Smith");
    let id = p.id;
    let store = LeagueStore::new(vec![p], vec![], vec![], vec![], vec![], vec![], vec![]);
    assert_eq!(store.player(id).unwrap().name, "John Smith");
    assert!(store.player(uuid::Uuid::new_v4()).is_none());
}

#[test]
fn duplicate_ids_resolve_to_the_first_record() {
    let first = player("First");
    let mut second = player("Second");
    second.id = first.id;
    let id = first.id;
    let store = LeagueStore::new(
        vec![first, second],
        vec![],
        vec![],
        vec![],
        vec![],
        vec![],
        vec![],
    );
    assert_eq!(store.player(id).unwrap().name, "First");
}

#[test]
fn sample_league_is_coherent() {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let store = fixtures::sample_league(now);

    assert_eq!(store.players().len(), 6);
    assert_eq!(store.locations().len(), 3);
    assert_eq!(store.games().len(), 5);
    assert_eq!(store.tournaments().len(), 3);
    assert_eq!(store.teams().len(), 4);

    // Every game reference resolves.
    for game in store.games() {
        assert!(store.player(game.team_a_player1_id).is_some());
        assert!(store.player(game.team_b_player1_id).is_some());
        if let Some(id) = game.location_id {
            assert!(store.location(id).is_some());
        }
        if let Some(ctx) = &game.tournament {
            assert!(store.tournament(ctx.tournament_id).is_some());
        }
    }

    // Stored streaks respect the sign/magnitude encoding and win caps.
    for p in store.players() {
        assert!(p.total_wins <= p.total_games);
        if p.current_streak > 0 {
            assert!(p.best_win_streak as i32 >= p.current_streak);
        }
    }
}

#[test]
fn sample_goals_add_up_to_the_game_score() {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let store = fixtures::sample_league(now);
    let game = &store.games()[0];
    let goals = store.goals_for_game(game.id);
    assert_eq!(
        goals.len() as u32,
        game.score_team_a + game.score_team_b
    );
}

#[test]
fn sample_league_spans_all_three_time_buckets() {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let store = fixtures::sample_league(now);
    let buckets: Vec<TimeBucket> = store
        .games()
        .iter()
        .map(|g| time_bucket(g.datetime, now))
        .collect();
    assert!(buckets.contains(&TimeBucket::Today));
    assert!(buckets.contains(&TimeBucket::Past));
    assert!(buckets.contains(&TimeBucket::Upcoming));
}

#[test]
fn per_owner_queries_filter_by_reference() {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let store = fixtures::sample_league(now);

    let summer = store
        .tournaments()
        .iter()
        .find(|t| t.name == "Summer Championship")
        .unwrap();
    assert_eq!(store.teams_for_tournament(summer.id).len(), 4);
    assert_eq!(store.games_for_tournament(summer.id).len(), 3);

    let john = store
        .players()
        .iter()
        .find(|p| p.name == "John Smith")
        .unwrap();
    assert_eq!(store.games_for_player(john.id).len(), 5);

    let main_office = &store.locations()[0];
    assert_eq!(store.schedules_for_location(main_office.id).len(), 2);
}
