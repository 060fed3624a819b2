//! The sample league: hard-coded records standing in for a real data source.
//!
//! Everything time-relative is built against the `now` passed in, so tests
//! and the server get a coherent mix of past, today, and upcoming records no
//! matter when they run.

use crate::models::{
    Game, Goal, LeagueStore, Location, Player, Schedule, TeamSide, Tournament, TournamentContext,
    TournamentTeam,
};
use chrono::{DateTime, Duration, NaiveTime, Utc};
use uuid::Uuid;

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid fixture time")
}

/// Build the full sample league.
pub fn sample_league(now: DateTime<Utc>) -> LeagueStore {
    let joined = now - Duration::days(120);

    let mut john = Player::new("John Smith", "The Wall", "Engineering", 4, joined);
    john.current_streak = 3;
    john.best_win_streak = 3;
    john.total_games = 25;
    john.total_wins = 18;
    john.total_goals = 42;

    let mut emily = Player::new("Emily Johnson", "Quick Hands", "Design", 5, joined);
    emily.current_streak = 5;
    emily.best_win_streak = 5;
    emily.total_games = 30;
    emily.total_wins = 24;
    emily.total_goals = 53;

    let mut michael = Player::new("Michael Lee", "Spin Master", "Marketing", 3, joined);
    michael.current_streak = -2;
    michael.worst_loss_streak = 2;
    michael.total_games = 22;
    michael.total_wins = 10;
    michael.total_goals = 28;

    let mut sarah = Player::new("Sarah Davis", "The Defender", "HR", 4, joined);
    sarah.total_games = 15;
    sarah.total_wins = 8;
    sarah.total_goals = 12;

    let mut david = Player::new("David Wilson", "Speedster", "Sales", 3, joined);
    david.current_streak = 2;
    david.best_win_streak = 2;
    david.total_games = 18;
    david.total_wins = 10;
    david.total_goals = 15;

    let mut jessica = Player::new("Jessica Brown", "The Tactician", "Finance", 4, joined);
    jessica.current_streak = -1;
    jessica.worst_loss_streak = 1;
    jessica.total_games = 12;
    jessica.total_wins = 7;
    jessica.total_goals = 9;

    john.preferred_partner_id = Some(emily.id);

    let main_office = Location::new(
        "Main Office - 3rd Floor",
        Some("Near the kitchen area".to_string()),
    );
    let break_room = Location::new("Break Room", Some("Adjacent to meeting room B".to_string()));
    let game_room = Location::new(
        "Game Room",
        Some("Dedicated space for games and recreation".to_string()),
    );

    let today = now.date_naive();
    let schedules = vec![
        Schedule::new(main_office.id, today + Duration::days(1), hm(12, 0), hm(13, 0)),
        Schedule::new(main_office.id, today + Duration::days(3), hm(16, 0), hm(17, 0)),
        Schedule::new(break_room.id, today + Duration::days(2), hm(15, 0), hm(16, 0)),
    ];

    let summer = Tournament::new(
        "Summer Championship",
        Some("The ultimate summer table football championship!".to_string()),
        now - Duration::days(1),
        now + Duration::days(4),
        8,
        true,
    );
    let department = Tournament::new(
        "Department Challenge",
        Some("Department vs Department - who will win the office crown?".to_string()),
        now + Duration::days(10),
        now + Duration::days(14),
        4,
        false,
    );
    let winter = Tournament::new(
        "Winter Cup",
        Some("Celebrate the holiday season with our winter tournament".to_string()),
        now - Duration::days(10),
        now - Duration::days(5),
        8,
        false,
    );

    let teams = vec![
        TournamentTeam::new(summer.id, "Engineering Pros", Some(john.id), Some(sarah.id)),
        TournamentTeam::new(summer.id, "Design Stars", Some(emily.id), Some(michael.id)),
        TournamentTeam::new(summer.id, "Sales & Marketing", Some(michael.id), None),
        TournamentTeam::new(summer.id, "HR Heroes", Some(sarah.id), Some(john.id)),
    ];

    // A finished friendly earlier today; goals below add up to its score.
    let lunchtime_game = Game {
        id: Uuid::new_v4(),
        location_id: Some(main_office.id),
        team_a_player1_id: john.id,
        team_a_player2_id: Some(emily.id),
        team_b_player1_id: michael.id,
        team_b_player2_id: Some(sarah.id),
        score_team_a: 10,
        score_team_b: 5,
        player_of_match_id: Some(emily.id),
        datetime: now - Duration::hours(2),
        tournament: None,
    };

    // Yesterday's 1v1, no second slots.
    let duel = Game {
        id: Uuid::new_v4(),
        location_id: Some(break_room.id),
        team_a_player1_id: john.id,
        team_a_player2_id: None,
        team_b_player1_id: michael.id,
        team_b_player2_id: None,
        score_team_a: 7,
        score_team_b: 10,
        player_of_match_id: Some(michael.id),
        datetime: now - Duration::days(1),
        tournament: None,
    };

    let summer_round1_a = Game {
        id: Uuid::new_v4(),
        location_id: Some(game_room.id),
        team_a_player1_id: john.id,
        team_a_player2_id: Some(sarah.id),
        team_b_player1_id: michael.id,
        team_b_player2_id: None,
        score_team_a: 10,
        score_team_b: 5,
        player_of_match_id: Some(john.id),
        datetime: now - Duration::hours(12),
        tournament: Some(TournamentContext {
            tournament_id: summer.id,
            tournament_name: summer.name.clone(),
            round: Some(1),
            team_a_name: Some("Engineering Pros".to_string()),
            team_b_name: Some("Sales & Marketing".to_string()),
            winner: Some(TeamSide::A),
            match_order: Some(1),
        }),
    };

    let summer_round1_b = Game {
        id: Uuid::new_v4(),
        location_id: Some(game_room.id),
        team_a_player1_id: emily.id,
        team_a_player2_id: Some(michael.id),
        team_b_player1_id: sarah.id,
        team_b_player2_id: Some(john.id),
        score_team_a: 7,
        score_team_b: 10,
        player_of_match_id: Some(sarah.id),
        datetime: now - Duration::hours(6),
        tournament: Some(TournamentContext {
            tournament_id: summer.id,
            tournament_name: summer.name.clone(),
            round: Some(1),
            team_a_name: Some("Design Stars".to_string()),
            team_b_name: Some("HR Heroes".to_string()),
            winner: Some(TeamSide::B),
            match_order: Some(2),
        }),
    };

    // Tomorrow's semi final, not yet played.
    let summer_semi = Game {
        id: Uuid::new_v4(),
        location_id: None,
        team_a_player1_id: john.id,
        team_a_player2_id: Some(sarah.id),
        team_b_player1_id: sarah.id,
        team_b_player2_id: Some(john.id),
        score_team_a: 0,
        score_team_b: 0,
        player_of_match_id: None,
        datetime: now + Duration::days(1),
        tournament: Some(TournamentContext {
            tournament_id: summer.id,
            tournament_name: summer.name.clone(),
            round: Some(2),
            team_a_name: Some("Engineering Pros".to_string()),
            team_b_name: Some("HR Heroes".to_string()),
            winner: None,
            match_order: Some(1),
        }),
    };

    let goals = goal_minutes(lunchtime_game.id, john.id, emily.id, michael.id);

    LeagueStore::new(
        vec![john, emily, michael, sarah, david, jessica],
        vec![main_office, break_room, game_room],
        schedules,
        vec![
            lunchtime_game,
            duel,
            summer_round1_a,
            summer_round1_b,
            summer_semi,
        ],
        goals,
        vec![summer, department, winter],
        teams,
    )
}

/// Goal-by-goal record of the lunchtime friendly: John 4, Emily 6, Michael 5.
fn goal_minutes(game_id: Uuid, john: Uuid, emily: Uuid, michael: Uuid) -> Vec<Goal> {
    let scorers = [
        (john, 2),
        (john, 8),
        (emily, 12),
        (michael, 15),
        (emily, 18),
        (emily, 21),
        (john, 24),
        (michael, 27),
        (emily, 30),
        (john, 34),
        (emily, 38),
        (michael, 42),
        (emily, 45),
        (michael, 48),
        (michael, 50),
    ];
    scorers
        .into_iter()
        .map(|(scorer, minute)| Goal::new(game_id, scorer, Some(minute)))
        .collect()
}
