//! Integration tests for the standings calculator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use swiss_tournament::{
    compute_standings, GameMatch, InvalidInput, Player, StandingRow, TieBreak, TournamentError,
};

fn players(n: u32) -> Vec<Player> {
    (1..=n)
        .map(|i| Player::new(i, ((b'A' + (i - 1) as u8) as char).to_string()))
        .collect()
}

fn row(id: u32, name: &str, wins: u32, matches: u32) -> (u32, String, u32, u32) {
    (id, name.to_string(), wins, matches)
}

fn summary(rows: &[StandingRow]) -> Vec<(u32, String, u32, u32)> {
    rows.iter()
        .map(|r| (r.id, r.name.clone(), r.wins, r.matches))
        .collect()
}

/// Random decided matches between distinct players, plus a few byes.
fn random_log(rng: &mut StdRng, n: u32, count: usize) -> Vec<GameMatch> {
    (0..count)
        .map(|_| {
            let winner = rng.gen_range(1..=n);
            if rng.gen_bool(0.1) {
                return GameMatch::bye(winner);
            }
            let mut loser = rng.gen_range(1..=n);
            while loser == winner {
                loser = rng.gen_range(1..=n);
            }
            GameMatch::new(winner, loser)
        })
        .collect()
}

#[test]
fn empty_player_set_yields_empty_standings() {
    let rows = compute_standings(&[], &[], TieBreak::Solkoff).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn fresh_players_rank_by_id() {
    let rows = compute_standings(&players(4), &[], TieBreak::Solkoff).unwrap();
    assert_eq!(
        summary(&rows),
        vec![
            row(1, "A", 0, 0),
            row(2, "B", 0, 0),
            row(3, "C", 0, 0),
            row(4, "D", 0, 0)
        ]
    );
}

#[test]
fn winners_rank_above_losers() {
    let matches = vec![GameMatch::new(1, 2), GameMatch::new(3, 4)];
    let rows = compute_standings(&players(4), &matches, TieBreak::Solkoff).unwrap();
    assert_eq!(
        summary(&rows),
        vec![
            row(1, "A", 1, 1),
            row(3, "C", 1, 1),
            row(2, "B", 0, 1),
            row(4, "D", 0, 1)
        ]
    );
}

#[test]
fn input_order_does_not_matter() {
    let mut ps = players(4);
    ps.reverse();
    let matches = vec![GameMatch::new(3, 4), GameMatch::new(1, 2)];
    let rows = compute_standings(&ps, &matches, TieBreak::PlayerId).unwrap();
    let ids: Vec<u32> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3, 2, 4]);
}

#[test]
fn solkoff_breaks_ties_on_opponent_strength() {
    // Round 1: 1>2, 3>4, 5>6. Round 2: 2>4 so player 1's opponent now has a win.
    let matches = vec![
        GameMatch::new(1, 2),
        GameMatch::new(3, 4),
        GameMatch::new(5, 6),
        GameMatch::new(2, 4),
    ];
    let ps = players(6);

    let rows = compute_standings(&ps, &matches, TieBreak::Solkoff).unwrap();
    let ids: Vec<u32> = rows.iter().map(|r| r.id).collect();
    // 1, 2, 3 and 5 all have one win; 2 faced 1 (1 win) and 4 (0 wins), 1 faced 2 (1 win).
    assert_eq!(&ids[..4], &[1, 2, 3, 5]);
    assert_eq!(rows[0].opponent_wins, 1);
    assert_eq!(rows[2].opponent_wins, 0);

    let rows = compute_standings(&ps, &matches, TieBreak::PlayerId).unwrap();
    let ids: Vec<u32> = rows.iter().map(|r| r.id).collect();
    assert_eq!(&ids[..4], &[1, 2, 3, 5]);
    assert_eq!(&ids[4..], &[4, 6]);
}

#[test]
fn solkoff_reorders_against_player_id() {
    // 4 beat 3, 3 then beat 2; 1 beat 5. Both 1 and 4 have one win but 4's opponent has one too.
    let matches = vec![
        GameMatch::new(4, 3),
        GameMatch::new(3, 2),
        GameMatch::new(1, 5),
    ];
    let ps = players(6);
    let solkoff: Vec<u32> = compute_standings(&ps, &matches, TieBreak::Solkoff)
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    let by_id: Vec<u32> = compute_standings(&ps, &matches, TieBreak::PlayerId)
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(solkoff, vec![3, 4, 1, 2, 5, 6]);
    assert_eq!(by_id, vec![1, 3, 4, 2, 5, 6]);
}

#[test]
fn bye_counts_as_a_win_without_an_opponent() {
    let matches = vec![GameMatch::new(1, 2), GameMatch::bye(3)];
    let rows = compute_standings(&players(3), &matches, TieBreak::Solkoff).unwrap();
    let three = rows.iter().find(|r| r.id == 3).unwrap();
    assert_eq!((three.wins, three.matches, three.opponent_wins), (1, 1, 0));
    let one = rows.iter().find(|r| r.id == 1).unwrap();
    assert_eq!(one.opponent_wins, 0);
}

#[test]
fn unknown_player_in_match_is_invalid_input() {
    let m = GameMatch::new(1, 9);
    let err = compute_standings(&players(4), &[m.clone()], TieBreak::Solkoff).unwrap_err();
    assert_eq!(
        err,
        TournamentError::InvalidInput(InvalidInput::UnknownPlayer {
            match_id: m.id,
            player_id: 9
        })
    );
}

#[test]
fn duplicate_player_is_invalid_input() {
    let mut ps = players(2);
    ps.push(Player::new(2, "B again"));
    let err = compute_standings(&ps, &[], TieBreak::Solkoff).unwrap_err();
    assert_eq!(
        err,
        TournamentError::InvalidInput(InvalidInput::DuplicatePlayer(2))
    );
}

#[test]
fn random_logs_match_naive_recount_and_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..50 {
        let n = rng.gen_range(1..=12);
        let ps = players(n);
        let count = rng.gen_range(0..40);
        let log = if n > 1 { random_log(&mut rng, n, count) } else { Vec::new() };

        let rows = compute_standings(&ps, &log, TieBreak::Solkoff).unwrap();
        assert_eq!(rows.len(), ps.len());

        let mut naive: HashMap<u32, (u32, u32)> = ps.iter().map(|p| (p.id, (0, 0))).collect();
        for m in &log {
            let w = naive.get_mut(&m.winner).unwrap();
            w.0 += 1;
            w.1 += 1;
            if let Some(l) = m.loser {
                naive.get_mut(&l).unwrap().1 += 1;
            }
        }
        for r in &rows {
            assert_eq!(naive[&r.id], (r.wins, r.matches), "player {}", r.id);
        }
        assert!(rows.windows(2).all(|w| w[0].wins >= w[1].wins));

        let again = compute_standings(&ps, &log, TieBreak::Solkoff).unwrap();
        assert_eq!(rows, again);
    }
}

#[test]
fn self_match_is_invalid_input() {
    let err = compute_standings(&players(2), &[GameMatch::new(1, 1)], TieBreak::Solkoff).unwrap_err();
    assert_eq!(err, TournamentError::InvalidInput(InvalidInput::SelfMatch(1)));
}
