//! Player strategy and table tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use roulette_sim::{
    Bankroll, Bet, Outcome, Passenger57, Player, Player1326, Player1326State, PlayerFibonacci,
    PlayerMartingale, PlayerRandom, Table, TableError, Wheel,
};

fn black_bet(amount: u64) -> Bet {
    Bet::new(amount, Outcome::new("Black", 1))
}

fn ready<P: Player>(mut player: P, stake: u64, rounds: u32) -> P {
    player.set_stake(stake);
    player.set_rounds(rounds);
    player
}

#[test]
fn outcome_and_bet_amounts() {
    let split = Outcome::new("1-2", 17);
    assert_eq!(split.win_amount(10), 170);
    assert_eq!(split.to_string(), "1-2 (17:1)");
    assert_eq!(split, Outcome::new("1-2", 17));
    assert_ne!(split, Outcome::new("1-2", 16));

    let bet = Bet::new(10, split);
    assert_eq!(bet.win_amount(), 180);
    assert_eq!(bet.lose_amount(), 10);
    assert_eq!(bet.to_string(), "10 on 1-2 (17:1)");
}

#[test]
fn table_rejects_invalid_bets() {
    let mut table = Table::new(20, 5);

    assert_eq!(table.place_bet(black_bet(0)), Err(TableError::ZeroBet));
    assert_eq!(
        table.place_bet(black_bet(4)),
        Err(TableError::BelowMinimum {
            amount: 4,
            minimum: 5
        })
    );

    table.place_bet(black_bet(15)).unwrap();
    assert_eq!(
        table.place_bet(black_bet(6)),
        Err(TableError::OverLimit {
            total: 21,
            limit: 20
        })
    );
    table.place_bet(black_bet(5)).unwrap();

    assert_eq!(table.total(), 20);
    assert_eq!(table.bets().len(), 2);

    let cleared = table.clear();
    assert_eq!(cleared.len(), 2);
    assert!(table.is_empty());
}

#[test]
fn bankroll_stops_without_money_or_rounds() {
    assert!(Bankroll::new(10, 1).playing());
    assert!(!Bankroll::new(0, 1).playing());
    assert!(!Bankroll::new(10, 0).playing());

    let mut bankroll = Bankroll::new(10, 2);
    let mut table = Table::new(100, 1);
    bankroll.wager(&mut table, black_bet(4)).unwrap();
    bankroll.end_round();
    assert_eq!(bankroll, Bankroll::new(6, 1));

    assert!(bankroll.wager(&mut table, black_bet(200)).is_err());
    assert_eq!(bankroll.stake, 6);
}

#[test]
fn passenger57_bets_minimum_on_black() {
    let mut table = Table::new(100, 2);
    let mut player = ready(Passenger57::new(&table), 10, 3);

    player.place_bets(&mut table).unwrap();
    assert_eq!(table.bets(), &[black_bet(2)]);
    assert_eq!(player.stake(), 8);

    player.win(&black_bet(2));
    assert_eq!(player.stake(), 12);
}

#[test]
fn martingale_doubles_after_losses() {
    let mut table = Table::new(100, 1);
    let mut player = ready(PlayerMartingale::new(&table), 100, 10);

    for expected in [1, 2, 4, 8] {
        assert_eq!(player.next_bet(), expected);
        player.place_bets(&mut table).unwrap();
        for bet in table.clear() {
            player.lose(&bet);
        }
    }
    assert_eq!(player.loss_count(), 4);
    assert_eq!(player.stake(), 85);

    player.place_bets(&mut table).unwrap();
    for bet in table.clear() {
        player.win(&bet);
    }
    assert_eq!(player.loss_count(), 0);
    assert_eq!(player.next_bet(), 1);
    assert_eq!(player.stake(), 85 - 16 + 32);
}

#[test]
fn martingale_stops_when_bet_exceeds_limit_or_stake() {
    let table = Table::new(4, 1);
    let mut player = ready(PlayerMartingale::new(&table), 100, 10);

    for _ in 0..3 {
        player.lose(&black_bet(1));
    }
    assert_eq!(player.next_bet(), 8);
    assert!(!player.playing());

    let table = Table::new(100, 1);
    let mut player = ready(PlayerMartingale::new(&table), 7, 10);
    for _ in 0..3 {
        player.lose(&black_bet(1));
    }
    assert!(!player.playing());
}

#[test]
fn fibonacci_stops_when_bet_exceeds_limit() {
    let table = Table::new(10, 1);
    let mut player = ready(PlayerFibonacci::new(&table), 1_000, 100);

    for _ in 0..5 {
        player.lose(&black_bet(1));
    }
    assert_eq!(player.next_bet(), 8);
    assert!(player.playing());

    player.lose(&black_bet(8));
    assert_eq!(player.next_bet(), 13);
    assert!(player.bankroll().can_cover(13));
    assert!(!player.playing());
}

#[test]
fn player1326_stops_when_bet_exceeds_limit() {
    let table = Table::new(10, 2);
    let mut player = ready(Player1326::new(&table), 1_000, 100);

    for _ in 0..2 {
        player.win(&black_bet(2));
        assert!(player.playing());
    }
    player.win(&black_bet(2));
    assert_eq!(player.state(), Player1326State::ThreeWins);
    assert_eq!(player.next_bet(), 12);
    assert!(!player.playing());

    player.lose(&black_bet(12));
    assert!(player.playing());
}

#[test]
fn fibonacci_sequence_advances_on_loss_and_resets_on_win() {
    let table = Table::new(100, 1);
    let mut player = ready(PlayerFibonacci::new(&table), 100, 10);

    let mut bets = Vec::new();
    for _ in 0..5 {
        bets.push(player.next_bet());
        player.lose(&black_bet(1));
    }
    assert_eq!(bets, vec![1, 1, 2, 3, 5]);
    assert_eq!(player.sequence(), (8, 5));

    player.win(&black_bet(8));
    assert_eq!(player.sequence(), (1, 0));
    assert_eq!(player.next_bet(), 1);
}

#[test]
fn fibonacci_plays_only_when_stake_covers_bet() {
    let table = Table::new(100, 1);
    let mut player = ready(PlayerFibonacci::new(&table), 10, 5);
    // Move the sequence to a bet of 5.
    for _ in 0..4 {
        player.lose(&black_bet(1));
    }
    assert_eq!(player.next_bet(), 5);
    assert!(player.playing());

    player.bankroll_mut().stake = 4;
    assert!(!player.playing());

    player.set_stake(4);
    assert_eq!(player.next_bet(), 1);
    assert!(player.playing());

    player.set_rounds(0);
    assert!(!player.playing());
}

#[test]
fn player1326_state_transitions() {
    use Player1326State::{NoWin, OneWin, ThreeWins, TwoWins};

    assert_eq!(NoWin.next_won(), OneWin);
    assert_eq!(OneWin.next_won(), TwoWins);
    assert_eq!(TwoWins.next_won(), ThreeWins);
    assert_eq!(ThreeWins.next_won(), NoWin);
    for state in [NoWin, OneWin, TwoWins, ThreeWins] {
        assert_eq!(state.next_lost(), NoWin);
    }

    let multiples: Vec<u64> = [NoWin, OneWin, TwoWins, ThreeWins]
        .iter()
        .map(|state| state.bet_multiple())
        .collect();
    assert_eq!(multiples, vec![1, 3, 2, 6]);
}

#[test]
fn player1326_bets_follow_state() {
    let mut table = Table::new(100, 5);
    let mut player = ready(Player1326::new(&table), 100, 10);

    let mut amounts = Vec::new();
    for _ in 0..4 {
        player.place_bets(&mut table).unwrap();
        for bet in table.clear() {
            amounts.push(bet.amount);
            player.win(&bet);
        }
    }
    assert_eq!(amounts, vec![5, 15, 10, 30]);
    assert_eq!(player.state(), Player1326State::NoWin);

    player.win(&black_bet(5));
    assert_eq!(player.state(), Player1326State::OneWin);
    player.lose(&black_bet(15));
    assert_eq!(player.state(), Player1326State::NoWin);
}

#[test]
fn player1326_instances_do_not_share_state() {
    let table = Table::new(100, 1);
    let mut first = ready(Player1326::new(&table), 100, 10);
    let second = ready(Player1326::new(&table), 100, 10);

    first.win(&black_bet(1));
    assert_eq!(first.state(), Player1326State::OneWin);
    assert_eq!(second.state(), Player1326State::NoWin);
}

#[test]
fn random_player_is_reproducible_with_a_seed() {
    let wheel = Wheel::populated(1);
    let table = Table::new(100, 1);

    let bets_for = |seed: u64| {
        let mut table = Table::new(100, 1);
        let mut player = ready(
            PlayerRandom::new(&table, &wheel, ChaCha8Rng::seed_from_u64(seed)),
            50,
            20,
        );
        let mut names = Vec::new();
        while player.playing() {
            player.place_bets(&mut table).unwrap();
            names.extend(table.clear().into_iter().map(|bet| bet.outcome));
        }
        names
    };

    let first = bets_for(11);
    assert_eq!(first.len(), 20);
    assert_eq!(first, bets_for(11));
    assert!(first.iter().all(|o| wheel.outcome(o.name()) == Some(o)));

    let player = PlayerRandom::new(&table, &wheel, ChaCha8Rng::seed_from_u64(0));
    assert_eq!(player.outcomes().len(), 153);
}

#[test]
fn random_player_on_empty_wheel_places_nothing() {
    let wheel = Wheel::new(1);
    let mut table = Table::new(100, 1);
    let mut player = ready(
        PlayerRandom::new(&table, &wheel, ChaCha8Rng::seed_from_u64(3)),
        10,
        1,
    );

    player.place_bets(&mut table).unwrap();
    assert!(table.is_empty());
    assert_eq!(player.stake(), 10);
    assert!(!player.playing());
}
