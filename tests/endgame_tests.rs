//! Elimination once the deck is exhausted, and the end of the game.

mod common;

use common::*;
use durak_engine::core::GameConfig;
use durak_engine::decision::{AttackDecision, DefenseDecision};
use durak_engine::game::{Action, Outcome, Phase};
use durak_engine::players::Status;

fn one_card_game() -> (durak_engine::game::Game, std::sync::mpsc::Receiver<String>) {
    let mut config = GameConfig::all_computer(2);
    config.hand_size = 1;
    dealt_game(config, stacked_deck(&[&["6D"], &["7C"]], &["AD"]))
}

#[test]
fn test_last_card_ends_the_game() {
    let (mut game, rx) = one_card_game();
    let mut script = Scripted::new(
        vec![play(&["6D"]), play(&["AD"])],
        vec![DefenseDecision::Surrender],
    );

    step_until(&mut game, &mut script, 40, |g| g.is_over());
    assert!(script.is_exhausted());

    assert_eq!(game.phase(), Phase::GameOver { durak: Some(seat(1)) });
    assert_eq!(game.durak(), Some(seat(1)));
    assert_eq!(game.players_remaining(), 1);
    assert!(!game.player(seat(0)).is_active());
    assert_eq!(game.player(seat(0)).status(), Some(Status::Out));
    assert_eq!(game.status_text(), "This game is over! Computer 2 is the durak!");
    assert_eq!(total_cards(&game), 3);

    let messages: Vec<String> = rx.try_iter().collect();
    assert!(messages.contains(&"Computer 1 is out of cards.".to_string()));
}

#[test]
fn test_no_input_after_game_over() {
    let (mut game, _rx) = one_card_game();
    let mut script = Scripted::new(
        vec![play(&["6D"]), play(&["AD"])],
        vec![DefenseDecision::Surrender],
    );
    step_until(&mut game, &mut script, 40, |g| g.is_over());

    assert_eq!(game.advance(), Outcome::Ignored);
    assert!(game.pending_request().is_none());
    assert_eq!(game.apply(Action::Surrender).unwrap(), Outcome::Ignored);

    // A new deal is always possible.
    assert_eq!(game.apply(Action::Deal).unwrap(), Outcome::Accepted);
    assert!(!game.is_over());
    assert_eq!(game.players_remaining(), 2);
    assert!(game.players().values().all(|p| p.is_active()));
}

#[test]
fn test_cards_in_hand_keep_player_in_while_deck_lasts() {
    let (mut game, _rx) = one_card_game();

    // The opener empties their hand, but the trump card is still in the stock.
    let _ = game.submit_attack(play(&["6D"])).unwrap();
    assert!(game.player(seat(0)).is_active());
    assert_eq!(game.players_remaining(), 2);
    assert_eq!(game.phase(), Phase::AfterAttack);
}

#[test]
fn test_empty_hand_retired_when_stock_runs_out() {
    let mut config = GameConfig::all_computer(3);
    config.hand_size = 1;
    let deck = stacked_deck(&[&["6D"], &["7D"], &["8C"]], &["AD"]);
    let (mut game, _rx) = dealt_game(config, deck);
    assert_eq!(game.attacker(), seat(0));

    let mut script = Scripted::new(vec![play(&["6D"]), play(&["8C"])], vec![defend(&[(0, "7D")])]);

    // Seat 1 beats the only attack with its only card while the AD is
    // still in the stock, so it stays in for now.
    step_until(&mut game, &mut script, 10, in_phase(Phase::EndOfRound));
    assert!(game.player(seat(1)).is_active());
    assert_eq!(game.players_remaining(), 3);

    // Seat 0 draws the trump; with the stock gone seat 1 is retired and
    // the roles move on to seats 2 and 0.
    step_until(&mut game, &mut script, 10, in_phase(Phase::AwaitingAttack));
    assert_eq!(game.player(seat(1)).status(), Some(Status::Out));
    assert_eq!(game.players_remaining(), 2);
    assert_eq!(game.attacker(), seat(2));
    assert_eq!(game.defender(), seat(0));

    step_until(&mut game, &mut script, 10, |g| g.is_over());
    assert_eq!(game.durak(), Some(seat(0)));
    assert_eq!(game.discard_pile().len(), 2);
}

#[test]
fn test_defender_going_out_ends_the_round() {
    let mut config = GameConfig::all_computer(4);
    config.hand_size = 2;
    // Trump Hearts; seat 2 opens with the only heart dealt.
    let deck = stacked_deck(
        &[&["6D", "6S"], &["7D", "7S"], &["6H", "8C"], &["9C", "10C"]],
        &["AH"],
    );
    let (mut game, _rx) = dealt_game(config, deck);
    assert_eq!(game.attacker(), seat(2));

    let mut script = Scripted::new(
        vec![
            play(&["8C"]),
            AttackDecision::Pass,
            AttackDecision::Pass,
            AttackDecision::Pass,
            AttackDecision::Pass,
            play(&["6D", "6S"]),
        ],
        vec![
            DefenseDecision::Surrender,
            defend(&[(0, "7D"), (1, "7S")]),
        ],
    );

    // Seat 3 picks up, seat 2 draws the last card, and seat 0 attacks
    // seat 1 with the stock gone.
    step_until(&mut game, &mut script, 40, |g| {
        g.deck().is_empty() && g.phase() == Phase::AwaitingAttack
    });
    assert_eq!(game.attacker(), seat(0));
    assert_eq!(game.defender(), seat(1));
    assert_eq!(game.player(seat(3)).hand_len(), 3);

    // Both attacker and defender empty their hands in the same round.
    step_until(&mut game, &mut script, 10, |g| g.players_remaining() == 2);
    assert_eq!(game.phase(), Phase::AfterDefense);
    assert_eq!(game.player(seat(0)).status(), Some(Status::Out));
    assert_eq!(game.player(seat(1)).status(), Some(Status::Out));
    assert_eq!(game.battlefield().len(), 2);

    assert_eq!(game.advance(), Outcome::Accepted);
    assert!(script.is_exhausted());
    assert_eq!(game.phase(), Phase::ReadyToInitiate);
    assert_eq!(game.attacker(), seat(2));
    assert_eq!(game.defender(), seat(3));
    assert_eq!(game.players_remaining(), 2);
    assert!(game.battlefield().is_empty());
    assert_eq!(game.discard_pile().len(), 4);
    assert_eq!(total_cards(&game), 9);
}
