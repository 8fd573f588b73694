mod common;

use cheat_engine::cards::{Card, Rank, Suit};
use cheat_engine::engine::GameEvent;
use cheat_engine::errors::{GameError, IllegalAction};
use cheat_engine::game::RoundPhase;
use cheat_engine::player::{ActionType, PlayerAction};

use common::{assert_conserved, c, env_with_hands};

#[test]
fn play_moves_cards_and_passes_the_turn() {
    let mut env = env_with_hands(
        &["a", "b", "c"],
        vec![
            vec![c(Rank::Five, Suit::Spades), c(Rank::Six, Suit::Spades)],
            vec![c(Rank::Nine, Suit::Clubs)],
            vec![c(Rank::Ten, Suit::Clubs)],
        ],
    );
    let res = env
        .step(PlayerAction::play(vec![c(Rank::Six, Suit::Spades)], Rank::Five))
        .unwrap();

    assert_eq!(env.players()[0].hand(), &[c(Rank::Five, Suit::Spades)]);
    assert_eq!(env.pile(), &[c(Rank::Six, Suit::Spades)]);
    assert_eq!(env.announced_rank(), Some(Rank::Five));
    assert_eq!(env.current_seat(), 1);
    assert_eq!(res.reward, 0.0);
    assert!(!res.terminated);
    assert_eq!(
        res.info.events,
        vec![GameEvent::Played {
            seat: 0,
            count: 1,
            claim: Rank::Five
        }]
    );

    let legal = env.legal_actions();
    assert_eq!(
        legal.types,
        vec![ActionType::Challenge, ActionType::Pass, ActionType::Play]
    );
    assert!(!legal.is_starter);
    assert_conserved(&env);
}

#[test]
fn challenge_catches_one_off_rank_card_in_a_three_card_play() {
    let mut env = env_with_hands(
        &["a", "b", "c"],
        vec![
            vec![c(Rank::Seven, Suit::Spades), c(Rank::Four, Suit::Spades)],
            vec![
                c(Rank::Seven, Suit::Hearts),
                Card::joker(),
                c(Rank::Two, Suit::Clubs),
                c(Rank::Eight, Suit::Clubs),
            ],
            vec![c(Rank::Ten, Suit::Clubs)],
        ],
    );
    env.step(PlayerAction::play(vec![c(Rank::Seven, Suit::Spades)], Rank::Seven))
        .unwrap();
    env.step(PlayerAction::play(
        vec![c(Rank::Seven, Suit::Hearts), Card::joker(), c(Rank::Two, Suit::Clubs)],
        Rank::Seven,
    ))
    .unwrap();
    assert_eq!(env.pile().len(), 4);

    let res = env.step(PlayerAction::Challenge).unwrap();
    assert_eq!(
        res.info.events,
        vec![GameEvent::ChallengeResolved {
            challenger: 2,
            challenged: 1,
            caught: true,
            receiver: 1,
            cards: 4,
        }]
    );
    // the liar takes the whole pile, including the first player's card
    assert_eq!(env.players()[1].hand_size(), 5);
    assert!(env.players()[1].hand().contains(&c(Rank::Seven, Suit::Spades)));
    assert!(env.pile().is_empty());
    assert_eq!(env.round().phase(), RoundPhase::AwaitingOpen { starter: 2 });
    assert_eq!(env.current_seat(), 2);
    assert_eq!(env.legal_actions().types, vec![ActionType::Play]);
    assert_conserved(&env);
}

#[test]
fn challenge_only_inspects_the_last_play() {
    let mut env = env_with_hands(
        &["a", "b", "c"],
        vec![
            vec![c(Rank::Two, Suit::Spades), c(Rank::Four, Suit::Spades)],
            vec![c(Rank::Seven, Suit::Hearts), c(Rank::Eight, Suit::Clubs)],
            vec![c(Rank::Ten, Suit::Clubs)],
        ],
    );
    // seat 0 lies, seat 1 tells the truth, seat 2 challenges seat 1
    env.step(PlayerAction::play(vec![c(Rank::Two, Suit::Spades)], Rank::Seven))
        .unwrap();
    env.step(PlayerAction::play(vec![c(Rank::Seven, Suit::Hearts)], Rank::Seven))
        .unwrap();
    assert_eq!(
        env.round().last_play(),
        Some(&[c(Rank::Seven, Suit::Hearts)][..])
    );

    env.step(PlayerAction::Challenge).unwrap();
    assert_eq!(env.players()[2].hand_size(), 3, "challenger takes the pile");
    assert_eq!(env.current_seat(), 1, "the honest player opens next");
    assert_eq!(env.round().starter(), Some(1));
    assert_conserved(&env);
}

#[test]
fn lying_on_the_last_card_voids_the_win() {
    let mut env = env_with_hands(
        &["a", "b", "c"],
        vec![
            vec![c(Rank::King, Suit::Clubs), c(Rank::Four, Suit::Spades)],
            vec![c(Rank::King, Suit::Spades), c(Rank::Queen, Suit::Hearts)],
            vec![c(Rank::Ten, Suit::Clubs)],
        ],
    );
    env.step(PlayerAction::play(vec![c(Rank::King, Suit::Clubs)], Rank::King))
        .unwrap();
    let res = env
        .step(PlayerAction::play(
            vec![c(Rank::King, Suit::Spades), c(Rank::Queen, Suit::Hearts)],
            Rank::King,
        ))
        .unwrap();

    assert!(!res.terminated);
    assert_eq!(res.reward, 0.0);
    assert!(!env.is_over());
    assert!(env.winner().is_none());
    assert_eq!(env.players()[1].hand_size(), 3);
    assert!(env.pile().is_empty());
    assert_eq!(env.current_seat(), 2, "the seat after the liar starts");
    assert_eq!(env.round().starter(), Some(2));
    assert_eq!(
        res.info.events.last(),
        Some(&GameEvent::WinningPlayVoided { seat: 1, cards: 3 })
    );
    assert_conserved(&env);
}

#[test]
fn truthful_last_play_wins_immediately() {
    let mut env = env_with_hands(
        &["agent", "bot"],
        vec![
            vec![c(Rank::Four, Suit::Spades), c(Rank::Five, Suit::Spades)],
            vec![c(Rank::Four, Suit::Hearts), Card::joker()],
        ],
    );
    env.step(PlayerAction::play(vec![c(Rank::Four, Suit::Spades)], Rank::Four))
        .unwrap();
    let res = env
        .step(PlayerAction::play(
            vec![c(Rank::Four, Suit::Hearts), Card::joker()],
            Rank::Four,
        ))
        .unwrap();

    assert!(res.terminated);
    assert_eq!(res.reward, -1.0, "a non-agent seat won");
    assert!(env.is_over());
    assert_eq!(env.winner().map(|p| p.name()), Some("bot"));
    assert_eq!(env.winner_seat(), Some(1));
    assert!(env.legal_actions().types.is_empty());
    assert_eq!(
        env.step(PlayerAction::Pass),
        Err(GameError::IllegalAction(IllegalAction::GameOver))
    );
    assert_conserved(&env);
}

#[test]
fn agent_seat_is_rewarded_for_winning() {
    let mut env = common::env_with_hands(
        &["agent", "bot"],
        vec![
            vec![c(Rank::Nine, Suit::Spades)],
            vec![c(Rank::Four, Suit::Hearts)],
        ],
    );
    let res = env
        .step(PlayerAction::play(vec![c(Rank::Nine, Suit::Spades)], Rank::Nine))
        .unwrap();
    assert!(res.terminated);
    assert_eq!(res.reward, 1.0);
}

#[test]
fn all_pass_closes_the_round_and_keeps_the_pile() {
    let mut env = env_with_hands(
        &["a", "b", "c"],
        vec![
            vec![
                c(Rank::Five, Suit::Spades),
                c(Rank::Six, Suit::Spades),
                c(Rank::Four, Suit::Spades),
            ],
            vec![c(Rank::Nine, Suit::Clubs)],
            vec![c(Rank::Ten, Suit::Clubs)],
        ],
    );
    env.step(PlayerAction::play(vec![c(Rank::Five, Suit::Spades)], Rank::Five))
        .unwrap();
    let res = env.step(PlayerAction::Pass).unwrap();
    assert_eq!(env.round().passes(), 1);
    assert_eq!(env.current_seat(), 2);
    assert_eq!(res.info.events, vec![GameEvent::Passed { seat: 1 }]);

    let res = env.step(PlayerAction::Pass).unwrap();
    assert_eq!(
        res.info.events,
        vec![
            GameEvent::Passed { seat: 2 },
            GameEvent::RoundClosed {
                starter: 0,
                pile_size: 1
            }
        ]
    );
    assert_eq!(env.current_seat(), 0, "last player opens the next round");
    assert_eq!(env.announced_rank(), None);
    assert_eq!(env.pile(), &[c(Rank::Five, Suit::Spades)], "pile carries over");
    assert_eq!(res.observation.pile_size(), 1.0);
    assert_eq!(res.observation.starter_flag(), 1.0);
    assert_eq!(env.legal_actions().types, vec![ActionType::Play]);

    // the carried card goes to whoever loses the next challenge
    env.step(PlayerAction::play(vec![c(Rank::Six, Suit::Spades)], Rank::Six))
        .unwrap();
    env.step(PlayerAction::Challenge).unwrap();
    assert_eq!(env.players()[1].hand_size(), 3);
    assert_eq!(env.current_seat(), 0);
    assert_conserved(&env);
}

#[test]
fn two_player_round_closes_after_one_pass() {
    let mut env = env_with_hands(
        &["a", "b"],
        vec![
            vec![c(Rank::Five, Suit::Spades), c(Rank::Six, Suit::Spades)],
            vec![c(Rank::Nine, Suit::Clubs)],
        ],
    );
    env.step(PlayerAction::play(vec![c(Rank::Five, Suit::Spades)], Rank::Five))
        .unwrap();
    env.step(PlayerAction::Pass).unwrap();
    assert_eq!(env.round().phase(), RoundPhase::AwaitingOpen { starter: 0 });
}

#[test]
fn rejected_actions_leave_the_state_untouched() {
    let mut env = env_with_hands(
        &["a", "b"],
        vec![
            vec![c(Rank::Five, Suit::Spades), c(Rank::Six, Suit::Spades)],
            vec![c(Rank::Nine, Suit::Clubs), c(Rank::Nine, Suit::Hearts)],
        ],
    );
    let before = env.all_cards();
    let obs = env.observe();

    let attempts = vec![
        (
            PlayerAction::Pass,
            IllegalAction::NotAllowed {
                action: ActionType::Pass,
                is_starter: true,
            },
        ),
        (
            PlayerAction::Challenge,
            IllegalAction::NotAllowed {
                action: ActionType::Challenge,
                is_starter: true,
            },
        ),
        (PlayerAction::play(vec![], Rank::Five), IllegalAction::EmptyPlay),
        (
            PlayerAction::play(vec![c(Rank::Nine, Suit::Clubs)], Rank::Nine),
            IllegalAction::CardsNotOwned { seat: 0 },
        ),
        (
            PlayerAction::play(
                vec![c(Rank::Five, Suit::Spades), c(Rank::Five, Suit::Spades)],
                Rank::Five,
            ),
            IllegalAction::CardsNotOwned { seat: 0 },
        ),
        (
            PlayerAction::play(vec![c(Rank::Five, Suit::Spades)], Rank::Joker),
            IllegalAction::UndeclarableRank(Rank::Joker),
        ),
    ];
    for (action, expected) in attempts {
        assert_eq!(env.step(action), Err(GameError::IllegalAction(expected)));
        assert_eq!(env.all_cards(), before);
        assert_eq!(env.observe(), obs);
        assert_eq!(env.current_seat(), 0);
    }

    env.step(PlayerAction::play(vec![c(Rank::Five, Suit::Spades)], Rank::Five))
        .unwrap();
    let err = env
        .step(PlayerAction::play(vec![c(Rank::Nine, Suit::Clubs)], Rank::Nine))
        .unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalAction(IllegalAction::ClaimMismatch {
            expected: Rank::Five,
            claimed: Rank::Nine
        })
    );
    assert_eq!(env.players()[1].hand_size(), 2);
}

#[test]
fn step_before_reset_is_a_configuration_error() {
    let mut env = cheat_engine::engine::CheatEnv::new(None);
    assert!(matches!(
        env.step(PlayerAction::Pass),
        Err(GameError::Configuration(_))
    ));
}
