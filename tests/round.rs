//! Round engine integration tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ventuno::Rank::{self, Ace, Eight, Five, Four, King, Nine, Queen, Seven, Six, Ten, Three, Two};
use ventuno::{
    ActionError, BetError, Card, CardSource, DECK_SIZE, DrawRequest, DrawRole, Drawn,
    HandOutcome, Phase, Round, Shoe, SourceError, Suit, score,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn hearts(rank: Rank) -> Card {
    card(Suit::Hearts, rank)
}

fn begin(bet: u64, balance: u64, draws: &[Card]) -> Round {
    Round::begin(bet, balance, Box::new(Shoe::stacked(draws))).expect("deal should succeed")
}

/// A source that stops the dealer once the initial deal is out.
struct StoppingSource {
    shoe: Shoe,
    dealer_draws: usize,
}

impl CardSource for StoppingSource {
    fn draw(&mut self, request: DrawRequest) -> Result<Drawn, SourceError> {
        if request.role == DrawRole::Dealer {
            self.dealer_draws += 1;
            if self.dealer_draws > 2 {
                return Ok(Drawn::Stop);
            }
        }
        CardSource::draw(&mut self.shoe, request)
    }
}

#[test]
fn score_without_aces_is_simple_sum() {
    let cards = [hearts(Two), hearts(Nine), hearts(King)];
    assert_eq!(score::value(&cards), 21);
    assert!(!score::evaluate(&cards).1);
}

#[test]
fn score_demotes_aces_one_at_a_time() {
    assert_eq!(score::value(&[hearts(Ace), card(Suit::Spades, Ace)]), 12);
    assert_eq!(
        score::value(&[hearts(Ace), hearts(Nine), card(Suit::Spades, Ace)]),
        21
    );
    assert_eq!(score::value(&[hearts(Ten), hearts(Nine), hearts(Ace)]), 20);
}

#[test]
fn score_over_21_is_minimal_total() {
    // No non-busting combination exists; every ace counts 1.
    let cards = [hearts(Ace), hearts(Ten), hearts(Queen), hearts(Five)];
    assert_eq!(score::value(&cards), 26);
    assert!(!score::evaluate(&cards).1);
}

#[test]
fn soft_flag_tracks_an_ace_counted_as_eleven() {
    assert!(score::evaluate(&[hearts(Ace), hearts(Five)]).1);
    assert!(!score::evaluate(&[hearts(Ace), hearts(Five), hearts(Ten)]).1);
}

#[test]
fn fresh_shoe_holds_52_unique_cards() {
    let shoe = Shoe::new();
    assert_eq!(shoe.remaining(), DECK_SIZE);

    let unique: HashSet<Card> = shoe.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn shuffle_permutes_without_losing_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut shoe = Shoe::new();
    let before: HashSet<Card> = shoe.cards().iter().copied().collect();

    shoe.shuffle(&mut rng);

    assert_eq!(shoe.remaining(), DECK_SIZE);
    let after: HashSet<Card> = shoe.cards().iter().copied().collect();
    assert_eq!(before, after);
}

#[test]
fn stacked_shoe_draws_in_script_order() {
    let mut shoe = Shoe::stacked(&[hearts(Two), hearts(Nine), hearts(King)]);
    assert_eq!(shoe.draw(), Some(hearts(Two)));
    assert_eq!(shoe.draw(), Some(hearts(Nine)));
    assert_eq!(shoe.draw(), Some(hearts(King)));
    assert_eq!(shoe.draw(), None);
}

#[test]
fn begin_validates_bet_before_mutation() {
    let shoe = Box::new(Shoe::new());
    assert!(matches!(
        Round::begin(0, 1000, shoe).map(|_| ()),
        Err(BetError::InvalidBet)
    ));

    let shoe = Box::new(Shoe::new());
    assert!(matches!(
        Round::begin(2000, 1000, shoe).map(|_| ()),
        Err(BetError::InsufficientBalance)
    ));
}

#[test]
fn deal_deducts_bet_and_deals_interleaved() {
    let round = begin(
        100,
        10_000,
        &[
            hearts(Eight),             // player
            card(Suit::Clubs, Five),   // dealer hole
            card(Suit::Spades, Nine),  // player
            card(Suit::Clubs, King),   // dealer up
        ],
    );

    assert_eq!(round.balance(), 9_900);
    assert_eq!(round.phase(), Phase::PlayerActing);
    assert_eq!(round.hands().len(), 1);
    assert_eq!(round.hands()[0].cards().len(), 2);
    assert_eq!(round.dealer().len(), 2);
    // The first dealer card is the hole; only the second shows.
    assert_eq!(round.dealer().up_card(), Some(&card(Suit::Clubs, King)));
    assert!(!round.dealer().is_hole_revealed());
    assert_eq!(round.dealer().visible_value(), 10);
}

#[test]
fn initial_21_auto_advances_to_settlement() {
    let round = begin(
        100,
        10_000,
        &[
            hearts(Ace),              // player
            card(Suit::Clubs, Ten),   // dealer hole
            hearts(King),             // player (21)
            card(Suit::Clubs, Nine),  // dealer up (19, stands)
        ],
    );

    // No player input needed: the round ran through dealer play.
    assert_eq!(round.phase(), Phase::Settled);
    assert!(round.dealer().is_hole_revealed());

    let result = round.result().expect("round is settled");
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    // 1:1 payout even on a natural 21.
    assert_eq!(result.hands[0].payout, 200);
    assert_eq!(round.balance(), 10_100);
}

#[test]
fn push_returns_the_stake() {
    let mut round = begin(
        100,
        10_000,
        &[
            hearts(Ten),              // player
            card(Suit::Clubs, Ten),   // dealer hole
            hearts(Nine),             // player (19)
            card(Suit::Clubs, Nine),  // dealer up (19)
        ],
    );

    round.stand().expect("stand should succeed");

    assert_eq!(round.phase(), Phase::Settled);
    let result = round.result().expect("round is settled");
    assert_eq!(result.hands[0].outcome, HandOutcome::Push);
    assert_eq!(result.hands[0].payout, 100);
    assert_eq!(round.balance(), 10_000);
}

#[test]
fn bust_pays_nothing_even_when_dealer_busts() {
    let mut round = begin(
        100,
        10_000,
        &[
            hearts(Ten),              // player
            card(Suit::Clubs, Ten),   // dealer hole
            hearts(Nine),             // player (19)
            card(Suit::Clubs, Six),   // dealer up (16, would draw)
            hearts(Five),             // player hit (24, bust)
        ],
    );

    round.hit().expect("hit should succeed");

    // Sole hand busted: the dealer reveals but draws nothing.
    assert_eq!(round.phase(), Phase::Settled);
    assert!(round.dealer().is_hole_revealed());
    assert_eq!(round.dealer().len(), 2);
    assert!(round.hands()[0].is_bust());

    let result = round.result().expect("round is settled");
    assert_eq!(result.hands[0].outcome, HandOutcome::Bust);
    assert_eq!(result.hands[0].payout, 0);
    assert_eq!(round.balance(), 9_900);
}

#[test]
fn hit_to_21_auto_stands() {
    let mut round = begin(
        100,
        10_000,
        &[
            hearts(Ten),              // player
            card(Suit::Clubs, Ten),   // dealer hole
            hearts(Five),             // player (15)
            card(Suit::Clubs, Seven), // dealer up (17, stands)
            hearts(Six),              // player hit (21)
        ],
    );

    round.hit().expect("hit should succeed");

    assert_eq!(round.phase(), Phase::Settled);
    let result = round.result().expect("round is settled");
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
}

#[test]
fn dealer_draws_to_seventeen() {
    let mut round = begin(
        100,
        10_000,
        &[
            hearts(Ten),              // player
            card(Suit::Clubs, Two),   // dealer hole
            hearts(Nine),             // player (19)
            card(Suit::Clubs, Three), // dealer up (5)
            card(Suit::Clubs, Ten),   // dealer draw (15)
            card(Suit::Clubs, Four),  // dealer draw (19, stops)
        ],
    );

    round.stand().expect("stand should succeed");

    assert_eq!(round.dealer().value(), 19);
    assert_eq!(round.dealer().len(), 4);
    let result = round.result().expect("round is settled");
    assert_eq!(result.hands[0].outcome, HandOutcome::Push);
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    let mut round = begin(
        100,
        10_000,
        &[
            hearts(Ten),              // player
            card(Suit::Clubs, Ace),   // dealer hole
            hearts(Nine),             // player (19)
            card(Suit::Clubs, Six),   // dealer up (soft 17)
        ],
    );

    round.stand().expect("stand should succeed");

    // Soft 17 scores 17, so the loop never draws.
    assert_eq!(round.dealer().len(), 2);
    assert_eq!(round.dealer().value(), 17);
    let result = round.result().expect("round is settled");
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
}

#[test]
fn dealer_bust_pays_every_live_hand() {
    let mut round = begin(
        100,
        10_000,
        &[
            hearts(Ten),              // player
            card(Suit::Clubs, Ten),   // dealer hole
            hearts(Eight),            // player (18)
            card(Suit::Clubs, Six),   // dealer up (16)
            card(Suit::Clubs, Queen), // dealer draw (26, bust)
        ],
    );

    round.stand().expect("stand should succeed");

    let result = round.result().expect("round is settled");
    assert!(result.dealer_bust);
    assert_eq!(result.hands[0].outcome, HandOutcome::DealerBust);
    assert_eq!(round.balance(), 10_100);
}

#[test]
fn double_takes_one_card_and_forces_done() {
    let mut round = begin(
        100,
        10_000,
        &[
            hearts(Five),             // player
            card(Suit::Clubs, Ten),   // dealer hole
            hearts(Four),             // player (9)
            card(Suit::Clubs, Seven), // dealer up (17)
            hearts(Ten),              // double draw (19)
        ],
    );

    assert!(round.can_double());
    round.double().expect("double should succeed");

    assert_eq!(round.phase(), Phase::Settled);
    let result = round.result().expect("round is settled");
    assert_eq!(result.hands[0].bet, 200);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    // 10000 - 100 - 100 + 400.
    assert_eq!(round.balance(), 10_200);
}

#[test]
fn double_requires_balance_for_second_bet() {
    let mut round = begin(
        100,
        100,
        &[
            hearts(Five),             // player
            card(Suit::Clubs, Ten),   // dealer hole
            hearts(Four),             // player (9)
            card(Suit::Clubs, Seven), // dealer up
        ],
    );

    assert!(!round.can_double());
    assert_eq!(round.double().unwrap_err(), ActionError::InsufficientBalance);
    // Rejected without mutation.
    assert_eq!(round.phase(), Phase::PlayerActing);
    assert_eq!(round.hands()[0].bet(), 100);
}

#[test]
fn double_lapses_after_a_hit() {
    let mut round = begin(
        100,
        10_000,
        &[
            hearts(Two),              // player
            card(Suit::Clubs, Ten),   // dealer hole
            hearts(Three),            // player (5)
            card(Suit::Clubs, Seven), // dealer up
            hearts(Four),             // player hit (9)
        ],
    );

    round.hit().expect("hit should succeed");
    assert!(!round.can_double());
    assert_eq!(round.double().unwrap_err(), ActionError::CannotDouble);
}

#[test]
fn split_requires_equal_base_values_not_ranks() {
    // Ten and King both count 10: splittable.
    let round = begin(
        100,
        10_000,
        &[
            hearts(Ten),              // player
            card(Suit::Clubs, Five),  // dealer hole
            hearts(King),             // player
            card(Suit::Clubs, Seven), // dealer up
        ],
    );
    assert!(round.can_split());

    // Nine and ten do not.
    let round = begin(
        100,
        10_000,
        &[
            hearts(Nine),             // player
            card(Suit::Clubs, Five),  // dealer hole
            hearts(Ten),              // player
            card(Suit::Clubs, Seven), // dealer up
        ],
    );
    assert!(!round.can_split());
}

#[test]
fn split_pair_of_eights_settles_independently() {
    let mut round = begin(
        50,
        10_000,
        &[
            hearts(Eight),             // player
            card(Suit::Clubs, Five),   // dealer hole
            card(Suit::Spades, Eight), // player
            card(Suit::Clubs, Ten),    // dealer up (15)
            hearts(Two),               // fresh card, hand 1
            hearts(Three),             // fresh card, hand 2
            hearts(King),              // hand 1 hit (20)
            hearts(Ten),               // hand 2 hit (21, auto-stand)
            card(Suit::Clubs, Two),    // dealer draw (17)
        ],
    );

    assert!(round.can_split());
    round.split().expect("split should succeed");

    // Second bet deducted, two 2-card hands, play back on hand 1.
    assert_eq!(round.balance(), 9_900);
    assert_eq!(round.hands().len(), 2);
    assert_eq!(round.hands()[0].cards().len(), 2);
    assert_eq!(round.hands()[1].cards().len(), 2);
    assert_eq!(round.hands()[0].bet(), 50);
    assert_eq!(round.hands()[1].bet(), 50);
    assert_eq!(round.active_index(), 0);
    // The split pair cannot be re-split.
    assert!(!round.can_split());

    round.hit().expect("hit on hand 1");
    round.stand().expect("stand hand 1");
    assert_eq!(round.active_index(), 1);
    assert_eq!(round.phase(), Phase::PlayerActing);

    round.hit().expect("hit on hand 2");

    assert_eq!(round.phase(), Phase::Settled);
    let result = round.result().expect("round is settled");
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.hands.len(), 2);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[1].outcome, HandOutcome::Win);
    // 10000 - 50 - 50 + 100 + 100.
    assert_eq!(round.balance(), 10_100);
}

#[test]
fn actions_rejected_after_settlement() {
    let mut round = begin(
        100,
        10_000,
        &[
            hearts(Ten),              // player
            card(Suit::Clubs, Ten),   // dealer hole
            hearts(Nine),             // player
            card(Suit::Clubs, Nine),  // dealer up
        ],
    );

    round.stand().expect("stand should succeed");
    assert!(round.is_over());

    assert_eq!(round.hit().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(round.stand().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(round.double().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(round.split().unwrap_err(), ActionError::InvalidPhase);
}

#[test]
fn exhausted_shoe_is_a_hard_failure() {
    let mut round = begin(
        100,
        10_000,
        &[
            hearts(Ten),              // player
            card(Suit::Clubs, Ten),   // dealer hole
            hearts(Five),             // player (15)
            card(Suit::Clubs, Nine),  // dealer up
        ],
    );

    assert_eq!(
        round.hit().unwrap_err(),
        ActionError::Source(SourceError::Exhausted)
    );

    // The round is dead: the stake comes back, no further actions.
    assert!(round.is_aborted());
    assert!(!round.is_over());
    assert_eq!(round.balance(), 10_000);
    assert_eq!(round.hit().unwrap_err(), ActionError::InvalidPhase);
}

#[test]
fn dealer_draw_failure_aborts_the_round() {
    let mut round = begin(
        100,
        10_000,
        &[
            hearts(Ten),              // player
            card(Suit::Clubs, Six),   // dealer hole
            hearts(Nine),             // player (19)
            card(Suit::Clubs, Ten),   // dealer up (16, must draw)
        ],
    );

    assert_eq!(
        round.stand().unwrap_err(),
        ActionError::Source(SourceError::Exhausted)
    );

    assert!(round.is_aborted());
    assert!(!round.is_over());
    assert!(round.result().is_none());
    assert_eq!(round.balance(), 10_000);
}

#[test]
fn stop_signal_overrides_dealer_draw_rule() {
    let source = StoppingSource {
        shoe: Shoe::stacked(&[
            hearts(Ten),             // player
            card(Suit::Clubs, Ten),  // dealer hole
            hearts(Nine),            // player (19)
            card(Suit::Clubs, Two),  // dealer up (12)
        ]),
        dealer_draws: 0,
    };

    let mut round = Round::begin(100, 10_000, Box::new(source)).expect("deal should succeed");
    round.stand().expect("stand should succeed");

    // Dealer sits on 12 because the source said stop.
    assert_eq!(round.phase(), Phase::Settled);
    assert_eq!(round.dealer().value(), 12);
    let result = round.result().expect("round is settled");
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
}

#[test]
fn view_hides_dealer_total_until_reveal() {
    let mut round = begin(
        100,
        10_000,
        &[
            hearts(Ten),              // player
            card(Suit::Clubs, Ten),   // dealer hole
            hearts(Nine),             // player
            card(Suit::Clubs, Nine),  // dealer up
        ],
    );

    let view = round.view();
    assert_eq!(view.dealer_value, None);
    assert_eq!(view.dealer_cards.len(), 2);
    assert_eq!(view.active_hand, 0);
    assert!(!view.is_over);
    assert_eq!(view.hands[0].outcome, None);

    round.stand().expect("stand should succeed");

    let view = round.view();
    assert_eq!(view.dealer_value, Some(19));
    assert!(view.is_over);
    assert_eq!(view.hands[0].outcome, Some("push"));
}
