//! Tutorial integration tests.

use pontifex::engine::joker_bounds;
use pontifex::{
    Card, Deck, DeckError, DropTargets, Outcome, Phase, StepError, TripleCutSelection, Tutorial,
    generate_keystream,
};

// Moves the current phase's joker to where the tutorial says it belongs.
fn drag_joker(tutorial: &mut Tutorial) -> Outcome {
    let start = tutorial.joker_start().unwrap();
    let DropTargets::Only(target) = tutorial.valid_destinations(start).unwrap() else {
        panic!("joker at {start} has no single destination");
    };
    tutorial.drag_card(start, target).unwrap()
}

// Plays one keystream letter by hand, the way a user would with clicks and drags.
fn play_letter(tutorial: &mut Tutorial) -> u8 {
    tutorial.start_round().unwrap();

    loop {
        assert_eq!(drag_joker(tutorial), Outcome::Advanced(Phase::MoveJokerB));
        assert_eq!(drag_joker(tutorial), Outcome::Advanced(Phase::TripleCut));

        let (first, second) = joker_bounds(tutorial.deck());
        if first > 0 {
            assert_eq!(tutorial.click_card(0).unwrap(), Outcome::Selected);
        }
        if second < 53 {
            assert_eq!(tutorial.click_card(53).unwrap(), Outcome::Selected);
        }
        assert_eq!(
            tutorial.confirm_selected_triple_cut().unwrap(),
            Outcome::Advanced(Phase::CountCut)
        );

        tutorial.click_card(53).unwrap();
        let count = tutorial.revealed_count().unwrap();
        if count < 53 {
            tutorial.click_card(usize::from(count) - 1).unwrap();
        }
        assert_eq!(
            tutorial.confirm_selected_count_cut().unwrap(),
            Outcome::Advanced(Phase::Output)
        );

        let index = usize::from(tutorial.deck().top().number());
        match tutorial.click_card(index).unwrap() {
            Outcome::Value(value) => return value,
            Outcome::JokerDiscarded => assert_eq!(tutorial.phase(), Phase::MoveJokerA),
            other => panic!("unexpected outcome {other:?}"),
        }
    }
}

#[test]
fn manual_rounds_match_engine() {
    for seed in [0, 3, 17, 2024] {
        let key = Deck::shuffled(seed);
        let mut tutorial = Tutorial::with_deck(key.clone(), seed);

        let mut engine_deck = key;
        let expected = generate_keystream(&mut engine_deck, 8).unwrap();

        let played: Vec<u8> = (0..8).map(|_| play_letter(&mut tutorial)).collect();
        assert_eq!(played, expected);
        assert_eq!(tutorial.values(), expected.as_slice());
        assert_eq!(tutorial.deck(), &engine_deck);
    }
}

#[test]
fn ordered_deck_first_letter() {
    let mut tutorial = Tutorial::new(0);
    assert_eq!(play_letter(&mut tutorial), 4);
    assert_eq!(tutorial.phase(), Phase::Ready);
}

#[test]
fn joker_output_is_discarded_by_hand() {
    let mut deck = Deck::new();
    deck.move_card(25, 0).unwrap();
    let mut tutorial = Tutorial::with_deck(deck, 0);

    assert_eq!(play_letter(&mut tutorial), 23);
    assert_eq!(tutorial.values(), &[23]);
}

#[test]
fn wrong_actions_leave_session_untouched() {
    let mut tutorial = Tutorial::with_deck(Deck::shuffled(8), 0);
    tutorial.start_round().unwrap();

    let before = tutorial.deck().clone();
    let start = tutorial.joker_start().unwrap();
    let other = if start == 0 { 1 } else { 0 };
    assert_eq!(tutorial.valid_destinations(other).unwrap(), DropTargets::Nowhere);
    assert_eq!(tutorial.drag_card(other, 30).unwrap(), Outcome::Rejected);
    assert_eq!(tutorial.deck(), &before);
    assert_eq!(tutorial.phase(), Phase::MoveJokerA);

    tutorial.perform_step().unwrap();
    tutorial.perform_step().unwrap();
    assert_eq!(tutorial.phase(), Phase::TripleCut);

    let (first, second) = joker_bounds(tutorial.deck());
    if first > 0 || second < 53 {
        let before = tutorial.deck().clone();
        assert_eq!(
            tutorial.confirm_triple_cut(TripleCutSelection::default()).unwrap(),
            Outcome::Rejected
        );
        assert_eq!(tutorial.deck(), &before);
        assert_eq!(tutorial.phase(), Phase::TripleCut);
    }
}

#[test]
fn invalid_submissions_are_errors() {
    let mut tutorial = Tutorial::new(0);
    tutorial.start_round().unwrap();

    let mut cards = Deck::new().cards().to_vec();
    cards[1] = cards[0];
    assert_eq!(
        tutorial.submit_cards(&cards),
        Err(StepError::Deck(DeckError::DuplicateCard(cards[0])))
    );
    assert_eq!(
        tutorial.submit_cards(&cards[..10]),
        Err(StepError::Deck(DeckError::WrongSize { len: 10 }))
    );
    assert_eq!(
        tutorial.drag_card(0, 54),
        Err(StepError::Deck(DeckError::IndexOutOfRange(54)))
    );
    assert_eq!(tutorial.click_card(60), Err(StepError::IndexOutOfRange(60)));
}

#[test]
fn phase_guards() {
    let mut tutorial = Tutorial::new(0);
    tutorial.start_round().unwrap();
    assert_eq!(tutorial.start_round(), Err(StepError::InvalidPhase));
    assert_eq!(tutorial.shuffle_deck(), Err(StepError::InvalidPhase));

    for _ in 0..4 {
        tutorial.perform_step().unwrap();
    }
    assert_eq!(tutorial.phase(), Phase::Output);
    assert_eq!(
        tutorial.submit_deck_state(Deck::new()),
        Err(StepError::InvalidPhase)
    );
}

#[test]
fn resets() {
    let mut tutorial = Tutorial::new(0);
    play_letter(&mut tutorial);
    tutorial.start_round().unwrap();
    tutorial.perform_step().unwrap();

    let progressed = tutorial.deck().clone();
    tutorial.reset_round();
    assert_eq!(tutorial.phase(), Phase::Ready);
    assert_eq!(tutorial.deck(), &progressed);
    assert_eq!(tutorial.values(), &[4]);

    tutorial.clear_values();
    assert!(tutorial.values().is_empty());

    tutorial.reset_deck();
    assert_eq!(tutorial.deck(), &Deck::new());
}

#[test]
fn reset_deck_forgets_values_from_old_key() {
    let mut tutorial = Tutorial::with_deck(Deck::shuffled(5), 0);
    play_letter(&mut tutorial);
    tutorial.start_round().unwrap();
    tutorial.perform_step().unwrap();
    assert_eq!(tutorial.values().len(), 1);

    tutorial.reset_deck();
    assert_eq!(tutorial.phase(), Phase::Ready);
    assert_eq!(tutorial.deck(), &Deck::new());
    assert!(tutorial.values().is_empty());
    assert_eq!(play_letter(&mut tutorial), 4);
    assert_eq!(tutorial.values(), &[4]);
}

#[test]
fn shuffling_is_seeded() {
    let mut first = Tutorial::new(77);
    let mut second = Tutorial::new(77);
    first.shuffle_deck().unwrap();
    second.shuffle_deck().unwrap();

    assert_eq!(first.deck(), second.deck());
    assert_ne!(first.deck(), &Deck::new());
    assert!(Deck::from_cards(first.deck().cards()).is_ok());
}

#[test]
fn highlights_follow_phase() {
    let mut tutorial = Tutorial::new(0);
    assert!(tutorial.highlights().is_empty());

    tutorial.start_round().unwrap();
    assert_eq!(tutorial.highlights(), vec![52, 53]);

    for _ in 0..3 {
        tutorial.perform_step().unwrap();
    }
    assert_eq!(tutorial.phase(), Phase::CountCut);
    assert_eq!(tutorial.highlights(), vec![53]);

    tutorial.perform_step().unwrap();
    assert_eq!(tutorial.highlights(), vec![0]);
    assert_eq!(tutorial.deck().top(), Card::new(pontifex::Suit::Clubs, 2));
}
