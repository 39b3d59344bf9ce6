//! Engine, text and cipher integration tests.

use pontifex::engine::{count_cut, move_joker_a, move_joker_b, output_card, round, triple_cut};
use pontifex::text::{
    add_modulo_26, decrypt_text, encrypt_text, format_plaintext, numbers_to_text,
    subtract_modulo_26, text_to_numbers,
};
use pontifex::{
    Card, Cipher, CipherError, CipherOptions, Deck, Joker, KeystreamError, Step, generate_keystream,
    generate_letter,
};
use proptest::prelude::*;

fn without(deck: &Deck, card: Card) -> Vec<Card> {
    deck.iter().copied().filter(|c| *c != card).collect()
}

#[test]
fn ordered_deck_keystream() {
    let mut deck = Deck::new();
    assert_eq!(
        generate_keystream(&mut deck, 12).unwrap(),
        [4, 6, 10, 16, 13, 6, 17, 10, 16, 8, 7, 25]
    );
}

#[test]
fn keystream_continues_across_calls() {
    let mut deck = Deck::new();
    let first = generate_keystream(&mut deck, 3).unwrap();
    let second = generate_keystream(&mut deck, 2).unwrap();
    assert_eq!(first, [4, 6, 10]);
    assert_eq!(second, [16, 13]);

    let mut fresh = Deck::new();
    let all = generate_keystream(&mut fresh, 5).unwrap();
    assert_eq!([first, second].concat(), all);
    assert_eq!(fresh, deck);

    // Restarting from the original key does not continue the stream.
    assert_ne!(generate_keystream(&mut Deck::new(), 2).unwrap(), [16, 13]);
}

#[test]
fn joker_at_bottom_moves_below_top_card() {
    let mut deck = Deck::new();
    deck.move_card(52, 53).unwrap();
    assert_eq!(deck.locate(Joker::A), 53);

    move_joker_a(&mut deck);
    assert_eq!(deck.locate(Joker::A), 1);
}

#[test]
fn hello_example() {
    let keystream = [12, 5, 18, 3, 9];
    let ciphertext = encrypt_text(&format_plaintext("hello"), &keystream).unwrap();
    assert_eq!(ciphertext, "TJDOX");
    assert_eq!(decrypt_text("TJDOX", &keystream).unwrap(), "HELLO");
}

#[test]
fn modulo_round_trip_for_all_values() {
    for p in 1..=26 {
        for k in 1..=26 {
            let c = add_modulo_26(p, k);
            assert!((1..=26).contains(&c));
            assert_eq!(subtract_modulo_26(c, k), p);
            assert_eq!(add_modulo_26(subtract_modulo_26(p, k), k), p);
        }
    }
}

#[test]
fn exhausted_retry_is_reported() {
    let mut deck = Deck::new();
    deck.move_card(25, 0).unwrap();
    let cipher = Cipher::new(CipherOptions::default().with_max_attempts(1));

    assert_eq!(
        cipher.keystream(&mut deck, 1).unwrap_err(),
        CipherError::Keystream(KeystreamError::Exhausted { attempts: 1 })
    );
}

#[test]
fn cipher_round_trip_with_shared_key() {
    let key = Deck::shuffled(1234);
    let cipher = Cipher::default();

    let ciphertext = cipher.encrypt(&mut key.clone(), "Attack at dawn!").unwrap();
    assert_eq!(ciphertext.len(), 17);

    let plaintext = cipher.decrypt(&mut key.clone(), &ciphertext).unwrap();
    assert_eq!(plaintext, "ATTAC KATDA WNXXX");
}

proptest! {
    #[test]
    fn prop_joker_a_moves_one_down(seed in any::<u64>()) {
        let mut deck = Deck::shuffled(seed);
        let before = deck.locate(Joker::A);
        let others = without(&deck, Card::JOKER_A);

        move_joker_a(&mut deck);

        let expected = if before == 53 { 1 } else { before + 1 };
        prop_assert_eq!(deck.locate(Joker::A), expected);
        prop_assert_eq!(without(&deck, Card::JOKER_A), others);
    }

    #[test]
    fn prop_joker_b_keeps_other_cards_in_order(seed in any::<u64>()) {
        let mut deck = Deck::shuffled(seed);
        let before = deck.locate(Joker::B);
        let others = without(&deck, Card::JOKER_B);

        move_joker_b(&mut deck);

        let expected = match (before + 2) % 53 {
            0 => 1,
            target => target,
        };
        prop_assert_eq!(deck.locate(Joker::B), expected);
        prop_assert_eq!(without(&deck, Card::JOKER_B), others);
    }

    #[test]
    fn prop_triple_cut_keeps_middle(seed in any::<u64>()) {
        let mut deck = Deck::shuffled(seed);
        let (first, second) = pontifex::engine::joker_bounds(&deck);
        let middle = deck.cards()[first..=second].to_vec();

        triple_cut(&mut deck);

        let start = 53 - second;
        prop_assert_eq!(&deck.cards()[start..start + middle.len()], middle.as_slice());
    }

    #[test]
    fn prop_count_cut_keeps_bottom_card(seed in any::<u64>()) {
        let mut deck = Deck::shuffled(seed);
        let bottom = deck.bottom();
        let before = deck.clone();

        count_cut(&mut deck);

        prop_assert_eq!(deck.bottom(), bottom);
        if bottom.is_joker() {
            prop_assert_eq!(deck, before);
        }
    }

    #[test]
    fn prop_round_keeps_a_valid_deck(seed in any::<u64>()) {
        let mut deck = Deck::shuffled(seed);
        round(&mut deck);

        prop_assert!(Deck::from_cards(deck.cards()).is_ok());
        prop_assert_eq!(Step::CountCut.apply(&deck).cards().len(), 54);
    }

    #[test]
    fn prop_keystream_values_in_range(seed in any::<u64>()) {
        let mut deck = Deck::shuffled(seed);
        for value in generate_keystream(&mut deck, 20).unwrap() {
            prop_assert!((1..=26).contains(&value));
        }
    }

    #[test]
    fn prop_letter_never_comes_from_joker(seed in any::<u64>()) {
        let mut deck = Deck::shuffled(seed);
        let mut replay = deck.clone();

        let value = generate_letter(&mut deck).unwrap();

        // Replaying round by round, the first standard output card gives the value.
        loop {
            round(&mut replay);
            match output_card(&replay) {
                Some(card) if !card.is_joker() => {
                    prop_assert_eq!(card.keystream_value(), Some(value));
                    break;
                }
                _ => {}
            }
        }
        prop_assert_eq!(replay, deck);
    }

    #[test]
    fn prop_letters_round_trip(text in "[A-Z]{0,40}") {
        let numbers = text_to_numbers(&text).unwrap();
        prop_assert_eq!(numbers_to_text(&numbers).unwrap(), text);
    }

    #[test]
    fn prop_decrypt_reverses_encrypt(seed in any::<u64>(), text in "[a-zA-Z ]{1,30}") {
        let key = Deck::shuffled(seed);
        let cipher = Cipher::default();

        let ciphertext = cipher.encrypt(&mut key.clone(), &text).unwrap();
        let plaintext = cipher.decrypt(&mut key.clone(), &ciphertext).unwrap();
        prop_assert_eq!(pontifex::text::ungroup(&plaintext), format_plaintext(&text));
    }
}
