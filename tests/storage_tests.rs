//! Save/load tests against real files.

use deck_utility::{create_deck, create_hand, load, save, Card, Deck, DeckRng, LoadError};
use proptest::prelude::*;

// =============================================================================
// Round Trips
// =============================================================================

#[test]
fn test_round_trip_shuffled_remainder() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rest.deck");

    let (_hand, rest) = create_hand(4, &mut DeckRng::new(11));
    save(&rest, &path).unwrap();

    assert_eq!(load(&path).unwrap(), rest);
}

#[test]
fn test_round_trip_keeps_duplicates_and_odd_labels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("odd.deck");

    let deck: Deck = ["Ace of Spades", "Ace of Spades", "", "Joker ♠", "a\nb"]
        .into_iter()
        .map(Card::from)
        .collect();
    save(&deck, &path).unwrap();

    assert_eq!(load(&path).unwrap(), deck);
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.deck");

    save(&create_deck(), &path).unwrap();
    save(&Deck::new(), &path).unwrap();

    assert!(load(&path).unwrap().is_empty());
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_load_missing_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load(dir.path().join("never-saved.deck"));

    match result {
        Err(LoadError::NotFound { source, .. }) => {
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_load_directory_is_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(load(dir.path()), Err(LoadError::NotFound { .. })));
}

#[test]
fn test_save_to_directory_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(save(&create_deck(), dir.path()).is_err());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_save_load_round_trip(labels in prop::collection::vec(".*", 0..25)) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prop.deck");
        let deck: Deck = labels.into_iter().map(Card::from).collect();

        save(&deck, &path).unwrap();
        prop_assert_eq!(load(&path).unwrap(), deck);
    }
}
