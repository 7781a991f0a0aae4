//! Property-based tests for the round state machine.
//!
//! Arbitrary intent sequences must never break the deck or tally invariants.

use proptest::prelude::*;
use slipup::{Card, Corpus, Intent, LoadProfile, ModeSettings, Phase, Session, TickOutcome};

fn corpus(size: u32) -> Corpus {
    let cards = (1..=size)
        .map(|id| Card {
            id,
            target: format!("word{id}"),
            taboo: vec![format!("taboo{id}")],
            category: "Test".to_string(),
        })
        .collect();
    Corpus::new(cards, LoadProfile::Strict).unwrap()
}

fn intent_strategy() -> impl Strategy<Value = Intent> {
    prop_oneof![
        1 => Just(Intent::Start),
        3 => Just(Intent::Get),
        3 => Just(Intent::Skip),
        1 => Just(Intent::Slip),
        1 => Just(Intent::Reset),
        6 => Just(Intent::Tick),
    ]
}

proptest! {
    #[test]
    fn prop_session_invariants_hold(
        size in 1u32..6,
        round_seconds in 1u32..8,
        seed in any::<u64>(),
        intents in prop::collection::vec(intent_strategy(), 0..200),
    ) {
        let settings = ModeSettings { round_seconds, points_per_correct: 1 };
        let mut session = Session::seeded(corpus(size), settings, seed);

        for intent in intents {
            let before = session.snapshot();
            session.apply(intent);
            let after = session.snapshot();

            prop_assert_eq!(after.deck_length, size as usize);
            prop_assert!(after.card_index < after.deck_length);
            prop_assert!(after.current_card.is_some());

            let mut ids: Vec<_> = session.deck().iter().map(|c| c.id).collect();
            ids.sort_unstable();
            prop_assert_eq!(ids, (1..=size).collect::<Vec<_>>());

            match session.phase() {
                Phase::NotStarted => {
                    prop_assert_eq!(after.time_left, round_seconds);
                    prop_assert!(session.timer_ticket().is_none());
                }
                Phase::Running { time_left } => {
                    prop_assert!(time_left > 0 && time_left <= round_seconds);
                    prop_assert!(session.timer_ticket().is_some());
                }
            }

            if !before.started && matches!(intent, Intent::Get | Intent::Skip | Intent::Slip | Intent::Tick) {
                prop_assert_eq!(&before, &after);
            }
        }
    }

    /// A round always ends after exactly `round_seconds` ticks.
    #[test]
    fn prop_round_ends_after_round_seconds(round_seconds in 1u32..120, seed in any::<u64>()) {
        let settings = ModeSettings { round_seconds, points_per_correct: 1 };
        let mut session = Session::seeded(corpus(3), settings, seed);
        session.start();

        for remaining in (1..round_seconds).rev() {
            prop_assert_eq!(session.tick(), TickOutcome::Ticking { time_left: remaining });
        }
        prop_assert!(matches!(session.tick(), TickOutcome::RoundEnded(_)));
        prop_assert_eq!(session.tick(), TickOutcome::Ignored);
    }
}
