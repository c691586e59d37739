//! Property tests for the tracker state machine (pure domain, no I/O).
//!
//! Random action sequences are replayed against a session; every step checks
//! scoring, high score and answer-hiding rules.

use proptest::prelude::*;

use crate::domain::fixtures::RoundFixture;
use crate::domain::session::{GameSession, Outcome};
use crate::domain::stage::Stage;
use crate::domain::test_prelude;
use crate::domain::tracker_view::TrackerView;

#[derive(Debug, Clone)]
enum Action {
    Start,
    Guess(bool),
    Pass,
    Timeout { stale: bool },
    Choose(bool),
    ShowResult,
    Next,
    Quit,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Start),
        any::<bool>().prop_map(Action::Guess),
        Just(Action::Pass),
        any::<bool>().prop_map(|stale| Action::Timeout { stale }),
        any::<bool>().prop_map(Action::Choose),
        Just(Action::ShowResult),
        Just(Action::Next),
        Just(Action::Quit),
    ]
}

/// Applies one action and returns the points it awarded.
fn step(s: &mut GameSession, a: &Action, next_id: &mut i64, contents: usize) -> u32 {
    let round = |id: i64| {
        RoundFixture::new(id, &format!("Subject{id} Person"))
            .contents(contents)
            .build()
    };
    let outcome = match a {
        Action::Start | Action::Next => {
            let ticket = match a {
                Action::Start => s.begin_start(),
                _ => s.begin_next(),
            };
            match ticket {
                Ok(t) => {
                    *next_id += 1;
                    Ok(s.finish_loading(&t, Some(round(*next_id))))
                }
                Err(e) => Err(e),
            }
        }
        Action::Guess(correct) => {
            let name = s.round().map(|r| r.subject_name.clone()).unwrap_or_default();
            s.submit_guess(if *correct { name.as_str() } else { "nobody at all" })
        }
        Action::Pass => s.pass(),
        Action::Timeout { stale } => {
            let key = if *stale {
                s.timer_key().wrapping_sub(1)
            } else {
                s.timer_key()
            };
            s.timeout(key)
        }
        Action::Choose(correct) => {
            let pick = s.round().map(|r| {
                if *correct {
                    r.subject_id
                } else {
                    r.subject_id + 100
                }
            });
            s.choose_option(pick.unwrap_or(-1))
        }
        Action::ShowResult => s.go_to_result(),
        Action::Quit => Ok(s.quit()),
    };
    match outcome {
        Ok(Outcome::Correct { points, .. }) | Ok(Outcome::Chose { points, .. }) => points,
        _ => 0,
    }
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_score_is_sum_of_awarded_points(
        actions in prop::collection::vec(action(), 1..80),
        contents in 0usize..=5,
    ) {
        let mut s = GameSession::new(0);
        let mut next_id = 0;
        let mut expected = 0u32;

        for a in &actions {
            let before_score = s.score();
            let before_high = s.high_score();
            let before_key = s.timer_key();

            let awarded = step(&mut s, a, &mut next_id, contents);
            if matches!(a, Action::Quit) {
                expected = 0;
            }
            expected += awarded;

            prop_assert_eq!(s.score(), expected);
            prop_assert!(s.high_score() >= before_high, "high score dropped");
            prop_assert!(s.high_score() >= s.score());
            prop_assert!(s.timer_key() >= before_key, "timer key went backwards");
            if !matches!(a, Action::Quit) {
                prop_assert!(s.score() >= before_score, "score dropped without quit");
            }
        }
    }

    #[test]
    fn prop_view_never_leaks_unsolved_answer(
        actions in prop::collection::vec(action(), 1..60),
        contents in 0usize..=5,
    ) {
        let mut s = GameSession::new(0);
        let mut next_id = 0;

        for a in &actions {
            step(&mut s, a, &mut next_id, contents);
            let view = TrackerView::of(&s);

            let open = s.solved_at().is_none() && s.stage() != Stage::Result;
            if open {
                prop_assert!(view.answer.is_none());
            }
            if !matches!(s.stage(), Stage::Choice | Stage::Result) {
                prop_assert!(view.candidates.is_none());
            }
            if let Some(clues) = &view.clues {
                let bound = s.revealed_contents().max(
                    if s.stage() == Stage::Result { clues.content_total } else { 0 }
                );
                prop_assert!(clues.contents.len() <= bound);
            }
        }
    }

    #[test]
    fn prop_stale_timeout_changes_nothing(
        actions in prop::collection::vec(action(), 0..30),
        offset in 1u64..5,
    ) {
        let mut s = GameSession::new(0);
        let mut next_id = 0;
        for a in &actions {
            step(&mut s, a, &mut next_id, 3);
        }
        let before = TrackerView::of(&s);
        let stale = s.timer_key().wrapping_sub(offset);

        prop_assert_eq!(s.timeout(stale), Ok(Outcome::Ignored));
        prop_assert_eq!(TrackerView::of(&s), before);
    }
}
