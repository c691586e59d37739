use crate::domain::errors::GameError;
use crate::domain::fixtures::RoundFixture;
use crate::domain::round::Round;
use crate::domain::session::{GameSession, Outcome, RoundEnding};
use crate::domain::stage::Stage;

const NAME: &str = "Napoleon Bonaparte";

fn started(round: Round) -> GameSession {
    let mut s = GameSession::new(0);
    let ticket = s.begin_start().unwrap();
    assert_eq!(
        s.finish_loading(&ticket, Some(round)),
        Outcome::RoundStarted { stage: Stage::Stat }
    );
    s
}

fn full_round() -> Round {
    RoundFixture::new(7, NAME).build()
}

#[test]
fn start_moves_idle_to_stat_through_loading() {
    let mut s = GameSession::new(3);
    let ticket = s.begin_start().unwrap();
    assert_eq!(s.stage(), Stage::Loading);
    assert!(ticket.excluded_ids.is_empty());

    s.finish_loading(&ticket, Some(full_round()));
    assert_eq!(s.stage(), Stage::Stat);
    assert_eq!(s.played_ids(), &[7]);
    assert_eq!(s.high_score(), 3);
}

#[test]
fn start_while_loading_is_rejected() {
    let mut s = GameSession::new(0);
    s.begin_start().unwrap();
    assert_eq!(s.begin_start(), Err(GameError::RoundLoading));
}

#[test]
fn empty_fetch_returns_to_idle() {
    let mut s = GameSession::new(0);
    let ticket = s.begin_start().unwrap();
    assert_eq!(s.finish_loading(&ticket, None), Outcome::NoRoundAvailable);
    assert_eq!(s.stage(), Stage::Idle);
}

#[test]
fn failed_fetch_returns_to_idle() {
    let mut s = GameSession::new(0);
    let ticket = s.begin_start().unwrap();
    s.abort_loading(&ticket);
    assert_eq!(s.stage(), Stage::Idle);
}

#[test]
fn load_that_lost_race_with_quit_is_dropped() {
    let mut s = GameSession::new(0);
    let stale = s.begin_start().unwrap();
    s.quit();
    let fresh = s.begin_start().unwrap();

    assert_eq!(s.finish_loading(&stale, Some(full_round())), Outcome::Ignored);
    assert_eq!(s.stage(), Stage::Loading);
    s.finish_loading(&fresh, Some(full_round()));
    assert_eq!(s.stage(), Stage::Stat);
}

#[test]
fn correct_guess_at_stat_scores_six_and_freezes() {
    let mut s = started(full_round());
    let key = s.timer_key();

    let outcome = s.submit_guess("napoleon").unwrap();
    assert_eq!(
        outcome,
        Outcome::Correct {
            stage: Stage::Stat,
            points: 6
        }
    );
    assert_eq!(s.score(), 6);
    assert_eq!(s.streak(), 1);
    assert_eq!(s.high_score(), 6);
    assert_eq!(s.stage(), Stage::Stat);
    assert_eq!(s.solved_at(), Some(Stage::Stat));
    assert!(s.timer_key() > key);

    assert_eq!(
        s.submit_guess("napoleon"),
        Err(GameError::AlreadySolved(Stage::Stat))
    );
    assert_eq!(s.pass(), Err(GameError::AlreadySolved(Stage::Stat)));
}

#[test]
fn wrong_guess_is_silent_and_keeps_stage() {
    let mut s = started(full_round());
    let key = s.timer_key();

    let outcome = s.submit_guess("Caesar").unwrap();
    assert_eq!(
        outcome,
        Outcome::Wrong {
            stage: Stage::Stat,
            wrong_signal: 1
        }
    );
    assert_eq!(s.stage(), Stage::Stat);
    assert_eq!(s.score(), 0);
    assert_eq!(s.timer_key(), key);
}

#[test]
fn content_miss_reveals_next_item_up_to_count() {
    let mut s = started(RoundFixture::new(7, NAME).contents(2).build());
    s.pass().unwrap();
    assert_eq!(s.stage(), Stage::Content);
    assert_eq!(s.revealed_contents(), 1);

    let key = s.timer_key();
    s.submit_guess("wrong").unwrap();
    assert_eq!(s.revealed_contents(), 2);
    assert!(s.timer_key() > key);

    let key = s.timer_key();
    s.submit_guess("still wrong").unwrap();
    assert_eq!(s.revealed_contents(), 2);
    assert_eq!(s.timer_key(), key);
}

#[test]
fn pass_on_content_reveals_remaining_before_advancing() {
    let mut s = started(RoundFixture::new(7, NAME).contents(3).build());
    s.pass().unwrap();
    assert_eq!(s.pass().unwrap(), Outcome::ContentRevealed { revealed: 2 });
    assert_eq!(s.pass().unwrap(), Outcome::ContentRevealed { revealed: 3 });
    assert_eq!(
        s.pass().unwrap(),
        Outcome::Advanced {
            stage: Stage::Philosophy
        }
    );
}

#[test]
fn pass_at_choice_gives_up() {
    let mut s = started(
        RoundFixture::new(7, NAME)
            .contents(0)
            .without_philosophy()
            .without_bio()
            .without_quotes()
            .build(),
    );
    s.submit_guess("x").unwrap();
    assert_eq!(s.stage(), Stage::Stat);
    s.pass().unwrap();
    assert_eq!(s.stage(), Stage::Choice);

    assert_eq!(s.pass().unwrap(), Outcome::GaveUp { answer_id: 7 });
    assert_eq!(s.stage(), Stage::Result);
    assert_eq!(s.streak(), 0);
    assert_eq!(s.last_result().map(|r| r.ending), Some(RoundEnding::GaveUp));
}

#[test]
fn pass_at_choice_breaks_a_running_streak() {
    let mut s = started(full_round());
    s.submit_guess("napoleon").unwrap();
    s.go_to_result().unwrap();
    assert_eq!(s.streak(), 1);
    assert_eq!(s.score(), 6);

    let ticket = s.begin_next().unwrap();
    let short = RoundFixture::new(8, "Joan of Arc")
        .contents(0)
        .without_philosophy()
        .without_bio()
        .without_quotes()
        .build();
    s.finish_loading(&ticket, Some(short));
    s.pass().unwrap();
    assert_eq!(s.stage(), Stage::Choice);
    assert_eq!(s.streak(), 1);

    assert_eq!(s.pass().unwrap(), Outcome::GaveUp { answer_id: 8 });
    assert_eq!(s.streak(), 0);
    assert_eq!(s.score(), 6);
    assert_eq!(s.high_score(), 6);
}

#[test]
fn timeout_at_choice_breaks_a_running_streak() {
    let mut s = started(full_round());
    s.submit_guess("bonaparte").unwrap();
    s.go_to_result().unwrap();

    let ticket = s.begin_next().unwrap();
    s.finish_loading(
        &ticket,
        Some(
            RoundFixture::new(8, "Joan of Arc")
                .contents(0)
                .without_philosophy()
                .without_bio()
                .without_quotes()
                .build(),
        ),
    );
    s.pass().unwrap();
    assert_eq!(s.streak(), 1);

    let key = s.timer_key();
    assert_eq!(s.timeout(key).unwrap(), Outcome::GaveUp { answer_id: 8 });
    assert_eq!(s.streak(), 0);
    assert_eq!(s.stage(), Stage::Result);
}

#[test]
fn choose_correct_awards_one_point() {
    let mut s = started(RoundFixture::new(7, NAME).contents(0).build());
    while s.stage() != Stage::Choice {
        s.pass().unwrap();
    }
    assert_eq!(
        s.choose_option(7).unwrap(),
        Outcome::Chose {
            correct: true,
            points: 1,
            answer_id: 7
        }
    );
    assert_eq!(s.score(), 1);
    assert_eq!(s.streak(), 1);
    assert_eq!(s.stage(), Stage::Result);
}

#[test]
fn choose_wrong_resets_streak_but_keeps_score() {
    let mut s = started(full_round());
    s.submit_guess("Bonaparte").unwrap();
    s.go_to_result().unwrap();
    let ticket = s.begin_next().unwrap();
    s.finish_loading(&ticket, Some(RoundFixture::new(8, "Joan of Arc").build()));
    while s.stage() != Stage::Choice {
        s.pass().unwrap();
    }
    assert_eq!(s.streak(), 1);

    let outcome = s.choose_option(108).unwrap();
    assert_eq!(
        outcome,
        Outcome::Chose {
            correct: false,
            points: 0,
            answer_id: 8
        }
    );
    assert_eq!(s.streak(), 0);
    assert_eq!(s.score(), 6);
}

#[test]
fn choose_rejects_foreign_candidate_and_wrong_stage() {
    let mut s = started(full_round());
    assert!(matches!(
        s.choose_option(7),
        Err(GameError::InvalidStage { .. })
    ));
    while s.stage() != Stage::Choice {
        s.pass().unwrap();
    }
    assert_eq!(s.choose_option(999), Err(GameError::UnknownCandidate(999)));
    assert_eq!(s.stage(), Stage::Choice);
}

#[test]
fn go_to_result_requires_a_solve() {
    let mut s = started(full_round());
    assert_eq!(s.go_to_result(), Err(GameError::NotSolved));
    s.submit_guess(NAME).unwrap();
    assert_eq!(s.go_to_result().unwrap(), Outcome::ShowingResult);
    assert_eq!(s.stage(), Stage::Result);
}

#[test]
fn next_excludes_played_and_carries_score() {
    let mut s = started(full_round());
    s.submit_guess(NAME).unwrap();
    s.go_to_result().unwrap();

    let ticket = s.begin_next().unwrap();
    assert_eq!(ticket.excluded_ids, vec![7]);
    s.finish_loading(&ticket, Some(RoundFixture::new(8, "Joan of Arc").build()));

    assert_eq!(s.stage(), Stage::Stat);
    assert_eq!(s.score(), 6);
    assert_eq!(s.streak(), 1);
    assert_eq!(s.solved_at(), None);
    assert!(s.last_result().is_none());
    assert_eq!(s.played_ids(), &[7, 8]);
}

#[test]
fn next_only_from_result() {
    let mut s = started(full_round());
    assert!(matches!(
        s.begin_next(),
        Err(GameError::InvalidStage {
            stage: Stage::Stat,
            ..
        })
    ));
}

#[test]
fn quit_resets_run_but_keeps_high_score() {
    let mut s = started(full_round());
    s.submit_guess(NAME).unwrap();
    assert_eq!(s.quit(), Outcome::Quit);

    assert_eq!(s.stage(), Stage::Idle);
    assert_eq!(s.score(), 0);
    assert_eq!(s.streak(), 0);
    assert!(s.played_ids().is_empty());
    assert_eq!(s.high_score(), 6);
}

#[test]
fn stale_timeout_is_a_no_op() {
    let mut s = started(full_round());
    let stale = s.timer_key();
    s.pass().unwrap();
    let before = s.clone();

    assert_eq!(s.timeout(stale).unwrap(), Outcome::Ignored);
    assert_eq!(s.stage(), before.stage());
    assert_eq!(s.timer_key(), before.timer_key());
}

#[test]
fn current_timeout_acts_as_pass() {
    let mut s = started(full_round());
    let key = s.timer_key();
    assert_eq!(
        s.timeout(key).unwrap(),
        Outcome::Advanced {
            stage: Stage::Content
        }
    );
}

#[test]
fn timeout_at_choice_resets_streak() {
    let mut s = started(full_round());
    s.submit_guess(NAME).unwrap();
    s.go_to_result().unwrap();
    let t = s.begin_next().unwrap();
    s.finish_loading(&t, Some(RoundFixture::new(8, "Joan of Arc").build()));
    while s.stage() != Stage::Choice {
        s.pass().unwrap();
    }
    assert_eq!(s.streak(), 1);

    let key = s.timer_key();
    assert_eq!(s.timeout(key).unwrap(), Outcome::GaveUp { answer_id: 8 });
    assert_eq!(s.streak(), 0);
    assert_eq!(s.score(), 6);
    assert_eq!(s.stage(), Stage::Result);
}

#[test]
fn timeout_after_solve_is_ignored() {
    let mut s = started(full_round());
    s.submit_guess(NAME).unwrap();
    let key = s.timer_key();
    assert_eq!(s.timeout(key).unwrap(), Outcome::Ignored);
    assert_eq!(s.stage(), Stage::Stat);
}

#[test]
fn guess_outside_reveal_stages_is_rejected() {
    let mut s = GameSession::new(0);
    assert_eq!(
        s.submit_guess(NAME),
        Err(GameError::InvalidStage {
            action: "guess",
            stage: Stage::Idle
        })
    );
    assert!(matches!(s.pass(), Err(GameError::InvalidStage { .. })));
}
