use crate::domain::fixtures::RoundFixture;
use crate::domain::stage::{next_stage, reached, stage_plan, Stage};

#[test]
fn full_round_visits_every_stage() {
    let round = RoundFixture::new(1, "Napoleon Bonaparte").build();
    assert_eq!(
        stage_plan(&round),
        vec![
            Stage::Stat,
            Stage::Content,
            Stage::Philosophy,
            Stage::Bio,
            Stage::Quotes,
            Stage::Choice,
            Stage::Result,
        ]
    );
}

#[test]
fn missing_bio_and_quotes_are_skipped() {
    let round = RoundFixture::new(1, "Napoleon Bonaparte")
        .without_bio()
        .without_quotes()
        .build();
    assert_eq!(
        stage_plan(&round),
        vec![
            Stage::Stat,
            Stage::Content,
            Stage::Philosophy,
            Stage::Choice,
            Stage::Result,
        ]
    );
}

#[test]
fn blank_text_and_empty_contents_are_skipped() {
    let round = RoundFixture::new(1, "Napoleon Bonaparte")
        .contents(0)
        .blank_quotes()
        .build();
    assert_eq!(
        stage_plan(&round),
        vec![
            Stage::Stat,
            Stage::Philosophy,
            Stage::Bio,
            Stage::Choice,
            Stage::Result,
        ]
    );
}

#[test]
fn next_stage_follows_plan() {
    let round = RoundFixture::new(1, "Napoleon Bonaparte")
        .contents(0)
        .without_philosophy()
        .build();
    assert_eq!(next_stage(&round, Stage::Stat), Stage::Bio);
    assert_eq!(next_stage(&round, Stage::Quotes), Stage::Choice);
    assert_eq!(next_stage(&round, Stage::Choice), Stage::Result);
    assert_eq!(next_stage(&round, Stage::Result), Stage::Result);
}

#[test]
fn reached_is_relative_to_current_stage() {
    let round = RoundFixture::new(1, "Napoleon Bonaparte").build();
    assert!(reached(&round, Stage::Bio, Stage::Philosophy));
    assert!(reached(&round, Stage::Bio, Stage::Bio));
    assert!(!reached(&round, Stage::Bio, Stage::Quotes));
    assert!(reached(&round, Stage::Result, Stage::Quotes));
}

#[test]
fn points_descend_through_the_stages() {
    let points: Vec<u32> = Stage::REVEAL
        .iter()
        .chain(std::iter::once(&Stage::Choice))
        .map(|s| s.points())
        .collect();
    assert_eq!(points, vec![6, 5, 4, 3, 2, 1]);
    assert_eq!(Stage::Idle.points(), 0);
    assert_eq!(Stage::Result.points(), 0);
}
