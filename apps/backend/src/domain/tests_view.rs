use crate::domain::fixtures::RoundFixture;
use crate::domain::session::GameSession;
use crate::domain::stage::Stage;
use crate::domain::tracker_view::TrackerView;

fn in_stat() -> GameSession {
    let mut s = GameSession::new(0);
    let t = s.begin_start().unwrap();
    s.finish_loading(&t, Some(RoundFixture::new(7, "Napoleon Bonaparte").build()));
    s
}

#[test]
fn idle_view_is_empty() {
    let view = TrackerView::of(&GameSession::new(12));
    assert_eq!(view.stage, Stage::Idle);
    assert_eq!(view.high_score, 12);
    assert!(view.clues.is_none());
    assert!(view.plan.is_empty());
    assert_eq!(view.stage_points, 0);
}

#[test]
fn stat_view_shows_only_stats() {
    let view = TrackerView::of(&in_stat());
    let clues = view.clues.unwrap();
    assert_eq!(clues.stats.len(), 2);
    assert!(clues.contents.is_empty());
    assert_eq!(clues.content_total, 3);
    assert!(clues.philosophy.is_none());
    assert!(clues.bio.is_none());
    assert!(view.candidates.is_none());
    assert!(view.answer.is_none());
    assert_eq!(view.stage_points, 6);
}

#[test]
fn later_stages_unlock_earlier_clues() {
    let mut s = in_stat();
    s.pass().unwrap(); // content
    s.pass().unwrap();
    s.pass().unwrap();
    s.pass().unwrap(); // philosophy
    s.pass().unwrap(); // bio
    assert_eq!(s.stage(), Stage::Bio);

    let clues = TrackerView::of(&s).clues.unwrap();
    assert_eq!(clues.contents.len(), 3);
    assert!(clues.philosophy.is_some());
    assert!(clues.bio.is_some());
    assert!(clues.quotes.is_none());
}

#[test]
fn solve_reveals_answer_but_not_candidates() {
    let mut s = in_stat();
    s.submit_guess("bonaparte").unwrap();
    let view = TrackerView::of(&s);
    assert_eq!(view.answer.map(|a| a.id), Some(7));
    assert!(view.candidates.is_none());
    assert_eq!(view.stage_points, 0);
}

#[test]
fn choice_shows_candidates_without_answer() {
    let mut s = in_stat();
    while s.stage() != Stage::Choice {
        s.pass().unwrap();
    }
    let view = TrackerView::of(&s);
    assert_eq!(view.candidates.map(|c| c.len()), Some(3));
    assert!(view.answer.is_none());
    assert_eq!(view.stage_points, 1);
}

#[test]
fn result_reveals_everything() {
    let mut s = in_stat();
    while s.stage() != Stage::Choice {
        s.pass().unwrap();
    }
    s.pass().unwrap();
    let view = TrackerView::of(&s);
    assert_eq!(view.stage, Stage::Result);
    assert_eq!(view.answer.map(|a| a.name), Some("Napoleon Bonaparte".to_string()));
    assert!(view.last_result.is_some());
}

#[test]
fn snapshot_serializes_stage_in_snake_case() {
    let json = serde_json::to_value(TrackerView::of(&in_stat())).unwrap();
    assert_eq!(json["stage"], "stat");
    assert_eq!(json["plan"][1], "content");
    assert!(json["answer"].is_null());
}
