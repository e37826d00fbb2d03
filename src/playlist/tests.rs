use super::Playlist;
use crate::library::Track;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn t(title: &str) -> Track {
    Track {
        path: std::path::PathBuf::new(),
        title: title.into(),
        artist: None,
        album: None,
        duration: None,
        display: title.into(),
    }
}

fn playlist(titles: &[&str]) -> Playlist {
    let mut p = Playlist::new();
    for title in titles {
        p.push(t(title));
    }
    p
}

#[test]
fn navigation_on_empty_playlist_is_a_no_op() {
    let mut p = Playlist::new();
    assert!(p.is_empty());
    assert!(p.next(true).is_none());
    assert!(p.next(false).is_none());
    assert!(p.previous().is_none());
    assert!(p.current().is_none());
    assert_eq!(p.current_index(), 0);
}

#[test]
fn next_wraps_from_last_to_first() {
    let mut p = playlist(&["A", "B", "C"]);
    p.set_current(2);
    assert_eq!(p.next(true).unwrap().title, "A");
    assert_eq!(p.current_index(), 0);
}

#[test]
fn next_without_wrap_stays_at_last() {
    let mut p = playlist(&["A", "B", "C"]);
    p.set_current(2);
    assert_eq!(p.next(false).unwrap().title, "C");
    assert_eq!(p.current_index(), 2);
}

#[test]
fn previous_wraps_from_first_to_last() {
    let mut p = playlist(&["A", "B", "C"]);
    assert_eq!(p.previous().unwrap().title, "C");
    assert_eq!(p.current_index(), 2);
}

#[test]
fn full_cycle_of_next_returns_to_the_start() {
    for start in 0..3 {
        let mut p = playlist(&["A", "B", "C"]);
        p.set_current(start);
        for _ in 0..p.len() {
            p.next(true);
        }
        assert_eq!(p.current_index(), start);
    }
}

#[test]
fn previous_is_the_inverse_of_next_with_wrap() {
    for start in 0..4 {
        let mut p = playlist(&["A", "B", "C", "D"]);
        p.set_current(start);
        p.next(true);
        p.previous();
        assert_eq!(p.current_index(), start);
    }
}

#[test]
fn set_current_ignores_out_of_range_indices() {
    let mut p = playlist(&["A", "B"]);
    p.set_current(1);
    p.set_current(5);
    assert_eq!(p.current_index(), 1);
}

#[test]
fn shuffle_preserves_the_multiset_of_tracks() {
    let mut p = playlist(&["A", "B", "B", "C"]);
    let mut rng = StdRng::seed_from_u64(42);
    p.shuffle_with(&mut rng);

    let mut titles: Vec<String> = p.tracks().iter().map(|t| t.title.clone()).collect();
    titles.sort();
    assert_eq!(titles, vec!["A", "B", "B", "C"]);
    assert_eq!(p.len(), 4);
}

#[test]
fn shuffle_does_not_move_the_cursor_position() {
    let mut p = playlist(&["A", "B", "C"]);
    p.set_current(1);
    let mut rng = StdRng::seed_from_u64(7);
    p.shuffle_with(&mut rng);
    // The index stays; the track at that index may differ.
    assert_eq!(p.current_index(), 1);
}

#[test]
fn shuffle_is_roughly_uniform_over_positions() {
    // Count how often "A" lands in each position over many shuffles; each
    // of the 3 positions should get about a third of the trials.
    let trials = 6000;
    let mut counts = [0usize; 3];
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..trials {
        let mut p = playlist(&["A", "B", "C"]);
        p.shuffle_with(&mut rng);
        let pos = p.tracks().iter().position(|t| t.title == "A").unwrap();
        counts[pos] += 1;
    }

    let expected = trials / 3;
    for &c in &counts {
        assert!(
            c > expected * 85 / 100 && c < expected * 115 / 100,
            "position counts too skewed: {counts:?}"
        );
    }
}

#[test]
fn remove_before_cursor_keeps_the_same_track_current() {
    let mut p = playlist(&["A", "B", "C"]);
    p.set_current(2);
    let removed = p.remove_at(0).unwrap();
    assert_eq!(removed.title, "A");
    assert_eq!(p.current_index(), 1);
    assert_eq!(p.current().unwrap().title, "C");
}

#[test]
fn remove_at_cursor_moves_to_the_following_track() {
    let mut p = playlist(&["A", "B", "C"]);
    p.set_current(1);
    p.remove_at(1);
    assert_eq!(p.current_index(), 1);
    assert_eq!(p.current().unwrap().title, "C");
}

#[test]
fn remove_last_at_cursor_clamps_to_new_last() {
    let mut p = playlist(&["A", "B", "C"]);
    p.set_current(2);
    p.remove_at(2);
    assert_eq!(p.current_index(), 1);
    assert_eq!(p.current().unwrap().title, "B");
}

#[test]
fn remove_after_cursor_leaves_it_untouched() {
    let mut p = playlist(&["A", "B", "C"]);
    p.set_current(0);
    p.remove_at(2);
    assert_eq!(p.current_index(), 0);
    assert_eq!(p.current().unwrap().title, "A");
}

#[test]
fn removing_everything_resets_the_cursor() {
    let mut p = playlist(&["A", "B"]);
    p.set_current(1);
    p.remove_at(0);
    p.remove_at(0);
    assert!(p.is_empty());
    assert_eq!(p.current_index(), 0);
    assert!(p.remove_at(0).is_none());
}
