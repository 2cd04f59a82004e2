use pretty_assertions::assert_eq;
use std::fs;
use waystations_core::{
    devlog::{write_session_markdown, SessionLog},
    place_all,
    projection::{flatten, flatten_word, is_solved, word_view},
    search, AnchorIndex, CrosswordGrid, Grid, PlacementConfig, PlacementObserver, PlacementStatus, Point, PuzzleError,
    TileData, WordPath,
};

fn grid(rows: &[&str]) -> CrosswordGrid<'static> {
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap();
    let cells = rows
        .iter()
        .flat_map(|r| {
            let mut row: Vec<_> = r.chars().map(|c| if c == ' ' { TileData::NoWords } else { TileData::Fixed(c) }).collect();
            row.resize(width, TileData::NoWords);
            row
        })
        .collect();
    Grid::from_cells(width, rows.len(), cells).unwrap()
}

fn paths(g: &CrosswordGrid<'_>, words: &[&str]) -> Vec<WordPath> {
    let anchors = AnchorIndex::build(g).unwrap();
    words
        .iter()
        .map(|w| {
            let (start, end) = anchors.endpoints(w).unwrap();
            WordPath { word: w.to_string(), start, end }
        })
        .collect()
}

#[test]
fn set_and_replace_reject_exactly_the_out_of_range_points() {
    let mut g = Grid::new(3, 2, 0u8);
    for y in -1..=2 {
        for x in -1..=3 {
            let p = Point::new(x, y);
            let inside = (0..3).contains(&x) && (0..2).contains(&y);
            assert_eq!(g.replace(p, 7).is_ok(), inside, "replace at {p}");
            let res = g.set(p, 1);
            assert_eq!(res.is_ok(), inside, "set at {p}");
            if !inside {
                assert_eq!(res, Err(PuzzleError::OutOfBounds { point: p, width: 3, height: 2 }));
            }
        }
    }
}

#[test]
fn replace_leaves_the_receiver_untouched() {
    let g = Grid::new(2, 2, 'a');
    let p = Point::new(1, 0);
    let copy = g.replace(p, 'z').unwrap();
    assert_eq!(g.get(p), Some('a'));
    assert_eq!(copy.get(p), Some('z'));
    assert_eq!(copy.get(Point::new(0, 0)), Some('a'));
}

#[test]
fn non_square_grids_index_by_row_width() {
    let g = Grid::from_cells(3, 2, "abcdef".chars().collect()).unwrap();
    assert_eq!(g.get(Point::new(2, 0)), Some('c'));
    assert_eq!(g.get(Point::new(0, 1)), Some('d'));
    assert_eq!(g.get(Point::new(3, 0)), None);
    assert_eq!(g.to_string(), "abc\ndef");
    assert_eq!(Grid::from_cells(2, 2, vec![1, 2, 3]), Err(PuzzleError::ShapeMismatch { expected: 4, actual: 3 }));
}

#[test]
fn neighbors_stay_inside_the_grid() {
    let g = Grid::new(3, 3, ());
    let corner: Vec<_> = g.neighbors(Point::new(0, 0)).collect();
    assert_eq!(corner, vec![Point::new(1, 0), Point::new(0, 1)]);
    assert_eq!(g.neighbors(Point::new(1, 1)).count(), 4);
    assert_eq!(g.neighbors(Point::new(2, 1)).count(), 3);
    assert_eq!(Point::new(0, 0).dist(Point::new(2, 2)), 4);
}

#[test]
fn tile_transitions_follow_the_claim_table() {
    let empty = TileData::NoWords;
    let one = empty.try_claim('b', "abc").unwrap();
    assert_eq!(one, TileData::OneWord('b', "abc"));
    assert_eq!(one.try_claim('b', "abc"), None, "a word cannot cross itself");
    assert_eq!(one.try_claim('x', "xbx"), None, "letters must agree");
    let two = one.try_claim('b', "obo").unwrap();
    assert_eq!(two, TileData::TwoWords('b', "abc", "obo"));
    assert_eq!(two.try_claim('b', "ebe"), None);
    assert_eq!(TileData::Fixed('a').try_claim('a', "abc"), None);
}

#[test]
fn full_and_fixed_tiles_never_change() {
    for word in ["a", "bb", "abc"] {
        for letter in ['a', 'b', 'z'] {
            assert_eq!(TileData::TwoWords('b', "x", "y").try_claim(letter, word), None);
            assert_eq!(TileData::Fixed('b').try_claim(letter, word), None);
        }
    }
}

#[test]
fn display_chars_distinguish_anchors() {
    assert_eq!(TileData::Fixed('a').display_char(), 'A');
    assert_eq!(TileData::OneWord('b', "abc").display_char(), 'b');
    assert_eq!(TileData::TwoWords('b', "abc", "obo").display_char(), 'b');
    assert_eq!(TileData::NoWords.display_char(), ' ');
}

#[test]
fn anchor_index_rejects_duplicates() {
    let err = AnchorIndex::build(&grid(&["a b", "  A"])).unwrap_err();
    assert_eq!(err, PuzzleError::DuplicateAnchor { letter: 'a', first: Point::new(0, 0), second: Point::new(2, 1) });
}

#[test]
fn anchor_index_resolves_endpoints() {
    let anchors = AnchorIndex::build(&grid(&["a  d", "  q "])).unwrap();
    assert_eq!(anchors.len(), 3);
    assert_eq!(anchors.endpoints("AbcD"), Ok((Point::new(0, 0), Point::new(3, 0))));
    assert_eq!(anchors.endpoints("dxq"), Ok((Point::new(3, 0), Point::new(2, 1))));
    assert_eq!(anchors.endpoints("abz"), Err(PuzzleError::MissingAnchor { word: "abz".into(), letter: 'z' }));
    assert_eq!(anchors.endpoints("a"), Err(PuzzleError::WordTooShort { word: "a".into() }));
}

#[test]
fn straight_line_has_exactly_one_placement() {
    let g = grid(&["a  d"]);
    let results = search(&g, "abcd", Point::new(0, 0), Point::new(3, 0));
    assert_eq!(results.len(), 1);
    let cells: Vec<_> = results[0].cells().to_vec();
    assert_eq!(
        cells,
        vec![TileData::Fixed('a'), TileData::OneWord('b', "abcd"), TileData::OneWord('c', "abcd"), TileData::Fixed('d')]
    );
}

#[test]
fn words_shorter_than_the_distance_are_pruned() {
    let g = grid(&["a  ", "   ", "  c"]);
    assert!(search(&g, "abc", Point::new(0, 0), Point::new(2, 2)).is_empty());
    assert!(search(&g, "abbc", Point::new(0, 0), Point::new(2, 2)).is_empty());
}

#[test]
fn every_shortest_route_is_enumerated() {
    let g = grid(&["a  ", "   ", "  c"]);
    let results = search(&g, "abxyc", Point::new(0, 0), Point::new(2, 2));
    assert_eq!(results.len(), 6);
    for r in &results {
        assert_eq!(r.get(Point::new(0, 0)), Some(TileData::Fixed('a')));
        assert_eq!(r.get(Point::new(2, 2)), Some(TileData::Fixed('c')));
        assert_eq!(r.cells().iter().filter(|t| t.has_word("abxyc")).count(), 3);
    }
}

#[test]
fn middle_letter_lands_between_adjacent_anchors() {
    let g = grid(&["a c", "   ", "   "]);
    let results = search(&g, "abc", Point::new(0, 0), Point::new(2, 0));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].get(Point::new(1, 0)), Some(TileData::OneWord('b', "abc")));
}

#[test]
fn full_cells_block_the_only_route() {
    let g = grid(&["a c", "   ", "   "]).replace(Point::new(1, 0), TileData::TwoWords('b', "x", "y")).unwrap();
    assert!(search(&g, "abc", Point::new(0, 0), Point::new(2, 0)).is_empty());
}

#[test]
fn paths_do_not_double_back_through_themselves_or_anchors() {
    let g = grid(&["a c"]);
    assert!(search(&g, "abbbc", Point::new(0, 0), Point::new(2, 0)).is_empty());
}

#[test]
fn crossing_words_share_a_tile() {
    let g = grid(&[" c ", "a b", " d "]);
    let words = paths(&g, &["axb", "cxd"]);
    let placement = place_all(g.clone(), &words, PlacementConfig::default(), &mut ());
    assert!(placement.is_complete());
    assert_eq!(placement.candidates.len(), 1);
    assert_eq!(placement.candidates[0].get(Point::new(1, 1)), Some(TileData::TwoWords('x', "axb", "cxd")));
}

#[test]
fn placement_order_decides_which_word_fails() {
    let g = grid(&[" c ", "a b", " d "]);

    let forward = paths(&g, &["axb", "cyd"]);
    let first = place_all(g.clone(), &forward, PlacementConfig::default(), &mut ());
    assert_eq!(first.failed_word(), Some("cyd"));
    assert_eq!(first.candidates[0].get(Point::new(1, 1)), Some(TileData::OneWord('x', "axb")));

    let reversed = paths(&g, &["cyd", "axb"]);
    let second = place_all(g.clone(), &reversed, PlacementConfig::default(), &mut ());
    assert_eq!(second.failed_word(), Some("axb"));
    assert_eq!(second.candidates[0].get(Point::new(1, 1)), Some(TileData::OneWord('y', "cyd")));
}

#[test]
fn failure_keeps_survivors_and_skips_later_words() {
    let g = grid(&[" c ", "a b", " d "]);
    let words = paths(&g, &["axb", "cyd", "axb"]);
    let placement = place_all(g.clone(), &words, PlacementConfig { growth_warning: Some(0) }, &mut ());
    let statuses: Vec<_> = placement.outcomes.iter().map(|o| o.status).collect();
    assert_eq!(
        statuses,
        vec![PlacementStatus::Placed { candidates: 1 }, PlacementStatus::Failed, PlacementStatus::NotAttempted]
    );
    assert_eq!(placement.candidates.len(), 1);
    assert!(!placement.is_complete());
}

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl PlacementObserver for Recorder {
    fn word_started(&mut self, word: &str, grids: usize) { self.events.push(format!("start {word} {grids}")); }
    fn word_placed(&mut self, word: &str, candidates: &[CrosswordGrid<'_>]) {
        self.events.push(format!("placed {word} {}", candidates.len()));
    }
    fn word_failed(&mut self, word: &str, survivors: &[CrosswordGrid<'_>]) {
        self.events.push(format!("failed {word} {}", survivors.len()));
    }
}

#[test]
fn observer_sees_candidate_growth() {
    let g = grid(&["a  ", "   ", "  c"]);
    let words = paths(&g, &["abxyc", "aqqqqqqc"]);
    let mut rec = Recorder::default();
    let placement = place_all(g.clone(), &words, PlacementConfig::default(), &mut rec);
    assert_eq!(rec.events, vec!["start abxyc 1", "placed abxyc 6", "start aqqqqqqc 6", "failed aqqqqqqc 6"]);
    assert_eq!(placement.failed_word(), Some("aqqqqqqc"));
}

#[test]
fn flatten_blanks_cells_where_candidates_disagree() {
    let g = grid(&["a  ", "   ", "  c"]);
    let results = search(&g, "abxyc", Point::new(0, 0), Point::new(2, 2));
    let flat = flatten(&results).unwrap();
    assert_eq!(flat.to_string(), "A  \n   \n  C");
    assert_eq!(flatten(&[]), None);

    let single = flatten(&results[..1]).unwrap();
    assert_eq!(single.cells().iter().filter(|c| c.is_ascii_lowercase()).count(), 3);
}

#[test]
fn word_view_keeps_only_that_words_cells() {
    let g = grid(&[" c ", "a b", " d "]);
    let words = paths(&g, &["axb", "cxd"]);
    let placement = place_all(g.clone(), &words, PlacementConfig::default(), &mut ());
    let view = word_view(&placement.candidates[0], "zzz");
    assert_eq!(view.get(Point::new(1, 1)), Some(TileData::NoWords));
    assert_eq!(view.get(Point::new(1, 0)), Some(TileData::Fixed('c')));
    let only = flatten_word(&placement.candidates, "axb").unwrap();
    assert_eq!(only.to_string(), " C \nAxB\n D ");
}

#[test]
fn two_words_over_every_free_cell_solve_the_puzzle() {
    let g = grid(&["a b"]);
    let words = paths(&g, &["axb", "bxa"]);
    let placement = place_all(g.clone(), &words, PlacementConfig::default(), &mut ());
    assert!(placement.is_complete());
    assert!(is_solved(&placement.candidates[0]));
    assert!(!is_solved(&g));
}

#[test]
fn get_clones_non_copy_cells() {
    let g = Grid::new(2, 1, String::from("x")).replace(Point::new(1, 0), String::from("yz")).unwrap();
    assert_eq!(g.get(Point::new(1, 0)), Some(String::from("yz")));
    assert_eq!(g.get(Point::new(2, 0)), None);
}

#[test]
fn extreme_coordinates_neither_overflow_nor_match() {
    let far = Point::new(i32::MAX, 0);
    assert_eq!(far.offset(1, 0), far);
    assert_eq!(Point::new(i32::MIN, 0).offset(-1, 0), Point::new(i32::MIN, 0));
    assert_eq!(Point::new(i32::MIN, i32::MIN).dist(Point::new(i32::MAX, i32::MAX)), (u32::MAX as usize).saturating_mul(2));

    let g = grid(&["a z"]);
    assert!(search(&g, "amz", Point::new(i32::MIN, 0), far).is_empty());
    assert!(search(&g, "amz", Point::new(0, 0), Point::new(0, i32::MAX)).is_empty());
    assert_eq!(g.neighbors(Point::new(i32::MAX, i32::MAX)).count(), 0);
}

#[test]
fn session_report_lists_outcomes_and_word_views() {
    let g = grid(&[" c ", "a b", " d "]);
    let words = paths(&g, &["axb", "cyd"]);
    let placement = place_all(g.clone(), &words, PlacementConfig::default(), &mut ());
    let session = SessionLog::from_placement("Cross", &words, &placement);
    assert_eq!((session.width, session.height, session.candidates), (3, 3, 1));
    assert_eq!(session.flattened.as_deref(), Some(" C \nAxB\n D "));

    let dir = std::env::temp_dir().join("waystations_session_report_test");
    let _ = fs::remove_dir_all(&dir);
    let path = write_session_markdown(&dir, &session).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("# Cross\nGrid: 3x3\nCandidates: 1\n"));
    assert!(text.contains("## Words"));
    assert!(text.contains("- `axb` (0,1) -> (2,1): placed (1 grids)"));
    assert!(text.contains("- `cyd` (1,0) -> (1,2): FAILED"));
    assert!(text.contains("## Flattened\n\n```\n C \nAxB\n D \n```"));
    assert!(text.contains("### Showing only \"axb\""));
    assert!(text.contains("### Showing only \"cyd\""));

    let again = write_session_markdown(&dir, &session).unwrap();
    assert_ne!(again, path, "a second report must not replace the first");
    assert_eq!(fs::read_to_string(&path).unwrap(), text);
}

#[test]
fn session_log_survives_json() {
    let g = grid(&[" c ", "a b", " d "]);
    let words = paths(&g, &["axb", "cxd"]);
    let placement = place_all(g.clone(), &words, PlacementConfig::default(), &mut ());
    let session = SessionLog::from_placement("Cross", &words, &placement);
    let json = session.to_json().unwrap();
    assert!(json.contains("\"Placed\""));
    let back: SessionLog = serde_json::from_str(&json).unwrap();
    assert_eq!(back, session);
}
