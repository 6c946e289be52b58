use super::*;
use crate::brute::BruteCollinearPoints;
use crate::rand::{grid_points, random_points, with_planted_line, Bounds, ReplayToken};

fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn sorted(mut segs: Vec<LineSegment>) -> Vec<LineSegment> {
    for s in segs.iter_mut() {
        *s = s.normalized();
    }
    segs.sort();
    segs
}

fn endpoints(d: &FastCollinearPoints) -> Vec<((i32, i32), (i32, i32))> {
    sorted(d.segments().to_vec())
        .into_iter()
        .map(|s| ((s.p().x, s.p().y), (s.q().x, s.q().y)))
        .collect()
}

#[test]
fn four_on_a_diagonal() {
    let d = FastCollinearPoints::new(&pts(&[(1, 1), (2, 2), (3, 3), (4, 4)])).unwrap();
    assert_eq!(d.number_of_segments(), 1);
    assert_eq!(endpoints(&d), vec![((1, 1), (4, 4))]);
}

#[test]
fn five_on_a_diagonal_is_one_segment() {
    let d = FastCollinearPoints::new(&pts(&[(3, 3), (5, 5), (1, 1), (4, 4), (2, 2)])).unwrap();
    assert_eq!(d.number_of_segments(), 1);
    assert_eq!(endpoints(&d), vec![((1, 1), (5, 5))]);
}

#[test]
fn vertical_run() {
    let d = FastCollinearPoints::new(&pts(&[(2, 1), (2, 2), (2, 3), (2, 4)])).unwrap();
    assert_eq!(endpoints(&d), vec![((2, 1), (2, 4))]);
    assert_eq!(d.segments()[0].to_string(), "(2, 1) -> (2, 4)");
}

#[test]
fn no_four_collinear_among_six() {
    let d = FastCollinearPoints::new(&pts(&[
        (0, 0),
        (3, 1),
        (1, 4),
        (7, 2),
        (5, 9),
        (2, 6),
    ]))
    .unwrap();
    assert_eq!(d.number_of_segments(), 0);
}

#[test]
fn duplicate_point_fails() {
    let err = FastCollinearPoints::new(&pts(&[(1, 1), (2, 2), (1, 1), (3, 3)])).unwrap_err();
    assert_eq!(
        err,
        CollinearError::DuplicatePoint {
            point: Point::new(1, 1)
        }
    );
}

#[test]
fn empty_and_null_inputs_fail() {
    assert_eq!(
        FastCollinearPoints::new(&[]).unwrap_err(),
        CollinearError::EmptyInput
    );
    assert_eq!(
        FastCollinearPoints::from_entries(&[]).unwrap_err(),
        CollinearError::EmptyInput
    );
    let entries = [Some(Point::new(0, 0)), Some(Point::new(1, 1)), None];
    assert_eq!(
        FastCollinearPoints::from_entries(&entries).unwrap_err(),
        CollinearError::NullElement { index: 2 }
    );
}

#[test]
fn invalid_cfg_fails() {
    let cfg = DetectCfg {
        eps_slope: f64::NAN,
    };
    let err = FastCollinearPoints::with_cfg(&pts(&[(0, 0)]), cfg).unwrap_err();
    assert!(matches!(err, CollinearError::InvalidConfig { .. }));
}

#[test]
fn caller_input_is_untouched_and_segments_repeat() {
    let input = pts(&[(4, 4), (0, 9), (1, 1), (3, 3), (9, 0), (2, 2)]);
    let before = input.clone();
    let d = FastCollinearPoints::new(&input).unwrap();
    assert_eq!(input, before);
    assert_eq!(d.segments(), d.segments());
    assert_eq!(d.number_of_segments(), d.number_of_segments());
}

#[test]
fn far_point_with_near_slope_stays_out_of_the_run() {
    // (30847, 10246) sorts just before the run by slope from (50, 60) and its
    // slope towards (56, 62) is within eps of the run's slope.
    let input = pts(&[(50, 60), (56, 62), (62, 64), (68, 66), (30847, 10246)]);
    let fast = FastCollinearPoints::new(&input).unwrap();
    assert_eq!(endpoints(&fast), vec![((50, 60), (68, 66))]);
    let brute = BruteCollinearPoints::new(&input).unwrap();
    assert_eq!(sorted(fast.into_segments()), sorted(brute.into_segments()));
}

#[test]
fn horizontal_and_vertical_crossing() {
    // Cross sharing (3, 3): row y=3 has 6 points, column x=3 has 5.
    let mut coords: Vec<(i32, i32)> = (0..6).map(|x| (x, 3)).collect();
    coords.extend([(3, 0), (3, 1), (3, 2), (3, 4)]);
    let d = FastCollinearPoints::new(&pts(&coords)).unwrap();
    assert_eq!(endpoints(&d), vec![((3, 0), (3, 4)), ((0, 3), (5, 3))]);
}

#[test]
fn negative_slope_run() {
    let d = FastCollinearPoints::new(&pts(&[(0, 6), (2, 4), (4, 2), (6, 0), (1, 1)])).unwrap();
    assert_eq!(endpoints(&d), vec![((6, 0), (0, 6))]);
}

#[test]
fn grid_rows_columns_and_diagonals() {
    let d = FastCollinearPoints::new(&grid_points(4, 1).unwrap()).unwrap();
    // 4 rows, 4 columns, 2 diagonals.
    assert_eq!(d.number_of_segments(), 10);
    let d = FastCollinearPoints::new(&grid_points(5, 10).unwrap()).unwrap();
    // 5 rows, 5 columns, 3 + 3 diagonals of length >= 4.
    assert_eq!(d.number_of_segments(), 16);
    let unique: std::collections::HashSet<_> = d.segments().iter().copied().collect();
    assert_eq!(unique.len(), 16);
}

#[test]
fn long_run_reports_extremes_only() {
    let base = random_points(40, Bounds::default(), ReplayToken { seed: 9, index: 0 }).unwrap();
    let planted = with_planted_line(&base, Point::new(100, 200), (7, 3), 12).unwrap();
    let d = FastCollinearPoints::new(&planted).unwrap();
    let extremes = LineSegment::new(Point::new(100, 200), Point::new(177, 233)).unwrap();
    assert!(d.segments().contains(&extremes));
    assert!(d
        .segments()
        .iter()
        .all(|s| s.p() != Point::new(107, 203) && s.p() != Point::new(114, 206)));
}

#[test]
fn agrees_with_brute_on_four_point_lines() {
    for index in 0..8 {
        let tok = ReplayToken { seed: 2024, index };
        let base = random_points(30, Bounds::default(), tok).unwrap();
        let step = (1 + index as i32, 2);
        let planted = with_planted_line(&base, Point::new(50, 60), step, 4).unwrap();
        let fast = FastCollinearPoints::new(&planted).unwrap();
        let brute = BruteCollinearPoints::new(&planted).unwrap();
        assert_eq!(
            sorted(fast.segments().to_vec()),
            sorted(brute.into_segments()),
            "token {tok:?}"
        );
        assert!(fast.number_of_segments() >= 1);
    }
}
