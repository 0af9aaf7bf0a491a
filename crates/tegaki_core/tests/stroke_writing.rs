use tegaki_core::{InvalidStateError, Point, Stroke, Writing};

fn timed(x: f64, y: f64, timestamp: i64) -> Point {
    Point::new(x, y).with_timestamp(timestamp)
}

fn two_stroke_writing() -> Writing {
    let mut writing = Writing::new();
    writing.move_to_point(timed(0.0, 0.0, 100));
    writing.line_to_point(timed(5.0, 0.0, 120)).unwrap();
    writing.line_to_point(timed(10.0, 0.0, 140)).unwrap();
    writing.move_to_point(timed(5.0, -5.0, 300));
    writing.line_to_point(timed(5.0, 5.0, 360)).unwrap();
    writing
}

#[test]
fn stroke_duration_uses_endpoint_timestamps() {
    let stroke = Stroke::from(vec![
        timed(0.0, 0.0, 100),
        timed(1.0, 0.0, 100),
        timed(2.0, 0.0, 250),
    ]);

    assert_eq!(stroke.duration(), Some(150));
}

#[test]
fn stroke_without_timestamps_has_no_duration() {
    let stroke = Stroke::from(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);

    assert_eq!(stroke.duration(), None);
}

#[test]
fn append_point_preserves_insertion_order() {
    let mut stroke = Stroke::new();
    stroke.append_point(Point::new(3.0, 0.0));
    stroke.append_point(Point::new(1.0, 0.0));
    stroke.append_point(Point::new(2.0, 0.0));

    let xs = stroke.points().iter().map(|point| point.x).collect::<Vec<_>>();
    assert_eq!(xs, vec![3.0, 1.0, 2.0]);
    assert_eq!(stroke.last_point().unwrap().x, 2.0);
}

#[test]
fn points_mut_edits_the_live_stroke() {
    let mut stroke = Stroke::from(vec![Point::new(0.0, 0.0)]);

    stroke.points_mut()[0].pressure = Some(0.5);
    stroke.points_mut().push(Point::new(1.0, 1.0));

    assert_eq!(stroke.point_count(), 2);
    assert_eq!(stroke.points()[0].pressure, Some(0.5));
}

#[test]
fn line_to_point_on_empty_writing_fails() {
    let mut writing = Writing::new();

    let err = writing.line_to_point(Point::new(1.0, 1.0)).unwrap_err();

    assert_eq!(
        err,
        InvalidStateError::NoStrokes {
            operation: "line_to_point"
        }
    );
    assert_eq!(writing.stroke_count(), 0);
}

#[test]
fn last_stroke_on_empty_writing_fails() {
    let err = Writing::new().last_stroke().unwrap_err();
    assert!(matches!(err, InvalidStateError::NoStrokes { .. }));
}

#[test]
fn remove_last_stroke_on_empty_writing_is_noop() {
    let mut writing = Writing::new();

    assert_eq!(writing.remove_last_stroke(), None);
    assert_eq!(writing.stroke_count(), 0);
}

#[test]
fn remove_last_stroke_undoes_latest_pen_cycle() {
    let mut writing = two_stroke_writing();

    let removed = writing.remove_last_stroke().unwrap();

    assert_eq!(removed.point_count(), 2);
    assert_eq!(writing.stroke_count(), 1);
    assert_eq!(writing.last_stroke().unwrap().point_count(), 3);
}

#[test]
fn clear_resets_to_empty() {
    let mut writing = two_stroke_writing();

    writing.clear();

    assert_eq!(writing.stroke_count(), 0);
    assert_eq!(writing.duration(), None);
    writing.move_to_point(Point::new(0.0, 0.0));
    assert_eq!(writing.stroke_count(), 1);
}

#[test]
fn writing_duration_spans_whole_drawing() {
    assert_eq!(two_stroke_writing().duration(), Some(260));
}

#[test]
fn writing_duration_absent_when_an_endpoint_is_untimed() {
    let mut writing = two_stroke_writing();
    writing.line_to_point(Point::new(9.0, 9.0)).unwrap();

    assert_eq!(writing.duration(), None);
}

#[test]
fn writing_duration_absent_when_last_stroke_is_empty() {
    let mut writing = two_stroke_writing();
    writing.append_stroke(Stroke::new());

    assert_eq!(writing.duration(), None);
}

#[test]
fn replace_from_is_independent_of_source() {
    let mut source = two_stroke_writing();
    let mut copy = Writing::new();
    copy.replace_from(source.strokes());
    let snapshot = copy.clone();

    source.strokes_mut()[0].points_mut()[0].x = 42.0;
    source.line_to_point(Point::new(0.0, 0.0)).unwrap();
    source.move_to_point(Point::new(0.0, 0.0));

    assert_eq!(copy, snapshot);
    assert_eq!(copy.stroke_count(), 2);
    assert_eq!(copy.strokes()[0].points()[0].x, 0.0);
    assert_ne!(
        copy.strokes()[0].points().as_ptr(),
        source.strokes()[0].points().as_ptr()
    );
}

#[test]
fn replace_from_discards_previous_strokes() {
    let mut target = two_stroke_writing();
    let mut source = Writing::new();
    source.move_to_point(Point::new(7.0, 7.0));

    target.replace_from(source.strokes());

    assert_eq!(target, source);
}

#[test]
fn writing_export_nests_strokes_in_order() {
    let mut writing = Writing::new();
    writing.move_to_point(Point::new(1.0, 1.0));
    writing.line_to_point(Point::new(2.0, 2.0)).unwrap();
    writing.line_to_point(Point::new(3.0, 3.0)).unwrap();
    writing.move_to_point(Point::new(4.0, 4.0));
    writing.line_to_point(Point::new(5.0, 5.0)).unwrap();

    let expected = [
        "<strokes>",
        "  <stroke>",
        r#"    <point x="1" y="1" />"#,
        r#"    <point x="2" y="2" />"#,
        r#"    <point x="3" y="3" />"#,
        "  </stroke>",
        "  <stroke>",
        r#"    <point x="4" y="4" />"#,
        r#"    <point x="5" y="5" />"#,
        "  </stroke>",
        "</strokes>",
    ]
    .join("\n");

    let xml = writing.to_xml();
    assert_eq!(xml, expected);
    assert_eq!(xml.matches("<stroke>").count(), 2);
    assert_eq!(xml.matches("<point ").count(), 5);
}

#[test]
fn duration_is_absent_when_difference_overflows() {
    let stroke = Stroke::from(vec![timed(0.0, 0.0, i64::MIN), timed(1.0, 1.0, i64::MAX)]);
    assert_eq!(stroke.duration(), None);

    let mut writing = Writing::new();
    writing.move_to_point(timed(0.0, 0.0, i64::MIN));
    writing.move_to_point(timed(1.0, 1.0, i64::MAX));
    assert_eq!(writing.duration(), None);

    let reversed = Stroke::from(vec![timed(0.0, 0.0, i64::MAX), timed(1.0, 1.0, i64::MIN)]);
    assert_eq!(reversed.duration(), None);

    let full_range = Stroke::from(vec![timed(0.0, 0.0, 0), timed(1.0, 1.0, i64::MAX)]);
    assert_eq!(full_range.duration(), Some(i64::MAX));
}
