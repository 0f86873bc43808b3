use eframe_sketch::{
    CanvasSize, CaptureContext, FORMAT_VERSION, Intent, IntentAction, Point, Session,
};

fn context_with_strokes() -> CaptureContext {
    let mut context = CaptureContext::default();
    context.set_session_id("session_test");
    context.set_user_id("user_42");
    context.set_canvas_size(CanvasSize::new(400.0, 800.0));
    context.set_intent(Intent::new(IntentAction::Highlight).with_text("look here"));

    context.start_stroke(Point::new(0.1, 0.1, 0.0).with_pressure(0.5));
    context.extend_stroke(Point::new(0.3, 0.2, 16.0).with_pressure(0.6));
    context.extend_stroke(Point::new(0.5, 0.4, 32.0));
    context.end_stroke();

    context.start_stroke(Point::new(0.7, 0.7, 100.0));
    context.end_stroke();
    context
}

#[test]
fn test_session_data_reflects_context() {
    let context = context_with_strokes();
    let session = context.session_data();

    assert_eq!(session.session_id, "session_test");
    assert_eq!(session.user_id, "user_42");
    assert_eq!(session.canvas_size, CanvasSize::new(400.0, 800.0));
    assert_eq!(session.strokes.len(), 2);
    assert_eq!(session.intent.action, IntentAction::Highlight);
    assert_eq!(session.format_version, FORMAT_VERSION);
    assert_eq!(session.start_time, context.start_time());
    assert_eq!(session.point_count(), 4);
}

#[test]
fn test_session_data_excludes_open_stroke_and_does_not_mutate() {
    let mut context = context_with_strokes();
    context.start_stroke(Point::new(0.9, 0.9, 200.0));

    let first = context.session_data();
    let second = context.session_data();
    assert_eq!(first, second);
    assert_eq!(first.strokes.len(), 2);
    assert!(context.is_drawing());
}

#[test]
fn test_json_shape_uses_wire_names() {
    let session = context_with_strokes().session_data();
    let value: serde_json::Value = serde_json::from_str(&session.to_json().unwrap()).unwrap();

    for key in ["sessionId", "userId", "canvasSize", "strokes", "intent", "startTime", "version"] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(value["version"], "1.0.0");
    assert_eq!(value["canvasSize"]["w"], 400.0);

    let stroke = &value["strokes"][0];
    for key in ["strokeId", "tool", "points", "startTime", "endTime", "style"] {
        assert!(stroke.get(key).is_some(), "missing stroke key {key}");
    }
    assert_eq!(stroke["tool"], "pen");
    assert_eq!(stroke["style"]["color"], "#000000");
    assert_eq!(stroke["points"][0]["pressure"], 0.5);
    // Absent pressure is omitted, not null
    assert!(stroke["points"][2].get("pressure").is_none());

    assert_eq!(value["intent"]["action"], "highlight");
    assert_eq!(value["intent"]["text"], "look here");
    assert!(value["intent"].get("metadata").is_none());
}

#[test]
fn test_json_round_trip_is_exact() {
    let session = context_with_strokes().session_data();
    let restored = Session::from_json(&session.to_json().unwrap()).unwrap();
    assert_eq!(restored, session);
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let session = context_with_strokes().session_data();
    session.save_to(&path).unwrap();
    assert_eq!(Session::load_from(&path).unwrap(), session);
}

#[test]
fn test_other_versions_are_still_readable() {
    let json = r##"{
        "sessionId": "s",
        "userId": "",
        "canvasSize": { "w": 100, "h": 100 },
        "strokes": [],
        "intent": { "action": "none" },
        "startTime": 0,
        "version": "0.9.0"
    }"##;
    let session = Session::from_json(json).unwrap();
    assert_eq!(session.format_version, "0.9.0");
    assert_eq!(session.canvas_size, CanvasSize::new(100.0, 100.0));
}

#[test]
fn test_out_of_range_points_are_clamped_on_load() {
    let json = r##"{
        "sessionId": "s",
        "userId": "",
        "canvasSize": { "w": 100, "h": 100 },
        "strokes": [{
            "strokeId": "stroke_1",
            "tool": "pen",
            "points": [{ "x": 5.0, "y": -3.0, "t": 0 }, { "x": 0.5, "y": 0.25, "t": 8 }],
            "startTime": 0,
            "endTime": 8,
            "style": { "color": "#000000", "width": 3, "opacity": 1 }
        }],
        "intent": { "action": "none" },
        "startTime": 0,
        "version": "1.0.0"
    }"##;
    let session = Session::from_json(json).unwrap();
    let points = session.strokes[0].points();
    assert_eq!((points[0].x, points[0].y), (1.0, 0.0));
    assert_eq!((points[1].x, points[1].y), (0.5, 0.25));
}

#[test]
fn test_malformed_json_is_an_error() {
    assert!(Session::from_json("{ not json").is_err());
    assert!(Session::load_from("/definitely/not/here.json").is_err());
}
