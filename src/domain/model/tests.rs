// Unit tests for domain models

use super::*;

#[test]
fn test_timestamp_display() {
    assert_eq!(Timestamp::from_secs(0).to_string(), "00:00:00");
    assert_eq!(Timestamp::from_secs(3661).to_string(), "01:01:01");
}

#[test]
fn test_timestamp_parse() {
    assert_eq!(Timestamp::parse("00:02:00").unwrap().as_secs(), 120);
    assert_eq!("01:00:00".parse::<Timestamp>().unwrap().as_secs(), 3600);
    assert!(Timestamp::parse("2:00").is_err());
}

#[test]
fn test_timestamp_from_float_truncates() {
    assert_eq!(Timestamp::from_secs_f64(120.0).unwrap().to_string(), "00:02:00");
    assert_eq!(Timestamp::from_secs_f64(59.999).unwrap().as_secs(), 59);
    assert!(Timestamp::from_secs_f64(-1.0).is_none());
    assert!(Timestamp::from_secs_f64(f64::NAN).is_none());
    assert!(Timestamp::from_secs_f64(f64::INFINITY).is_none());
}

#[test]
fn test_timestamp_checked_sub() {
    let total = Timestamp::from_secs(60);
    assert_eq!(total.checked_sub(Timestamp::from_secs(15)), Some(Timestamp::from_secs(45)));
    assert_eq!(total.checked_sub(Timestamp::from_secs(61)), None);
}

#[test]
fn test_end_anchored_range_parse() {
    let range = EndAnchoredRange::parse("00:10:00", "00:05:00").unwrap();
    assert_eq!(range.start_offset.as_secs(), 600);
    assert_eq!(range.end_offset.as_secs(), 300);

    match EndAnchoredRange::parse("00:10:00", "5:00") {
        Err(MediaKitError::InvalidTimeFormat { time }) => assert_eq!(time, "5:00"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_clip_window_duration() {
    let window = ClipWindow::new(Timestamp::from_secs(3000), Timestamp::from_secs(3300)).unwrap();
    assert_eq!(window.duration().to_string(), "00:05:00");
    assert_eq!(window.to_string(), "00:50:00 to 00:55:00");
}

#[test]
fn test_clip_window_rejects_empty_and_reversed() {
    let t = Timestamp::from_secs(10);
    assert!(ClipWindow::new(t, t).is_err());
    assert!(ClipWindow::new(Timestamp::from_secs(11), t).is_err());
}

#[test]
fn test_encoder_mode_from_probe() {
    assert_eq!(EncoderMode::from_gpu_available(true), EncoderMode::Hardware);
    assert_eq!(EncoderMode::from_gpu_available(false), EncoderMode::Software);
    assert_eq!(EncoderMode::Hardware.label(), "GPU");
}

#[test]
fn test_execution_state_terminal() {
    assert!(!ExecutionState::NotStarted.is_terminal());
    assert!(!ExecutionState::Running.is_terminal());
    assert!(ExecutionState::Succeeded.is_terminal());
    assert!(ExecutionState::Failed.is_terminal());
}
