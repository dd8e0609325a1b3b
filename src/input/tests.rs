use super::*;

#[test]
fn first_sample_primes_without_an_edge() {
    let mut edge = EdgeDetector::new();
    assert_eq!(edge.update(false), None);
    assert_eq!(edge.update(true), Some(Edge::Rising));
    assert_eq!(edge.update(true), None);
    assert_eq!(edge.update(false), Some(Edge::Falling));
}

#[test]
fn touch_reports_each_press_once() {
    let mut touch = TouchSensor::new();
    assert!(!touch.poll(true));
    assert!(touch.poll(false));
    for _ in 0..50 {
        assert!(!touch.poll(false));
    }
    assert!(!touch.poll(true));
    assert!(touch.poll(false));
}

#[test]
fn touch_held_at_boot_is_not_a_press() {
    let mut touch = TouchSensor::new();
    assert!(!touch.poll(false));
    assert!(!touch.poll(false));
}

#[test]
fn joystick_samples_axes_only_on_press_edge() {
    let mut button = JoystickButton::new();
    let mut reads = 0;
    let mut sample = || {
        reads += 1;
        AxisSample::new(100, 2000)
    };

    assert_eq!(button.poll(true, &mut sample), None);
    assert_eq!(button.poll(false, &mut sample), None);
    assert!(button.is_held());
    for _ in 0..10 {
        assert_eq!(button.poll(false, &mut sample), None);
    }
    assert_eq!(button.poll(true, &mut sample), Some(AxisSample::new(100, 2000)));
    assert!(!button.is_held());
    assert_eq!(reads, 1);
}

#[test]
fn joystick_release_without_press_emits_nothing() {
    let mut button = JoystickButton::new();
    assert_eq!(button.poll(false, || AxisSample::new(1, 1)), None);
    assert_eq!(button.poll(true, || AxisSample::new(1, 1)), None);
}

#[test]
fn armed_ready_line_fires_even_if_busy_was_never_seen() {
    let mut line = DisplayReadyLine::new();
    assert!(!line.poll(false));
    line.arm();
    assert!(line.poll(false));
    assert!(!line.poll(false));
}

#[test]
fn ready_line_fires_once_after_busy_period() {
    let mut line = DisplayReadyLine::new();
    line.arm();
    assert!(!line.poll(true));
    assert!(!line.poll(true));
    assert!(line.poll(false));
    assert!(!line.poll(false));
}
