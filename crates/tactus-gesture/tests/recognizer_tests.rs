//! End-to-end recognizer scenarios driven by the input robot.

use std::cell::RefCell;
use std::rc::Rc;

use tactus_core::timer::shared_timer_queue;
use tactus_core::SharedTimerQueue;
use tactus_testing::InputRobot;

use tactus_gesture::config::GestureConfig;
use tactus_gesture::recognizer::{GestureHandlers, GestureRecognizer};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Gesture {
    SwipeLeft(f32),
    SwipeRight(f32),
    SwipeUp(f32),
    SwipeDown(f32),
    LongPress,
    DoubleTap,
}

type Recorded = Rc<RefCell<Vec<Gesture>>>;

fn recording_recognizer(timers: &SharedTimerQueue) -> (GestureRecognizer, Recorded) {
    let recorded: Recorded = Rc::new(RefCell::new(Vec::new()));

    let handlers = GestureHandlers::new()
        .on_swipe_left({
            let recorded = recorded.clone();
            move |d| recorded.borrow_mut().push(Gesture::SwipeLeft(d))
        })
        .on_swipe_right({
            let recorded = recorded.clone();
            move |d| recorded.borrow_mut().push(Gesture::SwipeRight(d))
        })
        .on_swipe_up({
            let recorded = recorded.clone();
            move |d| recorded.borrow_mut().push(Gesture::SwipeUp(d))
        })
        .on_swipe_down({
            let recorded = recorded.clone();
            move |d| recorded.borrow_mut().push(Gesture::SwipeDown(d))
        })
        .on_long_press({
            let recorded = recorded.clone();
            move || recorded.borrow_mut().push(Gesture::LongPress)
        })
        .on_double_tap({
            let recorded = recorded.clone();
            move || recorded.borrow_mut().push(Gesture::DoubleTap)
        });

    let recognizer = GestureRecognizer::new(timers.clone(), handlers, GestureConfig::default());
    (recognizer, recorded)
}

fn setup() -> (InputRobot, GestureRecognizer, Recorded) {
    let timers = shared_timer_queue();
    let (recognizer, recorded) = recording_recognizer(&timers);
    (InputRobot::new(timers), recognizer, recorded)
}

#[test]
fn horizontal_swipe_fires_once_with_dominant_distance() {
    let (mut robot, mut rec, recorded) = setup();

    robot.press(&mut rec, 100.0, 100.0);
    robot.advance_ms(80);
    robot.release(&mut rec, 200.0, 100.0);

    assert_eq!(&*recorded.borrow(), &[Gesture::SwipeRight(100.0)]);
}

#[test]
fn dominant_axis_decides_between_horizontal_and_vertical() {
    let (mut robot, mut rec, recorded) = setup();

    // |dx| = 60 beats |dy| = 40.
    robot.press(&mut rec, 100.0, 100.0);
    robot.advance_ms(80);
    robot.release(&mut rec, 160.0, 140.0);
    assert_eq!(&*recorded.borrow(), &[Gesture::SwipeRight(60.0)]);

    recorded.borrow_mut().clear();
    robot.advance_ms(1_000);

    // |dy| = 70 beats |dx| = 20; negative dy is upward.
    robot.press(&mut rec, 100.0, 100.0);
    robot.advance_ms(80);
    robot.release(&mut rec, 120.0, 30.0);
    assert_eq!(&*recorded.borrow(), &[Gesture::SwipeUp(70.0)]);
}

#[test]
fn leftward_and_downward_swipes() {
    let (mut robot, mut rec, recorded) = setup();

    robot.swipe(&mut rec, (200.0, 100.0), (80.0, 100.0), 100);
    robot.advance_ms(1_000);
    robot.swipe(&mut rec, (100.0, 100.0), (100.0, 220.0), 100);

    assert_eq!(
        &*recorded.borrow(),
        &[Gesture::SwipeLeft(120.0), Gesture::SwipeDown(120.0)]
    );
}

#[test]
fn sub_threshold_movement_is_an_unclassified_tap() {
    let (mut robot, mut rec, recorded) = setup();

    robot.press(&mut rec, 100.0, 100.0);
    robot.advance_ms(80);
    robot.release(&mut rec, 140.0, 100.0); // 40 px < 50 px threshold

    assert!(recorded.borrow().is_empty());
}

#[test]
fn long_press_fires_exactly_once_and_suppresses_release() {
    let (mut robot, mut rec, recorded) = setup();

    robot.press(&mut rec, 100.0, 100.0);
    robot.advance_ms(500);
    assert_eq!(&*recorded.borrow(), &[Gesture::LongPress]);

    // Release far from the start: swipe classification is suppressed
    // because the long-press already consumed this session.
    robot.release(&mut rec, 250.0, 100.0);
    assert_eq!(&*recorded.borrow(), &[Gesture::LongPress]);
}

#[test]
fn movement_past_jitter_threshold_voids_long_press_only() {
    let (mut robot, mut rec, recorded) = setup();

    robot.press(&mut rec, 100.0, 100.0);
    robot.advance_ms(100);
    robot.move_to(&mut rec, 115.0, 100.0); // 15 px > 10 px jitter
    robot.advance_ms(600);
    assert!(recorded.borrow().is_empty());

    // The same gesture can still end as a swipe.
    robot.release(&mut rec, 180.0, 100.0);
    assert_eq!(&*recorded.borrow(), &[Gesture::SwipeRight(80.0)]);
}

#[test]
fn movement_within_jitter_keeps_long_press_alive() {
    let (mut robot, mut rec, recorded) = setup();

    robot.press(&mut rec, 100.0, 100.0);
    robot.advance_ms(100);
    robot.move_to(&mut rec, 104.0, 103.0); // 5 px, inside the jitter threshold
    robot.advance_ms(400);

    assert_eq!(&*recorded.borrow(), &[Gesture::LongPress]);
}

#[test]
fn two_quick_taps_fire_double_tap_once() {
    let (mut robot, mut rec, recorded) = setup();

    robot.tap(&mut rec, 100.0, 100.0);
    robot.advance_ms(110);
    robot.tap(&mut rec, 100.0, 100.0);

    assert_eq!(&*recorded.borrow(), &[Gesture::DoubleTap]);
}

#[test]
fn double_tap_suppresses_swipe_classification_of_second_release() {
    let (mut robot, mut rec, recorded) = setup();

    robot.tap(&mut rec, 100.0, 100.0);
    robot.advance_ms(100);
    robot.press(&mut rec, 100.0, 100.0);
    robot.advance_ms(40);
    robot.release(&mut rec, 200.0, 100.0); // would be SwipeRight(100)

    assert_eq!(&*recorded.borrow(), &[Gesture::DoubleTap]);
}

#[test]
fn third_tap_does_not_chain_into_another_double_tap() {
    let (mut robot, mut rec, recorded) = setup();

    robot.tap(&mut rec, 100.0, 100.0);
    robot.advance_ms(100);
    robot.tap(&mut rec, 100.0, 100.0);
    robot.advance_ms(100);
    robot.tap(&mut rec, 100.0, 100.0);

    assert_eq!(&*recorded.borrow(), &[Gesture::DoubleTap]);
}

#[test]
fn taps_outside_the_window_stay_independent() {
    let (mut robot, mut rec, recorded) = setup();

    robot.tap(&mut rec, 100.0, 100.0);
    robot.advance_ms(400);
    robot.tap(&mut rec, 100.0, 100.0);

    assert!(recorded.borrow().is_empty());
}

#[test]
fn secondary_contacts_are_ignored() {
    let (mut robot, mut rec, recorded) = setup();

    robot.press(&mut rec, 100.0, 100.0);
    robot.advance_ms(30);

    // A second finger lands and swipes; the primary session is unaffected.
    robot.with_pointer_id(2);
    robot.press(&mut rec, 300.0, 300.0);
    robot.move_to(&mut rec, 400.0, 300.0);
    robot.release(&mut rec, 420.0, 300.0);
    assert!(recorded.borrow().is_empty());

    robot.with_pointer_id(1);
    robot.advance_ms(30);
    robot.release(&mut rec, 200.0, 100.0);
    assert_eq!(&*recorded.borrow(), &[Gesture::SwipeRight(100.0)]);
}

#[test]
fn cancel_clears_the_session_without_callbacks() {
    let (mut robot, mut rec, recorded) = setup();

    robot.press(&mut rec, 100.0, 100.0);
    robot.advance_ms(100);
    robot.cancel(&mut rec, 100.0, 100.0);
    assert!(!rec.has_active_session());

    robot.advance_ms(1_000);
    assert!(recorded.borrow().is_empty());
}

#[test]
fn detach_cancels_the_live_timer_and_ignores_further_events() {
    let (mut robot, mut rec, recorded) = setup();

    robot.press(&mut rec, 100.0, 100.0);
    rec.detach();
    assert!(!rec.is_attached());

    robot.advance_ms(1_000);
    robot.press(&mut rec, 100.0, 100.0);
    robot.advance_ms(1_000);
    assert!(recorded.borrow().is_empty());
}

#[test]
fn out_of_order_events_are_ignored_silently() {
    let (mut robot, mut rec, recorded) = setup();

    // Move and release with no session.
    robot.move_to(&mut rec, 100.0, 100.0);
    robot.release(&mut rec, 200.0, 100.0);
    assert!(recorded.borrow().is_empty());

    // A duplicate down does not restart the session.
    robot.press(&mut rec, 100.0, 100.0);
    robot.advance_ms(20);
    robot.press(&mut rec, 500.0, 500.0);
    robot.advance_ms(60);
    robot.release(&mut rec, 200.0, 100.0);
    assert_eq!(&*recorded.borrow(), &[Gesture::SwipeRight(100.0)]);
}

#[test]
fn custom_config_thresholds_are_honored() {
    let timers = shared_timer_queue();
    let recorded: Recorded = Rc::new(RefCell::new(Vec::new()));
    let handlers = GestureHandlers::new().on_swipe_right({
        let recorded = recorded.clone();
        move |d| recorded.borrow_mut().push(Gesture::SwipeRight(d))
    });
    let config = GestureConfig {
        swipe_threshold_px: 20.0,
        ..GestureConfig::default()
    };
    let mut rec = GestureRecognizer::new(timers.clone(), handlers, config);
    let mut robot = InputRobot::new(timers);

    robot.press(&mut rec, 100.0, 100.0);
    robot.advance_ms(50);
    robot.release(&mut rec, 125.0, 100.0);

    assert_eq!(&*recorded.borrow(), &[Gesture::SwipeRight(25.0)]);
}
