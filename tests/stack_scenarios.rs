//! End-to-end gesture scenarios against a three-card stack.

use swipecards::prelude::*;

fn three_cards() -> CardStack {
    CardStack::new(
        vec![
            Card::new(1, 1, "one.jpg"),
            Card::new(2, 2, "two.jpg"),
            Card::new(3, 3, "three.jpg"),
        ],
        StackParams::default(),
    )
}

/// Press, drag in a few samples, release. Moves the card if the release says so.
/// Returns how many times the send-to-back path fired.
fn swipe(stack: &mut CardStack, motion: &mut CardMotion, id: CardId, dx: f32, dy: f32) -> u32 {
    let params = SwipeParams::default();
    let mut fired = 0;

    motion.press(Point::new(100.0, 100.0), &params);
    for t in [0.25f32, 0.5, 0.75, 1.0] {
        motion.drag_to(Point::new(100.0 + dx * t, 100.0 + dy * t), &params);
    }
    if motion.release(&params) == Some(ReleaseOutcome::SendToBack) {
        fired += 1;
        stack.move_to_back(id);
        motion.reenter_rest();
    }
    fired
}

fn settle(motion: &mut CardMotion) {
    let params = SwipeParams::default();
    for _ in 0..1000 {
        if motion.advance(1.0 / 60.0, &params) {
            return;
        }
    }
    panic!("card never came to rest");
}

#[test]
fn initial_order_matches_input() {
    let stack = three_cards();
    assert_eq!(stack.order().ids(), vec![1, 2, 3]);
    assert_eq!(stack.front_id(), Some(3));
}

#[test]
fn far_horizontal_swipe_sends_front_card_to_back() {
    let mut stack = three_cards();
    let mut motion = CardMotion::new();
    assert_eq!(swipe(&mut stack, &mut motion, 3, 200.0, 0.0), 1);
    assert_eq!(stack.order().ids(), vec![3, 1, 2]);

    settle(&mut motion);
    assert_eq!(motion.offset(), Point::ZERO);
    assert_eq!(motion.phase(), DragPhase::Resting);
}

#[test]
fn short_swipe_leaves_order_and_resets_offset() {
    let mut stack = three_cards();
    let mut motion = CardMotion::new();
    assert_eq!(swipe(&mut stack, &mut motion, 3, 50.0, 50.0), 0);
    assert_eq!(stack.order().ids(), vec![1, 2, 3]);

    settle(&mut motion);
    assert_eq!(motion.offset(), Point::ZERO);
}

#[test]
fn vertical_swipe_alone_is_enough() {
    let mut stack = three_cards();
    let mut motion = CardMotion::new();
    assert_eq!(swipe(&mut stack, &mut motion, 3, 0.0, -151.0), 1);
    assert_eq!(stack.order().ids(), vec![3, 1, 2]);
}

#[test]
fn cycling_the_whole_stack_returns_to_start() {
    let mut stack = three_cards();
    for _ in 0..3 {
        let id = stack.front_id().expect("front");
        let mut motion = CardMotion::new();
        assert_eq!(swipe(&mut stack, &mut motion, id, -300.0, 20.0), 1);
    }
    assert_eq!(stack.order().ids(), vec![1, 2, 3]);
}

#[test]
fn moving_the_back_card_again_is_idempotent() {
    let mut stack = three_cards();
    stack.move_to_back(3);
    let once = stack.order().ids();
    stack.move_to_back(3);
    assert_eq!(stack.order().ids(), once);
}

#[test]
fn unknown_id_does_not_mutate() {
    let mut stack = three_cards();
    assert!(!stack.move_to_back(99));
    assert_eq!(stack.order().ids(), vec![1, 2, 3]);
    assert_eq!(stack.len(), 3);
}

#[test]
fn depth_index_is_not_recomputed() {
    let mut stack = three_cards();
    stack.move_to_back(3);
    let zs: Vec<i32> = stack.layers().iter().map(|(_, l)| l.z_index).collect();
    assert_eq!(zs, vec![3, 1, 2]);

    let rot: Vec<f32> = stack.layers().iter().map(|(_, l)| l.rotate_z_deg).collect();
    assert_eq!(rot, vec![14.0, 7.0, 0.0]);
}

#[test]
fn deck_file_drives_the_same_stack() {
    let deck = Deck::from_json_str(
        r#"[{"id":1,"z":1,"img":"one.jpg"},{"id":2,"z":2,"img":"two.jpg"},{"id":3,"z":3,"img":"three.jpg"}]"#,
    )
    .expect("deck");
    let mut stack = deck.into_stack();
    let mut motion = CardMotion::new();
    swipe(&mut stack, &mut motion, 3, 200.0, 0.0);
    assert_eq!(stack.order().ids(), vec![3, 1, 2]);
}
