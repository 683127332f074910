//! Headless driver for a swipe-card deck.
//!
//! Loads a deck file and replays scripted gestures against it, printing the
//! resulting order. Useful for checking a deck's parameters without a browser.
//!
//! Examples:
//!   swipecards-cli deck.json
//!   swipecards-cli deck.json drag 3 200 0 order
//!   swipecards-cli deck.json back 1 layers
//!
//! Set `RUST_LOG=swipecards=debug` to trace releases and reorders.

use std::process;

use swipecards::prelude::*;
use swipecards::spring::MAX_SETTLE_FRAMES;
use tracing_subscriber::EnvFilter;

/// Pointer samples per scripted drag.
const DRAG_STEPS: u32 = 8;

/// Frame delta used when settling springs.
const FRAME_DT: f32 = 1.0 / 60.0;

fn usage() -> ! {
    eprintln!("Usage: swipecards-cli <deck.json> [command ...]");
    eprintln!();
    eprintln!("Commands (run in order):");
    eprintln!("  drag <id> <dx> <dy>   Drag the front card by (dx, dy) and release");
    eprintln!("  back <id>             Move a card to the back directly");
    eprintln!("  order                 Print card ids, back to front");
    eprintln!("  layers                Print each card's layer pose");
    eprintln!();
    eprintln!("With no commands, prints order and layers.");
    process::exit(2);
}

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args[0] == "-h" || args[0] == "--help" {
        usage();
    }
    let path = args.remove(0);
    if args.is_empty() {
        args = vec!["order".to_string(), "layers".to_string()];
    }
    (path, args)
}

fn parse_num<T: std::str::FromStr>(args: &[String], i: usize, what: &str) -> T {
    let Some(raw) = args.get(i) else {
        eprintln!("missing {what}");
        usage();
    };
    raw.parse().unwrap_or_else(|_| {
        eprintln!("{what} must be a number, got '{raw}'");
        usage();
    })
}

fn print_order(stack: &CardStack) {
    let ids: Vec<String> = stack.order().ids().iter().map(|id| id.to_string()).collect();
    println!("order (back -> front): [{}]", ids.join(", "));
}

fn print_layers(stack: &CardStack) {
    for (pos, (card, layer)) in stack.layers().into_iter().enumerate() {
        println!(
            "  #{pos} id={:<4} z={:<4} rotateZ={:>6.1}deg scale={:.2} img={}",
            card.id, layer.z_index, layer.rotate_z_deg, layer.scale, card.img
        );
    }
}

/// Drive one gesture through `CardMotion` the same way the pointer handlers do.
fn scripted_drag(stack: &mut CardStack, params: &SwipeParams, id: CardId, dx: f32, dy: f32) {
    if stack.front_id() != Some(id) {
        println!("drag {id}: not the front card; ignored");
        return;
    }

    let mut motion = CardMotion::new();
    motion.press(Point::ZERO, params);
    for step in 1..=DRAG_STEPS {
        let t = step as f32 / DRAG_STEPS as f32;
        motion.drag_to(Point::new(dx * t, dy * t), params);
    }

    let peak = CardVisual::from_motion(&motion, params);
    match motion.release(params) {
        Some(ReleaseOutcome::SendToBack) => {
            stack.move_to_back(id);
            motion.reenter_rest();
            println!(
                "drag {id} by ({dx}, {dy}): swiped to back (tilt x={:.1} y={:.1}, shadow {})",
                peak.tilt.rotate_x,
                peak.tilt.rotate_y,
                peak.shadow.css()
            );
        }
        Some(ReleaseOutcome::SnapBack) => {
            println!("drag {id} by ({dx}, {dy}): snapped back");
        }
        None => {}
    }

    let mut frames = 0u32;
    while !motion.advance(FRAME_DT, params) {
        frames += 1;
        if frames >= MAX_SETTLE_FRAMES {
            println!("  still moving after {frames} frames; check the spring damping");
            return;
        }
    }
    let rest = motion.offset();
    println!("  settled at ({}, {}) after {frames} frames", rest.x, rest.y);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (path, args) = parse_args();

    let deck = match Deck::from_path(&path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    let swipe = deck.swipe.clone();
    let mut stack = deck.into_stack();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "drag" => {
                let id: CardId = parse_num(&args, i + 1, "id");
                let dx: f32 = parse_num(&args, i + 2, "dx");
                let dy: f32 = parse_num(&args, i + 3, "dy");
                scripted_drag(&mut stack, &swipe, id, dx, dy);
                i += 4;
            }
            "back" => {
                let id: CardId = parse_num(&args, i + 1, "id");
                if !stack.move_to_back(id) {
                    println!("back {id}: no such card");
                }
                i += 2;
            }
            "order" => {
                print_order(&stack);
                i += 1;
            }
            "layers" => {
                print_layers(&stack);
                i += 1;
            }
            other => {
                eprintln!("unknown command '{other}'");
                usage();
            }
        }
    }
}
