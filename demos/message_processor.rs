//! A message processor driven step by step from the host.
//!
//! Run with: `cargo run --example message_processor`

use ministate::{
    Context, Outcome, Signal, SignalRegistry, State, StateMachine, StateMachineBuilder,
};
use serde_json::json;

#[derive(Default)]
struct Inbox {
    processed: usize,
}

struct Idle;

impl State<Inbox> for Idle {
    fn name(&self) -> &str {
        "Idle"
    }

    fn process(&mut self, cx: &mut Context<'_, Inbox>) -> Outcome {
        println!("Idle state processing event: {}", cx.signal());
        Outcome::goto(cx.route())
    }
}

struct Processing;

impl State<Inbox> for Processing {
    fn name(&self) -> &str {
        "Processing"
    }

    fn process(&mut self, cx: &mut Context<'_, Inbox>) -> Outcome {
        println!("Processing state processing event: {}", cx.signal());
        if cx.signal().name() == "message_received" {
            if let Some(body) = cx.signal().payload().and_then(|p| p.as_str()) {
                println!("Processing message: {body}");
                cx.model.processed += 1;
            }
            return Outcome::stay();
        }
        Outcome::goto(cx.route())
    }
}

fn main() {
    let mut registry = SignalRegistry::new();
    registry.register(["start_processing", "message_received", "stop_processing"]);

    let mut processor: StateMachine<Inbox> = StateMachineBuilder::new(Inbox::default())
        .state(Idle)
        .state(Processing)
        .route("Idle", "start_processing", "Processing")
        .route("Processing", "stop_processing", "Idle")
        .initial("Idle")
        .build()
        .expect("processor machine is well formed");

    processor.process(&registry["start_processing"]);
    processor.process(&Signal::with_payload(
        "message_received",
        json!("Hello, World!"),
    ));
    processor.process(&Signal::with_payload(
        "message_received",
        json!("Another message"),
    ));
    processor.process(&registry["stop_processing"]);

    println!(
        "processed {} messages, back in {:?}",
        processor.model().processed,
        processor.current_state()
    );
}
