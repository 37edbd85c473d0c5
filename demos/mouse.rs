//! A mouse that accepts events through the machine's priority queue.
//!
//! While it runs it keeps scheduling itself ahead of everything else in the
//! queue, until its breath runs out and it has to relax.
//!
//! Run with: `cargo run --example mouse`

use ministate::{
    routes, Context, Outcome, Priority, Signal, SignalRegistry, State, StateMachine,
    StateMachineBuilder,
};

struct Body {
    position: f64,
    speed: f64,
    breath: i32,
}

struct Idle;

impl State<Body> for Idle {
    fn name(&self) -> &str {
        "Idle"
    }

    fn process(&mut self, cx: &mut Context<'_, Body>) -> Outcome {
        // A break helps to recover breath.
        cx.model.breath = (cx.model.breath + 2).min(10);
        println!("taking a break, breath back to {}", cx.model.breath);
        Outcome::stay()
    }
}

struct Running;

impl State<Body> for Running {
    fn name(&self) -> &str {
        "Running"
    }

    fn process(&mut self, cx: &mut Context<'_, Body>) -> Outcome {
        let body = &mut *cx.model;
        body.speed = f64::from(body.breath) / 10.0;
        body.position += body.speed;
        body.breath -= 1;
        println!(
            "mouse at {:.1}, speed {:.1}, breath {}",
            body.position, body.speed, body.breath
        );

        // Keep running while there is breath left; the high priority puts
        // the follow-up ahead of everything already queued.
        let next = if body.breath <= 0 {
            println!("need to breathe!");
            Signal::new("relax")
        } else {
            Signal::new("start")
        };
        Outcome::stay().emit(next, Priority::High)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut registry = SignalRegistry::new();
    registry.register(["start", "relax"]);

    let mut mouse: StateMachine<Body> = StateMachineBuilder::new(Body {
        position: 0.0,
        speed: 1.0,
        breath: 10,
    })
    .state(Idle)
    .state(Running)
    .table(routes! {
        "Idle": {
            "start" => "Running",
            "relax" => "Idle",
        },
        "Running": {
            "start" => "Running",
            "relax" => "Idle",
        },
    })
    .initial("Idle")
    .build()
    .expect("mouse machine is well formed");

    for name in "relax,start,start,start,relax".split(',') {
        mouse.enqueue(registry[name].clone(), Priority::Normal);
    }

    let ticks = mouse.run();

    println!(
        "done after {ticks} ticks in state {:?}, position {:.1}",
        mouse.current_state(),
        mouse.model().position
    );
    println!("visited: {}", mouse.log().path().join(" -> "));
}
