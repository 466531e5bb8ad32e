// Example: a scripted drag release, then coasting to rest in a frame loop.
use spiralgrid::{GridEngine, GridOptions, Vec2, Viewport};

fn main() {
    let mut engine = GridEngine::new(
        GridOptions::new(100.0).with_initial_viewport(Some(Viewport::new(800.0, 600.0))),
    );

    // Flick: three pointer samples, then release.
    engine.pointer_down(Vec2::ZERO, 0);
    engine.pointer_move(Vec2::new(40.0, 10.0), 16);
    engine.pointer_move(Vec2::new(80.0, 20.0), 32);
    engine.pointer_up(40);
    println!("released at {:?} velocity {:?}", engine.offset(), engine.velocity());

    let mut now_ms = 40u64;
    while engine.wants_tick() {
        now_ms += 16;
        engine.tick(now_ms);
        if now_ms % 80 == 0 {
            println!(
                "t={now_ms} offset={:?} moving={} visible={}",
                engine.offset(),
                engine.is_moving(),
                engine.visible_len()
            );
        }
    }

    println!("at rest: {:?} after {now_ms} ms", engine.rest_position());
}
