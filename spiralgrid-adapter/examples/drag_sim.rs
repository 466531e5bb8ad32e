use spiralgrid::GridOptions;
use spiralgrid_adapter::{Controller, collect_placements};

fn main() {
    // Example: a windowing adapter driving the grid without holding any UI
    // objects.
    //
    // An adapter would:
    // - forward pointer/wheel/resize events as they arrive
    // - call tick(now_ms) in a frame loop while wants_tick() holds
    // - apply the returned offset to the rendered container
    // - draw the visible cells at their placements
    let mut c = Controller::new(GridOptions::new(100.0));
    c.on_viewport_size(800.0, 600.0, 0);

    c.on_pointer_down(400.0, 300.0, 0);
    c.on_pointer_move(460.0, 300.0, 16);
    c.on_pointer_move(520.0, 300.0, 32);
    c.on_pointer_up(40);

    let mut now_ms = 40u64;
    while c.wants_tick() {
        now_ms += 16;
        if let Some(offset) = c.tick(now_ms) {
            if now_ms % 80 == 0 {
                println!("t={now_ms} offset=({:.1}, {:.1})", offset.x, offset.y);
            }
        }
    }

    let mut placements = Vec::new();
    collect_placements(c.engine(), &mut placements);
    placements.sort_by(|a, b| a.index.cmp(&b.index));
    println!(
        "done: offset={:?} visible={} first={:?}",
        c.engine().offset(),
        placements.len(),
        placements.first()
    );
}
