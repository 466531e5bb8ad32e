// Example: minimal usage — viewport in, visible cells out.
use spiralgrid::{GridCoord, GridEngine, GridOptions, Vec2, Viewport};

fn main() {
    let mut engine = GridEngine::new(
        GridOptions::new(120.0).with_initial_viewport(Some(Viewport::new(800.0, 600.0))),
    );

    println!("visible={}", engine.visible_len());
    println!("origin={:?}", engine.visible_item(GridCoord::ORIGIN));

    // Pan one cell to the left via the wheel; new cells enter on the right.
    engine.wheel(Vec2::new(120.0, 0.0), 0);

    let mut items = Vec::new();
    engine.collect_visible(&mut items);
    items.sort_by_key(|item| item.index);
    println!("offset={:?}", engine.offset());
    println!("lowest_index={:?}", items.first());
    println!("highest_index={:?}", items.last());
}
