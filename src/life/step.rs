use super::GridBuffer;

/// Conway's rule: birth on 3, survival on 2 or 3.
pub fn next_state(alive: bool, live_neighbours: usize) -> bool {
    match (alive, live_neighbours) {
        (_, 3) => true,
        (alive, 2) => alive,
        _ => false,
    }
}

/// Computes the next generation of the front grid into the back grid and
/// swaps them.
///
/// Only interior cells are evaluated and written; the border rows and
/// columns of the back grid keep whatever they held.
pub fn step(buffer: &mut GridBuffer) {
    let (front, back) = buffer.front_and_back_mut();
    let n = front.side();
    for y in 1..n - 1 {
        for x in 1..n - 1 {
            let neighbours = front.live_neighbours(x, y);
            back.set(x, y, next_state(front.get(x, y), neighbours));
        }
    }
    buffer.swap();
}
