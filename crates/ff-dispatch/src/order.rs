//! Fire visiting order.

use ff_agent::Fire;

/// Indices into `fires` in nearest-neighbour chain order.
///
/// The chain starts at `fires[0]` and repeatedly hops to the closest
/// unvisited fire by squared Euclidean distance.  Ties go to the fire that
/// comes first in `fires`.
pub fn visit_order(fires: &[Fire]) -> Vec<usize> {
    let mut order = Vec::with_capacity(fires.len());
    if fires.is_empty() {
        return order;
    }
    let mut visited = vec![false; fires.len()];
    let mut current = 0;
    visited[0] = true;
    order.push(0);

    while order.len() < fires.len() {
        let here = fires[current].position();
        let mut best: Option<(usize, u64)> = None;
        for (i, fire) in fires.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let d = here.distance_sq(fire.position());
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        let Some((next, _)) = best else { break };
        visited[next] = true;
        order.push(next);
        current = next;
    }
    order
}
