use rustc_hash::FxHashMap;

use crate::{
    core::{marker::EdgeType, Identity, Weight},
    graph::Graph,
};

use super::{relax, Error, ShortestPaths};

/// Single-source shortest paths on general graphs, negative weights
/// allowed. Θ(V·E).
///
/// Relaxes every edge for |V| − 1 rounds and then re-scans the edges once
/// more: an edge that still relaxes witnesses a negative cycle and the run
/// fails with [`Error::NegativeCycle`]. A round that relaxes nothing ends
/// the main loop early, in which case no cycle re-scan is needed.
pub fn bellman_ford<I, W, Ty>(graph: &Graph<I, W, Ty>, source: &I) -> Result<ShortestPaths<I, W>, Error>
where
    I: Identity,
    W: Weight,
    Ty: EdgeType,
{
    let mut dist = FxHashMap::default();
    let mut pred = FxHashMap::default();

    if graph.contains_node(source) {
        dist.insert(source.clone(), W::zero());
    }

    let mut terminated_early = false;

    for _ in 1..graph.node_count() {
        let mut relaxed = false;

        for (u, v, weight) in graph.edges() {
            relaxed |= relax(&mut dist, &mut pred, u, v, weight).is_some();

            // An undirected edge can be relaxed against its insertion
            // orientation as well.
            if !Ty::is_directed() {
                relaxed |= relax(&mut dist, &mut pred, v, u, weight).is_some();
            }
        }

        // If no distance improved, subsequent rounds cannot improve either.
        if !relaxed {
            terminated_early = true;
            break;
        }
    }

    if !terminated_early {
        for (u, v, weight) in graph.edges() {
            if improves(&dist, u, v, weight)
                || (!Ty::is_directed() && improves(&dist, v, u, weight))
            {
                return Err(Error::NegativeCycle);
            }
        }
    }

    Ok(ShortestPaths {
        source: source.clone(),
        dist,
        pred,
    })
}

fn improves<I, W>(dist: &FxHashMap<I, W>, u: &I, v: &I, weight: &W) -> bool
where
    I: Identity,
    W: Weight,
{
    let Some(u_dist) = dist.get(u) else {
        return false;
    };

    let next = u_dist.clone() + weight.clone();

    match dist.get(v) {
        Some(current) => next < *current,
        None => true,
    }
}
