use arrayvec::ArrayVec;
use rayon::prelude::*;

use crate::heap::Heap;
use crate::{Direction, Graph, NodeId, Pos};

type IndexMap<K, V> = indexmap::IndexMap<K, V, fxhash::FxBuildHasher>;

/// Directions tried from every node, in order. Earlier ones win ties.
const SLIDE_ORDER: [Direction; 4] = [
    Direction::Left,
    Direction::Up,
    Direction::Right,
    Direction::Down,
];

/// Nodes from source to target, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<NodeId>);

impl Path {
    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    /// Number of slides taken.
    pub fn distance(&self) -> usize {
        self.0.len() - 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Reach {
    Steps(usize),
    NoPath,
}

impl From<Option<&Path>> for Reach {
    fn from(path: Option<&Path>) -> Self {
        path.map_or(Reach::NoPath, |path| Reach::Steps(path.distance()))
    }
}

/// Open cells grouped by how many slides they need to reach the exit.
///
/// Groups keep the order in which they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouping(IndexMap<Reach, Vec<Pos>>);

impl Grouping {
    pub fn get(&self, reach: Reach) -> Option<&[Pos]> {
        self.0.get(&reach).map(|v| &v[..])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Reach, &[Pos])> + '_ {
        self.0.iter().map(|(&reach, cells)| (reach, &cells[..]))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn add(&mut self, reach: Reach, pos: Pos) {
        self.0.entry(reach).or_default().push(pos);
    }
}

impl FromIterator<(Reach, Pos)> for Grouping {
    fn from_iter<I: IntoIterator<Item = (Reach, Pos)>>(iter: I) -> Self {
        let mut grouping = Self::default();
        for (reach, pos) in iter {
            grouping.add(reach, pos);
        }
        grouping
    }
}

impl Graph {
    /// Distinct slide targets of `id`, excluding `id` itself.
    pub fn slides(&self, id: NodeId) -> ArrayVec<NodeId, 4> {
        let mut stops = ArrayVec::new();
        for dir in SLIDE_ORDER {
            let stop = self.slide(id, dir);
            if stop != id && !stops.contains(&stop) {
                stops.push(stop);
            }
        }
        stops
    }
}

/// Dijkstra over slide moves, every slide costing one.
pub fn shortest_path(graph: &Graph, source: NodeId, target: NodeId) -> Option<Path> {
    let mut dist: Vec<Option<usize>> = vec![None; graph.len()];
    let mut prev: Vec<Option<NodeId>> = vec![None; graph.len()];
    let mut queue = Heap::new();

    dist[source.0 as usize] = Some(0);
    queue.insert(source, 0);

    while let Some(cur) = queue.pop() {
        #[cfg(feature = "coz")]
        coz::progress!("Finalize");

        let Some(cur_dist) = dist[cur.0 as usize] else {
            unreachable!("Queued node without distance");
        };
        let alt = cur_dist + 1;
        for next in graph.slides(cur) {
            match dist[next.0 as usize] {
                None => {
                    dist[next.0 as usize] = Some(alt);
                    prev[next.0 as usize] = Some(cur);
                    queue.insert(next, alt);
                }
                Some(known) if alt < known => {
                    dist[next.0 as usize] = Some(alt);
                    prev[next.0 as usize] = Some(cur);
                    queue.decrease_key(&next, alt);
                }
                Some(_) => {}
            }
        }
    }

    dist[target.0 as usize]?;

    let mut nodes = std::iter::successors(Some(target), |&id| {
        (id != source).then(|| prev[id.0 as usize]).flatten()
    })
    .collect::<Vec<_>>();
    nodes.reverse();
    Some(Path(nodes))
}

/// Solve every open cell against the exit.
///
/// Searches run in parallel; `on_step` is called once per finished cell.
/// Cells are grouped in column-major order regardless of scheduling.
pub fn solve_all(graph: &Graph, on_step: impl Fn() + Sync) -> Grouping {
    let exit = graph.exit();
    let sources = graph.open_cells().collect::<Vec<_>>();

    let reaches = sources
        .par_iter()
        .map(|&source| {
            let path = shortest_path(graph, source, exit);
            let reach = Reach::from(path.as_ref());
            log::trace!("{} -> {reach:?}", graph[source].pos());
            on_step();
            (reach, graph[source].pos())
        })
        .collect::<Vec<_>>();

    let grouping = reaches.into_iter().collect::<Grouping>();
    log::debug!(
        "Solved {} cells into {} groups",
        sources.len(),
        grouping.len()
    );
    grouping
}
