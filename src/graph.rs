// ============================================================================
// graph.rs — directed graph over node indices, topological sort, transpose
// ============================================================================
//
// An adjacency list indexed by node position. Topological order is computed
// with Kahn's algorithm (same technique as ngmake's dag.rs), but unlike
// ngmake the cycle case reports an actual ordered cycle (a walk of back
// edges through the leftover subgraph), matching what the Go original gets
// for free from soniakeys/graph's Topological(), and what the spec's
// "non-empty cycle witness... exposed... as a sequence of Projects" needs.
// ============================================================================

use std::collections::{HashSet, VecDeque};

/// Directed graph over node indices 0..n. An edge `a -> b` is stored as
/// `adjacency[a]` containing `b`.
#[derive(Debug, Clone)]
pub struct DepGraph {
    adjacency: Vec<Vec<usize>>,
}

impl DepGraph {
    pub fn new(node_count: usize) -> Self {
        DepGraph {
            adjacency: vec![Vec::new(); node_count],
        }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn add_edge(&mut self, from: usize, to: usize) {
        self.adjacency[from].push(to);
    }

    pub fn successors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// Reverses every edge.
    pub fn transpose(&self) -> DepGraph {
        let mut out = DepGraph::new(self.node_count());
        for (from, tos) in self.adjacency.iter().enumerate() {
            for &to in tos {
                out.add_edge(to, from);
            }
        }
        out
    }

    /// Topological order via Kahn's algorithm: for every edge `a -> b`, `a`
    /// appears before `b` in the result. Returns an ordered cycle witness
    /// when the graph is cyclic.
    pub fn topological_order(&self) -> Result<Vec<usize>, Vec<usize>> {
        let n = self.node_count();
        let mut in_degree = vec![0usize; n];
        for tos in &self.adjacency {
            for &to in tos {
                in_degree[to] += 1;
            }
        }

        let mut queue: VecDeque<usize> = (0..n).filter(|&i| in_degree[i] == 0).collect();
        let mut order = Vec::with_capacity(n);

        while let Some(node) = queue.pop_front() {
            order.push(node);
            for &next in &self.adjacency[node] {
                in_degree[next] -= 1;
                if in_degree[next] == 0 {
                    queue.push_back(next);
                }
            }
        }

        if order.len() == n {
            Ok(order)
        } else {
            let processed: HashSet<usize> = order.into_iter().collect();
            let leftover: Vec<usize> = (0..n).filter(|i| !processed.contains(i)).collect();
            Err(self.find_cycle(&leftover))
        }
    }

    /// DFS with an explicit stack over the leftover (still-cyclic) subgraph,
    /// looking for a back edge into the current path. A leftover node is not
    /// necessarily on a cycle itself — it may be a sink hanging off one (a
    /// node whose in-degree never reaches zero only because something it
    /// depends on is stuck in a cycle) — so a plain "always follow the first
    /// remaining successor" walk starting from an arbitrary leftover node can
    /// run into a dead end. Tracking the current path and backtracking when a
    /// branch dead-ends finds an actual cycle regardless of where the search
    /// starts.
    fn find_cycle(&self, leftover: &[usize]) -> Vec<usize> {
        let remaining: HashSet<usize> = leftover.iter().copied().collect();
        let mut visited: HashSet<usize> = HashSet::new();

        for &start in leftover {
            if visited.contains(&start) {
                continue;
            }

            let mut path: Vec<usize> = vec![start];
            let mut on_path: HashSet<usize> = HashSet::from([start]);
            let mut frames: Vec<(usize, usize)> = vec![(start, 0)];
            visited.insert(start);

            while let Some(&(node, idx)) = frames.last() {
                let successors = &self.adjacency[node];
                if idx < successors.len() {
                    let candidate = successors[idx];
                    frames.last_mut().unwrap().1 += 1;

                    if !remaining.contains(&candidate) {
                        continue;
                    }
                    if on_path.contains(&candidate) {
                        let cycle_start = path.iter().position(|&n| n == candidate).unwrap();
                        return path[cycle_start..].to_vec();
                    }
                    if !visited.contains(&candidate) {
                        visited.insert(candidate);
                        on_path.insert(candidate);
                        path.push(candidate);
                        frames.push((candidate, 0));
                    }
                } else {
                    on_path.remove(&node);
                    path.pop();
                    frames.pop();
                }
            }
        }

        unreachable!("a leftover subgraph from a failed topological sort must contain a cycle")
    }

    /// Every node reachable from `start` along edges, including `start`
    /// itself. Breadth-first, matching the spec's "breadth-first traversal"
    /// wording for WithDependents/WithDeps.
    pub fn reachable_from(&self, start: usize) -> Vec<usize> {
        let mut seen = vec![false; self.node_count()];
        let mut queue = VecDeque::from([start]);
        seen[start] = true;
        let mut out = Vec::new();
        while let Some(node) = queue.pop_front() {
            out.push(node);
            for &next in &self.adjacency[node] {
                if !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }
        out
    }
}
