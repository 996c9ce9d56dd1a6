use fxhash::FxHashSet;

use super::Graph;
use crate::algorithms::sort::merge_sort;
use crate::collections::adapters::Queue;
use crate::collections::contiguous::DynArray;

// Both traversals sort the neighbor candidates before following them, so the order they visit
// vertices in depends only on the shape of the graph, never on edge insertion order.

impl Graph {
    /// Walks the graph breadth-first from `start`, returning each reachable vertex exactly
    /// once in visit order. An absent start vertex yields an empty sequence, never an error.
    ///
    /// # Examples
    /// ```
    /// # use dsa_toolkit::collections::graph::Graph;
    /// let mut graph = Graph::new();
    /// for [u, v] in [[1, 2], [1, 3], [2, 4], [3, 4], [4, 5]] {
    ///     graph.add_edge(u, v);
    /// }
    ///
    /// assert_eq!(&*graph.bfs(1), &[1, 2, 3, 4, 5]);
    /// assert_eq!(&*graph.bfs(5), &[5, 4, 2, 3, 1]);
    /// assert!(graph.bfs(99).is_empty());
    /// ```
    pub fn bfs(&self, start: usize) -> DynArray<usize> {
        let mut order = DynArray::new();
        if !self.has_vertex(start) {
            return order;
        }

        let mut visited = FxHashSet::default();
        let mut frontier = Queue::new();
        visited.insert(start);
        frontier.enqueue(start);

        while let Some(current) = frontier.poll() {
            order.push(current);

            for &next in self.sorted_neighbors(current).iter() {
                if visited.insert(next) {
                    frontier.enqueue(next);
                }
            }
        }

        order
    }

    /// Walks the graph depth-first from `start`, returning each reachable vertex exactly once
    /// in visit order. An absent start vertex yields an empty sequence, never an error.
    ///
    /// # Examples
    /// ```
    /// # use dsa_toolkit::collections::graph::Graph;
    /// let mut graph = Graph::new();
    /// for [u, v] in [[1, 2], [1, 3], [2, 4], [3, 4], [4, 5]] {
    ///     graph.add_edge(u, v);
    /// }
    ///
    /// assert_eq!(&*graph.dfs(1), &[1, 2, 4, 3, 5]);
    /// assert!(graph.dfs(99).is_empty());
    /// ```
    pub fn dfs(&self, start: usize) -> DynArray<usize> {
        let mut order = DynArray::new();
        if !self.has_vertex(start) {
            return order;
        }

        let mut visited = FxHashSet::default();
        self.dfs_visit(start, &mut visited, &mut order);
        order
    }

    fn dfs_visit(&self, vertex: usize, visited: &mut FxHashSet<usize>, order: &mut DynArray<usize>) {
        visited.insert(vertex);
        order.push(vertex);

        for &next in self.sorted_neighbors(vertex).iter() {
            if !visited.contains(&next) {
                self.dfs_visit(next, visited, order);
            }
        }
    }

    /// The neighbors of `vertex`, copied out and sorted ascending.
    fn sorted_neighbors(&self, vertex: usize) -> DynArray<usize> {
        let mut order: DynArray<usize> = self.neighbors(vertex).iter().copied().collect();
        merge_sort(&mut order);
        order
    }
}
