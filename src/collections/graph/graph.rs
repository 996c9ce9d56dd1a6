use std::fmt::{self, Debug, Display, Formatter};

use fxhash::FxHashMap;

use crate::algorithms::sort::merge_sort;
use crate::collections::contiguous::DynArray;

/// A graph mapping integer vertex ids to insertion-ordered adjacency lists.
///
/// The `directed` flag chosen at construction is only a default: every edge insertion can
/// override it, so one graph may hold a mix of directed and undirected edges. An undirected
/// edge between distinct vertices is stored as two adjacency entries but counts as one edge;
/// an undirected self-loop is stored (and counted) once.
///
/// Vertex and edge counts are maintained as running counters, never recomputed.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `v` / `e`: The numbers of vertices and edges in the Graph.
/// - `d`: The out-degree of the vertex in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `add_vertex` | `O(1)` |
/// | `add_edge` | `O(d)` |
/// | `remove_vertex` | `O(v + e)` |
/// | `remove_edge` | `O(d)` |
/// | `has_edge` | `O(d)` |
/// | `neighbors` | `O(1)` |
/// | `degree` | `O(1)` |
/// | `bfs` / `dfs` | `O((v + e) log v)` |
///
/// The extra `log v` on the traversals pays for sorting each neighbor list, which is what
/// makes their output deterministic.
///
/// # Examples
/// ```
/// # use dsa_toolkit::collections::graph::Graph;
/// let mut graph = Graph::new();
/// graph.add_edge(1, 2);
/// graph.add_edge(1, 3);
///
/// assert!(graph.has_edge(2, 1), "The default here is undirected, so edges mirror.");
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.neighbors(1), &[2, 3]);
/// ```
pub struct Graph {
    pub(crate) adjacency: FxHashMap<usize, DynArray<usize>>,
    directed: bool,
    vertex_count: usize,
    edge_count: usize,
}

impl Graph {
    /// Creates an empty graph whose edges default to undirected.
    pub fn new() -> Graph {
        Graph {
            adjacency: FxHashMap::default(),
            directed: false,
            vertex_count: 0,
            edge_count: 0,
        }
    }

    /// Creates an empty graph whose edges default to directed.
    pub fn directed() -> Graph {
        Graph {
            directed: true,
            ..Self::new()
        }
    }

    /// Returns true if edges default to directed.
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the number of vertices.
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of edges. An undirected edge counts once.
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if the graph has no vertices.
    pub const fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Adds a vertex with no edges. Returns false (and changes nothing) if the vertex already
    /// exists, so repeated calls are idempotent.
    pub fn add_vertex(&mut self, vertex: usize) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, DynArray::new());
        self.vertex_count += 1;
        true
    }

    /// Returns true if the vertex exists.
    pub fn has_vertex(&self, vertex: usize) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// Adds an edge from `u` to `v` using the graph's default directedness, creating either
    /// endpoint that doesn't exist yet. Returns false if the entry `u -> v` is already
    /// present, leaving the edge count untouched.
    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        self.add_edge_directed(u, v, self.directed)
    }

    /// [`add_edge`](Graph::add_edge) with the directedness decided per edge rather than by the
    /// graph default.
    ///
    /// Duplicate detection looks at the forward list only: a reverse entry `v -> u` added by
    /// some earlier undirected insertion doesn't make `u -> v` a duplicate.
    pub fn add_edge_directed(&mut self, u: usize, v: usize, directed: bool) -> bool {
        self.add_vertex(u);
        self.add_vertex(v);

        if self.adjacency[&u].contains(&v) {
            return false;
        }

        if let Some(list) = self.adjacency.get_mut(&u) {
            list.push(v);
        }
        // A self-loop gets a single entry even when undirected, to avoid double-counting.
        if !directed && u != v {
            if let Some(list) = self.adjacency.get_mut(&v) {
                list.push(u);
            }
        }

        self.edge_count += 1;
        true
    }

    /// Removes a vertex along with every edge incident to it, scanning all adjacency lists for
    /// entries pointing back at it. Returns false if the vertex doesn't exist.
    pub fn remove_vertex(&mut self, vertex: usize) -> bool {
        let Some(own) = self.adjacency.remove(&vertex) else {
            return false;
        };
        // Every entry leaving the vertex is one edge, a self-loop included (stored once).
        self.edge_count -= own.len();

        for (&other, list) in self.adjacency.iter_mut() {
            if list.remove_value(&vertex) && !own.contains(&other) {
                // A surviving entry pointing at the vertex whose counterpart wasn't in the
                // removed list is a directed in-edge, not yet counted above.
                self.edge_count -= 1;
            }
        }

        self.vertex_count -= 1;
        true
    }

    /// Removes the edge from `u` to `v`. When the graph defaults to undirected and `u != v`,
    /// the mirrored entry is removed as well, without decrementing the count a second time.
    /// Returns false if the forward entry didn't exist.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        if !self.adjacency.contains_key(&u) || !self.adjacency.contains_key(&v) {
            return false;
        }

        let removed = match self.adjacency.get_mut(&u) {
            Some(list) => list.remove_value(&v),
            None => false,
        };
        if removed {
            self.edge_count -= 1;
        }

        if !self.directed && u != v {
            if let Some(list) = self.adjacency.get_mut(&v) {
                list.remove_value(&u);
            }
        }

        removed
    }

    /// Returns true if the entry `u -> v` exists. For an undirected edge both directions
    /// report true.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency.get(&u).is_some_and(|list| list.contains(&v))
    }

    /// Returns the neighbors of a vertex in insertion order. A missing vertex yields an empty
    /// slice rather than an error, since asking about absent vertices is expected.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        match self.adjacency.get(&vertex) {
            Some(list) => list,
            None => &[],
        }
    }

    /// Returns the out-degree of a vertex, or [`None`] if the vertex doesn't exist.
    pub fn degree(&self, vertex: usize) -> Option<usize> {
        self.adjacency.get(&vertex).map(DynArray::len)
    }

    /// Returns every vertex id, sorted ascending so the output is reproducible regardless of
    /// insertion order.
    pub fn vertices(&self) -> DynArray<usize> {
        let mut ids: DynArray<usize> = self.adjacency.keys().copied().collect();
        merge_sort(&mut ids);
        ids
    }

    /// Removes every vertex and edge.
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.vertex_count = 0;
        self.edge_count = 0;
    }

    /// Renders each vertex with its sorted neighbor set, one per line. Presentation only.
    ///
    /// # Examples
    /// ```
    /// # use dsa_toolkit::collections::graph::Graph;
    /// let mut graph = Graph::directed();
    /// graph.add_edge(2, 1);
    /// assert_eq!(graph.to_visual_string(), "Graph (Directed):\n1 --> {}\n2 --> {1}\n");
    /// ```
    pub fn to_visual_string(&self) -> String {
        if self.is_empty() {
            return String::from("Empty Graph");
        }

        let kind = if self.directed { "Directed" } else { "Undirected" };
        let mut out = format!("Graph ({kind}):\n");

        for &vertex in self.vertices().iter() {
            let mut order: DynArray<usize> = self.neighbors(vertex).iter().copied().collect();
            merge_sort(&mut order);

            out.push_str(&format!("{vertex} --> {{"));
            for (index, neighbor) in order.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                out.push_str(&neighbor.to_string());
            }
            out.push_str("}\n");
        }

        out
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertex_count)
            .field("edges", &self.edge_count)
            .field("directed", &self.directed)
            .finish()
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph {{ vertices: {}, edges: {}, directed: {} }}",
            self.vertex_count, self.edge_count, self.directed
        )
    }
}
