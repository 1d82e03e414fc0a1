//! Minimum spanning tree (Prim) and the preorder tour built from it.
//!
//! Walking an MST in preorder and shortcutting repeated nodes yields a tour
//! at most twice the optimum whenever distances obey the triangle
//! inequality.

use crate::matrix::DistanceMatrix;

/// Builds a minimum spanning tree rooted at node 0 with Prim's algorithm.
///
/// Returns a parent array: `parent[v]` is the node `v` was attached through,
/// or `None` for the root and for nodes no finite edge reaches.
///
/// # Complexity
///
/// O(n²), fine for the waypoint counts this crate handles.
pub fn prim_mst(matrix: &DistanceMatrix) -> Vec<Option<usize>> {
    let n = matrix.size();
    let mut key = vec![f64::INFINITY; n];
    let mut parent = vec![None; n];
    let mut in_tree = vec![false; n];

    if n == 0 {
        return parent;
    }
    key[0] = 0.0;

    for _ in 0..n {
        // Lowest key wins, ties go to the lowest index.
        let mut selected: Option<usize> = None;
        for i in 0..n {
            if in_tree[i] {
                continue;
            }
            match selected {
                Some(best) if key[i] >= key[best] => {}
                _ => selected = Some(i),
            }
        }
        let Some(u) = selected else { break };
        in_tree[u] = true;

        for v in 0..n {
            if in_tree[v] {
                continue;
            }
            let d = matrix.get(u, v);
            if d < key[v] {
                key[v] = d;
                parent[v] = Some(u);
            }
        }
    }

    parent
}

/// Turns a parent array into a closed tour by depth-first preorder.
///
/// Children are visited in ascending index order. The walk starts at node 0
/// and returns to it, so the tour has `n + 1` entries. Nodes without a
/// parent (unreachable from the root) start their own walk once the root's
/// subtree is exhausted, so every node still appears exactly once.
pub fn preorder_tour(parent: &[Option<usize>]) -> Vec<usize> {
    let n = parent.len();
    if n == 0 {
        return Vec::new();
    }

    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (child, p) in parent.iter().enumerate().skip(1) {
        if let Some(p) = *p {
            adjacency[p].push(child);
            adjacency[child].push(p);
        }
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n + 1);
    let mut stack = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }
        stack.push(root);
        while let Some(u) = stack.pop() {
            if visited[u] {
                continue;
            }
            visited[u] = true;
            order.push(u);
            // Reverse push keeps the first neighbour on top.
            for &v in adjacency[u].iter().rev() {
                if !visited[v] {
                    stack.push(v);
                }
            }
        }
    }

    order.push(0);
    order
}
