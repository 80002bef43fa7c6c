//! Connected-component labeling over a binary occupancy mask.
//!
//! Single raster-scan pass with a union-find structure, then a resolve
//! pass that renumbers every component to a dense label and counts its
//! cells. Cells outside the mask are treated as not occupied, so a group
//! never grows past the window edge.

use crate::grid::Raster;

use super::ConnectivityType;

/// Disjoint-set forest with union by rank and path compression.
///
/// Slot 0 is reserved for the background and never unioned.
struct DisjointSet {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new() -> Self {
        Self {
            parent: vec![0],
            rank: vec![0],
        }
    }

    /// Allocate a fresh singleton set and return its id.
    fn make_set(&mut self) -> u32 {
        let id = self.parent.len() as u32;
        self.parent.push(id);
        self.rank.push(0);
        id
    }

    /// Representative of `x`, compressing the path along the way.
    fn find(&mut self, x: u32) -> u32 {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        let mut cur = x;
        while cur != root {
            let next = self.parent[cur as usize];
            self.parent[cur as usize] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`, returning the new representative.
    fn union(&mut self, a: u32, b: u32) -> u32 {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return ra;
        }
        let (parent, child) = match self.rank[ra as usize].cmp(&self.rank[rb as usize]) {
            std::cmp::Ordering::Less => (rb, ra),
            std::cmp::Ordering::Greater => (ra, rb),
            std::cmp::Ordering::Equal => {
                self.rank[ra as usize] += 1;
                (ra, rb)
            }
        };
        self.parent[child as usize] = parent;
        parent
    }
}

/// Label connected groups of occupied cells in `mask`.
///
/// `mask` holds non-zero for occupied cells. Returns the label image
/// (0 = background, labels dense from 1 in row-major first-appearance
/// order) and the per-label cell counts, indexed by label with entry 0
/// unused. Two occupied cells share a label iff a chain of occupied
/// cells connects them under `connectivity`.
pub fn label(mask: &Raster<u8>, connectivity: ConnectivityType) -> (Raster<u32>, Vec<u32>) {
    let (width, height) = (mask.width(), mask.height());
    let mut labels: Raster<u32> = Raster::filled(width, height, 0);
    let mut dsu = DisjointSet::new();

    if width == 0 || height == 0 {
        return (labels, vec![0]);
    }

    let occupied = mask.as_slice();

    // First pass: assign provisional labels, merging over the already
    // visited neighbors (west, north-west, north, north-east).
    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            if occupied[idx] == 0 {
                continue;
            }

            let mut current = 0u32;
            let mut visit = |neighbor: u32, dsu: &mut DisjointSet| {
                if neighbor == 0 {
                    return;
                }
                current = if current == 0 {
                    neighbor
                } else {
                    dsu.union(current, neighbor)
                };
            };

            if x > 0 {
                visit(labels.as_slice()[idx - 1], &mut dsu);
            }
            if y > 0 {
                visit(labels.as_slice()[idx - width], &mut dsu);
                if connectivity == ConnectivityType::Way8 {
                    if x > 0 {
                        visit(labels.as_slice()[idx - width - 1], &mut dsu);
                    }
                    if x + 1 < width {
                        visit(labels.as_slice()[idx - width + 1], &mut dsu);
                    }
                }
            }

            if current == 0 {
                current = dsu.make_set();
            }
            labels.as_mut_slice()[idx] = current;
        }
    }

    // Resolve pass: collapse every cell to its representative, renumber
    // components densely and accumulate counts.
    let mut remap = vec![0u32; dsu.parent.len()];
    let mut sizes = vec![0u32];
    for cell in labels.as_mut_slice() {
        if *cell == 0 {
            continue;
        }
        let root = dsu.find(*cell);
        if remap[root as usize] == 0 {
            remap[root as usize] = sizes.len() as u32;
            sizes.push(0);
        }
        *cell = remap[root as usize];
        sizes[*cell as usize] += 1;
    }

    (labels, sizes)
}
