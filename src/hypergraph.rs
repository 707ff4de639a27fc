use bit_set::BitSet;
use itertools::Itertools;
use std::ops::Index;
use thiserror::Error;

/// Errors raised while building a [`Hypergraph`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HypergraphError {
    #[error("edge has length {found}, expected {expected}")]
    EdgeLength { expected: usize, found: usize },
    #[error("vertex {vertex} is outside the universe of {num_verts} vertices")]
    VertexOutOfRange { vertex: usize, num_verts: usize },
}

/// A finite hypergraph stored as an array of bit-vectors.
///
/// Every edge is a [`BitSet`] whose underlying bit-vector has exactly `num_verts` bits.
/// Edges can only be appended; there is no removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hypergraph {
    num_verts: usize,
    edges: Vec<BitSet>,
}

/// An empty bit-vector of `len` bits.
pub fn empty_set(len: usize) -> BitSet {
    BitSet::with_capacity(len)
}

/// A bit-vector of `len` bits with every bit set.
pub fn full_set(len: usize) -> BitSet {
    let mut set = BitSet::with_capacity(len);
    set.extend(0..len);
    set
}

impl Hypergraph {
    pub fn new(num_verts: usize, num_edges: usize) -> Hypergraph {
        Hypergraph { num_verts, edges: Vec::with_capacity(num_edges) }
    }

    /// Builds a hypergraph from edges given as vertex lists.
    pub fn from_edges(num_verts: usize, edges: &[Vec<usize>]) -> Result<Hypergraph, HypergraphError> {
        let mut h = Hypergraph::new(num_verts, edges.len());
        for edge in edges {
            h.add_edge_from_vertices(edge.iter().cloned())?;
        }
        Ok(h)
    }

    pub fn num_verts(&self) -> usize {
        self.num_verts
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Appends `edge`, which must be a bit-vector over exactly `num_verts` bits.
    pub fn add_edge(&mut self, edge: BitSet) -> Result<(), HypergraphError> {
        let found = edge.get_ref().len();
        if found != self.num_verts {
            return Err(HypergraphError::EdgeLength { expected: self.num_verts, found });
        }
        self.edges.push(edge);
        Ok(())
    }

    /// Appends the edge containing exactly the given vertices.
    pub fn add_edge_from_vertices(&mut self, vertices: impl IntoIterator<Item = usize>) -> Result<(), HypergraphError> {
        let mut edge = empty_set(self.num_verts);
        for v in vertices {
            if v >= self.num_verts {
                return Err(HypergraphError::VertexOutOfRange { vertex: v, num_verts: self.num_verts });
            }
            edge.insert(v);
        }
        self.add_edge(edge)
    }

    pub fn edge(&self, index: usize) -> Option<&BitSet> {
        self.edges.get(index)
    }

    pub fn edges(&self) -> impl Iterator<Item = &BitSet> + '_ {
        self.edges.iter()
    }

    /// Returns the incidence structure indexed by vertex: edge `v` of the
    /// transpose holds the indices of all edges containing `v`.
    pub fn transpose(&self) -> Hypergraph {
        let num_edges = self.edges.len();
        let mut incidence = vec![empty_set(num_edges); self.num_verts];
        for (e, edge) in self.edges.iter().enumerate() {
            for v in edge.iter() {
                incidence[v].insert(e);
            }
        }
        Hypergraph { num_verts: num_edges, edges: incidence }
    }

    /// Whether `set` intersects every edge.
    pub fn is_hitting_set(&self, set: &BitSet) -> bool {
        self.edges.iter().all(|edge| !edge.is_disjoint(set))
    }

    /// Whether `set` is a hitting set none of whose members can be dropped.
    pub fn is_minimal_hitting_set(&self, set: &BitSet) -> bool {
        if !self.is_hitting_set(set) {
            return false;
        }
        set.iter().all(|v| {
            let mut smaller = set.clone();
            smaller.remove(v);
            !self.is_hitting_set(&smaller)
        })
    }

    /// The edges as sorted vertex lists, themselves sorted. Two hypergraphs with the
    /// same edge set (in any order) produce the same value.
    pub fn to_sorted_sets(&self) -> Vec<Vec<usize>> {
        self.edges.iter().map(|edge| edge.iter().collect_vec()).sorted().collect_vec()
    }
}

impl Index<usize> for Hypergraph {
    type Output = BitSet;

    fn index(&self, index: usize) -> &BitSet {
        &self.edges[index]
    }
}
