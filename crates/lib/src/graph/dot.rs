//! Graphviz export of a resolved dependency graph.

use std::collections::HashMap;
use std::fmt;

use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::Result;
use crate::store::ModuleStore;

use super::Resolution;

/// Edge label: whether the dependent sees the dependency publicly or privately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeVisibility {
  Public,
  Private,
}

impl fmt::Display for EdgeVisibility {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Public => write!(f, "public"),
      Self::Private => write!(f, "private"),
    }
  }
}

/// Build a graph of the resolved modules with edges from dependent to dependency.
pub fn dependency_graph<'a>(
  store: &'a ModuleStore,
  resolution: &'a Resolution,
) -> Result<DiGraph<&'a str, EdgeVisibility>> {
  let mut graph = DiGraph::new();
  let mut nodes: HashMap<&str, NodeIndex> = HashMap::new();

  for name in resolution.order() {
    nodes.insert(name.as_str(), graph.add_node(name.as_str()));
  }

  for name in resolution.order() {
    let descriptor = store.lookup(name)?;
    let from = nodes[name.as_str()];
    let edges = descriptor
      .public_dependencies
      .iter()
      .map(|d| (d, EdgeVisibility::Public))
      .chain(descriptor.private_dependencies.iter().map(|d| (d, EdgeVisibility::Private)));

    for (dep, visibility) in edges {
      if let Some(&to) = nodes.get(dep.as_str()) {
        graph.add_edge(from, to, visibility);
      }
    }
  }

  Ok(graph)
}

/// Render the resolved graph in DOT format.
pub fn to_dot(store: &ModuleStore, resolution: &Resolution) -> Result<String> {
  let graph = dependency_graph(store, resolution)?;
  Ok(format!("{}", Dot::new(&graph)))
}
