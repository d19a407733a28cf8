pub mod traits;
pub(crate) mod dfs;
pub mod depth_first_order;
pub mod cycle;
pub mod topological;
pub mod reachability;
pub mod components;
pub mod paths;
pub mod bridges;
pub mod lazy_prim;
pub mod prim;
pub mod kruskal;
pub mod dijkstra;
pub mod dijkstra_undirected;
pub mod acyclic;
pub mod critical_path;
pub mod bellman_ford;
pub mod arbitrage;
pub mod kosaraju;
pub mod tarjan;
pub mod gabow;

pub use traits::{MinimumSpanningTree, ShortestPathAlgorithm, ShortestPathResult, StrongComponents};
pub use depth_first_order::DepthFirstOrder;
pub use cycle::{Cycle, DirectedCycle, EdgeWeightedDirectedCycle};
pub use reachability::{DirectedDfs, TransitiveClosure};
pub use components::{Bipartite, ConnectedComponents};
pub use paths::{BreadthFirstPaths, DepthFirstPaths};
pub use bridges::Bridges;
pub use dijkstra::{DijkstraAllPairs, LazyDijkstra};
pub use dijkstra_undirected::DijkstraUndirected;
pub use acyclic::{AcyclicLongestPaths, AcyclicShortestPaths};
pub use critical_path::{CriticalPath, Job};
pub use arbitrage::{Arbitrage, Trade};
