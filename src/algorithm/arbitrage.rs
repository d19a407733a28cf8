use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::bellman_ford::BellmanFord;
use crate::graph::{DirectedEdge, EdgeWeightedDigraph};
use crate::Result;

/// One conversion in an arbitrage cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trade<W = f64> {
    pub from: usize,
    pub to: usize,
    pub rate: W,
}

/// Arbitrage detection over a table of exchange rates.
///
/// Rate `r` from currency `v` to `w` becomes an edge `v->w` of weight `-ln(r)`,
/// so a product of rates above one is a path sum below zero and an arbitrage
/// opportunity is a negative cycle.
#[derive(Debug, Clone)]
pub struct Arbitrage<W = f64>
where
    W: Float + Zero + Debug + Copy,
{
    cycle: Option<Vec<DirectedEdge<W>>>,
}

impl<W> Arbitrage<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Searches for an arbitrage cycle reachable from currency 0.
    /// `rates[v][w]` converts one unit of `v` into `rates[v][w]` units of `w`;
    /// missing or non-positive rates mean no conversion.
    pub fn new(rates: &[Vec<W>]) -> Result<Self> {
        let n = rates.len();
        let mut network = EdgeWeightedDigraph::new(n);
        for (v, row) in rates.iter().enumerate() {
            for (w, &rate) in row.iter().enumerate().take(n) {
                if rate > W::zero() {
                    network.add_edge(DirectedEdge::new(v, w, -rate.ln()))?;
                }
            }
        }
        if n == 0 {
            return Ok(Arbitrage { cycle: None });
        }

        let result = BellmanFord::new().run(&network, 0)?;
        let cycle = result.negative_cycle().map(<[_]>::to_vec);
        log::debug!("arbitrage over {} currencies: found = {}", n, cycle.is_some());
        Ok(Arbitrage { cycle })
    }

    pub fn has_opportunity(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns the conversions of the cycle in trading order
    pub fn trades(&self) -> Option<Vec<Trade<W>>> {
        self.cycle.as_ref().map(|cycle| {
            cycle
                .iter()
                .map(|e| Trade {
                    from: e.from(),
                    to: e.to(),
                    rate: (-e.weight()).exp(),
                })
                .collect()
        })
    }

    /// Returns what `stake` units of the first currency turn into after
    /// one pass around the cycle
    pub fn stake_after_cycle(&self, stake: W) -> Option<W> {
        self.cycle
            .as_ref()
            .map(|cycle| cycle.iter().fold(stake, |acc, e| acc * (-e.weight()).exp()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_usd_eur_cad_loop() {
        let rates = vec![
            vec![1.0, 0.741, 0.657, 1.061, 1.005],
            vec![1.349, 1.0, 0.888, 1.433, 1.366],
            vec![1.521, 1.126, 1.0, 1.614, 1.538],
            vec![0.942, 0.698, 0.619, 1.0, 0.953],
            vec![0.995, 0.732, 0.650, 1.049, 1.0],
        ];
        let arbitrage = Arbitrage::new(&rates).unwrap();
        assert!(arbitrage.has_opportunity());
        let stake = arbitrage.stake_after_cycle(1000.0).unwrap();
        assert!(stake > 1000.0);
        let trades = arbitrage.trades().unwrap();
        assert_eq!(trades.first().map(|t| t.from), trades.last().map(|t| t.to));
    }

    #[test]
    fn consistent_rates_have_no_opportunity() {
        let rates = vec![vec![1.0, 2.0], vec![0.5, 1.0]];
        assert!(!Arbitrage::new(&rates).unwrap().has_opportunity());
    }
}
