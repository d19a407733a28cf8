use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::acyclic::AcyclicLongestPaths;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{validate_vertex, DirectedEdge, EdgeWeightedDigraph};
use crate::Result;

/// A job with a duration and the jobs that may only start after it finishes
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Job<W = f64> {
    pub duration: W,
    pub successors: Vec<usize>,
}

impl<W> Job<W> {
    pub fn new(duration: W, successors: impl IntoIterator<Item = usize>) -> Self {
        Job {
            duration,
            successors: successors.into_iter().collect(),
        }
    }
}

/// Critical path method for parallel job scheduling with precedence constraints.
///
/// Job `i` becomes a start vertex `i` and an end vertex `i + n` joined by an
/// edge of its duration. A global source feeds every start vertex, every end
/// vertex feeds a global sink, and each constraint links the end of a job to
/// the start of its successor. Earliest start times are longest-path distances
/// from the source.
#[derive(Debug, Clone)]
pub struct CriticalPath<W = f64>
where
    W: Float + Zero + Debug + Copy,
{
    jobs: usize,
    schedule: ShortestPathResult<W>,
}

impl<W> CriticalPath<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Schedules `jobs`; fails if a successor index is out of range or the
    /// constraints are cyclic
    pub fn new(jobs: &[Job<W>]) -> Result<Self> {
        let n = jobs.len();
        let source = 2 * n;
        let sink = 2 * n + 1;

        let mut network = EdgeWeightedDigraph::new(2 * n + 2);
        for (i, job) in jobs.iter().enumerate() {
            network.add_edge(DirectedEdge::new(source, i, W::zero()))?;
            network.add_edge(DirectedEdge::new(i + n, sink, W::zero()))?;
            network.add_edge(DirectedEdge::new(i, i + n, job.duration))?;
            for &successor in &job.successors {
                validate_vertex(successor, n)?;
                network.add_edge(DirectedEdge::new(i + n, successor, W::zero()))?;
            }
        }

        let schedule = AcyclicLongestPaths::new().compute_shortest_paths(&network, source)?;
        log::debug!("critical path over {} jobs: finish at {:?}", n, schedule.dist_to(sink));
        Ok(CriticalPath { jobs: n, schedule })
    }

    pub fn job_count(&self) -> usize {
        self.jobs
    }

    /// Earliest start time of job `i`
    pub fn start_time(&self, i: usize) -> W {
        self.schedule.dist_to(i)
    }

    /// Earliest finish time of job `i`
    pub fn finish_time(&self, i: usize) -> W {
        self.schedule.dist_to(i + self.jobs)
    }

    /// Time at which every job is done
    pub fn completion_time(&self) -> W {
        self.schedule.dist_to(2 * self.jobs + 1)
    }

    /// Jobs on a longest chain of constraints, in execution order
    pub fn critical_jobs(&self) -> Vec<usize> {
        let sink = 2 * self.jobs + 1;
        self.schedule
            .path_to(sink)
            .unwrap_or_default()
            .iter()
            .filter(|e| e.from() < self.jobs && e.to() == e.from() + self.jobs)
            .map(|e| e.from())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn schedules_the_textbook_jobs() {
        let jobs = vec![
            Job::new(41.0, [1, 7, 9]),
            Job::new(51.0, [2]),
            Job::new(50.0, []),
            Job::new(36.0, []),
            Job::new(38.0, []),
            Job::new(45.0, []),
            Job::new(21.0, [3, 8]),
            Job::new(32.0, [3, 8]),
            Job::new(32.0, [2]),
            Job::new(29.0, [4, 6]),
        ];
        let cpm = CriticalPath::new(&jobs).unwrap();
        assert_eq!(cpm.start_time(0), 0.0);
        assert_eq!(cpm.start_time(2), 123.0);
        assert_eq!(cpm.start_time(6), 70.0);
        assert_eq!(cpm.finish_time(8), 123.0);
        assert_eq!(cpm.completion_time(), 173.0);
        assert_eq!(cpm.critical_jobs(), vec![0, 9, 6, 8, 2]);
    }

    #[test]
    fn cyclic_constraints_fail() {
        let jobs = vec![Job::new(1.0, [1]), Job::new(1.0, [0])];
        assert_eq!(CriticalPath::new(&jobs).unwrap_err(), Error::NotAcyclic);
    }

    #[test]
    fn unknown_successor_fails() {
        let jobs = vec![Job::new(1.0, [3])];
        assert!(matches!(CriticalPath::new(&jobs), Err(Error::InvalidVertex { vertex: 3, .. })));
    }
}
