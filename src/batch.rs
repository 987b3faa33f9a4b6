//! Sharded post-processing across independent simulations
//!
//! Production runs produce hundreds of output directories, and the
//! analysis of each is independent of all the others. The batch runner
//! shards by opaque job id and guarantees that a broken directory costs
//! one result slot, never the whole sweep.

use std::fmt;

use log::warn;

use mcmc_core::Result;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Apply one post-processing operation to every job id
///
/// Returns an `(id, Result)` pair per input id, in input order. A
/// failing job is logged and reported in its slot without aborting the
/// rest. With the `parallel` feature the jobs run on the rayon thread
/// pool; order and values are independent of the worker count.
///
/// # Examples
///
/// ```
/// use mcmc_diagnostics::run_batch;
///
/// let outcomes = run_batch(&[4_u32, 7, 9], |id| Ok(id * 10));
/// assert_eq!(outcomes.len(), 3);
/// assert_eq!(outcomes[1].0, 7);
/// assert_eq!(*outcomes[1].1.as_ref().unwrap(), 70);
/// ```
pub fn run_batch<Id, T, Op>(ids: &[Id], op: Op) -> Vec<(Id, Result<T>)>
where
    Id: fmt::Debug + Clone + Send + Sync,
    T: Send,
    Op: Fn(&Id) -> Result<T> + Sync,
{
    let run_one = |id: &Id| {
        let outcome = op(id);
        if let Err(error) = &outcome {
            warn!("post-processing failed for job {id:?}: {error}");
        }
        (id.clone(), outcome)
    };

    #[cfg(feature = "parallel")]
    return ids.par_iter().map(run_one).collect();

    #[cfg(not(feature = "parallel"))]
    ids.iter().map(run_one).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcmc_core::Error;

    #[test]
    fn test_results_come_back_in_input_order() {
        let ids = [5_u32, 3, 9, 1];
        let outcomes = run_batch(&ids, |id| Ok(id * 2));

        let pairs: Vec<(u32, u32)> = outcomes
            .into_iter()
            .map(|(id, result)| (id, result.unwrap()))
            .collect();
        assert_eq!(pairs, vec![(5, 10), (3, 6), (9, 18), (1, 2)]);
    }

    #[test]
    fn test_one_failure_does_not_abort_the_batch() {
        let outcomes = run_batch(&[1_u32, 2, 3], |id| {
            if id % 2 == 0 {
                Err(Error::Computation(format!("job {id} is broken")))
            } else {
                Ok(*id)
            }
        });

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].1.is_ok());
        assert!(matches!(outcomes[1].1, Err(Error::Computation(_))));
        assert!(outcomes[2].1.is_ok());
    }

    #[test]
    fn test_string_ids_work_as_jobs() {
        let ids = ["run-a".to_string(), "run-b".to_string()];
        let outcomes = run_batch(&ids, |id| Ok(id.len()));

        assert_eq!(outcomes[0].0, "run-a");
        assert_eq!(*outcomes[1].1.as_ref().unwrap(), 5);
    }

    #[test]
    fn test_empty_batch_yields_no_results() {
        let outcomes: Vec<(u32, Result<u32>)> = run_batch(&[], |id| Ok(*id));
        assert!(outcomes.is_empty());
    }
}
