//! Interval and deadline scheduling, plus the fractional knapsack.

use algo_collections::DisjointSet;

/// A half-open activity `[start, finish)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub start: u64,
    pub finish: u64,
}

/// Largest set of mutually compatible activities.
///
/// Sorts by finish time and accepts every activity starting no earlier
/// than the last accepted finish. Returns indices into `activities`, in
/// finish order. *O*(*n log n*) time.
///
/// ```
/// use algo_kit::greedy::{activity_selection, Activity};
///
/// let acts = [(1, 2), (3, 4), (0, 6), (5, 7), (8, 9), (5, 9)]
///     .map(|(start, finish)| Activity { start, finish });
/// assert_eq!(activity_selection(&acts), vec![0, 1, 3, 4]);
/// ```
pub fn activity_selection(activities: &[Activity]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..activities.len()).collect();
    order.sort_by_key(|&i| activities[i].finish);

    let mut chosen = Vec::new();
    let mut last_finish = None;
    for i in order {
        let activity = activities[i];
        if last_finish.is_none_or(|finish| activity.start >= finish) {
            chosen.push(i);
            last_finish = Some(activity.finish);
        }
    }
    chosen
}

/// An item that may be taken in part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionalItem {
    pub weight: f64,
    pub value: f64,
}

/// Maximum value packable into `capacity` when items can be split.
///
/// Takes items by descending value density, whole while they fit, then the
/// fitting fraction of the first one that does not. Items with zero weight
/// are always taken whole. *O*(*n log n*) time.
///
/// ```
/// use algo_kit::greedy::{fractional_knapsack, FractionalItem};
///
/// let items = [(10.0, 60.0), (20.0, 100.0), (30.0, 120.0)]
///     .map(|(weight, value)| FractionalItem { weight, value });
/// assert_eq!(fractional_knapsack(&items, 50.0), 240.0);
/// ```
pub fn fractional_knapsack(items: &[FractionalItem], capacity: f64) -> f64 {
    let mut order: Vec<&FractionalItem> = items.iter().collect();
    let density = |item: &FractionalItem| {
        if item.weight > 0.0 {
            item.value / item.weight
        } else {
            f64::INFINITY
        }
    };
    order.sort_by(|a, b| density(b).total_cmp(&density(a)));

    let mut remaining = capacity.max(0.0);
    let mut total = 0.0;
    for item in order {
        if item.weight <= remaining {
            total += item.value;
            remaining -= item.weight;
        } else {
            total += item.value * remaining / item.weight;
            break;
        }
    }
    total
}

/// A unit-time job that earns `profit` if finished by `deadline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    /// Latest time slot (1-based) the job may occupy
    pub deadline: usize,
    pub profit: u64,
}

/// Result of [`job_sequencing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSchedule {
    /// `slots[t]` is the job index run in time slot `t + 1`, if any
    pub slots: Vec<Option<usize>>,
    pub total_profit: u64,
}

impl JobSchedule {
    /// Scheduled job indices in slot order.
    pub fn jobs(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().flatten().copied()
    }
}

/// Most profitable schedule of unit jobs with deadlines.
///
/// Jobs are taken by descending profit and put in the latest free slot at
/// or before their deadline. Free slots are found with a disjoint set whose
/// components are runs of occupied slots, each pointing at the free slot
/// just below the run, so each lookup is near-constant time.
pub fn job_sequencing(jobs: &[Job]) -> JobSchedule {
    let horizon = jobs.iter().map(|job| job.deadline).max().unwrap_or(0);
    let mut slots = vec![None; horizon];
    let mut total_profit = 0;

    // Slot 0 is a sentinel meaning "no free slot".
    let mut runs = DisjointSet::new(horizon + 1);
    let mut free_below: Vec<usize> = (0..=horizon).collect();

    let mut order: Vec<usize> = (0..jobs.len()).collect();
    order.sort_by(|&a, &b| jobs[b].profit.cmp(&jobs[a].profit));

    for i in order {
        let deadline = jobs[i].deadline;
        if deadline == 0 {
            continue;
        }
        let slot = free_below[runs.find(deadline)];
        if slot == 0 {
            continue;
        }

        slots[slot - 1] = Some(i);
        total_profit += jobs[i].profit;

        let next_free = free_below[runs.find(slot - 1)];
        runs.union(slot, slot - 1);
        let root = runs.find(slot);
        free_below[root] = next_free;
    }

    JobSchedule {
        slots,
        total_profit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activities(pairs: &[(u64, u64)]) -> Vec<Activity> {
        pairs
            .iter()
            .map(|&(start, finish)| Activity { start, finish })
            .collect()
    }

    #[test]
    fn test_activity_selection_unsorted_input() {
        let acts = activities(&[(5, 9), (1, 2), (3, 4), (0, 6), (5, 7), (8, 9)]);
        assert_eq!(activity_selection(&acts), vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_activity_selection_touching_intervals() {
        let acts = activities(&[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(activity_selection(&acts), vec![0, 1, 2]);
        assert!(activity_selection(&[]).is_empty());
    }

    #[test]
    fn test_fractional_knapsack() {
        let items = [
            FractionalItem { weight: 10.0, value: 60.0 },
            FractionalItem { weight: 40.0, value: 40.0 },
            FractionalItem { weight: 20.0, value: 100.0 },
            FractionalItem { weight: 30.0, value: 120.0 },
        ];
        assert_eq!(fractional_knapsack(&items, 50.0), 240.0);
        assert_eq!(fractional_knapsack(&items, 0.0), 0.0);
        assert_eq!(fractional_knapsack(&items, 1000.0), 320.0);
    }

    #[test]
    fn test_fractional_knapsack_zero_weight() {
        let items = [
            FractionalItem { weight: 0.0, value: 5.0 },
            FractionalItem { weight: 4.0, value: 8.0 },
        ];
        assert_eq!(fractional_knapsack(&items, 2.0), 9.0);
    }

    #[test]
    fn test_job_sequencing() {
        let jobs = [(2, 100), (1, 19), (2, 27), (1, 25), (3, 15)]
            .map(|(deadline, profit)| Job { deadline, profit });
        let schedule = job_sequencing(&jobs);
        assert_eq!(schedule.total_profit, 142);
        assert_eq!(schedule.slots, vec![Some(2), Some(0), Some(4)]);
        assert_eq!(schedule.jobs().collect::<Vec<_>>(), vec![2, 0, 4]);
    }

    #[test]
    fn test_job_sequencing_crowded_deadline() {
        let jobs = [(1, 20), (1, 10), (1, 40), (1, 30), (0, 99)]
            .map(|(deadline, profit)| Job { deadline, profit });
        let schedule = job_sequencing(&jobs);
        assert_eq!(schedule.slots, vec![Some(2)]);
        assert_eq!(schedule.total_profit, 40);

        let empty = job_sequencing(&[]);
        assert!(empty.slots.is_empty());
        assert_eq!(empty.total_profit, 0);
    }
}
