//! Bay schedule (solution) model.
//!
//! A bay schedule records which truck loads were accepted and on which
//! bay, together with the cumulative time each bay has been committed
//! within the scenario's time limit.

use serde::{Deserialize, Serialize};

use super::TruckType;

/// A loading bay. Bays are interchangeable; only the accumulated load
/// distinguishes them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bay {
    /// Zero-based bay index.
    pub index: usize,
    /// Committed time on this bay (minutes).
    pub accumulated_time: f64,
}

/// One truck load accepted into the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Load volume (m³).
    pub volume: f64,
    /// Cycle time of the load (minutes).
    pub cycle_time: f64,
    /// Zero-based index of the bay that takes the load.
    pub bay_index: usize,
}

/// Number of accepted loads for one configured volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeCount {
    /// Truck volume (m³).
    pub volume: f64,
    /// Accepted loads of that volume.
    pub count: usize,
}

/// Schedule of one margin scenario.
///
/// Entries are append-only. A bay's accumulated time never exceeds the
/// time limit: [`BaySchedule::assign`] is only called for bays returned
/// by [`BaySchedule::least_loaded_feasible_bay`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaySchedule {
    /// Accepted loads, in acceptance order.
    pub entries: Vec<ScheduleEntry>,
    /// Bays indexed `0..num_bays`.
    pub bays: Vec<Bay>,
    /// Time available on every bay (minutes).
    pub time_limit: f64,
}

impl Bay {
    /// Creates an empty bay.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            accumulated_time: 0.0,
        }
    }

    /// Whether a load of `cycle_time` still fits under `time_limit`.
    #[inline]
    pub fn fits(&self, cycle_time: f64, time_limit: f64) -> bool {
        self.accumulated_time + cycle_time <= time_limit
    }
}

impl BaySchedule {
    /// Creates an empty schedule with `num_bays` idle bays.
    pub fn new(num_bays: usize, time_limit: f64) -> Self {
        Self {
            entries: Vec::new(),
            bays: (0..num_bays).map(Bay::new).collect(),
            time_limit,
        }
    }

    /// Number of bays.
    pub fn bay_count(&self) -> usize {
        self.bays.len()
    }

    /// Finds the least-loaded bay that can still take `truck`.
    ///
    /// Among equally loaded bays the lowest index wins.
    pub fn least_loaded_feasible_bay(&self, truck: &TruckType) -> Option<usize> {
        if !truck.is_schedulable() {
            return None;
        }

        let mut best: Option<&Bay> = None;
        for bay in &self.bays {
            if !bay.fits(truck.cycle_time, self.time_limit) {
                continue;
            }
            match best {
                Some(b) if b.accumulated_time <= bay.accumulated_time => {}
                _ => best = Some(bay),
            }
        }
        best.map(|b| b.index)
    }

    /// Places one load of `truck` on bay `bay_index`.
    pub fn assign(&mut self, truck: &TruckType, bay_index: usize) {
        self.bays[bay_index].accumulated_time += truck.cycle_time;
        self.entries.push(ScheduleEntry {
            volume: truck.volume,
            cycle_time: truck.cycle_time,
            bay_index,
        });
    }

    /// Number of accepted loads.
    pub fn truck_count(&self) -> usize {
        self.entries.len()
    }

    /// Sum of accepted volumes (m³).
    pub fn total_volume(&self) -> f64 {
        self.entries.iter().map(|e| e.volume).sum()
    }

    /// Sum of accepted cycle times (minutes).
    pub fn total_time(&self) -> f64 {
        self.entries.iter().map(|e| e.cycle_time).sum()
    }

    /// Returns all entries placed on a bay.
    pub fn entries_for_bay(&self, bay_index: usize) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.bay_index == bay_index)
            .collect()
    }

    /// Bay utilization as a percentage of the time limit.
    ///
    /// Returns `None` for an unknown bay. A non-positive time limit
    /// yields 0.
    pub fn bay_utilization(&self, bay_index: usize) -> Option<f64> {
        let bay = self.bays.get(bay_index)?;
        if self.time_limit <= 0.0 {
            return Some(0.0);
        }
        Some(bay.accumulated_time / self.time_limit * 100.0)
    }

    /// Utilization percentage of every bay, by index.
    pub fn all_utilizations(&self) -> Vec<f64> {
        (0..self.bays.len())
            .filter_map(|i| self.bay_utilization(i))
            .collect()
    }

    /// Counts accepted loads per distinct configured volume.
    ///
    /// Volumes keep their first-appearance order; volumes that were never
    /// accepted are reported with a count of zero.
    pub fn volume_distribution(&self, volumes: &[f64]) -> Vec<VolumeCount> {
        let mut distribution: Vec<VolumeCount> = Vec::new();
        for &volume in volumes {
            if !distribution.iter().any(|d| d.volume == volume) {
                distribution.push(VolumeCount { volume, count: 0 });
            }
        }
        for entry in &self.entries {
            if let Some(slot) = distribution.iter_mut().find(|d| d.volume == entry.volume) {
                slot.count += 1;
            }
        }
        distribution
    }
}
