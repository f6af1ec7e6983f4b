//! Planning state and the plan summary returned by a strategy.

use ff_agent::Robot;
use ff_core::{CellPos, FireId, RobotId, SimTime};
use ff_schedule::EventKind;

/// Where a robot will be once everything already committed to it is done.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchState {
    /// Estimated cost, in seconds, of the robot's last commitment.  `0.0`
    /// until it is given a fire.
    pub estimated_finish: f64,
    pub position:         CellPos,
    pub reservoir:        u32,
    /// Due time of the robot's last planned event.
    pub time:             SimTime,
}

impl DispatchState {
    /// The state of an idle `robot` at `start`.
    pub fn idle(robot: &Robot, start: SimTime) -> Self {
        Self {
            estimated_finish: 0.0,
            position:         robot.position(),
            reservoir:        robot.reservoir(),
            time:             start,
        }
    }
}

/// One fire handed to one robot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub fire:      FireId,
    pub robot:     RobotId,
    /// The cost estimate that won the robot the fire.
    pub cost_secs: f64,
    /// Water runs made; `0` when the robot already carried enough.
    pub trips:     u32,
    /// Due time of the final `Intervene` on this fire.
    pub finish:    SimTime,
}

/// Everything a strategy decided.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchPlan {
    /// Assignments in the order they were made.
    pub assignments:  Vec<Assignment>,
    /// Fires no robot could reach.
    pub unassigned:   Vec<FireId>,
    /// Projected end state of every robot, indexed by `RobotId`.
    pub final_states: Vec<DispatchState>,
    /// Events to schedule, in emission order.
    pub events:       Vec<(SimTime, EventKind)>,
}

impl DispatchPlan {
    #[inline]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// The assignment covering `fire`, if any.
    pub fn assignment_for(&self, fire: FireId) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.fire == fire)
    }

    /// Latest due time over all planned events.
    pub fn makespan(&self) -> Option<SimTime> {
        self.events.iter().map(|(t, _)| *t).max()
    }
}
