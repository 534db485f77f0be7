//! Duty-status enum shared by the planner and the output writers.

/// One of the four record-of-duty statuses a driver can be in.
///
/// Declaration order matches the rows of a paper log grid
/// (off-duty, sleeper berth, driving, on-duty not driving).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DutyStatus {
    OffDuty,
    Sleeper,
    Driving,
    OnDuty,
}

impl DutyStatus {
    /// All statuses in log-grid row order.
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::Sleeper,
        DutyStatus::Driving,
        DutyStatus::OnDuty,
    ];

    /// `true` for statuses that count against the on-duty window and cycle.
    #[inline]
    pub fn is_on_duty(self) -> bool {
        matches!(self, DutyStatus::Driving | DutyStatus::OnDuty)
    }

    /// `true` for off-duty and sleeper berth.
    #[inline]
    pub fn is_rest(self) -> bool {
        !self.is_on_duty()
    }

    /// Label used in notes, CSV columns and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "off-duty",
            DutyStatus::Sleeper => "sleeper",
            DutyStatus::Driving => "driving",
            DutyStatus::OnDuty  => "on-duty",
        }
    }
}

impl std::fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
