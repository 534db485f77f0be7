//! Flattening a [`Plan`] into rows.

use hos_plan::Plan;

use crate::writer::PlanWriter;
use crate::{EventRow, OutputResult, TotalsRow};

/// Every event of every day, in day then clock order.
pub fn event_rows(plan: &Plan) -> Vec<EventRow> {
    plan.per_day
        .iter()
        .flat_map(|d| {
            d.events.iter().map(move |e| EventRow {
                day:        d.day,
                status:     e.status,
                start_hour: e.start_hour,
                end_hour:   e.end_hour,
            })
        })
        .collect()
}

/// One totals row per day the plan touches.
pub fn totals_rows(plan: &Plan) -> Vec<TotalsRow> {
    plan.daily_totals()
        .into_iter()
        .map(|t| TotalsRow {
            day:      t.day,
            off_duty: t.off_duty,
            sleeper:  t.sleeper,
            driving:  t.driving,
            on_duty:  t.on_duty,
        })
        .collect()
}

/// Write `plan`'s events and daily totals.  Does not call
/// [`finish`][PlanWriter::finish].
pub fn write_plan<W: PlanWriter>(writer: &mut W, plan: &Plan) -> OutputResult<()> {
    writer.write_events(&event_rows(plan))?;
    writer.write_totals(&totals_rows(plan))?;
    Ok(())
}
