use took::Took;

use crate::problem::dispatch::DispatchInstance;
use crate::solution::Dispatch;

pub fn format_log_method_dispatch_timed(
    method: &str,
    dispatch: &Dispatch,
    instance: &DispatchInstance,
    took: &Took,
) -> String {
    format!("{method} - {}, took: {took}", format_log_dispatch(dispatch, instance))
}

pub fn format_log_dispatch(dispatch: &Dispatch, instance: &DispatchInstance) -> String {
    format!(
        "{}/{} orders served by {}/{} couriers, revenue {:.2}",
        dispatch.number_of_served_orders(),
        instance.num_orders(),
        dispatch.number_of_couriers_used(instance),
        instance.num_couriers(),
        dispatch.total_revenue(),
    )
}

/// `<strategy>,<served>,<orders>,<revenue>,<seconds>`
pub fn format_summary_line(
    method: &str,
    dispatch: &Dispatch,
    instance: &DispatchInstance,
    took: &Took,
) -> String {
    format!(
        "{},{},{},{},{}",
        method,
        dispatch.number_of_served_orders(),
        instance.num_orders(),
        dispatch.total_revenue(),
        took.as_std().as_secs_f64()
    )
}
