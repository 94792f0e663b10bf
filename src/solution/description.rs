use serde::{Deserialize, Serialize};

use crate::problem::dispatch::{Courier, Order};
use crate::problem::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Pickup,
    Dropoff,
}

/// One line of the produced route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEvent {
    pub courier_id: Id,
    pub action: Action,
    pub order_id: Id,
    pub point_id: Id,
}

impl RouteEvent {
    pub fn of(courier: &Courier, order: &Order, action: Action) -> Self {
        Self {
            courier_id: courier.id,
            action,
            order_id: order.id,
            point_id: order.point_id_of(action),
        }
    }
}
