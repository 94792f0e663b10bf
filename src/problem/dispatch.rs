use std::collections::HashSet;
use std::fmt::{Debug, Formatter};

use anyhow::{bail, Result};
use log::warn;

use crate::problem::{Id, Location, TimeWindow};
use crate::solution::Action;

#[derive(Debug, Clone)]
pub struct Courier {
    pub id: Id,
    pub location: Location,
}

#[derive(Debug, Clone)]
pub struct Stop {
    pub point_id: Id,
    pub location: Location,
    pub window: TimeWindow,
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: Id,
    pub pickup: Stop,
    pub dropoff: Stop,
    pub payment: f64,
}

impl Order {
    pub fn point_id_of(&self, action: Action) -> Id {
        match action {
            Action::Pickup => self.pickup.point_id,
            Action::Dropoff => self.dropoff.point_id,
        }
    }
}

/// Snapshot the engine works on. Couriers and orders are addressed by their
/// position in the respective vector, ids are only carried for the output.
pub struct DispatchInstance {
    pub name: String,
    pub couriers: Vec<Courier>,
    pub orders: Vec<Order>,
}

impl Debug for DispatchInstance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "dispatch instance {}:", self.name)
            .and(writeln!(
                f,
                "{} couriers: {:?}",
                self.couriers.len(),
                self.couriers
            ))
            .and(write!(f, "{} orders: {:?}", self.orders.len(), self.orders))
    }
}

impl DispatchInstance {
    pub fn num_couriers(&self) -> usize {
        self.couriers.len()
    }
    pub fn num_orders(&self) -> usize {
        self.orders.len()
    }
    pub fn courier_index_of(&self, id: Id) -> Option<usize> {
        self.couriers.iter().position(|c| c.id == id)
    }
    pub fn order_index_of(&self, id: Id) -> Option<usize> {
        self.orders.iter().position(|o| o.id == id)
    }
}

pub fn create_instance_with(
    name: impl Into<String>,
    couriers: Vec<Courier>,
    orders: Vec<Order>,
) -> Result<DispatchInstance> {
    let name = name.into();

    let mut seen = HashSet::with_capacity(couriers.len());
    for courier in &couriers {
        if !seen.insert(courier.id) {
            bail!("duplicate courier id {} in {}", courier.id, name);
        }
    }
    let mut seen = HashSet::with_capacity(orders.len());
    for order in &orders {
        if !seen.insert(order.id) {
            bail!("duplicate order id {} in {}", order.id, name);
        }
        // accepted as is
        if order.pickup.window.is_inverted() {
            warn!(
                "order {}: pickup window [{}, {}] is inverted",
                order.id, order.pickup.window.from, order.pickup.window.to
            );
        }
        if order.dropoff.window.is_inverted() {
            warn!(
                "order {}: dropoff window [{}, {}] is inverted",
                order.id, order.dropoff.window.from, order.dropoff.window.to
            );
        }
        if order.payment < 0.0 || !order.payment.is_finite() {
            warn!("order {}: payment {} is not a non-negative number", order.id, order.payment);
        }
    }

    Ok(DispatchInstance {
        name,
        couriers,
        orders,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn courier(id: Id, x: i64, y: i64) -> Courier {
        Courier {
            id,
            location: Location::new(x, y),
        }
    }

    pub(crate) fn order(
        id: Id,
        pickup: (i64, i64, i64, i64),
        dropoff: (i64, i64, i64, i64),
        payment: f64,
    ) -> Order {
        Order {
            id,
            pickup: Stop {
                point_id: id * 10 + 1,
                location: Location::new(pickup.0, pickup.1),
                window: TimeWindow::new(pickup.2, pickup.3),
            },
            dropoff: Stop {
                point_id: id * 10 + 2,
                location: Location::new(dropoff.0, dropoff.1),
                window: TimeWindow::new(dropoff.2, dropoff.3),
            },
            payment,
        }
    }

    #[test]
    fn rejects_duplicate_order_ids() {
        let res = create_instance_with(
            "dup",
            vec![courier(1, 0, 0)],
            vec![
                order(7, (0, 0, 360, 400), (0, 10, 370, 500), 100.0),
                order(7, (1, 1, 360, 400), (0, 10, 370, 500), 50.0),
            ],
        );
        assert!(res.is_err());
    }

    #[test]
    fn rejects_duplicate_courier_ids() {
        let res = create_instance_with("dup", vec![courier(1, 0, 0), courier(1, 5, 5)], vec![]);
        assert!(res.is_err());
    }

    #[test]
    fn accepts_inverted_windows() -> Result<()> {
        let instance = create_instance_with(
            "inverted",
            vec![courier(1, 0, 0)],
            vec![order(3, (0, 0, 400, 360), (0, 10, 370, 500), 100.0)],
        )?;
        assert_eq!(instance.num_orders(), 1);
        assert_eq!(instance.order_index_of(3), Some(0));
        assert_eq!(instance.courier_index_of(2), None);
        Ok(())
    }
}
