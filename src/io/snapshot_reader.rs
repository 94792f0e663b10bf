use std::fs::File;
use std::io::Read;

use anyhow::Context;
use log::info;

use crate::problem::dispatch::{create_instance_with, Courier, DispatchInstance, Order, Stop};
use crate::problem::{Location, TimeWindow};

mod json {
    use serde::Deserialize;

    use crate::problem::{Id, Time};

    #[derive(Debug, Deserialize)]
    pub struct Snapshot {
        pub couriers: Vec<IOCourier>,
        pub orders: Vec<IOOrder>,
    }

    #[derive(Debug, Deserialize)]
    pub struct IOCourier {
        pub courier_id: Id,
        pub location_x: i64,
        pub location_y: i64,
    }

    #[derive(Debug, Deserialize)]
    pub struct IOOrder {
        pub order_id: Id,
        pub pickup_point_id: Id,
        pub pickup_location_x: i64,
        pub pickup_location_y: i64,
        pub pickup_from: Time,
        pub pickup_to: Time,
        pub dropoff_point_id: Id,
        pub dropoff_location_x: i64,
        pub dropoff_location_y: i64,
        pub dropoff_from: Time,
        pub dropoff_to: Time,
        /// integer or float in the snapshot
        pub payment: f64,
    }
}

impl From<json::IOCourier> for Courier {
    fn from(it: json::IOCourier) -> Self {
        Courier {
            id: it.courier_id,
            location: Location::new(it.location_x, it.location_y),
        }
    }
}

impl From<json::IOOrder> for Order {
    fn from(it: json::IOOrder) -> Self {
        Order {
            id: it.order_id,
            pickup: Stop {
                point_id: it.pickup_point_id,
                location: Location::new(it.pickup_location_x, it.pickup_location_y),
                window: TimeWindow::new(it.pickup_from, it.pickup_to),
            },
            dropoff: Stop {
                point_id: it.dropoff_point_id,
                location: Location::new(it.dropoff_location_x, it.dropoff_location_y),
                window: TimeWindow::new(it.dropoff_from, it.dropoff_to),
            },
            payment: it.payment,
        }
    }
}

pub fn parse_instance(name: impl Into<String>, s: &str) -> anyhow::Result<DispatchInstance> {
    let name = name.into();
    let snapshot: json::Snapshot =
        serde_json::from_str(s).with_context(|| format!("malformed snapshot {}", name))?;
    let couriers = snapshot.couriers.into_iter().map(Courier::from).collect();
    let orders = snapshot.orders.into_iter().map(Order::from).collect();
    create_instance_with(name, couriers, orders)
}

pub fn load_instance(
    name: impl Into<String>,
    path: impl Into<String>,
) -> anyhow::Result<DispatchInstance> {
    let path = path.into();
    let mut s = String::new();
    File::open(&path)
        .with_context(|| format!("cannot open snapshot {}", path))?
        .read_to_string(&mut s)?;
    let instance = parse_instance(name, s.as_str())?;
    info!(
        "read {} couriers and {} orders from {}",
        instance.num_couriers(),
        instance.num_orders(),
        path
    );
    Ok(instance)
}
