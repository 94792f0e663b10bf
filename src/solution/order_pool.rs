use fixedbitset::FixedBitSet;

use crate::problem::dispatch::DispatchInstance;

/// stores the indices of orders that are still available
#[derive(Clone, Debug)]
pub struct OrderPool {
    orders: FixedBitSet,
}

impl OrderPool {
    pub fn with_instance(instance: &DispatchInstance) -> Self {
        let mut orders = FixedBitSet::with_capacity(instance.num_orders());
        orders.set_range(.., true);
        Self { orders }
    }

    pub fn iter_order_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.orders.ones()
    }
}

impl OrderPool {
    pub fn remove(&mut self, order: usize) {
        debug_assert!(self.contains(order), "order {} taken twice", order);
        self.orders.set(order, false)
    }
    pub fn contains(&self, order: usize) -> bool {
        self.orders.contains(order)
    }
    pub fn count(&self) -> usize {
        self.orders.count_ones(..)
    }
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

#[cfg(test)]
mod tests {
    use crate::problem::dispatch::create_instance_with;
    use crate::problem::dispatch::tests::order;

    use super::*;

    #[test]
    fn removal_is_visible_to_iteration() -> anyhow::Result<()> {
        let instance = create_instance_with(
            "pool",
            vec![],
            (0..4)
                .map(|i| order(i, (0, 0, 0, 100), (0, 0, 0, 100), 1.0))
                .collect(),
        )?;
        let mut pool = OrderPool::with_instance(&instance);
        assert_eq!(pool.count(), 4);
        pool.remove(2);
        assert!(!pool.contains(2));
        assert_eq!(pool.iter_order_ids().collect::<Vec<_>>(), vec![0, 1, 3]);
        pool.remove(0);
        pool.remove(1);
        pool.remove(3);
        assert!(pool.is_empty());
        Ok(())
    }
}
