use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::WorkOrderId;
use domain::{DomainError, WorkOrder, WorkOrderPort, WorkOrderStatus};
use tokio::sync::RwLock;

/// In-memory work-order store.
///
/// Keeps aggregates in a map keyed by id, mirroring the document-store
/// layout of the production adapter. Status lookups return results in
/// ascending creation-time order, matching the secondary index there.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkOrderStore {
    orders: Arc<RwLock<HashMap<WorkOrderId, WorkOrder>>>,
}

impl InMemoryWorkOrderStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored work orders.
    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }

    /// Removes every stored work order.
    pub async fn clear(&self) {
        self.orders.write().await.clear();
    }
}

#[async_trait]
impl WorkOrderPort for InMemoryWorkOrderStore {
    async fn create(&self, work_order: &WorkOrder) -> Result<(), DomainError> {
        let mut orders = self.orders.write().await;
        // Put semantics: a second create for the same id replaces the document.
        orders.insert(work_order.id().clone(), work_order.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &WorkOrderId) -> Result<Option<WorkOrder>, DomainError> {
        let orders = self.orders.read().await;
        Ok(orders.get(id).cloned())
    }

    async fn find_all_by_status(
        &self,
        status: WorkOrderStatus,
    ) -> Result<Vec<WorkOrder>, DomainError> {
        let orders = self.orders.read().await;
        let mut matching: Vec<WorkOrder> = orders
            .values()
            .filter(|order| order.status() == status)
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().as_str().cmp(b.id().as_str()))
        });
        Ok(matching)
    }

    async fn update_status(
        &self,
        id: &WorkOrderId,
        status: WorkOrderStatus,
    ) -> Result<(), DomainError> {
        let mut orders = self.orders.write().await;
        // Silently a no-op for an absent id, like the conditional write it mirrors.
        if let Some(order) = orders.get_mut(id) {
            order.update_status(status);
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &WorkOrderId) -> Result<(), DomainError> {
        let mut orders = self.orders.write().await;
        orders.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use domain::WorkOrderItem;

    use super::*;

    fn work_order(id: &str) -> WorkOrder {
        WorkOrder::create(
            WorkOrderId::new(id),
            format!("ORD-{id}"),
            vec![WorkOrderItem::new("Burger", 1)],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn stores_and_loads_by_id() {
        let store = InMemoryWorkOrderStore::new();
        let order = work_order("o1");

        store.create(&order).await.unwrap();

        let loaded = store.find_by_id(&WorkOrderId::new("o1")).await.unwrap();
        assert_eq!(loaded, Some(order));
        assert_eq!(store.order_count().await, 1);
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_an_unknown_id() {
        let store = InMemoryWorkOrderStore::new();
        let loaded = store.find_by_id(&WorkOrderId::new("missing")).await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn status_lookup_returns_ascending_creation_time() {
        let store = InMemoryWorkOrderStore::new();
        let first = work_order("o1");
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = work_order("o2");

        // Insert newest first to show the lookup sorts.
        store.create(&second).await.unwrap();
        store.create(&first).await.unwrap();

        let listed = store
            .find_all_by_status(WorkOrderStatus::Received)
            .await
            .unwrap();
        let ids: Vec<&str> = listed.iter().map(|order| order.id().as_str()).collect();
        assert_eq!(ids, vec!["o1", "o2"]);
    }

    #[tokio::test]
    async fn status_lookup_filters_by_status() {
        let store = InMemoryWorkOrderStore::new();
        store.create(&work_order("o1")).await.unwrap();
        store.create(&work_order("o2")).await.unwrap();
        store
            .update_status(&WorkOrderId::new("o2"), WorkOrderStatus::Preparing)
            .await
            .unwrap();

        let received = store
            .find_all_by_status(WorkOrderStatus::Received)
            .await
            .unwrap();
        let preparing = store
            .find_all_by_status(WorkOrderStatus::Preparing)
            .await
            .unwrap();

        assert_eq!(received.len(), 1);
        assert_eq!(received[0].id().as_str(), "o1");
        assert_eq!(preparing.len(), 1);
        assert_eq!(preparing[0].id().as_str(), "o2");
    }

    #[tokio::test]
    async fn update_status_refreshes_the_update_timestamp() {
        let store = InMemoryWorkOrderStore::new();
        let order = work_order("o1");
        let created_at = order.created_at();
        store.create(&order).await.unwrap();

        std::thread::sleep(std::time::Duration::from_millis(2));
        store
            .update_status(&WorkOrderId::new("o1"), WorkOrderStatus::Ready)
            .await
            .unwrap();

        let loaded = store
            .find_by_id(&WorkOrderId::new("o1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded.status(), WorkOrderStatus::Ready);
        assert_eq!(loaded.created_at(), created_at);
        assert!(loaded.updated_at() > created_at);
    }

    #[tokio::test]
    async fn update_status_silently_ignores_an_unknown_id() {
        let store = InMemoryWorkOrderStore::new();

        store
            .update_status(&WorkOrderId::new("missing"), WorkOrderStatus::Ready)
            .await
            .unwrap();

        assert_eq!(store.order_count().await, 0);
    }

    #[tokio::test]
    async fn delete_removes_the_entry_and_tolerates_unknown_ids() {
        let store = InMemoryWorkOrderStore::new();
        store.create(&work_order("o1")).await.unwrap();

        store.delete_by_id(&WorkOrderId::new("o1")).await.unwrap();
        store.delete_by_id(&WorkOrderId::new("o1")).await.unwrap();

        assert_eq!(store.order_count().await, 0);
    }

    #[tokio::test]
    async fn create_replaces_an_existing_document() {
        let store = InMemoryWorkOrderStore::new();
        store.create(&work_order("o1")).await.unwrap();

        let replacement = WorkOrder::create(
            WorkOrderId::new("o1"),
            "ORD-replacement",
            vec![WorkOrderItem::new("Fries", 3)],
        )
        .unwrap();
        store.create(&replacement).await.unwrap();

        let loaded = store
            .find_by_id(&WorkOrderId::new("o1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded.order_number(), "ORD-replacement");
        assert_eq!(store.order_count().await, 1);
    }
}
