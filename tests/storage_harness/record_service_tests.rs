//! Macro-generated test suite for `RecordService<Invoice>` contract validation.
//!
//! The `record_service_tests!` macro generates a test module that validates
//! any `RecordService<Invoice>` implementation against the full contract:
//! CRUD operations, partial updates, the latest-record query, rejection of
//! invalid records, and concurrent access.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use erp_admin::storage::InMemoryRecordService;
//!
//! record_service_tests!(async { InMemoryRecordService::<Invoice>::new() });
//! ```
//!
//! `$factory` must be a future resolving to a `RecordService<Invoice>` that
//! is also `Clone + 'static`. It is awaited once per test so every test starts
//! from an empty store.

macro_rules! record_service_tests {
    ($factory:expr) => {
        mod record_service_contract_tests {
            use super::*;
            use erp_admin::core::RecordService;
            use erp_admin::entities::InvoiceStatus;
            use rust_decimal::Decimal;
            use serde_json::json;

            // ==================================================================
            // Create & Get
            // ==================================================================

            #[tokio::test]
            async fn test_create_and_get() {
                let service = $factory.await;

                let created = service.create(invoice("INV-2025-001", 250)).await.unwrap();
                let id = created.id.expect("store assigns an id");
                assert_eq!(created.invoice_number, "INV-2025-001");
                assert_eq!(created.total_amount, Decimal::new(250, 0));

                let fetched = service.get(id).await.unwrap().expect("record exists");
                assert_eq!(fetched.id, Some(id));
                assert_eq!(fetched.invoice_number, "INV-2025-001");
                assert_eq!(fetched.status, InvoiceStatus::Unpaid);
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let service = $factory.await;
                assert!(service.get(4040).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_create_invalid_rejected() {
                let service = $factory.await;
                let mut bad = invoice("INV-2025-001", 10);
                bad.total_amount = Decimal::new(-10, 0);

                assert!(service.create(bad).await.is_err());
                assert_count(&service.list().await.unwrap(), 0);
            }

            // ==================================================================
            // List
            // ==================================================================

            #[tokio::test]
            async fn test_list_empty() {
                let service = $factory.await;
                assert_count(&service.list().await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_list_multiple() {
                let service = $factory.await;
                for record in invoice_batch(3) {
                    service.create(record).await.unwrap();
                }

                let all = service.list().await.unwrap();
                assert_count(&all, 3);
                assert_numbers(&all, &["INV-2025-001", "INV-2025-002", "INV-2025-003"]);
            }

            // ==================================================================
            // Update & Patch
            // ==================================================================

            #[tokio::test]
            async fn test_update_existing() {
                let service = $factory.await;
                let created = service.create(invoice("INV-2025-001", 100)).await.unwrap();
                let id = created.id.unwrap();

                let mut changed = created.clone();
                changed.total_amount = Decimal::new(175, 0);
                changed.notes = Some("revised".to_string());
                let updated = service.update(id, changed).await.unwrap();

                assert_eq!(updated.total_amount, Decimal::new(175, 0));
                let fetched = service.get(id).await.unwrap().unwrap();
                assert_eq!(fetched.notes.as_deref(), Some("revised"));
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let service = $factory.await;
                let err = service
                    .update(4040, invoice("INV-2025-001", 100))
                    .await
                    .unwrap_err();
                assert!(err.is_not_found(), "unexpected error: {err:?}");
            }

            #[tokio::test]
            async fn test_patch_status() {
                let service = $factory.await;
                let created = service.create(invoice("INV-2025-001", 100)).await.unwrap();
                let id = created.id.unwrap();

                let patched = service.patch(id, json!({ "status": "paid" })).await.unwrap();
                assert_eq!(patched.status, InvoiceStatus::Paid);
                assert_eq!(patched.invoice_number, "INV-2025-001");

                let fetched = service.get(id).await.unwrap().unwrap();
                assert_eq!(fetched.status, InvoiceStatus::Paid);
            }

            // ==================================================================
            // Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_existing() {
                let service = $factory.await;
                let created = service.create(invoice("INV-2025-001", 100)).await.unwrap();
                let id = created.id.unwrap();

                service.delete(id).await.unwrap();
                assert!(service.get(id).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_delete_nonexistent() {
                let service = $factory.await;
                let err = service.delete(4040).await.unwrap_err();
                assert!(err.is_not_found(), "unexpected error: {err:?}");
            }

            // ==================================================================
            // Latest
            // ==================================================================

            #[tokio::test]
            async fn test_latest_empty() {
                let service = $factory.await;
                assert!(service.latest().await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_latest_is_most_recent() {
                let service = $factory.await;
                for record in invoice_batch(4) {
                    service.create(record).await.unwrap();
                }

                let latest = service.latest().await.unwrap().unwrap();
                assert_eq!(latest.invoice_number, "INV-2025-004");
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_access() {
                let service = $factory.await;
                let s1 = service.clone();
                let s2 = service.clone();

                let h1 = tokio::spawn(async move {
                    s1.create(invoice("INV-2025-101", 1)).await.unwrap()
                });
                let h2 = tokio::spawn(async move {
                    s2.create(invoice("INV-2025-102", 2)).await.unwrap()
                });

                let a = h1.await.unwrap();
                let b = h2.await.unwrap();
                assert_ne!(a.id, b.id);
                assert_count(&service.list().await.unwrap(), 2);
            }
        }
    };
}
