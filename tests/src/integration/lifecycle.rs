//! # Lifecycle Properties
//!
//! Whole-service tests for the registry's core guarantees:
//!
//! 1. **Serial uniqueness**: a serial is minted at most once, forever.
//! 2. **Id density**: ids count successful mints `0..N` with no holes,
//!    no matter how many attempts fail in between.
//! 3. **Issuer-only mutation**: nobody but the original issuer amends or
//!    deactivates an item, the authority included.
//! 4. **One-way deactivation**: a deactivated item never accepts updates.
//! 5. **Amendment freshness**: the amendment log answers with the latest
//!    successful update only.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use rand::Rng;

    use registry_core::prelude::*;

    use crate::integration::init_tracing;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const FEE: Amount = RegistryConfig::DEFAULT_ISSUER_FEE;

    fn issuer() -> Identity {
        Identity::new([0x11; 20])
    }

    fn authority() -> Identity {
        Identity::new([0xAA; 20])
    }

    fn stranger() -> Identity {
        Identity::new([0x99; 20])
    }

    fn ctx(height: Height) -> OperationContext {
        OperationContext::new(issuer(), height)
    }

    /// Create a mint request with sensible defaults for the given serial.
    fn mint_request(serial: &str, item_type: &str) -> MintRequest {
        MintRequest {
            metadata: format!("Item {serial}"),
            item_type: item_type.to_string(),
            expiry: 10_000,
            serial: serial.to_string(),
            location: "Depot 1".to_string(),
            category: "general".to_string(),
        }
    }

    /// Create a service with the authority configured and the issuer funded
    /// for `mint_budget` mints at the default fee.
    fn bootstrapped_service(
        mint_budget: u128,
    ) -> (
        RegistryService<InMemoryLedger, InMemoryEventLog>,
        Arc<InMemoryLedger>,
        Arc<InMemoryEventLog>,
    ) {
        init_tracing();
        let ledger = Arc::new(InMemoryLedger::new());
        ledger.credit(issuer(), FEE * mint_budget);
        let events = Arc::new(InMemoryEventLog::new());
        let mut service = RegistryService::new(
            RegistryConfig::new(),
            Arc::clone(&ledger),
            Arc::clone(&events),
        );
        service.set_authority(&ctx(0), authority()).unwrap();
        (service, ledger, events)
    }

    // =============================================================================
    // SERIAL UNIQUENESS
    // =============================================================================

    /// Test that a used serial can never be minted again, not even after
    /// the original item is deactivated.
    #[test]
    fn test_serials_are_unique_forever() {
        let (mut service, _ledger, _events) = bootstrapped_service(3);

        let id = service
            .mint_item(&ctx(1), mint_request("SERIAL123", "passport"))
            .unwrap();

        // Same serial, completely different fields: still rejected.
        let mut retry = mint_request("SERIAL123", "aid-kit");
        retry.metadata = "Different description".to_string();
        retry.category = "relief".to_string();
        assert_eq!(
            service.mint_item(&ctx(2), retry.clone()),
            Err(RegistryError::ItemAlreadyExists {
                serial: "SERIAL123".to_string()
            })
        );

        // Deactivation does not release the serial.
        service.deactivate_item(&ctx(3), id).unwrap();
        assert_eq!(
            service.mint_item(&ctx(4), retry),
            Err(RegistryError::ItemAlreadyExists {
                serial: "SERIAL123".to_string()
            })
        );
        assert!(service.is_item_registered("SERIAL123"));
    }

    /// Test serial uniqueness under a randomized sweep of colliding
    /// serials: every accepted mint is unique, every duplicate is rejected
    /// with `ItemAlreadyExists`, and the count matches the accepted set.
    #[test]
    fn test_random_serial_sweep_never_duplicates() {
        let (mut service, _ledger, _events) = bootstrapped_service(150);
        let mut rng = rand::thread_rng();
        let mut accepted: HashSet<String> = HashSet::new();

        for height in 1..=150u64 {
            // Two letters from a six-letter alphabet: collisions guaranteed.
            let serial: String = (0..2)
                .map(|_| char::from(rng.gen_range(b'A'..=b'F')))
                .collect();

            match service.mint_item(&ctx(height), mint_request(&serial, "document")) {
                Ok(_) => {
                    assert!(
                        accepted.insert(serial.clone()),
                        "serial {serial} was accepted twice"
                    );
                }
                Err(RegistryError::ItemAlreadyExists { serial: taken }) => {
                    assert!(
                        accepted.contains(&taken),
                        "serial {taken} rejected as duplicate without a prior mint"
                    );
                }
                Err(other) => panic!("unexpected rejection: {other}"),
            }
        }

        assert_eq!(service.item_count(), accepted.len() as u64);
    }

    // =============================================================================
    // ID DENSITY
    // =============================================================================

    /// Test that ids stay dense through failed attempts: N successful
    /// mints yield ids `0..N` and a count of N, with failures leaving no
    /// holes behind.
    #[test]
    fn test_ids_stay_dense_through_failures() {
        let (mut service, _ledger, _events) = bootstrapped_service(5);

        assert_eq!(
            service.mint_item(&ctx(1), mint_request("S-0", "passport")),
            Ok(ItemId::new(0))
        );

        // Failure between successes: invalid metadata.
        let mut bad = mint_request("S-BAD", "passport");
        bad.metadata = String::new();
        assert_eq!(
            service.mint_item(&ctx(2), bad),
            Err(RegistryError::InvalidMetadata { length: 0 })
        );

        assert_eq!(
            service.mint_item(&ctx(3), mint_request("S-1", "visa")),
            Ok(ItemId::new(1))
        );

        // Failure between successes: duplicate serial.
        assert_eq!(
            service.mint_item(&ctx(4), mint_request("S-0", "visa")),
            Err(RegistryError::ItemAlreadyExists {
                serial: "S-0".to_string()
            })
        );

        assert_eq!(
            service.mint_item(&ctx(5), mint_request("S-2", "aid-kit")),
            Ok(ItemId::new(2))
        );

        assert_eq!(service.item_count(), 3);
        for n in 0..3 {
            assert!(service.get_item(ItemId::new(n)).is_some(), "id {n} missing");
        }
        assert!(service.get_item(ItemId::new(3)).is_none());
    }

    // =============================================================================
    // ISSUER-ONLY MUTATION
    // =============================================================================

    /// Test that update and deactivate reject every caller except the
    /// original issuer, even after the metadata mentions someone else and
    /// even for the authority itself.
    #[test]
    fn test_only_the_issuer_may_update_or_deactivate() {
        let (mut service, _ledger, _events) = bootstrapped_service(1);
        let id = service
            .mint_item(&ctx(1), mint_request("S-0", "passport"))
            .unwrap();

        let update = UpdateRequest {
            metadata: "amended".to_string(),
            expiry: 10_000,
            location: "Depot 2".to_string(),
        };
        let as_stranger = OperationContext::new(stranger(), 2);
        assert_eq!(
            service.update_item(&as_stranger, id, update.clone()),
            Err(RegistryError::Unauthorized { caller: stranger() })
        );
        assert_eq!(
            service.deactivate_item(&as_stranger, id),
            Err(RegistryError::Unauthorized { caller: stranger() })
        );

        // Handing the item over in prose changes nothing about authorship.
        let handover = UpdateRequest {
            metadata: format!("Held by {}", stranger()),
            expiry: 10_000,
            location: "Depot 2".to_string(),
        };
        service.update_item(&ctx(3), id, handover).unwrap();
        assert_eq!(
            service.update_item(&as_stranger, id, update.clone()),
            Err(RegistryError::Unauthorized { caller: stranger() })
        );

        // The authority collects fees; it does not own the items.
        let as_authority = OperationContext::new(authority(), 4);
        assert_eq!(
            service.update_item(&as_authority, id, update),
            Err(RegistryError::Unauthorized {
                caller: authority()
            })
        );

        let record = service.get_item(id).unwrap();
        assert!(record.active);
        assert_eq!(record.issuer, issuer());
    }

    // =============================================================================
    // ONE-WAY DEACTIVATION
    // =============================================================================

    /// Test that no update ever succeeds on a deactivated item, at any
    /// later height.
    #[test]
    fn test_deactivation_permanently_blocks_updates() {
        let (mut service, _ledger, _events) = bootstrapped_service(1);
        let id = service
            .mint_item(&ctx(1), mint_request("S-0", "aid-kit"))
            .unwrap();
        service.deactivate_item(&ctx(2), id).unwrap();

        let update = UpdateRequest {
            metadata: "restock attempt".to_string(),
            expiry: 20_000,
            location: "Depot 9".to_string(),
        };
        assert_eq!(
            service.update_item(&ctx(3), id, update.clone()),
            Err(RegistryError::UpdateNotAllowed { id })
        );
        assert_eq!(
            service.update_item(&ctx(5_000), id, update.clone()),
            Err(RegistryError::UpdateNotAllowed { id })
        );

        // Re-deactivating does not somehow reopen the item.
        service.deactivate_item(&ctx(5_001), id).unwrap();
        assert_eq!(
            service.update_item(&ctx(5_002), id, update),
            Err(RegistryError::UpdateNotAllowed { id })
        );
    }

    // =============================================================================
    // AMENDMENT FRESHNESS
    // =============================================================================

    /// Test that after two successful updates the amendment log holds the
    /// second one and nothing of the first.
    #[test]
    fn test_amendment_log_reflects_latest_update_only() {
        let (mut service, _ledger, _events) = bootstrapped_service(1);
        let id = service
            .mint_item(&ctx(1), mint_request("S-0", "document"))
            .unwrap();

        service
            .update_item(
                &ctx(5),
                id,
                UpdateRequest {
                    metadata: "First revision".to_string(),
                    expiry: 20_000,
                    location: "Depot 2".to_string(),
                },
            )
            .unwrap();
        service
            .update_item(
                &ctx(9),
                id,
                UpdateRequest {
                    metadata: "Second revision".to_string(),
                    expiry: 30_000,
                    location: "Depot 3".to_string(),
                },
            )
            .unwrap();

        let amendment = service.get_item_updates(id).unwrap();
        assert_eq!(amendment.metadata, "Second revision");
        assert_eq!(amendment.expiry, 30_000);
        assert_eq!(amendment.location, "Depot 3");
        assert_eq!(amendment.updated_at, 9);
        assert_eq!(amendment.updated_by, issuer());

        // The record mirrors the latest amendment.
        let record = service.get_item(id).unwrap();
        assert_eq!(record.metadata, "Second revision");
        assert_eq!(record.expiry, 30_000);
        assert_eq!(record.location, "Depot 3");
    }

    // =============================================================================
    // TYPE INDEX & EVENTS
    // =============================================================================

    /// Test that the per-type index stays bounded under sustained minting
    /// and that evictions are surfaced through the status snapshot.
    #[test]
    fn test_type_index_eviction_is_counted_and_bounded() {
        let (mut service, _ledger, _events) = bootstrapped_service(101);

        for n in 0..=100u64 {
            service
                .mint_item(&ctx(n + 1), mint_request(&format!("KIT-{n}"), "aid-kit"))
                .unwrap();
        }

        let listed = service.get_items_by_type(ItemType::AidKit).unwrap();
        assert_eq!(listed.len(), limits::TYPE_INDEX_CAP);
        assert_eq!(listed[0], ItemId::new(1));
        assert_eq!(service.status().type_index_evictions, 1);

        // The evicted item is gone from the index, not from the registry.
        assert!(service.get_item(ItemId::new(0)).is_some());
        assert!(service.is_item_registered("KIT-0"));
    }

    /// Test that every committed mutation emits exactly one event, in
    /// commit order, and that failed operations emit nothing.
    #[test]
    fn test_every_commit_emits_exactly_one_event() {
        let (mut service, _ledger, events) = bootstrapped_service(3);

        let first = service
            .mint_item(&ctx(1), mint_request("S-0", "passport"))
            .unwrap();
        // Duplicate serial: rejected, no event.
        assert!(service
            .mint_item(&ctx(2), mint_request("S-0", "passport"))
            .is_err());
        let second = service
            .mint_item(&ctx(3), mint_request("S-1", "visa"))
            .unwrap();

        service
            .update_item(
                &ctx(4),
                first,
                UpdateRequest {
                    metadata: "amended".to_string(),
                    expiry: 20_000,
                    location: "Depot 2".to_string(),
                },
            )
            .unwrap();
        // Stranger update: rejected, no event.
        assert!(service
            .update_item(
                &OperationContext::new(stranger(), 5),
                second,
                UpdateRequest {
                    metadata: "hijack".to_string(),
                    expiry: 20_000,
                    location: "Elsewhere".to_string(),
                },
            )
            .is_err());

        service.deactivate_item(&ctx(6), second).unwrap();
        service.deactivate_item(&ctx(7), second).unwrap();

        assert_eq!(
            events.events(),
            vec![
                RegistryEvent::ItemMinted { id: first },
                RegistryEvent::ItemMinted { id: second },
                RegistryEvent::ItemUpdated { id: first },
                RegistryEvent::ItemDeactivated { id: second },
                RegistryEvent::ItemDeactivated { id: second },
            ]
        );
    }
}
