//! Integration tests for catalog enumeration
//!
//! Exercise the public cursor contract: ordering, independence of cursors,
//! idempotent termination and the null-safe accessors.

use std::collections::HashSet;

use dc_descriptor::{
    capabilities, descriptor_iterator, descriptors, release, transport, DcError, DcIterator,
    Descriptor, DescriptorHandle, DescriptorIterator, Family, Query, Status, Transport,
};

// ============================================================================
// Test Helpers
// ============================================================================

mod helpers {
    use super::*;

    /// Drain a cursor, returning everything it produced
    pub fn drain<I: DcIterator>(cursor: &mut I) -> Vec<I::Item> {
        let mut items = Vec::new();
        while let Some(item) = cursor.advance().expect("catalog cursor never fails") {
            items.push(item);
        }
        items
    }

    pub fn find(vendor: &str, product: &str) -> Option<&'static Descriptor> {
        descriptors().find(|d| d.vendor() == vendor && d.product() == product)
    }
}

// ============================================================================
// Enumeration
// ============================================================================

#[test]
fn fresh_cursor_yields_whole_catalog_once() {
    let mut cursor = DescriptorIterator::new();
    let items = helpers::drain(&mut cursor);

    assert_eq!(items.len(), descriptors().count());

    // Same entry never yielded twice
    let addresses: HashSet<*const Descriptor> = items.iter().map(|d| *d as *const _).collect();
    assert_eq!(addresses.len(), items.len());
}

#[test]
fn second_cursor_yields_identical_sequence() {
    let first = helpers::drain(&mut DescriptorIterator::new());
    let second = helpers::drain(&mut DescriptorIterator::new());

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert!(std::ptr::eq(*a, *b));
    }
}

#[test]
fn done_is_sticky() {
    let mut cursor = DescriptorIterator::new();
    helpers::drain(&mut cursor);

    for _ in 0..100 {
        let result = cursor.advance();
        assert_eq!(Status::of(&result), Status::Done);
    }
}

#[test]
fn slot_creation_and_release() {
    assert_eq!(descriptor_iterator(None), Err(DcError::InvalidArgs));

    let mut slot = None;
    descriptor_iterator(Some(&mut slot)).unwrap();
    let mut cursor = slot.take().unwrap();
    assert!(cursor.advance().unwrap().is_some());

    release(Some(cursor));
    release(slot);
}

#[test]
fn release_never_advanced_cursor() {
    release(Some(DescriptorIterator::new()));
}

#[test]
fn cursors_work_across_threads() {
    let expected = descriptors().count();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| helpers::drain(&mut DescriptorIterator::new()).len()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn std_iterator_bridge_matches_cursor() {
    let via_items: Vec<_> = DescriptorIterator::new()
        .items()
        .collect::<Result<_, _>>()
        .unwrap();
    let via_cursor = helpers::drain(&mut DescriptorIterator::new());
    assert_eq!(via_items, via_cursor);
}

// ============================================================================
// Catalog content
// ============================================================================

#[test]
fn every_entry_is_well_formed() {
    for d in descriptors() {
        assert!(!d.vendor().is_empty());
        assert!(!d.product().is_empty());
        assert!(Family::ALL.contains(&d.family()));
        assert_eq!(d.serial(), 0);
    }
}

#[test]
fn suunto_vyper_scenario() {
    let vyper = helpers::find("Suunto", "Vyper").unwrap();
    let handle = Some(vyper);

    assert_eq!(handle.model(), 10);
    assert_eq!(handle.family(), Family::SuuntoVyper);
    assert_eq!(transport(handle), Transport::Serial);
}

#[test]
fn eon_steel_entries_use_usb_hid() {
    let eon_steel: Vec<_> = descriptors()
        .filter(|d| d.family() == Family::SuuntoEonSteel)
        .collect();

    assert_eq!(eon_steel.is_empty(), !capabilities().usb_hid);
    for d in eon_steel {
        assert_eq!(d.transport(), Transport::UsbHid);
    }
}

#[test]
fn gated_entries_need_their_backend() {
    let caps = capabilities();
    for d in descriptors() {
        assert!(caps.supports(d.transport()), "{} {}", d.vendor(), d.product());
    }
}

#[test]
fn transport_table() {
    assert_eq!(Family::AtomicsCobalt.transport(), Transport::Usb);
    assert_eq!(Family::SuuntoEonSteel.transport(), Transport::UsbHid);
    assert_eq!(Family::UwatecG2.transport(), Transport::UsbHid);
    assert_eq!(Family::UwatecSmart.transport(), Transport::Irda);
    assert_eq!(Family::SuuntoVyper.transport(), Transport::Serial);
}

#[test]
fn null_handle_defaults() {
    let handle: Option<&Descriptor> = None;

    assert_eq!(handle.vendor(), None);
    assert_eq!(handle.product(), None);
    assert_eq!(handle.family(), Family::Null);
    assert_eq!(handle.model(), 0);
    assert_eq!(handle.serial(), 0);
    assert_eq!(handle.transport(), Transport::None);
}

#[test]
fn search_finds_vyper() {
    let vyper = dc_descriptor::search(Query::by_name("Suunto Vyper"))
        .unwrap()
        .unwrap();
    assert_eq!(vyper.model(), 0x0A);
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn family() -> impl Strategy<Value = Family> {
        prop::sample::select(Family::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn advancing_past_the_end_stays_done(extra in 0usize..50) {
            let total = descriptors().count();
            let mut cursor = DescriptorIterator::new();

            for _ in 0..total {
                prop_assert!(cursor.advance().unwrap().is_some());
            }
            for _ in 0..=extra {
                prop_assert_eq!(cursor.advance(), Ok(None));
            }
        }

        #[test]
        fn cursors_progress_independently(steps in prop::collection::vec(any::<bool>(), 0..400)) {
            let mut a = DescriptorIterator::new();
            let mut b = DescriptorIterator::new();
            let mut seen_a = Vec::new();
            let mut seen_b = Vec::new();

            // Interleave advances in an arbitrary order
            for step in steps {
                if step {
                    if let Some(d) = a.advance().unwrap() {
                        seen_a.push(d);
                    }
                } else if let Some(d) = b.advance().unwrap() {
                    seen_b.push(d);
                }
            }
            seen_a.extend(helpers::drain(&mut a));
            seen_b.extend(helpers::drain(&mut b));

            prop_assert_eq!(seen_a, seen_b);
        }

        #[test]
        fn transport_depends_only_on_family(family in family()) {
            let expected = family.transport();
            for d in descriptors().filter(|d| d.family() == family) {
                prop_assert_eq!(d.transport(), expected);
                prop_assert_eq!(transport(Some(d)), expected);
            }
        }

        #[test]
        fn family_filter_is_exhaustive(family in family()) {
            let mut cursor = DescriptorIterator::new().filter(|d| d.family() == family);
            let filtered = helpers::drain(&mut cursor);
            let expected: Vec<_> = descriptors().filter(|d| d.family() == family).collect();

            prop_assert_eq!(filtered, expected);
            prop_assert_eq!(cursor.advance(), Ok(None));
        }

        #[test]
        fn family_codes_round_trip(family in family()) {
            prop_assert_eq!(Family::from_code(family.code()), Ok(family));
        }
    }
}
