//! End-to-end tests of the registry against in-memory collaborators.
//!
//! One factory per supported gauge type, a shared controller, and a fresh
//! registry per test.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use stakeless_core::memory::{
    InMemoryGaugeAdder, InMemoryGaugeController, InMemoryGaugeFactory, InMemoryGauges,
};
use stakeless_core::StakelessGaugeRegistry;
use stakeless_protocols::{GaugeAddress, GaugeEvent, GaugeType, RegistryError, SupportedTypes};

const GAUGES_PER_TYPE: usize = 3;
const TEST_GAUGE_TYPE: GaugeType = GaugeType::Polygon;

// ============================================================================
// Test Helpers
// ============================================================================

struct World {
    gauges: Arc<InMemoryGauges>,
    controller: Arc<InMemoryGaugeController>,
    registry: StakelessGaugeRegistry,
    minted: HashMap<GaugeType, Vec<GaugeAddress>>,
}

impl World {
    fn new() -> Self {
        let gauges = Arc::new(InMemoryGauges::new());
        let controller = Arc::new(InMemoryGaugeController::new());
        let adder = Arc::new(InMemoryGaugeAdder::new(gauges.clone()));

        let mut minted = HashMap::new();
        for gauge_type in SupportedTypes::default().iter() {
            let factory = InMemoryGaugeFactory::new(gauges.clone());
            adder.add_gauge_factory(factory.id(), gauge_type).unwrap();
            minted.insert(gauge_type, factory.create_many(GAUGES_PER_TYPE));
        }

        let registry =
            StakelessGaugeRegistry::from_collaborators(controller.clone(), adder, gauges.clone());

        Self {
            gauges,
            controller,
            registry,
            minted,
        }
    }

    fn test_gauges(&self) -> Vec<GaugeAddress> {
        self.minted[&TEST_GAUGE_TYPE].clone()
    }

    fn add_to_controller(&self, gauge_type: GaugeType, gauges: &[GaugeAddress]) {
        for gauge in gauges {
            self.controller.add_gauge(gauge, gauge_type).unwrap();
        }
    }

    fn kill_all(&self, gauges: &[GaugeAddress]) {
        for gauge in gauges {
            self.gauges.kill_gauge(gauge).unwrap();
        }
    }

    async fn expect_gauges(&self, gauge_type: GaugeType, expected: &[GaugeAddress]) {
        assert_eq!(self.registry.total_gauges(gauge_type).await, expected.len());
        for (i, gauge) in expected.iter().enumerate() {
            assert_eq!(&self.registry.gauge_at(gauge_type, i).await.unwrap(), gauge);
        }
    }
}

// ============================================================================
// Add Gauges
// ============================================================================

#[tokio::test]
async fn test_add_with_invalid_gauge_type() {
    let world = World::new();
    let gauges = world.test_gauges();
    world.add_to_controller(TEST_GAUGE_TYPE, &gauges);

    for gauge_type in SupportedTypes::default().unsupported() {
        let err = world.registry.add_gauges(gauge_type, &gauges).await.unwrap_err();
        assert!(matches!(err, RegistryError::UnsupportedCategory { .. }));
        assert!(err.to_string().contains("Unsupported gauge type"));
    }
}

#[tokio::test]
async fn test_add_with_incorrect_factory() {
    let world = World::new();
    let gauges = world.test_gauges();

    let err = world
        .registry
        .add_gauges(GaugeType::Optimism, &gauges)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Gauge does not come from valid factory"));
}

#[tokio::test]
async fn test_add_with_correct_factory_and_missing_controller_entry() {
    let world = World::new();
    let gauges = world.test_gauges();

    let err = world
        .registry
        .add_gauges(TEST_GAUGE_TYPE, &gauges)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Gauge does not exist in controller"));
}

#[tokio::test]
async fn test_add_only_touches_requested_type() {
    let world = World::new();
    let gauges = world.test_gauges();
    world.add_to_controller(TEST_GAUGE_TYPE, &gauges);
    let mut rx = world.registry.subscribe();

    world.registry.add_gauges(TEST_GAUGE_TYPE, &gauges).await.unwrap();

    assert_eq!(
        rx.recv().await.unwrap(),
        GaugeEvent::GaugesAdded {
            gauge_type: TEST_GAUGE_TYPE,
            gauges: gauges.clone(),
        }
    );
    world.expect_gauges(TEST_GAUGE_TYPE, &gauges).await;
    for gauge_type in SupportedTypes::default().iter() {
        if gauge_type != TEST_GAUGE_TYPE {
            world.expect_gauges(gauge_type, &[]).await;
        }
    }
}

#[tokio::test]
async fn test_add_when_one_gauge_was_killed() {
    let world = World::new();
    let gauges = world.test_gauges();
    world.add_to_controller(TEST_GAUGE_TYPE, &gauges);
    world.gauges.kill_gauge(&gauges[0]).unwrap();

    let err = world
        .registry
        .add_gauges(TEST_GAUGE_TYPE, &gauges)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Gauge was killed"));
    world.expect_gauges(TEST_GAUGE_TYPE, &[]).await;
}

#[tokio::test]
async fn test_add_when_gauge_already_present() {
    let world = World::new();
    let gauges = world.test_gauges();
    world.add_to_controller(TEST_GAUGE_TYPE, &gauges);
    world.registry.add_gauges(TEST_GAUGE_TYPE, &gauges).await.unwrap();

    let err = world
        .registry
        .add_gauges(TEST_GAUGE_TYPE, &gauges)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Gauge already present"));
}

#[tokio::test]
async fn test_add_each_supported_type() {
    let world = World::new();
    for (gauge_type, gauges) in &world.minted {
        world.add_to_controller(*gauge_type, gauges);
        world.registry.add_gauges(*gauge_type, gauges).await.unwrap();
    }

    for (gauge_type, gauges) in &world.minted {
        world.expect_gauges(*gauge_type, gauges).await;
    }
}

// ============================================================================
// Remove Gauges
// ============================================================================

async fn registered_world() -> (World, Vec<GaugeAddress>) {
    let world = World::new();
    let gauges = world.test_gauges();
    world.add_to_controller(TEST_GAUGE_TYPE, &gauges);
    world.registry.add_gauges(TEST_GAUGE_TYPE, &gauges).await.unwrap();
    (world, gauges)
}

#[tokio::test]
async fn test_remove_gauges_that_were_not_killed() {
    let (world, gauges) = registered_world().await;

    let err = world
        .registry
        .remove_gauges(TEST_GAUGE_TYPE, &gauges)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Gauge was not killed"));
    world.expect_gauges(TEST_GAUGE_TYPE, &gauges).await;
}

#[tokio::test]
async fn test_remove_killed_gauges() {
    let (world, gauges) = registered_world().await;
    world.kill_all(&gauges);
    let mut rx = world.registry.subscribe();

    assert_eq!(world.registry.total_gauges(TEST_GAUGE_TYPE).await, GAUGES_PER_TYPE);
    world
        .registry
        .remove_gauges(TEST_GAUGE_TYPE, &gauges)
        .await
        .unwrap();

    assert_eq!(
        rx.recv().await.unwrap(),
        GaugeEvent::GaugesRemoved {
            gauge_type: TEST_GAUGE_TYPE,
            gauges: gauges.clone(),
        }
    );
    assert_eq!(world.registry.total_gauges(TEST_GAUGE_TYPE).await, 0);
}

#[tokio::test]
async fn test_remove_gauges_not_present() {
    let (world, gauges) = registered_world().await;
    world.kill_all(&gauges);

    let err = world
        .registry
        .remove_gauges(GaugeType::Optimism, &gauges)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Gauge not present"));
}

#[tokio::test]
async fn test_kill_one_then_remove_it() {
    let (world, gauges) = registered_world().await;
    world.gauges.kill_gauge(&gauges[0]).unwrap();
    let mut rx = world.registry.subscribe();

    world
        .registry
        .remove_gauges(TEST_GAUGE_TYPE, &gauges[..1])
        .await
        .unwrap();

    assert_eq!(
        rx.recv().await.unwrap(),
        GaugeEvent::GaugesRemoved {
            gauge_type: TEST_GAUGE_TYPE,
            gauges: vec![gauges[0].clone()],
        }
    );
    assert_eq!(world.registry.total_gauges(TEST_GAUGE_TYPE).await, 2);

    let remaining: HashSet<_> = world
        .registry
        .gauges(TEST_GAUGE_TYPE)
        .await
        .into_iter()
        .collect();
    let expected: HashSet<_> = gauges[1..].iter().cloned().collect();
    assert_eq!(remaining, expected);
}
